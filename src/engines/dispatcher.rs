// Normalizes a resource descriptor's type to a canonical service tag,
// validates required fields and the region gate, then routes to the
// estimator registered for that tag.

use crate::engines::estimators;
use crate::engines::pricing::client::{self, PricingClient};
use crate::engines::shared::error_model::{PricingError, Result};
use crate::engines::shared::models::{CostResponse, ResourceDescriptor};

const SUPPORTED_PROVIDER: &str = "aws";

/// Lower-cases a short tag, or derives one from a qualified declarative
/// identifier such as `aws:elasticache/cluster:Cluster` (Pulumi-style,
/// slash notation) or `AWS::EC2::Instance` (CloudFormation-style, double
/// colons). Both forms carry the service namespace in their second
/// segment; EC2's three sibling namespaces (instances, volumes, NAT
/// gateways) are disambiguated by the resource-kind segment that follows.
pub fn canonical_tag(resource_type: &str) -> Option<String> {
    let lowered = resource_type.to_ascii_lowercase();

    if let Some(rest) = lowered.strip_prefix("aws::") {
        let namespace = rest.split("::").next().unwrap_or(rest);
        let kind = rest.split("::").nth(1).unwrap_or("");
        return Some(disambiguate(namespace, kind));
    }
    if let Some(rest) = lowered.strip_prefix("aws:") {
        let namespace = rest.split('/').next().unwrap_or(rest);
        let kind = rest.split('/').nth(1).and_then(|s| s.split(':').next()).unwrap_or("");
        return Some(disambiguate(namespace, kind));
    }
    if !lowered.is_empty() {
        return Some(lowered);
    }
    None
}

fn disambiguate(namespace: &str, kind: &str) -> String {
    if namespace == "ec2" {
        return match kind {
            "volume" => "ebs".to_string(),
            "natgateway" => "natgateway".to_string(),
            _ => "ec2".to_string(),
        };
    }
    namespace.to_string()
}

fn validate(descriptor: &ResourceDescriptor) -> Result<()> {
    if descriptor.provider.is_empty() {
        return Err(PricingError::invalid_resource("provider is required"));
    }
    if descriptor.provider != SUPPORTED_PROVIDER {
        return Err(PricingError::invalid_resource(format!(
            "unsupported provider {} (only {SUPPORTED_PROVIDER} is recognized)",
            descriptor.provider
        )));
    }
    if descriptor.resource_type.is_empty() {
        return Err(PricingError::invalid_resource("resource_type is required"));
    }
    if descriptor.region.is_empty() {
        return Err(PricingError::invalid_resource("region is required"));
    }
    Ok(())
}

fn check_region(descriptor: &ResourceDescriptor, plugin_region: &str) -> Result<()> {
    if descriptor.region != plugin_region {
        return Err(PricingError::unsupported_region(plugin_region, descriptor.region.clone()));
    }
    Ok(())
}

/// Validates the descriptor, checks the region gate, and resolves its
/// canonical service tag and the process-wide pricing client. Shared by
/// `dispatch` and by the external interface surface (`Supports`,
/// `GetRecommendations`, `GetPricingSpec`) so they apply the same gate.
pub fn resolve(descriptor: &ResourceDescriptor) -> Result<(String, &'static dyn PricingClient)> {
    validate(descriptor)?;
    let pricing_client: &dyn PricingClient = client::client()?;
    check_region(descriptor, pricing_client.region())?;
    let tag = canonical_tag(&descriptor.resource_type).unwrap_or_default();
    Ok((tag, pricing_client))
}

/// Dispatches a validated, region-checked descriptor to its estimator.
/// Returns the canonical tag alongside the response so callers (the
/// enricher, in particular) don't need to re-derive it.
pub fn dispatch(descriptor: &ResourceDescriptor) -> Result<(String, CostResponse)> {
    let (tag, pricing_client) = resolve(descriptor)?;
    let response = match tag.as_str() {
        "ec2" => estimators::compute::estimate(descriptor, pricing_client)?,
        "ebs" => estimators::volume::estimate(descriptor, pricing_client)?,
        "s3" => estimators::object_storage::estimate(descriptor, pricing_client)?,
        "rds" => estimators::database::estimate(descriptor, pricing_client)?,
        "eks" => estimators::container_cluster::estimate(descriptor, pricing_client)?,
        "lambda" => estimators::serverless::estimate(descriptor, pricing_client)?,
        "dynamodb" => estimators::key_value::estimate(descriptor, pricing_client)?,
        "elb" => estimators::load_balancer::estimate(descriptor, pricing_client)?,
        "natgateway" => estimators::nat_gateway::estimate(descriptor, pricing_client)?,
        "cloudwatch" => estimators::metrics_logs::estimate(descriptor, pricing_client)?,
        "elasticache" => estimators::cache::estimate(descriptor, pricing_client)?,
        _ => CostResponse::zero_cost(format!("resource type {} is not implemented", descriptor.resource_type)),
    };
    Ok((tag, response))
}
