// The plugin's contribution to the RPC surface the host SDK exposes.
// See `src/bin/plugin.rs` for the transport stand-in that drives these.

use crate::engines::pricing::classification;
use crate::engines::shared::error_model::Result;
use crate::engines::shared::models::{CostResponse, PricingSpec, Recommendation, ResourceDescriptor};
use crate::engines::{dispatcher, enricher, recommender};

pub const PLUGIN_NAME: &str = "aws-public";

/// Returns the constant plugin identifier.
pub fn name() -> &'static str {
    PLUGIN_NAME
}

/// Reports whether a descriptor's service is supported by this build,
/// with a diagnostic reason either way.
pub fn supports(descriptor: &ResourceDescriptor) -> (bool, String) {
    match dispatcher::resolve(descriptor) {
        Ok((tag, _)) if classification::lookup(&tag).is_some() => (true, format!("{tag} is supported")),
        Ok((tag, _)) => (
            true,
            format!("{tag} has limited support — returns zero-cost estimate"),
        ),
        Err(err) => (false, err.message),
    }
}

/// Computes the projected monthly cost for a descriptor, fully enriched.
pub fn get_projected_cost(descriptor: &ResourceDescriptor) -> Result<CostResponse> {
    let (tag, mut response) = dispatcher::dispatch(descriptor)?;
    enricher::enrich(&tag, descriptor, &mut response);
    Ok(response)
}

/// Approximates an actual cost from observed runtime and a previously
/// computed projection's `unit_price`. Not implemented by the core;
/// the SDK may call this as a fallback. Exposed here as a free function
/// so the transport stand-in has something concrete to call.
pub fn get_actual_cost_fallback(runtime_hours: f64, unit_price: f64) -> f64 {
    runtime_hours * unit_price
}

/// Returns a richer description of the primary rate, where available.
pub fn get_pricing_spec(descriptor: &ResourceDescriptor) -> Result<PricingSpec> {
    let response = get_projected_cost(descriptor)?;
    let (tag, _) = dispatcher::resolve(descriptor)?;
    let billing_mode = match tag.as_str() {
        "ec2" | "eks" | "elasticache" | "natgateway" => "hourly",
        "s3" | "ebs" | "rds" => "per-gb-month",
        "lambda" => "per-request-and-duration",
        "dynamodb" => "per-request-unit",
        "elb" => "hourly-plus-capacity-unit",
        "cloudwatch" => "tiered-usage",
        _ => "unspecified",
    };
    Ok(PricingSpec {
        billing_mode: billing_mode.to_string(),
        rate_per_unit: response.unit_price,
        metric_hints: metric_hints_for(&tag),
    })
}

fn metric_hints_for(tag: &str) -> Vec<String> {
    let hints: &[&str] = match tag {
        "ec2" => &["os", "tenancy"],
        "ebs" => &["size", "volume_size"],
        "s3" => &["size"],
        "rds" => &["engine", "deployment_option", "storage_gb", "iops"],
        "eks" => &["support_type"],
        "lambda" => &["architecture", "memory_mb", "requests", "duration_ms"],
        "dynamodb" => &["billing_mode", "rcu", "wcu", "storage_gb", "reads", "writes"],
        "elb" => &["type", "lcu_hours"],
        "natgateway" => &["data_gb"],
        "cloudwatch" => &["metric_count", "logs_ingested_gb", "logs_stored_gb"],
        "elasticache" => &["engine", "num_cache_clusters"],
        _ => &[],
    };
    hints.iter().map(|s| s.to_string()).collect()
}

/// Returns zero or more cost-reduction suggestions. Empty is not an error.
pub fn get_recommendations(descriptor: &ResourceDescriptor) -> Result<Vec<Recommendation>> {
    let (tag, client) = dispatcher::resolve(descriptor)?;
    let size_gb = descriptor
        .tag("size")
        .or_else(|| descriptor.tag("volume_size"))
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);
    Ok(recommender::recommend(&tag, &descriptor.sku, size_gb, client))
}
