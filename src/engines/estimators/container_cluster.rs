use super::HOURS_PER_MONTH;
use crate::engines::pricing::client::PricingClient;
use crate::engines::shared::error_model::Result;
use crate::engines::shared::models::{CostResponse, ResourceDescriptor};

const DEFAULT_SUPPORT: &str = "standard";

pub fn estimate(descriptor: &ResourceDescriptor, client: &dyn PricingClient) -> Result<CostResponse> {
    let support_type = descriptor.tag("support_type").unwrap_or(DEFAULT_SUPPORT);
    let (rate, found) = client.cluster_rate(support_type);
    if !found {
        return Ok(CostResponse::zero_cost(format!(
            "no cluster-hour rate found for support type {support_type} in this region's catalog"
        )));
    }

    let cost_per_month = rate * HOURS_PER_MONTH;
    let billing_detail = format!("EKS control plane, {support_type} support, {HOURS_PER_MONTH} hrs/month");
    Ok(CostResponse::new(rate, cost_per_month, billing_detail))
}
