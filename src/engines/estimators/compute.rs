use super::HOURS_PER_MONTH;
use crate::engines::pricing::client::PricingClient;
use crate::engines::shared::error_model::{PricingError, Result};
use crate::engines::shared::models::{CostResponse, ResourceDescriptor};

pub fn estimate(descriptor: &ResourceDescriptor, client: &dyn PricingClient) -> Result<CostResponse> {
    if descriptor.sku.is_empty() {
        return Err(PricingError::invalid_resource("compute instance requires a non-empty sku (instance type)"));
    }
    let os = descriptor.tag("os").unwrap_or("Linux");
    let tenancy = descriptor.tag("tenancy").unwrap_or("Shared");

    let (rate, found) = client.compute_rate(&descriptor.sku, os, tenancy);
    if !found {
        return Ok(CostResponse::zero_cost(format!(
            "no on-demand rate found for {} ({os}/{tenancy}) in this region's catalog",
            descriptor.sku
        )));
    }

    let cost_per_month = rate * HOURS_PER_MONTH;
    let billing_detail = format!(
        "On-demand {os}/{tenancy} {}, {HOURS_PER_MONTH} hrs/month",
        descriptor.sku
    );
    Ok(CostResponse::new(rate, cost_per_month, billing_detail))
}
