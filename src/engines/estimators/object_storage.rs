use crate::engines::pricing::client::PricingClient;
use crate::engines::shared::error_model::Result;
use crate::engines::shared::models::{CostResponse, ResourceDescriptor};

const DEFAULT_CLASS: &str = "STANDARD";
const DEFAULT_SIZE_GB: f64 = 1.0;

pub fn estimate(descriptor: &ResourceDescriptor, client: &dyn PricingClient) -> Result<CostResponse> {
    let class = if descriptor.sku.is_empty() {
        DEFAULT_CLASS.to_string()
    } else {
        descriptor.sku.clone()
    };

    let (rate, found) = client.object_storage_rate(&class);
    if !found {
        return Ok(CostResponse::zero_cost(format!(
            "no per-GB-month rate found for storage class {class} in this region's catalog"
        )));
    }

    let size = descriptor
        .tag("size")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(DEFAULT_SIZE_GB);
    let cost_per_month = size * rate;
    let billing_detail = format!("{class} storage, {size} GB, ${rate}/GB-month");
    Ok(CostResponse::new(rate, cost_per_month, billing_detail))
}
