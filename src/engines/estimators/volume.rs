use crate::engines::pricing::client::PricingClient;
use crate::engines::shared::error_model::{PricingError, Result};
use crate::engines::shared::models::{CostResponse, ResourceDescriptor};

const DEFAULT_SIZE_GB: f64 = 8.0;

fn size_gb(descriptor: &ResourceDescriptor) -> (f64, bool) {
    for key in ["size", "volume_size"] {
        if let Some(raw) = descriptor.tag(key) {
            if let Ok(size) = raw.parse::<f64>() {
                return (size, true);
            }
        }
    }
    (DEFAULT_SIZE_GB, false)
}

pub fn estimate(descriptor: &ResourceDescriptor, client: &dyn PricingClient) -> Result<CostResponse> {
    if descriptor.sku.is_empty() {
        return Err(PricingError::invalid_resource("block volume requires a non-empty sku (volume type)"));
    }
    let (rate, found) = client.volume_rate(&descriptor.sku);
    if !found {
        return Ok(CostResponse::zero_cost(format!(
            "no per-GB-month rate found for volume type {} in this region's catalog",
            descriptor.sku
        )));
    }

    let (size, parsed) = size_gb(descriptor);
    let cost_per_month = size * rate;
    let mut billing_detail = format!("{} volume, {size} GB, ${rate}/GB-month", descriptor.sku);
    if !parsed {
        billing_detail.push_str(&format!(" (defaulted size to {DEFAULT_SIZE_GB} GB)"));
    }
    Ok(CostResponse::new(rate, cost_per_month, billing_detail))
}
