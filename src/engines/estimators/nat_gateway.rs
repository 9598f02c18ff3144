use super::HOURS_PER_MONTH;
use crate::engines::pricing::client::PricingClient;
use crate::engines::shared::error_model::Result;
use crate::engines::shared::models::{CostResponse, ResourceDescriptor};

pub fn estimate(descriptor: &ResourceDescriptor, client: &dyn PricingClient) -> Result<CostResponse> {
    let (hourly_rate, data_rate) = client.nat_gateway_rates();
    let data_gb = descriptor.tag("data_gb").and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0);
    let cost_per_month = hourly_rate * HOURS_PER_MONTH + data_gb * data_rate;
    let billing_detail = format!("NAT gateway, {HOURS_PER_MONTH} hrs/month, {data_gb} GB processed");
    Ok(CostResponse::new(hourly_rate, cost_per_month, billing_detail))
}
