use super::HOURS_PER_MONTH;
use crate::engines::pricing::client::PricingClient;
use crate::engines::shared::error_model::Result;
use crate::engines::shared::models::{CostResponse, ResourceDescriptor};

pub fn estimate(descriptor: &ResourceDescriptor, client: &dyn PricingClient) -> Result<CostResponse> {
    let (app_hourly, app_lcu, net_hourly, net_lcu) = client.load_balancer_rates();
    let lb_type = descriptor.tag("type").unwrap_or("application");
    let (fixed_hourly, capacity_unit_rate) = match lb_type {
        "network" => (net_hourly, net_lcu),
        _ => (app_hourly, app_lcu),
    };

    let lcu_hours = descriptor
        .tag("lcu_hours")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);
    let cost_per_month = fixed_hourly * HOURS_PER_MONTH + lcu_hours * capacity_unit_rate;
    let billing_detail = format!("{lb_type} load balancer, {HOURS_PER_MONTH} hrs/month, {lcu_hours} LCU-hours");
    Ok(CostResponse::new(fixed_hourly, cost_per_month, billing_detail))
}
