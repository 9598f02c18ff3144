use super::HOURS_PER_MONTH;
use crate::engines::pricing::client::PricingClient;
use crate::engines::shared::error_model::Result;
use crate::engines::shared::models::{CostResponse, ResourceDescriptor};

pub fn estimate(descriptor: &ResourceDescriptor, client: &dyn PricingClient) -> Result<CostResponse> {
    let (read_price, write_price, storage_rate, rcu_rate, wcu_rate) = client.key_value_rates();
    let billing_mode = descriptor.tag("billing_mode").unwrap_or("on_demand");
    let storage_gb = descriptor
        .tag("storage_gb")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);

    let (cost_per_month, unit_price, detail) = match billing_mode {
        "provisioned" => {
            let rcu = descriptor.tag("rcu").and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0);
            let wcu = descriptor.tag("wcu").and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0);
            let cost = rcu * rcu_rate * HOURS_PER_MONTH + wcu * wcu_rate * HOURS_PER_MONTH + storage_gb * storage_rate;
            (cost, rcu_rate, format!("DynamoDB provisioned, {rcu} RCU / {wcu} WCU, {storage_gb} GB"))
        }
        _ => {
            let reads = descriptor.tag("reads").and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0);
            let writes = descriptor.tag("writes").and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0);
            let cost = reads * read_price + writes * write_price + storage_gb * storage_rate;
            (cost, read_price, format!("DynamoDB on-demand, {reads} reads / {writes} writes, {storage_gb} GB"))
        }
    };

    Ok(CostResponse::new(unit_price, cost_per_month, detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::pricing::client;

    #[test]
    fn on_demand_with_no_usage_is_zero_cost() {
        let client = client::client().expect("client initializes");
        let descriptor = ResourceDescriptor {
            provider: "aws".to_string(),
            resource_type: "dynamodb".to_string(),
            region: "us-east-1".to_string(),
            ..Default::default()
        };
        let response = estimate(&descriptor, client).expect("estimate succeeds");
        assert_eq!(response.cost_per_month, 0.0);
    }
}
