use super::HOURS_PER_MONTH;
use crate::engines::pricing::client::PricingClient;
use crate::engines::shared::error_model::{PricingError, Result};
use crate::engines::shared::models::{CostResponse, ResourceDescriptor};

fn canonical_engine(raw: &str) -> &'static str {
    match raw.to_ascii_lowercase().as_str() {
        "postgres" | "postgresql" => "PostgreSQL",
        "mariadb" => "MariaDB",
        "oracle" => "Oracle",
        "sqlserver" | "sql server" => "SQL Server",
        _ => "MySQL",
    }
}

fn canonical_deployment(raw: &str) -> &'static str {
    match raw.to_ascii_lowercase().as_str() {
        "multi-az" | "multi_az" => "Multi-AZ",
        _ => "Single-AZ",
    }
}

pub fn estimate(descriptor: &ResourceDescriptor, client: &dyn PricingClient) -> Result<CostResponse> {
    if descriptor.sku.is_empty() {
        return Err(PricingError::invalid_resource("database requires a non-empty sku (instance class)"));
    }
    let engine = canonical_engine(descriptor.tag("engine").unwrap_or("mysql"));
    let deployment = canonical_deployment(descriptor.tag("deployment_option").unwrap_or("single-az"));

    let (rate, found) = client.database_rate(&descriptor.sku, engine, deployment);
    if !found {
        return Ok(CostResponse::zero_cost(format!(
            "no hourly rate found for {} ({engine}, {deployment}) in this region's catalog",
            descriptor.sku
        )));
    }

    let storage_gb = descriptor
        .tag("storage_gb")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);
    let iops = descriptor.tag("iops").and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0);

    let cost_per_month =
        rate * HOURS_PER_MONTH + storage_gb * client.database_storage_rate() + iops * client.database_iops_rate();
    let billing_detail = format!(
        "{engine} {}, {deployment}, {HOURS_PER_MONTH} hrs/month, {storage_gb} GB storage",
        descriptor.sku
    );
    Ok(CostResponse::new(rate, cost_per_month, billing_detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::pricing::client;

    #[test]
    fn mysql_single_az_defaults() {
        let client = client::client().expect("client initializes");
        let descriptor = ResourceDescriptor {
            provider: "aws".to_string(),
            resource_type: "rds".to_string(),
            sku: "db.t3.micro".to_string(),
            region: "us-east-1".to_string(),
            ..Default::default()
        };
        let response = estimate(&descriptor, client).expect("estimate succeeds");
        assert_eq!(response.unit_price, 0.017);
        assert_eq!(response.cost_per_month, 0.017 * HOURS_PER_MONTH);
    }
}
