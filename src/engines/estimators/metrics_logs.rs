use crate::engines::pricing::client::PricingClient;
use crate::engines::pricing::distiller::Tier;
use crate::engines::shared::error_model::Result;
use crate::engines::shared::models::{CostResponse, ResourceDescriptor};

/// Sums a usage quantity across an ordered tier list: each tier's
/// contribution is `min(remaining, tier_width) × rate`; the final tier
/// (`up_to == None`) absorbs whatever usage remains.
pub fn tiered_cost(usage: f64, tiers: &[Tier]) -> f64 {
    let mut remaining = usage.max(0.0);
    let mut lower = 0.0;
    let mut cost = 0.0;
    for tier in tiers {
        if remaining <= 0.0 {
            break;
        }
        let width = match tier.up_to {
            Some(up_to) => (up_to - lower).max(0.0),
            None => remaining,
        };
        let used = remaining.min(width);
        cost += used * tier.rate;
        remaining -= used;
        if let Some(up_to) = tier.up_to {
            lower = up_to;
        }
    }
    cost
}

pub fn estimate(descriptor: &ResourceDescriptor, client: &dyn PricingClient) -> Result<CostResponse> {
    let metric_count = descriptor
        .tag("metric_count")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);
    let logs_ingested_gb = descriptor
        .tag("logs_ingested_gb")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);
    let logs_stored_gb = descriptor
        .tag("logs_stored_gb")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);

    let metric_cost = tiered_cost(metric_count, client.custom_metric_tiers());
    let ingestion_cost = tiered_cost(logs_ingested_gb, client.log_ingestion_tiers());
    let storage_cost = logs_stored_gb * client.log_storage_rate();
    let cost_per_month = metric_cost + ingestion_cost + storage_cost;

    let billing_detail = format!(
        "{metric_count} metrics, {logs_ingested_gb} GB ingested, {logs_stored_gb} GB stored"
    );
    Ok(CostResponse::new(client.log_storage_rate(), cost_per_month, billing_detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiered_cost_splits_across_boundary() {
        let tiers = [
            Tier { up_to: Some(10.0), rate: 1.0 },
            Tier { up_to: None, rate: 0.5 },
        ];
        assert_eq!(tiered_cost(5.0, &tiers), 5.0);
        assert_eq!(tiered_cost(15.0, &tiers), 10.0 * 1.0 + 5.0 * 0.5);
    }

    #[test]
    fn tiered_cost_zero_usage_is_zero() {
        let tiers = [Tier { up_to: None, rate: 1.0 }];
        assert_eq!(tiered_cost(0.0, &tiers), 0.0);
    }
}
