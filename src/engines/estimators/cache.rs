use super::HOURS_PER_MONTH;
use crate::config::PluginConfig;
use crate::engines::pricing::client::PricingClient;
use crate::engines::shared::error_model::{PricingError, Result};
use crate::engines::shared::models::{CostResponse, ResourceDescriptor};

const DEFAULT_NODE_COUNT: f64 = 1.0;

fn canonical_engine(raw: &str) -> &'static str {
    match raw.to_ascii_lowercase().as_str() {
        "memcached" => "Memcached",
        "valkey" => "Valkey",
        _ => "Redis",
    }
}

/// Node count isn't strictly required (elasticache's default is 1 node),
/// so a present-but-malformed value is only an `INVALID_RESOURCE` error
/// under `STRICT_VALIDATION`; otherwise it falls back to the default,
/// same as `volume::size_gb`'s "(defaulted size to 8 GB)" path.
fn node_count(descriptor: &ResourceDescriptor) -> Result<(f64, bool)> {
    for key in ["num_cache_clusters", "num_nodes", "num_cache_nodes"] {
        if let Some(raw) = descriptor.tag(key) {
            return match raw.parse::<f64>() {
                Ok(n) if n > 0.0 => Ok((n, true)),
                _ if PluginConfig::global().strict_validation => {
                    Err(PricingError::invalid_resource(format!("{key} must be a positive number")))
                }
                _ => Ok((DEFAULT_NODE_COUNT, false)),
            };
        }
    }
    Ok((DEFAULT_NODE_COUNT, false))
}

pub fn estimate(descriptor: &ResourceDescriptor, client: &dyn PricingClient) -> Result<CostResponse> {
    if descriptor.sku.is_empty() {
        return Err(PricingError::invalid_resource("cache requires a non-empty sku (instance type)"));
    }
    let engine = canonical_engine(descriptor.tag("engine").unwrap_or("redis"));
    let (nodes, parsed) = node_count(descriptor)?;

    let (rate, found) = client.cache_rate(&descriptor.sku, engine);
    if !found {
        return Ok(CostResponse::zero_cost(format!(
            "no hourly rate found for {} ({engine}) in this region's catalog",
            descriptor.sku
        )));
    }

    let cost_per_month = rate * HOURS_PER_MONTH * nodes;
    let mut billing_detail = format!("{engine} {}, {nodes} node(s), {HOURS_PER_MONTH} hrs/month", descriptor.sku);
    if !parsed {
        billing_detail.push_str(&format!(" (defaulted node count to {DEFAULT_NODE_COUNT})"));
    }
    Ok(CostResponse::new(rate, cost_per_month, billing_detail))
}
