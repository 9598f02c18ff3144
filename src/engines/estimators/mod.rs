// One estimator per canonical service tag. Each is a free function
// `estimate(descriptor, client) -> Result<CostResponse>`: extract SKU
// and tag-derived parameters, look up rates, compute the monthly total
// assuming a 730-hour month, and describe every default actually applied.

pub mod cache;
pub mod compute;
pub mod container_cluster;
pub mod database;
pub mod key_value;
pub mod load_balancer;
pub mod metrics_logs;
pub mod nat_gateway;
pub mod object_storage;
pub mod serverless;
pub mod volume;

/// Hours in a billing month, used everywhere monthly totals are derived
/// from an hourly rate. No leap-day or calendar-accurate adjustment.
pub const HOURS_PER_MONTH: f64 = 730.0;
