use crate::engines::pricing::client::PricingClient;
use crate::engines::shared::error_model::Result;
use crate::engines::shared::models::{CostResponse, ResourceDescriptor};

const DEFAULT_MEMORY_MB: f64 = 128.0;

fn canonical_architecture(raw: &str) -> &'static str {
    match raw.to_ascii_lowercase().as_str() {
        "arm" | "arm64" => "arm64",
        _ => "x86_64",
    }
}

pub fn estimate(descriptor: &ResourceDescriptor, client: &dyn PricingClient) -> Result<CostResponse> {
    let architecture = canonical_architecture(descriptor.tag("architecture").unwrap_or("x86"));
    let (request_price, duration_rate, found) = client.serverless_rates(architecture);
    if !found {
        return Ok(CostResponse::zero_cost(format!(
            "no request/duration rate found for architecture {architecture} in this region's catalog"
        )));
    }

    let memory_mb = descriptor
        .tag("memory_mb")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(DEFAULT_MEMORY_MB);
    let requests = descriptor.tag("requests").and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0);
    let duration_ms = descriptor
        .tag("duration_ms")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);

    let gb_seconds = (memory_mb / 1024.0) * (duration_ms / 1000.0) * requests;
    let cost_per_month = requests * request_price + gb_seconds * duration_rate;
    let billing_detail = format!(
        "{architecture} Lambda, {memory_mb} MB, {requests} requests/month @ {duration_ms}ms avg duration"
    );
    Ok(CostResponse::new(request_price, cost_per_month, billing_detail))
}
