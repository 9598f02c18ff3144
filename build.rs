// Selects which region's fixture set `catalog.rs` embeds. Only
// `us-east-1` is shipped; any other value fails the build loudly
// rather than silently falling back, since silently shipping the wrong
// region's rates would be a correctness bug, not a missing feature.

use std::env;

const SHIPPED_REGION: &str = "us-east-1";

fn main() {
    println!("cargo:rerun-if-changed=fixtures/us-east-1");
    println!("cargo:rerun-if-env-changed=PRICING_REGION");

    let requested = env::var("PRICING_REGION").unwrap_or_else(|_| SHIPPED_REGION.to_string());
    if requested != SHIPPED_REGION {
        panic!(
            "PRICING_REGION={requested} requested, but this build only ships fixtures for {SHIPPED_REGION}"
        );
    }
}
