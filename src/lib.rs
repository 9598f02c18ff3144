// AWS public-pricing plugin core library root.

pub mod config;
pub mod engines;
pub mod errors;
pub mod service;

pub use engines::shared::models::*;
pub use errors::{ErrorCategory, PricingError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
