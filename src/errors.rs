// Re-export of the shared error model, matching the codebase's
// convention of exposing the core error type at the crate root.

pub use crate::engines::shared::error_model::{ErrorCategory, PricingError, RegionMismatchDetail, Result};
