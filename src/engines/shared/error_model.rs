// Error model with stable error IDs, matching the three protocol error
// kinds this plugin is allowed to surface to the host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three error kinds defined by the transport protocol's enumerated
/// code set. Everything else is recovered locally and reported in-band
/// (zero-cost response with an explanatory `billing_detail`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Descriptor validation failed: a required field is missing or
    /// unparseable.
    InvalidResource,
    /// Descriptor's region does not match the binary's embedded region.
    UnsupportedRegion,
    /// The distiller failed on the first lookup; latched for the
    /// process's lifetime.
    DataCorruption,
}

/// Structured detail attached to an `UnsupportedRegion` error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionMismatchDetail {
    pub plugin_region: String,
    pub required_region: String,
}

/// Stable error with ID and optional structured detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingError {
    pub id: String,
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub region_detail: Option<RegionMismatchDetail>,
}

impl PricingError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        let id = match category {
            ErrorCategory::InvalidResource => "INVALID_RESOURCE",
            ErrorCategory::UnsupportedRegion => "UNSUPPORTED_REGION",
            ErrorCategory::DataCorruption => "DATA_CORRUPTION",
        };
        Self {
            id: id.to_string(),
            category,
            message: message.into(),
            region_detail: None,
        }
    }

    pub fn invalid_resource(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::InvalidResource, message)
    }

    pub fn unsupported_region(plugin_region: impl Into<String>, required_region: impl Into<String>) -> Self {
        let plugin_region = plugin_region.into();
        let required_region = required_region.into();
        let message = format!(
            "region {required_region} is not supported by this build (plugin region is {plugin_region})"
        );
        Self {
            id: "UNSUPPORTED_REGION".to_string(),
            category: ErrorCategory::UnsupportedRegion,
            message,
            region_detail: Some(RegionMismatchDetail {
                plugin_region,
                required_region,
            }),
        }
    }

    pub fn data_corruption(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::DataCorruption, message)
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.message)
    }
}

impl std::error::Error for PricingError {}

/// Type alias for results returned by the core's external interfaces.
pub type Result<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_region_carries_detail() {
        let err = PricingError::unsupported_region("us-east-1", "eu-west-1");
        let detail = err.region_detail.expect("detail present");
        assert_eq!(detail.plugin_region, "us-east-1");
        assert_eq!(detail.required_region, "eu-west-1");
        assert_eq!(err.id, "UNSUPPORTED_REGION");
    }

    #[test]
    fn invalid_resource_has_no_detail() {
        let err = PricingError::invalid_resource("missing region");
        assert!(err.region_detail.is_none());
        assert_eq!(err.category, ErrorCategory::InvalidResource);
    }
}
