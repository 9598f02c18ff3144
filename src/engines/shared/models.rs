// Shared data models for the AWS public-pricing plugin core.
//
// These mirror the wire types the host's transport layer (out of scope here)
// marshals to and from protobuf; the core only ever sees the plain Rust
// structs below.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Operational-context hint carried on a resource descriptor.
///
/// `BURST` is defined but currently inert — kept so the enum stays
/// exhaustive if a future version gives it distinct semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsageProfile {
    #[default]
    Unspecified,
    Production,
    Development,
    Burst,
}

/// Forecasting hint attached to a cost response by the enricher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrowthType {
    #[default]
    Unspecified,
    Static,
    Linear,
    Exponential,
}

/// The kind of relationship a resource has to its lineage parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    AttachedTo,
    Within,
    ManagedBy,
}

/// Parent/child topology metadata attached by the enricher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineage {
    pub parent_resource_id: String,
    pub parent_resource_type: String,
    pub relationship: Relationship,
}

/// The typed request every estimator consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub provider: String,
    pub resource_type: String,
    #[serde(default)]
    pub sku: String,
    pub region: String,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    pub usage_profile: UsageProfile,
}

impl ResourceDescriptor {
    /// Reads a tag, returning `None` for an absent or empty value.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }
}

/// The typed response every estimator produces, before enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostResponse {
    pub unit_price: f64,
    pub currency: String,
    pub cost_per_month: f64,
    pub billing_detail: String,
    #[serde(default)]
    pub growth_type: GrowthType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineage: Option<Lineage>,
}

impl CostResponse {
    pub fn new(unit_price: f64, cost_per_month: f64, billing_detail: impl Into<String>) -> Self {
        Self {
            unit_price,
            currency: "USD".to_string(),
            cost_per_month,
            billing_detail: billing_detail.into(),
            growth_type: GrowthType::Unspecified,
            lineage: None,
        }
    }

    /// A success response for a SKU that isn't in this region's catalog.
    pub fn zero_cost(billing_detail: impl Into<String>) -> Self {
        Self::new(0.0, 0.0, billing_detail)
    }
}

/// A richer description of the primary rate, for `GetPricingSpec`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSpec {
    pub billing_mode: String,
    pub rate_per_unit: f64,
    #[serde(default)]
    pub metric_hints: Vec<String>,
}

/// A single cost-reduction suggestion from the recommender sketch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub description: String,
    pub confidence: f64,
    pub estimated_monthly_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    GenerationUpgrade,
    ArmMigration,
    VolumeTypeUpgrade,
}

/// Per-service metadata captured from each raw document during distillation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceMetadata {
    pub version: String,
    pub publication_date: String,
    pub offer_code: String,
}
