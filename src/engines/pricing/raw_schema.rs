// The generic AWS "bulk price list" schema shared by every embedded
// per-service document: products keyed by SKU, and terms keyed by
// offer type (only "OnDemand" is consumed) × SKU × term code.
//
// Numeric data travels as strings in this schema (`pricePerUnit.USD`);
// parsing happens once, at distillation time, never at lookup time.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPriceList {
    #[serde(default)]
    pub offer_code: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub publication_date: String,
    pub products: HashMap<String, RawProduct>,
    pub terms: RawTerms,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub sku: String,
    pub product_family: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTerms {
    #[serde(rename = "OnDemand", default)]
    pub on_demand: HashMap<String, HashMap<String, RawTerm>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTerm {
    pub sku: String,
    #[serde(default)]
    pub offer_term_code: String,
    pub price_dimensions: HashMap<String, RawPriceDimension>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPriceDimension {
    #[serde(default)]
    pub description: String,
    pub unit: String,
    #[serde(default)]
    pub begin_range: Option<String>,
    #[serde(default)]
    pub end_range: Option<String>,
    pub price_per_unit: RawPricePerUnit,
}

#[derive(Debug, Deserialize)]
pub struct RawPricePerUnit {
    #[serde(rename = "USD")]
    pub usd: String,
}

impl RawPriceDimension {
    /// Parses `pricePerUnit.USD` into a float. Distillation-time only.
    pub fn parse_usd(&self) -> Result<f64, std::num::ParseFloatError> {
        self.price_per_unit.usd.parse()
    }

    /// `end_range` as a tier upper bound; `"Inf"` (and absence) means unbounded.
    pub fn end_range_bound(&self) -> Option<f64> {
        match self.end_range.as_deref() {
            None => None,
            Some("Inf") => None,
            Some(other) => other.parse::<f64>().ok(),
        }
    }
}

impl RawPriceList {
    /// The single on-demand term for a SKU, if there is exactly the one
    /// this schema expects (the only term type this engine consumes).
    pub fn on_demand_term(&self, sku: &str) -> Option<&RawTerm> {
        self.terms.on_demand.get(sku)?.values().next()
    }

    /// All price dimensions for a SKU's on-demand term, ordered by
    /// `beginRange` so tiered dimensions decode in ascending tier order.
    pub fn ordered_price_dimensions(&self, sku: &str) -> Vec<(&String, &RawPriceDimension)> {
        let Some(term) = self.on_demand_term(sku) else {
            return Vec::new();
        };
        let mut dims: Vec<_> = term.price_dimensions.iter().collect();
        dims.sort_by(|a, b| {
            let begin = |d: &RawPriceDimension| d.begin_range.as_deref().and_then(|s| s.parse::<f64>().ok()).unwrap_or(0.0);
            begin(a.1).partial_cmp(&begin(b.1)).unwrap_or(std::cmp::Ordering::Equal)
        });
        dims
    }

    pub fn products_in_family<'a>(&'a self, family: &'a str) -> impl Iterator<Item = &'a RawProduct> {
        self.products.values().filter(move |p| p.product_family == family)
    }
}
