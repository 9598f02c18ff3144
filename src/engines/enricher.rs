// Applied to every estimator response in strict order: dev-mode,
// growth-hint, lineage. Each step is a pure function and a no-op when
// its precondition is unmet; the enricher never fails.

use crate::engines::estimators::HOURS_PER_MONTH;
use crate::engines::pricing::classification::{self, ServiceClassification};
use crate::engines::shared::models::{CostResponse, Lineage, ResourceDescriptor, UsageProfile};

const DEV_MODE_HOURS: f64 = 160.0;

fn apply_dev_mode(response: &mut CostResponse, descriptor: &ResourceDescriptor, classification: Option<&ServiceClassification>) {
    let Some(classification) = classification else { return };
    if !classification.affected_by_dev_mode {
        return;
    }
    if descriptor.usage_profile != UsageProfile::Development {
        return;
    }
    response.cost_per_month *= DEV_MODE_HOURS / HOURS_PER_MONTH;
    response.billing_detail.push_str(" (dev profile)");
}

fn apply_growth_hint(response: &mut CostResponse, classification: Option<&ServiceClassification>) {
    if let Some(classification) = classification {
        response.growth_type = classification.growth_type;
    }
}

fn apply_lineage(response: &mut CostResponse, descriptor: &ResourceDescriptor, classification: Option<&ServiceClassification>) {
    let Some(classification) = classification else { return };
    for key in classification.parent_tag_keys {
        if let Some(value) = descriptor.tag(key) {
            response.lineage = Some(Lineage {
                parent_resource_id: value.to_string(),
                parent_resource_type: classification.parent_type.to_string(),
                relationship: classification.relationship,
            });
            return;
        }
    }
}

/// Enriches `response` in place for the given canonical service `tag`.
pub fn enrich(tag: &str, descriptor: &ResourceDescriptor, response: &mut CostResponse) {
    let classification = classification::lookup(tag);
    apply_dev_mode(response, descriptor, classification);
    apply_growth_hint(response, classification);
    apply_lineage(response, descriptor, classification);
}
