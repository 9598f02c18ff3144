// Cost-reduction sketch: operates on production rates directly via the
// pricing client, never on an already dev-mode-enriched response (the
// enricher and the recommender are independent consumers of the same
// distilled catalog).

use crate::engines::estimators::HOURS_PER_MONTH;
use crate::engines::pricing::client::PricingClient;
use crate::engines::shared::models::{Recommendation, RecommendationKind};

const GENERATION_UPGRADE_CONFIDENCE: f64 = 0.9;
const ARM_MIGRATION_CONFIDENCE: f64 = 0.7;
const VOLUME_UPGRADE_CONFIDENCE: f64 = 0.9;

/// Newer same-architecture family at the same or lower rate, keyed by
/// the instance type a caller might currently be running.
const GENERATION_UPGRADES: &[(&str, &str)] = &[("m5.large", "m6i.large")];

/// ARM64 equivalent of an x86 instance type.
const ARM_EQUIVALENTS: &[(&str, &str)] = &[("m5.large", "m6g.large"), ("m6i.large", "m6g.large")];

fn compute_recommendations(instance_type: &str, client: &dyn PricingClient) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let (current_rate, found) = client.compute_rate(instance_type, "Linux", "Shared");
    if !found {
        return recommendations;
    }

    if let Some((_, upgraded)) = GENERATION_UPGRADES.iter().find(|(from, _)| *from == instance_type) {
        let (upgraded_rate, upgraded_found) = client.compute_rate(upgraded, "Linux", "Shared");
        if upgraded_found && upgraded_rate <= current_rate {
            recommendations.push(Recommendation {
                kind: RecommendationKind::GenerationUpgrade,
                description: format!("Upgrade {instance_type} to {upgraded} for the same or lower hourly rate"),
                confidence: GENERATION_UPGRADE_CONFIDENCE,
                estimated_monthly_savings: (current_rate - upgraded_rate) * HOURS_PER_MONTH,
            });
        }
    }

    if let Some((_, arm)) = ARM_EQUIVALENTS.iter().find(|(from, _)| *from == instance_type) {
        let (arm_rate, arm_found) = client.compute_rate(arm, "Linux", "Shared");
        if arm_found && arm_rate <= current_rate {
            recommendations.push(Recommendation {
                kind: RecommendationKind::ArmMigration,
                description: format!("Migrate {instance_type} to ARM-based {arm} for the same or lower hourly rate"),
                confidence: ARM_MIGRATION_CONFIDENCE,
                estimated_monthly_savings: (current_rate - arm_rate) * HOURS_PER_MONTH,
            });
        }
    }

    recommendations
}

fn volume_recommendations(volume_type: &str, size_gb: f64, client: &dyn PricingClient) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    if volume_type != "gp2" {
        return recommendations;
    }
    let (gp2_rate, gp2_found) = client.volume_rate("gp2");
    let (gp3_rate, gp3_found) = client.volume_rate("gp3");
    if gp2_found && gp3_found && gp3_rate <= gp2_rate {
        recommendations.push(Recommendation {
            kind: RecommendationKind::VolumeTypeUpgrade,
            description: "Migrate gp2 volume to gp3 for the same or lower per-GB-month rate".to_string(),
            confidence: VOLUME_UPGRADE_CONFIDENCE,
            estimated_monthly_savings: (gp2_rate - gp3_rate) * size_gb,
        });
    }
    recommendations
}

/// Returns zero or more recommendations for a SKU against its service
/// tag. Empty is never an error; it just means nothing applies.
pub fn recommend(tag: &str, sku: &str, size_gb: f64, client: &dyn PricingClient) -> Vec<Recommendation> {
    match tag {
        "ec2" => compute_recommendations(sku, client),
        "ebs" => volume_recommendations(sku, size_gb, client),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::pricing::client;

    #[test]
    fn m5_large_gets_generation_and_arm_recommendations() {
        let client = client::client().expect("client initializes");
        let recs = recommend("ec2", "m5.large", 0.0, client);
        assert!(recs.iter().any(|r| r.kind == RecommendationKind::GenerationUpgrade));
        assert!(recs.iter().any(|r| r.kind == RecommendationKind::ArmMigration));
    }

    #[test]
    fn gp2_volume_gets_gp3_upgrade() {
        let client = client::client().expect("client initializes");
        let recs = recommend("ebs", "gp2", 100.0, client);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].kind, RecommendationKind::VolumeTypeUpgrade);
        assert!((recs[0].estimated_monthly_savings - (0.10 - 0.08) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn unsupported_service_yields_no_recommendations() {
        let client = client::client().expect("client initializes");
        assert!(recommend("s3", "STANDARD", 0.0, client).is_empty());
    }
}
