// Thin façade over the distilled indexes. One total lookup operation
// per distinct rate an estimator needs; `found == false` always means
// "no such SKU/engine/class in this region's catalog", never an error.
//
// Defined as a trait so integration tests can substitute a small
// table-driven fake without depending on the embedded fixtures.

use crate::engines::pricing::distiller::{self, Tier};
use crate::engines::shared::error_model::PricingError;
use crate::engines::shared::models::ServiceMetadata;

pub trait PricingClient {
    fn region(&self) -> &str;
    fn metadata(&self, service: &str) -> Option<&ServiceMetadata>;

    fn compute_rate(&self, instance_type: &str, os: &str, tenancy: &str) -> (f64, bool);
    fn volume_rate(&self, volume_type: &str) -> (f64, bool);
    fn object_storage_rate(&self, storage_class: &str) -> (f64, bool);
    fn cache_rate(&self, instance_type: &str, engine: &str) -> (f64, bool);
    fn database_rate(&self, instance_class: &str, engine: &str, deployment_option: &str) -> (f64, bool);
    fn database_storage_rate(&self) -> f64;
    fn database_iops_rate(&self) -> f64;
    fn cluster_rate(&self, support_type: &str) -> (f64, bool);
    fn load_balancer_rates(&self) -> (f64, f64, f64, f64);
    fn nat_gateway_rates(&self) -> (f64, f64);
    fn log_ingestion_tiers(&self) -> &[Tier];
    fn custom_metric_tiers(&self) -> &[Tier];
    fn log_storage_rate(&self) -> f64;
    fn serverless_rates(&self, architecture: &str) -> (f64, f64, bool);
    fn key_value_rates(&self) -> (f64, f64, f64, f64, f64);
}

impl PricingClient for distiller::DistilledCatalog {
    fn region(&self) -> &str {
        &self.region
    }

    fn metadata(&self, service: &str) -> Option<&ServiceMetadata> {
        self.metadata.get(service)
    }

    fn compute_rate(&self, instance_type: &str, os: &str, tenancy: &str) -> (f64, bool) {
        match self
            .compute
            .rates
            .get(&(instance_type.to_string(), os.to_string(), tenancy.to_string()))
        {
            Some(rate) => (*rate, true),
            None => (0.0, false),
        }
    }

    fn volume_rate(&self, volume_type: &str) -> (f64, bool) {
        match self.volume.rate_per_gb_month.get(volume_type) {
            Some(rate) => (*rate, true),
            None => (0.0, false),
        }
    }

    fn object_storage_rate(&self, storage_class: &str) -> (f64, bool) {
        match self.object_storage.rate_per_gb_month.get(storage_class) {
            Some(rate) => (*rate, true),
            None => (0.0, false),
        }
    }

    fn cache_rate(&self, instance_type: &str, engine: &str) -> (f64, bool) {
        match self
            .cache
            .hourly_rate
            .get(&(instance_type.to_string(), engine.to_string()))
        {
            Some(rate) => (*rate, true),
            None => (0.0, false),
        }
    }

    fn database_rate(&self, instance_class: &str, engine: &str, deployment_option: &str) -> (f64, bool) {
        match self.database.hourly_rate.get(&(
            instance_class.to_string(),
            engine.to_string(),
            deployment_option.to_string(),
        )) {
            Some(rate) => (*rate, true),
            None => (0.0, false),
        }
    }

    fn database_storage_rate(&self) -> f64 {
        self.database.storage_rate_per_gb_month
    }

    fn database_iops_rate(&self) -> f64 {
        self.database.iops_rate
    }

    fn cluster_rate(&self, support_type: &str) -> (f64, bool) {
        let rate = match support_type {
            "standard" => self.cluster.standard_hourly,
            "extended" => self.cluster.extended_hourly,
            _ => None,
        };
        match rate {
            Some(rate) => (rate, true),
            None => (0.0, false),
        }
    }

    fn load_balancer_rates(&self) -> (f64, f64, f64, f64) {
        (
            self.load_balancer.application_hourly,
            self.load_balancer.application_lcu,
            self.load_balancer.network_hourly,
            self.load_balancer.network_lcu,
        )
    }

    fn nat_gateway_rates(&self) -> (f64, f64) {
        (self.nat_gateway.hourly, self.nat_gateway.data_gb)
    }

    fn log_ingestion_tiers(&self) -> &[Tier] {
        &self.metrics_logs.log_ingestion_tiers
    }

    fn custom_metric_tiers(&self) -> &[Tier] {
        &self.metrics_logs.custom_metric_tiers
    }

    fn log_storage_rate(&self) -> f64 {
        self.metrics_logs.log_storage_rate_per_gb_month
    }

    fn serverless_rates(&self, architecture: &str) -> (f64, f64, bool) {
        match self.serverless.rates.get(architecture) {
            Some((req, dur)) => (*req, *dur, true),
            None => (0.0, 0.0, false),
        }
    }

    fn key_value_rates(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.key_value.read_price_per_unit,
            self.key_value.write_price_per_unit,
            self.key_value.storage_rate_per_gb_month,
            self.key_value.rcu_hourly_rate,
            self.key_value.wcu_hourly_rate,
        )
    }
}

/// Returns the process-wide client, initializing the distiller on first call.
pub fn client() -> Result<&'static dyn PricingClient, PricingError> {
    distiller::initialize().map(|c| c as &dyn PricingClient)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_instance_type_is_not_found() {
        let client = client().expect("client initializes");
        let (rate, found) = client.compute_rate("t99.mega", "Linux", "Shared");
        assert_eq!(rate, 0.0);
        assert!(!found);
    }

    #[test]
    fn known_instance_type_is_found() {
        let client = client().expect("client initializes");
        let (rate, found) = client.compute_rate("t3.micro", "Linux", "Shared");
        assert!(found);
        assert_eq!(rate, 0.0104);
    }
}
