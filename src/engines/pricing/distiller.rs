// Single-shot distillation of the embedded raw price-list buffers into
// service-specific indexes. Guarded by a process-wide `OnceLock`: the
// first caller (from any thread) pays the parse cost, every other
// caller — concurrent or later — observes the same cached result,
// success or failure, for the lifetime of the process.

use crate::engines::pricing::catalog;
use crate::engines::pricing::raw_schema::RawPriceList;
use crate::engines::shared::error_model::PricingError;
use crate::engines::shared::models::ServiceMetadata;
use std::collections::HashMap;
use std::sync::OnceLock;

/// One rate tier: a price per unit for usage up to (and excluding) `up_to`;
/// `up_to == None` marks the final, unbounded tier.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub up_to: Option<f64>,
    pub rate: f64,
}

#[derive(Debug, Default)]
pub struct ComputeIndex {
    pub rates: HashMap<(String, String, String), f64>,
}

#[derive(Debug, Default)]
pub struct VolumeIndex {
    pub rate_per_gb_month: HashMap<String, f64>,
}

#[derive(Debug, Default)]
pub struct ObjectStorageIndex {
    pub rate_per_gb_month: HashMap<String, f64>,
}

#[derive(Debug, Default)]
pub struct CacheIndex {
    pub hourly_rate: HashMap<(String, String), f64>,
}

#[derive(Debug, Default)]
pub struct DatabaseIndex {
    pub hourly_rate: HashMap<(String, String, String), f64>,
    pub storage_rate_per_gb_month: f64,
    pub iops_rate: f64,
}

#[derive(Debug, Default)]
pub struct ClusterIndex {
    pub standard_hourly: Option<f64>,
    pub extended_hourly: Option<f64>,
}

#[derive(Debug, Default)]
pub struct LoadBalancerIndex {
    pub application_hourly: f64,
    pub application_lcu: f64,
    pub network_hourly: f64,
    pub network_lcu: f64,
}

#[derive(Debug, Default)]
pub struct NatGatewayIndex {
    pub hourly: f64,
    pub data_gb: f64,
}

#[derive(Debug, Default)]
pub struct MetricsLogsIndex {
    pub log_ingestion_tiers: Vec<Tier>,
    pub custom_metric_tiers: Vec<Tier>,
    pub log_storage_rate_per_gb_month: f64,
}

#[derive(Debug, Default)]
pub struct ServerlessIndex {
    /// Keyed by architecture (`x86_64`, `arm64`): `(request_price, duration_rate_per_gb_second)`.
    pub rates: HashMap<String, (f64, f64)>,
}

#[derive(Debug, Default)]
pub struct KeyValueIndex {
    pub read_price_per_unit: f64,
    pub write_price_per_unit: f64,
    pub storage_rate_per_gb_month: f64,
    pub rcu_hourly_rate: f64,
    pub wcu_hourly_rate: f64,
}

#[derive(Debug, Default)]
pub struct DistilledCatalog {
    pub region: String,
    pub compute: ComputeIndex,
    pub volume: VolumeIndex,
    pub object_storage: ObjectStorageIndex,
    pub cache: CacheIndex,
    pub database: DatabaseIndex,
    pub cluster: ClusterIndex,
    pub load_balancer: LoadBalancerIndex,
    pub nat_gateway: NatGatewayIndex,
    pub metrics_logs: MetricsLogsIndex,
    pub serverless: ServerlessIndex,
    pub key_value: KeyValueIndex,
    pub metadata: HashMap<&'static str, ServiceMetadata>,
}

fn metadata_of(raw: &RawPriceList) -> ServiceMetadata {
    ServiceMetadata {
        version: raw.version.clone(),
        publication_date: raw.publication_date.clone(),
        offer_code: raw.offer_code.clone(),
    }
}

fn first_rate(raw: &RawPriceList, sku: &str) -> Option<f64> {
    raw.ordered_price_dimensions(sku).first().and_then(|(_, dim)| dim.parse_usd().ok())
}

fn tiers(raw: &RawPriceList, sku: &str) -> Vec<Tier> {
    raw.ordered_price_dimensions(sku)
        .into_iter()
        .filter_map(|(_, dim)| {
            dim.parse_usd().ok().map(|rate| Tier {
                up_to: dim.end_range_bound(),
                rate,
            })
        })
        .collect()
}

fn canonical_storage_class(human_readable: &str) -> Option<&'static str> {
    match human_readable {
        "General Purpose" => Some("STANDARD"),
        "Infrequent Access" => Some("STANDARD_IA"),
        "One Zone - Infrequent Access" => Some("ONEZONE_IA"),
        "Amazon Glacier Flexible Retrieval" => Some("GLACIER"),
        "Amazon Glacier Deep Archive" => Some("DEEP_ARCHIVE"),
        _ => None,
    }
}

fn distill_compute(raw: &RawPriceList) -> ComputeIndex {
    let mut idx = ComputeIndex::default();
    for product in raw.products_in_family("Compute Instance") {
        let os = product.attributes.get("operatingSystem").map(String::as_str).unwrap_or_default();
        let tenancy = product.attributes.get("tenancy").map(String::as_str).unwrap_or_default();
        let pre_installed = product.attributes.get("preInstalledSw").map(String::as_str).unwrap_or_default();
        let capacity_status = product.attributes.get("capacitystatus").map(String::as_str).unwrap_or_default();
        if os != "Linux" || tenancy != "Shared" || pre_installed != "NA" || capacity_status != "Used" {
            continue;
        }
        let Some(instance_type) = product.attributes.get("instanceType") else { continue };
        let Some(rate) = first_rate(raw, &product.sku) else { continue };
        idx.rates.insert((instance_type.clone(), os.to_string(), tenancy.to_string()), rate);
    }
    idx
}

fn distill_volume(raw: &RawPriceList) -> VolumeIndex {
    let mut idx = VolumeIndex::default();
    for product in raw.products_in_family("Storage") {
        let Some(volume_type) = product.attributes.get("volumeApiName") else { continue };
        let Some(rate) = first_rate(raw, &product.sku) else { continue };
        idx.rate_per_gb_month.insert(volume_type.clone(), rate);
    }
    idx
}

fn distill_object_storage(raw: &RawPriceList) -> ObjectStorageIndex {
    let mut idx = ObjectStorageIndex::default();
    for product in raw.products_in_family("Storage") {
        let Some(human) = product.attributes.get("storageClass") else { continue };
        let Some(class) = canonical_storage_class(human) else { continue };
        let Some(rate) = first_rate(raw, &product.sku) else { continue };
        idx.rate_per_gb_month.insert(class.to_string(), rate);
    }
    idx
}

fn canonical_cache_engine(raw_engine: &str) -> Option<&'static str> {
    match raw_engine.to_ascii_lowercase().as_str() {
        "redis" => Some("Redis"),
        "memcached" => Some("Memcached"),
        "valkey" => Some("Valkey"),
        _ => None,
    }
}

fn distill_cache(raw: &RawPriceList) -> CacheIndex {
    let mut idx = CacheIndex::default();
    for product in raw.products_in_family("Cache Instance") {
        let Some(instance_type) = product.attributes.get("instanceType") else { continue };
        let Some(engine_raw) = product.attributes.get("cacheEngine") else { continue };
        let Some(engine) = canonical_cache_engine(engine_raw) else { continue };
        let Some(rate) = first_rate(raw, &product.sku) else { continue };
        idx.hourly_rate.insert((instance_type.clone(), engine.to_string()), rate);
    }
    idx
}

fn distill_database(raw: &RawPriceList) -> DatabaseIndex {
    let mut idx = DatabaseIndex::default();
    for product in raw.products_in_family("Database Instance") {
        let Some(instance_class) = product.attributes.get("instanceType") else { continue };
        let Some(engine) = product.attributes.get("databaseEngine") else { continue };
        let Some(deployment) = product.attributes.get("deploymentOption") else { continue };
        let Some(rate) = first_rate(raw, &product.sku) else { continue };
        idx.hourly_rate.insert((instance_class.clone(), engine.clone(), deployment.clone()), rate);
    }
    for product in raw.products_in_family("Database Storage") {
        if let Some(rate) = first_rate(raw, &product.sku) {
            idx.storage_rate_per_gb_month = rate;
        }
    }
    for product in raw.products_in_family("Provisioned IOPS") {
        if let Some(rate) = first_rate(raw, &product.sku) {
            idx.iops_rate = rate;
        }
    }
    idx
}

fn distill_cluster(raw: &RawPriceList) -> ClusterIndex {
    let mut idx = ClusterIndex::default();
    for product in raw.products_in_family("Compute") {
        let Some(support) = product.attributes.get("supportType") else { continue };
        let Some(rate) = first_rate(raw, &product.sku) else { continue };
        match support.as_str() {
            "standard" => idx.standard_hourly = Some(rate),
            "extended" => idx.extended_hourly = Some(rate),
            _ => {}
        }
    }
    idx
}

fn distill_load_balancer(raw: &RawPriceList) -> LoadBalancerIndex {
    let mut idx = LoadBalancerIndex::default();
    for (family, usage_key) in [
        ("Load Balancer-Application", "LoadBalancerUsage"),
        ("Load Balancer-Application", "LCUUsage"),
        ("Load Balancer-Network", "LoadBalancerUsage"),
        ("Load Balancer-Network", "NLCUUsage"),
    ] {
        for product in raw.products_in_family(family) {
            if product.attributes.get("usagetype").map(String::as_str) != Some(usage_key) {
                continue;
            }
            let Some(rate) = first_rate(raw, &product.sku) else { continue };
            match (family, usage_key) {
                ("Load Balancer-Application", "LoadBalancerUsage") => idx.application_hourly = rate,
                ("Load Balancer-Application", "LCUUsage") => idx.application_lcu = rate,
                ("Load Balancer-Network", "LoadBalancerUsage") => idx.network_hourly = rate,
                ("Load Balancer-Network", "NLCUUsage") => idx.network_lcu = rate,
                _ => {}
            }
        }
    }
    idx
}

fn distill_nat_gateway(raw: &RawPriceList) -> NatGatewayIndex {
    let mut idx = NatGatewayIndex::default();
    for product in raw.products_in_family("NAT Gateway") {
        let Some(rate) = first_rate(raw, &product.sku) else { continue };
        match product.attributes.get("usagetype").map(String::as_str) {
            Some("NatGateway-Hours") => idx.hourly = rate,
            Some("NatGateway-Bytes") => idx.data_gb = rate,
            _ => {}
        }
    }
    idx
}

fn distill_metrics_logs(raw: &RawPriceList) -> MetricsLogsIndex {
    let mut idx = MetricsLogsIndex::default();
    for product in raw.products_in_family("Log Ingestion") {
        idx.log_ingestion_tiers = tiers(raw, &product.sku);
    }
    for product in raw.products_in_family("Metric") {
        idx.custom_metric_tiers = tiers(raw, &product.sku);
    }
    for product in raw.products_in_family("Log Storage") {
        if let Some(rate) = first_rate(raw, &product.sku) {
            idx.log_storage_rate_per_gb_month = rate;
        }
    }
    idx
}

fn distill_serverless(raw: &RawPriceList) -> ServerlessIndex {
    let mut idx = ServerlessIndex::default();
    let mut request_price: HashMap<String, f64> = HashMap::new();
    let mut duration_rate: HashMap<String, f64> = HashMap::new();
    for product in raw.products_in_family("Serverless") {
        let Some(arch) = product.attributes.get("architecture") else { continue };
        let Some(group) = product.attributes.get("group") else { continue };
        let Some(rate) = first_rate(raw, &product.sku) else { continue };
        if group.contains("Requests") {
            request_price.insert(arch.clone(), rate);
        } else if group.contains("Duration") {
            duration_rate.insert(arch.clone(), rate);
        }
    }
    for (arch, req) in request_price {
        let dur = duration_rate.get(&arch).copied().unwrap_or(0.0);
        idx.rates.insert(arch, (req, dur));
    }
    idx
}

fn distill_key_value(raw: &RawPriceList) -> KeyValueIndex {
    let mut idx = KeyValueIndex::default();
    for product in raw.products_in_family("Amazon DynamoDB PayPerRequest Throughput") {
        let Some(rate) = first_rate(raw, &product.sku) else { continue };
        match product.attributes.get("group").map(String::as_str) {
            Some("DDB-ReadUnits") => idx.read_price_per_unit = rate,
            Some("DDB-WriteUnits") => idx.write_price_per_unit = rate,
            _ => {}
        }
    }
    for product in raw.products_in_family("Database Storage") {
        if let Some(rate) = first_rate(raw, &product.sku) {
            idx.storage_rate_per_gb_month = rate;
        }
    }
    for product in raw.products_in_family("Provisioned IOPS") {
        let Some(rate) = first_rate(raw, &product.sku) else { continue };
        match product.attributes.get("group").map(String::as_str) {
            Some("DDB-ReadCapacityUnit-Hrs") => idx.rcu_hourly_rate = rate,
            Some("DDB-WriteCapacityUnit-Hrs") => idx.wcu_hourly_rate = rate,
            _ => {}
        }
    }
    idx
}

fn parse_raw(buf: &str, service: &str) -> Result<RawPriceList, PricingError> {
    serde_json::from_str(buf)
        .map_err(|e| PricingError::data_corruption(format!("failed to parse {service} price list: {e}")))
}

fn distill_all() -> Result<DistilledCatalog, PricingError> {
    let ec2 = parse_raw(catalog::EC2, "ec2")?;
    let ebs = parse_raw(catalog::EBS, "ebs")?;
    let s3 = parse_raw(catalog::S3, "s3")?;
    let rds = parse_raw(catalog::RDS, "rds")?;
    let eks = parse_raw(catalog::EKS, "eks")?;
    let lambda = parse_raw(catalog::LAMBDA, "lambda")?;
    let dynamodb = parse_raw(catalog::DYNAMODB, "dynamodb")?;
    let elb = parse_raw(catalog::ELB, "elb")?;
    let nat_gateway = parse_raw(catalog::NAT_GATEWAY, "natgateway")?;
    let cloudwatch = parse_raw(catalog::CLOUDWATCH, "cloudwatch")?;
    let elasticache = parse_raw(catalog::ELASTICACHE, "elasticache")?;

    let mut metadata = HashMap::new();
    metadata.insert("ec2", metadata_of(&ec2));
    metadata.insert("ebs", metadata_of(&ebs));
    metadata.insert("s3", metadata_of(&s3));
    metadata.insert("rds", metadata_of(&rds));
    metadata.insert("eks", metadata_of(&eks));
    metadata.insert("lambda", metadata_of(&lambda));
    metadata.insert("dynamodb", metadata_of(&dynamodb));
    metadata.insert("elb", metadata_of(&elb));
    metadata.insert("natgateway", metadata_of(&nat_gateway));
    metadata.insert("cloudwatch", metadata_of(&cloudwatch));
    metadata.insert("elasticache", metadata_of(&elasticache));

    Ok(DistilledCatalog {
        region: catalog::EMBEDDED_REGION.to_string(),
        compute: distill_compute(&ec2),
        volume: distill_volume(&ebs),
        object_storage: distill_object_storage(&s3),
        cache: distill_cache(&elasticache),
        database: distill_database(&rds),
        cluster: distill_cluster(&eks),
        load_balancer: distill_load_balancer(&elb),
        nat_gateway: distill_nat_gateway(&nat_gateway),
        metrics_logs: distill_metrics_logs(&cloudwatch),
        serverless: distill_serverless(&lambda),
        key_value: distill_key_value(&dynamodb),
        metadata,
    })
}

static CATALOG: OnceLock<Result<DistilledCatalog, PricingError>> = OnceLock::new();

/// Runs distillation exactly once per process. Every caller, concurrent
/// or subsequent, observes the same success or the same latched error.
pub fn initialize() -> Result<&'static DistilledCatalog, PricingError> {
    CATALOG
        .get_or_init(|| {
            tracing::info!("distilling embedded pricing catalog");
            let result = distill_all();
            match &result {
                Ok(c) => tracing::info!(region = %c.region, "distillation complete"),
                Err(e) => tracing::error!(error = %e, "distillation failed"),
            }
            result
        })
        .as_ref()
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::pricing::client::PricingClient;

    #[test]
    fn compute_filters_to_linux_shared_na_used() {
        let catalog = initialize().expect("catalog initializes");
        let rate = catalog
            .compute
            .rates
            .get(&("t3.micro".to_string(), "Linux".to_string(), "Shared".to_string()));
        assert_eq!(rate.copied(), Some(0.0104));
        assert!(!catalog
            .compute
            .rates
            .keys()
            .any(|(instance, os, _)| instance == "t3.micro" && os == "Windows"));
    }

    #[test]
    fn object_storage_excludes_non_canonical_classes() {
        let catalog = initialize().expect("catalog initializes");
        assert_eq!(catalog.object_storage.rate_per_gb_month.get("STANDARD").copied(), Some(0.023));
        assert!(!catalog.object_storage.rate_per_gb_month.contains_key("Reduced Redundancy"));
    }

    #[test]
    fn elasticache_excludes_serverless_family() {
        let catalog = initialize().expect("catalog initializes");
        assert_eq!(
            catalog
                .cache
                .hourly_rate
                .get(&("cache.m5.large".to_string(), "Redis".to_string()))
                .copied(),
            Some(0.156)
        );
        assert_eq!(catalog.cache.hourly_rate.len(), 4);
    }

    #[test]
    fn initialize_is_idempotent_across_calls() {
        let first = initialize().expect("first call");
        let second = initialize().expect("second call");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn round_trip_of_rates_is_exact() {
        let catalog = initialize().expect("catalog initializes");
        for (key, rate) in &catalog.compute.rates {
            let (instance, os, tenancy) = key;
            let (looked_up, found) = catalog.compute_rate(instance, os, tenancy);
            assert!(found);
            assert_eq!(looked_up, *rate);
        }
        for (sku, rate) in &catalog.volume.rate_per_gb_month {
            let (looked_up, found) = catalog.volume_rate(sku);
            assert!(found);
            assert_eq!(looked_up, *rate);
        }
    }

    /// Synthesizes a catalog far larger than the hand-authored fixtures to
    /// exercise the completeness-floor assertion itself, since the shipped
    /// fallback build deliberately stays small.
    fn synthetic_large_compute_price_list(instance_count: usize) -> String {
        let mut products = String::new();
        let mut on_demand = String::new();
        for i in 0..instance_count {
            let sku = format!("SKU{i}");
            if i > 0 {
                products.push(',');
                on_demand.push(',');
            }
            products.push_str(&format!(
                r#""{sku}":{{"sku":"{sku}","productFamily":"Compute Instance","attributes":{{"instanceType":"synthetic.{i}","operatingSystem":"Linux","tenancy":"Shared","preInstalledSw":"NA","capacitystatus":"Used"}}}}"#
            ));
            on_demand.push_str(&format!(
                r#""{sku}":{{"{sku}.TERM":{{"sku":"{sku}","offerTermCode":"TERM","priceDimensions":{{"{sku}.DIM":{{"unit":"Hrs","pricePerUnit":{{"USD":"0.0100"}}}}}}}}}}"#
            ));
        }
        format!(
            r#"{{"offerCode":"AmazonEC2","version":"synthetic","publicationDate":"synthetic","products":{{{products}}},"terms":{{"OnDemand":{{{on_demand}}}}}}}"#
        )
    }

    #[test]
    fn catalog_completeness_floor_test_is_itself_exercised() {
        let raw_json = synthetic_large_compute_price_list(50_000);
        let raw = parse_raw(&raw_json, "synthetic-ec2").expect("synthetic catalog parses");
        let idx = distill_compute(&raw);
        assert!(idx.rates.len() >= 50_000, "compute index has {} keys, want >= 50000", idx.rates.len());

        let on_demand_term_count: usize = raw.terms.on_demand.values().map(|terms| terms.len()).sum();
        assert!(on_demand_term_count >= 30_000, "on-demand term count is {on_demand_term_count}, want >= 30000");
    }
}
