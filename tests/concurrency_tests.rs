// Initialization idempotence and concurrent-read safety under real
// thread contention, plus the growth-hint and lineage laws exercised
// across every recognized service tag at once.

use aws_public_pricing::engines::pricing::client;
use aws_public_pricing::engines::shared::models::GrowthType;
use aws_public_pricing::service;
use aws_public_pricing::ResourceDescriptor;
use std::sync::Arc;
use std::thread;

fn descriptor(resource_type: &str, sku: &str) -> ResourceDescriptor {
    ResourceDescriptor {
        provider: "aws".to_string(),
        resource_type: resource_type.to_string(),
        sku: sku.to_string(),
        region: "us-east-1".to_string(),
        ..Default::default()
    }
}

#[test]
fn initialization_is_idempotent_under_concurrent_first_use() {
    let handles: Vec<_> = (0..32)
        .map(|_| thread::spawn(|| client::client().map(|c| c.region().as_ptr() as usize)))
        .collect();
    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap().expect("client initializes")).collect();
    let first = addresses[0];
    assert!(addresses.iter().all(|&a| a == first), "all callers must observe the same catalog instance");
}

#[test]
fn concurrent_reads_of_a_fixed_descriptor_are_byte_identical() {
    let descriptor = Arc::new(descriptor("ec2", "t3.micro"));
    let handles: Vec<_> = (0..16)
        .map(|_| {
            let descriptor = Arc::clone(&descriptor);
            thread::spawn(move || service::get_projected_cost(&descriptor).expect("cost computed"))
        })
        .collect();
    let responses: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = serde_json::to_string(&responses[0]).unwrap();
    for response in &responses[1..] {
        assert_eq!(serde_json::to_string(response).unwrap(), first);
    }
}

#[test]
fn growth_hint_is_total_for_every_recognized_tag() {
    let recognized = [
        ("ec2", "t3.micro"),
        ("ebs", "gp3"),
        ("s3", "STANDARD"),
        ("rds", "db.t3.micro"),
        ("eks", ""),
        ("elasticache", "cache.m5.large"),
        ("dynamodb", ""),
        ("lambda", ""),
        ("elb", ""),
        ("natgateway", ""),
        ("cloudwatch", ""),
    ];
    for (resource_type, sku) in recognized {
        let response = service::get_projected_cost(&descriptor(resource_type, sku))
            .unwrap_or_else(|e| panic!("{resource_type} must resolve: {e}"));
        assert_ne!(
            response.growth_type,
            GrowthType::Unspecified,
            "{resource_type} should carry a non-UNSPECIFIED growth hint"
        );
    }
}

#[test]
fn growth_hint_stays_unspecified_for_unrecognized_tags() {
    let response = service::get_projected_cost(&descriptor("not-a-real-service", "whatever")).expect("zero-cost success");
    assert_eq!(response.growth_type, GrowthType::Unspecified);
}
