// Lineage idempotence and the region gate, exercised across several
// parent-key priority orders rather than a single fixed example.

use aws_public_pricing::service;
use aws_public_pricing::{ErrorCategory, ResourceDescriptor};
use std::collections::HashMap;

fn descriptor(resource_type: &str, sku: &str, tags: &[(&str, &str)]) -> ResourceDescriptor {
    ResourceDescriptor {
        provider: "aws".to_string(),
        resource_type: resource_type.to_string(),
        sku: sku.to_string(),
        region: "us-east-1".to_string(),
        tags: tags.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<_, _>>(),
        ..Default::default()
    }
}

#[test]
fn lineage_agrees_when_first_present_parent_key_matches() {
    // nat gateway prioritizes subnet_id over vpc_id; both present, same value
    let a = descriptor("natgateway", "", &[("subnet_id", "subnet-1"), ("vpc_id", "vpc-1")]);
    let b = descriptor("natgateway", "", &[("subnet_id", "subnet-1")]);
    let response_a = service::get_projected_cost(&a).expect("cost computed");
    let response_b = service::get_projected_cost(&b).expect("cost computed");
    assert_eq!(response_a.lineage, response_b.lineage);
    let lineage = response_a.lineage.expect("lineage present");
    assert_eq!(lineage.parent_resource_id, "subnet-1");
}

#[test]
fn lineage_falls_back_to_second_priority_key_when_first_absent() {
    let d = descriptor("natgateway", "", &[("vpc_id", "vpc-9")]);
    let response = service::get_projected_cost(&d).expect("cost computed");
    let lineage = response.lineage.expect("lineage present");
    assert_eq!(lineage.parent_resource_id, "vpc-9");
}

#[test]
fn lineage_absent_when_no_parent_keys_present() {
    let d = descriptor("natgateway", "", &[]);
    let response = service::get_projected_cost(&d).expect("cost computed");
    assert!(response.lineage.is_none());
}

#[test]
fn region_gate_rejects_every_non_matching_region() {
    for region in ["eu-west-1", "ap-southeast-2", "us-west-2", ""] {
        let mut d = descriptor("ec2", "t3.micro", &[]);
        d.region = region.to_string();
        let err = service::get_projected_cost(&d).expect_err(&format!("{region} must be rejected"));
        if region.is_empty() {
            assert_eq!(err.category, ErrorCategory::InvalidResource);
        } else {
            assert_eq!(err.category, ErrorCategory::UnsupportedRegion);
            let detail = err.region_detail.expect("detail present");
            assert_eq!(detail.plugin_region, "us-east-1");
            assert_eq!(detail.required_region, region);
        }
    }
}

#[test]
fn region_gate_accepts_the_embedded_region() {
    let d = descriptor("ec2", "t3.micro", &[]);
    assert!(service::get_projected_cost(&d).is_ok());
}
