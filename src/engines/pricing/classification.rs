// Table-driven classification, one row per canonical service tag. Rows
// are the authoritative source for enrichment semantics (dev-mode
// eligibility, growth hint, lineage derivation) and are kept in
// alphabetical order by `tag` for stable diffs.

use crate::engines::shared::models::{GrowthType, Relationship};

pub struct ServiceClassification {
    pub tag: &'static str,
    pub growth_type: GrowthType,
    pub affected_by_dev_mode: bool,
    /// Ordered by priority: the first key present with a non-empty value wins.
    pub parent_tag_keys: &'static [&'static str],
    pub parent_type: &'static str,
    pub relationship: Relationship,
}

pub const CLASSIFICATION: &[ServiceClassification] = &[
    ServiceClassification {
        tag: "cloudwatch",
        growth_type: GrowthType::Static,
        affected_by_dev_mode: false,
        parent_tag_keys: &[],
        parent_type: "",
        relationship: Relationship::Within,
    },
    ServiceClassification {
        tag: "dynamodb",
        growth_type: GrowthType::Linear,
        affected_by_dev_mode: false,
        parent_tag_keys: &[],
        parent_type: "",
        relationship: Relationship::Within,
    },
    ServiceClassification {
        tag: "ebs",
        growth_type: GrowthType::Static,
        affected_by_dev_mode: false,
        parent_tag_keys: &["instance_id"],
        parent_type: "aws:ec2:instance:Instance",
        relationship: Relationship::AttachedTo,
    },
    ServiceClassification {
        tag: "ec2",
        growth_type: GrowthType::Static,
        affected_by_dev_mode: true,
        parent_tag_keys: &[],
        parent_type: "",
        relationship: Relationship::Within,
    },
    ServiceClassification {
        tag: "eks",
        growth_type: GrowthType::Static,
        affected_by_dev_mode: true,
        parent_tag_keys: &["vpc_id"],
        parent_type: "aws:ec2:vpc:Vpc",
        relationship: Relationship::Within,
    },
    ServiceClassification {
        tag: "elasticache",
        growth_type: GrowthType::Static,
        affected_by_dev_mode: true,
        parent_tag_keys: &["replication_group_id"],
        parent_type: "aws:elasticache:replicationGroup:ReplicationGroup",
        relationship: Relationship::ManagedBy,
    },
    ServiceClassification {
        tag: "elb",
        growth_type: GrowthType::Static,
        affected_by_dev_mode: true,
        parent_tag_keys: &["vpc_id"],
        parent_type: "aws:ec2:vpc:Vpc",
        relationship: Relationship::Within,
    },
    ServiceClassification {
        tag: "lambda",
        growth_type: GrowthType::Static,
        affected_by_dev_mode: false,
        parent_tag_keys: &["vpc_id"],
        parent_type: "aws:ec2:vpc:Vpc",
        relationship: Relationship::Within,
    },
    ServiceClassification {
        tag: "natgateway",
        growth_type: GrowthType::Static,
        affected_by_dev_mode: true,
        parent_tag_keys: &["subnet_id", "vpc_id"],
        parent_type: "aws:ec2:vpc:Vpc",
        relationship: Relationship::Within,
    },
    ServiceClassification {
        tag: "rds",
        growth_type: GrowthType::Static,
        affected_by_dev_mode: true,
        parent_tag_keys: &["db_cluster_identifier", "db_subnet_group_name"],
        parent_type: "aws:rds:cluster:Cluster",
        relationship: Relationship::ManagedBy,
    },
    ServiceClassification {
        tag: "s3",
        growth_type: GrowthType::Linear,
        affected_by_dev_mode: false,
        parent_tag_keys: &[],
        parent_type: "",
        relationship: Relationship::Within,
    },
];

pub fn lookup(tag: &str) -> Option<&'static ServiceClassification> {
    CLASSIFICATION.iter().find(|c| c.tag == tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_sorted_by_tag() {
        let tags: Vec<_> = CLASSIFICATION.iter().map(|c| c.tag).collect();
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn ebs_lineage_matches_instance_scenario() {
        let ebs = lookup("ebs").expect("ebs row present");
        assert_eq!(ebs.parent_tag_keys, &["instance_id"]);
        assert_eq!(ebs.parent_type, "aws:ec2:instance:Instance");
        assert_eq!(ebs.relationship, Relationship::AttachedTo);
    }

    #[test]
    fn unknown_tag_is_none() {
        assert!(lookup("not-a-service").is_none());
    }
}
