//! Plan and Coverage Resolver Tests
//!
//! # Test Organization
//!
//! - `resolution_tests` - premium bands map to the expected tier
//! - `limit_tests` - ceilings per claim type, including unlimited tiers
//! - `loading_tests` - tables parsed from TOML text and files

use domain_policy::plan::{CoverageLimit, Plan, PlanError, PlanTable};
use domain_policy::ProductType;
use rust_decimal_macros::dec;

fn table() -> PlanTable {
    PlanTable::standard().expect("standard plan table loads")
}

// ============================================================================
// RESOLUTION TESTS
// ============================================================================

mod resolution_tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let table = table();
        let name = |premium| {
            table
                .determine_plan(ProductType::Health, premium)
                .map(|p| p.name.clone())
        };

        assert_eq!(name(dec!(100)).as_deref(), Some("Basic"));
        assert_eq!(name(dec!(499.99)).as_deref(), Some("Basic"));
        assert_eq!(name(dec!(500)).as_deref(), Some("Standard"));
        assert_eq!(name(dec!(1500)).as_deref(), Some("Premium"));
        assert_eq!(name(dec!(25000)).as_deref(), Some("Ultra Premium"));
    }

    #[test]
    fn test_bands_differ_by_product_type() {
        let table = table();
        let travel = table.determine_plan(ProductType::Travel, dec!(200)).unwrap();
        let business = table.determine_plan(ProductType::Business, dec!(200)).unwrap();

        assert_eq!(travel.name, "Premium");
        assert_eq!(business.name, "Basic");
    }

    #[test]
    fn test_premium_below_every_band_has_no_plan() {
        let table = PlanTable::new(vec![Plan {
            product_type: ProductType::Motor,
            name: "Standard".to_string(),
            min_premium: dec!(400),
            limits: vec![],
        }])
        .unwrap();

        assert!(table.determine_plan(ProductType::Motor, dec!(399)).is_none());
        assert!(table.determine_plan(ProductType::Life, dec!(10000)).is_none());
    }
}

// ============================================================================
// LIMIT TESTS
// ============================================================================

mod limit_tests {
    use super::*;

    #[test]
    fn test_ceiling_for_matching_claim_type() {
        let table = table();
        let plan = table.determine_plan(ProductType::Motor, dec!(950)).unwrap();
        assert_eq!(plan.coverage_limit(ProductType::Motor, ProductType::Motor), Some(dec!(75000)));
    }

    #[test]
    fn test_ultra_premium_health_is_unlimited() {
        let table = table();
        let plan = table.determine_plan(ProductType::Health, dec!(3000)).unwrap();
        assert_eq!(plan.name, "Ultra Premium");
        assert_eq!(plan.coverage_limit(ProductType::Health, ProductType::Health), None);
    }

    #[test]
    fn test_other_claim_types_have_no_ceiling() {
        let table = table();
        let plan = table.determine_plan(ProductType::Fire, dec!(250)).unwrap();
        assert_eq!(plan.coverage_limit(ProductType::Fire, ProductType::Property), None);
        assert_eq!(plan.coverage_limit(ProductType::Home, ProductType::Fire), None);
    }
}

// ============================================================================
// LOADING TESTS
// ============================================================================

mod loading_tests {
    use super::*;

    const TABLE: &str = r#"
[[tiers]]
product_type = "LIFE"
name = "Gold"
min_premium = "1000"
limits = [{ claim_type = "LIFE", amount = "250000.50" }]

[[tiers]]
product_type = "LIFE"
name = "Bronze"
min_premium = "0"
"#;

    #[test]
    fn test_tiers_are_sorted_by_band() {
        let table = PlanTable::from_toml_str(TABLE).unwrap();
        let names: Vec<_> = table.tiers_for(ProductType::Life).map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bronze", "Gold"]);
    }

    #[test]
    fn test_decimal_limits_load_exactly() {
        let table = PlanTable::from_toml_str(TABLE).unwrap();
        let gold = table.determine_plan(ProductType::Life, dec!(1000)).unwrap();
        assert_eq!(
            gold.limits,
            vec![CoverageLimit { claim_type: ProductType::Life, amount: Some(dec!(250000.50)) }]
        );
    }

    #[test]
    fn test_negative_band_is_rejected() {
        let source = r#"
[[tiers]]
product_type = "HOME"
name = "Broken"
min_premium = "-5"
"#;
        assert!(matches!(PlanTable::from_toml_str(source), Err(PlanError::Invalid(_))));
    }

    #[test]
    fn test_unknown_product_type_fails_to_load() {
        let source = r#"
[[tiers]]
product_type = "PET"
name = "Basic"
min_premium = "0"
"#;
        assert!(matches!(PlanTable::from_toml_str(source), Err(PlanError::Load(_))));
    }

    #[test]
    fn test_standard_table_file_loads_from_disk() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/plans.toml");
        let table = PlanTable::from_file(path).unwrap();
        assert_eq!(table, PlanTable::standard().unwrap());
    }
}
