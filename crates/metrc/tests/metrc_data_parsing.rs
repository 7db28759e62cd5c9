//! Integration tests for parsing Metrc response data.
//!
//! These tests validate that the metrc models deserialize captured Metrc replies, including
//! the null and missing fields Metrc returns for unset values.

use std::fs;
use std::path::PathBuf;

use metrc::models::{Facility, Package};

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_facilities() {
    let json_data = load_fixture("facilities.json");

    let facilities: Vec<Facility> = serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize facilities: {}", e));

    assert_eq!(facilities.len(), 2);

    let cultivator = &facilities[0];
    assert_eq!(cultivator.name, "Buds R Us");
    assert_eq!(cultivator.license.number, "C12-1000006-LIC");
    assert_eq!(cultivator.license.license_type, "Medical Cultivation");
    assert!(cultivator.support_activation_date.is_none());
    assert!(cultivator.facility_type.can_grow_plants);
    assert!(!cultivator.facility_type.can_sell_to_consumers);
    assert_eq!(
        cultivator.facility_type.restrict_harvest_plant_restore_time_hours,
        24
    );

    let retailer = &facilities[1];
    assert!(retailer.is_owner);
    assert_eq!(retailer.occupations, vec!["Owner".to_string()]);
    assert!(retailer.facility_type.can_sell_to_consumers);
    // Flags missing from the reply default to false
    assert!(!retailer.facility_type.can_grow_plants);
}

#[test]
fn test_deserialize_active_packages() {
    let json_data = load_fixture("active_packages.json");

    let packages: Vec<Package> = serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize packages: {}", e));

    assert_eq!(packages.len(), 2);

    let flower = &packages[0];
    assert_eq!(flower.id, 1);
    assert_eq!(flower.label, "ABCDEF012345670000010011");
    assert_eq!(flower.patient_license_number.as_deref(), Some("X00001"));
    assert_eq!(flower.location_id, None);
    assert_eq!(flower.item_unit_thc_percent, Some(21.3));
    assert_eq!(flower.production_batch_number, None);
    assert_eq!(flower.lab_testing_state, "TestPassed");
    assert_eq!(flower.item.strain_name.as_deref(), Some("Spring Hill Kush"));
    assert!(flower.item.is_used);

    let clones = &packages[1];
    assert_eq!(clones.package_type, "ImmaturePlant");
    assert!((clones.quantity - 10.0).abs() < f64::EPSILON);
    assert!(clones.is_on_hold);
    assert_eq!(clones.finished_date.as_deref(), Some("2020-02-01"));
    // No nested item in the reply
    assert_eq!(clones.item.id, 0);
}

#[test]
fn test_reserialize_keeps_pascal_case() {
    let json_data = load_fixture("active_packages.json");
    let packages: Vec<Package> = serde_json::from_str(&json_data).unwrap();

    let value = serde_json::to_value(&packages[0]).unwrap();
    assert_eq!(value["Label"], "ABCDEF012345670000010011");
    assert_eq!(value["Item"]["Name"], "Buds");
    assert!(value.get("label").is_none());
}
