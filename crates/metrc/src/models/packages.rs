//! Package models.

use serde::{Deserialize, Serialize};

use super::items::Item;

/// A package as returned by `GET packages/v1/...`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Package {
    /// Package identifier
    pub id: i64,
    /// Package tag
    pub label: String,
    /// Package type, e.g. `Product`
    pub package_type: String,
    /// Names of the harvests the package came from
    pub source_harvest_names: Option<String>,
    /// Current location identifier
    pub location_id: Option<i64>,
    /// Current location name
    pub location_name: Option<String>,
    /// Current location type
    pub location_type_name: Option<String>,
    /// Quantity on hand
    pub quantity: f64,
    /// Unit of the quantity
    pub unit_of_measure_name: String,
    /// Abbreviated unit of the quantity
    pub unit_of_measure_abbreviation: String,
    /// Patient license number, for medical packages
    pub patient_license_number: Option<String>,
    /// Item identifier
    pub product_id: i64,
    /// Item name
    pub product_name: String,
    /// Item category
    pub product_category_name: String,
    /// License of the facility that owns the item
    pub item_from_facility_license_number: Option<String>,
    /// Name of the facility that owns the item
    pub item_from_facility_name: Option<String>,
    /// Item strain
    pub item_strain_name: Option<String>,
    /// Item CBD percentage
    pub item_unit_cbd_percent: Option<f64>,
    /// Item CBD content
    pub item_unit_cbd_content: Option<f64>,
    /// Unit of the item CBD content
    pub item_unit_cbd_content_unit_of_measure_name: Option<String>,
    /// Item THC percentage
    pub item_unit_thc_percent: Option<f64>,
    /// Item THC content
    pub item_unit_thc_content: Option<f64>,
    /// Unit of the item THC content
    pub item_unit_thc_content_unit_of_measure_name: Option<String>,
    /// Item unit volume
    pub item_unit_volume: Option<f64>,
    /// Unit of the item volume
    pub item_unit_volume_unit_of_measure_name: Option<String>,
    /// Item unit weight
    pub item_unit_weight: Option<f64>,
    /// Unit of the item weight
    pub item_unit_weight_unit_of_measure_name: Option<String>,
    /// Item serving size
    pub item_serving_size: Option<f64>,
    /// Item supply duration in days
    pub item_supply_duration_days: Option<i64>,
    /// Item unit quantity
    pub item_unit_quantity: Option<f64>,
    /// Unit of the item quantity
    pub item_unit_quantity_unit_of_measure_name: Option<String>,
    /// Free-form note
    pub note: Option<String>,
    /// Date packaged
    pub packaged_date: String,
    /// Lab testing state when created
    pub initial_lab_testing_state: String,
    /// Current lab testing state
    pub lab_testing_state: String,
    /// When the lab testing state last changed
    pub lab_testing_state_date: String,
    /// Whether this is a production batch
    pub is_production_batch: bool,
    /// Production batch number
    pub production_batch_number: Option<String>,
    /// Whether this is a trade sample
    pub is_trade_sample: bool,
    /// Whether this is a donation
    pub is_donation: bool,
    /// Whether the donation flag carries over to derived packages
    pub is_donation_persistent: bool,
    /// Whether the source package was a donation
    pub source_package_is_donation: bool,
    /// Whether this is a testing sample
    pub is_testing_sample: bool,
    /// Whether this is a process validation testing sample
    pub is_process_validation_testing_sample: bool,
    /// Whether the product requires remediation
    pub product_requires_remediation: bool,
    /// Whether the package contains remediated product
    pub contains_remediated_product: bool,
    /// Remediation date
    pub remediation_date: Option<String>,
    /// When the package was received
    pub received_date_time: Option<String>,
    /// Manifest the package was received on
    pub received_from_manifest_number: Option<String>,
    /// License of the shipping facility
    pub received_from_facility_license_number: Option<String>,
    /// Name of the shipping facility
    pub received_from_facility_name: Option<String>,
    /// Whether the package is on hold
    pub is_on_hold: bool,
    /// Archive date
    pub archived_date: Option<String>,
    /// Finish date
    pub finished_date: Option<String>,
    /// Last modification time
    pub last_modified: String,
    /// Full item record
    pub item: Item,
}

/// Reason accepted by `POST packages/v1/adjust`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct PackageAdjustReason {
    /// Reason name
    pub name: String,
    /// Whether a note must accompany the adjustment
    pub requires_note: bool,
}

/// A new package, created from existing packages listed in `ingredients`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PackagePost {
    /// Tag for the new package
    pub tag: String,
    /// Location name
    #[serde(default)]
    pub location: Option<String>,
    /// Item name
    pub item: String,
    /// Quantity
    pub quantity: f64,
    /// Unit of the quantity
    pub unit_of_measure: String,
    /// Patient license number
    #[serde(default)]
    pub patient_license_number: Option<String>,
    /// Free-form note
    #[serde(default)]
    pub note: Option<String>,
    /// Whether this is a production batch
    #[serde(default)]
    pub is_production_batch: bool,
    /// Production batch number
    #[serde(default)]
    pub production_batch_number: Option<String>,
    /// Whether this is a donation
    #[serde(default)]
    pub is_donation: bool,
    /// Whether the product requires remediation
    #[serde(default)]
    pub product_requires_remediation: bool,
    /// Reuse the item of the source packages
    #[serde(default)]
    pub use_same_item: bool,
    /// Date the package was created
    pub actual_date: String,
    /// Source packages
    pub ingredients: Vec<PackageIngredient>,
}

/// Quantity drawn from a source package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PackageIngredient {
    /// Source package label
    pub package: String,
    /// Quantity drawn
    pub quantity: f64,
    /// Unit of the quantity
    pub unit_of_measure: String,
}

/// Change the item of a package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PackageItemChange {
    /// Package label
    pub label: String,
    /// New item name
    pub item: String,
}

/// Replace the note on a package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PackageNote {
    /// Package label
    pub package_label: String,
    /// New note
    pub note: String,
}

/// Move a package to another location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PackageLocationChange {
    /// Package label
    pub label: String,
    /// Destination location name
    pub location: String,
    /// Date of the move
    pub move_date: String,
}

/// Adjust the quantity of a package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PackageAdjustment {
    /// Package label
    pub label: String,
    /// Signed quantity delta
    pub quantity: f64,
    /// Unit of the delta
    pub unit_of_measure: String,
    /// One of the names from [`PackageAdjustReason`]
    pub adjustment_reason: String,
    /// Date of the adjustment
    pub adjustment_date: String,
    /// Note, required by some reasons
    #[serde(default)]
    pub reason_note: Option<String>,
}

/// Finish a package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PackageFinish {
    /// Package label
    pub label: String,
    /// Date finished
    pub actual_date: String,
}

/// Reopen a finished package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PackageUnfinish {
    /// Package label
    pub label: String,
}

/// Record a remediation of a package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PackageRemediation {
    /// Package label
    pub package_label: String,
    /// Remediation method
    pub remediation_method_name: String,
    /// Date of the remediation
    pub remediation_date: String,
    /// Steps taken
    pub remediation_steps: String,
}
