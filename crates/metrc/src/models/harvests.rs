//! Harvest models.

use serde::{Deserialize, Serialize};

/// A harvest batch as returned by `GET harvests/v1/...`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Harvest {
    /// Harvest identifier
    pub id: i64,
    /// Harvest name
    pub name: String,
    /// `Product`, `WholePlant` or `Manicure`
    pub harvest_type: String,
    /// Number of strains harvested
    pub source_strain_count: i64,
    /// Strain names, comma separated
    pub source_strain_names: Option<String>,
    /// Strains harvested
    pub strains: Vec<String>,
    /// Drying location identifier
    pub drying_location_id: i64,
    /// Drying location name
    pub drying_location_name: String,
    /// Drying location type
    pub drying_location_type_name: Option<String>,
    /// Patient license number
    pub patient_license_number: Option<String>,
    /// Weight remaining
    pub current_weight: f64,
    /// Weight removed as waste
    pub total_waste_weight: f64,
    /// Number of plants harvested
    pub plant_count: i64,
    /// Total wet weight
    pub total_wet_weight: f64,
    /// Weight restored after packaging
    pub total_restored_weight: f64,
    /// Number of packages created
    pub package_count: i64,
    /// Weight packaged
    pub total_packaged_weight: f64,
    /// Unit all weights are in
    pub unit_of_weight_name: String,
    /// Lab testing state
    pub lab_testing_state: Option<String>,
    /// When the lab testing state last changed
    pub lab_testing_state_date: Option<String>,
    /// Whether the harvest is on hold
    pub is_on_hold: bool,
    /// Harvest start date
    pub harvest_start_date: String,
    /// Finish date
    pub finished_date: Option<String>,
    /// Archive date
    pub archived_date: Option<String>,
    /// Last modification time
    pub last_modified: String,
}

/// A harvest waste type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct HarvestWasteType {
    /// Type name
    pub name: String,
}

/// Weight drawn from a harvest, identified by `harvest_id` or `harvest_name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct HarvestIngredient {
    /// Harvest identifier
    #[serde(default)]
    pub harvest_id: Option<i64>,
    /// Harvest name
    #[serde(default)]
    pub harvest_name: Option<String>,
    /// Weight drawn
    pub weight: f64,
    /// Unit of the weight
    pub unit_of_weight: String,
}

/// A package created from harvests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct HarvestPackagePost {
    /// Tag for the new package
    pub tag: String,
    /// Location name
    #[serde(default)]
    pub location: Option<String>,
    /// Item name
    pub item: String,
    /// Unit of weight
    pub unit_of_weight: String,
    /// Patient license number
    pub patient_license_number: String,
    /// Note
    pub note: String,
    /// Whether this is a production batch
    pub is_production_batch: bool,
    /// Production batch number
    #[serde(default)]
    pub production_batch_number: Option<String>,
    /// Whether this is a trade sample
    pub is_trade_sample: bool,
    /// Whether this is a donation
    pub is_donation: bool,
    /// Whether the product requires remediation
    pub product_requires_remediation: bool,
    /// Whether the product is being remediated
    pub remediate_product: bool,
    /// Remediation method identifier
    #[serde(default)]
    pub remediation_method_id: Option<i64>,
    /// Remediation date
    #[serde(default)]
    pub remediation_date: Option<String>,
    /// Remediation steps
    #[serde(default)]
    pub remediation_steps: Option<Vec<String>>,
    /// Date packaged
    pub actual_date: String,
    /// Source harvests
    pub ingredients: Vec<HarvestIngredient>,
}

/// Move a harvest to another drying location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct HarvestMove {
    /// Harvest identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Harvest name
    #[serde(default)]
    pub harvest_name: Option<String>,
    /// Destination drying location
    pub drying_location: String,
    /// Date of the move
    pub actual_date: String,
}

/// Remove waste from a harvest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct HarvestRemoveWaste {
    /// Harvest identifier
    pub id: i64,
    /// One of the names from [`HarvestWasteType`]
    pub waste_type: String,
    /// Unit of the weight
    pub unit_of_weight: String,
    /// Weight removed
    pub waste_weight: f64,
    /// Date removed
    pub actual_date: String,
}

/// Rename a harvest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct HarvestRename {
    /// Harvest identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Current name
    #[serde(default)]
    pub old_name: Option<String>,
    /// New name
    pub new_name: String,
}

/// Finish a harvest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct HarvestFinish {
    /// Harvest identifier
    pub id: i64,
    /// Date finished
    pub actual_date: String,
}

/// Reopen a finished harvest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct HarvestUnfinish {
    /// Harvest identifier
    pub id: i64,
}
