//! Plant batch models.
//!
//! A plant batch is a group of untagged immature plants of one strain.

use serde::{Deserialize, Serialize};

use super::plants::ActiveIngredient;

/// A plant batch as returned by `GET plantbatches/v1/...`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlantBatch {
    /// Batch identifier
    pub id: i64,
    /// Batch name
    pub name: String,
    /// `Seed` or `Clone`
    #[serde(rename = "Type")]
    pub batch_type: String,
    /// Location identifier
    pub location_id: Option<i64>,
    /// Location name
    pub location_name: Option<String>,
    /// Location type name
    pub location_type_name: Option<String>,
    /// Strain identifier
    pub strain_id: Option<i64>,
    /// Strain name
    pub strain_name: Option<String>,
    /// Patient license number
    pub patient_license_number: Option<String>,
    /// Plants not yet tagged
    pub untracked_count: i64,
    /// Plants tagged out of the batch
    pub tracked_count: i64,
    /// Plants packaged
    pub packaged_count: i64,
    /// Plants harvested
    pub harvested_count: i64,
    /// Plants destroyed
    pub destroyed_count: i64,
    /// Package the batch was planted from
    pub source_package_id: Option<i64>,
    /// Mother plant identifier
    pub source_plant_id: Option<i64>,
    /// Mother plant tag
    pub source_plant_label: Option<String>,
    /// Planting date
    pub planted_date: String,
    /// Last modification time
    pub last_modified: String,
}

/// A new plant batch planting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantBatchPlanting {
    /// Batch name
    pub name: String,
    /// `Seed` or `Clone`
    #[serde(rename = "Type")]
    pub batch_type: String,
    /// Number of plants
    pub count: i64,
    /// Strain name
    pub strain: String,
    /// Location name
    #[serde(default)]
    pub location: Option<String>,
    /// Patient license number
    pub patient_license_number: String,
    /// Planting date
    pub actual_date: String,
}

/// Package plants out of a batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantBatchPackage {
    /// Batch identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Batch name
    pub plant_batch: String,
    /// Number of plants
    pub count: i64,
    /// Location name
    #[serde(default)]
    pub location: Option<String>,
    /// Item name
    pub item: String,
    /// Tag for the new package
    pub tag: String,
    /// Patient license number
    pub patient_license_number: String,
    /// Note
    pub note: String,
    /// Whether this is a trade sample
    pub is_trade_sample: bool,
    /// Whether this is a donation
    pub is_donation: bool,
    /// Date packaged
    pub actual_date: String,
}

/// Split plants off a batch into a new group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantBatchSplit {
    /// Source batch name
    pub plant_batch: String,
    /// Name of the new group
    pub group_name: String,
    /// Number of plants
    pub count: i64,
    /// Location name
    #[serde(default)]
    pub location: Option<String>,
    /// Strain name
    pub strain: String,
    /// Patient license number
    #[serde(default)]
    pub patient_license_number: Option<String>,
    /// Date split
    pub actual_date: String,
}

/// Move plants of a batch into a growth phase, tagging them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantBatchGrowthPhase {
    /// Batch name
    pub name: String,
    /// Number of plants
    pub count: i64,
    /// First tag to assign
    pub starting_tag: String,
    /// New growth phase
    pub growth_phase: String,
    /// New location
    pub new_location: String,
    /// Date of the change
    pub growth_date: String,
    /// Patient license number
    pub patient_license_number: String,
}

/// Move a plant batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantBatchMove {
    /// Batch name
    pub name: String,
    /// Destination location
    pub location: String,
    /// Date of the move
    pub move_date: String,
}

/// Record an additive applied to a plant batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantBatchAdditive {
    /// Additive type
    pub additive_type: String,
    /// Product trade name
    pub product_trade_name: String,
    /// EPA registration number
    #[serde(default)]
    pub epa_registration_number: Option<String>,
    /// Supplier
    pub product_supplier: String,
    /// Device used to apply the product
    pub application_device: String,
    /// Total amount applied
    pub total_amount_applied: f64,
    /// Unit of the total amount
    pub total_amount_unit_of_measure: String,
    /// Active ingredients
    pub active_ingredients: Vec<ActiveIngredient>,
    /// Batch name
    pub plant_batch_name: String,
    /// Date applied
    pub actual_date: String,
}

/// Destroy plants of a batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantBatchDestroy {
    /// Batch name
    pub plant_batch: String,
    /// Number of plants
    pub count: i64,
    /// Reason note
    pub reason_note: String,
    /// Date destroyed
    pub actual_date: String,
}
