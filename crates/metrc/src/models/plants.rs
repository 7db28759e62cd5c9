//! Plant models.

use serde::{Deserialize, Serialize};

/// An individually tagged plant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Plant {
    /// Plant identifier
    pub id: i64,
    /// Plant tag
    pub label: String,
    /// Tracking state, e.g. `Tracked`
    pub state: String,
    /// `Vegetative` or `Flowering`
    pub growth_phase: String,
    /// Batch the plant came from
    pub plant_batch_id: i64,
    /// Name of the originating batch
    pub plant_batch_name: String,
    /// `Seed` or `Clone`
    pub plant_batch_type_name: String,
    /// Strain identifier
    pub strain_id: i64,
    /// Strain name
    pub strain_name: String,
    /// Location identifier
    pub location_id: i64,
    /// Location name
    pub location_name: String,
    /// Patient license number, for medical plants
    pub patient_license_number: Option<String>,
    /// Harvest the plant belongs to
    pub harvest_id: Option<i64>,
    /// Unit the harvested weight is recorded in
    pub harvested_unit_of_weight_name: Option<String>,
    /// Number of harvests taken from the plant
    pub harvest_count: i64,
    /// Whether the plant is on hold
    pub is_on_hold: bool,
    /// Planting date
    pub planted_date: String,
    /// Date the plant became vegetative
    pub vegetative_date: String,
    /// Date the plant started flowering
    pub flowering_date: Option<String>,
    /// Harvest date
    pub harvested_date: Option<String>,
    /// Destruction date
    pub destroyed_date: Option<String>,
    /// Destruction note
    pub destroyed_note: Option<String>,
    /// User who destroyed the plant
    pub destroyed_by_user_name: Option<String>,
    /// Last modification time
    pub last_modified: String,
}

/// An additive application as returned by `GET plants/v1/additives`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlantAdditive {
    /// Additive type
    pub additive_type_name: Option<String>,
    /// Product trade name
    pub product_trade_name: String,
    /// EPA registration number
    pub epa_registration_number: Option<String>,
    /// Supplier
    pub product_supplier: String,
    /// Device used to apply the product
    pub application_device: String,
    /// Unit of the applied amount
    pub amount_unit_of_measure: String,
    /// Total amount applied
    pub total_amount_applied: f64,
    /// Plant batch identifier
    pub plant_batch_id: Option<i64>,
    /// Plant batch name
    pub plant_batch_name: Option<String>,
    /// Number of plants treated
    pub plant_count: i64,
}

/// A waste method.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlantWasteMethod {
    /// Method name
    pub name: String,
}

/// A waste reason.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlantWasteReason {
    /// Reason name
    pub name: String,
    /// Whether a note must accompany the reason
    pub requires_note: bool,
}

/// Move a plant, identified by `id` or `label`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantMove {
    /// Plant identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Plant tag
    #[serde(default)]
    pub label: Option<String>,
    /// Destination location
    pub location: String,
    /// Date of the move
    pub actual_date: String,
}

/// Change the growth phase of a plant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantGrowthPhaseChange {
    /// Plant identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Plant tag
    #[serde(default)]
    pub label: Option<String>,
    /// New tag
    pub new_tag: String,
    /// New growth phase
    pub growth_phase: String,
    /// New location
    pub new_location: String,
    /// Date of the change
    pub growth_date: String,
}

/// Destroy a plant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantDestroy {
    /// Plant identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Plant tag
    #[serde(default)]
    pub label: Option<String>,
    /// Waste method
    pub waste_method_name: String,
    /// Material the waste was mixed with
    pub waste_material_mixed: String,
    /// Waste weight
    pub waste_weight: f64,
    /// Unit of the waste weight
    pub waste_unit_of_measure_name: String,
    /// Waste reason
    pub waste_reason_name: String,
    /// Reason note
    pub reason_note: String,
    /// Date destroyed
    pub actual_date: String,
}

/// Record an additive applied to plants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantAdditivePost {
    /// Additive type, e.g. `Pesticide`
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
    pub total_amount_applied: String,
    /// Active ingredients
    pub active_ingredients: Vec<ActiveIngredient>,
    /// Tags of the treated plants
    pub plant_labels: Vec<String>,
    /// Date applied
    pub actual_date: String,
}

/// Active ingredient of an additive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ActiveIngredient {
    /// Ingredient name
    pub name: String,
    /// Percentage
    pub percentage: f64,
}

/// Create plantings from a plant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantPlanting {
    /// Mother plant tag
    #[serde(default)]
    pub plant_label: Option<String>,
    /// Name of the new batch
    pub plant_batch_name: String,
    /// `Seed` or `Clone`
    pub plant_batch_type: String,
    /// Number of plants
    pub plant_count: i64,
    /// Location name
    #[serde(default)]
    pub location_name: Option<String>,
    /// Strain name
    pub strain_name: String,
    /// Patient license number
    pub patient_license_number: String,
    /// Planting date
    pub actual_date: String,
}

/// Package a plant batch from a mother plant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantBatchPackageFromPlant {
    /// Mother plant tag
    pub plant_label: String,
    /// Tag for the new package
    pub package_tag: String,
    /// `Seed` or `Clone`
    pub plant_batch_type: String,
    /// Item name
    pub item: String,
    /// Location name
    #[serde(default)]
    pub location: Option<String>,
    /// Note
    #[serde(default)]
    pub note: Option<String>,
    /// Whether this is a trade sample
    pub is_trade_sample: bool,
    /// Patient license number
    #[serde(default)]
    pub patient_license_number: Option<String>,
    /// Whether this is a donation
    pub is_donation: bool,
    /// Number of plants
    pub count: i64,
    /// Date packaged
    pub actual_date: String,
}

/// Manicure a plant into a harvest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantManicure {
    /// Plant tag
    pub plant: String,
    /// Weight taken
    pub weight: f64,
    /// Unit of the weight
    pub unit_of_weight: String,
    /// Drying location
    pub drying_location: String,
    /// Harvest to add to; Metrc creates one when absent
    #[serde(default)]
    pub harvest_name: Option<String>,
    /// Patient license number
    pub patient_license_number: String,
    /// Date manicured
    pub actual_date: String,
}

/// Harvest a plant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PlantHarvest {
    /// Plant tag
    pub plant: String,
    /// Wet weight
    pub weight: f64,
    /// Unit of the weight
    pub unit_of_weight: String,
    /// Drying location
    pub drying_location: String,
    /// Harvest name
    pub harvest_name: String,
    /// Patient license number
    pub patient_license_number: String,
    /// Date harvested
    pub actual_date: String,
}
