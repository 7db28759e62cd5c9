//! Item models.
//!
//! An item is a product definition (name, category, unit of measure, potency). Packages
//! reference items by name.

use serde::{Deserialize, Serialize};

/// An item as returned by `GET items/v1/...`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Item {
    /// Item identifier
    pub id: i64,
    /// Item name
    pub name: String,
    /// Category name, e.g. `Buds`
    pub product_category_name: String,
    /// Category type, e.g. `Buds` or `Concentrate`
    pub product_category_type: String,
    /// `CountBased`, `WeightBased` or `VolumeBased`
    pub quantity_type: String,
    /// Lab testing state assigned to new packages of this item
    pub default_lab_testing_state: String,
    /// Unit the item is tracked in
    pub unit_of_measure_name: String,
    /// Approval status
    pub approval_status: String,
    /// When the approval status last changed
    pub approval_status_date_time: String,
    /// Strain identifier, when the category requires one
    pub strain_id: Option<i64>,
    /// Strain name, when the category requires one
    pub strain_name: Option<String>,
    /// Administration method
    pub administration_method: Option<String>,
    /// CBD percentage per unit
    pub unit_cbd_percent: Option<f64>,
    /// CBD content per unit
    pub unit_cbd_content: Option<f64>,
    /// Unit of the CBD content
    pub unit_cbd_content_unit_of_measure_name: Option<String>,
    /// CBD content per dose
    pub unit_cbd_content_dose: Option<f64>,
    /// Unit of the CBD dose
    pub unit_cbd_content_dose_unit_of_measure_name: Option<String>,
    /// THC percentage per unit
    pub unit_thc_percent: Option<f64>,
    /// THC content per unit
    pub unit_thc_content: Option<f64>,
    /// Unit of the THC content
    pub unit_thc_content_unit_of_measure_name: Option<String>,
    /// THC content per dose
    pub unit_thc_content_dose: Option<f64>,
    /// Unit of the THC dose
    pub unit_thc_content_dose_unit_of_measure_name: Option<String>,
    /// Volume per unit
    pub unit_volume: Option<f64>,
    /// Unit of the volume
    pub unit_volume_unit_of_measure_name: Option<String>,
    /// Weight per unit
    pub unit_weight: Option<f64>,
    /// Unit of the weight
    pub unit_weight_unit_of_measure_name: Option<String>,
    /// Serving size
    pub serving_size: Option<String>,
    /// Supply duration in days
    pub supply_duration_days: Option<i64>,
    /// Number of doses
    pub number_of_doses: Option<i64>,
    /// Quantity per unit
    pub unit_quantity: Option<i64>,
    /// Unit of the per-unit quantity
    pub unit_quantity_unit_of_measure_name: Option<String>,
    /// Ingredients
    pub ingredients: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Whether any package references the item
    pub is_used: bool,
}

/// An item in a create or update request.
///
/// `id` is only sent for updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ItemPost {
    /// Item identifier (updates only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Category name
    pub item_category: String,
    /// Item name
    pub name: String,
    /// Unit of measure name
    pub unit_of_measure: String,
    /// Strain name
    #[serde(default)]
    pub strain: Option<String>,
    /// Brand name
    #[serde(default)]
    pub item_brand: Option<String>,
    /// Administration method
    #[serde(default)]
    pub administration_method: Option<String>,
    /// CBD percentage per unit
    #[serde(default)]
    pub unit_cbd_percent: Option<f64>,
    /// CBD content per unit
    #[serde(default)]
    pub unit_cbd_content: Option<f64>,
    /// Unit of the CBD content
    #[serde(default)]
    pub unit_cbd_content_unit_of_measure: Option<String>,
    /// CBD content per dose
    #[serde(default)]
    pub unit_cbd_content_dose: Option<f64>,
    /// Unit of the CBD dose
    #[serde(default)]
    pub unit_cbd_content_dose_unit_of_measure: Option<String>,
    /// THC percentage per unit
    #[serde(default)]
    pub unit_thc_percent: Option<f64>,
    /// THC content per unit
    #[serde(default)]
    pub unit_thc_content: Option<f64>,
    /// Unit of the THC content
    #[serde(default)]
    pub unit_thc_content_unit_of_measure: Option<String>,
    /// THC content per dose
    #[serde(default)]
    pub unit_thc_content_dose: Option<f64>,
    /// Unit of the THC dose
    #[serde(default)]
    pub unit_thc_content_dose_unit_of_measure: Option<String>,
    /// Volume per unit
    #[serde(default)]
    pub unit_volume: Option<f64>,
    /// Unit of the volume
    #[serde(default)]
    pub unit_volume_unit_of_measure: Option<String>,
    /// Weight per unit
    #[serde(default)]
    pub unit_weight: Option<f64>,
    /// Unit of the weight
    #[serde(default)]
    pub unit_weight_unit_of_measure: Option<String>,
    /// Serving size
    #[serde(default)]
    pub serving_size: Option<f64>,
    /// Supply duration in days
    #[serde(default)]
    pub supply_duration_days: Option<i64>,
    /// Number of doses
    #[serde(default)]
    pub number_of_doses: Option<i64>,
    /// Ingredients
    #[serde(default)]
    pub ingredients: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
}

/// An item category and the attributes it requires.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemCategory {
    /// Category name
    pub name: String,
    /// Category type
    pub product_category_type: String,
    /// `CountBased`, `WeightBased` or `VolumeBased`
    pub quantity_type: String,
    /// Items require a strain
    pub requires_strain: bool,
    /// Items require a brand
    pub requires_item_brand: bool,
    /// Items require an administration method
    pub requires_administration_method: bool,
    /// Items require a CBD percentage
    pub requires_unit_cbd_percent: bool,
    /// Items require a CBD content
    pub requires_unit_cbd_content: bool,
    /// Items require a CBD dose
    pub requires_unit_cbd_content_dose: bool,
    /// Items require a THC percentage
    pub requires_unit_thc_percent: bool,
    /// Items require a THC content
    pub requires_unit_thc_content: bool,
    /// Items require a THC dose
    pub requires_unit_thc_content_dose: bool,
    /// Items require a unit volume
    pub requires_unit_volume: bool,
    /// Items require a unit weight
    pub requires_unit_weight: bool,
    /// Items require a serving size
    pub requires_serving_size: bool,
    /// Items require a supply duration
    pub requires_supply_duration_days: bool,
    /// Items require a number of doses
    pub requires_number_of_doses: bool,
    /// Items require ingredients
    pub requires_ingredients: bool,
    /// Items require a description
    pub requires_description: bool,
    /// Number of product photos required
    pub requires_product_photos: i64,
    /// Number of label photos required
    pub requires_label_photos: i64,
    /// Number of packaging photos required
    pub requires_packaging_photos: i64,
    /// Items may contain seeds
    pub can_contain_seeds: bool,
    /// Items may be remediated
    pub can_be_remediated: bool,
}
