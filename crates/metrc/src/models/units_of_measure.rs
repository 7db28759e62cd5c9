//! Unit of measure models.

use serde::{Deserialize, Serialize};

/// A unit quantities and weights may be expressed in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct UnitOfMeasure {
    /// `CountBased`, `WeightBased` or `VolumeBased`
    pub quantity_type: String,
    /// Full name, e.g. `Grams`
    pub name: String,
    /// Abbreviation, e.g. `g`
    pub abbreviation: String,
}
