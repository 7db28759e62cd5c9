//! Location models.

use serde::{Deserialize, Serialize};

/// A location (room) within a facility.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Location {
    /// Location identifier
    pub id: i64,
    /// Location name
    pub name: String,
    /// Identifier of the location type
    pub location_type_id: i64,
    /// Name of the location type
    pub location_type_name: String,
    /// Plant batches may be kept here
    pub for_plant_batches: bool,
    /// Plants may be kept here
    pub for_plants: bool,
    /// Harvests may be dried here
    pub for_harvests: bool,
    /// Packages may be stored here
    pub for_packages: bool,
}

/// A location type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocationType {
    /// Type identifier
    pub id: i64,
    /// Type name
    pub name: String,
    /// Locations of this type accept plant batches
    pub for_plant_batches: bool,
    /// Locations of this type accept plants
    pub for_plants: bool,
    /// Locations of this type accept harvests
    pub for_harvests: bool,
    /// Locations of this type accept packages
    pub for_packages: bool,
}

/// A location in a create or update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct LocationPost {
    /// Location identifier (updates only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Location name
    pub name: String,
    /// Name of the location type
    pub location_type_name: String,
}
