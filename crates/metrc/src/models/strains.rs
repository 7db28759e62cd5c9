//! Strain models.

use serde::{Deserialize, Serialize};

/// A strain, used both in responses and in create/update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Strain {
    /// Strain identifier; omitted on create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Strain name
    pub name: String,
    /// Testing status, e.g. `None` or `InHouse`
    pub testing_status: String,
    /// THC level
    pub thc_level: f64,
    /// CBD level
    pub cbd_level: f64,
    /// Indica percentage
    pub indica_percentage: f64,
    /// Sativa percentage
    pub sativa_percentage: f64,
}
