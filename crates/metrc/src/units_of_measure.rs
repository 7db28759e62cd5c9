//! Units of measure accessor.

use crate::client::MetrcClient;
use crate::models::UnitOfMeasure;
use crate::Result;

/// Operations on `unitsofmeasure/v1`.
#[derive(Debug, Clone, Copy)]
pub struct UnitsOfMeasure<'a> {
    client: &'a MetrcClient,
}

impl<'a> UnitsOfMeasure<'a> {
    pub(crate) const fn new(client: &'a MetrcClient) -> Self {
        Self { client }
    }

    /// List the active units of measure.
    pub async fn active(&self) -> Result<Vec<UnitOfMeasure>> {
        self.client
            .get_json("unitsofmeasure/v1/active", "could not get units of measure")
            .await
    }
}
