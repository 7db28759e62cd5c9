//! Facilities accessor.

use crate::client::MetrcClient;
use crate::models::Facility;
use crate::Result;

/// Operations on `facilities/v1`.
#[derive(Debug, Clone, Copy)]
pub struct Facilities<'a> {
    client: &'a MetrcClient,
}

impl<'a> Facilities<'a> {
    pub(crate) const fn new(client: &'a MetrcClient) -> Self {
        Self { client }
    }

    /// List the facilities the user key has access to.
    pub async fn list(&self) -> Result<Vec<Facility>> {
        self.client
            .get_json("facilities/v1", "could not get facilities")
            .await
    }
}
