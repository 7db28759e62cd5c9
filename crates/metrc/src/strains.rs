//! Strains accessor.

use bytes::Bytes;
use metrc_core::Method;

use crate::client::{license, MetrcClient};
use crate::models::Strain;
use crate::Result;

/// Operations on `strains/v1`.
#[derive(Debug, Clone, Copy)]
pub struct Strains<'a> {
    client: &'a MetrcClient,
}

impl<'a> Strains<'a> {
    pub(crate) const fn new(client: &'a MetrcClient) -> Self {
        Self { client }
    }

    /// Fetch a single strain.
    pub async fn get(&self, id: i64, license_number: Option<&str>) -> Result<Strain> {
        let endpoint = license(license_number).append_to(&format!("strains/v1/{id}"));
        self.client
            .get_json(&endpoint, "could not get strains by id")
            .await
    }

    /// List active strains.
    pub async fn active(&self, license_number: Option<&str>) -> Result<Vec<Strain>> {
        let endpoint = license(license_number).append_to("strains/v1/active");
        self.client
            .get_json(&endpoint, "could not get active strains")
            .await
    }

    /// Create strains.
    pub async fn create(&self, strains: &[Strain], license_number: Option<&str>) -> Result<Bytes> {
        let endpoint = license(license_number).append_to("strains/v1/create");
        self.client
            .send_json(Method::Post, &endpoint, strains, "could not create strains")
            .await
    }

    /// Update strains; each record must carry its `id`.
    pub async fn update(&self, strains: &[Strain], license_number: Option<&str>) -> Result<Bytes> {
        let endpoint = license(license_number).append_to("strains/v1/update");
        self.client
            .send_json(Method::Post, &endpoint, strains, "could not update strains")
            .await
    }

    /// Delete a strain.
    pub async fn delete(&self, id: i64, license_number: Option<&str>) -> Result<Bytes> {
        let endpoint = license(license_number).append_to(&format!("strains/v1/{id}"));
        self.client
            .delete(&endpoint, "could not delete strain")
            .await
    }
}
