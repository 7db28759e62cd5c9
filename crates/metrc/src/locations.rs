//! Locations accessor.

use bytes::Bytes;
use metrc_core::Method;

use crate::client::{license, MetrcClient};
use crate::models::{Location, LocationPost, LocationType};
use crate::Result;

/// Operations on `locations/v1`.
#[derive(Debug, Clone, Copy)]
pub struct Locations<'a> {
    client: &'a MetrcClient,
}

impl<'a> Locations<'a> {
    pub(crate) const fn new(client: &'a MetrcClient) -> Self {
        Self { client }
    }

    /// Fetch a single location.
    pub async fn get(&self, id: i64, license_number: Option<&str>) -> Result<Location> {
        let endpoint = license(license_number).append_to(&format!("locations/v1/{id}"));
        self.client
            .get_json(&endpoint, "could not get locations by id")
            .await
    }

    /// List active locations.
    pub async fn active(&self, license_number: Option<&str>) -> Result<Vec<Location>> {
        let endpoint = license(license_number).append_to("locations/v1/active");
        self.client
            .get_json(&endpoint, "could not get active locations")
            .await
    }

    /// List location types.
    pub async fn types(&self, license_number: Option<&str>) -> Result<Vec<LocationType>> {
        let endpoint = license(license_number).append_to("locations/v1/types");
        self.client
            .get_json(&endpoint, "could not get location types")
            .await
    }

    /// Create locations.
    pub async fn create(
        &self,
        locations: &[LocationPost],
        license_number: Option<&str>,
    ) -> Result<Bytes> {
        let endpoint = license(license_number).append_to("locations/v1/create");
        self.client
            .send_json(Method::Post, &endpoint, locations, "could not create locations")
            .await
    }

    /// Update locations.
    pub async fn update(
        &self,
        locations: &[LocationPost],
        license_number: Option<&str>,
    ) -> Result<Bytes> {
        let endpoint = license(license_number).append_to("locations/v1/update");
        self.client
            .send_json(Method::Post, &endpoint, locations, "could not update locations")
            .await
    }

    /// Delete a location.
    pub async fn delete(&self, id: i64, license_number: Option<&str>) -> Result<Bytes> {
        let endpoint = license(license_number).append_to(&format!("locations/v1/{id}"));
        self.client
            .delete(&endpoint, "could not delete location")
            .await
    }
}
