//! Harvests accessor.

use bytes::Bytes;
use metrc_core::Method;

use crate::client::{license, MetrcClient};
use crate::filters::LastModified;
use crate::models::{
    Harvest, HarvestFinish, HarvestMove, HarvestPackagePost, HarvestRemoveWaste, HarvestRename,
    HarvestUnfinish, HarvestWasteType,
};
use crate::Result;

/// Operations on `harvests/v1`.
#[derive(Debug, Clone, Copy)]
pub struct Harvests<'a> {
    client: &'a MetrcClient,
}

impl<'a> Harvests<'a> {
    pub(crate) const fn new(client: &'a MetrcClient) -> Self {
        Self { client }
    }

    /// Fetch a harvest by identifier.
    pub async fn get(&self, id: i64, license_number: Option<&str>) -> Result<Harvest> {
        let endpoint = license(license_number).append_to(&format!("harvests/v1/{id}"));
        self.client
            .get_json(&endpoint, "could not get harvest by id")
            .await
    }

    /// List active harvests.
    pub async fn active(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Harvest>> {
        self.client
            .get_modified(
                "harvests/v1/active",
                license_number,
                last_modified,
                "could not get active harvests",
            )
            .await
    }

    /// List harvests on hold.
    pub async fn on_hold(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Harvest>> {
        self.client
            .get_modified(
                "harvests/v1/onhold",
                license_number,
                last_modified,
                "could not get on hold harvests",
            )
            .await
    }

    /// List inactive harvests.
    pub async fn inactive(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Harvest>> {
        self.client
            .get_modified(
                "harvests/v1/inactive",
                license_number,
                last_modified,
                "could not get inactive harvests",
            )
            .await
    }

    /// List harvest waste types.
    pub async fn waste_types(&self) -> Result<Vec<HarvestWasteType>> {
        self.client
            .get_json("harvests/v1/waste/types", "could not get harvest waste types")
            .await
    }

    /// Create packages from harvests.
    pub async fn create_packages(
        &self,
        packages: &[HarvestPackagePost],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "harvests/v1/create/packages",
                license_number,
                packages,
                "could not create harvest packages",
            )
            .await
    }

    /// Create testing packages from harvests.
    pub async fn create_testing_packages(
        &self,
        packages: &[HarvestPackagePost],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "harvests/v1/create/packages/testing",
                license_number,
                packages,
                "could not create harvest testing packages",
            )
            .await
    }

    /// Move harvests between drying locations.
    pub async fn move_harvests(
        &self,
        moves: &[HarvestMove],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Put,
                "harvests/v1/move",
                license_number,
                moves,
                "could not move harvests",
            )
            .await
    }

    /// Rename harvests.
    pub async fn rename(&self, renames: &[HarvestRename], license_number: &str) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Put,
                "harvests/v1/rename",
                license_number,
                renames,
                "could not rename harvests",
            )
            .await
    }

    /// Remove waste from harvests.
    pub async fn remove_waste(
        &self,
        wastes: &[HarvestRemoveWaste],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "harvests/v1/removewaste",
                license_number,
                wastes,
                "could not remove harvest waste",
            )
            .await
    }

    /// Finish harvests.
    pub async fn finish(&self, harvests: &[HarvestFinish], license_number: &str) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "harvests/v1/finish",
                license_number,
                harvests,
                "could not finish harvests",
            )
            .await
    }

    /// Reopen finished harvests.
    pub async fn unfinish(
        &self,
        harvests: &[HarvestUnfinish],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "harvests/v1/unfinish",
                license_number,
                harvests,
                "could not unfinish harvests",
            )
            .await
    }
}
