//! Plant batches accessor.

use bytes::Bytes;
use metrc_core::Method;

use crate::client::{license, required_license, MetrcClient};
use crate::filters::LastModified;
use crate::models::{
    PlantBatch, PlantBatchAdditive, PlantBatchDestroy, PlantBatchGrowthPhase, PlantBatchMove,
    PlantBatchPackage, PlantBatchPlanting, PlantBatchSplit,
};
use crate::Result;

/// Operations on `plantbatches/v1`.
#[derive(Debug, Clone, Copy)]
pub struct PlantBatches<'a> {
    client: &'a MetrcClient,
}

impl<'a> PlantBatches<'a> {
    pub(crate) const fn new(client: &'a MetrcClient) -> Self {
        Self { client }
    }

    /// Fetch a plant batch by identifier.
    pub async fn get(&self, id: i64, license_number: Option<&str>) -> Result<PlantBatch> {
        let endpoint = license(license_number).append_to(&format!("plantbatches/v1/{id}"));
        self.client
            .get_json(&endpoint, "could not get plant batch by id")
            .await
    }

    /// List active plant batches.
    pub async fn active(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<PlantBatch>> {
        self.client
            .get_modified(
                "plantbatches/v1/active",
                license_number,
                last_modified,
                "could not get active plant batches",
            )
            .await
    }

    /// List inactive plant batches.
    pub async fn inactive(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<PlantBatch>> {
        self.client
            .get_modified(
                "plantbatches/v1/inactive",
                license_number,
                last_modified,
                "could not get inactive plant batches",
            )
            .await
    }

    /// List plant batch types.
    pub async fn types(&self) -> Result<Vec<String>> {
        self.client
            .get_json("plantbatches/v1/types", "could not get plant batch types")
            .await
    }

    /// Plant new batches.
    pub async fn create_plantings(
        &self,
        plantings: &[PlantBatchPlanting],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plantbatches/v1/createplantings",
                license_number,
                plantings,
                "could not create plant batch plantings",
            )
            .await
    }

    /// Package plants out of batches.
    ///
    /// `is_from_mother_plant` is sent as `isFromMotherPlant` when given.
    pub async fn create_packages(
        &self,
        packages: &[PlantBatchPackage],
        license_number: &str,
        is_from_mother_plant: Option<bool>,
    ) -> Result<Bytes> {
        let mut params = required_license(license_number);
        params.push_opt("isFromMotherPlant", is_from_mother_plant);
        self.client
            .send_json(
                Method::Post,
                &params.append_to("plantbatches/v1/createpackages"),
                packages,
                "could not create plant batch packages",
            )
            .await
    }

    /// Split plant batches.
    pub async fn split(&self, splits: &[PlantBatchSplit], license_number: &str) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plantbatches/v1/split",
                license_number,
                splits,
                "could not split plant batches",
            )
            .await
    }

    /// Package plant batches from a mother plant.
    pub async fn create_packages_from_mother_plant(
        &self,
        packages: &[PlantBatchPackage],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plantbatches/v1/create/packages/frommotherplant",
                license_number,
                packages,
                "could not create plant batch packages from mother plant",
            )
            .await
    }

    /// Change the growth phase of plant batches.
    pub async fn change_growth_phase(
        &self,
        changes: &[PlantBatchGrowthPhase],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plantbatches/v1/changegrowthphase",
                license_number,
                changes,
                "could not change plant batch growth phase",
            )
            .await
    }

    /// Move plant batches.
    pub async fn move_batches(
        &self,
        moves: &[PlantBatchMove],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Put,
                "plantbatches/v1/moveplantbatches",
                license_number,
                moves,
                "could not move plant batches",
            )
            .await
    }

    /// Record additives applied to plant batches.
    pub async fn add_additives(
        &self,
        additives: &[PlantBatchAdditive],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plantbatches/v1/additives",
                license_number,
                additives,
                "could not add plant batch additives",
            )
            .await
    }

    /// Destroy plants of batches.
    pub async fn destroy(
        &self,
        destroys: &[PlantBatchDestroy],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plantbatches/v1/destroy",
                license_number,
                destroys,
                "could not destroy plant batches",
            )
            .await
    }
}
