//! Plants accessor.

use bytes::Bytes;
use metrc_core::Method;

use crate::client::{license, required_license, segment, MetrcClient};
use crate::filters::LastModified;
use crate::models::{
    Plant, PlantAdditive, PlantAdditivePost, PlantBatchPackageFromPlant, PlantDestroy,
    PlantGrowthPhaseChange, PlantHarvest, PlantManicure, PlantMove, PlantPlanting,
    PlantWasteMethod, PlantWasteReason,
};
use crate::Result;

/// Operations on `plants/v1`.
#[derive(Debug, Clone, Copy)]
pub struct Plants<'a> {
    client: &'a MetrcClient,
}

impl<'a> Plants<'a> {
    pub(crate) const fn new(client: &'a MetrcClient) -> Self {
        Self { client }
    }

    /// Fetch a plant by identifier.
    pub async fn get(&self, id: i64, license_number: Option<&str>) -> Result<Plant> {
        let endpoint = license(license_number).append_to(&format!("plants/v1/{id}"));
        self.client
            .get_json(&endpoint, "could not get plant by id")
            .await
    }

    /// Fetch a plant by tag.
    pub async fn get_by_label(&self, label: &str, license_number: Option<&str>) -> Result<Plant> {
        let endpoint =
            license(license_number).append_to(&format!("plants/v1/{}", segment(label)));
        self.client
            .get_json(&endpoint, "could not get plant by label")
            .await
    }

    /// List vegetative plants.
    pub async fn vegetative(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Plant>> {
        self.by_state("vegetative", license_number, last_modified)
            .await
    }

    /// List flowering plants.
    pub async fn flowering(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Plant>> {
        self.by_state("flowering", license_number, last_modified)
            .await
    }

    /// List plants on hold.
    pub async fn on_hold(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Plant>> {
        self.by_state("onhold", license_number, last_modified).await
    }

    /// List inactive plants.
    pub async fn inactive(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Plant>> {
        self.by_state("inactive", license_number, last_modified)
            .await
    }

    async fn by_state(
        &self,
        state: &str,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Plant>> {
        self.client
            .get_modified(
                &format!("plants/v1/{state}"),
                license_number,
                last_modified,
                &format!("could not get {state} plants"),
            )
            .await
    }

    /// List additives applied to plants.
    pub async fn additives(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<PlantAdditive>> {
        self.client
            .get_modified(
                "plants/v1/additives",
                license_number,
                last_modified,
                "could not get plant additives",
            )
            .await
    }

    /// List growth phases.
    pub async fn growth_phases(&self, license_number: &str) -> Result<Vec<String>> {
        let endpoint = required_license(license_number).append_to("plants/v1/growthphases");
        self.client
            .get_json(&endpoint, "could not get plant growth phases")
            .await
    }

    /// List additive types.
    pub async fn additive_types(&self, license_number: &str) -> Result<Vec<String>> {
        let endpoint = required_license(license_number).append_to("plants/v1/additives/types");
        self.client
            .get_json(&endpoint, "could not get plant additive types")
            .await
    }

    /// List waste methods.
    pub async fn waste_methods(&self, license_number: &str) -> Result<Vec<PlantWasteMethod>> {
        let endpoint = required_license(license_number).append_to("plants/v1/waste/methods");
        self.client
            .get_json(&endpoint, "could not get plant waste methods")
            .await
    }

    /// List waste reasons.
    pub async fn waste_reasons(&self, license_number: &str) -> Result<Vec<PlantWasteReason>> {
        let endpoint = required_license(license_number).append_to("plants/v1/waste/reasons");
        self.client
            .get_json(&endpoint, "could not get plant waste reasons")
            .await
    }

    /// Move plants between locations.
    pub async fn move_plants(&self, moves: &[PlantMove], license_number: &str) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plants/v1/moveplants",
                license_number,
                moves,
                "could not move plants",
            )
            .await
    }

    /// Change plant growth phases.
    pub async fn change_growth_phases(
        &self,
        changes: &[PlantGrowthPhaseChange],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plants/v1/changegrowthphases",
                license_number,
                changes,
                "could not change plant growth phases",
            )
            .await
    }

    /// Destroy plants.
    pub async fn destroy(&self, plants: &[PlantDestroy], license_number: &str) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plants/v1/destroyplants",
                license_number,
                plants,
                "could not destroy plants",
            )
            .await
    }

    /// Record additives applied to plants.
    pub async fn add_additives(
        &self,
        additives: &[PlantAdditivePost],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plants/v1/additives",
                license_number,
                additives,
                "could not add plant additives",
            )
            .await
    }

    /// Create plantings from mother plants.
    pub async fn create_plantings(
        &self,
        plantings: &[PlantPlanting],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plants/v1/create/plantings",
                license_number,
                plantings,
                "could not create plantings from plants",
            )
            .await
    }

    /// Package plant batches from mother plants.
    pub async fn create_batch_packages(
        &self,
        packages: &[PlantBatchPackageFromPlant],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plants/v1/create/plantbatch/packages",
                license_number,
                packages,
                "could not create plant batch packages from plants",
            )
            .await
    }

    /// Manicure plants.
    pub async fn manicure(&self, plants: &[PlantManicure], license_number: &str) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plants/v1/manicureplants",
                license_number,
                plants,
                "could not manicure plants",
            )
            .await
    }

    /// Harvest plants.
    pub async fn harvest(&self, plants: &[PlantHarvest], license_number: &str) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "plants/v1/harvestplants",
                license_number,
                plants,
                "could not harvest plants",
            )
            .await
    }
}
