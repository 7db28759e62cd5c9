//! Packages accessor.

use bytes::Bytes;
use metrc_core::Method;

use crate::client::{license, required_license, segment, MetrcClient};
use crate::filters::LastModified;
use crate::models::{
    Package, PackageAdjustReason, PackageAdjustment, PackageFinish, PackageItemChange,
    PackageLocationChange, PackageNote, PackagePost, PackageRemediation, PackageUnfinish,
};
use crate::Result;

/// Operations on `packages/v1`.
#[derive(Debug, Clone, Copy)]
pub struct Packages<'a> {
    client: &'a MetrcClient,
}

impl<'a> Packages<'a> {
    pub(crate) const fn new(client: &'a MetrcClient) -> Self {
        Self { client }
    }

    /// Fetch a package by identifier.
    pub async fn get(&self, id: i64, license_number: Option<&str>) -> Result<Package> {
        let endpoint = license(license_number).append_to(&format!("packages/v1/{id}"));
        self.client
            .get_json(&endpoint, "could not get packages by id")
            .await
    }

    /// Fetch a package by tag.
    pub async fn get_by_label(&self, label: &str, license_number: Option<&str>) -> Result<Package> {
        let endpoint =
            license(license_number).append_to(&format!("packages/v1/{}", segment(label)));
        self.client
            .get_json(&endpoint, "could not get packages by label")
            .await
    }

    /// List active packages.
    pub async fn active(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Package>> {
        self.client
            .get_modified(
                "packages/v1/active",
                license_number,
                last_modified,
                "could not get active packages",
            )
            .await
    }

    /// List packages on hold.
    pub async fn on_hold(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Package>> {
        self.client
            .get_modified(
                "packages/v1/onhold",
                license_number,
                last_modified,
                "could not get on hold packages",
            )
            .await
    }

    /// List inactive packages.
    pub async fn inactive(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Package>> {
        self.client
            .get_modified(
                "packages/v1/inactive",
                license_number,
                last_modified,
                "could not get inactive packages",
            )
            .await
    }

    /// List package types.
    pub async fn types(&self) -> Result<Vec<String>> {
        self.client
            .get_json("packages/v1/types", "could not get package types")
            .await
    }

    /// List the reasons accepted by [`Packages::adjust`].
    pub async fn adjust_reasons(&self, license_number: &str) -> Result<Vec<PackageAdjustReason>> {
        let endpoint = required_license(license_number).append_to("packages/v1/adjust/reasons");
        self.client
            .get_json(&endpoint, "could not get package adjust reasons")
            .await
    }

    /// Create packages from existing packages.
    pub async fn create(&self, packages: &[PackagePost], license_number: &str) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "packages/v1/create",
                license_number,
                packages,
                "could not create packages",
            )
            .await
    }

    /// Create testing packages.
    pub async fn create_testing(
        &self,
        packages: &[PackagePost],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "packages/v1/create/testing",
                license_number,
                packages,
                "could not create testing packages",
            )
            .await
    }

    /// Create plantings from packages.
    pub async fn create_plantings(
        &self,
        packages: &[PackagePost],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "packages/v1/create/plantings",
                license_number,
                packages,
                "could not create plantings from packages",
            )
            .await
    }

    /// Change the item of packages.
    pub async fn change_item(
        &self,
        changes: &[PackageItemChange],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "packages/v1/change/item",
                license_number,
                changes,
                "could not change package items",
            )
            .await
    }

    /// Replace package notes.
    pub async fn change_note(&self, notes: &[PackageNote], license_number: &str) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Put,
                "packages/v1/change/note",
                license_number,
                notes,
                "could not change package notes",
            )
            .await
    }

    /// Move packages between locations.
    pub async fn change_locations(
        &self,
        changes: &[PackageLocationChange],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "packages/v1/change/locations",
                license_number,
                changes,
                "could not change package locations",
            )
            .await
    }

    /// Adjust package quantities.
    pub async fn adjust(
        &self,
        adjustments: &[PackageAdjustment],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "packages/v1/adjust",
                license_number,
                adjustments,
                "could not adjust packages",
            )
            .await
    }

    /// Finish packages.
    pub async fn finish(&self, finishes: &[PackageFinish], license_number: &str) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "packages/v1/finish",
                license_number,
                finishes,
                "could not finish packages",
            )
            .await
    }

    /// Reopen finished packages.
    pub async fn unfinish(
        &self,
        unfinishes: &[PackageUnfinish],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "packages/v1/unfinish",
                license_number,
                unfinishes,
                "could not unfinish packages",
            )
            .await
    }

    /// Record package remediations.
    pub async fn remediate(
        &self,
        remediations: &[PackageRemediation],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "packages/v1/remediate",
                license_number,
                remediations,
                "could not remediate packages",
            )
            .await
    }
}
