//! Transfers accessor.

use bytes::Bytes;
use metrc_core::Method;

use crate::client::{required_license, MetrcClient};
use crate::filters::LastModified;
use crate::models::{
    Transfer, TransferDelivery, TransferDeliveryPackage, TransferDeliveryPackageWholesale,
    TransferExternalIncoming, TransferRequiredLabTestBatch, TransferTemplate, TransferTransporter,
    TransferTransporterDetails, TransferType,
};
use crate::Result;

/// Operations on `transfers/v1`.
///
/// Template lookups take a template delivery identifier, not a manifest number.
#[derive(Debug, Clone, Copy)]
pub struct Transfers<'a> {
    client: &'a MetrcClient,
}

impl<'a> Transfers<'a> {
    pub(crate) const fn new(client: &'a MetrcClient) -> Self {
        Self { client }
    }

    /// List incoming transfers.
    pub async fn incoming(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Transfer>> {
        self.client
            .get_modified(
                "transfers/v1/incoming",
                license_number,
                last_modified,
                "could not get incoming transfers",
            )
            .await
    }

    /// List outgoing transfers.
    pub async fn outgoing(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Transfer>> {
        self.client
            .get_modified(
                "transfers/v1/outgoing",
                license_number,
                last_modified,
                "could not get outgoing transfers",
            )
            .await
    }

    /// List rejected transfers.
    pub async fn rejected(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Transfer>> {
        self.client
            .get_modified(
                "transfers/v1/rejected",
                license_number,
                last_modified,
                "could not get rejected transfers",
            )
            .await
    }

    /// List the deliveries of a transfer.
    pub async fn deliveries(&self, id: i64) -> Result<Vec<TransferDelivery>> {
        self.client
            .get_json(
                &format!("transfers/v1/{id}/deliveries"),
                "could not get transfer deliveries",
            )
            .await
    }

    /// List the transporters of a delivery.
    pub async fn transporters(&self, id: i64) -> Result<Vec<TransferTransporter>> {
        self.client
            .get_json(
                &format!("transfers/v1/{id}/transporters"),
                "could not get transfer transporters",
            )
            .await
    }

    /// List driver and vehicle details of a delivery.
    pub async fn transporter_details(&self, id: i64) -> Result<Vec<TransferTransporterDetails>> {
        self.client
            .get_json(
                &format!("transfers/v1/{id}/transporters/details"),
                "could not get transfer transporter details",
            )
            .await
    }

    /// List the packages of a delivery.
    pub async fn delivery_packages(&self, id: i64) -> Result<Vec<TransferDeliveryPackage>> {
        self.client
            .get_json(
                &format!("transfers/v1/delivery/{id}/packages"),
                "could not get transfer delivery packages",
            )
            .await
    }

    /// List wholesale prices of the packages of a delivery.
    pub async fn delivery_packages_wholesale(
        &self,
        id: i64,
    ) -> Result<Vec<TransferDeliveryPackageWholesale>> {
        self.client
            .get_json(
                &format!("transfers/v1/delivery/{id}/packages/wholesale"),
                "could not get transfer delivery wholesale packages",
            )
            .await
    }

    /// List the lab test batches required for a delivery package.
    pub async fn required_lab_test_batches(
        &self,
        package_id: i64,
    ) -> Result<Vec<TransferRequiredLabTestBatch>> {
        self.client
            .get_json(
                &format!("transfers/v1/delivery/package/{package_id}/requiredlabtestbatches"),
                "could not get required lab test batches",
            )
            .await
    }

    /// List delivery package states.
    pub async fn delivery_package_states(&self) -> Result<Vec<String>> {
        self.client
            .get_json(
                "transfers/v1/delivery/packages/states",
                "could not get transfer delivery package states",
            )
            .await
    }

    /// Create external incoming transfers.
    pub async fn create_external_incoming(
        &self,
        transfers: &[TransferExternalIncoming],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "transfers/v1/external/incoming",
                license_number,
                transfers,
                "could not create external incoming transfers",
            )
            .await
    }

    /// Update external incoming transfers; each record must carry a `transfer_id`.
    pub async fn update_external_incoming(
        &self,
        transfers: &[TransferExternalIncoming],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Put,
                "transfers/v1/external/incoming",
                license_number,
                transfers,
                "could not update external incoming transfers",
            )
            .await
    }

    /// Void an external incoming transfer.
    pub async fn delete_external_incoming(&self, id: i64, license_number: &str) -> Result<Bytes> {
        let endpoint = required_license(license_number)
            .append_to(&format!("transfers/v1/external/incoming/{id}"));
        self.client
            .delete(&endpoint, "could not delete external incoming transfer")
            .await
    }

    /// List transfer templates.
    pub async fn templates(
        &self,
        license_number: &str,
        last_modified: LastModified,
    ) -> Result<Vec<Transfer>> {
        self.client
            .get_modified(
                "transfers/v1/templates",
                license_number,
                last_modified,
                "could not get transfer templates",
            )
            .await
    }

    /// List the deliveries of a template.
    pub async fn template_deliveries(&self, id: i64) -> Result<Vec<TransferDelivery>> {
        self.client
            .get_json(
                &format!("transfers/v1/templates/{id}/deliveries"),
                "could not get transfer template deliveries",
            )
            .await
    }

    /// List the transporters of a template delivery.
    pub async fn template_transporters(&self, id: i64) -> Result<Vec<TransferTransporter>> {
        self.client
            .get_json(
                &format!("transfers/v1/templates/{id}/transporters"),
                "could not get transfer template transporters",
            )
            .await
    }

    /// List driver and vehicle details of a template delivery.
    pub async fn template_transporter_details(
        &self,
        id: i64,
    ) -> Result<Vec<TransferTransporterDetails>> {
        self.client
            .get_json(
                &format!("transfers/v1/templates/{id}/transporters/details"),
                "could not get transfer template transporter details",
            )
            .await
    }

    /// List the packages of a template delivery.
    pub async fn template_delivery_packages(
        &self,
        id: i64,
    ) -> Result<Vec<TransferDeliveryPackage>> {
        self.client
            .get_json(
                &format!("transfers/v1/templates/delivery/{id}/packages"),
                "could not get transfer template delivery packages",
            )
            .await
    }

    /// Create transfer templates.
    pub async fn create_templates(
        &self,
        templates: &[TransferTemplate],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "transfers/v1/templates",
                license_number,
                templates,
                "could not create transfer templates",
            )
            .await
    }

    /// Update transfer templates; each record must carry a `transfer_template_id`.
    pub async fn update_templates(
        &self,
        templates: &[TransferTemplate],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Put,
                "transfers/v1/templates",
                license_number,
                templates,
                "could not update transfer templates",
            )
            .await
    }

    /// Delete a transfer template.
    pub async fn delete_template(&self, id: i64, license_number: &str) -> Result<Bytes> {
        let endpoint =
            required_license(license_number).append_to(&format!("transfers/v1/templates/{id}"));
        self.client
            .delete(&endpoint, "could not delete transfer template")
            .await
    }

    /// List transfer types.
    pub async fn types(&self, license_number: &str) -> Result<Vec<TransferType>> {
        let endpoint = required_license(license_number).append_to("transfers/v1/types");
        self.client
            .get_json(&endpoint, "could not get transfer types")
            .await
    }
}
