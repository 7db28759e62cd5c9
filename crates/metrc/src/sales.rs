//! Sales accessor.
//!
//! Receipts are listed with a [`SalesReceiptFilter`]; transactions are daily totals keyed by
//! calendar date.

use bytes::Bytes;
use chrono::NaiveDate;
use metrc_core::Method;

use crate::client::{license, required_license, MetrcClient};
use crate::filters::{format_date, SalesReceiptFilter};
use crate::models::{SalesReceipt, SalesReceiptPost, SalesTransaction, SalesTransactionPost};
use crate::Result;

/// Operations on `sales/v1`.
#[derive(Debug, Clone, Copy)]
pub struct Sales<'a> {
    client: &'a MetrcClient,
}

impl<'a> Sales<'a> {
    pub(crate) const fn new(client: &'a MetrcClient) -> Self {
        Self { client }
    }

    /// List customer types.
    pub async fn customer_types(&self) -> Result<Vec<String>> {
        self.client
            .get_json("sales/v1/customertypes", "could not get customer types")
            .await
    }

    /// List active receipts.
    pub async fn active_receipts(
        &self,
        license_number: &str,
        filter: SalesReceiptFilter,
    ) -> Result<Vec<SalesReceipt>> {
        self.receipts("active", license_number, filter).await
    }

    /// List inactive receipts.
    pub async fn inactive_receipts(
        &self,
        license_number: &str,
        filter: SalesReceiptFilter,
    ) -> Result<Vec<SalesReceipt>> {
        self.receipts("inactive", license_number, filter).await
    }

    async fn receipts(
        &self,
        state: &str,
        license_number: &str,
        filter: SalesReceiptFilter,
    ) -> Result<Vec<SalesReceipt>> {
        let mut params = required_license(license_number);
        filter.apply(&mut params);
        self.client
            .get_json(
                &params.append_to(&format!("sales/v1/receipts/{state}")),
                &format!("could not get {state} receipts"),
            )
            .await
    }

    /// Fetch a receipt by identifier.
    pub async fn receipt(&self, id: i64, license_number: Option<&str>) -> Result<SalesReceipt> {
        let endpoint = license(license_number).append_to(&format!("sales/v1/receipts/{id}"));
        self.client
            .get_json(&endpoint, "could not get receipt")
            .await
    }

    /// Record receipts.
    pub async fn create_receipts(
        &self,
        receipts: &[SalesReceiptPost],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                "sales/v1/receipts",
                license_number,
                receipts,
                "could not create receipts",
            )
            .await
    }

    /// Update receipts; each record must carry an `id`.
    pub async fn update_receipts(
        &self,
        receipts: &[SalesReceiptPost],
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Put,
                "sales/v1/receipts",
                license_number,
                receipts,
                "could not update receipts",
            )
            .await
    }

    /// Void a receipt.
    pub async fn delete_receipt(&self, id: i64, license_number: &str) -> Result<Bytes> {
        let endpoint =
            required_license(license_number).append_to(&format!("sales/v1/receipts/{id}"));
        self.client
            .delete(&endpoint, &format!("could not delete receipt {id}"))
            .await
    }

    /// List daily transaction totals.
    pub async fn transactions(&self, license_number: &str) -> Result<Vec<SalesTransaction>> {
        let endpoint = required_license(license_number).append_to("sales/v1/transactions");
        self.client
            .get_json(&endpoint, "could not get sales transactions")
            .await
    }

    /// List daily transaction totals between two dates.
    pub async fn transactions_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        license_number: &str,
    ) -> Result<Vec<SalesTransaction>> {
        let path = format!(
            "sales/v1/transactions/{}/{}",
            format_date(start),
            format_date(end)
        );
        self.client
            .get_json(
                &required_license(license_number).append_to(&path),
                "could not get sales transactions by date",
            )
            .await
    }

    /// Record sales for a day.
    pub async fn create_transactions(
        &self,
        transactions: &[SalesTransactionPost],
        date: NaiveDate,
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Post,
                &format!("sales/v1/transactions/{}", format_date(date)),
                license_number,
                transactions,
                "could not create sales transactions",
            )
            .await
    }

    /// Replace the sales recorded for a day.
    pub async fn update_transactions(
        &self,
        transactions: &[SalesTransactionPost],
        date: NaiveDate,
        license_number: &str,
    ) -> Result<Bytes> {
        self.client
            .send_licensed(
                Method::Put,
                &format!("sales/v1/transactions/{}", format_date(date)),
                license_number,
                transactions,
                "could not update sales transactions",
            )
            .await
    }
}
