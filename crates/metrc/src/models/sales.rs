//! Sales models.

use serde::{Deserialize, Serialize};

/// A sales receipt as returned by `GET sales/v1/receipts/...`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct SalesReceipt {
    /// Receipt identifier
    pub id: i64,
    /// Receipt number
    pub receipt_number: Option<String>,
    /// Time of sale
    pub sales_date_time: String,
    /// Customer type, one of the values from `sales/v1/customertypes`
    pub sales_customer_type: String,
    /// Patient license number
    pub patient_license_number: Option<String>,
    /// Number of packages sold
    pub total_packages: i64,
    /// Total price
    pub total_price: f64,
    /// Transactions on the receipt
    pub transactions: Vec<SalesTransaction>,
    /// Whether the receipt is final
    pub is_final: bool,
    /// Archive date
    pub archived_date: Option<String>,
    /// When the receipt was recorded
    pub recorded_date_time: String,
    /// User who recorded the receipt
    pub recorded_by_user_name: Option<String>,
    /// Last modification time
    pub last_modified: String,
}

/// A receipt in a create or update request.
///
/// `id` is only sent for updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SalesReceiptPost {
    /// Receipt identifier (updates only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Time of sale
    pub sales_date_time: String,
    /// Customer type
    pub sales_customer_type: String,
    /// Patient license number
    #[serde(default)]
    pub patient_license_number: Option<String>,
    /// Caregiver license number
    #[serde(default)]
    pub caregiver_license_number: Option<String>,
    /// How the customer was identified
    #[serde(default)]
    pub identification_method: Option<String>,
    /// Packages sold
    pub transactions: Vec<SalesTransactionPost>,
}

/// Daily sales totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct SalesTransaction {
    /// Sales date
    pub sales_date: String,
    /// Number of transactions
    pub total_transactions: i64,
    /// Number of packages
    pub total_packages: i64,
    /// Total price
    pub total_price: f64,
}

/// A package sold in a receipt or daily transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SalesTransactionPost {
    /// Package tag
    pub package_label: String,
    /// Quantity sold
    pub quantity: f64,
    /// Unit of the quantity
    pub unit_of_measure: String,
    /// Total amount charged
    pub total_amount: f64,
}
