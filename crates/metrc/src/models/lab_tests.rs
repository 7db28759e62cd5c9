//! Lab test models.

use serde::{Deserialize, Serialize};

/// A lab test type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct LabTestType {
    /// Type identifier
    pub id: i64,
    /// Type name
    pub name: String,
    /// Whether a result must be recorded
    pub requires_test_result: bool,
    /// Whether the test is informational only
    pub informational_only: bool,
    /// Whether the test always passes
    pub always_passes: bool,
    /// Result mode
    pub lab_test_result_mode: i64,
    /// Minimum passing result
    pub lab_test_result_minimum: Option<f64>,
    /// Maximum passing result
    pub lab_test_result_maximum: Option<f64>,
    /// Dependency mode
    pub dependency_mode: i64,
}

/// A lab test result attached to a package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct LabTestResult {
    /// Package identifier
    pub package_id: i64,
    /// Result identifier
    pub lab_test_result_id: i64,
    /// License of the testing facility
    pub lab_facility_license_number: String,
    /// Name of the testing facility
    pub lab_facility_name: String,
    /// Tag of the sampled package
    pub source_package_label: String,
    /// Item name
    pub product_name: String,
    /// Item category
    pub product_category_name: String,
    /// Date the test was performed
    pub test_performed_date: String,
    /// Whether every test passed
    pub overall_passed: bool,
    /// Revocation date
    pub revoked_date: Option<String>,
    /// Whether the result has been released
    pub result_released: bool,
    /// When the result was released
    pub result_release_date_time: Option<String>,
    /// Test type
    pub test_type_name: String,
    /// Whether this test passed
    pub test_passed: bool,
    /// Measured level
    pub test_result_level: f64,
    /// Comment
    pub test_comment: String,
    /// Whether this test is informational only
    pub test_informational_only: bool,
    /// Revocation date of this detail
    pub lab_test_detail_revoked_date: Option<String>,
}

/// Record lab results for a package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LabTestRecord {
    /// Package tag
    pub label: String,
    /// Date of the result
    pub result_date: String,
    /// Attached document file name
    #[serde(default)]
    pub document_file_name: Option<String>,
    /// Attached document, base64 encoded
    #[serde(default)]
    pub document_file_base64: Option<String>,
    /// Individual results
    pub results: Vec<LabTestRecordResult>,
}

/// One test in a [`LabTestRecord`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LabTestRecordResult {
    /// Test type name
    pub lab_test_type_name: String,
    /// Measured quantity
    pub quantity: f64,
    /// Whether the test passed
    pub passed: bool,
    /// Notes
    pub notes: String,
}

/// Attach a document to a lab result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct LabTestDocument {
    /// Result identifier
    pub lab_test_result_id: i64,
    /// File name
    pub document_file_name: String,
    /// File content, base64 encoded
    pub document_file_base64: String,
}

/// Release the lab results of a package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct LabTestResultRelease {
    /// Package tag
    pub package_label: String,
}
