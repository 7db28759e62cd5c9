//! Facility models.

use serde::{Deserialize, Serialize};

/// A facility the user key has access to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Facility {
    /// Facility identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Date the user was hired at the facility
    pub hire_date: String,
    /// Whether the user owns the facility
    pub is_owner: bool,
    /// Whether the user manages the facility
    pub is_manager: bool,
    /// Occupations held by the user
    pub occupations: Vec<String>,
    /// Legal name
    pub name: String,
    /// Alias chosen by the licensee
    pub alias: String,
    /// Name shown in the Metrc UI
    pub display_name: String,
    /// Date the facility was credentialed
    pub credentialed_date: String,
    /// Support activation date
    pub support_activation_date: Option<String>,
    /// Support expiration date
    pub support_expiration_date: Option<String>,
    /// Last date support was paid
    pub support_last_paid_date: Option<String>,
    /// Capabilities granted to the facility
    pub facility_type: FacilityType,
    /// License held by the facility
    pub license: License,
}

/// License attached to a facility.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct License {
    /// License number used as the `licenseNumber` filter on most endpoints
    pub number: String,
    /// Start of validity
    pub start_date: String,
    /// End of validity
    pub end_date: String,
    /// License type, e.g. `Adult-Use Cultivation`
    pub license_type: String,
}

/// Capability flags of a facility.
///
/// Each flag mirrors the Metrc field of the same name.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct FacilityType {
    pub is_medical: bool,
    pub is_retail: bool,
    pub is_hemp: bool,
    pub restrict_harvest_plant_restore_time_hours: i64,
    pub total_member_patients_allowed: i64,
    pub can_grow_plants: bool,
    pub can_create_opening_balance_plant_batches: bool,
    pub can_tag_plant_batches: bool,
    pub can_assign_locations_to_plant_batches: bool,
    pub plants_require_patient_affiliation: bool,
    pub plant_batches_can_contain_mother_plants: bool,
    pub can_update_plant_strains: bool,
    pub can_track_vegetative_plants: bool,
    pub can_create_immature_plant_packages_from_plants: bool,
    pub can_package_vegetative_plants: bool,
    pub can_report_harvest_schedules: bool,
    pub can_submit_harvests_for_testing: bool,
    pub can_require_harvest_sample_lab_test_batches: bool,
    pub can_create_opening_balance_packages: bool,
    pub can_create_derived_packages: bool,
    pub can_assign_locations_to_packages: bool,
    pub can_update_locations_on_packages: bool,
    pub packages_require_patient_affiliation: bool,
    pub can_create_trade_sample_packages: bool,
    pub can_donate_packages: bool,
    pub can_submit_packages_for_testing: bool,
    pub can_create_process_validation_packages: bool,
    pub can_require_package_sample_lab_test_batches: bool,
    pub can_request_product_remediation: bool,
    pub can_remediate_packages_with_failed_lab_results: bool,
    pub can_infuse_products: bool,
    pub can_test_packages: bool,
    pub can_transfer_from_external_facilities: bool,
    pub can_sell_to_consumers: bool,
    pub can_sell_to_patients: bool,
    pub can_sell_to_external_patients: bool,
    pub can_sell_to_caregivers: bool,
    pub advanced_sales: bool,
    pub sales_require_patient_number: bool,
    pub sales_require_external_patient_number: bool,
    pub sales_require_external_patient_identification_method: bool,
    pub sales_require_caregiver_number: bool,
    pub sales_require_caregiver_patient_number: bool,
    pub can_deliver_sales_to_consumers: bool,
    pub sales_delivery_require_consumer_id: bool,
    pub can_deliver_sales_to_patients: bool,
    pub sales_delivery_require_patient_number: bool,
    pub sales_delivery_require_recipient_name: bool,
    pub can_have_member_patients: bool,
    pub can_report_patient_check_ins: bool,
    pub can_specify_patient_sales_limit_exemption: bool,
    pub can_report_patients_adverse_responses: bool,
    pub can_report_strain_properties: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facility_type_field_names_match_metrc() {
        let json = serde_json::json!({
            "CanGrowPlants": true,
            "SalesDeliveryRequireConsumerId": true,
            "CanReportPatientCheckIns": true,
            "RestrictHarvestPlantRestoreTimeHours": 24
        });
        let facility_type: FacilityType = serde_json::from_value(json).unwrap();
        assert!(facility_type.can_grow_plants);
        assert!(facility_type.sales_delivery_require_consumer_id);
        assert!(facility_type.can_report_patient_check_ins);
        assert_eq!(facility_type.restrict_harvest_plant_restore_time_hours, 24);
        assert!(!facility_type.is_medical);
    }
}
