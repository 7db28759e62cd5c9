//! Transfer models.
//!
//! A transfer (manifest) carries packages from a shipper to one or more destinations, each
//! destination being a delivery. Templates have the same shape and are used to pre-fill
//! recurring manifests.

use serde::{Deserialize, Serialize};

/// A transfer or transfer template as returned by `GET transfers/v1/...`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Transfer {
    /// Transfer identifier
    pub id: i64,
    /// Manifest number
    pub manifest_number: Option<String>,
    /// Shipment license type
    pub shipment_license_type: i64,
    /// Shipper license
    pub shipper_facility_license_number: String,
    /// Shipper name
    pub shipper_facility_name: String,
    /// Template name
    pub name: Option<String>,
    /// Transporter license
    pub transporter_facility_license_number: String,
    /// Transporter name
    pub transporter_facility_name: String,
    /// Driver name
    pub driver_name: String,
    /// Driver occupational license
    pub driver_occupational_license_number: String,
    /// Driver vehicle license
    pub driver_vehicle_license_number: String,
    /// Vehicle make
    pub vehicle_make: String,
    /// Vehicle model
    pub vehicle_model: String,
    /// Vehicle plate
    pub vehicle_license_plate_number: String,
    /// Number of deliveries
    pub delivery_count: i64,
    /// Number of deliveries received
    pub received_delivery_count: i64,
    /// Number of packages
    pub package_count: i64,
    /// Number of packages received
    pub received_package_count: i64,
    /// Contains plant packages
    pub contains_plant_package: bool,
    /// Contains product packages
    pub contains_product_package: bool,
    /// Contains trade samples
    pub contains_trade_sample: bool,
    /// Contains donations
    pub contains_donation: bool,
    /// Contains testing samples
    pub contains_testing_sample: bool,
    /// Contains product requiring remediation
    pub contains_product_requires_remediation: bool,
    /// Contains remediated product
    pub contains_remediated_product_package: bool,
    /// Creation time
    pub created_date_time: String,
    /// User who created the transfer
    pub created_by_user_name: Option<String>,
    /// Last modification time
    pub last_modified: String,
    /// Delivery identifier
    pub delivery_id: i64,
    /// Recipient license
    pub recipient_facility_license_number: Option<String>,
    /// Recipient name
    pub recipient_facility_name: Option<String>,
    /// Shipment type
    pub shipment_type_name: Option<String>,
    /// Shipment transaction type
    pub shipment_transaction_type: Option<String>,
    /// Estimated departure
    pub estimated_departure_date_time: String,
    /// Actual departure
    pub actual_departure_date_time: Option<String>,
    /// Estimated arrival
    pub estimated_arrival_date_time: String,
    /// Actual arrival
    pub actual_arrival_date_time: Option<String>,
    /// Packages in the delivery
    pub delivery_package_count: i64,
    /// Packages received in the delivery
    pub delivery_received_package_count: i64,
    /// Receipt time
    pub received_date_time: Option<String>,
    /// Estimated return departure
    pub estimated_return_departure_date_time: Option<String>,
    /// Actual return departure
    pub actual_return_departure_date_time: Option<String>,
    /// Estimated return arrival
    pub estimated_return_arrival_date_time: Option<String>,
    /// Actual return arrival
    pub actual_return_arrival_date_time: Option<String>,
}

/// A delivery of a transfer or template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransferDelivery {
    /// Delivery identifier
    pub id: i64,
    /// Recipient license
    pub recipient_facility_license_number: String,
    /// Recipient name
    pub recipient_facility_name: String,
    /// Shipment type
    pub shipment_type_name: String,
    /// Shipment transaction type
    pub shipment_transaction_type: String,
    /// Estimated departure
    pub estimated_departure_date_time: String,
    /// Actual departure
    pub actual_departure_date_time: Option<String>,
    /// Estimated arrival
    pub estimated_arrival_date_time: Option<String>,
    /// Actual arrival
    pub actual_arrival_date_time: Option<String>,
    /// Gross weight
    pub gross_weight: Option<f64>,
    /// Unit of the gross weight
    pub gross_unit_of_weight_id: Option<i64>,
    /// Name of the gross weight unit
    pub gross_unit_of_weight_name: Option<String>,
    /// Planned route
    pub planned_route: String,
    /// Packages in the delivery
    pub delivery_package_count: i64,
    /// Packages received
    pub delivery_received_package_count: i64,
    /// Receipt time
    pub received_date_time: Option<String>,
    /// Estimated return departure
    pub estimated_return_departure_date_time: Option<String>,
    /// Actual return departure
    pub actual_return_departure_date_time: Option<String>,
    /// Estimated return arrival
    pub estimated_return_arrival_date_time: Option<String>,
    /// Actual return arrival
    pub actual_return_arrival_date_time: Option<String>,
    /// Whether rejected packages were returned
    pub rejected_packages_returned: bool,
}

/// A transporter on a transfer or template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransferTransporter {
    /// Transporter license
    pub transporter_facility_license_number: String,
    /// Transporter name
    pub transporter_facility_name: String,
    /// Direction of travel
    pub transporter_direction: i64,
}

/// Driver and vehicle details of a transporter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransferTransporterDetails {
    /// Driver name
    pub driver_name: String,
    /// Driver occupational license
    pub driver_occupational_license_number: String,
    /// Driver vehicle license
    pub driver_vehicle_license_number: String,
    /// Vehicle make
    pub vehicle_make: String,
    /// Vehicle model
    pub vehicle_model: String,
    /// Vehicle plate
    pub vehicle_license_plate_number: String,
    /// When the driver started
    pub actual_driver_start_date_time: Option<String>,
}

/// A package in a delivery.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransferDeliveryPackage {
    /// Package identifier
    pub package_id: i64,
    /// Package tag
    pub package_label: String,
    /// Package type
    pub package_type: String,
    /// Source harvests
    pub source_harvest_names: Option<String>,
    /// Source package tags
    pub source_package_labels: Option<String>,
    /// Item name
    pub product_name: String,
    /// Item category
    pub product_category_name: String,
    /// Item strain
    pub item_strain_name: Option<String>,
    /// Item CBD percentage
    pub item_unit_cbd_percent: Option<f64>,
    /// Item CBD content
    pub item_unit_cbd_content: Option<f64>,
    /// Unit of the item CBD content
    pub item_unit_cbd_content_unit_of_measure_name: Option<String>,
    /// Item THC percentage
    pub item_unit_thc_percent: Option<f64>,
    /// Item THC content
    pub item_unit_thc_content: Option<f64>,
    /// Unit of the item THC content
    pub item_unit_thc_content_unit_of_measure_name: Option<String>,
    /// Item unit volume
    pub item_unit_volume: Option<f64>,
    /// Unit of the item volume
    pub item_unit_volume_unit_of_measure_name: Option<String>,
    /// Item unit weight
    pub item_unit_weight: Option<f64>,
    /// Unit of the item weight
    pub item_unit_weight_unit_of_measure_name: Option<String>,
    /// Item serving size
    pub item_serving_size: Option<f64>,
    /// Item supply duration in days
    pub item_supply_duration_days: Option<i64>,
    /// Item unit quantity
    pub item_unit_quantity: Option<f64>,
    /// Unit of the item quantity
    pub item_unit_quantity_unit_of_measure_name: Option<String>,
    /// Lab testing state
    pub lab_testing_state: String,
    /// Production batch number
    pub production_batch_number: Option<String>,
    /// Whether this is a trade sample
    pub is_trade_sample: bool,
    /// Whether the trade sample flag carries over
    pub is_trade_sample_persistent: bool,
    /// Whether the source package was a trade sample
    pub source_package_is_trade_sample: bool,
    /// Whether this is a donation
    pub is_donation: bool,
    /// Whether the source package was a donation
    pub source_package_is_donation: bool,
    /// Whether this is a testing sample
    pub is_testing_sample: bool,
    /// Whether the product requires remediation
    pub product_requires_remediation: bool,
    /// Whether the package contains remediated product
    pub contains_remediated_product: bool,
    /// Remediation date
    pub remediation_date: Option<String>,
    /// Shipment state, one of `transfers/v1/delivery/packages/states`
    pub shipment_package_state: String,
    /// Quantity shipped
    pub shipped_quantity: f64,
    /// Unit of the shipped quantity
    pub shipped_unit_of_measure_name: String,
    /// Name of the gross weight unit
    pub gross_unit_of_weight_name: Option<String>,
    /// Quantity received
    pub received_quantity: f64,
    /// Unit of the received quantity
    pub received_unit_of_measure_name: String,
}

/// Wholesale prices of a delivery package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransferDeliveryPackageWholesale {
    /// Package identifier
    pub package_id: i64,
    /// Package tag
    pub package_label: String,
    /// Price declared by the shipper
    pub shipper_wholesale_price: Option<f64>,
    /// Price declared by the receiver
    pub receiver_wholesale_price: Option<f64>,
}

/// Lab test batch required for a delivery package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransferRequiredLabTestBatch {
    /// Package identifier
    pub package_id: i64,
    /// Batch identifier
    pub lab_test_batch_id: i64,
    /// Batch name
    pub lab_test_batch_name: String,
}

/// A transfer type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransferType {
    /// Type name
    pub name: String,
    /// Usable for licensed shipments
    pub for_licensed_shipments: bool,
    /// Usable for external incoming shipments
    pub for_external_incoming_shipments: bool,
    /// Usable for external outgoing shipments
    pub for_external_outgoing_shipments: bool,
    /// Destinations must declare a gross weight
    pub requires_destination_gross_weight: bool,
    /// Packages must declare a gross weight
    pub requires_packages_gross_weight: bool,
}

/// An external incoming transfer in a create or update request.
///
/// `transfer_id` is only sent for updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TransferExternalIncoming {
    /// Transfer identifier (updates only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_id: Option<i64>,
    /// Shipper license
    pub shipper_license_number: String,
    /// Shipper name
    pub shipper_name: String,
    /// Shipper phone
    pub shipper_main_phone_number: String,
    /// Shipper address line 1
    #[serde(default)]
    pub shipper_address1: Option<String>,
    /// Shipper address line 2
    #[serde(default)]
    pub shipper_address2: Option<String>,
    /// Shipper city
    #[serde(default)]
    pub shipper_address_city: Option<String>,
    /// Shipper state
    #[serde(default)]
    pub shipper_address_state: Option<String>,
    /// Shipper postal code
    #[serde(default)]
    pub shipper_address_postal_code: Option<String>,
    /// Transporter license
    #[serde(default)]
    pub transporter_facility_license_number: Option<String>,
    /// Driver occupational license
    #[serde(default)]
    pub driver_occupational_license_number: Option<String>,
    /// Driver name
    #[serde(default)]
    pub driver_name: Option<String>,
    /// Driver license
    #[serde(default)]
    pub driver_license_number: Option<String>,
    /// Contact phone
    #[serde(default)]
    pub phone_number_for_questions: Option<String>,
    /// Vehicle make
    #[serde(default)]
    pub vehicle_make: Option<String>,
    /// Vehicle model
    #[serde(default)]
    pub vehicle_model: Option<String>,
    /// Vehicle plate
    #[serde(default)]
    pub vehicle_license_plate_number: Option<String>,
    /// Destinations
    pub destinations: Vec<TransferDestination>,
}

/// A destination of an external incoming transfer or template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TransferDestination {
    /// Destination identifier (updates only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_destination_id: Option<i64>,
    /// Recipient license
    pub recipient_license_number: String,
    /// One of the names from [`TransferType`]
    pub transfer_type_name: String,
    /// Planned route
    pub planned_route: String,
    /// Estimated departure
    pub estimated_departure_date_time: String,
    /// Estimated arrival
    pub estimated_arrival_date_time: String,
    /// Gross weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_weight: Option<f64>,
    /// Unit of the gross weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_unit_of_weight_id: Option<i64>,
    /// Transporters
    pub transporters: Vec<TransferDestinationTransporter>,
    /// Packages
    pub packages: Vec<TransferDestinationPackage>,
}

/// A transporter on a destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TransferDestinationTransporter {
    /// Transporter license
    pub transporter_facility_license_number: String,
    /// Driver occupational license
    pub driver_occupational_license_number: String,
    /// Driver name
    pub driver_name: String,
    /// Driver license
    pub driver_license_number: String,
    /// Contact phone
    pub phone_number_for_questions: String,
    /// Vehicle make
    pub vehicle_make: String,
    /// Vehicle model
    pub vehicle_model: String,
    /// Vehicle plate
    pub vehicle_license_plate_number: String,
    /// Whether the leg includes a layover
    pub is_layover: bool,
    /// Estimated departure
    pub estimated_departure_date_time: String,
    /// Estimated arrival
    pub estimated_arrival_date_time: String,
    /// Transporter details
    #[serde(default)]
    pub transporter_details: Option<String>,
}

/// A package on a destination.
///
/// External incoming transfers describe the item shipped; templates reference an existing
/// package by label. Fields not used by one or the other are left out of the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TransferDestinationPackage {
    /// Existing package tag (templates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_label: Option<String>,
    /// Item name (external incoming)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    /// Quantity (external incoming)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of the quantity (external incoming)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measure_name: Option<String>,
    /// Date packaged (external incoming)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaged_date: Option<String>,
    /// Gross weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_weight: Option<f64>,
    /// Name of the gross weight unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_unit_of_weight_name: Option<String>,
    /// Wholesale price
    #[serde(default)]
    pub wholesale_price: Option<f64>,
}

/// A transfer template in a create or update request.
///
/// `transfer_template_id` is only sent for updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TransferTemplate {
    /// Template identifier (updates only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_template_id: Option<i64>,
    /// Template name
    pub name: String,
    /// Transporter license
    #[serde(default)]
    pub transporter_facility_license_number: Option<String>,
    /// Driver occupational license
    #[serde(default)]
    pub driver_occupational_license_number: Option<String>,
    /// Driver name
    #[serde(default)]
    pub driver_name: Option<String>,
    /// Driver license
    #[serde(default)]
    pub driver_license_number: Option<String>,
    /// Contact phone
    #[serde(default)]
    pub phone_number_for_questions: Option<String>,
    /// Vehicle make
    #[serde(default)]
    pub vehicle_make: Option<String>,
    /// Vehicle model
    #[serde(default)]
    pub vehicle_model: Option<String>,
    /// Vehicle plate
    #[serde(default)]
    pub vehicle_license_plate_number: Option<String>,
    /// Destinations
    pub destinations: Vec<TransferDestination>,
}
