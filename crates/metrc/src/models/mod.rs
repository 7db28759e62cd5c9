//! Request and response bodies for every Metrc resource.
//!
//! Field names follow Metrc's PascalCase JSON. Response structs tolerate missing and null
//! fields; request structs (`*Post`, and the per-operation shapes) serialize every field so
//! that absent optional values reach Metrc as `null`.

pub mod facilities;
pub mod harvests;
pub mod items;
pub mod lab_tests;
pub mod locations;
pub mod packages;
pub mod plant_batches;
pub mod plants;
pub mod sales;
pub mod strains;
pub mod transfers;
pub mod units_of_measure;

pub use facilities::{Facility, FacilityType, License};
pub use harvests::{
    Harvest, HarvestFinish, HarvestIngredient, HarvestMove, HarvestPackagePost,
    HarvestRemoveWaste, HarvestRename, HarvestUnfinish, HarvestWasteType,
};
pub use items::{Item, ItemCategory, ItemPost};
pub use lab_tests::{
    LabTestDocument, LabTestRecord, LabTestRecordResult, LabTestResult, LabTestResultRelease,
    LabTestType,
};
pub use locations::{Location, LocationPost, LocationType};
pub use packages::{
    Package, PackageAdjustReason, PackageAdjustment, PackageFinish, PackageIngredient,
    PackageItemChange, PackageLocationChange, PackageNote, PackagePost, PackageRemediation,
    PackageUnfinish,
};
pub use plant_batches::{
    PlantBatch, PlantBatchAdditive, PlantBatchDestroy, PlantBatchGrowthPhase, PlantBatchMove,
    PlantBatchPackage, PlantBatchPlanting, PlantBatchSplit,
};
pub use plants::{
    ActiveIngredient, Plant, PlantAdditive, PlantAdditivePost, PlantBatchPackageFromPlant,
    PlantDestroy, PlantGrowthPhaseChange, PlantHarvest, PlantManicure, PlantMove, PlantPlanting,
    PlantWasteMethod, PlantWasteReason,
};
pub use sales::{SalesReceipt, SalesReceiptPost, SalesTransaction, SalesTransactionPost};
pub use strains::Strain;
pub use transfers::{
    Transfer, TransferDelivery, TransferDeliveryPackage, TransferDeliveryPackageWholesale,
    TransferDestination, TransferDestinationPackage, TransferDestinationTransporter,
    TransferExternalIncoming, TransferRequiredLabTestBatch, TransferTemplate, TransferTransporter,
    TransferTransporterDetails, TransferType,
};
pub use units_of_measure::UnitOfMeasure;
