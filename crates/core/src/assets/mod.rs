//! Assets module - asset, location and category records as the inventory
//! backend hands them over, and the typed forms the engines work on.

mod assets_constants;
mod assets_model;
mod holding;
mod lenient_format;

#[cfg(test)]
mod assets_model_tests;

pub use assets_constants::*;
pub use assets_model::{
    Asset, AssetRecord, AssetStatus, Category, CodedRecord, Location, ProcurementSource,
};
pub use holding::{holdings_from_records, Holding};
