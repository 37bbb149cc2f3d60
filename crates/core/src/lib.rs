//! Inventaris Core - asset code generation and depreciation valuation.
//!
//! This crate holds the computational rules of the Inventaris asset
//! register: deriving the next `location.category.source.year.sequence`
//! code for a new asset, and valuing assets (single or bulk) with
//! straight-line depreciation. Everything is a pure function of its
//! inputs; the current time and all tunables are passed in.

pub mod assets;
pub mod codes;
pub mod constants;
pub mod errors;
pub mod settings;
pub mod utils;
pub mod valuation;

// Re-export the main entry points
pub use assets::{AssetRecord, Holding};
pub use codes::{generate_code, AssetCode, CodeGenerator};
pub use settings::EngineSettings;
pub use valuation::{ValuationEngine, ValuationEngineTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
