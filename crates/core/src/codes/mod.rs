//! Asset code generation - parsing, ordering and allocation of
//! `location.category.source.year.sequence` codes.

mod asset_code;
mod code_generator;
mod registry_codes;


pub use asset_code::{
    compare_codes, sort_codes, sortable_key, strip_bulk_suffix, trailing_sequence, AssetCode,
    SEQUENCE_WIDTH,
};
pub use code_generator::{generate_code, BulkCodes, CodeGenerator, CodeRequest};
pub use registry_codes::{next_category_code, next_location_code, CATEGORY_CODE_STEP};
