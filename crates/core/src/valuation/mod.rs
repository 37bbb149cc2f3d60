//! Valuation - straight-line depreciation, residual value and bulk-scaled
//! totals for single assets and whole populations.

pub mod depreciation_calculator;
mod valuation_engine;
mod valuation_model;


pub use depreciation_calculator::{
    base_accumulated_depreciation, base_residual_value, depreciation_percentage,
    depreciation_schedule, economic_life_months, remaining_life, round_percentage,
};
pub use valuation_engine::{summarize_valuations, ValuationEngine, ValuationEngineTrait};
pub use valuation_model::*;
