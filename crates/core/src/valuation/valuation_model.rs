//! Valuation output models consumed by tables, dashboards and reports.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::Holding;

/// Where a derived figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigureSource {
    /// Taken from the stored record
    Stored,
    /// Computed by the straight-line fallback
    Derived,
}

/// The three monetary figures of an asset, either per unit or scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueFigures {
    pub acquisition_cost: Decimal,
    pub accumulated_depreciation: Decimal,
    pub residual_value: Decimal,
}

impl ValueFigures {
    /// Multiplies every figure by the holding's unit count.
    pub fn scaled(&self, holding: &Holding) -> ValueFigures {
        ValueFigures {
            acquisition_cost: holding.scale(self.acquisition_cost),
            accumulated_depreciation: holding.scale(self.accumulated_depreciation),
            residual_value: holding.scale(self.residual_value),
        }
    }
}

/// Valuation of one inventory line at a given instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetValuation {
    pub code: String,
    pub unit_count: u32,
    pub per_unit: ValueFigures,
    /// `per_unit` scaled by `unit_count`
    pub total: ValueFigures,
    pub accumulated_depreciation_source: FigureSource,
    pub residual_value_source: FigureSource,
    /// Whole percent of cost already depreciated
    pub depreciation_percentage: Decimal,
}

/// Population totals for dashboards and report headers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSummary {
    /// Number of records (a bulk parent counts once)
    pub asset_count: usize,
    /// Number of physical units
    pub unit_count: u64,
    pub total_acquisition_value: Decimal,
    pub total_current_value: Decimal,
    pub total_accumulated_depreciation: Decimal,
    /// Whole percent of total acquisition value lost to depreciation
    pub depreciation_percentage: Decimal,
}

/// What a breakdown groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownKey {
    Status,
    Category,
    Location,
}

/// One group of a status, category or location breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownGroup {
    /// Status label, category id or location id
    pub key: String,
    /// Display name when one is known
    pub label: Option<String>,
    pub unit_count: u64,
    pub acquisition_value: Decimal,
    pub current_value: Decimal,
    /// Share of the population's acquisition value (0-100, 2 dp)
    pub percentage: Decimal,
}

/// Remaining useful life of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingLife {
    pub economic_life_months: u32,
    pub months_elapsed: u32,
    pub remaining_months: u32,
    pub years: u32,
    pub extra_months: u32,
    /// 0-100, whole percent
    pub percent_remaining: u32,
    pub exhausted: bool,
}

/// Book value at the end of one year of the economic life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub year: u32,
    pub remaining_value: Decimal,
    /// Remaining value as a whole percent of cost
    pub percentage: Decimal,
}
