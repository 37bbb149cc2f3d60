//! Straight-line depreciation for a single asset, per unit.
//!
//! Nothing here knows about bulk counts; scaling happens in the engine
//! after these figures are final.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::assets::Asset;
use crate::constants::{DECIMAL_PRECISION, DISPLAY_DECIMAL_PRECISION};
use crate::settings::ValuationSettings;
use crate::utils::time_utils::{calendar_months_between, months_since};

use super::{FigureSource, RemainingLife, ScheduleEntry};

const MONTHS_PER_YEAR: u32 = 12;

/// Rounds a percentage to a whole number, halves towards positive infinity
/// (`2.5` becomes `3`, `-2.5` becomes `-2`).
pub fn round_percentage(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(0, strategy)
}

/// `round((cost − residual) / cost × 100)`, or 0 when there is no cost.
///
/// Negative when a stored residual exceeds cost. A ratio too large to
/// represent yields 0.
pub fn depreciation_percentage(acquisition_cost: Decimal, residual_value: Decimal) -> Decimal {
    if acquisition_cost <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let percentage = acquisition_cost
        .checked_sub(residual_value)
        .and_then(|lost| lost.checked_div(acquisition_cost))
        .and_then(|ratio| ratio.checked_mul(dec!(100)));

    match percentage {
        Some(value) => round_percentage(value),
        None => {
            warn!(
                "Depreciation percentage of cost {} and residual {} overflows, using 0",
                acquisition_cost, residual_value
            );
            Decimal::ZERO
        }
    }
}

/// Effective economic life in months: the asset's years (or the configured
/// default) times twelve, floored at `min_economic_life_months`.
pub fn economic_life_months(asset: &Asset, settings: &ValuationSettings) -> u32 {
    effective_life_years(asset, settings)
        .saturating_mul(MONTHS_PER_YEAR)
        .max(settings.min_economic_life_months)
}

fn effective_life_years(asset: &Asset, settings: &ValuationSettings) -> u32 {
    asset
        .economic_life_years
        .unwrap_or(settings.default_economic_life_years)
}

/// Accumulated depreciation per unit and whether it was stored or derived.
///
/// A stored non-zero value wins. Otherwise, with a cost and an acquisition
/// date, depreciation accrues linearly per average month and is capped at
/// `max_depreciation_ratio` of cost. Without a date the result is 0.
pub fn accumulated_depreciation_with_source(
    asset: &Asset,
    now: DateTime<Utc>,
    settings: &ValuationSettings,
) -> (Decimal, FigureSource) {
    if let Some(stored) = asset.accumulated_depreciation {
        return (stored, FigureSource::Stored);
    }

    let Some(acquired) = asset.acquisition_date else {
        debug!(
            "Asset {} has no acquisition date; accumulated depreciation is 0",
            asset.code
        );
        return (Decimal::ZERO, FigureSource::Derived);
    };
    if asset.acquisition_cost.is_zero() {
        return (Decimal::ZERO, FigureSource::Derived);
    }

    let life_months = economic_life_months(asset, settings);
    if life_months == 0 {
        return (Decimal::ZERO, FigureSource::Derived);
    }

    let cost = asset.acquisition_cost;
    let months_old = months_since(acquired, now, settings.days_per_month);
    let monthly = cost / Decimal::from(life_months);
    let cap = cost
        .checked_mul(settings.max_depreciation_ratio)
        .unwrap_or(cost);
    let accrued = monthly.checked_mul(months_old).unwrap_or(cap);

    (accrued.min(cap).round_dp(DECIMAL_PRECISION), FigureSource::Derived)
}

pub fn base_accumulated_depreciation(
    asset: &Asset,
    now: DateTime<Utc>,
    settings: &ValuationSettings,
) -> Decimal {
    accumulated_depreciation_with_source(asset, now, settings).0
}

/// Residual value per unit: the stored non-zero value, otherwise cost minus
/// accumulated depreciation floored at zero.
pub fn residual_value_with_source(
    asset: &Asset,
    accumulated_depreciation: Decimal,
) -> (Decimal, FigureSource) {
    match asset.residual_value {
        Some(stored) => (stored, FigureSource::Stored),
        None => (
            (asset.acquisition_cost - accumulated_depreciation).max(Decimal::ZERO),
            FigureSource::Derived,
        ),
    }
}

pub fn base_residual_value(
    asset: &Asset,
    now: DateTime<Utc>,
    settings: &ValuationSettings,
) -> Decimal {
    let accumulated = base_accumulated_depreciation(asset, now, settings);
    residual_value_with_source(asset, accumulated).0
}

/// Remaining useful life from whole calendar months elapsed since acquisition.
pub fn remaining_life(
    asset: &Asset,
    now: DateTime<Utc>,
    settings: &ValuationSettings,
) -> RemainingLife {
    let life_months = economic_life_months(asset, settings);
    let months_elapsed = asset
        .acquisition_date
        .map(|acquired| calendar_months_between(acquired, now.date_naive()))
        .unwrap_or(0)
        .clamp(0, i64::from(u32::MAX)) as u32;
    let remaining_months = life_months.saturating_sub(months_elapsed);

    let percent_remaining = if life_months == 0 {
        0
    } else {
        let ratio = Decimal::from(remaining_months) * dec!(100) / Decimal::from(life_months);
        round_percentage(ratio)
            .clamp(Decimal::ZERO, dec!(100))
            .to_u32()
            .unwrap_or(0)
    };

    RemainingLife {
        economic_life_months: life_months,
        months_elapsed,
        remaining_months,
        years: remaining_months / MONTHS_PER_YEAR,
        extra_months: remaining_months % MONTHS_PER_YEAR,
        percent_remaining,
        exhausted: remaining_months == 0,
    }
}

/// Year-by-year book value over the economic life, year 0 included.
pub fn depreciation_schedule(asset: &Asset, settings: &ValuationSettings) -> Vec<ScheduleEntry> {
    let years = effective_life_years(asset, settings).max(1);
    let cost = asset.acquisition_cost;
    let yearly = cost / Decimal::from(years);

    (0..=years)
        .map(|year| {
            let remaining = (cost - yearly * Decimal::from(year))
                .max(Decimal::ZERO)
                .round_dp(DISPLAY_DECIMAL_PRECISION);
            let percentage = if cost > Decimal::ZERO {
                round_percentage(remaining / cost * dec!(100))
            } else {
                Decimal::ZERO
            };
            ScheduleEntry {
                year,
                remaining_value: remaining,
                percentage,
            }
        })
        .collect()
}
