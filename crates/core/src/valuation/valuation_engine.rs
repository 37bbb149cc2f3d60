//! Valuation engine - per-asset figures, population totals and breakdowns.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::{Asset, Category, Holding, Location};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, UNASSIGNED_GROUP_KEY};
use crate::settings::ValuationSettings;

use super::depreciation_calculator::{
    accumulated_depreciation_with_source, depreciation_percentage, depreciation_schedule,
    remaining_life, residual_value_with_source,
};
use super::{
    AssetValuation, BreakdownGroup, BreakdownKey, RemainingLife, ScheduleEntry, ValuationSummary,
    ValueFigures,
};

/// Trait for the valuation engine.
///
/// Every method is a pure function of its arguments and `now`; calling it
/// twice with the same inputs yields identical results.
pub trait ValuationEngineTrait: Send + Sync {
    /// Values one inventory line, scaling by its unit count.
    fn value(&self, holding: &Holding, now: DateTime<Utc>) -> AssetValuation;

    /// Values every line, preserving order.
    fn value_all(&self, holdings: &[Holding], now: DateTime<Utc>) -> Vec<AssetValuation> {
        holdings.iter().map(|h| self.value(h, now)).collect()
    }

    /// Totals over the population.
    fn summarize(&self, holdings: &[Holding], now: DateTime<Utc>) -> ValuationSummary {
        summarize_valuations(&self.value_all(holdings, now))
    }

    /// Groups the population by status, category id or location id.
    /// Category and location groups are labelled from the given registries.
    fn breakdown(
        &self,
        holdings: &[Holding],
        key: BreakdownKey,
        categories: &[Category],
        locations: &[Location],
        now: DateTime<Utc>,
    ) -> Vec<BreakdownGroup>;
}

/// Straight-line valuation engine.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    settings: ValuationSettings,
}

impl ValuationEngine {
    pub fn new(settings: ValuationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ValuationSettings {
        &self.settings
    }

    pub fn remaining_life(&self, asset: &Asset, now: DateTime<Utc>) -> RemainingLife {
        remaining_life(asset, now, &self.settings)
    }

    pub fn depreciation_schedule(&self, asset: &Asset) -> Vec<ScheduleEntry> {
        depreciation_schedule(asset, &self.settings)
    }

    pub fn breakdown_by_status(
        &self,
        holdings: &[Holding],
        now: DateTime<Utc>,
    ) -> Vec<BreakdownGroup> {
        self.aggregate_by(holdings, now, |asset| {
            (
                asset.status.as_str().to_string(),
                Some(asset.status.label().to_string()),
            )
        })
    }

    /// Category breakdown, labelled with the names in `categories`.
    pub fn breakdown_by_category(
        &self,
        holdings: &[Holding],
        categories: &[Category],
        now: DateTime<Utc>,
    ) -> Vec<BreakdownGroup> {
        let names: HashMap<&str, &str> = categories
            .iter()
            .filter_map(|c| Some((c.id.as_deref()?, c.name.as_deref()?)))
            .collect();
        self.aggregate_by(holdings, now, |asset| {
            group_key(asset.category_id.as_deref(), &names)
        })
    }

    /// Location breakdown, labelled with the names in `locations`.
    pub fn breakdown_by_location(
        &self,
        holdings: &[Holding],
        locations: &[Location],
        now: DateTime<Utc>,
    ) -> Vec<BreakdownGroup> {
        let names: HashMap<&str, &str> = locations
            .iter()
            .filter_map(|l| Some((l.id.as_deref()?, l.name.as_deref()?)))
            .collect();
        self.aggregate_by(holdings, now, |asset| {
            group_key(asset.location_id.as_deref(), &names)
        })
    }

    /// Sums unit counts, scaled acquisition cost and scaled residual value
    /// per group key. Groups are ordered by acquisition value descending,
    /// then by key.
    fn aggregate_by<F>(&self, holdings: &[Holding], now: DateTime<Utc>, key_fn: F) -> Vec<BreakdownGroup>
    where
        F: Fn(&Asset) -> (String, Option<String>),
    {
        let mut groups: HashMap<String, BreakdownGroup> = HashMap::new();
        let mut total_acquisition = Decimal::ZERO;

        for holding in holdings {
            let valuation = self.value(holding, now);
            let (key, label) = key_fn(holding.asset());
            total_acquisition = add_money(total_acquisition, valuation.total.acquisition_cost);

            let group = groups.entry(key.clone()).or_insert_with(|| BreakdownGroup {
                key,
                label,
                unit_count: 0,
                acquisition_value: Decimal::ZERO,
                current_value: Decimal::ZERO,
                percentage: Decimal::ZERO,
            });
            group.unit_count += u64::from(valuation.unit_count);
            group.acquisition_value =
                add_money(group.acquisition_value, valuation.total.acquisition_cost);
            group.current_value = add_money(group.current_value, valuation.total.residual_value);
        }

        let mut result: Vec<BreakdownGroup> = groups
            .into_values()
            .map(|mut group| {
                group.percentage = if total_acquisition > Decimal::ZERO {
                    (group.acquisition_value / total_acquisition * dec!(100))
                        .round_dp(DISPLAY_DECIMAL_PRECISION)
                } else {
                    Decimal::ZERO
                };
                group
            })
            .collect();

        result.sort_by(|a, b| {
            b.acquisition_value
                .cmp(&a.acquisition_value)
                .then_with(|| a.key.cmp(&b.key))
        });
        result
    }
}

/// Sum of two non-negative amounts, saturating at `Decimal::MAX`.
fn add_money(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        warn!("Sum {} + {} overflows, using the largest representable value", total, amount);
        Decimal::MAX
    })
}

fn group_key(id: Option<&str>, names: &HashMap<&str, &str>) -> (String, Option<String>) {
    match id {
        Some(id) => (id.to_string(), names.get(id).map(|n| n.to_string())),
        None => (UNASSIGNED_GROUP_KEY.to_string(), None),
    }
}

impl ValuationEngineTrait for ValuationEngine {
    fn value(&self, holding: &Holding, now: DateTime<Utc>) -> AssetValuation {
        let asset = holding.asset();
        let (accumulated_depreciation, accumulated_depreciation_source) =
            accumulated_depreciation_with_source(asset, now, &self.settings);
        let (residual_value, residual_value_source) =
            residual_value_with_source(asset, accumulated_depreciation);

        let per_unit = ValueFigures {
            acquisition_cost: asset.acquisition_cost,
            accumulated_depreciation,
            residual_value,
        };
        let unit_count = holding.unit_count();

        AssetValuation {
            code: asset.code.clone(),
            unit_count,
            per_unit,
            total: per_unit.scaled(holding),
            accumulated_depreciation_source,
            residual_value_source,
            depreciation_percentage: depreciation_percentage(
                per_unit.acquisition_cost,
                per_unit.residual_value,
            ),
        }
    }

    fn breakdown(
        &self,
        holdings: &[Holding],
        key: BreakdownKey,
        categories: &[Category],
        locations: &[Location],
        now: DateTime<Utc>,
    ) -> Vec<BreakdownGroup> {
        match key {
            BreakdownKey::Status => self.breakdown_by_status(holdings, now),
            BreakdownKey::Category => self.breakdown_by_category(holdings, categories, now),
            BreakdownKey::Location => self.breakdown_by_location(holdings, locations, now),
        }
    }
}

/// Folds already computed valuations into population totals.
pub fn summarize_valuations(valuations: &[AssetValuation]) -> ValuationSummary {
    let mut summary = ValuationSummary {
        asset_count: valuations.len(),
        ..Default::default()
    };

    for valuation in valuations {
        summary.unit_count += u64::from(valuation.unit_count);
        summary.total_acquisition_value =
            add_money(summary.total_acquisition_value, valuation.total.acquisition_cost);
        summary.total_current_value =
            add_money(summary.total_current_value, valuation.total.residual_value);
        summary.total_accumulated_depreciation = add_money(
            summary.total_accumulated_depreciation,
            valuation.total.accumulated_depreciation,
        );
    }

    summary.depreciation_percentage = depreciation_percentage(
        summary.total_acquisition_value,
        summary.total_current_value,
    );
    summary
}
