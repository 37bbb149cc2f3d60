//! Settings models for code generation and valuation.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assets::ProcurementSource;
use crate::constants::{MAX_ECONOMIC_LIFE_YEARS, MIN_ECONOMIC_LIFE_YEARS};
use crate::errors::{Error, Result, ValidationError};

/// Which existing codes take part in the next-sequence search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SequenceScope {
    /// Every code in the population, whatever its prefix.
    #[default]
    Global,
    /// Only codes sharing the location.category.source.year prefix.
    Prefix,
}

/// Straight-line depreciation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationSettings {
    /// Economic life used when an asset carries none (or zero)
    pub default_economic_life_years: u32,
    /// Floor applied to the economic life, in months
    pub min_economic_life_months: u32,
    /// Average month length used to turn elapsed days into months
    pub days_per_month: Decimal,
    /// Upper bound of accumulated depreciation as a fraction of cost
    pub max_depreciation_ratio: Decimal,
}

impl Default for ValuationSettings {
    fn default() -> Self {
        Self {
            default_economic_life_years: 5,
            min_economic_life_months: 12,
            days_per_month: dec!(30.44),
            max_depreciation_ratio: dec!(0.9),
        }
    }
}

impl ValuationSettings {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ECONOMIC_LIFE_YEARS..=MAX_ECONOMIC_LIFE_YEARS)
            .contains(&self.default_economic_life_years)
        {
            return Err(ValidationError::OutOfRange {
                field: "defaultEconomicLifeYears".to_string(),
                value: self.default_economic_life_years.to_string(),
                min: MIN_ECONOMIC_LIFE_YEARS.to_string(),
                max: MAX_ECONOMIC_LIFE_YEARS.to_string(),
            }
            .into());
        }
        if self.days_per_month <= Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "daysPerMonth must be positive, got {}",
                self.days_per_month
            )));
        }
        if self.max_depreciation_ratio <= Decimal::ZERO || self.max_depreciation_ratio > Decimal::ONE
        {
            return Err(ValidationError::OutOfRange {
                field: "maxDepreciationRatio".to_string(),
                value: self.max_depreciation_ratio.to_string(),
                min: "0 (exclusive)".to_string(),
                max: "1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Asset code generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeSettings {
    /// Procurement source label -> code digit
    pub procurement_sources: BTreeMap<String, u8>,
    /// Digit used for labels missing from `procurement_sources`
    pub default_source_digit: u8,
    pub sequence_scope: SequenceScope,
}

impl Default for CodeSettings {
    fn default() -> Self {
        let procurement_sources = ProcurementSource::ALL
            .iter()
            .map(|source| (source.label().to_string(), source.digit()))
            .collect();
        Self {
            procurement_sources,
            default_source_digit: ProcurementSource::Pembelian.digit(),
            sequence_scope: SequenceScope::Global,
        }
    }
}

impl CodeSettings {
    /// Maps a procurement source label to its code digit.
    ///
    /// Exact label match first, then a case-insensitive match ignoring
    /// separators, so `pembelian` and ` HIBAH ` resolve too. Anything else
    /// falls back to `default_source_digit`.
    pub fn source_digit(&self, source: &str) -> u8 {
        if let Some(digit) = self.procurement_sources.get(source) {
            return *digit;
        }

        let wanted = normalize_label(source);
        let matched = self
            .procurement_sources
            .iter()
            .find(|(label, _)| normalize_label(label) == wanted)
            .map(|(_, digit)| *digit);

        match matched {
            Some(digit) => digit,
            None => {
                debug!(
                    "Unrecognized procurement source '{}', using digit {}",
                    source, self.default_source_digit
                );
                self.default_source_digit
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let digits = self
            .procurement_sources
            .iter()
            .map(|(label, digit)| (label.as_str(), *digit))
            .chain(std::iter::once(("defaultSourceDigit", self.default_source_digit)));

        for (label, digit) in digits {
            if !(1..=9).contains(&digit) {
                return Err(ValidationError::OutOfRange {
                    field: label.to_string(),
                    value: digit.to_string(),
                    min: "1".to_string(),
                    max: "9".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

fn normalize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    pub valuation: ValuationSettings,
    pub codes: CodeSettings,
}

impl EngineSettings {
    /// Parses and validates settings from JSON. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: EngineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a JSON settings file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::ConfigIO(format!("Failed to read {}: {}", path.display(), e))
        })?;
        debug!("Loaded engine settings from {}", path.display());
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        self.valuation.validate()?;
        self.codes.validate()
    }
}
