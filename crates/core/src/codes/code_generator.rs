//! Next-code generation for new, not yet persisted assets.

use std::ops::Range;

use log::debug;
use serde::{Deserialize, Serialize};

use super::asset_code::{strip_bulk_suffix, trailing_sequence, AssetCode};
use crate::assets::CodedRecord;
use crate::settings::{CodeSettings, SequenceScope};

/// The form selections a code is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeRequest {
    pub location_code: String,
    pub category_code: String,
    pub procurement_source: String,
    pub procurement_year: i32,
}

impl CodeRequest {
    pub fn new(
        location_code: impl Into<String>,
        category_code: impl Into<String>,
        procurement_source: impl Into<String>,
        procurement_year: i32,
    ) -> Self {
        Self {
            location_code: location_code.into(),
            category_code: category_code.into(),
            procurement_source: procurement_source.into(),
            procurement_year,
        }
    }
}

/// Codes for a bulk purchase: one parent plus `PARENT-001 … PARENT-NNN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCodes {
    pub parent: String,
    pub units: Vec<String>,
}

/// Derives asset codes from form selections and the current asset population.
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    settings: CodeSettings,
}

impl CodeGenerator {
    pub fn new(settings: CodeSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CodeSettings {
        &self.settings
    }

    /// Next code for a single new asset.
    ///
    /// `existing` is the whole asset population; it is only read.
    pub fn generate_code<T: CodedRecord>(
        &self,
        location_code: &str,
        category_code: &str,
        procurement_source: &str,
        procurement_year: i32,
        existing: &[T],
    ) -> String {
        let request = CodeRequest::new(
            location_code,
            category_code,
            procurement_source,
            procurement_year,
        );
        self.generate(&request, existing).to_string()
    }

    /// Same as [`CodeGenerator::generate_code`], returning the parsed form.
    pub fn generate<T: CodedRecord>(&self, request: &CodeRequest, existing: &[T]) -> AssetCode {
        let mut code = self.base_code(request);
        code.sequence = self.max_sequence(&code.prefix(), existing).saturating_add(1);
        code
    }

    /// Parent and unit codes for `count` units bought together.
    ///
    /// All units share the parent's sequence; a count of 0 or 1 yields no
    /// unit codes.
    pub fn generate_bulk_codes<T: CodedRecord>(
        &self,
        request: &CodeRequest,
        existing: &[T],
        count: u32,
    ) -> BulkCodes {
        let parent = self.generate(request, existing);
        let units = if count > 1 {
            (1..=count).map(|unit| parent.with_unit(unit).to_string()).collect()
        } else {
            Vec::new()
        };
        BulkCodes {
            parent: parent.to_string(),
            units,
        }
    }

    /// A block of `count` consecutive fresh sequence numbers, for callers
    /// that give every unit of a purchase its own parent code.
    pub fn next_sequence_range<T: CodedRecord>(
        &self,
        request: &CodeRequest,
        existing: &[T],
        count: u32,
    ) -> Range<u32> {
        let start = self
            .max_sequence(&self.base_code(request).prefix(), existing)
            .saturating_add(1);
        start..start.saturating_add(count)
    }

    fn base_code(&self, request: &CodeRequest) -> AssetCode {
        AssetCode::new(
            &request.location_code,
            &request.category_code,
            self.settings.source_digit(&request.procurement_source),
            request.procurement_year,
            0,
        )
    }

    /// Highest sequence among the codes in scope, 0 when there are none.
    ///
    /// This is the only place the sequence scope is decided. With
    /// `SequenceScope::Global` (the default) every code counts regardless of
    /// its prefix, so sequences behave as one population-wide counter.
    /// Bulk suffixes are stripped first; codes without an integer last
    /// segment are skipped.
    fn max_sequence<T: CodedRecord>(&self, prefix: &str, existing: &[T]) -> u32 {
        let scoped_prefix = format!("{}.", prefix);
        existing
            .iter()
            .map(|record| record.asset_code())
            .filter(|code| match self.settings.sequence_scope {
                SequenceScope::Global => true,
                SequenceScope::Prefix => strip_bulk_suffix(code).starts_with(&scoped_prefix),
            })
            .filter_map(|code| {
                let sequence = trailing_sequence(code);
                if sequence.is_none() && !code.trim().is_empty() {
                    debug!("Skipping malformed asset code '{}' in sequence scan", code);
                }
                sequence
            })
            .max()
            .unwrap_or(0)
    }
}

/// Next code using the default settings.
///
/// ```
/// use inventaris_core::codes::generate_code;
///
/// let existing: Vec<String> = Vec::new();
/// assert_eq!(generate_code("1", "5", "Bantuan", 2024, &existing), "001.05.2.24.001");
/// ```
pub fn generate_code<T: CodedRecord>(
    location_code: &str,
    category_code: &str,
    procurement_source: &str,
    procurement_year: i32,
    existing: &[T],
) -> String {
    CodeGenerator::default().generate_code(
        location_code,
        category_code,
        procurement_source,
        procurement_year,
        existing,
    )
}
