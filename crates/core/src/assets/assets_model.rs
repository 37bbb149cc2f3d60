//! Asset, location and category models.

use std::fmt;

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::assets_constants::*;
use super::lenient_format;
use super::Holding;

/// Condition of an asset as recorded by the inventory backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetStatus {
    #[default]
    Baik,
    Rusak,
    TidakMemadai,
    Hilang,
    /// Any label this crate does not know; kept verbatim.
    Other(String),
}

impl AssetStatus {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | STATUS_BAIK => AssetStatus::Baik,
            STATUS_RUSAK => AssetStatus::Rusak,
            STATUS_TIDAK_MEMADAI => AssetStatus::TidakMemadai,
            STATUS_HILANG => AssetStatus::Hilang,
            _ => AssetStatus::Other(value.trim().to_string()),
        }
    }

    /// Stored representation, also used as the breakdown key.
    pub fn as_str(&self) -> &str {
        match self {
            AssetStatus::Baik => STATUS_BAIK,
            AssetStatus::Rusak => STATUS_RUSAK,
            AssetStatus::TidakMemadai => STATUS_TIDAK_MEMADAI,
            AssetStatus::Hilang => STATUS_HILANG,
            AssetStatus::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AssetStatus::Baik => "Baik",
            AssetStatus::Rusak => "Rusak",
            AssetStatus::TidakMemadai => "Tidak Memadai",
            AssetStatus::Hilang => "Hilang",
            AssetStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for AssetStatus {
    fn from(value: String) -> Self {
        AssetStatus::parse(&value)
    }
}

impl From<AssetStatus> for String {
    fn from(status: AssetStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Origin of an acquisition, encoded as one digit of the asset code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcurementSource {
    Pembelian,
    Bantuan,
    Sttst,
    Hibah,
}

impl ProcurementSource {
    pub const ALL: [ProcurementSource; 4] = [
        ProcurementSource::Pembelian,
        ProcurementSource::Bantuan,
        ProcurementSource::Sttst,
        ProcurementSource::Hibah,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            ProcurementSource::Pembelian => SOURCE_PEMBELIAN,
            ProcurementSource::Bantuan => SOURCE_BANTUAN,
            ProcurementSource::Sttst => SOURCE_STTST,
            ProcurementSource::Hibah => SOURCE_HIBAH,
        }
    }

    pub const fn digit(&self) -> u8 {
        match self {
            ProcurementSource::Pembelian => 1,
            ProcurementSource::Bantuan => 2,
            ProcurementSource::Sttst => 3,
            ProcurementSource::Hibah => 4,
        }
    }
}

/// Asset record exactly as the backend API returns it.
///
/// Every field is optional and tolerant: numbers may arrive as strings,
/// dates as timestamps, and garbage is read as absent. Both the camelCase
/// API names and the backend's column names are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    #[serde(default, alias = "kode", deserialize_with = "lenient_format::deserialize_text")]
    pub code: Option<String>,
    #[serde(
        default,
        alias = "harga_perolehan",
        deserialize_with = "lenient_format::deserialize_decimal"
    )]
    pub acquisition_cost: Option<Decimal>,
    #[serde(
        default,
        alias = "tanggal_perolehan",
        deserialize_with = "lenient_format::deserialize_date"
    )]
    pub acquisition_date: Option<NaiveDate>,
    #[serde(
        default,
        alias = "umur_ekonomis_tahun",
        deserialize_with = "lenient_format::deserialize_count"
    )]
    pub economic_life_years: Option<u32>,
    #[serde(
        default,
        alias = "nilai_sisa",
        deserialize_with = "lenient_format::deserialize_decimal"
    )]
    pub residual_value: Option<Decimal>,
    #[serde(
        default,
        alias = "akumulasi_penyusutan",
        deserialize_with = "lenient_format::deserialize_decimal"
    )]
    pub accumulated_depreciation: Option<Decimal>,
    #[serde(
        default,
        alias = "bulk_total_count",
        deserialize_with = "lenient_format::deserialize_count"
    )]
    pub bulk_total_count: Option<u32>,
    #[serde(
        default,
        alias = "is_bulk_parent",
        deserialize_with = "lenient_format::deserialize_flag"
    )]
    pub is_bulk_parent: bool,
    #[serde(default, deserialize_with = "lenient_format::deserialize_text")]
    pub status: Option<String>,
    #[serde(
        default,
        alias = "category_id",
        deserialize_with = "lenient_format::deserialize_text"
    )]
    pub category_id: Option<String>,
    #[serde(
        default,
        alias = "lokasi_id",
        alias = "location_id",
        deserialize_with = "lenient_format::deserialize_text"
    )]
    pub location_id: Option<String>,
    #[serde(
        default,
        alias = "asal_pengadaan",
        deserialize_with = "lenient_format::deserialize_text"
    )]
    pub procurement_source: Option<String>,
}

impl AssetRecord {
    /// The single coercion boundary between API records and the engines.
    ///
    /// Missing or negative money becomes zero, stored figures equal to zero
    /// count as absent, a zero economic life counts as unset, and a bulk
    /// count of zero or one yields a `Holding::Single`.
    pub fn into_holding(self) -> Holding {
        let code = self.code.unwrap_or_default();

        let acquisition_cost = non_negative(&code, "acquisitionCost", self.acquisition_cost)
            .unwrap_or(Decimal::ZERO);
        let residual_value = non_negative(&code, "residualValue", self.residual_value)
            .filter(|v| !v.is_zero());
        let accumulated_depreciation =
            non_negative(&code, "accumulatedDepreciation", self.accumulated_depreciation)
                .filter(|v| !v.is_zero());

        let asset = Asset {
            code,
            acquisition_cost,
            acquisition_date: self.acquisition_date,
            economic_life_years: self.economic_life_years.filter(|years| *years > 0),
            residual_value,
            accumulated_depreciation,
            is_bulk_parent: self.is_bulk_parent,
            status: self
                .status
                .as_deref()
                .map(AssetStatus::parse)
                .unwrap_or_default(),
            category_id: non_blank(self.category_id),
            location_id: non_blank(self.location_id),
            procurement_source: non_blank(self.procurement_source),
        };

        Holding::new(asset, self.bulk_total_count.unwrap_or(1))
    }
}

fn non_negative(code: &str, field: &str, value: Option<Decimal>) -> Option<Decimal> {
    match value {
        Some(v) if v.is_sign_negative() && !v.is_zero() => {
            warn!("Asset {}: negative {} {} treated as zero", code, field, v);
            Some(Decimal::ZERO)
        }
        other => other,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Typed, per-unit view of a single asset record.
///
/// Built only through `AssetRecord::into_holding`. The unit count lives on
/// the enclosing `Holding`, never here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub code: String,
    pub acquisition_cost: Decimal,
    pub acquisition_date: Option<NaiveDate>,
    /// `None` when the record carried no (or a zero) economic life
    pub economic_life_years: Option<u32>,
    /// Stored residual value; `None` when absent or zero
    pub residual_value: Option<Decimal>,
    /// Stored accumulated depreciation; `None` when absent or zero
    pub accumulated_depreciation: Option<Decimal>,
    pub is_bulk_parent: bool,
    pub status: AssetStatus,
    pub category_id: Option<String>,
    pub location_id: Option<String>,
    pub procurement_source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, deserialize_with = "lenient_format::deserialize_text")]
    pub id: Option<String>,
    #[serde(default)]
    pub code: String,
    #[serde(default, alias = "nama")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, deserialize_with = "lenient_format::deserialize_text")]
    pub id: Option<String>,
    #[serde(default)]
    pub code: String,
    #[serde(default, alias = "nama")]
    pub name: Option<String>,
}

/// Anything that carries an asset code. Lets the code generator scan
/// raw records, typed assets, holdings or plain code strings alike.
pub trait CodedRecord {
    fn asset_code(&self) -> &str;
}

impl CodedRecord for AssetRecord {
    fn asset_code(&self) -> &str {
        self.code.as_deref().unwrap_or_default()
    }
}

impl CodedRecord for Asset {
    fn asset_code(&self) -> &str {
        &self.code
    }
}

impl CodedRecord for Holding {
    fn asset_code(&self) -> &str {
        &self.asset().code
    }
}

impl CodedRecord for String {
    fn asset_code(&self) -> &str {
        self
    }
}

impl CodedRecord for &str {
    fn asset_code(&self) -> &str {
        self
    }
}
