//! A record together with the number of physical units it stands for.

use log::warn;
use rust_decimal::Decimal;

use super::{Asset, AssetRecord};

/// One inventory line. A bulk parent stands for `count` identical units whose
/// monetary fields are stored per unit; every total must go through
/// [`Holding::scale`].
#[derive(Debug, Clone, PartialEq)]
pub enum Holding {
    Single(Asset),
    BulkParent { asset: Asset, count: u32 },
}

impl Holding {
    /// Counts of 0 and 1 both produce `Single`.
    pub fn new(asset: Asset, count: u32) -> Self {
        if count > 1 {
            Holding::BulkParent { asset, count }
        } else {
            Holding::Single(asset)
        }
    }

    pub fn asset(&self) -> &Asset {
        match self {
            Holding::Single(asset) => asset,
            Holding::BulkParent { asset, .. } => asset,
        }
    }

    pub fn unit_count(&self) -> u32 {
        match self {
            Holding::Single(_) => 1,
            Holding::BulkParent { count, .. } => *count,
        }
    }

    pub fn is_bulk(&self) -> bool {
        matches!(self, Holding::BulkParent { .. })
    }

    /// Multiplies a per-unit figure by the unit count, saturating at
    /// `Decimal::MAX` when the product is not representable.
    pub fn scale(&self, per_unit: Decimal) -> Decimal {
        per_unit
            .checked_mul(Decimal::from(self.unit_count()))
            .unwrap_or_else(|| {
                warn!(
                    "Asset {}: {} x {} overflows, using the largest representable value",
                    self.asset().code,
                    per_unit,
                    self.unit_count()
                );
                Decimal::MAX
            })
    }
}

impl From<AssetRecord> for Holding {
    fn from(record: AssetRecord) -> Self {
        record.into_holding()
    }
}

/// Converts a batch of API records, preserving order.
pub fn holdings_from_records(records: &[AssetRecord]) -> Vec<Holding> {
    records.iter().cloned().map(AssetRecord::into_holding).collect()
}
