//! Asset code parsing, formatting and ordering.
//!
//! ## Code Format
//!
//! `{location}.{category}.{source}.{year}.{sequence}[-{unit}]`
//!
//! | Segment | Width | Example |
//! |---------|-------|---------|
//! | location | 3+ digits, zero-padded | `001` |
//! | category | 2+ digits, zero-padded | `05` |
//! | procurement source | 1 digit | `2` |
//! | acquisition year | last 2 digits | `24` |
//! | sequence | 3+ digits, zero-padded | `001` |
//! | bulk unit (optional) | 3+ digits | `-004` |
//!
//! ```
//! use inventaris_core::codes::AssetCode;
//!
//! let code: AssetCode = "009.20.4.25.002-003".parse().unwrap();
//! assert_eq!(code.sequence, 2);
//! assert_eq!(code.unit, Some(3));
//! assert_eq!(code.parent().to_string(), "009.20.4.25.002");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{BULK_SUFFIX_DELIMITER, CODE_SEGMENT_DELIMITER};
use crate::errors::{Error, Result};

/// Minimum width of the sequence and bulk unit segments
pub const SEQUENCE_WIDTH: usize = 3;

static ASSET_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{3,})\.(\d{2,})\.(\d)\.(\d{2})\.(\d{3,})(?:-(\d+))?$")
        .expect("Invalid regex pattern")
});

/// A parsed asset code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetCode {
    pub location: String,
    pub category: String,
    pub source: u8,
    /// Two-digit acquisition year (`24` for 2024)
    pub year: u8,
    pub sequence: u32,
    /// Unit number within a bulk purchase
    pub unit: Option<u32>,
}

impl AssetCode {
    /// Builds a parent code, padding the location to 3 and the category to 2 digits.
    pub fn new(location_code: &str, category_code: &str, source: u8, year: i32, sequence: u32) -> Self {
        Self {
            location: format!("{:0>3}", location_code.trim()),
            category: format!("{:0>2}", category_code.trim()),
            source,
            year: year.rem_euclid(100) as u8,
            sequence,
            unit: None,
        }
    }

    pub fn parse(code: &str) -> Result<Self> {
        let caps = ASSET_CODE_REGEX
            .captures(code.trim())
            .ok_or_else(|| Error::invalid_code(code, "expected AAA.BB.C.DD.EEE[-NNN]"))?;

        let number = |idx: usize, what: &str| -> Result<u32> {
            caps[idx]
                .parse::<u32>()
                .map_err(|_| Error::invalid_code(code, format!("{} segment out of range", what)))
        };

        Ok(Self {
            location: caps[1].to_string(),
            category: caps[2].to_string(),
            source: number(3, "source")? as u8,
            year: number(4, "year")? as u8,
            sequence: number(5, "sequence")?,
            unit: match caps.get(6) {
                Some(_) => Some(number(6, "unit")?),
                None => None,
            },
        })
    }

    /// The code without its bulk unit suffix.
    pub fn parent(&self) -> AssetCode {
        AssetCode {
            unit: None,
            ..self.clone()
        }
    }

    pub fn with_unit(&self, unit: u32) -> AssetCode {
        AssetCode {
            unit: Some(unit),
            ..self.clone()
        }
    }

    /// `location.category.source.year` - the scope a sequence belongs to.
    pub fn prefix(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{:02}",
            self.location,
            self.category,
            self.source,
            self.year,
            d = CODE_SEGMENT_DELIMITER
        )
    }

    pub fn is_bulk_unit(&self) -> bool {
        self.unit.is_some()
    }
}

impl fmt::Display for AssetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:0width$}",
            self.prefix(),
            CODE_SEGMENT_DELIMITER,
            self.sequence,
            width = SEQUENCE_WIDTH
        )?;
        if let Some(unit) = self.unit {
            write!(f, "{}{:0width$}", BULK_SUFFIX_DELIMITER, unit, width = SEQUENCE_WIDTH)?;
        }
        Ok(())
    }
}

impl FromStr for AssetCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AssetCode::parse(s)
    }
}

impl TryFrom<String> for AssetCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        AssetCode::parse(&value)
    }
}

impl From<AssetCode> for String {
    fn from(code: AssetCode) -> Self {
        code.to_string()
    }
}

/// Drops a trailing `-NNN` bulk unit suffix, if any.
pub fn strip_bulk_suffix(code: &str) -> &str {
    let trimmed = code.trim();
    match trimmed.split_once(BULK_SUFFIX_DELIMITER) {
        Some((parent, _)) => parent,
        None => trimmed,
    }
}

/// Sequence number carried by the last segment of a (parent) code.
///
/// Returns `None` for anything whose last segment is not a plain integer;
/// such codes do not take part in sequence allocation.
pub fn trailing_sequence(code: &str) -> Option<u32> {
    let parent = strip_bulk_suffix(code);
    let last = parent.rsplit(CODE_SEGMENT_DELIMITER).next()?;
    if last.is_empty() || !last.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    last.parse::<u32>().ok()
}

/// Sort key that keeps bulk units in numeric order: the unit suffix is
/// padded to at least 3 digits (`…002-7` becomes `…002-007`).
pub fn sortable_key(code: &str) -> String {
    let trimmed = code.trim();
    match trimmed.split_once(BULK_SUFFIX_DELIMITER) {
        Some((parent, suffix)) => format!(
            "{}{}{:0>width$}",
            parent,
            BULK_SUFFIX_DELIMITER,
            suffix,
            width = SEQUENCE_WIDTH
        ),
        None => trimmed.to_string(),
    }
}

/// Natural ordering of asset codes: digit runs compare by numeric value,
/// everything else byte-wise.
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    let ka = sortable_key(a);
    let kb = sortable_key(b);
    let mut left = chunks(&ka);
    let mut right = chunks(&kb);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return ka.cmp(&kb),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = compare_chunk(l, r);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Sorts codes in place using [`compare_codes`].
pub fn sort_codes<S: AsRef<str>>(codes: &mut [S]) {
    codes.sort_by(|a, b| compare_codes(a.as_ref(), b.as_ref()));
}

fn chunks(s: &str) -> impl Iterator<Item = &str> {
    let bytes = s.as_bytes();
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= bytes.len() {
            return None;
        }
        let digit = bytes[start].is_ascii_digit();
        let end = bytes[start..]
            .iter()
            .position(|b| b.is_ascii_digit() != digit)
            .map_or(bytes.len(), |p| start + p);
        let chunk = &s[start..end];
        start = end;
        Some(chunk)
    })
}

fn compare_chunk(l: &str, r: &str) -> Ordering {
    let l_digits = l.bytes().all(|b| b.is_ascii_digit());
    let r_digits = r.bytes().all(|b| b.is_ascii_digit());
    if l_digits && r_digits {
        let l_trim = l.trim_start_matches('0');
        let r_trim = r.trim_start_matches('0');
        l_trim
            .len()
            .cmp(&r_trim.len())
            .then_with(|| l_trim.cmp(r_trim))
    } else {
        l.cmp(r)
    }
}
