/// Delimiter between the five segments of an asset code
pub const CODE_SEGMENT_DELIMITER: char = '.';

/// Delimiter between a bulk parent code and its unit suffix
pub const BULK_SUFFIX_DELIMITER: char = '-';

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Economic life bounds accepted for an asset, in years
pub const MIN_ECONOMIC_LIFE_YEARS: u32 = 1;
pub const MAX_ECONOMIC_LIFE_YEARS: u32 = 50;

/// Breakdown key for assets without a category or location
pub const UNASSIGNED_GROUP_KEY: &str = "unassigned";

/// Decimal precision for derived depreciation figures
pub const DECIMAL_PRECISION: u32 = 6;
