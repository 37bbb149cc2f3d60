use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;

const SECONDS_PER_DAY: i64 = 86_400;

/// Elapsed days from the start of `start` (UTC midnight) to `now`,
/// including the fraction of the current day. Negative for future dates.
pub fn fractional_days_since(start: NaiveDate, now: DateTime<Utc>) -> Decimal {
    let start_instant = start.and_time(chrono::NaiveTime::MIN).and_utc();
    let seconds = (now - start_instant).num_seconds();
    Decimal::from(seconds) / Decimal::from(SECONDS_PER_DAY)
}

/// Age in average-length months, never negative.
pub fn months_since(start: NaiveDate, now: DateTime<Utc>, days_per_month: Decimal) -> Decimal {
    if days_per_month <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let months = fractional_days_since(start, now) / days_per_month;
    months.max(Decimal::ZERO)
}

/// Calendar months between two dates, ignoring the day of month
/// (2024-01-31 to 2024-02-01 is one month). Negative when `end` is earlier.
pub fn calendar_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year() - start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    years * 12 + months
}
