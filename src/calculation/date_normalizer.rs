//! Date normalization for spreadsheet cell values.
//!
//! Source sheets record dates in whatever format the uploading client
//! produced: ISO strings, compact digit runs, localized text, ambiguous
//! slash dates, raw spreadsheet serials, and millisecond timestamps. This
//! module is the single place that turns any of those into a canonical
//! [`NaiveDate`]. Formats are attempted in a strict priority order and
//! the first success wins; a value matching none of them yields `None`,
//! which callers treat as "skip this row", never as a fatal condition.

use chrono::{DateTime, Datelike, Days, NaiveDate};

use crate::source::CellValue;

/// Lower bound on accepted years for heuristic formats.
const MIN_YEAR: i32 = 1900;
/// Upper bound on accepted years for heuristic formats.
const MAX_YEAR: i32 = 2100;

/// Spreadsheet serials count days from this date.
fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("valid epoch")
}

fn year_in_bounds(date: NaiveDate) -> Option<NaiveDate> {
    if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        Some(date)
    } else {
        None
    }
}

/// Converts a heterogeneous date cell into a canonical calendar date.
///
/// Attempts, in order:
/// 1. ISO `YYYY-MM-DD`, with any time suffix ignored.
/// 2. Compact 8-digit `YYYYMMDD`.
/// 3. Textual `D Month YYYY` / `Month D, YYYY` (full or abbreviated
///    month names).
/// 4. Slash `A/B/YYYY`, disambiguated by magnitude: `A > 12` reads as
///    day-first, `B > 12` as month-first, and fully ambiguous values try
///    month-first, then day-first, accepting whichever forms a real date.
/// 5. Secondary formats (`YYYY/M/D`, `D-M-YYYY`), year-bounded.
/// 6. Spreadsheet serial numbers (days since 1899-12-30) in
///    `[1, 100000)`, year-bounded.
/// 7. Millisecond Unix timestamps (10-13 digit integers), year-bounded.
///
/// Returns `None` for anything else. Time-of-day information in any
/// format is discarded.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::normalize_date;
/// use salary_engine::source::CellValue;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
///
/// let iso = CellValue::Text("2025-11-20".to_string());
/// let slash = CellValue::Text("11/20/2025".to_string());
/// let serial = CellValue::Number(45981.0);
///
/// assert_eq!(normalize_date(&iso), Some(expected));
/// assert_eq!(normalize_date(&slash), Some(expected));
/// assert_eq!(normalize_date(&serial), Some(expected));
/// ```
pub fn normalize_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Text(raw) => normalize_text(raw.trim()),
        CellValue::Number(n) => normalize_number(*n),
        CellValue::Empty => None,
    }
}

fn normalize_text(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }

    if let Some(date) = parse_iso(raw) {
        return Some(date);
    }

    if let Some(date) = parse_compact(raw) {
        return Some(date);
    }

    if let Some(date) = parse_textual(raw) {
        return Some(date);
    }

    if let Some(date) = parse_slash(raw) {
        return Some(date);
    }

    if let Some(date) = parse_secondary(raw) {
        return Some(date);
    }

    // Sheets sometimes deliver serials and timestamps as text.
    if let Ok(n) = raw.parse::<f64>() {
        return normalize_number(n);
    }

    None
}

fn normalize_number(n: f64) -> Option<NaiveDate> {
    if !n.is_finite() {
        return None;
    }

    let is_integral = n.fract() == 0.0;

    // Compact YYYYMMDD arrives numerically from sheets that treat the
    // column as a number.
    if is_integral && (10_000_000.0..100_000_000.0).contains(&n) {
        return parse_compact(&format!("{}", n as i64));
    }

    if (1.0..100_000.0).contains(&n) {
        let date = serial_epoch().checked_add_days(Days::new(n.trunc() as u64))?;
        return year_in_bounds(date);
    }

    if is_integral && (1e9..1e13).contains(&n) {
        let date = DateTime::from_timestamp_millis(n as i64)?.date_naive();
        return year_in_bounds(date);
    }

    None
}

fn parse_iso(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    // ISO with a time suffix: parse the date prefix, ignore the rest.
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn parse_compact(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: i32 = raw[..4].parse().ok()?;
    let month: u32 = raw[4..6].parse().ok()?;
    let day: u32 = raw[6..8].parse().ok()?;

    // from_ymd_opt is the round-trip check: an out-of-range component
    // cannot construct a date that maps back to the same digits.
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_textual(raw: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 4] = ["%d %B %Y", "%B %d, %Y", "%d %b %Y", "%b %d, %Y"];

    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

fn parse_slash(raw: &str) -> Option<NaiveDate> {
    // A slash date may carry a time suffix; only the first token counts.
    let token = raw.split_whitespace().next()?;

    let parts: Vec<&str> = token.split('/').collect();
    if parts.len() != 3 || parts[2].len() != 4 {
        return None;
    }

    let a: u32 = parts[0].parse().ok()?;
    let b: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;

    if a > 12 {
        // A cannot be a month, so this is D/M/Y.
        return NaiveDate::from_ymd_opt(year, b, a);
    }
    if b > 12 {
        // B cannot be a month, so this is M/D/Y.
        return NaiveDate::from_ymd_opt(year, a, b);
    }

    // Ambiguous: month-first wins, day-first is the fallback.
    NaiveDate::from_ymd_opt(year, a, b).or_else(|| NaiveDate::from_ymd_opt(year, b, a))
}

fn parse_secondary(raw: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 2] = ["%Y/%m/%d", "%d-%m-%Y"];

    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(year_in_bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(normalize_date(&text("2025-11-20")), Some(date(2025, 11, 20)));
    }

    #[test]
    fn test_iso_date_with_time_suffix_ignored() {
        assert_eq!(
            normalize_date(&text("2025-11-20 14:30:00")),
            Some(date(2025, 11, 20))
        );
        assert_eq!(
            normalize_date(&text("2025-11-20T14:30:00")),
            Some(date(2025, 11, 20))
        );
    }

    #[test]
    fn test_compact_date() {
        assert_eq!(normalize_date(&text("20251120")), Some(date(2025, 11, 20)));
        assert_eq!(normalize_date(&num(20251120.0)), Some(date(2025, 11, 20)));
    }

    #[test]
    fn test_compact_rejects_invalid_components() {
        // Month 13 cannot round-trip.
        assert_eq!(normalize_date(&text("20251340")), None);
        assert_eq!(normalize_date(&text("20250230")), None);
    }

    #[test]
    fn test_textual_dates() {
        assert_eq!(
            normalize_date(&text("20 November 2025")),
            Some(date(2025, 11, 20))
        );
        assert_eq!(
            normalize_date(&text("November 20, 2025")),
            Some(date(2025, 11, 20))
        );
        assert_eq!(normalize_date(&text("20 Nov 2025")), Some(date(2025, 11, 20)));
        assert_eq!(
            normalize_date(&text("Nov 20, 2025")),
            Some(date(2025, 11, 20))
        );
    }

    #[test]
    fn test_slash_day_first_when_first_exceeds_twelve() {
        assert_eq!(normalize_date(&text("25/12/2025")), Some(date(2025, 12, 25)));
    }

    #[test]
    fn test_slash_month_first_when_second_exceeds_twelve() {
        assert_eq!(normalize_date(&text("12/25/2025")), Some(date(2025, 12, 25)));
        assert_eq!(normalize_date(&text("11/20/2025")), Some(date(2025, 11, 20)));
    }

    /// Ambiguous slash dates resolve month-first, by contract.
    #[test]
    fn test_slash_ambiguous_prefers_month_first() {
        assert_eq!(normalize_date(&text("03/04/2025")), Some(date(2025, 3, 4)));
    }

    #[test]
    fn test_slash_with_time_suffix() {
        assert_eq!(
            normalize_date(&text("25/12/2025 09:15")),
            Some(date(2025, 12, 25))
        );
    }

    #[test]
    fn test_slash_requires_four_digit_year() {
        assert_eq!(normalize_date(&text("25/12/25")), None);
    }

    #[test]
    fn test_secondary_formats() {
        assert_eq!(normalize_date(&text("2025/11/20")), Some(date(2025, 11, 20)));
        assert_eq!(normalize_date(&text("20-11-2025")), Some(date(2025, 11, 20)));
    }

    #[test]
    fn test_rfc3339_with_offset_reads_the_date_part() {
        assert_eq!(
            normalize_date(&text("2025-11-20T14:30:00+02:00")),
            Some(date(2025, 11, 20))
        );
    }

    #[test]
    fn test_serial_number() {
        // 25569 days past 1899-12-30 is the Unix epoch.
        assert_eq!(normalize_date(&num(25569.0)), Some(date(1970, 1, 1)));
        assert_eq!(normalize_date(&num(45981.0)), Some(date(2025, 11, 20)));
    }

    #[test]
    fn test_serial_fraction_discards_time_of_day() {
        assert_eq!(normalize_date(&num(45981.75)), Some(date(2025, 11, 20)));
    }

    #[test]
    fn test_serial_as_text() {
        assert_eq!(normalize_date(&text("45981")), Some(date(2025, 11, 20)));
    }

    #[test]
    fn test_serial_below_range_rejected() {
        assert_eq!(normalize_date(&num(0.5)), None);
        // Serial 1 lands in 1899, outside the year bounds.
        assert_eq!(normalize_date(&num(1.0)), None);
    }

    #[test]
    fn test_serial_above_range_falls_through() {
        // 100000 is past the serial window and too short for a timestamp.
        assert_eq!(normalize_date(&num(100_000.0)), None);
    }

    #[test]
    fn test_millisecond_timestamp() {
        // 2025-11-20T00:00:00Z in milliseconds.
        assert_eq!(
            normalize_date(&num(1_763_596_800_000.0)),
            Some(date(2025, 11, 20))
        );
    }

    #[test]
    fn test_timestamp_outside_year_bounds_rejected() {
        // Year 2286, past the upper bound.
        assert_eq!(normalize_date(&num(9_999_999_999_999.0)), None);
    }

    #[test]
    fn test_unparseable_inputs_yield_none() {
        assert_eq!(normalize_date(&text("not a date")), None);
        assert_eq!(normalize_date(&text("")), None);
        assert_eq!(normalize_date(&CellValue::Empty), None);
        assert_eq!(normalize_date(&num(f64::NAN)), None);
    }

    #[test]
    fn test_same_date_across_formats() {
        let expected = Some(date(2025, 11, 20));

        assert_eq!(normalize_date(&text("2025-11-20")), expected);
        assert_eq!(normalize_date(&text("20251120")), expected);
        assert_eq!(normalize_date(&text("11/20/2025")), expected);
        assert_eq!(normalize_date(&text("20/11/2025")), expected);
        assert_eq!(normalize_date(&num(45981.0)), expected);
    }

    proptest! {
        /// ISO, compact, and month-first slash renderings of one date all
        /// normalize to that date.
        #[test]
        fn prop_renderings_agree(y in 1900i32..=2100, m in 1u32..=12, d in 1u32..=28) {
            let expected = date(y, m, d);

            let iso = format!("{:04}-{:02}-{:02}", y, m, d);
            prop_assert_eq!(normalize_date(&text(&iso)), Some(expected));

            let compact = format!("{:04}{:02}{:02}", y, m, d);
            prop_assert_eq!(normalize_date(&text(&compact)), Some(expected));

            let slash = format!("{}/{}/{:04}", m, d, y);
            prop_assert_eq!(normalize_date(&text(&slash)), Some(expected));
        }

        /// A date's serial representation normalizes back to the date.
        #[test]
        fn prop_serial_round_trip(y in 1900i32..=2100, m in 1u32..=12, d in 1u32..=28) {
            let expected = date(y, m, d);
            let serial = (expected - serial_epoch()).num_days();
            prop_assume!(serial >= 1 && serial < 100_000);

            prop_assert_eq!(normalize_date(&num(serial as f64)), Some(expected));
        }
    }
}
