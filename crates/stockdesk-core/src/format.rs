//! # Formatting Module
//!
//! Display-side formatting for prices and timestamps.
//!
//! ## Locale
//! The product catalog is priced in whole rupiah and rendered the id-ID way:
//! `Rp` prefix, dot as the thousands separator, no fraction digits, and
//! day-month-year dates with Indonesian short month names.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  15000000   ──► format_currency        ──► "Rp 15.000.000"          │
//! │  15000000   ──► format_compact_number  ──► "15M" (full preserved)   │
//! │  2024-01-15 ──► format_date            ──► "15 Jan 2024"            │
//! │  2024-01-15 ──► format_date_time       ──► "15 Jan 2024, 10.00"     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All amounts stay integers end to end; floats appear only at the very
//! last step of compact display rounding.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Indonesian short month names, indexed by `month0`.
const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

// =============================================================================
// Currency
// =============================================================================

/// Formats a whole-rupiah amount as `Rp 15.000.000`.
///
/// ## Example
/// ```rust
/// use stockdesk_core::format::format_currency;
///
/// assert_eq!(format_currency(15_000_000), "Rp 15.000.000");
/// assert_eq!(format_currency(0), "Rp 0");
/// ```
pub fn format_currency(amount: i64) -> String {
    format!("Rp {}", group_thousands(amount))
}

/// Like [`format_currency`], treating a missing amount as zero.
/// Mirrors the form views, which render `Rp 0` for an untouched price field.
pub fn format_currency_opt(amount: Option<i64>) -> String {
    format_currency(amount.unwrap_or(0))
}

/// Dot-grouped digit string: `1234567` → `1.234.567`.
fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        grouped.push('-');
    }
    let first_group = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    grouped.push_str(&digits[..first_group]);
    for chunk in digits[first_group..].as_bytes().chunks(3) {
        grouped.push('.');
        // chunks of an ASCII digit string are valid UTF-8
        grouped.push_str(std::str::from_utf8(chunk).expect("ascii digits"));
    }
    grouped
}

// =============================================================================
// Compact Numbers
// =============================================================================

/// A large number in both compact and full form.
///
/// List cells show `display`; the tooltip shows `full` so no precision is
/// lost to the abbreviation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactNumber {
    pub display: String,
    pub full: String,
}

/// Formats a large amount with K/M/B abbreviation while preserving the
/// fully grouped form.
///
/// ## Rules
/// - `>= 1_000_000_000`: two decimals + `B`, an exact `.00` dropped
/// - `>= 1_000_000`:     two decimals + `M`, an exact `.00` dropped
/// - `>= 1_000`:         one decimal  + `K`, an exact `.0` dropped
/// - `show_full` skips abbreviation entirely
///
/// ## Example
/// ```rust
/// use stockdesk_core::format::format_compact_number;
///
/// let n = format_compact_number(12_000_000, false);
/// assert_eq!(n.display, "12M");
/// assert_eq!(n.full, "12.000.000");
///
/// let n = format_compact_number(1_500_000, false);
/// assert_eq!(n.display, "1.50M");
/// ```
pub fn format_compact_number(amount: i64, show_full: bool) -> CompactNumber {
    let full = group_thousands(amount);

    let display = if !show_full && amount >= 1_000_000_000 {
        strip_suffix_once(format!("{:.2}", amount as f64 / 1e9), ".00") + "B"
    } else if !show_full && amount >= 1_000_000 {
        strip_suffix_once(format!("{:.2}", amount as f64 / 1e6), ".00") + "M"
    } else if !show_full && amount >= 1_000 {
        strip_suffix_once(format!("{:.1}", amount as f64 / 1e3), ".0") + "K"
    } else {
        full.clone()
    };

    CompactNumber { display, full }
}

fn strip_suffix_once(value: String, suffix: &str) -> String {
    match value.strip_suffix(suffix) {
        Some(stripped) => stripped.to_string(),
        None => value,
    }
}

// =============================================================================
// Dates
// =============================================================================

/// Formats a timestamp as `15 Jan 2024`.
pub fn format_date(date: DateTime<Utc>) -> String {
    format!(
        "{} {} {}",
        date.day(),
        SHORT_MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Like [`format_date`], rendering a missing timestamp as the empty string.
pub fn format_date_opt(date: Option<DateTime<Utc>>) -> String {
    date.map(format_date).unwrap_or_default()
}

/// Formats a timestamp as `15 Jan 2024, 10.00` (id-ID uses a dot between
/// hours and minutes).
pub fn format_date_time(date: DateTime<Utc>) -> String {
    format!(
        "{}, {:02}.{:02}",
        format_date(date),
        date.hour(),
        date.minute()
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_currency_groups_with_dots() {
        assert_eq!(format_currency(0), "Rp 0");
        assert_eq!(format_currency(999), "Rp 999");
        assert_eq!(format_currency(1_000), "Rp 1.000");
        assert_eq!(format_currency(250_000), "Rp 250.000");
        assert_eq!(format_currency(15_000_000), "Rp 15.000.000");
    }

    #[test]
    fn test_format_currency_opt_defaults_to_zero() {
        assert_eq!(format_currency_opt(None), "Rp 0");
        assert_eq!(format_currency_opt(Some(450_000)), "Rp 450.000");
    }

    #[test]
    fn test_compact_thousands() {
        assert_eq!(format_compact_number(1_000, false).display, "1K");
        assert_eq!(format_compact_number(1_500, false).display, "1.5K");
        assert_eq!(format_compact_number(999, false).display, "999");
    }

    #[test]
    fn test_compact_millions_and_billions() {
        assert_eq!(format_compact_number(2_000_000, false).display, "2M");
        assert_eq!(format_compact_number(1_500_000, false).display, "1.50M");
        assert_eq!(format_compact_number(12_000_000, false).display, "12M");
        assert_eq!(format_compact_number(1_500_000_000, false).display, "1.50B");
        assert_eq!(format_compact_number(3_000_000_000, false).display, "3B");
    }

    #[test]
    fn test_compact_show_full_keeps_grouped_form() {
        let n = format_compact_number(15_000_000, true);
        assert_eq!(n.display, "15.000.000");
        assert_eq!(n.full, "15.000.000");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        assert_eq!(format_date(date), "15 Jan 2024");

        let date = Utc.with_ymd_and_hms(2024, 5, 3, 0, 0, 0).unwrap();
        assert_eq!(format_date(date), "3 Mei 2024");
    }

    #[test]
    fn test_format_date_time_uses_dot_separator() {
        let date = Utc.with_ymd_and_hms(2024, 2, 4, 9, 5, 0).unwrap();
        assert_eq!(format_date_time(date), "4 Feb 2024, 09.05");
    }

    #[test]
    fn test_format_date_opt() {
        assert_eq!(format_date_opt(None), "");
    }
}
