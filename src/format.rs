//! Display Formatting
//!
//! Currency, number and date formatting used across the boards, the
//! product catalog and the class schedule.
//!
//! All prices are whole won. Dates arrive from the backend as RFC 3339
//! strings with a `+09:00` offset and are rendered in that offset.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};

/// Myriad units for Korean number words, least significant first
const KOREAN_UNITS: [&str; 5] = ["", "만", "억", "조", "경"];

// ============================================
// Currency and numbers
// ============================================

/// Convert an amount of won to grouped Korean number words
///
/// Digits are grouped by 10,000 and each non-zero group gets its unit
/// (만, 억, 조). Zero groups are omitted entirely.
///
/// `31_000_000` becomes `"3100만원"`, `123_456_789` becomes `"1억2345만6789원"`.
pub fn convert_to_korean_currency(amount: u64) -> String {
    if amount == 0 {
        return "0원".to_string();
    }

    let mut groups = Vec::new();
    let mut rest = amount;
    let mut unit = 0;

    while rest > 0 {
        let group = rest % 10_000;
        if group > 0 {
            groups.push(format!("{}{}", group, KOREAN_UNITS[unit]));
        }
        rest /= 10_000;
        unit += 1;
    }

    groups.reverse();
    format!("{}원", groups.concat())
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Add thousands separators: `1234567` -> `"1,234,567"`
pub fn format_number(value: i64) -> String {
    let grouped = group_digits(value.unsigned_abs());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Won with currency symbol: `1000` -> `"₩1,000"`
pub fn format_krw(amount: i64) -> String {
    let grouped = group_digits(amount.unsigned_abs());
    if amount < 0 {
        format!("-₩{}", grouped)
    } else {
        format!("₩{}", grouped)
    }
}

/// Won with suffix, as shown on cards: `1000` -> `"1,000원"`
pub fn format_won(amount: i64) -> String {
    format!("{}원", format_number(amount))
}

/// Discount percentage between an original and a sale price
///
/// Returns 0 when the original price is not positive or the sale price
/// is not lower.
pub fn calculate_discount_rate(original_price: i64, sale_price: i64) -> u32 {
    if original_price <= 0 || sale_price >= original_price {
        return 0;
    }

    let rate = (original_price - sale_price) as f64 / original_price as f64 * 100.0;
    rate.round() as u32
}

/// `10` -> `"10%"`
pub fn format_discount_rate(rate: u32) -> String {
    format!("{}%", rate)
}

// ============================================
// Dates
// ============================================

/// Parse a backend timestamp (RFC 3339)
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

/// `YYYY.MM.DD`
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y.%m.%d").to_string()
}

/// `YYYY년 M월 D일`
pub fn format_date_korean<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}

/// Relative time in Korean (`방금 전`, `3분 전`, `2일 전`, ...)
///
/// Months are counted as 30 days and years as 12 months.
pub fn format_relative_time<Tz: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Utc>) -> String {
    let seconds = (*now - then.with_timezone(&Utc)).num_seconds();

    if seconds < 60 {
        return "방금 전".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}분 전", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}시간 전", hours);
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{}일 전", days);
    }

    let months = days / 30;
    if months < 12 {
        return format!("{}개월 전", months);
    }

    format!("{}년 전", months / 12)
}

/// Short date for board rows
///
/// Less than a day old shows the time (`HH:MM`), less than a week shows
/// `N일 전`, anything older shows `M월 D일`.
pub fn format_board_date<Tz: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Utc>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let days = (*now - then.with_timezone(&Utc)).num_days();

    if days <= 0 {
        then.format("%H:%M").to_string()
    } else if days < 7 {
        format!("{}일 전", days)
    } else {
        format!("{}월 {}일", then.month(), then.day())
    }
}

/// Board date from a raw backend timestamp, falling back to the raw text
pub fn format_board_timestamp(raw: &str, now: &DateTime<Utc>) -> String {
    match parse_timestamp(raw) {
        Some(then) => format_board_date(&then, now),
        None => raw.to_string(),
    }
}
