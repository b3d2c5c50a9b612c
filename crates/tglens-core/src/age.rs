//! Account-creation-date estimation from numeric ids.
//!
//! Telegram assigns user ids roughly monotonically, so a handful of known
//! (id, date) anchors plus a linear ids-per-day ratio gives a usable estimate.
//! The result is an approximation, not ground truth.

use chrono::{Datelike, Duration, NaiveDate, Utc};

/// Linear interpolation ratio between calibration anchors. A replaceable
/// heuristic constant, not a derived value.
const IDS_PER_DAY: i64 = 20_000_000;

fn calibration_points() -> [(i64, NaiveDate); 4] {
    [
        (100_000_000, ymd(2013, 8, 1)), // Telegram's launch window
        (1_273_841_502, ymd(2020, 8, 13)),
        (1_500_000_000, ymd(2021, 5, 1)),
        (2_000_000_000, ymd(2022, 12, 1)),
    ]
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calibration date")
}

/// Estimate the creation date of an account id.
///
/// Picks the calibration anchor closest to `id` (first wins on ties) and
/// offsets its date by `(id - anchor_id) / IDS_PER_DAY` whole days. Exact at
/// the anchors themselves; monotonic in `id`.
pub fn estimate_creation_date(id: i64) -> NaiveDate {
    let (anchor_id, anchor_date) = calibration_points()
        .into_iter()
        .min_by_key(|(anchor_id, _)| (id - anchor_id).abs())
        .expect("non-empty calibration table");

    anchor_date + Duration::days((id - anchor_id) / IDS_PER_DAY)
}

/// Render a date as e.g. `August 01, 2013`.
pub fn format_creation_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Elapsed time from the estimated creation date until now.
pub fn account_age(creation: NaiveDate) -> String {
    format_elapsed(creation, Utc::now().date_naive())
}

/// Calendar-aware elapsed time as `"Y years, M months, D days"`.
///
/// Counts whole calendar months (clamping to real month lengths) and leaves
/// the remainder in days. Clamps to zero when `from` is after `to`.
pub fn format_elapsed(from: NaiveDate, to: NaiveDate) -> String {
    if from > to {
        return "0 years, 0 months, 0 days".to_string();
    }

    let mut anchor = from;
    let mut months_total: i64 = 0;
    loop {
        let next = add_one_month(anchor);
        if next > to {
            break;
        }
        anchor = next;
        months_total += 1;
    }

    let days = (to - anchor).num_days();
    let years = months_total / 12;
    let months = months_total % 12;

    format!("{years} years, {months} months, {days} days")
}

fn add_one_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).expect("clamped day is valid")
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}
