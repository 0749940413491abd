//! Excel 1900-system date serials
//!
//! A serial counts whole days since 1899-12-30, with the time of day as the
//! fractional part. Starting the count on the 30th absorbs Excel's phantom
//! 1900-02-29 for every date from March 1900 on.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// `num_days_from_ce` of 1899-12-30
const EPOCH_DAYS_FROM_CE: i32 = 693_594;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Serial number of a date-time
pub fn to_excel_serial(date: NaiveDateTime) -> f64 {
    let days = date.date().num_days_from_ce() - EPOCH_DAYS_FROM_CE;
    days as f64 + f64::from(date.time().num_seconds_from_midnight()) / SECONDS_PER_DAY
}

/// Date-time of a serial number, rounded to the second
///
/// Returns `None` for negative, non-finite or out-of-range serials.
pub fn from_excel_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 || serial > f64::from(i32::MAX) {
        return None;
    }

    let mut days = serial.trunc() as i32;
    let mut seconds = (serial.fract() * SECONDS_PER_DAY).round() as u32;
    if seconds >= 86_400 {
        days += 1;
        seconds = 0;
    }

    let date = NaiveDate::from_num_days_from_ce_opt(EPOCH_DAYS_FROM_CE.checked_add(days)?)?;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;
    Some(date.and_time(time))
}
