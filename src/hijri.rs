use chrono::{Datelike, NaiveDate};
use hijri_date::HijriDate as UmmAlQuraDate;

use crate::error::{AlmanacError, Result};
use crate::types::HijriDate;

pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

// Julian day number of 1 Muharram 1 AH (civil reckoning, 16 July 622 Julian).
const ISLAMIC_EPOCH_JDN: i64 = 1_948_440;
// Julian day number of 0001-01-01 (proleptic Gregorian) minus one.
const CE_JDN_OFFSET: i64 = 1_721_425;

pub fn hijri_month_name(month: u32) -> Option<&'static str> {
    HIJRI_MONTH_NAMES.get((month as usize).checked_sub(1)?).copied()
}

fn hijri_date(day: u32, month: u32, year: i32) -> Result<HijriDate> {
    let month_name = hijri_month_name(month)
        .ok_or_else(|| AlmanacError::HijriConversion(format!("month {month} out of range")))?;
    Ok(HijriDate {
        day,
        month,
        month_name: month_name.to_string(),
        year,
    })
}

pub trait HijriConverter {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate>;
}

/// Arithmetic Islamic calendar (the "Kuwaiti algorithm"): 30-year cycle
/// with leap years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabularHijri;

impl TabularHijri {
    fn jdn_from_hijri(year: i64, month: i64, day: i64) -> i64 {
        day + (59 * (month - 1) + 1) / 2
            + (year - 1) * 354
            + (3 + 11 * year).div_euclid(30)
            + ISLAMIC_EPOCH_JDN
            - 1
    }

    pub fn leap_year(year: i32) -> bool {
        (14 + 11 * year as i64).rem_euclid(30) < 11
    }

    pub fn to_gregorian(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate> {
        let month_len = if month % 2 == 1 || (month == 12 && Self::leap_year(year)) {
            30
        } else {
            29
        };
        if year < 1 || !(1..=12).contains(&month) || day < 1 || day > month_len {
            return Err(AlmanacError::HijriConversion(format!(
                "no such hijri date {year}-{month}-{day}"
            )));
        }
        let jdn = Self::jdn_from_hijri(year as i64, month as i64, day as i64);
        i32::try_from(jdn - CE_JDN_OFFSET)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| AlmanacError::HijriConversion(format!("jdn {jdn} out of range")))
    }
}

impl HijriConverter for TabularHijri {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate> {
        let jdn = date.num_days_from_ce() as i64 + CE_JDN_OFFSET;
        if jdn < ISLAMIC_EPOCH_JDN {
            return Err(AlmanacError::HijriConversion(format!(
                "{date} precedes the hijri epoch"
            )));
        }

        let year = (30 * (jdn - ISLAMIC_EPOCH_JDN) + 10646).div_euclid(10631);
        let since_new_year = jdn - (29 + Self::jdn_from_hijri(year, 1, 1));
        // ceil(since_new_year / 29.5)
        let elapsed_months = -((-2 * since_new_year).div_euclid(59));
        let month = (elapsed_months + 1).clamp(1, 12);
        let day = jdn - Self::jdn_from_hijri(year, month, 1) + 1;

        hijri_date(day as u32, month as u32, year as i32)
    }
}

/// Only covers the years the `hijri_date` tables span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UmmAlQura;

impl HijriConverter for UmmAlQura {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate> {
        if date.year() < 1 {
            return Err(AlmanacError::HijriConversion(format!(
                "{date} outside the Umm al-Qura tables"
            )));
        }
        let hd = UmmAlQuraDate::from_gr(
            date.year() as usize,
            date.month() as usize,
            date.day() as usize,
        )
        .map_err(|e| AlmanacError::HijriConversion(e.to_string()))?;

        hijri_date(hd.day() as u32, hd.month() as u32, hd.year() as i32)
    }
}
