use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, trace};

use crate::error::{AlmanacError, Result};
use crate::hijri::HijriConverter;
use crate::types::CalendarCell;

pub const GRID_CELLS: usize = 42;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get((month as usize).checked_sub(1)?).copied()
}

fn first_of_month(month: u32, year: i32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(AlmanacError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(AlmanacError::YearOutOfRange(year.into()))
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(AlmanacError::InvalidMonth(month)),
    }
}

pub fn navigate_month(month: u32, year: i32, delta: i32) -> Result<(u32, i32)> {
    if !(1..=12).contains(&month) {
        return Err(AlmanacError::InvalidMonth(month));
    }
    let index = year as i64 * 12 + (month as i64 - 1) + delta as i64;
    let new_year = index.div_euclid(12);
    let new_year = i32::try_from(new_year).map_err(|_| AlmanacError::YearOutOfRange(new_year))?;
    Ok((index.rem_euclid(12) as u32 + 1, new_year))
}

/// Gregorian month view padded with the tail of the previous month and the
/// head of the next to exactly [`GRID_CELLS`] contiguous days.
///
/// Years chrono cannot represent, or whose padding days spill past its
/// range, fail with [`AlmanacError::YearOutOfRange`].
pub fn build_month_grid(month: u32, year: i32) -> Result<Vec<CalendarCell>> {
    let first = first_of_month(month, year)?;
    let lead = first.weekday().num_days_from_sunday() as u64;
    let start = first
        .checked_sub_days(Days::new(lead))
        .ok_or(AlmanacError::YearOutOfRange(year.into()))?;

    let cells: Vec<CalendarCell> = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| CalendarCell {
            day_number: date.day(),
            is_current_month: date.month() == month && date.year() == year,
            gregorian_date: date,
            hijri_date: None,
        })
        .collect();

    if cells.len() != GRID_CELLS {
        return Err(AlmanacError::YearOutOfRange(year.into()));
    }

    trace!(month, year, leading_days = lead, "built month grid");
    Ok(cells)
}

/// A failed conversion leaves that cell Gregorian-only.
pub fn build_month_grid_with_hijri<C: HijriConverter + ?Sized>(
    month: u32,
    year: i32,
    converter: &C,
) -> Result<Vec<CalendarCell>> {
    let mut cells = build_month_grid(month, year)?;
    for cell in cells.iter_mut().filter(|c| c.is_current_month) {
        match converter.to_hijri(cell.gregorian_date) {
            Ok(hijri) => cell.hijri_date = Some(hijri),
            Err(err) => debug!(date = %cell.gregorian_date, %err, "hijri date unavailable"),
        }
    }
    Ok(cells)
}

/// e.g. `"Sha'ban 1447 AH"`, taken from the 15th.
pub fn hijri_month_label<C: HijriConverter + ?Sized>(
    month: u32,
    year: i32,
    converter: &C,
) -> Option<String> {
    let mid = NaiveDate::from_ymd_opt(year, month, 15)?;
    match converter.to_hijri(mid) {
        Ok(h) => Some(format!("{} {} AH", h.month_name, h.year)),
        Err(err) => {
            debug!(month, year, %err, "no hijri month label");
            None
        }
    }
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_rolls_year() {
        assert_eq!(navigate_month(12, 2026, 1).unwrap(), (1, 2027));
        assert_eq!(navigate_month(1, 2026, -1).unwrap(), (12, 2025));
        assert_eq!(navigate_month(6, 2026, -18).unwrap(), (12, 2024));
        assert_eq!(navigate_month(6, 2026, 0).unwrap(), (6, 2026));
        assert!(navigate_month(13, 2026, 1).is_err());
        assert!(matches!(
            navigate_month(12, i32::MAX, 1),
            Err(AlmanacError::YearOutOfRange(y)) if y == i32::MAX as i64 + 1
        ));
        assert!(matches!(
            navigate_month(1, i32::MIN, -1),
            Err(AlmanacError::YearOutOfRange(_))
        ));
        assert_eq!(navigate_month(11, i32::MAX, 1).unwrap(), (12, i32::MAX));
    }

    #[test]
    fn iso_date_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
        assert_eq!(iso_date(d), "2026-02-09");
    }
}
