use chrono::{DateTime, Days, NaiveDate, TimeZone};

use crate::error::{AlmanacError, Result};
use crate::types::{PrayerTimes, RamadanSchedule, SehriIftar};

impl RamadanSchedule {
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    /// Gregorian date of Ramadan day `day` (1-based).
    pub fn date_for_day(&self, day: u32) -> Result<NaiveDate> {
        let invalid = AlmanacError::InvalidRamadanDay {
            day,
            days: self.days,
        };
        if !(1..=self.days).contains(&day) {
            return Err(invalid);
        }
        self.start
            .checked_add_days(Days::new(u64::from(day - 1)))
            .ok_or(invalid)
    }

    /// Which day of Ramadan `today` is, if it falls inside the month.
    pub fn current_day(&self, today: NaiveDate) -> Option<u32> {
        let day = (today - self.start).num_days() + 1;
        u32::try_from(day).ok().filter(|d| (1..=self.days).contains(d))
    }

    pub fn current_day_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<u32> {
        self.current_day(now.date_naive())
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take(self.days as usize)
    }
}

pub fn sehri_iftar(times: &PrayerTimes) -> SehriIftar {
    SehriIftar {
        sehri: times.sehri(),
        iftar: times.iftar(),
    }
}
