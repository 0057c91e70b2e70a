use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::{AlmanacError, Result};
use crate::types::{
    ApiHijriDate, Fiqh, Location, NextPrayer, Prayer, PrayerTimes, TimeRemaining,
};

pub const TIMINGS_ENDPOINT: &str = "https://api.aladhan.com/v1/timings";

impl Prayer {
    pub const DAILY: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

#[derive(Deserialize)]
struct ApiResponse {
    data: ApiData,
}

#[derive(Deserialize)]
struct ApiData {
    timings: ApiTimings,
    date: ApiDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiTimings {
    fajr: String,
    sunrise: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
    imsak: String,
    midnight: String,
}

#[derive(Deserialize)]
struct ApiDate {
    #[serde(default)]
    readable: Option<String>,
    #[serde(default)]
    hijri: Option<ApiHijri>,
}

#[derive(Deserialize)]
struct ApiHijri {
    day: String,
    month: ApiHijriMonth,
    year: String,
    designation: ApiDesignation,
}

#[derive(Deserialize)]
struct ApiHijriMonth {
    en: String,
    #[serde(default)]
    ar: String,
}

#[derive(Deserialize)]
struct ApiDesignation {
    abbreviated: String,
}

/// Parses an `HH:MM` timing, ignoring a trailing zone such as `"05:12 (PKT)"`.
pub fn parse_timing(raw: &str) -> Result<NaiveTime> {
    let hhmm = raw.split_whitespace().next().unwrap_or_default();
    NaiveTime::parse_from_str(hhmm, "%H:%M").map_err(|_| AlmanacError::InvalidTime(raw.to_string()))
}

impl ApiHijri {
    fn into_date(self) -> Result<ApiHijriDate> {
        let bad = |what: &str, v: &str| {
            AlmanacError::Dataset(<serde_json::Error as serde::de::Error>::custom(format!(
                "hijri {what} {v:?} is not a number"
            )))
        };
        Ok(ApiHijriDate {
            day: self.day.parse().map_err(|_| bad("day", &self.day))?,
            year: self.year.parse().map_err(|_| bad("year", &self.year))?,
            month_en: self.month.en,
            month_ar: self.month.ar,
            designation: self.designation.abbreviated,
        })
    }
}

impl PrayerTimes {
    pub fn from_api_response(json: &str) -> Result<Self> {
        let response: ApiResponse = serde_json::from_str(json)?;
        let t = response.data.timings;
        let times = PrayerTimes {
            fajr: parse_timing(&t.fajr)?,
            sunrise: parse_timing(&t.sunrise)?,
            dhuhr: parse_timing(&t.dhuhr)?,
            asr: parse_timing(&t.asr)?,
            maghrib: parse_timing(&t.maghrib)?,
            isha: parse_timing(&t.isha)?,
            imsak: parse_timing(&t.imsak)?,
            midnight: parse_timing(&t.midnight)?,
            hijri: response.data.date.hijri.map(ApiHijri::into_date).transpose()?,
            gregorian_readable: response.data.date.readable,
        };
        debug!(
            fajr = %times.fajr,
            dhuhr = %times.dhuhr,
            asr = %times.asr,
            maghrib = %times.maghrib,
            isha = %times.isha,
            "parsed prayer times"
        );
        Ok(times)
    }

    pub fn time_of(&self, prayer: Prayer) -> NaiveTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    pub fn sehri(&self) -> NaiveTime {
        self.imsak
    }

    pub fn iftar(&self) -> NaiveTime {
        self.maghrib
    }
}

pub fn timings_url(date: NaiveDate, location: &Location, fiqh: Fiqh) -> String {
    format!(
        "{TIMINGS_ENDPOINT}/{}-{}-{}?latitude={}&longitude={}&method={}&school={}",
        date.day(),
        date.month(),
        date.year(),
        location.latitude,
        location.longitude,
        fiqh.method(),
        fiqh.school(),
    )
}

/// First daily prayer strictly after `now`, assuming `times` are for
/// `now`'s date. After Isha this is the next day's Fajr at today's time.
pub fn next_prayer(times: &PrayerTimes, now: NaiveDateTime) -> NextPrayer {
    let today = now.date();
    let next = Prayer::DAILY
        .into_iter()
        .map(|p| NextPrayer {
            prayer: p,
            at: today.and_time(times.time_of(p)),
        })
        .find(|n| n.at > now)
        .unwrap_or_else(|| {
            let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
            NextPrayer {
                prayer: Prayer::Fajr,
                at: tomorrow.and_time(times.fajr),
            }
        });
    trace!(%now, prayer = next.prayer.name(), at = %next.at, "next prayer");
    next
}

pub fn time_remaining(target: NaiveDateTime, now: NaiveDateTime) -> Option<TimeRemaining> {
    let total_seconds = (target - now).num_seconds();
    if total_seconds <= 0 {
        return None;
    }
    Some(TimeRemaining {
        hours: total_seconds / 3600,
        minutes: (total_seconds % 3600) / 60,
        seconds: total_seconds % 60,
        total_seconds,
    })
}

pub fn format_time_12h(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        time.minute(),
        if pm { "PM" } else { "AM" }
    )
}
