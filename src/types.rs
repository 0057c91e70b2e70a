use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The sixteen points of the compass rose, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassPoint {
    pub const ALL: [CompassPoint; 16] = [
        CompassPoint::N,
        CompassPoint::NNE,
        CompassPoint::NE,
        CompassPoint::ENE,
        CompassPoint::E,
        CompassPoint::ESE,
        CompassPoint::SE,
        CompassPoint::SSE,
        CompassPoint::S,
        CompassPoint::SSW,
        CompassPoint::SW,
        CompassPoint::WSW,
        CompassPoint::W,
        CompassPoint::WNW,
        CompassPoint::NW,
        CompassPoint::NNW,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NNE => "NNE",
            CompassPoint::NE => "NE",
            CompassPoint::ENE => "ENE",
            CompassPoint::E => "E",
            CompassPoint::ESE => "ESE",
            CompassPoint::SE => "SE",
            CompassPoint::SSE => "SSE",
            CompassPoint::S => "S",
            CompassPoint::SSW => "SSW",
            CompassPoint::SW => "SW",
            CompassPoint::WSW => "WSW",
            CompassPoint::W => "W",
            CompassPoint::WNW => "WNW",
            CompassPoint::NW => "NW",
            CompassPoint::NNW => "NNW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearingResult {
    pub degrees: f64,
    pub compass: CompassPoint,
    /// Observer stands on the Kaaba; `degrees` is 0 and carries no direction.
    pub at_kaaba: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriDate {
    pub day: u32,
    pub month: u32,
    pub month_name: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub day_number: u32,
    pub is_current_month: bool,
    pub gregorian_date: NaiveDate,
    pub hijri_date: Option<HijriDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Wiladat,
    Shahadat,
    Eid,
}

impl EventType {
    pub fn label(self) -> &'static str {
        match self {
            EventType::Wiladat => "Wiladat",
            EventType::Shahadat => "Shahadat",
            EventType::Eid => "Eid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub gregorian_date: NaiveDate,
    pub event_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name_urdu: Option<String>,
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CalendarEvent {
    pub fn iso_date(&self) -> String {
        self.gregorian_date.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthData {
    pub gregorian_month: u32,
    pub gregorian_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hijri_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hijri_year: Option<i32>,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}

/// School of jurisprudence selecting the prayer-time calculation convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fiqh {
    #[default]
    Jaferia,
    Hanafiya,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub location: Location,
    pub fiqh: Fiqh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTimes {
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
    pub imsak: NaiveTime,
    pub midnight: NaiveTime,
    pub hijri: Option<ApiHijriDate>,
    pub gregorian_readable: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiHijriDate {
    pub day: u32,
    pub month_en: String,
    pub month_ar: String,
    pub year: i32,
    pub designation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
    pub prayer: Prayer,
    pub at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRemaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_seconds: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SehriIftar {
    pub sehri: NaiveTime,
    pub iftar: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RamadanSchedule {
    pub start: NaiveDate,
    pub days: u32,
}

impl Default for RamadanSchedule {
    fn default() -> Self {
        Self {
            // 1 Ramadan 1447
            start: NaiveDate::from_ymd_opt(2026, 2, 19).unwrap_or_default(),
            days: 30,
        }
    }
}
