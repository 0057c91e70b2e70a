pub mod calendar;
pub mod config;
pub mod error;
pub mod events;
pub mod hijri;
pub mod locations;
pub mod prayer;
pub mod qibla;
pub mod ramadan;
pub mod types;

pub use calendar::{
    build_month_grid, build_month_grid_with_hijri, days_in_month, hijri_month_label, iso_date,
    leap_year, month_name, navigate_month, GRID_CELLS, MONTH_NAMES, WEEKDAYS,
};

pub use config::{load_or_default, ConfigStore, JsonFileStore};

pub use error::{AlmanacError, Result};

pub use events::{days_until, CalendarDataset, EventCatalog};

pub use hijri::{hijri_month_name, HijriConverter, TabularHijri, UmmAlQura, HIJRI_MONTH_NAMES};

pub use locations::{cities_by_country, default_location, find_city, City, CITIES, DEFAULT_CITY};

pub use prayer::{format_time_12h, next_prayer, parse_timing, time_remaining, timings_url};

pub use qibla::{
    compass_point, compute_qibla, deg_to_rad, device_heading, normalize_angle, qibla_bearing,
    rad_to_deg, relative_bearing, validate_coordinate, KAABA, KAABA_LATITUDE, KAABA_LONGITUDE,
};

pub use ramadan::sehri_iftar;

pub use types::{
    ApiHijriDate, AppConfig, BearingResult, CalendarCell, CalendarEvent, CompassPoint, EventType,
    Fiqh, GeoCoordinate, HijriDate, Location, MonthData, NextPrayer, Prayer, PrayerTimes,
    RamadanSchedule, SehriIftar, TimeRemaining,
};
