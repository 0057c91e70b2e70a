use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlmanacError>;

#[derive(Debug, Error)]
pub enum AlmanacError {
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid month: {0} (expected 1..=12)")]
    InvalidMonth(u32),

    #[error("year {0} outside the supported calendar range")]
    YearOutOfRange(i64),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid Ramadan day {day} (expected 1..={days})")]
    InvalidRamadanDay { day: u32, days: u32 },

    #[error("invalid time: {0:?}")]
    InvalidTime(String),

    #[error("hijri conversion failed: {0}")]
    HijriConversion(String),

    #[error("malformed data: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
