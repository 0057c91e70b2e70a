use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{AlmanacError, Result};
use crate::locations;
use crate::types::{AppConfig, Fiqh};

impl Fiqh {
    pub const ALL: [Fiqh; 2] = [Fiqh::Jaferia, Fiqh::Hanafiya];

    pub fn as_str(self) -> &'static str {
        match self {
            Fiqh::Jaferia => "jaferia",
            Fiqh::Hanafiya => "hanafiya",
        }
    }

    /// Calculation method id for the timings API: 0 is Shia Ithna-Ashari
    /// (Leva Institute, Qum), 1 is University of Islamic Sciences, Karachi.
    pub fn method(self) -> u8 {
        match self {
            Fiqh::Jaferia => 0,
            Fiqh::Hanafiya => 1,
        }
    }

    /// Asr juristic school: 0 Shafi (earlier Asr), 1 Hanafi (later Asr).
    pub fn school(self) -> u8 {
        match self {
            Fiqh::Jaferia => 0,
            Fiqh::Hanafiya => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Fiqh::Jaferia => "Fiqh-e-Jaferia",
            Fiqh::Hanafiya => "Fiqh-e-Hanafiya",
        }
    }

    pub fn label_urdu(self) -> &'static str {
        match self {
            Fiqh::Jaferia => "فقہ جعفریہ",
            Fiqh::Hanafiya => "فقہ حنفیہ",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Fiqh::Jaferia => "Shia Ithna Ashari",
            Fiqh::Hanafiya => "Hanafi (Karachi)",
        }
    }
}

impl fmt::Display for Fiqh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fiqh {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self> {
        Fiqh::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AlmanacError::InvalidConfig(format!("unknown fiqh {s:?}")))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            location: locations::default_location(),
            fiqh: Fiqh::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig =
            serde_json::from_str(json).map_err(|e| AlmanacError::InvalidConfig(e.to_string()))?;
        crate::qibla::validate_coordinate(&config.location.coordinate())
            .map_err(|e| AlmanacError::InvalidConfig(e.to_string()))?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Persistence adapter for the user's last location and fiqh choice.
pub trait ConfigStore {
    fn load(&self) -> Result<Option<AppConfig>>;
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// Falls back to [`AppConfig::default`] when nothing is stored or the
/// stored value cannot be read.
pub fn load_or_default<S: ConfigStore + ?Sized>(store: &S) -> AppConfig {
    match store.load() {
        Ok(Some(config)) => config,
        Ok(None) => AppConfig::default(),
        Err(err) => {
            warn!(%err, "stored config unreadable, using defaults");
            AppConfig::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonFileStore {
    fn load(&self) -> Result<Option<AppConfig>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let config = AppConfig::from_json(&json)?;
        debug!(path = %self.path.display(), city = %config.location.city, fiqh = %config.fiqh, "loaded config");
        Ok(Some(config))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, config.to_json()?)?;
        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }
}
