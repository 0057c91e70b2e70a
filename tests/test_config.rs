use std::str::FromStr;

use wilayat_almanac::config::*;
use wilayat_almanac::locations::*;
use wilayat_almanac::types::{AppConfig, Fiqh, Location};
use wilayat_almanac::{compute_qibla, AlmanacError};

// ── Fiqh ──

#[test]
fn test_fiqh_parameters() {
    assert_eq!((Fiqh::Jaferia.method(), Fiqh::Jaferia.school()), (0, 0));
    assert_eq!((Fiqh::Hanafiya.method(), Fiqh::Hanafiya.school()), (1, 1));
    assert_eq!(Fiqh::Jaferia.label(), "Fiqh-e-Jaferia");
    assert_eq!(Fiqh::Hanafiya.description(), "Hanafi (Karachi)");
    assert_eq!(Fiqh::default(), Fiqh::Jaferia);
}

#[test]
fn test_fiqh_from_str() {
    assert_eq!(Fiqh::from_str("jaferia").unwrap(), Fiqh::Jaferia);
    assert_eq!(Fiqh::from_str(" Hanafiya ").unwrap(), Fiqh::Hanafiya);
    assert_eq!(Fiqh::Hanafiya.to_string(), "hanafiya");
}

#[test]
fn test_unknown_fiqh_is_invalid_config() {
    for raw in ["", "shafi", "0"] {
        assert!(
            matches!(Fiqh::from_str(raw), Err(AlmanacError::InvalidConfig(_))),
            "{:?}",
            raw
        );
    }
}

// ── AppConfig ──

#[test]
fn test_default_config() {
    let c = AppConfig::default();
    assert_eq!(c.location.city, "Rawalpindi");
    assert_eq!(c.location.country, "Pakistan");
    assert_eq!(c.location.latitude, 33.5651);
    assert_eq!(c.location.longitude, 73.0169);
    assert_eq!(c.fiqh, Fiqh::Jaferia);
}

#[test]
fn test_config_json_roundtrip() {
    let c = AppConfig {
        location: find_city("Karbala").unwrap().to_location(),
        fiqh: Fiqh::Hanafiya,
    };
    let json = c.to_json().unwrap();
    assert!(json.contains("\"fiqh\": \"hanafiya\""));
    assert_eq!(AppConfig::from_json(&json).unwrap(), c);
}

#[test]
fn test_config_rejects_unknown_fiqh() {
    let json = r#"{"location":{"city":"X","country":"Y","latitude":1.0,"longitude":2.0},"fiqh":"maliki"}"#;
    assert!(matches!(AppConfig::from_json(json), Err(AlmanacError::InvalidConfig(_))));
}

#[test]
fn test_config_rejects_out_of_range_location() {
    let json = r#"{"location":{"city":"X","country":"Y","latitude":100.0,"longitude":2.0},"fiqh":"jaferia"}"#;
    assert!(matches!(AppConfig::from_json(json), Err(AlmanacError::InvalidConfig(_))));
}

// ── Store ──

#[test]
fn test_file_store_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("config.json"));
    assert!(store.load().unwrap().is_none());
    assert_eq!(load_or_default(&store), AppConfig::default());
}

#[test]
fn test_file_store_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("config.json"));
    let c = AppConfig {
        location: Location {
            city: "Lucknow".into(),
            country: "India".into(),
            latitude: 26.8467,
            longitude: 80.9462,
        },
        fiqh: Fiqh::Jaferia,
    };
    store.save(&c).unwrap();
    assert_eq!(store.load().unwrap(), Some(c.clone()));
    assert_eq!(load_or_default(&store), c);
}

#[test]
fn test_file_store_corrupt_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();
    let store = JsonFileStore::new(&path);
    assert!(store.load().is_err());
    assert_eq!(load_or_default(&store), AppConfig::default());
}

// ── Locations ──

#[test]
fn test_cities_by_country_preserves_order() {
    let groups = cities_by_country();
    let countries: Vec<&str> = groups.iter().map(|(c, _)| *c).collect();
    assert_eq!(countries[0], "Pakistan");
    assert_eq!(countries[1], "Iran");
    assert_eq!(countries.last(), Some(&"Australia"));
    assert_eq!(groups[0].1.len(), 10);
    let total: usize = groups.iter().map(|(_, cities)| cities.len()).sum();
    assert_eq!(total, CITIES.len());
}

#[test]
fn test_find_city() {
    assert_eq!(find_city("najaf").unwrap().country, "Iraq");
    assert!(find_city("Atlantis").is_none());
    assert_eq!(default_location().city, DEFAULT_CITY.city);
}

#[test]
fn test_all_cities_have_a_qibla() {
    for c in CITIES {
        let q = compute_qibla(&c.to_location().coordinate()).unwrap();
        assert_eq!(q.at_kaaba, c.city == "Makkah", "{}", c.city);
    }
}
