use crate::types::Location;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub city: &'static str,
    pub country: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn to_location(&self) -> Location {
        Location {
            city: self.city.to_string(),
            country: self.country.to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

const fn city(city: &'static str, country: &'static str, latitude: f64, longitude: f64) -> City {
    City {
        city,
        country,
        latitude,
        longitude,
    }
}

pub const DEFAULT_CITY: City = city("Rawalpindi", "Pakistan", 33.5651, 73.0169);

pub const CITIES: &[City] = &[
    DEFAULT_CITY,
    city("Islamabad", "Pakistan", 33.6844, 73.0479),
    city("Karachi", "Pakistan", 24.8607, 67.0011),
    city("Lahore", "Pakistan", 31.5204, 74.3587),
    city("Peshawar", "Pakistan", 34.0151, 71.5249),
    city("Quetta", "Pakistan", 30.1798, 66.975),
    city("Multan", "Pakistan", 30.1575, 71.5249),
    city("Faisalabad", "Pakistan", 31.4504, 73.135),
    city("Gilgit", "Pakistan", 35.9208, 74.3144),
    city("Skardu", "Pakistan", 35.2971, 75.6334),
    city("Tehran", "Iran", 35.6892, 51.389),
    city("Qom", "Iran", 34.6416, 50.8746),
    city("Mashhad", "Iran", 36.2605, 59.6168),
    city("Isfahan", "Iran", 32.6546, 51.668),
    city("Karbala", "Iraq", 32.6162, 44.0243),
    city("Najaf", "Iraq", 32.0003, 44.3362),
    city("Baghdad", "Iraq", 33.3128, 44.3615),
    city("Makkah", "Saudi Arabia", 21.4225, 39.8262),
    city("Madinah", "Saudi Arabia", 24.4539, 39.6142),
    city("Jeddah", "Saudi Arabia", 21.5433, 39.1728),
    city("Dubai", "UAE", 25.2048, 55.2708),
    city("Abu Dhabi", "UAE", 24.4539, 54.3773),
    city("Lucknow", "India", 26.8467, 80.9462),
    city("Mumbai", "India", 19.076, 72.8777),
    city("Hyderabad", "India", 17.385, 78.4867),
    city("Delhi", "India", 28.6139, 77.209),
    city("London", "UK", 51.5074, -0.1278),
    city("Birmingham", "UK", 52.4862, -1.8904),
    city("New York", "USA", 40.7128, -74.006),
    city("Houston", "USA", 29.7604, -95.3698),
    city("Los Angeles", "USA", 34.0522, -118.2437),
    city("Chicago", "USA", 41.8781, -87.6298),
    city("Toronto", "Canada", 43.6532, -79.3832),
    city("Beirut", "Lebanon", 33.8938, 35.5018),
    city("Manama", "Bahrain", 26.2285, 50.586),
    city("Kuwait City", "Kuwait", 29.3759, 47.9774),
    city("Sydney", "Australia", -33.8688, 151.2093),
    city("Melbourne", "Australia", -37.8136, 144.9631),
];

pub fn default_location() -> Location {
    DEFAULT_CITY.to_location()
}

/// Cities grouped by country, countries in order of first appearance.
pub fn cities_by_country() -> Vec<(&'static str, Vec<&'static City>)> {
    let mut groups: Vec<(&'static str, Vec<&'static City>)> = Vec::new();
    for c in CITIES {
        match groups.iter_mut().find(|(country, _)| *country == c.country) {
            Some((_, cities)) => cities.push(c),
            None => groups.push((c.country, vec![c])),
        }
    }
    groups
}

pub fn find_city(name: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.city.eq_ignore_ascii_case(name))
}
