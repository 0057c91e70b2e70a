use tracing::trace;

use crate::error::{AlmanacError, Result};
use crate::types::{BearingResult, CompassPoint, GeoCoordinate};

pub const KAABA_LATITUDE: f64 = 21.4225;
pub const KAABA_LONGITUDE: f64 = 39.8262;
pub const KAABA: GeoCoordinate = GeoCoordinate::new(KAABA_LATITUDE, KAABA_LONGITUDE);

pub const DEGREES_PER_COMPASS_POINT: f64 = 22.5;

// Observers closer than this (in degrees) are treated as standing on the Kaaba.
const AT_KAABA_EPSILON: f64 = 1e-9;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

pub fn validate_coordinate(coord: &GeoCoordinate) -> Result<()> {
    let GeoCoordinate {
        latitude,
        longitude,
    } = *coord;
    let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
    let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(AlmanacError::InvalidCoordinate {
            latitude,
            longitude,
        })
    }
}

/// No range checks; an observer on the Kaaba gets 0.
pub fn qibla_bearing(observer: &GeoCoordinate) -> f64 {
    let lat1 = deg_to_rad(observer.latitude);
    let lat2 = deg_to_rad(KAABA_LATITUDE);
    let d_lon = deg_to_rad(KAABA_LONGITUDE - observer.longitude);

    let y = d_lon.sin();
    let x = lat1.cos() * lat2.tan() - lat1.sin() * d_lon.cos();

    normalize_angle(rad_to_deg(y.atan2(x)))
}

pub fn compass_point(degrees: f64) -> CompassPoint {
    let index = (degrees / DEGREES_PER_COMPASS_POINT).round() as i64;
    CompassPoint::ALL[index.rem_euclid(16) as usize]
}

pub fn is_at_kaaba(observer: &GeoCoordinate) -> bool {
    (observer.latitude - KAABA_LATITUDE).abs() < AT_KAABA_EPSILON
        && (observer.longitude - KAABA_LONGITUDE).abs() < AT_KAABA_EPSILON
}

/// An observer at the Kaaba gets 0 / `N` with `at_kaaba` set.
pub fn compute_qibla(observer: &GeoCoordinate) -> Result<BearingResult> {
    validate_coordinate(observer)?;

    let at_kaaba = is_at_kaaba(observer);
    let degrees = if at_kaaba { 0.0 } else { qibla_bearing(observer) };
    let compass = compass_point(degrees);

    trace!(
        latitude = observer.latitude,
        longitude = observer.longitude,
        degrees,
        compass = compass.label(),
        at_kaaba,
        "computed qibla bearing"
    );

    Ok(BearingResult {
        degrees,
        compass,
        at_kaaba,
    })
}

// alpha grows counter-clockwise
pub fn device_heading(alpha: f64) -> f64 {
    normalize_angle(360.0 - alpha)
}

pub fn relative_bearing(qibla_degrees: f64, heading: f64) -> f64 {
    normalize_angle(qibla_degrees - heading + 360.0)
}
