use wilayat_almanac::qibla::*;
use wilayat_almanac::types::{CompassPoint, GeoCoordinate};
use wilayat_almanac::AlmanacError;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Angle helpers ──

#[test]
fn test_normalize_wraps_western_atan2_output() {
    // atan2 yields (-180, 180]; western bearings arrive negative
    let cases: &[(f64, f64)] = &[
        (-103.9277, 256.0723),
        (-82.5004, 277.4996),
        (-141.5990, 218.4010),
        (-180.0, 180.0),
        (-22.5, 337.5),
        (-11.25, 348.75),
        (176.2732, 176.2732),
    ];
    for &(raw, expected) in cases {
        assert_approx!(normalize_angle(raw), expected, 1e-9);
    }
}

#[test]
fn test_normalize_after_relative_offset() {
    // qibla - heading + 360 can exceed a full turn
    assert_approx!(normalize_angle(256.0723 - 10.0 + 360.0), 246.0723, 1e-9);
    assert_approx!(normalize_angle(10.0 - 350.0 + 360.0), 20.0, 1e-9);
    assert_approx!(normalize_angle(0.0 - 0.0 + 360.0), 0.0, 1e-9);
}

#[test]
fn test_normalize_angle_never_reaches_360() {
    for input in [-1e-15, -1e-300, 360.0, 720.0, -360.0] {
        let a = normalize_angle(input);
        assert!((0.0..360.0).contains(&a), "input={} -> {}", input, a);
    }
}

#[test]
fn test_deg_rad_roundtrip() {
    for deg in [0.0, 21.4225, 90.0, 180.0, 270.0, -45.0] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-9);
    }
}

// ── Compass points ──

#[test]
fn test_compass_boundaries() {
    assert_eq!(compass_point(0.0), CompassPoint::N);
    assert_eq!(compass_point(348.75), CompassPoint::N);
    assert_eq!(compass_point(359.99), CompassPoint::N);
    assert_eq!(compass_point(360.0), CompassPoint::N);
    assert_eq!(compass_point(22.5), CompassPoint::NNE);
    assert_eq!(compass_point(11.24), CompassPoint::N);
    assert_eq!(compass_point(11.25), CompassPoint::NNE);
    assert_eq!(compass_point(90.0), CompassPoint::E);
    assert_eq!(compass_point(180.0), CompassPoint::S);
    assert_eq!(compass_point(270.0), CompassPoint::W);
    assert_eq!(compass_point(348.74), CompassPoint::NNW);
}

#[test]
fn test_compass_every_point_center() {
    for (i, point) in CompassPoint::ALL.iter().enumerate() {
        assert_eq!(compass_point(i as f64 * 22.5), *point, "index {}", i);
    }
}

#[test]
fn test_compass_labels() {
    let labels: Vec<&str> = CompassPoint::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(
        labels,
        vec![
            "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W",
            "WNW", "NW", "NNW"
        ]
    );
}

// ── Qibla bearing ──

#[test]
fn test_rawalpindi_regression() {
    let q = compute_qibla(&GeoCoordinate::new(33.5651, 73.0169)).unwrap();
    assert_approx!(q.degrees, 256.0723, 1e-3);
    assert_eq!(q.compass, CompassPoint::WSW);
    assert!(!q.at_kaaba);
}

#[test]
fn test_known_cities() {
    let cases: &[(f64, f64, f64, CompassPoint)] = &[
        (51.5074, -0.1278, 118.9872, CompassPoint::ESE),
        (40.7128, -74.006, 58.4817, CompassPoint::ENE),
        (-33.8688, 151.2093, 277.4996, CompassPoint::W),
        (24.4539, 39.6142, 176.2732, CompassPoint::S),
        (35.6892, 51.389, 218.4010, CompassPoint::SW),
    ];
    for &(lat, lon, expected, point) in cases {
        let q = compute_qibla(&GeoCoordinate::new(lat, lon)).unwrap();
        assert_approx!(q.degrees, expected, 1e-3);
        assert_eq!(q.compass, point, "({}, {})", lat, lon);
    }
}

#[test]
fn test_bearing_range_over_globe() {
    let mut lat = -89.0;
    while lat <= 89.0 {
        let mut lon = -180.0;
        while lon <= 180.0 {
            let q = compute_qibla(&GeoCoordinate::new(lat, lon)).unwrap();
            assert!(
                q.degrees >= 0.0 && q.degrees < 360.0,
                "({}, {}) -> {}",
                lat, lon, q.degrees
            );
            lon += 7.5;
        }
        lat += 4.5;
    }
}

#[test]
fn test_deterministic() {
    let observer = GeoCoordinate::new(-37.8136, 144.9631);
    let a = compute_qibla(&observer).unwrap();
    let b = compute_qibla(&observer).unwrap();
    assert_eq!(a.degrees.to_bits(), b.degrees.to_bits());
    assert_eq!(a, b);
}

#[test]
fn test_at_kaaba_is_degenerate_north() {
    let q = compute_qibla(&KAABA).unwrap();
    assert!(q.at_kaaba);
    assert_eq!(q.degrees, 0.0);
    assert_eq!(q.compass, CompassPoint::N);
}

#[test]
fn test_due_north_and_south_of_kaaba() {
    let south = compute_qibla(&GeoCoordinate::new(0.0, KAABA_LONGITUDE)).unwrap();
    assert_approx!(south.degrees, 0.0, 1e-9);
    let north = compute_qibla(&GeoCoordinate::new(50.0, KAABA_LONGITUDE)).unwrap();
    assert_approx!(north.degrees, 180.0, 1e-9);
    assert_eq!(north.compass, CompassPoint::S);
}

#[test]
fn test_invalid_coordinates_rejected() {
    let bad = [
        (90.5, 0.0),
        (-91.0, 0.0),
        (0.0, 180.1),
        (0.0, -181.0),
        (f64::NAN, 0.0),
        (0.0, f64::INFINITY),
    ];
    for (lat, lon) in bad {
        let err = compute_qibla(&GeoCoordinate::new(lat, lon)).unwrap_err();
        assert!(
            matches!(err, AlmanacError::InvalidCoordinate { .. }),
            "({}, {}) -> {:?}",
            lat, lon, err
        );
    }
}

#[test]
fn test_range_edges_accepted() {
    for (lat, lon) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
        assert!(compute_qibla(&GeoCoordinate::new(lat, lon)).is_ok());
    }
}

#[test]
fn test_raw_bearing_skips_validation() {
    let b = qibla_bearing(&GeoCoordinate::new(120.0, 400.0));
    assert!((0.0..360.0).contains(&b));
}

// ── Device heading ──

#[test]
fn test_device_heading_from_alpha() {
    assert_approx!(device_heading(0.0), 0.0, 1e-9);
    assert_approx!(device_heading(90.0), 270.0, 1e-9);
    assert_approx!(device_heading(270.0), 90.0, 1e-9);
}

#[test]
fn test_relative_bearing() {
    assert_approx!(relative_bearing(256.0, 0.0), 256.0, 1e-9);
    assert_approx!(relative_bearing(256.0, 256.0), 0.0, 1e-9);
    assert_approx!(relative_bearing(10.0, 350.0), 20.0, 1e-9);
    assert_approx!(relative_bearing(350.0, 10.0), 340.0, 1e-9);
}
