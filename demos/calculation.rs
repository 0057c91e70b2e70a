use chrono::{Datelike, TimeZone};
use chrono_tz::Asia::Karachi;
use tracing_subscriber::EnvFilter;

use wilayat_almanac::{
    build_month_grid_with_hijri, compute_qibla, default_location, hijri_month_label, month_name,
    TabularHijri, WEEKDAYS,
};

fn main() -> wilayat_almanac::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let location = default_location();
    let now = Karachi
        .with_ymd_and_hms(2026, 2, 19, 12, 0, 0)
        .single()
        .ok_or_else(|| wilayat_almanac::AlmanacError::InvalidMonth(2))?;
    let (month, year) = (now.month(), now.year());

    let qibla = compute_qibla(&location.coordinate())?;

    println!("=== Qibla ===");
    println!(
        "Location: {}, {} ({:.4}°N, {:.4}°E)",
        location.city, location.country, location.latitude, location.longitude
    );
    println!("Bearing: {:.2}° ({})", qibla.degrees, qibla.compass.label());
    println!();

    let converter = TabularHijri;
    let grid = build_month_grid_with_hijri(month, year, &converter)?;
    println!(
        "=== {} {} / {} ===",
        month_name(month).unwrap_or_default(),
        year,
        hijri_month_label(month, year, &converter).unwrap_or_default()
    );
    println!("{}", WEEKDAYS.map(|d| format!("{d:>9}")).join(""));
    for week in grid.chunks(7) {
        let row: String = week
            .iter()
            .map(|cell| match (&cell.hijri_date, cell.is_current_month) {
                (Some(h), true) => format!("{:>4} ({:>2})", cell.day_number, h.day),
                (None, true) => format!("{:>9}", cell.day_number),
                (_, false) => format!("{:>9}", "."),
            })
            .collect();
        println!("{row}");
    }

    Ok(())
}
