use agri_weather::WeatherSnapshot;
use chrono::DateTime;

use super::{escape, layout, BACK_LINK};

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

fn clock(epoch: Option<i64>) -> String {
    or_dash(
        epoch
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|t| t.format("%H:%M:%S UTC").to_string()),
    )
}

/// Current conditions for `/weather`.
pub fn weather_page(s: &WeatherSnapshot) -> String {
    let place = match &s.country {
        Some(country) => format!("{} ({})", escape(&s.location), escape(country)),
        None => escape(&s.location),
    };
    let sky = match (&s.condition, &s.description) {
        (Some(c), Some(d)) => format!("{} ({})", escape(c), escape(d)),
        (Some(c), None) => escape(c),
        (None, Some(d)) => escape(d),
        (None, None) => "-".to_string(),
    };
    let wind = or_dash(s.wind_speed.map(|speed| match s.wind_deg {
        Some(deg) => format!("{speed} m/s ({deg}°)"),
        None => format!("{speed} m/s"),
    }));

    let rows = [
        ("Température", format!("{} °C", s.temperature)),
        ("Ressenti", format!("{} °C", s.feels_like)),
        ("Min / Max", format!("{} / {} °C", s.temp_min, s.temp_max)),
        ("Humidité", format!("{} %", s.humidity)),
        ("Pression", format!("{} hPa", s.pressure)),
        ("Ciel", sky),
        ("Vent", wind),
        ("Nuages", or_dash(s.clouds.map(|c| format!("{c} %")))),
        ("Lever du soleil", clock(s.sunrise)),
        ("Coucher du soleil", clock(s.sunset)),
        ("Date", s.observed_at.format("%d/%m/%Y %H:%M:%S UTC").to_string()),
    ];

    let rows: String = rows
        .iter()
        .map(|(label, value)| {
            format!("<tr><td class=\"label\">{label}</td><td class=\"value\">{value}</td></tr>\n")
        })
        .collect();

    let body = format!("<h1>Météo à {place}</h1>\n<table>\n{rows}</table>\n{BACK_LINK}");
    layout(&format!("Météo - {}", s.location), &body)
}
