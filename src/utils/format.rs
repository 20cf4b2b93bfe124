use std::fmt::Display;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Fecha de pedido como M/D/YYYY en la zona horaria del navegador.
/// Si no se puede parsear, se muestra tal cual.
pub fn format_order_date(raw: &str) -> String {
    format_order_date_in(raw, &Local)
}

/// Igual que `format_order_date`, en una zona horaria concreta
pub fn format_order_date_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    const DATE_FORMAT: &str = "%-m/%-d/%Y";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(tz).format(DATE_FORMAT).to_string();
    }
    // Fecha y hora sin zona: ya es hora local
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DATE_FORMAT).to_string();
    }
    // Solo fecha: medianoche UTC, igual que `new Date("YYYY-MM-DD")`
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => match date.and_hms_opt(0, 0, 0) {
            Some(midnight) => Utc
                .from_utc_datetime(&midnight)
                .with_timezone(tz)
                .format(DATE_FORMAT)
                .to_string(),
            None => raw.to_string(),
        },
        Err(_) => raw.to_string(),
    }
}

/// Importe con el formato de un número JS: "150", "150.5", "100000000000000000000"
pub fn format_total(amount: f64) -> String {
    if amount == 0.0 {
        // -0 se muestra como 0
        "$0".to_string()
    } else if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        format!("${}Infinity", sign)
    } else {
        format!("${}", amount)
    }
}

/// Clase del badge de estado
/// Compara etiquetas capitalizadas ("Pending", "Completed"), no los valores de filtro
pub fn status_badge_class(status: Option<&str>) -> &'static str {
    match status {
        Some("Pending") => "status-badge status-badge--pending",
        Some("Completed") => "status-badge status-badge--completed",
        _ => "status-badge status-badge--default",
    }
}
