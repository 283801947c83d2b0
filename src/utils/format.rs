use chrono::{DateTime, Local, Utc};

/// Timestamp in the browser's local time zone.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// `$12.34`, or `N/A` when there is no usable price.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() => format!("${p:.2}"),
        _ => "N/A".to_string(),
    }
}

/// Hostname of `url`, or the raw string when it does not parse or has no host.
pub fn link_label(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| url.to_string())
}
