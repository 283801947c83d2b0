use super::de::{deserialize_flexible_datetime, deserialize_price};
use super::product::ProductId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// A URL paired with the price seen there.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UrlPrice {
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<f64>,
}

/// One entry of a snapshot's URL list.
///
/// Most endpoints return bare strings; best-price results are wrapped into
/// [`UrlPrice`] on the client.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UrlEntry {
    Plain(String),
    Priced(UrlPrice),
}

impl UrlEntry {
    pub fn url(&self) -> &str {
        match self {
            Self::Plain(url) => url,
            Self::Priced(entry) => &entry.url,
        }
    }

    /// Price carried by the entry itself, if any.
    pub const fn own_price(&self) -> Option<f64> {
        match self {
            Self::Plain(_) => None,
            Self::Priced(entry) => entry.price,
        }
    }
}

impl From<&str> for UrlEntry {
    fn from(url: &str) -> Self {
        Self::Plain(url.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Snapshot {
    pub id: u64,
    pub product_id: ProductId,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<f64>,
    #[serde(default)]
    pub urls: Vec<UrlEntry>,
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub captured_at: DateTime<Utc>,
}

impl Snapshot {
    /// Price to show next to `entry`: its own price, else the snapshot's.
    pub fn display_price(&self, entry: &UrlEntry) -> Option<f64> {
        entry
            .own_price()
            .or(self.price)
            .filter(|price| price.is_finite())
    }

    /// Wraps every URL with the snapshot's single price (0 when the price is null).
    ///
    /// The best-price endpoint only reports one price per snapshot, so every
    /// URL ends up with the same value.
    pub fn with_wrapped_prices(self) -> Self {
        let price = Some(self.price.unwrap_or(0.0));
        let urls = self
            .urls
            .iter()
            .map(|entry| {
                UrlEntry::Priced(UrlPrice {
                    url: entry.url().to_string(),
                    price,
                })
            })
            .collect();

        Self { urls, ..self }
    }
}

/// Optional bounds for the best-price lookup. `None` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Builds a range from raw `<input type="date">` values; blank fields stay unbounded.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self {
            start: parse_date_input(start),
            end: parse_date_input(end),
        }
    }
}

fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
