use super::de::deserialize_flexible_datetime;
use super::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ProductId = u64;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub snapshots: Vec<Snapshot>,
}

/// Request body for `POST /products`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductCreate {
    pub name: String,
    pub prompt: String,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
        }
    }
}
