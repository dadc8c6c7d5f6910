//! Peer skill votes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A vote from one operator about another. `attributes` is the raw JSON
/// object of skill -> score (1-5) as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rating {
    pub id: String,
    pub voter: String,
    pub target: String,
    pub attributes: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Rating {
    pub fn new(
        voter: impl Into<String>,
        target: impl Into<String>,
        attributes: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            voter: voter.into(),
            target: target.into(),
            attributes: attributes.into(),
            created_at: None,
        }
    }

    /// Decode the attribute payload. A blank payload is an empty vote.
    ///
    /// Only a payload that is not a JSON object is an error. Entries whose
    /// value is not a number are dropped, so they score zero on their own.
    pub fn scores(&self) -> serde_json::Result<HashMap<String, f64>> {
        if self.attributes.trim().is_empty() {
            return Ok(HashMap::new());
        }
        let raw: HashMap<String, Value> = serde_json::from_str(&self.attributes)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| value.as_f64().map(|v| (key, v)))
            .collect())
    }
}

/// Ratings for one target, as returned by the store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingPage {
    pub records: Vec<Rating>,
    pub total: usize,
}

impl RatingPage {
    pub fn from_records(records: Vec<Rating>) -> Self {
        let total = records.len();
        Self { records, total }
    }
}
