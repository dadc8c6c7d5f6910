//! Armorer bench records.

use crate::serde_helpers::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Work performed. A record may carry several kinds at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceKind {
    Revision,
    Repair,
    Upgrade,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceStatus {
    #[default]
    Waiting,
    Bench,
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceRecord {
    pub id: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kinds: Vec<MaintenanceKind>,
    pub status: MaintenanceStatus,
    pub technical_report: Option<String>,
    /// Operator who did the work
    pub operator: String,
    pub arsenal: Option<String>,
    pub maintenance_at: Option<DateTime<Utc>>,
}

impl MaintenanceRecord {
    pub fn is_completed(&self) -> bool {
        self.status == MaintenanceStatus::Completed
    }

    pub fn includes(&self, kind: MaintenanceKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn report_len(&self) -> usize {
        self.technical_report
            .as_deref()
            .map(|r| r.chars().count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_a_set_not_exclusive() {
        let json = r#"{"id":"m1","type":["revision","upgrade"],"status":"completed","operator":"op-1"}"#;
        let record: MaintenanceRecord = serde_json::from_str(json).unwrap();

        assert!(record.is_completed());
        assert!(record.includes(MaintenanceKind::Upgrade));
        assert!(record.includes(MaintenanceKind::Revision));
        assert!(!record.includes(MaintenanceKind::Repair));
    }

    #[test]
    fn test_report_len_counts_characters() {
        let record = MaintenanceRecord {
            technical_report: Some("válvula".into()),
            ..Default::default()
        };
        assert_eq!(record.report_len(), 7);
        assert_eq!(MaintenanceRecord::default().report_len(), 0);
    }
}
