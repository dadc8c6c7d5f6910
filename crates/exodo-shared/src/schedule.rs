//! Team missions (training and maintenance days).

use crate::serde_helpers::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleKind {
    #[default]
    Training,
    Maintenance,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    #[default]
    Scheduled,
    Completed,
    Canceled,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ScheduleKind,
    pub date: Option<DateTime<Utc>>,
    pub description: String,
    pub report: Option<String>,
    pub status: ScheduleStatus,
    /// Operator id of the mission leader
    pub leader: Option<String>,
    /// Assigned roster
    #[serde(deserialize_with = "null_as_default")]
    pub operators: Vec<String>,
    /// Operators who showed up
    #[serde(deserialize_with = "null_as_default")]
    pub attended: Vec<String>,
}

impl ScheduleEvent {
    pub fn is_completed(&self) -> bool {
        self.status == ScheduleStatus::Completed
    }

    pub fn attended_by(&self, operator_id: &str) -> bool {
        self.attended.iter().any(|id| id == operator_id)
    }

    pub fn led_by(&self, operator_id: &str) -> bool {
        self.leader.as_deref() == Some(operator_id)
    }

    pub fn report_len(&self) -> usize {
        self.report.as_deref().map(|r| r.chars().count()).unwrap_or(0)
    }

    /// Share of the assigned roster that attended. None for an empty roster.
    pub fn attendance_ratio(&self) -> Option<f64> {
        if self.operators.is_empty() {
            return None;
        }
        Some(self.attended.len() as f64 / self.operators.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_ratio() {
        let mission = ScheduleEvent {
            operators: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
            attended: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            ..Default::default()
        };
        assert_eq!(mission.attendance_ratio(), Some(0.8));
        assert_eq!(ScheduleEvent::default().attendance_ratio(), None);
    }

    #[test]
    fn test_leader_and_attendance() {
        let json = r#"{"id":"s1","type":"maintenance","status":"completed","leader":"op-1","operators":["op-1"],"attended":["op-1"]}"#;
        let mission: ScheduleEvent = serde_json::from_str(json).unwrap();

        assert_eq!(mission.kind, ScheduleKind::Maintenance);
        assert!(mission.is_completed());
        assert!(mission.led_by("op-1"));
        assert!(mission.attended_by("op-1"));
        assert!(!mission.attended_by("op-2"));
    }
}
