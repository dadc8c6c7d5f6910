//! Flat XP awards per triggering action.
//!
//! | Trigger                        | Base XP |
//! |--------------------------------|---------|
//! | Check-in: game                 | +100    |
//! | Check-in: maintenance day      | +200    |
//! | Check-in: presence             | +25     |
//! | Check-in: course               | +400    |
//! | Payment confirmed: goal        | +100    |
//! | Payment confirmed: other       | +50     |
//! | Mission completed: training    | +100    |
//! | Mission completed: maintenance | +200    |
//! | Profile saved                  | 0       |
//!
//! The table is configuration, not code: values have changed between
//! seasons and only the lookup mechanism is fixed.

use exodo_shared::{PaymentCategory, ScheduleKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Event type, stored as its numeric code on the event row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Game,
    Maintenance,
    Presence,
    Course,
}

impl EventKind {
    /// Decode the stored code. Unknown codes count as a game day.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "2" => EventKind::Maintenance,
            "3" => EventKind::Presence,
            "4" => EventKind::Course,
            _ => EventKind::Game,
        }
    }
}

/// External event that starts one progression pass for one operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "trigger", content = "kind", rename_all = "snake_case")]
pub enum Trigger {
    EventCheckIn(EventKind),
    PaymentConfirmed(PaymentCategory),
    MissionCompleted(ScheduleKind),
    ProfileSaved,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::EventCheckIn(kind) => write!(f, "check_in:{:?}", kind),
            Trigger::PaymentConfirmed(category) => write!(f, "payment:{}", category.as_str()),
            Trigger::MissionCompleted(kind) => write!(f, "mission:{:?}", kind),
            Trigger::ProfileSaved => write!(f, "profile_saved"),
        }
    }
}

/// XP granted immediately for each trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwardTable {
    pub game: u64,
    pub maintenance: u64,
    pub presence: u64,
    pub course: u64,
    pub payment_goal: u64,
    pub payment_default: u64,
    pub mission_training: u64,
    pub mission_maintenance: u64,
    pub profile_saved: u64,
}

impl Default for AwardTable {
    fn default() -> Self {
        Self {
            game: 100,
            maintenance: 200,
            presence: 25,
            course: 400,
            payment_goal: 100,
            payment_default: 50,
            mission_training: 100,
            mission_maintenance: 200,
            profile_saved: 0,
        }
    }
}

impl AwardTable {
    pub fn amount_for(&self, trigger: &Trigger) -> u64 {
        match trigger {
            Trigger::EventCheckIn(EventKind::Game) => self.game,
            Trigger::EventCheckIn(EventKind::Maintenance) => self.maintenance,
            Trigger::EventCheckIn(EventKind::Presence) => self.presence,
            Trigger::EventCheckIn(EventKind::Course) => self.course,
            Trigger::PaymentConfirmed(PaymentCategory::Goal) => self.payment_goal,
            Trigger::PaymentConfirmed(_) => self.payment_default,
            Trigger::MissionCompleted(ScheduleKind::Training) => self.mission_training,
            Trigger::MissionCompleted(ScheduleKind::Maintenance) => self.mission_maintenance,
            Trigger::ProfileSaved => self.profile_saved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_awards() {
        let table = AwardTable::default();
        assert_eq!(table.amount_for(&Trigger::EventCheckIn(EventKind::Game)), 100);
        assert_eq!(table.amount_for(&Trigger::EventCheckIn(EventKind::Maintenance)), 200);
        assert_eq!(table.amount_for(&Trigger::EventCheckIn(EventKind::Presence)), 25);
        assert_eq!(table.amount_for(&Trigger::EventCheckIn(EventKind::Course)), 400);
        assert_eq!(table.amount_for(&Trigger::ProfileSaved), 0);
    }

    #[test]
    fn test_payment_awards() {
        let table = AwardTable::default();
        assert_eq!(
            table.amount_for(&Trigger::PaymentConfirmed(PaymentCategory::Goal)),
            100
        );
        assert_eq!(
            table.amount_for(&Trigger::PaymentConfirmed(PaymentCategory::MonthlyFee)),
            50
        );
        assert_eq!(
            table.amount_for(&Trigger::PaymentConfirmed(PaymentCategory::Enrollment)),
            50
        );
    }

    #[test]
    fn test_event_codes() {
        assert_eq!(EventKind::from_code("1"), EventKind::Game);
        assert_eq!(EventKind::from_code("4"), EventKind::Course);
        assert_eq!(EventKind::from_code("unknown"), EventKind::Game);
    }

    #[test]
    fn test_trigger_display() {
        let trigger = Trigger::PaymentConfirmed(PaymentCategory::Goal);
        assert_eq!(trigger.to_string(), "payment:goal");
    }
}
