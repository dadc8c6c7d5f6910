//! Badge evaluator.
//!
//! Runs every rule of the registry against an operator and its related
//! records and returns the union of the badges already held with the
//! badges earned now. The result is always a superset of the input.

use super::rules::{BadgeRule, BADGE_RULES};
use crate::config::ExodoConfig;
use crate::skills::SkillProfile;
use chrono::{DateTime, Utc};
use exodo_shared::{
    BadgeSet, Carpool, MaintenanceRecord, OperatorSnapshot, PaymentRecord, RatingPage,
    ScheduleEvent, Vehicle, Visitor,
};
use std::collections::HashSet;
use tracing::debug;

/// Records fetched for one operator before evaluation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatedRecords {
    /// Votes received by the operator
    pub ratings: RatingPage,
    pub maintenance: Vec<MaintenanceRecord>,
    pub payments: Vec<PaymentRecord>,
    /// Vehicles the operator drives
    pub vehicles: Vec<Vehicle>,
    /// Visitors the operator brought
    pub visitors: Vec<Visitor>,
    /// Carpools offered with the operator's vehicles
    pub carpools: Vec<Carpool>,
    /// Missions, possibly unrelated to the operator
    pub schedules: Vec<ScheduleEvent>,
}

/// What rules see during one evaluation
pub struct EvaluationContext<'a> {
    pub operator: &'a OperatorSnapshot,
    pub records: &'a RelatedRecords,
    pub config: &'a ExodoConfig,
    pub now: DateTime<Utc>,
    pub skills: SkillProfile,
    /// Carpools whose vehicle belongs to the operator
    pub own_carpools: usize,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(
        operator: &'a OperatorSnapshot,
        records: &'a RelatedRecords,
        config: &'a ExodoConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let skills = SkillProfile::aggregate(&records.ratings, config.ratings.min_votes_required);

        let owned: HashSet<&str> = records
            .vehicles
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        let own_carpools = records
            .carpools
            .iter()
            .filter(|c| owned.contains(c.vehicle.as_str()))
            .count();

        Self {
            operator,
            records,
            config,
            now,
            skills,
            own_carpools,
        }
    }

    /// Completed missions the operator attended
    pub fn attended_missions(&self) -> impl Iterator<Item = &'a ScheduleEvent> + '_ {
        self.records
            .schedules
            .iter()
            .filter(|s| s.is_completed() && s.attended_by(&self.operator.id))
    }

    /// Completed missions the operator led
    pub fn led_missions(&self) -> impl Iterator<Item = &'a ScheduleEvent> + '_ {
        self.records
            .schedules
            .iter()
            .filter(|s| s.is_completed() && s.led_by(&self.operator.id))
    }
}

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Held badges plus everything earned now
    pub badges: BadgeSet,
    /// Slugs not held before, sorted
    pub new_badges: Vec<String>,
}

/// Evaluate with the full rule registry
pub fn evaluate(
    operator: &OperatorSnapshot,
    records: &RelatedRecords,
    config: &ExodoConfig,
    now: DateTime<Utc>,
) -> Evaluation {
    evaluate_with(BADGE_RULES, operator, records, config, now)
}

/// Evaluate with an explicit rule list
pub fn evaluate_with(
    rules: &[BadgeRule],
    operator: &OperatorSnapshot,
    records: &RelatedRecords,
    config: &ExodoConfig,
    now: DateTime<Utc>,
) -> Evaluation {
    let ctx = EvaluationContext::new(operator, records, config, now);
    let mut badges = operator.badges.clone();

    for rule in rules {
        for slug in rule.apply(&ctx) {
            if badges.insert(slug) {
                debug!("{} earned {} ({:?})", operator.id, slug, rule.family);
            }
        }
    }

    let new_badges = badges.added_since(&operator.badges);
    debug!(
        "Evaluated {} rules for {}: {} new, {} held",
        rules.len(),
        operator.id,
        new_badges.len(),
        badges.len()
    );

    Evaluation { badges, new_badges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use exodo_shared::{
        ArsenalItem, MaintenanceKind, MaintenanceStatus, PaymentCategory, PaymentStatus,
        ScheduleStatus, WeaponCategory,
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    fn run(op: &OperatorSnapshot, records: &RelatedRecords) -> BadgeSet {
        evaluate(op, records, &ExodoConfig::default(), now()).badges
    }

    #[test]
    fn test_fresh_recruit() {
        let op = OperatorSnapshot::new("op-1", "Ghost");
        let badges = run(&op, &RelatedRecords::default());

        assert!(badges.contains("rank_recruta"));
        assert_eq!(badges.len(), 1);
    }

    #[test]
    fn test_held_badges_survive() {
        let mut op = OperatorSnapshot::new("op-1", "Ghost");
        op.badges.insert("legacy_badge");
        op.badges.insert("bench_master");

        let result = evaluate(&op, &RelatedRecords::default(), &ExodoConfig::default(), now());
        assert!(result.badges.contains("legacy_badge"));
        assert!(result.badges.contains("bench_master"));
        assert_eq!(result.new_badges, vec!["rank_recruta".to_string()]);
    }

    #[test]
    fn test_rank_rating_and_specialty() {
        let mut op = OperatorSnapshot::new("op-1", "Ghost");
        op.level = 62;
        op.rating = 4;
        op.category = Some(WeaponCategory::Dmr);

        let badges = run(&op, &RelatedRecords::default());
        assert!(badges.contains("rank_tenente_coronel"));
        assert!(badges.contains("rating_star_4"));
        assert!(badges.contains("specialty_dmr"));

        op.rating = 0;
        op.category = None;
        let badges = run(&op, &RelatedRecords::default());
        assert!(!badges.iter().any(|b| b.starts_with("rating_star")));
        assert!(!badges.iter().any(|b| b.starts_with("specialty_")));
    }

    #[test]
    fn test_high_power_boundary() {
        let mut op = OperatorSnapshot::new("op-1", "Ghost");
        op.arsenal.push(ArsenalItem {
            fps: Some(400),
            ..Default::default()
        });
        assert!(!run(&op, &RelatedRecords::default()).contains("high_power_unit"));

        op.arsenal[0].fps = Some(401);
        assert!(run(&op, &RelatedRecords::default()).contains("high_power_unit"));
    }

    #[test]
    fn test_backup_window() {
        let mut op = OperatorSnapshot::new("op-1", "Ghost");
        op.arsenal.push(ArsenalItem {
            is_secondary: true,
            maintained_at: Some(now() - chrono::Duration::days(30)),
            ..Default::default()
        });
        assert!(run(&op, &RelatedRecords::default()).contains("arsenal_backup_ready"));

        op.arsenal[0].maintained_at = Some(now() - chrono::Duration::days(31));
        assert!(!run(&op, &RelatedRecords::default()).contains("arsenal_backup_ready"));
    }

    #[test]
    fn test_delinquency_blocks_standing() {
        let op = OperatorSnapshot::new("op-1", "Ghost");
        let mut records = RelatedRecords {
            payments: vec![PaymentRecord {
                status: PaymentStatus::Paid,
                category: PaymentCategory::Goal,
                ..Default::default()
            }],
            ..Default::default()
        };
        let badges = run(&op, &records);
        assert!(badges.contains("active_standing"));
        assert!(badges.contains("generous_contributor"));

        records.payments.push(PaymentRecord {
            status: PaymentStatus::Pending,
            due_date: Some(now() - chrono::Duration::days(1)),
            ..Default::default()
        });
        assert!(!run(&op, &records).contains("active_standing"));
    }

    #[test]
    fn test_carpools_scoped_to_own_vehicles() {
        let op = OperatorSnapshot::new("op-1", "Ghost");
        let records = RelatedRecords {
            vehicles: vec![Vehicle {
                id: "car-1".into(),
                driver: "op-1".into(),
                ..Default::default()
            }],
            carpools: vec![Carpool {
                vehicle: "someone-else".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let badges = run(&op, &records);
        assert!(badges.contains("mobile_unit"));
        assert!(!badges.contains("logistics_specialist"));
    }

    #[test]
    fn test_maintenance_history() {
        let op = OperatorSnapshot::new("op-1", "Ghost");
        let done = MaintenanceRecord {
            status: MaintenanceStatus::Completed,
            kinds: vec![MaintenanceKind::Upgrade],
            ..Default::default()
        };
        let mut records = RelatedRecords {
            maintenance: vec![done.clone(); 9],
            ..Default::default()
        };
        records.maintenance.push(MaintenanceRecord::default());

        let badges = run(&op, &records);
        assert!(badges.contains("upgrade_expert"));
        assert!(!badges.contains("bench_master"));

        records.maintenance.push(done);
        assert!(run(&op, &records).contains("bench_master"));
    }

    #[test]
    fn test_monthly_attendance() {
        let op = OperatorSnapshot::new("op-1", "Ghost");
        let mission = |day: u32, month: u32| ScheduleEvent {
            status: ScheduleStatus::Completed,
            date: Some(Utc.with_ymd_and_hms(2026, month, day, 9, 0, 0).unwrap()),
            attended: vec!["op-1".into()],
            ..Default::default()
        };
        let mut records = RelatedRecords {
            schedules: vec![mission(1, 3), mission(7, 3), mission(14, 3), mission(20, 2)],
            ..Default::default()
        };
        assert!(!run(&op, &records).contains("mission_perfect_attendance"));

        records.schedules.push(mission(15, 3));
        assert!(run(&op, &records).contains("mission_perfect_attendance"));
    }

    #[test]
    fn test_birthday_ignores_year() {
        let mut op = OperatorSnapshot::new("op-1", "Ghost");
        op.birth_date = chrono::NaiveDate::from_ymd_opt(1990, 3, 15);
        assert!(run(&op, &RelatedRecords::default()).contains("birthday_warrior"));
    }
}
