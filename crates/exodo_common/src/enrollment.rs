//! Recruit registration.
//!
//! Builds the two records created when an account signs up: a blank
//! recruit profile and the enrollment fee. Nothing is written here; the
//! caller stores both.

use crate::config::EnrollmentConfig;
use chrono::{DateTime, Duration, Utc};
use exodo_shared::{OperatorSnapshot, PaymentCategory, PaymentRecord, PaymentStatus, Role};
use tracing::info;
use uuid::Uuid;

/// Codename used when the name is blank
pub const DEFAULT_CODENAME: &str = "Recruta";

#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub operator: OperatorSnapshot,
    pub fee: PaymentRecord,
}

/// First word of the trimmed name
pub fn codename_for(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .next()
        .unwrap_or(DEFAULT_CODENAME)
        .to_string()
}

pub fn enroll(
    user_id: &str,
    full_name: &str,
    now: DateTime<Utc>,
    config: &EnrollmentConfig,
) -> Enrollment {
    let name = full_name.trim();
    let mut operator = OperatorSnapshot::new(user_id, codename_for(name));
    operator.name = (!name.is_empty()).then(|| name.to_string());
    operator.created_at = Some(now);
    operator.role = Role::Recruit;
    operator.status = false;

    let fee = PaymentRecord {
        id: Uuid::new_v4().to_string(),
        description: format!("Matrícula · {}", config.team_name),
        amount: config.monthly_fee,
        status: PaymentStatus::Created,
        category: PaymentCategory::Enrollment,
        reference: now.format("%m/%Y").to_string(),
        operator: operator.id.clone(),
        due_date: Some(now + Duration::days(config.due_date_days)),
        ..Default::default()
    };

    info!(
        "Enrolled {} as {} (fee {:.2} due {})",
        user_id,
        operator.codename,
        fee.amount,
        fee.reference
    );

    Enrollment { operator, fee }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_codename() {
        assert_eq!(codename_for("  João da Silva "), "João");
        assert_eq!(codename_for("Ghost"), "Ghost");
        assert_eq!(codename_for("   "), "Recruta");
    }

    #[test]
    fn test_enroll() {
        let now = Utc.with_ymd_and_hms(2026, 2, 25, 18, 30, 0).unwrap();
        let enrollment = enroll("user-1", "Maria Souza", now, &EnrollmentConfig::default());

        let op = &enrollment.operator;
        assert_eq!(op.id, "user-1");
        assert_eq!(op.codename, "Maria");
        assert_eq!(op.role, Role::Recruit);
        assert!(!op.status);
        assert_eq!((op.xp, op.level, op.prestige, op.rating), (0, 1, 0, 0));
        assert!(op.badges.is_empty());

        let fee = &enrollment.fee;
        assert_eq!(fee.operator, "user-1");
        assert_eq!(fee.amount, 100.0);
        assert_eq!(fee.category, PaymentCategory::Enrollment);
        assert_eq!(fee.status, PaymentStatus::Created);
        assert_eq!(fee.reference, "02/2026");
        assert_eq!(fee.description, "Matrícula · Éxodo");
        assert_eq!(
            fee.due_date,
            Some(Utc.with_ymd_and_hms(2026, 3, 7, 18, 30, 0).unwrap())
        );
    }
}
