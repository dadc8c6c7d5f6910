//! Dues and contribution records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Created,
    Pending,
    Overdue,
    Paid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentCategory {
    MonthlyFee,
    Enrollment,
    Goal,
    Supply,
    Equipment,
    #[default]
    #[serde(other)]
    Others,
}

impl PaymentCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentCategory::MonthlyFee => "monthly_fee",
            PaymentCategory::Enrollment => "enrollment",
            PaymentCategory::Goal => "goal",
            PaymentCategory::Supply => "supply",
            PaymentCategory::Equipment => "equipment",
            PaymentCategory::Others => "others",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentRecord {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub category: PaymentCategory,
    /// Billing month, `MM/YYYY`
    pub reference: String,
    pub receipt_url: Option<String>,
    pub goal: Option<String>,
    pub operator: String,
    pub due_date: Option<DateTime<Utc>>,
    /// When the payment was confirmed
    #[serde(alias = "updated_at")]
    pub paid_at: Option<DateTime<Utc>>,
}

impl PaymentRecord {
    /// Overdue, or still pending after its due date
    pub fn is_delinquent(&self, now: DateTime<Utc>) -> bool {
        match self.status {
            PaymentStatus::Overdue => true,
            PaymentStatus::Pending => self.due_date.map(|due| due < now).unwrap_or(false),
            _ => false,
        }
    }

    /// Paid on or before its due date
    pub fn is_punctual(&self) -> bool {
        match (self.status, self.paid_at, self.due_date) {
            (PaymentStatus::Paid, Some(paid), Some(due)) => paid <= due,
            _ => false,
        }
    }
}
