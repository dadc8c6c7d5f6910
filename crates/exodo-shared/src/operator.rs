//! Operator profile records.

use crate::arsenal::{ArsenalItem, WeaponCategory};
use crate::badge::BadgeSet;
use crate::loadout::LoadoutSet;
use crate::serde_helpers::{null_as_default, weapon_category};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Team role stored on the operator row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Operator,
    Armorer,
    Event,
    Media,
    Administrative,
    Financial,
    #[default]
    #[serde(other)]
    Recruit,
}

/// Days the operator can join games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Weekdays,
    Weekends,
    Both,
    #[serde(other)]
    Other,
}

/// An operator as read from storage, with its embedded arsenal and loadout.
/// Null fields decode as their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorSnapshot {
    pub id: String,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub codename: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub role: Role,
    /// Active membership
    #[serde(deserialize_with = "null_as_default")]
    pub status: bool,

    /// Staff star rating, 0-5
    #[serde(deserialize_with = "null_as_default")]
    pub rating: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub xp: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub prestige: u32,
    /// Weapon specialty
    #[serde(deserialize_with = "weapon_category")]
    pub category: Option<WeaponCategory>,
    #[serde(deserialize_with = "null_as_default")]
    pub badges: BadgeSet,

    // Personal / health / legal
    pub identity: Option<String>,
    pub is_donor: Option<bool>,
    pub health_plan: Option<bool>,
    pub instagram: Option<String>,
    pub media_consent: Option<bool>,
    pub terms_accepted: Option<bool>,
    pub quote: Option<String>,
    pub emergency_contact: Option<String>,
    pub blood_type: Option<String>,
    pub profession: Option<String>,
    pub availability: Option<Availability>,
    pub birth_date: Option<NaiveDate>,
    pub number_fdba: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub allergies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub medication_details: Vec<String>,
    /// Self-declared experience tier, 1-3
    pub experience: Option<u8>,

    #[serde(deserialize_with = "null_as_default")]
    pub arsenal: Vec<ArsenalItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub loadout: Vec<LoadoutSet>,
}

/// True when an optional text field holds something other than whitespace
pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map(|v| !v.trim().is_empty()).unwrap_or(false)
}

impl OperatorSnapshot {
    pub fn new(id: impl Into<String>, codename: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            codename: codename.into(),
            level: 1,
            ..Default::default()
        }
    }

    /// Name, blood type and emergency contact all filled in
    pub fn is_profile_complete(&self) -> bool {
        has_text(&self.name) && has_text(&self.blood_type) && has_text(&self.emergency_contact)
    }

    pub fn has_medical_notes(&self) -> bool {
        self.allergies.iter().any(|a| !a.trim().is_empty())
            || self.medication_details.iter().any(|m| !m.trim().is_empty())
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, patch: &OperatorPatch) {
        if let Some(xp) = patch.xp {
            self.xp = xp;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(prestige) = patch.prestige {
            self.prestige = prestige;
        }
        if let Some(badges) = &patch.badges {
            self.badges = badges.clone();
        }
    }
}

/// Partial update of the progression fields. Only changed fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prestige: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges: Option<BadgeSet>,
}

impl OperatorPatch {
    /// Diff two snapshots, keeping only the progression fields that moved
    pub fn between(before: &OperatorSnapshot, after: &OperatorSnapshot) -> Self {
        Self {
            xp: (before.xp != after.xp).then_some(after.xp),
            level: (before.level != after.level).then_some(after.level),
            prestige: (before.prestige != after.prestige).then_some(after.prestige),
            badges: (before.badges != after.badges).then(|| after.badges.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.xp.is_none() && self.level.is_none() && self.prestige.is_none() && self.badges.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_row() {
        let json = r#"{"id":"op-1","codename":"Ghost","rating":3,"role":"quartermaster"}"#;
        let op: OperatorSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(op.codename, "Ghost");
        assert_eq!(op.rating, 3);
        assert_eq!(op.role, Role::Recruit);
        assert!(op.badges.is_empty());
        assert!(op.blood_type.is_none());
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let json = r#"{"id":"op-1","codename":null,"role":null,"status":null,"rating":null,
            "level":null,"xp":null,"prestige":null,"category":null,"badges":null,
            "allergies":null,"medication_details":null,"arsenal":null,"loadout":null}"#;
        let op: OperatorSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(op.xp, 0);
        assert_eq!(op.role, Role::Recruit);
        assert!(!op.status);
        assert!(op.badges.is_empty());
        assert!(op.arsenal.is_empty());
        assert!(!op.has_medical_notes());
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::Armorer, Role::Financial, Role::Recruit] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), role);
        }
        assert_eq!(serde_json::to_string(&Role::Recruit).unwrap(), r#""recruit""#);
    }

    #[test]
    fn test_profile_complete_ignores_blank_text() {
        let mut op = OperatorSnapshot::new("op-1", "Ghost");
        op.name = Some("João".into());
        op.blood_type = Some("O+".into());
        op.emergency_contact = Some("   ".into());
        assert!(!op.is_profile_complete());

        op.emergency_contact = Some("555-0100".into());
        assert!(op.is_profile_complete());
    }

    #[test]
    fn test_patch_between_only_carries_changes() {
        let before = OperatorSnapshot::new("op-1", "Ghost");
        let mut after = before.clone();
        after.xp = 150;

        let patch = OperatorPatch::between(&before, &after);
        assert_eq!(patch.xp, Some(150));
        assert!(patch.level.is_none());
        assert!(patch.badges.is_none());

        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"xp":150}"#);
    }

    #[test]
    fn test_empty_patch() {
        let op = OperatorSnapshot::new("op-1", "Ghost");
        assert!(OperatorPatch::between(&op, &op).is_empty());
    }
}
