//! Armory inventory records.

use crate::serde_helpers::{null_as_default, weapon_category};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weapon role, stored as its numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WeaponCategory {
    Assault,
    Dmr,
    Sniper,
    Support,
}

impl WeaponCategory {
    pub const ALL: [WeaponCategory; 4] = [
        WeaponCategory::Assault,
        WeaponCategory::Dmr,
        WeaponCategory::Sniper,
        WeaponCategory::Support,
    ];

    pub fn code(self) -> u8 {
        match self {
            WeaponCategory::Assault => 1,
            WeaponCategory::Dmr => 2,
            WeaponCategory::Sniper => 3,
            WeaponCategory::Support => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            WeaponCategory::Assault => "Assault",
            WeaponCategory::Dmr => "DMR",
            WeaponCategory::Sniper => "Sniper",
            WeaponCategory::Support => "Support",
        }
    }
}

impl TryFrom<u8> for WeaponCategory {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("unknown weapon category code {}", code))
    }
}

impl From<WeaponCategory> for u8 {
    fn from(category: WeaponCategory) -> u8 {
        category.code()
    }
}

/// One weapon in an operator's arsenal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArsenalItem {
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Platform code (AEG, spring, GBB, HPA)
    #[serde(rename = "type")]
    pub weapon_type: Option<u8>,
    /// Unknown codes decode as `None`
    #[serde(deserialize_with = "weapon_category")]
    pub category: Option<WeaponCategory>,
    pub fps: Option<u32>,
    pub joule: Option<String>,
    /// Receipt URL
    pub invoice: Option<String>,
    #[serde(alias = "maintenance_at")]
    pub maintained_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_secondary: bool,
    pub operator: Option<String>,
}

impl ArsenalItem {
    pub fn has_invoice(&self) -> bool {
        crate::operator::has_text(&self.invoice)
    }
}
