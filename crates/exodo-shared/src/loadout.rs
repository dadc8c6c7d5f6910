//! Uniform loadout records.
//!
//! One `LoadoutSet` row per uniform configuration, with a boolean flag for
//! every equipment slot. A missing flag counts as "not owned".

use serde::{Deserialize, Serialize};

/// Uniform pattern, stored as its numeric code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum UniformType {
    #[default]
    Multicam,
    VerdeMilitar,
    Pmc,
    Other(u8),
}

impl From<u8> for UniformType {
    fn from(code: u8) -> Self {
        match code {
            1 => UniformType::Multicam,
            2 => UniformType::VerdeMilitar,
            3 => UniformType::Pmc,
            other => UniformType::Other(other),
        }
    }
}

impl From<UniformType> for u8 {
    fn from(uniform: UniformType) -> u8 {
        match uniform {
            UniformType::Multicam => 1,
            UniformType::VerdeMilitar => 2,
            UniformType::Pmc => 3,
            UniformType::Other(code) => code,
        }
    }
}

/// Equipment slot of a uniform set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadoutSlot {
    CombatShirt,
    TacticalPants,
    CombatBoot,
    Gloves,
    BonnieHat,
    SkiMask,
    TacticalVest,
    TacticalBelt,
    Helmet,
    Headset,
    KneePads,
    Holster,
    WalkieTalkie,
}

impl LoadoutSlot {
    pub const ALL: [LoadoutSlot; 13] = [
        LoadoutSlot::CombatShirt,
        LoadoutSlot::TacticalPants,
        LoadoutSlot::CombatBoot,
        LoadoutSlot::Gloves,
        LoadoutSlot::BonnieHat,
        LoadoutSlot::SkiMask,
        LoadoutSlot::TacticalVest,
        LoadoutSlot::TacticalBelt,
        LoadoutSlot::Helmet,
        LoadoutSlot::Headset,
        LoadoutSlot::KneePads,
        LoadoutSlot::Holster,
        LoadoutSlot::WalkieTalkie,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LoadoutSlot::CombatShirt => "combat_shirt",
            LoadoutSlot::TacticalPants => "tactical_pants",
            LoadoutSlot::CombatBoot => "combat_boot",
            LoadoutSlot::Gloves => "gloves",
            LoadoutSlot::BonnieHat => "bonnie_hat",
            LoadoutSlot::SkiMask => "ski_mask",
            LoadoutSlot::TacticalVest => "tactical_vest",
            LoadoutSlot::TacticalBelt => "tactical_belt",
            LoadoutSlot::Helmet => "helmet",
            LoadoutSlot::Headset => "headset",
            LoadoutSlot::KneePads => "knee_pads",
            LoadoutSlot::Holster => "holster",
            LoadoutSlot::WalkieTalkie => "walkie_talkie",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoadoutSlot::CombatShirt => "Combat Shirt",
            LoadoutSlot::TacticalPants => "Calça Tática",
            LoadoutSlot::CombatBoot => "Coturno",
            LoadoutSlot::Gloves => "Luvas",
            LoadoutSlot::BonnieHat => "Bonnie Hat",
            LoadoutSlot::SkiMask => "Balaclava",
            LoadoutSlot::TacticalVest => "Colete Tático",
            LoadoutSlot::TacticalBelt => "Cinto Tático",
            LoadoutSlot::Helmet => "Capacete",
            LoadoutSlot::Headset => "Headset",
            LoadoutSlot::KneePads => "Joelheira",
            LoadoutSlot::Holster => "Coldre",
            LoadoutSlot::WalkieTalkie => "Rádio",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Optional slots never block a set from counting as complete
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            LoadoutSlot::BonnieHat
                | LoadoutSlot::KneePads
                | LoadoutSlot::Holster
                | LoadoutSlot::WalkieTalkie
        )
    }

    /// Slots that must be present for a standard uniform
    pub fn core() -> impl Iterator<Item = LoadoutSlot> {
        Self::ALL.into_iter().filter(|s| !s.is_optional())
    }
}

/// One uniform configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadoutSet {
    pub id: String,
    pub type_uniform: UniformType,
    pub combat_shirt: Option<bool>,
    pub tactical_pants: Option<bool>,
    pub combat_boot: Option<bool>,
    pub gloves: Option<bool>,
    pub bonnie_hat: Option<bool>,
    pub ski_mask: Option<bool>,
    pub tactical_vest: Option<bool>,
    pub tactical_belt: Option<bool>,
    pub helmet: Option<bool>,
    pub headset: Option<bool>,
    pub knee_pads: Option<bool>,
    pub holster: Option<bool>,
    pub walkie_talkie: Option<bool>,
    pub operator: Option<String>,
}

impl LoadoutSet {
    pub fn new(id: impl Into<String>, type_uniform: UniformType) -> Self {
        Self {
            id: id.into(),
            type_uniform,
            ..Default::default()
        }
    }

    fn flag(&self, slot: LoadoutSlot) -> Option<bool> {
        match slot {
            LoadoutSlot::CombatShirt => self.combat_shirt,
            LoadoutSlot::TacticalPants => self.tactical_pants,
            LoadoutSlot::CombatBoot => self.combat_boot,
            LoadoutSlot::Gloves => self.gloves,
            LoadoutSlot::BonnieHat => self.bonnie_hat,
            LoadoutSlot::SkiMask => self.ski_mask,
            LoadoutSlot::TacticalVest => self.tactical_vest,
            LoadoutSlot::TacticalBelt => self.tactical_belt,
            LoadoutSlot::Helmet => self.helmet,
            LoadoutSlot::Headset => self.headset,
            LoadoutSlot::KneePads => self.knee_pads,
            LoadoutSlot::Holster => self.holster,
            LoadoutSlot::WalkieTalkie => self.walkie_talkie,
        }
    }

    pub fn has(&self, slot: LoadoutSlot) -> bool {
        self.flag(slot) == Some(true)
    }

    pub fn set(&mut self, slot: LoadoutSlot, owned: bool) {
        let value = Some(owned);
        match slot {
            LoadoutSlot::CombatShirt => self.combat_shirt = value,
            LoadoutSlot::TacticalPants => self.tactical_pants = value,
            LoadoutSlot::CombatBoot => self.combat_boot = value,
            LoadoutSlot::Gloves => self.gloves = value,
            LoadoutSlot::BonnieHat => self.bonnie_hat = value,
            LoadoutSlot::SkiMask => self.ski_mask = value,
            LoadoutSlot::TacticalVest => self.tactical_vest = value,
            LoadoutSlot::TacticalBelt => self.tactical_belt = value,
            LoadoutSlot::Helmet => self.helmet = value,
            LoadoutSlot::Headset => self.headset = value,
            LoadoutSlot::KneePads => self.knee_pads = value,
            LoadoutSlot::Holster => self.holster = value,
            LoadoutSlot::WalkieTalkie => self.walkie_talkie = value,
        }
    }

    /// Builder used when assembling sets in code and tests
    pub fn with(mut self, slots: impl IntoIterator<Item = LoadoutSlot>) -> Self {
        for slot in slots {
            self.set(slot, true);
        }
        self
    }

    /// Every non-optional slot is owned, except the `exempt` ones
    pub fn is_complete_except(&self, exempt: &[LoadoutSlot]) -> bool {
        LoadoutSlot::core().all(|slot| exempt.contains(&slot) || self.has(slot))
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete_except(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_slots() {
        assert_eq!(LoadoutSlot::core().count(), 9);
        assert!(LoadoutSlot::core().all(|s| !s.is_optional()));
    }

    #[test]
    fn test_complete_ignores_optional_slots() {
        let set = LoadoutSet::new("l1", UniformType::Multicam).with(LoadoutSlot::core());
        assert!(set.is_complete());
        assert!(!set.has(LoadoutSlot::Holster));
    }

    #[test]
    fn test_null_flag_is_missing() {
        let json = r#"{"id":"l1","type_uniform":3,"helmet":null,"gloves":true}"#;
        let set: LoadoutSet = serde_json::from_str(json).unwrap();

        assert_eq!(set.type_uniform, UniformType::Pmc);
        assert!(!set.has(LoadoutSlot::Helmet));
        assert!(set.has(LoadoutSlot::Gloves));
        assert!(!set.is_complete());
    }

    #[test]
    fn test_slot_keys_round_trip() {
        for slot in LoadoutSlot::ALL {
            assert_eq!(LoadoutSlot::from_key(slot.key()), Some(slot));
        }
    }

    #[test]
    fn test_unknown_uniform_code_is_kept() {
        assert_eq!(UniformType::from(9), UniformType::Other(9));
        assert_eq!(u8::from(UniformType::Other(9)), 9);
    }
}
