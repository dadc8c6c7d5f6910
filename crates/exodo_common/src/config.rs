//! Exodo Configuration
//!
//! Tunables for the progression engine. Every section is optional in the
//! file; missing keys fall back to the current team rules.
//! Config file: $EXODO_CONFIG, ~/.config/exodo/config.toml or /etc/exodo/config.toml

use crate::progression::awards::AwardTable;
use crate::progression::levels::LevelCurve;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use exodo_shared::{ExodoError, LoadoutSlot};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Level curve and badge bonus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// XP needed per level
    pub xp_per_level: u64,
    /// Highest reachable level; XP past it rolls into prestige
    pub max_level: u32,
    /// Bonus XP for each newly earned badge
    pub badge_xp: u64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            xp_per_level: 1000,
            max_level: 100,
            badge_xp: 50,
        }
    }
}

impl ProgressionConfig {
    pub fn curve(&self) -> LevelCurve {
        LevelCurve::new(self.xp_per_level, self.max_level)
    }
}

/// Peer rating aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingsConfig {
    /// Votes needed before a skill average counts at full weight
    pub min_votes_required: u32,
    /// Weighted score that earns a mastery badge
    pub mastery_threshold: f64,
}

impl Default for RatingsConfig {
    fn default() -> Self {
        Self {
            min_votes_required: 8,
            mastery_threshold: 4.5,
        }
    }
}

/// Uniform completeness rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadoutConfig {
    /// Complete sets needed for the chameleon badge
    pub min_complete_uniforms: usize,
    /// Core slots a PMC uniform does not need
    pub pmc_exceptions: Vec<LoadoutSlot>,
}

impl Default for LoadoutConfig {
    fn default() -> Self {
        Self {
            min_complete_uniforms: 3,
            pmc_exceptions: vec![LoadoutSlot::Helmet, LoadoutSlot::SkiMask, LoadoutSlot::Headset],
        }
    }
}

/// Date-driven badges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyConfig {
    /// Members created strictly before this day are pioneers
    pub pioneer_cutoff: NaiveDate,
    /// A secondary weapon serviced within this many days is backup-ready
    pub backup_window_days: i64,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            pioneer_cutoff: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap_or_default(),
            backup_window_days: 30,
        }
    }
}

/// Registration fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentConfig {
    pub team_name: String,
    pub monthly_fee: f64,
    /// Days after registration the enrollment fee is due
    pub due_date_days: i64,
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            team_name: "Éxodo".to_string(),
            monthly_fee: 100.0,
            due_date_days: 10,
        }
    }
}

/// Main Exodo configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExodoConfig {
    #[serde(default)]
    pub progression: ProgressionConfig,
    #[serde(default)]
    pub ratings: RatingsConfig,
    #[serde(default)]
    pub loadout: LoadoutConfig,
    #[serde(default)]
    pub awards: AwardTable,
    #[serde(default)]
    pub legacy: LegacyConfig,
    #[serde(default)]
    pub enrollment: EnrollmentConfig,
}

impl ExodoConfig {
    /// Get default user config path: ~/.config/exodo/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        let config_dir = match std::env::var("XDG_CONFIG_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => {
                let home = std::env::var("HOME").context("Cannot determine home directory")?;
                Path::new(&home).join(".config")
            }
        };

        Ok(config_dir.join("exodo").join("config.toml"))
    }

    /// Get system config path: /etc/exodo/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/exodo/config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. $EXODO_CONFIG
    /// 2. User config (~/.config/exodo/config.toml)
    /// 3. System config (/etc/exodo/config.toml)
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        if let Ok(explicit) = std::env::var("EXODO_CONFIG") {
            return Self::load_from(Path::new(&explicit));
        }

        if let Ok(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        Ok(Self::default())
    }

    /// Load and validate one file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ExodoConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }

    /// Reject values that would break the level math or the rating weights
    pub fn validate(&self) -> exodo_shared::Result<()> {
        if self.progression.xp_per_level == 0 {
            return Err(ExodoError::Config("progression.xp_per_level must be > 0".into()));
        }
        if self.progression.max_level == 0 {
            return Err(ExodoError::Config("progression.max_level must be > 0".into()));
        }
        if self.ratings.min_votes_required == 0 {
            return Err(ExodoError::Config("ratings.min_votes_required must be > 0".into()));
        }
        if !self.ratings.mastery_threshold.is_finite() {
            return Err(ExodoError::Config("ratings.mastery_threshold must be finite".into()));
        }
        Ok(())
    }
}
