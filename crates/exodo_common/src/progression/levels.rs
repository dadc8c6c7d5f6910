//! Level System
//!
//! Linear XP curve with a hard level cap and prestige wrap-around.
//!
//! ## XP Curve
//!
//! level = floor(xp / xp_per_level) + 1, capped at max_level.
//! Once xp reaches max_level * xp_per_level (the prestige threshold), the
//! threshold is subtracted, prestige goes up by one and the operator earns
//! `prestige_master`. With the default 1000 XP per level and cap 100:
//! - Level 1: 0 XP
//! - Level 10: 9,000 XP
//! - Level 100: 99,000 XP
//! - Prestige: 100,000 XP

use exodo_shared::{BadgeSet, OperatorSnapshot};
use tracing::info;

/// Badge granted every time XP wraps into a new prestige
pub const PRESTIGE_BADGE: &str = "prestige_master";

/// Level curve constants. Both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCurve {
    xp_per_level: u64,
    max_level: u32,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self {
            xp_per_level: 1000,
            max_level: 100,
        }
    }
}

impl LevelCurve {
    /// Build a curve. Zero values are raised to 1 so the math stays total.
    pub fn new(xp_per_level: u64, max_level: u32) -> Self {
        Self {
            xp_per_level: xp_per_level.max(1),
            max_level: max_level.max(1),
        }
    }

    pub fn xp_per_level(&self) -> u64 {
        self.xp_per_level
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// XP at which prestige increments and XP wraps
    pub fn prestige_threshold(&self) -> u64 {
        self.xp_per_level.saturating_mul(self.max_level as u64)
    }

    /// Level for an XP total, in [1, max_level]
    pub fn level_for_xp(&self, xp: u64) -> u32 {
        let raw = (xp / self.xp_per_level).saturating_add(1);
        raw.min(self.max_level as u64) as u32
    }

    /// XP still missing for the next level (0 at the cap)
    pub fn xp_to_next_level(&self, xp: u64) -> u64 {
        let level = self.level_for_xp(xp);
        if level >= self.max_level {
            return 0;
        }
        (level as u64 * self.xp_per_level).saturating_sub(xp)
    }

    /// Progress through the current level, 0-100
    pub fn progress_percent(&self, xp: u64) -> u8 {
        if self.level_for_xp(xp) >= self.max_level {
            return 100;
        }
        ((xp % self.xp_per_level) * 100 / self.xp_per_level) as u8
    }
}

/// Fold `amount` XP into an operator.
///
/// Returns a copy with new `xp`, `level`, `prestige` and `badges`. The badge
/// set is the union of the operator's own badges, `badges` when given, and
/// `prestige_master` when the total crossed the prestige threshold.
pub fn add_xp(
    curve: &LevelCurve,
    operator: &OperatorSnapshot,
    amount: u64,
    badges: Option<&BadgeSet>,
) -> OperatorSnapshot {
    let mut next = operator.clone();
    if let Some(extra) = badges {
        next.badges.union_with(extra);
    }

    let threshold = curve.prestige_threshold();
    let mut total = operator.xp.saturating_add(amount);

    // Same result as subtracting the threshold in a loop
    let wraps = total / threshold;
    if wraps > 0 {
        total %= threshold;
        next.prestige = operator
            .prestige
            .saturating_add(wraps.min(u32::MAX as u64) as u32);
        next.badges.insert(PRESTIGE_BADGE);
        info!(
            "Operator {} reached prestige {} (+{})",
            operator.id, next.prestige, wraps
        );
    }

    next.xp = total;
    next.level = curve.level_for_xp(total);

    if wraps == 0 && next.level > operator.level {
        info!(
            "Operator {} leveled up: {} -> {}",
            operator.id, operator.level, next.level
        );
    }

    next
}
