//! Badge rules.
//!
//! A closed, ordered registry of named predicates over a typed evaluation
//! context. Most rules grant one fixed slug; a few (rating tier, rank,
//! specialty, skill mastery) derive the slug from the operator's state.
//! Every rule is total: a missing field or an empty collection means
//! "not earned", never an error.

use super::evaluator::EvaluationContext;
use crate::progression::{Rank, RANK_BANDS};
use crate::skills::SkillAttribute;
use chrono::Datelike;
use exodo_shared::{
    has_text, Availability, LoadoutSet, MaintenanceKind, PaymentCategory, PaymentStatus,
    UniformType, WeaponCategory,
};

// ============================================================================
// Thresholds
// ============================================================================

pub const ARSENAL_COLLECTOR_MIN: usize = 5;
pub const HIGH_POWER_FPS: u32 = 400;
pub const PISTOLERO_MIN: usize = 2;
pub const ROAD_CAPTAIN_MIN: usize = 5;
pub const AMBASSADOR_MIN: usize = 3;
pub const BENCH_MASTER_MIN: usize = 10;
pub const COMBAT_ENGINEER_MIN: usize = 25;
pub const DETAILED_REPORT_LEN: usize = 100;
pub const MISSION_VETERAN_MIN: usize = 20;
pub const MISSION_REPORT_LEN: usize = 50;
pub const MISSION_REPORTS_MIN: usize = 5;
pub const MONTHLY_ATTENDANCE_MIN: usize = 4;
pub const LEADER_ATTENDANCE_RATIO: f64 = 0.8;
pub const GOLD_LEADERSHIPS_MIN: usize = 3;
pub const MAX_EXPERIENCE_TIER: u8 = 3;
pub const IRON_OPERATOR_LEVEL: u32 = 10;

pub const RATING_STAR_SLUGS: [&str; 5] = [
    "rating_star_1",
    "rating_star_2",
    "rating_star_3",
    "rating_star_4",
    "rating_star_5",
];

pub fn specialty_slug(category: WeaponCategory) -> &'static str {
    match category {
        WeaponCategory::Assault => "specialty_assault",
        WeaponCategory::Dmr => "specialty_dmr",
        WeaponCategory::Sniper => "specialty_sniper",
        WeaponCategory::Support => "specialty_support",
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Grouping used by the catalog and in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeFamily {
    Rating,
    Rank,
    Specialty,
    Mastery,
    Arsenal,
    Loadout,
    Financial,
    Logistics,
    Maintenance,
    Mission,
    Personal,
    Capstone,
}

/// How a rule produces slugs
#[derive(Clone, Copy)]
pub enum RuleKind {
    /// One fixed slug, granted when the predicate holds
    Single {
        slug: &'static str,
        check: fn(&EvaluationContext<'_>) -> bool,
    },
    /// Slugs computed from the context, with the full list of possible outputs
    Derived {
        produce: fn(&EvaluationContext<'_>) -> Vec<&'static str>,
        candidates: fn() -> Vec<&'static str>,
    },
}

#[derive(Clone, Copy)]
pub struct BadgeRule {
    pub name: &'static str,
    pub family: BadgeFamily,
    pub kind: RuleKind,
}

impl BadgeRule {
    const fn single(
        family: BadgeFamily,
        slug: &'static str,
        check: fn(&EvaluationContext<'_>) -> bool,
    ) -> Self {
        Self {
            name: slug,
            family,
            kind: RuleKind::Single { slug, check },
        }
    }

    const fn derived(
        name: &'static str,
        family: BadgeFamily,
        produce: fn(&EvaluationContext<'_>) -> Vec<&'static str>,
        candidates: fn() -> Vec<&'static str>,
    ) -> Self {
        Self {
            name,
            family,
            kind: RuleKind::Derived { produce, candidates },
        }
    }

    /// Slugs this rule grants in the given context
    pub fn apply(&self, ctx: &EvaluationContext<'_>) -> Vec<&'static str> {
        match self.kind {
            RuleKind::Single { slug, check } => {
                if check(ctx) {
                    vec![slug]
                } else {
                    Vec::new()
                }
            }
            RuleKind::Derived { produce, .. } => produce(ctx),
        }
    }

    /// Every slug this rule could ever grant
    pub fn candidates(&self) -> Vec<&'static str> {
        match self.kind {
            RuleKind::Single { slug, .. } => vec![slug],
            RuleKind::Derived { candidates, .. } => candidates(),
        }
    }
}

impl std::fmt::Debug for BadgeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BadgeRule")
            .field("name", &self.name)
            .field("family", &self.family)
            .finish()
    }
}

use BadgeFamily::*;

/// All rules, in evaluation order
pub static BADGE_RULES: &[BadgeRule] = &[
    // Ranks, ratings and specialties
    BadgeRule::derived("rating_tier", Rating, rating_tier, rating_tier_candidates),
    BadgeRule::derived("rank", BadgeFamily::Rank, rank, rank_candidates),
    BadgeRule::derived("specialty", Specialty, specialty, specialty_candidates),
    BadgeRule::derived("skill_mastery", Mastery, skill_mastery, mastery_candidates),
    // Arsenal
    BadgeRule::single(Arsenal, "arsenal_collector", arsenal_collector),
    BadgeRule::single(Arsenal, "high_power_unit", high_power_unit),
    BadgeRule::single(Arsenal, "certified_sniper", certified_sniper),
    BadgeRule::single(Arsenal, "verified_arsenal", verified_arsenal),
    BadgeRule::single(Arsenal, "armorer_apprentice", armorer_apprentice),
    BadgeRule::single(Arsenal, "well_maintained", well_maintained),
    BadgeRule::single(Arsenal, "arsenal_backup_ready", arsenal_backup_ready),
    BadgeRule::single(Arsenal, "arsenal_pistolero", arsenal_pistolero),
    // Loadout
    BadgeRule::single(Loadout, "standard_operator", standard_operator),
    BadgeRule::single(Loadout, "tactical_chameleon", tactical_chameleon),
    BadgeRule::single(Loadout, "pmc_expert", pmc_expert),
    // Financial
    BadgeRule::single(Financial, "active_standing", active_standing),
    BadgeRule::single(Financial, "generous_contributor", generous_contributor),
    BadgeRule::single(Financial, "punctual_operator", punctual_operator),
    // Logistics
    BadgeRule::single(Logistics, "mobile_unit", mobile_unit),
    BadgeRule::single(Logistics, "logistics_specialist", logistics_specialist),
    BadgeRule::single(Logistics, "road_captain", road_captain),
    BadgeRule::single(Logistics, "hospitality_host", hospitality_host),
    BadgeRule::single(Logistics, "team_ambassador", team_ambassador),
    // Maintenance history
    BadgeRule::single(Maintenance, "bench_master", bench_master),
    BadgeRule::single(Maintenance, "combat_engineer", combat_engineer),
    BadgeRule::single(Maintenance, "upgrade_expert", upgrade_expert),
    BadgeRule::single(Maintenance, "detailed_tech", detailed_tech),
    // Missions
    BadgeRule::single(Mission, "mission_veteran", mission_veteran),
    BadgeRule::single(Mission, "mission_reporter_silver", mission_reporter),
    BadgeRule::single(Mission, "mission_perfect_attendance", mission_perfect_attendance),
    BadgeRule::single(Mission, "mission_leader_gold", mission_leader_gold),
    // Personal, health and legacy
    BadgeRule::single(Personal, "blood_donor", |c| c.operator.is_donor == Some(true)),
    BadgeRule::single(Personal, "health_protected", |c| c.operator.health_plan == Some(true)),
    BadgeRule::single(Personal, "federated_operator", |c| has_text(&c.operator.number_fdba)),
    BadgeRule::single(Personal, "safety_first", |c| c.operator.has_medical_notes()),
    BadgeRule::single(Personal, "social_media_elite", |c| has_text(&c.operator.instagram)),
    BadgeRule::single(Personal, "camera_ready", |c| c.operator.media_consent == Some(true)),
    BadgeRule::single(Personal, "prestige_master", |c| c.operator.prestige > 0),
    BadgeRule::single(Personal, "birthday_warrior", birthday_warrior),
    BadgeRule::single(Personal, "pioneer_member", pioneer_member),
    BadgeRule::single(Personal, "terms_compliant", |c| c.operator.terms_accepted == Some(true)),
    BadgeRule::single(Personal, "profile_storyteller", |c| has_text(&c.operator.quote)),
    BadgeRule::single(Personal, "seasoned_veteran", |c| {
        c.operator.experience == Some(MAX_EXPERIENCE_TIER)
    }),
    BadgeRule::single(Personal, "emergency_ready", |c| has_text(&c.operator.emergency_contact)),
    BadgeRule::single(Personal, "weekend_warrior", |c| {
        c.operator.availability == Some(Availability::Both)
    }),
    BadgeRule::single(Personal, "specialized_professional", |c| has_text(&c.operator.profession)),
    BadgeRule::single(Personal, "blood_type_ready", |c| {
        has_text(&c.operator.blood_type) && has_text(&c.operator.emergency_contact)
    }),
    // Capstone
    BadgeRule::single(Capstone, "iron_operator", iron_operator),
];

// ============================================================================
// Derived slugs
// ============================================================================

fn rating_tier(ctx: &EvaluationContext<'_>) -> Vec<&'static str> {
    match ctx.operator.rating {
        n @ 1..=5 => vec![RATING_STAR_SLUGS[(n - 1) as usize]],
        _ => Vec::new(),
    }
}

fn rating_tier_candidates() -> Vec<&'static str> {
    RATING_STAR_SLUGS.to_vec()
}

fn rank(ctx: &EvaluationContext<'_>) -> Vec<&'static str> {
    Rank::from_level(ctx.operator.level)
        .map(|r| vec![r.slug()])
        .unwrap_or_default()
}

fn rank_candidates() -> Vec<&'static str> {
    RANK_BANDS.iter().map(|(_, _, r)| r.slug()).collect()
}

fn specialty(ctx: &EvaluationContext<'_>) -> Vec<&'static str> {
    ctx.operator
        .category
        .map(|c| vec![specialty_slug(c)])
        .unwrap_or_default()
}

fn specialty_candidates() -> Vec<&'static str> {
    WeaponCategory::ALL.into_iter().map(specialty_slug).collect()
}

fn skill_mastery(ctx: &EvaluationContext<'_>) -> Vec<&'static str> {
    ctx.skills
        .mastered(ctx.config.ratings.mastery_threshold)
        .into_iter()
        .map(SkillAttribute::mastery_slug)
        .collect()
}

fn mastery_candidates() -> Vec<&'static str> {
    SkillAttribute::ALL.into_iter().map(SkillAttribute::mastery_slug).collect()
}

// ============================================================================
// Arsenal
// ============================================================================

fn arsenal_collector(ctx: &EvaluationContext<'_>) -> bool {
    ctx.operator.arsenal.len() >= ARSENAL_COLLECTOR_MIN
}

fn high_power_unit(ctx: &EvaluationContext<'_>) -> bool {
    ctx.operator
        .arsenal
        .iter()
        .any(|a| a.fps.unwrap_or(0) > HIGH_POWER_FPS)
}

fn certified_sniper(ctx: &EvaluationContext<'_>) -> bool {
    ctx.operator
        .arsenal
        .iter()
        .any(|a| a.category == Some(WeaponCategory::Sniper))
}

fn verified_arsenal(ctx: &EvaluationContext<'_>) -> bool {
    ctx.operator.arsenal.iter().any(|a| a.has_invoice())
}

fn armorer_apprentice(ctx: &EvaluationContext<'_>) -> bool {
    ctx.operator.arsenal.iter().any(|a| a.maintained_at.is_some())
}

fn well_maintained(ctx: &EvaluationContext<'_>) -> bool {
    let arsenal = &ctx.operator.arsenal;
    !arsenal.is_empty() && arsenal.iter().all(|a| a.maintained_at.is_some())
}

fn arsenal_backup_ready(ctx: &EvaluationContext<'_>) -> bool {
    let window = ctx.config.legacy.backup_window_days;
    ctx.operator
        .arsenal
        .iter()
        .filter(|a| a.is_secondary)
        .filter_map(|a| a.maintained_at)
        .any(|at| (ctx.now - at).num_days() <= window)
}

fn arsenal_pistolero(ctx: &EvaluationContext<'_>) -> bool {
    ctx.operator.arsenal.iter().filter(|a| a.is_secondary).count() >= PISTOLERO_MIN
}

// ============================================================================
// Loadout
// ============================================================================

fn complete_sets(ctx: &EvaluationContext<'_>) -> usize {
    ctx.operator
        .loadout
        .iter()
        .filter(|l| l.is_complete())
        .count()
}

fn standard_operator(ctx: &EvaluationContext<'_>) -> bool {
    complete_sets(ctx) >= 1
}

fn tactical_chameleon(ctx: &EvaluationContext<'_>) -> bool {
    complete_sets(ctx) >= ctx.config.loadout.min_complete_uniforms.max(1)
}

fn pmc_expert(ctx: &EvaluationContext<'_>) -> bool {
    let exempt = &ctx.config.loadout.pmc_exceptions;
    ctx.operator
        .loadout
        .iter()
        .filter(|l: &&LoadoutSet| l.type_uniform == UniformType::Pmc)
        .any(|l| l.is_complete_except(exempt))
}

// ============================================================================
// Financial
// ============================================================================

fn active_standing(ctx: &EvaluationContext<'_>) -> bool {
    let payments = &ctx.records.payments;
    !payments.is_empty() && !payments.iter().any(|p| p.is_delinquent(ctx.now))
}

fn generous_contributor(ctx: &EvaluationContext<'_>) -> bool {
    ctx.records
        .payments
        .iter()
        .any(|p| p.category == PaymentCategory::Goal && p.status == PaymentStatus::Paid)
}

fn punctual_operator(ctx: &EvaluationContext<'_>) -> bool {
    ctx.records.payments.iter().any(|p| p.is_punctual())
}

// ============================================================================
// Logistics
// ============================================================================

fn mobile_unit(ctx: &EvaluationContext<'_>) -> bool {
    !ctx.records.vehicles.is_empty()
}

fn logistics_specialist(ctx: &EvaluationContext<'_>) -> bool {
    mobile_unit(ctx) && ctx.own_carpools >= 1
}

fn road_captain(ctx: &EvaluationContext<'_>) -> bool {
    mobile_unit(ctx) && ctx.own_carpools >= ROAD_CAPTAIN_MIN
}

fn hospitality_host(ctx: &EvaluationContext<'_>) -> bool {
    !ctx.records.visitors.is_empty()
}

fn team_ambassador(ctx: &EvaluationContext<'_>) -> bool {
    ctx.records.visitors.len() >= AMBASSADOR_MIN
}

// ============================================================================
// Maintenance history
// ============================================================================

fn completed_maintenance(ctx: &EvaluationContext<'_>) -> usize {
    ctx.records
        .maintenance
        .iter()
        .filter(|m| m.is_completed())
        .count()
}

fn bench_master(ctx: &EvaluationContext<'_>) -> bool {
    completed_maintenance(ctx) >= BENCH_MASTER_MIN
}

fn combat_engineer(ctx: &EvaluationContext<'_>) -> bool {
    completed_maintenance(ctx) >= COMBAT_ENGINEER_MIN
}

fn upgrade_expert(ctx: &EvaluationContext<'_>) -> bool {
    ctx.records
        .maintenance
        .iter()
        .any(|m| m.is_completed() && m.includes(MaintenanceKind::Upgrade))
}

fn detailed_tech(ctx: &EvaluationContext<'_>) -> bool {
    ctx.records
        .maintenance
        .iter()
        .any(|m| m.is_completed() && m.report_len() > DETAILED_REPORT_LEN)
}

// ============================================================================
// Missions
// ============================================================================

fn mission_veteran(ctx: &EvaluationContext<'_>) -> bool {
    ctx.attended_missions().count() >= MISSION_VETERAN_MIN
}

fn mission_reporter(ctx: &EvaluationContext<'_>) -> bool {
    ctx.led_missions()
        .filter(|s| s.report_len() > MISSION_REPORT_LEN)
        .count()
        >= MISSION_REPORTS_MIN
}

fn mission_perfect_attendance(ctx: &EvaluationContext<'_>) -> bool {
    let (year, month) = (ctx.now.year(), ctx.now.month());
    ctx.attended_missions()
        .filter_map(|s| s.date)
        .filter(|d| d.year() == year && d.month() == month)
        .count()
        >= MONTHLY_ATTENDANCE_MIN
}

fn mission_leader_gold(ctx: &EvaluationContext<'_>) -> bool {
    ctx.led_missions()
        .filter(|s| {
            s.attendance_ratio()
                .map(|r| r >= LEADER_ATTENDANCE_RATIO)
                .unwrap_or(false)
        })
        .count()
        >= GOLD_LEADERSHIPS_MIN
}

// ============================================================================
// Personal and legacy
// ============================================================================

fn birthday_warrior(ctx: &EvaluationContext<'_>) -> bool {
    ctx.operator
        .birth_date
        .map(|b| b.month() == ctx.now.month() && b.day() == ctx.now.day())
        .unwrap_or(false)
}

fn pioneer_member(ctx: &EvaluationContext<'_>) -> bool {
    ctx.operator
        .created_at
        .map(|c| c.date_naive() < ctx.config.legacy.pioneer_cutoff)
        .unwrap_or(false)
}

fn iron_operator(ctx: &EvaluationContext<'_>) -> bool {
    let op = ctx.operator;
    op.level >= IRON_OPERATOR_LEVEL && op.rating == 5 && op.is_profile_complete()
}
