//! Badges Module
//!
//! - `rules`: the closed registry of badge predicates
//! - `evaluator`: runs the registry and unions with held badges
//! - `catalog`: display metadata for every slug

pub mod catalog;
pub mod evaluator;
pub mod rules;

pub use catalog::{all_badges, find};
pub use evaluator::{evaluate, evaluate_with, Evaluation, EvaluationContext, RelatedRecords};
pub use rules::{BadgeFamily, BadgeRule, RuleKind, BADGE_RULES};
