//! Exodo Common - progression engine for the Exodo team platform
//!
//! XP, levels, prestige, ranks and badges for airsoft team operators.
//! A trigger (check-in, payment, mission, profile save) starts one pass
//! that reads the operator with its related records, awards XP, evaluates
//! badges and writes the result back in a single update.

pub mod backend;
pub mod badges;
pub mod config;
pub mod enrollment;
pub mod identity;
pub mod logging;
pub mod orchestrator;
pub mod progression;
pub mod session;
pub mod skills;

pub use backend::{Backend, MemoryBackend};
pub use badges::{all_badges, evaluate, Evaluation, RelatedRecords};
pub use config::ExodoConfig;
pub use enrollment::{enroll, Enrollment};
pub use identity::{is_valid_cpf, IdentityCheck};
pub use orchestrator::{Orchestrator, PassOutcome};
pub use progression::{add_xp, AwardTable, EventKind, LevelCurve, Rank, Trigger};
pub use session::Session;
pub use skills::{SkillAttribute, SkillProfile, SkillTier};
