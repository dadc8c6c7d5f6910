//! Progression Module
//!
//! XP, levels, prestige and ranks for operators.
//!
//! - `levels`: level curve and the XP accumulator (`add_xp`)
//! - `ranks`: level bands mapped to military ranks with frozen slugs
//! - `awards`: flat XP granted per triggering action

pub mod awards;
pub mod levels;
pub mod ranks;

pub use awards::{AwardTable, EventKind, Trigger};
pub use levels::{add_xp, LevelCurve, PRESTIGE_BADGE};
pub use ranks::{Rank, RANK_BANDS};
