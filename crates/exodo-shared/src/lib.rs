//! Shared records and types for the Exodo team platform.
//!
//! Plain data shapes read from the document store (operators, arsenal,
//! loadouts, ratings, payments, maintenance, schedules, logistics), the
//! badge set used by the progression engine, and the shared error type.

pub mod arsenal;
pub mod badge;
pub mod error;
pub mod loadout;
pub mod logistics;
pub mod maintenance;
pub mod operator;
pub mod payment;
pub mod rating;
pub mod schedule;
pub mod serde_helpers;

pub use arsenal::{ArsenalItem, WeaponCategory};
pub use badge::{BadgeDefinition, BadgeSet};
pub use error::{ExodoError, Result};
pub use loadout::{LoadoutSet, LoadoutSlot, UniformType};
pub use logistics::{Carpool, Vehicle, VehicleKind, Visitor};
pub use maintenance::{MaintenanceKind, MaintenanceRecord, MaintenanceStatus};
pub use operator::{has_text, Availability, OperatorPatch, OperatorSnapshot, Role};
pub use payment::{PaymentCategory, PaymentRecord, PaymentStatus};
pub use rating::{Rating, RatingPage};
pub use schedule::{ScheduleEvent, ScheduleKind, ScheduleStatus};
