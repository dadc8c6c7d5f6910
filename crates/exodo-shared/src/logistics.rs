//! Vehicles, carpools and visitors.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    #[default]
    Car,
    Motorcycle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    pub id: String,
    /// Owner operator id
    pub driver: String,
    #[serde(rename = "type")]
    pub kind: VehicleKind,
    pub brand: String,
    pub model: String,
    pub color: Option<String>,
    pub total_seats: u32,
}

/// A ride offered with one vehicle to one event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Carpool {
    pub id: String,
    pub vehicle: String,
    pub event: String,
    pub available_seats: u32,
    pub departure_point: String,
    pub departure_time: String,
}

/// A guest brought by an operator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visitor {
    pub id: String,
    pub name: String,
    pub codename: String,
    pub team: String,
    /// Operator who brought the visitor
    pub operator: String,
    pub phone: String,
    pub status: Option<bool>,
}
