//! Storage backend seam.
//!
//! The progression pass reads an operator and its related records and
//! writes back one partial update. `Backend` abstracts the document store
//! so passes can run against the real service or against `MemoryBackend`
//! in tests.

use async_trait::async_trait;
use exodo_shared::{
    Carpool, ExodoError, MaintenanceRecord, OperatorPatch, OperatorSnapshot, PaymentRecord,
    Rating, RatingPage, Result, ScheduleEvent, Vehicle, Visitor,
};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

// Resource names used in errors and for failure injection
pub const OPERATORS: &str = "operators";
pub const RATINGS: &str = "ratings";
pub const PAYMENTS: &str = "payments";
pub const VEHICLES: &str = "vehicles";
pub const VISITORS: &str = "visitors";
pub const MAINTENANCE: &str = "maintenance";
pub const CARPOOLS: &str = "carpools";
pub const SCHEDULES: &str = "schedules";
pub const PERSIST: &str = "persist";

/// Read and write access to the document store
#[async_trait]
pub trait Backend: Send + Sync {
    async fn fetch_operator(&self, operator_id: &str) -> Result<OperatorSnapshot>;

    /// Every vote whose target is the operator
    async fn fetch_ratings_for_target(&self, operator_id: &str) -> Result<RatingPage>;

    async fn fetch_payments(&self, operator_id: &str) -> Result<Vec<PaymentRecord>>;

    /// Vehicles the operator drives
    async fn fetch_vehicles(&self, operator_id: &str) -> Result<Vec<Vehicle>>;

    /// Visitors the operator brought
    async fn fetch_visitors(&self, operator_id: &str) -> Result<Vec<Visitor>>;

    async fn fetch_maintenance(&self, operator_id: &str) -> Result<Vec<MaintenanceRecord>>;

    /// Carpools offered with any of the given vehicles
    async fn fetch_carpools(&self, vehicle_ids: &[String]) -> Result<Vec<Carpool>>;

    /// Missions the operator was assigned to, attended or led
    async fn fetch_schedules(&self, operator_id: &str) -> Result<Vec<ScheduleEvent>>;

    /// Apply a partial update to the stored operator
    async fn persist_operator(&self, operator_id: &str, patch: &OperatorPatch) -> Result<()>;
}

// ============================================================================
// In-memory backend
// ============================================================================

#[derive(Debug, Default)]
struct Store {
    operators: HashMap<String, OperatorSnapshot>,
    ratings: Vec<Rating>,
    payments: Vec<PaymentRecord>,
    vehicles: Vec<Vehicle>,
    visitors: Vec<Visitor>,
    maintenance: Vec<MaintenanceRecord>,
    carpools: Vec<Carpool>,
    schedules: Vec<ScheduleEvent>,
}

fn ensure_id(id: &mut String) {
    if id.is_empty() {
        *id = Uuid::new_v4().to_string();
    }
}

/// Process-local backend with failure injection
#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: RwLock<Store>,
    failing: RwLock<HashSet<&'static str>>,
    writes: RwLock<Vec<(String, OperatorPatch)>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call touching `resource` fail until cleared
    pub async fn fail_on(&self, resource: &'static str) {
        self.failing.write().await.insert(resource);
    }

    pub async fn clear_failures(&self) {
        self.failing.write().await.clear();
    }

    async fn check(&self, resource: &'static str) -> Result<()> {
        if self.failing.read().await.contains(resource) {
            return Err(ExodoError::fetch(resource, "injected failure"));
        }
        Ok(())
    }

    /// Every successful write, oldest first
    pub async fn writes(&self) -> Vec<(String, OperatorPatch)> {
        self.writes.read().await.clone()
    }

    pub async fn operator(&self, operator_id: &str) -> Option<OperatorSnapshot> {
        self.store.read().await.operators.get(operator_id).cloned()
    }

    pub async fn insert_operator(&self, mut operator: OperatorSnapshot) -> String {
        ensure_id(&mut operator.id);
        let id = operator.id.clone();
        self.store.write().await.operators.insert(id.clone(), operator);
        id
    }

    pub async fn add_rating(&self, mut rating: Rating) {
        ensure_id(&mut rating.id);
        self.store.write().await.ratings.push(rating);
    }

    pub async fn add_payment(&self, mut payment: PaymentRecord) {
        ensure_id(&mut payment.id);
        self.store.write().await.payments.push(payment);
    }

    pub async fn add_vehicle(&self, mut vehicle: Vehicle) -> String {
        ensure_id(&mut vehicle.id);
        let id = vehicle.id.clone();
        self.store.write().await.vehicles.push(vehicle);
        id
    }

    pub async fn add_visitor(&self, mut visitor: Visitor) {
        ensure_id(&mut visitor.id);
        self.store.write().await.visitors.push(visitor);
    }

    pub async fn add_maintenance(&self, mut record: MaintenanceRecord) {
        ensure_id(&mut record.id);
        self.store.write().await.maintenance.push(record);
    }

    pub async fn add_carpool(&self, mut carpool: Carpool) {
        ensure_id(&mut carpool.id);
        self.store.write().await.carpools.push(carpool);
    }

    pub async fn add_schedule(&self, mut schedule: ScheduleEvent) {
        ensure_id(&mut schedule.id);
        self.store.write().await.schedules.push(schedule);
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn fetch_operator(&self, operator_id: &str) -> Result<OperatorSnapshot> {
        self.check(OPERATORS).await?;
        self.store
            .read()
            .await
            .operators
            .get(operator_id)
            .cloned()
            .ok_or_else(|| ExodoError::not_found("operator", operator_id))
    }

    async fn fetch_ratings_for_target(&self, operator_id: &str) -> Result<RatingPage> {
        self.check(RATINGS).await?;
        let store = self.store.read().await;
        let records = store
            .ratings
            .iter()
            .filter(|r| r.target == operator_id)
            .cloned()
            .collect();
        Ok(RatingPage::from_records(records))
    }

    async fn fetch_payments(&self, operator_id: &str) -> Result<Vec<PaymentRecord>> {
        self.check(PAYMENTS).await?;
        let store = self.store.read().await;
        Ok(store
            .payments
            .iter()
            .filter(|p| p.operator == operator_id)
            .cloned()
            .collect())
    }

    async fn fetch_vehicles(&self, operator_id: &str) -> Result<Vec<Vehicle>> {
        self.check(VEHICLES).await?;
        let store = self.store.read().await;
        Ok(store
            .vehicles
            .iter()
            .filter(|v| v.driver == operator_id)
            .cloned()
            .collect())
    }

    async fn fetch_visitors(&self, operator_id: &str) -> Result<Vec<Visitor>> {
        self.check(VISITORS).await?;
        let store = self.store.read().await;
        Ok(store
            .visitors
            .iter()
            .filter(|v| v.operator == operator_id)
            .cloned()
            .collect())
    }

    async fn fetch_maintenance(&self, operator_id: &str) -> Result<Vec<MaintenanceRecord>> {
        self.check(MAINTENANCE).await?;
        let store = self.store.read().await;
        Ok(store
            .maintenance
            .iter()
            .filter(|m| m.operator == operator_id)
            .cloned()
            .collect())
    }

    async fn fetch_carpools(&self, vehicle_ids: &[String]) -> Result<Vec<Carpool>> {
        self.check(CARPOOLS).await?;
        if vehicle_ids.is_empty() {
            return Ok(Vec::new());
        }
        let store = self.store.read().await;
        Ok(store
            .carpools
            .iter()
            .filter(|c| vehicle_ids.contains(&c.vehicle))
            .cloned()
            .collect())
    }

    async fn fetch_schedules(&self, operator_id: &str) -> Result<Vec<ScheduleEvent>> {
        self.check(SCHEDULES).await?;
        let store = self.store.read().await;
        Ok(store
            .schedules
            .iter()
            .filter(|s| {
                s.led_by(operator_id)
                    || s.attended_by(operator_id)
                    || s.operators.iter().any(|id| id == operator_id)
            })
            .cloned()
            .collect())
    }

    async fn persist_operator(&self, operator_id: &str, patch: &OperatorPatch) -> Result<()> {
        if self.failing.read().await.contains(PERSIST) {
            return Err(ExodoError::persist(operator_id, "injected failure"));
        }
        let mut store = self.store.write().await;
        let operator = store
            .operators
            .get_mut(operator_id)
            .ok_or_else(|| ExodoError::persist(operator_id, "operator does not exist"))?;
        operator.apply(patch);
        drop(store);

        debug!("Persisted {:?} for {}", patch, operator_id);
        self.writes
            .write()
            .await
            .push((operator_id.to_string(), patch.clone()));
        Ok(())
    }
}
