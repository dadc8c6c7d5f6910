//! Progression pass.
//!
//! One pass per trigger and operator:
//!
//! 1. take the operator's lock (one pass per operator at a time)
//! 2. read the operator, then every related collection concurrently
//! 3. grant the flat award for the trigger
//! 4. evaluate badges against the updated snapshot
//! 5. grant badge XP for every newly earned badge
//! 6. write xp, level, prestige and badges back in one partial update
//!
//! Any read failure aborts the pass before anything is written. A pass
//! that changes nothing writes nothing.

use crate::backend::Backend;
use crate::badges::{evaluate, RelatedRecords};
use crate::config::ExodoConfig;
use crate::progression::{add_xp, Trigger};
use chrono::{DateTime, Utc};
use exodo_shared::{OperatorPatch, OperatorSnapshot, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

/// Result of one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassOutcome {
    /// Operator as it stands after the pass
    pub operator: OperatorSnapshot,
    pub flat_xp: u64,
    pub badge_xp: u64,
    /// Slugs earned during this pass, sorted
    pub new_badges: Vec<String>,
    pub levels_gained: u32,
    pub prestige_gained: u32,
    /// False when nothing changed and no write was issued
    pub persisted: bool,
}

pub struct Orchestrator<B: Backend> {
    backend: Arc<B>,
    config: ExodoConfig,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<B: Backend> Orchestrator<B> {
    pub fn new(backend: Arc<B>, config: ExodoConfig) -> Self {
        Self {
            backend,
            config,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    pub fn config(&self) -> &ExodoConfig {
        &self.config
    }

    async fn lock_for(&self, operator_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(operator_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop the operator's lock entry once no pass holds or waits on it
    async fn release_lock(&self, operator_id: &str) {
        let mut locks = self.locks.lock().await;
        if locks
            .get(operator_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(operator_id);
        }
    }

    /// Run a pass now
    pub async fn run(&self, operator_id: &str, trigger: Trigger) -> Result<PassOutcome> {
        self.run_at(operator_id, trigger, Utc::now()).await
    }

    /// Run a pass with an explicit clock
    pub async fn run_at(
        &self,
        operator_id: &str,
        trigger: Trigger,
        now: DateTime<Utc>,
    ) -> Result<PassOutcome> {
        let span = tracing::info_span!(
            "progression.pass",
            pass_id = %Uuid::new_v4(),
            operator = %operator_id,
            trigger = %trigger,
        );

        let result = self.pass(operator_id, trigger, now).instrument(span).await;
        self.release_lock(operator_id).await;
        if let Err(e) = &result {
            warn!(
                "Progression pass for {} ({}) aborted: {}",
                operator_id, trigger, e
            );
        }
        result
    }

    async fn pass(
        &self,
        operator_id: &str,
        trigger: Trigger,
        now: DateTime<Utc>,
    ) -> Result<PassOutcome> {
        let lock = self.lock_for(operator_id).await;
        let _guard = lock.lock().await;

        let before = self.backend.fetch_operator(operator_id).await?;
        let records = self.fetch_records(operator_id).await?;

        let curve = self.config.progression.curve();
        let flat_xp = self.config.awards.amount_for(&trigger);
        let awarded = add_xp(&curve, &before, flat_xp, None);

        let evaluation = evaluate(&awarded, &records, &self.config, now);
        let badge_xp = self
            .config
            .progression
            .badge_xp
            .saturating_mul(evaluation.new_badges.len() as u64);
        let after = add_xp(&curve, &awarded, badge_xp, Some(&evaluation.badges));

        let new_badges = after.badges.added_since(&before.badges);
        let prestige_gained = after.prestige.saturating_sub(before.prestige);
        let levels_gained = {
            let start = curve.level_for_xp(before.xp) as u64;
            let end = prestige_gained as u64 * curve.max_level() as u64 + after.level as u64;
            end.saturating_sub(start).min(u32::MAX as u64) as u32
        };

        let patch = OperatorPatch::between(&before, &after);
        let persisted = if patch.is_empty() {
            debug!("Nothing changed for {}, skipping write", operator_id);
            false
        } else {
            self.backend.persist_operator(operator_id, &patch).await?;
            true
        };

        info!(
            "Pass for {}: +{} flat, +{} badge XP, {} new badges, level {} -> {}",
            operator_id,
            flat_xp,
            badge_xp,
            new_badges.len(),
            before.level,
            after.level
        );

        Ok(PassOutcome {
            operator: after,
            flat_xp,
            badge_xp,
            new_badges,
            levels_gained,
            prestige_gained,
            persisted,
        })
    }

    /// Read every collection the rules need, all or nothing
    async fn fetch_records(&self, operator_id: &str) -> Result<RelatedRecords> {
        let backend = &self.backend;

        let logistics = async {
            let vehicles = backend.fetch_vehicles(operator_id).await?;
            let ids: Vec<String> = vehicles.iter().map(|v| v.id.clone()).collect();
            let carpools = backend.fetch_carpools(&ids).await?;
            Ok::<_, exodo_shared::ExodoError>((vehicles, carpools))
        };

        let (ratings, maintenance, payments, visitors, schedules, (vehicles, carpools)) = tokio::try_join!(
            backend.fetch_ratings_for_target(operator_id),
            backend.fetch_maintenance(operator_id),
            backend.fetch_payments(operator_id),
            backend.fetch_visitors(operator_id),
            backend.fetch_schedules(operator_id),
            logistics,
        )?;

        Ok(RelatedRecords {
            ratings,
            maintenance,
            payments,
            vehicles,
            visitors,
            carpools,
            schedules,
        })
    }
}
