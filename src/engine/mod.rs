mod availability;
mod conflict;
mod error;
mod mutations;
mod pricing;
mod queries;

pub use availability::{free_slots, window_covers};
pub use error::EngineError;
pub use pricing::{breakdown, is_peak_hour, round2, rule_applies};

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use ulid::Ulid;

use crate::model::*;

/// Operating parameters for one facility.
#[derive(Debug, Clone)]
pub struct FacilityConfig {
    /// Bookable grid: one slot per whole hour inside this range.
    pub hours: HourRange,
    /// Unit cap per equipment item in a single booking.
    pub max_equipment_per_item: u32,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            hours: HourRange::new(6, 22),
            max_equipment_per_item: 4,
        }
    }
}

/// Catalogs plus the append-only booking ledger. Everything keeps
/// insertion order; rule evaluation and all listings rely on it.
#[derive(Debug, Default)]
struct FacilityState {
    courts: Vec<Court>,
    equipment: Vec<Equipment>,
    coaches: Vec<Coach>,
    coach_windows: Vec<CoachWindow>,
    rules: Vec<PricingRule>,
    bookings: Vec<Booking>,
}

impl FacilityState {
    fn court(&self, id: Ulid) -> Option<&Court> {
        self.courts.iter().find(|c| c.id == id)
    }

    fn coach(&self, id: Ulid) -> Option<&Coach> {
        self.coaches.iter().find(|c| c.id == id)
    }
}

/// The booking engine: an owned, shareable state container. Queries take
/// the read lock, mutations the write lock, so the write path's
/// check-and-append is one critical section. Share behind `Arc` to serve
/// several callers.
#[derive(Debug, Default)]
pub struct Engine {
    config: FacilityConfig,
    state: RwLock<FacilityState>,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_config(FacilityConfig::default())
    }

    pub fn with_config(config: FacilityConfig) -> Self {
        Self {
            config,
            state: RwLock::new(FacilityState::default()),
        }
    }

    pub fn config(&self) -> &FacilityConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, FacilityState> {
        self.state.read().expect("state lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, FacilityState> {
        self.state.write().expect("state lock poisoned")
    }
}
