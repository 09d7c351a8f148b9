use chrono::NaiveDate;
use ulid::Ulid;

use crate::model::*;

use super::Engine;
use super::availability::{free_slots, window_covers};
use super::pricing::{breakdown, is_peak_hour};

impl Engine {
    /// Catalog listings hand out clones in insertion order; the ledger is
    /// the single source of truth and never leaks by reference.
    pub fn courts(&self) -> Vec<Court> {
        self.read().courts.clone()
    }

    pub fn equipment(&self) -> Vec<Equipment> {
        self.read().equipment.clone()
    }

    pub fn coaches(&self) -> Vec<Coach> {
        self.read().coaches.clone()
    }

    pub fn rules(&self) -> Vec<PricingRule> {
        self.read().rules.clone()
    }

    pub fn coach_windows(&self, coach_id: Ulid) -> Vec<CoachWindow> {
        self.read()
            .coach_windows
            .iter()
            .filter(|w| w.coach_id == coach_id)
            .cloned()
            .collect()
    }

    /// Most recent first. The ledger is append-only, so reverse insertion
    /// order is creation order.
    pub fn bookings(&self) -> Vec<Booking> {
        self.read().bookings.iter().rev().cloned().collect()
    }

    pub fn booking(&self, id: Ulid) -> Option<Booking> {
        self.read().bookings.iter().find(|b| b.id == id).cloned()
    }

    /// Open slots for one court on one date, ascending. Unknown or retired
    /// courts expose no slots; the write path rejects them instead.
    pub fn free_slots(&self, court_id: Ulid, date: NaiveDate) -> Vec<Slot> {
        let state = self.read();
        match state.court(court_id) {
            Some(court) if court.is_active => {
                free_slots(court_id, date, self.config.hours, &state.bookings)
            }
            _ => Vec::new(),
        }
    }

    /// True if the coach works a window fully containing `range` on that
    /// weekday. Unknown or retired coaches are never available.
    pub fn coach_available(&self, coach_id: Ulid, date: NaiveDate, range: HourRange) -> bool {
        let state = self.read();
        match state.coach(coach_id) {
            Some(coach) if coach.is_active => {
                window_covers(&state.coach_windows, coach_id, weekday_index(date), &range)
            }
            _ => false,
        }
    }

    pub fn is_peak_hour(&self, hour: Hour) -> bool {
        is_peak_hour(&self.read().rules, hour)
    }

    /// Quote the selection as it stands. Incomplete selections (or ones
    /// pointing at an unknown or retired court) get the all-zero
    /// placeholder, never an error: quoting runs on every edit.
    pub fn compute_breakdown(&self, selection: &Selection) -> PriceBreakdown {
        let (Some(court_id), Some(slot)) = (selection.court_id, selection.slot) else {
            return PriceBreakdown::default();
        };
        let state = self.read();
        let Some(court) = state.court(court_id).filter(|c| c.is_active) else {
            return PriceBreakdown::default();
        };
        let coach = selection.coach_id.and_then(|id| state.coach(id));
        breakdown(
            court,
            selection.date,
            slot,
            &state.rules,
            &state.equipment,
            &selection.equipment,
            coach,
        )
    }
}
