use chrono::Utc;
use tracing::info;
use ulid::Ulid;

use crate::model::*;

use super::conflict::{
    check_coach_bookable, check_equipment_selection, check_no_conflict, check_slot_in_hours,
    validate_coach, validate_court, validate_equipment, validate_rule, validate_window,
};
use super::pricing::breakdown;
use super::{Engine, EngineError};

impl Engine {
    /// Validate the caller's selection against live state and commit it to
    /// the ledger. The conflict check and the append run under one write
    /// lock, so two racing callers can never take the same slot.
    ///
    /// On success the selection is reset back to just its date, ready for
    /// the next booking.
    pub fn confirm_booking(
        &self,
        user_id: Ulid,
        selection: &mut Selection,
    ) -> Result<Booking, EngineError> {
        let Some(court_id) = selection.court_id else {
            return Err(EngineError::IncompleteSelection("court"));
        };
        let Some(slot) = selection.slot else {
            return Err(EngineError::IncompleteSelection("time slot"));
        };
        check_slot_in_hours(self.config.hours, slot)?;

        let mut state = self.write();

        let court = state
            .court(court_id)
            .ok_or(EngineError::NotFound(court_id))?
            .clone();
        if !court.is_active {
            return Err(EngineError::Inactive(court_id));
        }
        if let Err(e) = check_no_conflict(&state.bookings, court_id, selection.date, slot) {
            tracing::warn!("rejecting booking, slot {slot} on {} already taken", selection.date);
            return Err(e);
        }
        for sel in &selection.equipment {
            check_equipment_selection(&state.equipment, sel, self.config.max_equipment_per_item)?;
        }
        if let Some(coach_id) = selection.coach_id {
            check_coach_bookable(
                &state.coaches,
                &state.coach_windows,
                coach_id,
                selection.date,
                &slot.range(),
            )?;
        }

        // Price and snapshot from the same state the checks ran against.
        let coach = selection.coach_id.and_then(|id| state.coach(id)).cloned();
        let priced = breakdown(
            &court,
            selection.date,
            slot,
            &state.rules,
            &state.equipment,
            &selection.equipment,
            coach.as_ref(),
        );

        let booking = Booking {
            id: Ulid::new(),
            user_id,
            court_id,
            date: selection.date,
            slot,
            status: BookingStatus::Confirmed,
            total_price: priced.total,
            equipment: selection.equipment.clone(),
            coach_id: selection.coach_id,
            court,
            coach,
            breakdown: priced,
            created_at: Utc::now(),
        };
        state.bookings.push(booking.clone());
        info!(
            "confirmed booking {} for {} {} on court {court_id}",
            booking.id, booking.date, booking.slot
        );
        selection.clear();
        Ok(booking)
    }

    /// Cancelling is idempotent: a repeat cancel of the same booking is Ok.
    /// Completed bookings stay completed.
    pub fn cancel_booking(&self, id: Ulid) -> Result<(), EngineError> {
        let mut state = self.write();
        let Some(booking) = state.bookings.iter_mut().find(|b| b.id == id) else {
            return Err(EngineError::NotFound(id));
        };
        match booking.status {
            BookingStatus::Cancelled => Ok(()),
            from if from.can_transition_to(BookingStatus::Cancelled) => {
                booking.status = BookingStatus::Cancelled;
                info!("cancelled booking {id}");
                Ok(())
            }
            from => Err(EngineError::InvalidTransition {
                from,
                to: BookingStatus::Cancelled,
            }),
        }
    }

    /// Mark a finished session. Only confirmed bookings complete; repeat
    /// completion is an error, unlike cancel.
    pub fn complete_booking(&self, id: Ulid) -> Result<(), EngineError> {
        let mut state = self.write();
        let Some(booking) = state.bookings.iter_mut().find(|b| b.id == id) else {
            return Err(EngineError::NotFound(id));
        };
        if !booking.status.can_transition_to(BookingStatus::Completed) {
            return Err(EngineError::InvalidTransition {
                from: booking.status,
                to: BookingStatus::Completed,
            });
        }
        booking.status = BookingStatus::Completed;
        info!("completed booking {id}");
        Ok(())
    }

    /// Validated equipment toggle for an in-progress selection.
    /// Quantity 0 clears the line.
    pub fn select_equipment(
        &self,
        selection: &mut Selection,
        equipment_id: Ulid,
        quantity: u32,
    ) -> Result<(), EngineError> {
        let state = self.read();
        if quantity > 0 {
            let sel = EquipmentSelection { equipment_id, quantity };
            check_equipment_selection(&state.equipment, &sel, self.config.max_equipment_per_item)?;
        } else if !state.equipment.iter().any(|e| e.id == equipment_id) {
            return Err(EngineError::NotFound(equipment_id));
        }
        selection.set_equipment_quantity(equipment_id, quantity);
        Ok(())
    }

    // ── Admin surface ─────────────────────────────────────

    /// Whole-record upsert keyed by id. Existing records are replaced in
    /// place, so catalog order survives edits; new records append.
    pub fn replace_court(&self, court: Court) -> Result<(), EngineError> {
        validate_court(&court)?;
        let mut state = self.write();
        tracing::debug!("court upsert: {} {}", court.id, court.name);
        upsert_by_id(&mut state.courts, court, |c| c.id);
        Ok(())
    }

    pub fn replace_equipment(&self, item: Equipment) -> Result<(), EngineError> {
        validate_equipment(&item)?;
        let mut state = self.write();
        tracing::debug!("equipment upsert: {} {}", item.id, item.name);
        upsert_by_id(&mut state.equipment, item, |e| e.id);
        Ok(())
    }

    pub fn replace_coach(&self, coach: Coach) -> Result<(), EngineError> {
        validate_coach(&coach)?;
        let mut state = self.write();
        tracing::debug!("coach upsert: {} {}", coach.id, coach.name);
        upsert_by_id(&mut state.coaches, coach, |c| c.id);
        Ok(())
    }

    pub fn replace_rule(&self, rule: PricingRule) -> Result<(), EngineError> {
        validate_rule(&rule)?;
        let mut state = self.write();
        tracing::debug!("rule upsert: {} {}", rule.id, rule.name);
        upsert_by_id(&mut state.rules, rule, |r| r.id);
        Ok(())
    }

    /// Insert-only variant for new rules; a clashing id is an error rather
    /// than a silent replace.
    pub fn add_rule(&self, rule: PricingRule) -> Result<(), EngineError> {
        validate_rule(&rule)?;
        let mut state = self.write();
        if state.rules.iter().any(|r| r.id == rule.id) {
            return Err(EngineError::AlreadyExists(rule.id));
        }
        tracing::debug!("rule added: {} {}", rule.id, rule.name);
        state.rules.push(rule);
        Ok(())
    }

    /// Replace a coach's weekly windows wholesale.
    pub fn set_coach_windows(
        &self,
        coach_id: Ulid,
        windows: Vec<CoachWindow>,
    ) -> Result<(), EngineError> {
        for w in &windows {
            if w.coach_id != coach_id {
                return Err(EngineError::InvalidRecord("window bound to another coach"));
            }
            validate_window(w)?;
        }
        let mut state = self.write();
        if state.coach(coach_id).is_none() {
            return Err(EngineError::NotFound(coach_id));
        }
        state.coach_windows.retain(|w| w.coach_id != coach_id);
        state.coach_windows.extend(windows);
        tracing::debug!("coach {coach_id} windows replaced");
        Ok(())
    }
}

fn upsert_by_id<T>(list: &mut Vec<T>, item: T, id_of: fn(&T) -> Ulid) {
    let id = id_of(&item);
    if let Some(existing) = list.iter_mut().find(|x| id_of(x) == id) {
        *existing = item;
    } else {
        list.push(item);
    }
}
