use chrono::NaiveDate;
use rust_decimal::Decimal;
use ulid::Ulid;

use crate::model::*;

use super::EngineError;
use super::availability::window_covers;

// Selection-time guards run under the write lock, so the state they see is
// the state the booking commits against.

pub(crate) fn check_no_conflict(
    bookings: &[Booking],
    court_id: Ulid,
    date: NaiveDate,
    slot: Slot,
) -> Result<(), EngineError> {
    if let Some(existing) = bookings.iter().find(|b| b.blocks_slot(court_id, date, slot)) {
        return Err(EngineError::Conflict(existing.id));
    }
    Ok(())
}

pub(crate) fn check_slot_in_hours(hours: HourRange, slot: Slot) -> Result<(), EngineError> {
    if !hours.contains_hour(slot.start_hour()) {
        return Err(EngineError::OutsideHours(slot));
    }
    Ok(())
}

pub(crate) fn check_equipment_selection(
    catalog: &[Equipment],
    sel: &EquipmentSelection,
    cap: u32,
) -> Result<(), EngineError> {
    let Some(item) = catalog.iter().find(|e| e.id == sel.equipment_id) else {
        return Err(EngineError::NotFound(sel.equipment_id));
    };
    if !item.is_active {
        return Err(EngineError::Inactive(item.id));
    }
    let max = item.quantity_available.min(cap);
    if sel.quantity > max {
        return Err(EngineError::InvalidQuantity {
            requested: sel.quantity,
            max,
        });
    }
    Ok(())
}

pub(crate) fn check_coach_bookable(
    coaches: &[Coach],
    windows: &[CoachWindow],
    coach_id: Ulid,
    date: NaiveDate,
    range: &HourRange,
) -> Result<(), EngineError> {
    let Some(coach) = coaches.iter().find(|c| c.id == coach_id) else {
        return Err(EngineError::NotFound(coach_id));
    };
    if !coach.is_active {
        return Err(EngineError::Inactive(coach.id));
    }
    if !window_covers(windows, coach_id, weekday_index(date), range) {
        return Err(EngineError::CoachUnavailable(coach_id));
    }
    Ok(())
}

// Record-shape guards for the admin surface. Fields are public, so upserts
// re-check what constructors normally guarantee.

pub(crate) fn validate_court(court: &Court) -> Result<(), EngineError> {
    if court.base_price_per_hour < Decimal::ZERO {
        return Err(EngineError::InvalidRecord("negative base price"));
    }
    Ok(())
}

pub(crate) fn validate_equipment(item: &Equipment) -> Result<(), EngineError> {
    if item.price_per_hour < Decimal::ZERO {
        return Err(EngineError::InvalidRecord("negative rental price"));
    }
    if item.quantity_available > item.quantity_total {
        return Err(EngineError::InvalidRecord("available exceeds total stock"));
    }
    Ok(())
}

pub(crate) fn validate_coach(coach: &Coach) -> Result<(), EngineError> {
    if coach.hourly_rate < Decimal::ZERO {
        return Err(EngineError::InvalidRecord("negative hourly rate"));
    }
    Ok(())
}

pub(crate) fn validate_rule(rule: &PricingRule) -> Result<(), EngineError> {
    if rule.kind == RuleKind::Holiday {
        return Err(EngineError::UnsupportedRule(rule.kind));
    }
    if rule.multiplier < Decimal::ZERO {
        return Err(EngineError::InvalidRecord("negative multiplier"));
    }
    if let Some(h) = rule.hours
        && h.start >= h.end
    {
        return Err(EngineError::InvalidRecord("rule hours out of order"));
    }
    if let Some(days) = &rule.days_of_week
        && days.iter().any(|d| *d > 6)
    {
        return Err(EngineError::InvalidRecord("weekday outside 0..=6"));
    }
    Ok(())
}

pub(crate) fn validate_window(window: &CoachWindow) -> Result<(), EngineError> {
    if window.day_of_week > 6 {
        return Err(EngineError::InvalidRecord("weekday outside 0..=6"));
    }
    if window.hours.start >= window.hours.end {
        return Err(EngineError::InvalidRecord("window hours out of order"));
    }
    Ok(())
}
