use chrono::NaiveDate;
use ulid::Ulid;

use crate::model::*;

// ── Availability Algorithm ────────────────────────────────────────

/// Compute the open slots for one court on one date: the operating grid
/// minus every slot a non-cancelled booking occupies.
///
/// Pure and recomputed on demand; the ledger is the only source of truth,
/// nothing is cached.
pub fn free_slots(
    court_id: Ulid,
    date: NaiveDate,
    hours: HourRange,
    bookings: &[Booking],
) -> Vec<Slot> {
    hours
        .hours()
        .map(Slot)
        .filter(|slot| !bookings.iter().any(|b| b.blocks_slot(court_id, date, *slot)))
        .collect()
}

/// True if a single window of `coach_id` on `weekday` fully contains
/// `range`. Windows are not unioned: back-to-back windows with a seam
/// inside `range` do not cover it.
pub fn window_covers(
    windows: &[CoachWindow],
    coach_id: Ulid,
    weekday: u8,
    range: &HourRange,
) -> bool {
    windows
        .iter()
        .filter(|w| w.coach_id == coach_id && w.day_of_week == weekday)
        .any(|w| w.hours.contains(range))
}
