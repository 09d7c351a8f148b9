use chrono::{NaiveDate, Utc};
use tracing::info;
use ulid::Ulid;

use courtbook::model::{Hour, HourRange, Selection, Slot};
use courtbook::seed;
use courtbook::{Engine, FacilityConfig};

/// Walk one booking end to end against the demo catalog: list open slots,
/// build a selection, quote it, confirm it, then free the slot again.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let date: NaiveDate = std::env::var("COURTBOOK_DATE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| Utc::now().date_naive());
    let open: Hour = std::env::var("COURTBOOK_OPEN")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(6);
    let close: Hour = std::env::var("COURTBOOK_CLOSE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(22);
    if open >= close {
        return Err("COURTBOOK_OPEN must be before COURTBOOK_CLOSE".into());
    }

    let engine = Engine::with_config(FacilityConfig {
        hours: HourRange::new(open, close),
        ..FacilityConfig::default()
    });
    seed::seed(&engine)?;
    info!("operating hours: {}", engine.config().hours);
    info!(
        "seeded {} courts, {} equipment items, {} coaches, {} pricing rules",
        engine.courts().len(),
        engine.equipment().len(),
        engine.coaches().len(),
        engine.rules().len()
    );

    let court = engine.courts().into_iter().next().ok_or("empty catalog")?;
    let free = engine.free_slots(court.id, date);
    info!("{} has {} open slots on {date}", court.name, free.len());

    let mut selection = Selection::for_date(date);
    selection.set_court(court.id);
    // Prefer the 18:00 peak slot so the quote shows stacked rules.
    let evening = Slot(18);
    selection.slot = if free.contains(&evening) {
        Some(evening)
    } else {
        free.first().copied()
    };

    let racket = engine.equipment().into_iter().next().ok_or("empty catalog")?;
    engine.select_equipment(&mut selection, racket.id, 2)?;

    if let Some(slot) = selection.slot {
        selection.coach_id = engine
            .coaches()
            .into_iter()
            .find(|c| engine.coach_available(c.id, date, slot.range()))
            .map(|c| c.id);
    }

    let quote = engine.compute_breakdown(&selection);
    println!("{}", serde_json::to_string_pretty(&quote)?);

    let booking = engine.confirm_booking(Ulid::new(), &mut selection)?;
    println!("{}", serde_json::to_string_pretty(&booking)?);

    let remaining = engine.free_slots(court.id, date);
    info!("{} open slots remain on {}", remaining.len(), court.name);

    engine.cancel_booking(booking.id)?;
    info!("cancelled booking {}; slot {} is open again", booking.id, booking.slot);

    Ok(())
}
