//! Launch inventory for demos and integration tests: four courts, four
//! rental items, three coaches with weekly windows, four pricing rules.

use rust_decimal::Decimal;
use ulid::Ulid;

use crate::engine::{Engine, EngineError};
use crate::model::*;

/// Build a fresh engine stocked with the demo catalog.
pub fn demo_engine() -> Result<Engine, EngineError> {
    let engine = Engine::new();
    seed(&engine)?;
    Ok(engine)
}

/// Load the demo catalog into an empty engine. Ids are generated per call,
/// so seed a given engine only once.
pub fn seed(engine: &Engine) -> Result<(), EngineError> {
    for c in [
        court("Court 1", CourtKind::Indoor, 40),
        court("Court 2", CourtKind::Indoor, 40),
        court("Court 3", CourtKind::Outdoor, 25),
        court("Court 4", CourtKind::Outdoor, 25),
    ] {
        engine.replace_court(c)?;
    }

    for e in [
        equipment("Pro Racket", EquipmentKind::Racket, 10, 8, 5),
        equipment("Standard Racket", EquipmentKind::Racket, 15, 12, 3),
        equipment("Court Shoes", EquipmentKind::Shoes, 8, 6, 4),
        equipment("Feather Shuttlecocks (3 pack)", EquipmentKind::Shuttlecock, 20, 15, 6),
    ] {
        engine.replace_equipment(e)?;
    }

    // Sarah Chen: weekday mornings and evenings.
    let sarah = coach(
        "Sarah Chen",
        "Former national team player with 15 years of coaching experience. \
         Specializes in doubles strategy and footwork.",
        50,
        "Doubles Strategy",
    );
    let sarah_id = sarah.id;
    engine.replace_coach(sarah)?;
    engine.set_coach_windows(
        sarah_id,
        windows(
            sarah_id,
            &[(1, 8, 12), (1, 17, 21), (2, 8, 12), (2, 17, 21), (3, 8, 12), (4, 17, 21), (5, 8, 12)],
        ),
    )?;

    // Michael Torres: Tue-Fri afternoons plus Saturday.
    let michael = coach(
        "Michael Torres",
        "Certified BWF Level 2 coach. Expert in improving singles game \
         technique and competitive play.",
        45,
        "Singles Technique",
    );
    let michael_id = michael.id;
    engine.replace_coach(michael)?;
    engine.set_coach_windows(
        michael_id,
        windows(
            michael_id,
            &[(2, 14, 21), (3, 14, 21), (4, 14, 21), (5, 14, 21), (6, 10, 18)],
        ),
    )?;

    // Priya Sharma: weekends and Wednesday evenings.
    let priya = coach(
        "Priya Sharma",
        "Youth development specialist. Great with beginners and intermediate \
         players looking to level up.",
        35,
        "Beginner Training",
    );
    let priya_id = priya.id;
    engine.replace_coach(priya)?;
    engine.set_coach_windows(
        priya_id,
        windows(priya_id, &[(0, 9, 17), (3, 18, 21), (6, 9, 17)]),
    )?;

    let mut peak = rule(
        "Peak Hours",
        RuleKind::PeakHours,
        Decimal::new(15, 1),
        "50% surcharge during evening peak hours (6-9 PM)",
    );
    peak.hours = Some(HourRange::new(18, 21));
    engine.add_rule(peak)?;

    let mut weekend = rule(
        "Weekend Rate",
        RuleKind::Weekend,
        Decimal::new(125, 2),
        "25% surcharge on weekends (Sat & Sun)",
    );
    weekend.days_of_week = Some(vec![0, 6]);
    engine.add_rule(weekend)?;

    engine.add_rule(rule(
        "Indoor Premium",
        RuleKind::IndoorPremium,
        Decimal::new(12, 1),
        "20% premium for indoor courts (climate controlled)",
    ))?;

    let mut early = rule(
        "Early Bird",
        RuleKind::EarlyBird,
        Decimal::new(85, 2),
        "15% discount for early morning sessions (6-9 AM)",
    );
    early.hours = Some(HourRange::new(6, 9));
    engine.add_rule(early)?;

    Ok(())
}

fn court(name: &str, kind: CourtKind, base: i64) -> Court {
    Court {
        id: Ulid::new(),
        name: name.into(),
        kind,
        is_active: true,
        base_price_per_hour: Decimal::from(base),
    }
}

fn equipment(name: &str, kind: EquipmentKind, total: u32, available: u32, price: i64) -> Equipment {
    Equipment {
        id: Ulid::new(),
        name: name.into(),
        kind,
        quantity_total: total,
        quantity_available: available,
        price_per_hour: Decimal::from(price),
        is_active: true,
    }
}

fn coach(name: &str, bio: &str, rate: i64, specialization: &str) -> Coach {
    Coach {
        id: Ulid::new(),
        name: name.into(),
        bio: bio.into(),
        hourly_rate: Decimal::from(rate),
        is_active: true,
        specialization: specialization.into(),
    }
}

fn rule(name: &str, kind: RuleKind, multiplier: Decimal, description: &str) -> PricingRule {
    PricingRule {
        id: Ulid::new(),
        name: name.into(),
        kind,
        multiplier,
        is_active: true,
        hours: None,
        days_of_week: None,
        description: description.into(),
    }
}

fn windows(coach_id: Ulid, entries: &[(u8, Hour, Hour)]) -> Vec<CoachWindow> {
    entries.iter()
        .map(|&(day, start, end)| CoachWindow {
            id: Ulid::new(),
            coach_id,
            day_of_week: day,
            hours: HourRange::new(start, end),
        })
        .collect()
}
