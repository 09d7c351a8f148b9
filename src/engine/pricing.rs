use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::*;

// ── Pricing Algorithm ─────────────────────────────────────────────

/// Monetary rounding: two decimal places, halves away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// True if `rule` fires for a booking of `court` on `date` starting at
/// `hour`. Inactive rules never fire. The holiday kind is reserved and
/// never fires regardless of its configuration.
pub fn rule_applies(rule: &PricingRule, court: &Court, date: NaiveDate, hour: Hour) -> bool {
    if !rule.is_active {
        return false;
    }
    match rule.kind {
        RuleKind::PeakHours | RuleKind::EarlyBird => {
            rule.hours.is_some_and(|h| h.contains_hour(hour))
        }
        RuleKind::Weekend => rule
            .days_of_week
            .as_ref()
            .is_some_and(|days| days.contains(&weekday_index(date))),
        RuleKind::IndoorPremium => court.kind == CourtKind::Indoor,
        RuleKind::Holiday => false,
    }
}

/// True if some active peak-hours rule covers `hour`. Drives slot badges.
pub fn is_peak_hour(rules: &[PricingRule], hour: Hour) -> bool {
    rules.iter().any(|r| {
        r.is_active && r.kind == RuleKind::PeakHours && r.hours.is_some_and(|h| h.contains_hour(hour))
    })
}

/// Price one candidate booking. Pure: no clock, no shared state, every
/// input is an argument, so quoting is safe to repeat on every edit.
///
/// Rules contribute twice, on purpose. Each applying rule emits a display
/// line of `base × (multiplier − 1)`, rounded, so every label reads as an
/// independent adjustment against the base price. The charged court total
/// instead multiplies through the same rules in catalog order, unrounded
/// between steps. With two or more applying rules the lines do not sum to
/// the charged amount; `total` is authoritative.
pub fn breakdown(
    court: &Court,
    date: NaiveDate,
    slot: Slot,
    rules: &[PricingRule],
    catalog: &[Equipment],
    selections: &[EquipmentSelection],
    coach: Option<&Coach>,
) -> PriceBreakdown {
    let base = court.base_price_per_hour;
    let hour = slot.start_hour();

    let mut modifiers = Vec::new();
    let mut court_total = base;
    for rule in rules.iter().filter(|r| rule_applies(r, court, date, hour)) {
        modifiers.push(RuleModifier {
            rule: rule.name.clone(),
            amount: round2(base * (rule.multiplier - Decimal::ONE)),
        });
        court_total *= rule.multiplier;
    }

    let mut items = Vec::new();
    let mut equipment_total = Decimal::ZERO;
    for sel in selections {
        // Unknown or deactivated gear is skipped while quoting;
        // confirmation rejects it instead.
        let Some(item) = catalog.iter().find(|e| e.id == sel.equipment_id && e.is_active) else {
            continue;
        };
        items.push(EquipmentLine {
            name: item.name.clone(),
            unit_price: item.price_per_hour,
            quantity: sel.quantity,
        });
        equipment_total += item.price_per_hour * Decimal::from(sel.quantity);
    }

    let coach_fee = coach
        .filter(|c| c.is_active)
        .map_or(Decimal::ZERO, |c| c.hourly_rate);

    // One rounded figure; slots are one hour so there is no duration factor.
    let subtotal = round2(court_total + equipment_total + coach_fee);

    PriceBreakdown {
        court_base: base,
        court_modifiers: modifiers,
        equipment_items: items,
        equipment_total,
        coach_fee,
        subtotal,
        total: subtotal,
    }
}
