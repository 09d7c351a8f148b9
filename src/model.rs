use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Clock hour (0..=23), the only time granularity.
pub type Hour = u8;

/// Half-open range of whole hours `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: Hour,
    pub end: Hour,
}

impl HourRange {
    pub fn new(start: Hour, end: Hour) -> Self {
        debug_assert!(start < end, "HourRange start must be before end");
        Self { start, end }
    }

    pub fn contains_hour(&self, hour: Hour) -> bool {
        self.start <= hour && hour < self.end
    }

    /// Returns true if `self` fully contains `other`.
    pub fn contains(&self, other: &HourRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whole hours in ascending order, one per bookable slot.
    pub fn hours(self) -> impl Iterator<Item = Hour> {
        self.start..self.end
    }
}

impl std::fmt::Display for HourRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start, self.end)
    }
}

/// A bookable one-hour window, identified by its start hour.
/// The end is always `start + 1`; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(pub Hour);

impl Slot {
    pub fn start_hour(&self) -> Hour {
        self.0
    }

    pub fn end_hour(&self) -> Hour {
        self.0 + 1
    }

    pub fn range(&self) -> HourRange {
        HourRange::new(self.0, self.0 + 1)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Weekday as the catalog encodes it: 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Calendar weekend check for presentation. Weekend *pricing* goes through
/// the weekend rule's own `days_of_week` list, not this.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(weekday_index(date), 0 | 6)
}

// ── Catalog entities ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtKind {
    Indoor,
    Outdoor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    pub id: Ulid,
    pub name: String,
    pub kind: CourtKind,
    pub is_active: bool,
    pub base_price_per_hour: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    Racket,
    Shoes,
    Shuttlecock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: Ulid,
    pub name: String,
    pub kind: EquipmentKind,
    pub quantity_total: u32,
    /// Units currently rentable; never exceeds `quantity_total`.
    pub quantity_available: u32,
    pub price_per_hour: Decimal,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    pub id: Ulid,
    pub name: String,
    pub bio: String,
    pub hourly_rate: Decimal,
    pub is_active: bool,
    pub specialization: String,
}

/// One recurring weekly availability window for a coach.
/// A coach may have several windows on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachWindow {
    pub id: Ulid,
    pub coach_id: Ulid,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    pub hours: HourRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    PeakHours,
    Weekend,
    IndoorPremium,
    /// Reserved kind: present in the catalog schema but never evaluated,
    /// and rejected by the admin surface.
    Holiday,
    EarlyBird,
}

/// A multiplicative adjustment on the court's base price.
/// `multiplier` of 1.0 is a no-op, above 1 a surcharge, below 1 a discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRule {
    pub id: Ulid,
    pub name: String,
    pub kind: RuleKind,
    pub multiplier: Decimal,
    pub is_active: bool,
    /// Trigger window for the hour-based kinds (peak_hours, early_bird).
    pub hours: Option<HourRange>,
    /// Trigger days for the weekend kind. 0 = Sunday .. 6 = Saturday.
    pub days_of_week: Option<Vec<u8>>,
    pub description: String,
}

// ── Bookings ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentSelection {
    pub equipment_id: Ulid,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }

    /// Legal moves: pending → confirmed, pending/confirmed → cancelled,
    /// confirmed → completed. Terminal states accept nothing.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled) | (Confirmed, Completed)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A reservation on the ledger. After creation only `status` changes;
/// `court`, `coach` and `breakdown` are snapshots frozen at confirmation,
/// so later catalog edits never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Ulid,
    pub user_id: Ulid,
    pub court_id: Ulid,
    pub date: NaiveDate,
    pub slot: Slot,
    pub status: BookingStatus,
    pub total_price: Decimal,
    pub equipment: Vec<EquipmentSelection>,
    pub coach_id: Option<Ulid>,
    pub court: Court,
    pub coach: Option<Coach>,
    pub breakdown: PriceBreakdown,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// True if this booking makes `slot` on `court_id`/`date` unavailable.
    /// Cancelled bookings block nothing.
    pub fn blocks_slot(&self, court_id: Ulid, date: NaiveDate, slot: Slot) -> bool {
        self.status != BookingStatus::Cancelled
            && self.court_id == court_id
            && self.date == date
            && self.slot == slot
    }
}

// ── Price breakdown ──────────────────────────────────────────────

/// One named rule adjustment line. `amount` is quoted against the base
/// price, so each line reads as an independent adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleModifier {
    pub rule: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentLine {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// Itemised quote for one candidate booking. `Default` is the all-zero
/// placeholder handed out while the selection is still incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub court_base: Decimal,
    pub court_modifiers: Vec<RuleModifier>,
    pub equipment_items: Vec<EquipmentLine>,
    pub equipment_total: Decimal,
    pub coach_fee: Decimal,
    pub subtotal: Decimal,
    pub total: Decimal,
}

// ── Selection ────────────────────────────────────────────────────

/// In-progress booking state for one caller. Changing the date or the
/// court invalidates the chosen slot; equipment and coach survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub date: NaiveDate,
    pub court_id: Option<Ulid>,
    pub slot: Option<Slot>,
    pub equipment: Vec<EquipmentSelection>,
    pub coach_id: Option<Ulid>,
}

impl Selection {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            court_id: None,
            slot: None,
            equipment: Vec::new(),
            coach_id: None,
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.slot = None;
    }

    pub fn set_court(&mut self, court_id: Ulid) {
        self.court_id = Some(court_id);
        self.slot = None;
    }

    /// Reset everything except the date.
    pub fn clear(&mut self) {
        *self = Selection::for_date(self.date);
    }

    pub fn equipment_quantity(&self, equipment_id: Ulid) -> u32 {
        self.equipment
            .iter()
            .find(|s| s.equipment_id == equipment_id)
            .map_or(0, |s| s.quantity)
    }

    /// Quantity 0 removes the line; otherwise insert or update in place.
    /// Validation against the catalog happens in the engine.
    pub(crate) fn set_equipment_quantity(&mut self, equipment_id: Ulid, quantity: u32) {
        if quantity == 0 {
            self.equipment.retain(|s| s.equipment_id != equipment_id);
        } else if let Some(line) = self.equipment.iter_mut().find(|s| s.equipment_id == equipment_id) {
            line.quantity = quantity;
        } else {
            self.equipment.push(EquipmentSelection { equipment_id, quantity });
        }
    }
}
