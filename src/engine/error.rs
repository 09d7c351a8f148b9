use ulid::Ulid;

use crate::model::{BookingStatus, RuleKind, Slot};

#[derive(Debug)]
pub enum EngineError {
    NotFound(Ulid),
    AlreadyExists(Ulid),
    /// The slot is already taken; carries the blocking booking's id.
    Conflict(Ulid),
    Inactive(Ulid),
    CoachUnavailable(Ulid),
    IncompleteSelection(&'static str),
    InvalidQuantity {
        requested: u32,
        max: u32,
    },
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
    OutsideHours(Slot),
    UnsupportedRule(RuleKind),
    InvalidRecord(&'static str),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NotFound(id) => write!(f, "not found: {id}"),
            EngineError::AlreadyExists(id) => write!(f, "already exists: {id}"),
            EngineError::Conflict(id) => write!(f, "slot taken by booking: {id}"),
            EngineError::Inactive(id) => write!(f, "inactive: {id}"),
            EngineError::CoachUnavailable(id) => {
                write!(f, "coach {id} not available for the requested time")
            }
            EngineError::IncompleteSelection(what) => {
                write!(f, "selection incomplete: missing {what}")
            }
            EngineError::InvalidQuantity { requested, max } => {
                write!(f, "quantity {requested} exceeds limit {max}")
            }
            EngineError::InvalidTransition { from, to } => {
                write!(f, "illegal status transition: {from} -> {to}")
            }
            EngineError::OutsideHours(slot) => {
                write!(f, "slot {slot} outside operating hours")
            }
            EngineError::UnsupportedRule(kind) => {
                write!(f, "unsupported rule kind: {kind:?}")
            }
            EngineError::InvalidRecord(reason) => write!(f, "invalid record: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}
