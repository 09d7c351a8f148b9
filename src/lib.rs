//! Booking engine for a badminton facility: courts, rental equipment,
//! coaches, pricing rules, and an in-memory booking ledger.
//!
//! [`Engine`] owns all state. Callers assemble a [`model::Selection`],
//! quote it with [`Engine::compute_breakdown`], and commit it with
//! [`Engine::confirm_booking`].

pub mod engine;
pub mod model;
pub mod seed;

pub use engine::{Engine, EngineError, FacilityConfig};
