//! Entity — a single host-owned sensor or switch observed by the card.
//!
//! The host supplies a fresh [`StateMap`] snapshot on every update tick.
//! plantmon only ever reads it.

mod state;

pub use state::{EntityState, StateMap, Timestamp};
