//! Bird simulator module - the agent, its action log, and its action types.
//!
//! This module is organized into submodules:
//! - `types`: Core type definitions (action kinds, items, constants)
//! - `history`: ActionHistory (append-only log with pop-last undo)
//! - `bird`: Bird entity and every operation it supports

mod bird;
mod history;
mod types;


pub use bird::{ActionError, Bird};
pub use history::ActionHistory;
pub use types::{
    ActionKind, ItemName, CHICK_FOOD, FEED_TRIP_SPAN, GROWTH_STEP, NEST_MATERIAL, NEST_TRIPS,
    NEST_TRIP_SPAN,
};
