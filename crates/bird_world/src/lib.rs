pub mod grid;
pub mod simulator;

pub use grid::{Direction, GridPos, GRID_MAX, GRID_MIN};
pub use simulator::{
    ActionError, ActionHistory, ActionKind, Bird, ItemName, CHICK_FOOD, FEED_TRIP_SPAN,
    GROWTH_STEP, NEST_MATERIAL, NEST_TRIPS, NEST_TRIP_SPAN,
};
