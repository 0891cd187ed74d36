//! Core type definitions: action kinds, item names, and tuning constants.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

pub type ItemName = String;

// ============================================================================
// Constants
// ============================================================================

/// Size change applied by one `grow` or `shrink`.
pub const GROWTH_STEP: i64 = 2;
/// Gather trips performed while building a nest.
pub const NEST_TRIPS: usize = 10;
/// Per-axis span of one nest-building gather flight.
pub const NEST_TRIP_SPAN: i64 = 2;
/// Per-axis span of one chick-feeding gather flight.
pub const FEED_TRIP_SPAN: i64 = 3;

pub const NEST_MATERIAL: &str = "stick";
pub const CHICK_FOOD: &str = "worm";

// ============================================================================
// Action Kinds
// ============================================================================

/// The name of an action as it appears in the history log.
///
/// History entries carry no arguments or effects; `undo` removes entries
/// without reverting anything, so the kind alone is the full record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Grab,
    Drop,
    Examine,
    Use,
    Walk,
    Fly,
    Grow,
    Shrink,
    Rest,
    BuildNest,
    FeedChick,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Grab => "grab",
            ActionKind::Drop => "drop",
            ActionKind::Examine => "examine",
            ActionKind::Use => "use",
            ActionKind::Walk => "walk",
            ActionKind::Fly => "fly",
            ActionKind::Grow => "grow",
            ActionKind::Shrink => "shrink",
            ActionKind::Rest => "rest",
            ActionKind::BuildNest => "build_nest",
            ActionKind::FeedChick => "feed_chick",
        }
    }
}
