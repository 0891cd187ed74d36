//! Bird: the single stateful agent and every operation it supports.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Direction, GridPos, GRID_MAX, GRID_MIN};

use super::history::ActionHistory;
use super::types::{
    ActionKind, ItemName, CHICK_FOOD, FEED_TRIP_SPAN, GROWTH_STEP, NEST_MATERIAL, NEST_TRIPS,
    NEST_TRIP_SPAN,
};

// ============================================================================
// Errors
// ============================================================================

/// Why an action was refused. The bird's state is unchanged after any of
/// these, except where an operation documents otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ActionError {
    #[error("bird is already holding {held}")]
    AlreadyHolding { held: ItemName },
    #[error("bird is not holding any item")]
    NotHolding,
    #[error("bird is holding {held}, not {requested}")]
    WrongItem { held: ItemName, requested: ItemName },
    #[error("location ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i64, y: i64 },
    #[error("invalid direction {token:?}; valid directions are: north, south, east, west")]
    InvalidDirection { token: String },
    #[error("history is empty, nothing to undo")]
    EmptyHistory,
    #[error("bird has already built a nest")]
    NestAlreadyBuilt,
    #[error("bird does not have a nest")]
    NoNest,
}

// ============================================================================
// Bird
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bird {
    size: i64,
    held_item: Option<ItemName>,
    pos: GridPos,
    history: ActionHistory,
    has_nest: bool,
}

impl Bird {
    pub fn new(initial_size: i64) -> Self {
        Self {
            size: initial_size,
            held_item: None,
            pos: GridPos::origin(),
            history: ActionHistory::new(),
            has_nest: false,
        }
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn held_item(&self) -> Option<&str> {
        self.held_item.as_deref()
    }

    pub fn position(&self) -> GridPos {
        self.pos
    }

    pub fn history(&self) -> &[ActionKind] {
        self.history.entries()
    }

    pub fn has_nest(&self) -> bool {
        self.has_nest
    }

    /// Picks up `item`. The bird's claws fit one item at a time.
    pub fn grab(&mut self, item: impl Into<ItemName>) -> Result<(), ActionError> {
        if let Some(held) = &self.held_item {
            return Err(ActionError::AlreadyHolding { held: held.clone() });
        }
        self.held_item = Some(item.into());
        self.history.record(ActionKind::Grab);
        Ok(())
    }

    /// Drops the held item, returning its name. The argument must match the
    /// held item exactly.
    pub fn drop_item(&mut self, item: &str) -> Result<ItemName, ActionError> {
        let Some(held) = self.held_item.take() else {
            return Err(ActionError::NotHolding);
        };
        if held != item {
            let err = ActionError::WrongItem {
                held: held.clone(),
                requested: item.to_string(),
            };
            self.held_item = Some(held);
            return Err(err);
        }
        self.history.record(ActionKind::Drop);
        Ok(held)
    }

    /// Looks the held item over and returns the description. The item stays
    /// in hand.
    pub fn examine(&mut self, item: &str) -> Result<String, ActionError> {
        self.require_held(item)?;
        self.history.record(ActionKind::Examine);
        Ok(format!("Look at this cool {item}!"))
    }

    /// Uses up the held item and returns the usage message. The item is
    /// dropped internally, but the drop's history entry is self-undone: the
    /// net history effect is a single `Use`.
    pub fn use_item(&mut self, item: &str) -> Result<String, ActionError> {
        self.require_held(item)?;
        self.history.record(ActionKind::Use);
        self.drop_item(item)?;
        self.undo()?;
        Ok(format!("Bird is using {item}"))
    }

    /// Walks one unit in `direction`.
    ///
    /// The pre-move bound check is direction-specific and asymmetric: tighter
    /// toward the direction of travel, looser away from it. Reproduced from
    /// the original behavior; do not symmetrize.
    pub fn walk(&mut self, direction: Direction) -> Result<(), ActionError> {
        match direction {
            Direction::North => {
                if self.pos.y > GRID_MAX - 1 || self.pos.y < GRID_MIN {
                    return Err(self.out_of_bounds(0, 1));
                }
                self.pos.y += 1;
            }
            Direction::South => {
                if self.pos.y > GRID_MAX || self.pos.y < GRID_MIN + 1 {
                    return Err(self.out_of_bounds(0, -1));
                }
                self.pos.y -= 1;
            }
            Direction::East => {
                if self.pos.x > GRID_MAX - 1 || self.pos.x < GRID_MIN {
                    return Err(self.out_of_bounds(1, 0));
                }
                self.pos.x += 1;
            }
            Direction::West => {
                if self.pos.x > GRID_MAX || self.pos.x < GRID_MIN + 1 {
                    return Err(self.out_of_bounds(-1, 0));
                }
                self.pos.x -= 1;
            }
        }
        self.history.record(ActionKind::Walk);
        Ok(())
    }

    /// Walks by direction token (`"north"`, `"south"`, `"east"`, `"west"`).
    /// Unknown tokens fail with `InvalidDirection` and log nothing.
    pub fn walk_named(&mut self, token: &str) -> Result<(), ActionError> {
        let Some(direction) = Direction::parse(token) else {
            return Err(ActionError::InvalidDirection {
                token: token.to_string(),
            });
        };
        self.walk(direction)
    }

    /// Flies `dx` units east/west and `dy` units north/south in one move.
    /// The move is all-or-nothing: if either resulting axis would leave
    /// [GRID_MIN, GRID_MAX], neither coordinate changes.
    pub fn fly(&mut self, dx: i64, dy: i64) -> Result<(), ActionError> {
        let target = self.pos.translated(dx, dy);
        if !target.in_bounds() {
            return Err(ActionError::OutOfBounds {
                x: target.x,
                y: target.y,
            });
        }
        self.pos = target;
        self.history.record(ActionKind::Fly);
        Ok(())
    }

    /// Grows two units larger and returns the new size. No upper bound.
    pub fn grow(&mut self) -> i64 {
        self.size += GROWTH_STEP;
        self.history.record(ActionKind::Grow);
        self.size
    }

    /// Shrinks two units smaller and returns the new size. No lower bound;
    /// size may go to zero or below.
    pub fn shrink(&mut self) -> i64 {
        self.size -= GROWTH_STEP;
        self.history.record(ActionKind::Shrink);
        self.size
    }

    /// Rests momentarily and returns the resting message.
    pub fn rest(&mut self) -> String {
        self.history.record(ActionKind::Rest);
        "Resting. . . ".to_string()
    }

    /// Removes the most recent history entry and returns it.
    ///
    /// This erases the log entry only. Position, held item, size, and nest
    /// state keep whatever the removed action did to them.
    pub fn undo(&mut self) -> Result<ActionKind, ActionError> {
        self.history.undo().ok_or(ActionError::EmptyHistory)
    }

    /// Builds a nest at the origin: ten gather trips, each a flight out,
    /// a stick grabbed, a flight back, and the stick used up, with every
    /// primitive's history entry undone as it happens. The log gains exactly
    /// one `BuildNest` entry.
    pub fn build_nest(&mut self) -> Result<(), ActionError> {
        if self.has_nest {
            return Err(ActionError::NestAlreadyBuilt);
        }
        self.pos = GridPos::origin();
        self.has_nest = true;

        for _ in 0..NEST_TRIPS {
            self.fly(NEST_TRIP_SPAN, NEST_TRIP_SPAN)?;
            self.undo()?;
            self.grab(NEST_MATERIAL)?;
            self.undo()?;
            self.fly(-NEST_TRIP_SPAN, -NEST_TRIP_SPAN)?;
            self.undo()?;
            self.use_item(NEST_MATERIAL)?;
            self.undo()?;
        }
        self.history.record(ActionKind::BuildNest);
        Ok(())
    }

    /// Feeds a chick in the nest: one gather trip for a worm, same shape as
    /// a nest-building trip. Requires a built nest.
    pub fn feed_chick(&mut self) -> Result<(), ActionError> {
        if !self.has_nest {
            return Err(ActionError::NoNest);
        }
        self.pos = GridPos::origin();

        self.fly(FEED_TRIP_SPAN, FEED_TRIP_SPAN)?;
        self.undo()?;
        self.grab(CHICK_FOOD)?;
        self.undo()?;
        self.fly(-FEED_TRIP_SPAN, -FEED_TRIP_SPAN)?;
        self.undo()?;
        self.use_item(CHICK_FOOD)?;
        self.undo()?;

        self.history.record(ActionKind::FeedChick);
        Ok(())
    }

    fn require_held(&self, item: &str) -> Result<(), ActionError> {
        let Some(held) = &self.held_item else {
            return Err(ActionError::NotHolding);
        };
        if held != item {
            return Err(ActionError::WrongItem {
                held: held.clone(),
                requested: item.to_string(),
            });
        }
        Ok(())
    }

    fn out_of_bounds(&self, dx: i64, dy: i64) -> ActionError {
        let target = self.pos.translated(dx, dy);
        ActionError::OutOfBounds {
            x: target.x,
            y: target.y,
        }
    }
}
