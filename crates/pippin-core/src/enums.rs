//! Lifecycle states, move directions, and board themes.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for SQL storage.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TicketState
// ---------------------------------------------------------------------------

/// Position of a ticket on the board.
///
/// ```text
/// backlog ⇄ todo ⇄ in_progress ⇄ done
/// ```
///
/// Moves are single steps along the chain in either direction. There is no
/// skipping and no wraparound. Direct field edits may still set any state.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TicketState {
    #[default]
    Backlog,
    Todo,
    InProgress,
    Done,
}

impl TicketState {
    /// Every state in chain order.
    pub const ALL: [Self; 4] = [Self::Backlog, Self::Todo, Self::InProgress, Self::Done];

    /// Zero-based position on the chain.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Backlog => 0,
            Self::Todo => 1,
            Self::InProgress => 2,
            Self::Done => 3,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// The adjacent state in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidMove`] when the step would leave the chain
    /// (left of `backlog`, right of `done`).
    pub fn step(self, direction: Direction) -> Result<Self, CoreError> {
        let next = match direction {
            Direction::Left => self.index().checked_sub(1),
            Direction::Right => Some(self.index() + 1),
        };
        next.and_then(Self::from_index).ok_or_else(|| {
            CoreError::InvalidMove(format!("cannot move {direction} from {self}"))
        })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for TicketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown ticket state '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Direction of a lifecycle move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    /// Anything other than `left`/`right` is an invalid move, not a
    /// validation error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(CoreError::InvalidMove(format!("unknown direction '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Board colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Warm,
    Forest,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Forest => "forest",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warm" => Ok(Self::Warm),
            "forest" => Ok(Self::Forest),
            other => Err(CoreError::Validation(format!("unknown theme '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TicketState::Backlog, Direction::Right, TicketState::Todo)]
    #[case(TicketState::Todo, Direction::Right, TicketState::InProgress)]
    #[case(TicketState::InProgress, Direction::Right, TicketState::Done)]
    #[case(TicketState::Done, Direction::Left, TicketState::InProgress)]
    #[case(TicketState::InProgress, Direction::Left, TicketState::Todo)]
    #[case(TicketState::Todo, Direction::Left, TicketState::Backlog)]
    fn single_step_moves(
        #[case] from: TicketState,
        #[case] direction: Direction,
        #[case] expected: TicketState,
    ) {
        assert_eq!(from.step(direction).unwrap(), expected);
    }

    #[rstest]
    #[case(TicketState::Backlog, Direction::Left)]
    #[case(TicketState::Done, Direction::Right)]
    fn moves_off_the_chain_are_rejected(#[case] from: TicketState, #[case] direction: Direction) {
        let err = from.step(direction).unwrap_err();
        assert!(matches!(err, CoreError::InvalidMove(_)), "got {err:?}");
    }

    #[test]
    fn unknown_direction_is_invalid_move() {
        let err = "up".parse::<Direction>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidMove(_)));
        assert!("Left".parse::<Direction>().is_err());
    }

    #[test]
    fn index_roundtrips_for_every_state() {
        for state in TicketState::ALL {
            assert_eq!(TicketState::from_index(state.index()), Some(state));
        }
        assert_eq!(TicketState::from_index(4), None);
    }

    #[test]
    fn state_strings_match_serde() {
        for state in TicketState::ALL {
            let json = serde_json::to_value(state).unwrap();
            assert_eq!(json, serde_json::Value::String(state.as_str().into()));
            assert_eq!(state.as_str().parse::<TicketState>().unwrap(), state);
        }
    }

    #[test]
    fn unknown_state_is_validation_error() {
        let err = "archived".parse::<TicketState>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn theme_parses_known_values_only() {
        assert_eq!("forest".parse::<Theme>().unwrap(), Theme::Forest);
        assert_eq!(Theme::default(), Theme::Warm);
        assert!("neon".parse::<Theme>().is_err());
    }
}
