//! Actions

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{Card, Seat};

/// Types of actions that a player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    /// Play onto an empty field.
    Lead,
    /// Beat the combination on the field, or pass.
    Follow,
}
impl Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ActionType::Lead => "lead",
            ActionType::Follow => "follow",
        })
    }
}

/// The payload for actions that a player can take during the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionData {
    /// Decline to play this turn.
    Pass,

    /// Play a combination of cards from the player's hand.
    Play { cards: Vec<Card> },
}

impl ActionData {
    /// Creates a [`ActionData::Play`] payload.
    pub fn play<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        ActionData::Play {
            cards: cards.into_iter().collect(),
        }
    }
}

/// The action that the round's state machine expects to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectAction {
    /// The player expected to take the action.
    pub seat: Seat,
    /// The type of action.
    pub action: ActionType,
}

impl ExpectAction {
    /// Create a new [`ExpectAction`].
    pub fn new(seat: Seat, action: ActionType) -> Self {
        Self { seat, action }
    }

    /// Bind in a payload to create an [`Action`].
    pub fn with_data(self, data: ActionData) -> Action {
        Action::new(self.seat, self.action, data)
    }
}

/// An action taken by a player during a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The player taking the action.
    pub seat: Seat,
    /// The type of action.
    pub action: ActionType,
    /// The action payload.
    pub data: ActionData,
}

impl Action {
    /// Create a new [`Action`].
    pub fn new(seat: Seat, action: ActionType, data: ActionData) -> Self {
        Self { seat, action, data }
    }
}
