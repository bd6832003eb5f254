//! Error types

use super::{ActionType, Card, Combination, Seat};

/// A rule violation by a player. The round is left unchanged, and the player may try again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// A play must contain at least one card.
    #[error("no cards played")]
    EmptyPlay,

    /// The cards do not form any recognized combination.
    #[error("not a valid combination")]
    InvalidCombination,

    /// The combination doesn't match the shape of the field, or isn't strong enough to beat it.
    #[error("{0} does not beat the field")]
    IllegalPlay(Combination),

    /// The player doesn't actually hold the card they attempted to play.
    #[error("{0} does not hold {1}")]
    CardNotHeld(Seat, Card),

    /// The same card appears more than once in a play.
    #[error("{0} played more than once")]
    DuplicateCard(Card),
}

#[derive(Debug, thiserror::Error)]
pub enum RoundError {
    #[error("deck is missing cards")]
    IncompleteDeck,
    #[error("deck contains duplicate card")]
    DuplicateCard,
    #[error("unsupported player count {0}")]
    InvalidPlayerCount(usize),
    #[error("expected {seat} to {action}")]
    ExpectActioned { seat: Seat, action: ActionType },
    #[error("round over")]
    RoundOver,
    #[error("round in progress")]
    RoundInProgress,
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error("invalid log position {0}")]
    InvalidLogPosition(usize),
}
