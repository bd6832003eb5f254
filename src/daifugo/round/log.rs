//! Log of actions for a round.

use serde::{Deserialize, Serialize};

use super::RoundConfig;
use crate::daifugo::{Action, RoundError};


/// A log of the actions taken in a round, from the deal onwards.
///
/// Positions count actions: position zero is the state immediately after the deal, and position
/// `n` is the state after the first `n` actions have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    /// The initial configuration for the round.
    config: RoundConfig,
    /// Every action accepted by the round, in order.
    actions: Vec<Action>,
}

impl Log {
    /// Creates a new [`Log`] with the specified initial configuration.
    pub fn new(config: RoundConfig) -> Self {
        Self {
            config,
            actions: vec![],
        }
    }

    /// Returns an immutable reference to the initial configuration.
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The actions recorded so far.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The number of actions recorded.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Records an action taken at the specified position, and returns the position after it. If
    /// the action differs from the one already recorded there, the rest of the log is discarded.
    pub fn insert(&mut self, position: usize, action: Action) -> usize {
        assert!(position <= self.actions.len(), "position out of range");
        if self.actions.get(position) != Some(&action) {
            self.actions.truncate(position);
            self.actions.push(action);
        }
        position + 1
    }

    /// Returns the actions leading up to the specified position.
    pub fn history(&self, position: usize) -> Result<&[Action], RoundError> {
        self.actions
            .get(..position)
            .ok_or(RoundError::InvalidLogPosition(position))
    }
}
