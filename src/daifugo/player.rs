//! Players

use std::sync::Arc;

use super::{ActionData, ActionType, Event, PlayerError, PlayerState};

mod robot;
#[cfg(test)]
mod scripted;
pub use robot::{select_move, Profile, Robot};
#[cfg(test)]
pub use scripted::ScriptedPlayer;

/// A trait that implements a daifugo player.
pub trait Player {
    /// Chooses an action for the current turn. Passing is always allowed; a play must be a
    /// combination held by the player that beats the field.
    fn take_action(&self, state: PlayerState, action: ActionType) -> ActionData;

    /// A notification of an event that all players can see.
    fn notify(&self, _state: PlayerState, _event: &Event) {}

    /// Indicates that the player's last action was rejected.
    ///
    /// The implementation may return true, if a retry is desired. Otherwise, the rejected action
    /// will be converted into a fatal error.
    fn handle_error(&self, _err: PlayerError) -> bool {
        false
    }
}

/// A shared handle to a player.
pub type PlayerRef = Arc<dyn Player>;
