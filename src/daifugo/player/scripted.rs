//! A scripted player, for testing.

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use super::{ActionData, ActionType, Player, PlayerError, PlayerState};
use crate::daifugo::Card;

#[derive(Debug, Default)]
struct Inner {
    moves: VecDeque<ActionData>,
    errors: Vec<PlayerError>,
}

/// Plays a fixed sequence of moves, and passes once the script runs out.
#[derive(Debug, Default)]
pub struct ScriptedPlayer(Mutex<Inner>);

impl Player for ScriptedPlayer {
    fn take_action(&self, _: PlayerState, _: ActionType) -> ActionData {
        let mut inner = self.0.lock().unwrap();
        inner.moves.pop_front().unwrap_or(ActionData::Pass)
    }

    fn handle_error(&self, err: PlayerError) -> bool {
        let mut inner = self.0.lock().unwrap();
        inner.errors.push(err);
        true
    }
}

impl ScriptedPlayer {
    pub fn into_player(self) -> Arc<dyn Player> {
        Arc::new(self)
    }

    pub fn plays(self, cards: &str) -> Self {
        let cards = cards
            .split_whitespace()
            .map(|c| Card::from_str(c).unwrap());
        let mut inner = self.0.lock().unwrap();
        inner.moves.push_back(ActionData::play(cards));
        drop(inner);
        self
    }

    pub fn passes(self) -> Self {
        let mut inner = self.0.lock().unwrap();
        inner.moves.push_back(ActionData::Pass);
        drop(inner);
        self
    }

    /// The rejections reported so far.
    pub fn errors(&self) -> Vec<PlayerError> {
        self.0.lock().unwrap().errors.clone()
    }
}
