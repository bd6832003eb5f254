//! The game of daifugo.

mod action;
mod card;
mod combination;
mod console;
mod error;
mod game;
mod hand;
mod participant;
mod player;
mod round;
mod seat;
mod settings;
mod table;
pub use self::action::{Action, ActionData, ActionType, ExpectAction};
pub use self::card::{create_deck, sort_cards, Card, Deck, Rank, Strength, Suit, JOKER_STRENGTH};
pub use self::combination::{classify, Combination, Kind};
pub use self::console::Console;
pub use self::error::{PlayerError, RoundError};
pub use self::game::Game;
pub use self::hand::Hand;
pub use self::participant::Participant;
#[cfg(test)]
pub use self::player::ScriptedPlayer;
pub use self::player::{select_move, Player, PlayerRef, Profile, Robot};
pub use self::round::{
    BaseRound, Log, LoggingRound, PlayerState, Round, RoundConfig, RoundOutcome,
};
pub use self::seat::Seat;
pub use self::settings::{Difficulty, Settings};
pub use self::table::{PlayOutcome, Rules, Table, Title};

/// An event that occurs during the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The cards were dealt, and the specified seat leads the first trick.
    Deal(Seat),
    /// A player put a combination on the field.
    Play(Seat, Combination),
    /// A player passed.
    Pass(Seat),
    /// The ranking flipped. True when the ranking is now inverted.
    Revolution(bool),
    /// A play containing an eight cleared the field.
    EightCut(Seat),
    /// The spade three was played over a lone joker.
    SpadeThreeReturn(Seat),
    /// Everyone else passed; the field is cleared and the specified seat leads.
    Flow(Seat),
    /// A player emptied their hand.
    Finish(Seat, Title),
    /// The round is over.
    Round(RoundOutcome),
}
