//! Round management

use std::collections::HashSet;
use std::fmt::Display;

use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    create_deck, sort_cards, Action, ActionData, ActionType, Card, Combination, Deck, Event,
    ExpectAction, Hand, Participant, PlayerError, Rank, RoundError, Rules, Seat, Settings, Suit,
    Table, Title,
};

mod base;
mod log;
mod logging;
pub use base::BaseRound;
pub use log::Log;
pub use logging::LoggingRound;

/// A trait for implementing a round of daifugo.
///
/// ## Gameplay
///
/// The whole deck is dealt out, and the holder of the three of diamonds leads the first
/// combination onto the empty field. Play proceeds clockwise: each player must either beat the
/// combination on the field with a stronger one of the same shape, or pass. Once everyone but the
/// last player to have played has passed, the field flows away and that player leads again.
///
/// Playing a quad, or a sequence of five or more, starts a revolution, which inverts the ranking
/// of every card until the next revolution. Any combination containing an eight clears the field
/// immediately. A lone spade-3 can counter a lone joker.
///
/// A player who empties their hand finishes the round, and earns a title according to the order
/// in which they finished. The round is over when only one player is left holding cards.
///
/// ## State management
///
/// The round begins in an initial state, immediately after the deal. To advance the state of the
/// round, players are required to take actions. The identity of the next player and the action
/// they are expected to take is always known deterministically, and may be obtained via
/// [`next_action`](`Round::next_action`).
///
/// Once a player has chosen an action, it is applied using
/// [`apply_action`](`Round::apply_action`). A rejected action leaves the round unchanged.
///
/// ## Events
///
/// Certain actions trigger events, such as a revolution, or a player finishing. These events are
/// stored in a queue, which may be drained using [`pop_event`](`Round::pop_event`).
pub trait Round {
    /// The shared table state.
    fn table(&self) -> &Table;

    /// The players, indexed by seat.
    fn participants(&self) -> &[Participant];

    /// The seats that have finished, in the order they finished.
    fn finish_order(&self) -> &[Seat];

    /// Returns the next action that's required to advance the state of the
    /// round, or None if the round is over.
    fn next_action(&self) -> Option<ExpectAction>;

    /// Returns a bundle of state visible to the specified player.
    fn player_state(&self, seat: Seat) -> PlayerState<'_>;

    /// Applies the specified action.
    fn apply_action(&mut self, action: Action) -> Result<(), RoundError>;

    /// Pops the oldest event from the queue of events.
    fn pop_event(&mut self) -> Option<Event>;

    /// The number of players still holding cards.
    fn active_count(&self) -> usize {
        self.participants().iter().filter(|p| p.is_active()).count()
    }

    /// The outcome of the round, if it is over.
    fn outcome(&self) -> Option<RoundOutcome> {
        if self.active_count() > 0 {
            return None;
        }
        let standings = self
            .finish_order()
            .iter()
            .map(|&seat| {
                let title = self.participants()[seat.index()]
                    .title()
                    .expect("finished players have titles");
                (seat, title)
            })
            .collect();
        Some(RoundOutcome { standings })
    }
}

/// Configuration & initial conditions for a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// The optional rules in effect.
    rules: Rules,
    /// Display names, indexed by seat.
    names: Vec<String>,
    /// The seat controlled by a person, if any.
    #[serde(default)]
    human: Option<Seat>,
    /// Each player's hand, as dealt.
    hands: Vec<Vec<Card>>,
    /// The player who leads the first combination.
    leader: Seat,
}

impl RoundConfig {
    /// Creates a new [`RoundConfig`] by dealing out the specified deck.
    pub fn new(settings: &Settings, deck: Deck) -> Result<Self, RoundError> {
        let settings = settings.clone().validate()?;
        if deck.len() != create_deck(settings.jokers).len() {
            return Err(RoundError::IncompleteDeck);
        }
        let hands = deck.deal(settings.player_count);
        Self::from_hands(settings.rules(), hands)
    }

    /// Creates a [`RoundConfig`] by dealing a freshly shuffled deck.
    pub fn random<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Result<Self, RoundError> {
        let deck = create_deck(settings.jokers).shuffled(rng);
        Self::new(settings, deck)
    }

    /// Creates a [`RoundConfig`] from hands that have already been dealt.
    pub fn from_hands(rules: Rules, hands: Vec<Vec<Card>>) -> Result<Self, RoundError> {
        let names = Seat::all_seats(hands.len())
            .map(|seat| seat.to_string())
            .collect();
        let leader = first_leader(&hands);
        let mut config = Self {
            rules,
            names,
            human: None,
            hands,
            leader,
        };
        config.validate()?;
        config.canonicalize();
        Ok(config)
    }

    /// Sets the display names for each seat.
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (slot, name) in self.names.iter_mut().zip(names) {
            *slot = name.into();
        }
        self
    }

    /// Marks a seat as controlled by a person.
    pub fn with_human(mut self, seat: Seat) -> Self {
        self.human = Some(seat);
        self
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The number of players.
    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    /// The player who leads the first combination.
    pub fn leader(&self) -> Seat {
        self.leader
    }

    /// The hand dealt to the specified seat.
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), RoundError> {
        let count = self.hands.len();
        if !(3..=4).contains(&count) || self.names.len() != count {
            return Err(RoundError::InvalidPlayerCount(count));
        }
        if self.leader.index() >= count || self.human.is_some_and(|s| s.index() >= count) {
            return Err(RoundError::InvalidPlayerCount(count));
        }
        let total: usize = self.hands.iter().map(Vec::len).sum();
        let seen: HashSet<_> = self.hands.iter().flatten().collect();
        if seen.len() == total {
            Ok(())
        } else {
            Err(RoundError::DuplicateCard)
        }
    }

    /// Canonicalizes the configuration.
    pub fn canonicalize(&mut self) {
        for hand in &mut self.hands {
            sort_cards(hand, false);
        }
    }

    /// Seats the players described by this configuration, and deals their hands.
    fn participants(&self) -> Vec<Participant> {
        Seat::all_seats(self.hands.len())
            .map(|seat| {
                let name = self.names[seat.index()].clone();
                let mut participant = Participant::new(seat, name, self.human == Some(seat));
                participant.receive_cards(self.hands[seat.index()].clone(), false);
                participant
            })
            .collect()
    }
}

/// The holder of the three of diamonds leads the first combination. Without it, the first seat
/// leads.
fn first_leader(hands: &[Vec<Card>]) -> Seat {
    let diamond_three = Card::new(Rank::Three, Suit::Diamond);
    Seat::all_seats(hands.len())
        .find(|seat| hands[seat.index()].contains(&diamond_three))
        .unwrap_or(Seat::new(0))
}

/// The outcome of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Every seat with its title, in the order they finished.
    pub standings: Vec<(Seat, Title)>,
}

impl Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let standings = self
            .standings
            .iter()
            .map(|(seat, title)| format!("{seat} {title}"))
            .join(", ");
        f.write_str(&standings)
    }
}

impl RoundOutcome {
    /// The title earned by the specified seat.
    pub fn title(&self, seat: Seat) -> Option<Title> {
        self.standings
            .iter()
            .find(|(s, _)| *s == seat)
            .map(|(_, title)| *title)
    }

    /// The seat that finished first.
    pub fn winner(&self) -> Option<Seat> {
        self.standings.first().map(|(seat, _)| *seat)
    }
}

/// The state visible to a particular seat.
#[derive(Debug)]
pub struct PlayerState<'a> {
    /// The player who has access to this state.
    pub seat: Seat,
    /// The player's hand.
    pub hand: &'a Hand,
    /// The shared table state.
    pub table: &'a Table,
    /// The number of cards held by each player, indexed by seat.
    pub hand_counts: Vec<usize>,
}

impl<'a> PlayerState<'a> {
    /// Creates a new [`PlayerState`].
    pub fn new(seat: Seat, participants: &'a [Participant], table: &'a Table) -> Self {
        Self {
            seat,
            hand: participants[seat.index()].hand(),
            table,
            hand_counts: participants.iter().map(Participant::hand_count).collect(),
        }
    }

    /// Every combination in the player's hand that may be played onto the field.
    pub fn playable_hands(&self) -> Vec<Combination> {
        self.table.playable_hands(self.hand.cards())
    }

    /// Returns true if the player must lead onto an empty field.
    pub fn is_leading(&self) -> bool {
        self.table.field().is_none()
    }

    /// Builds a play from the player's selected cards, if any are selected.
    pub fn selected_play(&self) -> Option<ActionData> {
        let selected = self.hand.selected();
        (!selected.is_empty()).then(|| ActionData::play(selected))
    }
}

/// The type of action expected from a player, given the state of the field.
fn action_type(table: &Table) -> ActionType {
    if table.field().is_none() {
        ActionType::Lead
    } else {
        ActionType::Follow
    }
}

/// Checks that a play doesn't repeat any card, and that the player holds every card.
fn check_held(participant: &Participant, cards: &[Card]) -> Result<(), PlayerError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for &card in cards {
        if !seen.insert(card) {
            return Err(PlayerError::DuplicateCard(card));
        }
        if !participant.hand().contains(&card) {
            return Err(PlayerError::CardNotHeld(participant.seat(), card));
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use assert_matches::assert_matches;

    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| Card::from_str(c).unwrap())
            .collect()
    }

    #[test]
    fn test_deal() {
        let settings = Settings::default();
        let config = RoundConfig::new(&settings, create_deck(true)).unwrap();
        let sizes: Vec<_> = Seat::all_seats(4).map(|s| config.hand(s).len()).collect();
        assert_eq!(sizes, vec![15, 13, 13, 13]);
        assert!(config.hand(config.leader()).contains(&cards("3D")[0]));

        let settings = Settings {
            player_count: 3,
            jokers: false,
            ..Settings::default()
        };
        let config = RoundConfig::new(&settings, create_deck(false)).unwrap();
        let sizes: Vec<_> = Seat::all_seats(3).map(|s| config.hand(s).len()).collect();
        assert_eq!(sizes, vec![18, 17, 17]);
    }

    #[test]
    fn test_invalid_config() {
        let settings = Settings::default();
        assert_matches!(
            RoundConfig::new(&settings, create_deck(false)),
            Err(RoundError::IncompleteDeck)
        );
        let settings = Settings {
            player_count: 2,
            ..Settings::default()
        };
        assert_matches!(
            RoundConfig::new(&settings, create_deck(true)),
            Err(RoundError::InvalidPlayerCount(2))
        );
        let hands = vec![cards("3S 4S"), cards("4S"), cards("5S")];
        assert_matches!(
            RoundConfig::from_hands(Rules::default(), hands),
            Err(RoundError::DuplicateCard)
        );
    }

    #[test]
    fn test_leader() {
        let hands = vec![cards("3S"), cards("4S"), cards("5S 3D")];
        let config = RoundConfig::from_hands(Rules::default(), hands).unwrap();
        assert_eq!(config.leader(), Seat::new(2));
        assert_eq!(config.hand(Seat::new(2)), cards("3D 5S").as_slice());

        let hands = vec![cards("3S"), cards("4S"), cards("5S")];
        let config = RoundConfig::from_hands(Rules::default(), hands).unwrap();
        assert_eq!(config.leader(), Seat::new(0));

        let participants = config.with_human(Seat::new(1)).participants();
        let humans: Vec<_> = participants.iter().map(Participant::is_human).collect();
        assert_eq!(humans, vec![false, true, false]);
        assert_eq!(participants[2].name(), "P3");
    }

    #[test]
    fn test_outcome_display() {
        let outcome = RoundOutcome {
            standings: vec![
                (Seat::new(1), Title::Daifugo),
                (Seat::new(0), Title::Heimin),
                (Seat::new(2), Title::Daihinmin),
            ],
        };
        assert_eq!(outcome.to_string(), "P2 Daifugo, P1 Heimin, P3 Daihinmin");
        assert_eq!(outcome.title(Seat::new(0)), Some(Title::Heimin));
        assert_eq!(outcome.winner(), Some(Seat::new(1)));
    }
}
