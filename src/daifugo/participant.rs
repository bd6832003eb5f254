//! A seated player's state during a round.

use delegate::delegate;

use super::{Card, Hand, Seat, Title};

/// A player at the table: identity, hand, and standing in the current round.
#[derive(Debug, Clone)]
pub struct Participant {
    seat: Seat,
    name: String,
    human: bool,
    hand: Hand,
    active: bool,
    title: Option<Title>,
}

impl Participant {
    /// Creates a new [`Participant`] with an empty hand.
    pub fn new(seat: Seat, name: String, human: bool) -> Self {
        Self {
            seat,
            name,
            human,
            hand: Hand::default(),
            active: true,
            title: None,
        }
    }

    delegate! {
        to self.hand {
            #[call(len)]
            pub fn hand_count(&self) -> usize;
            #[call(is_empty)]
            pub fn has_empty_hand(&self) -> bool;
            #[call(selected)]
            pub fn selected_cards(&self) -> Vec<Card>;
            pub fn clear_selection(&mut self);
            #[call(sort)]
            pub fn sort_hand(&mut self, revolution: bool);
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_human(&self) -> bool {
        self.human
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns false once the player has finished the round.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The title earned this round, once finished.
    pub fn title(&self) -> Option<Title> {
        self.title
    }

    /// Adds dealt cards to the hand.
    pub fn receive_cards(&mut self, cards: Vec<Card>, revolution: bool) {
        self.hand.receive(cards, revolution);
    }

    /// Removes played cards from the hand, returning those that were held.
    pub fn play_cards(&mut self, cards: &[Card]) -> Vec<Card> {
        self.hand.remove(cards)
    }

    /// Takes the player out of the round with the specified title.
    pub(super) fn finish(&mut self, title: Title) {
        assert!(self.active, "{} already finished", self.seat);
        self.active = false;
        self.title = Some(title);
    }
}
