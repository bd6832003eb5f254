//! A deck of cards.

use rand::distributions::{Distribution, Standard};
use rand::seq::SliceRandom;
use rand::Rng;

/// A deck of cards. Cards are drawn from the end of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck<C> {
    cards: Vec<C>,
}

impl<C> Distribution<Deck<C>> for Standard
where
    Deck<C>: Default,
{
    fn sample<R: rand::prelude::Rng + ?Sized>(&self, rng: &mut R) -> Deck<C> {
        Deck::default().shuffled(rng)
    }
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let cards = iter.into_iter().collect();
        Self { cards }
    }
}

impl<C> Deck<C> {
    /// The number of cards remaining in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the deck has no cards left.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns an iterator over the cards, bottom first.
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cards.iter()
    }

    /// Consumes the deck, returning its cards, bottom first.
    pub fn into_vec(self) -> Vec<C> {
        self.cards
    }

    /// Applies a uniform random permutation to the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the deck, shuffled.
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.shuffle(rng);
        self
    }

    /// Removes up to `n` cards from the deck.
    pub fn take(&mut self, n: usize) -> Vec<C> {
        let idx = self.cards.len().saturating_sub(n);
        self.cards.split_off(idx)
    }

    /// Deals the whole deck into `hands` hands of equal size. Cards that don't divide evenly
    /// go to the first hand.
    pub fn deal(mut self, hands: usize) -> Vec<Vec<C>> {
        if hands == 0 {
            return vec![];
        }
        let per_hand = self.cards.len() / hands;
        let mut dealt: Vec<_> = (0..hands).map(|_| self.take(per_hand)).collect();
        dealt[0].append(&mut self.cards);
        dealt
    }
}
