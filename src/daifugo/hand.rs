//! A player's hand.

use std::collections::HashSet;

use delegate::delegate;

use super::{sort_cards, Card};

/// The cards held by a player, kept in canonical order, along with the subset the player has
/// selected for play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    selected: HashSet<Card>,
}

impl Hand {
    /// Creates a new [`Hand`], sorted under the given ranking.
    pub fn new(cards: Vec<Card>, revolution: bool) -> Self {
        let mut hand = Self {
            cards,
            selected: HashSet::new(),
        };
        hand.sort(revolution);
        hand
    }

    delegate! {
        to self.cards {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, Card>;
            pub fn contains(&self, card: &Card) -> bool;
        }
    }

    /// The cards in display order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Adds cards to the hand.
    pub fn receive<I: IntoIterator<Item = Card>>(&mut self, cards: I, revolution: bool) {
        self.cards.extend(cards);
        self.sort(revolution);
    }

    /// Sorts the hand into canonical order under the given ranking.
    pub fn sort(&mut self, revolution: bool) {
        sort_cards(&mut self.cards, revolution);
    }

    /// Removes the specified cards from the hand, returning those that were actually held.
    pub fn remove(&mut self, cards: &[Card]) -> Vec<Card> {
        let mut removed = Vec::with_capacity(cards.len());
        for card in cards {
            if let Some(idx) = self.cards.iter().position(|c| c == card) {
                removed.push(self.cards.remove(idx));
                self.selected.remove(card);
            }
        }
        removed
    }

    /// Toggles the selection of a held card. Returns whether the card is now selected.
    pub fn toggle(&mut self, card: Card) -> bool {
        if !self.cards.contains(&card) {
            false
        } else if self.selected.remove(&card) {
            false
        } else {
            self.selected.insert(card)
        }
    }

    /// The selected cards, in display order.
    pub fn selected(&self) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| self.selected.contains(c))
            .copied()
            .collect()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}
