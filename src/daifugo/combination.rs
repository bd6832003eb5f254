//! Combinations of cards, and the classifier that recognizes them.

use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{sort_cards, Card, Strength, Suit, JOKER_STRENGTH};

/// The shape of a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Single,
    Pair,
    Triple,
    Quad,
    Sequence,
    Pass,
}
impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Kind::Single => "single",
            Kind::Pair => "pair",
            Kind::Triple => "triple",
            Kind::Quad => "quad",
            Kind::Sequence => "sequence",
            Kind::Pass => "pass",
        })
    }
}

/// A set of cards that forms a legal shape, along with its strength.
///
/// The strength is computed under the ranking in effect when the cards were classified. Member
/// cards are kept in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Combination {
    /// No cards at all.
    Pass,
    /// One card.
    Single { card: Card, strength: Strength },
    /// Two cards of one rank.
    Pair { cards: Vec<Card>, strength: Strength },
    /// Three cards of one rank.
    Triple { cards: Vec<Card>, strength: Strength },
    /// Four or more cards of one rank.
    Quad { cards: Vec<Card>, strength: Strength },
    /// Three or more cards of one suit with consecutive strengths. Jokers fill gaps.
    Sequence {
        cards: Vec<Card>,
        suit: Suit,
        strength: Strength,
    },
}

impl Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())?;
        for card in self.cards() {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

impl Combination {
    pub fn kind(&self) -> Kind {
        match self {
            Combination::Pass => Kind::Pass,
            Combination::Single { .. } => Kind::Single,
            Combination::Pair { .. } => Kind::Pair,
            Combination::Triple { .. } => Kind::Triple,
            Combination::Quad { .. } => Kind::Quad,
            Combination::Sequence { .. } => Kind::Sequence,
        }
    }

    /// The member cards, in canonical order.
    pub fn cards(&self) -> &[Card] {
        match self {
            Combination::Pass => &[],
            Combination::Single { card, .. } => std::slice::from_ref(card),
            Combination::Pair { cards, .. }
            | Combination::Triple { cards, .. }
            | Combination::Quad { cards, .. }
            | Combination::Sequence { cards, .. } => cards,
        }
    }

    /// The number of member cards.
    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Combination::Pass)
    }

    pub fn strength(&self) -> Strength {
        match self {
            Combination::Pass => 0,
            Combination::Single { strength, .. }
            | Combination::Pair { strength, .. }
            | Combination::Triple { strength, .. }
            | Combination::Quad { strength, .. }
            | Combination::Sequence { strength, .. } => *strength,
        }
    }

    /// Returns true if playing this combination flips the ranking, when revolutions are
    /// enabled.
    pub fn triggers_revolution(&self) -> bool {
        match self {
            Combination::Quad { .. } => true,
            Combination::Sequence { cards, .. } => cards.len() >= 5,
            Combination::Pass
            | Combination::Single { .. }
            | Combination::Pair { .. }
            | Combination::Triple { .. } => false,
        }
    }

    /// Returns true for a joker played on its own.
    pub fn is_joker_single(&self) -> bool {
        matches!(self, Combination::Single { card, .. } if card.is_joker())
    }

    pub fn contains_eight(&self) -> bool {
        self.cards().iter().any(|c| c.is_eight())
    }

    /// Returns true if both combinations have the same shape: the same kind, and the same length
    /// for sequences.
    pub fn same_shape(&self, other: &Combination) -> bool {
        match (self, other) {
            (Combination::Sequence { cards: a, .. }, Combination::Sequence { cards: b, .. }) => {
                a.len() == b.len()
            }
            (Combination::Single { .. }, Combination::Single { .. })
            | (Combination::Pair { .. }, Combination::Pair { .. })
            | (Combination::Triple { .. }, Combination::Triple { .. })
            | (Combination::Quad { .. }, Combination::Quad { .. })
            | (Combination::Pass, Combination::Pass) => true,
            _ => false,
        }
    }
}

/// Classifies a set of cards.
///
/// Returns `None` if the cards do not form a legal combination. The result does not depend on
/// the order of the input.
pub fn classify(cards: &[Card], revolution: bool, stairs: bool) -> Option<Combination> {
    let mut cards = cards.to_vec();
    sort_cards(&mut cards, revolution);

    match cards.len() {
        0 => return Some(Combination::Pass),
        1 => {
            let card = cards[0];
            let strength = card.strength(revolution);
            return Some(Combination::Single { card, strength });
        }
        _ => (),
    }

    let (jokers, standard): (Vec<Card>, Vec<Card>) = cards.iter().partition(|c| c.is_joker());

    if standard.iter().map(|c| c.rank()).all_equal() {
        let strength = standard
            .first()
            .map_or(JOKER_STRENGTH, |c| c.strength(revolution));
        return Some(match cards.len() {
            2 => Combination::Pair { cards, strength },
            3 => Combination::Triple { cards, strength },
            _ => Combination::Quad { cards, strength },
        });
    }

    if stairs && cards.len() >= 3 {
        let (suit, strength) = run(&standard, jokers.len(), revolution)?;
        return Some(Combination::Sequence {
            cards,
            suit,
            strength,
        });
    }

    None
}

/// Checks whether same-suit cards, plus some jokers, form a run. Returns the suit and the
/// highest strength among the ranked cards.
fn run(standard: &[Card], jokers: usize, revolution: bool) -> Option<(Suit, Strength)> {
    let suit = standard.first()?.suit()?;
    if standard.iter().any(|c| c.suit() != Some(suit)) {
        return None;
    }

    let strengths: Vec<Strength> = standard
        .iter()
        .map(|c| c.strength(revolution))
        .sorted_unstable()
        .collect();
    let mut gaps = 0;
    for (lo, hi) in strengths.iter().tuple_windows() {
        if lo == hi {
            return None;
        }
        gaps += usize::from(hi - lo - 1);
    }

    let highest = *strengths.last()?;
    (gaps <= jokers).then_some((suit, highest))
}
