//! Daifugo deck.

use std::fmt::Display;
use std::str::FromStr;

use ansi_term::ANSIString;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::deck;

/// Card suit. The declaration order breaks ties between cards of equal strength when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}
impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Suit::Spade => "♠",
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
        })
    }
}
impl TryFrom<char> for Suit {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'S' | 's' | '♠' => Suit::Spade,
            'H' | 'h' | '♥' => Suit::Heart,
            'D' | 'd' | '♦' => Suit::Diamond,
            'C' | 'c' | '♣' => Suit::Club,
            _ => return Err(()),
        })
    }
}
impl Suit {
    /// Returns an array of all suits, in sort order.
    pub fn all_suits() -> &'static [Suit] {
        static SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];
        &SUITS
    }

    /// Returns true for hearts and diamonds.
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Heart | Suit::Diamond)
    }
}

/// Card rank, declared from weakest to strongest under normal ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}
impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
        })
    }
}
impl TryFrom<char> for Rank {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | 't' => Rank::Ten,
            'J' | 'j' => Rank::Jack,
            'Q' | 'q' => Rank::Queen,
            'K' | 'k' => Rank::King,
            'A' | 'a' => Rank::Ace,
            '2' => Rank::Two,
            _ => return Err(()),
        })
    }
}
impl Rank {
    /// Returns an array of all ranks, weakest first.
    pub fn all_ranks() -> &'static [Rank] {
        static RANKS: [Rank; 13] = [
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
            Rank::Two,
        ];
        &RANKS
    }

    /// The position of the rank under normal ranking, from 1 (three) to 13 (two).
    pub fn ordinal(self) -> Strength {
        self as Strength + 1
    }
}

/// Comparable card strength. Higher is stronger.
pub type Strength = u8;

/// Strength of a joker, and of a group made only of jokers.
pub const JOKER_STRENGTH: Strength = 14;

/// A daifugo card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// A ranked card of a suit.
    Standard(Rank, Suit),
    /// A joker. The two jokers in a deck are told apart by their instance number.
    Joker(u8),
}
impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Standard(rank, suit) => write!(f, "{rank}{suit}"),
            Card::Joker(n) => write!(f, "🃟{n}"),
        }
    }
}
impl FromStr for Card {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(());
        };
        match (first, second) {
            ('X' | 'x' | '🃟', '1') => Ok(Card::Joker(1)),
            ('X' | 'x' | '🃟', '2') => Ok(Card::Joker(2)),
            _ => Ok(Card::Standard(first.try_into()?, second.try_into()?)),
        }
    }
}
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Card::from_str(&s).map_err(|()| serde::de::Error::custom(format!("not a card: {s}")))
    }
}
impl Card {
    /// Creates a new standard [`Card`].
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card::Standard(rank, suit)
    }

    /// The card's rank, if it is not a joker.
    pub fn rank(self) -> Option<Rank> {
        match self {
            Card::Standard(rank, _) => Some(rank),
            Card::Joker(_) => None,
        }
    }

    /// The card's suit, if it is not a joker.
    pub fn suit(self) -> Option<Suit> {
        match self {
            Card::Standard(_, suit) => Some(suit),
            Card::Joker(_) => None,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Card::Joker(_))
    }

    pub fn is_eight(self) -> bool {
        self.rank() == Some(Rank::Eight)
    }

    pub fn is_spade_three(self) -> bool {
        self == Card::Standard(Rank::Three, Suit::Spade)
    }

    /// Returns the strength of the card. A revolution inverts the ordering of ranked cards, and
    /// turns a joker from the strongest card into the weakest.
    pub fn strength(self, revolution: bool) -> Strength {
        match (self, revolution) {
            (Card::Joker(_), false) => JOKER_STRENGTH,
            (Card::Joker(_), true) => 0,
            (Card::Standard(rank, _), false) => rank.ordinal(),
            (Card::Standard(rank, _), true) => JOKER_STRENGTH - rank.ordinal(),
        }
    }

    /// Key for the canonical display order: by strength, then suit, with jokers last among
    /// equals.
    pub fn sort_key(self, revolution: bool) -> (Strength, u8) {
        let tiebreak = match self {
            Card::Standard(_, suit) => suit as u8,
            Card::Joker(n) => 3 + n,
        };
        (self.strength(revolution), tiebreak)
    }

    /// Returns a string representation of the card, decorated with ANSI color codes.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        use ansi_term::Colour::{Purple, Red};
        match self {
            Card::Joker(_) => Purple.paint(self.to_string()),
            Card::Standard(_, suit) if suit.is_red() => Red.paint(self.to_string()),
            Card::Standard(..) => self.to_string().into(),
        }
    }
}

/// Sorts cards into canonical order, weakest first under the given ranking.
pub fn sort_cards(cards: &mut [Card], revolution: bool) {
    cards.sort_unstable_by_key(|c| c.sort_key(revolution));
}

/// A daifugo deck.
pub type Deck = deck::Deck<Card>;
impl Default for Deck {
    fn default() -> Self {
        create_deck(true)
    }
}

/// Creates an unshuffled deck of the 52 standard cards, plus two jokers if requested.
pub fn create_deck(jokers: bool) -> Deck {
    let standard = iproduct!(Suit::all_suits(), Rank::all_ranks())
        .map(|(&suit, &rank)| Card::Standard(rank, suit));
    let jokers = if jokers { 1..=2 } else { 1..=0 };
    standard.chain(jokers.map(Card::Joker)).collect()
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    fn card(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(card("3s"), Card::new(Rank::Three, Suit::Spade));
        assert_eq!(card("TD"), Card::new(Rank::Ten, Suit::Diamond));
        assert_eq!(card("2♣"), Card::new(Rank::Two, Suit::Club));
        assert_eq!(card("x2"), Card::Joker(2));
        assert_eq!(card("🃟1"), Card::Joker(1));
        for bad in ["", "3", "1S", "3SS", "X3", "ZZ"] {
            assert!(Card::from_str(bad).is_err(), "{bad}");
        }
        for c in create_deck(true).iter() {
            assert_eq!(card(&c.to_string()), *c);
        }
    }

    #[test]
    fn test_strength_total_order() {
        for (i, a) in Rank::all_ranks().iter().enumerate() {
            for (j, b) in Rank::all_ranks().iter().enumerate() {
                let (a, b) = (Card::new(*a, Suit::Spade), Card::new(*b, Suit::Heart));
                for revolution in [false, true] {
                    let order = a.strength(revolution).cmp(&b.strength(revolution));
                    let expect = if revolution { j.cmp(&i) } else { i.cmp(&j) };
                    assert_eq!(order, expect, "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_revolution_inverts_strength() {
        for c in create_deck(false).iter() {
            let normal = c.strength(false);
            assert!((1..=13).contains(&normal));
            assert_eq!(c.strength(true), JOKER_STRENGTH - normal);
        }
        assert_eq!(card("3S").strength(false), 1);
        assert_eq!(card("2S").strength(false), 13);
        assert_eq!(card("X1").strength(false), 14);
        assert_eq!(card("X1").strength(true), 0);
    }

    #[test]
    fn test_deck() {
        let deck = create_deck(true);
        assert_eq!(deck.len(), 54);
        assert_eq!(deck.iter().collect::<HashSet<_>>().len(), 54);
        assert_eq!(deck.iter().filter(|c| c.is_joker()).count(), 2);

        let deck = create_deck(false);
        assert_eq!(deck.len(), 52);
        assert!(!deck.iter().any(|c| c.is_joker()));
    }

    #[test]
    fn test_sort_cards() {
        let mut cards: Vec<_> = ["2S", "X1", "3C", "3S", "KH"].iter().map(|s| card(s)).collect();
        sort_cards(&mut cards, false);
        let sorted: Vec<_> = cards.iter().map(|c| c.to_string()).collect();
        assert_eq!(sorted, ["3♠", "3♣", "K♥", "2♠", "🃟1"]);

        sort_cards(&mut cards, true);
        let sorted: Vec<_> = cards.iter().map(|c| c.to_string()).collect();
        assert_eq!(sorted, ["🃟1", "2♠", "K♥", "3♠", "3♣"]);
    }
}
