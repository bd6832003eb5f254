//! Table position.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Table position, numbered clockwise from zero. A seat identifies a player for the duration of
/// a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat(u8);

impl Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

impl TryFrom<char> for Seat {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_digit(10) {
            Some(n @ 1..=4) => Ok(Seat(n as u8 - 1)),
            _ => Err(()),
        }
    }
}

impl Seat {
    /// Creates a new [`Seat`].
    pub fn new(index: u8) -> Self {
        Seat(index)
    }

    /// The position of this seat, as an index into per-seat collections.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// All seats at a table of `count` players, in clockwise order.
    pub fn all_seats(count: usize) -> impl Iterator<Item = Seat> {
        (0..count).filter_map(|i| u8::try_from(i).ok()).map(Seat)
    }

    /// The next seat clockwise, at a table of `count` players.
    pub fn next(self, count: usize) -> Seat {
        let next = (self.index() + 1) % count.max(1);
        Seat(u8::try_from(next).unwrap_or_default())
    }
}
