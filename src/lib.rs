//! A rules engine for the card game daifugo, with computer opponents.

pub mod daifugo;
pub mod deck;
pub use crate::daifugo::*;
