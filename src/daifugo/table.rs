//! The rule engine.
//!
//! A [`Table`] holds the state shared by every player during a round: the combination on the
//! field, the run of consecutive passes, the ranking mode, and the last player to have played.
//! All mutations go through [`Table::play`], [`Table::pass`] and [`Table::clear_field`].

use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{classify, sort_cards, Card, Combination, PlayerError, Seat, Suit};

#[cfg(test)]
mod test;

/// Optional rules. These are fixed for the duration of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Quads and long sequences invert the ranking.
    pub revolution: bool,
    /// Any play containing an eight clears the field.
    pub eight_cut: bool,
    /// A single spade-3 beats a single joker.
    pub spade3_return: bool,
    /// Same-suit sequences are legal combinations.
    pub stairs: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            revolution: true,
            eight_cut: true,
            spade3_return: true,
            stairs: true,
        }
    }
}

/// The effects of a successful play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The combination that was played.
    pub combination: Combination,
    /// The play flipped the ranking.
    pub revolution: bool,
    /// The play contained an eight, and the field was cleared.
    pub eight_cut: bool,
    /// The play was a spade-3 countering a joker.
    pub spade3_return: bool,
}

/// The shared table state for a round.
#[derive(Debug, Clone)]
pub struct Table {
    rules: Rules,
    field: Option<Combination>,
    pass_count: usize,
    revolution: bool,
    last_player: Option<Seat>,
}

impl Table {
    /// Creates a new [`Table`] with an empty field.
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            field: None,
            pass_count: 0,
            revolution: false,
            last_player: None,
        }
    }

    /// Sets the ranking mode.
    pub fn with_revolution(mut self, revolution: bool) -> Self {
        self.revolution = revolution;
        self
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The combination that must be beaten, if any.
    pub fn field(&self) -> Option<&Combination> {
        self.field.as_ref()
    }

    /// The number of passes since the last play.
    pub fn pass_count(&self) -> usize {
        self.pass_count
    }

    /// Returns true while the ranking is inverted.
    pub fn is_revolution(&self) -> bool {
        self.revolution
    }

    /// The last player to have played a combination.
    pub fn last_player(&self) -> Option<Seat> {
        self.last_player
    }

    /// Classifies cards under the current ranking and rules.
    pub fn classify(&self, cards: &[Card]) -> Option<Combination> {
        classify(cards, self.revolution, self.rules.stairs)
    }

    /// Returns true if the cards may be played onto the current field.
    pub fn can_play(&self, cards: &[Card]) -> bool {
        self.check(cards).is_ok()
    }

    /// Validates a play against the field. On success, returns the classified combination, and
    /// whether the play relies on the spade-3 counter.
    fn check(&self, cards: &[Card]) -> Result<(Combination, bool), PlayerError> {
        let combination = self
            .classify(cards)
            .ok_or(PlayerError::InvalidCombination)?;
        if combination.is_pass() {
            return Err(PlayerError::EmptyPlay);
        }
        let Some(field) = &self.field else {
            return Ok((combination, false));
        };

        // The field is reclassified, since a revolution may have happened since it was played.
        let field = self.classify(field.cards());
        match field {
            Some(field) if combination.same_shape(&field) => {
                if combination.strength() > field.strength() {
                    Ok((combination, false))
                } else if self.rules.spade3_return
                    && field.is_joker_single()
                    && combination.cards().iter().all(|c| c.is_spade_three())
                {
                    Ok((combination, true))
                } else {
                    Err(PlayerError::IllegalPlay(combination))
                }
            }
            _ => Err(PlayerError::IllegalPlay(combination)),
        }
    }

    /// Plays cards onto the field. Nothing changes if the play is rejected.
    pub fn play(&mut self, cards: &[Card], seat: Seat) -> Result<PlayOutcome, PlayerError> {
        let (combination, spade3_return) = self.check(cards)?;
        let revolution = self.rules.revolution && combination.triggers_revolution();
        let eight_cut = self.rules.eight_cut && combination.contains_eight();

        self.field = Some(combination.clone());
        self.pass_count = 0;
        self.last_player = Some(seat);
        if revolution {
            self.revolution = !self.revolution;
        }
        if eight_cut {
            self.clear_field();
        }

        Ok(PlayOutcome {
            combination,
            revolution,
            eight_cut,
            spade3_return,
        })
    }

    pub fn pass(&mut self) {
        self.pass_count += 1;
    }

    /// Returns true once every active player except the last to have played has passed.
    pub fn should_clear_field(&self, active_players: usize) -> bool {
        self.pass_count + 1 >= active_players
    }

    /// Empties the field. The pass count is left alone.
    pub fn clear_field(&mut self) {
        self.field = None;
    }

    /// Resets the pass count, after the field has been cleared by everyone passing.
    pub fn reset_passes(&mut self) {
        self.pass_count = 0;
    }

    /// Enumerates every combination in the hand that may be played onto the current field.
    ///
    /// Candidates are every single card, the pairs, triples and full group of each rank, and
    /// (with stairs) every same-suit run of three or more consecutive cards. Jokers are only
    /// offered as singles.
    pub fn playable_hands(&self, hand: &[Card]) -> Vec<Combination> {
        let mut candidates: Vec<Vec<Card>> = hand.iter().map(|&c| vec![c]).collect();

        let groups = hand
            .iter()
            .filter_map(|&c| c.rank().map(|rank| (rank, c)))
            .into_group_map();
        for group in groups
            .into_values()
            .sorted_unstable_by_key(|g| g[0].strength(self.revolution))
        {
            if group.len() >= 2 {
                candidates.extend(group.iter().copied().combinations(2));
            }
            if group.len() >= 3 {
                candidates.extend(group.iter().copied().combinations(3));
            }
            if group.len() >= 4 {
                candidates.push(group);
            }
        }

        if self.rules.stairs {
            candidates.extend(self.runs(hand));
        }

        candidates
            .into_iter()
            .filter_map(|cards| self.check(&cards).ok())
            .map(|(combination, _)| combination)
            .collect()
    }

    /// Finds every contiguous run of three or more consecutive cards of one suit.
    fn runs(&self, hand: &[Card]) -> Vec<Vec<Card>> {
        let by_suit = hand
            .iter()
            .filter_map(|&c| c.suit().map(|suit| (suit, c)))
            .into_group_map();

        let mut runs = vec![];
        for suit in Suit::all_suits() {
            let Some(mut cards) = by_suit.get(suit).cloned() else {
                continue;
            };
            sort_cards(&mut cards, self.revolution);
            let strength = |i: usize| cards[i].strength(self.revolution);
            for start in 0..cards.len() {
                let mut end = start + 1;
                while end < cards.len() && strength(end) == strength(end - 1) + 1 {
                    end += 1;
                    if end - start >= 3 {
                        runs.push(cards[start..end].to_vec());
                    }
                }
            }
        }
        runs
    }
}

/// The title a player earns by the order in which they finish a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Title {
    /// Grand millionaire, first to finish.
    Daifugo,
    /// Millionaire.
    Fugo,
    /// Commoner.
    Heimin,
    /// Poor.
    Hinmin,
    /// Extreme poor, last to finish.
    Daihinmin,
}

impl Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Title::Daifugo => "Daifugo",
            Title::Fugo => "Fugo",
            Title::Heimin => "Heimin",
            Title::Hinmin => "Hinmin",
            Title::Daihinmin => "Daihinmin",
        })
    }
}

impl Title {
    /// Returns the title for a zero-based finishing position. With three players the middle
    /// titles collapse into one; unsupported table sizes get the neutral title.
    pub fn for_position(position: usize, players: usize) -> Title {
        match (players, position) {
            (4, 0) | (3, 0) => Title::Daifugo,
            (4, 1) => Title::Fugo,
            (4, 2) => Title::Hinmin,
            (4, 3) | (3, 2) => Title::Daihinmin,
            _ => Title::Heimin,
        }
    }
}
