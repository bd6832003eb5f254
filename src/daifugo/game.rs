//! Game management.
//!
//! A game consists of a sequence of [`Round`]s, played by the same seats under the same
//! [`Settings`]. Every round awards each seat a [`Title`], and the game keeps a tally.

use std::collections::HashMap;
use std::sync::Arc;

use itertools::Itertools;
use log::debug;
use rand::Rng;

use super::{Event, Player, Round, RoundConfig, RoundError, RoundOutcome, Seat, Settings, Title};

/// A game of daifugo.
pub struct Game<R> {
    /// The settings shared by every round.
    settings: Settings,
    /// The current round.
    round: R,
    /// The number of rounds dealt so far.
    dealt: usize,
    /// The outcome of every finished round.
    history: Vec<RoundOutcome>,
}

impl<R> Game<R>
where
    R: Round,
{
    /// Creates a new [`Game`], starting from the specified round.
    pub fn from_round(settings: Settings, round: R) -> Result<Self, RoundError> {
        let settings = settings.validate()?;
        if round.participants().len() != settings.player_count {
            return Err(RoundError::InvalidPlayerCount(round.participants().len()));
        }
        Ok(Self {
            settings,
            round,
            dealt: 1,
            history: vec![],
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns an immutable reference to the current round.
    pub fn round(&self) -> &R {
        &self.round
    }

    /// Returns an mutable reference to the current round.
    pub fn round_mut(&mut self) -> &mut R {
        &mut self.round
    }

    /// The outcomes of every finished round, oldest first.
    pub fn history(&self) -> &[RoundOutcome] {
        &self.history
    }

    /// Counts the titles earned by the specified seat over the game.
    pub fn tally(&self, seat: Seat) -> HashMap<Title, usize> {
        self.history
            .iter()
            .filter_map(|outcome| outcome.title(seat))
            .counts()
    }

    /// Plays the current round to completion.
    ///
    /// Each seat's [`Player`] is asked for actions in turn. Every event is forwarded to all of the
    /// players, and then to `observe`. A rejected action is offered back to the player, who may
    /// retry; otherwise, the error ends the round early.
    pub fn play_round<F>(
        &mut self,
        players: &[Arc<dyn Player>],
        mut observe: F,
    ) -> Result<RoundOutcome, RoundError>
    where
        F: FnMut(&R, &Event),
    {
        let seats: Vec<Seat> = Seat::all_seats(self.round.participants().len()).collect();
        if players.len() != seats.len() {
            return Err(RoundError::InvalidPlayerCount(players.len()));
        }

        loop {
            while let Some(event) = self.round.pop_event() {
                for (&seat, player) in seats.iter().zip(players) {
                    player.notify(self.round.player_state(seat), &event);
                }
                observe(&self.round, &event);
            }
            let Some(expect) = self.round.next_action() else {
                break;
            };
            let player = &players[expect.seat.index()];
            let data = player.take_action(self.round.player_state(expect.seat), expect.action);
            match self.round.apply_action(expect.with_data(data)) {
                Err(RoundError::Player(err)) => {
                    debug!("{}: rejected: {err}", expect.seat);
                    if !player.handle_error(err.clone()) {
                        return Err(err.into());
                    }
                }
                Err(err) => return Err(err),
                Ok(()) => (),
            }
        }

        let outcome = self.round.outcome().ok_or(RoundError::RoundInProgress)?;
        if self.history.len() < self.dealt {
            self.history.push(outcome.clone());
        }
        Ok(outcome)
    }
}

impl<R> Game<R>
where
    R: Round + From<RoundConfig>,
{
    /// Creates a new [`Game`], and deals the first round.
    pub fn new<G: Rng + ?Sized>(settings: Settings, rng: &mut G) -> Result<Self, RoundError> {
        let round = RoundConfig::random(&settings, rng)?.into();
        Self::from_round(settings, round)
    }

    /// Deals a new round. It is an error to abandon a round that isn't finished.
    pub fn next_round<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<(), RoundError> {
        if self.round.outcome().is_none() {
            return Err(RoundError::RoundInProgress);
        }
        self.round = RoundConfig::random(&self.settings, rng)?.into();
        self.dealt += 1;
        Ok(())
    }
}
