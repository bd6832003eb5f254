//! A round that maintains a log of actions taken.

use delegate::delegate;

use crate::daifugo::{
    Action, BaseRound, Event, ExpectAction, Log, Participant, PlayerState, Round, RoundConfig,
    RoundError, Seat, Table,
};

/// A [`Round`] implementation that maintains a [`Log`] of all actions taken.
#[derive(Debug)]
pub struct LoggingRound {
    round: BaseRound,
    log: Log,
    cursor: usize,
}
impl From<RoundConfig> for LoggingRound {
    fn from(config: RoundConfig) -> Self {
        Self {
            log: Log::new(config.clone()),
            round: config.into(),
            cursor: 0,
        }
    }
}
impl From<LoggingRound> for Log {
    fn from(value: LoggingRound) -> Self {
        value.log
    }
}
impl From<Log> for LoggingRound {
    fn from(log: Log) -> Self {
        let round = log.config().clone().into();
        Self {
            log,
            round,
            cursor: 0,
        }
    }
}

impl Round for LoggingRound {
    delegate! {
        to self.round {
            fn table(&self) -> &Table;
            fn participants(&self) -> &[Participant];
            fn finish_order(&self) -> &[Seat];
            fn next_action(&self) -> Option<ExpectAction>;
            fn player_state(&self, seat: Seat) -> PlayerState<'_>;
            fn pop_event(&mut self) -> Option<Event>;
        }
    }

    fn apply_action(&mut self, action: Action) -> Result<(), RoundError> {
        self.round.apply_action(action.clone())?;
        self.cursor = self.log.insert(self.cursor, action);
        Ok(())
    }
}

impl LoggingRound {
    /// Returns the number of actions applied since the deal.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns an immutable reference to the log.
    pub fn log(&self) -> &Log {
        &self.log
    }

    /// Restarts the round.
    pub fn restart(&mut self) {
        self.cursor = 0;
        self.round = BaseRound::from(self.log.config().clone());
    }

    /// Seeks to the specified position in the log. Events raised along the way are queued, as if
    /// the actions had just been taken.
    pub fn seek(&mut self, position: usize) -> Result<(), RoundError> {
        let actions = self.log.history(position)?.to_vec();
        self.restart();
        for action in actions {
            self.round.apply_action(action)?;
            self.cursor += 1;
        }
        Ok(())
    }

    /// Replays every action in the log.
    pub fn replay(&mut self) -> Result<(), RoundError> {
        self.seek(self.log.len())
    }
}
