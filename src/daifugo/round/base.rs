//! Base round.

use std::collections::VecDeque;

use log::{debug, info};

use super::{
    action_type, check_held, Action, ActionData, ActionType, Card, Deck, Event, ExpectAction,
    Participant, PlayerError, PlayerState, Round, RoundConfig, RoundError, Seat, Settings, Table,
    Title,
};


/// The main state machine for the round.
///
/// A new round is initiated by a deal, and the holder of the three of diamonds is expected to
/// `Lead`. While the field holds a combination, each subsequent player is expected to `Follow`,
/// either by beating it or by passing. When the field is cleared, by an eight-cut or by everyone
/// passing, the next player to act must `Lead` again.
///
/// The round ends as soon as a single player is left holding cards.
#[derive(Debug)]
pub struct BaseRound {
    table: Table,
    participants: Vec<Participant>,
    finish_order: Vec<Seat>,
    events: VecDeque<Event>,
    next_action: Option<ExpectAction>,
}

impl From<RoundConfig> for BaseRound {
    fn from(config: RoundConfig) -> Self {
        let leader = config.leader();
        BaseRound {
            table: Table::new(config.rules()),
            participants: config.participants(),
            finish_order: vec![],
            events: [Event::Deal(leader)].into(),
            next_action: Some(ExpectAction::new(leader, ActionType::Lead)),
        }
    }
}

impl Round for BaseRound {
    fn table(&self) -> &Table {
        &self.table
    }

    fn participants(&self) -> &[Participant] {
        &self.participants
    }

    fn finish_order(&self) -> &[Seat] {
        &self.finish_order
    }

    fn next_action(&self) -> Option<ExpectAction> {
        self.next_action
    }

    fn player_state(&self, seat: Seat) -> PlayerState<'_> {
        PlayerState::new(seat, &self.participants, &self.table)
    }

    fn apply_action(&mut self, action: Action) -> Result<(), RoundError> {
        match self.next_action {
            None => Err(RoundError::RoundOver),
            Some(expect) if expect.seat != action.seat || expect.action != action.action => {
                Err(RoundError::ExpectActioned {
                    seat: expect.seat,
                    action: expect.action,
                })
            }
            Some(_) => self.handle(action),
        }
    }

    fn pop_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }
}

impl BaseRound {
    /// Deals a new round from the specified deck.
    pub fn new(settings: &Settings, deck: Deck) -> Result<Self, RoundError> {
        RoundConfig::new(settings, deck).map(Self::from)
    }

    fn handle(&mut self, Action { seat, data, .. }: Action) -> Result<(), RoundError> {
        match data {
            ActionData::Pass => self.pass(seat),
            ActionData::Play { cards } => self.play(seat, &cards)?,
        }
        Ok(())
    }

    fn play(&mut self, seat: Seat, cards: &[Card]) -> Result<(), PlayerError> {
        check_held(&self.participants[seat.index()], cards)?;
        let outcome = self.table.play(cards, seat)?;
        let participant = &mut self.participants[seat.index()];
        participant.play_cards(cards);
        participant.clear_selection();
        debug!("{seat}: {}", outcome.combination);
        self.events.push_back(Event::Play(seat, outcome.combination));

        if outcome.revolution {
            let revolution = self.table.is_revolution();
            info!(
                "{seat}: revolution, ranking is now {}",
                if revolution { "inverted" } else { "normal" }
            );
            for participant in &mut self.participants {
                participant.sort_hand(revolution);
            }
            self.events.push_back(Event::Revolution(revolution));
        }
        if outcome.eight_cut {
            debug!("{seat}: eight-cut");
            self.events.push_back(Event::EightCut(seat));
        }
        if outcome.spade3_return {
            debug!("{seat}: spade-3 counters the joker");
            self.events.push_back(Event::SpadeThreeReturn(seat));
        }

        if self.participants[seat.index()].has_empty_hand() {
            self.finish(seat);
            if self.active_count() <= 1 {
                self.end_round();
                return Ok(());
            }
        }
        self.next_turn(seat);
        Ok(())
    }

    fn pass(&mut self, seat: Seat) {
        self.table.pass();
        debug!("{seat}: pass");
        self.participants[seat.index()].clear_selection();
        self.events.push_back(Event::Pass(seat));
        if self.table.should_clear_field(self.active_count()) {
            self.flow(seat);
        } else {
            self.next_turn(seat);
        }
    }

    /// Everyone has passed. The last player to have played leads onto an empty field, or the next
    /// active player after them, if they have already finished.
    fn flow(&mut self, passer: Seat) {
        self.table.clear_field();
        self.table.reset_passes();
        let leader = match self.table.last_player() {
            Some(last) => self.active_from(last),
            None => passer,
        };
        debug!("field flows to {leader}");
        self.events.push_back(Event::Flow(leader));
        self.next_action = Some(ExpectAction::new(leader, ActionType::Lead));
    }

    fn finish(&mut self, seat: Seat) {
        let title = Title::for_position(self.finish_order.len(), self.participants.len());
        self.participants[seat.index()].finish(title);
        self.finish_order.push(seat);
        info!("{seat} finishes as {title}");
        self.events.push_back(Event::Finish(seat, title));
    }

    /// The last player holding cards finishes in last place.
    fn end_round(&mut self) {
        let remaining: Vec<Seat> = self
            .participants
            .iter()
            .filter(|p| p.is_active())
            .map(Participant::seat)
            .collect();
        for seat in remaining {
            self.finish(seat);
        }
        self.next_action = None;
        let outcome = self.outcome().expect("every player has finished");
        info!("round over: {outcome}");
        self.events.push_back(Event::Round(outcome));
    }

    fn next_turn(&mut self, seat: Seat) {
        let next = self.active_from(seat.next(self.participants.len()));
        self.next_action = Some(ExpectAction::new(next, action_type(&self.table)));
    }

    /// Returns the first active seat, starting from the specified seat and moving clockwise.
    fn active_from(&self, seat: Seat) -> Seat {
        let count = self.participants.len();
        let mut seat = seat;
        for _ in 0..count {
            if self.participants[seat.index()].is_active() {
                return seat;
            }
            seat = seat.next(count);
        }
        seat
    }
}
