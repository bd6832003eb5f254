//! Robot player

use std::cmp::Reverse;
use std::ops::Range;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{ActionData, ActionType, Player, PlayerState};
use crate::daifugo::{Card, Combination, Difficulty, Kind, Strength, Table};

/// Cards weaker than this, under the current ranking, are worth getting rid of by revolution.
const WEAK_STRENGTH: Strength = 7;

/// How a robot plays at a particular difficulty.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// The range of time spent thinking before each move, in milliseconds.
    pub think_time: Range<u64>,
    /// The probability of playing without any strategy at all.
    pub mistake_rate: f64,
    /// When playing without strategy, the probability of passing.
    pub pass_rate: f64,
    /// The robot only considers a revolution while holding more cards than this.
    pub revolution_threshold: usize,
}

impl From<Difficulty> for Profile {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Profile {
                think_time: 1000..2000,
                mistake_rate: 0.3,
                pass_rate: 0.2,
                revolution_threshold: 5,
            },
            Difficulty::Normal => Profile {
                think_time: 800..1500,
                mistake_rate: 0.0,
                pass_rate: 0.0,
                revolution_threshold: 8,
            },
            Difficulty::Hard => Profile {
                think_time: 500..1000,
                mistake_rate: 0.0,
                pass_rate: 0.0,
                revolution_threshold: 10,
            },
        }
    }
}

impl Profile {
    /// Picks a think time.
    pub fn think_time<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.gen_range(self.think_time.clone()))
    }

    /// Returns true if the hand is large and weak enough that inverting the ranking would help.
    pub fn should_revolution(&self, hand: &[Card], revolution: bool) -> bool {
        let len = hand.len();
        if len <= 4 || len <= self.revolution_threshold {
            return false;
        }
        // Low ranks are weak in either mode; under revolution that means high strength.
        let weak = hand
            .iter()
            .filter(|c| {
                if revolution {
                    c.strength(true) > WEAK_STRENGTH
                } else {
                    c.strength(false) < WEAK_STRENGTH
                }
            })
            .count();
        weak * 5 >= len * 3
    }
}

#[derive(Debug)]
struct Inner {
    profile: Profile,
    rng: StdRng,
    think: bool,
}

/// A CPU player.
#[derive(Debug)]
pub struct Robot(Mutex<Inner>);

impl Default for Robot {
    fn default() -> Self {
        Robot::new(Difficulty::default(), rand::random())
    }
}

impl Player for Robot {
    fn take_action(&self, state: PlayerState, _: ActionType) -> ActionData {
        let mut inner = self.0.lock().unwrap();
        let Inner { profile, rng, think } = &mut *inner;
        if *think {
            std::thread::sleep(profile.think_time(rng));
        }
        let data = select_move(profile, state.hand.cards(), state.table, rng);
        debug!("{}: chose {data:?}", state.seat);
        data
    }
}

impl Robot {
    /// Creates a new [`Robot`] with a seeded random number generator.
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Robot(Mutex::new(Inner {
            profile: difficulty.into(),
            rng: StdRng::seed_from_u64(seed),
            think: false,
        }))
    }

    /// Enables pausing before each move, for the benefit of human onlookers.
    pub fn with_thinking(self, think: bool) -> Self {
        let mut inner = self.0.lock().unwrap();
        inner.think = think;
        drop(inner);
        self
    }

    pub fn into_player(self) -> Arc<dyn Player> {
        Arc::new(self)
    }
}

/// Chooses a move for the hand. The result is always either a pass, or a play that the table
/// accepts.
pub fn select_move<R: Rng + ?Sized>(
    profile: &Profile,
    hand: &[Card],
    table: &Table,
    rng: &mut R,
) -> ActionData {
    let playable = table.playable_hands(hand);
    if playable.is_empty() {
        return ActionData::Pass;
    }

    if rng.gen::<f64>() < profile.mistake_rate {
        if rng.gen::<f64>() < profile.pass_rate {
            return ActionData::Pass;
        }
        return playable
            .choose(rng)
            .map_or(ActionData::Pass, |c| ActionData::play(c.cards().iter().copied()));
    }

    strategic_move(profile, hand, table, &playable)
        .map_or(ActionData::Pass, |c| ActionData::play(c.cards().iter().copied()))
}

fn strategic_move<'a>(
    profile: &Profile,
    hand: &[Card],
    table: &Table,
    playable: &'a [Combination],
) -> Option<&'a Combination> {
    let quad = playable.iter().find(|c| c.kind() == Kind::Quad);
    if quad.is_some() && profile.should_revolution(hand, table.is_revolution()) {
        return quad;
    }

    // Close to finishing, so get the strongest cards out of the way.
    if hand.len() <= 3 {
        return strongest(playable);
    }

    if table.field().is_none() {
        if hand.len() <= 5 {
            return strongest(playable);
        }
        return [Kind::Triple, Kind::Pair, Kind::Single]
            .into_iter()
            .find_map(|kind| weakest(playable.iter().filter(|c| c.kind() == kind)))
            .or(playable.first());
    }

    weakest(playable.iter().filter(|c| c.contains_eight())).or_else(|| weakest(playable))
}

fn strongest(playable: &[Combination]) -> Option<&Combination> {
    playable.iter().min_by_key(|c| Reverse(c.strength()))
}

fn weakest<'a, I>(playable: I) -> Option<&'a Combination>
where
    I: IntoIterator<Item = &'a Combination>,
{
    playable.into_iter().min_by_key(|c| c.strength())
}
