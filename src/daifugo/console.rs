//! Text rendering of round events, for the command line.

use ansi_term::{ANSIString, ANSIStrings, Colour};
use itertools::Itertools;

use super::{Card, Combination, Event, Participant, Seat};

/// Renders events as lines of text, optionally colored.
#[derive(Debug, Clone)]
pub struct Console {
    color: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn format(&self, s: &ANSIStrings) -> String {
        if self.color {
            s.to_string()
        } else {
            ansi_term::unstyle(s)
        }
    }

    pub fn format_card(&self, card: Card) -> String {
        self.format(&ANSIStrings(&[card.to_ansi_string()]))
    }

    /// Formats cards in the order given, separated by spaces.
    pub fn format_cards(&self, cards: &[Card]) -> String {
        let parts: Vec<ANSIString> = Itertools::intersperse(
            cards.iter().map(|c| c.to_ansi_string()),
            " ".into(),
        )
        .collect();
        self.format(&ANSIStrings(&parts))
    }

    pub fn format_combination(&self, combination: &Combination) -> String {
        format!(
            "{} {}",
            combination.kind(),
            self.format_cards(combination.cards())
        )
    }

    fn highlight(&self, s: &str) -> String {
        self.format(&ANSIStrings(&[Colour::Yellow.bold().paint(s)]))
    }

    /// Describes an event, naming players as they are seated.
    pub fn describe(&self, participants: &[Participant], event: &Event) -> String {
        let name = |seat: Seat| {
            participants
                .get(seat.index())
                .map_or_else(|| seat.to_string(), |p| p.name().to_string())
        };
        match event {
            Event::Deal(leader) => format!("Cards dealt. {} leads", name(*leader)),
            Event::Play(seat, combination) => {
                format!("{}: {}", name(*seat), self.format_combination(combination))
            }
            Event::Pass(seat) => format!("{}: pass", name(*seat)),
            Event::Revolution(true) => self.highlight("Revolution! The ranking is inverted"),
            Event::Revolution(false) => self.highlight("Revolution! The ranking is restored"),
            Event::EightCut(seat) => format!("{}: eight-cut clears the field", name(*seat)),
            Event::SpadeThreeReturn(seat) => {
                format!("{}: spade-3 counters the joker", name(*seat))
            }
            Event::Flow(seat) => format!("The field flows. {} leads", name(*seat)),
            Event::Finish(seat, title) => self.highlight(&format!("{} is {title}", name(*seat))),
            Event::Round(outcome) => {
                let standings = outcome
                    .standings
                    .iter()
                    .enumerate()
                    .map(|(i, (seat, title))| format!("{}. {} ({title})", i + 1, name(*seat)))
                    .join(", ");
                format!("Round over: {standings}")
            }
        }
    }

    /// Prints an event to stdout.
    pub fn print(&self, participants: &[Participant], event: &Event) {
        println!("{}", self.describe(participants, event));
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;
    use crate::daifugo::{classify, RoundOutcome, Title};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| Card::from_str(c).unwrap())
            .collect()
    }

    #[test]
    fn test_describe() {
        let console = Console::new(false);
        let participants = vec![
            Participant::new(Seat::new(0), "Alice".into(), true),
            Participant::new(Seat::new(1), "Bob".into(), false),
        ];
        let describe = |event| console.describe(&participants, &event);

        let pair = classify(&cards("TD TH"), false, true).unwrap();
        assert_eq!(describe(Event::Play(Seat::new(1), pair)), "Bob: pair T♥ T♦");
        assert_eq!(describe(Event::Pass(Seat::new(0))), "Alice: pass");
        assert_eq!(describe(Event::Flow(Seat::new(3))), "The field flows. P4 leads");
        assert_eq!(
            describe(Event::Finish(Seat::new(1), Title::Daifugo)),
            "Bob is Daifugo"
        );
        let outcome = RoundOutcome {
            standings: vec![(Seat::new(1), Title::Daifugo), (Seat::new(0), Title::Daihinmin)],
        };
        assert_eq!(
            describe(Event::Round(outcome)),
            "Round over: 1. Bob (Daifugo), 2. Alice (Daihinmin)"
        );
    }

    #[test]
    fn test_color() {
        let card = cards("9H")[0];
        assert_eq!(Console::new(false).format_card(card), "9♥");
        assert_ne!(Console::new(true).format_card(card), "9♥");
        assert_eq!(Console::new(true).format_card(cards("9S")[0]), "9♠");
    }
}
