use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use daifugo::{Console, Game, Log, LoggingRound, PlayerRef, Robot, Round, Seat, Settings};
use itertools::Itertools;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod args;
use self::args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let console = Console::new(!args.no_color);
    match &args.replay {
        Some(path) => replay(&console, path),
        None => play(&console, &args),
    }
}

/// Plays a game between robots, printing every event.
fn play(console: &Console, args: &Args) -> anyhow::Result<()> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = args.apply(settings).validate()?;
    if let Some(path) = &args.save_settings {
        settings.save(path)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed {seed}, settings {settings:?}");
    let mut rng = StdRng::seed_from_u64(seed);
    let players: Vec<PlayerRef> = (0..settings.player_count)
        .map(|_| {
            Robot::new(settings.difficulty, rng.gen())
                .with_thinking(args.think)
                .into_player()
        })
        .collect();

    let mut game: Game<LoggingRound> = Game::new(settings.clone(), &mut rng)?;
    for n in 0..args.rounds {
        if n > 0 {
            game.next_round(&mut rng)?;
        }
        println!("Round {}", n + 1);
        game.play_round(&players, |round, event| {
            console.print(round.participants(), event)
        })?;
    }

    for seat in Seat::all_seats(settings.player_count) {
        let tally = game.tally(seat);
        let summary = tally
            .iter()
            .sorted()
            .map(|(title, count)| format!("{title} x{count}"))
            .join(", ");
        println!("{seat}: {summary}");
    }
    print_log(game.round().log())
}

/// Replays a logged round, printing every event.
fn replay(console: &Console, path: &Path) -> anyhow::Result<()> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let log: Log = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    let mut round = LoggingRound::from(log);
    round.replay()?;
    while let Some(event) = round.pop_event() {
        console.print(round.participants(), &event);
    }
    if round.outcome().is_none() {
        let next = round
            .next_action()
            .map(|expect| format!("{} to {}", expect.seat, expect.action));
        println!("Round incomplete: {}", next.unwrap_or_default());
    }
    Ok(())
}

fn print_log(log: &Log) -> anyhow::Result<()> {
    serde_json::to_writer(std::io::stderr(), log)?;
    eprintln!();
    Ok(())
}
