use anyhow::{Context, Result};
use clap::Parser;
use holdem_rs::agents::{CallingStation, Policy, ScriptedOpponent, ScriptedProfile};
use holdem_rs::cards::format_cards;
use holdem_rs::deck::Deck;
use holdem_rs::hand::HoleCards;
use holdem_rs::table::{play_hand, Action, Outcome, Round, Seat, Street, TableConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead, Write};

#[derive(Debug, Parser)]
#[command(version, about = "Single-table Texas Hold'em against scripted opponents")]
struct Cli {
    /// Number of scripted opponents.
    #[arg(long, short, default_value_t = 3)]
    opponents: usize,
    /// Starting chips for every seat.
    #[arg(long, short, default_value_t = 1000)]
    chips: u64,
    /// Hands to play; stops early once only one seat has chips.
    #[arg(long, short = 'n', default_value_t = 1)]
    hands: usize,
    /// Seed for shuffling and opponent decisions.
    #[arg(long, short)]
    seed: Option<u64>,
    /// Check or call automatically instead of prompting.
    #[arg(long)]
    auto: bool,
}

/// The human seat, reading decisions from stdin.
struct Prompt<R> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    fn read_action(&mut self, to_call: u64) -> io::Result<Option<Action>> {
        loop {
            print!("[f]old, [k]check, [c]all {to_call}, [r <n>]aise > ");
            io::stdout().flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let mut words = line.split_whitespace();
            let action = match (words.next(), words.next().map(str::parse::<u64>)) {
                (Some("f"), _) => Action::Fold,
                (Some("k"), _) if to_call == 0 => Action::Check,
                (Some("k"), _) => {
                    println!("cannot check facing {to_call}");
                    continue;
                }
                (Some("c"), _) => Action::Call,
                (Some("r"), Some(Ok(by))) if by > 0 => Action::Raise(by),
                _ => {
                    println!("unrecognised input");
                    continue;
                }
            };
            return Ok(Some(action));
        }
    }
}

impl<R: BufRead> Policy for Prompt<R> {
    fn decide(&mut self, round: &Round, seat: usize) -> Action {
        let to_call = round.to_call(seat);
        if let Some(s) = round.seat(seat) {
            let hole = s.hole.map(|h| format_cards(&h.as_array())).unwrap_or_default();
            println!("hole [{}] | chips {}", hole, s.chips);
        }
        match self.read_action(to_call) {
            Ok(Some(action)) => action,
            // closed or broken stdin: keep the hand moving
            Ok(None) | Err(_) => CallingStation.decide(round, seat),
        }
    }
}

/// Prints each street as the wrapped seat first sees it.
struct Narrated {
    inner: Box<dyn Policy>,
    /// Street and hole cards, so a new hand prints even on the same street.
    last: Option<(Street, Option<HoleCards>)>,
}

impl Policy for Narrated {
    fn decide(&mut self, round: &Round, seat: usize) -> Action {
        let key = (round.street(), round.seat(seat).and_then(|s| s.hole));
        if self.last != Some(key) {
            self.last = Some(key);
            println!("{}: [{}] pot {}", round.street().label(), format_cards(round.board().as_slice()), round.pot());
        }
        self.inner.decide(round, seat)
    }
}

fn policies(cli: &Cli, rng: &mut ChaCha8Rng) -> Vec<Box<dyn Policy>> {
    let human: Box<dyn Policy> = if cli.auto {
        Box::new(CallingStation)
    } else {
        Box::new(Prompt { input: io::stdin().lock() })
    };
    let human: Box<dyn Policy> = Box::new(Narrated { inner: human, last: None });
    std::iter::once(human)
        .chain((0..cli.opponents).map(|_| {
            Box::new(ScriptedOpponent::seeded(ScriptedProfile::default(), rng.random()))
                as Box<dyn Policy>
        }))
        .collect()
}

fn report(outcome: &Outcome) {
    let name = |id: usize| outcome.seats.iter().find(|s: &&Seat| s.id == id).map_or("?", |s| s.name.as_str());
    println!("board [{}]", format_cards(outcome.board.as_slice()));
    if let Some(showdown) = &outcome.showdown {
        for (id, hand) in &showdown.results {
            println!("  {:<8} {:<16} {}", name(*id), hand.category.label(), format_cards(&hand.best_five));
        }
        if !showdown.tied_with().is_empty() {
            println!("  tie on strength, first seat in order takes the pot");
        }
    }
    match &outcome.hand {
        Some(hand) => println!("{} wins {} with {}", name(outcome.winner), outcome.pot, hand.category),
        None => println!("{} wins {} uncontested", name(outcome.winner), outcome.pot),
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("holdem-rs {} seed {}", holdem_rs::VERSION, seed);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut policies = policies(&cli, &mut rng);
    let mut seats = TableConfig::new(cli.opponents, cli.chips).seats();

    for n in 1..=cli.hands {
        if seats.iter().filter(|s| s.chips > 0).count() < 2 {
            break;
        }
        println!("--- hand {n} ---");
        let deck = Deck::standard().shuffled(&mut rng);
        let round = Round::start(seats, deck).context("starting hand")?;
        let outcome = play_hand(round, &mut policies).context("playing hand")?;
        report(&outcome);
        seats = outcome.seats;
    }

    for s in &seats {
        println!("{:<8} {}", s.name, s.chips);
    }
    Ok(())
}
