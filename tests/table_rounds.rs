use holdem_rs::agents::{CallingStation, Policy, ScriptedOpponent, ScriptedProfile};
use holdem_rs::deck::Deck;
use holdem_rs::table::{play_hand, Action, Round, Street, TableConfig, TableError};

/// Bets once on the first street it sees open, then calls or checks.
struct Opener {
    done: bool,
}

impl Policy for Opener {
    fn decide(&mut self, round: &Round, seat: usize) -> Action {
        if !self.done && round.to_call(seat) == 0 {
            self.done = true;
            return Action::Raise(50);
        }
        CallingStation.decide(round, seat)
    }
}

struct Folder;

impl Policy for Folder {
    fn decide(&mut self, _round: &Round, _seat: usize) -> Action {
        Action::Fold
    }
}

fn start(opponents: usize, chips: u64, seed: u64) -> Round {
    Round::start(TableConfig::new(opponents, chips).seats(), Deck::standard().shuffled_seeded(seed)).unwrap()
}

fn total_chips(round_seats: &[holdem_rs::table::Seat]) -> u64 {
    round_seats.iter().map(|s| s.chips).sum()
}

#[test]
fn check_down_reaches_showdown() {
    let round = start(3, 100, 1);
    let mut policies: Vec<Box<dyn Policy>> = (0..4).map(|_| Box::new(CallingStation) as Box<dyn Policy>).collect();
    let outcome = play_hand(round, &mut policies).unwrap();

    assert_eq!(outcome.board.len(), 5);
    assert_eq!(outcome.pot, 0);
    let showdown = outcome.showdown.as_ref().expect("showdown reached");
    assert_eq!(showdown.results.len(), 4);
    assert_eq!(outcome.hand, Some(showdown.hand));
    assert_eq!(total_chips(&outcome.seats), 400);
}

#[test]
fn everyone_folds_to_a_bet() {
    let round = start(2, 100, 2);
    let mut policies: Vec<Box<dyn Policy>> = vec![Box::new(Opener { done: false }), Box::new(Folder), Box::new(Folder)];
    let outcome = play_hand(round, &mut policies).unwrap();

    assert_eq!(outcome.winner, 0);
    assert_eq!(outcome.hand, None);
    assert!(outcome.showdown.is_none());
    assert_eq!(outcome.pot, 50);
    assert!(outcome.board.is_empty());
    assert_eq!(outcome.seats[0].chips, 100);
}

#[test]
fn all_in_runs_the_board_out() {
    let round = start(2, 20, 3);
    let mut policies: Vec<Box<dyn Policy>> =
        vec![Box::new(Opener { done: false }), Box::new(CallingStation), Box::new(CallingStation)];
    let outcome = play_hand(round, &mut policies).unwrap();

    assert_eq!(outcome.board.len(), 5);
    assert_eq!(outcome.pot, 60);
    assert!(outcome.showdown.is_some());
    let winner = outcome.seats.iter().find(|s| s.id == outcome.winner).unwrap();
    assert_eq!(winner.chips, 60);
    assert_eq!(total_chips(&outcome.seats), 60);
}

#[test]
fn snapshots_are_not_mutated() {
    let r0 = start(2, 100, 4);
    let r1 = r0.apply(0, Action::Raise(10)).unwrap();
    let r2 = r1.apply(1, Action::Fold).unwrap();

    assert_eq!(r0.pot(), 0);
    assert_eq!(r0.current(), Some(0));
    assert_eq!(r0.seats()[0].chips, 100);
    assert_eq!(r1.pot(), 10);
    assert!(r1.seats()[1].active);
    assert!(!r2.seats()[1].active);
}

#[test]
fn streets_reveal_three_one_one() {
    let mut round = start(1, 100, 5);
    let mut sizes = Vec::new();
    while round.street() != Street::Showdown {
        while let Some(seat) = round.current() {
            round = round.apply(seat, Action::Check).unwrap();
        }
        round = round.advance().unwrap();
        sizes.push(round.board().len());
    }
    assert_eq!(sizes, vec![3, 4, 5, 5]);
    assert_eq!(round.cards_left(), 52 - 4 - 5);
    assert_eq!(round.advance(), Err(TableError::HandOver));
    assert!(round.apply(0, Action::Check).is_err());
}

#[test]
fn seeded_play_replays_exactly() {
    let play = || {
        let mut policies: Vec<Box<dyn Policy>> = (0..4)
            .map(|i| Box::new(ScriptedOpponent::seeded(ScriptedProfile::default(), i)) as Box<dyn Policy>)
            .collect();
        play_hand(start(3, 500, 77), &mut policies).unwrap()
    };
    let a = play();
    let b = play();
    assert_eq!(a, b);
    assert_eq!(total_chips(&a.seats), 2000);
}

#[test]
fn chips_are_conserved_across_hands() {
    let mut seats = TableConfig::new(3, 200).seats();
    let mut policies: Vec<Box<dyn Policy>> = (0..4)
        .map(|i| Box::new(ScriptedOpponent::seeded(ScriptedProfile::default(), 100 + i)) as Box<dyn Policy>)
        .collect();
    for seed in 0..20 {
        if seats.iter().filter(|s| s.chips > 0).count() < 2 {
            break;
        }
        let round = Round::start(seats, Deck::standard().shuffled_seeded(seed)).unwrap();
        seats = play_hand(round, &mut policies).unwrap().seats;
        assert_eq!(total_chips(&seats), 800);
    }
}

#[test]
fn missing_policy_is_reported() {
    let mut policies: Vec<Box<dyn Policy>> = vec![Box::new(CallingStation)];
    assert_eq!(play_hand(start(2, 100, 6), &mut policies), Err(TableError::NoPolicy(1)));
}
