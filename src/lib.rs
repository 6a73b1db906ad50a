//! holdem-rs: Texas Hold'em dealing, hand evaluation and showdown
//!
//! Goals:
//! - Deterministic evaluation of 5 to 7 card hands with a total order
//! - Injectable randomness so deals and opponents replay from a seed
//! - No panics for invalid input; use `Result` for caller contract violations
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use holdem_rs::evaluator::{evaluate_holdem, Category};
//! use holdem_rs::hand::{Board, HoleCards};
//!
//! let hole: HoleCards = "As Ah".parse().unwrap();
//! let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
//!
//! let eval = evaluate_holdem(&hole, &board).unwrap();
//! assert_eq!(eval.category, Category::Pair);
//! ```
//!
//! ## Quick start: deal and resolve a showdown
//! ```
//! use holdem_rs::deck::Deck;
//! use holdem_rs::hand::{Board, HoleCards};
//! use holdem_rs::showdown::{resolve_winner, Contender};
//!
//! let deal = Deck::standard().shuffled_seeded(7).deal(3, 2, 5).unwrap();
//! let board = Board::try_new(deal.community).unwrap();
//! let players: Vec<Contender> = deal
//!     .hands
//!     .iter()
//!     .enumerate()
//!     .map(|(id, cards)| Contender::new(id, HoleCards::from_slice(cards).unwrap()))
//!     .collect();
//! let showdown = resolve_winner(&players, &board).unwrap();
//! assert!(showdown.winner < 3);
//! ```
//!
//! ## CLI
//! Play against scripted opponents with:
//! ```sh
//! cargo run --bin holdem-rs -- --opponents 3
//! ```

pub mod agents;
pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod showdown;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
