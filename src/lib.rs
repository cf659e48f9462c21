//! A casual chess opponent.
//!
//! The engine picks moves with a fixed-depth minimax search and alpha-beta
//! pruning over a small static evaluator (material, mobility, check). A
//! ten-level difficulty model trades search depth against the chance of
//! playing a random legal move instead.
//!
//! Chess rules are not implemented here. The search drives any [`rules::Rules`]
//! implementation; [`rules::Game`] adapts `shakmaty` for that purpose.
//!
//! ```no_run
//! use sparring::rules::{Game, Rules};
//! use sparring::selector::MoveSelector;
//!
//! let mut game = Game::new();
//! let mut selector = MoveSelector::new(6);
//! if let Some(mv) = selector.select_move(&mut game) {
//!     game.apply_move(&mv).unwrap();
//! }
//! ```

pub mod config;
pub mod diagnostics;
pub mod difficulty;
pub mod error;
pub mod evaluation;
pub mod rules;
pub mod search;
pub mod selector;
pub mod types;
pub mod worker;
