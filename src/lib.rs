//! Minimax strategies for two-player, sequential, zero-sum games with
//! perfect information.
//!
//! A game implements [`game::Position`]; any strategy in [`strategies`] can
//! then suggest a move for it.
//!
//! ```
//! use minimax::game::subtract::{Subtract, SubtractSquare};
//! use minimax::game::Player;
//! use minimax::strategies::{Prune, SearchParams, Strategy};
//!
//! let game = SubtractSquare::new(Player::P1, 16);
//! let mut strategy = Prune::create(SearchParams::default());
//! assert_eq!(strategy.suggest_move(&game).unwrap(), Subtract(1));
//! ```

pub mod error;
pub mod game;
pub mod runner;
pub mod strategies;

pub use error::{Error, Result};
pub use game::{ParseMove, Player, Position, Score};
pub use strategies::{Scorer, Strategy, StrategyKind};
