//! Tic-tac-toe with an optimal computer opponent.
//!
//! The core is [`logic::evaluate`], which classifies a board, and
//! [`player::ai::best_move`], a minimax search with alpha-beta pruning that
//! picks the computer's move. The rest is the terminal front end, the game
//! loop and a self-play runner built on top of those two calls.

pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;
pub mod ui;

pub use crate::core::{Board, Cell, PlayerId};
pub use error::{Error, Result};
pub use logic::{evaluate, Outcome};
pub use player::ai::{best_move, search, BestMove};
