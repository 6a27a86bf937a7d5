pub mod ai;
pub mod controller;
pub mod tui;

pub use ai::{MinimaxAI, RandomAI};
pub use controller::{Decision, PlayerController};
pub use tui::TuiController;
