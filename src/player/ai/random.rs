use crate::core::{Board, PlayerId};
use crate::player::{Decision, PlayerController};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

/// Uniformly random legal moves. Used as a sparring partner in self-play.
pub struct RandomAI {
    pub name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(_player_id: PlayerId, name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn seeded(_player_id: PlayerId, name: &str, seed: u64) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _board: &Board, legal_moves: &[usize]) -> Decision {
        match legal_moves.choose(&mut *self.rng.borrow_mut()) {
            Some(&cell) => Decision::Play(cell),
            None => Decision::Quit,
        }
    }
}
