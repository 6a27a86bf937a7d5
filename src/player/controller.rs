use crate::core::Board;

/// What a controller wants to do on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Play(usize),
    Restart,
    Quit,
}

/// A participant that picks a cell for the side it plays.
pub trait PlayerController {
    fn choose_move(&self, board: &Board, legal_moves: &[usize]) -> Decision;
    fn name(&self) -> &str;
    /// Human controllers read input themselves, so the game loop does not poll for them.
    fn is_human(&self) -> bool {
        false
    }
}
