pub mod alpha_beta;
pub mod minimax;
pub mod random;
pub mod score;

pub use alpha_beta::{best_move, search, BestMove, Searcher, NEG_INF, POS_INF};
pub use minimax::MinimaxAI;
pub use random::RandomAI;
pub use score::ScoreTable;
