pub mod engine;
pub mod game;
pub mod uci;

pub use engine::eval::evaluate;
pub use engine::search::{ScoredMove, SearchConfig, Searcher};
pub use game::Game;
pub use shakmaty;
pub use uci::UCI;
