//! Move ordering: front-load the moves most likely to cause a cutoff.

use shakmaty::Move;

use crate::game::Game;

const CAPTURE_BONUS: i32 = 1000;
const CHECK_BONUS: i32 = 50;
const PROMOTION_BONUS: i32 = 900;

/// The legal moves of the current position, reordered so captures,
/// checks, and promotions come first.
///
/// The sort is stable: equally scored moves keep the generator's order,
/// and the result is always a permutation of the legal-move set.
pub fn ordered_moves(game: &Game) -> Vec<Move> {
    let mut scored: Vec<(Move, i32)> = game
        .legal_moves()
        .iter()
        .map(|mv| (mv.clone(), heuristic(game, mv)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(mv, _)| mv).collect()
}

fn heuristic(game: &Game, mv: &Move) -> i32 {
    let mut score = 0;
    if mv.is_capture() {
        score += CAPTURE_BONUS;
    }
    if game.gives_check(mv) {
        score += CHECK_BONUS;
    }
    if mv.is_promotion() {
        score += PROMOTION_BONUS;
    }
    score
}
