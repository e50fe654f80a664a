//! Evaluation Tests
//!
//! Terminal-state scoring, material counting, and mirror symmetry.

use mentor_chess::engine::eval::{DRAW_SCORE, MATE_SCORE, evaluate};
use mentor_chess::game::Game;
use shakmaty::CastlingMode;

fn from_fen(fen: &str) -> Game {
    Game::from_fen(fen).unwrap()
}

// ============================================================================
// Terminal States
// ============================================================================

#[test]
fn test_white_checkmated_scores_negative_sentinel() {
    // Fool's mate: White to move with no reply.
    let game = from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert_eq!(evaluate(&game), -MATE_SCORE);
}

#[test]
fn test_black_checkmated_scores_positive_sentinel() {
    // Scholar's mate: Black to move with no reply.
    let game = from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert_eq!(evaluate(&game), MATE_SCORE);
}

#[test]
fn test_stalemate_scores_zero() {
    let game = from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(evaluate(&game), DRAW_SCORE);
}

#[test]
fn test_insufficient_material_scores_zero() {
    let game = from_fen("8/8/4k3/8/8/8/4K3/8 w - - 0 1");
    assert_eq!(evaluate(&game), DRAW_SCORE);
}

#[test]
fn test_claimable_repetition_scores_zero() {
    let mut game = Game::new();
    let e4 = game
        .legal_moves()
        .iter()
        .find(|m| m.to_uci(CastlingMode::Standard).to_string() == "e2e4")
        .cloned()
        .unwrap();
    game.push(&e4);
    let after_e4 = evaluate(&game);
    assert_ne!(after_e4, 0);

    // Two knight-shuffle cycles put the post-e4 position on the board a
    // third time.
    for _ in 0..2 {
        for uci in ["g8f6", "b1c3", "f6g8", "c3b1"] {
            let mv = game
                .legal_moves()
                .iter()
                .find(|m| m.to_uci(CastlingMode::Standard).to_string() == uci)
                .cloned()
                .unwrap();
            game.push(&mv);
        }
    }

    assert!(game.is_repetition_claimable());
    assert_eq!(evaluate(&game), DRAW_SCORE);
}

// ============================================================================
// Material and Tables
// ============================================================================

#[test]
fn test_startpos_is_balanced() {
    assert_eq!(evaluate(&Game::new()), 0);
}

#[test]
fn test_missing_black_queen_is_a_white_edge() {
    let game = from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert!(evaluate(&game) > 800);
}

#[test]
fn test_advanced_center_pawn_outscores_home_square() {
    let home = from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    let advanced = from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    assert!(evaluate(&advanced) > evaluate(&home));
}

// ============================================================================
// Mirror Symmetry
// ============================================================================

#[test]
fn test_mirrored_pawn_positions_negate() {
    let white_e4 = from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
    let black_e5 = from_fen("rnbqkbnr/pppp1ppp/8/4p3/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(evaluate(&white_e4), -evaluate(&black_e5));
    assert_ne!(evaluate(&white_e4), 0);
}

#[test]
fn test_mirrored_knight_positions_negate() {
    let white_nf3 = from_fen("rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 0 1");
    let black_nf6 = from_fen("rnbqkb1r/pppppppp/5n2/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(evaluate(&white_nf3), -evaluate(&black_nf6));
}

#[test]
fn test_mirrored_endgame_negates() {
    let white_rook = from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1");
    let black_rook = from_fen("r3k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(evaluate(&white_rook), -evaluate(&black_rook));
}
