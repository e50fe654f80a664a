//! Static evaluation: material and piece-square tables.
//!
//! Scores are in centipawns from White's point of view, whatever the side
//! to move. Checkmate and the drawn terminal states are handled before
//! any material is counted.

use shakmaty::{Color, Position, Role, Square};

use crate::game::Game;

/// Checkmate sentinel magnitude. The sign reports which side was mated:
/// negative when White is to move (and so has no reply), positive when
/// Black is.
pub const MATE_SCORE: i32 = 99_999;

/// Score of stalemate, dead material, and claimable repetition.
pub const DRAW_SCORE: i32 = 0;

const fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 0,
    }
}

// Tables are laid out rank 8 first, so index 0 is a8 and index 63 is h1.
// White pieces read them through the vertical flip; Black pieces read them
// directly, which is the same as mirroring the square first.

#[rustfmt::skip]
static PAWN_TABLE: [i32; 64] = [
      0,  0,  0,  0,  0,  0,  0,  0,
     50, 50, 50, 50, 50, 50, 50, 50,
     10, 10, 20, 30, 30, 20, 10, 10,
      5,  5, 10, 25, 25, 10,  5,  5,
      0,  0,  0, 20, 20,  0,  0,  0,
      5, -5,-10,  0,  0,-10, -5,  5,
      5, 10, 10,-20,-20, 10, 10,  5,
      0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
static KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
static BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
static ROOK_TABLE: [i32; 64] = [
      0,  0,  0,  5,  5,  0,  0,  0,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
      5, 10, 10, 10, 10, 10, 10,  5,
      0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
static QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
static KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

fn table(role: Role) -> &'static [i32; 64] {
    match role {
        Role::Pawn => &PAWN_TABLE,
        Role::Knight => &KNIGHT_TABLE,
        Role::Bishop => &BISHOP_TABLE,
        Role::Rook => &ROOK_TABLE,
        Role::Queen => &QUEEN_TABLE,
        Role::King => &KING_TABLE,
    }
}

fn pst_square(sq: Square, color: Color) -> usize {
    match color {
        Color::White => sq.flip_vertical() as usize,
        Color::Black => sq as usize,
    }
}

/// Score the position for White, independent of the side to move.
///
/// Checkmate returns [`MATE_SCORE`] signed against the mated side to
/// move; stalemate, insufficient material, and a claimable threefold
/// repetition all return [`DRAW_SCORE`].
pub fn evaluate(game: &Game) -> i32 {
    if game.is_checkmate() {
        return if game.turn() == Color::White {
            -MATE_SCORE
        } else {
            MATE_SCORE
        };
    }
    if game.is_stalemate() || game.is_insufficient_material() || game.is_repetition_claimable() {
        return DRAW_SCORE;
    }

    let board = game.position().board();
    let mut score = 0;
    for sq in Square::ALL {
        let Some(piece) = board.piece_at(sq) else {
            continue;
        };
        let value = piece_value(piece.role) + table(piece.role)[pst_square(sq, piece.color)];
        score += if piece.color.is_white() { value } else { -value };
    }
    score
}
