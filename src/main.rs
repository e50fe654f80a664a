//! MentorChess UCI chess engine

use mentor_chess::uci::UCI;

fn main() {
    println!("MentorChess v0.1.0 - fixed-depth UCI engine");
    println!("Type 'uci' to start UCI mode, 'd' to display board, 'quit' to exit");

    let mut uci = UCI::new();
    uci.run();
}
