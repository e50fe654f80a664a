use crate::engine::eval::evaluate;
use crate::engine::hints::suggestions;
use crate::engine::search::{ScoredMove, SearchConfig, Searcher};
use crate::game::Game;
use shakmaty::{CastlingMode, Position, uci::UciMove};
use std::io::{self, BufRead, Write};
use vampirc_uci::uci::UciSearchControl;
use vampirc_uci::{UciMessage, parser};

pub struct UCI {
    pub game: Game,
    searcher: Searcher,
    /// Number of ranked root moves to report (UCI MultiPV).
    multi_pv: u32,
}

impl UCI {
    pub fn new() -> Self {
        UCI {
            game: Game::new(),
            searcher: Searcher::default(),
            multi_pv: 1,
        }
    }

    /// Current MultiPV setting (for tests).
    pub fn multi_pv(&self) -> u32 {
        self.multi_pv
    }

    /// Current search depth (for tests).
    pub fn depth(&self) -> u32 {
        self.searcher.config().max_depth()
    }

    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let msg = parser::parse_one(line);
            match msg {
                UciMessage::Uci => self.cmd_uci(&mut stdout),
                UciMessage::IsReady => writeln!(stdout, "readyok").unwrap(),
                UciMessage::SetOption { name, value } => {
                    self.apply_setoption(name.trim(), value.as_deref());
                }
                UciMessage::UciNewGame => self.cmd_ucinewgame(),
                UciMessage::Position {
                    startpos,
                    fen,
                    moves,
                } => {
                    let fen_str = fen.as_ref().map(|f| f.as_str());
                    let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                    let refs: Vec<&str> = move_strs.iter().map(String::as_str).collect();
                    self.apply_position(startpos, fen_str, &refs);
                }
                UciMessage::Go { search_control, .. } => {
                    let depth = go_depth(search_control.as_ref());
                    self.do_go(depth, &mut stdout);
                }
                UciMessage::Quit => break,
                UciMessage::Unknown(ref s, _) => {
                    let parts: Vec<&str> = s.split_whitespace().collect();
                    if let Some(&first) = parts.first() {
                        match first {
                            "d" | "display" => self.cmd_display(&mut stdout),
                            "eval" => self.cmd_eval(&mut stdout),
                            "hint" => self.cmd_hint(&parts, &mut stdout),
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
            stdout.flush().unwrap();
        }
    }

    fn cmd_uci(&self, stdout: &mut io::Stdout) {
        writeln!(stdout, "id name MentorChess 0.1.0").unwrap();
        writeln!(stdout, "id author MentorChess Team").unwrap();
        writeln!(stdout).unwrap();
        writeln!(stdout, "option name Depth type spin default 3 min 1 max 12").unwrap();
        writeln!(
            stdout,
            "option name Randomness type spin default 0 min 0 max 100"
        )
        .unwrap();
        writeln!(stdout, "option name MultiPV type spin default 1 min 1 max 5").unwrap();
        writeln!(stdout, "uciok").unwrap();
    }

    pub fn cmd_setoption(&mut self, parts: &[&str]) {
        let mut name = String::new();
        let mut value = String::new();
        let mut in_name = false;
        let mut in_value = false;

        for part in parts.iter().skip(1) {
            match *part {
                "name" => {
                    in_name = true;
                    in_value = false;
                }
                "value" => {
                    in_name = false;
                    in_value = true;
                }
                _ => {
                    if in_name {
                        if !name.is_empty() {
                            name.push(' ');
                        }
                        name.push_str(part);
                    } else if in_value {
                        if !value.is_empty() {
                            value.push(' ');
                        }
                        value.push_str(part);
                    }
                }
            }
        }

        self.apply_setoption(&name, Some(&value));
    }

    /// Apply setoption by name and value (used by vampirc path and cmd_setoption).
    fn apply_setoption(&mut self, name: &str, value: Option<&str>) {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.unwrap_or("").trim();
        if opt == "depth" {
            if let Ok(d) = value.parse::<u32>() {
                self.reconfigure(d, self.searcher.config().randomness());
            }
        } else if opt == "randomness" {
            if let Ok(pct) = value.parse::<u32>() {
                let randomness = f64::from(pct.min(100)) / 100.0;
                self.reconfigure(self.searcher.config().max_depth(), randomness);
            }
        } else if opt == "multipv" {
            if let Ok(n) = value.parse::<u32>() {
                self.multi_pv = n.clamp(1, 5);
            }
        }
    }

    /// Replace the searcher; out-of-range parameters leave it unchanged.
    fn reconfigure(&mut self, max_depth: u32, randomness: f64) {
        if let Ok(config) = SearchConfig::new(max_depth, randomness) {
            self.searcher = Searcher::new(config);
        }
    }

    pub fn cmd_ucinewgame(&mut self) {
        self.game = Game::new();
    }

    pub fn cmd_position(&mut self, parts: &[&str]) {
        let mut idx = 1;
        let startpos = idx < parts.len() && parts[idx] == "startpos";
        let mut fen_str: Option<String> = None;
        let mut move_strs: Vec<&str> = Vec::new();

        if startpos {
            idx += 1;
        } else if idx < parts.len() && parts[idx] == "fen" {
            idx += 1;
            let mut fen_parts = Vec::new();
            while idx < parts.len() && parts[idx] != "moves" {
                fen_parts.push(parts[idx]);
                idx += 1;
            }
            fen_str = Some(fen_parts.join(" "));
        }

        if idx < parts.len() && parts[idx] == "moves" {
            idx += 1;
            move_strs = parts[idx..].to_vec();
        }

        self.apply_position(startpos, fen_str.as_deref(), &move_strs);
    }

    /// Apply position from parsed UCI (used by vampirc path and cmd_position).
    fn apply_position(&mut self, startpos: bool, fen: Option<&str>, move_strs: &[&str]) {
        if startpos {
            self.game = Game::new();
        } else if let Some(fen_str) = fen {
            if let Ok(game) = Game::from_fen(fen_str) {
                self.game = game;
            }
        }

        // Replaying the moves keeps the history the repetition rule counts.
        for &s in move_strs {
            if let Some(mv) = self.parse_move(s) {
                self.game.push(&mv);
            }
        }
    }

    pub fn parse_move(&self, move_str: &str) -> Option<shakmaty::Move> {
        let uci: UciMove = move_str.parse().ok()?;
        let mv = uci.to_move(self.game.position()).ok()?;
        if self.game.position().is_legal(&mv) {
            Some(mv)
        } else {
            None
        }
    }

    /// Run the fixed-depth search and output bestmove; `go depth N`
    /// reconfigures the searcher first.
    fn do_go(&mut self, depth: Option<u32>, stdout: &mut io::Stdout) {
        if let Some(d) = depth {
            self.reconfigure(d, self.searcher.config().randomness());
        }

        if self.multi_pv > 1 {
            self.report_ranked(stdout);
        }

        match self.searcher.choose_move(&mut self.game) {
            Some(mv) => {
                writeln!(stdout, "bestmove {}", mv.to_uci(CastlingMode::Standard)).unwrap()
            }
            None => writeln!(stdout, "bestmove 0000").unwrap(),
        }
    }

    fn report_ranked(&mut self, stdout: &mut io::Stdout) {
        let depth = self.searcher.config().max_depth();
        let ranked = self
            .searcher
            .top_moves(&mut self.game, self.multi_pv as usize);
        for (i, ScoredMove { mv, score }) in ranked.into_iter().enumerate() {
            writeln!(
                stdout,
                "info depth {} multipv {} score cp {} pv {}",
                depth,
                i + 1,
                score,
                mv.to_uci(CastlingMode::Standard)
            )
            .unwrap();
        }
    }

    fn cmd_display(&self, stdout: &mut io::Stdout) {
        writeln!(stdout, "\n{:?}", self.game.position()).unwrap();
    }

    fn cmd_eval(&self, stdout: &mut io::Stdout) {
        let score = evaluate(&self.game);
        writeln!(stdout, "Evaluation: {} cp (positive = White advantage)", score).unwrap();
    }

    fn cmd_hint(&mut self, parts: &[&str], stdout: &mut io::Stdout) {
        let k: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);
        for line in suggestions(&self.searcher, &mut self.game, k) {
            writeln!(stdout, "{}", line).unwrap();
        }
    }
}

/// Extract the fixed search depth from a parsed go command, if any.
fn go_depth(search_control: Option<&UciSearchControl>) -> Option<u32> {
    search_control.and_then(|sc| sc.depth).map(u32::from)
}

impl Default for UCI {
    fn default() -> Self {
        Self::new()
    }
}
