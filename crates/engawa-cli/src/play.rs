//! 人間 vs AI の対話対局
//!
//! 入力は 1 行 1 手の USI 形式（例: `7g7f`, `8h2b+`, `P*5e`）。
//! `resign` で投了、`quit` で中断。

use std::io::{BufRead, Write};

use anyhow::Result;
use engawa_core::{Difficulty, GameState, GameStatus, Player, SearchConfig, parse_usi_move, select_move, seeded_rng};

use crate::selfplay::LoggingObserver;

/// 対話対局の結末
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayEnd {
    /// 詰み・ステイルメイトで終局
    Finished(GameState),
    /// 人間が投了した
    Resigned(GameState),
    /// 入力が尽きた、または quit
    Aborted(GameState),
}

impl PlayEnd {
    pub fn state(&self) -> &GameState {
        match self {
            PlayEnd::Finished(s) | PlayEnd::Resigned(s) | PlayEnd::Aborted(s) => s,
        }
    }
}

pub struct PlaySession {
    pub human: Player,
    pub difficulty: Difficulty,
    pub search: SearchConfig,
    pub seed: u64,
}

impl PlaySession {
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<PlayEnd> {
        let mut rng = seeded_rng(self.seed);
        let mut observer = LoggingObserver::default();
        let mut state = GameState::new();
        log::info!(
            "play: human={} ai={} seed={}",
            self.human,
            self.difficulty,
            self.seed
        );

        while !state.is_over() {
            writeln!(out, "{}", state.position())?;
            writeln!(out)?;

            if state.turn() != self.human {
                let Some(mv) = select_move(&state.position(), self.difficulty, self.search, &mut rng) else {
                    break;
                };
                writeln!(out, "AI: {mv}")?;
                state = state.apply_observed(&mv, &mut observer)?;
                continue;
            }

            write!(out, "{} > ", state.ply() + 1)?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(PlayEnd::Aborted(state));
            }
            match line.trim() {
                "" => continue,
                "quit" => return Ok(PlayEnd::Aborted(state)),
                "resign" => {
                    writeln!(out, "{}の投了", self.human.label())?;
                    return Ok(PlayEnd::Resigned(state));
                }
                text => {
                    let position = state.position();
                    let applied = parse_usi_move(text, &position).and_then(|mv| state.apply_observed(&mv, &mut observer));
                    match applied {
                        Ok(next) => state = next,
                        Err(e) => writeln!(out, "{e}")?,
                    }
                }
            }
        }

        writeln!(out, "{}", state.position())?;
        match (state.status(), state.winner()) {
            (GameStatus::Checkmate, Some(winner)) => writeln!(out, "詰み。{}の勝ち", winner.label())?,
            (status, _) => writeln!(out, "終局: {status}")?,
        }
        Ok(PlayEnd::Finished(state))
    }
}
