//! 固定深さの minimax + alpha-beta
//!
//! 評価は常に AI 側の視点（AI の手番は max、相手の手番は min）。
//! 各ノードは 1 つの局面を do_move / undo_move で使い回す。

use std::cmp::Reverse;

use rand::RngCore;

use super::{MoveSelector, SearchConfig};
use crate::eval::evaluate;
use crate::position::Position;
use crate::types::{Move, Player, Value};

/// ルートの候補手を絞るときの並び替えキー（取る駒の価値×10 + 成り 5）
fn ordering_key(mv: &Move) -> i32 {
    let capture = mv.captured.map_or(0, |p| p.value() * 10);
    let promote = if mv.promote { 5 } else { 0 };
    capture + promote
}

/// minimax 探索で最善手を選ぶ
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimaxSelector {
    config: SearchConfig,
}

impl MinimaxSelector {
    pub const fn new(config: SearchConfig) -> MinimaxSelector {
        MinimaxSelector { config }
    }

    /// ルートで読む候補手
    ///
    /// 上限を超えるときだけキーの降順で安定ソートして先頭から取る。
    pub fn root_candidates(&self, moves: &[Move]) -> Vec<Move> {
        let mut candidates = moves.to_vec();
        if candidates.len() > self.config.root_move_cap {
            candidates.sort_by_key(|mv| Reverse(ordering_key(mv)));
            candidates.truncate(self.config.root_move_cap);
        }
        candidates
    }

    /// 最善手とその評価値。`moves` が空なら None
    pub fn search(&self, pos: &Position, moves: &[Move]) -> Option<(Move, Value)> {
        let candidates = self.root_candidates(moves);
        let first = *candidates.first()?;

        let mut search = Search {
            ai: pos.side_to_move,
            nodes: 0,
        };
        let mut scratch = *pos;
        let mut best_move = first;
        let mut best = -Value::INFINITE;

        for mv in &candidates {
            let undo = scratch.do_move(mv);
            let value = search.minimax(&mut scratch, self.config.depth, 1, best, Value::INFINITE);
            scratch.undo_move(mv, undo);
            log::trace!("root {mv}: {value}");
            // 同点は先に生成された手を残す
            if value > best {
                best = value;
                best_move = *mv;
            }
        }

        log::debug!(
            "minimax depth={} candidates={}/{} nodes={} best={best_move} ({best})",
            self.config.depth,
            candidates.len(),
            moves.len(),
            search.nodes
        );
        Some((best_move, best))
    }
}

impl MoveSelector for MinimaxSelector {
    fn name(&self) -> &'static str {
        "hard"
    }

    fn select(&self, pos: &Position, moves: &[Move], _rng: &mut dyn RngCore) -> Option<Move> {
        self.search(pos, moves).map(|(mv, _)| mv)
    }
}

struct Search {
    ai: Player,
    nodes: u64,
}

impl Search {
    /// `ply` はルートからの手数（ルートの手を指した直後が 1）
    fn minimax(&mut self, pos: &mut Position, depth: u32, ply: i32, mut alpha: Value, mut beta: Value) -> Value {
        self.nodes += 1;
        if depth == 0 {
            return evaluate(&pos.board, &pos.hands, self.ai);
        }

        let maximizing = pos.side_to_move == self.ai;
        let moves = pos.generate_legal();
        if moves.is_empty() {
            if !pos.in_check() {
                return Value::ZERO;
            }
            return if maximizing {
                Value::mated_in(ply)
            } else {
                Value::mate_in(ply)
            };
        }

        if maximizing {
            let mut best = -Value::INFINITE;
            for mv in &moves {
                let undo = pos.do_move(mv);
                let value = self.minimax(pos, depth - 1, ply + 1, alpha, beta);
                pos.undo_move(mv, undo);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = Value::INFINITE;
            for mv in &moves {
                let undo = pos.do_move(mv);
                let value = self.minimax(pos, depth - 1, ply + 1, alpha, beta);
                pos.undo_move(mv, undo);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
