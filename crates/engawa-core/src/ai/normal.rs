use rand::{Rng, RngCore};

use super::MoveSelector;
use crate::position::Position;
use crate::types::Move;

/// 取る駒の価値の倍率
const CAPTURE_WEIGHT: f64 = 10.0;
const PROMOTE_BONUS: f64 = 5.0;
const CHECK_BONUS: f64 = 8.0;
const MATE_BONUS: f64 = 1000.0;
/// 同程度の手をばらつかせる乱数の幅 [0, JITTER)
const JITTER: f64 = 2.0;

/// 一手だけ読んで加点の大きい手を選ぶ
///
/// 点数 = 乱数 + 取った駒の価値×10 + 成り 5 + 王手 8 + 詰み 1000。
/// 最高点の手が複数あれば、その中から一様ランダムに選ぶ。
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelector;

impl GreedySelector {
    fn score(pos: &Position, mv: &Move, rng: &mut dyn RngCore) -> f64 {
        let mut score = rng.random::<f64>() * JITTER;
        if let Some(captured) = mv.captured {
            score += f64::from(captured.value()) * CAPTURE_WEIGHT;
        }
        if mv.promote {
            score += PROMOTE_BONUS;
        }
        let next = pos.apply(mv);
        if next.in_check() {
            score += CHECK_BONUS;
            if !next.has_legal_move() {
                score += MATE_BONUS;
            }
        }
        score
    }
}

impl MoveSelector for GreedySelector {
    fn name(&self) -> &'static str {
        "normal"
    }

    fn select(&self, pos: &Position, moves: &[Move], rng: &mut dyn RngCore) -> Option<Move> {
        let mut best_score = f64::NEG_INFINITY;
        let mut best: Vec<Move> = Vec::new();
        for mv in moves {
            let score = Self::score(pos, mv, rng);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(*mv);
            } else if score == best_score {
                best.push(*mv);
            }
        }
        match best.len() {
            0 => None,
            1 => Some(best[0]),
            n => Some(best[rng.random_range(0..n)]),
        }
    }
}
