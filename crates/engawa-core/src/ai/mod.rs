//! AI の指し手選択
//!
//! 難易度ごとに同じ合法手リストを入力とする選択戦略を切り替える。
//! - Easy: 一様ランダム
//! - Normal: 取る駒・成り・王手・詰みを加点する一手読み（同点はランダム）
//! - Hard: 固定深さの minimax + alpha-beta
//!
//! 乱数は呼び出し側から渡す。同じ種の乱数なら同じ手を選ぶ。

mod easy;
mod hard;
mod normal;

pub use easy::RandomSelector;
pub use hard::MinimaxSelector;
pub use normal::GreedySelector;

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::position::Position;
use crate::types::{Hands, Move, Player};

/// 難易度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// 難易度に対応する選択戦略
    pub fn selector(self, config: SearchConfig) -> Box<dyn MoveSelector> {
        match self {
            Difficulty::Easy => Box::new(RandomSelector),
            Difficulty::Normal => Box::new(GreedySelector),
            Difficulty::Hard => Box::new(MinimaxSelector::new(config)),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty '{s}' (expected easy, normal or hard)")),
        }
    }
}

/// Hard の探索設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// ルートの手を指した後に読む手数
    pub depth: u32,
    /// ルートで読む候補手の上限
    pub root_move_cap: usize,
}

impl SearchConfig {
    pub const DEFAULT_DEPTH: u32 = 2;
    pub const DEFAULT_ROOT_MOVE_CAP: usize = 30;
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: Self::DEFAULT_DEPTH,
            root_move_cap: Self::DEFAULT_ROOT_MOVE_CAP,
        }
    }
}

/// 合法手リストから 1 手を選ぶ戦略
pub trait MoveSelector {
    /// 戦略名（ログ用）
    fn name(&self) -> &'static str;

    /// `pos` の手番側として `moves` から 1 手を選ぶ
    ///
    /// `moves` は `pos` の合法手を生成順のまま並べたもので、空でないこと。
    fn select(&self, pos: &Position, moves: &[Move], rng: &mut dyn RngCore) -> Option<Move>;
}

/// 再現可能な乱数源（シード固定）
pub fn seeded_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// 局面と難易度・探索設定から AI の指し手を選ぶ
///
/// 合法手がなければ None（詰み・ステイルメイト。エラーではない）。
pub fn select_move(
    pos: &Position,
    difficulty: Difficulty,
    config: SearchConfig,
    rng: &mut dyn RngCore,
) -> Option<Move> {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        log::debug!("{}: no legal move", pos.side_to_move);
        return None;
    }
    let selector = difficulty.selector(config);
    let chosen = selector.select(pos, &moves, rng);
    if let Some(mv) = chosen {
        log::debug!(
            "{} ({}) chose {mv} out of {} moves",
            pos.side_to_move,
            selector.name(),
            moves.len()
        );
    }
    chosen
}

/// `player` の手として AI の指し手を選ぶ（探索設定は既定値）
pub fn get_ai_move(
    board: &Board,
    hands: &Hands,
    player: Player,
    difficulty: Difficulty,
    rng: &mut dyn RngCore,
) -> Option<Move> {
    select_move(&Position::new(*board, *hands, player), difficulty, SearchConfig::default(), rng)
}
