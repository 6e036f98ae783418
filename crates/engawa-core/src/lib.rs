//! # engawa-core
//!
//! 将棋のルールエンジンと対局 AI。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Player, PieceKind, Piece, Square, Hand, Move, Value）
//! - `board`: 9×9 の盤面と初期配置
//! - `movegen`: 擬似合法手の生成と成り・打ちの規則
//! - `position`: 局面（盤面 + 手駒 + 手番）と do_move/undo_move、SFEN
//! - `legal`: 王手判定と合法手の列挙
//! - `game`: 対局状態と状態遷移、イベント通知
//! - `eval`: 静的評価関数
//! - `ai`: 難易度別の指し手選択
//! - `usi`: USI 形式の指し手文字列
//!
//! ライブラリはログを `log` クレート経由で出すだけで、ロガーの初期化は行わない。

pub mod error;
pub mod types;

pub mod board;
pub mod movegen;
pub mod position;

pub mod legal;

pub mod game;

pub mod eval;

pub mod ai;

pub mod usi;

pub use ai::{Difficulty, MoveSelector, SearchConfig, get_ai_move, seeded_rng, select_move};
pub use board::Board;
pub use error::{Result, ShogiError};
pub use eval::evaluate;
pub use game::{GameObserver, GameState, GameStatus, NoopObserver, classify};
pub use legal::{
    apply_move, drop_targets, get_all_legal_moves, is_checkmate, is_in_check, is_stalemate,
    legal_destinations,
};
pub use movegen::{PromotionChoice, get_piece_moves};
pub use position::{Position, STARTPOS_SFEN};
pub use types::{
    BOARD_SIZE, BaseKind, Hand, Hands, Move, Piece, PieceKind, Player, PromotedKind, Square, Value,
};
pub use usi::parse_usi_move;

/// 平手初期局面の対局状態
pub fn create_initial_game_state() -> GameState {
    GameState::new()
}
