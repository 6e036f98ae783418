//! エラー型
//!
//! ルールエンジンの全操作は整形済みの入力に対して全域関数だが、
//! 呼び出し側の契約違反（非合法手・範囲外座標・壊れた SFEN/USI 文字列）は
//! 黙って丸めずに `ShogiError` で即座に失敗させる。

use crate::types::Player;

/// ルールエンジンのエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShogiError {
    /// 盤外の座標
    #[error("square out of bounds: row={row}, col={col}")]
    OutOfBounds { row: usize, col: usize },

    /// 現局面の合法手リストに含まれない指し手
    #[error("invalid move for {player:?}: {detail}")]
    InvalidMove { player: Player, detail: String },

    /// 終局後に指し手が渡された
    #[error("game is already over")]
    GameOver,

    /// SFEN 文字列の解析失敗
    #[error("invalid sfen: {0}")]
    InvalidSfen(String),

    /// USI 形式の指し手文字列の解析失敗
    #[error("invalid usi move: {0}")]
    InvalidUsi(String),
}

/// ルールエンジン操作の Result 型
pub type Result<T> = std::result::Result<T, ShogiError>;
