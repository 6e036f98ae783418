//! 基本型
//!
//! - `Player`: 手番（先手/後手）
//! - `BaseKind` / `PromotedKind` / `PieceKind`: 駒種
//! - `Piece`: 盤上の駒
//! - `Square`: 盤上の座標
//! - `Hand` / `Hands`: 手駒
//! - `Move`: 指し手
//! - `Value`: 評価値

mod hand;
mod moves;
mod piece;
mod piece_type;
mod player;
mod square;
mod value;

pub use hand::{Hand, Hands};
pub use moves::Move;
pub use piece::Piece;
pub use piece_type::{BaseKind, PROMOTION_PAIRS, PieceKind, PromotedKind};
pub use player::Player;
pub use square::{BOARD_SIZE, Square};
pub use value::Value;
