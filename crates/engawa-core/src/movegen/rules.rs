//! 成り・打ちの規則
//!
//! - 成りは移動元か移動先のどちらかが敵陣（相手側の三段）にあれば選べる
//! - 行き所のない駒（一段目の歩・香、一二段目の桂）は成りが強制される
//! - 打ちは常に生駒。二歩と行き所のない駒の打ちは禁止
//!
//! 打ち歩詰めは扱わない（打ち歩詰めになる歩打ちも合法手として生成される）。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{BaseKind, PieceKind, Player, Square};

/// ある移動に対する成りの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionChoice {
    /// 成れない
    None,
    /// 成り・不成を選べる
    Optional,
    /// 成らなければならない
    Forced,
}

/// 駒種が成れるか（飛・角・銀・桂・香・歩）
#[inline]
pub const fn can_promote(kind: PieceKind) -> bool {
    kind.can_promote()
}

/// 成りを選べる移動か
pub const fn can_promote_move(kind: PieceKind, owner: Player, from: Square, to: Square) -> bool {
    kind.can_promote() && (from.in_promotion_zone(owner) || to.in_promotion_zone(owner))
}

/// `row` に生駒のまま置くと以後動けない駒か
///
/// 成り強制の判定と、打ちの禁止マスの判定で共通に使う。
pub const fn is_dead_end(kind: PieceKind, owner: Player, row: usize) -> bool {
    // 自分から見て何段目か（0 = 最奥）
    let depth = match owner {
        Player::Sente => row,
        Player::Gote => 8 - row,
    };
    match kind {
        PieceKind::Base(BaseKind::Pawn) | PieceKind::Base(BaseKind::Lance) => depth == 0,
        PieceKind::Base(BaseKind::Knight) => depth <= 1,
        _ => false,
    }
}

/// 成りが強制される移動か
#[inline]
pub const fn must_promote(kind: PieceKind, owner: Player, to: Square) -> bool {
    is_dead_end(kind, owner, to.row())
}

/// 盤上の移動に対する成りの扱い
pub const fn promotion_choice(kind: PieceKind, owner: Player, from: Square, to: Square) -> PromotionChoice {
    if !can_promote_move(kind, owner, from, to) {
        PromotionChoice::None
    } else if must_promote(kind, owner, to) {
        PromotionChoice::Forced
    } else {
        PromotionChoice::Optional
    }
}

/// `owner` が `kind` を `to` に打てるか（王手放置の判定は含まない）
pub fn can_drop(board: &Board, owner: Player, kind: BaseKind, to: Square) -> bool {
    if kind == BaseKind::King || board.get(to).is_some() {
        return false;
    }
    if kind == BaseKind::Pawn && board.has_unpromoted_pawn_in_col(owner, to.col()) {
        return false;
    }
    !is_dead_end(PieceKind::Base(kind), owner, to.row())
}
