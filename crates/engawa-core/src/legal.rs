//! 王手判定と合法手の列挙
//!
//! 合法手 = 擬似合法手のうち、指した後に自玉へ利きが残らないもの。
//! 判定は同じ局面に `do_move` → 王手判定 → `undo_move` を繰り返して行う。

use crate::board::Board;
use crate::error::{Result, ShogiError};
use crate::movegen::{self, PromotionChoice, attacks, generate_pseudo_legal};
use crate::position::Position;
use crate::types::{BaseKind, Hands, Move, Player, Square};

/// `by` の駒のいずれかが `sq` に利いているか
pub fn is_square_attacked(board: &Board, sq: Square, by: Player) -> bool {
    board
        .pieces_of(by)
        .any(|(from, piece)| attacks(board, piece.kind, by, from, sq))
}

/// `player` の玉に相手の利きがあるか（盤上に玉がなければ false）
pub fn is_in_check(board: &Board, player: Player) -> bool {
    board
        .find_king(player)
        .is_some_and(|king| is_square_attacked(board, king, player.opponent()))
}

impl Position {
    /// 手番側に王手がかかっているか
    #[inline]
    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    /// 手番側の合法手（生成順は `movegen` の順序を保つ）
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut scratch = *self;
        scratch.generate_legal()
    }

    /// 手番側に合法手が 1 つでもあるか
    pub fn has_legal_move(&self) -> bool {
        let mut scratch = *self;
        generate_pseudo_legal(&scratch.board, &scratch.hands, scratch.side_to_move)
            .iter()
            .any(|mv| scratch.leaves_king_safe(mv))
    }

    /// `mv` と同じ操作の合法手を探す（`captured` などは現局面のものに置き換わる）
    pub fn find_legal(&self, mv: &Move) -> Option<Move> {
        self.legal_moves().into_iter().find(|m| m.same_action(mv))
    }

    /// 合法手の生成（make/unmake で自玉の安全を確かめる）
    ///
    /// 呼び出し後の局面は呼び出し前と同じ。探索から局面を複製せずに使う。
    pub(crate) fn generate_legal(&mut self) -> Vec<Move> {
        let mut moves = generate_pseudo_legal(&self.board, &self.hands, self.side_to_move);
        moves.retain(|mv| self.leaves_king_safe(mv));
        moves
    }

    fn leaves_king_safe(&mut self, mv: &Move) -> bool {
        let us = self.side_to_move;
        let undo = self.do_move(mv);
        let safe = !is_in_check(&self.board, us);
        self.undo_move(mv, undo);
        safe
    }
}

/// `player` の合法手一覧
pub fn get_all_legal_moves(board: &Board, hands: &Hands, player: Player) -> Vec<Move> {
    Position::new(*board, *hands, player).legal_moves()
}

/// 詰み: 王手がかかっていて合法手がない
pub fn is_checkmate(board: &Board, hands: &Hands, player: Player) -> bool {
    is_in_check(board, player) && !Position::new(*board, *hands, player).has_legal_move()
}

/// ステイルメイト: 王手がかかっていないのに合法手がない
pub fn is_stalemate(board: &Board, hands: &Hands, player: Player) -> bool {
    !is_in_check(board, player) && !Position::new(*board, *hands, player).has_legal_move()
}

/// `from` の駒の合法な移動先（成り・不成の重複は 1 つにまとめる）
pub fn legal_destinations(board: &Board, hands: &Hands, player: Player, from: Square) -> Vec<Square> {
    let mut out: Vec<Square> = Vec::new();
    for mv in get_all_legal_moves(board, hands, player) {
        if mv.from == Some(from) && !out.contains(&mv.to) {
            out.push(mv.to);
        }
    }
    out
}

/// 手駒 `kind` を合法に打てるマス（row-major 順）
pub fn drop_targets(board: &Board, hands: &Hands, player: Player, kind: BaseKind) -> Vec<Square> {
    if !hands[player].has(kind) {
        return Vec::new();
    }
    get_all_legal_moves(board, hands, player)
        .into_iter()
        .filter(|mv| mv.drop_kind == Some(kind))
        .map(|mv| mv.to)
        .collect()
}

/// 盤上の `from` → `to` の移動で成りを選べるか
///
/// `from` に `player` の駒がなければ `PromotionChoice::None`。
pub fn promotion_choice(board: &Board, player: Player, from: Square, to: Square) -> PromotionChoice {
    match board.get(from) {
        Some(piece) if piece.owner == player => movegen::promotion_choice(piece.kind, player, from, to),
        _ => PromotionChoice::None,
    }
}

/// 合法手を適用して新しい (盤面, 手駒) を返す
///
/// `mv` は移動元・移動先・成り・打ち駒種で合法手リストと照合し、
/// 一致しなければ `InvalidMove`。入力の盤面と手駒は変更しない。
pub fn apply_move(board: &Board, hands: &Hands, mv: &Move, player: Player) -> Result<(Board, Hands)> {
    let pos = Position::new(*board, *hands, player);
    let legal = pos.find_legal(mv).ok_or_else(|| ShogiError::InvalidMove {
        player,
        detail: format!("{mv} is not a legal move"),
    })?;
    let next = pos.apply(&legal);
    Ok((next.board, next.hands))
}
