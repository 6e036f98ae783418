//! 局面（Position）
//!
//! 盤面 + 手駒 + 手番。探索と合法手判定では同じ `Position` に対して
//! `do_move` / `undo_move` を繰り返し、局面を複製せずに仮想的な指し手を試す。
//! 呼び出し側に返す局面は `apply` で新しく作る（元の局面は変更しない）。

mod display;
mod sfen;

pub use sfen::STARTPOS_SFEN;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Hands, Move, Piece, Player};

/// 局面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,
    pub hands: Hands,
    pub side_to_move: Player,
}

/// `undo_move` に必要な情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoInfo {
    /// 移動元にあった駒（打ちの場合は None）
    moved: Option<Piece>,
    /// 移動先にあった駒
    captured: Option<Piece>,
}

impl Position {
    pub const fn new(board: Board, hands: Hands, side_to_move: Player) -> Position {
        Position {
            board,
            hands,
            side_to_move,
        }
    }

    /// 平手初期局面（先手番）
    pub fn startpos() -> Position {
        Position::new(Board::initial(), Hands::EMPTY, Player::Sente)
    }

    /// 手番側が `mv` を指す。合法性は検査しない（生成済みの手だけを渡すこと）
    ///
    /// - 盤上の移動: 取った駒は生駒に戻して手駒に加え、必要なら成って移動先に置く
    /// - 打ち: 生駒を置いて手駒を 1 枚減らす
    ///
    /// 最後に手番を相手に渡す。
    pub fn do_move(&mut self, mv: &Move) -> UndoInfo {
        let us = self.side_to_move;
        let undo = match mv.from {
            Some(from) => {
                let moved = self.board.take(from);
                debug_assert!(moved.is_some_and(|p| p.owner == us), "no own piece at {from}");
                let captured = self.board.get(mv.to);
                if let Some(cap) = captured {
                    self.hands[us].add(cap.kind.base());
                }
                let kind = match moved {
                    Some(p) if mv.promote => p.kind.promote().unwrap_or(p.kind),
                    Some(p) => p.kind,
                    None => mv.resulting_kind(),
                };
                self.board.set(mv.to, Some(Piece::new(kind, us)));
                UndoInfo { moved, captured }
            }
            None => {
                let kind = mv.drop_kind.unwrap_or(mv.piece.base());
                let removed = self.hands[us].remove(kind);
                debug_assert!(removed, "dropping {kind:?} not in hand");
                self.board.set(mv.to, Some(Piece::base(kind, us)));
                UndoInfo {
                    moved: None,
                    captured: None,
                }
            }
        };
        self.side_to_move = us.opponent();
        undo
    }

    /// `do_move` を正確に取り消す
    pub fn undo_move(&mut self, mv: &Move, undo: UndoInfo) {
        let us = self.side_to_move.opponent();
        self.side_to_move = us;
        match mv.from {
            Some(from) => {
                self.board.set(from, undo.moved);
                self.board.set(mv.to, undo.captured);
                if let Some(cap) = undo.captured {
                    self.hands[us].remove(cap.kind.base());
                }
            }
            None => {
                let kind = mv.drop_kind.unwrap_or(mv.piece.base());
                self.board.set(mv.to, None);
                self.hands[us].add(kind);
            }
        }
    }

    /// `mv` を指した後の新しい局面を返す（自身は変更しない）
    pub fn apply(&self, mv: &Move) -> Position {
        let mut next = *self;
        next.do_move(mv);
        next
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseKind, PieceKind, Square};

    #[test]
    fn test_do_undo_capture_with_promotion() {
        let mut pos = Position::startpos();
        pos.board.set(Square::at(6, 2), None);
        let before = pos;

        // 角で 2b の角を取って成る（経路の合法性は do_move では見ない）
        let captured = pos.board.get(Square::at(1, 7));
        let mv = Move::normal(Square::at(7, 1), Square::at(1, 7), PieceKind::BISHOP, true, captured);
        let undo = pos.do_move(&mv);

        assert_eq!(pos.side_to_move, Player::Gote);
        assert_eq!(pos.board.get(Square::at(1, 7)), Some(Piece::new(PieceKind::HORSE, Player::Sente)));
        assert!(pos.board.get(Square::at(7, 1)).is_none());
        assert_eq!(pos.hands[Player::Sente].count(BaseKind::Bishop), 1);

        pos.undo_move(&mv, undo);
        assert_eq!(pos, before);
    }

    #[test]
    fn test_captured_promoted_piece_reverts_to_base() {
        let mut pos = Position::new(Board::empty(), Hands::EMPTY, Player::Sente);
        pos.board.set(Square::at(4, 4), Some(Piece::base(BaseKind::Gold, Player::Sente)));
        pos.board.set(Square::at(3, 4), Some(Piece::new(PieceKind::DRAGON, Player::Gote)));
        let mv = Move::normal(
            Square::at(4, 4),
            Square::at(3, 4),
            PieceKind::GOLD,
            false,
            pos.board.get(Square::at(3, 4)),
        );
        let next = pos.apply(&mv);
        assert_eq!(next.hands[Player::Sente].count(BaseKind::Rook), 1);
        // 元の局面は変わらない
        assert_eq!(pos.board.get(Square::at(3, 4)), Some(Piece::new(PieceKind::DRAGON, Player::Gote)));
        assert!(pos.hands[Player::Sente].is_empty());
    }

    #[test]
    fn test_do_undo_drop() {
        let mut pos = Position::new(Board::empty(), Hands::EMPTY, Player::Gote);
        pos.hands[Player::Gote].add(BaseKind::Knight);
        let before = pos;

        let mv = Move::drop(BaseKind::Knight, Square::at(4, 4));
        let undo = pos.do_move(&mv);
        assert_eq!(pos.board.get(Square::at(4, 4)), Some(Piece::base(BaseKind::Knight, Player::Gote)));
        assert!(pos.hands[Player::Gote].is_empty());
        assert_eq!(pos.side_to_move, Player::Sente);

        pos.undo_move(&mv, undo);
        assert_eq!(pos, before);
    }
}
