//! 指し手生成
//!
//! ここで生成するのは擬似合法手（自玉への王手放置を除外していない手）。
//! 王手放置の除外は `legal` モジュールで make/unmake により行う。
//!
//! 生成順序:
//! 1. 盤上の駒を row 0→8, col 0→8 の順に走査し、移動先は駒の方向表の順。
//!    成れる手は「成り」→「不成」の順（成り強制なら成りのみ）
//! 2. 打ちは歩・香・桂・銀・金・角・飛の順で、打つマスは row-major 順

mod pieces;
mod rules;

pub use pieces::{Destinations, attacks, destinations};
pub use rules::{
    PromotionChoice, can_drop, can_promote, can_promote_move, is_dead_end, must_promote,
    promotion_choice,
};

use crate::board::Board;
use crate::error::Result;
use crate::types::{Hands, Move, Player, Square};

/// 指定マスにある `owner` の駒の擬似合法な移動先（UI の候補表示用）
///
/// 駒がない、または相手の駒の場合は空を返す。
pub fn piece_moves(board: &Board, owner: Player, from: Square) -> Destinations {
    match board.get(from) {
        Some(piece) if piece.owner == owner => destinations(board, piece.kind, owner, from),
        _ => Destinations::new(),
    }
}

/// `piece_moves` の (row, col) 版。盤外座標は `OutOfBounds` で失敗する
pub fn get_piece_moves(board: &Board, owner: Player, row: usize, col: usize) -> Result<Destinations> {
    let from = Square::new(row, col)?;
    Ok(piece_moves(board, owner, from))
}

/// 盤上の駒を動かす擬似合法手を `out` に追加
pub fn generate_board_moves(board: &Board, player: Player, out: &mut Vec<Move>) {
    for (from, piece) in board.pieces_of(player) {
        for to in destinations(board, piece.kind, player, from) {
            let captured = board.get(to);
            match promotion_choice(piece.kind, player, from, to) {
                PromotionChoice::Forced => {
                    out.push(Move::normal(from, to, piece.kind, true, captured));
                }
                PromotionChoice::Optional => {
                    out.push(Move::normal(from, to, piece.kind, true, captured));
                    out.push(Move::normal(from, to, piece.kind, false, captured));
                }
                PromotionChoice::None => {
                    out.push(Move::normal(from, to, piece.kind, false, captured));
                }
            }
        }
    }
}

/// 持ち駒を打つ手を `out` に追加（二歩・行き所のない駒は除外済み）
pub fn generate_drop_moves(board: &Board, hands: &Hands, player: Player, out: &mut Vec<Move>) {
    for (kind, _) in hands[player].iter() {
        for to in Square::all() {
            if can_drop(board, player, kind, to) {
                out.push(Move::drop(kind, to));
            }
        }
    }
}

/// 全ての擬似合法手
pub fn generate_pseudo_legal(board: &Board, hands: &Hands, player: Player) -> Vec<Move> {
    let mut moves = Vec::with_capacity(128);
    generate_board_moves(board, player, &mut moves);
    generate_drop_moves(board, hands, player, &mut moves);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseKind, Piece, PieceKind};

    #[test]
    fn test_startpos_pseudo_legal_count() {
        // 平手初期局面の合法手は 30 手（王手がかかっていないので擬似合法手も同数）
        let moves = generate_pseudo_legal(&Board::initial(), &Hands::EMPTY, Player::Sente);
        assert_eq!(moves.len(), 30);
        assert!(moves.iter().all(|m| !m.promote && !m.is_capture()));
    }

    #[test]
    fn test_piece_moves_ignores_opponent_piece() {
        let board = Board::initial();
        assert!(piece_moves(&board, Player::Sente, Square::at(2, 0)).is_empty());
        assert_eq!(piece_moves(&board, Player::Gote, Square::at(2, 0)).as_slice(), &[Square::at(3, 0)]);
        assert!(piece_moves(&board, Player::Sente, Square::at(4, 4)).is_empty());
    }

    #[test]
    fn test_get_piece_moves_rejects_out_of_bounds() {
        let board = Board::initial();
        assert!(get_piece_moves(&board, Player::Sente, 9, 0).is_err());
        assert!(get_piece_moves(&board, Player::Sente, 6, 7).is_ok());
    }

    #[test]
    fn test_forced_promotion_generates_single_variant() {
        let mut board = Board::empty();
        board.set(Square::at(1, 4), Some(Piece::base(BaseKind::Pawn, Player::Sente)));
        let mut moves = Vec::new();
        generate_board_moves(&board, Player::Sente, &mut moves);
        assert_eq!(moves.len(), 1);
        assert!(moves[0].promote);
        assert_eq!(moves[0].resulting_kind(), PieceKind::PAWN.promote().unwrap());
    }

    #[test]
    fn test_optional_promotion_promote_first() {
        let mut board = Board::empty();
        board.set(Square::at(3, 4), Some(Piece::base(BaseKind::Silver, Player::Sente)));
        let mut moves = Vec::new();
        generate_board_moves(&board, Player::Sente, &mut moves);
        // 前 3 マスはいずれも敵陣で、成り・不成の 2 通り。後ろ 2 マスは成れない
        assert_eq!(moves.len(), 8);
        assert!(moves[0].promote);
        assert!(!moves[1].promote);
        assert!(moves[0].same_action(&Move { promote: true, ..moves[1] }));
    }

    #[test]
    fn test_drop_generation_order_and_count() {
        let board = Board::empty();
        let mut hands = Hands::EMPTY;
        hands[Player::Sente].add(BaseKind::Rook);
        hands[Player::Sente].add(BaseKind::Pawn);
        let mut moves = Vec::new();
        generate_drop_moves(&board, &hands, Player::Sente, &mut moves);
        // 歩は一段目以外の 72 マス、飛は 81 マス
        assert_eq!(moves.len(), 72 + 81);
        assert_eq!(moves[0].drop_kind, Some(BaseKind::Pawn));
        assert_eq!(moves[0].to, Square::at(1, 0));
        assert_eq!(moves[72].drop_kind, Some(BaseKind::Rook));
    }
}
