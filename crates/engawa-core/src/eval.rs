//! 静的評価関数
//!
//! 駒割り + 前進ボーナス + 持ち駒 + 王手ボーナス。
//! 整数で扱うため全体を 10 倍したスケールで計算する
//! （盤上の歩 = 10、持ち駒の歩 = 9、前進 1 段 = 1、王手 = 30）。

use crate::board::Board;
use crate::legal::is_in_check;
use crate::types::{Hands, Player, Value};

/// 駒の価値の倍率（盤上）
pub const BOARD_SCALE: i32 = 10;
/// 駒の価値の倍率（持ち駒は盤上の 9 割）
pub const HAND_SCALE: i32 = 9;
/// 前進ボーナス（自陣の端から 1 段につき）
pub const ADVANCE_BONUS: i32 = 1;
/// 相手玉に王手をかけているときのボーナス
pub const CHECK_BONUS: i32 = 30;

/// `perspective` から見た局面の評価値
///
/// 前進ボーナスは `perspective` 側の駒にだけ付く（相手の駒には付けない）。
pub fn evaluate(board: &Board, hands: &Hands, perspective: Player) -> Value {
    let them = perspective.opponent();
    let mut score = 0i32;

    for (sq, piece) in board.pieces() {
        let v = piece.value() * BOARD_SCALE;
        if piece.owner == perspective {
            score += v + sq.advancement(perspective) as i32 * ADVANCE_BONUS;
        } else {
            score -= v;
        }
    }

    for (kind, n) in hands[perspective].iter() {
        score += kind.value() * HAND_SCALE * n as i32;
    }
    for (kind, n) in hands[them].iter() {
        score -= kind.value() * HAND_SCALE * n as i32;
    }

    if is_in_check(board, them) {
        score += CHECK_BONUS;
    }

    Value::new(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseKind, Piece, Square};

    #[test]
    fn test_startpos_only_advancement_differs() {
        let board = Board::initial();
        // 駒割りは互角。前進ボーナスは自駒のみ:
        // 九段目 9 枚 ×0 + 八段目 2 枚 ×1 + 七段目 9 枚 ×2 = 20
        assert_eq!(evaluate(&board, &Hands::EMPTY, Player::Sente), Value::new(20));
        assert_eq!(evaluate(&board, &Hands::EMPTY, Player::Gote), Value::new(20));
    }

    #[test]
    fn test_hand_pieces_count_ninety_percent() {
        let mut hands = Hands::EMPTY;
        hands[Player::Sente].add(BaseKind::Rook);
        hands[Player::Gote].set(BaseKind::Pawn, 2);
        // 飛 10×9 - 歩 2×1×9
        assert_eq!(evaluate(&Board::empty(), &hands, Player::Sente), Value::new(90 - 18));
        assert_eq!(evaluate(&Board::empty(), &hands, Player::Gote), Value::new(18 - 90));
    }

    #[test]
    fn test_check_bonus() {
        let mut board = Board::empty();
        board.set(Square::at(0, 4), Some(Piece::base(BaseKind::King, Player::Gote)));
        board.set(Square::at(4, 4), Some(Piece::base(BaseKind::Lance, Player::Sente)));
        // 香 30 + 前進 4 + 王手 30
        assert_eq!(evaluate(&board, &Hands::EMPTY, Player::Sente), Value::new(30 + 4 + 30));
        // 後手から見ると王手ボーナスなし（一段目の玉は前進 0）
        assert_eq!(evaluate(&board, &Hands::EMPTY, Player::Gote), Value::new(-30));
    }
}
