//! 盤上の座標（Square）
//!
//! row 0 が後手陣の端（一段目）、row 8 が先手陣の端（九段目）。
//! col 0..8 は表示上の筋 9..1 に対応する。

use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::{Result, ShogiError};

/// 盤の一辺のマス数
pub const BOARD_SIZE: usize = 9;

/// 盤上の座標 (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SquareRepr", into = "SquareRepr")]
pub struct Square {
    row: u8,
    col: u8,
}

/// シリアライズ用の生表現（デシリアライズ時に範囲チェックする）
#[derive(Serialize, Deserialize)]
struct SquareRepr {
    row: usize,
    col: usize,
}

impl Square {
    /// 範囲チェック付きで生成
    pub fn new(row: usize, col: usize) -> Result<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ShogiError::OutOfBounds { row, col })
        }
    }

    /// 範囲内であることが分かっている座標から生成
    ///
    /// 呼び出し側が `row < 9 && col < 9` を保証すること。
    #[inline]
    pub(crate) const fn at(row: usize, col: usize) -> Square {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Square {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// (dr, dc) だけずらした座標。盤外なら None
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if (0..BOARD_SIZE as i32).contains(&r) && (0..BOARD_SIZE as i32).contains(&c) {
            Some(Square::at(r as usize, c as usize))
        } else {
            None
        }
    }

    /// 全マスを row-major 順で列挙
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::at(row, col)))
    }

    /// 筋（1-9）。col 0 が 9筋
    #[inline]
    pub const fn file(self) -> u8 {
        9 - self.col
    }

    /// 段の USI 文字（'a'-'i'）
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'a' + self.row) as char
    }

    /// `player` の敵陣（成れる三段）にあるか
    #[inline]
    pub const fn in_promotion_zone(self, player: Player) -> bool {
        match player {
            Player::Sente => self.row <= 2,
            Player::Gote => self.row >= 6,
        }
    }

    /// `player` の自陣の端から何段進んでいるか（0-8）
    #[inline]
    pub const fn advancement(self, player: Player) -> usize {
        match player {
            Player::Sente => 8 - self.row as usize,
            Player::Gote => self.row as usize,
        }
    }

    /// USI 形式（"7g" など）から変換
    pub fn from_usi(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = chars.next()?.to_digit(10)?;
        let rank = chars.next()?;
        if chars.next().is_some() || !(1..=9).contains(&file) || !('a'..='i').contains(&rank) {
            return None;
        }
        let row = rank as usize - 'a' as usize;
        let col = 9 - file as usize;
        Some(Square::at(row, col))
    }
}

impl TryFrom<SquareRepr> for Square {
    type Error = ShogiError;

    fn try_from(repr: SquareRepr) -> Result<Square> {
        Square::new(repr.row, repr.col)
    }
}

impl From<Square> for SquareRepr {
    fn from(sq: Square) -> SquareRepr {
        SquareRepr {
            row: sq.row(),
            col: sq.col(),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_new_bounds() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(8, 8).is_ok());
        assert_eq!(Square::new(9, 0), Err(ShogiError::OutOfBounds { row: 9, col: 0 }));
        assert_eq!(Square::new(0, 12), Err(ShogiError::OutOfBounds { row: 0, col: 12 }));
    }

    #[test]
    fn test_square_offset() {
        let sq = Square::at(0, 8);
        assert_eq!(sq.offset(1, -1), Some(Square::at(1, 7)));
        assert_eq!(sq.offset(-1, 0), None);
        assert_eq!(sq.offset(0, 1), None);
    }

    #[test]
    fn test_square_usi() {
        // 先手の飛車先の歩 (6,7) は 2g
        let sq = Square::at(6, 7);
        assert_eq!(sq.to_string(), "2g");
        assert_eq!(Square::from_usi("2g"), Some(sq));
        assert_eq!(Square::from_usi("9a"), Some(Square::at(0, 0)));
        assert_eq!(Square::from_usi("1i"), Some(Square::at(8, 8)));
        assert_eq!(Square::from_usi("0a"), None);
        assert_eq!(Square::from_usi("5j"), None);
        assert_eq!(Square::from_usi("5e5"), None);
    }

    #[test]
    fn test_promotion_zone() {
        assert!(Square::at(2, 4).in_promotion_zone(Player::Sente));
        assert!(!Square::at(3, 4).in_promotion_zone(Player::Sente));
        assert!(Square::at(6, 4).in_promotion_zone(Player::Gote));
        assert!(!Square::at(5, 4).in_promotion_zone(Player::Gote));
    }

    #[test]
    fn test_all_squares_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 81);
        assert_eq!(squares[0], Square::at(0, 0));
        assert_eq!(squares[1], Square::at(0, 1));
        assert_eq!(squares[80], Square::at(8, 8));
    }
}
