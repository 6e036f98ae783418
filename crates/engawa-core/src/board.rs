//! 盤面（Board）
//!
//! 9×9 の升目にそれぞれ駒があるかないか。手番や手駒は持たない。

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{BOARD_SIZE, BaseKind, Piece, Player, Square};

/// 9×9 の盤面
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

/// 一段目（九段目）の並び: 香桂銀金玉金銀桂香
const BACK_RANK: [BaseKind; BOARD_SIZE] = [
    BaseKind::Lance,
    BaseKind::Knight,
    BaseKind::Silver,
    BaseKind::Gold,
    BaseKind::King,
    BaseKind::Gold,
    BaseKind::Silver,
    BaseKind::Knight,
    BaseKind::Lance,
];

impl Board {
    /// 駒のない盤面
    pub const fn empty() -> Board {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 平手の初期配置
    pub fn initial() -> Board {
        let mut board = Board::empty();

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::base(kind, Player::Gote));
            board.cells[8][col] = Some(Piece::base(kind, Player::Sente));
        }

        // 二段目: 後手は飛(8筋)・角(2筋)、先手は角(8筋)・飛(2筋)
        board.cells[1][1] = Some(Piece::base(BaseKind::Rook, Player::Gote));
        board.cells[1][7] = Some(Piece::base(BaseKind::Bishop, Player::Gote));
        board.cells[7][1] = Some(Piece::base(BaseKind::Bishop, Player::Sente));
        board.cells[7][7] = Some(Piece::base(BaseKind::Rook, Player::Sente));

        for col in 0..BOARD_SIZE {
            board.cells[2][col] = Some(Piece::base(BaseKind::Pawn, Player::Gote));
            board.cells[6][col] = Some(Piece::base(BaseKind::Pawn, Player::Sente));
        }

        board
    }

    /// 指定マスの駒
    #[inline]
    pub const fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row()][sq.col()]
    }

    /// 範囲チェック付きの参照（外部から座標を受け取る場合用）
    pub fn piece_at(&self, row: usize, col: usize) -> Result<Option<Piece>> {
        Ok(self.get(Square::new(row, col)?))
    }

    /// 指定マスに駒を置く（None で空にする）
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.row()][sq.col()] = piece;
    }

    /// 指定マスの駒を取り除いて返す
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row()][sq.col()].take()
    }

    #[inline]
    pub const fn is_empty_at(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// 盤上の全駒を row-major 順で列挙
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// 指定手番の駒を row-major 順で列挙
    pub fn pieces_of(&self, owner: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.owner == owner)
    }

    /// 玉の位置（盤上にない場合は None）
    pub fn find_king(&self, owner: Player) -> Option<Square> {
        self.pieces_of(owner)
            .find(|(_, p)| p.kind.base() == BaseKind::King)
            .map(|(sq, _)| sq)
    }

    /// 指定筋に `owner` の成っていない歩があるか（二歩判定）
    pub fn has_unpromoted_pawn_in_col(&self, owner: Player, col: usize) -> bool {
        (0..BOARD_SIZE).any(|row| {
            self.cells[row][col].is_some_and(|p| p.owner == owner && p.is_unpromoted_pawn())
        })
    }

    /// 盤上にある指定駒種の枚数（成駒は元の駒種で数える、先後合計）
    pub fn count_base(&self, kind: BaseKind) -> u32 {
        self.pieces().filter(|(_, p)| p.kind.base() == kind).count() as u32
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match self.cells[row][col] {
                    Some(p) => write!(f, "{:>3}", p.to_sfen())?,
                    None => f.write_str("  .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
