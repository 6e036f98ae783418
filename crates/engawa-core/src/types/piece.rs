//! 駒（Piece）

use serde::{Deserialize, Serialize};

use super::{BaseKind, PieceKind, Player};

/// 盤上の駒（駒種 + 持ち主）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, owner: Player) -> Piece {
        Piece { kind, owner }
    }

    /// 生駒から生成
    #[inline]
    pub const fn base(kind: BaseKind, owner: Player) -> Piece {
        Piece {
            kind: PieceKind::Base(kind),
            owner,
        }
    }

    /// 駒の価値
    #[inline]
    pub const fn value(self) -> i32 {
        self.kind.value()
    }

    /// 成っていない歩かどうか（二歩判定用）
    #[inline]
    pub const fn is_unpromoted_pawn(self) -> bool {
        matches!(self.kind, PieceKind::Base(BaseKind::Pawn))
    }

    /// 漢字表記（先手の王は「玉」）
    pub const fn kanji(self) -> &'static str {
        match (self.kind, self.owner) {
            (PieceKind::Base(BaseKind::King), Player::Sente) => "玉",
            (kind, _) => kind.kanji(),
        }
    }

    /// SFEN 表記（"P", "+r" など）
    pub fn to_sfen(self) -> String {
        let c = self.kind.base().sfen_char();
        let c = match self.owner {
            Player::Sente => c,
            Player::Gote => c.to_ascii_lowercase(),
        };
        if self.kind.is_promoted() {
            format!("+{c}")
        } else {
            c.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanji_kings() {
        assert_eq!(Piece::base(BaseKind::King, Player::Sente).kanji(), "玉");
        assert_eq!(Piece::base(BaseKind::King, Player::Gote).kanji(), "王");
        assert_eq!(Piece::new(PieceKind::DRAGON, Player::Gote).kanji(), "龍");
    }

    #[test]
    fn test_to_sfen() {
        assert_eq!(Piece::base(BaseKind::Pawn, Player::Sente).to_sfen(), "P");
        assert_eq!(Piece::base(BaseKind::Rook, Player::Gote).to_sfen(), "r");
        assert_eq!(Piece::new(PieceKind::HORSE, Player::Gote).to_sfen(), "+b");
    }

    #[test]
    fn test_unpromoted_pawn() {
        assert!(Piece::base(BaseKind::Pawn, Player::Sente).is_unpromoted_pawn());
        assert!(!Piece::new(PieceKind::PAWN.promote().unwrap(), Player::Sente).is_unpromoted_pawn());
    }
}
