//! 駒種（BaseKind / PromotedKind / PieceKind）
//!
//! 成駒は文字列の接頭辞ではなくタグ付きの列挙で表す。
//! 生駒と成駒の対応は `PROMOTION_PAIRS` の表で一意に決まる。

use serde::{Deserialize, Serialize};

/// 生駒の種類（先後の区別なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BaseKind {
    King = 0,
    Rook = 1,
    Bishop = 2,
    Gold = 3,
    Silver = 4,
    Knight = 5,
    Lance = 6,
    Pawn = 7,
}

/// 成駒の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PromotedKind {
    /// 龍（成飛）
    Dragon = 0,
    /// 馬（成角）
    Horse = 1,
    ProSilver = 2,
    ProKnight = 3,
    ProLance = 4,
    /// と金
    ProPawn = 5,
}

/// 生駒と成駒の対応表（`BaseKind::promote` / `PromotedKind::base` はこの表と一致する）
pub const PROMOTION_PAIRS: [(BaseKind, PromotedKind); 6] = [
    (BaseKind::Rook, PromotedKind::Dragon),
    (BaseKind::Bishop, PromotedKind::Horse),
    (BaseKind::Silver, PromotedKind::ProSilver),
    (BaseKind::Knight, PromotedKind::ProKnight),
    (BaseKind::Lance, PromotedKind::ProLance),
    (BaseKind::Pawn, PromotedKind::ProPawn),
];

impl BaseKind {
    /// 駒種の数
    pub const NUM: usize = 8;

    /// 全ての生駒
    pub const ALL: [BaseKind; 8] = [
        BaseKind::King,
        BaseKind::Rook,
        BaseKind::Bishop,
        BaseKind::Gold,
        BaseKind::Silver,
        BaseKind::Knight,
        BaseKind::Lance,
        BaseKind::Pawn,
    ];

    /// 手駒になる駒種（打ち駒の生成順）
    pub const HAND_KINDS: [BaseKind; 7] = [
        BaseKind::Pawn,
        BaseKind::Lance,
        BaseKind::Knight,
        BaseKind::Silver,
        BaseKind::Gold,
        BaseKind::Bishop,
        BaseKind::Rook,
    ];

    /// インデックス（0-7）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 成れるかどうか（玉・金は成れない）
    #[inline]
    pub const fn can_promote(self) -> bool {
        !matches!(self, BaseKind::King | BaseKind::Gold)
    }

    /// 成駒を返す（成れない場合はNone）
    #[inline]
    pub const fn promote(self) -> Option<PromotedKind> {
        match self {
            BaseKind::Rook => Some(PromotedKind::Dragon),
            BaseKind::Bishop => Some(PromotedKind::Horse),
            BaseKind::Silver => Some(PromotedKind::ProSilver),
            BaseKind::Knight => Some(PromotedKind::ProKnight),
            BaseKind::Lance => Some(PromotedKind::ProLance),
            BaseKind::Pawn => Some(PromotedKind::ProPawn),
            BaseKind::King | BaseKind::Gold => None,
        }
    }

    /// 駒の価値（評価関数・指し手の優先順位付けで使用）
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            BaseKind::Pawn => 1,
            BaseKind::Lance => 3,
            BaseKind::Knight => 4,
            BaseKind::Silver => 5,
            BaseKind::Gold => 6,
            BaseKind::Bishop => 8,
            BaseKind::Rook => 10,
            // 王は特別扱い
            BaseKind::King => 0,
        }
    }

    /// 平手初期配置での枚数（先後合計）
    #[inline]
    pub const fn initial_count(self) -> u32 {
        match self {
            BaseKind::Pawn => 18,
            BaseKind::Lance | BaseKind::Knight | BaseKind::Silver | BaseKind::Gold => 4,
            BaseKind::Bishop | BaseKind::Rook | BaseKind::King => 2,
        }
    }

    /// 漢字表記
    pub const fn kanji(self) -> &'static str {
        match self {
            BaseKind::King => "王",
            BaseKind::Rook => "飛",
            BaseKind::Bishop => "角",
            BaseKind::Gold => "金",
            BaseKind::Silver => "銀",
            BaseKind::Knight => "桂",
            BaseKind::Lance => "香",
            BaseKind::Pawn => "歩",
        }
    }

    /// SFEN/USI の駒文字（先手側の大文字）
    pub const fn sfen_char(self) -> char {
        match self {
            BaseKind::King => 'K',
            BaseKind::Rook => 'R',
            BaseKind::Bishop => 'B',
            BaseKind::Gold => 'G',
            BaseKind::Silver => 'S',
            BaseKind::Knight => 'N',
            BaseKind::Lance => 'L',
            BaseKind::Pawn => 'P',
        }
    }

    /// SFEN/USI の駒文字から変換（大文字小文字は区別しない）
    pub fn from_sfen_char(c: char) -> Option<BaseKind> {
        match c.to_ascii_uppercase() {
            'K' => Some(BaseKind::King),
            'R' => Some(BaseKind::Rook),
            'B' => Some(BaseKind::Bishop),
            'G' => Some(BaseKind::Gold),
            'S' => Some(BaseKind::Silver),
            'N' => Some(BaseKind::Knight),
            'L' => Some(BaseKind::Lance),
            'P' => Some(BaseKind::Pawn),
            _ => None,
        }
    }
}

impl PromotedKind {
    /// 全ての成駒
    pub const ALL: [PromotedKind; 6] = [
        PromotedKind::Dragon,
        PromotedKind::Horse,
        PromotedKind::ProSilver,
        PromotedKind::ProKnight,
        PromotedKind::ProLance,
        PromotedKind::ProPawn,
    ];

    /// 元の生駒を返す
    #[inline]
    pub const fn base(self) -> BaseKind {
        match self {
            PromotedKind::Dragon => BaseKind::Rook,
            PromotedKind::Horse => BaseKind::Bishop,
            PromotedKind::ProSilver => BaseKind::Silver,
            PromotedKind::ProKnight => BaseKind::Knight,
            PromotedKind::ProLance => BaseKind::Lance,
            PromotedKind::ProPawn => BaseKind::Pawn,
        }
    }

    /// 駒の価値
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PromotedKind::ProPawn => 7,
            PromotedKind::ProLance | PromotedKind::ProKnight | PromotedKind::ProSilver => 6,
            PromotedKind::Dragon => 13,
            PromotedKind::Horse => 11,
        }
    }

    /// 漢字表記
    pub const fn kanji(self) -> &'static str {
        match self {
            PromotedKind::Dragon => "龍",
            PromotedKind::Horse => "馬",
            PromotedKind::ProSilver => "全",
            PromotedKind::ProKnight => "圭",
            PromotedKind::ProLance => "杏",
            PromotedKind::ProPawn => "と",
        }
    }
}

/// 盤上の駒種（生駒 or 成駒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Base(BaseKind),
    Promoted(PromotedKind),
}

impl PieceKind {
    pub const KING: PieceKind = PieceKind::Base(BaseKind::King);
    pub const ROOK: PieceKind = PieceKind::Base(BaseKind::Rook);
    pub const BISHOP: PieceKind = PieceKind::Base(BaseKind::Bishop);
    pub const GOLD: PieceKind = PieceKind::Base(BaseKind::Gold);
    pub const SILVER: PieceKind = PieceKind::Base(BaseKind::Silver);
    pub const KNIGHT: PieceKind = PieceKind::Base(BaseKind::Knight);
    pub const LANCE: PieceKind = PieceKind::Base(BaseKind::Lance);
    pub const PAWN: PieceKind = PieceKind::Base(BaseKind::Pawn);
    pub const DRAGON: PieceKind = PieceKind::Promoted(PromotedKind::Dragon);
    pub const HORSE: PieceKind = PieceKind::Promoted(PromotedKind::Horse);

    /// 生駒に戻した駒種（取った駒を持ち駒にするとき使う）
    #[inline]
    pub const fn base(self) -> BaseKind {
        match self {
            PieceKind::Base(base) => base,
            PieceKind::Promoted(promoted) => promoted.base(),
        }
    }

    /// 成駒かどうか
    #[inline]
    pub const fn is_promoted(self) -> bool {
        matches!(self, PieceKind::Promoted(_))
    }

    /// 成れるかどうか（成駒・玉・金は成れない）
    #[inline]
    pub const fn can_promote(self) -> bool {
        match self {
            PieceKind::Base(base) => base.can_promote(),
            PieceKind::Promoted(_) => false,
        }
    }

    /// 成った後の駒種（成れない場合はNone）
    #[inline]
    pub const fn promote(self) -> Option<PieceKind> {
        match self {
            PieceKind::Base(base) => match base.promote() {
                Some(promoted) => Some(PieceKind::Promoted(promoted)),
                None => None,
            },
            PieceKind::Promoted(_) => None,
        }
    }

    /// 駒の価値
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Base(base) => base.value(),
            PieceKind::Promoted(promoted) => promoted.value(),
        }
    }

    /// 漢字表記
    pub const fn kanji(self) -> &'static str {
        match self {
            PieceKind::Base(base) => base.kanji(),
            PieceKind::Promoted(promoted) => promoted.kanji(),
        }
    }
}

impl From<BaseKind> for PieceKind {
    fn from(base: BaseKind) -> Self {
        PieceKind::Base(base)
    }
}

impl From<PromotedKind> for PieceKind {
    fn from(promoted: PromotedKind) -> Self {
        PieceKind::Promoted(promoted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_pairs_are_bidirectional() {
        for (base, promoted) in PROMOTION_PAIRS {
            assert_eq!(base.promote(), Some(promoted));
            assert_eq!(promoted.base(), base);
        }
        for promoted in PromotedKind::ALL {
            assert_eq!(promoted.base().promote(), Some(promoted));
        }
    }

    #[test]
    fn test_gold_and_king_never_promote() {
        assert!(!BaseKind::Gold.can_promote());
        assert!(!BaseKind::King.can_promote());
        assert_eq!(BaseKind::Gold.promote(), None);
        assert_eq!(BaseKind::King.promote(), None);
        assert_eq!(PieceKind::DRAGON.promote(), None);
        assert!(!PieceKind::HORSE.can_promote());
    }

    #[test]
    fn test_piece_kind_base() {
        assert_eq!(PieceKind::DRAGON.base(), BaseKind::Rook);
        assert_eq!(PieceKind::HORSE.base(), BaseKind::Bishop);
        assert_eq!(PieceKind::Promoted(PromotedKind::ProPawn).base(), BaseKind::Pawn);
        assert_eq!(PieceKind::GOLD.base(), BaseKind::Gold);
    }

    #[test]
    fn test_values() {
        assert_eq!(PieceKind::PAWN.value(), 1);
        assert_eq!(PieceKind::ROOK.value(), 10);
        assert_eq!(PieceKind::KING.value(), 0);
        assert_eq!(PieceKind::Promoted(PromotedKind::ProPawn).value(), 7);
        assert_eq!(PieceKind::DRAGON.value(), 13);
        assert_eq!(PieceKind::HORSE.value(), 11);
    }

    #[test]
    fn test_initial_counts_sum_to_forty() {
        let total: u32 = BaseKind::ALL.iter().map(|k| k.initial_count()).sum();
        assert_eq!(total, 40);
    }

    #[test]
    fn test_sfen_char_round_trip() {
        for kind in BaseKind::ALL {
            assert_eq!(BaseKind::from_sfen_char(kind.sfen_char()), Some(kind));
            assert_eq!(BaseKind::from_sfen_char(kind.sfen_char().to_ascii_lowercase()), Some(kind));
        }
        assert_eq!(BaseKind::from_sfen_char('X'), None);
    }
}
