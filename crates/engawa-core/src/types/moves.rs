//! 指し手（Move）

use serde::{Deserialize, Serialize};

use super::{BaseKind, Piece, PieceKind, Square};

/// 指し手
///
/// `from` が None のものは持ち駒からの打ち。打ちは常に生駒で、`drop_kind` に駒種が入る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Option<Square>,
    pub to: Square,
    /// 動かす駒の（成る前の）駒種
    pub piece: PieceKind,
    pub promote: bool,
    /// 取った駒（取らない手は None）
    pub captured: Option<Piece>,
    pub drop_kind: Option<BaseKind>,
}

impl Move {
    /// 盤上の駒を動かす手
    pub const fn normal(
        from: Square,
        to: Square,
        piece: PieceKind,
        promote: bool,
        captured: Option<Piece>,
    ) -> Move {
        Move {
            from: Some(from),
            to,
            piece,
            promote,
            captured,
            drop_kind: None,
        }
    }

    /// 持ち駒を打つ手
    pub const fn drop(kind: BaseKind, to: Square) -> Move {
        Move {
            from: None,
            to,
            piece: PieceKind::Base(kind),
            promote: false,
            captured: None,
            drop_kind: Some(kind),
        }
    }

    #[inline]
    pub const fn is_drop(&self) -> bool {
        self.from.is_none()
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// 移動後の駒種
    pub fn resulting_kind(&self) -> PieceKind {
        if self.promote {
            self.piece.promote().unwrap_or(self.piece)
        } else {
            self.piece
        }
    }

    /// 同じ操作を表すか（移動元・移動先・成り・打ち駒種のみ比較）
    ///
    /// 呼び出し側が組み立てた手は `captured` や `piece` を埋めていないことがあるため、
    /// 合法手リストとの照合にはこちらを使う。
    pub fn same_action(&self, other: &Move) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.promote == other.promote
            && self.drop_kind == other.drop_kind
    }

    /// USI 形式（"7g7f", "8h2b+", "P*5e"）
    pub fn to_usi(&self) -> String {
        match (self.from, self.drop_kind) {
            (Some(from), _) => {
                let promote = if self.promote { "+" } else { "" };
                format!("{from}{}{promote}", self.to)
            }
            (None, Some(kind)) => format!("{}*{}", kind.sfen_char(), self.to),
            (None, None) => format!("{}*{}", self.piece.base().sfen_char(), self.to),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_usi())
    }
}
