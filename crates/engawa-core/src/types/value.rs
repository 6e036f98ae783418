//! 評価値（Value）
//!
//! 駒の価値を 10 倍した整数スケールで扱う（歩 = 10、持ち駒の歩 = 9）。
//! `Value::MATE` 付近は詰みスコアとして予約している。

use serde::{Deserialize, Serialize};

/// 評価値
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ（ステイルメイトも 0 として扱う）
    pub const ZERO: Value = Value(0);
    /// 詰み（勝ち側の最大スコア）
    pub const MATE: Value = Value(100_000);
    /// 無限大
    pub const INFINITE: Value = Value(100_001);
    /// 探索深度内での詰みスコアの下限
    pub const MATE_IN_MAX_PLY: Value = Value(Self::MATE.0 - 128);

    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// ply手で詰ますスコア
    #[inline]
    pub const fn mate_in(ply: i32) -> Value {
        Value(Self::MATE.0 - ply)
    }

    /// ply手で詰まされるスコア
    #[inline]
    pub const fn mated_in(ply: i32) -> Value {
        Value(-Self::MATE.0 + ply)
    }

    /// 詰みスコア（勝ちまたは負け）かどうか
    #[inline]
    pub const fn is_mate_score(self) -> bool {
        self.0 >= Self::MATE_IN_MAX_PLY.0 || self.0 <= -Self::MATE_IN_MAX_PLY.0
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::ops::Add for Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: Value) -> Value {
        Value(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Value {
    #[inline]
    fn add_assign(&mut self, rhs: Value) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Value {
    type Output = Value;

    #[inline]
    fn sub(self, rhs: Value) -> Value {
        Value(self.0 - rhs.0)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_mate_score() {
            let ply = Self::MATE.0 - self.0.abs();
            let sign = if self.0 > 0 { "" } else { "-" };
            write!(f, "mate {sign}{ply}")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
