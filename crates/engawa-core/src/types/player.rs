//! 手番（Player）

use serde::{Deserialize, Serialize};

/// 手番（先手/後手）
///
/// 先手は盤の row 8 側、後手は row 0 側に陣を構える。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    Sente = 0,
    Gote = 1,
}

impl Player {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 全ての手番
    pub const ALL: [Player; 2] = [Player::Sente, Player::Gote];

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Sente => Player::Gote,
            Player::Gote => Player::Sente,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 前進方向の row 差分（先手は -1、後手は +1）
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Player::Sente => -1,
            Player::Gote => 1,
        }
    }

    /// 日本語表記
    pub const fn label(self) -> &'static str {
        match self {
            Player::Sente => "先手",
            Player::Gote => "後手",
        }
    }
}

impl std::ops::Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Sente => f.write_str("sente"),
            Player::Gote => f.write_str("gote"),
        }
    }
}

impl std::str::FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sente" | "black" | "b" => Ok(Player::Sente),
            "gote" | "white" | "w" => Ok(Player::Gote),
            other => Err(format!("unknown player: {other}")),
        }
    }
}
