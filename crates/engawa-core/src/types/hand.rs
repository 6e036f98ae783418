//! 手駒（Hand / Hands）

use serde::{Deserialize, Serialize};

use super::{BaseKind, Player};

/// 片方の手駒（生駒の種類ごとの枚数）
///
/// 枚数 0 の駒種は「持っていない」のと同じ扱いで、列挙にも現れない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "HandRepr")]
pub struct Hand([u8; BaseKind::NUM]);

/// シリアライズ用の生表現（`BaseKind::index` 順の枚数）
type HandRepr = [u8; BaseKind::NUM];

impl TryFrom<HandRepr> for Hand {
    type Error = String;

    /// 玉を含む、または駒種の総数を超える枚数は受け付けない
    fn try_from(counts: HandRepr) -> Result<Hand, String> {
        for kind in BaseKind::ALL {
            let n = u32::from(counts[kind.index()]);
            let max = if kind == BaseKind::King { 0 } else { kind.initial_count() };
            if n > max {
                return Err(format!("hand holds {n} {kind:?} (max {max})"));
            }
        }
        Ok(Hand(counts))
    }
}

impl Hand {
    /// 空の手駒
    pub const EMPTY: Hand = Hand([0; BaseKind::NUM]);

    /// 指定駒種の枚数を取得
    #[inline]
    pub const fn count(&self, kind: BaseKind) -> u32 {
        self.0[kind.index()] as u32
    }

    /// 指定駒種を持っているか
    #[inline]
    pub const fn has(&self, kind: BaseKind) -> bool {
        self.count(kind) > 0
    }

    /// 1枚追加
    #[inline]
    pub fn add(&mut self, kind: BaseKind) {
        self.0[kind.index()] += 1;
    }

    /// 1枚減らす。持っていなければ false を返して何もしない
    #[inline]
    pub fn remove(&mut self, kind: BaseKind) -> bool {
        let slot = &mut self.0[kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// 指定枚数をセット
    #[inline]
    pub fn set(&mut self, kind: BaseKind, count: u8) {
        self.0[kind.index()] = count;
    }

    /// 空かどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// 持っている駒種と枚数（打ち駒の生成順）
    pub fn iter(&self) -> impl Iterator<Item = (BaseKind, u32)> + '_ {
        BaseKind::HAND_KINDS
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|&(_, n)| n > 0)
    }
}

/// 先後両方の手駒
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hands {
    pub sente: Hand,
    pub gote: Hand,
}

impl Hands {
    /// 両者とも持ち駒なし
    pub const EMPTY: Hands = Hands {
        sente: Hand::EMPTY,
        gote: Hand::EMPTY,
    };

    #[inline]
    pub const fn get(&self, player: Player) -> &Hand {
        match player {
            Player::Sente => &self.sente,
            Player::Gote => &self.gote,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, player: Player) -> &mut Hand {
        match player {
            Player::Sente => &mut self.sente,
            Player::Gote => &mut self.gote,
        }
    }
}

impl std::ops::Index<Player> for Hands {
    type Output = Hand;

    fn index(&self, player: Player) -> &Hand {
        self.get(player)
    }
}

impl std::ops::IndexMut<Player> for Hands {
    fn index_mut(&mut self, player: Player) -> &mut Hand {
        self.get_mut(player)
    }
}
