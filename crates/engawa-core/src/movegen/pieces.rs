//! 駒ごとの利き（擬似合法な移動先）
//!
//! 方向は (前方, 横) の組で持ち、手番の前進方向を掛けて row 差分に変換する。
//! - 跳び駒（玉・金・銀・桂・歩）は固定の差分集合から自駒のあるマスを除く
//! - 走り駒（飛・角・香）は一方向ずつ進み、空きマスは追加して継続、
//!   敵駒のマスは追加して停止、自駒のマスは追加せずに停止する
//! - 龍・馬は走りと一歩の跳びを合成し、成銀・成桂・成香・と金は金と同じ

use smallvec::SmallVec;

use crate::board::Board;
use crate::types::{BaseKind, PieceKind, Player, PromotedKind, Square};

/// 一駒の移動先リスト（龍の最大 20 マスまでヒープ確保なし）
pub type Destinations = SmallVec<[Square; 20]>;

type Dirs = &'static [(i32, i32)];

const KING_STEPS: Dirs = &[(1, -1), (1, 0), (1, 1), (0, -1), (0, 1), (-1, -1), (-1, 0), (-1, 1)];
const GOLD_STEPS: Dirs = &[(1, -1), (1, 0), (1, 1), (0, -1), (0, 1), (-1, 0)];
const SILVER_STEPS: Dirs = &[(1, -1), (1, 0), (1, 1), (-1, -1), (-1, 1)];
const KNIGHT_STEPS: Dirs = &[(2, -1), (2, 1)];
const PAWN_STEPS: Dirs = &[(1, 0)];
const DIAGONAL_STEPS: Dirs = &[(1, -1), (1, 1), (-1, -1), (-1, 1)];
const ORTHOGONAL_STEPS: Dirs = &[(1, 0), (-1, 0), (0, -1), (0, 1)];

const ROOK_RAYS: Dirs = &[(1, 0), (-1, 0), (0, -1), (0, 1)];
const BISHOP_RAYS: Dirs = &[(1, -1), (1, 1), (-1, -1), (-1, 1)];
const LANCE_RAYS: Dirs = &[(1, 0)];

/// 駒種ごとの動き（一歩の跳び + 走り）
struct Movement {
    steps: Dirs,
    rays: Dirs,
}

const fn movement(kind: PieceKind) -> Movement {
    match kind {
        PieceKind::Base(base) => match base {
            BaseKind::King => Movement { steps: KING_STEPS, rays: &[] },
            BaseKind::Gold => Movement { steps: GOLD_STEPS, rays: &[] },
            BaseKind::Silver => Movement { steps: SILVER_STEPS, rays: &[] },
            BaseKind::Knight => Movement { steps: KNIGHT_STEPS, rays: &[] },
            BaseKind::Pawn => Movement { steps: PAWN_STEPS, rays: &[] },
            BaseKind::Rook => Movement { steps: &[], rays: ROOK_RAYS },
            BaseKind::Bishop => Movement { steps: &[], rays: BISHOP_RAYS },
            BaseKind::Lance => Movement { steps: &[], rays: LANCE_RAYS },
        },
        PieceKind::Promoted(promoted) => match promoted {
            PromotedKind::Dragon => Movement { steps: DIAGONAL_STEPS, rays: ROOK_RAYS },
            PromotedKind::Horse => Movement { steps: ORTHOGONAL_STEPS, rays: BISHOP_RAYS },
            PromotedKind::ProSilver
            | PromotedKind::ProKnight
            | PromotedKind::ProLance
            | PromotedKind::ProPawn => Movement { steps: GOLD_STEPS, rays: &[] },
        },
    }
}

/// `owner` の `kind` が `from` にいるときの擬似合法な移動先
///
/// 盤上の `from` に実際に駒があるかは見ない（玉の利き判定でも使うため）。
pub fn destinations(board: &Board, kind: PieceKind, owner: Player, from: Square) -> Destinations {
    let fwd = owner.forward();
    let Movement { steps, rays } = movement(kind);
    let mut out = Destinations::new();

    for &(df, dc) in steps {
        if let Some(to) = from.offset(df * fwd, dc)
            && board.get(to).is_none_or(|p| p.owner != owner)
        {
            out.push(to);
        }
    }

    for &(df, dc) in rays {
        let mut cur = from;
        while let Some(to) = cur.offset(df * fwd, dc) {
            match board.get(to) {
                None => out.push(to),
                Some(p) => {
                    if p.owner != owner {
                        out.push(to);
                    }
                    break;
                }
            }
            cur = to;
        }
    }

    out
}

/// `from` から `target` に利きがあるか（移動先リストを作らずに判定）
pub fn attacks(board: &Board, kind: PieceKind, owner: Player, from: Square, target: Square) -> bool {
    let fwd = owner.forward();
    let Movement { steps, rays } = movement(kind);

    if steps
        .iter()
        .any(|&(df, dc)| from.offset(df * fwd, dc) == Some(target))
    {
        return true;
    }

    for &(df, dc) in rays {
        let mut cur = from;
        while let Some(to) = cur.offset(df * fwd, dc) {
            if to == target {
                return true;
            }
            if board.get(to).is_some() {
                break;
            }
            cur = to;
        }
    }

    false
}
