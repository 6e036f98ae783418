//! USI 形式の指し手文字列
//!
//! 盤上の移動は "7g7f"、成りは "8h2b+"、打ちは "P*5e"。
//! 文字列として壊れていれば `InvalidUsi`、形式は正しいが現局面で指せなければ `InvalidMove`。

use crate::error::{Result, ShogiError};
use crate::position::Position;
use crate::types::{BaseKind, Move, Square};

fn invalid(text: &str) -> ShogiError {
    ShogiError::InvalidUsi(text.to_string())
}

/// 文字列を局面の合法手に解決する
///
/// 返す `Move` は合法手リストのもの（取った駒などが埋まっている）。
pub fn parse_usi_move(text: &str, pos: &Position) -> Result<Move> {
    let text = text.trim();
    let probe = parse_shape(text)?;

    if let Some(from) = probe.from
        && pos.board.get(from).is_none_or(|p| p.owner != pos.side_to_move)
    {
        return Err(ShogiError::InvalidMove {
            player: pos.side_to_move,
            detail: format!("no own piece on {from}"),
        });
    }

    pos.find_legal(&probe).ok_or_else(|| ShogiError::InvalidMove {
        player: pos.side_to_move,
        detail: format!("{text} is not a legal move"),
    })
}

/// 文字列の形だけを解析する（駒種・取る駒は埋めない）
fn parse_shape(text: &str) -> Result<Move> {
    if !text.is_ascii() {
        return Err(invalid(text));
    }

    if let Some((piece, to)) = text.split_once('*') {
        let mut chars = piece.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => BaseKind::from_sfen_char(c),
            _ => None,
        }
        .filter(|&k| k != BaseKind::King)
        .ok_or_else(|| invalid(text))?;
        let to = Square::from_usi(to).ok_or_else(|| invalid(text))?;
        return Ok(Move::drop(kind, to));
    }

    let (body, promote) = match text.strip_suffix('+') {
        Some(body) => (body, true),
        None => (text, false),
    };
    if body.len() != 4 {
        return Err(invalid(text));
    }
    let from = Square::from_usi(&body[..2]).ok_or_else(|| invalid(text))?;
    let to = Square::from_usi(&body[2..]).ok_or_else(|| invalid(text))?;
    if from == to {
        return Err(invalid(text));
    }
    // 駒種は照合に使わないので仮の値を入れる
    Ok(Move {
        from: Some(from),
        to,
        piece: BaseKind::King.into(),
        promote,
        captured: None,
        drop_kind: None,
    })
}
