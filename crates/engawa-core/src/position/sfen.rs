//! SFEN 形式の入出力
//!
//! `<盤面> <手番> <持ち駒> [<手数>]`。手数は読み捨て、出力では常に 1。

use super::Position;
use crate::board::Board;
use crate::error::{Result, ShogiError};
use crate::types::{BOARD_SIZE, BaseKind, Hands, Piece, PieceKind, Player, Square};

/// 平手初期局面
pub const STARTPOS_SFEN: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

/// 持ち駒の出力順（飛角金銀桂香歩）
const HAND_SFEN_ORDER: [BaseKind; 7] = [
    BaseKind::Rook,
    BaseKind::Bishop,
    BaseKind::Gold,
    BaseKind::Silver,
    BaseKind::Knight,
    BaseKind::Lance,
    BaseKind::Pawn,
];

fn invalid(msg: impl Into<String>) -> ShogiError {
    ShogiError::InvalidSfen(msg.into())
}

impl Position {
    /// SFEN 文字列から局面を作る（先頭の "sfen " は省略可）
    pub fn from_sfen(sfen: &str) -> Result<Position> {
        let sfen = sfen.trim();
        let sfen = sfen.strip_prefix("sfen ").unwrap_or(sfen);
        let mut fields = sfen.split_whitespace();

        let board_field = fields.next().ok_or_else(|| invalid("empty string"))?;
        let turn_field = fields.next().ok_or_else(|| invalid("missing side to move"))?;
        let hand_field = fields.next().ok_or_else(|| invalid("missing hands"))?;
        if let Some(ply) = fields.next() {
            ply.parse::<u32>()
                .map_err(|_| invalid(format!("bad move number '{ply}'")))?;
        }
        if let Some(extra) = fields.next() {
            return Err(invalid(format!("unexpected trailing field '{extra}'")));
        }

        let board = parse_board(board_field)?;
        let side_to_move = match turn_field {
            "b" => Player::Sente,
            "w" => Player::Gote,
            other => return Err(invalid(format!("bad side to move '{other}'"))),
        };
        let hands = parse_hands(hand_field)?;
        check_piece_counts(&board, &hands)?;

        Ok(Position::new(board, hands, side_to_move))
    }

    /// SFEN 文字列に変換
    pub fn to_sfen(&self) -> String {
        let mut out = String::with_capacity(96);

        for row in 0..BOARD_SIZE {
            if row > 0 {
                out.push('/');
            }
            let mut empties = 0;
            for col in 0..BOARD_SIZE {
                match self.board.get(Square::at(row, col)) {
                    Some(piece) => {
                        if empties > 0 {
                            out.push_str(&empties.to_string());
                            empties = 0;
                        }
                        out.push_str(&piece.to_sfen());
                    }
                    None => empties += 1,
                }
            }
            if empties > 0 {
                out.push_str(&empties.to_string());
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Player::Sente => 'b',
            Player::Gote => 'w',
        });
        out.push(' ');

        let mut any = false;
        for player in Player::ALL {
            for kind in HAND_SFEN_ORDER {
                let n = self.hands[player].count(kind);
                if n == 0 {
                    continue;
                }
                any = true;
                if n > 1 {
                    out.push_str(&n.to_string());
                }
                let c = kind.sfen_char();
                out.push(match player {
                    Player::Sente => c,
                    Player::Gote => c.to_ascii_lowercase(),
                });
            }
        }
        if !any {
            out.push('-');
        }

        out.push_str(" 1");
        out
    }
}

fn parse_board(field: &str) -> Result<Board> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(invalid(format!("expected 9 ranks, got {}", rows.len())));
    }

    let mut board = Board::empty();
    for (row, text) in rows.iter().enumerate() {
        let mut col = 0usize;
        let mut promoted = false;
        for c in text.chars() {
            if c == '+' {
                if promoted {
                    return Err(invalid(format!("double '+' in rank {}", row + 1)));
                }
                promoted = true;
                continue;
            }
            if let Some(n) = c.to_digit(10) {
                if promoted || n == 0 {
                    return Err(invalid(format!("bad empty count '{c}' in rank {}", row + 1)));
                }
                col += n as usize;
                if col > BOARD_SIZE {
                    return Err(invalid(format!("rank {} overflows", row + 1)));
                }
                continue;
            }

            let base = BaseKind::from_sfen_char(c).ok_or_else(|| invalid(format!("bad piece '{c}'")))?;
            if col >= BOARD_SIZE {
                return Err(invalid(format!("rank {} overflows", row + 1)));
            }
            let owner = if c.is_ascii_uppercase() {
                Player::Sente
            } else {
                Player::Gote
            };
            let kind = if promoted {
                PieceKind::Base(base)
                    .promote()
                    .ok_or_else(|| invalid(format!("'{c}' cannot be promoted")))?
            } else {
                PieceKind::Base(base)
            };
            board.set(Square::at(row, col), Some(Piece::new(kind, owner)));
            col += 1;
            promoted = false;
        }
        if promoted {
            return Err(invalid(format!("dangling '+' in rank {}", row + 1)));
        }
        if col != BOARD_SIZE {
            return Err(invalid(format!("rank {} has {col} squares", row + 1)));
        }
    }
    Ok(board)
}

fn parse_hands(field: &str) -> Result<Hands> {
    let mut hands = Hands::EMPTY;
    if field == "-" {
        return Ok(hands);
    }

    let mut count: u32 = 0;
    for c in field.chars() {
        if let Some(d) = c.to_digit(10) {
            count = count * 10 + d;
            if count > 18 {
                return Err(invalid(format!("hand count too large in '{field}'")));
            }
            continue;
        }
        let kind = BaseKind::from_sfen_char(c)
            .filter(|&k| k != BaseKind::King)
            .ok_or_else(|| invalid(format!("bad hand piece '{c}'")))?;
        let owner = if c.is_ascii_uppercase() {
            Player::Sente
        } else {
            Player::Gote
        };
        let n = if count == 0 { 1 } else { count };
        let hand = &mut hands[owner];
        let total = hand.count(kind) + n;
        if total > kind.initial_count() {
            return Err(invalid(format!("too many '{c}' in hand")));
        }
        let total = u8::try_from(total).map_err(|_| invalid(format!("too many '{c}' in hand")))?;
        hand.set(kind, total);
        count = 0;
    }
    if count != 0 {
        return Err(invalid(format!("dangling count in '{field}'")));
    }
    Ok(hands)
}

/// 盤上と両者の手駒の合計が駒種ごとの総数を超えていないか
fn check_piece_counts(board: &Board, hands: &Hands) -> Result<()> {
    let mut counts = [0u32; BaseKind::NUM];
    for (_, piece) in board.pieces() {
        counts[piece.kind.base().index()] += 1;
    }
    for player in Player::ALL {
        for (kind, n) in hands[player].iter() {
            counts[kind.index()] += n;
        }
    }
    for kind in BaseKind::ALL {
        if counts[kind.index()] > kind.initial_count() {
            return Err(invalid(format!(
                "{} {} pieces (max {})",
                counts[kind.index()],
                kind.kanji(),
                kind.initial_count()
            )));
        }
    }
    Ok(())
}
