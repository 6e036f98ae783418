//! 局面のテキスト表示（KIF の盤面図に近い形式）

use std::fmt;

use super::Position;
use crate::types::{BOARD_SIZE, Hand, Player, Square};

const RANK_KANJI: [&str; BOARD_SIZE] = ["一", "二", "三", "四", "五", "六", "七", "八", "九"];

fn write_hand(f: &mut fmt::Formatter<'_>, player: Player, hand: &Hand) -> fmt::Result {
    write!(f, "{}の持駒:", player.label())?;
    if hand.is_empty() {
        return writeln!(f, "なし");
    }
    for (kind, n) in hand.iter() {
        if n > 1 {
            write!(f, " {}{n}", kind.kanji())?;
        } else {
            write!(f, " {}", kind.kanji())?;
        }
    }
    writeln!(f)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hand(f, Player::Gote, &self.hands[Player::Gote])?;
        writeln!(f, "  ９ ８ ７ ６ ５ ４ ３ ２ １")?;
        writeln!(f, "+---------------------------+")?;
        for (row, rank) in RANK_KANJI.iter().enumerate() {
            f.write_str("|")?;
            for col in 0..BOARD_SIZE {
                match self.board.get(Square::at(row, col)) {
                    // 後手の駒は "v" を前置
                    Some(piece) if piece.owner == Player::Gote => write!(f, "v{}", piece.kanji())?,
                    Some(piece) => write!(f, " {}", piece.kanji())?,
                    None => f.write_str(" ・")?,
                }
            }
            writeln!(f, "|{rank}")?;
        }
        writeln!(f, "+---------------------------+")?;
        write_hand(f, Player::Sente, &self.hands[Player::Sente])?;
        write!(f, "手番: {}", self.side_to_move.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BaseKind;

    #[test]
    fn test_display_startpos() {
        let text = Position::startpos().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "後手の持駒:なし");
        assert_eq!(lines[3], "|v香v桂v銀v金v王v金v銀v桂v香|一");
        assert_eq!(lines[11], "| 香 桂 銀 金 玉 金 銀 桂 香|九");
        assert_eq!(lines.last(), Some(&"手番: 先手"));
    }

    #[test]
    fn test_display_hand_counts() {
        let mut pos = Position::startpos();
        pos.hands[Player::Sente].set(BaseKind::Pawn, 3);
        pos.hands[Player::Sente].add(BaseKind::Bishop);
        let text = pos.to_string();
        assert!(text.contains("先手の持駒: 歩3 角"), "{text}");
    }
}
