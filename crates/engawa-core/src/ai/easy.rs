use rand::{Rng, RngCore};

use super::MoveSelector;
use crate::position::Position;
use crate::types::Move;

/// 合法手から一様ランダムに選ぶ
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl MoveSelector for RandomSelector {
    fn name(&self) -> &'static str {
        "easy"
    }

    fn select(&self, _pos: &Position, moves: &[Move], rng: &mut dyn RngCore) -> Option<Move> {
        if moves.is_empty() {
            return None;
        }
        Some(moves[rng.random_range(0..moves.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::seeded_rng;

    #[test]
    fn test_random_selector_is_reproducible() {
        let pos = Position::startpos();
        let moves = pos.legal_moves();
        let pick = |seed| RandomSelector.select(&pos, &moves, &mut seeded_rng(seed));
        assert_eq!(pick(42), pick(42));
        assert!(moves.contains(&pick(3).unwrap()));
    }

    #[test]
    fn test_random_selector_covers_many_moves() {
        let pos = Position::startpos();
        let moves = pos.legal_moves();
        let mut rng = seeded_rng(0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(RandomSelector.select(&pos, &moves, &mut rng).unwrap());
        }
        assert!(seen.len() > 20, "only {} distinct moves", seen.len());
    }
}
