//! AI 同士の自己対局

use anyhow::Result;
use engawa_core::{
    GameObserver, GameState, GameStatus, Move, Piece, PieceKind, Player, Position, select_move, seeded_rng,
};
use serde::Serialize;

use crate::config::PlayConfig;

/// 対局の終わり方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Checkmate,
    Stalemate,
    /// 最大手数に達した
    MaxPlies,
}

/// 自己対局の結果（`--json` の出力）
#[derive(Debug, Clone, Serialize)]
pub struct SelfplayResult {
    pub result: Outcome,
    pub winner: Option<Player>,
    pub plies: usize,
    pub seed: u64,
    /// 指し手（USI 形式）
    pub moves: Vec<String>,
    /// 終局図
    pub sfen: String,
}

/// 対局中の出来事をログに流す
#[derive(Debug, Default)]
pub struct LoggingObserver {
    pub captures: u32,
    pub checks: u32,
}

impl GameObserver for LoggingObserver {
    fn on_move_applied(&mut self, mv: &Move, state: &GameState) {
        log::debug!("ply {}: {mv} ({})", state.ply(), state.status());
    }

    fn on_capture(&mut self, by: Player, captured: Piece) {
        self.captures += 1;
        log::debug!("{} captured {}", by.label(), captured.kanji());
    }

    fn on_promotion(&mut self, by: Player, kind: PieceKind) {
        log::debug!("{} promoted to {}", by.label(), kind.kanji());
    }

    fn on_check(&mut self, player: Player) {
        self.checks += 1;
        log::debug!("{} is in check", player.label());
    }

    fn on_game_over(&mut self, status: GameStatus, winner: Option<Player>) {
        match winner {
            Some(w) => log::info!("game over: {status}, winner {}", w.label()),
            None => log::info!("game over: {status}"),
        }
    }
}

/// 1 局を最後まで（または最大手数まで）指す
///
/// `on_ply` は各手の適用後に呼ばれる。
pub fn run_selfplay(
    config: &PlayConfig,
    seed: u64,
    on_ply: &mut dyn FnMut(&Move, &GameState),
) -> Result<SelfplayResult> {
    let mut rng = seeded_rng(seed);
    let mut observer = LoggingObserver::default();
    let mut state = GameState::new();
    log::info!(
        "selfplay: sente={} gote={} seed={seed} max_plies={}",
        config.sente,
        config.gote,
        config.max_plies
    );

    while !state.is_over() && state.ply() < config.max_plies as usize {
        let player = state.turn();
        let difficulty = config.difficulty_for(player);
        let Some(mv) = select_move(&state.position(), difficulty, config.search, &mut rng) else {
            break;
        };
        state = state.apply_observed(&mv, &mut observer)?;
        on_ply(&mv, &state);
    }

    let result = match state.status() {
        GameStatus::Checkmate => Outcome::Checkmate,
        GameStatus::Stalemate => Outcome::Stalemate,
        GameStatus::Playing | GameStatus::Check => Outcome::MaxPlies,
    };
    log::info!(
        "selfplay finished after {} plies ({} captures, {} checks)",
        state.ply(),
        observer.captures,
        observer.checks
    );

    Ok(SelfplayResult {
        result,
        winner: state.winner(),
        plies: state.ply(),
        seed,
        moves: state.history().iter().map(Move::to_usi).collect(),
        sfen: state.position().to_sfen(),
    })
}

/// 終局図の局面（表示用）
pub fn final_position(result: &SelfplayResult) -> Result<Position> {
    Ok(Position::from_sfen(&result.sfen)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engawa_core::{Difficulty, SearchConfig};

    fn quick_config(max_plies: u32) -> PlayConfig {
        PlayConfig {
            sente: Difficulty::Easy,
            gote: Difficulty::Normal,
            seed: None,
            max_plies,
            search: SearchConfig::default(),
        }
    }

    #[test]
    fn test_selfplay_respects_max_plies() {
        let mut count = 0;
        let result = run_selfplay(&quick_config(12), 5, &mut |_, _| count += 1).unwrap();
        assert!(result.plies <= 12);
        assert_eq!(result.plies, count);
        assert_eq!(result.moves.len(), result.plies);
        if result.result == Outcome::MaxPlies {
            assert_eq!(result.plies, 12);
            assert_eq!(result.winner, None);
        }
    }

    #[test]
    fn test_selfplay_is_reproducible() {
        let a = run_selfplay(&quick_config(20), 99, &mut |_, _| {}).unwrap();
        let b = run_selfplay(&quick_config(20), 99, &mut |_, _| {}).unwrap();
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.sfen, b.sfen);
    }

    #[test]
    fn test_final_position_matches_replay() {
        let result = run_selfplay(&quick_config(8), 1, &mut |_, _| {}).unwrap();
        let pos = final_position(&result).unwrap();
        let mut replayed = Position::startpos();
        for usi in &result.moves {
            let mv = engawa_core::parse_usi_move(usi, &replayed).unwrap();
            replayed = replayed.apply(&mv);
        }
        assert_eq!(pos, replayed);
    }

    #[test]
    fn test_result_json_shape() {
        let result = SelfplayResult {
            result: Outcome::MaxPlies,
            winner: None,
            plies: 0,
            seed: 1,
            moves: Vec::new(),
            sfen: Position::startpos().to_sfen(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["result"], "max_plies");
        assert!(value["winner"].is_null());
    }
}
