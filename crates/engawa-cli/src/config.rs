//! 対局設定（TOML）
//!
//! ```toml
//! sente = "hard"
//! gote = "easy"
//! seed = 42
//! max_plies = 256
//!
//! [search]
//! depth = 2
//! root_move_cap = 30
//! ```
//!
//! 省略したキーは既定値。コマンドラインで指定した値はファイルの値より優先する。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use engawa_core::{Difficulty, Player, SearchConfig};
use serde::{Deserialize, Serialize};

/// 自己対局の既定の最大手数
pub const DEFAULT_MAX_PLIES: u32 = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    pub sente: Difficulty,
    pub gote: Difficulty,
    /// 乱数の種。None なら実行ごとに変わる
    pub seed: Option<u64>,
    pub max_plies: u32,
    pub search: SearchConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            sente: Difficulty::Normal,
            gote: Difficulty::Normal,
            seed: None,
            max_plies: DEFAULT_MAX_PLIES,
            search: SearchConfig::default(),
        }
    }
}

impl PlayConfig {
    /// TOML ファイルから読み込む
    pub fn load(path: &Path) -> Result<PlayConfig> {
        let text = fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
        PlayConfig::from_toml(&text).with_context(|| format!("parse config: {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<PlayConfig> {
        Ok(toml::from_str(text)?)
    }

    /// 手番側の難易度
    pub fn difficulty_for(&self, player: Player) -> Difficulty {
        match player {
            Player::Sente => self.sente,
            Player::Gote => self.gote,
        }
    }

    /// 種が未指定なら乱数で決めて埋める（ログに出して再現できるようにする）
    pub fn resolve_seed(&mut self) -> u64 {
        *self.seed.get_or_insert_with(rand::random::<u64>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(PlayConfig::from_toml("").unwrap(), PlayConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = PlayConfig::from_toml(
            r#"
            sente = "hard"
            seed = 7

            [search]
            depth = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.sente, Difficulty::Hard);
        assert_eq!(config.gote, Difficulty::Normal);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_plies, DEFAULT_MAX_PLIES);
        assert_eq!(config.search.depth, 1);
        assert_eq!(config.search.root_move_cap, SearchConfig::DEFAULT_ROOT_MOVE_CAP);
        assert_eq!(config.difficulty_for(Player::Sente), Difficulty::Hard);
    }

    #[test]
    fn test_unknown_key_and_bad_difficulty_rejected() {
        assert!(PlayConfig::from_toml("blitz = true").is_err());
        assert!(PlayConfig::from_toml(r#"sente = "expert""#).is_err());
    }

    #[test]
    fn test_resolve_seed_keeps_explicit_seed() {
        let mut config = PlayConfig {
            seed: Some(3),
            ..PlayConfig::default()
        };
        assert_eq!(config.resolve_seed(), 3);

        let mut config = PlayConfig::default();
        let seed = config.resolve_seed();
        assert_eq!(config.seed, Some(seed));
    }
}
