//! engawa コマンドラインの実装
//!
//! - [`config`]: 対局設定ファイル（TOML）
//! - [`selfplay`]: AI 同士の自己対局
//! - [`play`]: 人間 vs AI の対話対局

pub mod config;
pub mod play;
pub mod selfplay;
