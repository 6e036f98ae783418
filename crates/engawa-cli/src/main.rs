// engawa: 将棋ルールエンジンのコマンドライン

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use engawa_cli::config::PlayConfig;
use engawa_cli::play::{PlayEnd, PlaySession};
use engawa_cli::selfplay::{final_position, run_selfplay};
use engawa_core::{Difficulty, Player, Position, SearchConfig, select_move, seeded_rng};

#[derive(Parser, Debug)]
#[command(name = "engawa", version, about = "将棋ルールエンジンと 3 段階の AI")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// AI 同士で 1 局指す
    Selfplay {
        /// 設定ファイル（TOML）
        #[arg(long)]
        config: Option<PathBuf>,
        /// 先手の難易度（easy / normal / hard）
        #[arg(long)]
        sente: Option<Difficulty>,
        /// 後手の難易度
        #[arg(long)]
        gote: Option<Difficulty>,
        /// 乱数の種
        #[arg(long)]
        seed: Option<u64>,
        /// 最大手数
        #[arg(long)]
        max_plies: Option<u32>,
        /// 結果を JSON で出力
        #[arg(long)]
        json: bool,
    },
    /// 局面の合法手を列挙（USI 形式、1 行 1 手）
    Moves {
        /// SFEN（省略時は平手初期局面）
        #[arg(long)]
        sfen: Option<String>,
    },
    /// 局面で AI が選ぶ手を出力（指せなければ resign）
    Bestmove {
        #[arg(long)]
        sfen: Option<String>,
        #[arg(long, default_value_t = Difficulty::Normal)]
        difficulty: Difficulty,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// 人間 vs AI の対局（標準入力から USI 形式で指す）
    Play {
        #[arg(long, default_value_t = Difficulty::Normal)]
        difficulty: Difficulty,
        /// 人間の手番（sente / gote）
        #[arg(long, default_value_t = Player::Sente)]
        human: Player,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );
    builder
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr);
    builder.init();

    if let Err(e) = run(cli.cmd) {
        log::error!("Fatal error: {e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn load_position(sfen: Option<&str>) -> Result<Position> {
    match sfen {
        Some(text) => Position::from_sfen(text).with_context(|| format!("parse sfen: {text}")),
        None => Ok(Position::startpos()),
    }
}

fn run(cmd: Cmd) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cmd {
        Cmd::Selfplay {
            config,
            sente,
            gote,
            seed,
            max_plies,
            json,
        } => {
            let mut config = match config {
                Some(path) => PlayConfig::load(&path)?,
                None => PlayConfig::default(),
            };
            // コマンドラインの指定を優先
            if let Some(d) = sente {
                config.sente = d;
            }
            if let Some(d) = gote {
                config.gote = d;
            }
            if let Some(n) = max_plies {
                config.max_plies = n;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            let seed = config.resolve_seed();

            let result = run_selfplay(&config, seed, &mut |mv, state| {
                if !json {
                    log::info!("{:>3}. {mv}", state.ply());
                }
            })?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                writeln!(out, "{}", final_position(&result)?)?;
                writeln!(out)?;
                writeln!(out, "moves: {}", result.moves.join(" "))?;
                let winner = result.winner.map_or("-", Player::label);
                writeln!(out, "result: {:?} winner: {winner} plies: {} seed: {}", result.result, result.plies, result.seed)?;
            }
        }
        Cmd::Moves { sfen } => {
            let pos = load_position(sfen.as_deref())?;
            for mv in pos.legal_moves() {
                writeln!(out, "{mv}")?;
            }
        }
        Cmd::Bestmove {
            sfen,
            difficulty,
            seed,
        } => {
            let pos = load_position(sfen.as_deref())?;
            let seed = seed.unwrap_or_else(rand::random::<u64>);
            let mut rng = seeded_rng(seed);
            match select_move(&pos, difficulty, SearchConfig::default(), &mut rng) {
                Some(mv) => writeln!(out, "{mv}")?,
                None => writeln!(out, "resign")?,
            }
        }
        Cmd::Play {
            difficulty,
            human,
            seed,
        } => {
            let session = PlaySession {
                human,
                difficulty,
                search: SearchConfig::default(),
                seed: seed.unwrap_or_else(rand::random::<u64>),
            };
            let stdin = io::stdin();
            let end = session.run(stdin.lock(), &mut out)?;
            if let PlayEnd::Aborted(state) = &end {
                writeln!(out, "中断 ({} 手)", state.ply())?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
