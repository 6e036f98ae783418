//! 対局状態（GameState）と局面の状態遷移
//!
//! `GameState` は不変の値として扱う。`apply` は新しい状態を返し、
//! 受け取った状態は変更しない。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{Result, ShogiError};
use crate::position::Position;
use crate::types::{Hands, Move, Piece, PieceKind, Player};

/// 手番側から見た局面の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// 終局状態か（詰み・ステイルメイト）
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        })
    }
}

/// `player` の状態を 詰み → ステイルメイト → 王手 → 通常 の順で判定
pub fn classify(board: &Board, hands: &Hands, player: Player) -> GameStatus {
    let pos = Position::new(*board, *hands, player);
    let in_check = pos.in_check();
    match (in_check, pos.has_legal_move()) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Playing,
    }
}

/// 対局中の出来事の通知先
///
/// 効果音・統計・実況などはここに実装を差し込む。全メソッドは既定で何もしない。
/// 通知は状態遷移が成功した後にだけ行われる。
pub trait GameObserver {
    /// 指し手が適用された（`state` は適用後の状態）
    fn on_move_applied(&mut self, _mv: &Move, _state: &GameState) {}

    /// 駒を取った
    fn on_capture(&mut self, _by: Player, _captured: Piece) {}

    /// 駒が成った（`kind` は成った後の駒種）
    fn on_promotion(&mut self, _by: Player, _kind: PieceKind) {}

    /// `player` に王手がかかった（詰みの場合は呼ばれない）
    fn on_check(&mut self, _player: Player) {}

    /// 終局した。ステイルメイトでは `winner` は None
    fn on_game_over(&mut self, _status: GameStatus, _winner: Option<Player>) {}
}

/// 何もしない通知先
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// 対局状態
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    hands: Hands,
    history: Vec<Move>,
    status: GameStatus,
    winner: Option<Player>,
}

impl GameState {
    /// 平手初期局面から開始（先手番）
    pub fn new() -> GameState {
        GameState {
            board: Board::initial(),
            turn: Player::Sente,
            hands: Hands::EMPTY,
            history: Vec::new(),
            status: GameStatus::Playing,
            winner: None,
        }
    }

    /// 任意の局面から開始（詰将棋や SFEN 入力用）
    ///
    /// 状態は手番側について判定し直す。既に詰んでいれば勝者は相手側。
    pub fn from_position(pos: &Position) -> GameState {
        let status = classify(&pos.board, &pos.hands, pos.side_to_move);
        GameState {
            board: pos.board,
            turn: pos.side_to_move,
            hands: pos.hands,
            history: Vec::new(),
            status,
            winner: (status == GameStatus::Checkmate).then(|| pos.side_to_move.opponent()),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    /// これまでの指し手（古い順）
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// 手数
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// 現局面（盤面 + 手駒 + 手番）
    pub fn position(&self) -> Position {
        Position::new(self.board, self.hands, self.turn)
    }

    /// 手番側の合法手
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.position().legal_moves()
    }

    /// 指し手を適用した新しい状態を返す
    pub fn apply(&self, mv: &Move) -> Result<GameState> {
        self.apply_observed(mv, &mut NoopObserver)
    }

    /// `apply` と同じだが、遷移後に `observer` へ通知する
    ///
    /// 終局後は `GameOver`、合法手でなければ `InvalidMove` で失敗し、通知は行わない。
    pub fn apply_observed(&self, mv: &Move, observer: &mut dyn GameObserver) -> Result<GameState> {
        if self.is_over() {
            return Err(ShogiError::GameOver);
        }
        let mover = self.turn;
        let pos = self.position();
        let legal = pos.find_legal(mv).ok_or_else(|| ShogiError::InvalidMove {
            player: mover,
            detail: format!("{mv} is not a legal move"),
        })?;

        let next = pos.apply(&legal);
        let status = classify(&next.board, &next.hands, next.side_to_move);
        let winner = (status == GameStatus::Checkmate).then_some(mover);

        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(legal);

        let state = GameState {
            board: next.board,
            turn: next.side_to_move,
            hands: next.hands,
            history,
            status,
            winner,
        };
        log::trace!("ply {} {mover}: {legal} -> {status}", state.ply());

        if let Some(captured) = legal.captured {
            observer.on_capture(mover, captured);
        }
        if legal.promote {
            observer.on_promotion(mover, legal.resulting_kind());
        }
        observer.on_move_applied(&legal, &state);
        match status {
            GameStatus::Check => observer.on_check(state.turn),
            GameStatus::Checkmate | GameStatus::Stalemate => observer.on_game_over(status, winner),
            GameStatus::Playing => {}
        }

        Ok(state)
    }

    /// 平手初期局面から `moves` を順に適用した状態を作る
    ///
    /// 最初の非合法手（または終局後の手）で失敗する。
    pub fn replay(moves: &[Move]) -> Result<GameState> {
        moves.iter().try_fold(GameState::new(), |state, mv| state.apply(mv))
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
