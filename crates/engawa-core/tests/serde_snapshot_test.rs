//! GameState / Move の JSON スナップショット

use engawa_core::{
    BaseKind, Difficulty, GameState, GameStatus, Move, Position, SearchConfig, Square, parse_usi_move,
};

fn play(usi: &[&str]) -> GameState {
    usi.iter().fold(GameState::new(), |state, text| {
        let mv = parse_usi_move(text, &state.position()).unwrap();
        state.apply(&mv).unwrap()
    })
}

#[test]
fn test_game_state_json_round_trip() {
    // 角交換で両者が角を持ち駒にする
    let state = play(&["7g7f", "3c3d", "8h2b+", "3a2b"]);
    assert_eq!(state.hands().sente.count(BaseKind::Bishop), 1);
    assert_eq!(state.hands().gote.count(BaseKind::Bishop), 1);

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
    assert_eq!(restored.ply(), 4);

    // 復元した状態からそのまま対局を続けられる
    let mv = parse_usi_move("B*5e", &restored.position()).unwrap();
    let next = restored.apply(&mv).unwrap();
    assert_eq!(next.status(), GameStatus::Playing);
}

#[test]
fn test_json_field_names() {
    let value = serde_json::to_value(GameState::new()).unwrap();
    assert_eq!(value["turn"], "sente");
    assert_eq!(value["status"], "playing");
    assert!(value["winner"].is_null());
    assert_eq!(value["history"].as_array().map(Vec::len), Some(0));

    let mv = Move::drop(BaseKind::Pawn, Square::new(4, 4).unwrap());
    let value = serde_json::to_value(mv).unwrap();
    assert_eq!(value["to"]["row"], 4);
    assert_eq!(value["to"]["col"], 4);
    assert_eq!(value["drop_kind"], "pawn");
    assert!(value["from"].is_null());
}

#[test]
fn test_out_of_range_square_is_rejected() {
    let json = r#"{"row": 9, "col": 0}"#;
    assert!(serde_json::from_str::<Square>(json).is_err());
}

#[test]
fn test_search_config_defaults_fill_missing_fields() {
    let config: SearchConfig = serde_json::from_str(r#"{"depth": 1}"#).unwrap();
    assert_eq!(config.depth, 1);
    assert_eq!(config.root_move_cap, SearchConfig::DEFAULT_ROOT_MOVE_CAP);

    let d: Difficulty = serde_json::from_str(r#""hard""#).unwrap();
    assert_eq!(d, Difficulty::Hard);

    let json = serde_json::to_string(&Position::startpos()).unwrap();
    let pos: Position = serde_json::from_str(&json).unwrap();
    assert_eq!(pos, Position::startpos());
}
