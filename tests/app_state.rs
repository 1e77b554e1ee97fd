use std::path::PathBuf;

use refswitch::state::AppState;

#[test]
fn app_state_defaults_last_project_path_to_none() {
    let state = AppState::default();
    assert_eq!(state.last_project_path, None);
    assert!(state.recent_project_paths.is_empty());
}

#[test]
fn app_state_parses_without_fields() {
    let state: AppState = toml::from_str("").expect("state without fields should parse");
    assert_eq!(state, AppState::default());
}

#[test]
fn app_state_round_trips() {
    let mut state = AppState::default();
    state.remember_project(&PathBuf::from("/tmp/refswitch-repo"));

    let raw = toml::to_string(&state).expect("state should serialize");
    let loaded: AppState = toml::from_str(&raw).expect("state should deserialize");

    assert_eq!(loaded, state);
}

#[test]
fn remember_project_deduplicates_and_moves_to_front() {
    let mut state = AppState::default();
    state.remember_project(&PathBuf::from("/repo/a"));
    state.remember_project(&PathBuf::from("/repo/b"));
    state.remember_project(&PathBuf::from("/repo/a"));

    assert_eq!(state.last_project_path, Some(PathBuf::from("/repo/a")));
    assert_eq!(
        state.recent_project_paths,
        vec![PathBuf::from("/repo/a"), PathBuf::from("/repo/b")]
    );
}

#[test]
fn remember_project_bounds_the_recents_list() {
    let mut state = AppState::default();
    for index in 0..12 {
        state.remember_project(&PathBuf::from(format!("/repo/{index}")));
    }

    assert_eq!(state.recent_project_paths.len(), 8);
    assert_eq!(
        state.recent_project_paths.first(),
        Some(&PathBuf::from("/repo/11"))
    );
}
