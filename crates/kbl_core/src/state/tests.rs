//! Integration tests for the game state
//!
//! Resolver → selector → scoring, through the public `GameState` operations.

use super::*;
use crate::scoring::Signal;
use crate::selector::AnswerMode;

const ROSTER_CSV: &str = "name,team,number,position,height_cm,birth_year,player_type,draft_year,draft_type,draft_round,draft_overall
허웅,부산 KCC 이지스,5,가드,185,1993,국내,2014,신인,1,5
최준용,KCC,2,포워드,200,1994,국내,2016,신인,1,2
김민수,SK,3,포워드,200,1982,국내,2008,신인,1,2
김민수,LG,11,가드,190,1999,국내,2021,신인,2,14
허훈,KT,5,가드,180,1995,국내,2017,신인,1,1
";

fn state() -> GameState {
    let roster = RosterStore::load_reader(ROSTER_CSV.as_bytes()).unwrap();
    let config = GameConfig {
        seed: Some(5),
        ..GameConfig::default()
    };
    GameState::new(Arc::new(roster), &config)
}

fn guess(name: &str, scope: Option<&str>, hint: Option<&str>) -> Result<ScoreResult> {
    state().resolve_and_score(name, scope, hint)
}

#[test]
fn single_player_scope_has_known_answer() {
    let state = state();
    let answer = state.get_answer_display(Some("KT")).unwrap();
    assert_eq!(answer.name, "허훈");
    assert_eq!(answer.height_cm, "180cm");
    assert_eq!(answer.draft, "2017 신인 1R 1");
}

#[test]
fn guessing_the_answer_is_correct() {
    let result = guess("허 훈", Some("수원 KT"), None).unwrap();
    assert!(result.is_correct);
    assert!(result.signals.all_green());
}

#[test]
fn guess_scored_against_scope_answer() {
    // KT scope answer is 허훈: 5, 가드, 180, 2017 1R
    let result = guess("허웅", Some("KT"), None).unwrap();

    assert!(!result.is_correct);
    assert_eq!(result.signals.team, Signal::Black);
    assert_eq!(result.signals.number, Signal::Green);
    assert_eq!(result.signals.position, Signal::Green);
    assert_eq!(result.signals.height_cm, Signal::Black);
    assert_eq!(result.signals.player_type, Signal::Green);
    assert_eq!(result.signals.draft, Signal::Yellow);
    assert_eq!(result.values.team, "부산 KCC 이지스");
}

#[test]
fn duplicate_name_uses_scope_then_hint() {
    // scope LG has one player, so the LG 김민수 is the answer and the guess
    let by_scope = guess("김민수", Some("LG"), None).unwrap();
    assert!(by_scope.is_correct);

    // explicit hint picks the SK one against the same answer
    let by_hint = guess("김민수", Some("LG"), Some("SK")).unwrap();
    assert!(!by_hint.is_correct);
    assert_eq!(by_hint.values.number, "3");
}

#[test]
fn unknown_guess_is_not_registered() {
    let err = guess("르브론", None, None).unwrap_err();
    assert!(matches!(err, GameError::NotRegistered { .. }));
    assert!(err.is_user_error());

    let err = guess("허웅", None, Some("SK")).unwrap_err();
    assert!(matches!(err, GameError::NotRegistered { .. }));
}

#[test]
fn unknown_team_filter_is_empty_pool() {
    let state = state();
    assert!(matches!(
        state.get_answer_display(Some("없는팀")),
        Err(GameError::EmptyPool { .. })
    ));
    assert!(matches!(
        guess("허웅", Some("없는팀"), None),
        Err(GameError::EmptyPool { .. })
    ));
}

#[test]
fn answer_stable_until_reset_and_shared_by_all_aliases() {
    let state = state();
    let first = state.get_answer_display(None).unwrap();
    for filter in [Some(""), Some("전체"), Some("KBL"), Some("ALL"), None] {
        assert_eq!(state.get_answer_display(filter).unwrap(), first);
    }

    state.reset_round();
    assert!(state.selector().cached_index(&Scope::All).is_none());
    assert!(state.get_answer_display(None).is_ok());
}

#[test]
fn lookup_player_by_name_and_team() {
    let state = state();

    assert_eq!(state.lookup_player("김민수", None).unwrap().team, "SK");
    let lg = state.lookup_player("김민수", Some("창원 LG")).unwrap();
    assert_eq!(lg.number, "11");
    assert!(matches!(
        state.lookup_player("김민수", Some("KT")),
        Err(GameError::NotFound { .. })
    ));

    let info = state.player_info("허웅", None).unwrap();
    assert!(info.age.is_some());
}

#[test]
fn every_roster_player_resolves_to_itself() {
    let state = state();
    for player in state.roster().players() {
        let team = Some(player.team.as_str());
        let found = state.lookup_player(&player.name, team).unwrap();
        assert!(found.same_identity(player), "{}", player.name);
    }
}

#[test]
fn lowercase_team_names_work_everywhere() {
    let state = state();
    let answer = state.get_answer_display(Some("kt")).unwrap();
    assert_eq!(answer.name, "허훈");
    assert!(guess("허훈", Some("kt"), Some("kt")).unwrap().is_correct);

    let kcc = state.lookup_player("허웅", Some("kcc")).unwrap();
    assert_eq!(kcc.number, "5");
}

#[test]
fn listings_and_status() {
    let state = state();
    assert_eq!(state.player_names().len(), 5);
    assert_eq!(state.team_roster()["KCC"], vec!["최준용(2)".to_string()]);
    assert_eq!(state.status().max_guesses, 9);
}

#[test]
fn empty_roster_never_panics() {
    let roster = Arc::new(RosterStore::default());
    let state = GameState::new(roster, &GameConfig::default());
    assert!(matches!(
        state.get_answer_display(None),
        Err(GameError::EmptyPool { .. })
    ));
    assert!(matches!(
        state.resolve_and_score("허웅", None, None),
        Err(GameError::NotRegistered { .. })
    ));
}

#[test]
fn load_from_csv_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ROSTER_CSV.as_bytes()).unwrap();

    let config = GameConfig {
        data_csv: file.path().to_path_buf(),
        answer_mode: AnswerMode::Daily,
        ..GameConfig::default()
    };
    let state = GameState::from_config(&config).unwrap();
    assert_eq!(state.roster().len(), 5);
    assert_eq!(state.selector().mode(), AnswerMode::Daily);
}

#[test]
fn game_state_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GameState>();
}
