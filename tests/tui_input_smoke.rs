use blackjack_rs::game::{GameState, OpeningDeal, Rules};
use blackjack_rs::scoring::Scoring;
use blackjack_rs::tui::app::{AppConfig, AppState, InputAction, Scene};
use blackjack_rs::tui::controller::handle_key;
use crossterm::event::KeyCode;

fn setup_table_app() -> AppState {
    let mut app = AppState::new(AppConfig::new(Rules::default().with_seed(12), 0, "unused.sav"));
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
}

#[test]
fn menu_edits_apply_to_the_next_game() {
    let mut app = AppState::default();
    let _ = app.handle_input(InputAction::MenuInc); // scoring
    let _ = app.handle_input(InputAction::MenuNext);
    let _ = app.handle_input(InputAction::MenuInc); // opening
    let _ = app.handle_input(InputAction::MenuApply);
    assert_eq!(app.config.rules.scoring, Scoring::RawRank);
    assert_eq!(app.config.rules.opening, OpeningDeal::Double);

    let _ = app.handle_input(InputAction::NewGame);
    assert_eq!(app.game.rules().scoring, Scoring::RawRank);
    assert_eq!(app.game.human_hand().len(), 2);
}

#[test]
fn help_and_history_toggle() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.history_open());
}

#[test]
fn keys_drive_a_game() {
    let mut app = setup_table_app();
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.game.state(), GameState::Playing);
    assert!(!handle_key(&mut app, KeyCode::Char('d')));
    assert_eq!(app.game.human_hand().len(), 2);

    assert!(!handle_key(&mut app, KeyCode::Char('s')));
    assert!(app.game.human().is_standing());
    for _ in 0..50 {
        if app.game.state() != GameState::Playing {
            break;
        }
        app.agents_on_turn();
    }
    assert!(app.game.state().is_terminal());
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}

#[test]
fn hidden_card_is_revealed_at_the_end() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::NewGame);
    assert!(app.computer_hole_hidden());
    let _ = app.handle_input(InputAction::Stand);
    for _ in 0..50 {
        app.agents_on_turn();
    }
    assert!(app.game.state().is_terminal());
    assert!(!app.computer_hole_hidden());
}

#[test]
fn save_and_load_through_the_app() {
    let path = std::env::temp_dir().join(format!("blackjack-rs-tui-{}.sav", std::process::id()));
    let mut app = AppState::new(AppConfig::new(Rules::default().with_seed(3), 0, path.clone()));
    app.apply_menu();
    let _ = app.handle_input(InputAction::NewGame);
    let _ = app.handle_input(InputAction::Save);
    assert!(app.notice().is_some());
    let saved = app.game.snapshot();

    let _ = app.handle_input(InputAction::NewGame);
    let _ = app.handle_input(InputAction::Load);
    std::fs::remove_file(&path).ok();
    assert_eq!(app.game.snapshot(), saved);
}

#[test]
fn loading_a_save_keeps_the_menu_rules_for_the_next_game() {
    let path =
        std::env::temp_dir().join(format!("blackjack-rs-tui-rules-{}.sav", std::process::id()));
    let mut app = AppState::new(AppConfig::new(Rules::default().with_seed(5), 0, path.clone()));
    app.apply_menu();
    let _ = app.handle_input(InputAction::NewGame);
    let _ = app.handle_input(InputAction::Save);

    // Switch to raw scoring, then load the standard-scored save.
    let _ = app.handle_input(InputAction::ToggleMenu);
    let _ = app.handle_input(InputAction::MenuInc);
    let _ = app.handle_input(InputAction::MenuApply);
    let _ = app.handle_input(InputAction::Load);
    std::fs::remove_file(&path).ok();
    assert_eq!(app.game.rules().scoring, Scoring::Standard);
    assert_eq!(app.config.rules.scoring, Scoring::RawRank);

    let _ = app.handle_input(InputAction::NewGame);
    assert_eq!(app.game.rules().scoring, Scoring::RawRank);
}
