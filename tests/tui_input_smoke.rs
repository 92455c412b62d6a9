use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use vtm_dice::render::Glyphs;
use vtm_dice::tui::app::{AppState, InputAction, MenuItem, Scene};
use vtm_dice::tui::controller::handle_key;

fn seeded_app() -> AppState {
    AppState::new(Duration::from_secs(60), Some(9), Glyphs::Ascii)
}

#[test]
fn menu_navigation_adjusts_session() {
    let mut app = seeded_app();
    assert!(matches!(app.scene, Scene::Config));
    assert_eq!(app.menu_item(), MenuItem::Title);
    let _ = app.handle_input(InputAction::MenuNext);
    assert_eq!(app.menu_item(), MenuItem::Dice);
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.session.dice_count(), 6);
    let _ = app.handle_input(InputAction::MenuPrev);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_item(), MenuItem::Hunger);
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.session.hunger(), 1);
}

#[test]
fn roll_shows_result_and_back_returns() {
    let mut app = seeded_app();
    assert!(app.handle_input(InputAction::Roll));
    assert!(matches!(app.scene, Scene::Result));
    assert_eq!(app.last_outcome().map(|o| o.faces().len()), Some(5));
    let _ = app.handle_input(InputAction::Back);
    assert!(matches!(app.scene, Scene::Config));
}

#[test]
fn title_entry_edits_and_saves() {
    let mut app = seeded_app();
    assert!(!handle_key(&mut app, KeyCode::Enter));
    assert!(app.title_entry_active());
    for c in "Feral".chars() {
        let _ = handle_key(&mut app, KeyCode::Char(c));
    }
    // 'q' inside a text field is text, not quit
    assert!(!handle_key(&mut app, KeyCode::Char('q')));
    let _ = handle_key(&mut app, KeyCode::Backspace);
    let _ = handle_key(&mut app, KeyCode::Enter);
    assert!(!app.title_entry_active());
    assert_eq!(app.session.title(), Some("Feral"));
}

#[test]
fn manual_entry_rejects_then_rolls() {
    let mut app = seeded_app();
    let _ = app.handle_input(InputAction::ManualOpen);
    assert!(matches!(app.scene, Scene::Manual));
    let _ = app.handle_input(InputAction::ManualNextField);
    let _ = app.handle_input(InputAction::TextBackspace);
    let _ = app.handle_input(InputAction::TextChar('x'));
    assert!(!app.handle_input(InputAction::TextSubmit));
    assert_eq!(app.error(), Some("dice must be a whole number"));
    let _ = app.handle_input(InputAction::TextBackspace);
    let _ = app.handle_input(InputAction::TextChar('8'));
    assert!(app.handle_input(InputAction::TextSubmit));
    assert!(matches!(app.scene, Scene::Result));
    assert_eq!(app.last_outcome().map(|o| o.dice_count()), Some(8));
    assert!(app.manual_form().is_none());
}

#[test]
fn expiry_locks_until_new_session() {
    let mut app = seeded_app();
    let later = Instant::now() + Duration::from_secs(61);
    app.on_tick(later);
    assert!(matches!(app.scene, Scene::Expired));
    assert!(!app.handle_input_at(InputAction::Roll, later));
    assert!(matches!(app.scene, Scene::Expired));
    let _ = app.handle_input_at(InputAction::NewSession, later);
    assert!(matches!(app.scene, Scene::Config));
    assert!(app.handle_input_at(InputAction::Roll, later));
}

#[test]
fn quit_and_help_keys() {
    let mut app = seeded_app();
    assert!(!handle_key(&mut app, KeyCode::Char('?')));
    assert!(app.help_open());
    assert!(!handle_key(&mut app, KeyCode::Esc));
    assert!(!app.help_open());
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}
