use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key to an action. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    let text_mode = app.title_entry_active() || app.scene == Scene::Manual;
    if text_mode {
        let action = match code {
            KeyCode::Esc => Some(InputAction::TextCancel),
            KeyCode::Enter => Some(InputAction::TextSubmit),
            KeyCode::Backspace => Some(InputAction::TextBackspace),
            KeyCode::Tab | KeyCode::Down => Some(InputAction::ManualNextField),
            KeyCode::BackTab | KeyCode::Up => Some(InputAction::ManualPrevField),
            KeyCode::Char(c) => Some(InputAction::TextChar(c)),
            _ => None,
        };
        if let Some(action) = action {
            let _ = app.handle_input(action);
        }
        return false;
    }

    if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    let action = match app.scene {
        Scene::Config => match code {
            KeyCode::Up => Some(InputAction::MenuPrev),
            KeyCode::Down => Some(InputAction::MenuNext),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Some(InputAction::MenuInc),
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => Some(InputAction::MenuDec),
            KeyCode::Enter => Some(InputAction::MenuActivate),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Roll),
            KeyCode::Char('t') | KeyCode::Char('T') => Some(InputAction::TitleOpen),
            KeyCode::Char('e') | KeyCode::Char('E') => Some(InputAction::ManualOpen),
            _ => None,
        },
        Scene::Result => match code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Roll),
            KeyCode::Esc | KeyCode::Enter => Some(InputAction::Back),
            _ => None,
        },
        Scene::Expired => match code {
            KeyCode::Char('n') | KeyCode::Char('N') => Some(InputAction::NewSession),
            _ => None,
        },
        Scene::Manual => None,
    };
    if let Some(action) = action {
        let _ = app.handle_input(action);
    }
    false
}
