mod config;
mod layout;
mod result;

use crate::render::RULES_HELP;
use crate::tui::app::{AppState, Scene};
use ratatui::prelude::*;
use ratatui::widgets::*;

use layout::centered_rect;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Config => config::draw_config(f, app),
        Scene::Manual => {
            config::draw_config(f, app);
            config::draw_manual(f, app);
        }
        Scene::Result => result::draw_result(f, app),
        Scene::Expired => draw_expired(f),
    }
    if app.help_open() {
        draw_help(f);
    }
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(80, 80, f.area());
    let block = Block::default().title("Help [Esc] close").borders(Borders::ALL);
    let para = Paragraph::new(RULES_HELP).block(block).wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}

fn draw_expired(f: &mut Frame) {
    let area = centered_rect(60, 30, f.area());
    let lines = vec![
        Line::from(Span::styled(
            "Session expired",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("[N] New session  [Q] Quit"),
    ];
    let para = Paragraph::new(lines)
        .block(Block::default().title("vtm-dice").borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}
