use crate::tui::app::{AppState, ManualForm};
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::time::Instant;

use super::layout::{centered_rect, inner, popup_rect};

const BLOOD: Color = Color::Rgb(139, 0, 0);

pub(super) fn draw_config(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 70, f.area());
    let block = Block::default()
        .title("vtm-dice")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BLOOD));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6), Constraint::Length(3)])
        .split(inner_all);

    let heading = vec![
        Line::from(Span::styled(
            "Dice Configurator - Vampire V5",
            Style::default().fg(BLOOD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Adjust the values, then roll the dice!",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    f.render_widget(Paragraph::new(heading).alignment(Alignment::Center), rows[0]);

    let mut lines: Vec<Line> = Vec::new();
    for (i, it) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let prefix = if i == app.menu_index { "> " } else { "  " };
        lines.push(Line::from(Span::styled(format!("{prefix}{it}"), style)));
    }
    if let Some(text) = app.title_entry_text() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("New title: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(text.to_string()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]));
        lines.push(Line::from(Span::styled(
            "[Enter] Save  [Esc] Cancel",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows[1]);

    let remaining = app.session.remaining(Instant::now()).as_secs();
    let mut status = vec![Line::from(Span::styled(
        format!(
            "[Enter/R] Roll  [T] Title  [E] Manual entry  [+/-] Adjust  [?] Help  [Q] Quit   ({}:{:02} left)",
            remaining / 60,
            remaining % 60
        ),
        Style::default().add_modifier(Modifier::DIM),
    ))];
    if let Some(err) = app.error() {
        status.push(Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))));
    }
    f.render_widget(
        Paragraph::new(status).wrap(Wrap { trim: true }).alignment(Alignment::Center),
        rows[2],
    );
}

pub(super) fn draw_manual(f: &mut Frame, app: &AppState) {
    let Some(form) = app.manual_form() else {
        return;
    };
    let area = popup_rect(60, 10, f.area());
    let mut lines: Vec<Line> = Vec::new();
    for (i, label) in ManualForm::LABELS.iter().enumerate() {
        let focused = i == form.focus;
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if focused { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{label:>10}: "), style),
            Span::raw(format!("{}{cursor}", form.field(i))),
        ]));
    }
    lines.push(Line::from(""));
    match app.error() {
        Some(err) => {
            lines.push(Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))))
        }
        None => lines.push(Line::from(Span::styled(
            "[Tab] Next field  [Enter] Roll  [Esc] Cancel",
            Style::default().add_modifier(Modifier::DIM),
        ))),
    }
    let para = Paragraph::new(lines)
        .block(Block::default().title("Manual entry").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}
