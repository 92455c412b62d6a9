use crate::evaluator::RollOutcome;
use crate::render::{breakdown, report_title, Marker, Verdict};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::BestialFailure => Color::Rgb(128, 0, 0),
        Verdict::BestialSuccess => Color::Rgb(255, 69, 0),
        Verdict::Success => Color::Rgb(34, 139, 34),
        Verdict::Failure => Color::Rgb(105, 105, 105),
    }
}

fn marker_style(marker: Marker) -> Style {
    let base = match marker {
        Marker::HungerOne | Marker::HungerCritical => Style::default().fg(Color::Red),
        Marker::HungerSuccess | Marker::HungerBlank => Style::default().fg(Color::LightRed),
        Marker::One => Style::default().fg(Color::DarkGray),
        Marker::Critical => Style::default().fg(Color::Yellow),
        Marker::Success => Style::default().fg(Color::Green),
        Marker::Blank => Style::default(),
    };
    if marker.is_emphasized() {
        base.add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

fn dice_line(outcome: &RollOutcome, app: &AppState) -> Line<'static> {
    let mut spans = Vec::new();
    for die in outcome.dice() {
        let marker = Marker::for_die(die);
        spans.push(Span::styled(
            format!("{}{} ", marker.symbol(app.glyphs), die.face),
            marker_style(marker),
        ));
    }
    Line::from(spans)
}

pub(super) fn draw_result(f: &mut Frame, app: &AppState) {
    let area = centered_rect(80, 70, f.area());
    let Some(outcome) = app.last_outcome() else {
        return;
    };
    let verdict = Verdict::of(outcome);
    let color = verdict_color(verdict);
    let block = Block::default()
        .title(report_title(outcome))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Dice: ", bold),
            Span::raw(format!("{}   ", outcome.dice_count())),
            Span::styled("Difficulty: ", bold),
            Span::raw(format!("{}   ", outcome.difficulty())),
            Span::styled("Hunger: ", bold),
            Span::raw(outcome.hunger().to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Results", bold)),
        dice_line(outcome, app),
        Line::from(""),
        Line::from(vec![
            Span::styled("Successes: ", bold),
            Span::raw(format!("{} of {} needed", outcome.successes(), outcome.difficulty())),
        ]),
    ];
    if let Some(b) = breakdown(outcome) {
        lines.push(Line::from(Span::styled(b, Style::default().add_modifier(Modifier::ITALIC))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        verdict.headline(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(verdict.description()));
    if Verdict::masked_bestial_success(outcome) {
        lines.push(Line::from(Span::styled(
            "A hunger die also rolled a 10 (bestial success).",
            Style::default().fg(verdict_color(Verdict::BestialSuccess)),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        app.glyphs.legend(),
        Style::default().add_modifier(Modifier::DIM),
    )));
    lines.push(Line::from(Span::styled(
        "[R] Roll again  [Enter/Esc] Back  [?] Help  [Q] Quit",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, inner(area));
}
