use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::progress::format_percent;
use crate::session::ReviewEntry;
use crate::state::{AppState, Runner};

const PROMPT_PREVIEW_LENGTH: usize = 60;

pub fn draw_review(f: &mut Frame, area: Rect, state: &AppState) {
    let Runner::Quiz(session) = &state.runner else {
        return;
    };

    let score = session.score().unwrap_or(0);
    let total = session.total();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_summary(f, chunks[0], state, score, total);
    draw_breakdown(f, chunks[1], &session.review(), state.review_scroll);

    let controls = Paragraph::new(Line::from(Span::styled(
        "↑/↓ scroll   [r] Restart   [q] Quit",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(controls, chunks[2]);
}

fn draw_summary(f: &mut Frame, area: Rect, state: &AppState, score: usize, total: usize) {
    let percent = if total > 0 { score * 100 / total } else { 0 };
    let score_color = match percent {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            state.deck.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} / {}  ({})", score, total, format_percent(score, total)),
            Style::default()
                .fg(score_color)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if let (Some(mark), Some(passed)) = (
        state.deck.frontmatter.pass_mark,
        state.deck.passes(score, total),
    ) {
        let (text, color) = if passed {
            (format!("Pass (needed {}%)", mark), Color::Green)
        } else {
            (format!("Below pass mark of {}%", mark), Color::Red)
        };
        lines.push(Line::from(Span::styled(text, Style::default().fg(color))));
    }

    if let (Some(started), Some(finished)) = (&state.started_at, &state.finished_at) {
        lines.push(Line::from(Span::styled(
            format!("Completed in {}", crate::history::compute_duration(started, finished)),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(widget, area);
}

fn draw_breakdown(f: &mut Frame, area: Rect, entries: &[ReviewEntry], scroll: usize) {
    let mut lines: Vec<Line> = Vec::new();

    for entry in entries {
        let (symbol, color) = if entry.correct {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:>2}. ", entry.number),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                truncate_prompt(&entry.prompt),
                Style::default().fg(Color::Gray),
            ),
        ]));

        if !entry.correct {
            let chosen = entry.chosen.as_deref().unwrap_or("no answer");
            lines.push(Line::from(Span::styled(
                format!("       your answer: {}", chosen),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(Span::styled(
                format!("       correct: {}", entry.correct_option),
                Style::default().fg(Color::Green),
            )));
            if let Some(explanation) = &entry.explanation {
                for text in explanation.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("       {}", text),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
            lines.push(Line::from(""));
        }
    }

    let max_scroll = lines.len().saturating_sub(area.height as usize);
    let scroll = scroll.min(max_scroll);

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    f.render_widget(widget, area);
}

fn truncate_prompt(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let char_count = first_line.chars().count();
    if char_count > PROMPT_PREVIEW_LENGTH {
        let truncated: String = first_line.chars().take(PROMPT_PREVIEW_LENGTH).collect();
        format!("{}…", truncated)
    } else {
        first_line.to_string()
    }
}
