use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::state::{AppState, Runner};

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let q = state.current_question();

    let mut lines: Vec<Line> = vec![Line::from("")];

    // Prompt: first line carries the question number, continuation lines
    // are plain text.
    for (i, text) in q.prompt.lines().enumerate() {
        if i == 0 {
            lines.push(Line::from(Span::styled(
                format!("  {}. {}", q.number, text),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(format!("  {}", text)));
        }
    }
    lines.push(Line::from(""));

    let selected = match &state.runner {
        Runner::Quiz(session) => session.current_selection(),
        Runner::Check(check) => check.answered(),
    };

    for (i, option) in q.options.iter().enumerate() {
        let is_cursor = i == state.choice_cursor;
        let is_selected = selected == Some(i);

        let cursor = if is_cursor { " ▸ " } else { "   " };
        let marker = if is_selected { "(●)" } else { "( )" };
        let label = crate::model::Question::option_label(i);

        let style = if is_selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if is_cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        lines.push(Line::from(Span::styled(
            format!("{}{} {}. {}", cursor, marker, label, option),
            style,
        )));
    }

    // A check reveals its explanation as soon as the answer lands.
    if let Runner::Check(check) = &state.runner {
        if let Some(correct) = check.is_correct() {
            lines.push(Line::from(""));
            if correct {
                lines.push(Line::from(Span::styled(
                    "  ✓ Correct",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    format!(
                        "  ✗ Incorrect — the answer is {}. {}",
                        crate::model::Question::option_label(check.question().correct),
                        check.question().options[check.question().correct]
                    ),
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            if let Some(explanation) = check.revealed_explanation() {
                lines.push(Line::from(""));
                for text in explanation.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", text),
                        Style::default().fg(Color::Gray),
                    )));
                }
            }
        }
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
