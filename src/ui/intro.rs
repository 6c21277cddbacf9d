use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::DeckMode;
use crate::state::AppState;

pub fn draw_intro(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            state.deck.title.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for text in &state.deck.intro {
        lines.push(Line::from(text.as_str()));
    }
    if !state.deck.intro.is_empty() {
        lines.push(Line::from(""));
    }

    match state.deck.frontmatter.mode {
        DeckMode::Quiz => {
            lines.push(Line::from(format!(
                "{} questions",
                state.deck.questions.len()
            )));
            if let Some(mark) = state.deck.frontmatter.pass_mark {
                lines.push(Line::from(format!("Pass mark: {}%", mark)));
            }
        }
        DeckMode::Check => {
            lines.push(Line::from("Quick check — one question, no score."));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Begin    [q] Quit",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
