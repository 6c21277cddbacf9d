use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Runner};

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let bindings: Vec<(&str, &str)> = match &state.runner {
        Runner::Quiz(session) => {
            let mut b = vec![("a-z", "answer"), ("↑/↓", "options")];
            if session.is_current_answered() {
                b.push(("→", "next"));
            }
            if session.current_index() > 0 {
                b.push(("←", "previous"));
            }
            b.push(("Ctrl+R", "restart"));
            b.push(("?", "help"));
            b.push(("Ctrl+Q", "quit"));
            b
        }
        Runner::Check(check) => {
            if check.is_answered() {
                vec![("Enter", "close")]
            } else {
                vec![
                    ("a-z", "answer"),
                    ("↑/↓", "options"),
                    ("Enter", "select"),
                    ("Ctrl+Q", "quit"),
                ]
            }
        }
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
