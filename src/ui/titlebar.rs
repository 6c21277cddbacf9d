use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Runner};

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = &state.deck.title;

    let answered_text = match &state.runner {
        Runner::Quiz(session) => {
            let text = format!(" {}/{} answered ", session.answered_count(), session.total());
            Span::styled(text, Style::default().fg(Color::Rgb(200, 200, 120)))
        }
        Runner::Check(_) => Span::raw(""),
    };

    let title_text = format!("[ {} ]", title);
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Center the title; the answered counter sits at the right edge.
    let available = area.width as usize;
    let answered_len = answered_text.content.len();
    let title_len = title_text.len();
    let center_pad = if available > title_len {
        (available - title_len) / 2
    } else {
        0
    };
    let right_pad = available.saturating_sub(center_pad + title_len + answered_len);

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        answered_text,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
