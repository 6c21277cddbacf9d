use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

/// Progress line: position label on the left, proportion bar filling the
/// remaining width.
pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState) {
    let progress = state.progress();
    let label = format!(" {} ", progress.label());

    let bar_width = (area.width as usize).saturating_sub(label.len() + 1);
    let bar = progress.bar(bar_width);

    let line = Line::from(vec![
        Span::styled(label, Style::default().fg(Color::White)),
        Span::styled(bar, Style::default().fg(Color::Cyan)),
    ]);

    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
