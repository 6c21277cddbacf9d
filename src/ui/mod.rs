pub mod dialog;
pub mod intro;
pub mod keybar;
pub mod layout;
pub mod question;
pub mod result;
pub mod statusbar;
pub mod titlebar;

use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();

    match state.screen {
        Screen::Intro => {
            intro::draw_intro(f, area, state);
        }
        Screen::Working => {
            draw_working(f, area, state);
        }
        Screen::Review => {
            result::draw_review(f, area, state);
        }
    }

    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}

fn draw_working(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    question::draw_question(f, layout.main, state);
    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);
}
