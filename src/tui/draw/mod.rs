//! TUI rendering: layout and widgets for the chat interface.

mod header;
mod history;
mod input;
mod status;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::app::App;
use super::constants::{DIAGNOSTIC_LINES, INPUT_LINES};

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let diagnostic_height = if app.show_diagnostic && app.diagnostic.is_some() {
        DIAGNOSTIC_LINES
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                 // header
            Constraint::Min(3),                    // chat history
            Constraint::Length(1),                 // status line
            Constraint::Length(diagnostic_height), // error details (Ctrl+E)
            Constraint::Length(INPUT_LINES),       // input box
            Constraint::Length(1),                 // bottom bar
        ])
        .split(area);

    header::draw_header(f, app, chunks[0]);
    history::draw_history(f, app, chunks[1]);
    status::draw_status_line(f, app, chunks[2]);
    if diagnostic_height > 0 {
        status::draw_diagnostic_panel(f, app, chunks[3]);
    }
    input::draw_input(f, app, chunks[4]);
    input::draw_bottom_bar(f, app, chunks[5]);
}
