//! Input box and bottom bar.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::App;
use super::super::constants::ACCENT;

pub(crate) fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.is_thinking() {
        Color::DarkGray
    } else {
        ACCENT
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Ask me a math question… ");
    let inner = block.inner(area);

    // Show the tail when the input is wider than the box.
    let visible_width = inner.width.saturating_sub(1) as usize;
    let char_count = app.input.chars().count();
    let visible: String = if char_count > visible_width {
        app.input
            .chars()
            .skip(char_count - visible_width)
            .collect()
    } else {
        app.input.clone()
    };

    f.render_widget(Paragraph::new(visible.as_str()).block(block), area);

    if !app.is_thinking() {
        let cursor_x = inner.x + visible.chars().count() as u16;
        f.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}

pub(crate) fn draw_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut labels: Vec<&str> = vec!["Enter send"];
    if !app.transcript.is_empty() {
        labels.push("Ctrl+N clear chat");
    }
    if app.diagnostic.is_some() {
        labels.push("Ctrl+E details");
    }
    labels.push("Ctrl+C quit");

    let line = Line::from(Span::styled(
        labels.join("  ·  "),
        Style::default().fg(Color::DarkGray),
    ))
    .right_aligned();
    f.render_widget(Paragraph::new(line), area);
}
