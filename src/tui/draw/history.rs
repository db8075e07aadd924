//! Chat history: labeled message blocks with wrapping and a scrollbar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::transcript::Role;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY};
use super::super::text::wrap_message;

/// Display label for a turn author.
fn role_label(role: Role) -> (&'static str, Style) {
    match role {
        Role::User => (
            "You",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Role::Assistant => (
            "L4TR",
            Style::default()
                .fg(ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

pub(crate) fn draw_history(f: &mut Frame, app: &mut App, area: Rect) {
    if app.transcript.is_empty() {
        app.last_max_scroll = 0;
        let hint = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                "A RAG-ified mini LLM for mathematics",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
            Line::from(Span::styled(
                "RAG data from ProofWiki",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
            Line::default(),
            Line::from(Span::styled(
                "Ask me a math question to get started.",
                Style::default().fg(Color::Gray),
            ))
            .centered(),
        ]);
        f.render_widget(hint, area);
        return;
    }

    // Leave one column for the scrollbar.
    let content_width = (area.width as usize).saturating_sub(2);
    let mut lines: Vec<Line> = Vec::new();
    for turn in app.transcript.all() {
        let (label, style) = role_label(turn.role);
        lines.push(Line::from(Span::styled(label, style)));
        for chunk in wrap_message(&turn.content, content_width.max(1)) {
            lines.push(Line::from(chunk));
        }
        lines.push(Line::default());
    }

    let viewport = area.height as usize;
    let max_scroll = lines.len().saturating_sub(viewport);
    app.last_max_scroll = max_scroll;
    let offset = app.scroll_line();

    f.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), area);

    if max_scroll > 0 {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}
