//! Status line (thinking spinner, timing, errors) and the diagnostic panel.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::{App, QueryStatus};
use super::super::constants::{ACCENT, SPINNER_FRAMES, SPINNER_FRAME_MS};
use super::super::text::wrap_message;

pub(crate) fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let line = match app.status {
        QueryStatus::Idle => Line::default(),
        QueryStatus::Thinking { started } => {
            let frame_idx =
                (started.elapsed().as_millis() / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
            Line::from(vec![
                Span::styled(SPINNER_FRAMES[frame_idx], Style::default().fg(ACCENT)),
                Span::raw(" Thinking…"),
            ])
        }
        QueryStatus::Done { elapsed } => Line::from(Span::styled(
            format!("Done! The model thought for {:.3}s.", elapsed.as_secs_f64()),
            Style::default().fg(Color::Green),
        )),
        QueryStatus::Failed { elapsed } => Line::from(Span::styled(
            format!(
                "An error occurred after {:.3}s — press Ctrl+E to see details.",
                elapsed.as_secs_f64()
            ),
            Style::default().fg(Color::Red),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

pub(crate) fn draw_diagnostic_panel(f: &mut Frame, app: &App, area: Rect) {
    let Some(ref diagnostic) = app.diagnostic else {
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Error details ");
    let inner_width = (area.width as usize).saturating_sub(2);
    let lines: Vec<Line> = wrap_message(diagnostic, inner_width.max(1))
        .into_iter()
        .map(Line::from)
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}
