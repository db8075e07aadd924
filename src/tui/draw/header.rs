//! Header: title on the left, model in use on the right.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app::{NAME, TITLE, VERSION};

use super::super::app::App;
use super::super::constants::ACCENT;

fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        format!(
            "{}…",
            s.chars()
                .take(max_width.saturating_sub(1))
                .collect::<String>()
        )
    }
}

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title_line = Line::from(vec![
        Span::styled("◆ ", Style::default().fg(ACCENT)),
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {} v{}", NAME, VERSION),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    // The probe error text replaces the model name; the session stays usable.
    let (model_text, model_color) = match app.model_display {
        Some(ref m) if app.probe_failed => (m.clone(), Color::Red),
        Some(ref m) => (format!("model: {}", m), Color::DarkGray),
        None => ("model: …".to_string(), Color::DarkGray),
    };
    let max_model_width = (area.width as usize).saturating_sub(2);
    let model_line = Line::from(Span::styled(
        truncate_with_ellipsis(&model_text, max_model_width),
        Style::default().fg(model_color),
    ))
    .right_aligned();

    f.render_widget(Paragraph::new(vec![title_line, model_line]), area);
}

#[cfg(test)]
mod tests {
    use super::truncate_with_ellipsis;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_with_ellipsis("model: mini", 20), "model: mini");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let out = truncate_with_ellipsis("Error: connection refused (os error 111)", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('…'));
    }
}
