//! Status bar
//!
//! Displays the player address and whether a command is in flight.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let activity = if app.is_busy() {
        Span::styled("Working...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("Ready", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        activity,
        Span::raw(format!(" | {} | Ctrl-C to quit", app.server_addr())),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
