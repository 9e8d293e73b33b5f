//! Output pane
//!
//! Shows the result of the most recent command.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    App,
    present::{self, MUTED},
};

/// Render the output pane.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" jukebox ");

    let lines = match app.output() {
        Some(outcome) => present::lines(outcome),
        None => vec![Line::from(Span::styled(
            "Type 'help' for commands",
            Style::default().fg(MUTED),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
