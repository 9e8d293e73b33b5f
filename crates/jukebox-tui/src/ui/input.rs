//! Input line
//!
//! Displays the `jukebox> ` prompt and the edit buffer with cursor.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, present::PROMPT};

const PROMPT_TEXT: &str = "jukebox> ";
const PROMPT_WIDTH: u16 = 10; // left border + "jukebox> "
const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const RIGHT_PADDING: u16 = 1; // inside right border

/// Render the input line.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    let editor = app.editor();
    let line = Line::from(vec![
        Span::styled(PROMPT_TEXT, Style::default().fg(PROMPT).add_modifier(Modifier::BOLD)),
        Span::styled(editor.text().to_string(), Style::default().fg(Color::White)),
    ]);
    let paragraph = Paragraph::new(line).block(block);

    frame.render_widget(paragraph, area);

    // No cursor while a command is in flight.
    if app.is_busy() {
        return;
    }

    // Cursor counts chars; the column is the display width of the text before it.
    let before_cursor: String = editor.text().chars().take(editor.cursor()).collect();
    let before_width = Span::raw(before_cursor).width();

    let available_width = area.width.saturating_sub(PROMPT_WIDTH + RIGHT_PADDING);
    let cursor_offset = u16::try_from(before_width).unwrap_or(u16::MAX).min(available_width);

    let cursor_x = area.x.saturating_add(PROMPT_WIDTH).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);
    let cursor_x = cursor_x.min(max_x);

    frame.set_cursor_position((cursor_x, cursor_y));
}
