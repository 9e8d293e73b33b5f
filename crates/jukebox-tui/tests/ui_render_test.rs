//! Rendering tests against ratatui's in-memory backend.
//!
//! The layout is output pane, bordered input line, then a one-row status
//! bar. On a 60x10 screen the input text sits on row 7 and the status bar
//! on row 9.

use jukebox_app::{App, AppEvent, Dispatch, KeyInput, Reply};
use jukebox_tui::ui;
use ratatui::{Terminal, backend::TestBackend, layout::Position};

const ADDR: &str = "http://localhost:3678";

fn draw(app: &App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal
}

fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer.content().chunks(width).map(|row| row.iter().map(|cell| cell.symbol()).collect()).collect()
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle(AppEvent::Key(KeyInput::Char(c)));
    }
}

#[test]
fn fresh_session_shows_prompt_and_hint() {
    let app = App::new(ADDR.to_string());
    let rows = rows(&draw(&app));

    assert!(rows[1].contains("Type 'help' for commands"));
    assert!(rows[7].contains("jukebox> "));
    assert!(rows[9].contains("Ready"));
    assert!(rows[9].contains(ADDR));
}

#[test]
fn cursor_follows_edit_position() {
    let mut app = App::new(ADDR.to_string());
    type_text(&mut app, "vol");

    let mut terminal = draw(&app);
    assert!(rows(&terminal)[7].contains("jukebox> vol"));
    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(13, 7));

    app.handle(AppEvent::Key(KeyInput::Home));
    terminal.draw(|frame| ui::render(frame, &app)).unwrap();
    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(10, 7));
}

#[test]
fn cursor_accounts_for_wide_glyphs() {
    let mut app = App::new(ADDR.to_string());
    app.handle(AppEvent::Key(KeyInput::Paste("play 曲曲".into())));

    let mut terminal = draw(&app);
    // Each CJK glyph takes two cells: 1 border + 9 prompt + 5 + 4.
    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(19, 7));

    app.handle(AppEvent::Key(KeyInput::Left));
    terminal.draw(|frame| ui::render(frame, &app)).unwrap();
    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(17, 7));
}

#[test]
fn busy_session_shows_working() {
    let mut app = App::new(ADDR.to_string());
    type_text(&mut app, "next");
    app.handle(AppEvent::Key(KeyInput::Enter));

    let rows = rows(&draw(&app));
    assert!(rows[9].contains("Working..."));
    assert!(!rows[7].contains("next"));
}

#[test]
fn completed_command_fills_output_pane() {
    let mut app = App::new(ADDR.to_string());
    type_text(&mut app, "vol 40");
    app.handle(AppEvent::Key(KeyInput::Enter));
    app.handle(AppEvent::Dispatched(Dispatch { outcome: Ok(Reply::Volume(40)), quit: false }));

    let rows = rows(&draw(&app));
    assert!(rows[1].contains("Volume: 40%"));
    assert!(rows[9].contains("Ready"));
}
