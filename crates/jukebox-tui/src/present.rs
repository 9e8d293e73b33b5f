//! Presentation of dispatch outcomes.
//!
//! Turns [`Outcome`] values into styled ratatui [`Line`]s with a glyph per
//! reply kind. [`plain`] flattens the same lines for one-shot mode, so the
//! interactive and one-shot output never drift apart.

use jukebox_app::{CommandError, HELP_TEXT, NOTHING_PLAYING, NowPlaying, Outcome, PlayState, Reply};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Track titles and the help header.
pub const ACCENT: Color = Color::Indexed(212);
/// Input prompt.
pub const PROMPT: Color = Color::Indexed(99);
/// Secondary text.
pub const MUTED: Color = Color::Indexed(243);
/// Success confirmations.
pub const SUCCESS: Color = Color::Indexed(78);
/// Paused state.
pub const WARNING: Color = Color::Indexed(214);
/// Failures.
pub const FAILURE: Color = Color::Indexed(196);

/// Styled lines for one outcome. Blank lines produce no output.
pub fn lines(outcome: &Outcome) -> Vec<Line<'static>> {
    match outcome {
        Ok(reply) => reply_lines(reply),
        Err(err) => vec![error_line(err)],
    }
}

/// Outcome text without styling, one entry per line.
pub fn plain(outcome: &Outcome) -> String {
    lines(outcome)
        .iter()
        .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn reply_lines(reply: &Reply) -> Vec<Line<'static>> {
    let confirm = |glyph: &str| {
        vec![Line::from(Span::styled(format!("{glyph} {reply}"), Style::default().fg(SUCCESS)))]
    };

    match reply {
        Reply::Nothing => Vec::new(),
        Reply::Status(snapshot) => NowPlaying::from_snapshot(snapshot)
            .map_or_else(|| vec![muted(NOTHING_PLAYING)], |np| now_playing_lines(&np)),
        Reply::Playing => confirm("▶"),
        Reply::Toggled => confirm("⏯"),
        Reply::NextTrack => confirm("⏭"),
        Reply::PreviousTrack => confirm("⏮"),
        Reply::Volume(_) => confirm("🔊"),
        Reply::Seeked { .. } => confirm("⏩"),
        Reply::Shuffle(_) => confirm("🔀"),
        Reply::Queued => confirm("📋"),
        Reply::Help => help_lines(),
        Reply::Bye => vec![muted("Bye!")],
    }
}

fn now_playing_lines(np: &NowPlaying) -> Vec<Line<'static>> {
    let marker_color = match np.state {
        PlayState::Playing => SUCCESS,
        PlayState::Paused => WARNING,
    };

    vec![
        Line::from(Span::styled(
            np.headline(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("  {}", np.album), Style::default().fg(MUTED))),
        Line::from(vec![
            Span::styled(format!("  {}  ", np.progress()), Style::default().fg(MUTED)),
            Span::styled(np.state.marker(), Style::default().fg(marker_color)),
        ]),
    ]
}

fn help_lines() -> Vec<Line<'static>> {
    let mut rows = HELP_TEXT.lines();
    let mut out = Vec::new();
    if let Some(header) = rows.next() {
        out.push(Line::from(Span::styled(
            header,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
    }
    out.extend(rows.map(|row| Line::from(Span::raw(row))));
    out
}

fn error_line(err: &CommandError) -> Line<'static> {
    Line::from(Span::styled(err.to_string(), Style::default().fg(FAILURE)))
}

fn muted(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(MUTED)))
}

#[cfg(test)]
mod tests {
    use jukebox_client::{ClientError, Snapshot, Track};

    use super::*;

    fn playing_snapshot(paused: bool) -> Snapshot {
        Snapshot {
            paused,
            track: Some(Track {
                uri: "spotify:track:1".into(),
                name: "Song".into(),
                artist_names: vec!["A".into(), "B".into()],
                album_name: "Record".into(),
                position: 61_000,
                duration: 180_000,
                ..Track::default()
            }),
            ..Snapshot::default()
        }
    }

    #[test]
    fn blank_line_renders_nothing() {
        assert!(lines(&Ok(Reply::Nothing)).is_empty());
        assert_eq!(plain(&Ok(Reply::Nothing)), "");
    }

    #[test]
    fn confirmations_carry_glyphs() {
        assert_eq!(plain(&Ok(Reply::Volume(50))), "🔊 Volume: 50%");
        assert_eq!(plain(&Ok(Reply::Seeked { position_ms: 125_000 })), "⏩ Seeked to 2:05");
        assert_eq!(plain(&Ok(Reply::Shuffle(true))), "🔀 Shuffle on");
        assert_eq!(plain(&Ok(Reply::Queued)), "📋 Added to queue");
    }

    #[test]
    fn paused_marker_uses_warning_color() {
        let out = lines(&Ok(Reply::Status(Box::new(playing_snapshot(true)))));
        assert_eq!(out.len(), 3);
        let marker = &out[2].spans[1];
        assert_eq!(marker.content, "⏸ paused");
        assert_eq!(marker.style.fg, Some(WARNING));
    }

    #[test]
    fn errors_are_red() {
        let err = CommandError::from(ClientError::Remote { status: 500, body: "boom".into() });
        let out = lines(&Err(err));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].spans[0].style.fg, Some(FAILURE));
        assert_eq!(
            plain(&Err(CommandError::Unknown { name: "xyz".into() })),
            "Unknown command: xyz (type 'help' for commands)"
        );
    }

    #[test]
    fn help_header_is_styled() {
        let out = lines(&Ok(Reply::Help));
        assert_eq!(out[0].spans[0].content, "jukebox commands");
        assert_eq!(out[0].spans[0].style.fg, Some(ACCENT));
        assert_eq!(plain(&Ok(Reply::Help)), HELP_TEXT);
    }
}
