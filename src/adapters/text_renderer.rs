//! Terminal text renderer.
//!
//! Draws the status line, the 3x3 grid, the history selector and the reset
//! hint as plain text to any writer.

use std::io::Write;

use crate::{
    Result,
    app::RenderConfig,
    error::Error,
    ports::Renderer,
    tictactoe::{Cell, GameView},
};

/// Renderer writing human-readable frames.
pub struct TextRenderer<W: Write> {
    out: W,
    config: RenderConfig,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, config: RenderConfig) -> Self {
        Self { out, config }
    }

    /// Consume the renderer and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextRenderer<std::io::Stdout> {
    pub fn stdout(config: RenderConfig) -> Self {
        Self::new(std::io::stdout(), config)
    }
}

/// Format one frame.
///
/// ```text
/// Player O's turn
///
///  X | 1 | 2
/// ---+---+---
///  3 | 4 | 5
/// ---+---+---
///  6 | 7 | 8
///
/// History: Game Start  [Move 1]
/// Type 0-8 to play, 'goto <n>' to rewind, 'reset' to start over.
/// ```
pub fn format_view(view: &GameView, config: &RenderConfig) -> String {
    let mut lines = vec![view.message.clone(), String::new()];

    for row in 0..3 {
        if row > 0 {
            lines.push("---+---+---".to_string());
        }
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                format!(" {} ", cell_glyph(view.board.get(pos), pos, config))
            })
            .collect();
        lines.push(cells.join("|").trim_end().to_string());
    }

    if config.show_history {
        lines.push(String::new());
        let entries: Vec<String> = view
            .history_labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                if i == view.current_index {
                    format!("[{label}]")
                } else {
                    label.clone()
                }
            })
            .collect();
        lines.push(format!("History: {}", entries.join("  ")));
    }

    if config.show_controls {
        lines.push("Type 0-8 to play, 'goto <n>' to rewind, 'reset' to start over.".to_string());
    }

    lines.join("\n")
}

fn cell_glyph(cell: Cell, pos: usize, config: &RenderConfig) -> char {
    match cell {
        Cell::Empty if config.show_indices => char::from_digit(pos as u32, 10).unwrap_or('.'),
        Cell::Empty => config.empty_glyph,
        other => other.to_char(),
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &GameView) -> Result<()> {
        let frame = format_view(view, &self.config);
        writeln!(self.out, "{frame}\n").map_err(|source| Error::Io {
            operation: "write frame".to_string(),
            source,
        })?;
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "! {message}").map_err(|source| Error::Io {
            operation: "write notice".to_string(),
            source,
        })?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::GameState;

    #[test]
    fn test_fresh_board_shows_indices() {
        let view = GameState::new().view();
        let text = format_view(&view, &RenderConfig::default());
        assert!(text.starts_with("Player X's turn\n"));
        assert!(text.contains(" 0 | 1 | 2"));
        assert!(text.contains(" 6 | 7 | 8"));
        assert!(text.contains("History: [Game Start]"));
    }

    #[test]
    fn test_marks_and_selected_entry() {
        let mut game = GameState::new();
        game.place_mark(4);
        game.place_mark(0);
        game.select_history(1);
        let text = format_view(&game.view(), &RenderConfig::default());
        assert!(text.contains(" 0 | 1 | 2"));
        assert!(text.contains(" 3 | X | 5"));
        assert!(text.contains("History: Game Start  [Move 1]  Move 2"));
        assert!(text.starts_with("Player O's turn"));
    }

    #[test]
    fn test_plain_glyphs_without_history() {
        let config = RenderConfig::default()
            .with_indices(false)
            .with_history(false)
            .with_controls(false);
        let mut game = GameState::new();
        game.place_mark(8);
        let text = format_view(&game.view(), &config);
        assert_eq!(
            text,
            "Player O's turn\n\n . | . | .\n---+---+---\n . | . | .\n---+---+---\n . | . | X"
        );
    }

    /// Writer that only exposes bytes once flushed.
    #[derive(Default)]
    struct FlushedOnly {
        pending: Vec<u8>,
        flushed: Vec<u8>,
    }

    impl Write for FlushedOnly {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.pending.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushed.append(&mut self.pending);
            Ok(())
        }
    }

    #[test]
    fn test_notice_is_flushed_before_next_frame() {
        let mut renderer = TextRenderer::new(FlushedOnly::default(), RenderConfig::default());
        renderer.notice("square is already taken").unwrap();

        let out = renderer.into_inner();
        assert!(out.pending.is_empty());
        assert_eq!(out.flushed, b"! square is already taken\n");
    }

    #[test]
    fn test_render_writes_to_writer() {
        let mut renderer = TextRenderer::new(Vec::new(), RenderConfig::default());
        renderer.render(&GameState::new().view()).unwrap();
        renderer.notice("square is already taken").unwrap();
        let written = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(written.contains("Player X's turn"));
        assert!(written.ends_with("! square is already taken\n"));
    }
}
