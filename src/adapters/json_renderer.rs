//! JSON renderer.
//!
//! Writes each frame as one line of JSON, suitable for piping into other
//! tools or driving a front end over stdout.

use std::io::Write;

use serde::Serialize;

use crate::{Result, error::Error, ports::Renderer, tictactoe::GameView};

/// Renderer emitting one JSON document per line.
pub struct JsonRenderer<W: Write> {
    out: W,
}

#[derive(Serialize)]
struct Notice<'a> {
    notice: &'a str,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the renderer and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out).map_err(|source| Error::Io {
            operation: "write JSON frame".to_string(),
            source,
        })?;
        self.out.flush()?;
        Ok(())
    }
}

impl JsonRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, view: &GameView) -> Result<()> {
        self.write_line(view)
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        self.write_line(&Notice { notice: message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::GameState;

    #[test]
    fn test_frame_is_one_json_line() {
        let mut game = GameState::new();
        game.place_mark(0);

        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&game.view()).unwrap();
        let written = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(written.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(written.trim()).unwrap();
        assert_eq!(value["message"], "Player O's turn");
        assert_eq!(value["history_length"], 2);
        assert_eq!(value["current_index"], 1);
        assert_eq!(value["is_terminal"], false);
        assert_eq!(value["board"]["cells"][0], "X");
        assert_eq!(value["board"]["cells"][1], "Empty");
    }

    #[test]
    fn test_frame_round_trips_into_view() {
        let view = GameState::new().view();
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&view).unwrap();
        let written = renderer.into_inner();
        let parsed: GameView = serde_json::from_slice(&written).unwrap();
        assert_eq!(parsed, view);
    }

    #[test]
    fn test_notice_line() {
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.notice("no such history entry").unwrap();
        let written = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(written, "{\"notice\":\"no such history entry\"}\n");
    }
}
