//! In-memory renderer for testing.
//!
//! Keeps every frame and notice it receives so tests can assert on exactly
//! what a session showed, without any I/O.

use std::sync::{Arc, Mutex};

use crate::{Result, ports::Renderer, tictactoe::GameView};

#[derive(Debug, Default)]
struct Recorded {
    frames: Vec<GameView>,
    notices: Vec<String>,
}

/// Renderer that records frames.
///
/// Clones share the same storage, so a test can keep one handle while the
/// session owns another.
///
/// # Examples
///
/// ```
/// use noughts::adapters::RecordingRenderer;
/// use noughts::app::Session;
/// use noughts::tictactoe::Intent;
///
/// let recorder = RecordingRenderer::new();
/// let mut session = Session::start(recorder.clone())?;
/// session.dispatch(Intent::PlaceMark(4))?;
///
/// assert_eq!(recorder.frame_count(), 2);
/// assert_eq!(recorder.last_frame().unwrap().message, "Player O's turn");
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    storage: Arc<Mutex<Recorded>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_count(&self) -> usize {
        self.storage.lock().unwrap().frames.len()
    }

    pub fn frames(&self) -> Vec<GameView> {
        self.storage.lock().unwrap().frames.clone()
    }

    pub fn last_frame(&self) -> Option<GameView> {
        self.storage.lock().unwrap().frames.last().cloned()
    }

    pub fn notices(&self) -> Vec<String> {
        self.storage.lock().unwrap().notices.clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &GameView) -> Result<()> {
        self.storage.lock().unwrap().frames.push(view.clone());
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        self.storage
            .lock()
            .unwrap()
            .notices
            .push(message.to_string());
        Ok(())
    }
}
