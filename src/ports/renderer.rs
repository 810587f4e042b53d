//! Renderer port - the boundary between game state and output.
//!
//! A session hands every frame to a renderer as a [`GameView`]. Renderers
//! never see or mutate the game state itself.

use crate::{Result, tictactoe::GameView};

/// Port for drawing the read model somewhere.
///
/// # Examples
///
/// ```
/// use noughts::{ports::Renderer, tictactoe::GameView};
///
/// struct StatusOnly(Vec<String>);
///
/// impl Renderer for StatusOnly {
///     fn render(&mut self, view: &GameView) -> noughts::Result<()> {
///         self.0.push(view.message.clone());
///         Ok(())
///     }
/// }
/// ```
pub trait Renderer {
    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be written or serialized.
    fn render(&mut self, view: &GameView) -> Result<()>;

    /// Report an input that could not be turned into an intent.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn notice(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, view: &GameView) -> Result<()> {
        (**self).render(view)
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        (**self).notice(message)
    }
}
