//! Session: the owner of one game and one renderer.
//!
//! There is no global game. Whoever runs the game loop creates a `Session`,
//! injects the renderer, and feeds it intents.

use tracing::debug;

use crate::{
    Result,
    ports::Renderer,
    tictactoe::{GameState, GameView, Intent, Transition},
};

/// One interactive game session.
///
/// Every dispatched intent runs to completion against the game state before
/// the renderer is handed the new read model, so a renderer never sees a
/// partially updated game.
///
/// # Examples
///
/// ```
/// use noughts::adapters::RecordingRenderer;
/// use noughts::app::Session;
/// use noughts::tictactoe::Intent;
///
/// let mut session = Session::start(RecordingRenderer::new())?;
/// for square in [0, 1, 3, 4, 6] {
///     session.dispatch(Intent::PlaceMark(square))?;
/// }
/// assert_eq!(session.view().message, "Player X Wins! 🎉");
/// # Ok::<(), noughts::Error>(())
/// ```
pub struct Session<R: Renderer> {
    game: GameState,
    renderer: R,
    auto_redraw: bool,
    ignored: usize,
}

impl<R: Renderer> Session<R> {
    /// Create a session without drawing anything yet.
    pub fn new(renderer: R) -> Self {
        Self {
            game: GameState::new(),
            renderer,
            auto_redraw: true,
            ignored: 0,
        }
    }

    /// Stop redrawing after each intent; frames are drawn only by
    /// [`redraw`](Self::redraw). Notices are still passed on.
    pub fn without_auto_redraw(mut self) -> Self {
        self.auto_redraw = false;
        self
    }

    /// Create a session and draw the opening frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn start(renderer: R) -> Result<Self> {
        let mut session = Self::new(renderer);
        session.redraw()?;
        Ok(session)
    }

    /// Apply an intent and redraw.
    ///
    /// Ignored intents still redraw, and their reason is passed to the
    /// renderer as a notice.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails. The game state has already
    /// been updated by then.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Transition> {
        let transition = self.game.apply(intent);
        if let Transition::Ignored(reason) = transition {
            self.ignored += 1;
            debug!(?intent, %reason, "intent ignored");
            self.renderer.notice(&reason.to_string())?;
        }
        if self.auto_redraw {
            self.redraw()?;
        }
        Ok(transition)
    }

    /// Apply intents in order, stopping at the first render failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn dispatch_all<I>(&mut self, intents: I) -> Result<Vec<Transition>>
    where
        I: IntoIterator<Item = Intent>,
    {
        intents
            .into_iter()
            .map(|intent| self.dispatch(intent))
            .collect()
    }

    /// Pass a message straight to the renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn notify(&mut self, message: &str) -> Result<()> {
        self.renderer.notice(message)
    }

    /// Draw the current read model.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn redraw(&mut self) -> Result<()> {
        let view = self.game.view();
        self.renderer.render(&view)
    }

    pub fn view(&self) -> GameView {
        self.game.view()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Number of intents that left the game unchanged
    pub fn ignored_count(&self) -> usize {
        self.ignored
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// End the session, handing back the renderer and final state
    pub fn finish(self) -> (GameState, R) {
        (self.game, self.renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::RecordingRenderer,
        tictactoe::{IgnoreReason, Player},
    };

    #[test]
    fn start_draws_opening_frame() {
        let recorder = RecordingRenderer::new();
        let session = Session::start(recorder.clone()).unwrap();
        assert_eq!(recorder.frame_count(), 1);
        assert_eq!(session.view().message, "Player X's turn");
    }

    #[test]
    fn new_draws_nothing() {
        let recorder = RecordingRenderer::new();
        let _session = Session::new(recorder.clone());
        assert_eq!(recorder.frame_count(), 0);
    }

    #[test]
    fn ignored_intent_redraws_with_notice() {
        let recorder = RecordingRenderer::new();
        let mut session = Session::start(recorder.clone()).unwrap();
        session.dispatch(Intent::PlaceMark(0)).unwrap();
        let transition = session.dispatch(Intent::PlaceMark(0)).unwrap();

        assert_eq!(transition, Transition::Ignored(IgnoreReason::SquareOccupied));
        assert_eq!(session.ignored_count(), 1);
        assert_eq!(recorder.frame_count(), 3);
        assert_eq!(recorder.notices(), vec!["square is already taken"]);
        assert_eq!(recorder.frames()[1], recorder.frames()[2]);
    }

    #[test]
    fn dispatch_all_reports_each_transition() {
        let mut session = Session::new(RecordingRenderer::new());
        let transitions = session
            .dispatch_all([
                Intent::PlaceMark(4),
                Intent::SelectHistory(5),
                Intent::PlaceMark(0),
            ])
            .unwrap();
        assert_eq!(
            transitions,
            vec![
                Transition::Applied,
                Transition::Ignored(IgnoreReason::HistoryOutOfRange),
                Transition::Applied,
            ]
        );
        assert_eq!(session.game().to_move(), Player::X);
    }

    #[test]
    fn without_auto_redraw_draws_on_request() {
        let recorder = RecordingRenderer::new();
        let mut session = Session::new(recorder.clone()).without_auto_redraw();
        session
            .dispatch_all([Intent::PlaceMark(0), Intent::PlaceMark(0)])
            .unwrap();
        assert_eq!(recorder.frame_count(), 0);
        assert_eq!(recorder.notices().len(), 1);

        session.redraw().unwrap();
        assert_eq!(recorder.frame_count(), 1);
        assert_eq!(recorder.last_frame().unwrap().message, "Player O's turn");
    }

    #[test]
    fn finish_returns_state() {
        let mut session = Session::new(RecordingRenderer::new());
        session.dispatch(Intent::PlaceMark(2)).unwrap();
        let (game, recorder) = session.finish();
        assert_eq!(game.history().len(), 2);
        assert_eq!(recorder.frame_count(), 1);
    }
}
