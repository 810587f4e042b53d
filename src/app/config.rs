//! Configuration types for rendering.

use serde::{Deserialize, Serialize};

/// How the text view draws a frame.
///
/// # Examples
///
/// ```
/// use noughts::app::RenderConfig;
///
/// let config = RenderConfig::default()
///     .with_history(false)
///     .with_indices(false)
///     .with_empty_glyph('_');
/// assert!(!config.show_history);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Show the history selector under the grid
    pub show_history: bool,
    /// Show the command hint under the grid
    pub show_controls: bool,
    /// Label empty squares with their index instead of `empty_glyph`
    pub show_indices: bool,
    /// Character drawn for empty squares when indices are off
    pub empty_glyph: char,
}

impl RenderConfig {
    /// Show or hide the history selector.
    pub fn with_history(mut self, show: bool) -> Self {
        self.show_history = show;
        self
    }

    /// Show or hide the command hint.
    pub fn with_controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    /// Show or hide square indices in empty cells.
    pub fn with_indices(mut self, show: bool) -> Self {
        self.show_indices = show;
        self
    }

    /// Set the glyph for empty squares.
    pub fn with_empty_glyph(mut self, glyph: char) -> Self {
        self.empty_glyph = glyph;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_history: true,
            show_controls: true,
            show_indices: true,
            empty_glyph: '.',
        }
    }
}
