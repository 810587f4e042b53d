//! Shared configuration types for CLI commands

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::app::RenderConfig;

/// Frame format written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Grid, status line and history selector as text
    #[default]
    Text,
    /// One JSON document per frame
    Json,
}

/// Common configuration shared across commands
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Frame format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Hide the history selector
    #[arg(long)]
    pub no_history: bool,

    /// Draw empty squares as '.' instead of their index
    #[arg(long)]
    pub plain: bool,

    /// Verbose logging to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl CommonConfig {
    /// Text rendering settings implied by the flags
    pub fn render_config(&self, show_controls: bool) -> RenderConfig {
        RenderConfig::default()
            .with_history(!self.no_history)
            .with_indices(!self.plain)
            .with_controls(show_controls)
    }
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            no_history: false,
            plain: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_render_config_shows_everything() {
        let config = CommonConfig::default().render_config(true);
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn flags_map_onto_render_config() {
        let common = CommonConfig {
            no_history: true,
            plain: true,
            ..CommonConfig::default()
        };
        let config = common.render_config(false);
        assert!(!config.show_history);
        assert!(!config.show_indices);
        assert!(!config.show_controls);
    }
}
