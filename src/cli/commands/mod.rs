//! Subcommands of the `noughts` binary

pub mod play;
pub mod replay;

use crate::{
    adapters::{JsonRenderer, TextRenderer},
    cli::config::{CommonConfig, OutputFormat},
    ports::Renderer,
};

/// Pick the stdout renderer for the requested format
pub fn stdout_renderer(common: &CommonConfig, show_controls: bool) -> Box<dyn Renderer> {
    match common.format {
        OutputFormat::Text => Box::new(TextRenderer::stdout(common.render_config(show_controls))),
        OutputFormat::Json => Box::new(JsonRenderer::stdout()),
    }
}
