//! Play command - interactive game on stdin/stdout

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use crate::{
    app::Session,
    cli::{
        commands::stdout_renderer,
        config::CommonConfig,
        input::{Command, parse_command},
    },
    ports::Renderer,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    #[command(flatten)]
    pub common: CommonConfig,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let session = Session::start(stdout_renderer(&args.common, true))?;
    let stdin = std::io::stdin();
    let session = run(stdin.lock(), session)?;
    info!(
        moves = session.game().history().len() - 1,
        ignored = session.ignored_count(),
        "session ended"
    );
    Ok(())
}

/// Feed input lines into the session until `quit` or end of input.
///
/// Lines that do not parse are reported through the renderer and skipped.
pub fn run<B, R>(input: B, mut session: Session<R>) -> Result<Session<R>>
where
    B: BufRead,
    R: Renderer,
{
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match parse_command(&line) {
            Ok(Some(Command::Intent(intent))) => {
                session.dispatch(intent)?;
            }
            Ok(Some(Command::Quit)) => {
                debug!("quit requested");
                break;
            }
            Ok(None) => {}
            Err(e) => session.notify(&e.to_string())?,
        }
    }
    Ok(session)
}
