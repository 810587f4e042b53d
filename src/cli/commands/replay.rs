//! Replay command - apply a scripted sequence of intents and show the result

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::{
    app::Session,
    cli::{
        commands::stdout_renderer,
        config::{CommonConfig, OutputFormat},
        input::{parse_move_list, parse_script},
        output::print_summary,
    },
    ports::Renderer,
    tictactoe::{Intent, Transition},
};

#[derive(Parser, Debug)]
#[command(about = "Replay a script of moves and show the final position")]
pub struct ReplayArgs {
    /// Script file with one command per line ('-' for stdin)
    pub script: Option<PathBuf>,

    /// Comma-separated squares to play after the script, e.g. 0,1,3,4,6
    #[arg(long, short = 'm')]
    pub moves: Option<String>,

    /// Draw every frame instead of only the last one
    #[arg(long)]
    pub trace: bool,

    /// Print a summary after the final frame (text format only)
    #[arg(long)]
    pub summary: bool,

    #[command(flatten)]
    pub common: CommonConfig,
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let intents = collect_intents(&args)?;
    let renderer = stdout_renderer(&args.common, false);
    let (session, transitions) = replay(renderer, intents, args.trace)?;

    if args.summary && args.common.format == OutputFormat::Text {
        print_summary(&session.view(), &transitions);
    }
    Ok(())
}

/// Gather intents from the script (if any) followed by the move list.
pub fn collect_intents(args: &ReplayArgs) -> Result<Vec<Intent>> {
    let mut intents = Vec::new();

    if let Some(path) = &args.script {
        let text = if path.as_os_str() == "-" {
            std::io::read_to_string(std::io::stdin()).context("Failed to read script from stdin")?
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?
        };
        intents.extend(
            parse_script(&text).with_context(|| format!("Invalid script {}", path.display()))?,
        );
    }

    if let Some(moves) = &args.moves {
        intents.extend(parse_move_list(moves).context("Invalid --moves list")?);
    }

    if args.script.is_none() && args.moves.is_none() {
        return Err(anyhow!("Nothing to replay: pass a script file or --moves"));
    }

    Ok(intents)
}

/// Apply `intents` to a fresh session and draw the final frame.
///
/// With `trace` set every intent is drawn as it is applied.
pub fn replay<R: Renderer>(
    renderer: R,
    intents: Vec<Intent>,
    trace: bool,
) -> Result<(Session<R>, Vec<Transition>)> {
    if trace {
        let mut session = Session::start(renderer)?;
        let transitions = session.dispatch_all(intents)?;
        return Ok((session, transitions));
    }

    let mut session = Session::new(renderer).without_auto_redraw();
    let transitions = session.dispatch_all(intents)?;
    session.redraw()?;
    Ok((session, transitions))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::adapters::RecordingRenderer;

    fn args(script: Option<PathBuf>, moves: Option<&str>) -> ReplayArgs {
        ReplayArgs {
            script,
            moves: moves.map(str::to_string),
            trace: false,
            summary: false,
            common: CommonConfig::default(),
        }
    }

    #[test]
    fn script_then_moves() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0\n1\n# rewind\ngoto 1").unwrap();

        let intents = collect_intents(&args(Some(file.path().to_path_buf()), Some("8"))).unwrap();
        assert_eq!(
            intents,
            vec![
                Intent::PlaceMark(0),
                Intent::PlaceMark(1),
                Intent::SelectHistory(1),
                Intent::PlaceMark(8),
            ]
        );
    }

    #[test]
    fn missing_script_is_reported() {
        let err = collect_intents(&args(Some(PathBuf::from("/nonexistent/moves.txt")), None))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read script"));
    }

    #[test]
    fn nothing_to_replay() {
        assert!(collect_intents(&args(None, None)).is_err());
    }

    #[test]
    fn replay_draws_only_final_frame() {
        let recorder = RecordingRenderer::new();
        let (session, transitions) = replay(
            recorder.clone(),
            parse_move_list("0,1,3,4,6").unwrap(),
            false,
        )
        .unwrap();

        assert_eq!(transitions.len(), 5);
        assert_eq!(recorder.frame_count(), 1);
        assert_eq!(session.view().message, "Player X Wins! 🎉");
    }

    #[test]
    fn trace_draws_every_frame() {
        let recorder = RecordingRenderer::new();
        replay(recorder.clone(), parse_move_list("0,1").unwrap(), true).unwrap();
        assert_eq!(recorder.frame_count(), 3);
    }
}
