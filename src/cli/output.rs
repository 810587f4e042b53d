//! Output formatting helpers for CLI summaries

use crate::tictactoe::{GameOutcome, GameView, Transition};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}

/// Short description of an outcome for summaries
pub fn describe_outcome(outcome: Option<GameOutcome>) -> String {
    match outcome {
        Some(GameOutcome::Win(player)) => format!("{player} wins"),
        Some(GameOutcome::Draw) => "draw".to_string(),
        None => "in progress".to_string(),
    }
}

/// Key-value rows summarising a finished replay
pub fn summary_rows(view: &GameView, transitions: &[Transition]) -> Vec<(String, String)> {
    let applied = transitions.iter().filter(|t| t.is_applied()).count();
    vec![
        ("Outcome".to_string(), describe_outcome(view.outcome)),
        (
            "Viewing".to_string(),
            format!("{} of {}", view.current_label(), view.history_length - 1),
        ),
        (
            "Intents".to_string(),
            format!("{applied} applied, {} ignored", transitions.len() - applied),
        ),
    ]
}

/// Print the replay summary
pub fn print_summary(view: &GameView, transitions: &[Transition]) {
    print_section("Replay summary");
    for (key, value) in summary_rows(view, transitions) {
        print_kv(&key, &value);
    }
}
