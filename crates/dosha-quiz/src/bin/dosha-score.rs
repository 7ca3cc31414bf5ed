use std::io::Read;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dosha_quiz::{score, QuizAnswers};

/// Usage: `dosha-score [ANSWERS.json]` (reads stdin when no file is given).
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read answers from {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let answers = QuizAnswers::from_json(&json)?;
    let unanswered = answers.unanswered();
    if !unanswered.is_empty() {
        let keys: Vec<&str> = unanswered.iter().map(|q| q.key()).collect();
        info!(missing = ?keys, "scoring a partially answered quiz");
    }

    let result = score(&answers)?;
    info!(dominant = %result.dominant, "quiz scored");
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
