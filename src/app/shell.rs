//! Line-oriented session that keeps the model loaded between actions.

use crate::app::input::parse_features;
use crate::app::render::{render_assessment, render_ranking};
use crate::core::engine::HabitabilityApp;
use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const HELP: &str = "Commands:
  predict [radius period star_temp semi_major_axis]   assess one planet (defaults: 1.0 365.0 5500.0 1.0)
  top [n]                                             rank the catalog (default n from config)
  help                                                show this message
  quit                                                leave the session";

#[derive(Debug, PartialEq)]
enum ShellCommand<'a> {
    Predict(Vec<&'a str>),
    Top(Option<&'a str>),
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Option<ShellCommand<'_>> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let command = match head.to_ascii_lowercase().as_str() {
        "predict" | "p" => ShellCommand::Predict(parts.collect()),
        "top" | "t" => ShellCommand::Top(parts.next()),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(head),
    };
    Some(command)
}

/// Runs until `quit` or end of input. A failed action is reported and the
/// session continues; only write failures end it early.
pub async fn run_shell<S, C, R, W>(app: &HabitabilityApp<S, C>, input: R, output: &mut W) -> Result<()>
where
    S: Storage,
    C: ConfigProvider,
    R: BufRead,
    W: Write,
{
    writeln!(output, "🌍 Exoplanet Habitability Predictor ({} model)", app.model().kind())?;
    writeln!(output, "{}", HELP)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            ShellCommand::Predict(args) => {
                match parse_features(&args).and_then(|features| app.assess(features)) {
                    Ok(assessment) => write!(output, "{}", render_assessment(&assessment))?,
                    Err(e) => report(output, &e)?,
                }
            }
            ShellCommand::Top(count) => {
                let count = match count.map(str::parse::<usize>) {
                    Some(Ok(0)) | Some(Err(_)) => {
                        writeln!(output, "❌ top expects a positive number")?;
                        continue;
                    }
                    Some(Ok(n)) => Some(n),
                    None => None,
                };
                match app.top_habitable(count).await {
                    Ok(ranked) => write!(output, "{}", render_ranking(&ranked))?,
                    Err(e) => report(output, &e)?,
                }
            }
            ShellCommand::Help => writeln!(output, "{}", HELP)?,
            ShellCommand::Quit => break,
            ShellCommand::Unknown(word) => {
                writeln!(output, "❌ Unknown command '{}', type 'help'", word)?
            }
        }
        output.flush()?;
    }

    Ok(())
}

fn report<W: Write>(output: &mut W, error: &crate::utils::error::HabitabilityError) -> Result<()> {
    tracing::warn!("Action failed: {}", error);
    writeln!(output, "❌ {}", error.user_friendly_message())?;
    writeln!(output, "💡 {}", error.recovery_suggestion())?;
    Ok(())
}
