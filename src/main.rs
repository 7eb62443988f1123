use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use keychord::cli::{describe_keymap, describe_sequence, list_keys, CliArgs, CliCommand};
use keychord::config_paths;
use keychord::keymap::{convert, load_keymap_file};

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();
    keychord::tracing::init(args.command.writes_log_file());

    match args.command {
        CliCommand::Parse { inputs, json } => run_parse(&inputs, json),
        CliCommand::Check { path } => run_check(path.as_deref()),
        CliCommand::Keys => {
            print!("{}", list_keys());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Convert each input; report every failure, exit non-zero if any failed
fn run_parse(inputs: &[String], json: bool) -> Result<ExitCode> {
    let mut failed = false;
    let mut converted = Vec::new();

    for input in inputs {
        match convert(input) {
            Ok(chords) => {
                tracing::debug!("Converted {:?} into {} chord(s)", input, chords.len());
                converted.push((input, chords));
            }
            Err(e) => {
                tracing::warn!("{}", e);
                eprintln!("error: {}", e);
                failed = true;
            }
        }
    }

    if json {
        let values: Vec<_> = converted
            .iter()
            .map(|(input, chords)| serde_json::json!({ "input": input, "chords": chords }))
            .collect();
        let text = serde_json::to_string_pretty(&values).context("Failed to serialize chords")?;
        println!("{}", text);
    } else {
        for (input, chords) in &converted {
            print!("{}", describe_sequence(input, chords));
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn run_check(path: Option<&std::path::Path>) -> Result<ExitCode> {
    let path = config_paths::resolve_keymap_file(path)
        .context("No keymap path given and no config directory available")?;

    let bindings = load_keymap_file(&path)
        .with_context(|| format!("Invalid keymap {}", path.display()))?;

    print!("{}", describe_keymap(&bindings));
    Ok(ExitCode::SUCCESS)
}
