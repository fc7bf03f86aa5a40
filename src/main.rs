use std::process::ExitCode;

use anyhow::Context;
use maestro::args::{field_registry, parse_env_args, ResolvedArgs};
use maestro::config::{Config, OutputConfig};
use maestro::logging::init_tracing;

fn main() -> ExitCode {
    let (config, config_warning) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_tracing(&config.logging);
    if let Some(err) = config_warning {
        eprintln!("Warning: {err}; using defaults");
    }

    let resolved = match parse_env_args() {
        Ok(resolved) => resolved,
        Err(err) => {
            tracing::debug!(error = %err, "Argument resolution failed");
            eprintln!("Error: {err}");
            eprintln!();
            eprint!("{}", field_registry().usage());
            return ExitCode::FAILURE;
        }
    };

    if resolved.help {
        print!("{}", field_registry().usage());
        return ExitCode::SUCCESS;
    }

    match render(&resolved, &config.output) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn render(resolved: &ResolvedArgs, output: &OutputConfig) -> anyhow::Result<String> {
    let text = if output.pretty {
        serde_json::to_string_pretty(resolved)
    } else {
        serde_json::to_string(resolved)
    };
    text.context("Failed to serialize resolved arguments")
}
