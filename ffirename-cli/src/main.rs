use anyhow::{anyhow, Context, Result};
use clap::Parser;
use ffirename_core::{Config, StopFlag};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

mod cli;
mod console;
mod rename;
mod select;

use cli::{Cli, OutputFormat};
use console::{color_for, Console};
use rename::{Outcome, RenameOptions};

const EXIT_INTERRUPTED: i32 = 130;

fn main() {
    let stop = StopFlag::new();

    // Closing mid-run asks the worker to stop, then leaves without waiting for it
    let stop_on_close = stop.clone();
    ctrlc::set_handler(move || {
        stop_on_close.request_stop();
        eprintln!("\nClosing app...");
        process::exit(EXIT_INTERRUPTED);
    })
    .expect("Error setting close handler");

    let cli = Cli::parse();

    let exit_code = match run(cli, &stop) {
        Ok(Outcome::Completed) => 0,
        Ok(Outcome::Failed) => 1,
        Ok(Outcome::Stopped) => EXIT_INTERRUPTED,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if e.to_string().contains("invalid") || e.to_string().contains("not found") {
                2
            } else {
                3
            }
        },
    };

    process::exit(exit_code);
}

fn run(cli: Cli, stop: &StopFlag) -> Result<Outcome> {
    let config = load_config(cli.config.as_ref())?;

    let configured_color = config.defaults.use_color;
    // Status lines go to stderr and reports to stdout; each is colored for its own stream
    let console_color = color_for(cli.no_color, configured_color, io::stderr().is_terminal());
    let report_color = color_for(cli.no_color, configured_color, io::stdout().is_terminal());
    let output = match cli.output {
        Some(output) => output,
        None => OutputFormat::from_config(&config.defaults.output_format)
            .unwrap_or(OutputFormat::Summary),
    };
    let console = Console::new(console_color, cli.quiet);

    let source = match cli.folder {
        Some(folder) => folder,
        None => {
            if !io::stdin().is_terminal() {
                return Err(anyhow!(
                    "invalid input: no folder given and stdin is not a terminal"
                ));
            }
            let suggestion = select::suggested_folder(config.defaults.start_dir.as_deref());
            match select::prompt_for_folder(&suggestion)? {
                Some(folder) => folder,
                None => {
                    console.info("No folder selected.");
                    return Ok(Outcome::Completed);
                },
            }
        },
    };

    let options = RenameOptions {
        output: output.into(),
        use_color: report_color,
        verbose: cli.verbose,
    };

    if cli.dry_run {
        rename::handle_dry_run(&source, &options, &console)
    } else {
        rename::handle_rename(&source, &options, &console, stop)
    }
}

fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.clone(),
        None => match dirs::config_dir() {
            Some(dir) => dir.join("ffirename").join(ffirename_core::config::CONFIG_FILE_NAME),
            None => return Ok(Config::default()),
        },
    };

    let config = Config::load_or_default(&path)
        .with_context(|| format!("invalid config file {}", path.display()))?;

    if OutputFormat::from_config(&config.defaults.output_format).is_none() {
        return Err(anyhow!(
            "invalid config file {}: unknown output_format '{}' (expected summary or json)",
            path.display(),
            config.defaults.output_format
        ));
    }

    Ok(config)
}
