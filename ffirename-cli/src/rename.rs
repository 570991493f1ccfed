use anyhow::{anyhow, Result};
use ffirename_core::{
    plan, render_plan_table, worker, ChannelObserver, OutputFormat, OutputFormatter, PlanResult,
    RenameEvent, RenameResult, Renamer, StopFlag,
};
use std::path::Path;
use std::sync::mpsc;

use crate::console::Console;

/// How a run ended, mapped to the process exit code by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Stopped,
    Failed,
}

pub struct RenameOptions {
    pub output: OutputFormat,
    /// Color for what goes to stdout
    pub use_color: bool,
    pub verbose: bool,
}

pub fn handle_rename(
    source: &Path,
    options: &RenameOptions,
    console: &Console,
    stop: &StopFlag,
) -> Result<Outcome> {
    if !source.is_dir() {
        return Err(anyhow!("invalid folder: {} not found", source.display()));
    }

    let renamer = match Renamer::new(source) {
        Ok(renamer) => renamer,
        Err(e) => return Ok(report_failure(console, options, &e)),
    };

    console.info(&format!(
        "Selected folder for renaming is '{}'.",
        renamer.source().display()
    ));
    console.info(&format!(
        "Folder for renamed files will be '{}'.",
        renamer.destination().display()
    ));

    let (tx, rx) = mpsc::channel();
    let handle = match worker::spawn(renamer.clone(), ChannelObserver::new(tx), stop.clone()) {
        Ok(handle) => handle,
        Err(e) => return Ok(report_failure(console, options, &e)),
    };

    // The channel closes without a final event when the worker was stopped
    let mut finished = None;
    for event in rx {
        match event {
            RenameEvent::WaitStarted => console.info("Renaming please wait..."),
            RenameEvent::Progress(percent) => console.progress(percent),
            RenameEvent::Done => {
                console.progress(100);
                console.end_progress();
                console.success("Done!");
                finished = Some(RenameEvent::Done);
                break;
            },
            RenameEvent::Error => {
                console.end_progress();
                finished = Some(RenameEvent::Error);
                break;
            },
        }
    }

    let result = handle
        .join()
        .map_err(|_| anyhow!("rename worker panicked"))?;

    match (finished, result) {
        (_, Err(e)) => Ok(report_failure(console, options, &e)),
        (Some(RenameEvent::Done), Ok(summary)) => {
            let report = RenameResult::new(&renamer, summary);
            print!("{}", report.format(options.output));
            Ok(Outcome::Completed)
        },
        (_, Ok(summary)) => {
            console.end_progress();
            let report = RenameResult::new(&renamer, summary);
            print!("{}", report.format(options.output));
            Ok(Outcome::Stopped)
        },
    }
}

/// Evaluate names only; nothing is created or copied
pub fn handle_dry_run(source: &Path, options: &RenameOptions, console: &Console) -> Result<Outcome> {
    if !source.is_dir() {
        return Err(anyhow!("invalid folder: {} not found", source.display()));
    }

    let renames = match plan(source) {
        Ok(renames) => renames,
        Err(e) => return Ok(report_failure(console, options, &e)),
    };
    let result = PlanResult::new(source, renames);

    match options.output {
        OutputFormat::Json => print!("{}", result.format_json()),
        OutputFormat::Summary => {
            if !result.renames.is_empty() {
                println!("{}", render_plan_table(&result.renames, options.use_color));
            }
            print!("{}", result.format_summary());
        },
    }

    Ok(Outcome::Completed)
}

fn report_failure(
    console: &Console,
    options: &RenameOptions,
    error: &ffirename_core::RenameError,
) -> Outcome {
    console.error("Something went wrong!");
    if options.verbose {
        eprintln!("Error: {error}");
    }
    Outcome::Failed
}
