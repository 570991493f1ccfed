use crate::walker::{destination_for, PlannedRename, Renamer, WalkSummary};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a completed or stopped rename walk
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub entries: usize,
    pub processed: usize,
    pub copied: usize,
    pub skipped: usize,
    pub stopped: bool,
    pub renames: Vec<PlannedRename>,
}

impl RenameResult {
    pub fn new(renamer: &Renamer, summary: WalkSummary) -> Self {
        Self {
            source: renamer.source().to_path_buf(),
            destination: renamer.destination().to_path_buf(),
            entries: summary.entries,
            processed: summary.processed,
            copied: summary.copied(),
            skipped: summary.skipped,
            stopped: summary.stopped,
            renames: summary.renames,
        }
    }
}

/// Result of a dry run: what would be copied, nothing written
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub renames: Vec<PlannedRename>,
}

impl PlanResult {
    pub fn new(source: &Path, renames: Vec<PlannedRename>) -> Self {
        Self {
            source: source.to_path_buf(),
            destination: destination_for(source),
            renames,
        }
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "rename",
            "source": self.source,
            "destination": self.destination,
            "stopped": self.stopped,
            "summary": {
                "entries": self.entries,
                "processed": self.processed,
                "copied": self.copied,
                "skipped": self.skipped,
            },
            "renames": self.renames,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.stopped {
            writeln!(
                output,
                "Stopped after {} of {} entries",
                self.processed, self.entries
            )
            .unwrap();
        }

        writeln!(
            output,
            "✓ Copied {} of {} entries into '{}'",
            self.copied,
            self.entries,
            self.destination.display()
        )
        .unwrap();

        if self.skipped > 0 {
            writeln!(output, "Skipped {} entries without an FFI- name", self.skipped).unwrap();
        }

        output
    }
}

impl OutputFormatter for PlanResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "plan",
            "dry_run": true,
            "source": self.source,
            "destination": self.destination,
            "renames": self.renames,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "Dry run: {} files would be copied into '{}'",
            self.renames.len(),
            self.destination.display()
        )
        .unwrap();
        output
    }
}

/// Render planned renames as a two-column table, sorted by original name
pub fn render_plan_table(renames: &[PlannedRename], use_color: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Disabled);

    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("File").fg(Color::Cyan),
            Cell::new("New name").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["File", "New name"]);
    }

    let mut sorted: Vec<&PlannedRename> = renames.iter().collect();
    sorted.sort_by(|a, b| a.original.cmp(&b.original));

    for rename in sorted {
        table.add_row(vec![rename.original.as_str(), rename.renamed.as_str()]);
    }

    table.to_string()
}
