use crate::cancel::StopFlag;
use crate::error::{RenameError, Result};
use crate::observer::RenameObserver;
use crate::transform::transform;
use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

const DESTINATION_SUFFIX: &str = "_new";

/// A single source → destination name pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRename {
    pub original: String,
    pub renamed: String,
}

/// What a walk did before it finished or was stopped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkSummary {
    /// Number of entries in the source listing
    pub entries: usize,
    /// Entries looked at before the walk ended
    pub processed: usize,
    /// Entries left alone because their name did not match
    pub skipped: usize,
    pub stopped: bool,
    pub renames: Vec<PlannedRename>,
}

impl WalkSummary {
    pub fn copied(&self) -> usize {
        self.renames.len()
    }
}

/// The sibling folder renamed files are copied into: `<source>_new`.
pub fn destination_for(source: &Path) -> PathBuf {
    // Re-collecting the components drops a trailing separator
    let normalized: PathBuf = source.components().collect();
    let mut destination = normalized.into_os_string();
    destination.push(DESTINATION_SUFFIX);
    PathBuf::from(destination)
}

/// Progress after finishing the entry at `index`, as a floored percentage.
pub fn progress_percent(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let percent = index.saturating_mul(100) / total;
    u8::try_from(percent.min(100)).unwrap_or(100)
}

/// Copies every matching file of one folder into its `_new` sibling.
#[derive(Debug, Clone)]
pub struct Renamer {
    source: PathBuf,
    destination: PathBuf,
}

impl Renamer {
    /// Prepare a walk over `source`. The destination folder is created here,
    /// before any file is looked at; an existing folder is fine.
    pub fn new(source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let destination = destination_for(&source);
        fs::create_dir_all(&destination).map_err(|e| RenameError::io(&destination, e))?;
        Ok(Self {
            source,
            destination,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Full run as seen by an observer: wait-started, progress, then exactly
    /// one of done (unless stopped) or error.
    pub fn run(&self, observer: &dyn RenameObserver, stop: &StopFlag) -> Result<WalkSummary> {
        observer.on_wait_started();
        match self.walk(observer, stop) {
            Ok(summary) => {
                if !summary.stopped {
                    observer.on_done();
                }
                Ok(summary)
            },
            Err(err) => {
                observer.on_error();
                Err(err)
            },
        }
    }

    /// Walk the listing in directory order, copying each matching file.
    ///
    /// The first failure aborts the walk; files already copied stay where they are.
    pub fn walk(&self, observer: &dyn RenameObserver, stop: &StopFlag) -> Result<WalkSummary> {
        let entries = self.list_entries()?;
        let mut summary = WalkSummary {
            entries: entries.len(),
            ..Default::default()
        };

        for (index, name) in entries.iter().enumerate() {
            if stop.is_stopped() {
                break;
            }

            match rename_for(name)? {
                Some(rename) => {
                    let from = self.source.join(name);
                    let to = self.destination.join(&rename.renamed);
                    fs::copy(&from, &to).map_err(|e| RenameError::io(&from, e))?;
                    summary.renames.push(rename);
                },
                None => summary.skipped += 1,
            }

            summary.processed += 1;
            observer.on_progress(progress_percent(index, summary.entries));
        }

        // A stop that lands during the last copy still suppresses completion
        summary.stopped = stop.is_stopped();
        Ok(summary)
    }

    /// Evaluate every entry without copying anything.
    pub fn plan(&self) -> Result<Vec<PlannedRename>> {
        plan(&self.source)
    }

    fn list_entries(&self) -> Result<Vec<OsString>> {
        list_entries(&self.source)
    }
}

/// Names `source` would produce, in listing order. Nothing is created or copied.
pub fn plan(source: &Path) -> Result<Vec<PlannedRename>> {
    let mut renames = Vec::new();
    for name in list_entries(source)? {
        if let Some(rename) = rename_for(&name)? {
            renames.push(rename);
        }
    }
    Ok(renames)
}

/// Entry names in whatever order the platform lists them.
fn list_entries(source: &Path) -> Result<Vec<OsString>> {
    let read_dir = fs::read_dir(source).map_err(|e| RenameError::io(source, e))?;
    read_dir
        .map(|entry| {
            entry
                .map(|e| e.file_name())
                .map_err(|e| RenameError::io(source, e))
        })
        .collect()
}

/// Names that are not valid UTF-8 can never carry the prefix.
fn rename_for(name: &OsStr) -> Result<Option<PlannedRename>> {
    let Some(original) = name.to_str() else {
        return Ok(None);
    };
    Ok(transform(original)?.map(|renamed| PlannedRename {
        original: original.to_string(),
        renamed,
    }))
}
