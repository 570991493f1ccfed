use anyhow::Result;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Ask on stdin which folder to rename, starting from `suggestion`.
pub fn prompt_for_folder(suggestion: &Path) -> Result<Option<PathBuf>> {
    prompt_for_folder_with_input(&mut io::stdin(), suggestion)
}

/// A relative answer is resolved against `suggestion`; a blank answer cancels.
pub fn prompt_for_folder_with_input<R: Read>(
    reader: &mut R,
    suggestion: &Path,
) -> Result<Option<PathBuf>> {
    eprintln!("Select folder (relative paths start at {}).", suggestion.display());
    eprint!("Folder (blank to cancel): ");

    let mut input = String::new();
    BufReader::new(reader).read_line(&mut input)?;
    let answer = input.trim();

    if answer.is_empty() {
        return Ok(None);
    }

    Ok(Some(suggestion.join(answer)))
}

/// Folder offered as the starting point: config, then home, then cwd
pub fn suggested_folder(configured: Option<&Path>) -> PathBuf {
    configured
        .map(Path::to_path_buf)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
