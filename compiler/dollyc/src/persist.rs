//! Writing generated sources to disk.
//!
//! A file is only written when its content differs from what is already on
//! disk, so regenerating an unchanged input leaves modification times alone.

use std::io;
use std::path::{Path, PathBuf};

use dolly_gen::GeneratedSource;

/// What happened to one output file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteStatus {
    /// The file did not exist or had different content.
    Written,
    /// The file already had this content.
    Unchanged,
    /// The file would be written, but this is a dry run.
    WouldWrite,
}

/// Counts over a batch of output files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PersistSummary {
    pub written: usize,
    pub unchanged: usize,
    pub would_write: usize,
}

impl PersistSummary {
    fn add(&mut self, status: WriteStatus) {
        match status {
            WriteStatus::Written => self.written += 1,
            WriteStatus::Unchanged => self.unchanged += 1,
            WriteStatus::WouldWrite => self.would_write += 1,
        }
    }
}

/// Write `text` to `path` unless the file already holds exactly `text`.
///
/// Existing content is compared as bytes, so a file that is not UTF-8 is
/// simply overwritten.
pub fn write_if_changed(path: &Path, text: &str, dry_run: bool) -> io::Result<WriteStatus> {
    match std::fs::read(path) {
        Ok(existing) if existing == text.as_bytes() => return Ok(WriteStatus::Unchanged),
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    if dry_run {
        return Ok(WriteStatus::WouldWrite);
    }
    std::fs::write(path, text)?;
    Ok(WriteStatus::Written)
}

/// Write every source into `dir` under its hint name.
///
/// The directory is created if needed. Stops at the first I/O error and
/// reports the offending path.
pub fn persist_all<'a>(
    dir: &Path,
    sources: impl IntoIterator<Item = &'a GeneratedSource>,
    dry_run: bool,
) -> Result<PersistSummary, (PathBuf, io::Error)> {
    if !dry_run {
        std::fs::create_dir_all(dir).map_err(|e| (dir.to_path_buf(), e))?;
    }
    let mut summary = PersistSummary::default();
    for source in sources {
        let path = dir.join(&source.hint_name);
        let status =
            write_if_changed(&path, &source.text, dry_run).map_err(|e| (path.clone(), e))?;
        tracing::debug!(path = %path.display(), ?status, "persisted");
        summary.add(status);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests;
