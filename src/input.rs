//! Finding documents on disk and feeding their lines to the scanner.
//!
//! Paths given explicitly are always scanned; directories are walked and filtered by extension.
//! Lines are read as raw bytes so that documents in legacy encodings still scan.

use crate::error::{Error, Result};
use crate::scan::scan;
use crate::section::Outline;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Line source over a buffered reader, yielding lines without `\n` or `\r\n`.
///
/// A read error ends the iteration early; call [`ReaderLines::finish`] afterwards to surface it.
pub struct ReaderLines<R> {
    reader: R,
    error: Option<io::Error>,
}

impl<R: BufRead> ReaderLines<R> {
    #[must_use]
    /// Read lines from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            error: None,
        }
    }

    /// Consume the source, returning the error that stopped it early, if any.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error encountered while reading.
    pub fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<R: BufRead> Iterator for ReaderLines<R> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if self.error.is_some() {
            return None;
        }
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.last() == Some(&b'\n') {
                    line.pop();
                    if line.last() == Some(&b'\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}

/// Whether `path` has one of `extensions`, compared ASCII case-insensitively.
#[must_use]
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Collect documents to scan from files and directories.
///
/// Files are kept as given; directories are searched recursively for files with a matching
/// extension. The result is sorted and free of duplicates.
///
/// # Errors
///
/// Returns an error if a path or directory entry cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for path in paths {
        let meta = fs::metadata(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        if meta.is_dir() {
            walk_directory(&path, extensions, &mut documents)?;
        } else {
            documents.push(path);
        }
    }
    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn walk_directory(dir: &Path, extensions: &[String], found: &mut Vec<PathBuf>) -> Result<()> {
    // Symlinks are not followed, so a link back up the tree cannot loop
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| Error::Io {
            path: e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf),
            source: e.into(),
        })?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            found.push(entry.into_path());
        }
    }
    Ok(())
}

/// Scan the document at `path` into an outline.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn extract_outline(path: &Path) -> Result<Outline> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let mut outline = Outline::new(path.to_string_lossy());
    let mut lines = ReaderLines::new(BufReader::new(file));
    scan(lines.by_ref(), &mut outline);
    lines.finish().map_err(io_err)?;
    debug!(path = %path.display(), sections = outline.len(), "extracted outline");
    Ok(outline)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
