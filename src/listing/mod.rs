//! Directory listing for the `ls` built-in: option parsing, entry
//! collection, and the two render layouts (column grid and long format).

mod color;
mod format;

pub use color::{classify, FileStyle};

use std::fmt;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::style::Painter;

pub const TERMINAL_WIDTH: usize = 80;

#[derive(Debug)]
pub enum ListError {
    NotFound(String),
    CannotList(io::Error),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::NotFound(path) => write!(f, "{}: Not found", path),
            ListError::CannotList(e) => write!(f, "Cannot list directory: {}", e),
        }
    }
}

/// Listing options derived from the `ls` argument tokens. Dash tokens
/// contribute flags character-by-character; the first non-dash token is
/// the directory to list instead of the current one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub show_hidden: bool,
    pub long_format: bool,
    pub path: Option<String>,
}

impl ListOptions {
    pub fn parse(args: &[String]) -> Self {
        let mut options = ListOptions::default();

        for arg in args {
            if let Some(flags) = arg.strip_prefix('-') {
                for c in flags.chars() {
                    match c {
                        'a' => options.show_hidden = true,
                        'l' => options.long_format = true,
                        _ => {}
                    }
                }
            } else if options.path.is_none() {
                options.path = Some(arg.clone());
            }
        }

        options
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Symlink,
    File,
    Other,
}

/// One directory entry, read fresh from the filesystem on every listing.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    pub size: u64,
    pub modified_secs: u64,
    pub mode: u32,
    pub executable: bool,
}

impl Entry {
    fn read(path: &Path, name: String) -> io::Result<Self> {
        let link_meta = fs::symlink_metadata(path)?;
        // Follow the link for size and permissions; a broken link falls
        // back to its own metadata.
        let meta = fs::metadata(path).unwrap_or_else(|_| link_meta.clone());

        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else if link_meta.file_type().is_symlink() {
            EntryKind::Symlink
        } else if meta.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        let mode = meta.permissions().mode();
        let modified_secs = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Ok(Entry {
            name,
            kind,
            size: meta.len(),
            modified_secs,
            mode,
            executable: matches!(kind, EntryKind::File) && mode & 0o111 != 0,
        })
    }
}

/// Renders the contents of `options.path` (resolved against `cwd`) or
/// `cwd` itself, sorted case-insensitively, hidden entries filtered
/// unless requested.
pub fn list(cwd: &Path, options: &ListOptions, painter: &Painter) -> Result<String, ListError> {
    let target: PathBuf = match &options.path {
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };

    if !target.exists() {
        let shown = options
            .path
            .clone()
            .unwrap_or_else(|| target.display().to_string());
        return Err(ListError::NotFound(shown));
    }

    let mut entries = read_entries(&target)?;
    entries.sort_by_key(|e| e.name.to_lowercase());
    entries.retain(|e| options.show_hidden || !e.name.starts_with('.'));

    if options.long_format {
        Ok(format::render_long(&entries, painter))
    } else {
        Ok(format::render_columns(&entries, painter))
    }
}

fn read_entries(dir: &Path) -> Result<Vec<Entry>, ListError> {
    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(dir).map_err(ListError::CannotList)? {
        let dir_entry = dir_entry.map_err(ListError::CannotList)?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        match Entry::read(&dir_entry.path(), name) {
            Ok(entry) => entries.push(entry),
            // An entry that vanished mid-walk is skipped, not fatal.
            Err(_) => continue,
        }
    }

    Ok(entries)
}
