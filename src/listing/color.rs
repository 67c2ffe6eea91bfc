use inksac::prelude::*;

use super::{Entry, EntryKind};
use crate::style::Painter;

const ARCHIVE_EXTS: &[&str] = &["tar", "gz", "zip", "rar", "7z", "bz2"];
const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "svg"];
const SOURCE_EXTS: &[&str] = &["rs", "c", "cpp", "h", "java", "py", "js", "go", "ts"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStyle {
    Directory,
    Symlink,
    Executable,
    Archive,
    Image,
    Source,
    Plain,
}

/// Ordered rule list, first match wins. Type checks take priority over
/// the extension groups.
const RULES: [(fn(&Entry) -> bool, FileStyle); 6] = [
    (is_directory, FileStyle::Directory),
    (is_symlink, FileStyle::Symlink),
    (is_executable, FileStyle::Executable),
    (is_archive, FileStyle::Archive),
    (is_image, FileStyle::Image),
    (is_source, FileStyle::Source),
];

pub fn classify(entry: &Entry) -> FileStyle {
    RULES
        .iter()
        .find(|(predicate, _)| predicate(entry))
        .map(|(_, style)| *style)
        .unwrap_or(FileStyle::Plain)
}

impl FileStyle {
    /// Trailing type marker appended to the name, `ls -F` style.
    pub fn marker(self) -> Option<char> {
        match self {
            FileStyle::Directory => Some('/'),
            FileStyle::Executable => Some('*'),
            _ => None,
        }
    }

    fn palette(self) -> Option<(Color, bool)> {
        match self {
            FileStyle::Directory => Some((Color::Blue, true)),
            FileStyle::Symlink => Some((Color::Cyan, false)),
            FileStyle::Executable => Some((Color::Green, true)),
            FileStyle::Archive => Some((Color::Red, false)),
            FileStyle::Image => Some((Color::Magenta, false)),
            FileStyle::Source => Some((Color::Yellow, false)),
            FileStyle::Plain => None,
        }
    }
}

/// Colorized name with its type marker; the reset code follows the
/// marker so the style never bleeds into the padding.
pub(super) fn paint_name(entry: &Entry, painter: &Painter) -> String {
    let style = classify(entry);
    let mut text = entry.name.clone();
    if let Some(marker) = style.marker() {
        text.push(marker);
    }

    match style.palette() {
        Some((color, bold)) => painter.paint(&text, color, bold),
        None => text,
    }
}

fn is_directory(entry: &Entry) -> bool {
    matches!(entry.kind, EntryKind::Directory)
}

fn is_symlink(entry: &Entry) -> bool {
    matches!(entry.kind, EntryKind::Symlink)
}

fn is_executable(entry: &Entry) -> bool {
    entry.executable
}

fn is_archive(entry: &Entry) -> bool {
    has_extension(entry, ARCHIVE_EXTS)
}

fn is_image(entry: &Entry) -> bool {
    has_extension(entry, IMAGE_EXTS)
}

fn is_source(entry: &Entry) -> bool {
    has_extension(entry, SOURCE_EXTS)
}

fn has_extension(entry: &Entry, group: &[&str]) -> bool {
    std::path::Path::new(&entry.name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            group.contains(&lower.as_str())
        })
        .unwrap_or(false)
}
