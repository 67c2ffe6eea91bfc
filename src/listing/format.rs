use std::env;

use super::color::paint_name;
use super::{classify, Entry, EntryKind, FileStyle, TERMINAL_WIDTH};
use crate::style::Painter;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Long/detail layout: a `total` header in 1024-byte units, then one row
/// per entry with permissions, link count, owner, size, mtime, and name.
pub(super) fn render_long(entries: &[Entry], painter: &Painter) -> String {
    let total: u64 = entries.iter().map(|e| e.size).sum::<u64>() / 1024;
    let owner = owner_name();

    let mut out = format!("total {}\n", total);
    for entry in entries {
        out.push_str(&format!(
            "{} {:>3} {:<8} {:<8} {:>8} {} {}\n",
            permissions(entry),
            1,
            owner,
            owner,
            entry.size,
            format_timestamp(entry.modified_secs),
            paint_name(entry, painter),
        ));
    }
    out
}

/// Column layout: row-major grid over a fixed 80-column terminal, cells
/// padded to the widest plain name.
pub(super) fn render_columns(entries: &[Entry], painter: &Painter) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let width = entries.iter().map(display_width).max().unwrap_or(0) + 2;
    let columns = std::cmp::max(1, TERMINAL_WIDTH / width);

    let mut out = String::new();
    let mut count = 0;
    for entry in entries {
        out.push_str(&paint_name(entry, painter));
        count += 1;

        if count % columns == 0 {
            out.push('\n');
        } else {
            out.push_str(&" ".repeat(width - display_width(entry)));
        }
    }

    if count % columns != 0 {
        out.push('\n');
    }
    out
}

/// Plain cell width: the name plus one for a directory's trailing `/`.
fn display_width(entry: &Entry) -> usize {
    let marker = match classify(entry) {
        FileStyle::Directory => 1,
        _ => 0,
    };
    entry.name.chars().count() + marker
}

/// 10-character permission string: type flag then rwx triplets for
/// owner, group, other.
fn permissions(entry: &Entry) -> String {
    let type_flag = match entry.kind {
        EntryKind::Directory => 'd',
        EntryKind::Symlink => 'l',
        _ => '-',
    };

    let mut perms = String::with_capacity(10);
    perms.push(type_flag);
    for shift in [6u32, 3, 0] {
        let bits = (entry.mode >> shift) & 0o7;
        perms.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        perms.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        perms.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    perms
}

fn owner_name() -> String {
    env::var("USER")
        .or_else(|_| env::var("LOGNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Short `Mon dd HH:MM` form of a unix timestamp (UTC).
fn format_timestamp(secs: u64) -> String {
    let (_, month, day) = civil_from_days((secs / 86_400) as i64);
    let rem = secs % 86_400;
    format!(
        "{} {:02} {:02}:{:02}",
        MONTHS[month as usize - 1],
        day,
        rem / 3_600,
        (rem % 3_600) / 60
    )
}

/// Gregorian date from days since the unix epoch.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, size: u64, kind: EntryKind, mode: u32) -> Entry {
        Entry {
            name: name.to_string(),
            kind,
            size,
            modified_secs: 0,
            mode,
            executable: matches!(kind, EntryKind::File) && mode & 0o111 != 0,
        }
    }

    #[test]
    fn test_permission_string() {
        let file = entry("a", 0, EntryKind::File, 0o644);
        assert_eq!(permissions(&file), "-rw-r--r--");

        let dir = entry("d", 0, EntryKind::Directory, 0o755);
        assert_eq!(permissions(&dir), "drwxr-xr-x");

        let link = entry("l", 0, EntryKind::Symlink, 0o777);
        assert_eq!(permissions(&link), "lrwxrwxrwx");
    }

    #[test]
    fn test_timestamp_epoch() {
        assert_eq!(format_timestamp(0), "Jan 01 00:00");
    }

    #[test]
    fn test_timestamp_rollover() {
        // 31 days after the epoch, ten past noon.
        let secs = 31 * 86_400 + 12 * 3_600 + 10 * 60;
        assert_eq!(format_timestamp(secs), "Feb 01 12:10");
    }

    #[test]
    fn test_civil_from_days_leap_year() {
        // 2020-02-29 is day 18321 since the epoch.
        assert_eq!(civil_from_days(18_321), (2020, 2, 29));
    }

    #[test]
    fn test_columns_wrap_at_terminal_width() {
        let entries: Vec<Entry> = (0..10)
            .map(|i| entry(&format!("file-{:02}", i), 0, EntryKind::File, 0o644))
            .collect();

        // Width 7 names pad to 9-char cells, so 8 columns fit in 80.
        let painter = Painter::plain();
        let output = render_columns(&entries, &painter);
        let rows: Vec<&str> = output.lines().collect();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("file-00"));
        assert!(rows[0].contains("file-07"));
        assert!(rows[1].starts_with("file-08"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_single_column_for_very_wide_names() {
        let wide = "w".repeat(100);
        let entries = vec![
            entry(&wide, 0, EntryKind::File, 0o644),
            entry("short", 0, EntryKind::File, 0o644),
        ];

        let painter = Painter::plain();
        let output = render_columns(&entries, &painter);
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_long_format_empty_listing_still_has_total() {
        let painter = Painter::plain();
        assert_eq!(render_long(&[], &painter), "total 0\n");
    }
}
