use std::{
    fmt,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::PathBuf,
};

/// Once the file holds more than this many lines, the next save trims it.
pub const MAX_LINES: usize = 20;
/// Trim target, kept below `MAX_LINES` so trimming stays infrequent.
pub const TRIM_TO: usize = 15;
/// How many entries `recent` hands back for display.
pub const DISPLAY_LIMIT: usize = 10;

#[derive(Debug)]
pub enum HistoryError {
    Io(io::Error),
}

impl From<io::Error> for HistoryError {
    fn from(err: io::Error) -> Self {
        HistoryError::Io(err)
    }
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "history file error: {}", e),
        }
    }
}

/// One displayable history line. `index` is the 1-based position in the
/// full file, not the display position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLine {
    pub index: usize,
    pub command: String,
}

/// Append-only command log backed by a plain-text file, one command per
/// line. The file is opened and closed per call; no handle is held.
pub struct History {
    file_path: PathBuf,
}

impl History {
    pub fn new(file_path: PathBuf) -> Self {
        History { file_path }
    }

    /// Creates the backing file if it does not exist yet. Returns whether
    /// a new file was created.
    pub fn ensure_file(&self) -> Result<bool, HistoryError> {
        if self.file_path.exists() {
            return Ok(false);
        }
        File::create(&self.file_path)?;
        Ok(true)
    }

    /// Trims the log down to `TRIM_TO` lines when it has grown past
    /// `MAX_LINES`, then appends the command. Oldest entries drop first.
    pub fn save(&self, command: &str) -> Result<(), HistoryError> {
        self.trim_if_needed()?;

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)?;
        writeln!(file, "{}", command)?;
        Ok(())
    }

    /// The most recent `DISPLAY_LIMIT` entries, skipping bare `clear` and
    /// `history` invocations. Indices keep their original file positions.
    pub fn recent(&self) -> Result<Vec<HistoryLine>, HistoryError> {
        let lines = self.read_lines()?;
        let start = lines.len().saturating_sub(DISPLAY_LIMIT);

        Ok(lines
            .into_iter()
            .enumerate()
            .skip(start)
            .filter(|(_, line)| line != "clear" && line != "history")
            .map(|(i, command)| HistoryLine {
                index: i + 1,
                command,
            })
            .collect())
    }

    fn trim_if_needed(&self) -> Result<(), HistoryError> {
        let lines = self.read_lines()?;
        if lines.len() <= MAX_LINES {
            return Ok(());
        }

        let keep = &lines[lines.len() - TRIM_TO..];
        let mut contents = keep.join("\n");
        contents.push('\n');
        fs::write(&self.file_path, contents)?;
        Ok(())
    }

    fn read_lines(&self) -> Result<Vec<String>, HistoryError> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.file_path)?;
        Ok(contents.lines().map(str::to_owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_history(name: &str) -> History {
        let path = env::temp_dir().join(format!(
            "reef-hist-{}-{}-{}",
            name,
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        let _ = fs::remove_file(&path);
        History::new(path)
    }

    fn file_lines(history: &History) -> Vec<String> {
        history.read_lines().unwrap()
    }

    #[test]
    fn test_ensure_file_creates_once() {
        let history = scratch_history("ensure");
        assert!(history.ensure_file().unwrap());
        assert!(!history.ensure_file().unwrap());
    }

    #[test]
    fn test_save_appends_in_order() {
        let history = scratch_history("append");
        history.save("first").unwrap();
        history.save("second").unwrap();
        assert_eq!(file_lines(&history), ["first", "second"]);
    }

    #[test]
    fn test_trim_keeps_most_recent_lines() {
        let history = scratch_history("trim");

        // Seed the file past MAX_LINES, then let a save trigger the trim.
        let seeded: Vec<String> = (1..=24).map(|i| format!("cmd{}", i)).collect();
        let mut contents = seeded.join("\n");
        contents.push('\n');
        fs::write(&history.file_path, contents).unwrap();

        history.save("cmd25").unwrap();

        let lines = file_lines(&history);
        assert_eq!(lines.len(), TRIM_TO + 1);
        assert_eq!(lines[0], "cmd10");
        assert_eq!(lines[TRIM_TO - 1], "cmd24");
        assert_eq!(lines[TRIM_TO], "cmd25");
    }

    #[test]
    fn test_no_trim_below_threshold() {
        let history = scratch_history("below");
        for i in 1..=MAX_LINES {
            history.save(&format!("cmd{}", i)).unwrap();
        }
        assert_eq!(file_lines(&history).len(), MAX_LINES);
    }

    #[test]
    fn test_recent_skips_clear_and_history() {
        let history = scratch_history("skip");
        for command in ["ls", "clear", "cd /tmp", "history", "pwd"] {
            history.save(command).unwrap();
        }

        let shown = history.recent().unwrap();
        let expected = [(1, "ls"), (3, "cd /tmp"), (5, "pwd")];
        assert_eq!(shown.len(), expected.len());
        for (line, (index, command)) in shown.iter().zip(expected) {
            assert_eq!(line.index, index);
            assert_eq!(line.command, command);
        }
    }

    #[test]
    fn test_recent_limits_to_display_window() {
        let history = scratch_history("window");
        for i in 1..=15 {
            history.save(&format!("cmd{}", i)).unwrap();
        }

        let shown = history.recent().unwrap();
        assert_eq!(shown.len(), DISPLAY_LIMIT);
        assert_eq!(shown[0].index, 6);
        assert_eq!(shown[0].command, "cmd6");
    }
}
