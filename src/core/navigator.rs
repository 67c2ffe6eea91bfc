use std::env;
use std::fmt;
use std::io;
use std::mem;
use std::path::{Path, PathBuf};

use crate::path::expand_tilde;

#[derive(Debug)]
pub enum NavigatorError {
    NoSuchDirectory(String),
    NotADirectory(String),
    AlreadyAtRoot,
    HomeDirNotFound,
    Io(io::Error),
}

impl fmt::Display for NavigatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigatorError::NoSuchDirectory(path) => write!(f, "{}: No such directory", path),
            NavigatorError::NotADirectory(path) => write!(f, "{}: Not a directory", path),
            NavigatorError::AlreadyAtRoot => write!(f, "Already at root directory"),
            NavigatorError::HomeDirNotFound => write!(f, "Home directory not found"),
            NavigatorError::Io(e) => write!(f, "Failed to access directory: {}", e),
        }
    }
}

/// Outcome of a successful `cd`. `ReturnedTo` carries the new current
/// directory so the caller can echo it, matching `cd -` behavior.
#[derive(Debug, PartialEq, Eq)]
pub enum CdOutcome {
    Entered,
    ReturnedTo(PathBuf),
}

/// Working-directory state machine. The shell process never changes its
/// own cwd; `current` is what listings and spawned children use.
///
/// `current` is always absolute and canonical once construction succeeds.
#[derive(Debug)]
pub struct Navigator {
    current: PathBuf,
    previous: PathBuf,
}

impl Navigator {
    pub fn new() -> io::Result<Self> {
        let current = env::current_dir()?.canonicalize()?;
        let previous = current.clone();
        Ok(Navigator { current, previous })
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn change(&mut self, arg: Option<&str>) -> Result<CdOutcome, NavigatorError> {
        match arg {
            // Unconditional swap, no filesystem check: the old previous
            // becomes current even if it no longer exists.
            Some("-") => {
                mem::swap(&mut self.current, &mut self.previous);
                Ok(CdOutcome::ReturnedTo(self.current.clone()))
            }
            Some("..") => match self.current.parent() {
                Some(parent) => {
                    let parent = parent.to_path_buf();
                    self.previous = mem::replace(&mut self.current, parent);
                    Ok(CdOutcome::Entered)
                }
                None => Err(NavigatorError::AlreadyAtRoot),
            },
            None | Some("~") => {
                let home = dirs::home_dir().ok_or(NavigatorError::HomeDirNotFound)?;
                self.enter(home, "~")
            }
            Some(target) => {
                let resolved = self.resolve(target)?;
                self.enter(resolved, target)
            }
        }
    }

    fn resolve(&self, target: &str) -> Result<PathBuf, NavigatorError> {
        let path = Path::new(target);
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else if target.starts_with('~') {
            expand_tilde(target).map_err(|_| NavigatorError::HomeDirNotFound)
        } else {
            Ok(self.current.join(target))
        }
    }

    fn enter(&mut self, target: PathBuf, display: &str) -> Result<CdOutcome, NavigatorError> {
        if !target.exists() {
            return Err(NavigatorError::NoSuchDirectory(display.to_string()));
        }
        if !target.is_dir() {
            return Err(NavigatorError::NotADirectory(display.to_string()));
        }

        let canonical = target.canonicalize().map_err(NavigatorError::Io)?;
        self.previous = mem::replace(&mut self.current, canonical);
        Ok(CdOutcome::Entered)
    }
}
