use crate::error::ShellError;
use std::path::{Path, PathBuf};

pub fn home_dir() -> Result<PathBuf, ShellError> {
    dirs::home_dir().ok_or(ShellError::HomeDirNotFound)
}

/// Expands a leading `~` to the user's home directory. `~user` forms are
/// not handled and pass through unchanged.
pub fn expand_tilde(path: &str) -> Result<PathBuf, ShellError> {
    if !path.starts_with('~') {
        return Ok(Path::new(path).to_path_buf());
    }

    if path.len() == 1 {
        return home_dir();
    }

    match path[1..].strip_prefix('/') {
        Some(rest) => {
            let mut expanded = home_dir()?;
            for part in rest.split('/') {
                if !part.is_empty() {
                    expanded.push(part);
                }
            }
            Ok(expanded)
        }
        None => Ok(Path::new(path).to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_unchanged() {
        assert_eq!(expand_tilde("/tmp/x").unwrap(), PathBuf::from("/tmp/x"));
        assert_eq!(expand_tilde("rel/x").unwrap(), PathBuf::from("rel/x"));
    }

    #[test]
    fn test_bare_tilde_is_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde("~").unwrap(), home);
    }

    #[test]
    fn test_tilde_slash_joins_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde("~/a/b").unwrap(), home.join("a").join("b"));
    }

    #[test]
    fn test_tilde_user_passes_through() {
        assert_eq!(
            expand_tilde("~other/x").unwrap(),
            PathBuf::from("~other/x")
        );
    }
}
