use std::path::Path;

use rustyline::DefaultEditor;

mod executor;

use crate::{
    core::{commands::Dispatcher, navigator::Navigator, session::Session},
    error::ShellError,
    flags::Flags,
    history::History,
    process::ProcessRunner,
    style::Painter,
};

use executor::CommandHandler;

pub struct Shell {
    editor: DefaultEditor,
    session: Session,
    dispatcher: Dispatcher,
    runner: ProcessRunner,
    painter: Painter,
    flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let editor = DefaultEditor::new()?;
        let painter = Painter::new();
        let navigator = Navigator::new()?;

        let history_file = dirs::home_dir()
            .ok_or(ShellError::HomeDirNotFound)?
            .join(".reef_history");
        let history = History::new(history_file);
        if let Err(e) = history.ensure_file() {
            if !flags.is_set("quiet") {
                eprintln!("Warning: Couldn't create history file: {}", e);
            }
        }

        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to exit the shell");
        })?;

        let dispatcher = Dispatcher::new(painter);
        let runner = ProcessRunner::new(&flags, painter);

        Ok(Shell {
            editor,
            session: Session::new(navigator, history),
            dispatcher,
            runner,
            painter,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        if !self.flags.is_set("quiet") {
                            eprintln!("Warning: Couldn't add to history: {}", e);
                        }
                    }

                    if let Err(e) = self.execute_line(&line) {
                        eprintln!("{}", self.painter.error(&e.to_string()));
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("CTRL-C");
                    }
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(e) => {
                    // Input stream is gone; nothing left to read.
                    eprintln!("{}", self.painter.error(&format!("Error: {}", e)));
                    break;
                }
            }
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        let dir = abbreviate_home(self.session.navigator.current());
        format!(
            "{}{}",
            self.painter.prompt_path(&dir),
            self.painter.prompt_marker(" reef> ")
        )
    }
}

/// Replaces the home-directory prefix with `~` for prompt display.
fn abbreviate_home(current: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rest) = current.strip_prefix(&home) {
            return if rest.as_os_str().is_empty() {
                "~".to_string()
            } else {
                format!("~/{}", rest.display())
            };
        }
    }
    current.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_abbreviate_home_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(abbreviate_home(&home), "~");
            assert_eq!(abbreviate_home(&home.join("work")), "~/work");
        }
    }

    #[test]
    fn test_abbreviate_leaves_outside_paths() {
        assert_eq!(abbreviate_home(&PathBuf::from("/")), "/");
    }
}
