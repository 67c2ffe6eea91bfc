//! The small built-ins: `exit`, `pwd`, `clear`, and `help`.

use std::io::{self, Write};

use super::{Builtin, CommandError};
use crate::core::session::Session;
use crate::style::Painter;

const HELP_WIDTH: usize = 44;

const HELP_LINES: [&str; 8] = [
    "  ls [-la]   - List files",
    "  cd [dir]   - Change directory",
    "  cd -       - Go to previous directory",
    "  pwd        - Print working directory",
    "  history    - Show command history",
    "  clear      - Clear the screen",
    "  help       - Show this help",
    "  exit       - Exit the shell",
];

#[derive(Clone)]
pub struct ExitCommand {
    painter: Painter,
}

impl ExitCommand {
    pub fn new(painter: Painter) -> Self {
        Self { painter }
    }
}

impl Builtin for ExitCommand {
    fn execute(&self, _session: &mut Session, _args: &[String]) -> Result<(), CommandError> {
        println!("{}", self.painter.warning("Leaving reef... Goodbye!"));
        std::process::exit(0);
    }
}

#[derive(Clone)]
pub struct PwdCommand {
    painter: Painter,
}

impl PwdCommand {
    pub fn new(painter: Painter) -> Self {
        Self { painter }
    }
}

impl Builtin for PwdCommand {
    fn execute(&self, session: &mut Session, _args: &[String]) -> Result<(), CommandError> {
        let current = session.navigator.current().display().to_string();
        println!("{}", self.painter.info(&current));
        Ok(())
    }
}

#[derive(Clone)]
pub struct ClearCommand;

impl Default for ClearCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for ClearCommand {
    fn execute(&self, _session: &mut Session, _args: &[String]) -> Result<(), CommandError> {
        // Cursor home, then clear the screen.
        print!("\x1b[H\x1b[2J");
        io::stdout().flush()?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct HelpCommand {
    painter: Painter,
}

impl HelpCommand {
    pub fn new(painter: Painter) -> Self {
        Self { painter }
    }
}

impl Builtin for HelpCommand {
    fn execute(&self, _session: &mut Session, _args: &[String]) -> Result<(), CommandError> {
        let bar = "═".repeat(HELP_WIDTH);
        println!("{}", self.painter.heading(&format!("╔{}╗", bar)));
        println!(
            "{}",
            self.painter
                .heading(&format!("║{:^width$}║", "reef - Builtin Commands", width = HELP_WIDTH))
        );
        println!("{}", self.painter.heading(&format!("╠{}╣", bar)));
        for line in HELP_LINES {
            println!("║{:<width$}║", line, width = HELP_WIDTH);
        }
        println!("{}", self.painter.heading(&format!("╚{}╝", bar)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigator::Navigator;
    use crate::history::History;
    use std::env;

    fn scratch_session() -> Session {
        Session::new(
            Navigator::new().unwrap(),
            History::new(env::temp_dir().join(format!("reef-builtin-{}", std::process::id()))),
        )
    }

    #[test]
    fn test_pwd_and_help_and_clear_succeed() {
        let mut session = scratch_session();
        let painter = Painter::plain();

        assert!(PwdCommand::new(painter).execute(&mut session, &[]).is_ok());
        assert!(HelpCommand::new(painter).execute(&mut session, &[]).is_ok());
        assert!(ClearCommand::new().execute(&mut session, &[]).is_ok());
    }
}
