use crate::error::ShellError;
use crate::parser::ParsedCommand;

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &str) -> Result<(), ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_line(&mut self, line: &str) -> Result<(), ShellError> {
        let line = line.trim();

        let parsed = match ParsedCommand::parse(line) {
            Some(parsed) => parsed,
            None => return Ok(()),
        };

        // Every non-empty line is logged, built-in or not; the history
        // builtin filters its own noise at display time.
        if let Err(e) = self.session.history.save(line) {
            if !self.flags.is_set("quiet") {
                eprintln!("Warning: Failed to save command to history: {}", e);
            }
        }

        match self
            .dispatcher
            .dispatch(&mut self.session, parsed.name(), parsed.arguments())
        {
            Some(result) => result.map_err(ShellError::from),
            None => self
                .runner
                .run(parsed.parts(), self.session.navigator.current())
                .map_err(ShellError::from),
        }
    }
}
