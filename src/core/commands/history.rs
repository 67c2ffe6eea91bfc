use super::{Builtin, CommandError};
use crate::core::session::Session;

#[derive(Clone)]
pub struct HistoryCommand;

impl Default for HistoryCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for HistoryCommand {
    fn execute(&self, session: &mut Session, _args: &[String]) -> Result<(), CommandError> {
        for line in session.history.recent()? {
            println!("  {}  {}", line.index, line.command);
        }
        Ok(())
    }
}
