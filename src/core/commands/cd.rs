use super::{Builtin, CommandError};
use crate::core::navigator::CdOutcome;
use crate::core::session::Session;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for CdCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let target = args.first().map(String::as_str);
        match session.navigator.change(target)? {
            // `cd -` echoes where it landed.
            CdOutcome::ReturnedTo(path) => println!("{}", path.display()),
            CdOutcome::Entered => {}
        }
        Ok(())
    }
}
