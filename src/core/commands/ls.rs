use std::io::{self, Write};

use super::{Builtin, CommandError};
use crate::core::session::Session;
use crate::listing::{self, ListOptions};
use crate::style::Painter;

#[derive(Clone)]
pub struct LsCommand {
    painter: Painter,
}

impl LsCommand {
    pub fn new(painter: Painter) -> Self {
        Self { painter }
    }
}

impl Builtin for LsCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let options = ListOptions::parse(args);
        let output = listing::list(session.navigator.current(), &options, &self.painter)?;
        print!("{}", output);
        io::stdout().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigator::Navigator;
    use crate::history::History;
    use std::env;
    use std::fs;

    #[test]
    fn test_ls_current_directory_succeeds() {
        let dir = env::temp_dir().join(format!("reef-lscmd-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("a.txt"), "x").unwrap();

        let mut session = Session::new(
            Navigator::new().unwrap(),
            History::new(dir.join("history")),
        );
        session.navigator.change(dir.to_str()).unwrap();

        let cmd = LsCommand::new(Painter::plain());
        assert!(cmd.execute(&mut session, &[]).is_ok());
        assert!(cmd.execute(&mut session, &["-al".to_string()]).is_ok());
    }
}
