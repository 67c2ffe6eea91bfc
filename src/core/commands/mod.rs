use std::collections::BTreeMap;

mod builtin;
mod cd;
mod history;
mod ls;

pub use builtin::{ClearCommand, ExitCommand, HelpCommand, PwdCommand};
pub use cd::CdCommand;
pub use history::HistoryCommand;
pub use ls::LsCommand;

use crate::core::navigator::NavigatorError;
use crate::core::session::Session;
use crate::history::HistoryError;
use crate::listing::ListError;
use crate::style::Painter;

#[derive(Debug)]
pub enum CommandError {
    Navigation(NavigatorError),
    Listing(ListError),
    History(HistoryError),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Navigation(err) => write!(f, "cd: {}", err),
            CommandError::Listing(err) => write!(f, "ls: {}", err),
            CommandError::History(err) => write!(f, "history: {}", err),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<NavigatorError> for CommandError {
    fn from(err: NavigatorError) -> Self {
        CommandError::Navigation(err)
    }
}

impl From<ListError> for CommandError {
    fn from(err: ListError) -> Self {
        CommandError::Listing(err)
    }
}

impl From<HistoryError> for CommandError {
    fn from(err: HistoryError) -> Self {
        CommandError::History(err)
    }
}

/// A command handled inside the shell process. Handlers borrow the
/// session mutably; their failures travel through the returned `Result`,
/// never through the dispatch decision itself.
pub trait Builtin {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Cd(CdCommand),
    Pwd(PwdCommand),
    Ls(LsCommand),
    History(HistoryCommand),
    Clear(ClearCommand),
    Help(HelpCommand),
}

impl Builtin for CommandType {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(session, args),
            CommandType::Cd(cmd) => cmd.execute(session, args),
            CommandType::Pwd(cmd) => cmd.execute(session, args),
            CommandType::Ls(cmd) => cmd.execute(session, args),
            CommandType::History(cmd) => cmd.execute(session, args),
            CommandType::Clear(cmd) => cmd.execute(session, args),
            CommandType::Help(cmd) => cmd.execute(session, args),
        }
    }
}

/// Maps built-in names to their handlers. A miss means the line falls
/// through to external execution.
#[derive(Clone)]
pub struct Dispatcher {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Dispatcher {
    pub fn new(painter: Painter) -> Self {
        let mut commands = BTreeMap::new();

        commands.insert("exit", CommandType::Exit(ExitCommand::new(painter)));
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("pwd", CommandType::Pwd(PwdCommand::new(painter)));
        commands.insert("ls", CommandType::Ls(LsCommand::new(painter)));
        commands.insert("history", CommandType::History(HistoryCommand::new()));
        commands.insert("clear", CommandType::Clear(ClearCommand::new()));
        commands.insert("help", CommandType::Help(HelpCommand::new(painter)));

        Dispatcher { commands }
    }

    /// `None` signals "not a built-in": the caller should execute the
    /// line externally.
    pub fn dispatch(
        &self,
        session: &mut Session,
        name: &str,
        args: &[String],
    ) -> Option<Result<(), CommandError>> {
        self.commands.get(name).map(|cmd| cmd.execute(session, args))
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigator::Navigator;
    use crate::history::History;
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_session() -> (Session, PathBuf) {
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = env::temp_dir().join(format!("reef-dispatch-{}-{}", std::process::id(), id));
        fs::create_dir_all(&dir).unwrap();

        let history = History::new(dir.join("history"));
        let session = Session::new(Navigator::new().unwrap(), history);
        (session, dir.canonicalize().unwrap())
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_detection() {
        let dispatcher = Dispatcher::new(Painter::plain());
        for name in ["exit", "cd", "pwd", "ls", "history", "clear", "help"] {
            assert!(dispatcher.is_builtin(name), "{} should be a builtin", name);
        }
        assert!(!dispatcher.is_builtin("grep"));
        assert!(!dispatcher.is_builtin(""));
    }

    #[test]
    fn test_unknown_command_falls_through() {
        let dispatcher = Dispatcher::new(Painter::plain());
        let (mut session, _) = scratch_session();
        assert!(dispatcher
            .dispatch(&mut session, "not-a-builtin", &[])
            .is_none());
    }

    #[test]
    fn test_cd_moves_the_session() {
        let dispatcher = Dispatcher::new(Painter::plain());
        let (mut session, dir) = scratch_session();

        let result = dispatcher
            .dispatch(&mut session, "cd", &args(&[dir.to_str().unwrap()]))
            .expect("cd is a builtin");
        assert!(result.is_ok());
        assert_eq!(session.navigator.current(), dir.as_path());
    }

    #[test]
    fn test_cd_failure_is_handled_not_fallthrough() {
        let dispatcher = Dispatcher::new(Painter::plain());
        let (mut session, _) = scratch_session();

        let result = dispatcher
            .dispatch(&mut session, "cd", &args(&["/no/such/dir"]))
            .expect("cd is a builtin");
        assert!(matches!(result, Err(CommandError::Navigation(_))));
    }

    #[test]
    fn test_ls_reports_missing_target() {
        let dispatcher = Dispatcher::new(Painter::plain());
        let (mut session, dir) = scratch_session();
        session.navigator.change(dir.to_str()).unwrap();

        let result = dispatcher
            .dispatch(&mut session, "ls", &args(&["missing"]))
            .expect("ls is a builtin");
        assert!(matches!(result, Err(CommandError::Listing(_))));
    }

    #[test]
    fn test_history_builtin_reads_the_log() {
        let dispatcher = Dispatcher::new(Painter::plain());
        let (mut session, _) = scratch_session();
        session.history.save("ls -la").unwrap();

        let result = dispatcher
            .dispatch(&mut session, "history", &[])
            .expect("history is a builtin");
        assert!(result.is_ok());
    }
}
