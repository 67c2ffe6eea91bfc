use crate::core::navigator::Navigator;
use crate::history::History;

/// Per-process shell state: the working-directory machine and the
/// command log. Owned by the shell and lent mutably to built-ins.
pub struct Session {
    pub navigator: Navigator,
    pub history: History,
}

impl Session {
    pub fn new(navigator: Navigator, history: History) -> Self {
        Session { navigator, history }
    }
}
