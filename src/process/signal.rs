use crate::process::ProcessError;

use libc::{signal, sighandler_t, SIGINT};

extern "C" fn ignore_sigint(_: i32) {
    // The foreground child receives the terminal's SIGINT directly; the
    // shell itself stays alive.
}

pub fn route_sigint_to_child() -> Result<(), ProcessError> {
    unsafe {
        signal(SIGINT, ignore_sigint as sighandler_t);
    }
    Ok(())
}
