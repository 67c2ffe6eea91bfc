pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod history;
pub mod listing;
pub mod parser;
pub mod path;
pub mod process;
pub mod style;
