pub mod commands;
pub mod navigator;
pub mod session;
