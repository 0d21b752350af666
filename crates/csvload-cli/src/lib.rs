pub mod cli;
pub mod commands;
pub mod exit;
pub mod logging;
pub mod summary;
