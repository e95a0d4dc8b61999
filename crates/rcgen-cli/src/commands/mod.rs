//! Command handlers. Each module translates parsed arguments into calls on
//! the core and renders the outcome; no business logic lives here.

pub mod completions;
pub mod generate;
pub mod init;
