//! Application ports (traits) for external dependencies.
//!
//! Ports define the interfaces the application needs from the outside world.
//! Adapters in `rcgen-adapters` implement these.
//!
//! - `Filesystem`: directory and file operations
//! - `TemplateRenderer`: artifact text generation

pub mod output;

pub use output::{Filesystem, TemplateRenderer};

#[cfg(test)]
pub use output::MockFilesystem;
