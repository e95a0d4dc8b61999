//! Infrastructure adapters for rcgen.
//!
//! This crate implements the ports defined in `rcgen-core::application::ports`.
//! It contains all I/O and the concrete component templates.

pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::ReactRenderer;
