//! Application layer for rcgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Report**: What a scaffold run did, for display
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! parsing or path logic itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod report;
pub mod services;

pub use services::ScaffoldService;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer};

pub use error::ApplicationError;
pub use report::{EntryStatus, ReportEntry, ScaffoldReport};
