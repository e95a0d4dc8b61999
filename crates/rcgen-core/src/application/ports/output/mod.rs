//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `rcgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ArtifactKind, RenderContext};
use crate::error::RcgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `rcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `rcgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> RcgenResult<()>;

    /// Create a single directory. Fails if it already exists or the parent
    /// is missing.
    fn create_dir(&self, path: &Path) -> RcgenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> RcgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `rcgen_adapters::renderer::ReactRenderer` (React + Storybook + Testing Library)
pub trait TemplateRenderer: Send + Sync {
    /// Produce the full text of one artifact. Must be pure.
    fn render(&self, kind: ArtifactKind, context: &RenderContext) -> String;
}
