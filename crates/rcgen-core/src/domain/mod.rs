// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for rcgen.
//!
//! This module contains pure logic with no I/O. Reading the config file,
//! touching the filesystem and rendering template text are handled via ports
//! (traits) defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: paths are computed, never visited
//! - **Immutable values**: everything here is Clone + PartialEq
pub mod component;
pub mod config;
pub mod error;
pub mod layout;
pub mod plan;
pub mod request;

// Re-exports for convenience
pub use component::{
    ArtifactKind, ComponentName, DEFAULT_COMPONENT_NAME, Level, RenderContext,
};
pub use config::RcConfig;
pub use error::{DomainError, ErrorCategory};
pub use layout::{ScaffoldLayout, normalize_root};
pub use plan::{EntryKind, ScaffoldPlan, ScaffoldStep};
pub use request::ScaffoldRequest;
