//! rcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the rcgen
//! component scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            rcgen-cli (CLI)              │
//! │   (.rcconfig loading, flags, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Filesystem, TemplateRenderer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     rcgen-adapters (Infrastructure)     │
//! │ (LocalFilesystem, ReactRenderer, etc.)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (RcConfig, ComponentName, ScaffoldPlan) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rcgen_core::prelude::*;
//!
//! let config: RcConfig = "root=src/components".parse()?;
//! let request = ScaffoldRequest::from_config(
//!     Level::new(2),
//!     ComponentName::new("Badge")?,
//!     &config,
//! );
//!
//! let service = ScaffoldService::new(renderer, filesystem);
//! service.scaffold(&request)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EntryStatus, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        ArtifactKind, ComponentName, Level, RcConfig, RenderContext, ScaffoldRequest,
    };
    pub use crate::error::{RcgenError, RcgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
