//! Template renderers.

pub mod react;

pub use react::ReactRenderer;
