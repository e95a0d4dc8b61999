use crate::domain::{
    component::{ComponentName, Level},
    config::RcConfig,
};

/// One invocation's worth of input: which component to create, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    level: Level,
    name: ComponentName,
    root: String,
}

impl ScaffoldRequest {
    pub fn new(level: Level, name: ComponentName, root: impl Into<String>) -> Self {
        Self {
            level,
            name,
            root: root.into(),
        }
    }

    /// Build a request rooted at the folder named in `config`.
    pub fn from_config(level: Level, name: ComponentName, config: &RcConfig) -> Self {
        Self::new(level, name, config.root())
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn name(&self) -> &ComponentName {
        &self.name
    }

    /// Root path as configured (not yet normalised).
    pub fn root(&self) -> &str {
        &self.root
    }
}
