use std::path::{Path, PathBuf};

use crate::domain::{
    component::{ArtifactKind, ComponentName},
    request::ScaffoldRequest,
};

/// Name of the shared helpers folder under the root.
pub const UTILS_DIR: &str = "utils";

/// Every path a scaffold request touches, computed up front.
///
/// ```text
/// <root>/
///   index.ts
///   utils/cn.ts
///   L<level>/
///     index.ts
///     <Name>/{<Name>.tsx, <Name>.stories.tsx, <Name>.test.tsx, index.ts}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldLayout {
    name: ComponentName,
    root: PathBuf,
    utils_dir: PathBuf,
    level_dir: PathBuf,
    component_dir: PathBuf,
}

impl ScaffoldLayout {
    pub fn new(request: &ScaffoldRequest) -> Self {
        let root = PathBuf::from(normalize_root(request.root()));
        let utils_dir = root.join(UTILS_DIR);
        let level_dir = root.join(request.level().dir_name());
        let component_dir = level_dir.join(request.name().as_str());

        Self {
            name: request.name().clone(),
            root,
            utils_dir,
            level_dir,
            component_dir,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn utils_dir(&self) -> &Path {
        &self.utils_dir
    }

    pub fn level_dir(&self) -> &Path {
        &self.level_dir
    }

    pub fn component_dir(&self) -> &Path {
        &self.component_dir
    }

    /// Where a given artifact lives for this request.
    pub fn artifact_path(&self, kind: ArtifactKind) -> PathBuf {
        let dir = match kind {
            ArtifactKind::RootIndex => &self.root,
            ArtifactKind::SharedUtil => &self.utils_dir,
            ArtifactKind::LevelIndex => &self.level_dir,
            ArtifactKind::Component
            | ArtifactKind::Story
            | ArtifactKind::Test
            | ArtifactKind::FolderIndex => &self.component_dir,
        };
        dir.join(kind.file_name(&self.name))
    }
}

/// Strip leading and trailing `/` from a configured root.
///
/// Absolute roots therefore resolve relative to the working directory.
pub fn normalize_root(root: &str) -> &str {
    root.trim_matches('/')
}
