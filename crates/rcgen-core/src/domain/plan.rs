use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    component::{ArtifactKind, RenderContext},
    layout::ScaffoldLayout,
    request::ScaffoldRequest,
};

/// Ordered list of filesystem steps for one scaffold request.
///
/// This is pure data: both the real run and the dry run walk the same steps,
/// so they cannot disagree about what gets created.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    context: RenderContext,
    steps: Vec<ScaffoldStep>,
}

/// One step of a [`ScaffoldPlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldStep {
    /// Create the directory (and parents) unless it exists.
    EnsureDirectory(PathBuf),
    /// Write the file unless it exists. Never overwrites.
    EnsureFile { path: PathBuf, kind: ArtifactKind },
    /// Create the directory; fail if it already exists.
    CreateComponentDirectory(PathBuf),
    /// Write the file into a directory created by this run.
    WriteFile { path: PathBuf, kind: ArtifactKind },
}

/// Whether a plan entry is a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

impl ScaffoldPlan {
    pub fn for_request(request: &ScaffoldRequest) -> Self {
        let layout = ScaffoldLayout::new(request);

        let mut steps = vec![
            ScaffoldStep::EnsureDirectory(layout.utils_dir().to_path_buf()),
            ScaffoldStep::EnsureFile {
                path: layout.artifact_path(ArtifactKind::SharedUtil),
                kind: ArtifactKind::SharedUtil,
            },
            ScaffoldStep::EnsureFile {
                path: layout.artifact_path(ArtifactKind::RootIndex),
                kind: ArtifactKind::RootIndex,
            },
            ScaffoldStep::EnsureDirectory(layout.level_dir().to_path_buf()),
            ScaffoldStep::CreateComponentDirectory(layout.component_dir().to_path_buf()),
        ];

        steps.extend(
            ArtifactKind::COMPONENT_FILES
                .iter()
                .map(|&kind| ScaffoldStep::WriteFile {
                    path: layout.artifact_path(kind),
                    kind,
                }),
        );

        steps.push(ScaffoldStep::EnsureFile {
            path: layout.artifact_path(ArtifactKind::LevelIndex),
            kind: ArtifactKind::LevelIndex,
        });

        Self {
            context: RenderContext::new(request.name()),
            steps,
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn steps(&self) -> &[ScaffoldStep] {
        &self.steps
    }
}

impl ScaffoldStep {
    pub fn path(&self) -> &Path {
        match self {
            Self::EnsureDirectory(path) | Self::CreateComponentDirectory(path) => path,
            Self::EnsureFile { path, .. } | Self::WriteFile { path, .. } => path,
        }
    }

    pub fn entry_kind(&self) -> EntryKind {
        match self {
            Self::EnsureDirectory(_) | Self::CreateComponentDirectory(_) => EntryKind::Directory,
            Self::EnsureFile { .. } | Self::WriteFile { .. } => EntryKind::File,
        }
    }

    /// The artifact rendered by this step, if it writes a file.
    pub fn artifact(&self) -> Option<ArtifactKind> {
        match self {
            Self::EnsureFile { kind, .. } | Self::WriteFile { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
