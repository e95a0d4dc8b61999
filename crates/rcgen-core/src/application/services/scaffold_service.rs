//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Compute the plan for the request
//! 2. Walk it in order, rendering artifacts as needed
//! 3. Write to the filesystem, skipping shared files that already exist
//!
//! There is no rollback. Every step except the component-folder check is
//! idempotent, so re-running after a failure is safe.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
        report::{EntryStatus, ScaffoldReport},
    },
    domain::{ArtifactKind, RenderContext, ScaffoldPlan, ScaffoldRequest, ScaffoldStep},
    error::RcgenResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use rcgen_adapters::{LocalFilesystem, ReactRenderer};
    /// use rcgen_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     Box::new(ReactRenderer::new()),
    ///     Box::new(LocalFilesystem::new()),
    /// );
    /// ```
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Generate the component described by `request`.
    ///
    /// Fails with [`ApplicationError::ComponentExists`] if the component
    /// folder is already present; shared files created before that check are
    /// kept.
    #[instrument(
        skip_all,
        fields(
            level = %request.level(),
            component = %request.name(),
            root = %request.root()
        )
    )]
    pub fn scaffold(&self, request: &ScaffoldRequest) -> RcgenResult<ScaffoldReport> {
        let plan = ScaffoldPlan::for_request(request);
        let mut report = ScaffoldReport::new(false);

        for step in plan.steps() {
            let status = self.apply(step, plan.context())?;
            report.record(step, status);
        }

        info!(
            created = report.with_status(EntryStatus::Created).count(),
            "Scaffold completed"
        );
        Ok(report)
    }

    /// Preview what [`Self::scaffold`] would do, without writing anything.
    #[instrument(skip_all, fields(component = %request.name()))]
    pub fn plan(&self, request: &ScaffoldRequest) -> RcgenResult<ScaffoldReport> {
        let plan = ScaffoldPlan::for_request(request);
        let mut report = ScaffoldReport::new(true);

        for step in plan.steps() {
            let status = self.preview(step)?;
            report.record(step, status);
        }

        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn apply(&self, step: &ScaffoldStep, context: &RenderContext) -> RcgenResult<EntryStatus> {
        match step {
            ScaffoldStep::EnsureDirectory(path) => {
                if self.filesystem.exists(path) {
                    debug!(path = %path.display(), "directory exists");
                    return Ok(EntryStatus::Existing);
                }
                self.filesystem.create_dir_all(path)?;
                info!(path = %path.display(), "created directory");
                Ok(EntryStatus::Created)
            }
            ScaffoldStep::EnsureFile { path, kind } => {
                if self.filesystem.exists(path) {
                    debug!(path = %path.display(), "file exists, leaving untouched");
                    return Ok(EntryStatus::Existing);
                }
                self.write_artifact(path, *kind, context)?;
                Ok(EntryStatus::Created)
            }
            ScaffoldStep::CreateComponentDirectory(path) => {
                self.ensure_absent(path)?;
                self.filesystem.create_dir(path)?;
                info!(path = %path.display(), "created directory");
                Ok(EntryStatus::Created)
            }
            ScaffoldStep::WriteFile { path, kind } => {
                self.write_artifact(path, *kind, context)?;
                Ok(EntryStatus::Created)
            }
        }
    }

    fn preview(&self, step: &ScaffoldStep) -> RcgenResult<EntryStatus> {
        match step {
            ScaffoldStep::CreateComponentDirectory(path) => {
                self.ensure_absent(path)?;
                Ok(EntryStatus::WouldCreate)
            }
            ScaffoldStep::WriteFile { .. } => Ok(EntryStatus::WouldCreate),
            ScaffoldStep::EnsureDirectory(path) | ScaffoldStep::EnsureFile { path, .. } => {
                if self.filesystem.exists(path) {
                    Ok(EntryStatus::Existing)
                } else {
                    Ok(EntryStatus::WouldCreate)
                }
            }
        }
    }

    fn ensure_absent(&self, path: &Path) -> RcgenResult<()> {
        if self.filesystem.exists(path) {
            return Err(ApplicationError::ComponentExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    fn write_artifact(
        &self,
        path: &Path,
        kind: ArtifactKind,
        context: &RenderContext,
    ) -> RcgenResult<()> {
        let content = self.renderer.render(kind, context);
        self.filesystem.write_file(path, &content)?;
        info!(path = %path.display(), artifact = %kind, "created file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{
        application::ports::MockFilesystem,
        domain::{ComponentName, Level},
        error::RcgenError,
    };

    struct StubRenderer;

    impl TemplateRenderer for StubRenderer {
        fn render(&self, kind: ArtifactKind, context: &RenderContext) -> String {
            format!("{kind}:{}", context.component_name())
        }
    }

    fn badge_request() -> ScaffoldRequest {
        ScaffoldRequest::new(
            Level::new(2),
            ComponentName::new("Badge").unwrap(),
            "src/components",
        )
    }

    fn service(fs: MockFilesystem) -> ScaffoldService {
        ScaffoldService::new(Box::new(StubRenderer), Box::new(fs))
    }

    #[test]
    fn clean_tree_creates_every_entry() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().times(2).returning(|_| Ok(()));
        fs.expect_create_dir()
            .withf(|p| p == Path::new("src/components/L2/Badge"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file().times(7).returning(|_, _| Ok(()));

        let report = service(fs).scaffold(&badge_request()).unwrap();

        assert!(!report.dry_run);
        assert_eq!(report.entries.len(), 10);
        assert!(report.entries.iter().all(|e| e.status == EntryStatus::Created));
    }

    #[test]
    fn rendered_content_is_passed_to_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p.ends_with("Badge.test.tsx") && c == "test:Badge")
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        service(fs).scaffold(&badge_request()).unwrap();
    }

    #[test]
    fn existing_shared_files_are_not_rewritten() {
        let mut fs = MockFilesystem::new();
        // Everything except the component folder is already on disk.
        fs.expect_exists()
            .returning(|p| !p.starts_with("src/components/L2/Badge"));
        fs.expect_create_dir_all().never();
        fs.expect_create_dir().times(1).returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| p.starts_with("src/components/L2/Badge"))
            .times(4)
            .returning(|_, _| Ok(()));

        let report = service(fs).scaffold(&badge_request()).unwrap();

        assert_eq!(report.with_status(EntryStatus::Existing).count(), 5);
        assert_eq!(
            report.status_of(Path::new("src/components/utils/cn.ts")),
            Some(EntryStatus::Existing)
        );
    }

    #[test]
    fn existing_component_folder_is_a_conflict() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p.ends_with("Badge"));
        fs.expect_create_dir_all().times(2).returning(|_| Ok(()));
        fs.expect_create_dir().never();
        // cn.ts and the root index are written before the conflict check.
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let err = service(fs).scaffold(&badge_request()).unwrap_err();

        assert_eq!(
            err,
            RcgenError::Application(ApplicationError::ComponentExists {
                path: PathBuf::from("src/components/L2/Badge"),
            })
        );
    }

    #[test]
    fn io_failure_stops_remaining_steps() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| p.ends_with("Badge.stories.tsx"))
            .times(1)
            .returning(|p, _| {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            });
        // cn.ts, root index, Badge.tsx; nothing after the failing write.
        fs.expect_write_file().times(3).returning(|_, _| Ok(()));

        let err = service(fs).scaffold(&badge_request()).unwrap_err();

        assert!(matches!(
            err,
            RcgenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn plan_never_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("src/components/utils"));
        fs.expect_create_dir_all().never();
        fs.expect_create_dir().never();
        fs.expect_write_file().never();

        let report = service(fs).plan(&badge_request()).unwrap();

        assert!(report.dry_run);
        assert_eq!(
            report.status_of(Path::new("src/components/utils")),
            Some(EntryStatus::Existing)
        );
        assert_eq!(report.with_status(EntryStatus::WouldCreate).count(), 9);
    }

    #[test]
    fn plan_reports_component_conflict() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);

        let err = service(fs).plan(&badge_request()).unwrap_err();

        assert!(matches!(
            err,
            RcgenError::Application(ApplicationError::ComponentExists { .. })
        ));
    }
}
