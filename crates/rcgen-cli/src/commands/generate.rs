//! The default action: generate one component.
//!
//! Responsibility: turn `-L`/`-N` plus the loaded config into a
//! `ScaffoldRequest`, call the core scaffold service, and display the report.

use tracing::{debug, info, instrument};

use rcgen_adapters::{LocalFilesystem, ReactRenderer};
use rcgen_core::{
    application::{EntryStatus, ScaffoldReport, ScaffoldService},
    domain::{ComponentName, EntryKind, Level, ScaffoldRequest},
    error::RcgenError,
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the generate action.
///
/// 1. Validate the component name
/// 2. Build the request from the config root
/// 3. Run (or, with `--dry-run`, preview) the scaffold
/// 4. Print one line per created entry, or the report as JSON
#[instrument(skip_all, fields(level = args.level, name = %args.name))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = ComponentName::new(args.name).map_err(RcgenError::from)?;
    let request = ScaffoldRequest::from_config(Level::new(args.level), name, &config.rc);

    debug!(
        config = %config.path.display(),
        root = request.root(),
        dry_run = args.dry_run,
        "Request resolved"
    );

    let service = ScaffoldService::new(
        Box::new(ReactRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    let report = if args.dry_run {
        service.plan(&request)?
    } else {
        service.scaffold(&request)?
    };

    info!(
        entries = report.entries.len(),
        written = report.written().count(),
        "Scaffold finished"
    );

    render_report(&report, &output)
}

fn render_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(report);
    }

    for entry in &report.entries {
        let noun = match entry.kind {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        };
        let path = entry.path.display();
        match entry.status {
            EntryStatus::Created => output.success(&format!("created {noun} at {path}"))?,
            EntryStatus::WouldCreate => output.info(&format!("would create {noun} at {path}"))?,
            EntryStatus::Existing => output.detail(&format!("  {noun} exists, skipped: {path}"))?,
        }
    }

    if report.dry_run {
        output.warning("Dry run: nothing was written")?;
    }

    Ok(())
}
