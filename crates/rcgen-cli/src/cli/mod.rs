//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use rcgen_core::domain::DEFAULT_COMPONENT_NAME;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand, `rcgen` generates a component using the root folder
/// from `.rcconfig`.
#[derive(Debug, Parser)]
#[command(
    name    = "rcgen",
    bin_name = "rcgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Leveled React component scaffolding",
    long_about = "rcgen creates a component folder (component, story, test and index) \
                  under <root>/L<level>/, where <root> comes from a `.rcconfig` file \
                  containing a single `root=<path>` line.",
    after_help = "EXAMPLES:\n\
        \x20 rcgen init src/components\n\
        \x20 rcgen -L 2 -N Badge\n\
        \x20 rcgen -L 1 -N Card --dry-run\n\
        \x20 rcgen completions bash > /usr/share/bash-completion/completions/rcgen",
    args_conflicts_with_subcommands = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Component generation flags (the default action).
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Optional subcommand.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a `.rcconfig` file.
    #[command(
        about = "Create a .rcconfig file",
        after_help = "EXAMPLES:\n\
            \x20 rcgen init                 # root=src/components\n\
            \x20 rcgen init app/ui          # root=app/ui\n\
            \x20 rcgen init app/ui --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 rcgen completions bash > ~/.local/share/bash-completion/completions/rcgen\n\
            \x20 rcgen completions zsh  > ~/.zfunc/_rcgen\n\
            \x20 rcgen completions fish > ~/.config/fish/completions/rcgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for the default generate action.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Component level; the component lands in `<root>/L<level>/`.
    #[arg(
        short = 'L',
        long = "level",
        value_name = "LEVEL",
        default_value_t = 0,
        help = "Component level"
    )]
    pub level: u64,

    /// Component name (case sensitive). Used for the folder, the file names
    /// and the exported identifier.
    #[arg(
        short = 'N',
        long = "name",
        value_name = "NAME",
        default_value = DEFAULT_COMPONENT_NAME,
        help = "Component name (case sensitive)"
    )]
    pub name: String,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `rcgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Root folder to record in the config file.
    #[arg(
        value_name = "ROOT",
        default_value = "src/components",
        help = "Root folder for generated components"
    )]
    pub root: String,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `rcgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_level_zero_and_placeholder_name() {
        let cli = Cli::try_parse_from(["rcgen"]).unwrap();
        assert_eq!(cli.generate.level, 0);
        assert_eq!(cli.generate.name, DEFAULT_COMPONENT_NAME);
        assert!(cli.command.is_none());
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::try_parse_from(["rcgen", "-L", "2", "-N", "Badge"]).unwrap();
        assert_eq!(cli.generate.level, 2);
        assert_eq!(cli.generate.name, "Badge");
    }

    #[test]
    fn negative_level_is_rejected() {
        assert!(Cli::try_parse_from(["rcgen", "-L", "-1"]).is_err());
    }

    #[test]
    fn init_defaults_root() {
        let cli = Cli::try_parse_from(["rcgen", "init"]).unwrap();
        match cli.command {
            Some(Commands::Init(args)) => {
                assert_eq!(args.root, "src/components");
                assert!(!args.force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn generate_flags_conflict_with_subcommands() {
        assert!(Cli::try_parse_from(["rcgen", "-N", "Badge", "init"]).is_err());
    }

    #[test]
    fn global_flags_reach_subcommands() {
        let cli = Cli::try_parse_from(["rcgen", "init", "-q"]).unwrap();
        assert!(cli.global.quiet);
    }
}
