//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. Languages and templates stay plain strings
//! here so the core validator can answer with a did-you-mean suggestion;
//! `--lang` only folds case and shorthand names into canonical ones first.

use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sparkstart",
    bin_name = "sparkstart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Start a new project in seconds",
    long_about = "sparkstart creates a ready-to-code project folder: source \
                  scaffold, manifest, git history, and optionally a GitHub \
                  repository and a dev container.",
    after_help = "EXAMPLES:\n\
        \x20 sparkstart new my-game --lang python --template pygame\n\
        \x20 sparkstart new my-lib  --lang rust --tools --github\n\
        \x20 sparkstart new                      # guided wizard\n\
        \x20 sparkstart delete my-lib --github --yes\n\
        \x20 sparkstart completions bash > /usr/share/bash-completion/completions/sparkstart",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 sparkstart new my-project\n\
            \x20 sparkstart new my-game  --lang python --template pygame\n\
            \x20 sparkstart new my-app   --lang js --devcontainer --tools\n\
            \x20 sparkstart new learn-rs --lang rust --tutorial"
    )]
    New(NewArgs),

    /// Delete a project directory (and optionally its GitHub repository).
    #[command(
        visible_alias = "rm",
        about = "Delete a project",
        after_help = "EXAMPLES:\n\
            \x20 sparkstart delete my-project\n\
            \x20 sparkstart delete my-project --github --yes"
    )]
    Delete(DeleteArgs),

    /// List supported languages and templates.
    #[command(
        visible_alias = "ls",
        about = "List languages and templates",
        after_help = "EXAMPLES:\n\
            \x20 sparkstart list\n\
            \x20 sparkstart list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sparkstart completions bash > ~/.local/share/bash-completion/completions/sparkstart\n\
            \x20 sparkstart completions zsh  > ~/.zfunc/_sparkstart\n\
            \x20 sparkstart completions fish > ~/.config/fish/completions/sparkstart.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the sparkstart configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sparkstart config init\n\
            \x20 sparkstart config get defaults.language\n\
            \x20 sparkstart config set defaults.language rust\n\
            \x20 sparkstart config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `sparkstart new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project directory name. Omit it to start the interactive wizard.
    #[arg(value_name = "NAME", help = "Project name (omit for the wizard)")]
    pub name: Option<String>,

    /// Programming language; falls back to `defaults.language`.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        value_parser = language_arg,
        help = "Language: python, rust, javascript, cpp"
    )]
    pub language: Option<String>,

    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        help = "Template: pygame (python only)"
    )]
    pub template: Option<String>,

    /// Replace the source scaffold with a small number-guessing game and tests.
    #[arg(long = "tutorial", help = "Generate the tutorial game with tests")]
    pub tutorial: bool,

    #[arg(
        short = 'd',
        long = "devcontainer",
        help = "Add a dev container, .envrc and compose file"
    )]
    pub devcontainer: bool,

    #[arg(long = "tools", help = "Add formatter, linter and pre-commit config")]
    pub tools: bool,

    #[arg(long = "github", help = "Create a GitHub repository and push to it")]
    pub github: bool,

    /// Skip `python3 -m venv .venv` for python projects.
    #[arg(long = "no-venv", help = "Do not create a python virtual environment")]
    pub no_venv: bool,

    /// Parent directory for the project.
    #[arg(
        short = 'o',
        long = "dir",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,
}

// ── delete ────────────────────────────────────────────────────────────────────

/// Arguments for `sparkstart delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(value_name = "NAME", help = "Project directory to delete")]
    pub name: String,

    /// Also delete `<login>/<NAME>` on GitHub.
    #[arg(long = "github", help = "Also delete the GitHub repository")]
    pub github: bool,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Delete without asking")]
    pub yes: bool,

    #[arg(
        short = 'o',
        long = "dir",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `sparkstart list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One language name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sparkstart completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
            Shell::Elvish => Self::Elvish,
        }
    }
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sparkstart config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Print the path to the active configuration file.
    Path,
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.language`.
        key: String,
    },
    /// Set a configuration key in the configuration file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value; `true`/`false` and integers are stored typed.
        value: String,
    },
    /// Print the effective configuration.
    List,
}

// ── language shorthands ──────────────────────────────────────────────────────

/// Fold case, surrounding whitespace and shorthand names (`py`, `rs`, `js`,
/// `node`, `c++`, `cxx`) into a canonical language name. Anything else is
/// returned lowercased for the core validator to reject.
pub fn canonical_language(raw: &str) -> String {
    let folded = raw.trim().to_ascii_lowercase();
    match folded.as_str() {
        "py" => "python".into(),
        "rs" => "rust".into(),
        "js" | "node" => "javascript".into(),
        "c++" | "cxx" => "cpp".into(),
        _ => folded,
    }
}

fn language_arg(raw: &str) -> Result<String, Infallible> {
    Ok(canonical_language(raw))
}

// ── tests ─────────────────────────────────────────────────────────────────────
