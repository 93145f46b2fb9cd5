//! Output management and formatting.
//!
//! Human-facing lines go to stdout; warnings, errors and the spinner go to
//! stderr so `--output-format json` leaves stdout parseable.

use std::io::{self, IsTerminal};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::ValueEnum;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use sparkstart_core::application::{ProjectSummary, ports::Reporter};
use sparkstart_core::domain::SourceBranch;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
///
/// Clones share the active spinner, so the copy handed to the orchestrator
/// as a [`Reporter`] and the one kept by the command stay in step.
#[derive(Clone)]
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
    err_term: Term,
    spinner: Arc<Mutex<Option<ProgressBar>>>,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins; `auto` defers to the config file.
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_str(&config.output.format, true)
                .unwrap_or(OutputFormat::Auto),
            explicit => explicit,
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || !config.output.color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
            err_term: Term::stderr(),
            spinner: Arc::new(Mutex::new(None)),
        }
    }

    fn human_suppressed(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.human_suppressed() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.human_suppressed() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`. *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.err_term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.err_term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.human_suppressed() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.human_suppressed() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Serialise `value` as pretty JSON to stdout. Ignores quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Spinner ────────────────────────────────────────────────────────────

    /// Start a spinner on stderr. Only drawn for human output on a terminal.
    pub fn start_spinner(&self, msg: &str) {
        if self.human_suppressed()
            || self.resolved_format != OutputFormat::Human
            || !self.err_term.is_term()
        {
            return;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    /// Clear the spinner, if one is running.
    pub fn finish_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        }
    }

    /// Run `f` with the spinner hidden (for prompts and multi-line output).
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        let active = self
            .spinner
            .lock()
            .ok()
            .and_then(|slot| slot.as_ref().cloned());
        match active {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }

    fn set_spinner_message(&self, msg: &str) {
        if let Ok(slot) = self.spinner.lock() {
            if let Some(pb) = slot.as_ref() {
                pb.set_message(msg.to_string());
            }
        }
    }

    // ── Summary ────────────────────────────────────────────────────────────

    /// Render what `create_project` produced.
    pub fn summary(&self, summary: &ProjectSummary) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(summary);
        }
        if self.quiet {
            return Ok(());
        }

        self.success(&format!("Project '{}' created!", summary.name))?;
        self.print("")?;
        for (key, value) in summary_rows(summary) {
            self.print(&format!("  {key:<13} {value}"))?;
        }

        self.print("")?;
        self.header("Next steps:")?;
        for step in next_steps(summary) {
            self.print(&format!("  {step}"))?;
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

impl Reporter for OutputManager {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
        self.set_spinner_message(message);
        let _ = self.suspend(|| OutputManager::info(self, message));
    }

    fn warn(&self, message: &str) {
        tracing::debug!("{message}");
        let _ = self.suspend(|| self.warning(message));
    }

    fn error(&self, message: &str) {
        tracing::debug!("{message}");
        let _ = self.suspend(|| OutputManager::error(self, message));
    }
}

fn summary_rows(summary: &ProjectSummary) -> Vec<(&'static str, String)> {
    let yes_no = |b: bool| if b { "yes" } else { "no" }.to_string();

    let mut rows = vec![
        ("Path:", summary.path.display().to_string()),
        ("Language:", summary.language.display_name().to_string()),
        (
            "Scaffold:",
            match summary.branch {
                SourceBranch::Standard => "standard".to_string(),
                SourceBranch::Template(t) => format!("template ({t})"),
                SourceBranch::Tutorial => "tutorial".to_string(),
            },
        ),
        ("Files:", summary.files.len().to_string()),
        ("Git:", yes_no(summary.git_initialized)),
    ];
    if summary.venv {
        rows.push(("Virtualenv:", ".venv".to_string()));
    }
    if summary.devcontainer {
        rows.push(("Devcontainer:", yes_no(true)));
    }
    if summary.tools {
        rows.push(("Tools:", yes_no(true)));
    }
    if let Some(url) = &summary.remote_url {
        rows.push(("GitHub:", url.to_string()));
    }
    rows
}

fn next_steps(summary: &ProjectSummary) -> Vec<String> {
    let mut steps = vec![format!("cd {}", summary.name)];
    if summary.venv {
        steps.push("source .venv/bin/activate".into());
    }
    if summary.devcontainer {
        steps.push("code .   # then \"Reopen in Container\"".into());
    }
    steps.push("Read GETTING_STARTED.md".into());
    steps
}

// ── tests ─────────────────────────────────────────────────────────────────────
