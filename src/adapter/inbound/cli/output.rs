//! Terminal output for CLI handlers.
//!
//! Handlers print through these helpers so JSON mode (for scripting), quiet
//! mode and color choice are honored in one place. Colors are applied only
//! when stdout supports them, or when forced with `--color always`.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream};
use rust_decimal::Decimal;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Human output is off: quiet, or JSON documents only.
fn text_suppressed(config: OutputConfig) -> bool {
    config.json || config.quiet
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Force colors on or off, or `None` to detect from the terminal.
pub fn set_color(choice: Option<bool>) {
    match choice {
        Some(enabled) => owo_colors::set_override(enabled),
        None => owo_colors::unset_override(),
    }
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Return the global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

/// Print one JSON document for the command's result.
pub fn document(value: &serde_json::Value) {
    println!("{value}");
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if text_suppressed(read_config()) {
        return;
    }
    println!(
        "  {:<14} {}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        value
    );
}

/// Print a bare result line, shown even in quiet mode.
pub fn value(value: impl Display) {
    if read_config().json {
        return;
    }
    println!("{value}");
}

pub fn success(message: &str) {
    if text_suppressed(read_config()) {
        return;
    }
    println!(
        "  {} {}",
        "✓".if_supports_color(Stream::Stdout, |t| t.green()),
        message
    );
}

/// Print a warning line to stderr.
pub fn warning(message: &str) {
    if read_config().json {
        eprintln!(
            "{}",
            json!({ "type": "warning", "payload": { "message": message } })
        );
        return;
    }
    eprintln!(
        "  {} {}",
        "⚠".if_supports_color(Stream::Stderr, |t| t.yellow()),
        message
    );
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if read_config().json {
        eprintln!(
            "{}",
            json!({ "type": "error", "payload": { "message": message } })
        );
        return;
    }
    eprintln!(
        "  {} {}",
        "×".if_supports_color(Stream::Stderr, |t| t.red()),
        message
    );
}

/// Print a section header.
pub fn section(title: &str) {
    if text_suppressed(read_config()) {
        return;
    }
    println!();
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

/// Print a dimmed note.
pub fn note(message: &str) {
    if text_suppressed(read_config()) {
        return;
    }
    println!("  {}", message.if_supports_color(Stream::Stdout, |t| t.dimmed()));
}

/// Print pre-rendered content such as a table, each line indented.
pub fn lines(content: &str) {
    if text_suppressed(read_config()) {
        return;
    }
    for line in content.lines() {
        println!("  {line}");
    }
}

/// Format an amount with two places, green when positive and red when
/// negative.
#[must_use]
pub fn signed_money(amount: Decimal) -> String {
    let text = format!("{amount:+.2}");
    if amount > Decimal::ZERO {
        text.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
    } else if amount < Decimal::ZERO {
        text.if_supports_color(Stream::Stdout, |t| t.red()).to_string()
    } else {
        text
    }
}

/// Format a highlighted value in cyan.
#[must_use]
pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    value
        .if_supports_color(Stream::Stdout, |t| t.cyan())
        .to_string()
}
