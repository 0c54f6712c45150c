//! Miette-based diagnostics for configuration errors.
//!
//! A TOML parse error is shown against the file content with the offending
//! span labelled.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(betledger::config))]
pub struct ConfigDiagnostic {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        name: impl AsRef<str>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic for a TOML error in the file at `path`.
    ///
    /// Returns `None` when the error carries no span or the file cannot be
    /// re-read.
    pub fn from_toml(path: &Path, error: &toml::de::Error) -> Option<Self> {
        let span = error.span()?;
        let content = std::fs::read_to_string(path).ok()?;
        let len = span.end.saturating_sub(span.start).max(1);

        Some(
            Self::new(
                error.message(),
                path.display().to_string(),
                content,
                span.start,
                len,
            )
            .with_help("sections are [logging], [display] and [storage]"),
        )
    }
}
