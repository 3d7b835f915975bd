//! Diagnostic records and their severity transforms.
//!
//! Every function here takes its input by value and hands back a new record.
//! Nothing is shared between calls, so a [`Diagnostic`] can be built on any
//! thread and moved freely.

use std::fmt;

use crate::path::{Path, render};

/// Text appended to a diagnostic's detail by [`will_be_error`].
pub const FUTURE_ERROR_NOTE: &str = "\n\nThis will be an error in a future release.";

/// Severity level of a [`Diagnostic`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The configuration is rejected.
    Error,
    /// The configuration is accepted but the user should act on it.
    Warning,
}

impl Severity {
    /// Label used when displaying the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A severity-tagged message, optionally scoped to an attribute path.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// Severity of the diagnostic.
    pub severity: Severity,
    /// Short classification of the problem, e.g. `Invalid value`.
    pub summary: String,
    /// Long-form explanation shown below the summary.
    pub detail: String,
    /// Location of the offending attribute, if the diagnostic has one.
    pub path: Option<Path>,
}

impl Diagnostic {
    /// Produce an unscoped diagnostic with the provided severity.
    pub fn new(
        severity: Severity,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail: detail.into(),
            path: None,
        }
    }

    /// Unscoped error diagnostic.
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Error, summary, detail)
    }

    /// Unscoped warning diagnostic.
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Warning, summary, detail)
    }

    /// Scope the diagnostic to `path`, replacing any previous path.
    pub fn with_path(mut self, path: Path) -> Self {
        self.path = Some(path);
        self
    }

    /// Downgrade to a warning, keeping summary, detail and path.
    pub fn into_warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }

    /// Downgrade to a warning announcing that the problem will become an
    /// error in a future release.
    ///
    /// Meant for errors. A diagnostic that is already a warning still gets
    /// the note appended.
    pub fn into_future_error(mut self) -> Self {
        if self.severity != Severity::Error {
            log::trace!(
                target: "attrdiag::diagnostic",
                "escalation note added to a {} diagnostic: {}",
                self.severity,
                self.summary
            );
        }
        self.detail.push_str(FUTURE_ERROR_NOTE);
        self.into_warning()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    #[inline]
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }

    /// The diagnostic's path rendered for display, if it has one.
    pub fn rendered_path(&self) -> Option<String> {
        self.path.as_ref().map(render)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.summary)?;
        if let Some(path) = self.path.as_ref().filter(|p| !p.is_empty()) {
            write!(f, "\n  with {path}")?;
        }
        if !self.detail.is_empty() {
            write!(f, "\n\n{}", self.detail)?;
        }
        Ok(())
    }
}

/// Error-severity diagnostic with no path.
pub fn new_error(summary: impl Into<String>, detail: impl Into<String>) -> Diagnostic {
    Diagnostic::error(summary, detail)
}

/// Warning-severity diagnostic with no path.
pub fn new_warning(summary: impl Into<String>, detail: impl Into<String>) -> Diagnostic {
    Diagnostic::warning(summary, detail)
}

/// Copy of `d` scoped to `path`.
pub fn with_path(d: Diagnostic, path: Path) -> Diagnostic {
    d.with_path(path)
}

/// Error-severity diagnostic scoped to `path`.
pub fn new_attribute_error(
    path: Path,
    summary: impl Into<String>,
    detail: impl Into<String>,
) -> Diagnostic {
    with_path(new_error(summary, detail), path)
}

/// Warning-severity diagnostic scoped to `path`.
pub fn new_attribute_warning(
    path: Path,
    summary: impl Into<String>,
    detail: impl Into<String>,
) -> Diagnostic {
    with_path(new_warning(summary, detail), path)
}

/// `d` with its severity set to [`Severity::Warning`].
pub fn error_to_warning(d: Diagnostic) -> Diagnostic {
    d.into_warning()
}

/// `d` as a warning whose detail ends with [`FUTURE_ERROR_NOTE`].
///
/// Lets a new validation ship as a warning first and become a hard error
/// later by switching back to the plain constructor.
pub fn will_be_error(d: Diagnostic) -> Diagnostic {
    d.into_future_error()
}
