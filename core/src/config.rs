//! Rollout configuration for soft-launched validations.
//!
//! A validation that would break existing configurations is usually shipped
//! as a warning first (see [`will_be_error`](crate::will_be_error)) and turned
//! into an error in a later release. [`EscalationConfig`] keeps that switch in
//! one place instead of at every call site.
//!
//! # Example
//!
//! ```ignore
//! use attrdiag_core::config::EscalationConfig;
//!
//! // Warn for now.
//! let config = EscalationConfig::default();
//!
//! // Next major release.
//! let config = EscalationConfig::new().enforce_all();
//!
//! let diag = config.attribute_required(path, "Name");
//! ```

use crate::attribute::{
    new_attribute_conflicts_when_error, new_attribute_conflicts_when_will_be_error,
    new_attribute_required_error, new_attribute_required_will_be_error,
};
use crate::diagnostic::Diagnostic;
use crate::path::Path;

/// Chooses between the error and warning forms of the escalating checks.
///
/// # Default Values
///
/// | Setting | Default |
/// |---------|---------|
/// | `enforce_required` | `false` |
/// | `enforce_conflicts` | `false` |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscalationConfig {
    /// Report missing required arguments as errors.
    pub enforce_required: bool,

    /// Report conflicting attributes as errors.
    pub enforce_conflicts: bool,
}

impl Default for EscalationConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl EscalationConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        enforce_required: false,
        enforce_conflicts: false,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub const fn with_enforce_required(mut self, enforce: bool) -> Self {
        self.enforce_required = enforce;
        self
    }

    #[inline]
    pub const fn with_enforce_conflicts(mut self, enforce: bool) -> Self {
        self.enforce_conflicts = enforce;
        self
    }

    /// Turns every escalating check into an error.
    #[inline]
    pub const fn enforce_all(self) -> Self {
        self.with_enforce_required(true).with_enforce_conflicts(true)
    }

    /// Missing-argument diagnostic in the configured form.
    pub fn attribute_required(&self, parent_path: Path, attrname: &str) -> Diagnostic {
        if self.enforce_required {
            new_attribute_required_error(parent_path, attrname)
        } else {
            new_attribute_required_will_be_error(parent_path, attrname)
        }
    }

    /// Conflicting-attribute diagnostic in the configured form.
    pub fn attribute_conflicts_when(
        &self,
        path: Path,
        other_path: &Path,
        other_value: &str,
    ) -> Diagnostic {
        if self.enforce_conflicts {
            new_attribute_conflicts_when_error(path, other_path, other_value)
        } else {
            new_attribute_conflicts_when_will_be_error(path, other_path, other_value)
        }
    }
}
