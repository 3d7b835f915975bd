//! Validating a TOML network description with attrdiag diagnostics.
//!
//! This crate is the adapter side of attrdiag: it walks a parsed
//! [`toml::Table`], turns every location it visits into an [`attrdiag::Path`],
//! and reports problems with the ready-made constructors.
//!
//! ```ignore
//! let diags = toml_validator::validate_str(
//!     r#"
//!     [vpc]
//!     id = "vpc-123"
//!     cidr = "10.0.0.0/16"
//!     "#,
//!     EscalationConfig::default(),
//! )?;
//! assert_eq!(diags[0].rendered_path().as_deref(), Some("vpc.id"));
//! ```

pub mod rules;
pub mod walk;

pub use rules::NetworkValidator;
pub use walk::{PathCollector, ValueVisitor};

use attrdiag::{Diagnostic, EscalationConfig};
use thiserror::Error;

/// Errors raised before validation can start.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("document is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parses `src` and runs every rule over it.
pub fn validate_str(src: &str, config: EscalationConfig) -> Result<Vec<Diagnostic>, ValidateError> {
    let table: toml::Table = toml::from_str(src)?;
    Ok(validate(&table, config))
}

/// Runs every rule over an already parsed document.
pub fn validate(table: &toml::Table, config: EscalationConfig) -> Vec<Diagnostic> {
    let mut validator = NetworkValidator::new(config);
    validator.visit_table(&attrdiag::Path::root(), table);
    let diagnostics = validator.into_diagnostics();
    log::debug!(
        target: "toml_validator",
        "validation finished with {} diagnostics",
        diagnostics.len()
    );
    diagnostics
}
