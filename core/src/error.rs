//! Core error types for attrdiag.
//!
//! Building diagnostics and rendering paths never fails. The errors here come
//! from converting foreign values into the path model, which is what edge
//! adapters do when they translate their own document locations into a
//! [`Path`](crate::Path).

use thiserror::Error;

/// Error raised while converting a foreign value into an index key.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A floating point key was NaN or infinite.
    ///
    /// Index keys are rendered as exact decimals, which have no spelling for
    /// these values.
    #[error("index key must be a finite number, got {value}")]
    NonFiniteNumber {
        /// The rejected value.
        value: f64,
    },

    /// A decimal string could not be read as a number.
    #[error("invalid numeric index key `{input}`")]
    InvalidNumber {
        /// The rejected input, verbatim.
        input: String,
    },
}
