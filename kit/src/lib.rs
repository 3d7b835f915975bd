#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
//! Path-scoped error and warning diagnostics for configuration validation.
//!
//! ```ignore
//! use attrdiag::{path, new_attribute_conflicts_when_error};
//!
//! let diag = new_attribute_conflicts_when_error(
//!     path!["vpc", "id"],
//!     &path!["vpc", "cidr"],
//!     "10.0.0.0/16",
//! );
//! assert_eq!(
//!     diag.detail,
//!     r#"Attribute "vpc.id" cannot be specified when "vpc.cidr" is "10.0.0.0/16"."#,
//! );
//! ```
pub use attrdiag_core::*;
