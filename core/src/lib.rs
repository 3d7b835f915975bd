pub mod attribute;
pub mod config;
pub mod diagnostic;
mod error;
pub mod path;

pub use attribute::{
    SUMMARY_INVALID_COMBINATION, SUMMARY_INVALID_VALUE, SUMMARY_INVALID_VALUE_TYPE,
    SUMMARY_MISSING_REQUIRED, new_at_least_one_of_children_error,
    new_attribute_conflicts_when_error, new_attribute_conflicts_when_will_be_error,
    new_attribute_required_error, new_attribute_required_when_error,
    new_attribute_required_will_be_error, new_incorrect_value_type_attribute_error,
    new_invalid_value_attribute_error, new_invalid_value_attribute_error_fmt,
};
pub use config::EscalationConfig;
pub use diagnostic::{
    Diagnostic, FUTURE_ERROR_NOTE, Severity, error_to_warning, new_attribute_error,
    new_attribute_warning, new_error, new_warning, will_be_error, with_path,
};
pub use error::Error;
pub use path::{IndexKey, Path, PathStep, render};

/// Builds a [`Path`] from a list of steps.
///
/// Plain expressions become field steps; an expression wrapped in brackets
/// becomes an index step. Each step must be a single token tree: a literal, an
/// identifier, or a bracketed/parenthesized expression.
///
/// ```ignore
/// let path = path!["list", [2], "name"];
/// assert_eq!(path.to_string(), "list[2].name");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($step:tt),+ $(,)?) => {
        $crate::Path::new(::std::vec![$($crate::__path_step!($step)),+])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __path_step {
    ([$key:expr]) => {
        $crate::PathStep::index($key)
    };
    ($name:expr) => {
        $crate::PathStep::field($name)
    };
}

/// Builds an `Invalid value` diagnostic with a formatted detail.
///
/// ```ignore
/// let diag = invalid_value_attribute_error!(path, "{} is not a valid port", port);
/// ```
#[macro_export]
macro_rules! invalid_value_attribute_error {
    ($path:expr, $($arg:tt)+) => {
        $crate::new_invalid_value_attribute_error_fmt($path, ::std::format_args!($($arg)+))
    };
}
