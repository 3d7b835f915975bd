//! Ready-made diagnostics for common attribute validation failures.
//!
//! All of these are error diagnostics scoped to an attribute path, except the
//! `*_will_be_error` variants which return the warning form produced by
//! [`will_be_error`]. Paths that appear in the detail text are rendered with
//! [`render`] and quoted.

use std::borrow::Borrow;
use std::fmt;
use std::fmt::Write as _;

use crate::diagnostic::{Diagnostic, new_attribute_error, will_be_error};
use crate::path::{Path, render};

pub const SUMMARY_INVALID_VALUE: &str = "Invalid value";
pub const SUMMARY_INVALID_VALUE_TYPE: &str = "Invalid value type";
pub const SUMMARY_INVALID_COMBINATION: &str = "Invalid Attribute Combination";
pub const SUMMARY_MISSING_REQUIRED: &str = "Missing required argument";

/// Wraps `s` in double quotes, escaping quotes, backslashes and control
/// characters the way Go's `%q` does.
fn quote(s: &str) -> String {
    let mut buf = String::with_capacity(s.len() + 2);
    buf.push('"');
    for c in s.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\u{7}' => buf.push_str("\\a"),
            '\u{8}' => buf.push_str("\\b"),
            '\u{c}' => buf.push_str("\\f"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            '\u{b}' => buf.push_str("\\v"),
            c if c.is_ascii_control() => {
                let _ = write!(buf, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(buf, "\\u{:04x}", c as u32);
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
    buf
}

/// The value at `path` does not have the `expected` type.
pub fn new_incorrect_value_type_attribute_error(path: Path, expected: &str) -> Diagnostic {
    new_attribute_error(
        path,
        SUMMARY_INVALID_VALUE_TYPE,
        format!("Expected type to be {expected}"),
    )
}

pub fn new_invalid_value_attribute_error(path: Path, detail: impl Into<String>) -> Diagnostic {
    new_attribute_error(path, SUMMARY_INVALID_VALUE, detail)
}

/// Like [`new_invalid_value_attribute_error`] with a formatted detail.
///
/// Usually reached through the
/// [`invalid_value_attribute_error!`](crate::invalid_value_attribute_error)
/// macro.
pub fn new_invalid_value_attribute_error_fmt(path: Path, args: fmt::Arguments<'_>) -> Diagnostic {
    new_invalid_value_attribute_error(path, fmt::format(args))
}

/// The attribute at `path` cannot be set while `other_path` holds
/// `other_value`. Scoped to `path`.
pub fn new_attribute_conflicts_when_error(
    path: Path,
    other_path: &Path,
    other_value: &str,
) -> Diagnostic {
    let detail = format!(
        "Attribute {} cannot be specified when {} is {}.",
        quote(&render(&path)),
        quote(&render(other_path)),
        quote(other_value),
    );
    new_attribute_error(path, SUMMARY_INVALID_COMBINATION, detail)
}

/// The attribute at `needed_path` must be set while `other_path` holds
/// `value`.
///
/// Scoped to `other_path`, the attribute whose value triggered the
/// requirement.
pub fn new_attribute_required_when_error(
    needed_path: &Path,
    other_path: Path,
    value: &str,
) -> Diagnostic {
    let detail = format!(
        "Attribute {} must be specified when {} is {}.",
        quote(&render(needed_path)),
        quote(&render(&other_path)),
        quote(value),
    );
    new_attribute_error(other_path, SUMMARY_INVALID_COMBINATION, detail)
}

/// None of `paths` under `parent_path` is set. The paths are listed in the
/// order given.
pub fn new_at_least_one_of_children_error<I>(parent_path: Path, paths: I) -> Diagnostic
where
    I: IntoIterator,
    I::Item: Borrow<Path>,
{
    let rendered: Vec<String> = paths.into_iter().map(|p| render(p.borrow())).collect();
    let detail = format!(
        "At least one attribute out of [{}] must be specified",
        rendered.join(", ")
    );
    new_attribute_error(parent_path, SUMMARY_INVALID_COMBINATION, detail)
}

/// The argument `attrname` of the block at `parent_path` is missing.
///
/// Only for checks made after the schema has been applied; schema-level
/// required attributes are reported by the schema engine itself.
pub fn new_attribute_required_error(parent_path: Path, attrname: &str) -> Diagnostic {
    new_attribute_error(
        parent_path,
        SUMMARY_MISSING_REQUIRED,
        format!(
            "The argument {} is required, but no definition was found.",
            quote(attrname)
        ),
    )
}

/// Warning form of [`new_attribute_required_error`].
pub fn new_attribute_required_will_be_error(parent_path: Path, attrname: &str) -> Diagnostic {
    will_be_error(new_attribute_required_error(parent_path, attrname))
}

/// Warning form of [`new_attribute_conflicts_when_error`].
pub fn new_attribute_conflicts_when_will_be_error(
    path: Path,
    other_path: &Path,
    other_value: &str,
) -> Diagnostic {
    will_be_error(new_attribute_conflicts_when_error(
        path,
        other_path,
        other_value,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use test_case::test_case;

    fn fields(names: &[&str]) -> Path {
        names
            .iter()
            .fold(Path::root(), |path, name| path.attr(*name))
    }

    #[test]
    fn test_incorrect_value_type() {
        let d = new_incorrect_value_type_attribute_error(fields(&["port"]), "number");
        assert_eq!(d.summary, "Invalid value type");
        assert_eq!(d.detail, "Expected type to be number");
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.path, Some(fields(&["port"])));
    }

    #[test]
    fn test_invalid_value_fmt() {
        let d = new_invalid_value_attribute_error_fmt(
            fields(&["port"]),
            format_args!("port {} is out of range {}-{}", 70000, 1, 65535),
        );
        assert_eq!(d.summary, "Invalid value");
        assert_eq!(d.detail, "port 70000 is out of range 1-65535");
    }

    #[test]
    fn test_conflicts_when() {
        let d = new_attribute_conflicts_when_error(
            fields(&["vpc", "id"]),
            &fields(&["vpc", "cidr"]),
            "10.0.0.0/16",
        );
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.summary, "Invalid Attribute Combination");
        assert_eq!(
            d.detail,
            r#"Attribute "vpc.id" cannot be specified when "vpc.cidr" is "10.0.0.0/16"."#
        );
        assert_eq!(d.path, Some(fields(&["vpc", "id"])));
    }

    #[test]
    fn test_required_when_is_scoped_to_trigger() {
        let d = new_attribute_required_when_error(
            &fields(&["tls", "cert"]),
            fields(&["tls", "mode"]),
            "strict",
        );
        assert_eq!(
            d.detail,
            r#"Attribute "tls.cert" must be specified when "tls.mode" is "strict"."#
        );
        assert_eq!(d.path, Some(fields(&["tls", "mode"])));
    }

    #[test]
    fn test_quoted_values_are_escaped() {
        let d = new_attribute_conflicts_when_error(fields(&["a"]), &fields(&["b"]), r#"say "hi""#);
        assert_eq!(
            d.detail,
            r#"Attribute "a" cannot be specified when "b" is "say \"hi\""."#
        );
    }

    #[test_case("plain", r#""plain""#; "plain")]
    #[test_case("a\u{1}b\u{7f}", r#""a\x01b\x7f""#; "ascii controls")]
    #[test_case("bell\u{7}\u{b}", r#""bell\a\v""#; "named escapes")]
    #[test_case("\u{85}", r#""\u0085""#; "c1 control")]
    #[test_case("caf\u{e9} \u{1f600}", "\"caf\u{e9} \u{1f600}\""; "printable unicode kept")]
    fn test_quote(input: &str, expected: &str) {
        assert_eq!(quote(input), expected);
    }

    #[test]
    fn test_control_characters_in_detail() {
        let d = new_attribute_required_error(fields(&["tags"]), "a\u{1}b\u{7f}");
        assert_eq!(
            d.detail,
            r#"The argument "a\x01b\x7f" is required, but no definition was found."#
        );
    }

    #[test]
    fn test_at_least_one_of_children() {
        let parent = fields(&["rule"]);
        let children = [
            parent.clone().attr("cidr"),
            parent.clone().attr("prefix_list").index(0),
        ];
        let d = new_at_least_one_of_children_error(parent.clone(), &children);
        assert_eq!(
            d.detail,
            "At least one attribute out of [rule.cidr, rule.prefix_list[0]] must be specified"
        );
        assert_eq!(d.path, Some(parent));
    }

    #[test]
    fn test_at_least_one_of_no_children() {
        let d = new_at_least_one_of_children_error(Path::root(), Vec::<Path>::new());
        assert_eq!(
            d.detail,
            "At least one attribute out of [] must be specified"
        );
    }

    #[test]
    fn test_required() {
        let d = new_attribute_required_error(fields(&["tags"]), "Name");
        assert_eq!(d.summary, "Missing required argument");
        assert_eq!(
            d.detail,
            r#"The argument "Name" is required, but no definition was found."#
        );
        assert_eq!(d.severity, Severity::Error);
    }

    #[test]
    fn test_required_will_be_error() {
        let d = new_attribute_required_will_be_error(fields(&["tags"]), "Name");
        assert_eq!(d.severity, Severity::Warning);
        assert_eq!(
            d.detail,
            "The argument \"Name\" is required, but no definition was found.\n\nThis will be an error in a future release."
        );
        assert_eq!(d.path, Some(fields(&["tags"])));
    }

    #[test]
    fn test_conflicts_when_will_be_error() {
        let hard = new_attribute_conflicts_when_error(fields(&["a"]), &fields(&["b"]), "on");
        let soft = new_attribute_conflicts_when_will_be_error(fields(&["a"]), &fields(&["b"]), "on");
        assert_eq!(soft.severity, Severity::Warning);
        assert_eq!(soft.summary, hard.summary);
        assert_eq!(soft.path, hard.path);
        assert_eq!(
            soft.detail,
            format!("{}\n\nThis will be an error in a future release.", hard.detail)
        );
    }
}
