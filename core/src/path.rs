//! Paths into a nested configuration document, and their display form.
//!
//! A [`Path`] is an ordered list of [`PathStep`]s. Adapters at the edge of a
//! validation layer build paths from whatever document model they walk; this
//! crate only ever reads them, mostly to [`render`] them into strings such as
//! `block.list[2].name`.
//!
//! # Rendering
//!
//! | Step | Output | Separator |
//! |------|--------|-----------|
//! | [`PathStep::Field`] | the field name | `.` unless first |
//! | [`PathStep::Index`] | `[key]` | none |
//! | [`PathStep::Unknown`] | `<unexpected step: kind value>` | `.` unless first |
//!
//! String keys are written verbatim and numeric keys as exact decimals. Keys
//! of any other type become `<unexpected index: type>`. Rendering has no
//! failure mode: a step it does not understand still produces readable text.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};

use crate::Error;

/// Longest numeric key, counting digits and exponent, written out in full.
/// Larger keys are written in scientific notation with every digit kept.
const MAX_PLAIN_NUMBER_LEN: u64 = 64;

/// The key of an [`PathStep::Index`] step.
///
/// Only string and number keys have a proper rendering. The remaining variants
/// exist so that adapters can pass through whatever their document model holds
/// without having to reject it first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IndexKey {
    /// A map key, rendered verbatim.
    String(String),
    /// A list index or numeric map key, kept at arbitrary precision.
    Number(BigDecimal),
    /// A boolean key. Rendered as a placeholder.
    Bool(bool),
    /// A key of a type this crate has no rendering for.
    Other {
        /// Friendly name of the key's type, used in the placeholder.
        type_name: String,
    },
}

impl IndexKey {
    /// Reads a numeric key from its decimal spelling.
    ///
    /// Accepts anything [`BigDecimal`] parses, including exponents
    /// (`"1e3"`) and digit strings too long for any primitive integer.
    pub fn number_from_str(input: &str) -> Result<Self, Error> {
        BigDecimal::from_str(input)
            .map(Self::Number)
            .map_err(|_| Error::InvalidNumber {
                input: input.to_string(),
            })
    }

    /// Builds a key of an unsupported type, named by `type_name`.
    pub fn other(type_name: impl Into<String>) -> Self {
        Self::Other {
            type_name: type_name.into(),
        }
    }

    /// Friendly name of this key's type.
    pub fn type_name(&self) -> &str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Other { type_name } => type_name,
        }
    }

    fn render_into(&self, buf: &mut String) {
        match self {
            Self::String(s) => buf.push_str(s),
            Self::Number(n) => render_number(n, buf),
            _ => {
                log::debug!(
                    target: "attrdiag::path",
                    "rendering index key of unsupported type `{}`",
                    self.type_name()
                );
                let _ = write!(buf, "<unexpected index: {}>", self.type_name());
            }
        }
    }
}

fn render_number(n: &BigDecimal, buf: &mut String) {
    let (int, scale) = n.as_bigint_and_exponent();
    if n.digits().saturating_add(scale.unsigned_abs()) <= MAX_PLAIN_NUMBER_LEN {
        buf.push_str(&n.normalized().to_plain_string());
    } else {
        render_scientific(&int, scale, buf);
    }
}

/// Writes `int * 10^-scale` as `d.ddde<exp>` without materializing the
/// exponent's zeros. The exponent is computed in `i128` so no scale overflows.
fn render_scientific(int: &BigInt, scale: i64, buf: &mut String) {
    let magnitude = int.magnitude().to_string();
    let digits = magnitude.trim_end_matches('0');
    let Some(first) = digits.chars().next() else {
        buf.push('0');
        return;
    };
    if int.sign() == Sign::Minus {
        buf.push('-');
    }
    buf.push(first);
    if digits.len() > 1 {
        buf.push('.');
        buf.push_str(&digits[1..]);
    }
    let exponent = magnitude.len() as i128 - 1 - i128::from(scale);
    let _ = write!(buf, "e{exponent}");
}

impl From<&str> for IndexKey {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for IndexKey {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<BigDecimal> for IndexKey {
    fn from(value: BigDecimal) -> Self {
        Self::Number(value)
    }
}

impl From<BigInt> for IndexKey {
    fn from(value: BigInt) -> Self {
        Self::Number(BigDecimal::new(value, 0))
    }
}

impl From<bool> for IndexKey {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for IndexKey {
            fn from(value: $ty) -> Self {
                Self::Number(BigDecimal::new(BigInt::from(value), 0))
            }
        }
    )*};
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<f64> for IndexKey {
    type Error = Error;

    /// Converts through the shortest decimal spelling of `value`, so `0.1`
    /// becomes the key `0.1` rather than its binary expansion.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(Error::NonFiniteNumber { value });
        }
        Self::number_from_str(&value.to_string())
    }
}

/// One hop in a [`Path`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PathStep {
    /// Access to a named attribute or block.
    Field(String),
    /// Access to an element of a list, set or map.
    Index(IndexKey),
    /// A step shape from a newer document model.
    Unknown {
        /// Name of the step's kind.
        kind: String,
        /// Debug rendering of the step's payload.
        value: String,
    },
}

impl PathStep {
    /// Builds a [`PathStep::Field`].
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Builds a [`PathStep::Index`].
    pub fn index(key: impl Into<IndexKey>) -> Self {
        Self::Index(key.into())
    }

    /// Builds a [`PathStep::Unknown`].
    pub fn unknown(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Unknown {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// An ordered sequence of steps locating a value in a configuration document.
///
/// The empty path denotes the document root.
///
/// # Example
///
/// ```ignore
/// let path = Path::root().attr("list").index(2).attr("name");
/// assert_eq!(path.to_string(), "list[2].name");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// The empty path.
    #[inline]
    pub const fn root() -> Self {
        Self { steps: Vec::new() }
    }

    /// Builds a path from its steps, first step first.
    #[inline]
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    /// Returns this path extended by a field step.
    pub fn attr(mut self, name: impl Into<String>) -> Self {
        self.steps.push(PathStep::field(name));
        self
    }

    /// Returns this path extended by an index step.
    pub fn index(mut self, key: impl Into<IndexKey>) -> Self {
        self.steps.push(PathStep::index(key));
        self
    }

    /// Appends a step in place.
    #[inline]
    pub fn push(&mut self, step: PathStep) {
        self.steps.push(step);
    }

    /// The steps, first step first.
    #[inline]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether this is the root path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The final step, or `None` at the root.
    #[inline]
    pub fn last(&self) -> Option<&PathStep> {
        self.steps.last()
    }

    /// The path without its last step, or `None` at the root.
    pub fn parent(&self) -> Option<Path> {
        let (_, init) = self.steps.split_last()?;
        Some(Self::new(init.to_vec()))
    }

    /// Iterates over the steps in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PathStep> {
        self.steps.iter()
    }

    /// Shorthand for [`render`].
    #[inline]
    pub fn render(&self) -> String {
        render(self)
    }
}

impl From<Vec<PathStep>> for Path {
    fn from(steps: Vec<PathStep>) -> Self {
        Self::new(steps)
    }
}

impl FromIterator<PathStep> for Path {
    fn from_iter<I: IntoIterator<Item = PathStep>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = PathStep;
    type IntoIter = std::vec::IntoIter<PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathStep;
    type IntoIter = std::slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

/// Renders `path` for display, e.g. `block.list[2].name`.
///
/// Never fails. Steps and keys without a proper rendering are written as
/// `<unexpected ...>` placeholders in place.
pub fn render(path: &Path) -> String {
    let mut buf = String::new();
    for (i, step) in path.iter().enumerate() {
        match step {
            PathStep::Field(name) => {
                if i != 0 {
                    buf.push('.');
                }
                buf.push_str(name);
            }
            PathStep::Index(key) => {
                buf.push('[');
                key.render_into(&mut buf);
                buf.push(']');
            }
            PathStep::Unknown { kind, value } => {
                log::debug!(
                    target: "attrdiag::path",
                    "rendering unexpected path step of kind `{kind}`"
                );
                if i != 0 {
                    buf.push('.');
                }
                let _ = write!(buf, "<unexpected step: {kind} {value}>");
            }
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn fields(names: &[&str]) -> Path {
        names.iter().map(|n| PathStep::field(*n)).collect()
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(render(&Path::root()), "");
        assert!(Path::root().is_empty());
    }

    #[test_case(&["vpc"], "vpc"; "single field")]
    #[test_case(&["vpc", "id"], "vpc.id"; "two fields")]
    #[test_case(&["a", "b", "c", "d"], "a.b.c.d"; "deep fields")]
    fn test_fields_join_with_dots(names: &[&str], expected: &str) {
        assert_eq!(render(&fields(names)), expected);
    }

    #[test]
    fn test_mixed_steps() {
        let path = Path::root().attr("list").index(2).attr("name");
        assert_eq!(render(&path), "list[2].name");
    }

    #[test]
    fn test_index_attaches_without_separator() {
        let path = Path::root().attr("tags").index("Name");
        assert_eq!(render(&path), "tags[Name]");
    }

    #[test]
    fn test_leading_index() {
        let path = Path::root().index(0).attr("name");
        assert_eq!(render(&path), "[0].name");
    }

    #[test]
    fn test_string_key_is_not_quoted() {
        let path = Path::root().attr("m").index("with \"quotes\" and.dots");
        assert_eq!(render(&path), "m[with \"quotes\" and.dots]");
    }

    #[test]
    fn test_large_integer_key_keeps_precision() {
        let key = IndexKey::number_from_str("12345678901234567890123").unwrap();
        let path = Path::root().attr("l").index(key);
        assert_eq!(render(&path), "l[12345678901234567890123]");
    }

    #[test]
    fn test_u128_key() {
        let path = Path::root().index(u128::MAX);
        assert_eq!(render(&path), format!("[{}]", u128::MAX));
    }

    #[test_case("1e3", "1000"; "exponent")]
    #[test_case("2.50", "2.5"; "trailing zeros")]
    #[test_case("-7", "-7"; "negative")]
    #[test_case("0.000001", "0.000001"; "small fraction")]
    fn test_numeric_key_spelling(input: &str, expected: &str) {
        let path = Path::root().index(IndexKey::number_from_str(input).unwrap());
        assert_eq!(render(&path), format!("[{expected}]"));
    }

    #[test_case("1e9223372036854775807", "[1e9223372036854775807]"; "max exponent")]
    #[test_case("1e-10000000", "[1e-10000000]"; "tiny")]
    #[test_case("-25e10000000", "[-2.5e10000001]"; "negative huge")]
    #[test_case("1e70", "[1e70]"; "just over plain limit")]
    fn test_extreme_exponent_renders_short(input: &str, expected: &str) {
        let key = IndexKey::number_from_str(input).unwrap();
        let rendered = render(&Path::root().index(key));
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_long_integer_keeps_every_digit() {
        let digits = "1234567890".repeat(8);
        let key = IndexKey::number_from_str(&digits).unwrap();
        assert_eq!(
            render(&Path::root().index(key)),
            "[1.234567890123456789012345678901234567890123456789012345678901234567890123456789e79]"
        );
    }

    #[test]
    fn test_huge_scale_from_bigdecimal() {
        let key = IndexKey::from(BigDecimal::new(BigInt::from(-300), i64::MIN));
        assert_eq!(
            render(&Path::root().index(key)),
            "[-3e9223372036854775810]"
        );
    }

    #[test]
    fn test_float_key_uses_shortest_spelling() {
        let key = IndexKey::try_from(0.1).unwrap();
        assert_eq!(render(&Path::root().index(key)), "[0.1]");
    }

    #[test]
    fn test_float_key_rejects_non_finite() {
        assert!(matches!(
            IndexKey::try_from(f64::INFINITY),
            Err(Error::NonFiniteNumber { .. })
        ));
        assert!(IndexKey::try_from(f64::NAN).is_err());
    }

    #[test]
    fn test_invalid_number_string() {
        assert_eq!(
            IndexKey::number_from_str("twelve"),
            Err(Error::InvalidNumber {
                input: "twelve".to_string()
            })
        );
    }

    #[test]
    fn test_bool_key_placeholder() {
        let path = Path::root().attr("set").index(true);
        assert_eq!(render(&path), "set[<unexpected index: bool>]");
    }

    #[test]
    fn test_other_key_placeholder() {
        let path = Path::root().index(IndexKey::other("object"));
        assert_eq!(render(&path), "[<unexpected index: object>]");
    }

    #[test]
    fn test_unknown_step_placeholder() {
        let mut path = Path::root().attr("a");
        path.push(PathStep::unknown("SliceStep", "1..3"));
        assert_eq!(render(&path), "a.<unexpected step: SliceStep 1..3>");

        let first = Path::new(vec![PathStep::unknown("X", "y")]);
        assert_eq!(render(&first), "<unexpected step: X y>");
    }

    #[test]
    fn test_render_does_not_consume_path() {
        let path = fields(&["a", "b"]);
        let before = path.clone();
        let _ = render(&path);
        assert_eq!(path, before);
    }

    #[test]
    fn test_parent() {
        let path = Path::root().attr("a").index(1);
        assert_eq!(path.parent(), Some(Path::root().attr("a")));
        assert_eq!(Path::root().parent(), None);
    }

    #[test]
    fn test_display_matches_render() {
        let path = Path::root().attr("a").index("k");
        assert_eq!(path.to_string(), render(&path));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(IndexKey::from("x").type_name(), "string");
        assert_eq!(IndexKey::from(1u8).type_name(), "number");
        assert_eq!(IndexKey::from(false).type_name(), "bool");
        assert_eq!(IndexKey::other("tuple").type_name(), "tuple");
    }
}
