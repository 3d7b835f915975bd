#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use attrdiag::{IndexKey, Path, PathStep};

#[derive(Debug, Arbitrary)]
enum Key {
    Str(String),
    Int(i64),
    Wide(u128),
    Float(f64),
    Digits(String),
    Bool(bool),
    Other(String),
}

#[derive(Debug, Arbitrary)]
enum Step {
    Field(String),
    Index(Key),
    Unknown(String, String),
}

#[derive(Debug, Arbitrary)]
struct Input {
    steps: Vec<Step>,
    other_value: String,
    attrname: String,
}

fn key(key: Key) -> IndexKey {
    match key {
        Key::Str(s) => IndexKey::from(s),
        Key::Int(n) => IndexKey::from(n),
        Key::Wide(n) => IndexKey::from(n),
        Key::Float(f) => IndexKey::try_from(f).unwrap_or(IndexKey::other("float")),
        // Exponents like `1e999999999` spell out as that many digits.
        Key::Digits(s) if s.bytes().all(|b| b.is_ascii_digit()) => {
            IndexKey::number_from_str(&s).unwrap_or(IndexKey::from(s))
        }
        Key::Digits(s) => IndexKey::from(s),
        Key::Bool(b) => IndexKey::from(b),
        Key::Other(name) => IndexKey::other(name),
    }
}

fuzz_target!(|input: Input| {
    let all_fields = input.steps.iter().all(|s| matches!(s, Step::Field(_)));
    let names: Vec<String> = input
        .steps
        .iter()
        .filter_map(|s| match s {
            Step::Field(name) => Some(name.clone()),
            _ => None,
        })
        .collect();

    let path: Path = input
        .steps
        .into_iter()
        .map(|step| match step {
            Step::Field(name) => PathStep::field(name),
            Step::Index(k) => PathStep::index(key(k)),
            Step::Unknown(kind, value) => PathStep::unknown(kind, value),
        })
        .collect();

    let rendered = attrdiag::render(&path);
    if all_fields {
        assert_eq!(rendered, names.join("."));
    }

    let conflict =
        attrdiag::new_attribute_conflicts_when_will_be_error(path.clone(), &path, &input.other_value);
    assert!(conflict.is_warning());
    assert!(conflict.detail.ends_with(attrdiag::FUTURE_ERROR_NOTE));

    let required = attrdiag::new_attribute_required_error(path.clone(), &input.attrname);
    assert_eq!(required.path, Some(path));
});
