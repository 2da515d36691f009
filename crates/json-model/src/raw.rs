//! Raw input accepted by the mapping functions.

use std::borrow::Cow;

use serde_json::Value;

/// Untyped source data: JSON text, an already-parsed structure, or
/// nothing at all.
///
/// Every mapping entry point is generic over `Into<Raw>`, so call sites
/// pass whatever the transport handed them without converting by hand:
/// `&str`, `String`, [`serde_json::Value`], a reference to one, or an
/// `Option` of any of those.
#[derive(Debug, Clone)]
pub enum Raw<'a> {
    Absent,
    Text(Cow<'a, str>),
    Parsed(Cow<'a, Value>),
}

impl<'a> From<&'a str> for Raw<'a> {
    fn from(text: &'a str) -> Self {
        Raw::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Raw<'_> {
    fn from(text: String) -> Self {
        Raw::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a Value> for Raw<'a> {
    fn from(value: &'a Value) -> Self {
        Raw::Parsed(Cow::Borrowed(value))
    }
}

impl From<Value> for Raw<'_> {
    fn from(value: Value) -> Self {
        Raw::Parsed(Cow::Owned(value))
    }
}

impl<'a, R> From<Option<R>> for Raw<'a>
where
    R: Into<Raw<'a>>,
{
    fn from(raw: Option<R>) -> Self {
        match raw {
            Some(raw) => raw.into(),
            None => Raw::Absent,
        }
    }
}
