//! Typed conversion between raw JSON data and domain model values.
//!
//! The transport layer hands over JSON text or an already-parsed
//! [`serde_json::Value`]; the view layer wants model structs. The
//! functions here convert in both directions and never raise outward:
//! every failure degrades to a well-defined absent or default result,
//! logged at the point it is swallowed. "Absent" and "default model" are
//! distinct outcomes; each function documents which one it produces.
//!
//! A model declares its shape with the serde derives; a nested or
//! array-valued field's conversion target is simply its declared type,
//! and a field carrying `#[serde(skip_serializing)]` is excluded from
//! serialized output.

mod merge;
mod raw;

pub use raw::Raw;

use easyoff_outcome::{try_block, Outcome};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Contract for a mappable domain model.
///
/// Implemented automatically for any type deriving `Serialize`,
/// `Deserialize`, and `Default`. Containers should also carry
/// `#[serde(default)]` so raw data missing a key leaves that field at
/// its declared default instead of failing the conversion.
pub trait JsonModel: Serialize + DeserializeOwned + Default {}

impl<T: Serialize + DeserializeOwned + Default> JsonModel for T {}

/// Parse JSON text into a generic value.
///
/// Blank input resolves to `None`. After trimming leading whitespace,
/// a first character other than `{` or `[` short-circuits to `None`
/// without attempting a parse: the text is obviously not a JSON
/// document. A parse failure past that gate is swallowed and reported
/// as `None`.
pub fn parse_text(text: &str) -> Option<Value> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        return None;
    }
    match try_block(|| serde_json::from_str::<Value>(trimmed)) {
        Outcome::Value(value) => Some(value),
        Outcome::Failed(err) => {
            tracing::debug!(error = %err, "discarding unparsable json text");
            None
        }
        Outcome::Empty => None,
    }
}

fn resolve(raw: Raw<'_>) -> Option<Value> {
    match raw {
        Raw::Absent => None,
        Raw::Text(text) => parse_text(&text),
        Raw::Parsed(value) => Some(value.into_owned()),
    }
}

/// Convert raw data into a fresh model value.
///
/// Never fails outward: absent or unparsable text and any conversion
/// failure all yield `T::default()`, so the caller always holds a valid
/// model, possibly all-default.
pub fn to_model<'a, T, R>(raw: R) -> T
where
    T: JsonModel,
    R: Into<Raw<'a>>,
{
    let Some(value) = resolve(raw.into()) else {
        return T::default();
    };
    match serde_json::from_value(value) {
        Ok(model) => model,
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default model");
            T::default()
        }
    }
}

/// Convert raw data into a sequence of fresh model values.
///
/// Unlike [`to_model`], a failure here yields `None` rather than an
/// empty or default sequence; callers must treat the two outcomes
/// distinctly.
pub fn to_model_array<'a, T, R>(raw: R) -> Option<Vec<T>>
where
    T: JsonModel,
    R: Into<Raw<'a>>,
{
    let value = resolve(raw.into())?;
    match serde_json::from_value(value) {
        Ok(models) => Some(models),
        Err(err) => {
            tracing::warn!(error = %err, "discarding unconvertible model array");
            None
        }
    }
}

/// Overwrite `existing`'s fields in place from raw data, preserving its
/// identity.
///
/// Object keys present in the raw data merge recursively over the
/// current field values; arrays and scalars replace. Keys the raw data
/// lacks keep their pre-merge values. Returns `false` and leaves
/// `existing` untouched when the raw data is absent, unparsable, or
/// does not convert back into `T`.
///
/// The merge routes through the model's serialized form, so fields
/// excluded from output reset to their defaults; models carrying such
/// fields should prefer [`to_model`].
pub fn merge_model<'a, T, R>(existing: &mut T, raw: R) -> bool
where
    T: JsonModel,
    R: Into<Raw<'a>>,
{
    let Some(incoming) = resolve(raw.into()) else {
        return false;
    };
    match merged_value(existing, incoming) {
        Some(merged) => {
            *existing = merged;
            true
        }
        None => false,
    }
}

/// Merge raw array data element-wise into `existing`, by index.
///
/// Each raw element merges into the existing element at its index with
/// [`merge_model`] semantics; surplus raw elements become fresh models.
/// The resulting length is the raw array's length. Returns `false` and
/// leaves `existing` untouched when the raw data is absent, unparsable,
/// not an array, or any element does not convert.
pub fn merge_model_array<'a, T, R>(existing: &mut Vec<T>, raw: R) -> bool
where
    T: JsonModel,
    R: Into<Raw<'a>>,
{
    let Some(incoming) = resolve(raw.into()) else {
        return false;
    };
    let Value::Array(items) = incoming else {
        tracing::warn!("raw data for an array merge is not an array, keeping existing models");
        return false;
    };
    // Build into a scratch vector so a failing element leaves `existing`
    // untouched.
    let mut merged = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let slot = match existing.get(index) {
            Some(element) => merged_value(element, item),
            None => merged_value(&T::default(), item),
        };
        match slot {
            Some(model) => merged.push(model),
            None => return false,
        }
    }
    *existing = merged;
    true
}

fn merged_value<T: JsonModel>(existing: &T, incoming: Value) -> Option<T> {
    let mut base = match serde_json::to_value(existing) {
        Ok(base) => base,
        Err(err) => {
            tracing::warn!(error = %err, "existing model does not serialize, skipping merge");
            return None;
        }
    };
    merge::merge_value(&mut base, incoming);
    match serde_json::from_value(base) {
        Ok(merged) => Some(merged),
        Err(err) => {
            tracing::warn!(error = %err, "merged data does not convert, keeping existing model");
            None
        }
    }
}

/// Serialize a model to compact JSON text.
///
/// Absent input yields `None`; no sentinel object is serialized.
/// Output honors fields excluded from serialization. A serialization
/// failure is swallowed and reported as `None`.
pub fn to_text<T: Serialize>(model: Option<&T>) -> Option<String> {
    let model = model?;
    match serde_json::to_string(model) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::warn!(error = %err, "model does not serialize to text");
            None
        }
    }
}

/// Convert a model to its plain parsed representation.
///
/// Same contract as [`to_text`], for callers that need a structure
/// rather than text (request parameters, for example).
pub fn to_plain<T: Serialize>(model: Option<&T>) -> Option<Value> {
    let model = model?;
    match serde_json::to_value(model) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(error = %err, "model does not convert to a plain value");
            None
        }
    }
}
