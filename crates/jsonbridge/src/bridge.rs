use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ConstructionError, JsonBridgeError, ParseError};
use crate::shape::{Arguments, Reconstruct};

/// Serializes a record to compact JSON.
///
/// Fields appear in the record's own order: declaration order for structs,
/// insertion order for maps, index order for sequences. Nothing is indented
/// or sorted.
pub fn serialize<T: Serialize + ?Sized>(record: &T) -> Result<String, JsonBridgeError> {
    serde_json::to_string(record).map_err(|err| JsonBridgeError::Serialize(err.to_string()))
}

/// Rebuilds a record by feeding the JSON values to `S`'s constructor in the
/// order they appear in the text.
///
/// Field names are not consulted: `{"height":2,"width":1}` passes `2` as the
/// first parameter whatever that parameter is called. Use
/// [`deserialize_named`] to match object keys to parameter names instead.
///
/// Arrays supply their elements, strings one argument per character, numbers
/// and booleans no arguments at all. `null` cannot be enumerated and fails
/// with [`ConstructionError::NotARecord`].
pub fn deserialize<S: Reconstruct>(text: &str) -> Result<S, JsonBridgeError> {
    let value = parse(text)?;
    let values = positional_values::<S>(value)?;
    log::debug!(
        "deserialize {}: {} positional argument(s) for {:?}",
        S::NAME,
        values.len(),
        S::PARAMETERS
    );
    Ok(construct(values)?)
}

/// Rebuilds a record by looking up each of `S`'s parameter names in a JSON object.
///
/// Keys the shape does not declare are ignored. A parameter with no matching
/// key gets no value, which `Option` parameters accept as `None`. Input that
/// is not an object is enumerated positionally, as in [`deserialize`].
pub fn deserialize_named<S: Reconstruct>(text: &str) -> Result<S, JsonBridgeError> {
    let values = match parse(text)? {
        Value::Object(map) => named_values::<S>(map),
        other => positional_values::<S>(other)?,
    };
    log::debug!(
        "deserialize_named {}: {} of {} parameter(s) matched",
        S::NAME,
        values.iter().filter(|v| v.is_some()).count(),
        S::PARAMETERS.len()
    );
    Ok(construct(values)?)
}

fn parse(text: &str) -> Result<Value, ParseError> {
    serde_json::from_str(text).map_err(ParseError::from)
}

fn positional_values<S: Reconstruct>(
    value: Value,
) -> Result<Vec<Option<Value>>, ConstructionError> {
    let values: Vec<Option<Value>> = match value {
        Value::Object(map) => map.into_iter().map(|(_, v)| Some(v)).collect(),
        Value::Array(items) => items.into_iter().map(Some).collect(),
        Value::String(s) => s.chars().map(|c| Some(Value::String(c.to_string()))).collect(),
        Value::Number(_) | Value::Bool(_) => Vec::new(),
        Value::Null => return Err(ConstructionError::NotARecord { shape: S::NAME }),
    };
    Ok(values)
}

fn named_values<S: Reconstruct>(mut map: Map<String, Value>) -> Vec<Option<Value>> {
    S::PARAMETERS.iter().map(|name| map.remove(*name)).collect()
}

fn construct<S: Reconstruct>(values: Vec<Option<Value>>) -> Result<S, ConstructionError> {
    let mut args = Arguments::new(S::NAME, values);
    let record = S::construct(&mut args)?;
    args.finish()?;
    Ok(record)
}
