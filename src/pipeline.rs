//! # Validation Pipelines
//!
//! A pipeline is an ordered slice of stages. Each stage is a plain function over a request
//! context that either lets the request through or rejects it with an [`ApiError`].
//! [`run_stages`] stops at the first rejection, so the error a caller sees is always the
//! one from the earliest failing stage.
//!
//! The helpers below make "is this field present" explicit: a field counts as present
//! only when it is a non-empty JSON string. `null`, a missing key, `""` and non-string
//! values are all absent.

use crate::error::ApiError;
use serde_json::{Map, Value};

/// Runs `stages` in order, halting on the first failure.
///
/// Stages are usually higher-ranked `fn` pointers (see
/// [`DishStage`](crate::dish_actor::DishStage)) so one `const` list serves requests that
/// borrow from any body.
pub fn run_stages<C, F>(stages: &[F], ctx: &C) -> Result<(), ApiError>
where
    F: Fn(&C) -> Result<(), ApiError>,
{
    stages.iter().try_for_each(|stage| stage(ctx))
}

/// The `data` object of a request body; an absent or non-object `data` reads as empty.
pub fn body_data(body: &Value) -> Map<String, Value> {
    body.get("data")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// A field that holds a non-empty string.
pub fn text_field<'a>(data: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    data.get(name)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// A client-supplied `id` in the body. Empty strings, `0`, `false` and `null` count as not
/// supplied; other strings, numbers and `true` are rendered as text for comparison with the
/// route.
pub fn supplied_id(data: &Map<String, Value>) -> Option<String> {
    match data.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}

/// A JSON number with no fractional part, strictly greater than zero. `5.0` counts.
pub fn positive_integer(value: Option<&Value>) -> Option<u64> {
    let Value::Number(number) = value? else {
        return None;
    };
    let whole = match number.as_u64() {
        Some(n) => n,
        None => {
            let f = number.as_f64()?;
            if f.fract() != 0.0 || f < 1.0 || f > u64::MAX as f64 {
                return None;
            }
            f as u64
        }
    };
    (whole > 0).then_some(whole)
}
