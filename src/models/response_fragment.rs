use serde_json::{Map, Value};

/// One JSON object decoded from a single line of the generate stream.
///
/// Only `response` contributes to the review text; an absent `response`
/// counts as empty. The service also sends `done: true` on its
/// last line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResponseFragment {
    pub response: Option<String>,
    pub done: bool,
}

impl ResponseFragment {
    /// Reads the fragment fields out of a decoded JSON object. Fails when
    /// `response` is present but is not a string, `null` included.
    pub fn from_object(object: &Map<String, Value>) -> Result<Self, String> {
        let response = match object.get("response") {
            None => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => {
                return Err(format!(
                    "`response` must be a string, found {}",
                    json_kind(other)
                ))
            }
        };
        let done = object.get("done").and_then(Value::as_bool).unwrap_or(false);

        Ok(Self { response, done })
    }

    pub fn text(&self) -> &str {
        self.response.as_deref().unwrap_or("")
    }
}

/// Short name of a JSON value's type for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
