use serde::Serialize;

/// A single scalar written as the value of a keyed field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue<'a> {
    Bool(bool),
    Int(i64),
    /// Non-finite floats have no JSON representation and are written as
    /// `null`.
    Float(f64),
    Str(&'a str),
}

impl std::convert::From<bool> for ScalarValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<i64> for ScalarValue<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for ScalarValue<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl<'a> std::convert::From<&'a str> for ScalarValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}
impl std::convert::From<ScalarValue<'_>> for serde_json::Value {
    fn from(value: ScalarValue<'_>) -> Self {
        match value {
            ScalarValue::Bool(b) => serde_json::Value::Bool(b),
            ScalarValue::Int(i) => serde_json::Value::from(i),
            ScalarValue::Float(f) => serde_json::Value::from(f),
            ScalarValue::Str(s) => serde_json::Value::String(s.to_string()),
        }
    }
}
