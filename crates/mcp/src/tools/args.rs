// Typed access to tool-call arguments

use litcal_core::validation::parse_year_text;
use litcal_core::{LitcalError, LitcalResult};
use serde_json::{Map, Value};

/// Arguments of one tool call.
///
/// Missing keys and explicit `null` both mean "not given".
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    values: Map<String, Value>,
}

impl ToolArgs {
    pub fn parse(arguments: Value) -> LitcalResult<Self> {
        match arguments {
            Value::Null => Ok(Self::default()),
            Value::Object(values) => Ok(Self { values }),
            other => Err(LitcalError::invalid_parameter(
                "arguments",
                format!("expected a JSON object, got {}", type_name(&other)),
            )),
        }
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    pub fn string(&self, name: &str) -> LitcalResult<Option<&str>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(wrong_type(name, "a string", other)),
        }
    }

    /// Booleans must be JSON booleans; `"true"` strings are rejected.
    pub fn boolean(&self, name: &str) -> LitcalResult<Option<bool>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(wrong_type(name, "a boolean", other)),
        }
    }

    /// A year as a JSON integer or a string of digits; range checks come later.
    pub fn year(&self, name: &str) -> LitcalResult<Option<i64>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| LitcalError::invalid_parameter(name, format!("{} is not a year", n))),
            Some(Value::String(s)) => parse_year_text(s),
            Some(other) => Err(wrong_type(name, "an integer", other)),
        }
    }
}

fn wrong_type(name: &str, expected: &str, got: &Value) -> LitcalError {
    LitcalError::invalid_parameter(name, format!("expected {}, got {}", expected, type_name(got)))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
