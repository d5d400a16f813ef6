use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The JSON shape an endpoint declares for its 2xx response body.
///
/// The parsed body is checked against it before being decoded into the caller's type.
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ResponseShape {
	/// A JSON object decoded into a struct.
	Record,
	/// A JSON array.
	Sequence,
	/// A JSON object decoded into a map.
	Mapping,
	/// A bare string, number, or boolean.
	Scalar,
}

impl ResponseShape {
	/// Returns the JSON type name of `value` when it does not match this shape.
	pub(crate) fn mismatch(&self, value: &Value) -> Option<&'static str> {
		let matches = match self {
			Self::Record | Self::Mapping => value.is_object(),
			Self::Sequence => value.is_array(),
			Self::Scalar => value.is_string() || value.is_number() || value.is_boolean(),
		};
		if matches { None } else { Some(json_type_name(value)) }
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
