use serde_json::Number;

/// A context value resolved during rendering.
///
/// This is the tagged variant type behind the template syntax: name lookup is
/// defined only for [`Value::Mapping`], sections iterate over
/// [`Value::Sequence`] or descend into a single mapping, and everything else
/// is a scalar that can only be coerced to text.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Value {
	/// An explicit JSON `null`. Suppresses sections and coerces to `"null"`.
	Null,
	/// A boolean scalar.
	Bool(bool),
	/// A numeric scalar (integer or float).
	Number(Number),
	/// A string scalar. The only variant the current-item placeholder
	/// (`{{.}}`) resolves to.
	String(String),
	/// An ordered sequence of values. A section bound to a sequence renders
	/// its body once per element, in order.
	Sequence(Vec<Value>),
	/// A name-to-value mapping. Entry order follows the source document.
	Mapping(Vec<(String, Value)>),
}

impl Value {
	/// Look up `name` in this value. Defined only for mappings; every other
	/// variant returns `None`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		match self {
			Self::Mapping(entries) => {
				entries
					.iter()
					.find(|(key, _)| key == name)
					.map(|(_, value)| value)
			}
			_ => None,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Coerce this value to the text substituted for a variable placeholder.
	///
	/// Strings pass through unchanged, numbers and booleans use their display
	/// form, and `null` becomes the literal text `null`. Sequences join their
	/// coerced elements with commas. Mappings have no useful flat rendering
	/// and coerce to the empty string.
	pub fn coerce_to_text(&self) -> String {
		match self {
			Self::Null => "null".to_string(),
			Self::Bool(b) => b.to_string(),
			Self::Number(n) => n.to_string(),
			Self::String(s) => s.clone(),
			Self::Sequence(items) => {
				items
					.iter()
					.map(Self::coerce_to_text)
					.collect::<Vec<_>>()
					.join(",")
			}
			Self::Mapping(_) => String::new(),
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(b) => Self::Bool(b),
			serde_json::Value::Number(n) => Self::Number(n),
			serde_json::Value::String(s) => Self::String(s),
			serde_json::Value::Array(items) => {
				Self::Sequence(items.into_iter().map(Into::into).collect())
			}
			serde_json::Value::Object(entries) => {
				Self::Mapping(
					entries
						.into_iter()
						.map(|(key, value)| (key, value.into()))
						.collect(),
				)
			}
		}
	}
}
