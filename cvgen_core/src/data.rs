use std::path::Path;

use crate::CvgenError;
use crate::CvgenResult;
use crate::value::Value;

/// Sub-mappings whose entries are merged into the root context so templates
/// can reference them at the outer level (e.g. `{{name}}` instead of a
/// `basicInfo` section, `{{#professional}}` instead of `{{#skills}}`).
const FLATTENED_GROUPS: [&str; 2] = ["skills", "basicInfo"];

/// Load a CV data file: read it, parse it as JSON, and flatten it into the
/// render context. Reports missing files and parse failures as distinct
/// errors before any rendering happens.
pub fn load_data(path: &Path) -> CvgenResult<Value> {
	if !path.is_file() {
		return Err(CvgenError::MissingDataFile(path.display().to_string()));
	}

	let content = std::fs::read_to_string(path)?;
	let json: serde_json::Value =
		serde_json::from_str(&content).map_err(|error| {
			CvgenError::DataParse {
				path: path.display().to_string(),
				reason: error.to_string(),
			}
		})?;

	tracing::debug!(path = %path.display(), "loaded CV data");
	Ok(flatten(json.into()))
}

/// Merge the entries of known sub-mappings (`skills`, `basicInfo`) upward
/// into the root mapping. The group entries themselves are kept; on a key
/// collision the hoisted entry wins, later groups overriding earlier ones.
/// Non-mapping roots and non-mapping groups pass through untouched.
pub fn flatten(value: Value) -> Value {
	let Value::Mapping(mut entries) = value else {
		return value;
	};

	for group in FLATTENED_GROUPS {
		let Some(Value::Mapping(group_entries)) = entries
			.iter()
			.find(|(key, _)| key == group)
			.map(|(_, value)| value.clone())
		else {
			continue;
		};

		for (key, value) in group_entries {
			match entries.iter_mut().find(|(existing, _)| *existing == key) {
				Some(entry) => entry.1 = value,
				None => entries.push((key, value)),
			}
		}
	}

	Value::Mapping(entries)
}
