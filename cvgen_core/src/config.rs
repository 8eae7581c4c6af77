use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::CvgenError;
use crate::CvgenResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 2] = ["cvgen.toml", ".cvgen.toml"];

/// Configuration loaded from a `cvgen.toml` file. Every field supplies a
/// default for the matching CLI flag; explicit flags always win.
///
/// ```toml
/// data = "cv-data.json"
/// template = "modern"
/// output = "cv-output.html"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CvgenConfig {
	/// Path to the JSON data file.
	#[serde(default)]
	pub data: Option<PathBuf>,
	/// Preset name or path to a template file.
	#[serde(default)]
	pub template: Option<String>,
	/// Path the rendered document is written to.
	#[serde(default)]
	pub output: Option<PathBuf>,
}

impl CvgenConfig {
	/// Load configuration from the first candidate file found under `root`.
	/// Returns `None` when no config file exists.
	pub fn load(root: &Path) -> CvgenResult<Option<Self>> {
		for candidate in CONFIG_FILE_CANDIDATES {
			let path = root.join(candidate);
			if !path.is_file() {
				continue;
			}

			let content = std::fs::read_to_string(&path)?;
			let config = toml::from_str(&content)
				.map_err(|error| CvgenError::ConfigParse(error.to_string()))?;
			tracing::debug!(path = %path.display(), "loaded config");
			return Ok(Some(config));
		}

		Ok(None)
	}
}
