use std::path::Path;

use crate::CvgenError;
use crate::CvgenResult;

/// A built-in CV template shipped with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Preset {
	/// Serif layout with a traditional two-column header.
	Classic,
	/// Sans-serif layout with a sidebar.
	Modern,
	/// Bold accent colors on section headings.
	Colorful,
	/// Blue-green palette with a banner header.
	Ocean,
	/// Purple gradient header with pill-style skill tags.
	Purple,
}

impl Preset {
	pub const ALL: [Self; 5] = [
		Self::Classic,
		Self::Modern,
		Self::Colorful,
		Self::Ocean,
		Self::Purple,
	];

	pub fn name(self) -> &'static str {
		match self {
			Self::Classic => "classic",
			Self::Modern => "modern",
			Self::Colorful => "colorful",
			Self::Ocean => "ocean",
			Self::Purple => "purple",
		}
	}

	/// The embedded template source for this preset.
	pub fn content(self) -> &'static str {
		match self {
			Self::Classic => include_str!("../templates/classic.html"),
			Self::Modern => include_str!("../templates/modern.html"),
			Self::Colorful => include_str!("../templates/colorful.html"),
			Self::Ocean => include_str!("../templates/ocean.html"),
			Self::Purple => include_str!("../templates/purple.html"),
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|preset| preset.name() == name)
	}
}

impl std::fmt::Display for Preset {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// Resolve a `--template` argument to template text. A preset name loads the
/// embedded template; anything else is treated as a filesystem path and must
/// exist.
pub fn load_template(name_or_path: &str) -> CvgenResult<String> {
	if let Some(preset) = Preset::from_name(name_or_path) {
		tracing::debug!(preset = %preset, "using built-in template");
		return Ok(preset.content().to_string());
	}

	let path = Path::new(name_or_path);
	if !path.is_file() {
		return Err(CvgenError::MissingTemplate(name_or_path.to_string()));
	}

	tracing::debug!(path = %path.display(), "using template file");
	Ok(std::fs::read_to_string(path)?)
}
