use std::path::PathBuf;

use clap::Parser;
use cvgen_core::CvgenConfig;

/// Default JSON data file, matching the path `cvgen init`-style setups use.
pub const DEFAULT_DATA_PATH: &str = "cv-data.json";
/// Default template preset.
pub const DEFAULT_TEMPLATE: &str = "classic";
/// Default output path for the rendered document.
pub const DEFAULT_OUTPUT_PATH: &str = "cv-output.html";

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate a styled HTML CV from a JSON record.",
	long_about = "cvgen renders a CV document by substituting data from a JSON record into a \
	              Mustache-style HTML template.\n\nFive presets ship with the binary: classic, \
	              modern, colorful, ocean, and purple. Any other template value is treated as a \
	              path to a template file.\n\nQuick start:\n  cvgen                          \
	              Render cv-data.json with the classic preset\n  cvgen --template modern        \
	              Pick a different preset\n  cvgen --data me.json --output me.html\n\nDefaults \
	              can also be set in a cvgen.toml file in the working directory."
)]
pub struct CvgenCli {
	/// Path to the JSON data file.
	#[arg(long, short)]
	pub data: Option<PathBuf>,

	/// Template preset name (classic, modern, colorful, ocean, purple) or a
	/// path to a template file.
	#[arg(long, short)]
	pub template: Option<String>,

	/// Output path for the generated CV.
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

/// The fully resolved inputs for one render: CLI flags win over `cvgen.toml`
/// values, which win over the built-in defaults.
#[derive(Debug)]
pub struct RenderArgs {
	pub data: PathBuf,
	pub template: String,
	pub output: PathBuf,
}

impl CvgenCli {
	pub fn resolve(&self, config: Option<&CvgenConfig>) -> RenderArgs {
		let data = self
			.data
			.clone()
			.or_else(|| config.and_then(|config| config.data.clone()))
			.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
		let template = self
			.template
			.clone()
			.or_else(|| config.and_then(|config| config.template.clone()))
			.unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());
		let output = self
			.output
			.clone()
			.or_else(|| config.and_then(|config| config.output.clone()))
			.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

		RenderArgs {
			data,
			template,
			output,
		}
	}
}
