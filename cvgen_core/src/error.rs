use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum CvgenError {
	#[error(transparent)]
	#[diagnostic(code(cvgen::io_error))]
	Io(#[from] std::io::Error),

	#[error("data file not found: `{0}`")]
	#[diagnostic(
		code(cvgen::missing_data_file),
		help("pass `--data <path>` or create the file; the default is `cv-data.json`")
	)]
	MissingDataFile(String),

	#[error("failed to parse data file `{path}`: {reason}")]
	#[diagnostic(
		code(cvgen::data_parse),
		help("the data file must be valid JSON; check for trailing commas or unquoted keys")
	)]
	DataParse { path: String, reason: String },

	#[error("template not found: `{0}`")]
	#[diagnostic(
		code(cvgen::missing_template),
		help("use one of the built-in presets (classic, modern, colorful, ocean, purple) or a path to a template file")
	)]
	MissingTemplate(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(cvgen::config_parse),
		help("check that cvgen.toml is valid TOML with optional `data`, `template`, and `output` keys")
	)]
	ConfigParse(String),

	#[error("failed to write output to `{path}`: {reason}")]
	#[diagnostic(code(cvgen::write_output))]
	WriteOutput { path: String, reason: String },
}

pub type CvgenResult<T> = Result<T, CvgenError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
