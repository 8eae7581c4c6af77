use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn cvgen_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("cvgen"));
	cmd.env("NO_COLOR", "1");
	cmd
}

/// Write a small but complete CV data file into `dir`.
#[allow(dead_code)]
pub fn write_sample_data(dir: &Path, file_name: &str) -> std::io::Result<()> {
	let data = serde_json::json!({
		"basicInfo": {
			"name": "Ada Lovelace",
			"title": "Software Engineer",
			"email": "ada@example.com",
			"phone": "+44 20 0000 0000",
			"location": "London",
			"website": "https://example.com",
			"summary": "Engineer with a focus on analytical machines.",
		},
		"skills": {
			"professional": ["Rust", "Analysis"],
			"competent": ["Go"],
			"plus": ["Writing"],
		},
		"experience": [{
			"position": "Analyst",
			"company": "Analytical Engines Ltd",
			"period": "1842 — 1843",
			"description": "Translated and annotated.",
			"highlights": ["Published the first program"],
		}],
		"education": [{
			"degree": "Mathematics",
			"institution": "Private tuition",
			"period": "1830s",
		}],
		"languages": [{"language": "English", "level": "Native"}],
	});

	std::fs::write(
		dir.join(file_name),
		serde_json::to_string_pretty(&data).expect("serializable sample data"),
	)
}
