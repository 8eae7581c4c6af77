mod common;

use cvgen_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn renders_with_defaults() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_data(tmp.path(), "cv-data.json")?;

	let mut cmd = common::cvgen_cmd();
	cmd.current_dir(tmp.path())
		.assert()
		.success()
		.stdout(
			predicates::str::contains("CV generated successfully")
				.and(predicates::str::contains("Using template: classic"))
				.and(predicates::str::contains("Using data: cv-data.json")),
		);

	let output = std::fs::read_to_string(tmp.path().join("cv-output.html"))?;
	assert!(output.contains("Ada Lovelace"));
	assert!(output.contains("Analytical Engines Ltd"));
	assert!(!output.contains("{{#"));

	Ok(())
}

#[test]
fn renders_with_explicit_flags() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_data(tmp.path(), "my-cv.json")?;

	let mut cmd = common::cvgen_cmd();
	cmd.current_dir(tmp.path())
		.arg("--data")
		.arg("my-cv.json")
		.arg("--template")
		.arg("modern")
		.arg("--output")
		.arg("my-cv.html")
		.assert()
		.success()
		.stdout(predicates::str::contains("Using template: modern"));

	let output = std::fs::read_to_string(tmp.path().join("my-cv.html"))?;
	assert!(output.contains("Ada Lovelace"));

	Ok(())
}

#[test]
fn renders_custom_template_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_data(tmp.path(), "cv-data.json")?;
	std::fs::write(
		tmp.path().join("minimal.html"),
		"<h1>{{name}}</h1>{{#professional}}<i>{{.}}</i>{{/professional}}",
	)?;

	let mut cmd = common::cvgen_cmd();
	cmd.current_dir(tmp.path())
		.arg("--template")
		.arg("minimal.html")
		.assert()
		.success();

	let output = std::fs::read_to_string(tmp.path().join("cv-output.html"))?;
	assert_eq!(output, "<h1>Ada Lovelace</h1><i>Rust</i><i>Analysis</i>");

	Ok(())
}

#[test]
fn config_file_supplies_defaults() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_data(tmp.path(), "me.json")?;
	std::fs::write(
		tmp.path().join("cvgen.toml"),
		"data = \"me.json\"\ntemplate = \"ocean\"\noutput = \"me.html\"\n",
	)?;

	let mut cmd = common::cvgen_cmd();
	cmd.current_dir(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Using template: ocean"));

	assert!(tmp.path().join("me.html").is_file());

	Ok(())
}

#[test]
fn flags_override_config_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_data(tmp.path(), "cv-data.json")?;
	std::fs::write(tmp.path().join("cvgen.toml"), "template = \"ocean\"\n")?;

	let mut cmd = common::cvgen_cmd();
	cmd.current_dir(tmp.path())
		.arg("--template")
		.arg("purple")
		.assert()
		.success()
		.stdout(predicates::str::contains("Using template: purple"));

	Ok(())
}

#[test]
fn unresolved_placeholders_are_not_an_error() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	// A nearly empty record: most placeholders stay unresolved and the
	// sections are suppressed, but the render still succeeds.
	std::fs::write(
		tmp.path().join("cv-data.json"),
		r#"{"basicInfo": {"name": "Ada Lovelace"}}"#,
	)?;

	let mut cmd = common::cvgen_cmd();
	cmd.current_dir(tmp.path()).assert().success();

	let output = std::fs::read_to_string(tmp.path().join("cv-output.html"))?;
	assert!(output.contains("Ada Lovelace"));
	assert!(output.contains("{{email}}"));

	Ok(())
}
