mod common;

use cvgen_core::AnyEmptyResult;

#[test]
fn missing_data_file_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::cvgen_cmd();
	cmd.current_dir(tmp.path())
		.assert()
		.failure()
		.stderr(predicates::str::contains("data file not found"));

	// No partial output is written when a collaborator fails.
	assert!(!tmp.path().join("cv-output.html").exists());

	Ok(())
}

#[test]
fn malformed_data_file_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("cv-data.json"), "{not json")?;

	let mut cmd = common::cvgen_cmd();
	cmd.current_dir(tmp.path())
		.assert()
		.failure()
		.stderr(predicates::str::contains("failed to parse data file"));

	assert!(!tmp.path().join("cv-output.html").exists());

	Ok(())
}

#[test]
fn unknown_template_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_data(tmp.path(), "cv-data.json")?;

	let mut cmd = common::cvgen_cmd();
	cmd.current_dir(tmp.path())
		.arg("--template")
		.arg("no-such-preset")
		.assert()
		.failure()
		.stderr(predicates::str::contains("template not found"));

	assert!(!tmp.path().join("cv-output.html").exists());

	Ok(())
}

#[test]
fn malformed_config_file_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_data(tmp.path(), "cv-data.json")?;
	std::fs::write(tmp.path().join("cvgen.toml"), "data = [broken")?;

	let mut cmd = common::cvgen_cmd();
	cmd.current_dir(tmp.path())
		.assert()
		.failure()
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}
