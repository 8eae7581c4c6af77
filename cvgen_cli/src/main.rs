use std::process;

use clap::Parser;
use cvgen_cli::CvgenCli;
use cvgen_cli::RenderArgs;
use cvgen_core::CvgenConfig;
use cvgen_core::CvgenError;
use cvgen_core::load_data;
use cvgen_core::load_template;
use cvgen_core::render;
use owo_colors::OwoColorize;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = CvgenCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose);

	if let Err(e) = run(&args) {
		// Render through miette for rich diagnostics with help text and
		// error codes.
		match e.downcast::<CvgenError>() {
			Ok(cvgen_err) => {
				let report: miette::Report = (*cvgen_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(1);
	}
}

fn init_tracing(verbose: bool) {
	let default_directive = if verbose { "cvgen_core=debug" } else { "warn" };
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn run(args: &CvgenCli) -> cvgen_core::AnyEmptyResult {
	let cwd = std::env::current_dir()?;
	let config = CvgenConfig::load(&cwd)?;
	let resolved: RenderArgs = args.resolve(config.as_ref());

	// Data and template errors surface before anything is written, so a
	// failed invocation never leaves a partial output file behind.
	let context = load_data(&resolved.data)?;
	let template = load_template(&resolved.template)?;

	let rendered = render(&template, &context);

	std::fs::write(&resolved.output, &rendered).map_err(|error| {
		CvgenError::WriteOutput {
			path: resolved.output.display().to_string(),
			reason: error.to_string(),
		}
	})?;

	println!(
		"{} {}",
		colored!("CV generated successfully:", green),
		resolved.output.display()
	);
	println!("Using template: {}", resolved.template);
	println!("Using data: {}", resolved.data.display());

	Ok(())
}
