//! RSI CLI Utility
//!
//! A command-line tool for converting DMI files to RSI directories and inspecting both.
//!
//! # Features
//!
//! - **import**: Convert one DMI file into an RSI directory
//! - **convert**: Convert every DMI file in a directory, continuing past failures
//! - **info**: Display the states of a DMI file or RSI directory
//! - **verify**: Check that an RSI directory loads cleanly and survives a save/open round trip
//!
//! # Settings
//!
//! Conversion defaults are read from an optional TOML file and from `RSI_*`
//! environment variables, the latter taking precedence:
//!
//! ```toml
//! [convert]
//! default_license = "CC-BY-SA-3.0"
//! default_copyright = "Taken from tgstation"
//!
//! [save]
//! minify_json = true
//! ```
//!
//! ```bash
//! RSI_CONVERT__DEFAULT_LICENSE=CC-BY-SA-3.0 RSI_SAVE__MINIFY_JSON=true ...
//! ```
//!
//! # Usage
//!
//! ```bash
//! # Convert a single file (writes mob.rsi/ next to it)
//! cargo run --example rsi_utils -- import mob.dmi
//!
//! # Convert a directory of DMI files with settings
//! cargo run --example rsi_utils -- --config rsi.toml convert icons/ out/
//!
//! # Show states of a DMI file or an RSI directory
//! cargo run --example rsi_utils -- info mob.rsi --detailed
//!
//! # Verify an RSI directory
//! cargo run --example rsi_utils -- verify mob.rsi
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use rsi_rs::prelude::*;
use serde::Deserialize;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let settings = Settings::load(cli.config.as_deref())?;

	match cli.command {
		Command::Import(args) => run_import(args, &settings),
		Command::Convert(args) => run_convert(args, &settings),
		Command::Info(args) => run_info(args, &settings),
		Command::Verify(args) => run_verify(args, &settings),
	}
}

#[derive(Parser)]
#[command(name = "rsi_utils")]
#[command(author = "rsi-rs project")]
#[command(version)]
#[command(about = "RSI sprite utility - convert DMI files, inspect and verify RSIs", long_about = None)]
struct Cli {
	/// TOML settings file
	#[arg(short, long, global = true, value_name = "FILE", env = "RSI_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Convert a DMI file into an RSI directory
	Import(ImportArgs),
	/// Convert every DMI file in a directory
	Convert(ConvertArgs),
	/// Display information about a DMI file or RSI directory
	Info(InfoArgs),
	/// Verify that an RSI directory loads and round-trips
	Verify(VerifyArgs),
}

#[derive(Args)]
struct ImportArgs {
	/// Input DMI file
	#[arg(value_name = "INPUT_DMI")]
	input: PathBuf,

	/// Output directory (defaults to `<input stem>.rsi` next to the input)
	#[arg(short, long, value_name = "OUTPUT_DIR")]
	output: Option<PathBuf>,

	/// License to write when none is configured
	#[arg(short, long)]
	license: Option<String>,

	/// Copyright to write when none is configured
	#[arg(long)]
	copyright: Option<String>,
}

#[derive(Args)]
struct ConvertArgs {
	/// Directory containing DMI files
	#[arg(value_name = "INPUT_DIR")]
	input: PathBuf,

	/// Directory receiving the RSI directories
	#[arg(value_name = "OUTPUT_DIR")]
	output: PathBuf,

	/// Exit with an error when any file fails
	#[arg(long, default_value_t = false)]
	fail_on_error: bool,
}

#[derive(Args)]
struct InfoArgs {
	/// DMI file or RSI directory
	#[arg(value_name = "PATH")]
	input: PathBuf,

	/// Show per-direction frame information
	#[arg(short, long, default_value_t = false)]
	detailed: bool,
}

#[derive(Args)]
struct VerifyArgs {
	/// RSI directory
	#[arg(value_name = "RSI_DIR")]
	input: PathBuf,

	/// Exit with an error when a state fails to load
	#[arg(long, default_value_t = false)]
	fail_on_warning: bool,
}

/// Conversion and save options, layered from a file and the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Settings {
	convert: ConvertConfig,
	save: SaveConfig,
}

impl Settings {
	fn load(path: Option<&Path>) -> Result<Self> {
		let mut builder = config::Config::builder();
		if let Some(path) = path {
			builder = builder.add_source(config::File::from(path));
		}

		builder
			.add_source(config::Environment::with_prefix("RSI").separator("__"))
			.build()
			.context("Failed to read settings")?
			.try_deserialize()
			.context("Invalid settings")
	}
}

fn run_import(args: ImportArgs, settings: &Settings) -> Result<()> {
	let mut convert = settings.convert.clone();
	if convert.default_license.is_none() {
		convert.default_license = args.license;
	}
	if convert.default_copyright.is_none() {
		convert.default_copyright = args.copyright;
	}

	let output = match args.output {
		Some(output) => output,
		None => {
			let parent = args.input.parent().unwrap_or(Path::new("."));
			rsi_rs::rsi_types::batch::output_path_for(&args.input, parent)
		}
	};

	let rsi = dmi::import_file(&args.input, &convert)
		.with_context(|| format!("Cannot import {}", args.input.display()))?;
	rsi.save(&output, &settings.save).with_context(|| format!("Cannot write {}", output.display()))?;

	info!("{} -> {} ({} states)", args.input.display(), output.display(), rsi.states().len());
	Ok(())
}

fn run_convert(args: ConvertArgs, settings: &Settings) -> Result<()> {
	if !args.input.is_dir() {
		bail!("{} is not a directory", args.input.display());
	}

	let report = convert_directory(&args.input, &args.output, &settings.convert, &settings.save)
		.with_context(|| format!("Cannot list {}", args.input.display()))?;

	println!("Converted: {}", report.converted.len());
	println!("Failed:    {}", report.failed.len());
	for (path, err) in &report.failed {
		println!("  {} - {}", path.display(), err);
	}

	if args.fail_on_error && !report.is_success() {
		bail!("{} of {} files failed", report.failed.len(), report.total());
	}

	Ok(())
}

fn run_info(args: InfoArgs, settings: &Settings) -> Result<()> {
	let Some(source) = Source::detect(&args.input) else {
		bail!("{} is neither a .dmi file nor an RSI directory", args.input.display());
	};

	let loaded = source.load(&settings.convert).with_context(|| format!("Cannot load {source}"))?;
	let rsi = &loaded.rsi;

	println!("{source}");
	println!("  Version:   {}", rsi.version());
	println!("  Tile size: {}", rsi.size());
	println!("  License:   {}", rsi.license().unwrap_or("-"));
	println!("  Copyright: {}", rsi.copyright().unwrap_or("-"));
	println!("  States:    {}", rsi.states().len());

	for (index, state) in rsi.states().iter().enumerate() {
		println!("  [{index:3}] {state} ({:?})", state.population());

		if args.detailed {
			for direction in state.directions().directions() {
				let frames = state.frame_count(direction.index());
				let delays = state.delays().and_then(|d| d.get(direction.index()));
				match delays {
					Some(delays) => println!("        {direction:<10} {frames} frames, delays {delays:?}"),
					None => println!("        {direction:<10} {frames} frames"),
				}
			}
		}
	}

	for warning in &loaded.warnings {
		warn!("{warning}");
	}

	Ok(())
}

fn run_verify(args: VerifyArgs, settings: &Settings) -> Result<()> {
	let loaded = Rsi::open(&args.input).with_context(|| format!("Cannot open {}", args.input.display()))?;
	for warning in &loaded.warnings {
		warn!("{warning}");
	}

	let incomplete: Vec<_> =
		loaded.rsi.states().iter().filter(|s| s.population() != FramePopulation::Loaded).map(RsiState::name).collect();
	if !incomplete.is_empty() {
		warn!("States with missing frames: {}", incomplete.join(", "));
	}

	let scratch = tempfile::tempdir().context("Cannot create scratch directory")?;
	loaded.rsi.save(scratch.path(), &settings.save)?;
	let reopened = Rsi::open(scratch.path())?;

	if reopened.rsi != loaded.rsi {
		bail!("{} does not survive a save/open round trip", args.input.display());
	}
	println!("✓ {} round-trips ({} states)", args.input.display(), loaded.rsi.states().len());

	if args.fail_on_warning && !loaded.is_clean() {
		bail!("{} warnings while loading", loaded.warnings.len());
	}

	Ok(())
}
