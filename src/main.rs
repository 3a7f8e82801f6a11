mod args;

use std::{
	ffi::OsStr,
	fs,
	io::{self, prelude::*},
	path::Path,
};

use clap::Parser as _;
use color_eyre::Result;
use lazyseq_pipeline::Pipeline;
use ron::ser::PrettyConfig;
use serde::Serialize as _;
use tracing::{Span, debug, info, warn};
use tracing_error::ErrorLayer;
use tracing_indicatif::{IndicatifLayer, span_ext::IndicatifSpanExt, style::ProgressStyle};
use tracing_subscriber::{
	EnvFilter,
	fmt::{self, format::FmtSpan},
	prelude::*,
};

use self::args::Args;

#[cfg(target_os = "windows")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
	let args = match Args::try_parse() {
		Ok(a) => a,
		Err(e) => {
			eprintln!("{e}");
			return Ok(());
		}
	};

	install_tracing(args.log_path())?;
	color_eyre::install()?;

	let pipeline = load(&args)?;

	info!(%pipeline, "loaded pipeline");

	if let Some(dump_path) = args.dump_path() {
		fs::write(dump_path, to_ron(&pipeline)?)?;

		info!(path = %dump_path.display(), "wrote pipeline");
	}

	let values = evaluate(&pipeline, args.limit())?;

	let mut stdout = io::stdout().lock();

	for value in values {
		writeln!(stdout, "{value}")?;
	}

	stdout.flush()?;

	Ok(())
}

fn load(args: &Args) -> Result<Pipeline> {
	let pipeline: Pipeline = match args {
		Args::Eval { pipeline, .. } => pipeline.parse()?,
		Args::Run { file_path, .. } => {
			let raw_data = fs::read_to_string(file_path)?;

			debug!(path = %file_path.display(), "read {} bytes", raw_data.len());

			match file_path.extension().and_then(OsStr::to_str) {
				Some("ron") => ron::from_str(&raw_data)?,
				Some("toml") => toml::from_str(&raw_data)?,
				_ => raw_data.parse()?,
			}
		}
	};

	Ok(pipeline)
}

#[tracing::instrument(skip_all, fields(indicatif.pb_show = tracing::field::Empty))]
fn evaluate(pipeline: &Pipeline, limit: usize) -> Result<Vec<i64>> {
	let span = Span::current();
	span.pb_set_style(
		&ProgressStyle::with_template(
			"{span_child_prefix}{spinner} {span_name} [{elapsed_precise}] [{bar:38}] {pos}/{len}",
		)?
		.progress_chars("#>-"),
	);
	span.pb_set_length(limit as u64);

	let mut seq = pipeline.build()?;

	let values = seq
		.by_ref()
		.take(limit)
		.inspect(|_| span.pb_inc(1))
		.collect_to::<Vec<_>>();

	if values.len() == limit && seq.maybe_front().is_some() {
		warn!(limit, "pipeline produced more values than the limit, output truncated");
	}

	info!("evaluated {} values", values.len());

	Ok(values)
}

fn install_tracing(log_path: Option<&Path>) -> Result<()> {
	let indicatif_layer = IndicatifLayer::new().with_progress_style(
		ProgressStyle::with_template(
			"{span_child_prefix}{spinner} {span_name}({span_fields}) [{elapsed_precise}]",
		)?
		.progress_chars("#>-"),
	);

	let filter_layer =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let fmt_layer = fmt::layer()
		.with_target(false)
		.with_writer(indicatif_layer.get_stderr_writer())
		.with_filter(filter_layer);

	let json_file_layer = match log_path {
		Some(path) => {
			let json_log_file = fs::OpenOptions::new()
				.create(true)
				.truncate(true)
				.write(true)
				.open(path)?;

			Some(
				fmt::layer()
					.with_ansi(false)
					.json()
					.flatten_event(true)
					.with_span_events(FmtSpan::FULL)
					.with_writer(json_log_file),
			)
		}
		None => None,
	};

	tracing_subscriber::registry()
		.with(json_file_layer)
		.with(fmt_layer)
		.with(indicatif_layer)
		.with(ErrorLayer::default())
		.init();

	Ok(())
}

fn to_ron(pipeline: &Pipeline) -> Result<String> {
	let mut output = String::new();
	let mut serializer = ron::Serializer::with_options(
		&mut output,
		Some(PrettyConfig::new().separate_tuple_members(true)),
		&ron::Options::default(),
	)?;

	pipeline.serialize(&mut serializer)?;

	Ok(output)
}
