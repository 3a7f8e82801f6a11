use std::path::{Path, PathBuf};

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub enum Args {
	/// Evaluate a pipeline stored in a `.ron`, `.toml` or plain text file.
	Run {
		file_path: PathBuf,
		#[command(flatten)]
		options: Options,
	},
	/// Evaluate a pipeline written inline, e.g. `"range 0 10 | mul 3"`.
	Eval {
		pipeline: String,
		#[command(flatten)]
		options: Options,
	},
}

#[derive(Debug, Clone, clap::Args)]
pub struct Options {
	/// Stop after this many values.
	#[arg(short, long, default_value_t = 1000)]
	limit: usize,
	/// Write the loaded pipeline to this path as RON.
	#[arg(short, long)]
	dump_path: Option<PathBuf>,
	/// Write every span and event to this path as JSON.
	#[arg(long)]
	log_path: Option<PathBuf>,
}

impl Args {
	const fn options(&self) -> &Options {
		match self {
			Self::Run { options, .. } | Self::Eval { options, .. } => options,
		}
	}

	pub const fn limit(&self) -> usize {
		self.options().limit
	}

	pub fn dump_path(&self) -> Option<&Path> {
		self.options().dump_path.as_deref()
	}

	pub fn log_path(&self) -> Option<&Path> {
		self.options().log_path.as_deref()
	}
}
