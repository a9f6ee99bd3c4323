// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tabula_dataframe::{DataFrame, JoinPolicy};
use tabula_sub_tracing::Format;
use tracing::{Level, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	Text,
	Json,
}

/// Join two tables stored as JSON.
#[derive(Debug, Parser)]
#[command(name = "tabula", version, about = "Join two columnar tables by index or by a shared column.")]
pub struct Args {
	/// Left table.
	pub lhs: PathBuf,

	/// Right table.
	pub rhs: PathBuf,

	/// Join on this column instead of the row index.
	#[arg(long, value_name = "COLUMN")]
	pub on: Option<String>,

	/// inner, left, right or full. Unrecognized values join on both sides.
	#[arg(long, default_value = "left_right_join")]
	pub how: String,

	#[arg(long, value_enum, default_value = "text")]
	pub format: OutputFormat,

	/// Write the result here instead of stdout.
	#[arg(long, short, value_name = "PATH")]
	pub output: Option<PathBuf>,

	#[arg(long, default_value = "debug")]
	pub log_level: Level,

	#[arg(long, default_value = "text")]
	pub log_format: Format,
}

impl Args {
	pub fn policy(&self) -> JoinPolicy {
		JoinPolicy::from(self.how.as_str())
	}
}

fn load(path: &Path) -> Result<DataFrame> {
	let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
	serde_json::from_str(&text).with_context(|| format!("failed to parse table {}", path.display()))
}

pub fn render(result: &DataFrame, format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Text => Ok(result.to_string()),
		OutputFormat::Json => {
			let mut json = serde_json::to_string_pretty(result).context("failed to serialize result")?;
			json.push('\n');
			Ok(json)
		}
	}
}

pub fn join(lhs: &DataFrame, rhs: &DataFrame, on: Option<&str>, policy: JoinPolicy) -> Result<DataFrame> {
	let result = match on {
		Some(column) => lhs
			.join_by_column(rhs, column, policy)
			.with_context(|| format!("failed to join on `{column}`"))?,
		None => lhs.join_by_index(rhs, policy).context("failed to join on the index")?,
	};
	Ok(result)
}

pub fn run(args: &Args) -> Result<()> {
	let lhs = load(&args.lhs)?;
	let rhs = load(&args.rhs)?;
	let policy = args.policy();
	info!(lhs = %args.lhs.display(), rhs = %args.rhs.display(), %policy, "joining tables");

	let result = join(&lhs, &rhs, args.on.as_deref(), policy)?;
	let rendered = render(&result, args.format)?;

	match &args.output {
		Some(path) => fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))?,
		None => print!("{rendered}"),
	}
	Ok(())
}
