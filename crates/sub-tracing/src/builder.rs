// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use tabula_type::{Result, return_error};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::TracingError;

/// How log lines are written to stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
	#[default]
	Text,
	Json,
}

impl Display for Format {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Format::Text => f.write_str("text"),
			Format::Json => f.write_str("json"),
		}
	}
}

impl FromStr for Format {
	type Err = TracingError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"text" => Ok(Format::Text),
			"json" => Ok(Format::Json),
			_ => Err(TracingError::UnknownFormat {
				format: s.to_string(),
			}),
		}
	}
}

/// Configures the log subscriber.
///
/// Unless disabled with [`TracingBuilder::with_env`], a set `RUST_LOG`
/// replaces the configured level and directives.
#[derive(Clone, Debug)]
pub struct TracingBuilder {
	level: Level,
	directives: Vec<String>,
	format: Format,
	with_target: bool,
	use_env: bool,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			level: Level::DEBUG,
			directives: Vec::new(),
			format: Format::Text,
			with_target: true,
			use_env: true,
		}
	}

	pub fn with_level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}

	/// Adds a filter directive such as `tabula_dataframe=trace`.
	pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
		self.directives.push(directive.into());
		self
	}

	pub fn with_format(mut self, format: Format) -> Self {
		self.format = format;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.with_target = with_target;
		self
	}

	pub fn with_env(mut self, use_env: bool) -> Self {
		self.use_env = use_env;
		self
	}

	/// The filter string built from the level and directives.
	pub fn filter(&self) -> String {
		let mut parts = vec![self.level.as_str().to_ascii_lowercase()];
		parts.extend(self.directives.iter().cloned());
		parts.join(",")
	}

	pub fn build(self) -> Result<Tracing> {
		let env = if self.use_env {
			std::env::var(EnvFilter::DEFAULT_ENV).ok().filter(|value| !value.is_empty())
		} else {
			None
		};
		let filter = env.unwrap_or_else(|| self.filter());

		let env_filter = match EnvFilter::try_new(&filter) {
			Ok(env_filter) => env_filter,
			Err(err) => return_error!(TracingError::InvalidFilter {
				filter,
				reason: err.to_string(),
			}),
		};

		Ok(Tracing {
			filter: env_filter,
			format: self.format,
			with_target: self.with_target,
		})
	}
}

/// A configured subscriber, ready to be installed.
#[derive(Debug)]
pub struct Tracing {
	filter: EnvFilter,
	format: Format,
	with_target: bool,
}

impl Tracing {
	pub fn format(&self) -> Format {
		self.format
	}

	/// Installs the subscriber as the global default.
	pub fn init(self) -> Result<()> {
		let builder = tracing_subscriber::fmt()
			.with_env_filter(self.filter)
			.with_target(self.with_target)
			.with_writer(std::io::stderr);

		let installed = match self.format {
			Format::Text => builder.try_init(),
			Format::Json => builder.json().try_init(),
		};

		match installed {
			Ok(()) => Ok(()),
			Err(err) => return_error!(TracingError::AlreadyInitialized {
				reason: err.to_string(),
			}),
		}
	}
}
