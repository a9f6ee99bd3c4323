// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::Result;

use crate::builder::{Tracing, TracingBuilder};

/// Configuration function for the log subscriber
pub type TracingConfigurator = Box<dyn FnOnce(TracingBuilder) -> TracingBuilder + Send>;

/// Creates a [`Tracing`] from an optional configurator
pub struct TracingFactory {
	configurator: Option<TracingConfigurator>,
}

impl TracingFactory {
	/// Create a new factory with default configuration
	pub fn new() -> Self {
		Self {
			configurator: None,
		}
	}

	/// Create a factory with a custom configurator
	pub fn with_configurator<F>(configurator: F) -> Self
	where
		F: FnOnce(TracingBuilder) -> TracingBuilder + Send + 'static,
	{
		Self {
			configurator: Some(Box::new(configurator)),
		}
	}

	pub fn create(self) -> Result<Tracing> {
		let builder = if let Some(configurator) = self.configurator {
			configurator(TracingBuilder::new())
		} else {
			TracingBuilder::default()
		};
		builder.build()
	}
}

impl Default for TracingFactory {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use tracing::Level;

	use super::*;
	use crate::Format;

	#[test]
	fn test_configurator_applied() {
		let tracing = TracingFactory::with_configurator(|builder| {
			builder.with_env(false).with_level(Level::INFO).with_format(Format::Json)
		})
		.create()
		.unwrap();
		assert_eq!(tracing.format(), Format::Json);
	}

	#[test]
	fn test_configurator_errors_surface() {
		let result =
			TracingFactory::with_configurator(|builder| builder.with_env(false).with_directive("=[")).create();
		assert!(result.is_err());
	}
}
