// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Installs the process-wide `tracing` subscriber for tabula binaries.
//!
//! ```no_run
//! use tabula_sub_tracing::{Format, TracingFactory};
//! use tracing::Level;
//!
//! TracingFactory::with_configurator(|builder| builder.with_level(Level::INFO).with_format(Format::Json))
//! 	.create()
//! 	.and_then(|tracing| tracing.init())
//! 	.unwrap();
//! ```

pub mod builder;
pub mod error;
pub mod factory;

pub use builder::{Format, Tracing, TracingBuilder};
pub use error::TracingError;
pub use factory::{TracingConfigurator, TracingFactory};
