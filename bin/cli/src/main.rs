// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use clap::Parser;
use tabula_sub_tracing::{TracingBuilder, TracingFactory};

use crate::cli::Args;

mod cli;

fn tracing_configuration(args: &Args) -> impl FnOnce(TracingBuilder) -> TracingBuilder + Send + 'static {
	let (level, format) = (args.log_level, args.log_format);
	move |tracing| tracing.with_level(level).with_format(format).with_target(false)
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	TracingFactory::with_configurator(tracing_configuration(&args)).create()?.init()?;

	cli::run(&args)
}
