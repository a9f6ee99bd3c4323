// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();

		let _ = writeln!(&mut output, "error[{}]: {}", d.code, d.message);

		if let Some(label) = &d.label {
			let _ = writeln!(&mut output, "  = {}", label);
		}

		if let Some(col) = &d.column {
			match &col.r#type {
				Some(ty) => {
					let _ = writeln!(&mut output, "\nnote: column `{}` is of type `{}`", col.name, ty);
				}
				None => {
					let _ = writeln!(&mut output, "\nnote: column `{}`", col.name);
				}
			}
		}

		if let Some(help) = &d.help {
			let _ = writeln!(&mut output, "\nhelp: {}", help);
		}

		for note in &d.notes {
			let _ = writeln!(&mut output, "\nnote: {}", note);
		}

		output
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::DiagnosticColumn;

	#[test]
	fn test_render_code_and_message() {
		let d = Diagnostic {
			code: "FRAME_001".to_string(),
			message: "column `x` not found".to_string(),
			column: Some(DiagnosticColumn {
				name: "x".to_string(),
				r#type: None,
			}),
			label: None,
			help: Some("check the column name".to_string()),
			notes: vec![],
		};

		let out = DefaultRenderer::render_string(&d);
		assert!(out.starts_with("error[FRAME_001]: column `x` not found\n"));
		assert!(out.contains("note: column `x`"));
		assert!(out.contains("help: check the column name"));
	}
}
