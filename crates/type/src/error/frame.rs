// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, DiagnosticColumn, IntoDiagnostic};
use crate::Type;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameError {
	#[error("column `{column}` not found")]
	ColumnNotFound {
		column: String,
	},

	#[error("column `{column}` has type {actual}, expected {expected}")]
	ColumnTypeMismatch {
		column: String,
		expected: Type,
		actual: Type,
	},

	#[error("index has type {actual}, expected {expected}")]
	IndexTypeMismatch {
		expected: Type,
		actual: Type,
	},

	#[error("column `{column}` has {actual} rows, expected {expected}")]
	LengthMismatch {
		column: String,
		expected: usize,
		actual: usize,
	},
}

impl IntoDiagnostic for FrameError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			FrameError::ColumnNotFound {
				column,
			} => Diagnostic {
				code: "FRAME_001".to_string(),
				message,
				column: Some(DiagnosticColumn {
					name: column,
					r#type: None,
				}),
				label: Some("this column does not exist in the table".to_string()),
				help: Some("check for typos or ensure the column is loaded on both sides".to_string()),
				notes: vec![],
			},

			FrameError::ColumnTypeMismatch {
				column,
				expected,
				actual,
			} => Diagnostic {
				code: "FRAME_002".to_string(),
				message,
				column: Some(DiagnosticColumn {
					name: column,
					r#type: Some(actual),
				}),
				label: Some(format!("expected {}, found {}", expected, actual)),
				help: Some("columns are only combined when both sides hold the same element type".to_string()),
				notes: vec!["no implicit conversion is applied between element types".to_string()],
			},

			FrameError::IndexTypeMismatch {
				expected,
				actual,
			} => Diagnostic {
				code: "FRAME_003".to_string(),
				message,
				column: None,
				label: Some(format!("expected {}, found {}", expected, actual)),
				help: Some("join on a column instead, or load an index of the same type".to_string()),
				notes: vec!["joining on the index requires both tables to share the index type".to_string()],
			},

			FrameError::LengthMismatch {
				column,
				expected,
				actual,
			} => Diagnostic {
				code: "FRAME_004".to_string(),
				message,
				column: Some(DiagnosticColumn {
					name: column,
					r#type: None,
				}),
				label: Some(format!("expected {} rows", expected)),
				help: Some(format!("provide exactly {} values, one per index entry", expected)),
				notes: vec![format!("got {} values", actual)],
			},
		}
	}
}
