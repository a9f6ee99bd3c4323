// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TracingError {
	#[error("invalid log filter `{filter}`: {reason}")]
	InvalidFilter {
		filter: String,
		reason: String,
	},

	#[error("unknown log format `{format}`")]
	UnknownFormat {
		format: String,
	},

	#[error("a global log subscriber is already installed")]
	AlreadyInitialized {
		reason: String,
	},
}

impl IntoDiagnostic for TracingError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TracingError::InvalidFilter {
				reason,
				..
			} => Diagnostic {
				code: "TRACE_001".to_string(),
				message,
				column: None,
				label: Some(reason),
				help: Some("use a level such as `info`, or directives like `tabula_dataframe=trace`"
					.to_string()),
				notes: vec![],
			},

			TracingError::UnknownFormat {
				..
			} => Diagnostic {
				code: "TRACE_002".to_string(),
				message,
				column: None,
				label: None,
				help: Some("supported formats are `text` and `json`".to_string()),
				notes: vec![],
			},

			TracingError::AlreadyInitialized {
				reason,
			} => Diagnostic {
				code: "TRACE_003".to_string(),
				message,
				column: None,
				label: Some(reason),
				help: None,
				notes: vec!["the subscriber can only be installed once per process".to_string()],
			},
		}
	}
}

impl From<TracingError> for Error {
	fn from(err: TracingError) -> Self {
		Error(err.into_diagnostic())
	}
}
