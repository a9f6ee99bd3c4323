// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use unicode_width::UnicodeWidthStr;

use super::DataFrame;
use crate::ColumnData;

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

fn centered(value: &str, w: usize) -> String {
	let pad = w - value.width();
	let l = pad / 2;
	let r = pad - l;
	format!(" {:l$}{}{:r$} ", "", value, "")
}

impl Display for DataFrame {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let row_count = self.row_count();

		let all: Vec<(&str, &ColumnData)> =
			std::iter::once((self.index_name.as_str(), &self.index)).chain(self.columns()).collect();

		let mut col_widths: Vec<usize> = Vec::with_capacity(all.len());
		for (name, data) in &all {
			let header_width = escape_control_chars(name).width();
			let mut max_val_width = 0;
			for i in 0..data.len() {
				max_val_width = max_val_width.max(escape_control_chars(&data.as_string(i)).width());
			}
			col_widths.push(header_width.max(max_val_width) + 2);
		}

		let sep = col_widths.iter().map(|w| format!("+{}", "-".repeat(*w + 2))).collect::<String>() + "+";

		writeln!(f, "{}", sep)?;

		let header: Vec<String> = all
			.iter()
			.zip(&col_widths)
			.map(|((name, _), w)| centered(&escape_control_chars(name), *w))
			.collect();
		writeln!(f, "|{}|", header.join("|"))?;
		writeln!(f, "{}", sep)?;

		for row_idx in 0..row_count {
			let row: Vec<String> = all
				.iter()
				.zip(&col_widths)
				.map(|((_, data), w)| centered(&escape_control_chars(&data.as_string(row_idx)), *w))
				.collect();
			writeln!(f, "|{}|", row.join("|"))?;
		}

		writeln!(f, "{}", sep)
	}
}
