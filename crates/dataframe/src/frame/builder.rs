// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::Result;

use super::{DEFAULT_INDEX_NAME, DataFrame};
use crate::ColumnData;

/// Assembles a [`DataFrame`], validating column lengths once in `build`.
pub struct DataFrameBuilder {
	index_name: String,
	index: Option<ColumnData>,
	columns: Vec<(String, ColumnData)>,
}

impl Default for DataFrameBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl DataFrameBuilder {
	pub fn new() -> Self {
		Self {
			index_name: DEFAULT_INDEX_NAME.to_string(),
			index: None,
			columns: Vec::new(),
		}
	}

	pub fn index_name(mut self, name: impl Into<String>) -> Self {
		self.index_name = name.into();
		self
	}

	pub fn index(mut self, index: impl Into<ColumnData>) -> Self {
		self.index = Some(index.into());
		self
	}

	pub fn column(mut self, name: impl Into<String>, data: impl Into<ColumnData>) -> Self {
		self.columns.push((name.into(), data.into()));
		self
	}

	/// Without an explicit index, a sequential `0..n` index is generated from
	/// the first column's length.
	pub fn build(self) -> Result<DataFrame> {
		let index = match self.index {
			Some(index) => index,
			None => {
				let len = self.columns.first().map_or(0, |(_, data)| data.len());
				ColumnData::uint8(0..len as u64)
			}
		};

		let mut result = DataFrame::with_index_name(self.index_name);
		result.load_index(index)?;
		for (name, data) in self.columns {
			result.load_column(name, data)?;
		}
		Ok(result)
	}
}
