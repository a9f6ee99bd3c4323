// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tabula_type::{FrameError, Result, Value, return_error};

use crate::{ColumnData, ColumnVisitor, Element};

mod builder;
mod display;

pub use builder::DataFrameBuilder;

/// Name of the index column when none is configured.
pub const DEFAULT_INDEX_NAME: &str = "INDEX";

/// A table: an ordered row index plus uniquely named columns.
///
/// Every column has exactly as many values as the index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DataFrameParts")]
pub struct DataFrame {
	index_name: String,
	index: ColumnData,
	columns: IndexMap<String, ColumnData>,
}

#[derive(Deserialize)]
struct DataFrameParts {
	#[serde(default = "default_index_name")]
	index_name: String,
	index: ColumnData,
	#[serde(default)]
	columns: IndexMap<String, ColumnData>,
}

fn default_index_name() -> String {
	DEFAULT_INDEX_NAME.to_string()
}

impl TryFrom<DataFrameParts> for DataFrame {
	type Error = tabula_type::Error;

	fn try_from(parts: DataFrameParts) -> Result<Self> {
		let mut result = DataFrame::with_index_name(parts.index_name);
		result.load_index(parts.index)?;
		for (name, data) in parts.columns {
			result.load_column(name, data)?;
		}
		Ok(result)
	}
}

impl Default for DataFrame {
	fn default() -> Self {
		Self::new()
	}
}

impl DataFrame {
	pub fn new() -> Self {
		Self::with_index_name(DEFAULT_INDEX_NAME)
	}

	pub fn with_index_name(index_name: impl Into<String>) -> Self {
		Self {
			index_name: index_name.into(),
			index: ColumnData::Uint8(Vec::new()),
			columns: IndexMap::new(),
		}
	}

	pub fn builder() -> DataFrameBuilder {
		DataFrameBuilder::new()
	}
}

impl DataFrame {
	pub fn index_name(&self) -> &str {
		&self.index_name
	}

	pub fn index(&self) -> &ColumnData {
		&self.index
	}

	pub fn get_index<T: Element>(&self) -> Result<&[T]> {
		match T::slice(&self.index) {
			Some(values) => Ok(values),
			None => return_error!(FrameError::IndexTypeMismatch {
				expected: T::get_type(),
				actual: self.index.get_type(),
			}),
		}
	}

	pub fn column(&self, name: &str) -> Option<&ColumnData> {
		self.columns.get(name)
	}

	pub fn get_column<T: Element>(&self, name: &str) -> Result<&[T]> {
		let Some(data) = self.columns.get(name) else {
			return_error!(FrameError::ColumnNotFound {
				column: name.to_string(),
			});
		};

		match T::slice(data) {
			Some(values) => Ok(values),
			None => return_error!(FrameError::ColumnTypeMismatch {
				column: name.to_string(),
				expected: T::get_type(),
				actual: data.get_type(),
			}),
		}
	}

	pub fn has_column(&self, name: &str) -> bool {
		self.columns.contains_key(name)
	}

	pub fn column_names(&self) -> impl Iterator<Item = &str> {
		self.columns.keys().map(String::as_str)
	}

	pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnData)> {
		self.columns.iter().map(|(name, data)| (name.as_str(), data))
	}

	pub fn row_count(&self) -> usize {
		self.index.len()
	}

	/// Rows by columns, not counting the index.
	pub fn shape(&self) -> (usize, usize) {
		(self.row_count(), self.columns.len())
	}

	pub fn is_empty(&self) -> bool {
		self.row_count() == 0
	}

	/// Index value followed by every column value of one row.
	pub fn row(&self, i: usize) -> Option<Vec<Value>> {
		let mut result = Vec::with_capacity(self.columns.len() + 1);
		result.push(self.index.get_value(i)?);
		for data in self.columns.values() {
			result.push(data.get_value(i)?);
		}
		Some(result)
	}

	pub fn visit_index<V: ColumnVisitor>(&self, visitor: V) -> V::Output {
		self.index.visit(visitor)
	}

	pub fn visit_column<V: ColumnVisitor>(&self, name: &str, visitor: V) -> Result<V::Output> {
		match self.columns.get(name) {
			Some(data) => Ok(data.visit(visitor)),
			None => return_error!(FrameError::ColumnNotFound {
				column: name.to_string(),
			}),
		}
	}
}

impl DataFrame {
	/// Replaces the index. Columns already loaded must match its length.
	pub fn load_index(&mut self, index: impl Into<ColumnData>) -> Result<()> {
		let index = index.into();
		if let Some((name, data)) = self.columns.iter().find(|(_, data)| data.len() != index.len()) {
			return_error!(FrameError::LengthMismatch {
				column: name.clone(),
				expected: index.len(),
				actual: data.len(),
			});
		}
		self.index = index;
		Ok(())
	}

	/// Inserts a column, replacing any column of the same name.
	pub fn load_column(&mut self, name: impl Into<String>, data: impl Into<ColumnData>) -> Result<()> {
		let name = name.into();
		let data = data.into();
		if data.len() != self.index.len() {
			return_error!(FrameError::LengthMismatch {
				column: name,
				expected: self.index.len(),
				actual: data.len(),
			});
		}
		self.columns.insert(name, data);
		Ok(())
	}

	pub fn remove_column(&mut self, name: &str) -> Option<ColumnData> {
		self.columns.shift_remove(name)
	}
}

#[cfg(test)]
mod tests {
	use tabula_type::Type;

	use super::*;

	fn frame() -> DataFrame {
		let mut df = DataFrame::new();
		df.load_index(vec![1u64, 2, 3]).unwrap();
		df.load_column("A", vec![10i64, 20, 30]).unwrap();
		df.load_column("name", ColumnData::utf8(["a", "b", "c"])).unwrap();
		df
	}

	mod load {
		use super::*;

		#[test]
		fn test_load_column_checks_length() {
			let mut df = frame();
			let err = df.load_column("B", vec![1i64, 2]).unwrap_err();
			assert_eq!(err.code, "FRAME_004");
			assert!(!df.has_column("B"));
		}

		#[test]
		fn test_load_column_replaces() {
			let mut df = frame();
			df.load_column("A", vec![1.5f64, 2.5, 3.5]).unwrap();
			assert_eq!(df.get_column::<f64>("A").unwrap(), &[1.5, 2.5, 3.5]);
			assert_eq!(df.shape(), (3, 2));
		}

		#[test]
		fn test_remove_column() {
			let mut df = frame();
			assert_eq!(df.remove_column("A"), Some(ColumnData::int8([10, 20, 30])));
			assert_eq!(df.remove_column("A"), None);

			let names: Vec<&str> = df.column_names().collect();
			assert_eq!(names, vec!["name"]);
			assert_eq!(df.row_count(), 3);
		}

		#[test]
		fn test_load_index_checks_existing_columns() {
			let mut df = frame();
			let err = df.load_index(vec![1u64, 2]).unwrap_err();
			assert_eq!(err.code, "FRAME_004");
			assert_eq!(df.row_count(), 3);
		}
	}

	mod access {
		use super::*;

		#[test]
		fn test_get_index() {
			let df = frame();
			assert_eq!(df.get_index::<u64>().unwrap(), &[1, 2, 3]);

			let err = df.get_index::<i64>().unwrap_err();
			assert_eq!(err.code, "FRAME_003");
		}

		#[test]
		fn test_get_column_not_found() {
			let err = frame().get_column::<i64>("missing").unwrap_err();
			assert_eq!(err.code, "FRAME_001");
		}

		#[test]
		fn test_get_column_wrong_type() {
			let err = frame().get_column::<f64>("A").unwrap_err();
			assert_eq!(err.code, "FRAME_002");
			assert_eq!(err.column.as_ref().and_then(|c| c.r#type), Some(Type::Int8));
		}

		#[test]
		fn test_row() {
			let df = frame();
			assert_eq!(
				df.row(1),
				Some(vec![Value::Uint8(2), Value::Int8(20), Value::Utf8("b".to_string())])
			);
			assert_eq!(df.row(3), None);
		}

		struct CountPresent;

		impl ColumnVisitor for CountPresent {
			type Output = usize;

			fn visit<T: Element>(self, values: &[T]) -> usize {
				values.iter().filter(|v| !v.is_missing()).count()
			}
		}

		#[test]
		fn test_visit_column() {
			let mut df = frame();
			df.load_column("B", vec![1.0f64, f64::NAN, 3.0]).unwrap();

			assert_eq!(df.visit_column("B", CountPresent).unwrap(), 2);
			assert_eq!(df.visit_index(CountPresent), 3);
		}

		#[test]
		fn test_visit_column_not_found() {
			let err = frame().visit_column("missing", CountPresent).unwrap_err();
			assert_eq!(err.code, "FRAME_001");
			assert_eq!(err.column.as_ref().map(|c| c.name.as_str()), Some("missing"));
		}

		#[test]
		fn test_column_names_keep_insertion_order() {
			let df = frame();
			let names: Vec<&str> = df.column_names().collect();
			assert_eq!(names, vec!["A", "name"]);
		}
	}

	mod serialization {
		use super::*;

		#[test]
		fn test_roundtrip() {
			let df = frame();
			let json = serde_json::to_string(&df).unwrap();
			let back: DataFrame = serde_json::from_str(&json).unwrap();
			assert_eq!(back, df);
		}

		#[test]
		fn test_default_index_name() {
			let json = r#"{"index":{"type":"int4","values":[7]},"columns":{"x":{"type":"boolean","values":[true]}}}"#;
			let df: DataFrame = serde_json::from_str(json).unwrap();
			assert_eq!(df.index_name(), DEFAULT_INDEX_NAME);
			assert_eq!(df.get_column::<bool>("x").unwrap(), &[true]);
		}

		#[test]
		fn test_rejects_ragged_columns() {
			let json = r#"{"index":{"type":"int4","values":[1,2]},"columns":{"x":{"type":"int4","values":[1]}}}"#;
			assert!(serde_json::from_str::<DataFrame>(json).is_err());
		}
	}
}
