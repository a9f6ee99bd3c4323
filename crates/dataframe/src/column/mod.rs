// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tabula_type::{IsValue, Type, Value};

mod element;
mod visitor;

pub use element::Element;
pub use visitor::ColumnVisitor;

/// Homogeneous storage of one column or of a table index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "lowercase")]
pub enum ColumnData {
	Boolean(Vec<bool>),
	Int4(Vec<i32>),
	Int8(Vec<i64>),
	Uint8(Vec<u64>),
	#[serde(with = "nullable")]
	Float4(Vec<f32>),
	#[serde(with = "nullable")]
	Float8(Vec<f64>),
	Utf8(Vec<String>),
}

// JSON has no NaN; missing values travel as `null`.
mod nullable {
	use super::*;

	pub fn serialize<S, T>(values: &[T], serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
		T: IsValue + Serialize,
	{
		serializer.collect_seq(values.iter().map(|v| (!v.is_missing()).then_some(v)))
	}

	pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
	where
		D: Deserializer<'de>,
		T: IsValue + Deserialize<'de>,
	{
		let values = Vec::<Option<T>>::deserialize(deserializer)?;
		Ok(values.into_iter().map(|v| v.unwrap_or_else(T::missing)).collect())
	}
}

impl ColumnData {
	pub fn bool(values: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Boolean(values.into_iter().collect())
	}

	pub fn int4(values: impl IntoIterator<Item = i32>) -> Self {
		ColumnData::Int4(values.into_iter().collect())
	}

	pub fn int8(values: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(values.into_iter().collect())
	}

	pub fn uint8(values: impl IntoIterator<Item = u64>) -> Self {
		ColumnData::Uint8(values.into_iter().collect())
	}

	pub fn float4(values: impl IntoIterator<Item = f32>) -> Self {
		ColumnData::Float4(values.into_iter().collect())
	}

	pub fn float8(values: impl IntoIterator<Item = f64>) -> Self {
		ColumnData::Float8(values.into_iter().collect())
	}

	pub fn utf8(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
		ColumnData::Utf8(values.into_iter().map(Into::into).collect())
	}

	/// An empty column of the given element type.
	pub fn empty(ty: Type) -> Self {
		match ty {
			Type::Boolean => ColumnData::Boolean(Vec::new()),
			Type::Int4 => ColumnData::Int4(Vec::new()),
			Type::Int8 => ColumnData::Int8(Vec::new()),
			Type::Uint8 => ColumnData::Uint8(Vec::new()),
			Type::Float4 => ColumnData::Float4(Vec::new()),
			Type::Float8 => ColumnData::Float8(Vec::new()),
			Type::Utf8 => ColumnData::Utf8(Vec::new()),
		}
	}
}

impl ColumnData {
	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Boolean(_) => Type::Boolean,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Utf8(_) => Type::Utf8,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Boolean(v) => v.len(),
			ColumnData::Int4(v) => v.len(),
			ColumnData::Int8(v) => v.len(),
			ColumnData::Uint8(v) => v.len(),
			ColumnData::Float4(v) => v.len(),
			ColumnData::Float8(v) => v.len(),
			ColumnData::Utf8(v) => v.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get_value(&self, index: usize) -> Option<Value> {
		match self {
			ColumnData::Boolean(v) => v.get(index).cloned().map(IsValue::into_value),
			ColumnData::Int4(v) => v.get(index).cloned().map(IsValue::into_value),
			ColumnData::Int8(v) => v.get(index).cloned().map(IsValue::into_value),
			ColumnData::Uint8(v) => v.get(index).cloned().map(IsValue::into_value),
			ColumnData::Float4(v) => v.get(index).cloned().map(IsValue::into_value),
			ColumnData::Float8(v) => v.get(index).cloned().map(IsValue::into_value),
			ColumnData::Utf8(v) => v.get(index).cloned().map(IsValue::into_value),
		}
	}

	pub fn as_string(&self, index: usize) -> String {
		match self.get_value(index) {
			Some(value) => value.to_string(),
			None => "none".to_string(),
		}
	}

	/// Typed view of the values, if the element type is `T`.
	pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
		T::slice(self)
	}
}

impl<T: Element> From<Vec<T>> for ColumnData {
	fn from(values: Vec<T>) -> Self {
		T::into_data(values)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod constructors {
		use super::*;

		#[test]
		fn test_utf8_accepts_str() {
			let data = ColumnData::utf8(["a", "b"]);
			assert_eq!(data, ColumnData::Utf8(vec!["a".to_string(), "b".to_string()]));
		}

		#[test]
		fn test_from_vec_picks_variant() {
			assert_eq!(ColumnData::from(vec![1i64, 2]), ColumnData::Int8(vec![1, 2]));
			assert_eq!(ColumnData::from(vec![1.5f64]), ColumnData::Float8(vec![1.5]));
			assert_eq!(ColumnData::from(vec![true]), ColumnData::Boolean(vec![true]));
		}

		#[test]
		fn test_empty_keeps_type() {
			let data = ColumnData::empty(Type::Float4);
			assert_eq!(data.get_type(), Type::Float4);
			assert!(data.is_empty());
		}
	}

	mod access {
		use super::*;

		#[test]
		fn test_get_value() {
			let data = ColumnData::int4([10, 20]);
			assert_eq!(data.get_value(1), Some(Value::Int4(20)));
			assert_eq!(data.get_value(2), None);
		}

		#[test]
		fn test_as_string_renders_missing() {
			let data = ColumnData::float8([1.5, f64::NAN]);
			assert_eq!(data.as_string(0), "1.5");
			assert_eq!(data.as_string(1), "NA");
			assert_eq!(data.as_string(2), "none");
		}

		#[test]
		fn test_as_slice_checks_type() {
			let data = ColumnData::uint8([1, 2, 3]);
			assert_eq!(data.as_slice::<u64>(), Some([1u64, 2, 3].as_slice()));
			assert_eq!(data.as_slice::<i64>(), None);
		}
	}

	mod serialization {
		use super::*;

		#[test]
		fn test_tagged_representation() {
			let json = serde_json::to_string(&ColumnData::int8([1, 2])).unwrap();
			assert_eq!(json, r#"{"type":"int8","values":[1,2]}"#);

			let back: ColumnData = serde_json::from_str(r#"{"type":"utf8","values":["x"]}"#).unwrap();
			assert_eq!(back, ColumnData::utf8(["x"]));
		}

		#[test]
		fn test_missing_float_as_null() {
			let json = serde_json::to_string(&ColumnData::float8([1.5, f64::NAN])).unwrap();
			assert_eq!(json, r#"{"type":"float8","values":[1.5,null]}"#);

			let back: ColumnData = serde_json::from_str(r#"{"type":"float4","values":[null,2.0]}"#).unwrap();
			let values = back.as_slice::<f32>().unwrap();
			assert!(values[0].is_nan());
			assert_eq!(values[1], 2.0);
		}
	}
}
