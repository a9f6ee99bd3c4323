// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use crate::value::{Value, r#type::GetType};

/// An element type a column or an index can hold.
///
/// Every element type carries a canonical "not available" sentinel. The join
/// engine writes it into cells whose contributing side has no row. The
/// sentinel is resolved at compile time from the element type alone.
///
/// Booleans have no value to spare: `false` is written for a missing cell,
/// but `is_missing` never reports a boolean as missing since `false` is
/// indistinguishable from real data.
pub trait IsValue: Clone + Debug + PartialEq + PartialOrd + GetType + Send + Sync + 'static {
	/// The sentinel written for a cell with no contributing row.
	fn missing() -> Self;

	fn is_missing(&self) -> bool;

	fn into_value(self) -> Value;
}

impl IsValue for bool {
	fn missing() -> Self {
		false
	}

	fn is_missing(&self) -> bool {
		false
	}

	fn into_value(self) -> Value {
		Value::Boolean(self)
	}
}

impl IsValue for i32 {
	fn missing() -> Self {
		i32::MIN
	}

	fn is_missing(&self) -> bool {
		*self == i32::MIN
	}

	fn into_value(self) -> Value {
		Value::Int4(self)
	}
}

impl IsValue for i64 {
	fn missing() -> Self {
		i64::MIN
	}

	fn is_missing(&self) -> bool {
		*self == i64::MIN
	}

	fn into_value(self) -> Value {
		Value::Int8(self)
	}
}

impl IsValue for u64 {
	fn missing() -> Self {
		u64::MAX
	}

	fn is_missing(&self) -> bool {
		*self == u64::MAX
	}

	fn into_value(self) -> Value {
		Value::Uint8(self)
	}
}

impl IsValue for f32 {
	fn missing() -> Self {
		f32::NAN
	}

	fn is_missing(&self) -> bool {
		self.is_nan()
	}

	fn into_value(self) -> Value {
		Value::Float4(self)
	}
}

impl IsValue for f64 {
	fn missing() -> Self {
		f64::NAN
	}

	fn is_missing(&self) -> bool {
		self.is_nan()
	}

	fn into_value(self) -> Value {
		Value::Float8(self)
	}
}

impl IsValue for String {
	fn missing() -> Self {
		String::new()
	}

	fn is_missing(&self) -> bool {
		self.is_empty()
	}

	fn into_value(self) -> Value {
		Value::Utf8(self)
	}
}
