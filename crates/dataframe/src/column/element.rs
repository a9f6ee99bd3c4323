// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use tabula_type::IsValue;

use crate::ColumnData;

/// An element type with a dedicated [`ColumnData`] variant.
pub trait Element: IsValue {
	fn slice(data: &ColumnData) -> Option<&[Self]>;

	fn into_data(values: Vec<Self>) -> ColumnData;

	/// Total order used to sort keys.
	///
	/// Agrees with `<` wherever `<` is defined. Floating point NaN keys are
	/// placed after every other key.
	fn sort_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_element {
	($t:ty, $variant:ident) => {
		impl Element for $t {
			fn slice(data: &ColumnData) -> Option<&[Self]> {
				match data {
					ColumnData::$variant(values) => Some(values.as_slice()),
					_ => None,
				}
			}

			fn into_data(values: Vec<Self>) -> ColumnData {
				ColumnData::$variant(values)
			}

			fn sort_cmp(&self, other: &Self) -> Ordering {
				Ord::cmp(self, other)
			}
		}
	};
}

macro_rules! impl_float_element {
	($t:ty, $variant:ident) => {
		impl Element for $t {
			fn slice(data: &ColumnData) -> Option<&[Self]> {
				match data {
					ColumnData::$variant(values) => Some(values.as_slice()),
					_ => None,
				}
			}

			fn into_data(values: Vec<Self>) -> ColumnData {
				ColumnData::$variant(values)
			}

			fn sort_cmp(&self, other: &Self) -> Ordering {
				match (self.is_nan(), other.is_nan()) {
					(false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
					(true, false) => Ordering::Greater,
					(false, true) => Ordering::Less,
					(true, true) => Ordering::Equal,
				}
			}
		}
	};
}

impl_element!(bool, Boolean);
impl_element!(i32, Int4);
impl_element!(i64, Int8);
impl_element!(u64, Uint8);
impl_element!(String, Utf8);
impl_float_element!(f32, Float4);
impl_float_element!(f64, Float8);
