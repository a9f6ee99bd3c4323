// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{ColumnData, Element};

/// An operation applied to a column once its element type is known.
///
/// [`ColumnData::visit`] resolves the erased element type and hands the
/// visitor a typed slice, so one generic `visit` body serves every variant.
pub trait ColumnVisitor {
	type Output;

	fn visit<T: Element>(self, values: &[T]) -> Self::Output;
}

impl ColumnData {
	pub fn visit<V: ColumnVisitor>(&self, visitor: V) -> V::Output {
		match self {
			ColumnData::Boolean(values) => visitor.visit(values.as_slice()),
			ColumnData::Int4(values) => visitor.visit(values.as_slice()),
			ColumnData::Int8(values) => visitor.visit(values.as_slice()),
			ColumnData::Uint8(values) => visitor.visit(values.as_slice()),
			ColumnData::Float4(values) => visitor.visit(values.as_slice()),
			ColumnData::Float8(values) => visitor.visit(values.as_slice()),
			ColumnData::Utf8(values) => visitor.visit(values.as_slice()),
		}
	}
}
