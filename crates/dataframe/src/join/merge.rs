// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::{FrameError, Result, return_error};

use super::position::{RowPairing, Side};
use crate::{ColumnData, ColumnVisitor, Element};

/// Merges a column present on both sides: the lhs value where the pairing
/// has an lhs row, the rhs value otherwise.
pub(crate) struct CommonColumn<'a> {
	pub name: &'a str,
	pub rhs: &'a ColumnData,
	pub pairings: &'a [RowPairing],
}

impl ColumnVisitor for CommonColumn<'_> {
	type Output = Result<ColumnData>;

	fn visit<T: Element>(self, lhs: &[T]) -> Result<ColumnData> {
		let Some(rhs) = T::slice(self.rhs) else {
			return_error!(FrameError::ColumnTypeMismatch {
				column: self.name.to_string(),
				expected: T::get_type(),
				actual: self.rhs.get_type(),
			});
		};

		let values = self
			.pairings
			.iter()
			.map(|pairing| match *pairing {
				RowPairing::Matched(l, _) | RowPairing::Left(l) => lhs[l].clone(),
				RowPairing::Right(r) => rhs[r].clone(),
			})
			.collect();

		Ok(T::into_data(values))
	}
}

/// Copies a column present on one side only, writing the element type's
/// missing value wherever that side has no row.
pub(crate) struct OneSided<'a> {
	pub side: Side,
	pub pairings: &'a [RowPairing],
}

impl ColumnVisitor for OneSided<'_> {
	type Output = ColumnData;

	fn visit<T: Element>(self, values: &[T]) -> ColumnData {
		T::into_data(
			self.pairings
				.iter()
				.map(|pairing| match pairing.side(self.side) {
					Some(position) => values[position].clone(),
					None => T::missing(),
				})
				.collect(),
		)
	}
}
