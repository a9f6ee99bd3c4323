// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::{FrameError, Result, return_error};
use tracing::debug;

use super::{
	JoinPolicy,
	merge::{CommonColumn, OneSided},
	planner,
	position::{RowPairing, Side},
};
use crate::{ColumnData, ColumnVisitor, DataFrame, Element};

/// Plans a join over two key columns. Yields `None` when their element
/// types differ.
struct Plan<'a> {
	rhs: &'a ColumnData,
	policy: JoinPolicy,
}

impl ColumnVisitor for Plan<'_> {
	type Output = Option<Vec<RowPairing>>;

	fn visit<T: Element>(self, lhs: &[T]) -> Self::Output {
		let rhs = T::slice(self.rhs)?;
		Some(planner::plan(lhs, rhs, self.policy))
	}
}

/// Every column both tables carry must have the same element type on each
/// side. `skip` names a column checked elsewhere.
fn check_common_columns(lhs: &DataFrame, rhs: &DataFrame, skip: Option<&str>) -> Result<()> {
	for (name, data) in lhs.columns() {
		if skip == Some(name) {
			continue;
		}
		if let Some(other) = rhs.column(name)
			&& other.get_type() != data.get_type()
		{
			return_error!(FrameError::ColumnTypeMismatch {
				column: name.to_string(),
				expected: data.get_type(),
				actual: other.get_type(),
			});
		}
	}
	Ok(())
}

/// Appends every data column of both sides, lhs columns first in their
/// original order, then the columns only rhs carries.
fn merge_columns(
	lhs: &DataFrame,
	rhs: &DataFrame,
	skip: Option<&str>,
	pairings: &[RowPairing],
	result: &mut DataFrame,
) -> Result<()> {
	for (name, data) in lhs.columns() {
		if skip == Some(name) {
			continue;
		}

		let merged = match rhs.column(name) {
			Some(other) => data.visit(CommonColumn {
				name,
				rhs: other,
				pairings,
			})?,
			None => data.visit(OneSided {
				side: Side::Left,
				pairings,
			}),
		};
		result.load_column(name, merged)?;
	}

	for (name, data) in rhs.columns() {
		if skip == Some(name) || lhs.has_column(name) {
			continue;
		}

		result.load_column(
			name,
			data.visit(OneSided {
				side: Side::Right,
				pairings,
			}),
		)?;
	}

	Ok(())
}

pub(crate) fn join_by_index(lhs: &DataFrame, rhs: &DataFrame, policy: JoinPolicy) -> Result<DataFrame> {
	let Some(pairings) = lhs.visit_index(Plan {
		rhs: rhs.index(),
		policy,
	}) else {
		return_error!(FrameError::IndexTypeMismatch {
			expected: lhs.index().get_type(),
			actual: rhs.index().get_type(),
		});
	};
	check_common_columns(lhs, rhs, None)?;
	debug!(pairings = pairings.len(), "planned index join");

	let index = lhs.visit_index(CommonColumn {
		name: lhs.index_name(),
		rhs: rhs.index(),
		pairings: &pairings,
	})?;

	let mut result = DataFrame::with_index_name(lhs.index_name());
	result.load_index(index)?;
	merge_columns(lhs, rhs, None, &pairings, &mut result)?;
	Ok(result)
}

pub(crate) fn join_by_column(lhs: &DataFrame, rhs: &DataFrame, name: &str, policy: JoinPolicy) -> Result<DataFrame> {
	let Some(lhs_key) = lhs.column(name) else {
		return_error!(FrameError::ColumnNotFound {
			column: name.to_string(),
		});
	};
	let Some(rhs_key) = rhs.column(name) else {
		return_error!(FrameError::ColumnNotFound {
			column: name.to_string(),
		});
	};
	if lhs_key.get_type() != rhs_key.get_type() {
		return_error!(FrameError::ColumnTypeMismatch {
			column: name.to_string(),
			expected: lhs_key.get_type(),
			actual: rhs_key.get_type(),
		});
	}
	check_common_columns(lhs, rhs, Some(name))?;

	let Some(pairings) = lhs_key.visit(Plan {
		rhs: rhs_key,
		policy,
	}) else {
		return_error!(FrameError::ColumnTypeMismatch {
			column: name.to_string(),
			expected: lhs_key.get_type(),
			actual: rhs_key.get_type(),
		});
	};
	debug!(pairings = pairings.len(), "planned column join");

	let mut result = DataFrame::with_index_name(lhs.index_name());
	result.load_index(ColumnData::uint8(0..pairings.len() as u64))?;

	result.load_column(
		format!("lhs.{}", lhs.index_name()),
		lhs.visit_index(OneSided {
			side: Side::Left,
			pairings: &pairings,
		}),
	)?;
	result.load_column(
		format!("rhs.{}", rhs.index_name()),
		rhs.visit_index(OneSided {
			side: Side::Right,
			pairings: &pairings,
		}),
	)?;
	result.load_column(
		name,
		lhs_key.visit(CommonColumn {
			name,
			rhs: rhs_key,
			pairings: &pairings,
		})?,
	)?;

	merge_columns(lhs, rhs, Some(name), &pairings, &mut result)?;
	Ok(result)
}
