// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::Result;
use tracing::{debug, instrument};

use crate::DataFrame;

mod materialize;
mod merge;
mod planner;
mod policy;
mod position;

pub use policy::JoinPolicy;
pub use position::{KeyedPosition, RowPairing, keyed_positions};

impl DataFrame {
	/// Joins two tables on their row indexes.
	///
	/// The result's index merges both indexes and keeps the lhs index name.
	/// Columns present on both sides are merged into one, preferring lhs
	/// values; all other columns are carried over with missing values where
	/// their side has no row. Neither input is modified.
	#[instrument(name = "dataframe::join::by_index", level = "debug", skip_all, fields(policy = %policy))]
	pub fn join_by_index(&self, rhs: &DataFrame, policy: JoinPolicy) -> Result<DataFrame> {
		debug!(lhs_rows = self.row_count(), rhs_rows = rhs.row_count(), "joining by index");
		let result = materialize::join_by_index(self, rhs, policy)?;
		debug!(rows = result.row_count(), columns = result.shape().1, "joined by index");
		Ok(result)
	}

	/// Joins two tables on a data column both of them carry.
	///
	/// The result gets a fresh `0..n` index. The source index values of both
	/// sides are kept as `lhs.<index name>` and `rhs.<index name>` columns,
	/// followed by the merged key column and the remaining columns as in
	/// [`DataFrame::join_by_index`].
	#[instrument(name = "dataframe::join::by_column", level = "debug", skip_all, fields(column = name, policy = %policy))]
	pub fn join_by_column(&self, rhs: &DataFrame, name: &str, policy: JoinPolicy) -> Result<DataFrame> {
		debug!(lhs_rows = self.row_count(), rhs_rows = rhs.row_count(), "joining by column");
		let result = materialize::join_by_column(self, rhs, name, policy)?;
		debug!(rows = result.row_count(), columns = result.shape().1, "joined by column");
		Ok(result)
	}
}
