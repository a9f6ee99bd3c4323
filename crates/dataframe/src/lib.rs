// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Columnar tables: an ordered row index plus named, independently typed
//! columns, and the joins between two such tables.
//!
//! A join runs in three steps. Both sides' keys are borrowed into a sorted
//! keyed position index, a merge walk pairs up row positions according to the
//! [`JoinPolicy`], and the pairings drive every column of the result.

pub use column::{ColumnData, ColumnVisitor, Element};
pub use frame::{DEFAULT_INDEX_NAME, DataFrame, DataFrameBuilder};
pub use join::{JoinPolicy, RowPairing};
pub use tabula_type::{Error, FrameError, IsValue, Result, Type, Value};

mod column;
mod frame;
pub mod join;
