// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::Element;

/// Source rows contributing to one result row.
///
/// A pairing always names at least one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowPairing {
	Matched(usize, usize),
	Left(usize),
	Right(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
	Left,
	Right,
}

impl RowPairing {
	pub fn lhs(&self) -> Option<usize> {
		match self {
			RowPairing::Matched(l, _) | RowPairing::Left(l) => Some(*l),
			RowPairing::Right(_) => None,
		}
	}

	pub fn rhs(&self) -> Option<usize> {
		match self {
			RowPairing::Matched(_, r) | RowPairing::Right(r) => Some(*r),
			RowPairing::Left(_) => None,
		}
	}

	pub(crate) fn side(&self, side: Side) -> Option<usize> {
		match side {
			Side::Left => self.lhs(),
			Side::Right => self.rhs(),
		}
	}

	pub(crate) fn swap(self) -> Self {
		match self {
			RowPairing::Matched(l, r) => RowPairing::Matched(r, l),
			RowPairing::Left(l) => RowPairing::Right(l),
			RowPairing::Right(r) => RowPairing::Left(r),
		}
	}
}

/// A borrowed key together with the row it came from.
#[derive(Debug)]
pub struct KeyedPosition<'a, T> {
	pub key: &'a T,
	pub position: usize,
}

/// Borrows every key and sorts the entries ascending by key.
///
/// The sort is unstable: entries with equal keys end up in no particular
/// order relative to each other.
pub fn keyed_positions<T: Element>(keys: &[T]) -> Vec<KeyedPosition<'_, T>> {
	let mut result: Vec<KeyedPosition<'_, T>> = keys
		.iter()
		.enumerate()
		.map(|(position, key)| KeyedPosition {
			key,
			position,
		})
		.collect();

	result.sort_unstable_by(|a, b| a.key.sort_cmp(b.key));
	result
}
