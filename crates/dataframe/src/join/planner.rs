// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use tracing::trace;

use super::{
	JoinPolicy,
	position::{KeyedPosition, RowPairing, keyed_positions},
};
use crate::Element;

/// Sorts both key sequences and pairs up their rows under `policy`.
pub(crate) fn plan<T: Element>(lhs: &[T], rhs: &[T], policy: JoinPolicy) -> Vec<RowPairing> {
	let lhs = keyed_positions(lhs);
	let rhs = keyed_positions(rhs);

	match policy {
		JoinPolicy::Inner => inner(&lhs, &rhs),
		JoinPolicy::Left => left(&lhs, &rhs),
		JoinPolicy::Right => right(&lhs, &rhs),
		JoinPolicy::LeftRight => left_right(&lhs, &rhs),
	}
}

// Only `<` and `==` are consulted. Anything else, NaN against NaN included,
// advances the rhs cursor.
fn compare<T: Element>(l: &KeyedPosition<'_, T>, r: &KeyedPosition<'_, T>) -> Ordering {
	if l.key.sort_cmp(r.key) == Ordering::Less {
		Ordering::Less
	} else if l.key == r.key {
		Ordering::Equal
	} else {
		Ordering::Greater
	}
}

pub(crate) fn inner<T: Element>(lhs: &[KeyedPosition<'_, T>], rhs: &[KeyedPosition<'_, T>]) -> Vec<RowPairing> {
	let mut result = Vec::with_capacity(lhs.len().min(rhs.len()));
	let (mut l, mut r) = (0, 0);

	while l < lhs.len() && r < rhs.len() {
		match compare(&lhs[l], &rhs[r]) {
			Ordering::Less => l += 1,
			Ordering::Equal => {
				result.push(RowPairing::Matched(lhs[l].position, rhs[r].position));
				l += 1;
			}
			Ordering::Greater => r += 1,
		}
	}

	trace!(lhs = lhs.len(), rhs = rhs.len(), pairings = result.len(), "inner walk");
	result
}

pub(crate) fn left<T: Element>(lhs: &[KeyedPosition<'_, T>], rhs: &[KeyedPosition<'_, T>]) -> Vec<RowPairing> {
	let mut result = Vec::with_capacity(lhs.len());
	let (mut l, mut r) = (0, 0);

	while l < lhs.len() {
		if r == rhs.len() {
			result.push(RowPairing::Left(lhs[l].position));
			l += 1;
			continue;
		}

		match compare(&lhs[l], &rhs[r]) {
			Ordering::Less => {
				result.push(RowPairing::Left(lhs[l].position));
				l += 1;
			}
			Ordering::Equal => {
				result.push(RowPairing::Matched(lhs[l].position, rhs[r].position));
				l += 1;
			}
			Ordering::Greater => r += 1,
		}
	}

	trace!(lhs = lhs.len(), rhs = rhs.len(), pairings = result.len(), "left walk");
	result
}

/// Mirror of [`left`]: every rhs row appears exactly once.
pub(crate) fn right<T: Element>(lhs: &[KeyedPosition<'_, T>], rhs: &[KeyedPosition<'_, T>]) -> Vec<RowPairing> {
	left(rhs, lhs).into_iter().map(RowPairing::swap).collect()
}

/// The left walk, additionally emitting every rhs entry that no lhs entry
/// matched, at the point the walk moves past it.
pub(crate) fn left_right<T: Element>(
	lhs: &[KeyedPosition<'_, T>],
	rhs: &[KeyedPosition<'_, T>],
) -> Vec<RowPairing> {
	let mut result = Vec::with_capacity(lhs.len().max(rhs.len()));
	let (mut l, mut r) = (0, 0);
	// whether rhs[r] has been emitted in a match
	let mut matched = false;

	while l < lhs.len() || r < rhs.len() {
		if l == lhs.len() {
			if !matched {
				result.push(RowPairing::Right(rhs[r].position));
			}
			matched = false;
			r += 1;
			continue;
		}

		if r == rhs.len() {
			result.push(RowPairing::Left(lhs[l].position));
			l += 1;
			continue;
		}

		match compare(&lhs[l], &rhs[r]) {
			Ordering::Less => {
				result.push(RowPairing::Left(lhs[l].position));
				l += 1;
			}
			Ordering::Equal => {
				result.push(RowPairing::Matched(lhs[l].position, rhs[r].position));
				matched = true;
				l += 1;
			}
			Ordering::Greater => {
				if !matched {
					result.push(RowPairing::Right(rhs[r].position));
				}
				matched = false;
				r += 1;
			}
		}
	}

	trace!(lhs = lhs.len(), rhs = rhs.len(), pairings = result.len(), "left_right walk");
	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::join::RowPairing::{Left, Matched, Right};

	// lhs index [1, 2, 3], rhs index [2, 3, 4]
	fn worked(policy: JoinPolicy) -> Vec<RowPairing> {
		plan(&[1u64, 2, 3], &[2u64, 3, 4], policy)
	}

	mod policies {
		use super::*;

		#[test]
		fn test_inner() {
			assert_eq!(worked(JoinPolicy::Inner), vec![Matched(1, 0), Matched(2, 1)]);
		}

		#[test]
		fn test_left() {
			assert_eq!(worked(JoinPolicy::Left), vec![Left(0), Matched(1, 0), Matched(2, 1)]);
		}

		#[test]
		fn test_right() {
			assert_eq!(worked(JoinPolicy::Right), vec![Matched(1, 0), Matched(2, 1), Right(2)]);
		}

		#[test]
		fn test_left_right() {
			assert_eq!(worked(JoinPolicy::LeftRight), vec![Left(0), Matched(1, 0), Matched(2, 1), Right(2)]);
		}

		#[test]
		fn test_unsorted_input() {
			let pairings = plan(&[3i32, 1, 2], &[2i32, 9], JoinPolicy::LeftRight);
			assert_eq!(pairings, vec![Left(1), Matched(2, 0), Left(0), Right(1)]);
		}
	}

	mod duplicates {
		use super::*;

		#[test]
		fn test_inner_pairs_against_one_rhs_entry() {
			let pairings = plan(&[5i64, 5], &[5i64, 5], JoinPolicy::Inner);
			assert_eq!(pairings.len(), 2);

			let rhs: Vec<Option<usize>> = pairings.iter().map(RowPairing::rhs).collect();
			assert_eq!(rhs[0], rhs[1]);

			let mut lhs: Vec<usize> = pairings.iter().filter_map(RowPairing::lhs).collect();
			lhs.sort();
			assert_eq!(lhs, vec![0, 1]);
		}

		#[test]
		fn test_left_reuses_single_rhs_entry() {
			let pairings = plan(&[5u64, 5], &[5u64], JoinPolicy::Left);
			assert_eq!(pairings.len(), 2);
			assert!(pairings.iter().all(|p| matches!(p, Matched(_, 0))));

			let mut lhs: Vec<usize> = pairings.iter().filter_map(RowPairing::lhs).collect();
			lhs.sort();
			assert_eq!(lhs, vec![0, 1]);
		}

		#[test]
		fn test_inner_may_exceed_smaller_side() {
			let pairings = plan(&[5u64, 5], &[5u64], JoinPolicy::Inner);
			assert_eq!(pairings.len(), 2);
			assert!(pairings.iter().all(|p| p.rhs() == Some(0)));
		}

		#[test]
		fn test_left_keeps_every_lhs_row_once() {
			let pairings = plan(&[1i64, 5, 5], &[5i64, 5, 7], JoinPolicy::Left);
			assert_eq!(pairings.len(), 3);
			assert_eq!(pairings[0], Left(0));
			assert!(pairings[1..].iter().all(|p| matches!(p, Matched(_, _))));
		}

		#[test]
		fn test_right_keeps_every_rhs_row_once() {
			let pairings = plan(&[1i64, 5, 5], &[5i64, 5, 7], JoinPolicy::Right);
			assert_eq!(pairings.len(), 3);
			assert!(pairings[..2].iter().all(|p| matches!(p, Matched(_, _))));
			assert_eq!(pairings[2], Right(2));
		}

		#[test]
		fn test_left_right_emits_unmatched_duplicate() {
			let pairings = plan(&[1i64, 5, 5], &[5i64, 5, 7], JoinPolicy::LeftRight);
			assert_eq!(pairings.len(), 5);
			assert_eq!(pairings[0], Left(0));
			assert!(pairings[1..3].iter().all(|p| matches!(p, Matched(_, _))));
			assert!(matches!(pairings[3], Right(_)));
			assert_eq!(pairings[4], Right(2));

			// the matched and the unmatched rhs duplicate are different rows
			assert_ne!(pairings[1].rhs(), pairings[3].rhs());
		}
	}

	mod edge_cases {
		use super::*;

		#[test]
		fn test_empty_sides() {
			let empty: [u64; 0] = [];
			assert!(plan(&empty, &[1u64], JoinPolicy::Inner).is_empty());
			assert!(plan(&empty, &[1u64], JoinPolicy::Left).is_empty());
			assert_eq!(plan(&empty, &[1u64], JoinPolicy::Right), vec![Right(0)]);
			assert_eq!(plan(&[1u64], &empty, JoinPolicy::LeftRight), vec![Left(0)]);
			assert!(plan(&empty, &empty, JoinPolicy::LeftRight).is_empty());
		}

		#[test]
		fn test_nan_keys_never_match() {
			let pairings = plan(&[f64::NAN, 1.0], &[f64::NAN, 1.0], JoinPolicy::LeftRight);
			assert_eq!(pairings, vec![Matched(1, 1), Right(0), Left(0)]);
			assert!(plan(&[f64::NAN], &[f64::NAN], JoinPolicy::Inner).is_empty());
		}

		#[test]
		fn test_disjoint_keys() {
			let pairings = plan(&["a".to_string()], &["b".to_string()], JoinPolicy::LeftRight);
			assert_eq!(pairings, vec![Left(0), Right(0)]);
		}
	}
}
