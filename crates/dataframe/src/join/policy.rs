// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	convert::Infallible,
	fmt::{self, Display, Formatter},
	str::FromStr,
};

/// Which unmatched rows a join keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum JoinPolicy {
	/// Only rows whose key exists on both sides.
	Inner,
	/// Every left row; right cells are missing where unmatched.
	Left,
	/// Every right row; left cells are missing where unmatched.
	Right,
	/// Every row of both sides.
	#[default]
	LeftRight,
}

impl Display for JoinPolicy {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			JoinPolicy::Inner => f.write_str("inner_join"),
			JoinPolicy::Left => f.write_str("left_join"),
			JoinPolicy::Right => f.write_str("right_join"),
			JoinPolicy::LeftRight => f.write_str("left_right_join"),
		}
	}
}

/// Unrecognized names fall back to [`JoinPolicy::LeftRight`].
impl FromStr for JoinPolicy {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s.trim().to_ascii_lowercase().as_str() {
			"inner_join" | "inner" => JoinPolicy::Inner,
			"left_join" | "left" => JoinPolicy::Left,
			"right_join" | "right" => JoinPolicy::Right,
			"left_right_join" | "full" | "outer" => JoinPolicy::LeftRight,
			_ => JoinPolicy::LeftRight,
		})
	}
}

impl From<&str> for JoinPolicy {
	fn from(s: &str) -> Self {
		match s.parse() {
			Ok(policy) => policy,
			Err(never) => match never {},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_known_names() {
		assert_eq!(JoinPolicy::from("inner_join"), JoinPolicy::Inner);
		assert_eq!(JoinPolicy::from("left_join"), JoinPolicy::Left);
		assert_eq!(JoinPolicy::from("right_join"), JoinPolicy::Right);
		assert_eq!(JoinPolicy::from("left_right_join"), JoinPolicy::LeftRight);
		assert_eq!(JoinPolicy::from(" Inner "), JoinPolicy::Inner);
	}

	#[test]
	fn test_unrecognized_falls_back_to_left_right() {
		assert_eq!(JoinPolicy::from("cross_join"), JoinPolicy::LeftRight);
		assert_eq!(JoinPolicy::from(""), JoinPolicy::LeftRight);
		assert_eq!(JoinPolicy::default(), JoinPolicy::LeftRight);
	}

	#[test]
	fn test_display_roundtrip() {
		for policy in [JoinPolicy::Inner, JoinPolicy::Left, JoinPolicy::Right, JoinPolicy::LeftRight] {
			assert_eq!(JoinPolicy::from(policy.to_string().as_str()), policy);
		}
	}
}
