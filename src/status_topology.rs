// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`StatusChangeType`] and [`TopologyChangeType`], the string enums used by
//! `STATUS_CHANGE` and `TOPOLOGY_CHANGE` events respectively.

use crate::error::{Error, Result};

/// Whether a node went up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StatusChangeType {
	/// The node became reachable.
	Up,
	/// The node became unreachable.
	Down,
}

impl StatusChangeType {
	/// This change type's wire name.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Up => "UP",
			Self::Down => "DOWN",
		}
	}

	/// Looks up the [`StatusChangeType`] with the given wire name.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidEnumName`] if `name` does not match any known
	/// status change type.
	pub fn from_name(name: &str) -> Result<Self> {
		match name {
			"UP" => Ok(Self::Up),
			"DOWN" => Ok(Self::Down),
			other => Err(Error::invalid_enum_name("status change type", other)),
		}
	}
}

/// Whether a node joined or left the cluster topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TopologyChangeType {
	/// A node joined the cluster.
	NewNode,
	/// A node left the cluster.
	RemovedNode,
}

impl TopologyChangeType {
	/// This change type's wire name.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::NewNode => "NEW_NODE",
			Self::RemovedNode => "REMOVED_NODE",
		}
	}

	/// Looks up the [`TopologyChangeType`] with the given wire name.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidEnumName`] if `name` does not match any known
	/// topology change type.
	pub fn from_name(name: &str) -> Result<Self> {
		match name {
			"NEW_NODE" => Ok(Self::NewNode),
			"REMOVED_NODE" => Ok(Self::RemovedNode),
			other => Err(Error::invalid_enum_name("topology change type", other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_status_change_names() {
		for &change in &[StatusChangeType::Up, StatusChangeType::Down] {
			assert_eq!(StatusChangeType::from_name(change.name()).unwrap(), change);
		}
	}

	#[test]
	fn round_trips_topology_change_names() {
		for &change in &[TopologyChangeType::NewNode, TopologyChangeType::RemovedNode] {
			assert_eq!(TopologyChangeType::from_name(change.name()).unwrap(), change);
		}
	}

	#[test]
	fn rejects_unknown_names() {
		assert!(StatusChangeType::from_name("UNKNOWN").is_err());
		assert!(TopologyChangeType::from_name("MOVED_NODE").is_err());
	}
}
