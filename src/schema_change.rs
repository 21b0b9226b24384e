// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`SchemaChangeType`] and [`SchemaChangeTarget`], the string enums that
//! together shape a `SCHEMA_CHANGE` event's body.

use crate::error::{Error, Result};

/// What happened to the schema object named by a `SCHEMA_CHANGE` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SchemaChangeType {
	/// The object was created.
	Created,
	/// The object was altered.
	Updated,
	/// The object was dropped.
	Dropped,
}

impl SchemaChangeType {
	/// This change type's wire name.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Created => "CREATED",
			Self::Updated => "UPDATED",
			Self::Dropped => "DROPPED",
		}
	}

	/// Looks up the [`SchemaChangeType`] with the given wire name.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidEnumName`] if `name` does not match any known
	/// schema change type.
	pub fn from_name(name: &str) -> Result<Self> {
		match name {
			"CREATED" => Ok(Self::Created),
			"UPDATED" => Ok(Self::Updated),
			"DROPPED" => Ok(Self::Dropped),
			other => Err(Error::invalid_enum_name("schema change type", other)),
		}
	}
}

/// The kind of schema object a `SCHEMA_CHANGE` event refers to.
///
/// [`Function`](Self::Function) and [`Aggregate`](Self::Aggregate) require
/// protocol version ≥ 4; see
/// [`SchemaChangeTarget::require_supported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SchemaChangeTarget {
	/// A keyspace.
	Keyspace,
	/// A table.
	Table,
	/// A user-defined type.
	Type,
	/// A user-defined function. Protocol ≥ 4 only.
	Function,
	/// A user-defined aggregate. Protocol ≥ 4 only.
	Aggregate,
}

impl SchemaChangeTarget {
	/// This target's wire name.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Keyspace => "KEYSPACE",
			Self::Table => "TABLE",
			Self::Type => "TYPE",
			Self::Function => "FUNCTION",
			Self::Aggregate => "AGGREGATE",
		}
	}

	/// Looks up the [`SchemaChangeTarget`] with the given wire name.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidEnumName`] if `name` does not match any known
	/// schema change target.
	pub fn from_name(name: &str) -> Result<Self> {
		match name {
			"KEYSPACE" => Ok(Self::Keyspace),
			"TABLE" => Ok(Self::Table),
			"TYPE" => Ok(Self::Type),
			"FUNCTION" => Ok(Self::Function),
			"AGGREGATE" => Ok(Self::Aggregate),
			other => Err(Error::invalid_enum_name("schema change target", other)),
		}
	}

	/// Whether this target carries an object name in the body (every target
	/// except [`Keyspace`](Self::Keyspace)).
	#[must_use]
	pub const fn has_object_name(self) -> bool {
		!matches!(self, Self::Keyspace)
	}

	/// Whether this target carries an argument-types list
	/// ([`Function`](Self::Function) and [`Aggregate`](Self::Aggregate)
	/// only).
	#[must_use]
	pub const fn has_argument_types(self) -> bool {
		matches!(self, Self::Function | Self::Aggregate)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL_TYPES: &[SchemaChangeType] = &[
		SchemaChangeType::Created,
		SchemaChangeType::Updated,
		SchemaChangeType::Dropped,
	];

	const ALL_TARGETS: &[SchemaChangeTarget] = &[
		SchemaChangeTarget::Keyspace,
		SchemaChangeTarget::Table,
		SchemaChangeTarget::Type,
		SchemaChangeTarget::Function,
		SchemaChangeTarget::Aggregate,
	];

	#[test]
	fn round_trips_every_known_change_type_name() {
		for &change_type in ALL_TYPES {
			assert_eq!(
				SchemaChangeType::from_name(change_type.name()).unwrap(),
				change_type
			);
		}
	}

	#[test]
	fn round_trips_every_known_target_name() {
		for &target in ALL_TARGETS {
			assert_eq!(SchemaChangeTarget::from_name(target.name()).unwrap(), target);
		}
	}

	#[test]
	fn only_keyspace_lacks_an_object_name() {
		for &target in ALL_TARGETS {
			assert_eq!(
				target.has_object_name(),
				!matches!(target, SchemaChangeTarget::Keyspace)
			);
		}
	}

	#[test]
	fn only_function_and_aggregate_carry_argument_types() {
		for &target in ALL_TARGETS {
			assert_eq!(
				target.has_argument_types(),
				matches!(target, SchemaChangeTarget::Function | SchemaChangeTarget::Aggregate)
			);
		}
	}

	#[test]
	fn rejects_unknown_names() {
		assert!(SchemaChangeType::from_name("RENAMED").is_err());
		assert!(SchemaChangeTarget::from_name("VIEW").is_err());
	}
}
