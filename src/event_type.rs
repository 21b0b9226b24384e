// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`EventType`], the string discriminator naming the kind of server push
//! event carried by `REGISTER` and `EVENT`.

use crate::error::{Error, Result};

/// The kind of event a client can register for, and that an `EVENT` message
/// carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EventType {
	/// A keyspace, table, type, function, or aggregate was created, altered,
	/// or dropped.
	SchemaChange,
	/// A node joined or left the cluster topology.
	TopologyChange,
	/// A node went up or down.
	StatusChange,
}

impl EventType {
	/// This event type's wire name.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::SchemaChange => "SCHEMA_CHANGE",
			Self::TopologyChange => "TOPOLOGY_CHANGE",
			Self::StatusChange => "STATUS_CHANGE",
		}
	}

	/// Looks up the [`EventType`] with the given wire name.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidEnumName`] if `name` does not match any known
	/// event type.
	pub fn from_name(name: &str) -> Result<Self> {
		match name {
			"SCHEMA_CHANGE" => Ok(Self::SchemaChange),
			"TOPOLOGY_CHANGE" => Ok(Self::TopologyChange),
			"STATUS_CHANGE" => Ok(Self::StatusChange),
			other => Err(Error::invalid_enum_name("event type", other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: &[EventType] = &[
		EventType::SchemaChange,
		EventType::TopologyChange,
		EventType::StatusChange,
	];

	#[test]
	fn round_trips_every_known_name() {
		for &event_type in ALL {
			assert_eq!(EventType::from_name(event_type.name()).unwrap(), event_type);
		}
	}

	#[test]
	fn rejects_unknown_names() {
		assert!(EventType::from_name("NOT_AN_EVENT").is_err());
	}
}
