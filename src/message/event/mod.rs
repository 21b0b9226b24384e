// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Event`]: the server-pushed notification family registered for via
//! `REGISTER`.

mod schema_change;
mod status_change;
mod topology_change;

pub use schema_change::SchemaChangeEvent;
pub use status_change::StatusChangeEvent;
pub use topology_change::TopologyChangeEvent;

use bytes::{Buf, BufMut};

use crate::error::Result;
use crate::event_type::EventType;
use crate::version::ProtocolVersion;

/// `EVENT`: a server push notification, tagged by its
/// [`EventType`](crate::event_type::EventType).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Event {
	/// A keyspace, table, type, function, or aggregate changed.
	SchemaChange(SchemaChangeEvent),
	/// A node joined or left the cluster.
	TopologyChange(TopologyChangeEvent),
	/// A node went up or down.
	StatusChange(StatusChangeEvent),
}

impl Event {
	/// This event's [`EventType`] discriminator.
	#[must_use]
	pub const fn event_type(&self) -> EventType {
		match self {
			Self::SchemaChange(_) => EventType::SchemaChange,
			Self::TopologyChange(_) => EventType::TopologyChange,
			Self::StatusChange(_) => EventType::StatusChange,
		}
	}

	/// The wire length of this message's body, discriminator included.
	#[must_use]
	pub fn wire_size(&self, _version: ProtocolVersion) -> usize {
		crate::primitive::string_len(self.event_type().name())
			+ match self {
				Self::SchemaChange(event) => event.wire_size(),
				Self::TopologyChange(event) => event.wire_size(),
				Self::StatusChange(event) => event.wire_size(),
			}
	}

	/// Reads an `EVENT` body: a `string` discriminator, then a
	/// variant-specific body.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`](crate::Error::Read) on a malformed field,
	/// [`Error::InvalidEnumName`](crate::Error::InvalidEnumName) for an
	/// unrecognized discriminator or nested change type, or
	/// [`Error::UnsupportedVersionFeature`](crate::Error::UnsupportedVersionFeature)
	/// for a `FUNCTION`/`AGGREGATE` schema change below protocol version 4.
	pub fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		match EventType::from_name(&crate::primitive::read_string(reader)?)? {
			EventType::SchemaChange => Ok(Self::SchemaChange(SchemaChangeEvent::read(reader, version)?)),
			EventType::TopologyChange => Ok(Self::TopologyChange(TopologyChangeEvent::read(reader)?)),
			EventType::StatusChange => Ok(Self::StatusChange(StatusChangeEvent::read(reader)?)),
		}
	}

	/// Writes an `EVENT` body: a `string` discriminator, then the
	/// variant-specific body.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`](crate::Error::UnsupportedVersionFeature)
	/// for a `FUNCTION`/`AGGREGATE` schema change targeted below protocol
	/// version 4.
	pub fn write(&self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		crate::primitive::write_string(self.event_type().name(), writer)?;

		match self {
			Self::SchemaChange(event) => event.write(writer, version),
			Self::TopologyChange(event) => event.write(writer),
			Self::StatusChange(event) => event.write(writer),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::net::{IpAddr, Ipv4Addr};

	use super::*;
	use crate::primitive::Inet;
	use crate::schema_change::{SchemaChangeTarget, SchemaChangeType};
	use crate::status_topology::StatusChangeType;

	#[test]
	fn round_trips_status_change() {
		let event = Event::StatusChange(StatusChangeEvent {
			change_type: StatusChangeType::Up,
			address: Inet::new(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1)), 9042),
		});

		let mut buf = Vec::new();
		event.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), event.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(Event::read(&mut slice, ProtocolVersion::V4).unwrap(), event);
	}

	#[test]
	fn round_trips_schema_change() {
		let event = Event::SchemaChange(SchemaChangeEvent {
			change_type: SchemaChangeType::Created,
			target: SchemaChangeTarget::Keyspace,
			keyspace: "ks1".to_string(),
			object_name: None,
			argument_types: None,
		});

		let mut buf = Vec::new();
		event.write(&mut buf, ProtocolVersion::V3).unwrap();
		assert_eq!(buf.len(), event.wire_size(ProtocolVersion::V3));

		let mut slice = &buf[..];
		assert_eq!(Event::read(&mut slice, ProtocolVersion::V3).unwrap(), event);
	}
}
