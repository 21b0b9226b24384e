// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Register`]: subscribes the connection to server push events.

use bytes::{Buf, BufMut};

use crate::error::Result;
use crate::event_type::EventType;
use crate::version::ProtocolVersion;

/// `REGISTER`: the set of event types this connection wants to receive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Register {
	/// The event types to subscribe to.
	pub event_types: Vec<EventType>,
}

impl Register {
	/// The wire length of this message's body.
	#[must_use]
	pub fn wire_size(&self, _version: ProtocolVersion) -> usize {
		2 + self
			.event_types
			.iter()
			.map(|event_type| crate::primitive::string_len(event_type.name()))
			.sum::<usize>()
	}

	/// Reads a `REGISTER` body: a `string list` of event type names.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`](crate::Error::Read) on a malformed entry, or
	/// [`Error::InvalidEnumName`](crate::Error::InvalidEnumName) if a name is
	/// not a known event type.
	pub fn read(reader: &mut impl Buf, _version: ProtocolVersion) -> Result<Self> {
		let names = crate::primitive::read_string_list(reader)?;
		let event_types = names
			.iter()
			.map(|name| EventType::from_name(name))
			.collect::<Result<_>>()?;

		Ok(Self { event_types })
	}

	/// Writes a `REGISTER` body: a `string list` of event type names.
	///
	/// # Errors
	///
	/// Returns [`Error::CountOverflow`](crate::Error::CountOverflow) if there
	/// are more than `0xFFFF` event types.
	pub fn write(&self, writer: &mut impl BufMut, _version: ProtocolVersion) -> Result<()> {
		let names = self
			.event_types
			.iter()
			.map(|event_type| event_type.name().to_string())
			.collect::<Vec<_>>();

		crate::primitive::write_string_list(&names, writer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn register_topology_change_matches_reference_bytes() {
		let register = Register {
			event_types: vec![EventType::TopologyChange],
		};

		let mut buf = Vec::new();
		register.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), register.wire_size(ProtocolVersion::V4));

		let mut expected = vec![0x00, 0x01, 0x00, 0x0F];
		expected.extend_from_slice(b"TOPOLOGY_CHANGE");
		assert_eq!(buf, expected);

		let mut slice = &buf[..];
		assert_eq!(Register::read(&mut slice, ProtocolVersion::V4).unwrap(), register);
	}
}
