// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`TopologyChangeEvent`]: the body of an `EVENT` announcing a node
//! joining or leaving the cluster.

use bytes::{Buf, BufMut};

use crate::error::Result;
use crate::primitive::Inet;
use crate::status_topology::TopologyChangeType;

/// The body of an `EVENT(TOPOLOGY_CHANGE)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopologyChangeEvent {
	/// New node or removed node.
	pub change_type: TopologyChangeType,
	/// The affected node's address.
	pub address: Inet,
}

impl TopologyChangeEvent {
	/// The wire length of this event body.
	#[must_use]
	pub fn wire_size(&self) -> usize {
		crate::primitive::string_len(self.change_type.name()) + crate::primitive::inet_len(&self.address)
	}

	/// Reads a `TOPOLOGY_CHANGE` event body.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`](crate::Error::Read) on a malformed field, or
	/// [`Error::InvalidEnumName`](crate::Error::InvalidEnumName) for an
	/// unrecognized change type.
	pub fn read(reader: &mut impl Buf) -> Result<Self> {
		let change_type = TopologyChangeType::from_name(&crate::primitive::read_string(reader)?)?;
		let address = crate::primitive::read_inet(reader)?;

		Ok(Self { change_type, address })
	}

	/// Writes a `TOPOLOGY_CHANGE` event body.
	pub fn write(&self, writer: &mut impl BufMut) -> Result<()> {
		crate::primitive::write_string(self.change_type.name(), writer)?;
		crate::primitive::write_inet(&self.address, writer)
	}
}

#[cfg(test)]
mod tests {
	use std::net::{IpAddr, Ipv4Addr};

	use super::*;

	#[test]
	fn round_trips_new_node() {
		let event = TopologyChangeEvent {
			change_type: TopologyChangeType::NewNode,
			address: Inet::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 9042),
		};

		let mut buf = Vec::new();
		event.write(&mut buf).unwrap();
		assert_eq!(buf.len(), event.wire_size());

		let mut slice = &buf[..];
		assert_eq!(TopologyChangeEvent::read(&mut slice).unwrap(), event);
	}
}
