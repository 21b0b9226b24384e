// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`StatusChangeEvent`]: the body of an `EVENT` announcing a node going up
//! or down.

use bytes::{Buf, BufMut};

use crate::error::Result;
use crate::primitive::Inet;
use crate::status_topology::StatusChangeType;

/// The body of an `EVENT(STATUS_CHANGE)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusChangeEvent {
	/// Up or down.
	pub change_type: StatusChangeType,
	/// The affected node's address.
	pub address: Inet,
}

impl StatusChangeEvent {
	/// The wire length of this event body.
	#[must_use]
	pub fn wire_size(&self) -> usize {
		crate::primitive::string_len(self.change_type.name()) + crate::primitive::inet_len(&self.address)
	}

	/// Reads a `STATUS_CHANGE` event body.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`](crate::Error::Read) on a malformed field, or
	/// [`Error::InvalidEnumName`](crate::Error::InvalidEnumName) for an
	/// unrecognized change type.
	pub fn read(reader: &mut impl Buf) -> Result<Self> {
		let change_type = StatusChangeType::from_name(&crate::primitive::read_string(reader)?)?;
		let address = crate::primitive::read_inet(reader)?;

		Ok(Self { change_type, address })
	}

	/// Writes a `STATUS_CHANGE` event body.
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
	fn matches_reference_bytes() {
		let event = StatusChangeEvent {
			change_type: StatusChangeType::Up,
			address: Inet::new(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1)), 9042),
		};

		let mut buf = Vec::new();
		event.write(&mut buf).unwrap();
		assert_eq!(buf.len(), event.wire_size());

		let mut expected = vec![0x00, 0x02];
		expected.extend_from_slice(b"UP");
		expected.extend_from_slice(&[4, 192, 168, 1, 1, 0, 0, 0x23, 0x52]);
		assert_eq!(buf, expected);

		let mut slice = &buf[..];
		assert_eq!(StatusChangeEvent::read(&mut slice).unwrap(), event);
	}
}
