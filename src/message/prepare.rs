// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Prepare`]: asks the server to parse and cache a CQL statement.

use bytes::{Buf, BufMut};

use crate::error::{Error, Result};
use crate::version::ProtocolVersion;

const FLAG_WITH_KEYSPACE: u32 = 0x01;

/// `PREPARE`: the CQL statement text to prepare, and (protocol ≥ 5) the
/// keyspace to prepare it in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prepare {
	/// The CQL statement text.
	pub query: String,
	/// The keyspace to prepare the statement in. Protocol ≥ 5 only.
	pub keyspace: Option<String>,
}

impl Prepare {
	/// The wire length of this message's body.
	#[must_use]
	pub fn wire_size(&self, version: ProtocolVersion) -> usize {
		let mut size = crate::primitive::long_string_len(&self.query);

		if version >= ProtocolVersion::V5 {
			size += 4;
			if let Some(keyspace) = &self.keyspace {
				size += crate::primitive::string_len(keyspace);
			}
		}

		size
	}

	/// Reads a `PREPARE` body: a `long string`, then (protocol ≥ 5) a flags
	/// `int` and an optional keyspace `string`.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a malformed field.
	pub fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		let query = crate::primitive::read_long_string(reader)?;

		let keyspace = if version >= ProtocolVersion::V5 {
			let flags = crate::primitive::read_int(reader)? as u32;
			(flags & FLAG_WITH_KEYSPACE != 0)
				.then(|| crate::primitive::read_string(reader))
				.transpose()?
		} else {
			None
		};

		Ok(Self { query, keyspace })
	}

	/// Writes a `PREPARE` body: a `long string`, then (protocol ≥ 5) a flags
	/// `int` and an optional keyspace `string`.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`] if
	/// [`keyspace`](Self::keyspace) is set on a protocol version below 5.
	pub fn write(&self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		if self.keyspace.is_some() && version < ProtocolVersion::V5 {
			return Err(Error::unsupported_version_feature(
				"PREPARE keyspace",
				ProtocolVersion::V5,
				version,
			));
		}

		crate::primitive::write_long_string(&self.query, writer)?;

		if version >= ProtocolVersion::V5 {
			let flags = if self.keyspace.is_some() { FLAG_WITH_KEYSPACE } else { 0 };
			crate::primitive::write_int(flags as i32, writer)?;

			if let Some(keyspace) = &self.keyspace {
				crate::primitive::write_string(keyspace, writer)?;
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_without_keyspace() {
		let prepare = Prepare {
			query: "SELECT * FROM t WHERE k = ?".to_string(),
			keyspace: None,
		};

		let mut buf = Vec::new();
		prepare.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), prepare.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(Prepare::read(&mut slice, ProtocolVersion::V4).unwrap(), prepare);
	}

	#[test]
	fn round_trips_with_keyspace_at_v5() {
		let prepare = Prepare {
			query: "SELECT * FROM t WHERE k = ?".to_string(),
			keyspace: Some("ks1".to_string()),
		};

		let mut buf = Vec::new();
		prepare.write(&mut buf, ProtocolVersion::V5).unwrap();
		assert_eq!(buf.len(), prepare.wire_size(ProtocolVersion::V5));

		let mut slice = &buf[..];
		assert_eq!(Prepare::read(&mut slice, ProtocolVersion::V5).unwrap(), prepare);
	}

	#[test]
	fn rejects_keyspace_below_v5() {
		let prepare = Prepare {
			query: "SELECT 1".to_string(),
			keyspace: Some("ks1".to_string()),
		};

		assert!(prepare.write(&mut Vec::new(), ProtocolVersion::V4).is_err());
	}
}
