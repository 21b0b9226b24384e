// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Value`]: the `value` primitive, a length-prefixed opaque payload that
//! may also represent `NULL` or (protocol ≥ 4) `NOT_SET`.

use bytes::{Buf, BufMut};

use super::require;
use crate::error::{Error, Result};
use crate::version::ProtocolVersion;

/// A bound value for a query parameter.
///
/// Wire length prefix: `≥0` for [`Regular`](Self::Regular) (that many bytes
/// follow), `-1` for [`Null`](Self::Null), `-2` for [`NotSet`](Self::NotSet)
/// — the last only on protocol version ≥ 4.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
	/// An opaque, already-serialized CQL value.
	Regular(Vec<u8>),
	/// SQL-style `NULL`.
	Null,
	/// A value intentionally left unbound; the server keeps the column's
	/// existing value unchanged. Protocol ≥ 4 only.
	NotSet,
}

const NULL_LENGTH: i32 = -1;
const NOT_SET_LENGTH: i32 = -2;

impl Value {
	/// The wire length of this value, including its length prefix.
	#[must_use]
	pub fn wire_size(&self) -> usize {
		match self {
			Self::Regular(bytes) => 4 + bytes.len(),
			Self::Null | Self::NotSet => 4,
		}
	}

	/// Reads a `value`.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a short read or an out-of-range length
	/// prefix, or [`Error::UnsupportedVersionFeature`] if the wire encoded
	/// `NOT_SET` on a protocol version below 4.
	pub fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		let len = super::read_int(reader)?;

		match len {
			NULL_LENGTH => Ok(Self::Null),
			NOT_SET_LENGTH => {
				if version < ProtocolVersion::V4 {
					return Err(Error::unsupported_version_feature(
						"NOT_SET value",
						ProtocolVersion::V4,
						version,
					));
				}
				Ok(Self::NotSet)
			}
			len if len < 0 => Err(Error::Read(protocol_codec::ReadError::InvalidLengthPrefix {
				length: i64::from(len),
			})),
			len => {
				let len = len as usize;
				require(reader, len)?;

				let mut raw = vec![0u8; len];
				reader.copy_to_slice(&mut raw);

				Ok(Self::Regular(raw))
			}
		}
	}

	/// Writes a `value`.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`] if this is
	/// [`NotSet`](Self::NotSet) and `version` is below 4. No bytes are
	/// written on failure.
	pub fn write(&self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		match self {
			Self::Regular(bytes) => {
				super::write_int(bytes.len() as i32, writer)?;
				writer.put_slice(bytes);
			}
			Self::Null => super::write_int(NULL_LENGTH, writer)?,
			Self::NotSet => {
				if version < ProtocolVersion::V4 {
					return Err(Error::unsupported_version_feature(
						"NOT_SET value",
						ProtocolVersion::V4,
						version,
					));
				}
				super::write_int(NOT_SET_LENGTH, writer)?;
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_regular() {
		let value = Value::Regular(vec![1, 2, 3]);
		let mut buf = Vec::new();
		value.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), value.wire_size());

		let mut slice = &buf[..];
		assert_eq!(Value::read(&mut slice, ProtocolVersion::V4).unwrap(), value);
	}

	#[test]
	fn round_trips_null_on_every_version() {
		for &version in &ProtocolVersion::ALL {
			let mut buf = Vec::new();
			Value::Null.write(&mut buf, version).unwrap();

			let mut slice = &buf[..];
			assert_eq!(Value::read(&mut slice, version).unwrap(), Value::Null);
		}
	}

	#[test]
	fn not_set_round_trips_on_v4_and_above() {
		let mut buf = Vec::new();
		Value::NotSet.write(&mut buf, ProtocolVersion::V4).unwrap();

		let mut slice = &buf[..];
		assert_eq!(Value::read(&mut slice, ProtocolVersion::V4).unwrap(), Value::NotSet);
	}

	#[test]
	fn not_set_is_rejected_on_v3() {
		assert!(Value::NotSet.write(&mut Vec::new(), ProtocolVersion::V3).is_err());

		let mut wire = Vec::new();
		super::super::write_int(NOT_SET_LENGTH, &mut wire).unwrap();
		let mut slice = &wire[..];
		assert!(Value::read(&mut slice, ProtocolVersion::V3).is_err());
	}
}
