// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`QueryFlags`], the bitmap controlling which optional fields follow a
//! query-parameters block.

use bitflags::bitflags;
use bytes::{Buf, BufMut};

use crate::error::{Error, Result};
use crate::version::ProtocolVersion;

bitflags! {
	/// The bitmap gating optional fields in a query-parameters block (used
	/// by `QUERY`, `EXECUTE`, and `BATCH`).
	///
	/// Encoded as one byte in protocol versions ≤ 4, and as four bytes in
	/// protocol versions ≥ 5. [`WITH_KEYSPACE`](Self::WITH_KEYSPACE) and
	/// [`NOW_IN_SECONDS`](Self::NOW_IN_SECONDS) only exist from version 5
	/// onward.
	#[derive(Default)]
	pub struct QueryFlags: u32 {
		/// Positional or named values follow.
		const VALUES = 0x0001;
		/// The result, if any, should omit its column metadata.
		const SKIP_METADATA = 0x0002;
		/// A page size follows.
		const PAGE_SIZE = 0x0004;
		/// A paging state follows.
		const WITH_PAGING_STATE = 0x0008;
		/// A serial consistency level follows.
		const SERIAL_CONSISTENCY = 0x0010;
		/// A default timestamp follows.
		const DEFAULT_TIMESTAMP = 0x0020;
		/// The values that follow are named rather than positional.
		const VALUE_NAMES = 0x0040;
		/// A keyspace follows. Protocol v5+ only.
		const WITH_KEYSPACE = 0x0080;
		/// A `now in seconds` follows. Protocol v5+ only.
		const NOW_IN_SECONDS = 0x0100;
	}
}

impl QueryFlags {
	/// The flag bits that only exist from protocol version 5 onward.
	#[must_use]
	pub fn v5_only() -> Self {
		Self::WITH_KEYSPACE | Self::NOW_IN_SECONDS
	}

	/// The wire width of this bitmap for the given protocol version.
	#[must_use]
	pub const fn wire_size(version: ProtocolVersion) -> usize {
		if version.code() >= ProtocolVersion::V5.code() {
			4
		} else {
			1
		}
	}

	/// Validates that every set bit is legal for `version`.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`] if
	/// [`WITH_KEYSPACE`](Self::WITH_KEYSPACE) or
	/// [`NOW_IN_SECONDS`](Self::NOW_IN_SECONDS) is set on a version below 5.
	pub fn validate(self, version: ProtocolVersion) -> Result<()> {
		if version < ProtocolVersion::V5 {
			if self.contains(Self::WITH_KEYSPACE) {
				return Err(Error::unsupported_version_feature(
					"WITH_KEYSPACE query flag",
					ProtocolVersion::V5,
					version,
				));
			}
			if self.contains(Self::NOW_IN_SECONDS) {
				return Err(Error::unsupported_version_feature(
					"NOW_IN_SECONDS query flag",
					ProtocolVersion::V5,
					version,
				));
			}
		}

		Ok(())
	}

	/// Reads the flags bitmap, sized according to `version`.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a short read, [`Error::InvalidEnum`] if an
	/// unrecognized bit is set, or [`Error::UnsupportedVersionFeature`] if a
	/// v5-only bit is set on an older version.
	pub fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		let raw = if Self::wire_size(version) == 4 {
			require(reader, 4)?;
			reader.get_u32()
		} else {
			require(reader, 1)?;
			u32::from(reader.get_u8())
		};

		let flags = Self::from_bits(raw).ok_or_else(|| Error::invalid_enum("query flags", raw))?;
		flags.validate(version)?;

		Ok(flags)
	}

	/// Writes the flags bitmap, sized according to `version`.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`] if a v5-only bit is set
	/// on an older version. No bytes are written on failure.
	pub fn write(self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		self.validate(version)?;

		if Self::wire_size(version) == 4 {
			writer.put_u32(self.bits());
		} else {
			writer.put_u8(self.bits() as u8);
		}

		Ok(())
	}
}

fn require(reader: &impl Buf, needed: usize) -> Result<()> {
	if reader.remaining() < needed {
		return Err(protocol_codec::ReadError::ShortRead {
			needed,
			remaining: reader.remaining(),
		}
		.into());
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn v5_only_bits_are_flagged() {
		let v5_only = QueryFlags::v5_only();
		assert!(v5_only.contains(QueryFlags::WITH_KEYSPACE));
		assert!(v5_only.contains(QueryFlags::NOW_IN_SECONDS));
		assert!(!v5_only.contains(QueryFlags::VALUES));
	}

	#[test]
	fn width_depends_on_version() {
		assert_eq!(QueryFlags::wire_size(ProtocolVersion::V4), 1);
		assert_eq!(QueryFlags::wire_size(ProtocolVersion::V5), 4);
		assert_eq!(QueryFlags::wire_size(ProtocolVersion::DseV2), 4);
	}

	#[test]
	fn rejects_with_keyspace_below_v5() {
		let flags = QueryFlags::WITH_KEYSPACE;
		assert!(flags.validate(ProtocolVersion::V4).is_err());
		assert!(flags.validate(ProtocolVersion::V5).is_ok());
	}

	#[test]
	fn rejects_now_in_seconds_below_v5() {
		let flags = QueryFlags::NOW_IN_SECONDS;
		assert!(flags.validate(ProtocolVersion::V4).is_err());
		assert!(flags.validate(ProtocolVersion::V5).is_ok());
	}

	#[test]
	fn round_trips_byte_width_flags() {
		let flags = QueryFlags::VALUES | QueryFlags::PAGE_SIZE;
		let mut buf = Vec::new();
		flags.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), 1);

		let mut slice = &buf[..];
		let read_back = QueryFlags::read(&mut slice, ProtocolVersion::V4).unwrap();
		assert_eq!(read_back, flags);
	}

	#[test]
	fn round_trips_int_width_flags() {
		let flags = QueryFlags::WITH_KEYSPACE | QueryFlags::NOW_IN_SECONDS;
		let mut buf = Vec::new();
		flags.write(&mut buf, ProtocolVersion::V5).unwrap();
		assert_eq!(buf.len(), 4);

		let mut slice = &buf[..];
		let read_back = QueryFlags::read(&mut slice, ProtocolVersion::V5).unwrap();
		assert_eq!(read_back, flags);
	}
}
