// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`ProtocolVersion`], the wire-format generation a message is encoded for.

use crate::error::{Error, Result};

/// A Cassandra or DSE native protocol version.
///
/// Versions are ordered by their numeric code: `V3 < V4 < V5 < DseV1 <
/// DseV2`. DSE versions build on top of OSS v4/v5 semantics, so a feature
/// gated on `version >= ProtocolVersion::V4` is also available on DSE
/// versions, matching the upstream driver's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum ProtocolVersion {
	/// OSS protocol version 3.
	V3 = 3,
	/// OSS protocol version 4.
	V4 = 4,
	/// OSS protocol version 5. Currently the only beta version.
	V5 = 5,
	/// DataStax Enterprise protocol version 1.
	DseV1 = 0x41,
	/// DataStax Enterprise protocol version 2.
	DseV2 = 0x42,
}

impl ProtocolVersion {
	/// All supported protocol versions, in ascending numeric order.
	pub const ALL: [Self; 5] = [Self::V3, Self::V4, Self::V5, Self::DseV1, Self::DseV2];

	/// The OSS (non-DSE) protocol versions.
	pub const ALL_OSS: [Self; 3] = [Self::V3, Self::V4, Self::V5];

	/// The DSE protocol versions.
	pub const ALL_DSE: [Self; 2] = [Self::DseV1, Self::DseV2];

	/// The beta protocol versions: versions that a client must opt into
	/// explicitly because the server considers them experimental.
	pub const ALL_BETA: [Self; 1] = [Self::V5];

	/// This version's one-byte wire code.
	#[must_use]
	pub const fn code(self) -> u8 {
		self as u8
	}

	/// Looks up the [`ProtocolVersion`] with the given wire code.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidEnum`] if `code` does not match any known
	/// protocol version.
	pub fn from_code(code: u8) -> Result<Self> {
		match code {
			3 => Ok(Self::V3),
			4 => Ok(Self::V4),
			5 => Ok(Self::V5),
			0x41 => Ok(Self::DseV1),
			0x42 => Ok(Self::DseV2),
			other => Err(Error::invalid_enum("protocol version", other)),
		}
	}

	/// Whether `code` is a recognized protocol version.
	#[must_use]
	pub fn is_code(code: u8) -> bool {
		Self::from_code(code).is_ok()
	}

	/// Whether this version is one of the OSS (non-DSE) versions.
	#[must_use]
	pub const fn is_oss(self) -> bool {
		matches!(self, Self::V3 | Self::V4 | Self::V5)
	}

	/// Whether this version is a DataStax Enterprise version.
	#[must_use]
	pub const fn is_dse(self) -> bool {
		matches!(self, Self::DseV1 | Self::DseV2)
	}

	/// Whether this version is advertised as beta and therefore requires
	/// clients to opt in explicitly.
	#[must_use]
	pub const fn is_beta(self) -> bool {
		matches!(self, Self::V5)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_every_known_code() {
		for version in ProtocolVersion::ALL {
			assert_eq!(ProtocolVersion::from_code(version.code()).unwrap(), version);
		}
	}

	#[test]
	fn rejects_unknown_codes() {
		assert!(ProtocolVersion::from_code(6).is_err());
		assert!(ProtocolVersion::from_code(0).is_err());
	}

	#[test]
	fn orders_dse_above_oss() {
		assert!(ProtocolVersion::DseV1 > ProtocolVersion::V5);
		assert!(ProtocolVersion::DseV1 >= ProtocolVersion::V4);
	}

	#[test]
	fn only_v5_is_beta() {
		assert!(ProtocolVersion::V5.is_beta());
		assert!(!ProtocolVersion::V4.is_beta());
		assert!(!ProtocolVersion::DseV1.is_beta());
	}
}
