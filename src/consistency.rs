// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`ConsistencyLevel`], the u16 enum controlling read/write quorum rules.

use crate::error::{Error, Result};

/// A Cassandra consistency level.
///
/// [`ConsistencyLevel::Serial`] and [`ConsistencyLevel::LocalSerial`] are the
/// _serial_ consistency levels, valid only where the protocol calls for a
/// serial consistency (lightweight-transaction contexts); see
/// [`ConsistencyLevel::is_serial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConsistencyLevel {
	/// `ANY`.
	Any,
	/// `ONE`.
	One,
	/// `TWO`.
	Two,
	/// `THREE`.
	Three,
	/// `QUORUM`.
	Quorum,
	/// `ALL`.
	All,
	/// `LOCAL_QUORUM`.
	LocalQuorum,
	/// `EACH_QUORUM`.
	EachQuorum,
	/// `SERIAL`.
	Serial,
	/// `LOCAL_SERIAL`.
	LocalSerial,
	/// `LOCAL_ONE`.
	LocalOne,
}

impl ConsistencyLevel {
	/// This consistency level's two-byte wire code.
	#[must_use]
	pub const fn code(self) -> u16 {
		match self {
			Self::Any => 0x0000,
			Self::One => 0x0001,
			Self::Two => 0x0002,
			Self::Three => 0x0003,
			Self::Quorum => 0x0004,
			Self::All => 0x0005,
			Self::LocalQuorum => 0x0006,
			Self::EachQuorum => 0x0007,
			Self::Serial => 0x0008,
			Self::LocalSerial => 0x0009,
			Self::LocalOne => 0x000A,
		}
	}

	/// Looks up the [`ConsistencyLevel`] with the given wire code.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidEnum`] if `code` does not match any known
	/// consistency level.
	pub fn from_code(code: u16) -> Result<Self> {
		match code {
			0x0000 => Ok(Self::Any),
			0x0001 => Ok(Self::One),
			0x0002 => Ok(Self::Two),
			0x0003 => Ok(Self::Three),
			0x0004 => Ok(Self::Quorum),
			0x0005 => Ok(Self::All),
			0x0006 => Ok(Self::LocalQuorum),
			0x0007 => Ok(Self::EachQuorum),
			0x0008 => Ok(Self::Serial),
			0x0009 => Ok(Self::LocalSerial),
			0x000A => Ok(Self::LocalOne),
			other => Err(Error::invalid_enum("consistency level", other)),
		}
	}

	/// Whether this is a serial consistency level
	/// ([`Serial`](Self::Serial) or [`LocalSerial`](Self::LocalSerial)).
	#[must_use]
	pub const fn is_serial(self) -> bool {
		matches!(self, Self::Serial | Self::LocalSerial)
	}

	/// Whether this is a non-serial consistency level.
	#[must_use]
	pub const fn is_non_serial(self) -> bool {
		!self.is_serial()
	}

	/// Validates that this consistency level is usable as a _serial_
	/// consistency (the `SERIAL_CONSISTENCY` query-parameter flag).
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidEnum`] if this is not a serial consistency
	/// level.
	pub fn require_serial(self) -> Result<Self> {
		if self.is_serial() {
			Ok(self)
		} else {
			Err(Error::invalid_enum("serial consistency level", self.code()))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: &[ConsistencyLevel] = &[
		ConsistencyLevel::Any,
		ConsistencyLevel::One,
		ConsistencyLevel::Two,
		ConsistencyLevel::Three,
		ConsistencyLevel::Quorum,
		ConsistencyLevel::All,
		ConsistencyLevel::LocalQuorum,
		ConsistencyLevel::EachQuorum,
		ConsistencyLevel::Serial,
		ConsistencyLevel::LocalSerial,
		ConsistencyLevel::LocalOne,
	];

	#[test]
	fn round_trips_every_known_code() {
		for &level in ALL {
			assert_eq!(ConsistencyLevel::from_code(level.code()).unwrap(), level);
		}
	}

	#[test]
	fn only_serial_and_local_serial_are_serial() {
		for &level in ALL {
			assert_eq!(
				level.is_serial(),
				matches!(level, ConsistencyLevel::Serial | ConsistencyLevel::LocalSerial)
			);
		}
	}

	#[test]
	fn require_serial_rejects_non_serial() {
		assert!(ConsistencyLevel::One.require_serial().is_err());
		assert!(ConsistencyLevel::Serial.require_serial().is_ok());
	}

	#[test]
	fn rejects_unknown_codes() {
		assert!(ConsistencyLevel::from_code(0x000B).is_err());
	}
}
