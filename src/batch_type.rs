// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`BatchType`], the one-byte discriminator of a `BATCH` message.

use crate::error::{Error, Result};

/// The kind of a `BATCH` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BatchType {
	/// A logged batch: other statements are rolled back if any fail.
	Logged,
	/// An unlogged batch: no atomicity guarantee across statements.
	Unlogged,
	/// A counter batch: every statement must be a counter update.
	Counter,
}

impl BatchType {
	/// This batch type's one-byte wire code.
	#[must_use]
	pub const fn code(self) -> u8 {
		match self {
			Self::Logged => 0,
			Self::Unlogged => 1,
			Self::Counter => 2,
		}
	}

	/// Looks up the [`BatchType`] with the given wire code.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidEnum`] if `code` does not match any known
	/// batch type.
	pub fn from_code(code: u8) -> Result<Self> {
		match code {
			0 => Ok(Self::Logged),
			1 => Ok(Self::Unlogged),
			2 => Ok(Self::Counter),
			other => Err(Error::invalid_enum("BATCH type", other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_every_known_code() {
		for &batch_type in &[BatchType::Logged, BatchType::Unlogged, BatchType::Counter] {
			assert_eq!(BatchType::from_code(batch_type.code()).unwrap(), batch_type);
		}
	}

	#[test]
	fn rejects_unknown_codes() {
		assert!(BatchType::from_code(3).is_err());
	}
}
