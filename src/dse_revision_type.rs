// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`DseRevisionType`], the one-byte discriminator of a `DSE_REVISE` message.

use crate::error::{Error, Result};

/// The kind of revision a `DSE_REVISE` message requests against an
/// in-flight continuous paging session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DseRevisionType {
	/// Cancel a continuous paging session outright.
	CancelContinuousPaging,
	/// Ask the server for more pages of an already-started session.
	MoreContinuousPages,
}

impl DseRevisionType {
	/// This revision type's wire code.
	#[must_use]
	pub const fn code(self) -> i32 {
		match self {
			Self::CancelContinuousPaging => 1,
			Self::MoreContinuousPages => 2,
		}
	}

	/// Looks up the [`DseRevisionType`] with the given wire code.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidEnum`] if `code` does not match any known
	/// revision type.
	pub fn from_code(code: i32) -> Result<Self> {
		match code {
			1 => Ok(Self::CancelContinuousPaging),
			2 => Ok(Self::MoreContinuousPages),
			other => Err(Error::invalid_enum("DSE revision type", other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_every_known_code() {
		for &revision_type in &[
			DseRevisionType::CancelContinuousPaging,
			DseRevisionType::MoreContinuousPages,
		] {
			assert_eq!(DseRevisionType::from_code(revision_type.code()).unwrap(), revision_type);
		}
	}

	#[test]
	fn rejects_unknown_codes() {
		assert!(DseRevisionType::from_code(0).is_err());
		assert!(DseRevisionType::from_code(3).is_err());
	}
}
