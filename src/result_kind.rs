// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`ResultKind`], the int discriminator selecting a `RESULT` message's
//! variant body.

use crate::error::{Error, Result};

/// The kind of a `RESULT` message's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ResultKind {
	/// The query succeeded with no body.
	Void,
	/// The query returned rows.
	Rows,
	/// A `USE <keyspace>` succeeded.
	SetKeyspace,
	/// An `EXECUTE` prepare succeeded.
	Prepared,
	/// A DDL statement that changed the schema succeeded.
	SchemaChange,
}

impl ResultKind {
	/// This kind's four-byte wire code.
	#[must_use]
	pub const fn code(self) -> i32 {
		match self {
			Self::Void => 1,
			Self::Rows => 2,
			Self::SetKeyspace => 3,
			Self::Prepared => 4,
			Self::SchemaChange => 5,
		}
	}

	/// Looks up the [`ResultKind`] with the given wire code.
	///
	/// # Errors
	///
	/// Returns [`Error::UnknownDiscriminator`] if `code` does not match any
	/// known result kind.
	pub fn from_code(code: i32) -> Result<Self> {
		match code {
			1 => Ok(Self::Void),
			2 => Ok(Self::Rows),
			3 => Ok(Self::SetKeyspace),
			4 => Ok(Self::Prepared),
			5 => Ok(Self::SchemaChange),
			other => Err(Error::unknown_discriminator("result kind", i64::from(other))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: &[ResultKind] = &[
		ResultKind::Void,
		ResultKind::Rows,
		ResultKind::SetKeyspace,
		ResultKind::Prepared,
		ResultKind::SchemaChange,
	];

	#[test]
	fn round_trips_every_known_code() {
		for &kind in ALL {
			assert_eq!(ResultKind::from_code(kind.code()).unwrap(), kind);
		}
	}

	#[test]
	fn rejects_unknown_codes() {
		assert!(ResultKind::from_code(0).is_err());
		assert!(ResultKind::from_code(6).is_err());
	}
}
