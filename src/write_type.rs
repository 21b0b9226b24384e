// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`WriteType`], the string enum describing the kind of write that timed
//! out in a `WRITE_TIMEOUT`/`WRITE_FAILURE` error.

use crate::error::{Error, Result};

/// The kind of write that a write-timeout/write-failure error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum WriteType {
	/// A write to a single partition.
	Simple,
	/// A (logged) batch write.
	Batch,
	/// An unlogged batch write.
	UnloggedBatch,
	/// A counter write.
	Counter,
	/// The internal write to the batch log itself.
	BatchLog,
	/// A write to a materialized view.
	View,
	/// A write that failed because of CDC (change data capture) overload.
	Cdc,
}

impl WriteType {
	/// This write type's wire name.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Simple => "SIMPLE",
			Self::Batch => "BATCH",
			Self::UnloggedBatch => "UNLOGGED_BATCH",
			Self::Counter => "COUNTER",
			Self::BatchLog => "BATCH_LOG",
			Self::View => "VIEW",
			Self::Cdc => "CDC",
		}
	}

	/// Looks up the [`WriteType`] with the given wire name.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidEnum`] if `name` does not match any known
	/// write type.
	pub fn from_name(name: &str) -> Result<Self> {
		match name {
			"SIMPLE" => Ok(Self::Simple),
			"BATCH" => Ok(Self::Batch),
			"UNLOGGED_BATCH" => Ok(Self::UnloggedBatch),
			"COUNTER" => Ok(Self::Counter),
			"BATCH_LOG" => Ok(Self::BatchLog),
			"VIEW" => Ok(Self::View),
			"CDC" => Ok(Self::Cdc),
			other => Err(Error::invalid_enum_name("write type", other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: &[WriteType] = &[
		WriteType::Simple,
		WriteType::Batch,
		WriteType::UnloggedBatch,
		WriteType::Counter,
		WriteType::BatchLog,
		WriteType::View,
		WriteType::Cdc,
	];

	#[test]
	fn round_trips_every_known_name() {
		for &write_type in ALL {
			assert_eq!(WriteType::from_name(write_type.name()).unwrap(), write_type);
		}
	}

	#[test]
	fn rejects_unknown_names() {
		assert!(WriteType::from_name("NOT_A_WRITE_TYPE").is_err());
	}
}
