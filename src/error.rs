// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The crate-wide error taxonomy.

use thiserror::Error as ThisError;

use crate::version::ProtocolVersion;

/// Shorthand for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Any error that can occur while encoding, computing the length of, or
/// decoding a Cassandra/DSE native protocol message.
#[non_exhaustive]
#[derive(ThisError, Debug)]
pub enum Error {
	/// The reader ran out of bytes before a field could be fully read.
	#[error(transparent)]
	Read(#[from] protocol_codec::ReadError),

	/// The writer did not have enough remaining capacity for a field.
	#[error(transparent)]
	Write(#[from] protocol_codec::WriteError),

	/// A field's value did not belong to the closed set it is drawn from.
	#[error("invalid {kind}: {value}")]
	InvalidEnum {
		/// The name of the closed set, e.g. `"consistency level"`.
		kind: &'static str,
		/// The offending value.
		value: i64,
	},

	/// A string-keyed field's value did not belong to the closed set it is
	/// drawn from (e.g. a schema-change type, which is wire-encoded as a
	/// string rather than an integer).
	#[error("invalid {kind}: {value:?}")]
	InvalidEnumName {
		/// The name of the closed set, e.g. `"schema change type"`.
		kind: &'static str,
		/// The offending value.
		value: String,
	},

	/// A field or flag is only valid on a higher protocol version than the
	/// one this operation targets.
	#[error("{feature} requires protocol version {minimum:?} or higher, got {actual:?}")]
	UnsupportedVersionFeature {
		/// The name of the feature that is version-gated.
		feature: &'static str,
		/// The minimum protocol version the feature requires.
		minimum: ProtocolVersion,
		/// The protocol version the operation actually targeted.
		actual: ProtocolVersion,
	},

	/// A count field (number of batch children, number of values, ...)
	/// exceeded the maximum representable in its wire width.
	#[error("{kind} count {count} exceeds the maximum of {max}")]
	CountOverflow {
		/// What was being counted, e.g. `"BATCH children"`.
		kind: &'static str,
		/// The offending count.
		count: usize,
		/// The maximum allowed count.
		max: usize,
	},

	/// A combination of otherwise-valid fields is semantically forbidden.
	#[error("{0}")]
	SemanticViolation(String),

	/// A discriminator byte/short/int did not match any known tag for a
	/// tagged union (e.g. the RESULT kind, or a schema-change target).
	#[error("unknown {kind} discriminator: {value}")]
	UnknownDiscriminator {
		/// The name of the tagged union, e.g. `"result kind"`.
		kind: &'static str,
		/// The offending value.
		value: i64,
	},
}

impl Error {
	/// Constructs an [`Error::InvalidEnum`].
	pub fn invalid_enum(kind: &'static str, value: impl Into<i64>) -> Self {
		Self::InvalidEnum {
			kind,
			value: value.into(),
		}
	}

	/// Constructs an [`Error::InvalidEnumName`].
	pub fn invalid_enum_name(kind: &'static str, value: impl Into<String>) -> Self {
		Self::InvalidEnumName {
			kind,
			value: value.into(),
		}
	}

	/// Constructs an [`Error::UnsupportedVersionFeature`].
	pub fn unsupported_version_feature(
		feature: &'static str,
		minimum: ProtocolVersion,
		actual: ProtocolVersion,
	) -> Self {
		Self::UnsupportedVersionFeature {
			feature,
			minimum,
			actual,
		}
	}

	/// Constructs an [`Error::CountOverflow`].
	pub fn count_overflow(kind: &'static str, count: usize, max: usize) -> Self {
		Self::CountOverflow { kind, count, max }
	}

	/// Constructs an [`Error::SemanticViolation`].
	pub fn semantic_violation(message: impl Into<String>) -> Self {
		Self::SemanticViolation(message.into())
	}

	/// Constructs an [`Error::UnknownDiscriminator`].
	pub fn unknown_discriminator(kind: &'static str, value: impl Into<i64>) -> Self {
		Self::UnknownDiscriminator {
			kind,
			value: value.into(),
		}
	}
}
