// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;

use thiserror::Error as ThisError;

/// Shorthand for `Result<T, ReadError>`.
pub type ReadResult<T> = Result<T, ReadError>;

/// Shorthand for `Result<(), WriteError>`.
pub type WriteResult = Result<(), WriteError>;

/// An error encountered while reading a primitive value from bytes.
#[non_exhaustive]
#[derive(ThisError, Debug)]
pub enum ReadError {
	/// The reader ran out of bytes before a value could be fully read.
	#[error("short read: needed {needed} byte(s) but only {remaining} remained")]
	ShortRead {
		/// How many bytes the value needed.
		needed: usize,
		/// How many bytes were actually left in the reader.
		remaining: usize,
	},

	/// A length prefix was negative where an unsigned length was expected,
	/// or claimed more bytes than the reader has remaining.
	#[error("invalid length prefix: {length}")]
	InvalidLengthPrefix {
		/// The offending length prefix, as read off the wire.
		length: i64,
	},

	/// A string field did not contain valid UTF-8.
	#[error("invalid utf-8 in string field")]
	InvalidUtf8(#[source] std::str::Utf8Error),

	/// A discriminant byte/short/int did not match any member of the closed
	/// set it was read as.
	#[error("unrecognized {kind} discriminant: {value}")]
	UnrecognizedDiscriminant {
		/// The name of the enum the discriminant was read as, e.g. `"OpCode"`.
		kind: &'static str,
		/// The offending value.
		value: i64,
	},

	/// Any other error encountered while reading.
	#[error("{0}")]
	Other(#[source] Box<dyn Error + Send + Sync>),
}

/// An error encountered while writing a primitive value to bytes.
#[non_exhaustive]
#[derive(ThisError, Debug)]
pub enum WriteError {
	/// The writer did not have enough remaining capacity for the value.
	#[error("short write: needed {needed} byte(s) but only {remaining} remained")]
	ShortWrite {
		/// How many bytes the value needed.
		needed: usize,
		/// How many bytes were actually left in the writer.
		remaining: usize,
	},

	/// Any other error encountered while writing.
	#[error("{0}")]
	Other(#[source] Box<dyn Error + Send + Sync>),
}
