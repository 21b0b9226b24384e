// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`ServerError`]: the `ERROR` message, a server-reported failure code
//! plus code-specific trailing fields.
//!
//! Named to avoid colliding with [`crate::Error`], this crate's own error
//! taxonomy — an `ERROR` message is data, not a Rust error.

use bytes::{Buf, BufMut};

use crate::consistency::ConsistencyLevel;
use crate::error::{Error, Result};
use crate::version::ProtocolVersion;
use crate::write_type::WriteType;

const CODE_SERVER_ERROR: i32 = 0x0000;
const CODE_PROTOCOL_ERROR: i32 = 0x000A;
const CODE_AUTH_ERROR: i32 = 0x0100;
const CODE_UNAVAILABLE: i32 = 0x1000;
const CODE_OVERLOADED: i32 = 0x1001;
const CODE_IS_BOOTSTRAPPING: i32 = 0x1002;
const CODE_TRUNCATE_ERROR: i32 = 0x1003;
const CODE_WRITE_TIMEOUT: i32 = 0x1100;
const CODE_READ_TIMEOUT: i32 = 0x1200;
const CODE_READ_FAILURE: i32 = 0x1300;
const CODE_FUNCTION_FAILURE: i32 = 0x1400;
const CODE_WRITE_FAILURE: i32 = 0x1500;
const CODE_SYNTAX_ERROR: i32 = 0x2000;
const CODE_UNAUTHORIZED: i32 = 0x2100;
const CODE_INVALID: i32 = 0x2200;
const CODE_CONFIG_ERROR: i32 = 0x2300;
const CODE_ALREADY_EXISTS: i32 = 0x2400;
const CODE_UNPREPARED: i32 = 0x2500;

/// A (node address, failure reason code) pair in a v5 failure-reason map.
///
/// The address is encoded as an `inetaddr` — address bytes only, no port.
pub type FailureReason = (std::net::IpAddr, u16);

/// `ERROR`: a failure code, a human-readable message, and a code-specific
/// trailer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ServerError {
	/// An unspecified server-side error.
	ServerError { message: String },
	/// The client violated the protocol.
	ProtocolError { message: String },
	/// Authentication failed.
	AuthenticationError { message: String },
	/// Not enough replicas were available to satisfy the consistency level.
	Unavailable {
		message: String,
		consistency: ConsistencyLevel,
		required: i32,
		alive: i32,
	},
	/// The coordinator is overloaded.
	Overloaded { message: String },
	/// The coordinator is bootstrapping.
	IsBootstrapping { message: String },
	/// A truncation failed.
	TruncateError { message: String },
	/// Not enough replicas responded to a write before the timeout.
	WriteTimeout {
		message: String,
		consistency: ConsistencyLevel,
		received: i32,
		block_for: i32,
		write_type: WriteType,
	},
	/// Not enough replicas responded to a read before the timeout.
	ReadTimeout {
		message: String,
		consistency: ConsistencyLevel,
		received: i32,
		block_for: i32,
		data_present: bool,
	},
	/// A read failed on one or more replicas. Protocol ≥ 4.
	ReadFailure {
		message: String,
		consistency: ConsistencyLevel,
		received: i32,
		block_for: i32,
		reasons: Vec<FailureReason>,
		data_present: bool,
	},
	/// A user-defined function threw. Protocol ≥ 4.
	FunctionFailure {
		message: String,
		keyspace: String,
		function: String,
		argument_types: Vec<String>,
	},
	/// A write failed on one or more replicas. Protocol ≥ 4.
	WriteFailure {
		message: String,
		consistency: ConsistencyLevel,
		received: i32,
		block_for: i32,
		reasons: Vec<FailureReason>,
		write_type: WriteType,
	},
	/// The CQL statement has a syntax error.
	SyntaxError { message: String },
	/// The user is not authorized to perform the operation.
	Unauthorized { message: String },
	/// The CQL statement is invalid for reasons other than syntax.
	Invalid { message: String },
	/// The statement is invalid given the cluster's configuration.
	ConfigError { message: String },
	/// Attempted to create a keyspace or table that already exists.
	AlreadyExists { message: String, keyspace: String, table: String },
	/// The prepared statement id is unknown to this coordinator.
	Unprepared { message: String, id: Vec<u8> },
}

impl ServerError {
	fn code(&self) -> i32 {
		match self {
			Self::ServerError { .. } => CODE_SERVER_ERROR,
			Self::ProtocolError { .. } => CODE_PROTOCOL_ERROR,
			Self::AuthenticationError { .. } => CODE_AUTH_ERROR,
			Self::Unavailable { .. } => CODE_UNAVAILABLE,
			Self::Overloaded { .. } => CODE_OVERLOADED,
			Self::IsBootstrapping { .. } => CODE_IS_BOOTSTRAPPING,
			Self::TruncateError { .. } => CODE_TRUNCATE_ERROR,
			Self::WriteTimeout { .. } => CODE_WRITE_TIMEOUT,
			Self::ReadTimeout { .. } => CODE_READ_TIMEOUT,
			Self::ReadFailure { .. } => CODE_READ_FAILURE,
			Self::FunctionFailure { .. } => CODE_FUNCTION_FAILURE,
			Self::WriteFailure { .. } => CODE_WRITE_FAILURE,
			Self::SyntaxError { .. } => CODE_SYNTAX_ERROR,
			Self::Unauthorized { .. } => CODE_UNAUTHORIZED,
			Self::Invalid { .. } => CODE_INVALID,
			Self::ConfigError { .. } => CODE_CONFIG_ERROR,
			Self::AlreadyExists { .. } => CODE_ALREADY_EXISTS,
			Self::Unprepared { .. } => CODE_UNPREPARED,
		}
	}

	fn message(&self) -> &str {
		match self {
			Self::ServerError { message }
			| Self::ProtocolError { message }
			| Self::AuthenticationError { message }
			| Self::Unavailable { message, .. }
			| Self::Overloaded { message }
			| Self::IsBootstrapping { message }
			| Self::TruncateError { message }
			| Self::WriteTimeout { message, .. }
			| Self::ReadTimeout { message, .. }
			| Self::ReadFailure { message, .. }
			| Self::FunctionFailure { message, .. }
			| Self::WriteFailure { message, .. }
			| Self::SyntaxError { message }
			| Self::Unauthorized { message }
			| Self::Invalid { message }
			| Self::ConfigError { message }
			| Self::AlreadyExists { message, .. }
			| Self::Unprepared { message, .. } => message,
		}
	}

	fn reasons_wire_size(reasons: &[FailureReason]) -> usize {
		4 + reasons
			.iter()
			.map(|(address, _)| crate::primitive::inetaddr_len(address) + 2)
			.sum::<usize>()
	}

	fn read_reasons(reader: &mut impl Buf) -> Result<Vec<FailureReason>> {
		let count = crate::primitive::read_int(reader)?;
		if count < 0 {
			return Err(Error::Read(protocol_codec::ReadError::InvalidLengthPrefix {
				length: i64::from(count),
			}));
		}

		(0..count)
			.map(|_| {
				let address = crate::primitive::read_inetaddr(reader)?;
				let reason_code = crate::primitive::read_short(reader)?;
				Ok((address, reason_code))
			})
			.collect()
	}

	fn write_reasons(writer: &mut impl BufMut, reasons: &[FailureReason]) -> Result<()> {
		crate::primitive::write_int(reasons.len() as i32, writer)?;
		for (address, reason_code) in reasons {
			crate::primitive::write_inetaddr(address, writer)?;
			crate::primitive::write_short(*reason_code, writer)?;
		}

		Ok(())
	}

	/// The wire length of this message's body.
	#[must_use]
	pub fn wire_size(&self, _version: ProtocolVersion) -> usize {
		4 + crate::primitive::string_len(self.message())
			+ match self {
				Self::Unavailable { .. } => 2 + 4 + 4,
				Self::WriteTimeout { write_type, .. } => 2 + 4 + 4 + crate::primitive::string_len(write_type.name()),
				Self::ReadTimeout { .. } => 2 + 4 + 4 + 1,
				Self::ReadFailure { reasons, .. } => 2 + 4 + 4 + Self::reasons_wire_size(reasons) + 1,
				Self::FunctionFailure {
					keyspace,
					function,
					argument_types,
					..
				} => {
					crate::primitive::string_len(keyspace)
						+ crate::primitive::string_len(function)
						+ 2 + argument_types
							.iter()
							.map(|s| crate::primitive::string_len(s))
							.sum::<usize>()
				}
				Self::WriteFailure {
					reasons, write_type, ..
				} => 2 + 4 + 4 + Self::reasons_wire_size(reasons) + crate::primitive::string_len(write_type.name()),
				Self::AlreadyExists { keyspace, table, .. } => {
					crate::primitive::string_len(keyspace) + crate::primitive::string_len(table)
				}
				Self::Unprepared { id, .. } => crate::primitive::short_bytes_len(id),
				_ => 0,
			}
	}

	/// Reads an `ERROR` body: an `int` code, a `string` message, and a
	/// code-specific trailer.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a malformed field, or
	/// [`Error::UnknownDiscriminator`] if the error code is not recognized.
	pub fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		let code = crate::primitive::read_int(reader)?;
		let message = crate::primitive::read_string(reader)?;

		match code {
			CODE_SERVER_ERROR => Ok(Self::ServerError { message }),
			CODE_PROTOCOL_ERROR => Ok(Self::ProtocolError { message }),
			CODE_AUTH_ERROR => Ok(Self::AuthenticationError { message }),
			CODE_UNAVAILABLE => Ok(Self::Unavailable {
				message,
				consistency: ConsistencyLevel::from_code(crate::primitive::read_short(reader)?)?,
				required: crate::primitive::read_int(reader)?,
				alive: crate::primitive::read_int(reader)?,
			}),
			CODE_OVERLOADED => Ok(Self::Overloaded { message }),
			CODE_IS_BOOTSTRAPPING => Ok(Self::IsBootstrapping { message }),
			CODE_TRUNCATE_ERROR => Ok(Self::TruncateError { message }),
			CODE_WRITE_TIMEOUT => Ok(Self::WriteTimeout {
				message,
				consistency: ConsistencyLevel::from_code(crate::primitive::read_short(reader)?)?,
				received: crate::primitive::read_int(reader)?,
				block_for: crate::primitive::read_int(reader)?,
				write_type: WriteType::from_name(&crate::primitive::read_string(reader)?)?,
			}),
			CODE_READ_TIMEOUT => Ok(Self::ReadTimeout {
				message,
				consistency: ConsistencyLevel::from_code(crate::primitive::read_short(reader)?)?,
				received: crate::primitive::read_int(reader)?,
				block_for: crate::primitive::read_int(reader)?,
				data_present: crate::primitive::read_byte(reader)? != 0,
			}),
			CODE_READ_FAILURE => {
				if version < ProtocolVersion::V4 {
					return Err(Error::unsupported_version_feature("READ_FAILURE", ProtocolVersion::V4, version));
				}
				Ok(Self::ReadFailure {
					message,
					consistency: ConsistencyLevel::from_code(crate::primitive::read_short(reader)?)?,
					received: crate::primitive::read_int(reader)?,
					block_for: crate::primitive::read_int(reader)?,
					reasons: Self::read_reasons(reader)?,
					data_present: crate::primitive::read_byte(reader)? != 0,
				})
			}
			CODE_FUNCTION_FAILURE => {
				if version < ProtocolVersion::V4 {
					return Err(Error::unsupported_version_feature(
						"FUNCTION_FAILURE",
						ProtocolVersion::V4,
						version,
					));
				}
				Ok(Self::FunctionFailure {
					message,
					keyspace: crate::primitive::read_string(reader)?,
					function: crate::primitive::read_string(reader)?,
					argument_types: crate::primitive::read_string_list(reader)?,
				})
			}
			CODE_WRITE_FAILURE => {
				if version < ProtocolVersion::V4 {
					return Err(Error::unsupported_version_feature("WRITE_FAILURE", ProtocolVersion::V4, version));
				}
				Ok(Self::WriteFailure {
					message,
					consistency: ConsistencyLevel::from_code(crate::primitive::read_short(reader)?)?,
					received: crate::primitive::read_int(reader)?,
					block_for: crate::primitive::read_int(reader)?,
					reasons: Self::read_reasons(reader)?,
					write_type: WriteType::from_name(&crate::primitive::read_string(reader)?)?,
				})
			}
			CODE_SYNTAX_ERROR => Ok(Self::SyntaxError { message }),
			CODE_UNAUTHORIZED => Ok(Self::Unauthorized { message }),
			CODE_INVALID => Ok(Self::Invalid { message }),
			CODE_CONFIG_ERROR => Ok(Self::ConfigError { message }),
			CODE_ALREADY_EXISTS => Ok(Self::AlreadyExists {
				message,
				keyspace: crate::primitive::read_string(reader)?,
				table: crate::primitive::read_string(reader)?,
			}),
			CODE_UNPREPARED => Ok(Self::Unprepared {
				message,
				id: crate::primitive::read_short_bytes(reader)?,
			}),
			other => Err(Error::unknown_discriminator("error code", i64::from(other))),
		}
	}

	/// Writes an `ERROR` body: an `int` code, a `string` message, and a
	/// code-specific trailer.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`] if
	/// [`ReadFailure`](Self::ReadFailure), [`FunctionFailure`](Self::FunctionFailure),
	/// or [`WriteFailure`](Self::WriteFailure) targets a protocol version
	/// below 4.
	pub fn write(&self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		if matches!(
			self,
			Self::ReadFailure { .. } | Self::FunctionFailure { .. } | Self::WriteFailure { .. }
		) && version < ProtocolVersion::V4
		{
			return Err(Error::unsupported_version_feature(
				"v4 ERROR code",
				ProtocolVersion::V4,
				version,
			));
		}

		crate::primitive::write_int(self.code(), writer)?;
		crate::primitive::write_string(self.message(), writer)?;

		match self {
			Self::Unavailable {
				consistency,
				required,
				alive,
				..
			} => {
				crate::primitive::write_short(consistency.code(), writer)?;
				crate::primitive::write_int(*required, writer)?;
				crate::primitive::write_int(*alive, writer)?;
			}
			Self::WriteTimeout {
				consistency,
				received,
				block_for,
				write_type,
				..
			} => {
				crate::primitive::write_short(consistency.code(), writer)?;
				crate::primitive::write_int(*received, writer)?;
				crate::primitive::write_int(*block_for, writer)?;
				crate::primitive::write_string(write_type.name(), writer)?;
			}
			Self::ReadTimeout {
				consistency,
				received,
				block_for,
				data_present,
				..
			} => {
				crate::primitive::write_short(consistency.code(), writer)?;
				crate::primitive::write_int(*received, writer)?;
				crate::primitive::write_int(*block_for, writer)?;
				crate::primitive::write_byte(u8::from(*data_present), writer)?;
			}
			Self::ReadFailure {
				consistency,
				received,
				block_for,
				reasons,
				data_present,
				..
			} => {
				crate::primitive::write_short(consistency.code(), writer)?;
				crate::primitive::write_int(*received, writer)?;
				crate::primitive::write_int(*block_for, writer)?;
				Self::write_reasons(writer, reasons)?;
				crate::primitive::write_byte(u8::from(*data_present), writer)?;
			}
			Self::FunctionFailure {
				keyspace,
				function,
				argument_types,
				..
			} => {
				crate::primitive::write_string(keyspace, writer)?;
				crate::primitive::write_string(function, writer)?;
				crate::primitive::write_string_list(argument_types, writer)?;
			}
			Self::WriteFailure {
				consistency,
				received,
				block_for,
				reasons,
				write_type,
				..
			} => {
				crate::primitive::write_short(consistency.code(), writer)?;
				crate::primitive::write_int(*received, writer)?;
				crate::primitive::write_int(*block_for, writer)?;
				Self::write_reasons(writer, reasons)?;
				crate::primitive::write_string(write_type.name(), writer)?;
			}
			Self::AlreadyExists { keyspace, table, .. } => {
				crate::primitive::write_string(keyspace, writer)?;
				crate::primitive::write_string(table, writer)?;
			}
			Self::Unprepared { id, .. } => {
				crate::primitive::write_short_bytes(id, writer)?;
			}
			Self::ServerError { .. }
			| Self::ProtocolError { .. }
			| Self::AuthenticationError { .. }
			| Self::Overloaded { .. }
			| Self::IsBootstrapping { .. }
			| Self::TruncateError { .. }
			| Self::SyntaxError { .. }
			| Self::Unauthorized { .. }
			| Self::Invalid { .. }
			| Self::ConfigError { .. } => {}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_unavailable() {
		let error = ServerError::Unavailable {
			message: "not enough replicas".to_string(),
			consistency: ConsistencyLevel::Quorum,
			required: 3,
			alive: 1,
		};

		let mut buf = Vec::new();
		error.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), error.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(ServerError::read(&mut slice, ProtocolVersion::V4).unwrap(), error);
	}

	#[test]
	fn round_trips_write_timeout() {
		let error = ServerError::WriteTimeout {
			message: "timed out".to_string(),
			consistency: ConsistencyLevel::One,
			received: 0,
			block_for: 1,
			write_type: WriteType::Simple,
		};

		let mut buf = Vec::new();
		error.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), error.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(ServerError::read(&mut slice, ProtocolVersion::V4).unwrap(), error);
	}

	#[test]
	fn round_trips_unprepared() {
		let error = ServerError::Unprepared {
			message: "no such prepared statement".to_string(),
			id: vec![1, 2, 3],
		};

		let mut buf = Vec::new();
		error.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), error.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(ServerError::read(&mut slice, ProtocolVersion::V4).unwrap(), error);
	}

	#[test]
	fn round_trips_read_failure_with_reasons() {
		use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

		let error = ServerError::ReadFailure {
			message: "failed".to_string(),
			consistency: ConsistencyLevel::Quorum,
			received: 1,
			block_for: 3,
			reasons: vec![
				(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 0),
				(IpAddr::V6(Ipv6Addr::LOCALHOST), 1),
			],
			data_present: true,
		};

		let mut buf = Vec::new();
		error.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), error.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(ServerError::read(&mut slice, ProtocolVersion::V4).unwrap(), error);
	}

	#[test]
	fn round_trips_write_failure_with_reasons() {
		use std::net::{IpAddr, Ipv4Addr};

		let error = ServerError::WriteFailure {
			message: "failed".to_string(),
			consistency: ConsistencyLevel::One,
			received: 0,
			block_for: 1,
			reasons: vec![(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1)), 2)],
			write_type: WriteType::BatchLog,
		};

		let mut buf = Vec::new();
		error.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), error.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(ServerError::read(&mut slice, ProtocolVersion::V4).unwrap(), error);
	}

	#[test]
	fn rejects_read_failure_below_v4() {
		let error = ServerError::ReadFailure {
			message: "failed".to_string(),
			consistency: ConsistencyLevel::One,
			received: 1,
			block_for: 2,
			reasons: vec![],
			data_present: false,
		};

		assert!(error.write(&mut Vec::new(), ProtocolVersion::V3).is_err());
	}
}
