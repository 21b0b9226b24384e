// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`OpCode`], the single-byte discriminator identifying a message kind.

use crate::error::{Error, Result};

/// A single-byte discriminator identifying the kind of a Cassandra/DSE
/// native protocol message.
///
/// Opcodes partition into request opcodes (client to server) and response
/// opcodes (server to client); see [`OpCode::is_request`] and
/// [`OpCode::is_response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum OpCode {
	// Requests.
	/// `STARTUP`.
	Startup,
	/// `OPTIONS`.
	Options,
	/// `QUERY`.
	Query,
	/// `PREPARE`.
	Prepare,
	/// `EXECUTE`.
	Execute,
	/// `REGISTER`.
	Register,
	/// `BATCH`.
	Batch,
	/// `AUTH_RESPONSE`.
	AuthResponse,
	/// `DSE_REVISE` (DSE continuous paging).
	DseRevise,

	// Responses.
	/// `ERROR`.
	Error,
	/// `READY`.
	Ready,
	/// `AUTHENTICATE`.
	Authenticate,
	/// `SUPPORTED`.
	Supported,
	/// `RESULT`.
	Result,
	/// `EVENT`.
	Event,
	/// `AUTH_CHALLENGE`.
	AuthChallenge,
	/// `AUTH_SUCCESS`.
	AuthSuccess,
}

impl OpCode {
	/// This opcode's one-byte wire code.
	#[must_use]
	pub const fn code(self) -> u8 {
		match self {
			Self::Error => 0x00,
			Self::Startup => 0x01,
			Self::Ready => 0x02,
			Self::Authenticate => 0x03,
			Self::Options => 0x05,
			Self::Supported => 0x06,
			Self::Query => 0x07,
			Self::Result => 0x08,
			Self::Prepare => 0x09,
			Self::Execute => 0x0A,
			Self::Register => 0x0B,
			Self::Event => 0x0C,
			Self::Batch => 0x0D,
			Self::AuthChallenge => 0x0E,
			Self::AuthResponse => 0x0F,
			Self::AuthSuccess => 0x10,
			Self::DseRevise => 0xFF,
		}
	}

	/// Looks up the [`OpCode`] with the given wire code.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidEnum`] if `code` does not match any known
	/// opcode.
	pub fn from_code(code: u8) -> Result<Self> {
		match code {
			0x00 => Ok(Self::Error),
			0x01 => Ok(Self::Startup),
			0x02 => Ok(Self::Ready),
			0x03 => Ok(Self::Authenticate),
			0x05 => Ok(Self::Options),
			0x06 => Ok(Self::Supported),
			0x07 => Ok(Self::Query),
			0x08 => Ok(Self::Result),
			0x09 => Ok(Self::Prepare),
			0x0A => Ok(Self::Execute),
			0x0B => Ok(Self::Register),
			0x0C => Ok(Self::Event),
			0x0D => Ok(Self::Batch),
			0x0E => Ok(Self::AuthChallenge),
			0x0F => Ok(Self::AuthResponse),
			0x10 => Ok(Self::AuthSuccess),
			0xFF => Ok(Self::DseRevise),
			other => Err(Error::invalid_enum("opcode", other)),
		}
	}

	/// Whether this opcode is sent from a client to a server.
	#[must_use]
	pub const fn is_request(self) -> bool {
		matches!(
			self,
			Self::Startup
				| Self::Options
				| Self::Query
				| Self::Prepare
				| Self::Execute
				| Self::Register
				| Self::Batch
				| Self::AuthResponse
				| Self::DseRevise
		)
	}

	/// Whether this opcode is sent from a server to a client.
	#[must_use]
	pub const fn is_response(self) -> bool {
		!self.is_request()
	}

	/// Whether this opcode is a DataStax Enterprise extension.
	#[must_use]
	pub const fn is_dse(self) -> bool {
		matches!(self, Self::DseRevise)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: &[OpCode] = &[
		OpCode::Startup,
		OpCode::Options,
		OpCode::Query,
		OpCode::Prepare,
		OpCode::Execute,
		OpCode::Register,
		OpCode::Batch,
		OpCode::AuthResponse,
		OpCode::DseRevise,
		OpCode::Error,
		OpCode::Ready,
		OpCode::Authenticate,
		OpCode::Supported,
		OpCode::Result,
		OpCode::Event,
		OpCode::AuthChallenge,
		OpCode::AuthSuccess,
	];

	#[test]
	fn round_trips_every_known_code() {
		for &opcode in ALL {
			assert_eq!(OpCode::from_code(opcode.code()).unwrap(), opcode);
		}
	}

	#[test]
	fn partitions_request_and_response() {
		for &opcode in ALL {
			assert_ne!(opcode.is_request(), opcode.is_response());
		}
	}

	#[test]
	fn rejects_unknown_codes() {
		assert!(OpCode::from_code(0x04).is_err());
	}
}
