// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Message`]: the tagged family of request and response message bodies.
//!
//! Every variant owns a single opcode and a single direction (see
//! [`OpCode::is_request`]/[`OpCode::is_response`]); [`Message::opcode`] and
//! [`Message::decode`] are the table-lookup seam the framing layer dispatches
//! through instead of a runtime-polymorphic message hierarchy.

pub mod auth_challenge;
pub mod auth_response;
pub mod auth_success;
pub mod authenticate;
pub mod batch;
pub mod dse_revise;
pub mod event;
pub mod execute;
pub mod options;
pub mod prepare;
pub mod query;
pub mod query_params;
pub mod ready;
pub mod register;
pub mod result;
pub mod server_error;
pub mod startup;
pub mod supported;

pub use auth_challenge::AuthChallenge;
pub use auth_response::AuthResponse;
pub use auth_success::AuthSuccess;
pub use authenticate::Authenticate;
pub use batch::{Batch, BatchChild};
pub use dse_revise::DseRevise;
pub use event::Event;
pub use execute::Execute;
pub use options::Options;
pub use prepare::Prepare;
pub use query::Query;
pub use ready::Ready;
pub use register::Register;
pub use result::ResultBody;
pub use server_error::ServerError;
pub use startup::Startup;
pub use supported::Supported;

use bytes::{Buf, BufMut};

use crate::error::Result;
use crate::opcode::OpCode;
use crate::version::ProtocolVersion;

/// A single Cassandra/DSE native protocol message body, tagged by its
/// [`OpCode`].
///
/// A `Message` owns exactly one opcode and one direction; there is no value
/// that is simultaneously, say, a `QUERY` and a `RESULT`. Decoding requires
/// the opcode out of band (it lives in the frame header, outside this
/// crate's scope) — see [`Message::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Message {
	// Requests.
	/// `STARTUP`.
	Startup(Startup),
	/// `OPTIONS`.
	Options(Options),
	/// `QUERY`.
	Query(Query),
	/// `PREPARE`.
	Prepare(Prepare),
	/// `EXECUTE`.
	Execute(Execute),
	/// `REGISTER`.
	Register(Register),
	/// `BATCH`.
	Batch(Batch),
	/// `AUTH_RESPONSE`.
	AuthResponse(AuthResponse),
	/// `DSE_REVISE`.
	DseRevise(DseRevise),

	// Responses.
	/// `ERROR`.
	Error(ServerError),
	/// `READY`.
	Ready(Ready),
	/// `AUTHENTICATE`.
	Authenticate(Authenticate),
	/// `SUPPORTED`.
	Supported(Supported),
	/// `RESULT`.
	Result(ResultBody),
	/// `EVENT`.
	Event(Event),
	/// `AUTH_CHALLENGE`.
	AuthChallenge(AuthChallenge),
	/// `AUTH_SUCCESS`.
	AuthSuccess(AuthSuccess),
}

impl Message {
	/// The opcode this message is wire-tagged with.
	#[must_use]
	pub const fn opcode(&self) -> OpCode {
		match self {
			Self::Startup(_) => OpCode::Startup,
			Self::Options(_) => OpCode::Options,
			Self::Query(_) => OpCode::Query,
			Self::Prepare(_) => OpCode::Prepare,
			Self::Execute(_) => OpCode::Execute,
			Self::Register(_) => OpCode::Register,
			Self::Batch(_) => OpCode::Batch,
			Self::AuthResponse(_) => OpCode::AuthResponse,
			Self::DseRevise(_) => OpCode::DseRevise,
			Self::Error(_) => OpCode::Error,
			Self::Ready(_) => OpCode::Ready,
			Self::Authenticate(_) => OpCode::Authenticate,
			Self::Supported(_) => OpCode::Supported,
			Self::Result(_) => OpCode::Result,
			Self::Event(_) => OpCode::Event,
			Self::AuthChallenge(_) => OpCode::AuthChallenge,
			Self::AuthSuccess(_) => OpCode::AuthSuccess,
		}
	}

	/// The wire length of this message's body (not including any framing
	/// header the connection layer may prepend).
	#[must_use]
	pub fn wire_size(&self, version: ProtocolVersion) -> usize {
		match self {
			Self::Startup(message) => message.wire_size(version),
			Self::Options(message) => message.wire_size(version),
			Self::Query(message) => message.wire_size(version),
			Self::Prepare(message) => message.wire_size(version),
			Self::Execute(message) => message.wire_size(version),
			Self::Register(message) => message.wire_size(version),
			Self::Batch(message) => message.wire_size(version),
			Self::AuthResponse(message) => message.wire_size(version),
			Self::DseRevise(message) => message.wire_size(version),
			Self::Error(message) => message.wire_size(version),
			Self::Ready(message) => message.wire_size(version),
			Self::Authenticate(message) => message.wire_size(version),
			Self::Supported(message) => message.wire_size(version),
			Self::Result(message) => message.wire_size(version),
			Self::Event(message) => message.wire_size(version),
			Self::AuthChallenge(message) => message.wire_size(version),
			Self::AuthSuccess(message) => message.wire_size(version),
		}
	}

	/// Writes this message's body for the given protocol version.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`] if the message carries a
	/// field not valid for `version`, or any other encode error the
	/// underlying variant's codec reports. No partial field is written once
	/// a validation error is raised; see §4.5 of the wire-format notes.
	pub fn encode(&self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		#[cfg(feature = "tracing")]
		tracing::trace!(opcode = ?self.opcode(), ?version, "encoding message");

		let result = match self {
			Self::Startup(message) => message.write(writer, version),
			Self::Options(message) => message.write(writer, version),
			Self::Query(message) => message.write(writer, version),
			Self::Prepare(message) => message.write(writer, version),
			Self::Execute(message) => message.write(writer, version),
			Self::Register(message) => message.write(writer, version),
			Self::Batch(message) => message.write(writer, version),
			Self::AuthResponse(message) => message.write(writer, version),
			Self::DseRevise(message) => message.write(writer, version),
			Self::Error(message) => message.write(writer, version),
			Self::Ready(message) => message.write(writer, version),
			Self::Authenticate(message) => message.write(writer, version),
			Self::Supported(message) => message.write(writer, version),
			Self::Result(message) => message.write(writer, version),
			Self::Event(message) => message.write(writer, version),
			Self::AuthChallenge(message) => message.write(writer, version),
			Self::AuthSuccess(message) => message.write(writer, version),
		};

		#[cfg(feature = "tracing")]
		if let Err(error) = &result {
			tracing::debug!(opcode = ?self.opcode(), ?version, %error, "failed to encode message");
		}

		result
	}

	/// Decodes a message body given its opcode, the target protocol
	/// version, and the body bytes (with any frame header already stripped
	/// by the caller).
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a malformed field, or any validation
	/// error the matching variant's codec reports for `version`.
	pub fn decode(opcode: OpCode, reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		#[cfg(feature = "tracing")]
		tracing::trace!(?opcode, ?version, "decoding message");

		let result = Self::decode_inner(opcode, reader, version);

		#[cfg(feature = "tracing")]
		if let Err(error) = &result {
			tracing::debug!(?opcode, ?version, %error, "failed to decode message");
		}

		result
	}

	fn decode_inner(opcode: OpCode, reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		match opcode {
			OpCode::Startup => Ok(Self::Startup(Startup::read(reader, version)?)),
			OpCode::Options => Ok(Self::Options(Options::read(reader, version)?)),
			OpCode::Query => Ok(Self::Query(Query::read(reader, version)?)),
			OpCode::Prepare => Ok(Self::Prepare(Prepare::read(reader, version)?)),
			OpCode::Execute => Ok(Self::Execute(Execute::read(reader, version)?)),
			OpCode::Register => Ok(Self::Register(Register::read(reader, version)?)),
			OpCode::Batch => Ok(Self::Batch(Batch::read(reader, version)?)),
			OpCode::AuthResponse => Ok(Self::AuthResponse(AuthResponse::read(reader, version)?)),
			OpCode::DseRevise => Ok(Self::DseRevise(DseRevise::read(reader, version)?)),
			OpCode::Error => Ok(Self::Error(ServerError::read(reader, version)?)),
			OpCode::Ready => Ok(Self::Ready(Ready::read(reader, version)?)),
			OpCode::Authenticate => Ok(Self::Authenticate(Authenticate::read(reader, version)?)),
			OpCode::Supported => Ok(Self::Supported(Supported::read(reader, version)?)),
			OpCode::Result => Ok(Self::Result(ResultBody::read(reader, version)?)),
			OpCode::Event => Ok(Self::Event(Event::read(reader, version)?)),
			OpCode::AuthChallenge => Ok(Self::AuthChallenge(AuthChallenge::read(reader, version)?)),
			OpCode::AuthSuccess => Ok(Self::AuthSuccess(AuthSuccess::read(reader, version)?)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::consistency::ConsistencyLevel;
	use crate::message::query_params::QueryParams;

	#[test]
	fn opcode_matches_variant() {
		let message = Message::Options(Options);
		assert_eq!(message.opcode(), OpCode::Options);
		assert!(message.opcode().is_request());
	}

	#[test]
	fn round_trips_through_opcode_dispatch() {
		let message = Message::Query(Query {
			query: "SELECT 1".to_string(),
			params: QueryParams {
				consistency: Some(ConsistencyLevel::One),
				..Default::default()
			},
		});

		let mut buf = Vec::new();
		message.encode(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), message.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		let decoded = Message::decode(OpCode::Query, &mut slice, ProtocolVersion::V4).unwrap();
		assert_eq!(decoded, message);
	}

	#[test]
	fn ready_has_empty_body() {
		let message = Message::Ready(Ready);
		let mut buf = Vec::new();
		message.encode(&mut buf, ProtocolVersion::V4).unwrap();
		assert!(buf.is_empty());
	}
}
