// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Registry`]: the opcode-to-codec lookup the framing layer dispatches
//! through.
//!
//! There is exactly one [`Registry`], it holds no mutable state, and it is
//! cheap to construct ([`Registry::new`] is a `const fn`) — callers are free
//! to build one per connection, keep a single process-wide instance, or
//! inline `Registry::new().codec_for(...)` at each call site. The value it
//! returns, [`MessageCodec`], is a thin, `Copy`, zero-size handle: looking
//! one up never allocates and never touches shared state.

use bytes::{Buf, BufMut};

use crate::error::{Error, Result};
use crate::message::Message;
use crate::opcode::OpCode;
use crate::version::ProtocolVersion;

/// The codec bound to a single [`OpCode`]: encode, decode, and
/// length operations over a `(message, version)` pair.
///
/// A [`MessageCodec`] additionally enforces that the [`Message`] handed to
/// [`encode`](Self::encode) actually carries the opcode this codec was
/// looked up for, so a caller cannot accidentally serialize, say, a `QUERY`
/// body under the `EXECUTE` opcode slot of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageCodec {
	opcode: OpCode,
}

impl MessageCodec {
	/// The opcode this codec handles.
	#[must_use]
	pub const fn opcode(&self) -> OpCode {
		self.opcode
	}

	/// Encodes `message` for `version`.
	///
	/// # Errors
	///
	/// Returns [`Error::SemanticViolation`] if `message.opcode()` does not
	/// match [`self.opcode()`](Self::opcode), or any error the message's own
	/// codec reports for `version`.
	pub fn encode(&self, message: &Message, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		self.check_opcode(message)?;
		message.encode(writer, version)
	}

	/// Computes the wire length `message` would occupy when encoded for
	/// `version`.
	///
	/// # Errors
	///
	/// Returns [`Error::SemanticViolation`] if `message.opcode()` does not
	/// match [`self.opcode()`](Self::opcode).
	pub fn encoded_length(&self, message: &Message, version: ProtocolVersion) -> Result<usize> {
		self.check_opcode(message)?;
		Ok(message.wire_size(version))
	}

	/// Decodes a message body for `version`, tagging the result with
	/// [`self.opcode()`](Self::opcode).
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a malformed field, or any validation error
	/// the matching variant's codec reports for `version`.
	pub fn decode(&self, reader: &mut impl Buf, version: ProtocolVersion) -> Result<Message> {
		Message::decode(self.opcode, reader, version)
	}

	fn check_opcode(&self, message: &Message) -> Result<()> {
		if message.opcode() != self.opcode {
			return Err(Error::semantic_violation(format!(
				"message carries opcode {:?} but codec was looked up for {:?}",
				message.opcode(),
				self.opcode
			)));
		}

		Ok(())
	}
}

/// The opcode-to-codec registry. Construction is free and the result is
/// read-only; there is no global mutable state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry {
	_private: (),
}

impl Registry {
	/// Builds a registry. Since codecs are pure functions of `(opcode,
	/// message, version)`, this never fails and never allocates.
	#[must_use]
	pub const fn new() -> Self {
		Self { _private: () }
	}

	/// Looks up the codec for `opcode`.
	///
	/// Every [`OpCode`] has exactly one codec; this never fails.
	#[must_use]
	pub const fn codec_for(&self, opcode: OpCode) -> MessageCodec {
		MessageCodec { opcode }
	}

	/// Looks up the codec for `opcode`, requiring that it be a request
	/// opcode.
	///
	/// # Errors
	///
	/// Returns [`Error::SemanticViolation`] if `opcode` is a response
	/// opcode.
	pub fn request_codec_for(&self, opcode: OpCode) -> Result<MessageCodec> {
		if !opcode.is_request() {
			return Err(Error::semantic_violation(format!(
				"{opcode:?} is not a request opcode"
			)));
		}

		Ok(self.codec_for(opcode))
	}

	/// Looks up the codec for `opcode`, requiring that it be a response
	/// opcode.
	///
	/// # Errors
	///
	/// Returns [`Error::SemanticViolation`] if `opcode` is a request opcode.
	pub fn response_codec_for(&self, opcode: OpCode) -> Result<MessageCodec> {
		if !opcode.is_response() {
			return Err(Error::semantic_violation(format!(
				"{opcode:?} is not a response opcode"
			)));
		}

		Ok(self.codec_for(opcode))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::message::{Options, Ready};

	#[test]
	fn round_trips_through_the_registry() {
		let registry = Registry::new();
		let codec = registry.request_codec_for(OpCode::Options).unwrap();

		let message = Message::Options(Options);
		let mut buf = Vec::new();
		codec.encode(&message, &mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), codec.encoded_length(&message, ProtocolVersion::V4).unwrap());

		let mut slice = &buf[..];
		assert_eq!(codec.decode(&mut slice, ProtocolVersion::V4).unwrap(), message);
	}

	#[test]
	fn rejects_request_lookup_for_a_response_opcode() {
		let registry = Registry::new();
		assert!(registry.request_codec_for(OpCode::Ready).is_err());
		assert!(registry.response_codec_for(OpCode::Ready).is_ok());
	}

	#[test]
	fn rejects_mismatched_opcode_on_encode() {
		let registry = Registry::new();
		let codec = registry.codec_for(OpCode::Query);

		let message = Message::Ready(Ready);
		assert!(codec.encode(&message, &mut Vec::new(), ProtocolVersion::V4).is_err());
	}
}
