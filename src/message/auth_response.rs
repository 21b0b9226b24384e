// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`AuthResponse`]: a client's SASL token reply to [`super::auth_challenge::AuthChallenge`]
//! (or the initial response following [`super::authenticate::Authenticate`]).

use bytes::{Buf, BufMut};

use crate::error::Result;
use crate::version::ProtocolVersion;

/// `AUTH_RESPONSE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthResponse {
	/// The SASL token.
	pub token: Vec<u8>,
}

impl AuthResponse {
	/// The wire length of this message's body.
	#[must_use]
	pub fn wire_size(&self, _version: ProtocolVersion) -> usize {
		crate::primitive::bytes_len(&self.token)
	}

	/// Reads an `AUTH_RESPONSE` body: a single `bytes`.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`](crate::Error::Read) on a malformed length
	/// prefix.
	pub fn read(reader: &mut impl Buf, _version: ProtocolVersion) -> Result<Self> {
		Ok(Self {
			token: crate::primitive::read_bytes(reader)?,
		})
	}

	/// Writes an `AUTH_RESPONSE` body: a single `bytes`.
	pub fn write(&self, writer: &mut impl BufMut, _version: ProtocolVersion) -> Result<()> {
		crate::primitive::write_bytes(&self.token, writer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips() {
		let response = AuthResponse { token: vec![1, 2, 3] };

		let mut buf = Vec::new();
		response.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), response.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(AuthResponse::read(&mut slice, ProtocolVersion::V4).unwrap(), response);
	}
}
