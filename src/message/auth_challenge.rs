// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`AuthChallenge`]: a server-issued SASL challenge during authentication.

use bytes::{Buf, BufMut};

use crate::error::Result;
use crate::version::ProtocolVersion;

/// `AUTH_CHALLENGE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthChallenge {
	/// The SASL challenge token.
	pub token: Vec<u8>,
}

impl AuthChallenge {
	/// The wire length of this message's body.
	#[must_use]
	pub fn wire_size(&self, _version: ProtocolVersion) -> usize {
		crate::primitive::bytes_len(&self.token)
	}

	/// Reads an `AUTH_CHALLENGE` body: a single `bytes`.
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

	/// Writes an `AUTH_CHALLENGE` body: a single `bytes`.
	pub fn write(&self, writer: &mut impl BufMut, _version: ProtocolVersion) -> Result<()> {
		crate::primitive::write_bytes(&self.token, writer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips() {
		let challenge = AuthChallenge { token: vec![9, 8, 7] };

		let mut buf = Vec::new();
		challenge.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), challenge.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(AuthChallenge::read(&mut slice, ProtocolVersion::V4).unwrap(), challenge);
	}
}
