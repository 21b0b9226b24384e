// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Authenticate`]: the server demanding SASL authentication.

use bytes::{Buf, BufMut};

use crate::error::Result;
use crate::version::ProtocolVersion;

/// `AUTHENTICATE`: names the authenticator class the client must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Authenticate {
	/// The fully qualified class name of the server's `IAuthenticator`.
	pub authenticator: String,
}

impl Authenticate {
	/// The wire length of this message's body.
	#[must_use]
	pub fn wire_size(&self, _version: ProtocolVersion) -> usize {
		crate::primitive::string_len(&self.authenticator)
	}

	/// Reads an `AUTHENTICATE` body: a single `string`.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`](crate::Error::Read) on a malformed string.
	pub fn read(reader: &mut impl Buf, _version: ProtocolVersion) -> Result<Self> {
		Ok(Self {
			authenticator: crate::primitive::read_string(reader)?,
		})
	}

	/// Writes an `AUTHENTICATE` body: a single `string`.
	pub fn write(&self, writer: &mut impl BufMut, _version: ProtocolVersion) -> Result<()> {
		crate::primitive::write_string(&self.authenticator, writer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips() {
		let authenticate = Authenticate {
			authenticator: "org.apache.cassandra.auth.PasswordAuthenticator".to_string(),
		};

		let mut buf = Vec::new();
		authenticate.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), authenticate.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(Authenticate::read(&mut slice, ProtocolVersion::V4).unwrap(), authenticate);
	}
}
