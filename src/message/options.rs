// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Options`]: a request for the server's [`Supported`](super::supported::Supported) options. Carries no body.

use bytes::{Buf, BufMut};

use crate::error::Result;
use crate::version::ProtocolVersion;

/// `OPTIONS`: requests the server's supported startup options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Options;

impl Options {
	/// The wire length of this message's body: always zero.
	#[must_use]
	pub const fn wire_size(&self, _version: ProtocolVersion) -> usize {
		0
	}

	/// Reads an `OPTIONS` body: empty.
	pub fn read(_reader: &mut impl Buf, _version: ProtocolVersion) -> Result<Self> {
		Ok(Self)
	}

	/// Writes an `OPTIONS` body: empty.
	pub fn write(&self, _writer: &mut impl BufMut, _version: ProtocolVersion) -> Result<()> {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn has_an_empty_body() {
		let mut buf = Vec::new();
		Options.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert!(buf.is_empty());

		let mut slice = &buf[..];
		assert_eq!(Options::read(&mut slice, ProtocolVersion::V4).unwrap(), Options);
	}
}
