// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Startup`]: the first request a client sends on a new connection.

use bytes::{Buf, BufMut};

use crate::error::Result;
use crate::version::ProtocolVersion;

/// `STARTUP`: negotiates the CQL version and, optionally, compression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Startup {
	/// Startup options, e.g. `CQL_VERSION` and `COMPRESSION`.
	pub options: Vec<(String, String)>,
}

impl Startup {
	/// The wire length of this message's body.
	#[must_use]
	pub fn wire_size(&self, _version: ProtocolVersion) -> usize {
		crate::primitive::string_map_len(&self.options)
	}

	/// Reads a `STARTUP` body: a single `string map`.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`](crate::Error::Read) on a malformed entry.
	pub fn read(reader: &mut impl Buf, _version: ProtocolVersion) -> Result<Self> {
		Ok(Self {
			options: crate::primitive::read_string_map(reader)?,
		})
	}

	/// Writes a `STARTUP` body: a single `string map`.
	///
	/// # Errors
	///
	/// Returns [`Error::CountOverflow`](crate::Error::CountOverflow) if there
	/// are more than `0xFFFF` options.
	pub fn write(&self, writer: &mut impl BufMut, _version: ProtocolVersion) -> Result<()> {
		crate::primitive::write_string_map(&self.options, writer)
	}
}
