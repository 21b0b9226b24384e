// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Supported`]: the server's response to `OPTIONS`.

use bytes::{Buf, BufMut};

use crate::error::Result;
use crate::version::ProtocolVersion;

/// `SUPPORTED`: the server's supported startup options, e.g. `CQL_VERSION`
/// and `COMPRESSION`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Supported {
	/// Option name to the list of supported values for that option.
	pub options: Vec<(String, Vec<String>)>,
}

impl Supported {
	/// The wire length of this message's body.
	#[must_use]
	pub fn wire_size(&self, _version: ProtocolVersion) -> usize {
		crate::primitive::string_multimap_len(&self.options)
	}

	/// Reads a `SUPPORTED` body: a single `string multimap`.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`](crate::Error::Read) on a malformed entry.
	pub fn read(reader: &mut impl Buf, _version: ProtocolVersion) -> Result<Self> {
		Ok(Self {
			options: crate::primitive::read_string_multimap(reader)?,
		})
	}

	/// Writes a `SUPPORTED` body: a single `string multimap`.
	///
	/// # Errors
	///
	/// Returns [`Error::CountOverflow`](crate::Error::CountOverflow) if there
	/// are more than `0xFFFF` options, or any option has more than `0xFFFF`
	/// values.
	pub fn write(&self, writer: &mut impl BufMut, _version: ProtocolVersion) -> Result<()> {
		crate::primitive::write_string_multimap(&self.options, writer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips() {
		let supported = Supported {
			options: vec![(
				"COMPRESSION".to_string(),
				vec!["snappy".to_string(), "lz4".to_string()],
			)],
		};

		let mut buf = Vec::new();
		supported.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), supported.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(Supported::read(&mut slice, ProtocolVersion::V4).unwrap(), supported);
	}
}
