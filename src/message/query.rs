// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Query`]: a CQL statement sent as inline text.

use bytes::{Buf, BufMut};

use super::query_params::QueryParams;
use crate::error::Result;
use crate::version::ProtocolVersion;

/// `QUERY`: an inline CQL statement plus its query-parameters block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
	/// The CQL statement text.
	pub query: String,
	/// The consistency, flags, and optional fields governing execution.
	pub params: QueryParams,
}

impl Query {
	/// The wire length of this message's body.
	#[must_use]
	pub fn wire_size(&self, version: ProtocolVersion) -> usize {
		crate::primitive::long_string_len(&self.query) + self.params.wire_size(version)
	}

	/// Reads a `QUERY` body: a `long string` then a query-parameters block.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`](crate::Error::Read) on a malformed field.
	pub fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		let query = crate::primitive::read_long_string(reader)?;
		let params = QueryParams::read(reader, version)?;

		Ok(Self { query, params })
	}

	/// Writes a `QUERY` body: a `long string` then a query-parameters block.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`](crate::Error::UnsupportedVersionFeature)
	/// if a version-gated parameter is set for `version`.
	pub fn write(&self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		crate::primitive::write_long_string(&self.query, writer)?;
		self.params.write(writer, version)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::consistency::ConsistencyLevel;

	#[test]
	fn round_trips() {
		let query = Query {
			query: "SELECT 1".to_string(),
			params: QueryParams {
				consistency: Some(ConsistencyLevel::One),
				..Default::default()
			},
		};

		let mut buf = Vec::new();
		query.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), query.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(Query::read(&mut slice, ProtocolVersion::V4).unwrap(), query);
	}
}
