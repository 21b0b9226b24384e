// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Execute`]: runs a previously prepared statement by id.

use bytes::{Buf, BufMut};

use super::query_params::QueryParams;
use crate::error::{Error, Result};
use crate::version::ProtocolVersion;

/// `EXECUTE`: a prepared statement id plus its query-parameters block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Execute {
	/// The id returned by a prior `PREPARE`/`RESULT(Prepared)` exchange.
	pub id: Vec<u8>,
	/// The cached result-set metadata id to reuse. Protocol ≥ 5 only.
	pub result_metadata_id: Option<Vec<u8>>,
	/// The consistency, flags, and optional fields governing execution.
	pub params: QueryParams,
}

impl Execute {
	/// The wire length of this message's body.
	#[must_use]
	pub fn wire_size(&self, version: ProtocolVersion) -> usize {
		let mut size = crate::primitive::short_bytes_len(&self.id);

		if version >= ProtocolVersion::V5 {
			if let Some(id) = &self.result_metadata_id {
				size += crate::primitive::short_bytes_len(id);
			}
		}

		size + self.params.wire_size(version)
	}

	/// Reads an `EXECUTE` body: `short bytes` id, (protocol ≥ 5) an optional
	/// `short bytes` result-metadata id, then a query-parameters block.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a malformed field.
	pub fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		let id = crate::primitive::read_short_bytes(reader)?;

		let result_metadata_id = if version >= ProtocolVersion::V5 {
			Some(crate::primitive::read_short_bytes(reader)?)
		} else {
			None
		};

		let params = QueryParams::read(reader, version)?;

		Ok(Self {
			id,
			result_metadata_id,
			params,
		})
	}

	/// Writes an `EXECUTE` body: `short bytes` id, (protocol ≥ 5) an
	/// optional `short bytes` result-metadata id, then a query-parameters
	/// block.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`] if
	/// [`result_metadata_id`](Self::result_metadata_id) is set on a protocol
	/// version below 5.
	pub fn write(&self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		if self.result_metadata_id.is_some() && version < ProtocolVersion::V5 {
			return Err(Error::unsupported_version_feature(
				"EXECUTE result metadata id",
				ProtocolVersion::V5,
				version,
			));
		}

		crate::primitive::write_short_bytes(&self.id, writer)?;

		if version >= ProtocolVersion::V5 {
			if let Some(id) = &self.result_metadata_id {
				crate::primitive::write_short_bytes(id, writer)?;
			}
		}

		self.params.write(writer, version)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::consistency::ConsistencyLevel;

	#[test]
	fn round_trips() {
		let execute = Execute {
			id: vec![1, 2, 3, 4],
			result_metadata_id: None,
			params: QueryParams {
				consistency: Some(ConsistencyLevel::Quorum),
				..Default::default()
			},
		};

		let mut buf = Vec::new();
		execute.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), execute.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(Execute::read(&mut slice, ProtocolVersion::V4).unwrap(), execute);
	}

	#[test]
	fn round_trips_with_result_metadata_id_at_v5() {
		let execute = Execute {
			id: vec![1, 2, 3, 4],
			result_metadata_id: Some(vec![5, 6]),
			params: QueryParams {
				consistency: Some(ConsistencyLevel::One),
				..Default::default()
			},
		};

		let mut buf = Vec::new();
		execute.write(&mut buf, ProtocolVersion::V5).unwrap();
		assert_eq!(buf.len(), execute.wire_size(ProtocolVersion::V5));

		let mut slice = &buf[..];
		assert_eq!(Execute::read(&mut slice, ProtocolVersion::V5).unwrap(), execute);
	}
}
