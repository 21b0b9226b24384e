// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`QueryParams`], the consistency/flags/values block shared by `QUERY`,
//! `EXECUTE`, and the tail of `BATCH`.

use bytes::{Buf, BufMut};

use crate::consistency::ConsistencyLevel;
use crate::error::{Error, Result};
use crate::flags::QueryFlags;
use crate::primitive::Value;
use crate::version::ProtocolVersion;

/// Either a positional or a named value list, mutually exclusive on the
/// wire via [`QueryFlags::VALUE_NAMES`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoundValues {
	/// Values bound by parameter position.
	Positional(Vec<Value>),
	/// Values bound by parameter name.
	Named(Vec<(String, Value)>),
}

impl BoundValues {
	fn flag(&self) -> QueryFlags {
		match self {
			Self::Positional(_) => QueryFlags::empty(),
			Self::Named(_) => QueryFlags::VALUE_NAMES,
		}
	}

	fn wire_size(&self) -> usize {
		match self {
			Self::Positional(values) => crate::primitive::positional_values_len(values),
			Self::Named(entries) => crate::primitive::named_values_len(entries),
		}
	}
}

/// The consistency, flags, and optional trailing fields shared by `QUERY`,
/// `EXECUTE`, and `BATCH`.
///
/// Field presence is governed by [`QueryFlags`]; encoders derive the flags
/// bitmap from which optional fields are `Some`, so callers never set flags
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryParams {
	/// The consistency level for the statement itself.
	pub consistency: Option<ConsistencyLevel>,
	/// Bound values, if any, and whether they are positional or named.
	pub values: Option<BoundValues>,
	/// Whether the result, if any, should omit column metadata.
	pub skip_metadata: bool,
	/// The requested page size, in rows.
	pub page_size: Option<i32>,
	/// An opaque paging state from a previous page.
	pub paging_state: Option<Vec<u8>>,
	/// The consistency level for the statement's serial phase, if it is a
	/// lightweight transaction.
	pub serial_consistency: Option<ConsistencyLevel>,
	/// A client-supplied write timestamp, in microseconds.
	pub default_timestamp: Option<i64>,
	/// The keyspace to execute the statement in. Protocol ≥ 5 only.
	pub keyspace: Option<String>,
	/// A client-supplied "now", in seconds. Protocol ≥ 5 only.
	pub now_in_seconds: Option<i32>,
}

impl QueryParams {
	fn flags(&self) -> QueryFlags {
		let mut flags = QueryFlags::empty();

		if let Some(values) = &self.values {
			flags |= QueryFlags::VALUES | values.flag();
		}
		if self.skip_metadata {
			flags |= QueryFlags::SKIP_METADATA;
		}
		if self.page_size.is_some() {
			flags |= QueryFlags::PAGE_SIZE;
		}
		if self.paging_state.is_some() {
			flags |= QueryFlags::WITH_PAGING_STATE;
		}
		if self.serial_consistency.is_some() {
			flags |= QueryFlags::SERIAL_CONSISTENCY;
		}
		if self.default_timestamp.is_some() {
			flags |= QueryFlags::DEFAULT_TIMESTAMP;
		}
		if self.keyspace.is_some() {
			flags |= QueryFlags::WITH_KEYSPACE;
		}
		if self.now_in_seconds.is_some() {
			flags |= QueryFlags::NOW_IN_SECONDS;
		}

		flags
	}

	/// The wire length of this parameters block, consistency short included.
	#[must_use]
	pub fn wire_size(&self, version: ProtocolVersion) -> usize {
		let mut size = 2 + QueryFlags::wire_size(version);

		if let Some(values) = &self.values {
			size += values.wire_size();
		}
		if self.page_size.is_some() {
			size += 4;
		}
		if let Some(paging_state) = &self.paging_state {
			size += crate::primitive::bytes_len(paging_state);
		}
		if self.serial_consistency.is_some() {
			size += 2;
		}
		if self.default_timestamp.is_some() {
			size += 8;
		}
		if let Some(keyspace) = &self.keyspace {
			size += crate::primitive::string_len(keyspace);
		}
		if self.now_in_seconds.is_some() {
			size += 4;
		}

		size
	}

	/// Reads a query-parameters block.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a malformed field, or
	/// [`Error::UnsupportedVersionFeature`] if a v5-only field's flag is set
	/// on an older version.
	pub fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		let consistency = ConsistencyLevel::from_code(crate::primitive::read_short(reader)?)?;
		let flags = QueryFlags::read(reader, version)?;

		let values = if flags.contains(QueryFlags::VALUES) {
			Some(if flags.contains(QueryFlags::VALUE_NAMES) {
				BoundValues::Named(crate::primitive::read_named_values(reader, version)?)
			} else {
				BoundValues::Positional(crate::primitive::read_positional_values(reader, version)?)
			})
		} else {
			None
		};

		let page_size = flags
			.contains(QueryFlags::PAGE_SIZE)
			.then(|| crate::primitive::read_int(reader))
			.transpose()?;

		let paging_state = flags
			.contains(QueryFlags::WITH_PAGING_STATE)
			.then(|| crate::primitive::read_bytes(reader))
			.transpose()?;

		let serial_consistency = flags
			.contains(QueryFlags::SERIAL_CONSISTENCY)
			.then(|| -> Result<ConsistencyLevel> {
				ConsistencyLevel::from_code(crate::primitive::read_short(reader)?)?.require_serial()
			})
			.transpose()?;

		let default_timestamp = flags
			.contains(QueryFlags::DEFAULT_TIMESTAMP)
			.then(|| crate::primitive::read_long(reader))
			.transpose()?;

		let keyspace = flags
			.contains(QueryFlags::WITH_KEYSPACE)
			.then(|| crate::primitive::read_string(reader))
			.transpose()?;

		let now_in_seconds = flags
			.contains(QueryFlags::NOW_IN_SECONDS)
			.then(|| crate::primitive::read_int(reader))
			.transpose()?;

		Ok(Self {
			consistency: Some(consistency),
			values,
			skip_metadata: flags.contains(QueryFlags::SKIP_METADATA),
			page_size,
			paging_state,
			serial_consistency,
			default_timestamp,
			keyspace,
			now_in_seconds,
		})
	}

	/// Writes a query-parameters block.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`] if
	/// [`keyspace`](Self::keyspace) or [`now_in_seconds`](Self::now_in_seconds)
	/// is set on a protocol version below 5, or [`Error::InvalidEnum`] if
	/// [`serial_consistency`](Self::serial_consistency) is not a serial
	/// consistency level.
	pub fn write(&self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		let flags = self.flags();
		flags.validate(version)?;
		if let Some(serial) = self.serial_consistency {
			serial.require_serial()?;
		}

		crate::primitive::write_short(
			self.consistency
				.ok_or_else(|| Error::semantic_violation("query parameters require a consistency level"))?
				.code(),
			writer,
		)?;
		flags.write(writer, version)?;

		match &self.values {
			Some(BoundValues::Positional(values)) => {
				crate::primitive::write_positional_values(values, writer, version)?;
			}
			Some(BoundValues::Named(entries)) => {
				crate::primitive::write_named_values(entries, writer, version)?;
			}
			None => {}
		}

		if let Some(page_size) = self.page_size {
			crate::primitive::write_int(page_size, writer)?;
		}
		if let Some(paging_state) = &self.paging_state {
			crate::primitive::write_bytes(paging_state, writer)?;
		}
		if let Some(serial) = self.serial_consistency {
			crate::primitive::write_short(serial.code(), writer)?;
		}
		if let Some(timestamp) = self.default_timestamp {
			crate::primitive::write_long(timestamp, writer)?;
		}
		if let Some(keyspace) = &self.keyspace {
			crate::primitive::write_string(keyspace, writer)?;
		}
		if let Some(now_in_seconds) = self.now_in_seconds {
			crate::primitive::write_int(now_in_seconds, writer)?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_minimal_params() {
		let params = QueryParams {
			consistency: Some(ConsistencyLevel::One),
			..Default::default()
		};

		let mut buf = Vec::new();
		params.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), params.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(QueryParams::read(&mut slice, ProtocolVersion::V4).unwrap(), params);
	}

	#[test]
	fn round_trips_full_params_at_v5() {
		let params = QueryParams {
			consistency: Some(ConsistencyLevel::Quorum),
			values: Some(BoundValues::Positional(vec![Value::Regular(vec![1, 2])])),
			skip_metadata: true,
			page_size: Some(100),
			paging_state: Some(vec![9, 9]),
			serial_consistency: Some(ConsistencyLevel::Serial),
			default_timestamp: Some(42),
			keyspace: Some("ks1".to_string()),
			now_in_seconds: Some(7),
		};

		let mut buf = Vec::new();
		params.write(&mut buf, ProtocolVersion::V5).unwrap();
		assert_eq!(buf.len(), params.wire_size(ProtocolVersion::V5));

		let mut slice = &buf[..];
		assert_eq!(QueryParams::read(&mut slice, ProtocolVersion::V5).unwrap(), params);
	}

	#[test]
	fn rejects_keyspace_below_v5() {
		let params = QueryParams {
			consistency: Some(ConsistencyLevel::One),
			keyspace: Some("ks1".to_string()),
			..Default::default()
		};

		assert!(params.write(&mut Vec::new(), ProtocolVersion::V4).is_err());
	}

	#[test]
	fn rejects_non_serial_serial_consistency() {
		let params = QueryParams {
			consistency: Some(ConsistencyLevel::One),
			serial_consistency: Some(ConsistencyLevel::One),
			..Default::default()
		};

		assert!(params.write(&mut Vec::new(), ProtocolVersion::V4).is_err());
	}
}
