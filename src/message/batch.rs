// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Batch`]: a sequence of statements executed as one logged, unlogged, or
//! counter batch.

use bytes::{Buf, BufMut};

use crate::batch_type::BatchType;
use crate::consistency::ConsistencyLevel;
use crate::error::{Error, Result};
use crate::flags::QueryFlags;
use crate::primitive::Value;
use crate::version::ProtocolVersion;

const CHILD_KIND_QUERY: u8 = 0;
const CHILD_KIND_PREPARED_ID: u8 = 1;

/// One statement inside a `BATCH`: either an inline query or a reference to
/// a server-prepared statement, plus its positional bound values.
///
/// Named values are never valid here; see invariant 6 on [`Batch`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BatchChild {
	/// An inline CQL statement.
	Query {
		/// The statement text.
		query: String,
		/// Positional bound values.
		values: Vec<Value>,
	},
	/// A reference to a previously prepared statement.
	Prepared {
		/// The id returned by `PREPARE`.
		id: Vec<u8>,
		/// Positional bound values.
		values: Vec<Value>,
	},
}

impl BatchChild {
	fn wire_size(&self) -> usize {
		1 + match self {
			Self::Query { query, values } => {
				crate::primitive::long_string_len(query) + crate::primitive::positional_values_len(values)
			}
			Self::Prepared { id, values } => {
				crate::primitive::short_bytes_len(id) + crate::primitive::positional_values_len(values)
			}
		}
	}

	fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		let kind = crate::primitive::read_byte(reader)?;

		match kind {
			CHILD_KIND_QUERY => {
				let query = crate::primitive::read_long_string(reader)?;
				let values = crate::primitive::read_positional_values(reader, version)?;
				Ok(Self::Query { query, values })
			}
			CHILD_KIND_PREPARED_ID => {
				let id = crate::primitive::read_short_bytes(reader)?;
				let values = crate::primitive::read_positional_values(reader, version)?;
				Ok(Self::Prepared { id, values })
			}
			other => Err(Error::unknown_discriminator("BATCH child kind", i64::from(other))),
		}
	}

	fn write(&self, writer: &mut impl bytes::BufMut, version: ProtocolVersion) -> Result<()> {
		match self {
			Self::Query { query, values } => {
				crate::primitive::write_byte(CHILD_KIND_QUERY, writer)?;
				crate::primitive::write_long_string(query, writer)?;
				crate::primitive::write_positional_values(values, writer, version)?;
			}
			Self::Prepared { id, values } => {
				crate::primitive::write_byte(CHILD_KIND_PREPARED_ID, writer)?;
				crate::primitive::write_short_bytes(id, writer)?;
				crate::primitive::write_positional_values(values, writer, version)?;
			}
		}

		Ok(())
	}
}

/// `BATCH`: a type, a list of children, and the same consistency/flags tail
/// as a query-parameters block (minus the `VALUES`/`SKIP_METADATA` bits,
/// which are meaningless for a batch).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Batch {
	/// Logged, unlogged, or counter.
	pub batch_type: BatchType,
	/// The statements to execute, in order.
	pub children: Vec<BatchChild>,
	/// The consistency level for the batch.
	pub consistency: ConsistencyLevel,
	/// The serial consistency level, for a batch with conditional updates.
	pub serial_consistency: Option<ConsistencyLevel>,
	/// A client-supplied write timestamp, in microseconds.
	pub default_timestamp: Option<i64>,
	/// The keyspace to execute the batch in. Protocol ≥ 5 only.
	pub keyspace: Option<String>,
	/// A client-supplied "now", in seconds. Protocol ≥ 5 only.
	pub now_in_seconds: Option<i32>,
}

impl Batch {
	fn flags(&self) -> QueryFlags {
		let mut flags = QueryFlags::empty();

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

	/// The wire length of this message's body.
	#[must_use]
	pub fn wire_size(&self, version: ProtocolVersion) -> usize {
		let mut size = 1
			+ 2 + self.children.iter().map(BatchChild::wire_size).sum::<usize>()
			+ 2
			+ QueryFlags::wire_size(version);

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

	/// Reads a `BATCH` body.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a malformed field, [`Error::InvalidEnum`]
	/// for an unknown batch type, [`Error::UnknownDiscriminator`] for an
	/// unknown child kind, or [`Error::SemanticViolation`] if the
	/// `VALUE_NAMES` flag is set.
	pub fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		let batch_type = BatchType::from_code(crate::primitive::read_byte(reader)?)?;

		let child_count = crate::primitive::read_short(reader)?;
		let children = (0..child_count)
			.map(|_| BatchChild::read(reader, version))
			.collect::<Result<Vec<_>>>()?;

		let consistency = ConsistencyLevel::from_code(crate::primitive::read_short(reader)?)?;
		let flags = QueryFlags::read(reader, version)?;

		if flags.contains(QueryFlags::VALUE_NAMES) {
			return Err(Error::semantic_violation("BATCH with named values"));
		}

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
			batch_type,
			children,
			consistency,
			serial_consistency,
			default_timestamp,
			keyspace,
			now_in_seconds,
		})
	}

	/// Writes a `BATCH` body.
	///
	/// # Errors
	///
	/// Returns [`Error::CountOverflow`] if there are more than `0xFFFF`
	/// children, or [`Error::UnsupportedVersionFeature`] if
	/// [`keyspace`](Self::keyspace) or [`now_in_seconds`](Self::now_in_seconds)
	/// is set on a protocol version below 5.
	pub fn write(&self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		let flags = self.flags();
		flags.validate(version)?;
		if let Some(serial) = self.serial_consistency {
			serial.require_serial()?;
		}
		if self.children.len() > 0xFFFF {
			return Err(Error::count_overflow("BATCH children", self.children.len(), 0xFFFF));
		}

		crate::primitive::write_byte(self.batch_type.code(), writer)?;
		crate::primitive::write_short(self.children.len() as u16, writer)?;
		for child in &self.children {
			child.write(writer, version)?;
		}

		crate::primitive::write_short(self.consistency.code(), writer)?;
		flags.write(writer, version)?;

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
	fn single_inline_child_matches_reference_bytes() {
		let batch = Batch {
			batch_type: BatchType::Logged,
			children: vec![BatchChild::Query {
				query: "SELECT 1".to_string(),
				values: vec![],
			}],
			consistency: ConsistencyLevel::One,
			serial_consistency: None,
			default_timestamp: None,
			keyspace: None,
			now_in_seconds: None,
		};

		let mut buf = Vec::new();
		batch.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), batch.wire_size(ProtocolVersion::V4));

		let mut expected = vec![
			0x00, // batch type: Logged
			0x00, 0x01, // child count: 1
			0x00, // child kind: inline query
		];
		expected.extend_from_slice(&8i32.to_be_bytes()); // long string length
		expected.extend_from_slice(b"SELECT 1");
		expected.extend_from_slice(&[0x00, 0x00]); // positional value count: 0
		expected.extend_from_slice(&[0x00, 0x01]); // consistency: ONE
		expected.push(0x00); // flags: none

		assert_eq!(buf, expected);

		let mut slice = &buf[..];
		assert_eq!(Batch::read(&mut slice, ProtocolVersion::V4).unwrap(), batch);
	}

	#[test]
	fn rejects_children_beyond_max_count() {
		let child = BatchChild::Query {
			query: String::new(),
			values: vec![],
		};

		let batch = Batch {
			batch_type: BatchType::Unlogged,
			children: vec![child; 0x10000],
			consistency: ConsistencyLevel::One,
			serial_consistency: None,
			default_timestamp: None,
			keyspace: None,
			now_in_seconds: None,
		};

		assert!(batch.write(&mut Vec::new(), ProtocolVersion::V4).is_err());
	}

	#[test]
	fn rejects_value_names_flag_on_read() {
		let mut buf = Vec::new();
		crate::primitive::write_byte(BatchType::Logged.code(), &mut buf).unwrap();
		crate::primitive::write_short(0, &mut buf).unwrap();
		crate::primitive::write_short(ConsistencyLevel::One.code(), &mut buf).unwrap();
		QueryFlags::VALUE_NAMES.write(&mut buf, ProtocolVersion::V4).unwrap();

		let mut slice = &buf[..];
		assert!(Batch::read(&mut slice, ProtocolVersion::V4).is_err());
	}

	#[test]
	fn rejects_keyspace_below_v5() {
		let batch = Batch {
			batch_type: BatchType::Logged,
			children: vec![],
			consistency: ConsistencyLevel::One,
			serial_consistency: None,
			default_timestamp: None,
			keyspace: Some("ks1".to_string()),
			now_in_seconds: None,
		};

		assert!(batch.write(&mut Vec::new(), ProtocolVersion::V4).is_err());
	}
}
