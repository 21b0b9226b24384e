// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`ResultBody`]: the body of a `RESULT` message, keyed by [`ResultKind`].

use bytes::{Buf, BufMut};

use super::metadata::{PreparedMetadata, RowsMetadata};
use super::rows::Rows;
use crate::error::Result;
use crate::message::event::SchemaChangeEvent;
use crate::result_kind::ResultKind;
use crate::version::ProtocolVersion;

/// The body of a `RESULT(Prepared)` message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prepared {
	/// The opaque id the client presents to `EXECUTE` this statement.
	pub id: Vec<u8>,
	/// The server's hash of the result-set metadata, presented back on
	/// `EXECUTE` so the server can detect metadata that changed since
	/// preparation. Protocol version ≥ 5 only.
	pub result_metadata_id: Option<Vec<u8>>,
	/// Describes the bind markers the statement expects.
	pub metadata: PreparedMetadata,
	/// Describes the columns the statement's result set will carry.
	pub result_metadata: RowsMetadata,
}

/// The body of a `RESULT` message, discriminated by [`ResultKind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ResultBody {
	/// The query succeeded and returned nothing.
	Void,
	/// The query returned a result set.
	Rows(Rows),
	/// A `USE <keyspace>` succeeded; names the keyspace now in use.
	SetKeyspace(String),
	/// An `EXECUTE` prepare succeeded.
	Prepared(Prepared),
	/// A DDL statement succeeded, carrying the same change description as
	/// the corresponding [`EVENT`](crate::message::event::Event).
	SchemaChange(SchemaChangeEvent),
}

impl ResultBody {
	/// This body's [`ResultKind`] discriminator.
	#[must_use]
	pub const fn kind(&self) -> ResultKind {
		match self {
			Self::Void => ResultKind::Void,
			Self::Rows(_) => ResultKind::Rows,
			Self::SetKeyspace(_) => ResultKind::SetKeyspace,
			Self::Prepared(_) => ResultKind::Prepared,
			Self::SchemaChange(_) => ResultKind::SchemaChange,
		}
	}

	/// The wire length of this result body, discriminator included.
	#[must_use]
	pub fn wire_size(&self, version: ProtocolVersion) -> usize {
		4 + match self {
			Self::Void => 0,
			Self::Rows(rows) => rows.wire_size(),
			Self::SetKeyspace(keyspace) => crate::primitive::string_len(keyspace),
			Self::Prepared(prepared) => {
				let result_metadata_id_len = if version >= ProtocolVersion::V5 {
					prepared
						.result_metadata_id
						.as_deref()
						.map(crate::primitive::short_bytes_len)
						.unwrap_or(0)
				} else {
					0
				};

				crate::primitive::short_bytes_len(&prepared.id)
					+ result_metadata_id_len
					+ prepared.metadata.wire_size()
					+ prepared.result_metadata.wire_size()
			}
			Self::SchemaChange(event) => event.wire_size(),
		}
	}

	/// Reads a `RESULT` body: an `int` [`ResultKind`] discriminator, then a
	/// variant-specific body.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`](crate::Error::Read) on a malformed field,
	/// [`Error::UnknownDiscriminator`](crate::Error::UnknownDiscriminator)
	/// for an unrecognized kind, or
	/// [`Error::UnsupportedVersionFeature`](crate::Error::UnsupportedVersionFeature)
	/// for a `result_metadata_id` read below protocol version 5 (never
	/// produced by a compliant server, but rejected rather than silently
	/// ignored) or a schema-change target requiring version 4.
	pub fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		match ResultKind::from_code(crate::primitive::read_int(reader)?)? {
			ResultKind::Void => Ok(Self::Void),
			ResultKind::Rows => Ok(Self::Rows(Rows::read(reader)?)),
			ResultKind::SetKeyspace => Ok(Self::SetKeyspace(crate::primitive::read_string(reader)?)),
			ResultKind::Prepared => {
				let id = crate::primitive::read_short_bytes(reader)?;
				let result_metadata_id = (version >= ProtocolVersion::V5)
					.then(|| crate::primitive::read_short_bytes(reader))
					.transpose()?;
				let metadata = PreparedMetadata::read(reader)?;
				let result_metadata = RowsMetadata::read(reader)?;

				Ok(Self::Prepared(Prepared {
					id,
					result_metadata_id,
					metadata,
					result_metadata,
				}))
			}
			ResultKind::SchemaChange => Ok(Self::SchemaChange(SchemaChangeEvent::read(reader, version)?)),
		}
	}

	/// Writes a `RESULT` body: an `int` [`ResultKind`] discriminator, then
	/// the variant-specific body.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`](crate::Error::UnsupportedVersionFeature)
	/// if a `Prepared` body carries a `result_metadata_id` and `version` is
	/// below 5, or if a `SchemaChange` body's target requires version 4.
	pub fn write(&self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		crate::primitive::write_int(self.kind().code(), writer)?;

		match self {
			Self::Void => Ok(()),
			Self::Rows(rows) => rows.write(writer),
			Self::SetKeyspace(keyspace) => crate::primitive::write_string(keyspace, writer),
			Self::Prepared(prepared) => {
				crate::primitive::write_short_bytes(&prepared.id, writer)?;

				if let Some(result_metadata_id) = &prepared.result_metadata_id {
					if version < ProtocolVersion::V5 {
						return Err(crate::Error::unsupported_version_feature(
							"PREPARED result_metadata_id",
							ProtocolVersion::V5,
							version,
						));
					}
					crate::primitive::write_short_bytes(result_metadata_id, writer)?;
				}

				prepared.metadata.write(writer)?;
				prepared.result_metadata.write(writer)
			}
			Self::SchemaChange(event) => event.write(writer, version),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data_type::DataType;
	use crate::message::result::column_spec::ColumnSpec;
	use crate::schema_change::{SchemaChangeTarget, SchemaChangeType};

	#[test]
	fn round_trips_void() {
		let body = ResultBody::Void;

		let mut buf = Vec::new();
		body.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), body.wire_size(ProtocolVersion::V4));
		assert_eq!(buf, [0x00, 0x00, 0x00, 0x01]);

		let mut slice = &buf[..];
		assert_eq!(ResultBody::read(&mut slice, ProtocolVersion::V4).unwrap(), body);
	}

	#[test]
	fn round_trips_set_keyspace() {
		let body = ResultBody::SetKeyspace("ks1".to_string());

		let mut buf = Vec::new();
		body.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), body.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(ResultBody::read(&mut slice, ProtocolVersion::V4).unwrap(), body);
	}

	#[test]
	fn round_trips_prepared_without_result_metadata_id_below_v5() {
		let body = ResultBody::Prepared(Prepared {
			id: vec![0xAB, 0xCD],
			result_metadata_id: None,
			metadata: PreparedMetadata {
				global_table_spec: Some(("ks1".to_string(), "t1".to_string())),
				partition_key_indexes: vec![0],
				columns: vec![ColumnSpec {
					keyspace: None,
					table: None,
					name: "id".to_string(),
					data_type: DataType::Uuid,
				}],
			},
			result_metadata: RowsMetadata::default(),
		});

		let mut buf = Vec::new();
		body.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), body.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(ResultBody::read(&mut slice, ProtocolVersion::V4).unwrap(), body);
	}

	#[test]
	fn round_trips_prepared_with_result_metadata_id_at_v5() {
		let body = ResultBody::Prepared(Prepared {
			id: vec![0xAB, 0xCD],
			result_metadata_id: Some(vec![0x01, 0x02]),
			metadata: PreparedMetadata::default(),
			result_metadata: RowsMetadata::default(),
		});

		let mut buf = Vec::new();
		body.write(&mut buf, ProtocolVersion::V5).unwrap();
		assert_eq!(buf.len(), body.wire_size(ProtocolVersion::V5));

		let mut slice = &buf[..];
		assert_eq!(ResultBody::read(&mut slice, ProtocolVersion::V5).unwrap(), body);
	}

	#[test]
	fn rejects_prepared_result_metadata_id_below_v5() {
		let body = ResultBody::Prepared(Prepared {
			id: vec![0xAB],
			result_metadata_id: Some(vec![0x01]),
			metadata: PreparedMetadata::default(),
			result_metadata: RowsMetadata::default(),
		});

		assert!(body.write(&mut Vec::new(), ProtocolVersion::V4).is_err());
	}

	#[test]
	fn round_trips_schema_change() {
		let body = ResultBody::SchemaChange(SchemaChangeEvent {
			change_type: SchemaChangeType::Dropped,
			target: SchemaChangeTarget::Table,
			keyspace: "ks1".to_string(),
			object_name: Some("t1".to_string()),
			argument_types: None,
		});

		let mut buf = Vec::new();
		body.write(&mut buf, ProtocolVersion::V4).unwrap();
		assert_eq!(buf.len(), body.wire_size(ProtocolVersion::V4));

		let mut slice = &buf[..];
		assert_eq!(ResultBody::read(&mut slice, ProtocolVersion::V4).unwrap(), body);
	}
}
