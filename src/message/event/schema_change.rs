// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`SchemaChangeEvent`]: the body of an `EVENT` announcing a DDL change.

use bytes::{Buf, BufMut};

use crate::error::{Error, Result};
use crate::schema_change::{SchemaChangeTarget, SchemaChangeType};
use crate::version::ProtocolVersion;

/// The body of an `EVENT(SCHEMA_CHANGE)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaChangeEvent {
	/// What happened: created, updated, or dropped.
	pub change_type: SchemaChangeType,
	/// The kind of object changed.
	pub target: SchemaChangeTarget,
	/// The keyspace the object belongs to.
	pub keyspace: String,
	/// The object's name. Present for every target except `Keyspace`.
	pub object_name: Option<String>,
	/// The changed function/aggregate's argument types. Present only for
	/// `Function`/`Aggregate` targets, which additionally require protocol
	/// version ≥ 4.
	pub argument_types: Option<Vec<String>>,
}

impl SchemaChangeEvent {
	/// The wire length of this event body.
	#[must_use]
	pub fn wire_size(&self) -> usize {
		crate::primitive::string_len(self.change_type.name())
			+ crate::primitive::string_len(self.target.name())
			+ crate::primitive::string_len(&self.keyspace)
			+ self
				.object_name
				.as_deref()
				.map(crate::primitive::string_len)
				.unwrap_or(0)
			+ self
				.argument_types
				.as_deref()
				.map(|types| 2 + types.iter().map(|s| crate::primitive::string_len(s)).sum::<usize>())
				.unwrap_or(0)
	}

	/// Reads a `SCHEMA_CHANGE` event body.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a malformed field, [`Error::InvalidEnumName`]
	/// for an unrecognized change type or target name, or
	/// [`Error::UnsupportedVersionFeature`] if the target is `FUNCTION` or
	/// `AGGREGATE` and `version` is below 4.
	pub fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		let change_type = SchemaChangeType::from_name(&crate::primitive::read_string(reader)?)?;
		let target = SchemaChangeTarget::from_name(&crate::primitive::read_string(reader)?)?;
		let keyspace = crate::primitive::read_string(reader)?;

		if target.has_argument_types() && version < ProtocolVersion::V4 {
			return Err(Error::unsupported_version_feature(
				target.name(),
				ProtocolVersion::V4,
				version,
			));
		}

		let object_name = target
			.has_object_name()
			.then(|| crate::primitive::read_string(reader))
			.transpose()?;

		let argument_types = target
			.has_argument_types()
			.then(|| crate::primitive::read_string_list(reader))
			.transpose()?;

		Ok(Self {
			change_type,
			target,
			keyspace,
			object_name,
			argument_types,
		})
	}

	/// Writes a `SCHEMA_CHANGE` event body.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`] if the target is
	/// `FUNCTION` or `AGGREGATE` and `version` is below 4.
	pub fn write(&self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		if self.target.has_argument_types() && version < ProtocolVersion::V4 {
			return Err(Error::unsupported_version_feature(
				self.target.name(),
				ProtocolVersion::V4,
				version,
			));
		}

		crate::primitive::write_string(self.change_type.name(), writer)?;
		crate::primitive::write_string(self.target.name(), writer)?;
		crate::primitive::write_string(&self.keyspace, writer)?;

		if let Some(object_name) = &self.object_name {
			crate::primitive::write_string(object_name, writer)?;
		}
		if let Some(argument_types) = &self.argument_types {
			crate::primitive::write_string_list(argument_types, writer)?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keyspace_change_matches_reference_bytes_at_v3() {
		let event = SchemaChangeEvent {
			change_type: SchemaChangeType::Created,
			target: SchemaChangeTarget::Keyspace,
			keyspace: "ks1".to_string(),
			object_name: None,
			argument_types: None,
		};

		let mut buf = Vec::new();
		event.write(&mut buf, ProtocolVersion::V3).unwrap();
		assert_eq!(buf.len(), event.wire_size());

		let mut expected = Vec::new();
		expected.extend_from_slice(&[0x00, 0x07]);
		expected.extend_from_slice(b"CREATED");
		expected.extend_from_slice(&[0x00, 0x08]);
		expected.extend_from_slice(b"KEYSPACE");
		expected.extend_from_slice(&[0x00, 0x03]);
		expected.extend_from_slice(b"ks1");
		assert_eq!(buf, expected);

		let mut slice = &buf[..];
		assert_eq!(SchemaChangeEvent::read(&mut slice, ProtocolVersion::V3).unwrap(), event);
	}

	#[test]
	fn function_change_requires_v4() {
		let event = SchemaChangeEvent {
			change_type: SchemaChangeType::Created,
			target: SchemaChangeTarget::Function,
			keyspace: "ks1".to_string(),
			object_name: Some("func1".to_string()),
			argument_types: Some(vec!["int".to_string(), "varchar".to_string()]),
		};

		assert!(event.write(&mut Vec::new(), ProtocolVersion::V3).is_err());

		let mut buf = Vec::new();
		event.write(&mut buf, ProtocolVersion::V4).unwrap();

		let mut slice = &buf[..];
		assert_eq!(SchemaChangeEvent::read(&mut slice, ProtocolVersion::V4).unwrap(), event);

		let mut slice = &buf[..];
		assert!(SchemaChangeEvent::read(&mut slice, ProtocolVersion::V3).is_err());
	}

	#[test]
	fn table_change_carries_an_object_name() {
		let event = SchemaChangeEvent {
			change_type: SchemaChangeType::Updated,
			target: SchemaChangeTarget::Table,
			keyspace: "ks1".to_string(),
			object_name: Some("t1".to_string()),
			argument_types: None,
		};

		let mut buf = Vec::new();
		event.write(&mut buf, ProtocolVersion::V4).unwrap();

		let mut slice = &buf[..];
		assert_eq!(SchemaChangeEvent::read(&mut slice, ProtocolVersion::V4).unwrap(), event);
	}
}
