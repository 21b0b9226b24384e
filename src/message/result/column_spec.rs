// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`ColumnSpec`]: one column's name and type, as carried in result/prepared
//! metadata.

use bytes::{Buf, BufMut};

use crate::data_type::DataType;
use crate::error::Result;

/// One column's identity and type.
///
/// `keyspace`/`table` are only populated when the enclosing metadata was
/// read without `GLOBAL_TABLES_SPEC` set (each column then carries its own
/// table identity instead of sharing one).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnSpec {
	/// The column's keyspace, if not inherited from the metadata's global
	/// table spec.
	pub keyspace: Option<String>,
	/// The column's table, if not inherited from the metadata's global
	/// table spec.
	pub table: Option<String>,
	/// The column's name.
	pub name: String,
	/// The column's type.
	pub data_type: DataType,
}

impl ColumnSpec {
	/// The wire length of this column spec.
	#[must_use]
	pub fn wire_size(&self, has_own_table_spec: bool) -> usize {
		let mut size = 0;
		if has_own_table_spec {
			size += crate::primitive::string_len(self.keyspace.as_deref().unwrap_or_default());
			size += crate::primitive::string_len(self.table.as_deref().unwrap_or_default());
		}
		size + crate::primitive::string_len(&self.name) + self.data_type.wire_size()
	}

	/// Reads a column spec.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`](crate::Error::Read) on a malformed field.
	pub fn read(reader: &mut impl Buf, has_own_table_spec: bool) -> Result<Self> {
		let (keyspace, table) = if has_own_table_spec {
			(
				Some(crate::primitive::read_string(reader)?),
				Some(crate::primitive::read_string(reader)?),
			)
		} else {
			(None, None)
		};

		let name = crate::primitive::read_string(reader)?;
		let data_type = DataType::read(reader)?;

		Ok(Self {
			keyspace,
			table,
			name,
			data_type,
		})
	}

	/// Writes a column spec.
	pub fn write(&self, writer: &mut impl BufMut, has_own_table_spec: bool) -> Result<()> {
		if has_own_table_spec {
			crate::primitive::write_string(self.keyspace.as_deref().unwrap_or_default(), writer)?;
			crate::primitive::write_string(self.table.as_deref().unwrap_or_default(), writer)?;
		}

		crate::primitive::write_string(&self.name, writer)?;
		self.data_type.write(writer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_with_own_table_spec() {
		let column = ColumnSpec {
			keyspace: Some("ks1".to_string()),
			table: Some("t1".to_string()),
			name: "id".to_string(),
			data_type: DataType::Uuid,
		};

		let mut buf = Vec::new();
		column.write(&mut buf, true).unwrap();
		assert_eq!(buf.len(), column.wire_size(true));

		let mut slice = &buf[..];
		assert_eq!(ColumnSpec::read(&mut slice, true).unwrap(), column);
	}

	#[test]
	fn round_trips_without_own_table_spec() {
		let column = ColumnSpec {
			keyspace: None,
			table: None,
			name: "name".to_string(),
			data_type: DataType::Varchar,
		};

		let mut buf = Vec::new();
		column.write(&mut buf, false).unwrap();
		assert_eq!(buf.len(), column.wire_size(false));

		let mut slice = &buf[..];
		assert_eq!(ColumnSpec::read(&mut slice, false).unwrap(), column);
	}
}
