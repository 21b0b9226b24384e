// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Rows`]: the body of `RESULT(Rows)` — column metadata plus the row
//! data itself.

use bytes::{Buf, BufMut};

use super::metadata::RowsMetadata;
use crate::error::{Error, Result};

/// One row: one opaque, already-serialized cell per column, or `None` for
/// SQL `NULL`.
pub type Row = Vec<Option<Vec<u8>>>;

fn cell_wire_size(cell: &Option<Vec<u8>>) -> usize {
	4 + cell.as_ref().map_or(0, Vec::len)
}

fn read_cell(reader: &mut impl Buf) -> Result<Option<Vec<u8>>> {
	let len = crate::primitive::read_int(reader)?;
	match len {
		-1 => Ok(None),
		len if len < 0 => Err(Error::Read(protocol_codec::ReadError::InvalidLengthPrefix {
			length: i64::from(len),
		})),
		len => {
			let len = len as usize;
			crate::primitive::require(reader, len)?;
			let mut raw = vec![0u8; len];
			reader.copy_to_slice(&mut raw);
			Ok(Some(raw))
		}
	}
}

fn write_cell(cell: &Option<Vec<u8>>, writer: &mut impl BufMut) -> Result<()> {
	match cell {
		Some(bytes) => {
			crate::primitive::write_int(bytes.len() as i32, writer)?;
			writer.put_slice(bytes);
		}
		None => crate::primitive::write_int(-1, writer)?,
	}

	Ok(())
}

/// The body of a `RESULT(Rows)` message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rows {
	/// The column metadata describing each row's shape.
	pub metadata: RowsMetadata,
	/// The row data, each row holding one cell per column in `metadata`.
	pub rows: Vec<Row>,
}

impl Rows {
	/// The wire length of this result body.
	#[must_use]
	pub fn wire_size(&self) -> usize {
		self.metadata.wire_size()
			+ 4
			+ self
				.rows
				.iter()
				.map(|row| row.iter().map(cell_wire_size).sum::<usize>())
				.sum::<usize>()
	}

	/// Reads a `RESULT(Rows)` body: metadata, then an `int` row count and
	/// that many rows of `column_count` cells each.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a malformed field.
	pub fn read(reader: &mut impl Buf) -> Result<Self> {
		let metadata = RowsMetadata::read(reader)?;
		let row_count = crate::primitive::read_int(reader)?;
		if row_count < 0 {
			return Err(Error::Read(protocol_codec::ReadError::InvalidLengthPrefix {
				length: i64::from(row_count),
			}));
		}

		let column_count = metadata.column_count;
		let rows = (0..row_count)
			.map(|_| (0..column_count).map(|_| read_cell(reader)).collect())
			.collect::<Result<_>>()?;

		Ok(Self { metadata, rows })
	}

	/// Writes a `RESULT(Rows)` body: metadata, then an `int` row count and
	/// each row's cells.
	pub fn write(&self, writer: &mut impl BufMut) -> Result<()> {
		self.metadata.write(writer)?;
		crate::primitive::write_int(self.rows.len() as i32, writer)?;

		for row in &self.rows {
			for cell in row {
				write_cell(cell, writer)?;
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data_type::DataType;
	use crate::message::result::column_spec::ColumnSpec;

	#[test]
	fn round_trips_with_one_row() {
		let rows = Rows {
			metadata: RowsMetadata {
				global_table_spec: Some(("ks1".to_string(), "t1".to_string())),
				paging_state: None,
				columns: Some(vec![ColumnSpec {
					keyspace: None,
					table: None,
					name: "id".to_string(),
					data_type: DataType::Int,
				}]),
				column_count: 1,
			},
			rows: vec![vec![Some(vec![0, 0, 0, 7])], vec![None]],
		};

		let mut buf = Vec::new();
		rows.write(&mut buf).unwrap();
		assert_eq!(buf.len(), rows.wire_size());

		let mut slice = &buf[..];
		assert_eq!(Rows::read(&mut slice).unwrap(), rows);
	}
}
