// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`DataType`]: the closed, recursively-structured descriptor of a CQL
//! column type, as carried by `RESULT` row/prepared metadata.
//!
//! This module does not interpret the *value* bytes of a CQL type — those
//! remain an opaque [`crate::primitive::Value`] payload at this layer. It
//! only round-trips the type *descriptor* that accompanies a result set's
//! column metadata.

use bytes::{Buf, BufMut};

use crate::error::{Error, Result};

/// A CQL column type descriptor.
///
/// Leaf variants are fixed- or variable-width primitive types; composite
/// variants recurse into one, two, or N nested [`DataType`] values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DataType {
	/// A type not otherwise representable, identified by its Java class
	/// name.
	Custom(String),
	/// `ascii`.
	Ascii,
	/// `bigint`.
	Bigint,
	/// `blob`.
	Blob,
	/// `boolean`.
	Boolean,
	/// `counter`.
	Counter,
	/// `decimal`.
	Decimal,
	/// `double`.
	Double,
	/// `float`.
	Float,
	/// `int`.
	Int,
	/// `timestamp`.
	Timestamp,
	/// `uuid`.
	Uuid,
	/// `varchar`/`text`.
	Varchar,
	/// `varint`.
	Varint,
	/// `timeuuid`.
	Timeuuid,
	/// `inet`.
	Inet,
	/// `date`.
	Date,
	/// `time`.
	Time,
	/// `smallint`.
	Smallint,
	/// `tinyint`.
	Tinyint,
	/// `duration`.
	Duration,
	/// `list<element>`.
	List(Box<DataType>),
	/// `set<element>`.
	Set(Box<DataType>),
	/// `map<key, value>`.
	Map(Box<DataType>, Box<DataType>),
	/// A user-defined type: keyspace, name, and an ordered list of
	/// (field name, field type) pairs.
	Udt {
		/// The keyspace the type is defined in.
		keyspace: String,
		/// The type's name.
		name: String,
		/// The type's fields, in declaration order.
		fields: Vec<(String, DataType)>,
	},
	/// `tuple<...>`.
	Tuple(Vec<DataType>),
}

const CODE_CUSTOM: u16 = 0x0000;
const CODE_ASCII: u16 = 0x0001;
const CODE_BIGINT: u16 = 0x0002;
const CODE_BLOB: u16 = 0x0003;
const CODE_BOOLEAN: u16 = 0x0004;
const CODE_COUNTER: u16 = 0x0005;
const CODE_DECIMAL: u16 = 0x0006;
const CODE_DOUBLE: u16 = 0x0007;
const CODE_FLOAT: u16 = 0x0008;
const CODE_INT: u16 = 0x0009;
const CODE_TIMESTAMP: u16 = 0x000B;
const CODE_UUID: u16 = 0x000C;
const CODE_VARCHAR: u16 = 0x000D;
const CODE_VARINT: u16 = 0x000E;
const CODE_TIMEUUID: u16 = 0x000F;
const CODE_INET: u16 = 0x0010;
const CODE_DATE: u16 = 0x0011;
const CODE_TIME: u16 = 0x0012;
const CODE_SMALLINT: u16 = 0x0013;
const CODE_TINYINT: u16 = 0x0014;
const CODE_DURATION: u16 = 0x0015;
const CODE_LIST: u16 = 0x0020;
const CODE_MAP: u16 = 0x0021;
const CODE_SET: u16 = 0x0022;
const CODE_UDT: u16 = 0x0030;
const CODE_TUPLE: u16 = 0x0031;

impl DataType {
	/// This type's wire discriminator code.
	#[must_use]
	pub const fn code(&self) -> u16 {
		match self {
			Self::Custom(_) => CODE_CUSTOM,
			Self::Ascii => CODE_ASCII,
			Self::Bigint => CODE_BIGINT,
			Self::Blob => CODE_BLOB,
			Self::Boolean => CODE_BOOLEAN,
			Self::Counter => CODE_COUNTER,
			Self::Decimal => CODE_DECIMAL,
			Self::Double => CODE_DOUBLE,
			Self::Float => CODE_FLOAT,
			Self::Int => CODE_INT,
			Self::Timestamp => CODE_TIMESTAMP,
			Self::Uuid => CODE_UUID,
			Self::Varchar => CODE_VARCHAR,
			Self::Varint => CODE_VARINT,
			Self::Timeuuid => CODE_TIMEUUID,
			Self::Inet => CODE_INET,
			Self::Date => CODE_DATE,
			Self::Time => CODE_TIME,
			Self::Smallint => CODE_SMALLINT,
			Self::Tinyint => CODE_TINYINT,
			Self::Duration => CODE_DURATION,
			Self::List(_) => CODE_LIST,
			Self::Set(_) => CODE_SET,
			Self::Map(_, _) => CODE_MAP,
			Self::Udt { .. } => CODE_UDT,
			Self::Tuple(_) => CODE_TUPLE,
		}
	}

	/// The wire length of this type descriptor, including its discriminator.
	#[must_use]
	pub fn wire_size(&self) -> usize {
		2 + match self {
			Self::Custom(class_name) => crate::primitive::string_len(class_name),
			Self::List(element) | Self::Set(element) => element.wire_size(),
			Self::Map(key, value) => key.wire_size() + value.wire_size(),
			Self::Udt {
				keyspace,
				name,
				fields,
			} => {
				crate::primitive::string_len(keyspace)
					+ crate::primitive::string_len(name)
					+ 2 + fields
						.iter()
						.map(|(field_name, field_type)| {
							crate::primitive::string_len(field_name) + field_type.wire_size()
						})
						.sum::<usize>()
			}
			Self::Tuple(elements) => 2 + elements.iter().map(DataType::wire_size).sum::<usize>(),
			_ => 0,
		}
	}

	/// Reads a type descriptor: a `short` discriminator, then a
	/// discriminator-dependent body.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a short read or malformed nested field, or
	/// [`Error::UnknownDiscriminator`] if the discriminator is not a known
	/// type code.
	pub fn read(reader: &mut impl Buf) -> Result<Self> {
		let code = crate::primitive::read_short(reader)?;

		match code {
			CODE_CUSTOM => Ok(Self::Custom(crate::primitive::read_string(reader)?)),
			CODE_ASCII => Ok(Self::Ascii),
			CODE_BIGINT => Ok(Self::Bigint),
			CODE_BLOB => Ok(Self::Blob),
			CODE_BOOLEAN => Ok(Self::Boolean),
			CODE_COUNTER => Ok(Self::Counter),
			CODE_DECIMAL => Ok(Self::Decimal),
			CODE_DOUBLE => Ok(Self::Double),
			CODE_FLOAT => Ok(Self::Float),
			CODE_INT => Ok(Self::Int),
			CODE_TIMESTAMP => Ok(Self::Timestamp),
			CODE_UUID => Ok(Self::Uuid),
			CODE_VARCHAR => Ok(Self::Varchar),
			CODE_VARINT => Ok(Self::Varint),
			CODE_TIMEUUID => Ok(Self::Timeuuid),
			CODE_INET => Ok(Self::Inet),
			CODE_DATE => Ok(Self::Date),
			CODE_TIME => Ok(Self::Time),
			CODE_SMALLINT => Ok(Self::Smallint),
			CODE_TINYINT => Ok(Self::Tinyint),
			CODE_DURATION => Ok(Self::Duration),
			CODE_LIST => Ok(Self::List(Box::new(Self::read(reader)?))),
			CODE_SET => Ok(Self::Set(Box::new(Self::read(reader)?))),
			CODE_MAP => {
				let key = Self::read(reader)?;
				let value = Self::read(reader)?;
				Ok(Self::Map(Box::new(key), Box::new(value)))
			}
			CODE_UDT => {
				let keyspace = crate::primitive::read_string(reader)?;
				let name = crate::primitive::read_string(reader)?;
				let count = crate::primitive::read_short(reader)?;
				let fields = (0..count)
					.map(|_| {
						let field_name = crate::primitive::read_string(reader)?;
						let field_type = Self::read(reader)?;
						Ok((field_name, field_type))
					})
					.collect::<Result<_>>()?;

				Ok(Self::Udt {
					keyspace,
					name,
					fields,
				})
			}
			CODE_TUPLE => {
				let count = crate::primitive::read_short(reader)?;
				let elements = (0..count).map(|_| Self::read(reader)).collect::<Result<_>>()?;

				Ok(Self::Tuple(elements))
			}
			other => Err(Error::unknown_discriminator("data type", i64::from(other))),
		}
	}

	/// Writes a type descriptor: a `short` discriminator, then the
	/// discriminator-dependent body.
	///
	/// # Errors
	///
	/// Returns [`Error::CountOverflow`] if a UDT's field count, or a tuple's
	/// element count, exceeds `0xFFFF`.
	pub fn write(&self, writer: &mut impl BufMut) -> Result<()> {
		crate::primitive::write_short(self.code(), writer)?;

		match self {
			Self::Custom(class_name) => crate::primitive::write_string(class_name, writer)?,
			Self::List(element) | Self::Set(element) => element.write(writer)?,
			Self::Map(key, value) => {
				key.write(writer)?;
				value.write(writer)?;
			}
			Self::Udt {
				keyspace,
				name,
				fields,
			} => {
				crate::primitive::write_string(keyspace, writer)?;
				crate::primitive::write_string(name, writer)?;

				if fields.len() > 0xFFFF {
					return Err(Error::count_overflow("UDT fields", fields.len(), 0xFFFF));
				}
				crate::primitive::write_short(fields.len() as u16, writer)?;

				for (field_name, field_type) in fields {
					crate::primitive::write_string(field_name, writer)?;
					field_type.write(writer)?;
				}
			}
			Self::Tuple(elements) => {
				if elements.len() > 0xFFFF {
					return Err(Error::count_overflow("tuple elements", elements.len(), 0xFFFF));
				}
				crate::primitive::write_short(elements.len() as u16, writer)?;

				for element in elements {
					element.write(writer)?;
				}
			}
			_ => {}
		}

		Ok(())
	}
}
