// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `string list`, `string map`, `string multimap`, and the positional/named
//! value lists used by `QUERY`, `EXECUTE`, and `BATCH`.

use bytes::{Buf, BufMut};

use super::value::Value;
use crate::error::{Error, Result};
use crate::version::ProtocolVersion;

const MAX_COUNT: usize = 0xFFFF;

fn read_count(reader: &mut impl Buf) -> Result<u16> {
	super::read_short(reader)
}

fn write_count(count: usize, kind: &'static str, writer: &mut impl BufMut) -> Result<()> {
	if count > MAX_COUNT {
		return Err(Error::count_overflow(kind, count, MAX_COUNT));
	}

	super::write_short(count as u16, writer)
}

/// The wire length of a `string list`.
#[must_use]
pub fn string_list_len(values: &[String]) -> usize {
	2 + values.iter().map(|s| super::string_len(s)).sum::<usize>()
}

/// Reads a `string list`: a `short` count `N`, then `N` strings.
///
/// # Errors
///
/// Returns [`Error::Read`] on a malformed entry.
pub fn read_string_list(reader: &mut impl Buf) -> Result<Vec<String>> {
	let count = read_count(reader)?;
	(0..count).map(|_| super::read_string(reader)).collect()
}

/// Writes a `string list`: a `short` count, then each string.
///
/// # Errors
///
/// Returns [`Error::CountOverflow`] if `values` has more than `0xFFFF`
/// entries.
pub fn write_string_list(values: &[String], writer: &mut impl BufMut) -> Result<()> {
	write_count(values.len(), "string list", writer)?;
	for value in values {
		super::write_string(value, writer)?;
	}

	Ok(())
}

/// The wire length of a `string map`.
#[must_use]
pub fn string_map_len(entries: &[(String, String)]) -> usize {
	2 + entries
		.iter()
		.map(|(k, v)| super::string_len(k) + super::string_len(v))
		.sum::<usize>()
}

/// Reads a `string map`: a `short` count `N`, then `N` (string, string)
/// pairs.
///
/// # Errors
///
/// Returns [`Error::Read`] on a malformed entry.
pub fn read_string_map(reader: &mut impl Buf) -> Result<Vec<(String, String)>> {
	let count = read_count(reader)?;
	(0..count)
		.map(|_| {
			let key = super::read_string(reader)?;
			let value = super::read_string(reader)?;
			Ok((key, value))
		})
		.collect()
}

/// Writes a `string map`: a `short` count, then each (string, string) pair.
///
/// # Errors
///
/// Returns [`Error::CountOverflow`] if `entries` has more than `0xFFFF`
/// entries.
pub fn write_string_map(entries: &[(String, String)], writer: &mut impl BufMut) -> Result<()> {
	write_count(entries.len(), "string map", writer)?;
	for (key, value) in entries {
		super::write_string(key, writer)?;
		super::write_string(value, writer)?;
	}

	Ok(())
}

/// The wire length of a `string multimap`.
#[must_use]
pub fn string_multimap_len(entries: &[(String, Vec<String>)]) -> usize {
	2 + entries
		.iter()
		.map(|(k, v)| super::string_len(k) + string_list_len(v))
		.sum::<usize>()
}

/// Reads a `string multimap`: a `short` count `N`, then `N` (string, string
/// list) pairs.
///
/// # Errors
///
/// Returns [`Error::Read`] on a malformed entry.
pub fn read_string_multimap(reader: &mut impl Buf) -> Result<Vec<(String, Vec<String>)>> {
	let count = read_count(reader)?;
	(0..count)
		.map(|_| {
			let key = super::read_string(reader)?;
			let values = read_string_list(reader)?;
			Ok((key, values))
		})
		.collect()
}

/// Writes a `string multimap`: a `short` count, then each (string, string
/// list) pair.
///
/// # Errors
///
/// Returns [`Error::CountOverflow`] if `entries`, or any of its value lists,
/// has more than `0xFFFF` entries.
pub fn write_string_multimap(entries: &[(String, Vec<String>)], writer: &mut impl BufMut) -> Result<()> {
	write_count(entries.len(), "string multimap", writer)?;
	for (key, values) in entries {
		super::write_string(key, writer)?;
		write_string_list(values, writer)?;
	}

	Ok(())
}

/// The wire length of a positional value list.
#[must_use]
pub fn positional_values_len(values: &[Value]) -> usize {
	2 + values.iter().map(Value::wire_size).sum::<usize>()
}

/// Reads a positional value list: a `short` count `N`, then `N` values.
///
/// # Errors
///
/// Returns [`Error::Read`] on a malformed entry, or
/// [`Error::UnsupportedVersionFeature`] if a `NOT_SET` entry appears on a
/// protocol version below 4.
pub fn read_positional_values(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Vec<Value>> {
	let count = read_count(reader)?;
	(0..count).map(|_| Value::read(reader, version)).collect()
}

/// Writes a positional value list: a `short` count, then each value.
///
/// # Errors
///
/// Returns [`Error::CountOverflow`] if `values` has more than `0xFFFF`
/// entries, or [`Error::UnsupportedVersionFeature`] if a `NOT_SET` entry is
/// targeted at a protocol version below 4.
pub fn write_positional_values(values: &[Value], writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
	write_count(values.len(), "positional values", writer)?;
	for value in values {
		value.write(writer, version)?;
	}

	Ok(())
}

/// The wire length of a named value list.
#[must_use]
pub fn named_values_len(entries: &[(String, Value)]) -> usize {
	2 + entries
		.iter()
		.map(|(name, value)| super::string_len(name) + value.wire_size())
		.sum::<usize>()
}

/// Reads a named value list: a `short` count `N`, then `N` (string, value)
/// pairs.
///
/// # Errors
///
/// Returns [`Error::Read`] on a malformed entry, or
/// [`Error::UnsupportedVersionFeature`] if a `NOT_SET` entry appears on a
/// protocol version below 4.
pub fn read_named_values(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Vec<(String, Value)>> {
	let count = read_count(reader)?;
	(0..count)
		.map(|_| {
			let name = super::read_string(reader)?;
			let value = Value::read(reader, version)?;
			Ok((name, value))
		})
		.collect()
}

/// Writes a named value list: a `short` count, then each (string, value)
/// pair.
///
/// # Errors
///
/// Returns [`Error::CountOverflow`] if `entries` has more than `0xFFFF`
/// entries, or [`Error::UnsupportedVersionFeature`] if a `NOT_SET` entry is
/// targeted at a protocol version below 4.
pub fn write_named_values(entries: &[(String, Value)], writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
	write_count(entries.len(), "named values", writer)?;
	for (name, value) in entries {
		super::write_string(name, writer)?;
		value.write(writer, version)?;
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_string_list() {
		let values = vec!["TOPOLOGY_CHANGE".to_string(), "STATUS_CHANGE".to_string()];
		let mut buf = Vec::new();
		write_string_list(&values, &mut buf).unwrap();
		assert_eq!(buf.len(), string_list_len(&values));

		let mut slice = &buf[..];
		assert_eq!(read_string_list(&mut slice).unwrap(), values);
	}

	#[test]
	fn round_trips_string_map() {
		let entries = vec![("CQL_VERSION".to_string(), "3.0.0".to_string())];
		let mut buf = Vec::new();
		write_string_map(&entries, &mut buf).unwrap();

		let mut slice = &buf[..];
		assert_eq!(read_string_map(&mut slice).unwrap(), entries);
	}

	#[test]
	fn round_trips_string_multimap() {
		let entries = vec![(
			"COMPRESSION".to_string(),
			vec!["snappy".to_string(), "lz4".to_string()],
		)];
		let mut buf = Vec::new();
		write_string_multimap(&entries, &mut buf).unwrap();

		let mut slice = &buf[..];
		assert_eq!(read_string_multimap(&mut slice).unwrap(), entries);
	}

	#[test]
	fn round_trips_positional_values() {
		let values = vec![Value::Regular(vec![1]), Value::Null, Value::NotSet];
		let mut buf = Vec::new();
		write_positional_values(&values, &mut buf, ProtocolVersion::V4).unwrap();

		let mut slice = &buf[..];
		assert_eq!(
			read_positional_values(&mut slice, ProtocolVersion::V4).unwrap(),
			values
		);
	}

	#[test]
	fn round_trips_named_values() {
		let entries = vec![("id".to_string(), Value::Regular(vec![9]))];
		let mut buf = Vec::new();
		write_named_values(&entries, &mut buf, ProtocolVersion::V4).unwrap();

		let mut slice = &buf[..];
		assert_eq!(
			read_named_values(&mut slice, ProtocolVersion::V4).unwrap(),
			entries
		);
	}
}
