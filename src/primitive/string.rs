// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `string` (short-length-prefixed UTF-8) and `long string`
//! (int-length-prefixed UTF-8).

use bytes::{Buf, BufMut};

use super::require;
use crate::error::{Error, Result};

fn read_utf8(reader: &mut impl Buf, len: usize) -> Result<String> {
	require(reader, len)?;

	let mut raw = vec![0u8; len];
	reader.copy_to_slice(&mut raw);

	String::from_utf8(raw).map_err(|err| Error::Read(protocol_codec::ReadError::InvalidUtf8(err.utf8_error())))
}

/// The wire length of `value` encoded as a `string`.
#[must_use]
pub fn string_len(value: &str) -> usize {
	2 + value.len()
}

/// Reads a `string`: a `short` length `N`, then `N` UTF-8 bytes.
///
/// # Errors
///
/// Returns [`Error::Read`] on a short read, a length prefix exceeding the
/// remaining bytes, or invalid UTF-8.
pub fn read_string(reader: &mut impl Buf) -> Result<String> {
	let len = super::read_short(reader)?;
	read_utf8(reader, len as usize)
}

/// Writes a `string`: a `short` length, then the UTF-8 bytes of `value`.
///
/// # Errors
///
/// Returns [`Error::CountOverflow`] if `value` is longer than `0xFFFF`
/// bytes.
pub fn write_string(value: &str, writer: &mut impl BufMut) -> Result<()> {
	if value.len() > 0xFFFF {
		return Err(Error::count_overflow("string length", value.len(), 0xFFFF));
	}

	super::write_short(value.len() as u16, writer)?;
	writer.put_slice(value.as_bytes());

	Ok(())
}

/// The wire length of `value` encoded as a `long string`.
#[must_use]
pub fn long_string_len(value: &str) -> usize {
	4 + value.len()
}

/// Reads a `long string`: an `int` length `N`, then `N` UTF-8 bytes.
///
/// # Errors
///
/// Returns [`Error::Read`] on a short read, a negative or out-of-range
/// length prefix, or invalid UTF-8.
pub fn read_long_string(reader: &mut impl Buf) -> Result<String> {
	let len = super::read_int(reader)?;
	if len < 0 {
		return Err(Error::Read(protocol_codec::ReadError::InvalidLengthPrefix {
			length: i64::from(len),
		}));
	}

	read_utf8(reader, len as usize)
}

/// Writes a `long string`: an `int` length, then the UTF-8 bytes of
/// `value`.
pub fn write_long_string(value: &str, writer: &mut impl BufMut) -> Result<()> {
	super::write_int(value.len() as i32, writer)?;
	writer.put_slice(value.as_bytes());

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::write_short;
	use super::*;

	#[test]
	fn round_trips_string() {
		let mut buf = Vec::new();
		write_string("hello", &mut buf).unwrap();
		assert_eq!(buf.len(), string_len("hello"));

		let mut slice = &buf[..];
		assert_eq!(read_string(&mut slice).unwrap(), "hello");
	}

	#[test]
	fn round_trips_empty_and_max_length_string() {
		let empty = String::new();
		let mut buf = Vec::new();
		write_string(&empty, &mut buf).unwrap();
		let mut slice = &buf[..];
		assert_eq!(read_string(&mut slice).unwrap(), empty);

		let max = "a".repeat(0xFFFF);
		let mut buf = Vec::new();
		write_string(&max, &mut buf).unwrap();
		let mut slice = &buf[..];
		assert_eq!(read_string(&mut slice).unwrap(), max);
	}

	#[test]
	fn round_trips_long_string() {
		let mut buf = Vec::new();
		write_long_string("a longer query string", &mut buf).unwrap();

		let mut slice = &buf[..];
		assert_eq!(read_long_string(&mut slice).unwrap(), "a longer query string");
	}

	#[test]
	fn rejects_invalid_utf8() {
		let mut buf = Vec::new();
		write_short(2, &mut buf).unwrap();
		buf.extend_from_slice(&[0xFF, 0xFE]);

		let mut slice = &buf[..];
		assert!(read_string(&mut slice).is_err());
	}
}
