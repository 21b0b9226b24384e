// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `byte`, `short`, `int`, and `long`: the fixed-width big-endian integers.

use bytes::{Buf, BufMut};
use protocol_codec::{Readable, Writable};

use crate::error::Result;

/// The wire length of a `byte`.
pub const BYTE_LEN: usize = 1;
/// The wire length of a `short`.
pub const SHORT_LEN: usize = 2;
/// The wire length of an `int`.
pub const INT_LEN: usize = 4;
/// The wire length of a `long`.
pub const LONG_LEN: usize = 8;

/// Reads a `byte`: one raw byte.
///
/// # Errors
///
/// Returns [`Error::Read`](crate::Error::Read) on a short read.
pub fn read_byte(reader: &mut impl Buf) -> Result<u8> {
	Ok(u8::read_from(reader)?)
}

/// Writes a `byte`: one raw byte.
pub fn write_byte(value: u8, writer: &mut impl BufMut) -> Result<()> {
	Ok(value.write_to(writer)?)
}

/// Reads a `short`: two bytes, big-endian unsigned.
///
/// # Errors
///
/// Returns [`Error::Read`](crate::Error::Read) on a short read.
pub fn read_short(reader: &mut impl Buf) -> Result<u16> {
	Ok(u16::read_from(reader)?)
}

/// Writes a `short`: two bytes, big-endian unsigned.
pub fn write_short(value: u16, writer: &mut impl BufMut) -> Result<()> {
	Ok(value.write_to(writer)?)
}

/// Reads an `int`: four bytes, big-endian signed.
///
/// # Errors
///
/// Returns [`Error::Read`](crate::Error::Read) on a short read.
pub fn read_int(reader: &mut impl Buf) -> Result<i32> {
	Ok(i32::read_from(reader)?)
}

/// Writes an `int`: four bytes, big-endian signed.
pub fn write_int(value: i32, writer: &mut impl BufMut) -> Result<()> {
	Ok(value.write_to(writer)?)
}

/// Reads a `long`: eight bytes, big-endian signed.
///
/// # Errors
///
/// Returns [`Error::Read`](crate::Error::Read) on a short read.
pub fn read_long(reader: &mut impl Buf) -> Result<i64> {
	Ok(i64::read_from(reader)?)
}

/// Writes a `long`: eight bytes, big-endian signed.
pub fn write_long(value: i64, writer: &mut impl BufMut) -> Result<()> {
	Ok(value.write_to(writer)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_each_width() {
		let mut buf = Vec::new();
		write_byte(0xAB, &mut buf).unwrap();
		write_short(0x1234, &mut buf).unwrap();
		write_int(-1, &mut buf).unwrap();
		write_long(i64::MIN, &mut buf).unwrap();

		let mut slice = &buf[..];
		assert_eq!(read_byte(&mut slice).unwrap(), 0xAB);
		assert_eq!(read_short(&mut slice).unwrap(), 0x1234);
		assert_eq!(read_int(&mut slice).unwrap(), -1);
		assert_eq!(read_long(&mut slice).unwrap(), i64::MIN);
		assert!(slice.is_empty());
	}

	#[test]
	fn short_read_is_an_error() {
		let mut empty: &[u8] = &[];
		assert!(read_int(&mut empty).is_err());
	}
}
