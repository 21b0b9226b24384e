// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `short bytes` (short-length-prefixed opaque) and `bytes`
//! (int-length-prefixed opaque, always present — contrast with
//! [`Value`](super::Value), which additionally carries the null/not-set
//! discriminants used for bound query values).

use bytes::{Buf, BufMut};

use super::require;
use crate::error::{Error, Result};

/// The wire length of `value` encoded as `short bytes`.
#[must_use]
pub fn short_bytes_len(value: &[u8]) -> usize {
	2 + value.len()
}

/// Reads `short bytes`: a `short` length `N`, then `N` raw bytes.
///
/// # Errors
///
/// Returns [`Error::Read`] on a short read or a length prefix exceeding the
/// remaining bytes.
pub fn read_short_bytes(reader: &mut impl Buf) -> Result<Vec<u8>> {
	let len = super::read_short(reader)? as usize;
	require(reader, len)?;

	let mut raw = vec![0u8; len];
	reader.copy_to_slice(&mut raw);

	Ok(raw)
}

/// Writes `short bytes`: a `short` length, then the raw bytes of `value`.
///
/// # Errors
///
/// Returns [`Error::CountOverflow`] if `value` is longer than `0xFFFF`
/// bytes.
pub fn write_short_bytes(value: &[u8], writer: &mut impl BufMut) -> Result<()> {
	if value.len() > 0xFFFF {
		return Err(Error::count_overflow("short bytes length", value.len(), 0xFFFF));
	}

	super::write_short(value.len() as u16, writer)?;
	writer.put_slice(value);

	Ok(())
}

/// The wire length of `value` encoded as `bytes`.
#[must_use]
pub fn bytes_len(value: &[u8]) -> usize {
	4 + value.len()
}

/// Reads `bytes`: an `int` length `N`, then `N` raw bytes.
///
/// # Errors
///
/// Returns [`Error::Read`] on a short read, a negative length, or a length
/// exceeding the remaining bytes.
pub fn read_bytes(reader: &mut impl Buf) -> Result<Vec<u8>> {
	let len = super::read_int(reader)?;
	if len < 0 {
		return Err(Error::Read(protocol_codec::ReadError::InvalidLengthPrefix {
			length: i64::from(len),
		}));
	}

	let len = len as usize;
	require(reader, len)?;

	let mut raw = vec![0u8; len];
	reader.copy_to_slice(&mut raw);

	Ok(raw)
}

/// Writes `bytes`: an `int` length, then the raw bytes of `value`.
pub fn write_bytes(value: &[u8], writer: &mut impl BufMut) -> Result<()> {
	super::write_int(value.len() as i32, writer)?;
	writer.put_slice(value);

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::write_int;
	use super::*;

	#[test]
	fn round_trips_short_bytes() {
		let value = vec![1, 2, 3, 4];
		let mut buf = Vec::new();
		write_short_bytes(&value, &mut buf).unwrap();
		assert_eq!(buf.len(), short_bytes_len(&value));

		let mut slice = &buf[..];
		assert_eq!(read_short_bytes(&mut slice).unwrap(), value);
	}

	#[test]
	fn round_trips_bytes() {
		let value = vec![0u8; 128];
		let mut buf = Vec::new();
		write_bytes(&value, &mut buf).unwrap();

		let mut slice = &buf[..];
		assert_eq!(read_bytes(&mut slice).unwrap(), value);
	}

	#[test]
	fn rejects_negative_length() {
		let mut buf = Vec::new();
		write_int(-5, &mut buf).unwrap();

		let mut slice = &buf[..];
		assert!(read_bytes(&mut slice).is_err());
	}
}
