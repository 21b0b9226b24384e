// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `uuid`: 16 raw bytes, interpreted with the [`uuid`] crate.

use bytes::{Buf, BufMut};
use uuid::Uuid;

use super::require;
use crate::error::Result;

/// The wire length of a `uuid`.
pub const UUID_LEN: usize = 16;

/// Reads a `uuid`: 16 raw bytes.
///
/// # Errors
///
/// Returns [`Error::Read`](crate::Error::Read) on a short read.
pub fn read_uuid(reader: &mut impl Buf) -> Result<Uuid> {
	require(reader, UUID_LEN)?;

	let mut bytes = [0u8; UUID_LEN];
	reader.copy_to_slice(&mut bytes);

	Ok(Uuid::from_bytes(bytes))
}

/// Writes a `uuid`: 16 raw bytes.
pub fn write_uuid(value: Uuid, writer: &mut impl BufMut) -> Result<()> {
	writer.put_slice(value.as_bytes());

	Ok(())
}

/// The wire length of a `uuid`: always [`UUID_LEN`].
#[must_use]
pub const fn uuid_len() -> usize {
	UUID_LEN
}
