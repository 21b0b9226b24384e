// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Readable`] implementations for primitive types.

use bytes::Buf;

use crate::{ReadError, ReadResult, Readable};

fn require(reader: &impl Buf, needed: usize) -> ReadResult<()> {
	if reader.remaining() < needed {
		return Err(ReadError::ShortRead {
			needed,
			remaining: reader.remaining(),
		});
	}

	Ok(())
}

macro_rules! implement {
	($($reader:ident, $ty:ty => $expr:expr),*$(,)?) => {
		$(
			impl Readable for $ty {
				fn read_from($reader: &mut impl Buf) -> ReadResult<Self> {
					require($reader, std::mem::size_of::<$ty>())?;

					Ok($expr)
				}
			}
		)*
	};
}

implement! {
	reader, i8 => reader.get_i8(),
	reader, i16 => reader.get_i16(),
	reader, i32 => reader.get_i32(),
	reader, i64 => reader.get_i64(),

	reader, u8 => reader.get_u8(),
	reader, u16 => reader.get_u16(),
	reader, u32 => reader.get_u32(),
	reader, u64 => reader.get_u64(),
}

impl<const N: usize> Readable for [u8; N] {
	fn read_from(reader: &mut impl Buf) -> ReadResult<Self> {
		require(reader, N)?;

		let mut bytes = [0u8; N];
		reader.copy_to_slice(&mut bytes);

		Ok(bytes)
	}
}
