// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Writable`] implementations for primitive types.

use bytes::BufMut;

use crate::{WriteResult, Writable};

macro_rules! implement {
	($($ident:ident: &$ty:ty => BufMut::$fun:ident($expr:expr)),*$(,)?) => {
		$(
			impl Writable for $ty {
				fn write_to(&self, writer: &mut impl BufMut) -> WriteResult {
					let $ident = self;
					writer.$fun($expr);

					Ok(())
				}
			}
		)*
	};
}

implement! {
	n: &i8 => BufMut::put_i8(*n),
	n: &i16 => BufMut::put_i16(*n),
	n: &i32 => BufMut::put_i32(*n),
	n: &i64 => BufMut::put_i64(*n),

	n: &u8 => BufMut::put_u8(*n),
	n: &u16 => BufMut::put_u16(*n),
	n: &u32 => BufMut::put_u32(*n),
	n: &u64 => BufMut::put_u64(*n),
}

impl<const N: usize> Writable for [u8; N] {
	fn write_to(&self, writer: &mut impl BufMut) -> WriteResult {
		writer.put_slice(self);

		Ok(())
	}
}

impl Writable for &[u8] {
	fn write_to(&self, writer: &mut impl BufMut) -> WriteResult {
		writer.put_slice(self);

		Ok(())
	}
}
