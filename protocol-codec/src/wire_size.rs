// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`WireSize`] and [`ConstantWireSize`] implementations for primitive types.

use crate::{ConstantWireSize, WireSize};

/// Defines [`WireSize`]/[`ConstantWireSize`] for a fixed-width type.
macro_rules! constant_wire_size {
	($($type:ty),+$(,)?) => {
		$(
			impl ConstantWireSize for $type {
				const WIRE_SIZE: usize = std::mem::size_of::<Self>();
			}

			impl WireSize for $type {
				fn wire_size(&self) -> usize {
					Self::WIRE_SIZE
				}
			}
		)+
	};
}

constant_wire_size! {
	i8, i16, i32, i64,
	u8, u16, u32, u64,
}

impl<const N: usize> ConstantWireSize for [u8; N] {
	const WIRE_SIZE: usize = N;
}

impl<const N: usize> WireSize for [u8; N] {
	fn wire_size(&self) -> usize {
		N
	}
}

impl WireSize for &[u8] {
	fn wire_size(&self) -> usize {
		self.len()
	}
}

impl WireSize for str {
	fn wire_size(&self) -> usize {
		self.len()
	}
}

impl WireSize for String {
	fn wire_size(&self) -> usize {
		self.len()
	}
}

impl<T: WireSize> WireSize for Vec<T> {
	fn wire_size(&self) -> usize {
		self.iter().map(WireSize::wire_size).sum()
	}
}

impl<T: WireSize> WireSize for Option<T> {
	fn wire_size(&self) -> usize {
		self.as_ref().map_or(0, WireSize::wire_size)
	}
}
