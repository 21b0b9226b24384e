// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The byte-level primitive codec: encoders, decoders, and length
//! calculators for the protocol's atomic types.
//!
//! Every operation here is context-free (it does not depend on the
//! protocol version) and allocation-free on the encode side: callers size
//! their sink with the matching `*_len` function before encoding into it.

mod bytes_field;
mod collections;
mod inet;
mod numeric;
mod string;
mod uuid;
mod value;

pub use bytes_field::{bytes_len, read_bytes, read_short_bytes, short_bytes_len, write_bytes, write_short_bytes};
pub use collections::{
	named_values_len, positional_values_len, read_named_values, read_positional_values,
	read_string_list, read_string_map, read_string_multimap, string_list_len, string_map_len,
	string_multimap_len, write_named_values, write_positional_values, write_string_list,
	write_string_map, write_string_multimap,
};
pub use inet::{inet_len, inetaddr_len, read_inet, read_inetaddr, write_inet, write_inetaddr, Inet};
pub use numeric::{
	read_byte, read_int, read_long, read_short, write_byte, write_int, write_long, write_short,
	BYTE_LEN, INT_LEN, LONG_LEN, SHORT_LEN,
};
pub use string::{
	long_string_len, read_long_string, read_string, string_len, write_long_string, write_string,
};
pub use uuid::{read_uuid, uuid_len, write_uuid};
pub use value::Value;

use bytes::Buf;

use crate::error::{Error, Result};

/// Ensures `reader` has at least `needed` bytes remaining.
///
/// # Errors
///
/// Returns [`Error::Read`] wrapping a short-read if it does not.
pub(crate) fn require(reader: &impl Buf, needed: usize) -> Result<()> {
	if reader.remaining() < needed {
		return Err(Error::Read(protocol_codec::ReadError::ShortRead {
			needed,
			remaining: reader.remaining(),
		}));
	}

	Ok(())
}
