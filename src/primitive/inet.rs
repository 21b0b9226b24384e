// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `inet`: a byte-length-prefixed IPv4/IPv6 address plus a 4-byte port.
//! `inetaddr`: the same address encoding without the port, used by the v5
//! failure-reason map.

use std::net::IpAddr;

use bytes::{Buf, BufMut};

use super::require;
use crate::error::{Error, Result};

/// A socket address as carried on the wire: an [`IpAddr`] plus a port.
///
/// The port is encoded as a 4-byte `int` rather than the 2-byte `short`
/// typically used for ports elsewhere in the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Inet {
	/// The IPv4 or IPv6 address.
	pub address: IpAddr,
	/// The port.
	pub port: i32,
}

impl Inet {
	/// Constructs an [`Inet`] from an address and port.
	#[must_use]
	pub const fn new(address: IpAddr, port: i32) -> Self {
		Self { address, port }
	}
}

/// The wire length of an `inet`: 1-byte address length, address bytes,
/// 4-byte port.
#[must_use]
pub fn inet_len(value: &Inet) -> usize {
	let address_len = match value.address {
		IpAddr::V4(_) => 4,
		IpAddr::V6(_) => 16,
	};

	1 + address_len + 4
}

/// Reads an `inet`: a `byte` address length `A` (must be 4 or 16), `A`
/// address bytes, then an `int` port.
///
/// # Errors
///
/// Returns [`Error::Read`] on a short read, or [`Error::InvalidEnum`] if the
/// address length is neither 4 nor 16.
pub fn read_inet(reader: &mut impl Buf) -> Result<Inet> {
	let address_len = super::read_byte(reader)?;

	let address = match address_len {
		4 => {
			require(reader, 4)?;
			let mut octets = [0u8; 4];
			reader.copy_to_slice(&mut octets);
			IpAddr::from(octets)
		}
		16 => {
			require(reader, 16)?;
			let mut octets = [0u8; 16];
			reader.copy_to_slice(&mut octets);
			IpAddr::from(octets)
		}
		other => return Err(Error::invalid_enum("inet address length", other)),
	};

	let port = super::read_int(reader)?;

	Ok(Inet { address, port })
}

/// Writes an `inet`: a `byte` address length, the address bytes, then an
/// `int` port.
pub fn write_inet(value: &Inet, writer: &mut impl BufMut) -> Result<()> {
	match value.address {
		IpAddr::V4(v4) => {
			super::write_byte(4, writer)?;
			writer.put_slice(&v4.octets());
		}
		IpAddr::V6(v6) => {
			super::write_byte(16, writer)?;
			writer.put_slice(&v6.octets());
		}
	}

	super::write_int(value.port, writer)?;

	Ok(())
}

/// The wire length of an `inetaddr`: 1-byte address length plus the address
/// bytes, with no port.
#[must_use]
pub fn inetaddr_len(address: &IpAddr) -> usize {
	let address_len = match address {
		IpAddr::V4(_) => 4,
		IpAddr::V6(_) => 16,
	};

	1 + address_len
}

/// Reads an `inetaddr`: a `byte` address length `A` (must be 4 or 16),
/// then `A` address bytes. Unlike `inet`, no port follows.
///
/// # Errors
///
/// Returns [`Error::Read`] on a short read, or [`Error::InvalidEnum`] if the
/// address length is neither 4 nor 16.
pub fn read_inetaddr(reader: &mut impl Buf) -> Result<IpAddr> {
	let address_len = super::read_byte(reader)?;

	match address_len {
		4 => {
			require(reader, 4)?;
			let mut octets = [0u8; 4];
			reader.copy_to_slice(&mut octets);
			Ok(IpAddr::from(octets))
		}
		16 => {
			require(reader, 16)?;
			let mut octets = [0u8; 16];
			reader.copy_to_slice(&mut octets);
			Ok(IpAddr::from(octets))
		}
		other => Err(Error::invalid_enum("inet address length", other)),
	}
}

/// Writes an `inetaddr`: a `byte` address length, then the address bytes.
/// Unlike `inet`, no port follows.
pub fn write_inetaddr(address: &IpAddr, writer: &mut impl BufMut) -> Result<()> {
	match address {
		IpAddr::V4(v4) => {
			super::write_byte(4, writer)?;
			writer.put_slice(&v4.octets());
		}
		IpAddr::V6(v6) => {
			super::write_byte(16, writer)?;
			writer.put_slice(&v6.octets());
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::net::{Ipv4Addr, Ipv6Addr};

	use super::*;

	#[test]
	fn round_trips_ipv4() {
		let value = Inet::new(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1)), 9042);
		let mut buf = Vec::new();
		write_inet(&value, &mut buf).unwrap();
		assert_eq!(buf.len(), inet_len(&value));
		assert_eq!(buf, vec![4, 192, 168, 1, 1, 0, 0, 0x23, 0x52]);

		let mut slice = &buf[..];
		assert_eq!(read_inet(&mut slice).unwrap(), value);
	}

	#[test]
	fn round_trips_inetaddr_without_a_port() {
		let address = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1));
		let mut buf = Vec::new();
		write_inetaddr(&address, &mut buf).unwrap();
		assert_eq!(buf.len(), inetaddr_len(&address));
		assert_eq!(buf, vec![4, 192, 168, 1, 1]);

		let mut slice = &buf[..];
		assert_eq!(read_inetaddr(&mut slice).unwrap(), address);
	}

	#[test]
	fn round_trips_ipv6() {
		let value = Inet::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 9042);
		let mut buf = Vec::new();
		write_inet(&value, &mut buf).unwrap();
		assert_eq!(buf.len(), inet_len(&value));

		let mut slice = &buf[..];
		assert_eq!(read_inet(&mut slice).unwrap(), value);
	}

	#[test]
	fn rejects_invalid_address_length() {
		let mut buf = vec![6u8];
		buf.extend_from_slice(&[0u8; 6]);
		buf.extend_from_slice(&[0, 0, 0, 0]);

		let mut slice = &buf[..];
		assert!(read_inet(&mut slice).is_err());
	}
}
