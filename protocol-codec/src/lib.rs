// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(missing_docs)]

//! # protocol-codec
//!
//! A small collection of traits for implementing (de)serialization of
//! version-aware binary wire protocols.
//!
//! This crate does not know anything about any particular protocol: it
//! provides the vocabulary ([`Readable`], [`Writable`], [`WireSize`]) that a
//! protocol crate builds its own primitive and message codecs on top of.

use std::fmt;

pub use bytes::{Buf, BufMut};

mod error;
mod readable;
mod writable;
mod wire_size;

pub use error::{ReadError, ReadResult, WriteError, WriteResult};

/// Gives the size, in bytes, that `self` would occupy once encoded.
pub trait WireSize {
	/// Returns the size of `self` when encoded, measured in bytes.
	fn wire_size(&self) -> usize;
}

/// Defines the constant size in bytes of a type when encoded.
///
/// [`WireSize::wire_size`] must agree with [`Self::WIRE_SIZE`] for every
/// value of a type implementing both traits.
pub trait ConstantWireSize: WireSize {
	/// The size of this type when encoded, measured in bytes.
	const WIRE_SIZE: usize;
}

/// Reads a type from bytes with no additional context.
pub trait Readable: WireSize {
	/// Reads [`Self`] from a [`Buf`] of bytes.
	///
	/// # Errors
	///
	/// Returns a [`ReadError`] if `reader` does not contain a valid encoding
	/// of `Self`.
	fn read_from(reader: &mut impl Buf) -> ReadResult<Self>
	where
		Self: Sized;
}

/// Allows the reading of a type from bytes given some additional
/// [`Context`](Self::Context).
///
/// This is used for types whose shape depends on something not present in
/// the bytes themselves — for example, the protocol version that determines
/// whether a flags field is one byte or four.
pub trait ReadableWithContext: WireSize {
	/// The type of context with which this type can be read from bytes.
	type Context;

	/// Reads [`Self`] from a [`Buf`] of bytes, given some additional
	/// [`Context`](Self::Context).
	///
	/// # Errors
	///
	/// Returns a [`ReadError`] if `reader` does not contain a valid encoding
	/// of `Self` for the given context.
	fn read_with(reader: &mut impl Buf, context: &Self::Context) -> ReadResult<Self>
	where
		Self: Sized;
}

/// Writes a type to bytes with no additional context.
pub trait Writable: WireSize {
	/// Writes [`self`](Self) as bytes to a [`BufMut`].
	///
	/// # Errors
	///
	/// Returns a [`WriteError`] if `self` could not be validly written.
	fn write_to(&self, writer: &mut impl BufMut) -> WriteResult;
}

/// Allows the writing of a type to bytes given some additional
/// [`Context`](Self::Context).
///
/// The counterpart of [`ReadableWithContext`] for encoding.
pub trait WritableWithContext: WireSize {
	/// The type of context with which this type can be written to bytes.
	type Context;

	/// Writes [`self`](Self) as bytes to a [`BufMut`], given some additional
	/// [`Context`](Self::Context).
	///
	/// # Errors
	///
	/// Returns a [`WriteError`] if `self` could not be validly written for
	/// the given context.
	fn write_with(&self, writer: &mut impl BufMut, context: &Self::Context) -> WriteResult;
}

/// Gives the size, in bytes, that `self` would occupy once encoded, given
/// some additional [`Context`](Self::Context).
///
/// The counterpart of [`ReadableWithContext`]/[`WritableWithContext`] for
/// [`WireSize`].
pub trait WireSizeWithContext {
	/// The type of context the size calculation depends on.
	type Context;

	/// Returns the size of `self` when encoded for the given context,
	/// measured in bytes.
	fn wire_size_with(&self, context: &Self::Context) -> usize;
}

/// A human-readable name for a closed set of discriminant values, used to
/// give [`ReadError::UnrecognizedDiscriminant`] actionable context.
pub trait DiscriminantKind: fmt::Debug {
	/// The name of the enum this discriminant belongs to, e.g. `"OpCode"`.
	const KIND: &'static str;
}

// This function is unused, but writing it here asserts that these traits are
// _object safe_; that is, that the Rust compiler will generate an error if
// any of these traits are accidentally made _object unsafe_, which means
// that they cannot be used with the `dyn` keyword.
fn _assert_object_safety(
	_wire_size: &dyn WireSize,
	_readable: &dyn Readable,
	_contextual_readable: &dyn ReadableWithContext<Context = ()>,
) {
}
