// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`DseRevise`]: revises an in-flight DSE continuous paging session.

use bytes::{Buf, BufMut};

use crate::dse_revision_type::DseRevisionType;
use crate::error::{Error, Result};
use crate::version::ProtocolVersion;

/// `DSE_REVISE`: a DataStax Enterprise extension that cancels a continuous
/// paging session or requests more of its pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DseRevise {
	/// What the revision asks the server to do.
	pub revision_type: DseRevisionType,
	/// The stream id of the continuous paging session being revised.
	pub stream_id: i32,
	/// How many more pages to send. Only meaningful (and only wire-present)
	/// for [`DseRevisionType::MoreContinuousPages`].
	pub next_pages: Option<i32>,
}

impl DseRevise {
	/// The wire length of this message's body.
	#[must_use]
	pub const fn wire_size(&self, _version: ProtocolVersion) -> usize {
		8 + if self.next_pages.is_some() { 4 } else { 0 }
	}

	/// Reads a `DSE_REVISE` body: an `int` revision type, an `int` stream
	/// id, then (only for [`DseRevisionType::MoreContinuousPages`]) an `int`
	/// page count.
	///
	/// # Errors
	///
	/// Returns [`Error::Read`] on a malformed field,
	/// [`Error::InvalidEnum`] for an unrecognized revision type, or
	/// [`Error::UnsupportedVersionFeature`] if `version` is not a DSE
	/// protocol version.
	pub fn read(reader: &mut impl Buf, version: ProtocolVersion) -> Result<Self> {
		if !version.is_dse() {
			return Err(Error::unsupported_version_feature(
				"DSE_REVISE",
				ProtocolVersion::DseV1,
				version,
			));
		}

		let revision_type = DseRevisionType::from_code(crate::primitive::read_int(reader)?)?;
		let stream_id = crate::primitive::read_int(reader)?;
		let next_pages = matches!(revision_type, DseRevisionType::MoreContinuousPages)
			.then(|| crate::primitive::read_int(reader))
			.transpose()?;

		Ok(Self {
			revision_type,
			stream_id,
			next_pages,
		})
	}

	/// Writes a `DSE_REVISE` body: an `int` revision type, an `int` stream
	/// id, then (only for [`DseRevisionType::MoreContinuousPages`]) an `int`
	/// page count.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedVersionFeature`] if `version` is not a
	/// DSE protocol version, or [`Error::SemanticViolation`] if
	/// [`next_pages`](Self::next_pages) is set (or missing) inconsistently
	/// with [`revision_type`](Self::revision_type).
	pub fn write(&self, writer: &mut impl BufMut, version: ProtocolVersion) -> Result<()> {
		if !version.is_dse() {
			return Err(Error::unsupported_version_feature(
				"DSE_REVISE",
				ProtocolVersion::DseV1,
				version,
			));
		}

		let expects_next_pages = matches!(self.revision_type, DseRevisionType::MoreContinuousPages);
		if self.next_pages.is_some() != expects_next_pages {
			return Err(Error::semantic_violation(
				"DSE_REVISE next_pages must be set if and only if revision_type is MORE_CONTINUOUS_PAGES",
			));
		}

		crate::primitive::write_int(self.revision_type.code(), writer)?;
		crate::primitive::write_int(self.stream_id, writer)?;

		if let Some(next_pages) = self.next_pages {
			crate::primitive::write_int(next_pages, writer)?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_cancel() {
		let revise = DseRevise {
			revision_type: DseRevisionType::CancelContinuousPaging,
			stream_id: 7,
			next_pages: None,
		};

		let mut buf = Vec::new();
		revise.write(&mut buf, ProtocolVersion::DseV1).unwrap();
		assert_eq!(buf.len(), revise.wire_size(ProtocolVersion::DseV1));

		let mut slice = &buf[..];
		assert_eq!(DseRevise::read(&mut slice, ProtocolVersion::DseV1).unwrap(), revise);
	}

	#[test]
	fn round_trips_more_pages() {
		let revise = DseRevise {
			revision_type: DseRevisionType::MoreContinuousPages,
			stream_id: 7,
			next_pages: Some(100),
		};

		let mut buf = Vec::new();
		revise.write(&mut buf, ProtocolVersion::DseV2).unwrap();
		assert_eq!(buf.len(), revise.wire_size(ProtocolVersion::DseV2));

		let mut slice = &buf[..];
		assert_eq!(DseRevise::read(&mut slice, ProtocolVersion::DseV2).unwrap(), revise);
	}

	#[test]
	fn rejects_non_dse_versions() {
		let revise = DseRevise {
			revision_type: DseRevisionType::CancelContinuousPaging,
			stream_id: 1,
			next_pages: None,
		};

		assert!(revise.write(&mut Vec::new(), ProtocolVersion::V4).is_err());
	}

	#[test]
	fn rejects_next_pages_mismatch() {
		let revise = DseRevise {
			revision_type: DseRevisionType::CancelContinuousPaging,
			stream_id: 1,
			next_pages: Some(5),
		};

		assert!(revise.write(&mut Vec::new(), ProtocolVersion::DseV1).is_err());
	}
}
