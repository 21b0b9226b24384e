// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(missing_docs)]

//! # cassandra-protocol
//!
//! A version-aware binary codec for the Cassandra/DSE native database wire
//! protocol, covering OSS versions 3, 4, and 5 plus the DataStax Enterprise
//! vendor extensions v1/v2.
//!
//! This crate is a pure, synchronous **message codec**: it translates
//! between in-memory [`Message`] values and the exact byte layout the
//! protocol defines for a given [`ProtocolVersion`]. It does not open
//! sockets, frame connections, negotiate compression, or drive an
//! authentication handshake — those are the job of a surrounding connection
//! layer that consumes this crate through [`Registry`] and [`Message`].
//!
//! ```
//! use cassandra_protocol::message::{Message, Query};
//! use cassandra_protocol::message::query_params::QueryParams;
//! use cassandra_protocol::{ConsistencyLevel, ProtocolVersion, Registry};
//!
//! let registry = Registry::new();
//! let codec = registry.request_codec_for(cassandra_protocol::OpCode::Query).unwrap();
//!
//! let message = Message::Query(Query {
//!     query: "SELECT * FROM system.local".to_string(),
//!     params: QueryParams {
//!         consistency: Some(ConsistencyLevel::One),
//!         ..Default::default()
//!     },
//! });
//!
//! let mut buf = Vec::new();
//! codec.encode(&message, &mut buf, ProtocolVersion::V4).unwrap();
//! assert_eq!(buf.len(), codec.encoded_length(&message, ProtocolVersion::V4).unwrap());
//!
//! let mut slice = &buf[..];
//! assert_eq!(codec.decode(&mut slice, ProtocolVersion::V4).unwrap(), message);
//! ```

pub mod batch_type;
pub mod consistency;
pub mod data_type;
pub mod dse_revision_type;
mod error;
pub mod event_type;
pub mod flags;
pub mod message;
pub mod opcode;
pub mod primitive;
mod registry;
pub mod result_kind;
pub mod schema_change;
pub mod status_topology;
pub mod version;
pub mod write_type;

pub use batch_type::BatchType;
pub use consistency::ConsistencyLevel;
pub use data_type::DataType;
pub use dse_revision_type::DseRevisionType;
pub use error::{Error, Result};
pub use event_type::EventType;
pub use flags::QueryFlags;
pub use message::Message;
pub use opcode::OpCode;
pub use registry::{MessageCodec, Registry};
pub use result_kind::ResultKind;
pub use schema_change::{SchemaChangeTarget, SchemaChangeType};
pub use status_topology::{StatusChangeType, TopologyChangeType};
pub use version::ProtocolVersion;
pub use write_type::WriteType;
