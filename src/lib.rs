// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Build and parse PTP management messages.
//!
//! This crate implements the management-message portion of IEEE Std
//! 1588-2008 (with 2019 updates), PTP version 2: a bit-exact, bidirectional
//! codec for the management TLVs, the per-id action matrix, and a typed
//! dispatch layer, including the implementation-specific TLVs published by
//! the linuxptp project. It performs no I/O; the caller owns the transport
//! and hands fully framed buffers in and out.
//!
//! # Example
//!
//! Build a GET PRIORITY1 request addressed to all ports, and feed a peer's
//! answer back through the codec:
//!
//! ```rust
//! use ptp_mgmt::{ActionField, Message, MngId};
//!
//! let mut msg = Message::new();
//! msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
//! let len = msg.build(1).unwrap();
//! assert_eq!(len, 54);
//! // msg.send_buffer() now holds the framed octets for the transport.
//! // When the answer arrives:
//! //     msg.parse(&received)?;
//! //     if let Some(ptp_mgmt::MngTlv::Priority1(p)) = msg.data() { ... }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Error taxonomy of the codec and the wire managementErrorId values.
pub mod error;

/// Typed dispatch of parsed TLVs and typed building of TLVs to send.
pub mod dispatcher;

/// Management TLV identifiers and their schema registry.
pub mod id;

/// The management-message frame engine.
pub mod msg;

/// PTP data types, enumerations and their conversions.
pub mod protocol;

/// Typed payloads of the management TLVs.
pub mod tlv;

mod codec;

pub use dispatcher::{MngDispatcher, MngTlvBuilder};
pub use error::{MngError, MngErrorId};
pub use id::{MngId, MngIdDesc, PayloadSize, Scope};
pub use msg::{ConfigSource, Message, MsgParams, SectionConfig};
pub use protocol::ActionField;
pub use tlv::MngTlv;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
