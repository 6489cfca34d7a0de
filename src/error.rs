// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Error types for management-message parsing and building.
//!
//! [`MngError`] is a closed taxonomy: every fallible codec operation returns
//! exactly one of its variants. A failed parse leaves the codec with no
//! decoded value; the error-status diagnostic (when the peer answered with a
//! MANAGEMENT_ERROR_STATUS TLV) stays readable until the next parse.

use core::fmt;

/// Errors that can occur while parsing or building a management message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MngError {
    /// The parsed TLV is a MANAGEMENT_ERROR_STATUS; the error id and display
    /// text are available from the message accessors.
    ErrorStatus,
    /// Management id unknown, vendor-gated off, or the action is not allowed
    /// for that id.
    InvalidId,
    /// TLV framing is wrong: bad tlvType, malformed header, or an interior
    /// length that is inconsistent with the frame.
    InvalidTlv,
    /// A length-prefixed field declared a length that disagrees with the
    /// octets actually present.
    SizeMismatch,
    /// The buffer ran out before the schema completed.
    TooSmall,
    /// The TLV lengthField is odd; the standard requires even TLV lengths.
    OddLength,
    /// A numeric or enumeration value is outside its permitted range.
    Val,
    /// The outer PTP header was rejected (version, messageType, control, or
    /// length mismatch).
    Header,
    /// The action field is outside GET..ACKNOWLEDGE or inconsistent with the
    /// configured role.
    Action,
    /// The id is recognized but no processor is available in this build.
    Unsupported,
    /// The typed TLV value could not be materialized.
    Mem,
}

impl fmt::Display for MngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MngError::ErrorStatus => "peer answered with a management error status TLV",
            MngError::InvalidId => "invalid management id or action for this id",
            MngError::InvalidTlv => "wrong TLV header",
            MngError::SizeMismatch => "declared field length disagrees with available octets",
            MngError::TooSmall => "buffer too small",
            MngError::OddLength => "TLV length is odd",
            MngError::Val => "value out of range or invalid",
            MngError::Header => "wrong value in PTP header",
            MngError::Action => "wrong action value",
            MngError::Unsupported => "no processor for this TLV in this build",
            MngError::Mem => "failed to materialize TLV value",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MngError {}

/// managementErrorId values carried by a MANAGEMENT_ERROR_STATUS TLV
/// (IEEE 1588-2008 Table 72).
#[repr(u16)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MngErrorId {
    /// The requested data would not fit in a single response.
    ResponseTooBig = 0x0001,
    /// The managementId is not recognized.
    NoSuchId = 0x0002,
    /// The managementId was recognized but the TLV length is wrong.
    WrongLength = 0x0003,
    /// One or more values in the TLV are out of range.
    WrongValue = 0x0004,
    /// Some of the targeted variables are not configurable.
    NotSetable = 0x0005,
    /// The request is not supported by the implementation.
    NotSupported = 0x0006,
    /// An error not covered by the other codes.
    GeneralError = 0xFFFE,
}

impl TryFrom<u16> for MngErrorId {
    type Error = ();

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0x0001 => Ok(MngErrorId::ResponseTooBig),
            0x0002 => Ok(MngErrorId::NoSuchId),
            0x0003 => Ok(MngErrorId::WrongLength),
            0x0004 => Ok(MngErrorId::WrongValue),
            0x0005 => Ok(MngErrorId::NotSetable),
            0x0006 => Ok(MngErrorId::NotSupported),
            0xFFFE => Ok(MngErrorId::GeneralError),
            _ => Err(()),
        }
    }
}

impl fmt::Display for MngErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MngErrorId::ResponseTooBig => "RESPONSE_TOO_BIG",
            MngErrorId::NoSuchId => "NO_SUCH_ID",
            MngErrorId::WrongLength => "WRONG_LENGTH",
            MngErrorId::WrongValue => "WRONG_VALUE",
            MngErrorId::NotSetable => "NOT_SETABLE",
            MngErrorId::NotSupported => "NOT_SUPPORTED",
            MngErrorId::GeneralError => "GENERAL_ERROR",
        };
        f.write_str(s)
    }
}
