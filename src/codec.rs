// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Bidirectional wire codec.
//!
//! [`Codec`] is a cursor that either consumes octets ([`Parser`]) or appends
//! them ([`Builder`]). Every management payload describes its fields once,
//! as a [`Transcode`] impl running against the cursor; parse and build share
//! that single field sequence, which is what guarantees that a value decoded
//! from the wire re-encodes to the identical octets.
//!
//! All integers are big-endian except the explicit little-endian escape used
//! by the linuxptp port statistics counters. 48-bit fields ride in `u64` /
//! `i64` carriers and are range-checked when building.

use byteorder::{ReadBytesExt, BE, LE};

use crate::error::MngError;
use crate::protocol::{
    AcceptableMaster, ClockAccuracy, ClockIdentity, ClockQuality, ClockType, FaultRecord,
    FaultSeverity, NetworkProtocol, PortAddress, PortIdentity, PortState, PtpText, TimeInterval,
    TimeSource, Timestamp, Timestamping, INT48_MAX, INT48_MIN, UINT48_MAX,
};

/// A directional cursor over management-message octets.
///
/// Each primitive reads the wire into `v` when parsing and emits `v` to the
/// wire when building. Values out of wire range fail with
/// [`MngError::Val`]; an exhausted parse buffer fails with
/// [`MngError::TooSmall`]; a declared length that overruns the buffer fails
/// with [`MngError::SizeMismatch`].
pub(crate) trait Codec: Sized {
    /// True when the cursor consumes octets.
    fn is_parsing(&self) -> bool;

    /// Octets left to consume; zero when building.
    fn remaining(&self) -> usize;

    /// One unsigned octet.
    fn u8(&mut self, v: &mut u8) -> Result<(), MngError>;
    /// Big-endian unsigned 16-bit.
    fn u16(&mut self, v: &mut u16) -> Result<(), MngError>;
    /// Big-endian unsigned 32-bit.
    fn u32(&mut self, v: &mut u32) -> Result<(), MngError>;
    /// Big-endian unsigned 48-bit in a 64-bit carrier.
    fn u48(&mut self, v: &mut u64) -> Result<(), MngError>;
    /// Big-endian unsigned 64-bit.
    fn u64(&mut self, v: &mut u64) -> Result<(), MngError>;
    /// Little-endian unsigned 64-bit (linuxptp statistics counters only).
    fn u64_le(&mut self, v: &mut u64) -> Result<(), MngError>;
    /// One signed octet.
    fn i8(&mut self, v: &mut i8) -> Result<(), MngError>;
    /// Big-endian signed 16-bit.
    fn i16(&mut self, v: &mut i16) -> Result<(), MngError>;
    /// Big-endian signed 32-bit.
    fn i32(&mut self, v: &mut i32) -> Result<(), MngError>;
    /// Big-endian two's-complement 48-bit in a 64-bit carrier,
    /// sign-extended from bit 47 after a read.
    fn i48(&mut self, v: &mut i64) -> Result<(), MngError>;
    /// Big-endian signed 64-bit.
    fn i64(&mut self, v: &mut i64) -> Result<(), MngError>;

    /// A fixed-size opaque octet run.
    fn octets(&mut self, v: &mut [u8]) -> Result<(), MngError>;

    /// A length-prefixed octet run whose length was already transcoded.
    /// Shortfall on parse is a declared-length disagreement.
    fn chunk(&mut self, v: &mut Vec<u8>, len: usize) -> Result<(), MngError>;

    /// `n` reserved octets: skipped on parse, zero-filled on build.
    fn reserved(&mut self, n: usize) -> Result<(), MngError>;

    /// Transcode one composite field.
    fn field<T: Transcode>(&mut self, v: &mut T) -> Result<(), MngError> {
        v.transcode(self)
    }

    /// A sequence whose element count was already transcoded.
    fn list<T: Transcode + Default>(
        &mut self,
        v: &mut Vec<T>,
        count: usize,
    ) -> Result<(), MngError> {
        if self.is_parsing() {
            v.clear();
            for _ in 0..count {
                let mut item = T::default();
                item.transcode(self)?;
                v.push(item);
            }
        } else {
            for item in v.iter_mut() {
                item.transcode(self)?;
            }
        }
        Ok(())
    }

    /// A sequence that runs to the end of the enclosing dataField.
    fn list_to_end<T: Transcode + Default>(
        &mut self,
        v: &mut Vec<T>,
        item_size: usize,
    ) -> Result<(), MngError> {
        if self.is_parsing() {
            v.clear();
            while self.remaining() >= item_size {
                let mut item = T::default();
                item.transcode(self)?;
                v.push(item);
            }
        } else {
            for item in v.iter_mut() {
                item.transcode(self)?;
            }
        }
        Ok(())
    }
}

/// Types that transcode as a fixed sequence of [`Codec`] field operations.
pub(crate) trait Transcode {
    /// Run the field sequence against the cursor.
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError>;
}

/// Parsing cursor over an immutable byte slice.
pub(crate) struct Parser<'a> {
    cur: &'a [u8],
}

impl<'a> Parser<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Parser { cur: buf }
    }
}

impl Codec for Parser<'_> {
    fn is_parsing(&self) -> bool {
        true
    }

    fn remaining(&self) -> usize {
        self.cur.len()
    }

    fn u8(&mut self, v: &mut u8) -> Result<(), MngError> {
        *v = self.cur.read_u8().map_err(|_| MngError::TooSmall)?;
        Ok(())
    }

    fn u16(&mut self, v: &mut u16) -> Result<(), MngError> {
        *v = self.cur.read_u16::<BE>().map_err(|_| MngError::TooSmall)?;
        Ok(())
    }

    fn u32(&mut self, v: &mut u32) -> Result<(), MngError> {
        *v = self.cur.read_u32::<BE>().map_err(|_| MngError::TooSmall)?;
        Ok(())
    }

    fn u48(&mut self, v: &mut u64) -> Result<(), MngError> {
        *v = self.cur.read_uint::<BE>(6).map_err(|_| MngError::TooSmall)?;
        Ok(())
    }

    fn u64(&mut self, v: &mut u64) -> Result<(), MngError> {
        *v = self.cur.read_u64::<BE>().map_err(|_| MngError::TooSmall)?;
        Ok(())
    }

    fn u64_le(&mut self, v: &mut u64) -> Result<(), MngError> {
        *v = self.cur.read_u64::<LE>().map_err(|_| MngError::TooSmall)?;
        Ok(())
    }

    fn i8(&mut self, v: &mut i8) -> Result<(), MngError> {
        *v = self.cur.read_i8().map_err(|_| MngError::TooSmall)?;
        Ok(())
    }

    fn i16(&mut self, v: &mut i16) -> Result<(), MngError> {
        *v = self.cur.read_i16::<BE>().map_err(|_| MngError::TooSmall)?;
        Ok(())
    }

    fn i32(&mut self, v: &mut i32) -> Result<(), MngError> {
        *v = self.cur.read_i32::<BE>().map_err(|_| MngError::TooSmall)?;
        Ok(())
    }

    fn i48(&mut self, v: &mut i64) -> Result<(), MngError> {
        // read_int sign-extends from bit 47.
        *v = self.cur.read_int::<BE>(6).map_err(|_| MngError::TooSmall)?;
        Ok(())
    }

    fn i64(&mut self, v: &mut i64) -> Result<(), MngError> {
        *v = self.cur.read_i64::<BE>().map_err(|_| MngError::TooSmall)?;
        Ok(())
    }

    fn octets(&mut self, v: &mut [u8]) -> Result<(), MngError> {
        if self.cur.len() < v.len() {
            return Err(MngError::TooSmall);
        }
        let (head, tail) = self.cur.split_at(v.len());
        v.copy_from_slice(head);
        self.cur = tail;
        Ok(())
    }

    fn chunk(&mut self, v: &mut Vec<u8>, len: usize) -> Result<(), MngError> {
        if self.cur.len() < len {
            return Err(MngError::SizeMismatch);
        }
        let (head, tail) = self.cur.split_at(len);
        v.clear();
        v.extend_from_slice(head);
        self.cur = tail;
        Ok(())
    }

    fn reserved(&mut self, n: usize) -> Result<(), MngError> {
        if self.cur.len() < n {
            return Err(MngError::TooSmall);
        }
        self.cur = &self.cur[n..];
        Ok(())
    }
}

/// Building cursor over a growable buffer, with an optional capacity cap
/// for callers that supply their own transmit buffer.
pub(crate) struct Builder {
    buf: Vec<u8>,
    limit: usize,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Builder {
            buf: Vec::new(),
            limit: usize::MAX,
        }
    }

    pub(crate) fn with_limit(limit: usize) -> Self {
        Builder {
            buf: Vec::new(),
            limit,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Back-fill a 16-bit length word reserved earlier in the frame.
    pub(crate) fn patch_u16(&mut self, at: usize, v: u16) {
        self.buf[at..at + 2].copy_from_slice(&v.to_be_bytes());
    }

    fn push(&mut self, bytes: &[u8]) -> Result<(), MngError> {
        if self.buf.len() + bytes.len() > self.limit {
            return Err(MngError::TooSmall);
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }
}

impl Codec for Builder {
    fn is_parsing(&self) -> bool {
        false
    }

    fn remaining(&self) -> usize {
        0
    }

    fn u8(&mut self, v: &mut u8) -> Result<(), MngError> {
        self.push(&[*v])
    }

    fn u16(&mut self, v: &mut u16) -> Result<(), MngError> {
        self.push(&v.to_be_bytes())
    }

    fn u32(&mut self, v: &mut u32) -> Result<(), MngError> {
        self.push(&v.to_be_bytes())
    }

    fn u48(&mut self, v: &mut u64) -> Result<(), MngError> {
        if *v > UINT48_MAX {
            return Err(MngError::Val);
        }
        self.push(&v.to_be_bytes()[2..])
    }

    fn u64(&mut self, v: &mut u64) -> Result<(), MngError> {
        self.push(&v.to_be_bytes())
    }

    fn u64_le(&mut self, v: &mut u64) -> Result<(), MngError> {
        self.push(&v.to_le_bytes())
    }

    fn i8(&mut self, v: &mut i8) -> Result<(), MngError> {
        self.push(&v.to_be_bytes())
    }

    fn i16(&mut self, v: &mut i16) -> Result<(), MngError> {
        self.push(&v.to_be_bytes())
    }

    fn i32(&mut self, v: &mut i32) -> Result<(), MngError> {
        self.push(&v.to_be_bytes())
    }

    fn i48(&mut self, v: &mut i64) -> Result<(), MngError> {
        if !(INT48_MIN..=INT48_MAX).contains(v) {
            return Err(MngError::Val);
        }
        self.push(&(*v as u64).to_be_bytes()[2..])
    }

    fn i64(&mut self, v: &mut i64) -> Result<(), MngError> {
        self.push(&v.to_be_bytes())
    }

    fn octets(&mut self, v: &mut [u8]) -> Result<(), MngError> {
        self.push(v)
    }

    fn chunk(&mut self, v: &mut Vec<u8>, _len: usize) -> Result<(), MngError> {
        let bytes = std::mem::take(v);
        let res = self.push(&bytes);
        *v = bytes;
        res
    }

    fn reserved(&mut self, n: usize) -> Result<(), MngError> {
        if self.buf.len() + n > self.limit {
            return Err(MngError::TooSmall);
        }
        self.buf.resize(self.buf.len() + n, 0);
        Ok(())
    }
}

// Fieldless enums transcode as their wire discriminant; unknown values are
// rejected on parse.
macro_rules! transcode_enum {
    ($ty:ty, $repr:ty, $prim:ident) => {
        impl Transcode for $ty {
            fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
                let mut raw = *self as $repr;
                c.$prim(&mut raw)?;
                if c.is_parsing() {
                    *self = <$ty>::try_from(raw).map_err(|_| MngError::Val)?;
                }
                Ok(())
            }
        }
    };
}

transcode_enum!(NetworkProtocol, u16, u16);
transcode_enum!(ClockAccuracy, u8, u8);
transcode_enum!(FaultSeverity, u8, u8);
transcode_enum!(TimeSource, u8, u8);
transcode_enum!(PortState, u8, u8);
transcode_enum!(Timestamping, u8, u8);

impl Transcode for ClockType {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u16(&mut self.0)
    }
}

impl Transcode for TimeInterval {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.i64(&mut self.scaled_nanoseconds)
    }
}

impl Transcode for Timestamp {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u48(&mut self.seconds)?;
        c.u32(&mut self.nanoseconds)
    }
}

impl Transcode for ClockIdentity {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.octets(&mut self.0)
    }
}

impl Transcode for PortIdentity {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.clock_identity)?;
        c.u16(&mut self.port_number)
    }
}

impl Transcode for PortAddress {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.network_protocol)?;
        if self.address.len() > u16::MAX as usize {
            return Err(MngError::Val);
        }
        let mut len = self.address.len() as u16;
        c.u16(&mut len)?;
        c.chunk(&mut self.address, len as usize)
    }
}

impl Transcode for ClockQuality {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.clock_class)?;
        c.field(&mut self.clock_accuracy)?;
        c.u16(&mut self.offset_scaled_log_variance)
    }
}

impl Transcode for PtpText {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        if self.text.len() > u8::MAX as usize {
            return Err(MngError::Val);
        }
        let mut len = self.text.len() as u8;
        c.u8(&mut len)?;
        if c.is_parsing() {
            let mut raw = Vec::new();
            c.chunk(&mut raw, len as usize)?;
            self.text = String::from_utf8_lossy(&raw).into_owned();
        } else {
            let mut raw = std::mem::take(&mut self.text).into_bytes();
            let res = c.chunk(&mut raw, len as usize);
            // from_utf8 cannot fail: the bytes came from a String.
            self.text = String::from_utf8_lossy(&raw).into_owned();
            res?;
        }
        Ok(())
    }
}

impl Transcode for FaultRecord {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        let mut length = self.interior_size() as u16;
        c.u16(&mut length)?;
        let before = c.remaining();
        c.field(&mut self.fault_time)?;
        c.field(&mut self.severity_code)?;
        c.field(&mut self.fault_name)?;
        c.field(&mut self.fault_value)?;
        c.field(&mut self.fault_description)?;
        if c.is_parsing() && before - c.remaining() != length as usize {
            return Err(MngError::SizeMismatch);
        }
        Ok(())
    }
}

impl Transcode for AcceptableMaster {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.acceptable_port_identity)?;
        c.u8(&mut self.alternate_priority1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build<T: Transcode>(v: &mut T) -> Vec<u8> {
        let mut b = Builder::new();
        v.transcode(&mut b).unwrap();
        b.into_bytes()
    }

    #[test]
    fn test_u48_round_trip_max() {
        let mut ts = Timestamp {
            seconds: UINT48_MAX,
            nanoseconds: 999_999_999,
        };
        let bytes = build(&mut ts);
        assert_eq!(bytes.len(), 10);
        assert_eq!(&bytes[..6], &[0xFF; 6]);
        let mut decoded = Timestamp::default();
        decoded.transcode(&mut Parser::new(&bytes)).unwrap();
        assert_eq!(decoded, ts);
    }

    #[test]
    fn test_u48_rejects_out_of_range() {
        let mut ts = Timestamp {
            seconds: UINT48_MAX + 1,
            nanoseconds: 0,
        };
        let mut b = Builder::new();
        assert_eq!(ts.transcode(&mut b), Err(MngError::Val));
    }

    #[test]
    fn test_i48_sign_extension() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE];
        let mut p = Parser::new(&bytes);
        let mut v = 0i64;
        p.i48(&mut v).unwrap();
        assert_eq!(v, -2);
    }

    #[test]
    fn test_i48_range_checks_on_build() {
        let mut b = Builder::new();
        let mut v = INT48_MAX;
        b.i48(&mut v).unwrap();
        let mut v = INT48_MIN;
        b.i48(&mut v).unwrap();
        let mut v = INT48_MAX + 1;
        assert_eq!(b.i48(&mut v), Err(MngError::Val));
        let mut v = INT48_MIN - 1;
        assert_eq!(b.i48(&mut v), Err(MngError::Val));
    }

    #[test]
    fn test_i48_negative_round_trip() {
        let mut b = Builder::new();
        let mut v = -123_456_789i64;
        b.i48(&mut v).unwrap();
        let bytes = b.into_bytes();
        assert_eq!(bytes.len(), 6);
        let mut p = Parser::new(&bytes);
        let mut back = 0i64;
        p.i48(&mut back).unwrap();
        assert_eq!(back, -123_456_789);
    }

    #[test]
    fn test_little_endian_escape() {
        let mut b = Builder::new();
        let mut v = 0x0102_0304_0506_0708u64;
        b.u64_le(&mut v).unwrap();
        let bytes = b.into_bytes();
        assert_eq!(bytes, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        let mut p = Parser::new(&bytes);
        let mut back = 0u64;
        p.u64_le(&mut back).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_parse_exhaustion_is_too_small() {
        let bytes = [0x12];
        let mut p = Parser::new(&bytes);
        let mut v = 0u16;
        assert_eq!(p.u16(&mut v), Err(MngError::TooSmall));
    }

    #[test]
    fn test_builder_limit() {
        let mut b = Builder::with_limit(3);
        let mut v = 0x1234u16;
        b.u16(&mut v).unwrap();
        assert_eq!(b.u16(&mut v), Err(MngError::TooSmall));
    }

    #[test]
    fn test_ptp_text_round_trip() {
        let mut text = PtpText::new("ptp4l");
        let bytes = build(&mut text);
        assert_eq!(bytes, [5, b'p', b't', b'p', b'4', b'l']);
        // The value is untouched by a build pass.
        assert_eq!(text.text, "ptp4l");
        let mut decoded = PtpText::default();
        decoded.transcode(&mut Parser::new(&bytes)).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_ptp_text_declared_length_overrun() {
        // Length claims 5 octets, only 2 present.
        let bytes = [5, b'o', b'k'];
        let mut decoded = PtpText::default();
        assert_eq!(
            decoded.transcode(&mut Parser::new(&bytes)),
            Err(MngError::SizeMismatch)
        );
    }

    #[test]
    fn test_port_address_round_trip() {
        let mut pa = PortAddress {
            network_protocol: NetworkProtocol::UdpIpv4,
            address: vec![10, 0, 0, 1],
        };
        let bytes = build(&mut pa);
        assert_eq!(bytes, [0, 1, 0, 4, 10, 0, 0, 1]);
        let mut decoded = PortAddress::default();
        decoded.transcode(&mut Parser::new(&bytes)).unwrap();
        assert_eq!(decoded, pa);
    }

    #[test]
    fn test_port_address_rejects_unknown_protocol() {
        let bytes = [0, 9, 0, 0];
        let mut decoded = PortAddress::default();
        assert_eq!(
            decoded.transcode(&mut Parser::new(&bytes)),
            Err(MngError::Val)
        );
    }

    #[test]
    fn test_fault_record_round_trip() {
        let mut rec = FaultRecord {
            fault_time: Timestamp {
                seconds: 100,
                nanoseconds: 5,
            },
            severity_code: FaultSeverity::Error,
            fault_name: PtpText::new("over"),
            fault_value: PtpText::new("ok"),
            fault_description: PtpText::new(""),
        };
        let bytes = build(&mut rec);
        assert_eq!(bytes.len(), rec.packed_size());
        assert_eq!(
            u16::from_be_bytes([bytes[0], bytes[1]]) as usize,
            rec.interior_size()
        );
        let mut decoded = FaultRecord::default();
        decoded.transcode(&mut Parser::new(&bytes)).unwrap();
        assert_eq!(decoded, rec);
    }

    #[test]
    fn test_fault_record_length_mismatch() {
        let mut rec = FaultRecord {
            fault_name: PtpText::new("x"),
            ..Default::default()
        };
        let mut bytes = build(&mut rec);
        // Corrupt the declared interior length.
        bytes[1] ^= 0x01;
        let mut decoded = FaultRecord::default();
        assert!(matches!(
            decoded.transcode(&mut Parser::new(&bytes)),
            Err(MngError::SizeMismatch) | Err(MngError::TooSmall)
        ));
    }

    #[test]
    fn test_list_to_end() {
        let mut list = vec![
            ClockIdentity([1; 8]),
            ClockIdentity([2; 8]),
            ClockIdentity([3; 8]),
        ];
        let mut b = Builder::new();
        b.list_to_end(&mut list, 8).unwrap();
        let bytes = b.into_bytes();
        assert_eq!(bytes.len(), 24);
        let mut p = Parser::new(&bytes);
        let mut decoded: Vec<ClockIdentity> = Vec::new();
        p.list_to_end(&mut decoded, 8).unwrap();
        assert_eq!(decoded, list);
    }

    #[test]
    fn test_reserved_skip_and_fill() {
        let mut b = Builder::new();
        b.reserved(3).unwrap();
        assert_eq!(b.into_bytes(), [0, 0, 0]);
        let bytes = [1, 2];
        let mut p = Parser::new(&bytes);
        assert_eq!(p.reserved(3), Err(MngError::TooSmall));
    }
}
