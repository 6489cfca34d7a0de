// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Management-message frame engine.
//!
//! A [`Message`] owns the runtime parameters, the send buffer and the last
//! decoded TLV value. Building frames a typed value into the exact octet
//! layout of IEEE 1588-2008 clause 15.4; parsing validates a received frame
//! and decodes its TLV into a typed value owned by the message until the
//! next parse.
//!
//! ### Frame layout
//!
//! ```ignore
//! offset 0   PTP header (34 octets; messageType 0xD, control 0x04)
//! offset 34  targetPortIdentity (10)
//! offset 44  startingBoundaryHops (1) | boundaryHops (1)
//! offset 46  reserved nibble + actionField nibble (1) | reserved (1)
//! offset 48  tlvType (2) | lengthField (2) | managementId (2)
//! offset 54  dataField (lengthField - 2 octets, zero-padded to even)
//! ```

use log::debug;

use crate::codec::{Builder, Codec, Parser, Transcode};
use crate::error::{MngError, MngErrorId};
use crate::id::{MngId, PayloadSize};
use crate::protocol::{
    ActionField, PortIdentity, PtpText, CONTROL_MANAGEMENT, LOG_MSG_INTERVAL_MANAGEMENT,
    MESSAGE_TYPE_MANAGEMENT, VERSION_PTP,
};
use crate::tlv::MngTlv;

/// tlvType of a MANAGEMENT TLV.
pub const TLV_MANAGEMENT: u16 = 0x0001;

/// tlvType of a MANAGEMENT_ERROR_STATUS TLV.
pub const TLV_MANAGEMENT_ERROR_STATUS: u16 = 0x0002;

const HDR_SIZE: usize = 34;
const MNG_HDR_SIZE: usize = 14;
const BASE_SIZE: usize = HDR_SIZE + MNG_HDR_SIZE;
const TLV_HDR_SIZE: usize = 4;
// Smallest parseable frame: headers, TLV header, managementId.
const MIN_PARSE_SIZE: usize = BASE_SIZE + TLV_HDR_SIZE + 2;

const LEN_OFFSET: usize = 2;
const FLAGS_OFFSET: usize = 6;
const SRC_PORT_OFFSET: usize = 20;
const SEQ_OFFSET: usize = 30;
const CONTROL_OFFSET: usize = 32;
const ACTION_OFFSET: usize = 46;
const TLV_TYPE_OFFSET: usize = 48;
const TLV_LEN_OFFSET: usize = 50;
const TLV_ID_OFFSET: usize = 52;
const TLV_DATA_OFFSET: usize = 54;

const UNICAST_FLAG: u8 = 0x04;

/// Runtime parameters of a [`Message`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MsgParams {
    /// High nibble of the first header octet.
    pub transport_specific: u8,
    /// domainNumber header field.
    pub domain_number: u8,
    /// Initial and remaining boundary hops of built messages.
    pub boundary_hops: u8,
    /// Set the unicast header flag on built messages.
    pub is_unicast: bool,
    /// Accept the linuxptp implementation-specific TLVs.
    pub use_linuxptp_tlvs: bool,
    /// Accept GET/SET/COMMAND requests from peers (responder role). When
    /// unset, only RESPONSE and ACKNOWLEDGE pass the action check.
    pub accept_requests: bool,
    /// targetPortIdentity of built messages.
    pub target: PortIdentity,
    /// sourcePortIdentity of built messages.
    pub self_id: PortIdentity,
}

impl Default for MsgParams {
    fn default() -> Self {
        MsgParams {
            transport_specific: 0,
            domain_number: 0,
            boundary_hops: 1,
            is_unicast: false,
            use_linuxptp_tlvs: true,
            accept_requests: false,
            target: PortIdentity::ALL_PORTS,
            self_id: PortIdentity::default(),
        }
    }
}

/// Per-section overrides supplied by an external configuration loader.
///
/// Transport-level keys of a section (`udp6_scope`, `udp_ttl`,
/// `uds_address`, `socket_priority`) stay with the transport; only the
/// keys that shape the message itself appear here.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SectionConfig {
    /// `transportSpecific` key.
    pub transport_specific: Option<u8>,
    /// `domainNumber` key.
    pub domain_number: Option<u8>,
    /// `boundaryHops` key.
    pub boundary_hops: Option<u8>,
    /// Derived from the `network_transport` key.
    pub unicast: Option<bool>,
}

/// Interface to an external configuration-file loader.
pub trait ConfigSource {
    /// The overrides of `section`; `None` selects the global section.
    fn section(&self, section: Option<&str>) -> SectionConfig;
}

/// Codec and dispatcher state for one management conversation.
///
/// The message is single-threaded: the send buffer is reused across builds
/// and the decoded TLV value is owned by the message and replaced on the
/// next parse.
#[derive(Debug, Default)]
pub struct Message {
    prms: MsgParams,
    tlv_id: MngId,
    action: ActionField,
    data_send: Option<MngTlv>,
    send_buf: Vec<u8>,
    // Fields of the last parsed frame.
    sequence: u16,
    unicast_msg: bool,
    peer: PortIdentity,
    data_get: Option<MngTlv>,
    err_id: Option<MngErrorId>,
    err_display: PtpText,
}

impl Message {
    /// A message with default parameters (all-ports target, one boundary
    /// hop, linuxptp TLVs accepted).
    pub fn new() -> Self {
        Message::default()
    }

    /// A message with the given parameters.
    pub fn with_params(prms: MsgParams) -> Self {
        Message {
            prms,
            ..Message::default()
        }
    }

    /// The current runtime parameters.
    pub fn params(&self) -> &MsgParams {
        &self.prms
    }

    /// Replace the runtime parameters.
    ///
    /// The octet-sized fields make out-of-range domain numbers and hop
    /// counts unrepresentable, so this cannot fail.
    pub fn update_params(&mut self, prms: MsgParams) {
        self.prms = prms;
    }

    /// Fold a configuration section into the runtime parameters.
    pub fn use_config(&mut self, cfg: &impl ConfigSource, section: Option<&str>) {
        let s = cfg.section(section);
        if let Some(v) = s.transport_specific {
            self.prms.transport_specific = v;
        }
        if let Some(v) = s.domain_number {
            self.prms.domain_number = v;
        }
        if let Some(v) = s.boundary_hops {
            self.prms.boundary_hops = v;
        }
        if let Some(v) = s.unicast {
            self.prms.is_unicast = v;
        }
    }

    /// Target every port of every clock.
    pub fn set_all_ports(&mut self) {
        self.prms.target = PortIdentity::ALL_PORTS;
    }

    /// Whether the target addresses every port of every clock.
    pub fn is_all_ports(&self) -> bool {
        self.prms.target == PortIdentity::ALL_PORTS
    }

    /// Management id of the pending send or the last parse.
    pub fn tlv_id(&self) -> MngId {
        self.tlv_id
    }

    /// Action of the pending send.
    pub fn action(&self) -> ActionField {
        self.action
    }

    /// sequenceId of the last parsed frame.
    pub fn sequence(&self) -> u16 {
        self.sequence
    }

    /// sourcePortIdentity of the last parsed frame.
    pub fn peer(&self) -> &PortIdentity {
        &self.peer
    }

    /// Whether the last parsed frame carried the unicast flag.
    pub fn is_unicast(&self) -> bool {
        self.unicast_msg
    }

    /// The decoded TLV value of the last parse, if any. Borrowed from the
    /// message; the next parse replaces it.
    pub fn data(&self) -> Option<&MngTlv> {
        self.data_get.as_ref()
    }

    /// managementErrorId of the last MANAGEMENT_ERROR_STATUS answer.
    pub fn err_id(&self) -> Option<MngErrorId> {
        self.err_id
    }

    /// displayData of the last MANAGEMENT_ERROR_STATUS answer.
    pub fn err_display(&self) -> &str {
        &self.err_display.text
    }

    /// Octet length of the last built message.
    pub fn msg_len(&self) -> usize {
        self.send_buf.len()
    }

    /// The last built message.
    pub fn send_buffer(&self) -> &[u8] {
        &self.send_buf
    }

    fn gate(&self, id: MngId) -> Result<(), MngError> {
        if id.info().linuxptp && !self.prms.use_linuxptp_tlvs {
            return Err(MngError::InvalidId);
        }
        Ok(())
    }

    /// Select the action and id of the next build. Covers GET and the ids
    /// whose payload is empty; actions that carry data go through
    /// [`Message::set_action_with_data`]. State is untouched on failure.
    pub fn set_action(&mut self, action: ActionField, id: MngId) -> Result<(), MngError> {
        self.gate(id)?;
        if !id.allowed_action(action) {
            return Err(MngError::InvalidId);
        }
        if action != ActionField::Get && !id.is_empty() {
            // The dataField of this id cannot be materialized without a
            // typed value.
            return Err(MngError::Mem);
        }
        self.action = action;
        self.tlv_id = id;
        self.data_send = None;
        Ok(())
    }

    /// Select the action of the next build together with its typed value.
    /// The management id is the one the value belongs to, making an
    /// id/value mismatch unrepresentable. State is untouched on failure.
    pub fn set_action_with_data(
        &mut self,
        action: ActionField,
        data: MngTlv,
    ) -> Result<(), MngError> {
        let id = data.id();
        self.gate(id)?;
        if !id.allowed_action(action) {
            return Err(MngError::InvalidId);
        }
        self.action = action;
        self.tlv_id = id;
        self.data_send = if action == ActionField::Get {
            None
        } else {
            Some(data)
        };
        Ok(())
    }

    fn frame(&mut self, limit: Option<usize>, sequence: u16) -> Result<Vec<u8>, MngError> {
        let mut b = match limit {
            Some(cap) => Builder::with_limit(cap),
            None => Builder::new(),
        };
        // PTP header.
        let mut byte = ((self.prms.transport_specific & 0x0F) << 4) | MESSAGE_TYPE_MANAGEMENT;
        b.u8(&mut byte)?;
        let mut byte = VERSION_PTP;
        b.u8(&mut byte)?;
        b.reserved(2)?; // messageLength, back-filled below
        let mut byte = self.prms.domain_number;
        b.u8(&mut byte)?;
        b.reserved(1)?;
        let mut byte = if self.prms.is_unicast { UNICAST_FLAG } else { 0 };
        b.u8(&mut byte)?;
        b.reserved(1)?; // flagField[1]
        b.reserved(8)?; // correctionField
        b.reserved(4)?;
        let mut self_id = self.prms.self_id;
        b.field(&mut self_id)?;
        let mut seq = sequence;
        b.u16(&mut seq)?;
        let mut byte = CONTROL_MANAGEMENT;
        b.u8(&mut byte)?;
        let mut byte = LOG_MSG_INTERVAL_MANAGEMENT;
        b.u8(&mut byte)?;
        // Management header.
        let mut target = self.prms.target;
        b.field(&mut target)?;
        let mut hops = self.prms.boundary_hops;
        b.u8(&mut hops)?;
        let mut hops = self.prms.boundary_hops;
        b.u8(&mut hops)?;
        let mut byte = self.action as u8;
        b.u8(&mut byte)?;
        b.reserved(1)?;
        // Management TLV.
        let mut tlv_type = TLV_MANAGEMENT;
        b.u16(&mut tlv_type)?;
        b.reserved(2)?; // lengthField, back-filled below
        let mut wire = self.tlv_id.info().wire;
        b.u16(&mut wire)?;
        if self.action != ActionField::Get {
            if let Some(data) = self.data_send.as_mut() {
                data.transcode(&mut b)?;
            }
        }
        let mut length_field = (b.len() - TLV_ID_OFFSET) as u16;
        if length_field % 2 == 1 {
            b.reserved(1)?;
            length_field += 1;
        }
        b.patch_u16(TLV_LEN_OFFSET, length_field);
        b.patch_u16(LEN_OFFSET, b.len() as u16);
        Ok(b.into_bytes())
    }

    /// Frame the pending action into the message-owned send buffer.
    /// Returns the message length; the octets are available from
    /// [`Message::send_buffer`].
    pub fn build(&mut self, sequence: u16) -> Result<usize, MngError> {
        self.send_buf = self.frame(None, sequence)?;
        debug!(
            "built {} {} message, {} octets",
            self.action,
            self.tlv_id,
            self.send_buf.len()
        );
        Ok(self.send_buf.len())
    }

    /// Frame the pending action into a caller-supplied buffer. Fails with
    /// [`MngError::TooSmall`] when the frame does not fit.
    pub fn build_into(&mut self, buf: &mut [u8], sequence: u16) -> Result<usize, MngError> {
        let frame = self.frame(Some(buf.len()), sequence)?;
        buf[..frame.len()].copy_from_slice(&frame);
        Ok(frame.len())
    }

    /// The octet length the next [`Message::build`] will produce, without
    /// touching the send buffer.
    pub fn planned_len(&self) -> Result<usize, MngError> {
        let data_len = match (&self.data_send, self.action) {
            (_, ActionField::Get) | (None, _) => 0,
            (Some(data), _) => {
                let mut scratch = Builder::new();
                data.clone().transcode(&mut scratch)?;
                scratch.len()
            }
        };
        let mut length_field = 2 + data_len;
        if length_field % 2 == 1 {
            length_field += 1;
        }
        Ok(BASE_SIZE + TLV_HDR_SIZE + length_field)
    }

    fn check_reply_action(&self, id: MngId, action: ActionField) -> Result<(), MngError> {
        match action {
            ActionField::Response | ActionField::Acknowledge => {}
            ActionField::Get | ActionField::Set | ActionField::Command => {
                if !self.prms.accept_requests {
                    return Err(MngError::Action);
                }
            }
        }
        if id.allowed_action(action) {
            Ok(())
        } else {
            Err(MngError::InvalidId)
        }
    }

    /// Parse one fully framed management message.
    ///
    /// On success the decoded value is owned by the message ([`Message::data`])
    /// together with the frame fields ([`Message::sequence`],
    /// [`Message::peer`], [`Message::is_unicast`]). A MANAGEMENT_ERROR_STATUS
    /// answer yields [`MngError::ErrorStatus`] with [`Message::err_id`] and
    /// [`Message::err_display`] populated. Any other error leaves no decoded
    /// value.
    ///
    /// A GET request accepted in the responder role decodes no value; per
    /// the original implementation any dataField it carries is ignored.
    /// The reserved upper nibble of the action octet is likewise ignored.
    pub fn parse(&mut self, buf: &[u8]) -> Result<(), MngError> {
        self.data_get = None;
        self.err_id = None;
        self.err_display = PtpText::default();
        if buf.len() < MIN_PARSE_SIZE {
            return Err(MngError::TooSmall);
        }
        if buf[0] & 0x0F != MESSAGE_TYPE_MANAGEMENT {
            return Err(MngError::Header);
        }
        if buf[1] & 0x0F != VERSION_PTP {
            return Err(MngError::Header);
        }
        let declared = u16::from_be_bytes([buf[LEN_OFFSET], buf[LEN_OFFSET + 1]]) as usize;
        if declared > buf.len() {
            return Err(MngError::TooSmall);
        }
        if declared < buf.len() {
            return Err(MngError::Header);
        }
        if buf[CONTROL_OFFSET] != CONTROL_MANAGEMENT {
            return Err(MngError::Header);
        }
        self.unicast_msg = buf[FLAGS_OFFSET] & UNICAST_FLAG != 0;
        let mut peer = PortIdentity::default();
        peer.transcode(&mut Parser::new(&buf[SRC_PORT_OFFSET..SRC_PORT_OFFSET + 10]))?;
        self.peer = peer;
        self.sequence = u16::from_be_bytes([buf[SEQ_OFFSET], buf[SEQ_OFFSET + 1]]);
        // The upper nibble of the action octet is reserved and ignored.
        let action = ActionField::try_from(buf[ACTION_OFFSET] & 0x0F)
            .map_err(|_| MngError::Action)?;
        let tlv_type = u16::from_be_bytes([buf[TLV_TYPE_OFFSET], buf[TLV_TYPE_OFFSET + 1]]);
        let length_field =
            u16::from_be_bytes([buf[TLV_LEN_OFFSET], buf[TLV_LEN_OFFSET + 1]]) as usize;
        match tlv_type {
            TLV_MANAGEMENT => self.parse_mng_tlv(buf, action, length_field),
            TLV_MANAGEMENT_ERROR_STATUS => self.parse_error_tlv(buf, length_field),
            _ => Err(MngError::InvalidTlv),
        }
    }

    fn parse_mng_tlv(
        &mut self,
        buf: &[u8],
        action: ActionField,
        length_field: usize,
    ) -> Result<(), MngError> {
        if length_field % 2 == 1 {
            return Err(MngError::OddLength);
        }
        if length_field < 2 {
            return Err(MngError::InvalidTlv);
        }
        if TLV_ID_OFFSET + length_field > buf.len() {
            return Err(MngError::TooSmall);
        }
        let wire = u16::from_be_bytes([buf[TLV_ID_OFFSET], buf[TLV_ID_OFFSET + 1]]);
        let id = MngId::from_wire(wire).ok_or(MngError::InvalidId)?;
        self.gate(id)?;
        self.tlv_id = id;
        self.check_reply_action(id, action)?;
        if action == ActionField::Get || action == ActionField::Acknowledge {
            // Requests carry no decodable value; a GET dataField is
            // tolerated and skipped.
            return Ok(());
        }
        let data = &buf[TLV_DATA_OFFSET..TLV_ID_OFFSET + length_field];
        match id.info().size {
            PayloadSize::Unsupported => return Err(MngError::Unsupported),
            PayloadSize::Fixed(n) => {
                if data.len() != n as usize {
                    return Err(MngError::SizeMismatch);
                }
            }
            PayloadSize::Computed => {}
        }
        if let Some(mut tlv) = MngTlv::default_for(id) {
            tlv.transcode(&mut Parser::new(data))?;
            self.data_get = Some(tlv);
        }
        Ok(())
    }

    fn parse_error_tlv(&mut self, buf: &[u8], length_field: usize) -> Result<(), MngError> {
        if length_field % 2 == 1 {
            return Err(MngError::OddLength);
        }
        if length_field < 8 {
            return Err(MngError::InvalidTlv);
        }
        if TLV_ID_OFFSET + length_field > buf.len() {
            return Err(MngError::TooSmall);
        }
        let body = &buf[TLV_ID_OFFSET..TLV_ID_OFFSET + length_field];
        let mut p = Parser::new(body);
        let mut err_raw = 0u16;
        p.u16(&mut err_raw)?;
        let mut wire = 0u16;
        p.u16(&mut wire)?;
        p.reserved(4)?;
        self.tlv_id = MngId::from_wire(wire).ok_or(MngError::InvalidId)?;
        self.err_id = Some(MngErrorId::try_from(err_raw).map_err(|_| MngError::Val)?);
        if p.remaining() > 0 {
            let mut display = PtpText::default();
            display.transcode(&mut p)?;
            self.err_display = display;
        }
        debug!(
            "peer reported {} for {}: \"{}\"",
            self.err_id.map(|e| e.to_string()).unwrap_or_default(),
            self.tlv_id,
            self.err_display.text
        );
        Err(MngError::ErrorStatus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeConfig;

    impl ConfigSource for FakeConfig {
        fn section(&self, section: Option<&str>) -> SectionConfig {
            match section {
                Some("uds") => SectionConfig {
                    domain_number: Some(7),
                    boundary_hops: Some(0),
                    ..Default::default()
                },
                _ => SectionConfig {
                    transport_specific: Some(1),
                    unicast: Some(true),
                    ..Default::default()
                },
            }
        }
    }

    #[test]
    fn test_use_config_folds_section() {
        let mut msg = Message::new();
        msg.use_config(&FakeConfig, None);
        assert_eq!(msg.params().transport_specific, 1);
        assert!(msg.params().is_unicast);
        assert_eq!(msg.params().domain_number, 0);
        msg.use_config(&FakeConfig, Some("uds"));
        assert_eq!(msg.params().domain_number, 7);
        assert_eq!(msg.params().boundary_hops, 0);
        // Keys absent from the section keep their values.
        assert_eq!(msg.params().transport_specific, 1);
    }

    #[test]
    fn test_all_ports_helpers() {
        let mut msg = Message::new();
        assert!(msg.is_all_ports());
        let mut prms = *msg.params();
        prms.target = PortIdentity {
            clock_identity: crate::protocol::ClockIdentity([1; 8]),
            port_number: 1,
        };
        msg.update_params(prms);
        assert!(!msg.is_all_ports());
        msg.set_all_ports();
        assert!(msg.is_all_ports());
    }

    #[test]
    fn test_set_action_requires_data_for_set() {
        let mut msg = Message::new();
        assert_eq!(
            msg.set_action(ActionField::Set, MngId::Priority1),
            Err(MngError::Mem)
        );
        // GET of the same id is fine.
        msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
    }

    #[test]
    fn test_planned_len_matches_build() {
        let mut msg = Message::new();
        msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
        assert_eq!(msg.planned_len().unwrap(), 54);
        let built = msg.build(1).unwrap();
        assert_eq!(built, 54);

        msg.set_action_with_data(
            ActionField::Set,
            MngTlv::Priority1(crate::tlv::Priority1 { priority1: 128 }),
        )
        .unwrap();
        assert_eq!(msg.planned_len().unwrap(), 56);
        assert_eq!(msg.build(2).unwrap(), 56);
    }
}
