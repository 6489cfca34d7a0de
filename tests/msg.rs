// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! End-to-end build/parse scenarios against the public API.

use ptp_mgmt::protocol::{ClockIdentity, PortIdentity, Timestamp, UINT48_MAX};
use ptp_mgmt::tlv::{
    FaultLog, PathTraceList, PortStatsNp, Priority1, SubscribeEventsNp, Time,
};
use ptp_mgmt::{
    ActionField, Message, MngError, MngErrorId, MngId, MngTlv, MsgParams, PayloadSize,
};
use ptp_mgmt::protocol::{FaultRecord, FaultSeverity, PtpText};

const SEQ_OFFSET: usize = 30;
const TARGET_OFFSET: usize = 34;
const ACTION_OFFSET: usize = 46;
const TLV_TYPE_OFFSET: usize = 48;
const TLV_LEN_OFFSET: usize = 50;
const TLV_ID_OFFSET: usize = 52;
const TLV_DATA_OFFSET: usize = 54;

fn self_port_1() -> PortIdentity {
    PortIdentity {
        clock_identity: ClockIdentity([0xC4, 0x7D, 0x46, 0xFF, 0xFE, 0x20, 0xAC, 0xAE]),
        port_number: 1,
    }
}

fn client_params() -> MsgParams {
    MsgParams {
        self_id: self_port_1(),
        ..Default::default()
    }
}

fn responder_params() -> MsgParams {
    MsgParams {
        accept_requests: true,
        self_id: self_port_1(),
        ..Default::default()
    }
}

fn patch_u16(buf: &mut [u8], at: usize, v: u16) {
    buf[at..at + 2].copy_from_slice(&v.to_be_bytes());
}

fn read_u16(buf: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([buf[at], buf[at + 1]])
}

// ── Scenario S1: GET PRIORITY1 ─────────────────────────────────────

#[test]
fn get_priority1_layout() {
    let mut msg = Message::with_params(client_params());
    msg.set_all_ports();
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
    let len = msg.build(1).unwrap();
    let buf = msg.send_buffer();

    assert_eq!(len, 54);
    assert_eq!(buf.len(), 54);
    // messageType nibble and version.
    assert_eq!(buf[0] & 0x0F, 0x0D);
    assert_eq!(buf[1] & 0x0F, 0x02);
    // messageLength covers the whole frame.
    assert_eq!(read_u16(buf, 2), 54);
    // sequenceId in network order.
    assert_eq!(&buf[SEQ_OFFSET..SEQ_OFFSET + 2], &[0x00, 0x01]);
    // control field and logMessageInterval.
    assert_eq!(buf[32], 0x04);
    assert_eq!(buf[33], 0x7F);
    // Target is all ports.
    assert_eq!(&buf[TARGET_OFFSET..TARGET_OFFSET + 10], &[0xFF; 10]);
    // Action nibble is GET, reserved upper nibble zero.
    assert_eq!(buf[ACTION_OFFSET], 0x00);
    // Management TLV: type, length, id.
    assert_eq!(read_u16(buf, TLV_TYPE_OFFSET), 0x0001);
    assert_eq!(read_u16(buf, TLV_LEN_OFFSET), 0x0002);
    assert_eq!(read_u16(buf, TLV_ID_OFFSET), 0x2005);
}

// ── Scenario S2: RESPONSE PRIORITY1 ────────────────────────────────

#[test]
fn response_priority1_parses() {
    // Frame a SET and rewrite the action nibble to RESPONSE, producing the
    // 56-octet answer a daemon would send.
    let mut msg = Message::with_params(client_params());
    msg.set_action_with_data(
        ActionField::Set,
        MngTlv::Priority1(Priority1 { priority1: 0x80 }),
    )
    .unwrap();
    msg.build(0x1234).unwrap();
    let mut buf = msg.send_buffer().to_vec();
    assert_eq!(buf.len(), 56);
    buf[ACTION_OFFSET] = ActionField::Response as u8;

    let mut rx = Message::with_params(client_params());
    rx.parse(&buf).unwrap();
    assert_eq!(rx.tlv_id(), MngId::Priority1);
    assert_eq!(rx.sequence(), 0x1234);
    assert_eq!(rx.peer(), &self_port_1());
    assert!(!rx.is_unicast());
    match rx.data() {
        Some(MngTlv::Priority1(p)) => assert_eq!(p.priority1, 0x80),
        other => panic!("unexpected decode: {:?}", other),
    }
}

// ── Scenario S3: fault list ────────────────────────────────────────

#[test]
fn fault_log_response_pads_to_even() {
    let records = vec![
        FaultRecord {
            fault_time: Timestamp {
                seconds: 9,
                nanoseconds: 709_000_000,
            },
            severity_code: FaultSeverity::Error,
            fault_name: PtpText::new("over"),
            fault_value: PtpText::new("ok"),
            fault_description: PtpText::new(""),
        },
        FaultRecord {
            severity_code: FaultSeverity::Notice,
            fault_name: PtpText::new("x"),
            ..Default::default()
        },
    ];
    let interiors: Vec<usize> = records.iter().map(|r| r.interior_size()).collect();
    assert_eq!(interiors, vec![20, 15]);

    let mut msg = Message::with_params(client_params());
    msg.set_action_with_data(
        ActionField::Response,
        MngTlv::FaultLog(FaultLog {
            fault_records: records.clone(),
        }),
    )
    .unwrap();
    msg.build(3).unwrap();
    let buf = msg.send_buffer();

    // numberOfFaultRecords then the records back to back.
    assert_eq!(read_u16(buf, TLV_DATA_OFFSET), 2);
    let r1 = TLV_DATA_OFFSET + 2;
    assert_eq!(read_u16(buf, r1) as usize, interiors[0]);
    let r2 = r1 + 2 + interiors[0];
    assert_eq!(read_u16(buf, r2) as usize, interiors[1]);

    // Content is 2 + 22 + 17 = 41 octets; the TLV pads to even.
    let length_field = read_u16(buf, TLV_LEN_OFFSET);
    assert_eq!(length_field, 44);
    assert_eq!(length_field % 2, 0);
    assert_eq!(buf.len(), 52 + length_field as usize);
    assert_eq!(read_u16(buf, 2) as usize, buf.len());

    // The padded frame decodes back to the same records.
    let owned = buf.to_vec();
    let mut rx = Message::with_params(client_params());
    rx.parse(&owned).unwrap();
    match rx.data() {
        Some(MngTlv::FaultLog(log)) => assert_eq!(log.fault_records, records),
        other => panic!("unexpected decode: {:?}", other),
    }
}

// ── Scenario S4: error status ──────────────────────────────────────

fn error_status_frame(err_id: u16, display: &[u8]) -> Vec<u8> {
    let mut msg = Message::with_params(client_params());
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
    msg.build(9).unwrap();
    let mut buf = msg.send_buffer()[..48].to_vec();
    let mut body = Vec::new();
    body.extend_from_slice(&err_id.to_be_bytes());
    body.extend_from_slice(&0x2005u16.to_be_bytes());
    body.extend_from_slice(&[0; 4]);
    if !display.is_empty() {
        body.push(display.len() as u8);
        body.extend_from_slice(display);
        if body.len() % 2 == 1 {
            body.push(0);
        }
    }
    buf.extend_from_slice(&0x0002u16.to_be_bytes());
    buf.extend_from_slice(&(body.len() as u16).to_be_bytes());
    buf.extend_from_slice(&body);
    buf[ACTION_OFFSET] = ActionField::Response as u8;
    let len = buf.len() as u16;
    patch_u16(&mut buf, 2, len);
    buf
}

#[test]
fn error_status_wrong_length() {
    let buf = error_status_frame(0x0003, b"");
    assert_eq!(buf.len(), 60);
    let mut rx = Message::with_params(client_params());
    assert_eq!(rx.parse(&buf), Err(MngError::ErrorStatus));
    assert_eq!(rx.err_id(), Some(MngErrorId::WrongLength));
    assert_eq!(rx.tlv_id(), MngId::Priority1);
    assert_eq!(rx.err_display(), "");
}

#[test]
fn error_status_with_display_text() {
    let buf = error_status_frame(0x0002, b"unknown");
    let mut rx = Message::with_params(client_params());
    assert_eq!(rx.parse(&buf), Err(MngError::ErrorStatus));
    assert_eq!(rx.err_id(), Some(MngErrorId::NoSuchId));
    assert_eq!(rx.err_display(), "unknown");
}

// ── Scenario S5: linuxptp stats gating ─────────────────────────────

#[test]
fn port_stats_gated_by_vendor_flag() {
    let mut stats = PortStatsNp::default();
    stats.port_identity = self_port_1();
    stats.rx_msg_type[0] = 0x0102_0304_0506_0708;
    stats.tx_msg_type[11] = 7;

    let mut msg = Message::with_params(responder_params());
    msg.set_action_with_data(ActionField::Response, MngTlv::PortStatsNp(stats))
        .unwrap();
    msg.build(4).unwrap();
    let buf = msg.send_buffer().to_vec();

    // Counters ride little-endian: the first rx counter sits right after
    // the 10-octet port identity.
    let c0 = TLV_DATA_OFFSET + 10;
    assert_eq!(
        &buf[c0..c0 + 8],
        &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
    );

    let mut gated = Message::with_params(MsgParams {
        use_linuxptp_tlvs: false,
        ..client_params()
    });
    assert_eq!(gated.parse(&buf), Err(MngError::InvalidId));
    assert!(gated.data().is_none());

    let mut open = Message::with_params(client_params());
    open.parse(&buf).unwrap();
    match open.data() {
        Some(MngTlv::PortStatsNp(s)) => {
            assert_eq!(s.rx_msg_type[0], 0x0102_0304_0506_0708);
            assert_eq!(s.tx_msg_type[11], 7);
        }
        other => panic!("unexpected decode: {:?}", other),
    }

    // The same vendor gate applies when selecting the id for a send.
    assert_eq!(
        gated.set_action(ActionField::Get, MngId::PortStatsNp),
        Err(MngError::InvalidId)
    );
}

// ── Universal invariants ───────────────────────────────────────────

/// A request action legal for the id, preferring one that carries data.
fn data_action(id: MngId) -> ActionField {
    if id.allowed_action(ActionField::Set) {
        ActionField::Set
    } else if id.allowed_action(ActionField::Command) {
        ActionField::Command
    } else {
        ActionField::Response
    }
}

#[test]
fn every_payload_round_trips_through_the_wire() {
    for id in MngId::ALL {
        let Some(tlv) = MngTlv::default_for(*id) else {
            continue;
        };
        let action = data_action(*id);
        let mut tx = Message::with_params(client_params());
        tx.set_action_with_data(action, tlv.clone()).unwrap();
        tx.build(42).unwrap();
        let first = tx.send_buffer().to_vec();

        // Even TLV length and exact outer length, every time.
        assert_eq!(read_u16(&first, TLV_LEN_OFFSET) % 2, 0, "{}", id);
        assert_eq!(read_u16(&first, 2) as usize, first.len(), "{}", id);

        let mut rx = Message::with_params(responder_params());
        rx.parse(&first).unwrap_or_else(|e| panic!("{}: {}", id, e));
        assert_eq!(rx.tlv_id(), *id);
        assert_eq!(rx.sequence(), 42);
        let decoded = rx.data().cloned().unwrap_or_else(|| panic!("{}", id));
        assert_eq!(decoded, tlv, "{} decode differs", id);

        // Rebuilding the decoded value reproduces the first buffer.
        let mut tx2 = Message::with_params(client_params());
        tx2.set_action_with_data(action, decoded).unwrap();
        tx2.build(42).unwrap();
        assert_eq!(tx2.send_buffer(), &first[..], "{} rebuild differs", id);
    }
}

#[test]
fn disallowed_actions_leave_state_untouched() {
    for id in MngId::ALL {
        for action in [ActionField::Get, ActionField::Set, ActionField::Command] {
            if id.allowed_action(action) {
                continue;
            }
            let mut msg = Message::with_params(client_params());
            msg.set_action(ActionField::Get, MngId::NullPtpManagement)
                .unwrap();
            let res = match MngTlv::default_for(*id) {
                Some(tlv) if action != ActionField::Get => {
                    msg.set_action_with_data(action, tlv)
                }
                _ => msg.set_action(action, *id),
            };
            assert_eq!(res, Err(MngError::InvalidId), "{} {}", id, action);
            assert_eq!(msg.tlv_id(), MngId::NullPtpManagement);
            assert_eq!(msg.action(), ActionField::Get);
        }
    }
}

#[test]
fn sequence_is_network_order() {
    let mut msg = Message::with_params(client_params());
    msg.set_action(ActionField::Get, MngId::Domain).unwrap();
    msg.build(0x1234).unwrap();
    assert_eq!(
        &msg.send_buffer()[SEQ_OFFSET..SEQ_OFFSET + 2],
        &[0x12, 0x34]
    );
}

#[test]
fn timestamp_seconds_covers_48_bits() {
    let mut msg = Message::with_params(client_params());
    msg.set_action_with_data(
        ActionField::Set,
        MngTlv::Time(Time {
            current_time: Timestamp {
                seconds: UINT48_MAX,
                nanoseconds: 999_999_999,
            },
        }),
    )
    .unwrap();
    msg.build(1).unwrap();
    let mut buf = msg.send_buffer().to_vec();
    buf[ACTION_OFFSET] = ActionField::Response as u8;
    let mut rx = Message::with_params(client_params());
    rx.parse(&buf).unwrap();
    match rx.data() {
        Some(MngTlv::Time(t)) => assert_eq!(t.current_time.seconds, UINT48_MAX),
        other => panic!("unexpected decode: {:?}", other),
    }

    // One more second does not fit in 48 bits.
    msg.set_action_with_data(
        ActionField::Set,
        MngTlv::Time(Time {
            current_time: Timestamp {
                seconds: UINT48_MAX + 1,
                nanoseconds: 0,
            },
        }),
    )
    .unwrap();
    assert_eq!(msg.build(2), Err(MngError::Val));
}

#[test]
fn truncation_is_too_small() {
    let mut msg = Message::with_params(client_params());
    msg.set_action_with_data(
        ActionField::Set,
        MngTlv::Priority1(Priority1 { priority1: 1 }),
    )
    .unwrap();
    msg.build(1).unwrap();
    let mut buf = msg.send_buffer().to_vec();
    buf[ACTION_OFFSET] = ActionField::Response as u8;

    let mut rx = Message::with_params(client_params());
    rx.parse(&buf).unwrap();
    for cut in 1..buf.len() {
        let mut rx = Message::with_params(client_params());
        assert_eq!(
            rx.parse(&buf[..buf.len() - cut]),
            Err(MngError::TooSmall),
            "cut {}",
            cut
        );
        assert!(rx.data().is_none());
    }
}

#[test]
fn odd_tlv_length_is_rejected() {
    let mut msg = Message::with_params(client_params());
    msg.set_action_with_data(
        ActionField::Set,
        MngTlv::Priority1(Priority1 { priority1: 1 }),
    )
    .unwrap();
    msg.build(1).unwrap();
    let mut buf = msg.send_buffer().to_vec();
    buf[ACTION_OFFSET] = ActionField::Response as u8;
    patch_u16(&mut buf, TLV_LEN_OFFSET, 3);

    let mut rx = Message::with_params(client_params());
    assert_eq!(rx.parse(&buf), Err(MngError::OddLength));
}

#[test]
fn unknown_management_id_is_invalid() {
    let mut msg = Message::with_params(client_params());
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
    msg.build(1).unwrap();
    let mut buf = msg.send_buffer().to_vec();
    buf[ACTION_OFFSET] = ActionField::Response as u8;
    patch_u16(&mut buf, TLV_ID_OFFSET, 0xFFFF);

    let mut rx = Message::with_params(client_params());
    assert_eq!(rx.parse(&buf), Err(MngError::InvalidId));
}

#[test]
fn all_ports_target_is_all_ones() {
    let mut msg = Message::with_params(MsgParams {
        target: self_port_1(),
        ..client_params()
    });
    assert!(!msg.is_all_ports());
    msg.set_all_ports();
    assert!(msg.is_all_ports());
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
    msg.build(1).unwrap();
    assert_eq!(
        &msg.send_buffer()[TARGET_OFFSET..TARGET_OFFSET + 10],
        &[0xFF; 10]
    );
}

// ── Header, action and role checks ─────────────────────────────────

fn response_frame() -> Vec<u8> {
    let mut msg = Message::with_params(client_params());
    msg.set_action_with_data(
        ActionField::Set,
        MngTlv::Priority1(Priority1 { priority1: 1 }),
    )
    .unwrap();
    msg.build(1).unwrap();
    let mut buf = msg.send_buffer().to_vec();
    buf[ACTION_OFFSET] = ActionField::Response as u8;
    buf
}

#[test]
fn header_rejects_wrong_version() {
    let mut buf = response_frame();
    buf[1] = 0x01;
    let mut rx = Message::with_params(client_params());
    assert_eq!(rx.parse(&buf), Err(MngError::Header));
}

#[test]
fn header_rejects_wrong_message_type() {
    let mut buf = response_frame();
    buf[0] = 0x00; // Sync
    let mut rx = Message::with_params(client_params());
    assert_eq!(rx.parse(&buf), Err(MngError::Header));
}

#[test]
fn header_rejects_wrong_control() {
    let mut buf = response_frame();
    buf[32] = 0x00;
    let mut rx = Message::with_params(client_params());
    assert_eq!(rx.parse(&buf), Err(MngError::Header));
}

#[test]
fn header_rejects_trailing_garbage() {
    let mut buf = response_frame();
    buf.push(0);
    let mut rx = Message::with_params(client_params());
    assert_eq!(rx.parse(&buf), Err(MngError::Header));
}

#[test]
fn action_value_out_of_range() {
    let mut buf = response_frame();
    buf[ACTION_OFFSET] = 0x05;
    let mut rx = Message::with_params(client_params());
    assert_eq!(rx.parse(&buf), Err(MngError::Action));
}

#[test]
fn reserved_action_nibble_is_ignored() {
    let mut buf = response_frame();
    buf[ACTION_OFFSET] = 0xF0 | ActionField::Response as u8;
    let mut rx = Message::with_params(client_params());
    rx.parse(&buf).unwrap();
    assert_eq!(rx.tlv_id(), MngId::Priority1);
}

#[test]
fn requests_rejected_unless_responder() {
    let mut msg = Message::with_params(client_params());
    msg.set_action_with_data(
        ActionField::Set,
        MngTlv::Priority1(Priority1 { priority1: 1 }),
    )
    .unwrap();
    msg.build(1).unwrap();
    let buf = msg.send_buffer().to_vec();

    let mut client = Message::with_params(client_params());
    assert_eq!(client.parse(&buf), Err(MngError::Action));

    let mut responder = Message::with_params(responder_params());
    responder.parse(&buf).unwrap();
    assert_eq!(responder.tlv_id(), MngId::Priority1);
}

#[test]
fn acknowledge_mismatch_is_invalid_id() {
    // PRIORITY1 never answers COMMAND, so ACKNOWLEDGE is illegal for it.
    let mut buf = response_frame();
    buf[ACTION_OFFSET] = ActionField::Acknowledge as u8;
    let mut rx = Message::with_params(client_params());
    assert_eq!(rx.parse(&buf), Err(MngError::InvalidId));
}

#[test]
fn get_request_with_data_field_is_tolerated() {
    // A GET whose dataField is not empty parses in the responder role; the
    // dataField content is ignored.
    let mut msg = Message::with_params(client_params());
    msg.set_action_with_data(
        ActionField::Set,
        MngTlv::Priority1(Priority1 { priority1: 9 }),
    )
    .unwrap();
    msg.build(1).unwrap();
    let mut buf = msg.send_buffer().to_vec();
    buf[ACTION_OFFSET] = ActionField::Get as u8;

    let mut rx = Message::with_params(responder_params());
    rx.parse(&buf).unwrap();
    assert_eq!(rx.tlv_id(), MngId::Priority1);
    assert!(rx.data().is_none());
}

// ── Capped builds and variable payloads ────────────────────────────

#[test]
fn build_into_caps_at_buffer_size() {
    let mut msg = Message::with_params(client_params());
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
    let mut exact = [0u8; 54];
    assert_eq!(msg.build_into(&mut exact, 1).unwrap(), 54);
    let mut large = [0u8; 128];
    assert_eq!(msg.build_into(&mut large, 1).unwrap(), 54);
    assert_eq!(&large[..54], &exact[..]);
    let mut small = [0u8; 53];
    assert_eq!(msg.build_into(&mut small, 1), Err(MngError::TooSmall));
}

#[test]
fn path_trace_list_round_trips_on_the_wire() {
    let list = PathTraceList {
        path_sequence: vec![ClockIdentity([0xAA; 8]), ClockIdentity([0xBB; 8])],
    };
    let mut msg = Message::with_params(client_params());
    msg.set_action_with_data(ActionField::Response, MngTlv::PathTraceList(list.clone()))
        .unwrap();
    msg.build(1).unwrap();
    let buf = msg.send_buffer().to_vec();
    assert_eq!(read_u16(&buf, TLV_LEN_OFFSET), 18);

    let mut rx = Message::with_params(client_params());
    rx.parse(&buf).unwrap();
    assert_eq!(rx.data(), Some(&MngTlv::PathTraceList(list)));
}

#[test]
fn subscribe_events_round_trips_on_the_wire() {
    let mut sub = SubscribeEventsNp::default();
    sub.duration = 60;
    sub.set_event(SubscribeEventsNp::NOTIFY_PORT_STATE);
    let mut msg = Message::with_params(responder_params());
    msg.set_action_with_data(ActionField::Set, MngTlv::SubscribeEventsNp(sub))
        .unwrap();
    msg.build(1).unwrap();
    let buf = msg.send_buffer().to_vec();

    let mut rx = Message::with_params(responder_params());
    rx.parse(&buf).unwrap();
    match rx.data() {
        Some(MngTlv::SubscribeEventsNp(s)) => {
            assert_eq!(s.duration, 60);
            assert!(s.event(SubscribeEventsNp::NOTIFY_PORT_STATE));
            assert!(!s.event(SubscribeEventsNp::NOTIFY_TIME_SYNC));
        }
        other => panic!("unexpected decode: {:?}", other),
    }
}

#[test]
fn fixed_size_mismatch_is_rejected() {
    let mut buf = response_frame();
    // Grow the TLV by two octets of zeros; PRIORITY1 requires exactly 2.
    buf.insert(TLV_DATA_OFFSET + 2, 0);
    buf.insert(TLV_DATA_OFFSET + 3, 0);
    let len = buf.len() as u16;
    patch_u16(&mut buf, 2, len);
    let tlv_len = read_u16(&buf, TLV_LEN_OFFSET) + 2;
    patch_u16(&mut buf, TLV_LEN_OFFSET, tlv_len);

    let mut rx = Message::with_params(client_params());
    assert_eq!(rx.parse(&buf), Err(MngError::SizeMismatch));
}

#[test]
fn fixed_sizes_in_registry_match_encoded_defaults() {
    // Cross-check the registry against the processors via the public API.
    for id in MngId::ALL {
        let Some(tlv) = MngTlv::default_for(*id) else {
            continue;
        };
        if let PayloadSize::Fixed(n) = id.info().size {
            let mut msg = Message::with_params(client_params());
            msg.set_action_with_data(data_action(*id), tlv).unwrap();
            msg.build(1).unwrap();
            assert_eq!(
                msg.msg_len(),
                54 + n as usize,
                "{} fixed size disagrees with processor",
                id
            );
        }
    }
}
