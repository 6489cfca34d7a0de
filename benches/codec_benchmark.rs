// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

// Benchmarks for management-message building and parsing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ptp_mgmt::protocol::{ClockIdentity, FaultRecord, FaultSeverity, PortIdentity, PtpText};
use ptp_mgmt::tlv::{FaultLog, PortStatsNp};
use ptp_mgmt::{ActionField, Message, MngId, MngTlv, MsgParams};

fn params() -> MsgParams {
    MsgParams {
        self_id: PortIdentity {
            clock_identity: ClockIdentity([0xC4, 0x7D, 0x46, 0xFF, 0xFE, 0x20, 0xAC, 0xAE]),
            port_number: 1,
        },
        ..Default::default()
    }
}

fn fault_log() -> FaultLog {
    FaultLog {
        fault_records: (0..4)
            .map(|i| FaultRecord {
                severity_code: FaultSeverity::Warning,
                fault_name: PtpText::new(format!("fault {}", i)),
                fault_value: PtpText::new("over threshold"),
                fault_description: PtpText::new("synthetic record"),
                ..Default::default()
            })
            .collect(),
    }
}

fn response_buffer(tlv: MngTlv) -> Vec<u8> {
    let mut msg = Message::with_params(params());
    msg.set_action_with_data(ActionField::Response, tlv).unwrap();
    msg.build(1).unwrap();
    msg.send_buffer().to_vec()
}

fn bench_build_get(c: &mut Criterion) {
    let mut msg = Message::with_params(params());
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
    c.bench_function("build_get_priority1", |b| {
        b.iter(|| msg.build(black_box(1)).unwrap())
    });
}

fn bench_build_fault_log(c: &mut Criterion) {
    let mut msg = Message::with_params(params());
    msg.set_action_with_data(ActionField::Response, MngTlv::FaultLog(fault_log()))
        .unwrap();
    c.bench_function("build_fault_log_response", |b| {
        b.iter(|| msg.build(black_box(1)).unwrap())
    });
}

fn bench_parse_fault_log(c: &mut Criterion) {
    let buf = response_buffer(MngTlv::FaultLog(fault_log()));
    let mut msg = Message::with_params(params());
    c.bench_function("parse_fault_log_response", |b| {
        b.iter(|| msg.parse(black_box(&buf)).unwrap())
    });
}

fn bench_parse_port_stats(c: &mut Criterion) {
    let buf = response_buffer(MngTlv::PortStatsNp(PortStatsNp::default()));
    let mut msg = Message::with_params(params());
    c.bench_function("parse_port_stats_response", |b| {
        b.iter(|| msg.parse(black_box(&buf)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_build_get,
    bench_build_fault_log,
    bench_parse_fault_log,
    bench_parse_port_stats
);
criterion_main!(benches);
