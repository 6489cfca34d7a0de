#![no_main]
use libfuzzer_sys::fuzz_target;
use ptp_mgmt::{Message, MsgParams};

fuzz_target!(|data: &[u8]| {
    // Parse from arbitrary bytes — must not panic or cause UB, in either
    // role.
    let mut client = Message::new();
    let _ = client.parse(data);
    let mut responder = Message::with_params(MsgParams {
        accept_requests: true,
        ..Default::default()
    });
    let _ = responder.parse(data);
});
