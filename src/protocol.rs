// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Types and constants that precisely match IEEE Std 1588-2008 (with 2019
//! updates), PTP version 2.
//!
//! Everything here is pure data: the composite types of clause 5.3, the
//! management-related enumerations of clause 15 and the linuxptp vendor
//! additions, together with their `TryFrom` validation and `Display`
//! conversions. Serialization lives in the codec module.

use core::fmt;

/// PTP protocol version emitted and accepted by this crate.
pub const VERSION_PTP: u8 = 2;

/// messageType nibble of a management message.
pub const MESSAGE_TYPE_MANAGEMENT: u8 = 0xD;

/// controlField value of a management message (clause 13.3.2.13).
pub const CONTROL_MANAGEMENT: u8 = 0x04;

/// logMessageInterval value transmitted in management messages.
pub const LOG_MSG_INTERVAL_MANAGEMENT: u8 = 0x7F;

/// Largest value a 48-bit unsigned seconds field can carry.
pub const UINT48_MAX: u64 = 0xFFFF_FFFF_FFFF;

/// Largest value of a 48-bit two's-complement field.
pub const INT48_MAX: i64 = 0x7FFF_FFFF_FFFF;

/// Smallest value of a 48-bit two's-complement field.
pub const INT48_MIN: i64 = -INT48_MAX - 1;

/// timePropertiesDS flag masks (clause 13.3.2.6), as carried by
/// TIME_PROPERTIES_DATA_SET, UTC_PROPERTIES, TRACEABILITY_PROPERTIES and
/// TIMESCALE_PROPERTIES payloads.
pub mod time_flags {
    /// Last minute of the current UTC day has 61 seconds.
    pub const LEAP_61: u8 = 1 << 0;
    /// Last minute of the current UTC day has 59 seconds.
    pub const LEAP_59: u8 = 1 << 1;
    /// currentUtcOffset is known to be correct.
    pub const UTC_OFF_VALID: u8 = 1 << 2;
    /// The timescale of the grandmaster is PTP.
    pub const PTP_TIMESCALE: u8 = 1 << 3;
    /// The time is traceable to a primary reference.
    pub const TIME_TRACEABLE: u8 = 1 << 4;
    /// The frequency is traceable to a primary reference.
    pub const FREQ_TRACEABLE: u8 = 1 << 5;
}

// Display tables for fieldless enums; keeps each impl to the name pairs.
macro_rules! fmt_variants {
    ($($variant:path => $name:expr,)+) => {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let s = match self {
                $($variant => $name,)+
            };
            f.write_str(s)
        }
    };
}

/// Types that have a constant size when written to or read from bytes.
pub trait ConstPackedSizeBytes {
    /// The constant size in bytes when this type is packed for network
    /// transmission.
    const PACKED_SIZE_BYTES: usize;
}

/// The action applied to a management TLV (clause 15.4.1.6).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ActionField {
    /// Request the current value of the targeted data set.
    #[default]
    Get = 0,
    /// Update the targeted data set.
    Set = 1,
    /// Answer to a GET or SET.
    Response = 2,
    /// Initiate the event selected by the management id.
    Command = 3,
    /// Answer to a COMMAND.
    Acknowledge = 4,
}

impl TryFrom<u8> for ActionField {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ActionField::Get),
            1 => Ok(ActionField::Set),
            2 => Ok(ActionField::Response),
            3 => Ok(ActionField::Command),
            4 => Ok(ActionField::Acknowledge),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ActionField {
    fmt_variants! {
        ActionField::Get => "GET",
        ActionField::Set => "SET",
        ActionField::Response => "RESPONSE",
        ActionField::Command => "COMMAND",
        ActionField::Acknowledge => "ACKNOWLEDGE",
    }
}

/// Bit mask describing the kinds of PTP node a clock implements
/// (clause 15.5.3.1.2). Carried as a 16-bit field in CLOCK_DESCRIPTION.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ClockType(pub u16);

impl ClockType {
    /// Ordinary clock.
    pub const ORDINARY: ClockType = ClockType(0x8000);
    /// Boundary clock.
    pub const BOUNDARY: ClockType = ClockType(0x4000);
    /// Peer-to-peer transparent clock.
    pub const P2P_TRANSPARENT: ClockType = ClockType(0x2000);
    /// End-to-end transparent clock.
    pub const E2E_TRANSPARENT: ClockType = ClockType(0x1000);
    /// Management node (deprecated by the 2019 edition).
    pub const MANAGEMENT: ClockType = ClockType(0x0800);

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(&self, other: ClockType) -> bool {
        self.0 & other.0 == other.0
    }
}

impl fmt::Display for ClockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (ClockType::ORDINARY, "ordinaryClock"),
            (ClockType::BOUNDARY, "boundaryClock"),
            (ClockType::P2P_TRANSPARENT, "p2pTransparentClock"),
            (ClockType::E2E_TRANSPARENT, "e2eTransparentClock"),
            (ClockType::MANAGEMENT, "managementNode"),
        ];
        let mut first = true;
        for (bit, name) in names {
            if self.contains(bit) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

/// The network protocol of a [`PortAddress`] (clause 7.4.1, Table 3).
#[repr(u16)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum NetworkProtocol {
    /// UDP over IPv4.
    #[default]
    UdpIpv4 = 1,
    /// UDP over IPv6.
    UdpIpv6 = 2,
    /// Raw IEEE 802.3 Ethernet.
    Ieee802_3 = 3,
    /// DeviceNet.
    DeviceNet = 4,
    /// ControlNet.
    ControlNet = 5,
    /// PROFINET.
    Profinet = 6,
}

impl TryFrom<u16> for NetworkProtocol {
    type Error = ();

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(NetworkProtocol::UdpIpv4),
            2 => Ok(NetworkProtocol::UdpIpv6),
            3 => Ok(NetworkProtocol::Ieee802_3),
            4 => Ok(NetworkProtocol::DeviceNet),
            5 => Ok(NetworkProtocol::ControlNet),
            6 => Ok(NetworkProtocol::Profinet),
            _ => Err(()),
        }
    }
}

impl fmt::Display for NetworkProtocol {
    fmt_variants! {
        NetworkProtocol::UdpIpv4 => "UDP_IPv4",
        NetworkProtocol::UdpIpv6 => "UDP_IPv6",
        NetworkProtocol::Ieee802_3 => "IEEE_802_3",
        NetworkProtocol::DeviceNet => "DeviceNet",
        NetworkProtocol::ControlNet => "ControlNet",
        NetworkProtocol::Profinet => "PROFINET",
    }
}

/// clockAccuracy characterization of a clock (clause 7.6.2.5, Table 6).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[allow(missing_docs)]
pub enum ClockAccuracy {
    Within1Ps = 0x17,
    Within2_5Ps = 0x18,
    Within10Ps = 0x19,
    Within25Ps = 0x1A,
    Within100Ps = 0x1B,
    Within250Ps = 0x1C,
    Within1Ns = 0x1D,
    Within2_5Ns = 0x1E,
    Within10Ns = 0x1F,
    Within25Ns = 0x20,
    Within100Ns = 0x21,
    Within250Ns = 0x22,
    Within1Us = 0x23,
    Within2_5Us = 0x24,
    Within10Us = 0x25,
    Within25Us = 0x26,
    Within100Us = 0x27,
    Within250Us = 0x28,
    Within1Ms = 0x29,
    Within2_5Ms = 0x2A,
    Within10Ms = 0x2B,
    Within25Ms = 0x2C,
    Within100Ms = 0x2D,
    Within250Ms = 0x2E,
    Within1S = 0x2F,
    Within10S = 0x30,
    MoreThan10S = 0x31,
    /// Accuracy is unknown.
    #[default]
    Unknown = 0xEF,
}

impl TryFrom<u8> for ClockAccuracy {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x17 => Ok(ClockAccuracy::Within1Ps),
            0x18 => Ok(ClockAccuracy::Within2_5Ps),
            0x19 => Ok(ClockAccuracy::Within10Ps),
            0x1A => Ok(ClockAccuracy::Within25Ps),
            0x1B => Ok(ClockAccuracy::Within100Ps),
            0x1C => Ok(ClockAccuracy::Within250Ps),
            0x1D => Ok(ClockAccuracy::Within1Ns),
            0x1E => Ok(ClockAccuracy::Within2_5Ns),
            0x1F => Ok(ClockAccuracy::Within10Ns),
            0x20 => Ok(ClockAccuracy::Within25Ns),
            0x21 => Ok(ClockAccuracy::Within100Ns),
            0x22 => Ok(ClockAccuracy::Within250Ns),
            0x23 => Ok(ClockAccuracy::Within1Us),
            0x24 => Ok(ClockAccuracy::Within2_5Us),
            0x25 => Ok(ClockAccuracy::Within10Us),
            0x26 => Ok(ClockAccuracy::Within25Us),
            0x27 => Ok(ClockAccuracy::Within100Us),
            0x28 => Ok(ClockAccuracy::Within250Us),
            0x29 => Ok(ClockAccuracy::Within1Ms),
            0x2A => Ok(ClockAccuracy::Within2_5Ms),
            0x2B => Ok(ClockAccuracy::Within10Ms),
            0x2C => Ok(ClockAccuracy::Within25Ms),
            0x2D => Ok(ClockAccuracy::Within100Ms),
            0x2E => Ok(ClockAccuracy::Within250Ms),
            0x2F => Ok(ClockAccuracy::Within1S),
            0x30 => Ok(ClockAccuracy::Within10S),
            0x31 => Ok(ClockAccuracy::MoreThan10S),
            0xEF => Ok(ClockAccuracy::Unknown),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ClockAccuracy {
    fmt_variants! {
        ClockAccuracy::Within1Ps => "Accurate_within_1ps",
        ClockAccuracy::Within2_5Ps => "Accurate_within_2.5ps",
        ClockAccuracy::Within10Ps => "Accurate_within_10ps",
        ClockAccuracy::Within25Ps => "Accurate_within_25ps",
        ClockAccuracy::Within100Ps => "Accurate_within_100ps",
        ClockAccuracy::Within250Ps => "Accurate_within_250ps",
        ClockAccuracy::Within1Ns => "Accurate_within_1ns",
        ClockAccuracy::Within2_5Ns => "Accurate_within_2.5ns",
        ClockAccuracy::Within10Ns => "Accurate_within_10ns",
        ClockAccuracy::Within25Ns => "Accurate_within_25ns",
        ClockAccuracy::Within100Ns => "Accurate_within_100ns",
        ClockAccuracy::Within250Ns => "Accurate_within_250ns",
        ClockAccuracy::Within1Us => "Accurate_within_1us",
        ClockAccuracy::Within2_5Us => "Accurate_within_2.5us",
        ClockAccuracy::Within10Us => "Accurate_within_10us",
        ClockAccuracy::Within25Us => "Accurate_within_25us",
        ClockAccuracy::Within100Us => "Accurate_within_100us",
        ClockAccuracy::Within250Us => "Accurate_within_250us",
        ClockAccuracy::Within1Ms => "Accurate_within_1ms",
        ClockAccuracy::Within2_5Ms => "Accurate_within_2.5ms",
        ClockAccuracy::Within10Ms => "Accurate_within_10ms",
        ClockAccuracy::Within25Ms => "Accurate_within_25ms",
        ClockAccuracy::Within100Ms => "Accurate_within_100ms",
        ClockAccuracy::Within250Ms => "Accurate_within_250ms",
        ClockAccuracy::Within1S => "Accurate_within_1s",
        ClockAccuracy::Within10S => "Accurate_within_10s",
        ClockAccuracy::MoreThan10S => "Accurate_more_10s",
        ClockAccuracy::Unknown => "Accurate_Unknown",
    }
}

/// Severity of a [`FaultRecord`] (clause 5.3.10, syslog-like).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FaultSeverity {
    /// System is unusable.
    Emergency = 0,
    /// Immediate action needed.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions.
    Warning = 4,
    /// Normal but significant condition.
    Notice = 5,
    /// Informational messages.
    Informational = 6,
    /// Debug-level messages.
    #[default]
    Debug = 7,
}

impl TryFrom<u8> for FaultSeverity {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, <Self as TryFrom<u8>>::Error> {
        match value {
            0 => Ok(FaultSeverity::Emergency),
            1 => Ok(FaultSeverity::Alert),
            2 => Ok(FaultSeverity::Critical),
            3 => Ok(FaultSeverity::Error),
            4 => Ok(FaultSeverity::Warning),
            5 => Ok(FaultSeverity::Notice),
            6 => Ok(FaultSeverity::Informational),
            7 => Ok(FaultSeverity::Debug),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FaultSeverity {
    fmt_variants! {
        FaultSeverity::Emergency => "Emergency",
        FaultSeverity::Alert => "Alert",
        FaultSeverity::Critical => "Critical",
        FaultSeverity::Error => "Error",
        FaultSeverity::Warning => "Warning",
        FaultSeverity::Notice => "Notice",
        FaultSeverity::Informational => "Informational",
        FaultSeverity::Debug => "Debug",
    }
}

/// Source of time used by the grandmaster (clause 7.6.2.6, Table 7).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TimeSource {
    /// A calibrated atomic clock.
    AtomicClock = 0x10,
    /// A satellite navigation system (the 2008 edition calls this GPS).
    Gnss = 0x20,
    /// Radio time distribution.
    TerrestrialRadio = 0x30,
    /// A serial time code such as IRIG (2019 addition).
    SerialTimeCode = 0x39,
    /// Another PTP domain.
    Ptp = 0x40,
    /// The Network Time Protocol.
    Ntp = 0x50,
    /// Manually set.
    HandSet = 0x60,
    /// Any source not covered by the other values.
    Other = 0x90,
    /// A free-running oscillator.
    #[default]
    InternalOscillator = 0xA0,
}

impl TryFrom<u8> for TimeSource {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x10 => Ok(TimeSource::AtomicClock),
            0x20 => Ok(TimeSource::Gnss),
            0x30 => Ok(TimeSource::TerrestrialRadio),
            0x39 => Ok(TimeSource::SerialTimeCode),
            0x40 => Ok(TimeSource::Ptp),
            0x50 => Ok(TimeSource::Ntp),
            0x60 => Ok(TimeSource::HandSet),
            0x90 => Ok(TimeSource::Other),
            0xA0 => Ok(TimeSource::InternalOscillator),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TimeSource {
    fmt_variants! {
        TimeSource::AtomicClock => "ATOMIC_CLOCK",
        TimeSource::Gnss => "GNSS",
        TimeSource::TerrestrialRadio => "TERRESTRIAL_RADIO",
        TimeSource::SerialTimeCode => "SERIAL_TIME_CODE",
        TimeSource::Ptp => "PTP",
        TimeSource::Ntp => "NTP",
        TimeSource::HandSet => "HAND_SET",
        TimeSource::Other => "OTHER",
        TimeSource::InternalOscillator => "INTERNAL_OSCILLATOR",
    }
}

/// State of a PTP port (clause 8.2.5.3.1, Table 8).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PortState {
    /// The port is initializing its data sets.
    #[default]
    Initializing = 1,
    /// A fault condition has been detected.
    Faulty = 2,
    /// The port is disabled.
    Disabled = 3,
    /// Listening for an announce message.
    Listening = 4,
    /// About to become master.
    PreMaster = 5,
    /// The port is the source of time on its path.
    Master = 6,
    /// Not the master, not synchronizing.
    Passive = 7,
    /// Synchronizing, but not yet synchronized.
    Uncalibrated = 8,
    /// Synchronizing to the master (linuxptp calls this CLIENT).
    Slave = 9,
}

impl TryFrom<u8> for PortState {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PortState::Initializing),
            2 => Ok(PortState::Faulty),
            3 => Ok(PortState::Disabled),
            4 => Ok(PortState::Listening),
            5 => Ok(PortState::PreMaster),
            6 => Ok(PortState::Master),
            7 => Ok(PortState::Passive),
            8 => Ok(PortState::Uncalibrated),
            9 => Ok(PortState::Slave),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PortState {
    fmt_variants! {
        PortState::Initializing => "INITIALIZING",
        PortState::Faulty => "FAULTY",
        PortState::Disabled => "DISABLED",
        PortState::Listening => "LISTENING",
        PortState::PreMaster => "PRE_MASTER",
        PortState::Master => "MASTER",
        PortState::Passive => "PASSIVE",
        PortState::Uncalibrated => "UNCALIBRATED",
        PortState::Slave => "SLAVE",
    }
}

/// linuxptp time-stamping mode, carried by PORT_PROPERTIES_NP.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Timestamping {
    /// Software time stamps.
    #[default]
    Software = 0,
    /// Hardware time stamps.
    Hardware = 1,
    /// Legacy hardware time stamps.
    LegacyHw = 2,
    /// One-step hardware time stamps.
    OneStep = 3,
    /// One-step peer-to-peer hardware time stamps.
    P2pOneStep = 4,
}

impl TryFrom<u8> for Timestamping {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Timestamping::Software),
            1 => Ok(Timestamping::Hardware),
            2 => Ok(Timestamping::LegacyHw),
            3 => Ok(Timestamping::OneStep),
            4 => Ok(Timestamping::P2pOneStep),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Timestamping {
    fmt_variants! {
        Timestamping::Software => "TS_SOFTWARE",
        Timestamping::Hardware => "TS_HARDWARE",
        Timestamping::LegacyHw => "TS_LEGACY_HW",
        Timestamping::OneStep => "TS_ONESTEP",
        Timestamping::P2pOneStep => "TS_P2P1STEP",
    }
}

/// **Time interval** expressed in nanoseconds multiplied by 2^16
/// (clause 5.3.2).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimeInterval {
    /// Nanoseconds scaled by 2^16, two's complement.
    pub scaled_nanoseconds: i64,
}

impl TimeInterval {
    /// The interval in nanoseconds, with the fractional part restored.
    pub fn nanoseconds(&self) -> f64 {
        self.scaled_nanoseconds as f64 / 65536.0
    }
}

impl ConstPackedSizeBytes for TimeInterval {
    const PACKED_SIZE_BYTES: usize = 8;
}

/// **Timestamp** with a 48-bit seconds field (clause 5.3.3).
///
/// ### Layout
///
/// ```ignore
/// |   secondsField (48)   | nanosecondsField (32) |
/// ```
///
/// `seconds` values above [`UINT48_MAX`] cannot be represented on the wire
/// and are rejected when building.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp {
    /// Seconds portion, 48 bits on the wire.
    pub seconds: u64,
    /// Nanoseconds portion.
    pub nanoseconds: u32,
}

impl ConstPackedSizeBytes for Timestamp {
    const PACKED_SIZE_BYTES: usize = 10;
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanoseconds)
    }
}

/// **Clock identity**: an EUI-64 derived octet string (clause 7.5.2.2).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClockIdentity(pub [u8; 8]);

impl ClockIdentity {
    /// The all-ones identity used when targeting every clock.
    pub const ALL: ClockIdentity = ClockIdentity([0xFF; 8]);
}

impl ConstPackedSizeBytes for ClockIdentity {
    const PACKED_SIZE_BYTES: usize = 8;
}

impl fmt::Display for ClockIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.0;
        write!(
            f,
            "{:02x}{:02x}{:02x}.{:02x}{:02x}.{:02x}{:02x}{:02x}",
            v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7]
        )
    }
}

/// **Port identity**: a clock identity and a port number (clause 7.5.2.3).
///
/// `port_number == 0xFFFF` together with an all-ones clock identity
/// addresses all ports of all clocks.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PortIdentity {
    /// Identity of the clock the port belongs to.
    pub clock_identity: ClockIdentity,
    /// Port number, starting at 1.
    pub port_number: u16,
}

impl PortIdentity {
    /// The identity addressing all ports of all clocks.
    pub const ALL_PORTS: PortIdentity = PortIdentity {
        clock_identity: ClockIdentity::ALL,
        port_number: 0xFFFF,
    };
}

impl ConstPackedSizeBytes for PortIdentity {
    const PACKED_SIZE_BYTES: usize = 10;
}

impl fmt::Display for PortIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.clock_identity, self.port_number)
    }
}

/// **Protocol address** of a port (clause 5.3.6).
///
/// ### Layout
///
/// ```ignore
/// | networkProtocol (16) | addressLength (16) | addressField (variable) |
/// ```
///
/// The address length is derived from `address` when building.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct PortAddress {
    /// Protocol family of the address.
    pub network_protocol: NetworkProtocol,
    /// The address octets, in the representation of `network_protocol`.
    pub address: Vec<u8>,
}

impl PortAddress {
    /// Encoded size: the two length-bearing words plus the address octets.
    pub fn packed_size(&self) -> usize {
        4 + self.address.len()
    }
}

impl fmt::Display for PortAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.network_protocol {
            NetworkProtocol::UdpIpv4 if self.address.len() == 4 => {
                let a = &self.address;
                write!(f, "{}.{}.{}.{}", a[0], a[1], a[2], a[3])
            }
            NetworkProtocol::UdpIpv6 if self.address.len() == 16 => {
                for (i, pair) in self.address.chunks(2).enumerate() {
                    if i != 0 {
                        f.write_str(":")?;
                    }
                    write!(f, "{:x}", u16::from_be_bytes([pair[0], pair[1]]))?;
                }
                Ok(())
            }
            _ => {
                for byte in &self.address {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

/// **Clock quality** (clause 5.3.7).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ClockQuality {
    /// clockClass attribute (clause 7.6.2.4).
    pub clock_class: u8,
    /// clockAccuracy characterization.
    pub clock_accuracy: ClockAccuracy,
    /// PTP variance, offset and scaled (clause 7.6.3).
    pub offset_scaled_log_variance: u16,
}

impl ConstPackedSizeBytes for ClockQuality {
    const PACKED_SIZE_BYTES: usize = 4;
}

/// **PTP text**: a length-prefixed UTF-8 string without terminator
/// (clause 5.3.8).
///
/// ### Layout
///
/// ```ignore
/// | lengthField (8) | textField (lengthField octets) |
/// ```
///
/// The length field is derived from the string when building; text longer
/// than 255 octets cannot be represented and is rejected.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PtpText {
    /// The text content.
    pub text: String,
}

impl PtpText {
    /// Wrap a string.
    pub fn new(text: impl Into<String>) -> Self {
        PtpText { text: text.into() }
    }

    /// Encoded size: the length octet plus the text octets.
    pub fn packed_size(&self) -> usize {
        1 + self.text.len()
    }
}

impl fmt::Display for PtpText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// **Fault record** describing one entry of the fault log (clause 5.3.10).
///
/// ### Layout
///
/// ```ignore
/// | faultRecordLength (16) | faultTime (80) | severityCode (8) |
/// | faultName | faultValue | faultDescription |   (three PTPText)
/// ```
///
/// `faultRecordLength` counts every octet after itself. It is recomputed
/// when building and validated against the octets consumed when parsing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FaultRecord {
    /// When the fault occurred.
    pub fault_time: Timestamp,
    /// Severity of the fault.
    pub severity_code: FaultSeverity,
    /// Name of the faulting entity.
    pub fault_name: PtpText,
    /// Value associated with the fault.
    pub fault_value: PtpText,
    /// Free-form description.
    pub fault_description: PtpText,
}

impl FaultRecord {
    /// The octet count covered by faultRecordLength.
    pub fn interior_size(&self) -> usize {
        Timestamp::PACKED_SIZE_BYTES
            + 1
            + self.fault_name.packed_size()
            + self.fault_value.packed_size()
            + self.fault_description.packed_size()
    }

    /// Encoded size including the length word itself.
    pub fn packed_size(&self) -> usize {
        2 + self.interior_size()
    }
}

/// One entry of the acceptable master table (clause 17.6.3.3).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct AcceptableMaster {
    /// Identity of the acceptable master port.
    pub acceptable_port_identity: PortIdentity,
    /// priority1 value to use in the alternate data set.
    pub alternate_priority1: u8,
}

impl ConstPackedSizeBytes for AcceptableMaster {
    const PACKED_SIZE_BYTES: usize = 11;
}
