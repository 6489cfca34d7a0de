// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Typed payloads of the management TLVs.
//!
//! One struct per payload-carrying management id, in wire-value order, each
//! laid out exactly as IEEE 1588-2008 clause 15.5.3 (or the linuxptp
//! sources for the vendor ids) specifies. Length and count words that the
//! wire derives from the carried data (`actualTableSize`,
//! `physicalAddressLength`, text lengths) are not stored; they are computed
//! when building and consumed when parsing.
//!
//! [`MngTlv`] is the tagged sum over every payload. Matching on it is how
//! both the dispatcher and the tests get from "some management TLV" to a
//! typed value without a cast.

use crate::codec::{Codec, Transcode};
use crate::error::MngError;
use crate::id::MngId;
use crate::protocol::{
    AcceptableMaster, ClockAccuracy, ClockIdentity, ClockQuality, ClockType,
    ConstPackedSizeBytes, FaultRecord, PortAddress, PortIdentity, PortState, PtpText,
    TimeInterval, TimeSource, Timestamp, Timestamping,
};

/// CLOCK_DESCRIPTION: static description of the answering node and port.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClockDescription {
    /// Kinds of PTP node implemented, as a bit mask.
    pub clock_type: ClockType,
    /// Transport of the physical layer, e.g. "IEEE 802.3".
    pub physical_layer_protocol: PtpText,
    /// Physical-layer address octets (length word derived).
    pub physical_address: Vec<u8>,
    /// Protocol address of the answering port.
    pub protocol_address: PortAddress,
    /// OUI of the node manufacturer.
    pub manufacturer_identity: [u8; 3],
    /// Product description, "manufacturer;model;instance".
    pub product_description: PtpText,
    /// Firmware/hardware revision, "hw;fw;sw".
    pub revision_data: PtpText,
    /// User-configured description.
    pub user_description: PtpText,
    /// PTP profile implemented by the port.
    pub profile_identity: [u8; 6],
}

impl Transcode for ClockDescription {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.clock_type)?;
        c.field(&mut self.physical_layer_protocol)?;
        if self.physical_address.len() > u16::MAX as usize {
            return Err(MngError::Val);
        }
        let mut len = self.physical_address.len() as u16;
        c.u16(&mut len)?;
        c.chunk(&mut self.physical_address, len as usize)?;
        c.field(&mut self.protocol_address)?;
        c.octets(&mut self.manufacturer_identity)?;
        c.reserved(1)?;
        c.field(&mut self.product_description)?;
        c.field(&mut self.revision_data)?;
        c.field(&mut self.user_description)?;
        c.octets(&mut self.profile_identity)
    }
}

/// USER_DESCRIPTION: the user-configured node description.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserDescription {
    /// "name;physical location", at most 128 octets per the standard.
    pub user_description: PtpText,
}

impl Transcode for UserDescription {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.user_description)
    }
}

/// INITIALIZE: trigger the initialization event selected by the key.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Initialize {
    /// Initialization procedure to run; 0 is INITIALIZE_EVENT.
    pub initialization_key: u16,
}

impl Transcode for Initialize {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u16(&mut self.initialization_key)
    }
}

/// FAULT_LOG: the most recent fault records of the clock.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FaultLog {
    /// The records, most recent first (count word derived).
    pub fault_records: Vec<FaultRecord>,
}

impl Transcode for FaultLog {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        if self.fault_records.len() > u16::MAX as usize {
            return Err(MngError::Val);
        }
        let mut count = self.fault_records.len() as u16;
        c.u16(&mut count)?;
        c.list(&mut self.fault_records, count as usize)
    }
}

/// DEFAULT_DATA_SET: the defaultDS of the clock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DefaultDataSet {
    /// Bit 0: twoStepFlag. Bit 1: slaveOnly.
    pub flags: u8,
    /// Number of PTP ports on the clock.
    pub number_ports: u16,
    /// priority1 attribute of the clock.
    pub priority1: u8,
    /// Quality of the clock.
    pub clock_quality: ClockQuality,
    /// priority2 attribute of the clock.
    pub priority2: u8,
    /// Identity of the clock.
    pub clock_identity: ClockIdentity,
    /// Domain the clock operates in.
    pub domain_number: u8,
}

impl DefaultDataSet {
    /// twoStepFlag bit of `flags`.
    pub const TSC: u8 = 1 << 0;
    /// slaveOnly bit of `flags`.
    pub const SO: u8 = 1 << 1;
}

impl Transcode for DefaultDataSet {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.flags)?;
        c.reserved(1)?;
        c.u16(&mut self.number_ports)?;
        c.u8(&mut self.priority1)?;
        c.field(&mut self.clock_quality)?;
        c.u8(&mut self.priority2)?;
        c.field(&mut self.clock_identity)?;
        c.u8(&mut self.domain_number)?;
        c.reserved(1)
    }
}

/// CURRENT_DATA_SET: the currentDS of the clock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CurrentDataSet {
    /// Steps between this clock and the grandmaster.
    pub steps_removed: u16,
    /// Current offset from the master.
    pub offset_from_master: TimeInterval,
    /// Mean path delay to the master.
    pub mean_path_delay: TimeInterval,
}

impl Transcode for CurrentDataSet {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u16(&mut self.steps_removed)?;
        c.field(&mut self.offset_from_master)?;
        c.field(&mut self.mean_path_delay)
    }
}

/// PARENT_DATA_SET: the parentDS of the clock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParentDataSet {
    /// Identity of the port of the master.
    pub parent_port_identity: PortIdentity,
    /// Bit 0: parent statistics are valid.
    pub parent_stats: u8,
    /// Estimate of the parent clock variance.
    pub observed_parent_offset_scaled_log_variance: u16,
    /// Estimate of the parent phase change rate.
    pub observed_parent_clock_phase_change_rate: i32,
    /// priority1 of the grandmaster.
    pub grandmaster_priority1: u8,
    /// Quality of the grandmaster.
    pub grandmaster_clock_quality: ClockQuality,
    /// priority2 of the grandmaster.
    pub grandmaster_priority2: u8,
    /// Identity of the grandmaster.
    pub grandmaster_identity: ClockIdentity,
}

impl Transcode for ParentDataSet {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.parent_port_identity)?;
        c.u8(&mut self.parent_stats)?;
        c.reserved(1)?;
        c.u16(&mut self.observed_parent_offset_scaled_log_variance)?;
        c.i32(&mut self.observed_parent_clock_phase_change_rate)?;
        c.u8(&mut self.grandmaster_priority1)?;
        c.field(&mut self.grandmaster_clock_quality)?;
        c.u8(&mut self.grandmaster_priority2)?;
        c.field(&mut self.grandmaster_identity)
    }
}

/// TIME_PROPERTIES_DATA_SET: the timePropertiesDS of the clock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TimePropertiesDataSet {
    /// Offset between TAI and UTC in seconds.
    pub current_utc_offset: i16,
    /// Mask over [`crate::protocol::time_flags`].
    pub flags: u8,
    /// Source of time of the grandmaster.
    pub time_source: TimeSource,
}

impl Transcode for TimePropertiesDataSet {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.i16(&mut self.current_utc_offset)?;
        c.u8(&mut self.flags)?;
        c.field(&mut self.time_source)
    }
}

/// PORT_DATA_SET: the portDS of the targeted port.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PortDataSet {
    /// Identity of the answering port.
    pub port_identity: PortIdentity,
    /// Current protocol state of the port.
    pub port_state: PortState,
    /// Log2 of the minimum delay request interval.
    pub log_min_delay_req_interval: i8,
    /// Mean path delay to the peer (P2P ports).
    pub peer_mean_path_delay: TimeInterval,
    /// Log2 of the announce interval.
    pub log_announce_interval: i8,
    /// Announce intervals before a timeout.
    pub announce_receipt_timeout: u8,
    /// Log2 of the sync interval.
    pub log_sync_interval: i8,
    /// Path delay measuring option: 1 E2E, 2 P2P, 0xFE disabled.
    pub delay_mechanism: u8,
    /// Log2 of the minimum peer delay request interval.
    pub log_min_pdelay_req_interval: i8,
    /// PTP version of the port.
    pub version_number: u8,
}

impl Transcode for PortDataSet {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.port_identity)?;
        c.field(&mut self.port_state)?;
        c.i8(&mut self.log_min_delay_req_interval)?;
        c.field(&mut self.peer_mean_path_delay)?;
        c.i8(&mut self.log_announce_interval)?;
        c.u8(&mut self.announce_receipt_timeout)?;
        c.i8(&mut self.log_sync_interval)?;
        c.u8(&mut self.delay_mechanism)?;
        c.i8(&mut self.log_min_pdelay_req_interval)?;
        c.u8(&mut self.version_number)
    }
}

/// PRIORITY1: the priority1 attribute of the clock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Priority1 {
    /// The priority1 value, lower wins the BMCA.
    pub priority1: u8,
}

impl Transcode for Priority1 {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.priority1)?;
        c.reserved(1)
    }
}

/// PRIORITY2: the priority2 attribute of the clock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Priority2 {
    /// The priority2 value.
    pub priority2: u8,
}

impl Transcode for Priority2 {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.priority2)?;
        c.reserved(1)
    }
}

/// DOMAIN: the domain the clock operates in.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Domain {
    /// The domainNumber attribute.
    pub domain_number: u8,
}

impl Transcode for Domain {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.domain_number)?;
        c.reserved(1)
    }
}

/// SLAVE_ONLY: whether the clock is restricted from becoming master.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SlaveOnly {
    /// Bit 0: slaveOnly.
    pub flags: u8,
}

impl Transcode for SlaveOnly {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.flags)?;
        c.reserved(1)
    }
}

/// LOG_ANNOUNCE_INTERVAL of the targeted port.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LogAnnounceInterval {
    /// Log2 of the announce interval in seconds.
    pub log_announce_interval: i8,
}

impl Transcode for LogAnnounceInterval {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.i8(&mut self.log_announce_interval)?;
        c.reserved(1)
    }
}

/// ANNOUNCE_RECEIPT_TIMEOUT of the targeted port.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AnnounceReceiptTimeout {
    /// Announce intervals that may elapse before a timeout.
    pub announce_receipt_timeout: u8,
}

impl Transcode for AnnounceReceiptTimeout {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.announce_receipt_timeout)?;
        c.reserved(1)
    }
}

/// LOG_SYNC_INTERVAL of the targeted port.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LogSyncInterval {
    /// Log2 of the sync interval in seconds.
    pub log_sync_interval: i8,
}

impl Transcode for LogSyncInterval {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.i8(&mut self.log_sync_interval)?;
        c.reserved(1)
    }
}

/// VERSION_NUMBER of the targeted port.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VersionNumber {
    /// PTP version, low nibble.
    pub version_number: u8,
}

impl Transcode for VersionNumber {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.version_number)?;
        c.reserved(1)
    }
}

/// TIME: the current time of the clock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Time {
    /// Time of the local clock when the TLV was formed.
    pub current_time: Timestamp,
}

impl Transcode for Time {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.current_time)
    }
}

/// CLOCK_ACCURACY: the clockAccuracy member of the clock quality.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ClockAccuracyTlv {
    /// The accuracy characterization.
    pub clock_accuracy: ClockAccuracy,
}

impl Transcode for ClockAccuracyTlv {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.clock_accuracy)?;
        c.reserved(1)
    }
}

/// UTC_PROPERTIES: UTC offset and its leap/validity flags.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UtcProperties {
    /// Offset between TAI and UTC in seconds.
    pub current_utc_offset: i16,
    /// LEAP_61, LEAP_59, UTC_OFF_VALID bits.
    pub flags: u8,
}

impl Transcode for UtcProperties {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.i16(&mut self.current_utc_offset)?;
        c.u8(&mut self.flags)?;
        c.reserved(1)
    }
}

/// TRACEABILITY_PROPERTIES: time/frequency traceability flags.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TraceabilityProperties {
    /// TIME_TRACEABLE and FREQ_TRACEABLE bits.
    pub flags: u8,
}

impl Transcode for TraceabilityProperties {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.flags)?;
        c.reserved(1)
    }
}

/// TIMESCALE_PROPERTIES: timescale flag and time source.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TimescaleProperties {
    /// PTP_TIMESCALE bit.
    pub flags: u8,
    /// Source of time of the grandmaster.
    pub time_source: TimeSource,
}

impl Transcode for TimescaleProperties {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.flags)?;
        c.field(&mut self.time_source)
    }
}

/// UNICAST_NEGOTIATION_ENABLE of the targeted port.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UnicastNegotiationEnable {
    /// Bit 0: unicast negotiation enabled.
    pub flags: u8,
}

impl Transcode for UnicastNegotiationEnable {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.flags)?;
        c.reserved(1)
    }
}

/// PATH_TRACE_LIST: identities of the clocks on the path to the grandmaster.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PathTraceList {
    /// One identity per traversed clock, grandmaster first.
    pub path_sequence: Vec<ClockIdentity>,
}

impl Transcode for PathTraceList {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.list_to_end(&mut self.path_sequence, ClockIdentity::PACKED_SIZE_BYTES)
    }
}

/// PATH_TRACE_ENABLE: whether the path trace option is active.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PathTraceEnable {
    /// Bit 0: path trace enabled.
    pub flags: u8,
}

impl Transcode for PathTraceEnable {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.flags)?;
        c.reserved(1)
    }
}

/// GRANDMASTER_CLUSTER_TABLE: the unicast grandmaster cluster.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GrandmasterClusterTable {
    /// Log2 of the query interval.
    pub log_query_interval: i8,
    /// Addresses of the cluster members (count word derived).
    pub grandmaster_addresses: Vec<PortAddress>,
}

impl Transcode for GrandmasterClusterTable {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.i8(&mut self.log_query_interval)?;
        if self.grandmaster_addresses.len() > u8::MAX as usize {
            return Err(MngError::Val);
        }
        let mut count = self.grandmaster_addresses.len() as u8;
        c.u8(&mut count)?;
        c.list(&mut self.grandmaster_addresses, count as usize)
    }
}

/// UNICAST_MASTER_TABLE: the unicast master table of the port.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UnicastMasterTable {
    /// Log2 of the query interval.
    pub log_query_interval: i8,
    /// Addresses of the potential masters (count word derived).
    pub port_addresses: Vec<PortAddress>,
}

impl Transcode for UnicastMasterTable {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.i8(&mut self.log_query_interval)?;
        if self.port_addresses.len() > u16::MAX as usize {
            return Err(MngError::Val);
        }
        let mut count = self.port_addresses.len() as u16;
        c.u16(&mut count)?;
        c.list(&mut self.port_addresses, count as usize)
    }
}

/// UNICAST_MASTER_MAX_TABLE_SIZE: capacity of the unicast master table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UnicastMasterMaxTableSize {
    /// Maximum number of table entries.
    pub max_table_size: u16,
}

impl Transcode for UnicastMasterMaxTableSize {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u16(&mut self.max_table_size)
    }
}

/// ACCEPTABLE_MASTER_TABLE of the clock.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AcceptableMasterTable {
    /// The acceptable masters (count word derived).
    pub list: Vec<AcceptableMaster>,
}

impl Transcode for AcceptableMasterTable {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        if self.list.len() > i16::MAX as usize {
            return Err(MngError::Val);
        }
        let mut count = self.list.len() as i16;
        c.i16(&mut count)?;
        if count < 0 {
            return Err(MngError::Val);
        }
        c.list(&mut self.list, count as usize)
    }
}

/// ACCEPTABLE_MASTER_TABLE_ENABLED of the targeted port.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AcceptableMasterTableEnabled {
    /// Bit 0: the table is consulted by the BMCA.
    pub flags: u8,
}

impl Transcode for AcceptableMasterTableEnabled {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.flags)?;
        c.reserved(1)
    }
}

/// ACCEPTABLE_MASTER_MAX_TABLE_SIZE: capacity of the acceptable master table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AcceptableMasterMaxTableSize {
    /// Maximum number of table entries.
    pub max_table_size: u16,
}

impl Transcode for AcceptableMasterMaxTableSize {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u16(&mut self.max_table_size)
    }
}

/// ALTERNATE_MASTER configuration of the targeted port.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AlternateMaster {
    /// Bit 0: transmitAlternateMulticastSync.
    pub flags: u8,
    /// Log2 of the alternate multicast sync interval.
    pub log_alternate_multicast_sync_interval: i8,
    /// Number of alternate masters.
    pub number_of_alternate_masters: u8,
}

impl Transcode for AlternateMaster {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.flags)?;
        c.i8(&mut self.log_alternate_multicast_sync_interval)?;
        c.u8(&mut self.number_of_alternate_masters)?;
        c.reserved(1)
    }
}

/// ALTERNATE_TIME_OFFSET_ENABLE for one alternate timescale.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AlternateTimeOffsetEnable {
    /// Which alternate timescale is addressed.
    pub key_field: u8,
    /// Bit 0: the timescale is enabled.
    pub flags: u8,
}

impl Transcode for AlternateTimeOffsetEnable {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.key_field)?;
        c.u8(&mut self.flags)
    }
}

/// ALTERNATE_TIME_OFFSET_NAME of one alternate timescale.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AlternateTimeOffsetName {
    /// Which alternate timescale is addressed.
    pub key_field: u8,
    /// Display name of the timescale.
    pub display_name: PtpText,
}

impl Transcode for AlternateTimeOffsetName {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.key_field)?;
        c.field(&mut self.display_name)
    }
}

/// ALTERNATE_TIME_OFFSET_MAX_KEY: number of alternate timescales maintained.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AlternateTimeOffsetMaxKey {
    /// Largest supported key value.
    pub max_key: u8,
}

impl Transcode for AlternateTimeOffsetMaxKey {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.max_key)?;
        c.reserved(1)
    }
}

/// ALTERNATE_TIME_OFFSET_PROPERTIES of one alternate timescale.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AlternateTimeOffsetProperties {
    /// Which alternate timescale is addressed.
    pub key_field: u8,
    /// Offset of the alternate timescale in seconds.
    pub current_offset: i32,
    /// Seconds to add at the next discontinuity.
    pub jump_seconds: i32,
    /// When the next discontinuity occurs, 48-bit seconds.
    pub time_of_next_jump: u64,
}

impl Transcode for AlternateTimeOffsetProperties {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.key_field)?;
        c.i32(&mut self.current_offset)?;
        c.i32(&mut self.jump_seconds)?;
        c.u48(&mut self.time_of_next_jump)?;
        c.reserved(1)
    }
}

/// EXTERNAL_PORT_CONFIGURATION_ENABLED of the clock (2019 edition).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExternalPortConfigurationEnabled {
    /// Bit 0: external port configuration is active.
    pub flags: u8,
}

impl Transcode for ExternalPortConfigurationEnabled {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.flags)?;
        c.reserved(1)
    }
}

/// MASTER_ONLY of the targeted port (2019 edition).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MasterOnly {
    /// Bit 0: the port never enters a slave state.
    pub flags: u8,
}

impl Transcode for MasterOnly {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.flags)?;
        c.reserved(1)
    }
}

/// HOLDOVER_UPGRADE_ENABLE of the clock (2019 edition).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HoldoverUpgradeEnable {
    /// Bit 0: holdover upgrade is enabled.
    pub flags: u8,
}

impl Transcode for HoldoverUpgradeEnable {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.flags)?;
        c.reserved(1)
    }
}

/// EXT_PORT_CONFIG_PORT_DATA_SET of the targeted port (2019 edition).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExtPortConfigPortDataSet {
    /// Bit 0: acceptance of the desired state.
    pub flags: u8,
    /// Externally configured port state.
    pub desired_state: PortState,
}

impl Transcode for ExtPortConfigPortDataSet {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.flags)?;
        c.field(&mut self.desired_state)
    }
}

/// TRANSPARENT_CLOCK_DEFAULT_DATA_SET of a transparent clock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransparentClockDefaultDataSet {
    /// Identity of the transparent clock.
    pub clock_identity: ClockIdentity,
    /// Number of ports.
    pub number_ports: u16,
    /// Path delay measuring option of the clock.
    pub delay_mechanism: u8,
    /// Primary syntonization domain.
    pub primary_domain: u8,
}

impl Transcode for TransparentClockDefaultDataSet {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.clock_identity)?;
        c.u16(&mut self.number_ports)?;
        c.u8(&mut self.delay_mechanism)?;
        c.u8(&mut self.primary_domain)
    }
}

/// TRANSPARENT_CLOCK_PORT_DATA_SET of a transparent clock port.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransparentClockPortDataSet {
    /// Identity of the answering port.
    pub port_identity: PortIdentity,
    /// Bit 0: faultyFlag.
    pub flags: u8,
    /// Log2 of the minimum peer delay request interval.
    pub log_min_pdelay_req_interval: i8,
    /// Mean path delay to the peer.
    pub peer_mean_path_delay: TimeInterval,
}

impl Transcode for TransparentClockPortDataSet {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.port_identity)?;
        c.u8(&mut self.flags)?;
        c.i8(&mut self.log_min_pdelay_req_interval)?;
        c.field(&mut self.peer_mean_path_delay)
    }
}

/// PRIMARY_DOMAIN of a transparent clock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrimaryDomain {
    /// Primary syntonization domain.
    pub primary_domain: u8,
}

impl Transcode for PrimaryDomain {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.primary_domain)?;
        c.reserved(1)
    }
}

/// DELAY_MECHANISM of the targeted port.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DelayMechanism {
    /// 1 E2E, 2 P2P, 0xFE disabled.
    pub delay_mechanism: u8,
}

impl Transcode for DelayMechanism {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.delay_mechanism)?;
        c.reserved(1)
    }
}

/// LOG_MIN_PDELAY_REQ_INTERVAL of the targeted port.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LogMinPdelayReqInterval {
    /// Log2 of the minimum peer delay request interval.
    pub log_min_pdelay_req_interval: i8,
}

impl Transcode for LogMinPdelayReqInterval {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.i8(&mut self.log_min_pdelay_req_interval)?;
        c.reserved(1)
    }
}

/// TIME_STATUS_NP (linuxptp): synchronization status of the clock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TimeStatusNp {
    /// Offset from the master in nanoseconds.
    pub master_offset: i64,
    /// Ingress time stamp of the last sync, nanoseconds.
    pub ingress_time: i64,
    /// Frequency offset from the master, scaled by 2^41 - 1.
    pub cumulative_scaled_rate_offset: i32,
    /// Last grandmaster phase change, scaled.
    pub scaled_last_gm_phase_change: i32,
    /// Epoch of the grandmaster timebase.
    pub gm_time_base_indicator: u16,
    /// Upper 16 bits of the last phase change.
    pub nanoseconds_msb: u16,
    /// Lower 64 bits of the last phase change.
    pub nanoseconds_lsb: u64,
    /// Fractional part of the last phase change.
    pub fractional_nanoseconds: u16,
    /// Non-zero when a grandmaster is present.
    pub gm_present: i32,
    /// Identity of the grandmaster.
    pub gm_identity: ClockIdentity,
}

impl Transcode for TimeStatusNp {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.i64(&mut self.master_offset)?;
        c.i64(&mut self.ingress_time)?;
        c.i32(&mut self.cumulative_scaled_rate_offset)?;
        c.i32(&mut self.scaled_last_gm_phase_change)?;
        c.u16(&mut self.gm_time_base_indicator)?;
        c.u16(&mut self.nanoseconds_msb)?;
        c.u64(&mut self.nanoseconds_lsb)?;
        c.u16(&mut self.fractional_nanoseconds)?;
        c.i32(&mut self.gm_present)?;
        c.field(&mut self.gm_identity)
    }
}

/// GRANDMASTER_SETTINGS_NP (linuxptp): announced grandmaster values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GrandmasterSettingsNp {
    /// Quality announced by the grandmaster.
    pub clock_quality: ClockQuality,
    /// Offset between TAI and UTC in seconds.
    pub utc_offset: i16,
    /// Mask over [`crate::protocol::time_flags`].
    pub time_flags: u8,
    /// Announced source of time.
    pub time_source: TimeSource,
}

impl Transcode for GrandmasterSettingsNp {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.clock_quality)?;
        c.i16(&mut self.utc_offset)?;
        c.u8(&mut self.time_flags)?;
        c.field(&mut self.time_source)
    }
}

/// PORT_DATA_SET_NP (linuxptp): 802.1AS port attributes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PortDataSetNp {
    /// Peer delay threshold in nanoseconds.
    pub neighbor_prop_delay_thresh: u32,
    /// Non-zero when the port is 802.1AS capable.
    pub as_capable: i32,
}

impl Transcode for PortDataSetNp {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u32(&mut self.neighbor_prop_delay_thresh)?;
        c.i32(&mut self.as_capable)
    }
}

/// SUBSCRIBE_EVENTS_NP (linuxptp): push-notification subscription.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SubscribeEventsNp {
    /// Subscription lifetime in seconds.
    pub duration: u16,
    /// One bit per event number.
    pub bitmask: [u8; 64],
}

impl SubscribeEventsNp {
    /// Event number of port state change notifications.
    pub const NOTIFY_PORT_STATE: usize = 0;
    /// Event number of time synchronization notifications.
    pub const NOTIFY_TIME_SYNC: usize = 1;

    /// Subscribe to an event number.
    pub fn set_event(&mut self, event: usize) {
        self.bitmask[event / 8] |= 1 << (event % 8);
    }

    /// Whether an event number is subscribed.
    pub fn event(&self, event: usize) -> bool {
        self.bitmask[event / 8] & (1 << (event % 8)) != 0
    }
}

impl Default for SubscribeEventsNp {
    fn default() -> Self {
        SubscribeEventsNp {
            duration: 0,
            bitmask: [0; 64],
        }
    }
}

impl Transcode for SubscribeEventsNp {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u16(&mut self.duration)?;
        c.octets(&mut self.bitmask)
    }
}

/// PORT_PROPERTIES_NP (linuxptp): port naming and time-stamping mode.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PortPropertiesNp {
    /// Identity of the answering port.
    pub port_identity: PortIdentity,
    /// Current protocol state of the port.
    pub port_state: PortState,
    /// Time-stamping mode of the port.
    pub timestamping: Timestamping,
    /// Network interface name.
    pub interface: PtpText,
}

impl Transcode for PortPropertiesNp {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.port_identity)?;
        c.field(&mut self.port_state)?;
        c.field(&mut self.timestamping)?;
        c.field(&mut self.interface)
    }
}

/// PORT_STATS_NP (linuxptp): per-message-type packet counters.
///
/// The counters are little-endian on the wire, unlike everything else in
/// the message.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PortStatsNp {
    /// Identity of the answering port.
    pub port_identity: PortIdentity,
    /// Received packets, indexed by messageType.
    pub rx_msg_type: [u64; 16],
    /// Transmitted packets, indexed by messageType.
    pub tx_msg_type: [u64; 16],
}

impl Transcode for PortStatsNp {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.field(&mut self.port_identity)?;
        for counter in self.rx_msg_type.iter_mut() {
            c.u64_le(counter)?;
        }
        for counter in self.tx_msg_type.iter_mut() {
            c.u64_le(counter)?;
        }
        Ok(())
    }
}

/// SYNCHRONIZATION_UNCERTAIN_NP (linuxptp): sync-uncertain propagation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SynchronizationUncertainNp {
    /// 0 false, 1 true, 0xFF don't care.
    pub val: u8,
}

impl Transcode for SynchronizationUncertainNp {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        c.u8(&mut self.val)?;
        c.reserved(1)
    }
}

/// A decoded (or to-be-sent) management TLV value, tagged by management id.
#[derive(Clone, Debug, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum MngTlv {
    ClockDescription(ClockDescription),
    UserDescription(UserDescription),
    Initialize(Initialize),
    FaultLog(FaultLog),
    DefaultDataSet(DefaultDataSet),
    CurrentDataSet(CurrentDataSet),
    ParentDataSet(ParentDataSet),
    TimePropertiesDataSet(TimePropertiesDataSet),
    PortDataSet(PortDataSet),
    Priority1(Priority1),
    Priority2(Priority2),
    Domain(Domain),
    SlaveOnly(SlaveOnly),
    LogAnnounceInterval(LogAnnounceInterval),
    AnnounceReceiptTimeout(AnnounceReceiptTimeout),
    LogSyncInterval(LogSyncInterval),
    VersionNumber(VersionNumber),
    Time(Time),
    ClockAccuracy(ClockAccuracyTlv),
    UtcProperties(UtcProperties),
    TraceabilityProperties(TraceabilityProperties),
    TimescaleProperties(TimescaleProperties),
    UnicastNegotiationEnable(UnicastNegotiationEnable),
    PathTraceList(PathTraceList),
    PathTraceEnable(PathTraceEnable),
    GrandmasterClusterTable(GrandmasterClusterTable),
    UnicastMasterTable(UnicastMasterTable),
    UnicastMasterMaxTableSize(UnicastMasterMaxTableSize),
    AcceptableMasterTable(AcceptableMasterTable),
    AcceptableMasterTableEnabled(AcceptableMasterTableEnabled),
    AcceptableMasterMaxTableSize(AcceptableMasterMaxTableSize),
    AlternateMaster(AlternateMaster),
    AlternateTimeOffsetEnable(AlternateTimeOffsetEnable),
    AlternateTimeOffsetName(AlternateTimeOffsetName),
    AlternateTimeOffsetMaxKey(AlternateTimeOffsetMaxKey),
    AlternateTimeOffsetProperties(AlternateTimeOffsetProperties),
    ExternalPortConfigurationEnabled(ExternalPortConfigurationEnabled),
    MasterOnly(MasterOnly),
    HoldoverUpgradeEnable(HoldoverUpgradeEnable),
    ExtPortConfigPortDataSet(ExtPortConfigPortDataSet),
    TransparentClockDefaultDataSet(TransparentClockDefaultDataSet),
    TransparentClockPortDataSet(TransparentClockPortDataSet),
    PrimaryDomain(PrimaryDomain),
    DelayMechanism(DelayMechanism),
    LogMinPdelayReqInterval(LogMinPdelayReqInterval),
    TimeStatusNp(TimeStatusNp),
    GrandmasterSettingsNp(GrandmasterSettingsNp),
    PortDataSetNp(PortDataSetNp),
    SubscribeEventsNp(SubscribeEventsNp),
    PortPropertiesNp(PortPropertiesNp),
    PortStatsNp(PortStatsNp),
    SynchronizationUncertainNp(SynchronizationUncertainNp),
}

impl MngTlv {
    /// The management id this value belongs to.
    pub fn id(&self) -> MngId {
        match self {
            MngTlv::ClockDescription(_) => MngId::ClockDescription,
            MngTlv::UserDescription(_) => MngId::UserDescription,
            MngTlv::Initialize(_) => MngId::Initialize,
            MngTlv::FaultLog(_) => MngId::FaultLog,
            MngTlv::DefaultDataSet(_) => MngId::DefaultDataSet,
            MngTlv::CurrentDataSet(_) => MngId::CurrentDataSet,
            MngTlv::ParentDataSet(_) => MngId::ParentDataSet,
            MngTlv::TimePropertiesDataSet(_) => MngId::TimePropertiesDataSet,
            MngTlv::PortDataSet(_) => MngId::PortDataSet,
            MngTlv::Priority1(_) => MngId::Priority1,
            MngTlv::Priority2(_) => MngId::Priority2,
            MngTlv::Domain(_) => MngId::Domain,
            MngTlv::SlaveOnly(_) => MngId::SlaveOnly,
            MngTlv::LogAnnounceInterval(_) => MngId::LogAnnounceInterval,
            MngTlv::AnnounceReceiptTimeout(_) => MngId::AnnounceReceiptTimeout,
            MngTlv::LogSyncInterval(_) => MngId::LogSyncInterval,
            MngTlv::VersionNumber(_) => MngId::VersionNumber,
            MngTlv::Time(_) => MngId::Time,
            MngTlv::ClockAccuracy(_) => MngId::ClockAccuracy,
            MngTlv::UtcProperties(_) => MngId::UtcProperties,
            MngTlv::TraceabilityProperties(_) => MngId::TraceabilityProperties,
            MngTlv::TimescaleProperties(_) => MngId::TimescaleProperties,
            MngTlv::UnicastNegotiationEnable(_) => MngId::UnicastNegotiationEnable,
            MngTlv::PathTraceList(_) => MngId::PathTraceList,
            MngTlv::PathTraceEnable(_) => MngId::PathTraceEnable,
            MngTlv::GrandmasterClusterTable(_) => MngId::GrandmasterClusterTable,
            MngTlv::UnicastMasterTable(_) => MngId::UnicastMasterTable,
            MngTlv::UnicastMasterMaxTableSize(_) => MngId::UnicastMasterMaxTableSize,
            MngTlv::AcceptableMasterTable(_) => MngId::AcceptableMasterTable,
            MngTlv::AcceptableMasterTableEnabled(_) => MngId::AcceptableMasterTableEnabled,
            MngTlv::AcceptableMasterMaxTableSize(_) => MngId::AcceptableMasterMaxTableSize,
            MngTlv::AlternateMaster(_) => MngId::AlternateMaster,
            MngTlv::AlternateTimeOffsetEnable(_) => MngId::AlternateTimeOffsetEnable,
            MngTlv::AlternateTimeOffsetName(_) => MngId::AlternateTimeOffsetName,
            MngTlv::AlternateTimeOffsetMaxKey(_) => MngId::AlternateTimeOffsetMaxKey,
            MngTlv::AlternateTimeOffsetProperties(_) => MngId::AlternateTimeOffsetProperties,
            MngTlv::ExternalPortConfigurationEnabled(_) => MngId::ExternalPortConfigurationEnabled,
            MngTlv::MasterOnly(_) => MngId::MasterOnly,
            MngTlv::HoldoverUpgradeEnable(_) => MngId::HoldoverUpgradeEnable,
            MngTlv::ExtPortConfigPortDataSet(_) => MngId::ExtPortConfigPortDataSet,
            MngTlv::TransparentClockDefaultDataSet(_) => MngId::TransparentClockDefaultDataSet,
            MngTlv::TransparentClockPortDataSet(_) => MngId::TransparentClockPortDataSet,
            MngTlv::PrimaryDomain(_) => MngId::PrimaryDomain,
            MngTlv::DelayMechanism(_) => MngId::DelayMechanism,
            MngTlv::LogMinPdelayReqInterval(_) => MngId::LogMinPdelayReqInterval,
            MngTlv::TimeStatusNp(_) => MngId::TimeStatusNp,
            MngTlv::GrandmasterSettingsNp(_) => MngId::GrandmasterSettingsNp,
            MngTlv::PortDataSetNp(_) => MngId::PortDataSetNp,
            MngTlv::SubscribeEventsNp(_) => MngId::SubscribeEventsNp,
            MngTlv::PortPropertiesNp(_) => MngId::PortPropertiesNp,
            MngTlv::PortStatsNp(_) => MngId::PortStatsNp,
            MngTlv::SynchronizationUncertainNp(_) => MngId::SynchronizationUncertainNp,
        }
    }

    /// A default-constructed value for an id, or `None` for the ids whose
    /// payload is empty.
    pub fn default_for(id: MngId) -> Option<MngTlv> {
        let tlv = match id {
            MngId::NullPtpManagement
            | MngId::SaveInNonVolatileStorage
            | MngId::ResetNonVolatileStorage
            | MngId::EnablePort
            | MngId::DisablePort
            | MngId::FaultLogReset => return None,
            MngId::ClockDescription => MngTlv::ClockDescription(Default::default()),
            MngId::UserDescription => MngTlv::UserDescription(Default::default()),
            MngId::Initialize => MngTlv::Initialize(Default::default()),
            MngId::FaultLog => MngTlv::FaultLog(Default::default()),
            MngId::DefaultDataSet => MngTlv::DefaultDataSet(Default::default()),
            MngId::CurrentDataSet => MngTlv::CurrentDataSet(Default::default()),
            MngId::ParentDataSet => MngTlv::ParentDataSet(Default::default()),
            MngId::TimePropertiesDataSet => MngTlv::TimePropertiesDataSet(Default::default()),
            MngId::PortDataSet => MngTlv::PortDataSet(Default::default()),
            MngId::Priority1 => MngTlv::Priority1(Default::default()),
            MngId::Priority2 => MngTlv::Priority2(Default::default()),
            MngId::Domain => MngTlv::Domain(Default::default()),
            MngId::SlaveOnly => MngTlv::SlaveOnly(Default::default()),
            MngId::LogAnnounceInterval => MngTlv::LogAnnounceInterval(Default::default()),
            MngId::AnnounceReceiptTimeout => MngTlv::AnnounceReceiptTimeout(Default::default()),
            MngId::LogSyncInterval => MngTlv::LogSyncInterval(Default::default()),
            MngId::VersionNumber => MngTlv::VersionNumber(Default::default()),
            MngId::Time => MngTlv::Time(Default::default()),
            MngId::ClockAccuracy => MngTlv::ClockAccuracy(Default::default()),
            MngId::UtcProperties => MngTlv::UtcProperties(Default::default()),
            MngId::TraceabilityProperties => MngTlv::TraceabilityProperties(Default::default()),
            MngId::TimescaleProperties => MngTlv::TimescaleProperties(Default::default()),
            MngId::UnicastNegotiationEnable => MngTlv::UnicastNegotiationEnable(Default::default()),
            MngId::PathTraceList => MngTlv::PathTraceList(Default::default()),
            MngId::PathTraceEnable => MngTlv::PathTraceEnable(Default::default()),
            MngId::GrandmasterClusterTable => MngTlv::GrandmasterClusterTable(Default::default()),
            MngId::UnicastMasterTable => MngTlv::UnicastMasterTable(Default::default()),
            MngId::UnicastMasterMaxTableSize => {
                MngTlv::UnicastMasterMaxTableSize(Default::default())
            }
            MngId::AcceptableMasterTable => MngTlv::AcceptableMasterTable(Default::default()),
            MngId::AcceptableMasterTableEnabled => {
                MngTlv::AcceptableMasterTableEnabled(Default::default())
            }
            MngId::AcceptableMasterMaxTableSize => {
                MngTlv::AcceptableMasterMaxTableSize(Default::default())
            }
            MngId::AlternateMaster => MngTlv::AlternateMaster(Default::default()),
            MngId::AlternateTimeOffsetEnable => {
                MngTlv::AlternateTimeOffsetEnable(Default::default())
            }
            MngId::AlternateTimeOffsetName => MngTlv::AlternateTimeOffsetName(Default::default()),
            MngId::AlternateTimeOffsetMaxKey => {
                MngTlv::AlternateTimeOffsetMaxKey(Default::default())
            }
            MngId::AlternateTimeOffsetProperties => {
                MngTlv::AlternateTimeOffsetProperties(Default::default())
            }
            MngId::ExternalPortConfigurationEnabled => {
                MngTlv::ExternalPortConfigurationEnabled(Default::default())
            }
            MngId::MasterOnly => MngTlv::MasterOnly(Default::default()),
            MngId::HoldoverUpgradeEnable => MngTlv::HoldoverUpgradeEnable(Default::default()),
            MngId::ExtPortConfigPortDataSet => MngTlv::ExtPortConfigPortDataSet(Default::default()),
            MngId::TransparentClockDefaultDataSet => {
                MngTlv::TransparentClockDefaultDataSet(Default::default())
            }
            MngId::TransparentClockPortDataSet => {
                MngTlv::TransparentClockPortDataSet(Default::default())
            }
            MngId::PrimaryDomain => MngTlv::PrimaryDomain(Default::default()),
            MngId::DelayMechanism => MngTlv::DelayMechanism(Default::default()),
            MngId::LogMinPdelayReqInterval => MngTlv::LogMinPdelayReqInterval(Default::default()),
            MngId::TimeStatusNp => MngTlv::TimeStatusNp(Default::default()),
            MngId::GrandmasterSettingsNp => MngTlv::GrandmasterSettingsNp(Default::default()),
            MngId::PortDataSetNp => MngTlv::PortDataSetNp(Default::default()),
            MngId::SubscribeEventsNp => MngTlv::SubscribeEventsNp(Default::default()),
            MngId::PortPropertiesNp => MngTlv::PortPropertiesNp(Default::default()),
            MngId::PortStatsNp => MngTlv::PortStatsNp(Default::default()),
            MngId::SynchronizationUncertainNp => {
                MngTlv::SynchronizationUncertainNp(Default::default())
            }
        };
        Some(tlv)
    }
}

impl Transcode for MngTlv {
    fn transcode<C: Codec>(&mut self, c: &mut C) -> Result<(), MngError> {
        match self {
            MngTlv::ClockDescription(d) => d.transcode(c),
            MngTlv::UserDescription(d) => d.transcode(c),
            MngTlv::Initialize(d) => d.transcode(c),
            MngTlv::FaultLog(d) => d.transcode(c),
            MngTlv::DefaultDataSet(d) => d.transcode(c),
            MngTlv::CurrentDataSet(d) => d.transcode(c),
            MngTlv::ParentDataSet(d) => d.transcode(c),
            MngTlv::TimePropertiesDataSet(d) => d.transcode(c),
            MngTlv::PortDataSet(d) => d.transcode(c),
            MngTlv::Priority1(d) => d.transcode(c),
            MngTlv::Priority2(d) => d.transcode(c),
            MngTlv::Domain(d) => d.transcode(c),
            MngTlv::SlaveOnly(d) => d.transcode(c),
            MngTlv::LogAnnounceInterval(d) => d.transcode(c),
            MngTlv::AnnounceReceiptTimeout(d) => d.transcode(c),
            MngTlv::LogSyncInterval(d) => d.transcode(c),
            MngTlv::VersionNumber(d) => d.transcode(c),
            MngTlv::Time(d) => d.transcode(c),
            MngTlv::ClockAccuracy(d) => d.transcode(c),
            MngTlv::UtcProperties(d) => d.transcode(c),
            MngTlv::TraceabilityProperties(d) => d.transcode(c),
            MngTlv::TimescaleProperties(d) => d.transcode(c),
            MngTlv::UnicastNegotiationEnable(d) => d.transcode(c),
            MngTlv::PathTraceList(d) => d.transcode(c),
            MngTlv::PathTraceEnable(d) => d.transcode(c),
            MngTlv::GrandmasterClusterTable(d) => d.transcode(c),
            MngTlv::UnicastMasterTable(d) => d.transcode(c),
            MngTlv::UnicastMasterMaxTableSize(d) => d.transcode(c),
            MngTlv::AcceptableMasterTable(d) => d.transcode(c),
            MngTlv::AcceptableMasterTableEnabled(d) => d.transcode(c),
            MngTlv::AcceptableMasterMaxTableSize(d) => d.transcode(c),
            MngTlv::AlternateMaster(d) => d.transcode(c),
            MngTlv::AlternateTimeOffsetEnable(d) => d.transcode(c),
            MngTlv::AlternateTimeOffsetName(d) => d.transcode(c),
            MngTlv::AlternateTimeOffsetMaxKey(d) => d.transcode(c),
            MngTlv::AlternateTimeOffsetProperties(d) => d.transcode(c),
            MngTlv::ExternalPortConfigurationEnabled(d) => d.transcode(c),
            MngTlv::MasterOnly(d) => d.transcode(c),
            MngTlv::HoldoverUpgradeEnable(d) => d.transcode(c),
            MngTlv::ExtPortConfigPortDataSet(d) => d.transcode(c),
            MngTlv::TransparentClockDefaultDataSet(d) => d.transcode(c),
            MngTlv::TransparentClockPortDataSet(d) => d.transcode(c),
            MngTlv::PrimaryDomain(d) => d.transcode(c),
            MngTlv::DelayMechanism(d) => d.transcode(c),
            MngTlv::LogMinPdelayReqInterval(d) => d.transcode(c),
            MngTlv::TimeStatusNp(d) => d.transcode(c),
            MngTlv::GrandmasterSettingsNp(d) => d.transcode(c),
            MngTlv::PortDataSetNp(d) => d.transcode(c),
            MngTlv::SubscribeEventsNp(d) => d.transcode(c),
            MngTlv::PortPropertiesNp(d) => d.transcode(c),
            MngTlv::PortStatsNp(d) => d.transcode(c),
            MngTlv::SynchronizationUncertainNp(d) => d.transcode(c),
        }
    }
}
