// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Typed dispatch of parsed TLVs and typed building of TLVs to send.
//!
//! [`MngDispatcher`] routes the decoded value of a parsed message to one
//! callback per management id; every callback defaults to
//! [`MngDispatcher::unhandled`], so an implementation only overrides the
//! ids it cares about. The routing is a match over [`MngTlv`], so adding a
//! payload without a callback is a compile error rather than a silent gap.
//!
//! [`MngTlvBuilder`] is the sending mirror: one population callback per id,
//! each defaulting to "not provided". [`MngTlvBuilder::build_tlv`]
//! default-constructs the typed value, runs the callback and attaches the
//! result to the message.

use crate::error::MngError;
use crate::id::MngId;
use crate::msg::Message;
use crate::protocol::ActionField;
use crate::tlv::*;

/// Per-id callbacks for parsed management TLVs.
///
/// ```
/// use ptp_mgmt::tlv::Priority1;
/// use ptp_mgmt::{Message, MngDispatcher};
///
/// #[derive(Default)]
/// struct Probe {
///     seen: Option<u8>,
/// }
///
/// impl MngDispatcher for Probe {
///     fn priority1(&mut self, _msg: &Message, tlv: &Priority1) {
///         self.seen = Some(tlv.priority1);
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait MngDispatcher {
    /// Route the decoded value of the last parse to its callback, or to
    /// [`MngDispatcher::no_tlv`] when the frame carried no decodable value.
    fn dispatch(&mut self, msg: &Message) {
        let Some(tlv) = msg.data() else {
            self.no_tlv(msg);
            return;
        };
        match tlv {
            MngTlv::ClockDescription(d) => self.clock_description(msg, d),
            MngTlv::UserDescription(d) => self.user_description(msg, d),
            MngTlv::Initialize(d) => self.initialize(msg, d),
            MngTlv::FaultLog(d) => self.fault_log(msg, d),
            MngTlv::DefaultDataSet(d) => self.default_data_set(msg, d),
            MngTlv::CurrentDataSet(d) => self.current_data_set(msg, d),
            MngTlv::ParentDataSet(d) => self.parent_data_set(msg, d),
            MngTlv::TimePropertiesDataSet(d) => self.time_properties_data_set(msg, d),
            MngTlv::PortDataSet(d) => self.port_data_set(msg, d),
            MngTlv::Priority1(d) => self.priority1(msg, d),
            MngTlv::Priority2(d) => self.priority2(msg, d),
            MngTlv::Domain(d) => self.domain(msg, d),
            MngTlv::SlaveOnly(d) => self.slave_only(msg, d),
            MngTlv::LogAnnounceInterval(d) => self.log_announce_interval(msg, d),
            MngTlv::AnnounceReceiptTimeout(d) => self.announce_receipt_timeout(msg, d),
            MngTlv::LogSyncInterval(d) => self.log_sync_interval(msg, d),
            MngTlv::VersionNumber(d) => self.version_number(msg, d),
            MngTlv::Time(d) => self.time(msg, d),
            MngTlv::ClockAccuracy(d) => self.clock_accuracy(msg, d),
            MngTlv::UtcProperties(d) => self.utc_properties(msg, d),
            MngTlv::TraceabilityProperties(d) => self.traceability_properties(msg, d),
            MngTlv::TimescaleProperties(d) => self.timescale_properties(msg, d),
            MngTlv::UnicastNegotiationEnable(d) => self.unicast_negotiation_enable(msg, d),
            MngTlv::PathTraceList(d) => self.path_trace_list(msg, d),
            MngTlv::PathTraceEnable(d) => self.path_trace_enable(msg, d),
            MngTlv::GrandmasterClusterTable(d) => self.grandmaster_cluster_table(msg, d),
            MngTlv::UnicastMasterTable(d) => self.unicast_master_table(msg, d),
            MngTlv::UnicastMasterMaxTableSize(d) => self.unicast_master_max_table_size(msg, d),
            MngTlv::AcceptableMasterTable(d) => self.acceptable_master_table(msg, d),
            MngTlv::AcceptableMasterTableEnabled(d) => {
                self.acceptable_master_table_enabled(msg, d)
            }
            MngTlv::AcceptableMasterMaxTableSize(d) => {
                self.acceptable_master_max_table_size(msg, d)
            }
            MngTlv::AlternateMaster(d) => self.alternate_master(msg, d),
            MngTlv::AlternateTimeOffsetEnable(d) => self.alternate_time_offset_enable(msg, d),
            MngTlv::AlternateTimeOffsetName(d) => self.alternate_time_offset_name(msg, d),
            MngTlv::AlternateTimeOffsetMaxKey(d) => self.alternate_time_offset_max_key(msg, d),
            MngTlv::AlternateTimeOffsetProperties(d) => {
                self.alternate_time_offset_properties(msg, d)
            }
            MngTlv::ExternalPortConfigurationEnabled(d) => {
                self.external_port_configuration_enabled(msg, d)
            }
            MngTlv::MasterOnly(d) => self.master_only(msg, d),
            MngTlv::HoldoverUpgradeEnable(d) => self.holdover_upgrade_enable(msg, d),
            MngTlv::ExtPortConfigPortDataSet(d) => self.ext_port_config_port_data_set(msg, d),
            MngTlv::TransparentClockDefaultDataSet(d) => {
                self.transparent_clock_default_data_set(msg, d)
            }
            MngTlv::TransparentClockPortDataSet(d) => {
                self.transparent_clock_port_data_set(msg, d)
            }
            MngTlv::PrimaryDomain(d) => self.primary_domain(msg, d),
            MngTlv::DelayMechanism(d) => self.delay_mechanism(msg, d),
            MngTlv::LogMinPdelayReqInterval(d) => self.log_min_pdelay_req_interval(msg, d),
            MngTlv::TimeStatusNp(d) => self.time_status_np(msg, d),
            MngTlv::GrandmasterSettingsNp(d) => self.grandmaster_settings_np(msg, d),
            MngTlv::PortDataSetNp(d) => self.port_data_set_np(msg, d),
            MngTlv::SubscribeEventsNp(d) => self.subscribe_events_np(msg, d),
            MngTlv::PortPropertiesNp(d) => self.port_properties_np(msg, d),
            MngTlv::PortStatsNp(d) => self.port_stats_np(msg, d),
            MngTlv::SynchronizationUncertainNp(d) => self.synchronization_uncertain_np(msg, d),
        }
    }

    /// Called for every id whose callback is not overridden.
    fn unhandled(&mut self, msg: &Message, id: MngId) {}

    /// Called when the parsed frame carried no decodable value (requests,
    /// acknowledges and empty-payload responses).
    fn no_tlv(&mut self, msg: &Message) {}

    /// CLOCK_DESCRIPTION callback.
    fn clock_description(&mut self, msg: &Message, tlv: &ClockDescription) {
        self.unhandled(msg, MngId::ClockDescription)
    }
    /// USER_DESCRIPTION callback.
    fn user_description(&mut self, msg: &Message, tlv: &UserDescription) {
        self.unhandled(msg, MngId::UserDescription)
    }
    /// INITIALIZE callback.
    fn initialize(&mut self, msg: &Message, tlv: &Initialize) {
        self.unhandled(msg, MngId::Initialize)
    }
    /// FAULT_LOG callback.
    fn fault_log(&mut self, msg: &Message, tlv: &FaultLog) {
        self.unhandled(msg, MngId::FaultLog)
    }
    /// DEFAULT_DATA_SET callback.
    fn default_data_set(&mut self, msg: &Message, tlv: &DefaultDataSet) {
        self.unhandled(msg, MngId::DefaultDataSet)
    }
    /// CURRENT_DATA_SET callback.
    fn current_data_set(&mut self, msg: &Message, tlv: &CurrentDataSet) {
        self.unhandled(msg, MngId::CurrentDataSet)
    }
    /// PARENT_DATA_SET callback.
    fn parent_data_set(&mut self, msg: &Message, tlv: &ParentDataSet) {
        self.unhandled(msg, MngId::ParentDataSet)
    }
    /// TIME_PROPERTIES_DATA_SET callback.
    fn time_properties_data_set(&mut self, msg: &Message, tlv: &TimePropertiesDataSet) {
        self.unhandled(msg, MngId::TimePropertiesDataSet)
    }
    /// PORT_DATA_SET callback.
    fn port_data_set(&mut self, msg: &Message, tlv: &PortDataSet) {
        self.unhandled(msg, MngId::PortDataSet)
    }
    /// PRIORITY1 callback.
    fn priority1(&mut self, msg: &Message, tlv: &Priority1) {
        self.unhandled(msg, MngId::Priority1)
    }
    /// PRIORITY2 callback.
    fn priority2(&mut self, msg: &Message, tlv: &Priority2) {
        self.unhandled(msg, MngId::Priority2)
    }
    /// DOMAIN callback.
    fn domain(&mut self, msg: &Message, tlv: &Domain) {
        self.unhandled(msg, MngId::Domain)
    }
    /// SLAVE_ONLY callback.
    fn slave_only(&mut self, msg: &Message, tlv: &SlaveOnly) {
        self.unhandled(msg, MngId::SlaveOnly)
    }
    /// LOG_ANNOUNCE_INTERVAL callback.
    fn log_announce_interval(&mut self, msg: &Message, tlv: &LogAnnounceInterval) {
        self.unhandled(msg, MngId::LogAnnounceInterval)
    }
    /// ANNOUNCE_RECEIPT_TIMEOUT callback.
    fn announce_receipt_timeout(&mut self, msg: &Message, tlv: &AnnounceReceiptTimeout) {
        self.unhandled(msg, MngId::AnnounceReceiptTimeout)
    }
    /// LOG_SYNC_INTERVAL callback.
    fn log_sync_interval(&mut self, msg: &Message, tlv: &LogSyncInterval) {
        self.unhandled(msg, MngId::LogSyncInterval)
    }
    /// VERSION_NUMBER callback.
    fn version_number(&mut self, msg: &Message, tlv: &VersionNumber) {
        self.unhandled(msg, MngId::VersionNumber)
    }
    /// TIME callback.
    fn time(&mut self, msg: &Message, tlv: &Time) {
        self.unhandled(msg, MngId::Time)
    }
    /// CLOCK_ACCURACY callback.
    fn clock_accuracy(&mut self, msg: &Message, tlv: &ClockAccuracyTlv) {
        self.unhandled(msg, MngId::ClockAccuracy)
    }
    /// UTC_PROPERTIES callback.
    fn utc_properties(&mut self, msg: &Message, tlv: &UtcProperties) {
        self.unhandled(msg, MngId::UtcProperties)
    }
    /// TRACEABILITY_PROPERTIES callback.
    fn traceability_properties(&mut self, msg: &Message, tlv: &TraceabilityProperties) {
        self.unhandled(msg, MngId::TraceabilityProperties)
    }
    /// TIMESCALE_PROPERTIES callback.
    fn timescale_properties(&mut self, msg: &Message, tlv: &TimescaleProperties) {
        self.unhandled(msg, MngId::TimescaleProperties)
    }
    /// UNICAST_NEGOTIATION_ENABLE callback.
    fn unicast_negotiation_enable(&mut self, msg: &Message, tlv: &UnicastNegotiationEnable) {
        self.unhandled(msg, MngId::UnicastNegotiationEnable)
    }
    /// PATH_TRACE_LIST callback.
    fn path_trace_list(&mut self, msg: &Message, tlv: &PathTraceList) {
        self.unhandled(msg, MngId::PathTraceList)
    }
    /// PATH_TRACE_ENABLE callback.
    fn path_trace_enable(&mut self, msg: &Message, tlv: &PathTraceEnable) {
        self.unhandled(msg, MngId::PathTraceEnable)
    }
    /// GRANDMASTER_CLUSTER_TABLE callback.
    fn grandmaster_cluster_table(&mut self, msg: &Message, tlv: &GrandmasterClusterTable) {
        self.unhandled(msg, MngId::GrandmasterClusterTable)
    }
    /// UNICAST_MASTER_TABLE callback.
    fn unicast_master_table(&mut self, msg: &Message, tlv: &UnicastMasterTable) {
        self.unhandled(msg, MngId::UnicastMasterTable)
    }
    /// UNICAST_MASTER_MAX_TABLE_SIZE callback.
    fn unicast_master_max_table_size(&mut self, msg: &Message, tlv: &UnicastMasterMaxTableSize) {
        self.unhandled(msg, MngId::UnicastMasterMaxTableSize)
    }
    /// ACCEPTABLE_MASTER_TABLE callback.
    fn acceptable_master_table(&mut self, msg: &Message, tlv: &AcceptableMasterTable) {
        self.unhandled(msg, MngId::AcceptableMasterTable)
    }
    /// ACCEPTABLE_MASTER_TABLE_ENABLED callback.
    fn acceptable_master_table_enabled(
        &mut self,
        msg: &Message,
        tlv: &AcceptableMasterTableEnabled,
    ) {
        self.unhandled(msg, MngId::AcceptableMasterTableEnabled)
    }
    /// ACCEPTABLE_MASTER_MAX_TABLE_SIZE callback.
    fn acceptable_master_max_table_size(
        &mut self,
        msg: &Message,
        tlv: &AcceptableMasterMaxTableSize,
    ) {
        self.unhandled(msg, MngId::AcceptableMasterMaxTableSize)
    }
    /// ALTERNATE_MASTER callback.
    fn alternate_master(&mut self, msg: &Message, tlv: &AlternateMaster) {
        self.unhandled(msg, MngId::AlternateMaster)
    }
    /// ALTERNATE_TIME_OFFSET_ENABLE callback.
    fn alternate_time_offset_enable(&mut self, msg: &Message, tlv: &AlternateTimeOffsetEnable) {
        self.unhandled(msg, MngId::AlternateTimeOffsetEnable)
    }
    /// ALTERNATE_TIME_OFFSET_NAME callback.
    fn alternate_time_offset_name(&mut self, msg: &Message, tlv: &AlternateTimeOffsetName) {
        self.unhandled(msg, MngId::AlternateTimeOffsetName)
    }
    /// ALTERNATE_TIME_OFFSET_MAX_KEY callback.
    fn alternate_time_offset_max_key(&mut self, msg: &Message, tlv: &AlternateTimeOffsetMaxKey) {
        self.unhandled(msg, MngId::AlternateTimeOffsetMaxKey)
    }
    /// ALTERNATE_TIME_OFFSET_PROPERTIES callback.
    fn alternate_time_offset_properties(
        &mut self,
        msg: &Message,
        tlv: &AlternateTimeOffsetProperties,
    ) {
        self.unhandled(msg, MngId::AlternateTimeOffsetProperties)
    }
    /// EXTERNAL_PORT_CONFIGURATION_ENABLED callback.
    fn external_port_configuration_enabled(
        &mut self,
        msg: &Message,
        tlv: &ExternalPortConfigurationEnabled,
    ) {
        self.unhandled(msg, MngId::ExternalPortConfigurationEnabled)
    }
    /// MASTER_ONLY callback.
    fn master_only(&mut self, msg: &Message, tlv: &MasterOnly) {
        self.unhandled(msg, MngId::MasterOnly)
    }
    /// HOLDOVER_UPGRADE_ENABLE callback.
    fn holdover_upgrade_enable(&mut self, msg: &Message, tlv: &HoldoverUpgradeEnable) {
        self.unhandled(msg, MngId::HoldoverUpgradeEnable)
    }
    /// EXT_PORT_CONFIG_PORT_DATA_SET callback.
    fn ext_port_config_port_data_set(&mut self, msg: &Message, tlv: &ExtPortConfigPortDataSet) {
        self.unhandled(msg, MngId::ExtPortConfigPortDataSet)
    }
    /// TRANSPARENT_CLOCK_DEFAULT_DATA_SET callback.
    fn transparent_clock_default_data_set(
        &mut self,
        msg: &Message,
        tlv: &TransparentClockDefaultDataSet,
    ) {
        self.unhandled(msg, MngId::TransparentClockDefaultDataSet)
    }
    /// TRANSPARENT_CLOCK_PORT_DATA_SET callback.
    fn transparent_clock_port_data_set(
        &mut self,
        msg: &Message,
        tlv: &TransparentClockPortDataSet,
    ) {
        self.unhandled(msg, MngId::TransparentClockPortDataSet)
    }
    /// PRIMARY_DOMAIN callback.
    fn primary_domain(&mut self, msg: &Message, tlv: &PrimaryDomain) {
        self.unhandled(msg, MngId::PrimaryDomain)
    }
    /// DELAY_MECHANISM callback.
    fn delay_mechanism(&mut self, msg: &Message, tlv: &DelayMechanism) {
        self.unhandled(msg, MngId::DelayMechanism)
    }
    /// LOG_MIN_PDELAY_REQ_INTERVAL callback.
    fn log_min_pdelay_req_interval(&mut self, msg: &Message, tlv: &LogMinPdelayReqInterval) {
        self.unhandled(msg, MngId::LogMinPdelayReqInterval)
    }
    /// TIME_STATUS_NP callback.
    fn time_status_np(&mut self, msg: &Message, tlv: &TimeStatusNp) {
        self.unhandled(msg, MngId::TimeStatusNp)
    }
    /// GRANDMASTER_SETTINGS_NP callback.
    fn grandmaster_settings_np(&mut self, msg: &Message, tlv: &GrandmasterSettingsNp) {
        self.unhandled(msg, MngId::GrandmasterSettingsNp)
    }
    /// PORT_DATA_SET_NP callback.
    fn port_data_set_np(&mut self, msg: &Message, tlv: &PortDataSetNp) {
        self.unhandled(msg, MngId::PortDataSetNp)
    }
    /// SUBSCRIBE_EVENTS_NP callback.
    fn subscribe_events_np(&mut self, msg: &Message, tlv: &SubscribeEventsNp) {
        self.unhandled(msg, MngId::SubscribeEventsNp)
    }
    /// PORT_PROPERTIES_NP callback.
    fn port_properties_np(&mut self, msg: &Message, tlv: &PortPropertiesNp) {
        self.unhandled(msg, MngId::PortPropertiesNp)
    }
    /// PORT_STATS_NP callback.
    fn port_stats_np(&mut self, msg: &Message, tlv: &PortStatsNp) {
        self.unhandled(msg, MngId::PortStatsNp)
    }
    /// SYNCHRONIZATION_UNCERTAIN_NP callback.
    fn synchronization_uncertain_np(&mut self, msg: &Message, tlv: &SynchronizationUncertainNp) {
        self.unhandled(msg, MngId::SynchronizationUncertainNp)
    }
}

/// Per-id population callbacks for management TLVs to send.
///
/// Each callback receives a default-constructed value and returns `true`
/// after filling it. [`MngTlvBuilder::build_tlv`] yields
/// [`MngError::Mem`] when the callback for the requested id is left at its
/// default, i.e. the typed value cannot be materialized.
#[allow(unused_variables)]
pub trait MngTlvBuilder {
    /// Prepare `msg` to send `action` for `id`: GET and empty-payload ids
    /// go straight to [`Message::set_action`]; everything else runs the
    /// population callback and attaches the value.
    fn build_tlv(
        &mut self,
        msg: &mut Message,
        action: ActionField,
        id: MngId,
    ) -> Result<(), MngError> {
        if action == ActionField::Get || id.is_empty() {
            return msg.set_action(action, id);
        }
        let Some(mut tlv) = MngTlv::default_for(id) else {
            return msg.set_action(action, id);
        };
        let filled = match &mut tlv {
            MngTlv::ClockDescription(d) => self.clock_description(d),
            MngTlv::UserDescription(d) => self.user_description(d),
            MngTlv::Initialize(d) => self.initialize(d),
            MngTlv::FaultLog(d) => self.fault_log(d),
            MngTlv::DefaultDataSet(d) => self.default_data_set(d),
            MngTlv::CurrentDataSet(d) => self.current_data_set(d),
            MngTlv::ParentDataSet(d) => self.parent_data_set(d),
            MngTlv::TimePropertiesDataSet(d) => self.time_properties_data_set(d),
            MngTlv::PortDataSet(d) => self.port_data_set(d),
            MngTlv::Priority1(d) => self.priority1(d),
            MngTlv::Priority2(d) => self.priority2(d),
            MngTlv::Domain(d) => self.domain(d),
            MngTlv::SlaveOnly(d) => self.slave_only(d),
            MngTlv::LogAnnounceInterval(d) => self.log_announce_interval(d),
            MngTlv::AnnounceReceiptTimeout(d) => self.announce_receipt_timeout(d),
            MngTlv::LogSyncInterval(d) => self.log_sync_interval(d),
            MngTlv::VersionNumber(d) => self.version_number(d),
            MngTlv::Time(d) => self.time(d),
            MngTlv::ClockAccuracy(d) => self.clock_accuracy(d),
            MngTlv::UtcProperties(d) => self.utc_properties(d),
            MngTlv::TraceabilityProperties(d) => self.traceability_properties(d),
            MngTlv::TimescaleProperties(d) => self.timescale_properties(d),
            MngTlv::UnicastNegotiationEnable(d) => self.unicast_negotiation_enable(d),
            MngTlv::PathTraceList(d) => self.path_trace_list(d),
            MngTlv::PathTraceEnable(d) => self.path_trace_enable(d),
            MngTlv::GrandmasterClusterTable(d) => self.grandmaster_cluster_table(d),
            MngTlv::UnicastMasterTable(d) => self.unicast_master_table(d),
            MngTlv::UnicastMasterMaxTableSize(d) => self.unicast_master_max_table_size(d),
            MngTlv::AcceptableMasterTable(d) => self.acceptable_master_table(d),
            MngTlv::AcceptableMasterTableEnabled(d) => self.acceptable_master_table_enabled(d),
            MngTlv::AcceptableMasterMaxTableSize(d) => self.acceptable_master_max_table_size(d),
            MngTlv::AlternateMaster(d) => self.alternate_master(d),
            MngTlv::AlternateTimeOffsetEnable(d) => self.alternate_time_offset_enable(d),
            MngTlv::AlternateTimeOffsetName(d) => self.alternate_time_offset_name(d),
            MngTlv::AlternateTimeOffsetMaxKey(d) => self.alternate_time_offset_max_key(d),
            MngTlv::AlternateTimeOffsetProperties(d) => self.alternate_time_offset_properties(d),
            MngTlv::ExternalPortConfigurationEnabled(d) => {
                self.external_port_configuration_enabled(d)
            }
            MngTlv::MasterOnly(d) => self.master_only(d),
            MngTlv::HoldoverUpgradeEnable(d) => self.holdover_upgrade_enable(d),
            MngTlv::ExtPortConfigPortDataSet(d) => self.ext_port_config_port_data_set(d),
            MngTlv::TransparentClockDefaultDataSet(d) => {
                self.transparent_clock_default_data_set(d)
            }
            MngTlv::TransparentClockPortDataSet(d) => self.transparent_clock_port_data_set(d),
            MngTlv::PrimaryDomain(d) => self.primary_domain(d),
            MngTlv::DelayMechanism(d) => self.delay_mechanism(d),
            MngTlv::LogMinPdelayReqInterval(d) => self.log_min_pdelay_req_interval(d),
            MngTlv::TimeStatusNp(d) => self.time_status_np(d),
            MngTlv::GrandmasterSettingsNp(d) => self.grandmaster_settings_np(d),
            MngTlv::PortDataSetNp(d) => self.port_data_set_np(d),
            MngTlv::SubscribeEventsNp(d) => self.subscribe_events_np(d),
            MngTlv::PortPropertiesNp(d) => self.port_properties_np(d),
            MngTlv::PortStatsNp(d) => self.port_stats_np(d),
            MngTlv::SynchronizationUncertainNp(d) => self.synchronization_uncertain_np(d),
        };
        if !filled {
            return Err(MngError::Mem);
        }
        msg.set_action_with_data(action, tlv)
    }

    /// Populate a CLOCK_DESCRIPTION value.
    fn clock_description(&mut self, tlv: &mut ClockDescription) -> bool {
        false
    }
    /// Populate a USER_DESCRIPTION value.
    fn user_description(&mut self, tlv: &mut UserDescription) -> bool {
        false
    }
    /// Populate an INITIALIZE value.
    fn initialize(&mut self, tlv: &mut Initialize) -> bool {
        false
    }
    /// Populate a FAULT_LOG value.
    fn fault_log(&mut self, tlv: &mut FaultLog) -> bool {
        false
    }
    /// Populate a DEFAULT_DATA_SET value.
    fn default_data_set(&mut self, tlv: &mut DefaultDataSet) -> bool {
        false
    }
    /// Populate a CURRENT_DATA_SET value.
    fn current_data_set(&mut self, tlv: &mut CurrentDataSet) -> bool {
        false
    }
    /// Populate a PARENT_DATA_SET value.
    fn parent_data_set(&mut self, tlv: &mut ParentDataSet) -> bool {
        false
    }
    /// Populate a TIME_PROPERTIES_DATA_SET value.
    fn time_properties_data_set(&mut self, tlv: &mut TimePropertiesDataSet) -> bool {
        false
    }
    /// Populate a PORT_DATA_SET value.
    fn port_data_set(&mut self, tlv: &mut PortDataSet) -> bool {
        false
    }
    /// Populate a PRIORITY1 value.
    fn priority1(&mut self, tlv: &mut Priority1) -> bool {
        false
    }
    /// Populate a PRIORITY2 value.
    fn priority2(&mut self, tlv: &mut Priority2) -> bool {
        false
    }
    /// Populate a DOMAIN value.
    fn domain(&mut self, tlv: &mut Domain) -> bool {
        false
    }
    /// Populate a SLAVE_ONLY value.
    fn slave_only(&mut self, tlv: &mut SlaveOnly) -> bool {
        false
    }
    /// Populate a LOG_ANNOUNCE_INTERVAL value.
    fn log_announce_interval(&mut self, tlv: &mut LogAnnounceInterval) -> bool {
        false
    }
    /// Populate an ANNOUNCE_RECEIPT_TIMEOUT value.
    fn announce_receipt_timeout(&mut self, tlv: &mut AnnounceReceiptTimeout) -> bool {
        false
    }
    /// Populate a LOG_SYNC_INTERVAL value.
    fn log_sync_interval(&mut self, tlv: &mut LogSyncInterval) -> bool {
        false
    }
    /// Populate a VERSION_NUMBER value.
    fn version_number(&mut self, tlv: &mut VersionNumber) -> bool {
        false
    }
    /// Populate a TIME value.
    fn time(&mut self, tlv: &mut Time) -> bool {
        false
    }
    /// Populate a CLOCK_ACCURACY value.
    fn clock_accuracy(&mut self, tlv: &mut ClockAccuracyTlv) -> bool {
        false
    }
    /// Populate a UTC_PROPERTIES value.
    fn utc_properties(&mut self, tlv: &mut UtcProperties) -> bool {
        false
    }
    /// Populate a TRACEABILITY_PROPERTIES value.
    fn traceability_properties(&mut self, tlv: &mut TraceabilityProperties) -> bool {
        false
    }
    /// Populate a TIMESCALE_PROPERTIES value.
    fn timescale_properties(&mut self, tlv: &mut TimescaleProperties) -> bool {
        false
    }
    /// Populate a UNICAST_NEGOTIATION_ENABLE value.
    fn unicast_negotiation_enable(&mut self, tlv: &mut UnicastNegotiationEnable) -> bool {
        false
    }
    /// Populate a PATH_TRACE_LIST value.
    fn path_trace_list(&mut self, tlv: &mut PathTraceList) -> bool {
        false
    }
    /// Populate a PATH_TRACE_ENABLE value.
    fn path_trace_enable(&mut self, tlv: &mut PathTraceEnable) -> bool {
        false
    }
    /// Populate a GRANDMASTER_CLUSTER_TABLE value.
    fn grandmaster_cluster_table(&mut self, tlv: &mut GrandmasterClusterTable) -> bool {
        false
    }
    /// Populate a UNICAST_MASTER_TABLE value.
    fn unicast_master_table(&mut self, tlv: &mut UnicastMasterTable) -> bool {
        false
    }
    /// Populate a UNICAST_MASTER_MAX_TABLE_SIZE value.
    fn unicast_master_max_table_size(&mut self, tlv: &mut UnicastMasterMaxTableSize) -> bool {
        false
    }
    /// Populate an ACCEPTABLE_MASTER_TABLE value.
    fn acceptable_master_table(&mut self, tlv: &mut AcceptableMasterTable) -> bool {
        false
    }
    /// Populate an ACCEPTABLE_MASTER_TABLE_ENABLED value.
    fn acceptable_master_table_enabled(&mut self, tlv: &mut AcceptableMasterTableEnabled) -> bool {
        false
    }
    /// Populate an ACCEPTABLE_MASTER_MAX_TABLE_SIZE value.
    fn acceptable_master_max_table_size(
        &mut self,
        tlv: &mut AcceptableMasterMaxTableSize,
    ) -> bool {
        false
    }
    /// Populate an ALTERNATE_MASTER value.
    fn alternate_master(&mut self, tlv: &mut AlternateMaster) -> bool {
        false
    }
    /// Populate an ALTERNATE_TIME_OFFSET_ENABLE value.
    fn alternate_time_offset_enable(&mut self, tlv: &mut AlternateTimeOffsetEnable) -> bool {
        false
    }
    /// Populate an ALTERNATE_TIME_OFFSET_NAME value.
    fn alternate_time_offset_name(&mut self, tlv: &mut AlternateTimeOffsetName) -> bool {
        false
    }
    /// Populate an ALTERNATE_TIME_OFFSET_MAX_KEY value.
    fn alternate_time_offset_max_key(&mut self, tlv: &mut AlternateTimeOffsetMaxKey) -> bool {
        false
    }
    /// Populate an ALTERNATE_TIME_OFFSET_PROPERTIES value.
    fn alternate_time_offset_properties(
        &mut self,
        tlv: &mut AlternateTimeOffsetProperties,
    ) -> bool {
        false
    }
    /// Populate an EXTERNAL_PORT_CONFIGURATION_ENABLED value.
    fn external_port_configuration_enabled(
        &mut self,
        tlv: &mut ExternalPortConfigurationEnabled,
    ) -> bool {
        false
    }
    /// Populate a MASTER_ONLY value.
    fn master_only(&mut self, tlv: &mut MasterOnly) -> bool {
        false
    }
    /// Populate a HOLDOVER_UPGRADE_ENABLE value.
    fn holdover_upgrade_enable(&mut self, tlv: &mut HoldoverUpgradeEnable) -> bool {
        false
    }
    /// Populate an EXT_PORT_CONFIG_PORT_DATA_SET value.
    fn ext_port_config_port_data_set(&mut self, tlv: &mut ExtPortConfigPortDataSet) -> bool {
        false
    }
    /// Populate a TRANSPARENT_CLOCK_DEFAULT_DATA_SET value.
    fn transparent_clock_default_data_set(
        &mut self,
        tlv: &mut TransparentClockDefaultDataSet,
    ) -> bool {
        false
    }
    /// Populate a TRANSPARENT_CLOCK_PORT_DATA_SET value.
    fn transparent_clock_port_data_set(&mut self, tlv: &mut TransparentClockPortDataSet) -> bool {
        false
    }
    /// Populate a PRIMARY_DOMAIN value.
    fn primary_domain(&mut self, tlv: &mut PrimaryDomain) -> bool {
        false
    }
    /// Populate a DELAY_MECHANISM value.
    fn delay_mechanism(&mut self, tlv: &mut DelayMechanism) -> bool {
        false
    }
    /// Populate a LOG_MIN_PDELAY_REQ_INTERVAL value.
    fn log_min_pdelay_req_interval(&mut self, tlv: &mut LogMinPdelayReqInterval) -> bool {
        false
    }
    /// Populate a TIME_STATUS_NP value.
    fn time_status_np(&mut self, tlv: &mut TimeStatusNp) -> bool {
        false
    }
    /// Populate a GRANDMASTER_SETTINGS_NP value.
    fn grandmaster_settings_np(&mut self, tlv: &mut GrandmasterSettingsNp) -> bool {
        false
    }
    /// Populate a PORT_DATA_SET_NP value.
    fn port_data_set_np(&mut self, tlv: &mut PortDataSetNp) -> bool {
        false
    }
    /// Populate a SUBSCRIBE_EVENTS_NP value.
    fn subscribe_events_np(&mut self, tlv: &mut SubscribeEventsNp) -> bool {
        false
    }
    /// Populate a PORT_PROPERTIES_NP value.
    fn port_properties_np(&mut self, tlv: &mut PortPropertiesNp) -> bool {
        false
    }
    /// Populate a PORT_STATS_NP value.
    fn port_stats_np(&mut self, tlv: &mut PortStatsNp) -> bool {
        false
    }
    /// Populate a SYNCHRONIZATION_UNCERTAIN_NP value.
    fn synchronization_uncertain_np(&mut self, tlv: &mut SynchronizationUncertainNp) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::MsgParams;

    #[derive(Default)]
    struct Recorder {
        priority: Option<u8>,
        unhandled: Vec<MngId>,
        empty_frames: usize,
    }

    impl MngDispatcher for Recorder {
        fn priority1(&mut self, _msg: &Message, tlv: &Priority1) {
            self.priority = Some(tlv.priority1);
        }

        fn unhandled(&mut self, _msg: &Message, id: MngId) {
            self.unhandled.push(id);
        }

        fn no_tlv(&mut self, _msg: &Message) {
            self.empty_frames += 1;
        }
    }

    struct Priority1Builder(u8);

    impl MngTlvBuilder for Priority1Builder {
        fn priority1(&mut self, tlv: &mut Priority1) -> bool {
            tlv.priority1 = self.0;
            true
        }
    }

    fn responder_params() -> MsgParams {
        MsgParams {
            accept_requests: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_dispatch_routes_overridden_id() {
        let mut msg = Message::with_params(responder_params());
        let mut builder = Priority1Builder(0x80);
        builder
            .build_tlv(&mut msg, ActionField::Set, MngId::Priority1)
            .unwrap();
        msg.build(5).unwrap();
        let buf = msg.send_buffer().to_vec();
        msg.parse(&buf).unwrap();

        let mut rec = Recorder::default();
        rec.dispatch(&msg);
        assert_eq!(rec.priority, Some(0x80));
        assert!(rec.unhandled.is_empty());
    }

    #[test]
    fn test_dispatch_falls_back_to_unhandled() {
        let mut msg = Message::with_params(responder_params());
        msg.set_action_with_data(
            ActionField::Set,
            MngTlv::Domain(Domain { domain_number: 3 }),
        )
        .unwrap();
        msg.build(6).unwrap();
        let buf = msg.send_buffer().to_vec();
        msg.parse(&buf).unwrap();

        let mut rec = Recorder::default();
        rec.dispatch(&msg);
        assert_eq!(rec.unhandled, vec![MngId::Domain]);
        assert_eq!(rec.priority, None);
    }

    #[test]
    fn test_dispatch_no_tlv_for_empty_frame() {
        let mut msg = Message::with_params(responder_params());
        msg.set_action(ActionField::Command, MngId::EnablePort)
            .unwrap();
        msg.build(7).unwrap();
        let buf = msg.send_buffer().to_vec();
        msg.parse(&buf).unwrap();

        let mut rec = Recorder::default();
        rec.dispatch(&msg);
        assert_eq!(rec.empty_frames, 1);
    }

    #[test]
    fn test_builder_default_callback_is_mem() {
        let mut msg = Message::new();
        let mut builder = Priority1Builder(1);
        assert_eq!(
            builder.build_tlv(&mut msg, ActionField::Set, MngId::Priority2),
            Err(MngError::Mem)
        );
    }

    #[test]
    fn test_builder_get_short_circuits() {
        let mut msg = Message::new();
        let mut builder = Priority1Builder(1);
        builder
            .build_tlv(&mut msg, ActionField::Get, MngId::DefaultDataSet)
            .unwrap();
        assert_eq!(msg.tlv_id(), MngId::DefaultDataSet);
        assert_eq!(msg.action(), ActionField::Get);
    }
}
