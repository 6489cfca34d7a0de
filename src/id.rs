// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Management TLV identifiers and their schema registry.
//!
//! Each management id maps to one immutable [`MngIdDesc`] row: the 16-bit
//! wire value, the part of a node the id addresses, the request actions the
//! standard allows, and the dataField size (fixed, or computed from the
//! value being sent). The vendor ids of the linuxptp project live in the
//! implementation-specific range 0xC000 and up and are additionally gated
//! by the `use_linuxptp_tlvs` runtime parameter.

use core::fmt;

use crate::protocol::ActionField;

/// GET is allowed as a request.
pub const A_GET: u8 = 1 << 0;
/// SET is allowed as a request.
pub const A_SET: u8 = 1 << 1;
/// COMMAND is allowed as a request.
pub const A_COMMAND: u8 = 1 << 3;

/// The part of a PTP node a management id addresses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scope {
    /// Addresses the node as a whole.
    All,
    /// Addresses a clock data set.
    Clock,
    /// Addresses a port data set.
    Port,
}

/// dataField size class of a management id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayloadSize {
    /// The dataField always occupies exactly this many octets.
    Fixed(u16),
    /// The dataField size depends on the value being carried.
    Computed,
    /// The id is recognized but carries no processor in this build.
    Unsupported,
}

/// One schema registry row.
#[derive(Clone, Copy, Debug)]
pub struct MngIdDesc {
    /// managementId value on the wire.
    pub wire: u16,
    /// Canonical IEEE 1588 / linuxptp name.
    pub name: &'static str,
    /// What the id addresses.
    pub scope: Scope,
    /// Allowed request actions, a mask over [`A_GET`], [`A_SET`],
    /// [`A_COMMAND`].
    pub allowed: u8,
    /// dataField size class.
    pub size: PayloadSize,
    /// True for linuxptp implementation-specific ids.
    pub linuxptp: bool,
}

const fn desc(
    wire: u16,
    name: &'static str,
    scope: Scope,
    allowed: u8,
    size: PayloadSize,
) -> MngIdDesc {
    MngIdDesc {
        wire,
        name,
        scope,
        allowed,
        size,
        linuxptp: wire >= 0xC000,
    }
}

/// Identifier selecting a management TLV schema.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[allow(missing_docs)]
pub enum MngId {
    #[default]
    NullPtpManagement,
    ClockDescription,
    UserDescription,
    SaveInNonVolatileStorage,
    ResetNonVolatileStorage,
    Initialize,
    FaultLog,
    FaultLogReset,
    DefaultDataSet,
    CurrentDataSet,
    ParentDataSet,
    TimePropertiesDataSet,
    PortDataSet,
    Priority1,
    Priority2,
    Domain,
    SlaveOnly,
    LogAnnounceInterval,
    AnnounceReceiptTimeout,
    LogSyncInterval,
    VersionNumber,
    EnablePort,
    DisablePort,
    Time,
    ClockAccuracy,
    UtcProperties,
    TraceabilityProperties,
    TimescaleProperties,
    UnicastNegotiationEnable,
    PathTraceList,
    PathTraceEnable,
    GrandmasterClusterTable,
    UnicastMasterTable,
    UnicastMasterMaxTableSize,
    AcceptableMasterTable,
    AcceptableMasterTableEnabled,
    AcceptableMasterMaxTableSize,
    AlternateMaster,
    AlternateTimeOffsetEnable,
    AlternateTimeOffsetName,
    AlternateTimeOffsetMaxKey,
    AlternateTimeOffsetProperties,
    ExternalPortConfigurationEnabled,
    MasterOnly,
    HoldoverUpgradeEnable,
    ExtPortConfigPortDataSet,
    TransparentClockDefaultDataSet,
    TransparentClockPortDataSet,
    PrimaryDomain,
    DelayMechanism,
    LogMinPdelayReqInterval,
    TimeStatusNp,
    GrandmasterSettingsNp,
    PortDataSetNp,
    SubscribeEventsNp,
    PortPropertiesNp,
    PortStatsNp,
    SynchronizationUncertainNp,
}

impl MngId {
    /// Every management id this crate knows, in wire-value order.
    pub const ALL: &'static [MngId] = &[
        MngId::NullPtpManagement,
        MngId::ClockDescription,
        MngId::UserDescription,
        MngId::SaveInNonVolatileStorage,
        MngId::ResetNonVolatileStorage,
        MngId::Initialize,
        MngId::FaultLog,
        MngId::FaultLogReset,
        MngId::DefaultDataSet,
        MngId::CurrentDataSet,
        MngId::ParentDataSet,
        MngId::TimePropertiesDataSet,
        MngId::PortDataSet,
        MngId::Priority1,
        MngId::Priority2,
        MngId::Domain,
        MngId::SlaveOnly,
        MngId::LogAnnounceInterval,
        MngId::AnnounceReceiptTimeout,
        MngId::LogSyncInterval,
        MngId::VersionNumber,
        MngId::EnablePort,
        MngId::DisablePort,
        MngId::Time,
        MngId::ClockAccuracy,
        MngId::UtcProperties,
        MngId::TraceabilityProperties,
        MngId::TimescaleProperties,
        MngId::UnicastNegotiationEnable,
        MngId::PathTraceList,
        MngId::PathTraceEnable,
        MngId::GrandmasterClusterTable,
        MngId::UnicastMasterTable,
        MngId::UnicastMasterMaxTableSize,
        MngId::AcceptableMasterTable,
        MngId::AcceptableMasterTableEnabled,
        MngId::AcceptableMasterMaxTableSize,
        MngId::AlternateMaster,
        MngId::AlternateTimeOffsetEnable,
        MngId::AlternateTimeOffsetName,
        MngId::AlternateTimeOffsetMaxKey,
        MngId::AlternateTimeOffsetProperties,
        MngId::ExternalPortConfigurationEnabled,
        MngId::MasterOnly,
        MngId::HoldoverUpgradeEnable,
        MngId::ExtPortConfigPortDataSet,
        MngId::TransparentClockDefaultDataSet,
        MngId::TransparentClockPortDataSet,
        MngId::PrimaryDomain,
        MngId::DelayMechanism,
        MngId::LogMinPdelayReqInterval,
        MngId::TimeStatusNp,
        MngId::GrandmasterSettingsNp,
        MngId::PortDataSetNp,
        MngId::SubscribeEventsNp,
        MngId::PortPropertiesNp,
        MngId::PortStatsNp,
        MngId::SynchronizationUncertainNp,
    ];

    /// The registry row of this id.
    pub fn info(self) -> MngIdDesc {
        use PayloadSize::{Computed, Fixed};
        match self {
            MngId::NullPtpManagement => desc(
                0x0000,
                "NULL_PTP_MANAGEMENT",
                Scope::All,
                A_GET | A_SET | A_COMMAND,
                Fixed(0),
            ),
            MngId::ClockDescription => {
                desc(0x0001, "CLOCK_DESCRIPTION", Scope::Port, A_GET, Computed)
            }
            MngId::UserDescription => desc(
                0x0002,
                "USER_DESCRIPTION",
                Scope::Clock,
                A_GET | A_SET,
                Computed,
            ),
            MngId::SaveInNonVolatileStorage => desc(
                0x0003,
                "SAVE_IN_NON_VOLATILE_STORAGE",
                Scope::Clock,
                A_COMMAND,
                Fixed(0),
            ),
            MngId::ResetNonVolatileStorage => desc(
                0x0004,
                "RESET_NON_VOLATILE_STORAGE",
                Scope::Clock,
                A_COMMAND,
                Fixed(0),
            ),
            MngId::Initialize => desc(0x0005, "INITIALIZE", Scope::Clock, A_COMMAND, Fixed(2)),
            MngId::FaultLog => desc(0x0006, "FAULT_LOG", Scope::Clock, A_GET, Computed),
            MngId::FaultLogReset => {
                desc(0x0007, "FAULT_LOG_RESET", Scope::Clock, A_COMMAND, Fixed(0))
            }
            MngId::DefaultDataSet => {
                desc(0x2000, "DEFAULT_DATA_SET", Scope::Clock, A_GET, Fixed(20))
            }
            MngId::CurrentDataSet => {
                desc(0x2001, "CURRENT_DATA_SET", Scope::Clock, A_GET, Fixed(18))
            }
            MngId::ParentDataSet => desc(0x2002, "PARENT_DATA_SET", Scope::Clock, A_GET, Fixed(32)),
            MngId::TimePropertiesDataSet => desc(
                0x2003,
                "TIME_PROPERTIES_DATA_SET",
                Scope::Clock,
                A_GET,
                Fixed(4),
            ),
            MngId::PortDataSet => desc(0x2004, "PORT_DATA_SET", Scope::Port, A_GET, Fixed(26)),
            MngId::Priority1 => desc(0x2005, "PRIORITY1", Scope::Clock, A_GET | A_SET, Fixed(2)),
            MngId::Priority2 => desc(0x2006, "PRIORITY2", Scope::Clock, A_GET | A_SET, Fixed(2)),
            MngId::Domain => desc(0x2007, "DOMAIN", Scope::Clock, A_GET | A_SET, Fixed(2)),
            MngId::SlaveOnly => desc(0x2008, "SLAVE_ONLY", Scope::Clock, A_GET | A_SET, Fixed(2)),
            MngId::LogAnnounceInterval => desc(
                0x2009,
                "LOG_ANNOUNCE_INTERVAL",
                Scope::Port,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::AnnounceReceiptTimeout => desc(
                0x200A,
                "ANNOUNCE_RECEIPT_TIMEOUT",
                Scope::Port,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::LogSyncInterval => desc(
                0x200B,
                "LOG_SYNC_INTERVAL",
                Scope::Port,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::VersionNumber => desc(
                0x200C,
                "VERSION_NUMBER",
                Scope::Port,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::EnablePort => desc(0x200D, "ENABLE_PORT", Scope::Port, A_COMMAND, Fixed(0)),
            MngId::DisablePort => desc(0x200E, "DISABLE_PORT", Scope::Port, A_COMMAND, Fixed(0)),
            MngId::Time => desc(0x200F, "TIME", Scope::Clock, A_GET | A_SET, Fixed(10)),
            MngId::ClockAccuracy => desc(
                0x2010,
                "CLOCK_ACCURACY",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::UtcProperties => desc(
                0x2011,
                "UTC_PROPERTIES",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(4),
            ),
            MngId::TraceabilityProperties => desc(
                0x2012,
                "TRACEABILITY_PROPERTIES",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::TimescaleProperties => desc(
                0x2013,
                "TIMESCALE_PROPERTIES",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::UnicastNegotiationEnable => desc(
                0x2014,
                "UNICAST_NEGOTIATION_ENABLE",
                Scope::Port,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::PathTraceList => desc(0x2015, "PATH_TRACE_LIST", Scope::Clock, A_GET, Computed),
            MngId::PathTraceEnable => desc(
                0x2016,
                "PATH_TRACE_ENABLE",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::GrandmasterClusterTable => desc(
                0x2017,
                "GRANDMASTER_CLUSTER_TABLE",
                Scope::Clock,
                A_GET | A_SET,
                Computed,
            ),
            MngId::UnicastMasterTable => desc(
                0x2018,
                "UNICAST_MASTER_TABLE",
                Scope::Port,
                A_GET | A_SET,
                Computed,
            ),
            MngId::UnicastMasterMaxTableSize => desc(
                0x2019,
                "UNICAST_MASTER_MAX_TABLE_SIZE",
                Scope::Port,
                A_GET,
                Fixed(2),
            ),
            MngId::AcceptableMasterTable => desc(
                0x201A,
                "ACCEPTABLE_MASTER_TABLE",
                Scope::Clock,
                A_GET | A_SET,
                Computed,
            ),
            MngId::AcceptableMasterTableEnabled => desc(
                0x201B,
                "ACCEPTABLE_MASTER_TABLE_ENABLED",
                Scope::Port,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::AcceptableMasterMaxTableSize => desc(
                0x201C,
                "ACCEPTABLE_MASTER_MAX_TABLE_SIZE",
                Scope::Clock,
                A_GET,
                Fixed(2),
            ),
            MngId::AlternateMaster => desc(
                0x201D,
                "ALTERNATE_MASTER",
                Scope::Port,
                A_GET | A_SET,
                Fixed(4),
            ),
            MngId::AlternateTimeOffsetEnable => desc(
                0x201E,
                "ALTERNATE_TIME_OFFSET_ENABLE",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::AlternateTimeOffsetName => desc(
                0x201F,
                "ALTERNATE_TIME_OFFSET_NAME",
                Scope::Clock,
                A_GET | A_SET,
                Computed,
            ),
            MngId::AlternateTimeOffsetMaxKey => desc(
                0x2020,
                "ALTERNATE_TIME_OFFSET_MAX_KEY",
                Scope::Clock,
                A_GET,
                Fixed(2),
            ),
            MngId::AlternateTimeOffsetProperties => desc(
                0x2021,
                "ALTERNATE_TIME_OFFSET_PROPERTIES",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(16),
            ),
            MngId::ExternalPortConfigurationEnabled => desc(
                0x3000,
                "EXTERNAL_PORT_CONFIGURATION_ENABLED",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::MasterOnly => desc(0x3001, "MASTER_ONLY", Scope::Port, A_GET | A_SET, Fixed(2)),
            MngId::HoldoverUpgradeEnable => desc(
                0x3002,
                "HOLDOVER_UPGRADE_ENABLE",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::ExtPortConfigPortDataSet => desc(
                0x3003,
                "EXT_PORT_CONFIG_PORT_DATA_SET",
                Scope::Port,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::TransparentClockDefaultDataSet => desc(
                0x4000,
                "TRANSPARENT_CLOCK_DEFAULT_DATA_SET",
                Scope::Clock,
                A_GET,
                Fixed(12),
            ),
            MngId::TransparentClockPortDataSet => desc(
                0x4001,
                "TRANSPARENT_CLOCK_PORT_DATA_SET",
                Scope::Port,
                A_GET,
                Fixed(20),
            ),
            MngId::PrimaryDomain => desc(
                0x4002,
                "PRIMARY_DOMAIN",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::DelayMechanism => desc(
                0x6000,
                "DELAY_MECHANISM",
                Scope::Port,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::LogMinPdelayReqInterval => desc(
                0x6001,
                "LOG_MIN_PDELAY_REQ_INTERVAL",
                Scope::Port,
                A_GET | A_SET,
                Fixed(2),
            ),
            MngId::TimeStatusNp => desc(0xC000, "TIME_STATUS_NP", Scope::Clock, A_GET, Fixed(50)),
            MngId::GrandmasterSettingsNp => desc(
                0xC001,
                "GRANDMASTER_SETTINGS_NP",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(8),
            ),
            MngId::PortDataSetNp => desc(
                0xC002,
                "PORT_DATA_SET_NP",
                Scope::Port,
                A_GET | A_SET,
                Fixed(8),
            ),
            MngId::SubscribeEventsNp => desc(
                0xC003,
                "SUBSCRIBE_EVENTS_NP",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(66),
            ),
            MngId::PortPropertiesNp => {
                desc(0xC004, "PORT_PROPERTIES_NP", Scope::Port, A_GET, Computed)
            }
            MngId::PortStatsNp => desc(0xC005, "PORT_STATS_NP", Scope::Port, A_GET, Fixed(266)),
            MngId::SynchronizationUncertainNp => desc(
                0xC006,
                "SYNCHRONIZATION_UNCERTAIN_NP",
                Scope::Clock,
                A_GET | A_SET,
                Fixed(2),
            ),
        }
    }

    /// Resolve a wire managementId value.
    pub fn from_wire(wire: u16) -> Option<MngId> {
        MngId::ALL.iter().copied().find(|id| id.info().wire == wire)
    }

    /// Whether the dataField of a request for this id is empty.
    pub fn is_empty(self) -> bool {
        matches!(self.info().size, PayloadSize::Fixed(0))
    }

    /// Whether `action` is legal for this id. RESPONSE and ACKNOWLEDGE are
    /// legal iff the id permits the mirrored request action (GET/SET pair
    /// with RESPONSE, COMMAND pairs with ACKNOWLEDGE).
    pub fn allowed_action(self, action: ActionField) -> bool {
        let allowed = self.info().allowed;
        match action {
            ActionField::Get => allowed & A_GET != 0,
            ActionField::Set => allowed & A_SET != 0,
            ActionField::Command => allowed & A_COMMAND != 0,
            ActionField::Response => allowed & (A_GET | A_SET) != 0,
            ActionField::Acknowledge => allowed & A_COMMAND != 0,
        }
    }
}

impl fmt::Display for MngId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_are_unique_and_ordered() {
        let wires: Vec<u16> = MngId::ALL.iter().map(|id| id.info().wire).collect();
        let mut sorted = wires.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(wires, sorted);
    }

    #[test]
    fn test_from_wire() {
        assert_eq!(MngId::from_wire(0x2005), Some(MngId::Priority1));
        assert_eq!(MngId::from_wire(0xC005), Some(MngId::PortStatsNp));
        assert_eq!(MngId::from_wire(0xFFFF), None);
        assert_eq!(MngId::from_wire(0x0008), None);
    }

    #[test]
    fn test_vendor_gate_follows_wire_range() {
        for id in MngId::ALL {
            assert_eq!(id.info().linuxptp, id.info().wire >= 0xC000);
        }
    }

    #[test]
    fn test_empty_ids() {
        assert!(MngId::NullPtpManagement.is_empty());
        assert!(MngId::EnablePort.is_empty());
        assert!(MngId::FaultLogReset.is_empty());
        assert!(!MngId::Priority1.is_empty());
        assert!(!MngId::Initialize.is_empty());
    }

    #[test]
    fn test_action_matrix_mirrors() {
        // GET-only id: RESPONSE legal, ACKNOWLEDGE not.
        assert!(MngId::DefaultDataSet.allowed_action(ActionField::Get));
        assert!(!MngId::DefaultDataSet.allowed_action(ActionField::Set));
        assert!(MngId::DefaultDataSet.allowed_action(ActionField::Response));
        assert!(!MngId::DefaultDataSet.allowed_action(ActionField::Acknowledge));
        // COMMAND-only id: ACKNOWLEDGE legal, RESPONSE not.
        assert!(MngId::EnablePort.allowed_action(ActionField::Command));
        assert!(!MngId::EnablePort.allowed_action(ActionField::Get));
        assert!(MngId::EnablePort.allowed_action(ActionField::Acknowledge));
        assert!(!MngId::EnablePort.allowed_action(ActionField::Response));
    }

    #[test]
    fn test_display_canonical_names() {
        assert_eq!(MngId::Priority1.to_string(), "PRIORITY1");
        assert_eq!(MngId::TimeStatusNp.to_string(), "TIME_STATUS_NP");
        assert_eq!(
            MngId::SaveInNonVolatileStorage.to_string(),
            "SAVE_IN_NON_VOLATILE_STORAGE"
        );
    }

    #[test]
    fn test_fixed_sizes_are_even() {
        for id in MngId::ALL {
            if let PayloadSize::Fixed(n) = id.info().size {
                assert_eq!(n % 2, 0, "{} has odd fixed size {}", id, n);
            }
        }
    }
}
