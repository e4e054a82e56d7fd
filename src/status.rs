use crate::registration::Status;

/// Combined view of registration, RRC connection and power save state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionStatus {
    NoNetworkActivity,
    ScanningForBaseStation,
    StartingRegistration,
    RegisteredRrcConnected,
    RegisteredRrcReleased,
    PsmRegistered,
    RegistrationFailed,
    Undefined,
}

impl ConnectionStatus {
    /// Derive the connection status from the raw modem signals.
    ///
    /// `registration` is the `+CEREG` status, `connected` the `+CSCON` RRC
    /// state and `psm` whether the UE is currently in power save mode.
    pub fn resolve(registration: Status, connected: bool, psm: bool) -> Self {
        match (registration, connected, psm) {
            (Status::NotRegistering, false, false) => Self::NoNetworkActivity,
            (Status::Searching, false, false) => Self::ScanningForBaseStation,
            (Status::Searching, true, false) => Self::StartingRegistration,
            (Status::Home | Status::Roaming, true, false) => Self::RegisteredRrcConnected,
            (Status::Home | Status::Roaming, false, false) => Self::RegisteredRrcReleased,
            (Status::Home | Status::Roaming, false, true) => Self::PsmRegistered,
            (Status::Denied, _, _) => Self::RegistrationFailed,
            _ => Self::Undefined,
        }
    }

    /// Whether the UE is attached, either in RRC connected, RRC idle or
    /// power save mode.
    pub fn is_connected(&self) -> bool {
        matches!(
            self,
            Self::RegisteredRrcConnected | Self::RegisteredRrcReleased | Self::PsmRegistered
        )
    }
}
