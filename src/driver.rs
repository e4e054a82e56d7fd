//! Capability set expected from an NB-IoT modem driver.

use no_std_net::Ipv4Addr;

use crate::{
    coap::{ProfileId, Request, Response},
    error::Error,
    registration::Status,
    timer::TimerBits,
};

/// Identifies the modem driver bound to an interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverKind {
    None,
    SaraN2,
}

/// UE configuration switches toggled with `AT+NCONFIG`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UeOption {
    /// Attach automatically after power-on or reboot, using the network
    /// provided APN
    Autoconnect,
    /// CR_0354_0338 scrambling (operator specific)
    Scrambling,
    /// Scheduling of conflicted NSIB (operator specific)
    SiAvoid,
    /// Combined EPS/IMSI attach
    CombineAttach,
    /// RRC cell reselection
    CellReselection,
    /// Bearer Independent Protocol between SIM and ME
    Bip,
    /// Power the SIM only while it is accessed
    SimPowerSave,
}

/// Serving cell statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CellStats {
    pub earfcn: u32,
    pub physical_cell_id: u16,
    pub primary_cell: bool,
    /// Reference signal received power, in tenths of dBm
    pub rsrp: i32,
    /// Reference signal received quality, in tenths of dB
    pub rsrq: i32,
    /// Received signal strength indicator, in tenths of dBm
    pub rssi: i32,
    /// Signal to noise ratio, in tenths of dB
    pub snr: i32,
}

/// Raw 3GPP signal quality indices, see 3GPP TS 27.007 `+CESQ`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalQuality {
    /// 0..=34, 255 when unknown
    pub rsrq: u8,
    /// 0..=97, 255 when unknown
    pub rsrp: u8,
}

/// Modem driver contract.
///
/// Every method forwards exactly one operation to the modem and returns the
/// driver's failure unchanged. Retrying is left to the caller.
#[allow(async_fn_in_trait)]
pub trait ModemDriver {
    const KIND: DriverKind;

    /// Trivial request the modem answers as soon as it is up
    async fn probe(&mut self) -> Result<(), Error>;
    async fn reboot(&mut self) -> Result<(), Error>;

    async fn configure_ue(&mut self, option: UeOption, enable: bool) -> Result<(), Error>;

    async fn set_radio(&mut self, on: bool) -> Result<(), Error>;
    async fn radio(&mut self) -> Result<bool, Error>;
    async fn set_gprs_attached(&mut self, attached: bool) -> Result<(), Error>;
    async fn gprs_attached(&mut self) -> Result<bool, Error>;
    async fn set_registered(&mut self, registered: bool) -> Result<(), Error>;

    /// Whether an RRC connection is currently established
    async fn rrc_connected(&mut self) -> Result<bool, Error>;
    async fn registration_status(&mut self) -> Result<Status, Error>;

    async fn set_power_save_mode(&mut self, enable: bool) -> Result<(), Error>;
    async fn power_save_mode(&mut self) -> Result<bool, Error>;
    /// Whether the UE is in power save mode right now
    async fn power_save_active(&mut self) -> Result<bool, Error>;

    async fn set_t3412(&mut self, bits: &str) -> Result<(), Error>;
    async fn t3412(&mut self) -> Result<TimerBits, Error>;
    async fn set_t3324(&mut self, bits: &str) -> Result<(), Error>;
    async fn t3324(&mut self) -> Result<TimerBits, Error>;

    async fn signal_quality(&mut self) -> Result<SignalQuality, Error>;
    async fn cell_stats(&mut self) -> Result<CellStats, Error>;

    async fn coap_select_profile(&mut self, profile: ProfileId) -> Result<(), Error>;
    async fn coap_set_server(&mut self, ip: Ipv4Addr, port: u16) -> Result<(), Error>;
    async fn coap_set_uri(&mut self, uri: &str) -> Result<(), Error>;
    /// Add the Uri-Path option to the PDU header of subsequent requests
    async fn coap_add_uri_path(&mut self) -> Result<(), Error>;
    async fn coap_set_profile_valid(&mut self, valid: bool) -> Result<(), Error>;
    async fn coap_save_profile(&mut self, profile: ProfileId) -> Result<(), Error>;
    async fn coap_load_profile(&mut self, profile: ProfileId) -> Result<(), Error>;
    /// Route CoAP traffic through the AT command interface
    async fn coap_select_at_interface(&mut self) -> Result<(), Error>;
    async fn coap_request(&mut self, request: Request<'_>) -> Result<Response, Error>;
}
