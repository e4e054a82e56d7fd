//! Responses for Mobile equipment control and status Commands
use super::types::*;
use crate::timer::TimerBits;
use atat::atat_derive::AtatResp;

/// 5.3 Set module functionality +CFUN
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct ModuleFunctionality {
    #[at_arg(position = 0)]
    pub fun: Functionality,
}

/// 5.11 Power Saving Mode Setting +CPSMS
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct PowerSavingModeSetting {
    #[at_arg(position = 0)]
    pub mode: PowerSavingMode,
    #[at_arg(position = 1)]
    pub periodic_rau: Option<TimerBits>,
    #[at_arg(position = 2)]
    pub gprs_ready_timer: Option<TimerBits>,
    #[at_arg(position = 3)]
    pub periodic_tau: Option<TimerBits>,
    #[at_arg(position = 4)]
    pub active_time: Option<TimerBits>,
}

/// 5.12 Power saving mode status +NPSMR
///
/// `mode` is only reported while the `+NPSMR` URC is enabled. 0: normal
/// mode, 1: power saving mode.
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct PowerSavingStatus {
    #[at_arg(position = 0)]
    pub n: PowerSavingStatusReporting,
    #[at_arg(position = 1)]
    pub mode: Option<u8>,
}

/// 5.13 Signalling connection status +CSCON
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct SignallingConnectionStatus {
    #[at_arg(position = 0)]
    pub n: u8,
    /// 0: idle, 1: connected
    #[at_arg(position = 1)]
    pub mode: u8,
}
