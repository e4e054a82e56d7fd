//! ### 5 - Mobile equipment control and status Commands
//!

pub mod responses;
pub mod types;

use atat::{atat_derive::AtatCmd, AtatCmd};
use responses::{ModuleFunctionality, PowerSavingModeSetting, PowerSavingStatus, SignallingConnectionStatus};
use types::{Functionality, PowerSavingMode, PowerSavingStatusReporting};

use super::NoResponse;
use crate::timer::TimerBits;

/// 5.3 Set module functionality +CFUN
///
/// Selects the level of functionality <fun> in the MT. On SARA-N2 only
/// minimum (radio off) and full functionality are supported.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CFUN", NoResponse, timeout_ms = 180000)]
pub struct SetModuleFunctionality {
    #[at_arg(position = 0)]
    pub fun: Functionality,
}

/// 5.3 Read module functionality +CFUN
#[derive(Clone, AtatCmd)]
#[at_cmd("+CFUN?", ModuleFunctionality)]
pub struct GetModuleFunctionality;

/// 5.11 Power Saving Mode Setting +CPSMS
///
/// Controls the setting of the UE's power saving mode parameters. Timers are
/// given as one byte in an 8 bit binary string format, see
/// [`crate::timer`]. Omitted timers keep their current value.
///
/// Written by hand: an omitted timer in front of a given one must still
/// occupy its position, e.g. `AT+CPSMS=1,,,"01000011"`.
#[derive(Clone)]
pub struct SetPowerSavingMode {
    pub mode: PowerSavingMode,
    pub periodic_rau: Option<TimerBits>,
    pub gprs_ready_timer: Option<TimerBits>,
    pub periodic_tau: Option<TimerBits>,
    pub active_time: Option<TimerBits>,
}

impl SetPowerSavingMode {
    pub fn mode(mode: PowerSavingMode) -> Self {
        Self {
            mode,
            periodic_rau: None,
            gprs_ready_timer: None,
            periodic_tau: None,
            active_time: None,
        }
    }

    pub fn with_periodic_tau(mut self, bits: TimerBits) -> Self {
        self.periodic_tau = Some(bits);
        self
    }

    pub fn with_active_time(mut self, bits: TimerBits) -> Self {
        self.active_time = Some(bits);
        self
    }
}

impl AtatCmd for SetPowerSavingMode {
    type Response = NoResponse;
    const MAX_LEN: usize = 64;

    fn write(&self, buf: &mut [u8]) -> usize {
        let timers = [
            &self.periodic_rau,
            &self.gprs_ready_timer,
            &self.periodic_tau,
            &self.active_time,
        ];
        // Trailing omitted timers are left out entirely
        let used = timers
            .iter()
            .rposition(|t| t.is_some())
            .map_or(0, |i| i + 1);

        let mut len = 0;
        let mut put = |bytes: &[u8]| {
            buf[len..len + bytes.len()].copy_from_slice(bytes);
            len += bytes.len();
        };

        put(b"AT+CPSMS=");
        put(&[b'0' + self.mode as u8]);
        for timer in &timers[..used] {
            put(b",");
            if let Some(bits) = timer {
                put(b"\"");
                put(bits.as_bytes());
                put(b"\"");
            }
        }
        put(b"\r\n");
        len
    }

    fn parse(
        &self,
        resp: Result<&[u8], atat::InternalError>,
    ) -> Result<Self::Response, atat::Error> {
        match resp {
            Ok(resp) => {
                atat::serde_at::from_slice::<NoResponse>(resp).map_err(|_| atat::Error::Parse)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// 5.11 Read Power Saving Mode Setting +CPSMS
#[derive(Clone, AtatCmd)]
#[at_cmd("+CPSMS?", PowerSavingModeSetting)]
pub struct GetPowerSavingMode;

/// 5.12 Power saving mode status reporting +NPSMR
///
/// Enables the `+NPSMR` report, which is also required for the read
/// command to return the current power saving state.
#[derive(Clone, AtatCmd)]
#[at_cmd("+NPSMR", NoResponse)]
pub struct SetPowerSavingStatusReporting {
    #[at_arg(position = 0)]
    pub n: PowerSavingStatusReporting,
}

/// 5.12 Read power saving mode status +NPSMR
#[derive(Clone, AtatCmd)]
#[at_cmd("+NPSMR?", PowerSavingStatus)]
pub struct GetPowerSavingStatus;

/// 5.13 Signalling connection status +CSCON
///
/// Returns whether the MT is in RRC connected (1) or idle (0) mode.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CSCON?", SignallingConnectionStatus)]
pub struct GetSignallingConnectionStatus;
