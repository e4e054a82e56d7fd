use core::convert::Infallible;
use std::{
    collections::VecDeque,
    string::{String, ToString},
    sync::Once,
    vec::Vec,
};

use atat::{asynch::AtatClient, AtatCmd};
use embassy_time::Duration;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use env_logger::Env;
use no_std_net::Ipv4Addr;

use crate::{
    coap::{Block, Method, ProfileId, Request, Response},
    config::NbiotConfig,
    driver::{CellStats, DriverKind, ModemDriver, SignalQuality, UeOption},
    error::Error,
    registration::Status,
    timer::TimerBits,
};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("trace"))
            .is_test(true)
            .init();
    });
}

/// Driver call as recorded by [`MockDriver`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Probe,
    Reboot,
    ConfigureUe(UeOption, bool),
    SetRadio(bool),
    Radio,
    SetGprsAttached(bool),
    GprsAttached,
    SetRegistered(bool),
    RrcConnected,
    RegistrationStatus,
    SetPowerSaveMode(bool),
    PowerSaveMode,
    PowerSaveActive,
    SetT3412,
    T3412,
    SetT3324,
    T3324,
    SignalQuality,
    CellStats,
    CoapSelectProfile(ProfileId),
    CoapSetServer(Ipv4Addr, u16),
    CoapSetUri,
    CoapAddUriPath,
    CoapSetProfileValid(bool),
    CoapSaveProfile(ProfileId),
    CoapLoadProfile(ProfileId),
    CoapSelectAtInterface,
    CoapRequest {
        method: Method,
        len: usize,
        block: Option<Block>,
    },
}

/// Scripted modem driver recording every call.
pub struct MockDriver {
    pub calls: Vec<Call>,
    /// Index into `calls` of the call that fails with [`MockDriver::FAILURE`]
    pub fail_at: Option<usize>,
    /// Number of probes failing before the modem answers
    pub failing_probes: usize,
    /// Number of status queries failing before the modem answers
    pub failing_status_queries: usize,
    pub rrc_connected: bool,
    pub registration: Status,
    pub power_save_active: bool,
    pub earfcn: u32,
    pub t3412: TimerBits,
    pub t3324: TimerBits,
    pub coap_code: u16,
}

impl Default for MockDriver {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            fail_at: None,
            failing_probes: 0,
            failing_status_queries: 0,
            rrc_connected: false,
            registration: Status::NotRegistering,
            power_save_active: false,
            earfcn: 3500,
            t3412: TimerBits::try_from("00100001").unwrap(),
            t3324: TimerBits::try_from("00000101").unwrap(),
            coap_code: 69,
        }
    }
}

impl MockDriver {
    pub const FAILURE: u16 = 7;

    fn record(&mut self, call: Call) -> Result<(), Error> {
        let index = self.calls.len();
        self.calls.push(call);
        if self.fail_at == Some(index) {
            Err(Error::Driver(Self::FAILURE))
        } else {
            Ok(())
        }
    }
}

impl ModemDriver for MockDriver {
    const KIND: DriverKind = DriverKind::SaraN2;

    async fn probe(&mut self) -> Result<(), Error> {
        self.record(Call::Probe)?;
        if self.failing_probes > 0 {
            self.failing_probes -= 1;
            return Err(Error::Driver(Self::FAILURE));
        }
        Ok(())
    }

    async fn reboot(&mut self) -> Result<(), Error> {
        self.record(Call::Reboot)
    }

    async fn configure_ue(&mut self, option: UeOption, enable: bool) -> Result<(), Error> {
        self.record(Call::ConfigureUe(option, enable))
    }

    async fn set_radio(&mut self, on: bool) -> Result<(), Error> {
        self.record(Call::SetRadio(on))
    }

    async fn radio(&mut self) -> Result<bool, Error> {
        self.record(Call::Radio)?;
        Ok(true)
    }

    async fn set_gprs_attached(&mut self, attached: bool) -> Result<(), Error> {
        self.record(Call::SetGprsAttached(attached))
    }

    async fn gprs_attached(&mut self) -> Result<bool, Error> {
        self.record(Call::GprsAttached)?;
        Ok(true)
    }

    async fn set_registered(&mut self, registered: bool) -> Result<(), Error> {
        self.record(Call::SetRegistered(registered))
    }

    async fn rrc_connected(&mut self) -> Result<bool, Error> {
        self.record(Call::RrcConnected)?;
        if self.failing_status_queries > 0 {
            self.failing_status_queries -= 1;
            return Err(Error::Driver(Self::FAILURE));
        }
        Ok(self.rrc_connected)
    }

    async fn registration_status(&mut self) -> Result<Status, Error> {
        self.record(Call::RegistrationStatus)?;
        Ok(self.registration)
    }

    async fn set_power_save_mode(&mut self, enable: bool) -> Result<(), Error> {
        self.record(Call::SetPowerSaveMode(enable))
    }

    async fn power_save_mode(&mut self) -> Result<bool, Error> {
        self.record(Call::PowerSaveMode)?;
        Ok(true)
    }

    async fn power_save_active(&mut self) -> Result<bool, Error> {
        self.record(Call::PowerSaveActive)?;
        Ok(self.power_save_active)
    }

    async fn set_t3412(&mut self, bits: &str) -> Result<(), Error> {
        self.record(Call::SetT3412)?;
        self.t3412 = TimerBits::try_from(bits).map_err(|_| Error::ExceedsMaxValue)?;
        Ok(())
    }

    async fn t3412(&mut self) -> Result<TimerBits, Error> {
        self.record(Call::T3412)?;
        Ok(self.t3412.clone())
    }

    async fn set_t3324(&mut self, bits: &str) -> Result<(), Error> {
        self.record(Call::SetT3324)?;
        self.t3324 = TimerBits::try_from(bits).map_err(|_| Error::ExceedsMaxValue)?;
        Ok(())
    }

    async fn t3324(&mut self) -> Result<TimerBits, Error> {
        self.record(Call::T3324)?;
        Ok(self.t3324.clone())
    }

    async fn signal_quality(&mut self) -> Result<SignalQuality, Error> {
        self.record(Call::SignalQuality)?;
        Ok(SignalQuality { rsrq: 20, rsrp: 45 })
    }

    async fn cell_stats(&mut self) -> Result<CellStats, Error> {
        self.record(Call::CellStats)?;
        Ok(CellStats {
            earfcn: self.earfcn,
            physical_cell_id: 62,
            primary_cell: true,
            rsrp: -563,
            rsrq: -59,
            rssi: -510,
            snr: 128,
        })
    }

    async fn coap_select_profile(&mut self, profile: ProfileId) -> Result<(), Error> {
        self.record(Call::CoapSelectProfile(profile))
    }

    async fn coap_set_server(&mut self, ip: Ipv4Addr, port: u16) -> Result<(), Error> {
        self.record(Call::CoapSetServer(ip, port))
    }

    async fn coap_set_uri(&mut self, _uri: &str) -> Result<(), Error> {
        self.record(Call::CoapSetUri)
    }

    async fn coap_add_uri_path(&mut self) -> Result<(), Error> {
        self.record(Call::CoapAddUriPath)
    }

    async fn coap_set_profile_valid(&mut self, valid: bool) -> Result<(), Error> {
        self.record(Call::CoapSetProfileValid(valid))
    }

    async fn coap_save_profile(&mut self, profile: ProfileId) -> Result<(), Error> {
        self.record(Call::CoapSaveProfile(profile))
    }

    async fn coap_load_profile(&mut self, profile: ProfileId) -> Result<(), Error> {
        self.record(Call::CoapLoadProfile(profile))
    }

    async fn coap_select_at_interface(&mut self) -> Result<(), Error> {
        self.record(Call::CoapSelectAtInterface)
    }

    async fn coap_request(&mut self, request: Request<'_>) -> Result<Response, Error> {
        self.record(Call::CoapRequest {
            method: request.method,
            len: request.payload.map(|p| p.data.len()).unwrap_or(0),
            block: request.block,
        })?;
        Ok(Response {
            code: self.coap_code,
            payload: heapless::Vec::new(),
        })
    }
}

/// GPIO recording every level written to it
#[derive(Debug, Default)]
pub struct RecordingPin {
    pub high: bool,
    pub history: Vec<bool>,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.history.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.history.push(true);
        Ok(())
    }
}

impl InputPin for RecordingPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

#[derive(Default)]
pub struct TestConfig {
    pub reset: Option<RecordingPin>,
    pub vint: Option<RecordingPin>,
}

impl NbiotConfig for TestConfig {
    type ResetPin = RecordingPin;
    type VintPin = RecordingPin;

    const CONNECT_POLL_INTERVAL: Duration = Duration::from_millis(50);

    fn reset_pin(&mut self) -> Option<&mut Self::ResetPin> {
        self.reset.as_mut()
    }

    fn vint_pin(&mut self) -> Option<&mut Self::VintPin> {
        self.vint.as_mut()
    }
}

/// AT client answering from a list of raw responses, recording every
/// command written to it.
pub struct MockAtClient {
    responses: VecDeque<&'static str>,
    sent: Vec<String>,
}

impl MockAtClient {
    pub fn new(responses: &[&'static str]) -> Self {
        Self {
            responses: responses.iter().copied().collect(),
            sent: Vec::new(),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.clone()
    }
}

impl AtatClient for MockAtClient {
    async fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, atat::Error> {
        let mut buf = [0u8; 2048];
        let len = cmd.write(&mut buf);
        self.sent
            .push(String::from_utf8_lossy(&buf[..len]).to_string());

        let response = self.responses.pop_front().unwrap_or("");
        cmd.parse(Ok(response.as_bytes()))
    }
}
