//! u-blox SARA-N2 implementation of [`ModemDriver`] on top of `atat`.

use core::fmt::Write;

use atat::{asynch::AtatClient, AtatCmd, UrcChannel, UrcSubscription};
use embassy_sync::pubsub::WaitResult;
use embassy_time::{with_timeout, Duration};
use heapless::{String, Vec};
use no_std_net::Ipv4Addr;

use crate::{
    coap::{ProfileId, Request, Response, MAX_PAYLOAD_LEN},
    command::{
        coap::{
            types::{CoapCommandType, CoapInterface, CoapPduOption},
            urc::CoapData,
            CoapBlockRequest, CoapPayloadRequest, CoapRequest, RestoreCoapProfile,
            SaveCoapProfile, SelectCoapInterface, SelectCoapProfile, SetCoapPduHeader,
            SetCoapProfileValidity, SetCoapServer, SetCoapUri,
        },
        mobile_control::{
            types::{Functionality, PowerSavingMode, PowerSavingStatusReporting},
            GetModuleFunctionality, GetPowerSavingMode, GetPowerSavingStatus,
            GetSignallingConnectionStatus, SetModuleFunctionality, SetPowerSavingMode,
            SetPowerSavingStatusReporting,
        },
        network_service::{
            types::OperatorSelectionMode, GetCellStatistics, GetSignalQuality,
            SetOperatorSelection,
        },
        psn::{
            types::GPRSAttachedState, GetEPSNetworkRegistrationStatus, GetGPRSAttached,
            SetGPRSAttached,
        },
        system_features::{Reboot, SetUeConfiguration},
        Urc, AT,
    },
    driver::{CellStats, DriverKind, ModemDriver, SignalQuality, UeOption},
    error::Error,
    hex::{decode_hex, encode_hex},
    registration::Status,
    timer::TimerBits,
};

/// Number of URC subscribers the driver takes from the channel
pub const URC_SUBSCRIBERS: usize = 1;

/// Hex encoded CoAP payload, two characters per byte
const HEX_PAYLOAD_LEN: usize = 2 * MAX_PAYLOAD_LEN;

const DEFAULT_COAP_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SaraN2<'sub, AT: AtatClient, const URC_CAPACITY: usize> {
    at: AT,
    urc: UrcSubscription<'sub, Urc, URC_CAPACITY, URC_SUBSCRIBERS>,
    coap_timeout: Duration,
}

impl<'sub, AT: AtatClient, const URC_CAPACITY: usize> SaraN2<'sub, AT, URC_CAPACITY> {
    pub fn new(
        at: AT,
        urc_channel: &'sub UrcChannel<Urc, URC_CAPACITY, URC_SUBSCRIBERS>,
    ) -> Result<Self, Error> {
        Ok(Self {
            at,
            urc: urc_channel.subscribe()?,
            coap_timeout: DEFAULT_COAP_TIMEOUT,
        })
    }

    /// Time to wait for the `+UCOAPCR`/`+UCOAPCD` URCs of a CoAP request
    pub fn with_coap_timeout(mut self, timeout: Duration) -> Self {
        self.coap_timeout = timeout;
        self
    }

    /// Enable the `+NPSMR` report, required for reading the current power
    /// saving state.
    pub async fn init(&mut self) -> Result<(), Error> {
        debug!("Initializing SARA-N2");
        self.send(&SetPowerSavingStatusReporting {
            n: PowerSavingStatusReporting::Enabled,
        })
        .await?;
        Ok(())
    }

    async fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, Error> {
        self.at.send(cmd).await.map_err(|e| {
            error!("AT command failed: {:?}", e);
            Error::Atat(e)
        })
    }

    async fn wait_for_coap_response(
        &mut self,
        command: CoapCommandType,
    ) -> Result<Response, Error> {
        let mut exchange = CoapExchange::new(command);
        loop {
            match self.urc.next_message().await {
                WaitResult::Message(urc) => {
                    if let Some(result) = exchange.handle(urc) {
                        return result;
                    }
                }
                WaitResult::Lagged(n) => warn!("Lagged behind {} URCs", n),
            }
        }
    }
}

/// Collects the two URCs answering one `+UCOAPC` request.
struct CoapExchange {
    command: CoapCommandType,
    accepted: bool,
    response: Option<Response>,
}

impl CoapExchange {
    fn new(command: CoapCommandType) -> Self {
        Self {
            command,
            accepted: false,
            response: None,
        }
    }

    /// Feed one URC, returning the outcome once it is known
    fn handle(&mut self, urc: Urc) -> Option<Result<Response, Error>> {
        match urc {
            Urc::CoapCommandResult(result) => {
                if result.command != self.command as u8 {
                    trace!("Ignoring result of CoAP command {}", result.command);
                    return None;
                }
                if result.status == 0 {
                    error!("CoAP request {:?} failed", self.command);
                    return Some(Err(Error::CoapRequestFailed));
                }
                self.accepted = true;
            }
            Urc::CoapData(data) => match decode_response(data) {
                Ok(response) => self.response = Some(response),
                Err(e) => return Some(Err(e)),
            },
        }

        if self.accepted {
            self.response.take().map(Ok)
        } else {
            None
        }
    }
}

fn decode_response(data: CoapData) -> Result<Response, Error> {
    let payload = match data.payload {
        Some(hex) => decode_hex(&hex).map_err(|e| {
            error!("Malformed CoAP payload: {:?}", e);
            Error::InvalidResponse
        })?,
        None => Vec::new(),
    };

    Ok(Response {
        code: data.code,
        payload,
    })
}

fn profile_arg(profile: ProfileId) -> Result<String<1>, Error> {
    let mut arg = String::new();
    write!(arg, "{}", profile.0).map_err(|_| Error::ExceedsMaxValue)?;
    Ok(arg)
}

fn timer_arg(bits: &str) -> Result<TimerBits, Error> {
    TimerBits::try_from(bits).map_err(|_| Error::ExceedsMaxValue)
}

impl<'sub, AT: AtatClient, const URC_CAPACITY: usize> ModemDriver
    for SaraN2<'sub, AT, URC_CAPACITY>
{
    const KIND: DriverKind = DriverKind::SaraN2;

    async fn probe(&mut self) -> Result<(), Error> {
        self.send(&AT).await?;
        Ok(())
    }

    async fn reboot(&mut self) -> Result<(), Error> {
        self.send(&Reboot).await?;
        Ok(())
    }

    async fn configure_ue(&mut self, option: UeOption, enable: bool) -> Result<(), Error> {
        self.send(&SetUeConfiguration::new(option.into(), enable))
            .await?;
        Ok(())
    }

    async fn set_radio(&mut self, on: bool) -> Result<(), Error> {
        let fun = if on {
            Functionality::Full
        } else {
            Functionality::Minimum
        };
        self.send(&SetModuleFunctionality { fun }).await?;
        Ok(())
    }

    async fn radio(&mut self) -> Result<bool, Error> {
        let res = self.send(&GetModuleFunctionality).await?;
        Ok(res.fun == Functionality::Full)
    }

    async fn set_gprs_attached(&mut self, attached: bool) -> Result<(), Error> {
        let state = if attached {
            GPRSAttachedState::Attached
        } else {
            GPRSAttachedState::Detached
        };
        self.send(&SetGPRSAttached { state }).await?;
        Ok(())
    }

    async fn gprs_attached(&mut self) -> Result<bool, Error> {
        let res = self.send(&GetGPRSAttached).await?;
        Ok(res.state == GPRSAttachedState::Attached)
    }

    async fn set_registered(&mut self, registered: bool) -> Result<(), Error> {
        let mode = if registered {
            OperatorSelectionMode::Automatic
        } else {
            OperatorSelectionMode::Deregister
        };
        self.send(&SetOperatorSelection { mode }).await?;
        Ok(())
    }

    async fn rrc_connected(&mut self) -> Result<bool, Error> {
        let res = self.send(&GetSignallingConnectionStatus).await?;
        Ok(res.mode == 1)
    }

    async fn registration_status(&mut self) -> Result<Status, Error> {
        let res = self.send(&GetEPSNetworkRegistrationStatus).await?;
        Ok(Status::from(res.stat))
    }

    async fn set_power_save_mode(&mut self, enable: bool) -> Result<(), Error> {
        let mode = if enable {
            PowerSavingMode::Enabled
        } else {
            PowerSavingMode::Disabled
        };
        self.send(&SetPowerSavingMode::mode(mode)).await?;
        Ok(())
    }

    async fn power_save_mode(&mut self) -> Result<bool, Error> {
        let res = self.send(&GetPowerSavingMode).await?;
        Ok(res.mode == PowerSavingMode::Enabled)
    }

    async fn power_save_active(&mut self) -> Result<bool, Error> {
        let res = self.send(&GetPowerSavingStatus).await?;
        Ok(res.mode == Some(1))
    }

    async fn set_t3412(&mut self, bits: &str) -> Result<(), Error> {
        let cmd = SetPowerSavingMode::mode(PowerSavingMode::Enabled)
            .with_periodic_tau(timer_arg(bits)?);
        self.send(&cmd).await?;
        Ok(())
    }

    async fn t3412(&mut self) -> Result<TimerBits, Error> {
        let res = self.send(&GetPowerSavingMode).await?;
        res.periodic_tau.ok_or(Error::InvalidResponse)
    }

    async fn set_t3324(&mut self, bits: &str) -> Result<(), Error> {
        let cmd = SetPowerSavingMode::mode(PowerSavingMode::Enabled)
            .with_active_time(timer_arg(bits)?);
        self.send(&cmd).await?;
        Ok(())
    }

    async fn t3324(&mut self) -> Result<TimerBits, Error> {
        let res = self.send(&GetPowerSavingMode).await?;
        res.active_time.ok_or(Error::InvalidResponse)
    }

    async fn signal_quality(&mut self) -> Result<SignalQuality, Error> {
        let res = self.send(&GetSignalQuality).await?;
        Ok(SignalQuality {
            rsrq: res.rsrq,
            rsrp: res.rsrp,
        })
    }

    async fn cell_stats(&mut self) -> Result<CellStats, Error> {
        let res = self.send(&GetCellStatistics::cell()).await?;
        Ok(CellStats {
            earfcn: res.earfcn,
            physical_cell_id: res.physical_cell_id,
            primary_cell: res.primary_cell != 0,
            rsrp: res.rsrp,
            rsrq: res.rsrq,
            rssi: res.rssi,
            snr: res.snr,
        })
    }

    async fn coap_select_profile(&mut self, profile: ProfileId) -> Result<(), Error> {
        self.send(&SelectCoapProfile::new(profile_arg(profile)?))
            .await?;
        Ok(())
    }

    async fn coap_set_server(&mut self, ip: Ipv4Addr, port: u16) -> Result<(), Error> {
        let mut ip_arg = String::new();
        write!(ip_arg, "{}", ip).map_err(|_| Error::Overflow)?;
        let mut port_arg = String::new();
        write!(port_arg, "{}", port).map_err(|_| Error::Overflow)?;

        self.send(&SetCoapServer::new(ip_arg, port_arg)).await?;
        Ok(())
    }

    async fn coap_set_uri(&mut self, uri: &str) -> Result<(), Error> {
        self.send(&SetCoapUri::new(uri)).await?;
        Ok(())
    }

    async fn coap_add_uri_path(&mut self) -> Result<(), Error> {
        self.send(&SetCoapPduHeader::new(CoapPduOption::UriPath, true))
            .await?;
        Ok(())
    }

    async fn coap_set_profile_valid(&mut self, valid: bool) -> Result<(), Error> {
        self.send(&SetCoapProfileValidity::new(valid)).await?;
        Ok(())
    }

    async fn coap_save_profile(&mut self, profile: ProfileId) -> Result<(), Error> {
        self.send(&SaveCoapProfile::new(profile_arg(profile)?))
            .await?;
        Ok(())
    }

    async fn coap_load_profile(&mut self, profile: ProfileId) -> Result<(), Error> {
        self.send(&RestoreCoapProfile::new(profile_arg(profile)?))
            .await?;
        Ok(())
    }

    async fn coap_select_at_interface(&mut self) -> Result<(), Error> {
        self.send(&SelectCoapInterface {
            interface: CoapInterface::AtCommands,
        })
        .await?;
        Ok(())
    }

    async fn coap_request(&mut self, request: Request<'_>) -> Result<Response, Error> {
        let command = CoapCommandType::from(request.method);

        // Drop URCs left over from an earlier, timed out request
        while self.urc.try_next_message_pure().is_some() {}

        match (request.payload, request.block) {
            (None, _) => {
                self.send(&CoapRequest { command }).await?;
            }
            (Some(payload), block) => {
                let hex: String<HEX_PAYLOAD_LEN> =
                    encode_hex(payload.data).map_err(|_| Error::ExceedsMaxValue)?;
                let format = payload.format as u8;

                if let Some(block) = block {
                    debug!(
                        "CoAP {:?} block {} ({} bytes, more: {})",
                        command,
                        block.number,
                        payload.data.len(),
                        block.more
                    );
                    self.send(&CoapBlockRequest {
                        command,
                        payload: &hex,
                        format,
                        block: block.number,
                        more: block.more as u8,
                    })
                    .await?;
                } else {
                    self.send(&CoapPayloadRequest {
                        command,
                        payload: &hex,
                        format,
                    })
                    .await?;
                }
            }
        }

        with_timeout(self.coap_timeout, self.wait_for_coap_response(command))
            .await
            .map_err(|e| {
                warn!("No CoAP response within {} ms", self.coap_timeout.as_millis());
                Error::from(e)
            })?
    }
}
