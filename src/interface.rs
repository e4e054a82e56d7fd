//! NB-IoT connectivity controller.
//!
//! [`NbiotInterface`] owns one modem driver and drives the modem through
//! startup, network attach and power save configuration. It keeps no
//! connection state of its own; every query goes to the modem.

use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::{InputPin, OutputPin};
use no_std_net::Ipv4Addr;

use crate::{
    band::Band,
    coap::{ContentFormat, Method, Request, Response, MAX_PAYLOAD_LEN, MAX_URI_LEN},
    config::NbiotConfig,
    driver::{CellStats, DriverKind, ModemDriver, SignalQuality, UeOption},
    error::Error,
    module_timing::{boot_time, reset_time},
    registration::Status,
    status::ConnectionStatus,
    timer::{self, ActiveTimeUnit, TauUnit, TimerBits, TimerValue},
};

pub struct NbiotInterface<D: ModemDriver, C: NbiotConfig> {
    driver: Option<D>,
    config: C,
}

impl<D: ModemDriver, C: NbiotConfig> NbiotInterface<D, C> {
    pub fn new(driver: D, config: C) -> Self {
        Self {
            driver: Some(driver),
            config,
        }
    }

    /// Interface without a modem driver. Every modem operation fails with
    /// [`Error::DriverUnknown`] until a driver is bound.
    pub fn unbound(config: C) -> Self {
        Self {
            driver: None,
            config,
        }
    }

    /// Bind `driver`, returning the previously bound one
    pub fn bind(&mut self, driver: D) -> Option<D> {
        self.driver.replace(driver)
    }

    pub fn release(&mut self) -> Option<D> {
        self.driver.take()
    }

    pub fn binding(&self) -> DriverKind {
        if self.driver.is_some() {
            D::KIND
        } else {
            DriverKind::None
        }
    }

    fn driver(&mut self) -> Result<&mut D, Error> {
        self.driver.as_mut().ok_or(Error::DriverUnknown)
    }

    /// Probe the modem every `READY_POLL_INTERVAL` until it answers, or fail
    /// with [`Error::FailToConnect`] once `timeout` has passed.
    pub async fn ready(&mut self, timeout: Duration) -> Result<(), Error> {
        let driver = self.driver()?;
        let deadline = Instant::now() + timeout;

        loop {
            match driver.probe().await {
                Ok(()) => {
                    debug!("Modem is ready");
                    return Ok(());
                }
                Err(e) => trace!("Modem not ready: {:?}", e),
            }

            if Instant::now() >= deadline {
                warn!("Modem did not respond within {} ms", timeout.as_millis());
                return Err(Error::FailToConnect);
            }

            Timer::after(C::READY_POLL_INTERVAL).await;
        }
    }

    /// Configure the modem for autonomous, power saving operation, reboot
    /// it and wait until it is registered with the network.
    ///
    /// Enables autoconnect, cell reselection, SIM power saving and PSM, in
    /// that order, then reboots the modem. A failing step aborts the
    /// startup with that step's error; earlier steps stay applied.
    ///
    /// Returns the connection status once it is one of the registered
    /// states. When `timeout` passes first, the radio is switched off and
    /// [`Error::FailToConnect`] is returned.
    pub async fn start(&mut self, timeout: Duration) -> Result<ConnectionStatus, Error> {
        let driver = self.driver()?;

        info!("Starting NB-IoT connection");
        for option in [
            UeOption::Autoconnect,
            UeOption::CellReselection,
            UeOption::SimPowerSave,
        ] {
            debug!("Enabling {:?}", option);
            driver.configure_ue(option, true).await.map_err(|e| {
                error!("Failed to enable {:?}: {:?}", option, e);
                e
            })?;
        }

        debug!("Enabling power save mode");
        driver.set_power_save_mode(true).await.map_err(|e| {
            error!("Failed to enable power save mode: {:?}", e);
            e
        })?;

        debug!("Rebooting modem");
        driver.reboot().await.map_err(|e| {
            error!("Failed to reboot modem: {:?}", e);
            e
        })?;

        let deadline = Instant::now() + timeout;
        loop {
            // The modem may still be rebooting, failed queries are retried
            match Self::query_status(driver).await {
                Ok(status) if status.is_connected() => {
                    info!("Connected: {:?}", status);
                    return Ok(status);
                }
                Ok(status) => trace!("Waiting for network, status: {:?}", status),
                Err(e) => trace!("Status query failed: {:?}", e),
            }

            if Instant::now() >= deadline {
                warn!(
                    "No network connection within {} ms, deactivating radio",
                    timeout.as_millis()
                );
                if let Err(e) = driver.set_radio(false).await {
                    error!("Failed to deactivate radio: {:?}", e);
                }
                return Err(Error::FailToConnect);
            }

            Timer::after(C::CONNECT_POLL_INTERVAL).await;
        }
    }

    async fn query_status(driver: &mut D) -> Result<ConnectionStatus, Error> {
        let connected = driver.rrc_connected().await?;
        let registration = driver.registration_status().await?;
        let psm = driver.power_save_active().await?;
        Ok(ConnectionStatus::resolve(registration, connected, psm))
    }

    pub async fn connection_status(&mut self) -> Result<ConnectionStatus, Error> {
        let driver = self.driver()?;
        Self::query_status(driver).await
    }

    /// Raw RRC connection state and registration status
    pub async fn radio_and_registration(&mut self) -> Result<(bool, Status), Error> {
        let driver = self.driver()?;
        let connected = driver.rrc_connected().await?;
        let registration = driver.registration_status().await?;
        Ok((connected, registration))
    }

    pub async fn reboot_modem(&mut self) -> Result<(), Error> {
        self.driver()?.reboot().await
    }

    pub async fn activate_radio(&mut self) -> Result<(), Error> {
        self.driver()?.set_radio(true).await
    }

    pub async fn deactivate_radio(&mut self) -> Result<(), Error> {
        self.driver()?.set_radio(false).await
    }

    pub async fn radio_active(&mut self) -> Result<bool, Error> {
        self.driver()?.radio().await
    }

    pub async fn gprs_attach(&mut self) -> Result<(), Error> {
        self.driver()?.set_gprs_attached(true).await
    }

    pub async fn gprs_detach(&mut self) -> Result<(), Error> {
        self.driver()?.set_gprs_attached(false).await
    }

    pub async fn gprs_attached(&mut self) -> Result<bool, Error> {
        self.driver()?.gprs_attached().await
    }

    pub async fn register(&mut self) -> Result<(), Error> {
        self.driver()?.set_registered(true).await
    }

    pub async fn deregister(&mut self) -> Result<(), Error> {
        self.driver()?.set_registered(false).await
    }

    pub async fn registration_status(&mut self) -> Result<Status, Error> {
        self.driver()?.registration_status().await
    }

    pub async fn configure_ue(&mut self, option: UeOption, enable: bool) -> Result<(), Error> {
        self.driver()?.configure_ue(option, enable).await
    }

    pub async fn enable_autoconnect(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::Autoconnect, true).await
    }

    pub async fn disable_autoconnect(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::Autoconnect, false).await
    }

    pub async fn enable_scrambling(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::Scrambling, true).await
    }

    pub async fn disable_scrambling(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::Scrambling, false).await
    }

    pub async fn enable_si_avoid(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::SiAvoid, true).await
    }

    pub async fn disable_si_avoid(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::SiAvoid, false).await
    }

    pub async fn enable_combine_attach(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::CombineAttach, true).await
    }

    pub async fn disable_combine_attach(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::CombineAttach, false).await
    }

    pub async fn enable_cell_reselection(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::CellReselection, true).await
    }

    pub async fn disable_cell_reselection(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::CellReselection, false).await
    }

    pub async fn enable_bip(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::Bip, true).await
    }

    pub async fn disable_bip(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::Bip, false).await
    }

    pub async fn enable_sim_power_save_mode(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::SimPowerSave, true).await
    }

    pub async fn disable_sim_power_save_mode(&mut self) -> Result<(), Error> {
        self.configure_ue(UeOption::SimPowerSave, false).await
    }

    pub async fn enable_power_save_mode(&mut self) -> Result<(), Error> {
        self.driver()?.set_power_save_mode(true).await
    }

    pub async fn disable_power_save_mode(&mut self) -> Result<(), Error> {
        self.driver()?.set_power_save_mode(false).await
    }

    /// Whether PSM is enabled in the modem settings
    pub async fn query_power_save_mode(&mut self) -> Result<bool, Error> {
        self.driver()?.power_save_mode().await
    }

    /// Whether the UE is in power save mode right now
    pub async fn power_save_active(&mut self) -> Result<bool, Error> {
        self.driver()?.power_save_active().await
    }

    pub async fn signal_quality(&mut self) -> Result<SignalQuality, Error> {
        self.driver()?.signal_quality().await
    }

    pub async fn ue_stats(&mut self) -> Result<CellStats, Error> {
        self.driver()?.cell_stats().await
    }

    /// Operating band of the serving cell
    pub async fn band(&mut self) -> Result<Band, Error> {
        let stats = self.driver()?.cell_stats().await?;
        Ok(Band::from_earfcn(stats.earfcn))
    }

    /// Set the requested periodic TAU timer (T3412) from its binary form
    pub async fn set_tau_timer_bits(&mut self, bits: &str) -> Result<(), Error> {
        self.driver()?.set_t3412(bits).await
    }

    pub async fn tau_timer_bits(&mut self) -> Result<TimerBits, Error> {
        self.driver()?.t3412().await
    }

    /// Set the requested active time (T3324) from its binary form
    pub async fn set_active_time_bits(&mut self, bits: &str) -> Result<(), Error> {
        self.driver()?.set_t3324(bits).await
    }

    pub async fn active_time_bits(&mut self) -> Result<TimerBits, Error> {
        self.driver()?.t3324().await
    }

    pub async fn set_tau_timer(&mut self, unit: TauUnit, multiples: u8) -> Result<(), Error> {
        let driver = self.driver()?;
        let bits = timer::encode(unit, multiples)?;
        debug!("Setting TAU timer to {}", bits.as_str());
        driver.set_t3412(&bits).await
    }

    pub async fn tau_timer(&mut self) -> Result<TimerValue<TauUnit>, Error> {
        let bits = self.driver()?.t3412().await?;
        Ok(timer::decode(&bits))
    }

    pub async fn set_active_time(
        &mut self,
        unit: ActiveTimeUnit,
        multiples: u8,
    ) -> Result<(), Error> {
        let driver = self.driver()?;
        let bits = timer::encode(unit, multiples)?;
        debug!("Setting active time to {}", bits.as_str());
        driver.set_t3324(&bits).await
    }

    pub async fn active_time(&mut self) -> Result<TimerValue<ActiveTimeUnit>, Error> {
        let bits = self.driver()?.t3324().await?;
        Ok(timer::decode(&bits))
    }

    /// Store server address and URI in the CoAP profile.
    pub async fn configure_coap(
        &mut self,
        ip: Ipv4Addr,
        port: u16,
        uri: &str,
    ) -> Result<(), Error> {
        let driver = self.driver()?;
        if uri.len() > MAX_URI_LEN {
            return Err(Error::ExceedsMaxValue);
        }

        driver.coap_select_profile(C::COAP_PROFILE).await?;
        driver.coap_set_server(ip, port).await?;
        driver.coap_set_uri(uri).await?;
        driver.coap_add_uri_path().await?;
        driver.coap_set_profile_valid(true).await?;
        driver.coap_save_profile(C::COAP_PROFILE).await?;
        debug!("CoAP profile {} configured", C::COAP_PROFILE.0);
        Ok(())
    }

    async fn prepare_coap(driver: &mut D) -> Result<(), Error> {
        driver.coap_load_profile(C::COAP_PROFILE).await?;
        driver.coap_select_at_interface().await
    }

    pub async fn coap_get(&mut self) -> Result<Response, Error> {
        let driver = self.driver()?;
        Self::prepare_coap(driver).await?;
        driver.coap_request(Request::new(Method::Get)).await
    }

    pub async fn coap_delete(&mut self) -> Result<Response, Error> {
        let driver = self.driver()?;
        Self::prepare_coap(driver).await?;
        driver.coap_request(Request::new(Method::Delete)).await
    }

    pub async fn coap_put(
        &mut self,
        payload: &[u8],
        format: ContentFormat,
    ) -> Result<Response, Error> {
        let driver = self.driver()?;
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::ExceedsMaxValue);
        }

        Self::prepare_coap(driver).await?;
        driver
            .coap_request(Request::new(Method::Put).with_payload(payload, format))
            .await
    }

    /// POST `payload`, block-wise when it exceeds one block.
    ///
    /// Blocks are numbered from 0 and sent in order. The first failing
    /// block aborts the transfer; blocks already sent are not repeated.
    /// Returns the server's answer to the last block.
    pub async fn coap_post(
        &mut self,
        payload: &[u8],
        format: ContentFormat,
    ) -> Result<Response, Error> {
        let driver = self.driver()?;
        Self::prepare_coap(driver).await?;

        let block_size = C::COAP_BLOCK_SIZE.clamp(1, MAX_PAYLOAD_LEN);
        if payload.len() <= block_size {
            return driver
                .coap_request(Request::new(Method::Post).with_payload(payload, format))
                .await;
        }

        let blocks = payload.chunks(block_size);
        let count = blocks.len();
        let mut response = None;

        for (number, block) in blocks.enumerate() {
            let more = number + 1 < count;
            debug!("Sending block {} of {}", number, count);

            let request = Request::new(Method::Post)
                .with_payload(block, format)
                .with_block(number as u32, more);
            response = Some(driver.coap_request(request).await.map_err(|e| {
                error!("Block {} failed, aborting transfer: {:?}", number, e);
                e
            })?);
        }

        response.ok_or(Error::InvalidResponse)
    }

    /// Pulse `RESET_N` and wait for the modem to boot
    pub async fn hard_reset(&mut self) -> Result<(), Error> {
        if let Some(pin) = self.config.reset_pin() {
            pin.set_low().map_err(|_| Error::IoPin)?;
            Timer::after(reset_time()).await;
            pin.set_high().map_err(|_| Error::IoPin)?;
            Timer::after(boot_time()).await;
            debug!("Modem reset");
        } else {
            warn!("No reset pin configured");
        }
        Ok(())
    }

    /// Whether the modem is powered, sensed on `V_INT`. Without a `V_INT`
    /// pin the modem is assumed to be powered.
    pub fn has_power(&mut self) -> Result<bool, Error> {
        if let Some(pin) = self.config.vint_pin() {
            pin.is_high().map_err(|_| Error::IoPin)
        } else {
            info!("No VInt pin configured");
            Ok(true)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coap::Block;
    use crate::test_helpers::{init_logger, Call, MockDriver, RecordingPin, TestConfig};
    use embassy_futures::block_on;

    fn interface(driver: MockDriver) -> NbiotInterface<MockDriver, TestConfig> {
        init_logger();
        NbiotInterface::new(driver, TestConfig::default())
    }

    #[test]
    fn unbound_operations_fail_without_driver_calls() {
        init_logger();
        let mut nbiot: NbiotInterface<MockDriver, TestConfig> =
            NbiotInterface::unbound(TestConfig::default());
        assert_eq!(nbiot.binding(), DriverKind::None);

        macro_rules! assert_unbound {
            ($($op:expr),* $(,)?) => {
                $(
                    assert!(
                        matches!($op, Err(Error::DriverUnknown)),
                        "{} did not report DriverUnknown",
                        stringify!($op)
                    );
                )*
            };
        }

        let ip = Ipv4Addr::new(10, 0, 0, 1);
        block_on(async {
            assert_unbound!(
                nbiot.ready(Duration::from_secs(1)).await,
                nbiot.start(Duration::from_secs(1)).await,
                nbiot.connection_status().await,
                nbiot.radio_and_registration().await,
                nbiot.reboot_modem().await,
                nbiot.activate_radio().await,
                nbiot.deactivate_radio().await,
                nbiot.radio_active().await,
                nbiot.gprs_attach().await,
                nbiot.gprs_detach().await,
                nbiot.gprs_attached().await,
                nbiot.register().await,
                nbiot.deregister().await,
                nbiot.registration_status().await,
                nbiot.configure_ue(UeOption::Bip, true).await,
                nbiot.enable_autoconnect().await,
                nbiot.disable_autoconnect().await,
                nbiot.enable_scrambling().await,
                nbiot.disable_scrambling().await,
                nbiot.enable_si_avoid().await,
                nbiot.disable_si_avoid().await,
                nbiot.enable_combine_attach().await,
                nbiot.disable_combine_attach().await,
                nbiot.enable_cell_reselection().await,
                nbiot.disable_cell_reselection().await,
                nbiot.enable_bip().await,
                nbiot.disable_bip().await,
                nbiot.enable_sim_power_save_mode().await,
                nbiot.disable_sim_power_save_mode().await,
                nbiot.enable_power_save_mode().await,
                nbiot.disable_power_save_mode().await,
                nbiot.query_power_save_mode().await,
                nbiot.power_save_active().await,
                nbiot.signal_quality().await,
                nbiot.ue_stats().await,
                nbiot.band().await,
                nbiot.set_tau_timer_bits("00100001").await,
                nbiot.tau_timer_bits().await,
                nbiot.set_active_time_bits("00000101").await,
                nbiot.active_time_bits().await,
                // Argument errors lose against the missing binding
                nbiot.set_tau_timer(TauUnit::Hours1, 32).await,
                nbiot.tau_timer().await,
                nbiot.set_active_time(ActiveTimeUnit::Minutes1, 32).await,
                nbiot.active_time().await,
                nbiot.configure_coap(ip, 5683, "coap://example/resource").await,
                nbiot.coap_get().await,
                nbiot.coap_delete().await,
                nbiot.coap_put(&[0; 1024], ContentFormat::TextPlain).await,
                nbiot.coap_post(&[0; 2048], ContentFormat::TextPlain).await,
            );
        });

        assert!(nbiot.bind(MockDriver::default()).is_none());
        assert_eq!(nbiot.binding(), DriverKind::SaraN2);
        let driver = nbiot.release().unwrap();
        assert!(driver.calls.is_empty());
        assert_eq!(nbiot.binding(), DriverKind::None);
    }

    #[test]
    fn ready_returns_once_probe_succeeds() {
        let mut nbiot = interface(MockDriver {
            failing_probes: 2,
            ..Default::default()
        });

        block_on(async {
            assert_eq!(nbiot.ready(Duration::from_secs(5)).await, Ok(()));
        });

        let driver = nbiot.release().unwrap();
        assert_eq!(driver.calls, [Call::Probe, Call::Probe, Call::Probe]);
    }

    #[test]
    fn ready_times_out() {
        let mut nbiot = interface(MockDriver {
            failing_probes: usize::MAX,
            ..Default::default()
        });

        let started = Instant::now();
        block_on(async {
            assert_eq!(
                nbiot.ready(Duration::from_secs(1)).await,
                Err(Error::FailToConnect)
            );
        });
        let elapsed = started.elapsed();

        assert!(elapsed >= Duration::from_secs(1));
        assert!(elapsed < Duration::from_millis(1000) + TestConfig::READY_POLL_INTERVAL * 2);
    }

    #[test]
    fn start_runs_pipeline_and_waits_for_registration() {
        let mut nbiot = interface(MockDriver {
            failing_status_queries: 2,
            registration: Status::Home,
            ..Default::default()
        });

        block_on(async {
            assert_eq!(
                nbiot.start(Duration::from_secs(5)).await,
                Ok(ConnectionStatus::RegisteredRrcReleased)
            );
        });

        let driver = nbiot.release().unwrap();
        assert_eq!(
            &driver.calls[..5],
            [
                Call::ConfigureUe(UeOption::Autoconnect, true),
                Call::ConfigureUe(UeOption::CellReselection, true),
                Call::ConfigureUe(UeOption::SimPowerSave, true),
                Call::SetPowerSaveMode(true),
                Call::Reboot,
            ]
        );
        assert!(!driver.calls.contains(&Call::SetRadio(false)));
    }

    #[test]
    fn start_timeout_deactivates_radio_once() {
        let mut nbiot = interface(MockDriver {
            registration: Status::Searching,
            ..Default::default()
        });

        block_on(async {
            assert_eq!(
                nbiot.start(Duration::from_millis(300)).await,
                Err(Error::FailToConnect)
            );
        });

        let driver = nbiot.release().unwrap();
        let deactivations = driver
            .calls
            .iter()
            .filter(|c| **c == Call::SetRadio(false))
            .count();
        assert_eq!(deactivations, 1);
        assert_eq!(driver.calls.last(), Some(&Call::SetRadio(false)));
    }

    #[test]
    fn start_aborts_on_failing_step() {
        let mut nbiot = interface(MockDriver {
            fail_at: Some(1),
            ..Default::default()
        });

        block_on(async {
            assert_eq!(
                nbiot.start(Duration::from_secs(1)).await,
                Err(Error::Driver(MockDriver::FAILURE))
            );
        });

        let driver = nbiot.release().unwrap();
        assert_eq!(
            driver.calls,
            [
                Call::ConfigureUe(UeOption::Autoconnect, true),
                Call::ConfigureUe(UeOption::CellReselection, true),
            ]
        );
    }

    #[test]
    fn connection_status_combines_signals() {
        let mut nbiot = interface(MockDriver {
            registration: Status::Roaming,
            power_save_active: true,
            ..Default::default()
        });

        block_on(async {
            assert_eq!(
                nbiot.connection_status().await,
                Ok(ConnectionStatus::PsmRegistered)
            );
            assert_eq!(
                nbiot.radio_and_registration().await,
                Ok((false, Status::Roaming))
            );
        });
    }

    #[test]
    fn band_from_cell_statistics() {
        let mut nbiot = interface(MockDriver {
            earfcn: 6300,
            ..Default::default()
        });

        block_on(async {
            assert_eq!(nbiot.band().await, Ok(Band::Band20));
        });
    }

    #[test]
    fn timers_are_encoded() {
        let mut nbiot = interface(MockDriver::default());

        block_on(async {
            nbiot.set_tau_timer(TauUnit::Hours10, 3).await.unwrap();
            nbiot
                .set_active_time(ActiveTimeUnit::Minutes1, 10)
                .await
                .unwrap();

            let tau = nbiot.tau_timer().await.unwrap();
            assert_eq!(tau, TimerValue::new(TauUnit::Hours10, 3));
            assert_eq!(tau.duration(), Some(Duration::from_secs(3 * 36000)));

            let active = nbiot.active_time().await.unwrap();
            assert_eq!(active, TimerValue::new(ActiveTimeUnit::Minutes1, 10));
        });

        let driver = nbiot.release().unwrap();
        assert_eq!(driver.t3412.as_str(), "01000011");
        assert_eq!(driver.t3324.as_str(), "00101010");
    }

    #[test]
    fn invalid_timer_arguments_do_not_reach_driver() {
        let mut nbiot = interface(MockDriver::default());

        block_on(async {
            assert_eq!(
                nbiot.set_tau_timer(TauUnit::Minutes10, 32).await,
                Err(Error::ExceedsMaxValue)
            );
            assert_eq!(
                nbiot.set_active_time(ActiveTimeUnit::Invalid, 1).await,
                Err(Error::InvalidUnitValue)
            );
        });

        assert!(nbiot.release().unwrap().calls.is_empty());
    }

    #[test]
    fn configure_coap_sequence() {
        let mut nbiot = interface(MockDriver::default());
        let ip = Ipv4Addr::new(10, 0, 0, 1);

        block_on(async {
            nbiot
                .configure_coap(ip, 5683, "coap://coap.me:5683/sink")
                .await
                .unwrap();
        });

        let profile = TestConfig::COAP_PROFILE;
        assert_eq!(
            nbiot.release().unwrap().calls,
            [
                Call::CoapSelectProfile(profile),
                Call::CoapSetServer(ip, 5683),
                Call::CoapSetUri,
                Call::CoapAddUriPath,
                Call::CoapSetProfileValid(true),
                Call::CoapSaveProfile(profile),
            ]
        );
    }

    #[test]
    fn configure_coap_rejects_long_uri() {
        let mut nbiot = interface(MockDriver::default());
        let uri = [b'a'; MAX_URI_LEN + 1];
        let uri = core::str::from_utf8(&uri).unwrap();

        block_on(async {
            assert_eq!(
                nbiot
                    .configure_coap(Ipv4Addr::new(10, 0, 0, 1), 5683, uri)
                    .await,
                Err(Error::ExceedsMaxValue)
            );
        });

        assert!(nbiot.release().unwrap().calls.is_empty());
    }

    #[test]
    fn coap_get_restores_profile_first() {
        let mut nbiot = interface(MockDriver::default());

        let response = block_on(nbiot.coap_get()).unwrap();
        assert!(response.is_success());

        assert_eq!(
            nbiot.release().unwrap().calls,
            [
                Call::CoapLoadProfile(TestConfig::COAP_PROFILE),
                Call::CoapSelectAtInterface,
                Call::CoapRequest {
                    method: Method::Get,
                    len: 0,
                    block: None
                },
            ]
        );
    }

    #[test]
    fn coap_post_small_payload_is_single_request() {
        let mut nbiot = interface(MockDriver::default());

        block_on(nbiot.coap_post(b"{\"t\":21}", ContentFormat::ApplicationJson)).unwrap();

        assert_eq!(
            nbiot.release().unwrap().calls.last(),
            Some(&Call::CoapRequest {
                method: Method::Post,
                len: 8,
                block: None
            })
        );
    }

    #[test]
    fn coap_post_large_payload_is_chunked() {
        let mut nbiot = interface(MockDriver::default());
        let payload = [0x55; 1100];

        block_on(nbiot.coap_post(&payload, ContentFormat::ApplicationOctetStream)).unwrap();

        let calls = nbiot.release().unwrap().calls;
        assert_eq!(
            &calls[2..],
            [
                Call::CoapRequest {
                    method: Method::Post,
                    len: 512,
                    block: Some(Block { number: 0, more: true })
                },
                Call::CoapRequest {
                    method: Method::Post,
                    len: 512,
                    block: Some(Block { number: 1, more: true })
                },
                Call::CoapRequest {
                    method: Method::Post,
                    len: 76,
                    block: Some(Block { number: 2, more: false })
                },
            ]
        );
    }

    #[test]
    fn coap_post_aborts_on_failed_block() {
        // load profile, select interface, block 0, block 1 fails
        let mut nbiot = interface(MockDriver {
            fail_at: Some(3),
            ..Default::default()
        });
        let payload = [0xAA; 2048];

        assert_eq!(
            block_on(nbiot.coap_post(&payload, ContentFormat::ApplicationOctetStream)),
            Err(Error::Driver(MockDriver::FAILURE))
        );
        assert_eq!(nbiot.release().unwrap().calls.len(), 4);
    }

    #[test]
    fn coap_put_rejects_oversized_payload() {
        let mut nbiot = interface(MockDriver::default());

        assert_eq!(
            block_on(nbiot.coap_put(&[0; MAX_PAYLOAD_LEN + 1], ContentFormat::TextPlain)),
            Err(Error::ExceedsMaxValue)
        );
        assert!(nbiot.release().unwrap().calls.is_empty());
    }

    #[test]
    fn pins_work_without_driver() {
        init_logger();
        let mut nbiot: NbiotInterface<MockDriver, TestConfig> =
            NbiotInterface::unbound(TestConfig {
                reset: Some(RecordingPin::default()),
                vint: Some(RecordingPin {
                    high: true,
                    ..Default::default()
                }),
            });

        assert_eq!(nbiot.has_power(), Ok(true));
        block_on(nbiot.hard_reset()).unwrap();
        assert_eq!(
            nbiot.config.reset.as_ref().map(|p| p.history.clone()),
            Some(std::vec![false, true])
        );
    }

    #[test]
    fn missing_pins_are_skipped() {
        let mut nbiot = interface(MockDriver::default());
        assert_eq!(nbiot.has_power(), Ok(true));
        block_on(nbiot.hard_reset()).unwrap();
    }
}
