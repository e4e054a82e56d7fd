use core::convert::Infallible;
use embassy_time::Duration;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, PinState};

use crate::coap::ProfileId;

pub struct NoPin;

impl ErrorType for NoPin {
    type Error = core::convert::Infallible;
}

impl InputPin for NoPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Output pin behind an inverting driver stage, e.g. a transistor pulling
/// `RESET_N` low when the MCU pin is high.
pub struct ReverseOutputPin<P: OutputPin<Error = Infallible>>(pub P);

impl<P: OutputPin<Error = Infallible>> ErrorType for ReverseOutputPin<P> {
    type Error = Infallible;
}

impl<P: OutputPin<Error = Infallible>> OutputPin for ReverseOutputPin<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set_high()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set_low()
    }

    fn set_state(&mut self, state: PinState) -> Result<(), Self::Error> {
        match state {
            PinState::Low => self.0.set_state(PinState::High),
            PinState::High => self.0.set_state(PinState::Low),
        }
    }
}

/// Board level configuration of an NB-IoT modem attachment.
///
/// The UART itself is owned by the `atat` client handed to the driver; this
/// trait covers the remaining control lines and the polling cadence of the
/// connectivity controller.
pub trait NbiotConfig {
    type ResetPin: OutputPin;
    type VintPin: InputPin;

    /// Interval between liveness probes while waiting for the modem to
    /// answer `AT`
    const READY_POLL_INTERVAL: Duration = Duration::from_millis(500);
    /// Interval between connection status queries while waiting for the
    /// network attach
    const CONNECT_POLL_INTERVAL: Duration = Duration::from_millis(2500);

    const COAP_PROFILE: ProfileId = ProfileId(0);
    const COAP_BLOCK_SIZE: usize = 512;

    fn reset_pin(&mut self) -> Option<&mut Self::ResetPin>;
    fn vint_pin(&mut self) -> Option<&mut Self::VintPin>;
}
