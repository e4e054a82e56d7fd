#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod band;
pub mod coap;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod hex;
pub mod interface;
mod module_timing;
pub mod registration;
pub mod sara_n2;
pub mod status;
pub mod timer;

#[cfg(test)]
mod test_helpers;

pub use atat;

pub use band::Band;
pub use coap::{ContentFormat, Method, Response as CoapResponse};
pub use config::{NbiotConfig, NoPin, ReverseOutputPin};
pub use driver::{DriverKind, ModemDriver};
pub use error::Error;
pub use interface::NbiotInterface;
pub use sara_n2::SaraN2;
pub use status::ConnectionStatus;
pub use timer::{ActiveTimeUnit, TauUnit, TimerValue};
