//! AT Commands for the u-blox SARA-N2 NB-IoT module family
//! Following the [SARA-N2 AT commands manual](https://www.u-blox.com/sites/default/files/SARA-N2_ATCommands_%28UBX-16014887%29.pdf)

pub mod coap;
pub mod mobile_control;
pub mod network_service;
pub mod psn;
pub mod system_features;

use atat::atat_derive::{AtatCmd, AtatResp, AtatUrc};

#[derive(Clone, AtatResp)]
pub struct NoResponse;

#[derive(Clone, AtatCmd)]
#[at_cmd("", NoResponse)]
pub struct AT;

#[derive(Debug, Clone, AtatUrc)]
pub enum Urc {
    #[at_urc("+UCOAPCR")]
    CoapCommandResult(coap::urc::CoapCommandResult),
    #[at_urc("+UCOAPCD")]
    CoapData(coap::urc::CoapData),
}
