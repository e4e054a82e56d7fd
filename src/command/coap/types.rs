//! Argument and parameter types used by CoAP Commands and URCs
use atat::atat_derive::AtatEnum;

use crate::coap::Method;

/// `+UCOAP` operation code
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoapOperation {
    /// 0: server IP address and port
    Server = 0,
    /// 1: request URI
    Uri = 1,
    /// 2: PDU header options
    PduHeader = 2,
    /// 3: select the active profile
    SelectProfile = 3,
    /// 4: profile validity
    ProfileValidity = 4,
    /// 5: store the active profile in the NVM
    SaveProfile = 5,
    /// 6: restore a profile from the NVM
    RestoreProfile = 6,
}

/// PDU header options handled by `AT+UCOAP=2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoapPduOption {
    UriHost,
    UriPort,
    UriPath,
    UriQuery,
}

impl CoapPduOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UriHost => "0",
            Self::UriPort => "1",
            Self::UriPath => "2",
            Self::UriQuery => "3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoapInterface {
    /// 0: CoAP over the UDP socket interface
    Sockets = 0,
    /// 1: CoAP over the AT command interface
    AtCommands = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoapCommandType {
    Get = 1,
    Delete = 2,
    Put = 3,
    Post = 4,
}

impl From<Method> for CoapCommandType {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::Get,
            Method::Delete => Self::Delete,
            Method::Put => Self::Put,
            Method::Post => Self::Post,
        }
    }
}
