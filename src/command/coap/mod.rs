//! ### 27 - Constrained Application Protocol (CoAP)
//!
//! The CoAP client keeps its settings in profiles. Every `+UCOAP` operation
//! acts on the currently selected profile, which can be stored in and
//! restored from the non-volatile memory.

pub mod types;
pub mod urc;

use atat::atat_derive::AtatCmd;
use heapless::String;
use types::{CoapCommandType, CoapOperation, CoapPduOption, CoapInterface};

use super::NoResponse;

/// 27.1 CoAP profile configuration +UCOAP, set the server address
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAP", NoResponse)]
pub struct SetCoapServer {
    #[at_arg(position = 0)]
    pub op: CoapOperation,
    #[at_arg(position = 1, len = 15)]
    pub ip: String<15>,
    #[at_arg(position = 2, len = 5)]
    pub port: String<5>,
}

impl SetCoapServer {
    pub fn new(ip: String<15>, port: String<5>) -> Self {
        Self {
            op: CoapOperation::Server,
            ip,
            port,
        }
    }
}

/// 27.1 CoAP profile configuration +UCOAP, set the request URI
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAP", NoResponse)]
pub struct SetCoapUri<'a> {
    #[at_arg(position = 0)]
    pub op: CoapOperation,
    #[at_arg(position = 1, len = 200)]
    pub uri: &'a str,
}

impl<'a> SetCoapUri<'a> {
    pub fn new(uri: &'a str) -> Self {
        Self {
            op: CoapOperation::Uri,
            uri,
        }
    }
}

/// 27.1 CoAP profile configuration +UCOAP, add or remove a PDU header
/// option
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAP", NoResponse)]
pub struct SetCoapPduHeader<'a> {
    #[at_arg(position = 0)]
    pub op: CoapOperation,
    #[at_arg(position = 1, len = 1)]
    pub option: &'a str,
    #[at_arg(position = 2, len = 1)]
    pub include: &'a str,
}

impl SetCoapPduHeader<'static> {
    pub fn new(option: CoapPduOption, include: bool) -> Self {
        Self {
            op: CoapOperation::PduHeader,
            option: option.as_str(),
            include: if include { "1" } else { "0" },
        }
    }
}

/// 27.1 CoAP profile configuration +UCOAP, select the active profile
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAP", NoResponse)]
pub struct SelectCoapProfile {
    #[at_arg(position = 0)]
    pub op: CoapOperation,
    #[at_arg(position = 1, len = 1)]
    pub profile: String<1>,
}

impl SelectCoapProfile {
    pub fn new(profile: String<1>) -> Self {
        Self {
            op: CoapOperation::SelectProfile,
            profile,
        }
    }
}

/// 27.1 CoAP profile configuration +UCOAP, mark the active profile valid
/// or invalid
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAP", NoResponse)]
pub struct SetCoapProfileValidity<'a> {
    #[at_arg(position = 0)]
    pub op: CoapOperation,
    #[at_arg(position = 1, len = 1)]
    pub valid: &'a str,
}

impl SetCoapProfileValidity<'static> {
    pub fn new(valid: bool) -> Self {
        Self {
            op: CoapOperation::ProfileValidity,
            valid: if valid { "1" } else { "0" },
        }
    }
}

/// 27.1 CoAP profile configuration +UCOAP, store the active profile in
/// the non-volatile memory
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAP", NoResponse, timeout_ms = 5000)]
pub struct SaveCoapProfile {
    #[at_arg(position = 0)]
    pub op: CoapOperation,
    #[at_arg(position = 1, len = 1)]
    pub profile: String<1>,
}

impl SaveCoapProfile {
    pub fn new(profile: String<1>) -> Self {
        Self {
            op: CoapOperation::SaveProfile,
            profile,
        }
    }
}

/// 27.1 CoAP profile configuration +UCOAP, restore a profile from the
/// non-volatile memory
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAP", NoResponse, timeout_ms = 5000)]
pub struct RestoreCoapProfile {
    #[at_arg(position = 0)]
    pub op: CoapOperation,
    #[at_arg(position = 1, len = 1)]
    pub profile: String<1>,
}

impl RestoreCoapProfile {
    pub fn new(profile: String<1>) -> Self {
        Self {
            op: CoapOperation::RestoreProfile,
            profile,
        }
    }
}

/// 27.2 Select the interface of the CoAP client +USELCP
#[derive(Clone, AtatCmd)]
#[at_cmd("+USELCP", NoResponse)]
pub struct SelectCoapInterface {
    #[at_arg(position = 0)]
    pub interface: CoapInterface,
}

/// 27.3 CoAP command +UCOAPC
///
/// Sends a request without payload. The outcome is reported by the
/// `+UCOAPCR` URC, and the server answer by `+UCOAPCD`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAPC", NoResponse)]
pub struct CoapRequest {
    #[at_arg(position = 0)]
    pub command: CoapCommandType,
}

/// 27.3 CoAP command +UCOAPC with payload
///
/// The payload is hex encoded, two characters per byte.
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAPC", NoResponse)]
pub struct CoapPayloadRequest<'a> {
    #[at_arg(position = 0)]
    pub command: CoapCommandType,
    #[at_arg(position = 1, len = 1024)]
    pub payload: &'a str,
    #[at_arg(position = 2)]
    pub format: u8,
}

/// 27.3 CoAP command +UCOAPC, one block of a block-wise transfer
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAPC", NoResponse)]
pub struct CoapBlockRequest<'a> {
    #[at_arg(position = 0)]
    pub command: CoapCommandType,
    #[at_arg(position = 1, len = 1024)]
    pub payload: &'a str,
    #[at_arg(position = 2)]
    pub format: u8,
    #[at_arg(position = 3)]
    pub block: u32,
    /// 1 when further blocks follow
    #[at_arg(position = 4)]
    pub more: u8,
}
