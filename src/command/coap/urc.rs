//! Unsolicited responses for CoAP Commands
use atat::atat_derive::AtatResp;
use heapless::String;

/// 27.3 CoAP command result +UCOAPCR
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct CoapCommandResult {
    /// `+UCOAPC` command type the result belongs to
    #[at_arg(position = 0)]
    pub command: u8,
    /// 0: failure, 1: success
    #[at_arg(position = 1)]
    pub status: u8,
}

/// 27.3 CoAP data +UCOAPCD
///
/// Carries the server response. The payload is hex encoded, and the block
/// fields are only present for block-wise responses.
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct CoapData {
    #[at_arg(position = 0)]
    pub code: u16,
    #[at_arg(position = 1)]
    pub payload: Option<String<1024>>,
    #[at_arg(position = 2)]
    pub block: Option<u32>,
    #[at_arg(position = 3)]
    pub more: Option<u8>,
}
