//! Responses for Packet Switched Data Services Commands
use super::types::*;
use atat::atat_derive::AtatResp;
use heapless::String;

/// 7.4 PS attach or detach +CGATT
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct GPRSAttached {
    #[at_arg(position = 0)]
    pub state: GPRSAttachedState,
}

/// 7.10 EPS network registration status +CEREG
///
/// <stat> follows the 3GPP TS 27.007 enumeration, see
/// [`crate::registration::Status`].
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct EPSNetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: u8,
    #[at_arg(position = 1)]
    pub stat: u8,
    #[at_arg(position = 2)]
    pub tac: Option<String<4>>,
    #[at_arg(position = 3)]
    pub ci: Option<String<8>>,
    #[at_arg(position = 4)]
    pub act: Option<u8>,
}
