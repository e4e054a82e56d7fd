//! ### 7 - Packet Switched Data Services Commands
//!
//! On NB-IoT the PS attach and the EPS registration are the only network
//! attachment procedures, there is no circuit switched domain.

pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;
use responses::{EPSNetworkRegistrationStatus, GPRSAttached};
use types::GPRSAttachedState;

use super::NoResponse;

/// 7.4 PS attach or detach +CGATT
///
/// Register (attach) the MT to, or deregister (detach) the MT from the PS
/// service. If the MT is already in the requested state the command is
/// ignored and OK result code is returned.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGATT", NoResponse, timeout_ms = 180000, abortable = true)]
pub struct SetGPRSAttached {
    #[at_arg(position = 0)]
    pub state: GPRSAttachedState,
}

/// 7.4 Read PS attach or detach +CGATT
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGATT?", GPRSAttached)]
pub struct GetGPRSAttached;

/// 7.10 EPS network registration status +CEREG
///
/// The read command returns the URC configuration <n> and the current EPS
/// registration status <stat>. Location information is only present when
/// <n> is 2 or higher.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CEREG?", EPSNetworkRegistrationStatus)]
pub struct GetEPSNetworkRegistrationStatus;
