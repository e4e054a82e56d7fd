//! ### 9 - System features Commands

pub mod types;

use atat::atat_derive::AtatCmd;

use super::NoResponse;

/// 9.1 Reboot +NRB
///
/// Reboots the module. The command answers `REBOOTING`, and the final
/// result code follows once the module has booted again.
#[derive(Clone, AtatCmd)]
#[at_cmd("+NRB", NoResponse, timeout_ms = 10000)]
pub struct Reboot;

/// 9.2 Configure UE behaviour +NCONFIG
///
/// Sets one of the UE configuration switches to "TRUE" or "FALSE", see
/// [`types::UeFunction`]. Changes take effect after the next reboot.
#[derive(Clone, AtatCmd)]
#[at_cmd("+NCONFIG", NoResponse)]
pub struct SetUeConfiguration<'a> {
    #[at_arg(position = 0, len = 32)]
    pub function: &'a str,
    #[at_arg(position = 1, len = 5)]
    pub value: &'a str,
}

impl<'a> SetUeConfiguration<'a> {
    pub fn new(function: types::UeFunction, enable: bool) -> Self {
        Self {
            function: function.as_str(),
            value: if enable { "TRUE" } else { "FALSE" },
        }
    }
}
