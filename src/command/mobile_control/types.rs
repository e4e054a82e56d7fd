//! Argument and parameter types used by Mobile equipment control and status Commands and Responses
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Functionality {
    /// 0: Sets the MT to minimum functionality (disable both transmit and
    /// receive RF circuits)
    Minimum = 0,
    /// 1 (factory-programmed value): sets the MT to full functionality
    Full = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerSavingMode {
    /// 0 (factory-programmed value): disable the use of PSM
    Disabled = 0,
    /// 1: enable the use of PSM
    Enabled = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerSavingStatusReporting {
    /// 0 (factory-programmed value): disable the `+NPSMR` URC
    Disabled = 0,
    /// 1: enable the `+NPSMR: <mode>` URC
    Enabled = 1,
}
