//! Argument and parameter types used by System features Commands
use crate::driver::UeOption;

/// `+NCONFIG` function names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UeFunction {
    Autoconnect,
    CrScrambling,
    CrSiAvoid,
    CombineAttach,
    CellReselection,
    EnableBip,
    NasSimPowerSavingEnable,
}

impl UeFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Autoconnect => "AUTOCONNECT",
            Self::CrScrambling => "CR_0354_0338_SCRAMBLING",
            Self::CrSiAvoid => "CR_0859_SI_AVOID",
            Self::CombineAttach => "COMBINE_ATTACH",
            Self::CellReselection => "CELL_RESELECTION",
            Self::EnableBip => "ENABLE_BIP",
            Self::NasSimPowerSavingEnable => "NAS_SIM_POWER_SAVING_ENABLE",
        }
    }
}

impl From<UeOption> for UeFunction {
    fn from(option: UeOption) -> Self {
        match option {
            UeOption::Autoconnect => Self::Autoconnect,
            UeOption::Scrambling => Self::CrScrambling,
            UeOption::SiAvoid => Self::CrSiAvoid,
            UeOption::CombineAttach => Self::CombineAttach,
            UeOption::CellReselection => Self::CellReselection,
            UeOption::Bip => Self::EnableBip,
            UeOption::SimPowerSave => Self::NasSimPowerSavingEnable,
        }
    }
}
