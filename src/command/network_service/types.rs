//! Argument and parameter types used by Network service Commands and Responses
use atat::atat_derive::AtatEnum;

/// Is used to chose whether the network selection is automatically done by the
/// MT or whether the MT deregisters from the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatorSelectionMode {
    /// • 0 (default value and factory-programmed value): automatic (<oper> field is ignored)
    Automatic = 0,
    /// • 1: manual
    Manual = 1,
    /// • 2: deregister from network
    Deregister = 2,
}
