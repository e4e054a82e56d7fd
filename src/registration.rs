/// 3GPP EPS registration status, as reported by `+CEREG`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    #[default]
    None,
    NotRegistering,
    Home,
    Searching,
    Denied,
    OutOfCoverage,
    Roaming,
}

impl Status {
    pub fn registered(&self) -> bool {
        matches!(self, Self::Home | Self::Roaming)
    }
}

impl From<u8> for Status {
    fn from(v: u8) -> Self {
        match v {
            0 => Self::NotRegistering,
            1 => Self::Home,
            2 => Self::Searching,
            3 => Self::Denied,
            4 => Self::OutOfCoverage,
            5 => Self::Roaming,
            _ => Self::None,
        }
    }
}
