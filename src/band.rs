use core::ops::RangeInclusive;

const BAND_8_EARFCN: RangeInclusive<u32> = 3450..=3799;
const BAND_20_EARFCN: RangeInclusive<u32> = 6150..=6449;

/// E-UTRA operating band of the serving cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    /// 900 MHz
    Band8,
    /// 800 MHz
    Band20,
    Unknown,
}

impl Band {
    pub fn from_earfcn(earfcn: u32) -> Self {
        if BAND_8_EARFCN.contains(&earfcn) {
            Self::Band8
        } else if BAND_20_EARFCN.contains(&earfcn) {
            Self::Band20
        } else {
            Self::Unknown
        }
    }
}
