//! 3GPP binary encoding of the PSM timers.
//!
//! Both T3412 (periodic TAU, 3GPP TS 24.008 "GPRS Timer 3") and T3324
//! (active time, "GPRS Timer 2") are one octet: three unit bits followed by
//! five bits of multiples, exchanged with the modem as an 8 character string
//! of `0`/`1`, e.g. `"01000011"` for 3 x 10 hours.

use embassy_time::Duration;
use heapless::String;

use crate::error::Error;

/// Largest multiple representable in five bits
pub const MAX_MULTIPLES: u8 = 31;

/// Timer octet as exchanged with the modem, e.g. `"00100001"`
pub type TimerBits = String<8>;

/// Unit field of a 3GPP timer octet.
pub trait TimerUnit: Copy + PartialEq + 'static {
    /// All units with a defined 3 bit pattern
    const TABLE: &'static [(Self, &'static str)];
    /// Returned when decoding a pattern missing from `TABLE`
    const INVALID: Self;

    /// Length of one multiple, `None` when the timer is deactivated or
    /// the unit is invalid
    fn seconds(self) -> Option<u64>;

    fn bits(self) -> Option<&'static str> {
        Self::TABLE
            .iter()
            .find(|(unit, _)| *unit == self)
            .map(|(_, bits)| *bits)
    }

    fn from_bits(bits: &str) -> Self {
        Self::TABLE
            .iter()
            .find(|(_, b)| *b == bits)
            .map(|(unit, _)| *unit)
            .unwrap_or(Self::INVALID)
    }
}

/// T3412 extended (periodic tracking area update) timer unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TauUnit {
    Hours320,
    Hours10,
    Hours1,
    Minutes10,
    Minutes1,
    Seconds30,
    Seconds2,
    Deactivated,
    Invalid,
}

impl TimerUnit for TauUnit {
    const TABLE: &'static [(Self, &'static str)] = &[
        (Self::Hours320, "110"),
        (Self::Hours10, "010"),
        (Self::Hours1, "001"),
        (Self::Minutes10, "000"),
        (Self::Minutes1, "101"),
        (Self::Seconds30, "100"),
        (Self::Seconds2, "011"),
        (Self::Deactivated, "111"),
    ];
    const INVALID: Self = Self::Invalid;

    fn seconds(self) -> Option<u64> {
        match self {
            Self::Hours320 => Some(320 * 3600),
            Self::Hours10 => Some(10 * 3600),
            Self::Hours1 => Some(3600),
            Self::Minutes10 => Some(600),
            Self::Minutes1 => Some(60),
            Self::Seconds30 => Some(30),
            Self::Seconds2 => Some(2),
            Self::Deactivated | Self::Invalid => None,
        }
    }
}

/// T3324 (active time) timer unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveTimeUnit {
    Minutes6,
    Minutes1,
    Seconds2,
    Deactivated,
    Invalid,
}

impl TimerUnit for ActiveTimeUnit {
    const TABLE: &'static [(Self, &'static str)] = &[
        (Self::Minutes6, "010"),
        (Self::Minutes1, "001"),
        (Self::Seconds2, "000"),
        (Self::Deactivated, "111"),
    ];
    const INVALID: Self = Self::Invalid;

    fn seconds(self) -> Option<u64> {
        match self {
            Self::Minutes6 => Some(360),
            Self::Minutes1 => Some(60),
            Self::Seconds2 => Some(2),
            Self::Deactivated | Self::Invalid => None,
        }
    }
}

/// Decoded timer octet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerValue<U> {
    pub unit: U,
    pub multiples: u8,
}

impl<U: TimerUnit> TimerValue<U> {
    pub fn new(unit: U, multiples: u8) -> Self {
        Self { unit, multiples }
    }

    pub fn duration(&self) -> Option<Duration> {
        self.unit
            .seconds()
            .map(|s| Duration::from_secs(s * self.multiples as u64))
    }

    pub fn encode(&self) -> Result<TimerBits, Error> {
        encode(self.unit, self.multiples)
    }
}

/// Encode a unit and multiples into the 8 character binary form.
pub fn encode<U: TimerUnit>(unit: U, multiples: u8) -> Result<TimerBits, Error> {
    if multiples > MAX_MULTIPLES {
        return Err(Error::ExceedsMaxValue);
    }

    let unit_bits = unit.bits().ok_or(Error::InvalidUnitValue)?;

    let mut bits = TimerBits::new();
    bits.push_str(unit_bits).map_err(|_| Error::Overflow)?;
    for shift in (0..5).rev() {
        let bit = if (multiples >> shift) & 1 == 1 { '1' } else { '0' };
        bits.push(bit).map_err(|_| Error::Overflow)?;
    }

    Ok(bits)
}

/// Decode the 8 character binary form.
///
/// An unknown unit pattern decodes to the unit's `INVALID` value; the
/// multiples are decoded regardless. Missing characters count as `0`.
pub fn decode<U: TimerUnit>(bits: &str) -> TimerValue<U> {
    let unit = bits.get(..3).map(U::from_bits).unwrap_or(U::INVALID);

    let multiples = bits
        .bytes()
        .skip(3)
        .zip([16u8, 8, 4, 2, 1])
        .filter(|(c, _)| *c == b'1')
        .map(|(_, place)| place)
        .sum();

    TimerValue { unit, multiples }
}
