use core::fmt;
use heapless::{String, Vec};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

pub fn decode_hex<const N: usize>(s: &str) -> Result<Vec<u8, N>, DecodeHexError> {
    if s.len() % 2 != 0 {
        return Err(DecodeHexError::OddLength);
    }

    let mut out = Vec::new();
    for pair in s.as_bytes().chunks(2) {
        let byte = (val(pair[0])? << 4) | val(pair[1])?;
        out.push(byte).map_err(|_| DecodeHexError::Overflow)?;
    }
    Ok(out)
}

pub fn encode_hex<const N: usize>(bytes: &[u8]) -> Result<String<N>, DecodeHexError> {
    let mut out = String::new();
    for b in bytes {
        for nibble in [b >> 4, b & 0x0f] {
            out.push(HEX_DIGITS[nibble as usize] as char)
                .map_err(|_| DecodeHexError::Overflow)?;
        }
    }
    Ok(out)
}

fn val(c: u8) -> Result<u8, DecodeHexError> {
    match c {
        b'A'..=b'F' => Ok(c - b'A' + 10),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'0'..=b'9' => Ok(c - b'0'),
        _ => Err(DecodeHexError::InvalidHexCharacter),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeHexError {
    OddLength,
    InvalidHexCharacter,
    Overflow,
}

impl fmt::Display for DecodeHexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeHexError::OddLength => "input string has an odd number of bytes".fmt(f),
            DecodeHexError::InvalidHexCharacter => "invalid hex character".fmt(f),
            DecodeHexError::Overflow => "output buffer too small".fmt(f),
        }
    }
}
