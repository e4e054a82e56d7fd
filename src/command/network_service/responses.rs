//! Responses for Network service Commands
use core::str::FromStr;

use atat::{atat_derive::AtatResp, AtatResp};

/// 6.3 Extended signal quality +CESQ
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct SignalQuality {
    #[at_arg(position = 0)]
    pub rxlev: u8,
    #[at_arg(position = 1)]
    pub ber: u8,
    #[at_arg(position = 2)]
    pub rscp: u8,
    #[at_arg(position = 3)]
    pub ecn0: u8,
    #[at_arg(position = 4)]
    pub rsrq: u8,
    #[at_arg(position = 5)]
    pub rsrp: u8,
}

/// 6.13 UE statistics +NUESTATS, "CELL" group
///
/// SARA-N2 reports this as `NUESTATS:CELL,<earfcn>,<pci>,<primary>,<rsrp>,
/// <rsrq>,<rssi>,<snr>`, without the leading `+` and with an unquoted group
/// name, so it is parsed by [`parse_cell_statistics`].
#[derive(Debug, Clone, PartialEq)]
pub struct CellStatistics {
    pub earfcn: u32,
    pub physical_cell_id: u16,
    pub primary_cell: u8,
    /// Tenths of dBm
    pub rsrp: i32,
    /// Tenths of dB
    pub rsrq: i32,
    /// Tenths of dBm
    pub rssi: i32,
    /// Tenths of dB
    pub snr: i32,
}

impl AtatResp for CellStatistics {}

pub fn parse_cell_statistics(resp: &[u8]) -> Result<CellStatistics, atat::Error> {
    fn field<'a, T: FromStr>(
        fields: &mut impl Iterator<Item = &'a str>,
    ) -> Result<T, atat::Error> {
        fields
            .next()
            .ok_or(atat::Error::Parse)?
            .parse()
            .map_err(|_| atat::Error::Parse)
    }

    let line = core::str::from_utf8(resp)
        .map_err(|_| atat::Error::Parse)?
        .trim();
    let line = line.strip_prefix('+').unwrap_or(line);
    let mut fields = line
        .strip_prefix("NUESTATS:")
        .ok_or(atat::Error::Parse)?
        .split(',')
        .map(str::trim);

    if fields.next().map(|group| group.trim_matches('"')) != Some("CELL") {
        return Err(atat::Error::Parse);
    }

    Ok(CellStatistics {
        earfcn: field(&mut fields)?,
        physical_cell_id: field(&mut fields)?,
        primary_cell: field(&mut fields)?,
        rsrp: field(&mut fields)?,
        rsrq: field(&mut fields)?,
        rssi: field(&mut fields)?,
        snr: field(&mut fields)?,
    })
}
