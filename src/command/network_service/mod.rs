//! ### 6 - Network service

pub mod responses;
pub mod types;

use super::NoResponse;
use atat::atat_derive::AtatCmd;
use responses::{CellStatistics, SignalQuality};
use types::OperatorSelectionMode;

/// 6.3 Extended signal quality +CESQ
///
/// Returns the received signal quality and level. On SARA-N2 only the
/// E-UTRA fields <rsrq> and <rsrp> carry a value, the GERAN and UTRA fields
/// are reported as 99 and 255.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CESQ", SignalQuality)]
pub struct GetSignalQuality;

/// 6.4 Operator selection +COPS
///
/// Automatic selection registers the MT with the network, deregister
/// (2) detaches it and keeps it unregistered until the next automatic
/// selection.
#[derive(Clone, AtatCmd)]
#[at_cmd("+COPS", NoResponse, attempts = 1, timeout_ms = 180000)]
pub struct SetOperatorSelection {
    #[at_arg(position = 0)]
    pub mode: OperatorSelectionMode,
}

/// 6.13 Query UE statistics +NUESTATS
///
/// Only the "CELL" statistics group is supported, reporting the serving
/// cell.
#[derive(Clone, AtatCmd)]
#[at_cmd("+NUESTATS", CellStatistics, parse = responses::parse_cell_statistics)]
pub struct GetCellStatistics<'a> {
    #[at_arg(position = 0, len = 5)]
    pub stat_type: &'a str,
}

impl GetCellStatistics<'static> {
    pub fn cell() -> Self {
        Self { stat_type: "CELL" }
    }
}
