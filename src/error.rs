#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// No modem driver is bound to the interface
    DriverUnknown,
    /// A timer multiple exceeded 31, or a string argument exceeded its
    /// maximum length
    ExceedsMaxValue,
    /// The timer unit has no binary encoding
    InvalidUnitValue,
    /// The modem did not become ready, or did not attach, before the
    /// deadline
    FailToConnect,

    /// AT command failure, passed through from the driver unchanged
    Atat(atat::Error),
    /// Driver specific failure code, for drivers not built on AT commands
    Driver(u16),

    // CoAP transport errors
    CoapRequestFailed,
    ResponseTimeout,

    InvalidResponse,
    Overflow,
    IoPin,
    /// The URC channel has no free subscriber slot left
    SubscriberOverflow,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Self::DriverUnknown => defmt::write!(f, "DriverUnknown"),
            Self::ExceedsMaxValue => defmt::write!(f, "ExceedsMaxValue"),
            Self::InvalidUnitValue => defmt::write!(f, "InvalidUnitValue"),
            Self::FailToConnect => defmt::write!(f, "FailToConnect"),
            Self::Atat(e) => defmt::write!(f, "Atat({:?})", e),
            Self::Driver(code) => defmt::write!(f, "Driver({})", code),
            Self::CoapRequestFailed => defmt::write!(f, "CoapRequestFailed"),
            Self::ResponseTimeout => defmt::write!(f, "ResponseTimeout"),
            Self::InvalidResponse => defmt::write!(f, "InvalidResponse"),
            Self::Overflow => defmt::write!(f, "Overflow"),
            Self::IoPin => defmt::write!(f, "IoPin"),
            Self::SubscriberOverflow => defmt::write!(f, "SubscriberOverflow"),
        }
    }
}

impl From<atat::Error> for Error {
    fn from(e: atat::Error) -> Self {
        Self::Atat(e)
    }
}

impl From<atat::urc_channel::Error> for Error {
    fn from(_: atat::urc_channel::Error) -> Self {
        Self::SubscriberOverflow
    }
}

impl From<embassy_time::TimeoutError> for Error {
    fn from(_: embassy_time::TimeoutError) -> Self {
        Self::ResponseTimeout
    }
}
