//! CoAP value types shared by the interface and the modem drivers.

use heapless::Vec;

/// Largest payload carried by a single CoAP exchange with the modem
pub const MAX_PAYLOAD_LEN: usize = 512;

/// Longest URI accepted by the modem's CoAP profile
pub const MAX_URI_LEN: usize = 200;

/// CoAP profile slot in the modem's non-volatile memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileId(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Method {
    Get,
    Delete,
    Put,
    Post,
}

/// Content format of a request payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ContentFormat {
    TextPlain = 0,
    ApplicationLinkFormat = 1,
    ApplicationXml = 2,
    ApplicationOctetStream = 3,
    ApplicationExi = 4,
    ApplicationJson = 5,
}

/// Block-wise transfer position of one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Block {
    pub number: u32,
    pub more: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Payload<'a> {
    pub data: &'a [u8],
    pub format: ContentFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Request<'a> {
    pub method: Method,
    pub payload: Option<Payload<'a>>,
    pub block: Option<Block>,
}

impl<'a> Request<'a> {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            payload: None,
            block: None,
        }
    }

    pub fn with_payload(mut self, data: &'a [u8], format: ContentFormat) -> Self {
        self.payload = Some(Payload { data, format });
        self
    }

    pub fn with_block(mut self, number: u32, more: bool) -> Self {
        self.block = Some(Block { number, more });
        self
    }
}

/// Server response to a CoAP request.
///
/// `code` is the CoAP response code byte as reported by the modem, the
/// class in the upper three bits and the detail in the lower five, e.g.
/// `69` for 2.05 Content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Response {
    pub code: u16,
    pub payload: Vec<u8, MAX_PAYLOAD_LEN>,
}

impl Response {
    pub fn class(&self) -> u8 {
        ((self.code >> 5) & 0x07) as u8
    }

    pub fn detail(&self) -> u8 {
        (self.code & 0x1f) as u8
    }

    /// 2.xx response
    pub fn is_success(&self) -> bool {
        self.class() == 2
    }
}
