use std::fmt;

/// The RCODE nibble of a response header.
///
/// Only the codes a stub query can expect to see are named; anything else is
/// kept as `Unmapped` so callers can still report it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotAuth,
    NotZone,
    Unmapped(u8),
}

impl ResponseCode {
    pub fn value(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NxDomain => 3,
            ResponseCode::NotAuth => 9,
            ResponseCode::NotZone => 10,
            ResponseCode::Unmapped(n) => *n,
        }
    }
}

impl From<u8> for ResponseCode {
    fn from(value: u8) -> Self {
        match value {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NxDomain,
            9 => ResponseCode::NotAuth,
            10 => ResponseCode::NotZone,
            n => ResponseCode::Unmapped(n),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResponseCode::NoError => write!(f, "Domain exists!"),
            ResponseCode::FormErr => write!(f, "Format error"),
            ResponseCode::ServFail => write!(f, "Server failure"),
            ResponseCode::NxDomain => write!(f, "Non-existent domain"),
            ResponseCode::NotAuth => write!(f, "Server not authorative for zone"),
            ResponseCode::NotZone => write!(f, "Name not in zone"),
            ResponseCode::Unmapped(n) => write!(f, "Unmapped response code for '{}'", n),
        }
    }
}
