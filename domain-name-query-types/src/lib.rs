use std::fmt;
use std::str::FromStr;

mod opcode;
mod response_code;

pub use opcode::Opcode;
pub use response_code::ResponseCode;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown {kind}: '{input}'")]
pub struct ParseError {
    kind: &'static str,
    input: String,
}

impl ParseError {
    fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

// https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.2
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QType {
    A,
    Ns,
    Cname,
    Soa,
    Ptr,
    Mx,
    Txt,
    Aaaa,
    Srv,
    Any,
    Other(u16),
}

impl From<u16> for QType {
    fn from(value: u16) -> Self {
        match value {
            1 => QType::A,
            2 => QType::Ns,
            5 => QType::Cname,
            6 => QType::Soa,
            12 => QType::Ptr,
            15 => QType::Mx,
            16 => QType::Txt,
            28 => QType::Aaaa,
            33 => QType::Srv,
            255 => QType::Any,
            n => QType::Other(n),
        }
    }
}

impl From<QType> for u16 {
    fn from(q_type: QType) -> Self {
        match q_type {
            QType::A => 1,
            QType::Ns => 2,
            QType::Cname => 5,
            QType::Soa => 6,
            QType::Ptr => 12,
            QType::Mx => 15,
            QType::Txt => 16,
            QType::Aaaa => 28,
            QType::Srv => 33,
            QType::Any => 255,
            QType::Other(n) => n,
        }
    }
}

impl fmt::Display for QType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            QType::A => "A",
            QType::Ns => "NS",
            QType::Cname => "CNAME",
            QType::Soa => "SOA",
            QType::Ptr => "PTR",
            QType::Mx => "MX",
            QType::Txt => "TXT",
            QType::Aaaa => "AAAA",
            QType::Srv => "SRV",
            QType::Any => "ANY",
            QType::Other(n) => return write!(f, "TYPE{}", n),
        };
        write!(f, "{}", s)
    }
}

impl FromStr for QType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let q_type = match upper.as_str() {
            "A" => QType::A,
            "NS" => QType::Ns,
            "CNAME" => QType::Cname,
            "SOA" => QType::Soa,
            "PTR" => QType::Ptr,
            "MX" => QType::Mx,
            "TXT" => QType::Txt,
            "AAAA" => QType::Aaaa,
            "SRV" => QType::Srv,
            "ANY" | "*" => QType::Any,
            other => {
                let digits = other.strip_prefix("TYPE").unwrap_or(other);
                let n = digits
                    .parse::<u16>()
                    .map_err(|_| ParseError::new("query type", s))?;
                QType::from(n)
            }
        };
        Ok(q_type)
    }
}

// https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.5
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QClass {
    In,
    Cs,
    Ch,
    Hs,
    Any,
    Other(u16),
}

impl From<u16> for QClass {
    fn from(value: u16) -> Self {
        match value {
            1 => QClass::In,
            2 => QClass::Cs,
            3 => QClass::Ch,
            4 => QClass::Hs,
            255 => QClass::Any,
            n => QClass::Other(n),
        }
    }
}

impl From<QClass> for u16 {
    fn from(q_class: QClass) -> Self {
        match q_class {
            QClass::In => 1,
            QClass::Cs => 2,
            QClass::Ch => 3,
            QClass::Hs => 4,
            QClass::Any => 255,
            QClass::Other(n) => n,
        }
    }
}

impl fmt::Display for QClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            QClass::In => "IN",
            QClass::Cs => "CS",
            QClass::Ch => "CH",
            QClass::Hs => "HS",
            QClass::Any => "ANY",
            QClass::Other(n) => return write!(f, "CLASS{}", n),
        };
        write!(f, "{}", s)
    }
}

impl FromStr for QClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let q_class = match upper.as_str() {
            "IN" => QClass::In,
            "CS" => QClass::Cs,
            "CH" => QClass::Ch,
            "HS" => QClass::Hs,
            "ANY" | "*" => QClass::Any,
            other => {
                let digits = other.strip_prefix("CLASS").unwrap_or(other);
                let n = digits
                    .parse::<u16>()
                    .map_err(|_| ParseError::new("query class", s))?;
                QClass::from(n)
            }
        };
        Ok(q_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q_type_values() {
        assert_eq!(1u16, QType::A.into());
        assert_eq!(28u16, QType::Aaaa.into());
        assert_eq!(QType::Mx, QType::from(15));
        assert_eq!(QType::Other(65), QType::from(65));
    }

    #[test]
    fn q_type_parse() {
        assert_eq!(QType::A, "a".parse().unwrap());
        assert_eq!(QType::Aaaa, "AAAA".parse().unwrap());
        assert_eq!(QType::Other(65), "TYPE65".parse().unwrap());
        assert_eq!(QType::Txt, "16".parse().unwrap());
        assert!("BOGUS".parse::<QType>().is_err());
    }

    #[test]
    fn q_type_display() {
        assert_eq!("CNAME", QType::Cname.to_string());
        assert_eq!("TYPE65", QType::Other(65).to_string());
    }

    #[test]
    fn q_class_parse_and_display() {
        assert_eq!(QClass::In, "in".parse().unwrap());
        assert_eq!(QClass::Ch, "CLASS3".parse().unwrap());
        assert_eq!(1u16, QClass::In.into());
        assert_eq!("CLASS42", QClass::Other(42).to_string());

        let err = "nowhere".parse::<QClass>().unwrap_err();
        assert_eq!("unknown query class: 'nowhere'", err.to_string());
    }
}
