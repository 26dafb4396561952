use byteorder::{WriteBytesExt, BE};
use domain_name_query_types::Opcode;

use crate::error::{Error, Result};

pub const HEADER_LEN: usize = 12;

const OPCODE_BITS: u8 = 4;
const Z_BITS: u8 = 3;
const RCODE_BITS: u8 = 4;

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1
//
//   0  1  2  3  4  5  6  7  8  9  10 11 12 13 14 15
// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
// |                      ID                       |
// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//
// QDCOUNT is not stored, the message derives it from its questions.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Header {
    id: u16,
    qr: bool,
    opcode: u8,
    aa: bool,
    tc: bool,
    rd: bool,
    ra: bool,
    z: u8,
    rcode: u8,
    ancount: u16,
    nscount: u16,
    arcount: u16,
}

fn check_width(field: &'static str, value: u8, bits: u8) -> Result<u8> {
    if value >> bits != 0 {
        return Err(Error::InvalidField { field, value, bits });
    }
    Ok(value)
}

impl Header {
    /// A standard query header with every flag cleared.
    pub fn new(id: u16) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_response(mut self, qr: bool) -> Self {
        self.qr = qr;
        self
    }

    pub fn with_opcode(mut self, opcode: Opcode) -> Self {
        self.opcode = opcode.value();
        self
    }

    pub fn with_raw_opcode(mut self, opcode: u8) -> Result<Self> {
        self.opcode = check_width("opcode", opcode, OPCODE_BITS)?;
        Ok(self)
    }

    pub fn with_authoritative(mut self, aa: bool) -> Self {
        self.aa = aa;
        self
    }

    pub fn with_truncated(mut self, tc: bool) -> Self {
        self.tc = tc;
        self
    }

    pub fn with_recursion_desired(mut self, rd: bool) -> Self {
        self.rd = rd;
        self
    }

    pub fn with_recursion_available(mut self, ra: bool) -> Self {
        self.ra = ra;
        self
    }

    pub fn with_z(mut self, z: u8) -> Result<Self> {
        self.z = check_width("z", z, Z_BITS)?;
        Ok(self)
    }

    pub fn with_rcode(mut self, rcode: u8) -> Result<Self> {
        self.rcode = check_width("rcode", rcode, RCODE_BITS)?;
        Ok(self)
    }

    pub fn with_counts(mut self, ancount: u16, nscount: u16, arcount: u16) -> Self {
        self.ancount = ancount;
        self.nscount = nscount;
        self.arcount = arcount;
        self
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    pub fn truncated(&self) -> bool {
        self.tc
    }

    pub fn recursion_desired(&self) -> bool {
        self.rd
    }

    pub fn rcode(&self) -> u8 {
        self.rcode
    }

    // TC and RCODE are never packed into an outgoing query.
    fn flags(&self) -> (u8, u8) {
        let first = (self.qr as u8) << 7 | self.opcode << 3 | (self.aa as u8) << 1 | self.rd as u8;
        let second = (self.ra as u8) << 7 | self.z << 4;

        (first, second)
    }

    pub fn to_bytes(&self, qdcount: u16, bytes: &mut Vec<u8>) -> Result<()> {
        let (first, second) = self.flags();

        bytes.write_u16::<BE>(self.id)?;
        bytes.write_u8(first)?;
        bytes.write_u8(second)?;
        bytes.write_u16::<BE>(qdcount)?;
        bytes.write_u16::<BE>(self.ancount)?;
        bytes.write_u16::<BE>(self.nscount)?;
        bytes.write_u16::<BE>(self.arcount)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(header: &Header, qdcount: u16) -> Vec<u8> {
        let mut bytes = vec![];
        header.to_bytes(qdcount, &mut bytes).unwrap();
        bytes
    }

    #[test]
    fn recursion_desired_query() {
        let header = Header::new(0xAAAA).with_recursion_desired(true);

        assert_eq!(
            vec![0xAA, 0xAA, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
            encode(&header, 1)
        );
    }

    #[test]
    fn flag_positions() {
        let header = Header::new(0)
            .with_response(true)
            .with_opcode(Opcode::Status)
            .with_authoritative(true)
            .with_recursion_desired(true)
            .with_recursion_available(true)
            .with_z(0b101)
            .unwrap();

        assert_eq!(2, header.opcode());

        let bytes = encode(&header, 0);
        assert_eq!(0b1001_0011, bytes[2]);
        assert_eq!(0b1101_0000, bytes[3]);
    }

    #[test]
    fn flags_stay_in_their_byte() {
        let plain = encode(&Header::new(7), 1);
        let aa = encode(&Header::new(7).with_authoritative(true), 1);
        let ra = encode(&Header::new(7).with_recursion_available(true), 1);

        assert_eq!(plain[3], aa[3]);
        assert_ne!(plain[2], aa[2]);
        assert_eq!(plain[2], ra[2]);
        assert_ne!(plain[3], ra[3]);
    }

    #[test]
    fn truncation_and_rcode_are_not_packed() {
        let header = Header::new(1)
            .with_truncated(true)
            .with_rcode(3)
            .unwrap();

        assert!(header.truncated());
        assert_eq!(3, header.rcode());
        assert_eq!(encode(&Header::new(1), 1), encode(&header, 1));
    }

    #[test]
    fn counts_are_big_endian() {
        let header = Header::new(0x1234).with_counts(0x0102, 0x0304, 0x0506);

        assert_eq!(
            vec![0x12, 0x34, 0, 0, 0x00, 0x02, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06],
            encode(&header, 2)
        );
    }

    #[test]
    fn sub_byte_fields_are_validated() {
        assert_eq!(15, Header::new(0).with_raw_opcode(15).unwrap().opcode());
        assert!(matches!(
            Header::new(0).with_raw_opcode(16),
            Err(Error::InvalidField { field: "opcode", value: 16, bits: 4 })
        ));
        assert!(Header::new(0).with_z(7).is_ok());
        assert!(matches!(Header::new(0).with_z(8), Err(Error::InvalidField { field: "z", .. })));
        assert!(matches!(Header::new(0).with_rcode(16), Err(Error::InvalidField { field: "rcode", .. })));
    }
}
