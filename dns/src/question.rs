use crate::error::Result;
use crate::utils::domain_to_qname;
use byteorder::{WriteBytesExt, BE};
use domain_name_query_types::{QClass, QType};

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.2
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    domain: String,
    qtype: u16,
    qclass: u16,
}

impl Question {
    pub fn new(domain: &str, qtype: impl Into<u16>, qclass: impl Into<u16>) -> Self {
        Self {
            domain: domain.to_string(),
            qtype: qtype.into(),
            qclass: qclass.into(),
        }
    }

    pub fn a_record(domain: &str) -> Self {
        Self::new(domain, QType::A, QClass::In)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn qtype(&self) -> QType {
        QType::from(self.qtype)
    }

    pub fn qclass(&self) -> QClass {
        QClass::from(self.qclass)
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> Result<()> {
        let qname = domain_to_qname(&self.domain)?;
        bytes.extend_from_slice(&qname);

        bytes.write_u16::<BE>(self.qtype)?;
        bytes.write_u16::<BE>(self.qclass)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn to_bytes_test() {
        let mut bytes: Vec<u8> = vec![];
        Question::a_record("example.com").to_bytes(&mut bytes).unwrap();

        let expected: [u8; 17] = [
            0x07, 0x65, 0x78, 0x61, 0x6d, 0x70, 0x6c, 0x65, // "example"
            0x03, 0x63, 0x6f, 0x6d, // "com"
            0x00, 0x00, 0x01, 0x00, 0x01,
        ];
        assert_eq!(&expected[..], &bytes[..]);
    }

    #[test]
    fn raw_type_and_class() {
        let mut bytes: Vec<u8> = vec![];
        Question::new("a", 0x1c00u16, 0x00ffu16).to_bytes(&mut bytes).unwrap();

        assert_eq!(vec![1, b'a', 0, 0x1c, 0x00, 0x00, 0xff], bytes);
    }

    #[test]
    fn typed_accessors() {
        let q = Question::new("z.cn", QType::Aaaa, QClass::Ch);
        assert_eq!("z.cn", q.domain());
        assert_eq!(QType::Aaaa, q.qtype());
        assert_eq!(QClass::Ch, q.qclass());
    }

    #[test]
    fn bad_label_leaves_no_partial_output() {
        let mut bytes: Vec<u8> = vec![9];
        let err = Question::a_record("a..b").to_bytes(&mut bytes).unwrap_err();

        assert!(matches!(err, Error::InvalidLabel { .. }));
        assert_eq!(vec![9], bytes);
    }
}
