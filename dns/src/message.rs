use crate::error::{Error, Result};
use crate::header::{Header, HEADER_LEN};
use crate::question::Question;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    header: Header,
    questions: Vec<Question>,
}

impl Message {
    pub fn new(header: Header, questions: Vec<Question>) -> Self {
        Self { header, questions }
    }

    /// A recursive A/IN query for `domain`, the shape of most stub lookups.
    pub fn query(id: u16, domain: &str) -> Self {
        let header = Header::new(id).with_recursion_desired(true);
        Self::new(header, vec![Question::a_record(domain)])
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn qd_count(&self) -> Result<u16> {
        u16::try_from(self.questions.len()).map_err(|_| Error::TooManyQuestions(self.questions.len()))
    }

    pub fn header_to_bytes(&self, bytes: &mut Vec<u8>) -> Result<()> {
        self.header.to_bytes(self.qd_count()?, bytes)
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> Result<()> {
        let start = bytes.len();
        bytes.reserve(HEADER_LEN + self.questions.len() * 32);

        let encoded = self.header_to_bytes(bytes).and_then(|_| {
            self.questions
                .iter()
                .try_for_each(|question| question.to_bytes(bytes))
        });
        if encoded.is_err() {
            bytes.truncate(start);
        }

        encoded
    }
}
