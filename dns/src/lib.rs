// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1

mod error;
mod header;
mod message;
mod question;
mod response;
pub mod utils;

pub use domain_name_query_types::{Opcode, QClass, QType, ResponseCode};
pub use error::{Error, Result};
pub use header::{Header, HEADER_LEN};
pub use message::Message;
pub use question::Question;
pub use response::extract_response_code;

pub fn encode_header(message: &Message) -> Result<Vec<u8>> {
    let mut header_bytes: Vec<u8> = Vec::with_capacity(HEADER_LEN);
    message.header_to_bytes(&mut header_bytes)?;

    Ok(header_bytes)
}

pub fn encode_question(question: &Question) -> Result<Vec<u8>> {
    let mut question_bytes: Vec<u8> = vec![];
    question.to_bytes(&mut question_bytes)?;

    Ok(question_bytes)
}

pub fn encode_message(message: &Message) -> Result<Vec<u8>> {
    let mut request_bytes: Vec<u8> = vec![];
    message.to_bytes(&mut request_bytes)?;

    Ok(request_bytes)
}

// Shorthand for the usual recursive A lookup.
pub fn encode_request(id: u16, domain: &str) -> Result<Vec<u8>> {
    encode_message(&Message::query(id, domain))
}
