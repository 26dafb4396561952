use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} value {value} does not fit in {bits} bits")]
    InvalidField {
        field: &'static str,
        value: u8,
        bits: u8,
    },

    #[error("label '{label}' is {len} bytes long, the limit is {max}")]
    LabelTooLong {
        label: String,
        len: usize,
        max: usize,
    },

    #[error("invalid label in '{domain}': {reason}")]
    InvalidLabel { domain: String, reason: String },

    #[error("{0} questions do not fit in the header count")]
    TooManyQuestions(usize),

    #[error("response is {0} bytes long, too short to carry a response code")]
    ShortResponse(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
