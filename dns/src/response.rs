use crate::error::{Error, Result};
use domain_name_query_types::ResponseCode;

const FLAGS_LOW_BYTE: usize = 3;

// Reads the RCODE nibble straight out of the header; nothing else in the
// response is decoded.
pub fn extract_response_code(response: &[u8]) -> Result<ResponseCode> {
    let byte = response
        .get(FLAGS_LOW_BYTE)
        .ok_or(Error::ShortResponse(response.len()))?;

    Ok(ResponseCode::from(byte & 0x0F))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nx_domain_with_any_high_nibble() {
        for high in 0..16u8 {
            let response = [0xAA, 0xAA, 0x81, high << 4 | 0x03];
            assert_eq!(ResponseCode::NxDomain, extract_response_code(&response).unwrap());
        }
    }

    #[test]
    fn no_error() {
        let response = [0xAA, 0xAA, 0x81, 0x80, 0, 1, 0, 1, 0, 0, 0, 0];
        assert_eq!(ResponseCode::NoError, extract_response_code(&response).unwrap());
    }

    #[test]
    fn unmapped_code() {
        let response = [0, 0, 0, 0x87];
        let code = extract_response_code(&response).unwrap();
        assert_eq!(ResponseCode::Unmapped(7), code);
        assert_eq!("Unmapped response code for '7'", code.to_string());
    }

    #[test]
    fn short_response() {
        assert!(matches!(extract_response_code(&[0, 0, 0]), Err(Error::ShortResponse(3))));
        assert!(matches!(extract_response_code(&[]), Err(Error::ShortResponse(0))));
    }
}
