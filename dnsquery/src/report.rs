use std::net::SocketAddr;

use dns::ResponseCode;

// One 0x prefix then lowercase digits; empty input renders as nothing.
pub fn hex_dump(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    let digits: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("0x{}", digits)
}

pub fn render(
    domain: &str,
    server_addr: SocketAddr,
    response_code: ResponseCode,
    encoded_query: &[u8],
    encoded_answer: &[u8],
) -> String {
    format!(
        "DNS query results for '{}' against '{}'\n>> {}\n>> encodedQuery:  {}\n>> encodedAnswer: {}\n",
        domain,
        server_addr,
        response_code,
        hex_dump(encoded_query),
        hex_dump(encoded_answer),
    )
}
