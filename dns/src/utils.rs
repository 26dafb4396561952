use crate::error::{Error, Result};

// Largest length a one-byte label prefix can carry.
pub const MAX_LABEL_LEN: usize = u8::MAX as usize;

fn is_label_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

fn invalid_label(domain: &str, reason: String) -> Error {
    Error::InvalidLabel {
        domain: domain.to_string(),
        reason,
    }
}

// Every dot-separated segment must be non-empty, so "", "." and a trailing
// dot are rejected along with "a..b".
pub fn split_labels(domain: &str) -> Result<Vec<&str>> {
    let mut labels = Vec::new();
    for label in domain.split('.') {
        if label.is_empty() {
            return Err(invalid_label(domain, "empty label".to_string()));
        }

        if label.len() > MAX_LABEL_LEN {
            return Err(Error::LabelTooLong {
                label: label.to_string(),
                len: label.len(),
                max: MAX_LABEL_LEN,
            });
        }

        if let Some(c) = label.chars().find(|c| !c.is_ascii() || !is_label_byte(*c as u8)) {
            return Err(invalid_label(domain, format!("character {:?} in label '{}'", c, label)));
        }

        labels.push(label);
    }

    Ok(labels)
}

// Domain to length-prefixed labels plus the zero terminator.
pub fn domain_to_qname(domain: &str) -> Result<Vec<u8>> {
    let labels = split_labels(domain)?;

    let mut qname: Vec<u8> = Vec::with_capacity(domain.len() + 2);
    for label in labels {
        qname.push(label.len() as u8);
        qname.extend_from_slice(label.as_bytes());
    }

    qname.push(0);

    Ok(qname)
}
