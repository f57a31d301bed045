//! Query encoding (RFC 1035 §4.1.1, §4.1.2)
//!
//! A query is a 12-byte header followed by a single question: the domain as
//! length-prefixed labels, a zero terminator, then QTYPE and QCLASS. The
//! transaction id is randomized on every build so no two attempts reuse one.

use super::{HEADER_LEN, QUESTION_TAIL_LEN};
use crate::errors::DomainError;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;

/// Header remainder after the id: standard query, recursion desired,
/// one question, empty answer/authority/additional sections.
const QUERY_HEADER_TAIL: [u8; 10] = [0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

/// QTYPE A, QCLASS IN.
const QUESTION_TAIL: [u8; QUESTION_TAIL_LEN] = [0x00, 0x01, 0x00, 0x01];

/// An encoded single-question A query, ready to send.
///
/// Keeps the encoded length of the question name around because the answer
/// decoder computes section offsets from it.
#[derive(Debug, Clone)]
pub struct QueryMessage {
    id: u16,
    bytes: Vec<u8>,
    name_len: usize,
}

impl QueryMessage {
    /// Encodes a query for `domain`, drawing a fresh random transaction id.
    pub fn for_domain(domain: &str) -> Result<Self, DomainError> {
        let id = fastrand::u16(..);

        let mut bytes = Vec::with_capacity(HEADER_LEN + domain.len() + 2 + QUESTION_TAIL_LEN);
        bytes.extend_from_slice(&id.to_be_bytes());
        bytes.extend_from_slice(&QUERY_HEADER_TAIL);

        let name_start = bytes.len();
        encode_name(&mut bytes, domain)?;
        let name_len = bytes.len() - name_start;

        bytes.extend_from_slice(&QUESTION_TAIL);

        Ok(Self {
            id,
            bytes,
            name_len,
        })
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encoded length of the question name, label prefixes and terminator
    /// included.
    pub fn name_len(&self) -> usize {
        self.name_len
    }
}

/// Appends `domain` in label format: one length octet per label, the label
/// bytes, then a zero terminator.
pub fn encode_name(buffer: &mut Vec<u8>, domain: &str) -> Result<(), DomainError> {
    if domain.is_empty() {
        return Err(DomainError::InvalidDomainName("empty domain".to_string()));
    }
    if domain.len() + 2 > MAX_NAME_LEN {
        return Err(DomainError::MessageTooLarge(format!(
            "encoded name for '{}' exceeds {} octets",
            domain, MAX_NAME_LEN
        )));
    }

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "empty label in '{}'",
                domain
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::MessageTooLarge(format!(
                "label '{}' exceeds {} octets",
                label, MAX_LABEL_LEN
            )));
        }

        buffer.push(label.len() as u8);
        buffer.extend_from_slice(label.as_bytes());
    }

    buffer.push(0);
    Ok(())
}
