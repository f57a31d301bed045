//! Answer-section decoding (RFC 1035 §4.1.3, narrowed)
//!
//! This is not a general DNS parser. The resolver only ever sends a single
//! question, so the decoder leans on the server echoing that question back:
//! a record name is either a 2-byte compression pointer or a literal taken to
//! span exactly the query name's encoded length. Messages that interleave
//! both shapes inside one name, or answer a different question than was
//! asked, are outside what this decoder handles.
//!
//! The datagram's transaction id is not compared to the query id; the
//! forged-answer filter downstream is the only gate on what gets accepted.

use std::net::Ipv4Addr;

use super::query::QueryMessage;
use super::{HEADER_LEN, QUESTION_TAIL_LEN};
use crate::errors::DomainError;

const ANCOUNT_OFFSET: usize = 6;
const POINTER_MASK: u8 = 0xC0;
const POINTER_LEN: usize = 2;
const TYPE_A: u16 = 1;
const A_RDLENGTH: usize = 4;

/// Scans the answer section for the first A record and returns its address.
///
/// `Ok(None)` when the section holds no usable A record. Reads past the end
/// of the datagram fail with [`DomainError::MalformedResponse`].
pub fn first_a_record(
    datagram: &[u8],
    query: &QueryMessage,
) -> Result<Option<Ipv4Addr>, DomainError> {
    let ancount = read_u16(datagram, ANCOUNT_OFFSET)?;

    // Header, echoed question name, QTYPE, QCLASS.
    let mut pos = HEADER_LEN + query.name_len() + QUESTION_TAIL_LEN;

    for _ in 0..ancount {
        let first = *datagram
            .get(pos)
            .ok_or_else(|| truncated(pos, datagram.len()))?;

        if first & POINTER_MASK == POINTER_MASK {
            pos += POINTER_LEN;
        } else {
            // Literal name, assumed to re-encode the question name.
            pos += query.name_len();
        }

        let rtype = read_u16(datagram, pos)?;
        // TYPE, CLASS, TTL.
        pos += 2 + 2 + 4;
        let rdlength = read_u16(datagram, pos)? as usize;
        pos += 2;

        if rtype == TYPE_A && rdlength == A_RDLENGTH {
            let data = datagram
                .get(pos..pos + A_RDLENGTH)
                .ok_or_else(|| truncated(pos, datagram.len()))?;
            return Ok(Some(Ipv4Addr::new(data[0], data[1], data[2], data[3])));
        }

        pos += rdlength;
    }

    Ok(None)
}

fn read_u16(buf: &[u8], pos: usize) -> Result<u16, DomainError> {
    match buf.get(pos..pos + 2) {
        Some(bytes) => Ok(u16::from_be_bytes([bytes[0], bytes[1]])),
        None => Err(truncated(pos, buf.len())),
    }
}

fn truncated(pos: usize, len: usize) -> DomainError {
    DomainError::MalformedResponse(format!(
        "datagram truncated: need offset {} of {} bytes",
        pos, len
    ))
}
