//! DNS wire format, restricted to what the resolver actually sends and
//! receives: one A/IN question out, raw answer datagrams back in.

mod answer;
mod query;

pub use answer::first_a_record;
pub use query::{encode_name, QueryMessage};

pub(crate) const HEADER_LEN: usize = 12;
pub(crate) const QUESTION_TAIL_LEN: usize = 4;
