//! In-memory answer cache.

use cleardns_application::ports::AnswerCache;
use dashmap::DashMap;
use std::net::Ipv4Addr;

/// Process-lifetime map of confirmed-clean answers.
///
/// No TTL honoring and no eviction: a poisoning-resistant answer that was
/// clean once is kept until the process exits. A restart clears it.
#[derive(Default)]
pub struct InMemoryAnswerCache {
    entries: DashMap<String, Ipv4Addr>,
}

impl InMemoryAnswerCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AnswerCache for InMemoryAnswerCache {
    fn get(&self, domain: &str) -> Option<Ipv4Addr> {
        self.entries.get(domain).map(|entry| *entry)
    }

    fn put(&self, domain: &str, addr: Ipv4Addr) {
        self.entries.insert(domain.to_string(), addr);
    }
}
