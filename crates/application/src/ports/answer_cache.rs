use std::net::Ipv4Addr;

/// Confirmed-clean answers memoized for the process lifetime. No expiry,
/// no eviction; only addresses that passed the forged-answer filter may be
/// stored.
pub trait AnswerCache: Send + Sync {
    fn get(&self, domain: &str) -> Option<Ipv4Addr>;
    fn put(&self, domain: &str, addr: Ipv4Addr);
}
