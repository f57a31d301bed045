use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use crate::blacklist::ForgedAnswerFilter;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Upstream DNS server queried on the fallback path.
    #[serde(default = "default_upstream_server")]
    pub upstream_server: String,

    /// Receive window per datagram, in milliseconds.
    #[serde(default = "default_receive_timeout")]
    pub receive_timeout: u64,

    /// Full send-then-wait cycles before giving up.
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,

    /// Datagrams to wait for within one round.
    #[serde(default = "default_wait_per_round")]
    pub wait_per_round: u32,

    /// Memoize confirmed-clean answers for the process lifetime.
    /// Off by default; injected address pools shift over time.
    #[serde(default = "default_false")]
    pub cache_enabled: bool,

    /// Replaces the builtin forged-answer set when present.
    #[serde(default)]
    pub blacklist: Option<Vec<Ipv4Addr>>,
}

impl ResolverConfig {
    pub fn forged_answer_filter(&self) -> ForgedAnswerFilter {
        match &self.blacklist {
            Some(addrs) => ForgedAnswerFilter::from_addrs(addrs.iter().copied()),
            None => ForgedAnswerFilter::builtin(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            upstream_server: default_upstream_server(),
            receive_timeout: default_receive_timeout(),
            max_rounds: default_max_rounds(),
            wait_per_round: default_wait_per_round(),
            cache_enabled: false,
            blacklist: None,
        }
    }
}

fn default_upstream_server() -> String {
    "8.8.8.8:53".to_string()
}

fn default_receive_timeout() -> u64 {
    6000
}

fn default_max_rounds() -> u32 {
    2
}

fn default_wait_per_round() -> u32 {
    3
}

fn default_false() -> bool {
    false
}
