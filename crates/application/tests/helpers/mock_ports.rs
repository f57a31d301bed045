#![allow(dead_code)]

use async_trait::async_trait;
use cleardns_application::ports::{AnswerCache, RoundReceiver, SystemProbe, UpstreamTransport};
use cleardns_domain::wire::encode_name;
use cleardns_domain::DomainError;
use std::collections::{HashMap, VecDeque};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ── response datagrams ─────────────────────────────────────────────────────
//
// The decoder never checks the transaction id, so scripted responses can
// carry an arbitrary one; only the question echo has to match the domain.

fn response_header(ancount: u16) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&[0x2a, 0x2a, 0x81, 0x80]);
    bytes.extend_from_slice(&1u16.to_be_bytes());
    bytes.extend_from_slice(&ancount.to_be_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}

fn push_question(bytes: &mut Vec<u8>, domain: &str) {
    encode_name(bytes, domain).expect("valid test domain");
    bytes.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
}

/// A response whose single answer is an A record for `addr`, name given as
/// a compression pointer to the question.
pub fn response_with_a(domain: &str, addr: Ipv4Addr) -> Vec<u8> {
    let mut bytes = response_header(1);
    push_question(&mut bytes, domain);
    bytes.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01, 0, 0, 0, 60, 0, 4]);
    bytes.extend_from_slice(&addr.octets());
    bytes
}

pub fn response_without_answers(domain: &str) -> Vec<u8> {
    let mut bytes = response_header(0);
    push_question(&mut bytes, domain);
    bytes
}

pub fn response_with_cname_only(domain: &str, target: &str) -> Vec<u8> {
    let mut rdata = Vec::new();
    encode_name(&mut rdata, target).expect("valid cname target");

    let mut bytes = response_header(1);
    push_question(&mut bytes, domain);
    bytes.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x05, 0x00, 0x01, 0, 0, 0, 60]);
    bytes.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    bytes.extend_from_slice(&rdata);
    bytes
}

// ── system probe ───────────────────────────────────────────────────────────

pub struct MockSystemProbe {
    addresses: Mutex<HashMap<String, Ipv4Addr>>,
    calls: AtomicUsize,
}

impl MockSystemProbe {
    pub fn new() -> Self {
        Self {
            addresses: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_address(&self, domain: &str, addr: Ipv4Addr) {
        self.addresses
            .lock()
            .unwrap()
            .insert(domain.to_string(), addr);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockSystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemProbe for MockSystemProbe {
    async fn probe(&self, domain: &str) -> Result<Option<Ipv4Addr>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.addresses.lock().unwrap().get(domain).copied())
    }
}

// ── upstream transport ─────────────────────────────────────────────────────

/// One scripted event inside a round.
pub enum RoundEvent {
    Datagram(Vec<u8>),
    Timeout,
    Failure(String),
}

/// Replays pre-scripted rounds; each `start_round` consumes the next script.
/// A round with no script behaves like silence (every receive times out).
pub struct MockUpstreamTransport {
    rounds: Mutex<VecDeque<Vec<RoundEvent>>>,
    rounds_started: AtomicUsize,
    fail_on_start: Mutex<Option<String>>,
}

impl MockUpstreamTransport {
    pub fn new() -> Self {
        Self {
            rounds: Mutex::new(VecDeque::new()),
            rounds_started: AtomicUsize::new(0),
            fail_on_start: Mutex::new(None),
        }
    }

    pub fn push_round(&self, events: Vec<RoundEvent>) {
        self.rounds.lock().unwrap().push_back(events);
    }

    pub fn fail_next_start(&self, message: &str) {
        *self.fail_on_start.lock().unwrap() = Some(message.to_string());
    }

    pub fn rounds_started(&self) -> usize {
        self.rounds_started.load(Ordering::SeqCst)
    }
}

impl Default for MockUpstreamTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamTransport for MockUpstreamTransport {
    async fn start_round(&self, _query: &[u8]) -> Result<Box<dyn RoundReceiver>, DomainError> {
        if let Some(message) = self.fail_on_start.lock().unwrap().take() {
            return Err(DomainError::TransportFailure(message));
        }

        self.rounds_started.fetch_add(1, Ordering::SeqCst);
        let events = self.rounds.lock().unwrap().pop_front().unwrap_or_default();
        Ok(Box::new(MockRoundReceiver {
            events: events.into(),
        }))
    }
}

struct MockRoundReceiver {
    events: VecDeque<RoundEvent>,
}

#[async_trait]
impl RoundReceiver for MockRoundReceiver {
    async fn next_datagram(&mut self) -> Result<Option<Vec<u8>>, DomainError> {
        match self.events.pop_front() {
            Some(RoundEvent::Datagram(bytes)) => Ok(Some(bytes)),
            Some(RoundEvent::Timeout) | None => Ok(None),
            Some(RoundEvent::Failure(message)) => Err(DomainError::TransportFailure(message)),
        }
    }
}

// ── answer cache ───────────────────────────────────────────────────────────

pub struct MockAnswerCache {
    entries: Mutex<HashMap<String, Ipv4Addr>>,
    puts: AtomicUsize,
}

impl MockAnswerCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            puts: AtomicUsize::new(0),
        }
    }

    pub fn preload(&self, domain: &str, addr: Ipv4Addr) {
        self.entries
            .lock()
            .unwrap()
            .insert(domain.to_string(), addr);
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    /// Reads an entry without going through the `AnswerCache` trait.
    pub fn get_entry(&self, domain: &str) -> Option<Ipv4Addr> {
        self.entries.lock().unwrap().get(domain).copied()
    }
}

impl Default for MockAnswerCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerCache for MockAnswerCache {
    fn get(&self, domain: &str) -> Option<Ipv4Addr> {
        self.entries.lock().unwrap().get(domain).copied()
    }

    fn put(&self, domain: &str, addr: Ipv4Addr) {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(domain.to_string(), addr);
    }
}
