mod answer_cache;
mod system_probe;
mod upstream_transport;

pub use answer_cache::AnswerCache;
pub use system_probe::SystemProbe;
pub use upstream_transport::{RoundReceiver, UpstreamTransport};
