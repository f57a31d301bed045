pub mod mock_ports;

pub use mock_ports::{
    response_with_a, response_with_cname_only, response_without_answers, MockAnswerCache,
    MockSystemProbe, MockUpstreamTransport, RoundEvent,
};
