mod udp;


pub use udp::UdpUpstreamTransport;
