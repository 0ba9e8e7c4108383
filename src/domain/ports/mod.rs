mod contact_relay_port;
mod link_opener_port;

pub use contact_relay_port::ContactRelayPort;
pub use link_opener_port::LinkOpenerPort;

#[cfg(test)]
pub mod mocks {
    pub use super::contact_relay_port::MockContactRelayPort;
    pub use super::link_opener_port::MockLinkOpenerPort;
}
