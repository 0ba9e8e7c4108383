//! Contact relay adapters.

mod dto;
mod http_relay;

pub use http_relay::HttpContactRelay;
