//! Typed key/value transport to the paired device.
//!
//! The device consumes small fixed-shape dictionaries; this crate owns the
//! dictionary type and the channel abstraction that delivers it. The channel
//! never interprets keys and never retries - each send reports one attempt.

pub mod channel;
pub mod transport;

pub use channel::{send_logged, Delivery, DeviceChannel, HostChannel, RejectReason, SendOutcome};
pub use transport::{TransportDict, TransportKey, TransportValue};
