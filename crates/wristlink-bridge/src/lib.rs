//! Lifecycle coordinator.
//!
//! Subscribes to host-delivered events and drives the weather pipeline,
//! the configuration surface, and the device channel. Handlers contain
//! their own failures: nothing here retries, and no failed cycle affects
//! the next event.

pub mod bridge;
pub mod error;
pub mod events;

pub use bridge::{Bridge, SurfaceOpener, SystemBrowserOpener};
pub use error::BridgeError;
pub use events::HostEvent;
