/// Events delivered by the host runtime.
///
/// Arrival order is the only ordering guarantee; handlers for distinct
/// events never coordinate with each other.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// The companion runtime finished loading.
    Ready,
    /// The device sent a message. Any inbound message is a refresh
    /// request; the content is not inspected.
    DeviceMessage,
    /// The user asked to open the configuration surface.
    ConfigurationRequested,
    /// The configuration surface navigated back with an encoded payload.
    ConfigurationReturned { payload: String },
}
