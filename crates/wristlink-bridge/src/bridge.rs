//! Host-event dispatch.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use wristlink_device::{send_logged, DeviceChannel, SendOutcome, TransportDict};
use wristlink_settings::decode_return_payload;
use wristlink_weather::WeatherPipeline;

use crate::error::BridgeError;
use crate::events::HostEvent;

/// Opens the configuration surface in an external viewer.
pub trait SurfaceOpener: Send + Sync {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Default opener backed by the system browser.
pub struct SystemBrowserOpener;

impl SurfaceOpener for SystemBrowserOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        webbrowser::open(url)
    }
}

/// Wires host events to the weather pipeline, the configuration surface,
/// and the device channel.
///
/// Cheap to clone; every handler invocation is an independent cycle over
/// shared immutable collaborators.
#[derive(Clone)]
pub struct Bridge {
    pipeline: WeatherPipeline,
    channel: Arc<dyn DeviceChannel>,
    surface: Arc<dyn SurfaceOpener>,
    config_url: String,
}

impl Bridge {
    pub fn new(
        pipeline: WeatherPipeline,
        channel: Arc<dyn DeviceChannel>,
        surface: Arc<dyn SurfaceOpener>,
        config_url: String,
    ) -> Self {
        Self {
            pipeline,
            channel,
            surface,
            config_url,
        }
    }

    /// Handle one host event to completion.
    ///
    /// The returned error is terminal for this event's cycle and safe to
    /// drop; the event loop logs it and moves on.
    pub async fn handle_event(&self, event: HostEvent) -> Result<(), BridgeError> {
        tracing::debug!("Handling {:?}", event);
        match event {
            HostEvent::Ready | HostEvent::DeviceMessage => self.refresh_weather().await,
            HostEvent::ConfigurationRequested => {
                self.open_configuration();
                Ok(())
            }
            HostEvent::ConfigurationReturned { payload } => {
                self.apply_configuration(&payload).await
            }
        }
    }

    /// Drive the bridge from a host event stream.
    ///
    /// Each event runs in its own task, so a slow fetch never delays the
    /// next event and overlapping cycles all run to completion. The last
    /// acknowledged message wins on the device; no sequencing is applied.
    pub async fn run(&self, mut events: mpsc::Receiver<HostEvent>) {
        let mut cycles = JoinSet::new();
        while let Some(event) = events.recv().await {
            let bridge = self.clone();
            cycles.spawn(async move {
                if let Err(e) = bridge.handle_event(event).await {
                    tracing::warn!("Event cycle failed: {}", e);
                }
            });
        }
        // Host stream closed; let in-flight cycles finish.
        while cycles.join_next().await.is_some() {}
    }

    async fn refresh_weather(&self) -> Result<(), BridgeError> {
        let dict = self.pipeline.run().await?;
        self.deliver(dict).await
    }

    fn open_configuration(&self) {
        tracing::info!("Showing configuration page: {}", self.config_url);
        if let Err(e) = self.surface.open(&self.config_url) {
            tracing::warn!("Failed to open configuration page: {}", e);
        }
    }

    async fn apply_configuration(&self, payload: &str) -> Result<(), BridgeError> {
        let prefs = decode_return_payload(payload)?;
        tracing::info!("Configuration page returned: {:?}", prefs);

        let dict = TransportDict::configuration(prefs.light_color_scheme, prefs.degree_celsius);
        self.deliver(dict).await
    }

    async fn deliver(&self, dict: TransportDict) -> Result<(), BridgeError> {
        match send_logged(self.channel.as_ref(), &dict).await {
            SendOutcome::Acknowledged => Ok(()),
            SendOutcome::Rejected(reason) => Err(BridgeError::Rejected(reason)),
        }
    }
}
