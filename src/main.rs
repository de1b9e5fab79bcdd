use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use wristlink_bridge::{Bridge, HostEvent, SystemBrowserOpener};
use wristlink_device::{HostChannel, SendOutcome};
use wristlink_weather::{FixRequest, StaticLocationSource, WeatherPipeline, WeatherProvider};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    wristlink_core::init()?;

    let (config, _validation) = wristlink_core::Config::load_validated()?;

    let provider = WeatherProvider::new(&config.weather.base_url, &config.weather.api_key)?;
    let source = Arc::new(StaticLocationSource::new(
        config.location.latitude,
        config.location.longitude,
    ));
    let request = FixRequest {
        timeout: config.location.timeout(),
        maximum_age: config.location.maximum_age(),
    };
    let pipeline = WeatherPipeline::new(source, provider, request);

    let (channel, mut deliveries) = HostChannel::new(8);
    let bridge = Bridge::new(
        pipeline,
        Arc::new(channel),
        Arc::new(SystemBrowserOpener),
        config.surface.page_url.clone(),
    );

    // Stand-in host adapter: print each outgoing dictionary and ack it.
    // A real deployment replaces this with the phone runtime's transport.
    tokio::spawn(async move {
        while let Some(delivery) = deliveries.recv().await {
            println!("-> device: {}", delivery.dict);
            let _ = delivery.reply.send(SendOutcome::Acknowledged);
        }
    });

    tracing::info!("Wristlink bridge started");

    // The host runtime would feed this stream; standalone, a single
    // process-ready event triggers one fetch-and-send cycle.
    let (events, stream) = mpsc::channel(8);
    events.send(HostEvent::Ready).await?;
    drop(events);

    bridge.run(stream).await;

    Ok(())
}
