//! Device message channel abstraction.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use crate::transport::TransportDict;

/// Why the device (or its transport) refused a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("device not connected")]
    NotConnected,

    #[error("transmission timed out")]
    Timeout,

    #[error("channel busy")]
    Busy,

    #[error("{0}")]
    Other(String),
}

/// Result of one transmission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Acknowledged,
    Rejected(RejectReason),
}

impl SendOutcome {
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, SendOutcome::Acknowledged)
    }
}

/// Transport for dictionaries bound for the paired device.
///
/// Implementations do not interpret keys and do not retry; the outcome
/// covers this attempt only. Callers decide what a rejection means for
/// their cycle (in this system: terminal, logged, never retried).
#[async_trait]
pub trait DeviceChannel: Send + Sync {
    async fn send(&self, dict: &TransportDict) -> SendOutcome;
}

/// Send `dict` over `channel`, logging the outcome.
///
/// Rejections are logged with the dictionary content for diagnosis.
pub async fn send_logged(channel: &dyn DeviceChannel, dict: &TransportDict) -> SendOutcome {
    let outcome = channel.send(dict).await;
    match &outcome {
        SendOutcome::Acknowledged => {
            tracing::info!("Successfully sent {} to device", dict);
        }
        SendOutcome::Rejected(reason) => {
            tracing::warn!("Error sending {} to device: {}", dict, reason);
        }
    }
    outcome
}

/// One message handed to the host adapter, with a slot for the ack.
#[derive(Debug)]
pub struct Delivery {
    pub dict: TransportDict,
    pub reply: oneshot::Sender<SendOutcome>,
}

/// Channel that hands dictionaries to an in-process host adapter.
///
/// The adapter drains [`Delivery`] values from the receiver returned by
/// [`HostChannel::new`] and resolves each reply slot with the transmission
/// outcome it observed.
#[derive(Debug, Clone)]
pub struct HostChannel {
    tx: mpsc::Sender<Delivery>,
}

impl HostChannel {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Delivery>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl DeviceChannel for HostChannel {
    async fn send(&self, dict: &TransportDict) -> SendOutcome {
        let (reply_tx, reply_rx) = oneshot::channel();
        let delivery = Delivery {
            dict: dict.clone(),
            reply: reply_tx,
        };

        if self.tx.send(delivery).await.is_err() {
            return SendOutcome::Rejected(RejectReason::NotConnected);
        }

        match reply_rx.await {
            Ok(outcome) => outcome,
            // Adapter dropped the reply slot without answering.
            Err(_) => SendOutcome::Rejected(RejectReason::Other(
                "host adapter dropped acknowledgement".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[tokio::test]
    async fn test_host_channel_acknowledged() {
        let (channel, mut deliveries) = HostChannel::new(1);

        let adapter = tokio::spawn(async move {
            let delivery = deliveries.recv().await.unwrap();
            assert_eq!(delivery.dict, TransportDict::weather(21));
            delivery.reply.send(SendOutcome::Acknowledged).unwrap();
        });

        let outcome = channel.send(&TransportDict::weather(21)).await;
        assert!(outcome.is_acknowledged());
        adapter.await.unwrap();
    }

    #[tokio::test]
    async fn test_host_channel_rejected() {
        let (channel, mut deliveries) = HostChannel::new(1);

        let adapter = tokio::spawn(async move {
            let delivery = deliveries.recv().await.unwrap();
            delivery
                .reply
                .send(SendOutcome::Rejected(RejectReason::Timeout))
                .unwrap();
        });

        let outcome = channel.send(&TransportDict::weather(0)).await;
        assert_eq!(outcome, SendOutcome::Rejected(RejectReason::Timeout));
        adapter.await.unwrap();
    }

    #[tokio::test]
    async fn test_host_channel_disconnected() {
        let (channel, deliveries) = HostChannel::new(1);
        drop(deliveries);

        let outcome = channel.send(&TransportDict::weather(0)).await;
        assert_eq!(outcome, SendOutcome::Rejected(RejectReason::NotConnected));
    }

    #[tokio::test]
    async fn test_host_channel_dropped_reply() {
        let (channel, mut deliveries) = HostChannel::new(1);

        tokio::spawn(async move {
            let delivery = deliveries.recv().await.unwrap();
            drop(delivery.reply);
        });

        let outcome = channel.send(&TransportDict::weather(0)).await;
        assert!(matches!(
            outcome,
            SendOutcome::Rejected(RejectReason::Other(_))
        ));
    }

    #[tokio::test]
    async fn test_send_logged_passes_outcome_through() {
        let (channel, mut deliveries) = HostChannel::new(1);

        tokio::spawn(async move {
            while let Some(delivery) = deliveries.recv().await {
                let _ = delivery.reply.send(SendOutcome::Acknowledged);
            }
        });

        let dict = TransportDict::configuration(true, true);
        let outcome = send_logged(&channel, &dict).await;
        assert!(outcome.is_acknowledged());
    }
}
