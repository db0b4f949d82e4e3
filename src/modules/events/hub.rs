use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use utoipa::ToSchema;

/// Capacity of the broadcast ring buffer. Slow subscribers that fall more
/// than this many events behind will observe a lagged stream and resync.
const CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChangeOp {
    Created,
    Updated,
    Deleted,
}

/// A change notification emitted after a successful mutation.
///
/// Clients use these to refresh their views; the payload is deliberately a
/// pointer (entity + id), not the row itself, so subscribers always re-read
/// current state through the normal API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChangeEvent {
    pub entity: &'static str,
    pub op: ChangeOp,
    pub id: String,
    pub at: DateTime<Utc>,
}

/// In-process publish/subscribe hub for change notifications.
///
/// Every mutation in the service goes through exactly one service-level commit
/// path, and that path publishes here once, so subscribers see each change
/// exactly once (modulo ring-buffer lag).
#[derive(Clone)]
pub struct ChangeHub {
    tx: broadcast::Sender<ChangeEvent>,
}

impl ChangeHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, entity: &'static str, op: ChangeOp, id: impl ToString) {
        let event = ChangeEvent {
            entity,
            op,
            id: id.to_string(),
            at: Utc::now(),
        };
        // Err means no subscriber is currently listening; that is fine
        if self.tx.send(event).is_err() {
            tracing::debug!("Change event dropped: no active subscribers");
        }
    }
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let hub = ChangeHub::new();
        let mut rx = hub.subscribe();

        hub.publish("bookings", ChangeOp::Created, "42");

        let event = rx.recv().await.unwrap();
        assert_eq!(event.entity, "bookings");
        assert_eq!(event.op, ChangeOp::Created);
        assert_eq!(event.id, "42");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_noop() {
        let hub = ChangeHub::new();
        // Must not panic or block
        hub.publish("news", ChangeOp::Deleted, "1");
    }

    #[tokio::test]
    async fn test_each_subscriber_sees_every_event() {
        let hub = ChangeHub::new();
        let mut a = hub.subscribe();
        let mut b = hub.subscribe();

        hub.publish("courts", ChangeOp::Updated, "7");

        assert_eq!(a.recv().await.unwrap().id, "7");
        assert_eq!(b.recv().await.unwrap().id, "7");
    }
}
