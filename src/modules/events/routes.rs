use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use futures::Stream;
use tokio_stream::{wrappers::BroadcastStream, StreamExt};

use crate::modules::events::ChangeHub;

/// Create routes for the change-notification feed
///
/// Note: the feed is public; it carries only entity/id pointers, no row data
pub fn routes(hub: ChangeHub) -> Router {
    Router::new()
        .route("/api/events", get(change_feed))
        .with_state(hub)
}

/// Server-sent stream of change events
///
/// The presentation layer subscribes here and re-fetches whatever views the
/// events invalidate.
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "SSE stream of change events", content_type = "text/event-stream")
    ),
    tag = "events"
)]
pub async fn change_feed(
    State(hub): State<ChangeHub>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(hub.subscribe()).filter_map(|msg| {
        // Lagged receivers skip ahead; dropped events only delay a refresh
        let event = msg.ok()?;
        let sse = Event::default().event(event.entity).json_data(&event).ok()?;
        Some(Ok(sse))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
