//! `GET /api/counter` -- server-sent counter events.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::stream::{Stream, StreamExt};
use roster_core::CounterEvent;

use super::AppState;
use crate::service::counter_events;

/// Streams the bounded counter sequence as `text/event-stream`.
///
/// The stream stops early when the client disconnects (axum drops it) or
/// when the server starts shutting down. While open it counts as in-flight
/// work so shutdown drains it.
pub async fn counter_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let guard = state.shutdown.in_flight_guard();
    let cancel = state.shutdown.shutdown_token();

    let events = counter_events(&state.counter, cancel).map(move |event| {
        // Released when axum drops the stream.
        let _held = &guard;
        Ok::<Event, Infallible>(to_sse_event(event))
    });

    Sse::new(events).keep_alive(KeepAlive::new().interval(state.counter.keep_alive))
}

fn to_sse_event(event: CounterEvent) -> Event {
    Event::default()
        .id(event.sequence_id)
        .event(event.event_name)
        .data(event.value.to_string())
        .comment(event.comment)
}
