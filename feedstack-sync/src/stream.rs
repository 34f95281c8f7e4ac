//! Stream adapters for the sync layer.
//!
//! `outcome_stream` lifts a one-shot future into the Loading-then-terminal
//! shape the state holder folds; `countdown` is the timed counter stream
//! behind interval-driven UI state. Both are cold: nothing runs until the
//! stream is polled.

use feedstack_types::Outcome;
use futures::stream::{self, Stream, StreamExt};
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Lifts a fallible future into an `Outcome` stream.
///
/// Emits `Loading` first, then exactly one terminal `Success` or
/// `Error` carrying the failure's display form. The future only starts
/// once the stream is polled past the `Loading` element.
pub fn outcome_stream<T, E, F>(future: F) -> impl Stream<Item = Outcome<T>>
where
    F: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    stream::iter([Outcome::Loading]).chain(stream::once(async move {
        match future.await {
            Ok(value) => Outcome::Success(value),
            Err(e) => Outcome::Error(e.to_string()),
        }
    }))
}

/// Counts down from `from` to 1, one value per `period`.
///
/// The first value is emitted immediately, each following one after
/// `period` has elapsed. The stream ends after 1; a `from` of zero
/// yields an empty stream.
pub fn countdown(from: u32, period: Duration) -> impl Stream<Item = u32> {
    stream::unfold((from, false), move |(remaining, started)| async move {
        if remaining == 0 {
            return None;
        }
        if started {
            tokio::time::sleep(period).await;
        }
        Some((remaining, (remaining - 1, true)))
    })
}
