//! Lazy character-by-character stream generator
//!
//! The core of the service: turns an input string into a paced sequence of
//! events, one per character, followed by a single completion event. One
//! generator instance per request; dropping the stream stops production.

use crate::types::events::StreamEvent;
use futures::stream::Stream;
use std::time::Duration;

/// Build the event sequence for one request.
///
/// Yields each character with its 1-based position and the total character
/// count, sleeping `delay` between events. The sleep suspends only this
/// stream's task, so concurrent connections keep being served. Callers must
/// reject empty text before reaching this point.
pub fn character_stream(text: String, delay: Duration) -> impl Stream<Item = StreamEvent> {
    async_stream::stream! {
        let total = text.chars().count();

        for (i, character) in text.chars().enumerate() {
            yield StreamEvent::character(character, i + 1, total);
            tokio::time::sleep(delay).await;
        }

        yield StreamEvent::complete(total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use tokio::pin;

    async fn collect(text: &str) -> Vec<StreamEvent> {
        character_stream(text.to_string(), Duration::from_millis(500))
            .collect()
            .await
    }

    #[tokio::test(start_paused = true)]
    async fn streams_each_character_then_completes() {
        let events = collect("hi").await;

        assert_eq!(
            events,
            vec![
                StreamEvent::character('h', 1, 2),
                StreamEvent::character('i', 2, 2),
                StreamEvent::complete(2),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn positions_are_strictly_increasing_without_gaps() {
        let text = "hello world";
        let events = collect(text).await;
        let total = text.chars().count();

        assert_eq!(events.len(), total + 1);
        for (i, event) in events[..total].iter().enumerate() {
            match event {
                StreamEvent::Character { position, total: t, .. } => {
                    assert_eq!(*position, i + 1);
                    assert_eq!(*t, total);
                }
                other => panic!("expected character event, got {:?}", other),
            }
        }
        assert_eq!(events[total], StreamEvent::complete(total));
    }

    #[tokio::test(start_paused = true)]
    async fn counts_characters_not_bytes() {
        let events = collect("héllo").await;

        assert_eq!(events.len(), 6);
        assert_eq!(events[1], StreamEvent::character('é', 2, 5));
        assert_eq!(events[5], StreamEvent::complete(5));
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_consumer_stops_the_stream() {
        let stream = character_stream("abc".to_string(), Duration::from_millis(500));
        pin!(stream);

        let first = stream.next().await;
        assert_eq!(first, Some(StreamEvent::character('a', 1, 3)));

        // Dropping mid-sequence must not panic or leave a pending sleep
        // running; the generator simply never resumes.
        drop(stream);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_requests_produce_identical_sequences() {
        let first = collect("echo").await;
        let second = collect("echo").await;

        assert_eq!(first, second);
    }
}
