//! Token hook for observing a completion while it is produced.
//!
//! A [`TokenSink`] is handed to the backend for one call. When created with
//! [`TokenSink::channel`] it feeds a bounded channel whose receiving half is a
//! [`TokenStream`]. The stream ends once the call finishes and the sink is
//! dropped. What the caller does with the stream, including never reading
//! it, never changes or delays the returned completion.

use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

#[derive(Debug, Clone, Default)]
pub struct TokenSink {
    tx: Option<mpsc::Sender<String>>,
}

impl TokenSink {
    /// A sink that drops every token.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Bounded sink and its stream.
    ///
    /// Once `capacity` tokens are buffered the backend yields one scheduling
    /// turn to a concurrent consumer, then drops the token if the buffer is
    /// still full. A stream that is read only after the call, or never, gets
    /// the first `capacity` tokens.
    pub fn channel(capacity: usize) -> (Self, TokenStream) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx: Some(tx) }, TokenStream { rx })
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.as_ref().is_some_and(|tx| !tx.is_closed())
    }

    pub async fn emit(&self, token: &str) {
        let Some(tx) = &self.tx else {
            return;
        };

        // A closed receiver only means nobody is listening anymore.
        if let Err(TrySendError::Full(token)) = tx.try_send(token.to_string()) {
            tokio::task::yield_now().await;
            if tx.try_send(token).is_err() {
                log::debug!("Token stream is full, dropping token");
            }
        }
    }
}

#[derive(Debug)]
pub struct TokenStream {
    rx: mpsc::Receiver<String>,
}

impl Stream for TokenStream {
    type Item = String;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_stream_receives_tokens_and_ends() {
        let (sink, stream) = TokenSink::channel(4);
        let producer = async move {
            sink.emit("Hello").await;
            sink.emit(" world").await;
        };
        let (_, tokens) = tokio::join!(producer, stream.collect::<Vec<_>>());
        assert_eq!(tokens, vec!["Hello".to_string(), " world".to_string()]);
    }

    #[tokio::test]
    async fn test_backpressure_with_concurrent_consumer() {
        let (sink, stream) = TokenSink::channel(1);
        let producer = async move {
            for i in 0..10 {
                sink.emit(&i.to_string()).await;
            }
        };
        let (_, tokens) = tokio::join!(producer, stream.collect::<Vec<_>>());
        assert_eq!(tokens.len(), 10);
    }

    #[tokio::test]
    async fn test_unread_stream_does_not_block_emitter() {
        let (sink, stream) = TokenSink::channel(2);
        for word in ["one ", "two ", "three ", "four"] {
            sink.emit(word).await;
        }
        drop(sink);

        let tokens: Vec<String> = stream.collect().await;
        assert_eq!(tokens, vec!["one ".to_string(), "two ".to_string()]);
    }

    #[tokio::test]
    async fn test_dropped_stream_does_not_block_emitter() {
        let (sink, stream) = TokenSink::channel(1);
        drop(stream);
        assert!(!sink.is_enabled());
        for _ in 0..5 {
            sink.emit("ignored").await;
        }
    }

    #[tokio::test]
    async fn test_disabled_sink() {
        let sink = TokenSink::disabled();
        assert!(!sink.is_enabled());
        sink.emit("nothing").await;
    }
}
