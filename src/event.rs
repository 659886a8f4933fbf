use color_eyre::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize,
}

/// Terminal input and ticks delivered over a channel.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

/// Wait up to `timeout` for a terminal event, `None` on timeout.
fn poll_terminal(timeout: Duration) -> io::Result<Option<CrosstermEvent>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_source(tick_rate, poll_terminal)
    }

    /// Drive events from `source`. A source error ends the stream, after
    /// which [`EventHandler::next`] fails.
    pub fn with_source<F>(tick_rate: Duration, mut source: F) -> Self
    where
        F: FnMut(Duration) -> io::Result<Option<CrosstermEvent>> + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();

        // crossterm polling blocks, keep it off the async workers
        tokio::task::spawn_blocking(move || {
            loop {
                let event = match source(tick_rate) {
                    // Windows reports key releases too
                    Ok(Some(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        Event::Key(key)
                    }
                    Ok(Some(CrosstermEvent::Resize(_, _))) => Event::Resize,
                    Ok(Some(_)) => continue,
                    Ok(None) => Event::Tick,
                    Err(e) => {
                        warn!(error = %e, "terminal input failed");
                        break;
                    }
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> Result<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| color_eyre::eyre::eyre!("Event channel closed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[tokio::test]
    async fn test_events_forwarded_in_order() {
        let mut script = vec![
            Ok(Some(CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)))),
            Ok(None),
            Ok(Some(CrosstermEvent::Resize(80, 24))),
        ]
        .into_iter();
        let mut events = EventHandler::with_source(Duration::from_millis(1), move |_| {
            script
                .next()
                .unwrap_or_else(|| Err(io::Error::other("script done")))
        });

        assert!(matches!(events.next().await.unwrap(), Event::Key(key) if key.code == KeyCode::Char('r')));
        assert!(matches!(events.next().await.unwrap(), Event::Tick));
        assert!(matches!(events.next().await.unwrap(), Event::Resize));
    }

    #[tokio::test]
    async fn test_input_error_closes_stream() {
        let mut events = EventHandler::with_source(Duration::from_millis(1), |_| {
            Err(io::Error::other("not a terminal"))
        });

        let err = events.next().await.unwrap_err();
        assert!(err.to_string().contains("Event channel closed"));
    }
}
