//! Event fan-in for the UI loop.
//!
//! A dedicated thread reads terminal input and ticks; cache settles and
//! mutation outcomes arrive from spawned tasks. Everything converges on one
//! channel so the loop has a single await point.

use crossterm::event::{Event, KeyEvent};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::api::ApiError;
use crate::cache::CacheEvent;

/// Which mutation a [`MutationOutcome`] reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// Result of a spawned create/update/delete task.
#[derive(Debug)]
pub struct MutationOutcome {
    pub kind: MutationKind,
    pub result: Result<(), ApiError>,
}

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// A cache key settled; views re-derive from the snapshot.
    Cache(CacheEvent),
    /// A spawned mutation finished.
    Mutation(MutationOutcome),
    /// Terminal input is gone; shut down.
    InputClosed,
}

pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: UnboundedSender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread and return the merged event stream.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = unbounded_channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match crossterm::event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match crossterm::event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)).is_ok(),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows)).is_ok()
                            }
                            Ok(_) => true,
                            Err(err) => {
                                tracing::error!(error = %err, "terminal input read failed");
                                let _ = event_tx.send(AppEvent::InputClosed);
                                false
                            }
                        };
                        if !forwarded {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal input poll failed");
                        let _ = event_tx.send(AppEvent::InputClosed);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}
