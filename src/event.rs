use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::telemetry::ticker::Tick;

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    /// A telemetry controller's timer fired.
    Tick(Tick),
    /// Low-frequency UI upkeep (status message expiry).
    Housekeeping,
    Resize,
}

impl From<Tick> for Event {
    fn from(tick: Tick) -> Self {
        Event::Tick(tick)
    }
}

pub struct EventHandler {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(housekeeping_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();
        let task_tx = tx.clone();

        let task = tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            let mut housekeeping = tokio::time::interval(housekeeping_rate);

            loop {
                tokio::select! {
                    maybe_event = reader.next() => {
                        match maybe_event {
                            Some(Ok(evt)) => {
                                let mapped = match evt {
                                    CrosstermEvent::Key(key) => Some(Event::Key(key)),
                                    CrosstermEvent::Resize(_, _) => Some(Event::Resize),
                                    _ => None,
                                };
                                if let Some(e) = mapped
                                    && task_tx.send(e).is_err()
                                {
                                    break;
                                }
                            }
                            Some(Err(_)) => break,
                            None => break,
                        }
                    }
                    _ = housekeeping.tick() => {
                        if task_tx.send(Event::Housekeeping).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            tx,
            rx,
            _task: task,
        }
    }

    /// Sender handed to telemetry controllers so their timers feed this loop.
    pub fn sender(&self) -> &mpsc::UnboundedSender<Event> {
        &self.tx
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
