use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

/// Debounced value source.
///
/// Each [`update`](Debouncer::update) replaces any pending value and restarts
/// the quiescence timer; once the window elapses with no further updates, the
/// value is published on the receiver returned by [`new`](Debouncer::new).
/// Dropping the `Debouncer` cancels a pending publish, so teardown cannot
/// produce a late orphaned value.
#[derive(Debug)]
pub struct Debouncer<T> {
    tx: mpsc::Sender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(window: Duration) -> (Self, mpsc::Receiver<T>) {
        let (tx, mut rx_in) = mpsc::channel::<T>(32);
        let (tx_out, rx_out) = mpsc::channel::<T>(32);

        tokio::spawn(async move {
            let mut pending: Option<T> = None;
            loop {
                match pending.take() {
                    None => match rx_in.recv().await {
                        Some(value) => pending = Some(value),
                        None => break,
                    },
                    Some(value) => {
                        tokio::select! {
                            next = rx_in.recv() => match next {
                                // A newer value supersedes the pending one.
                                Some(next) => pending = Some(next),
                                None => break,
                            },
                            () = sleep(window) => {
                                if tx_out.send(value).await.is_err() {
                                    break;
                                }
                            }
                        }
                    }
                }
            }
        });

        (Self { tx }, rx_out)
    }

    /// Feed a new raw value, discarding whatever was pending.
    pub async fn update(&self, value: T) {
        // A closed receiver means the app is shutting down.
        let _ = self.tx.send(value).await;
    }
}
