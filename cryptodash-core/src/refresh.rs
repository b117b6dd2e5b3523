//! Live refresh driver: one background thread per live table.
//!
//! Each thread wakes on a fixed period, asks its [`DataSource`] for a complete
//! replacement row set and sends it to the UI over an `mpsc` channel. The UI
//! owns all view state and applies ticks with
//! [`TableEngine::replace_rows`](crate::engine::TableEngine::replace_rows), so a
//! tick never resets query, sort, page or selection.
//!
//! Thread lifetime is bound to the returned [`RefreshHandle`]: dropping it (or
//! calling [`RefreshHandle::stop`]) signals the thread and joins it. A dropped
//! receiver also ends the thread on its next tick.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("refresh period for `{0}` must be non-zero")]
    ZeroPeriod(String),

    #[error("failed to spawn refresh thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("data source failed: {0}")]
    Source(String),
}

/// Produces a full row set per tick.
pub trait DataSource: Send + 'static {
    type Row: Send + 'static;

    fn next_rows(&mut self) -> Result<Vec<Self::Row>, RefreshError>;
}

/// Owner of one refresh thread.
#[derive(Debug)]
pub struct RefreshHandle {
    name: String,
    stop_tx: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_running(&self) -> bool {
        self.join.as_ref().is_some_and(|j| !j.is_finished())
    }

    /// Stop the thread and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender disconnects the stop channel and wakes the thread.
        self.stop_tx.take();
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                log::warn!("refresh thread `{}` panicked", self.name);
            }
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Start a refresh thread named `refresh-{name}`.
///
/// Every `period` the thread calls `source.next_rows()`, wraps the rows with
/// `wrap` and sends the message on `tx`.
pub fn spawn<S, M, F>(
    name: &str,
    period: Duration,
    source: S,
    tx: Sender<M>,
    wrap: F,
) -> Result<RefreshHandle, RefreshError>
where
    S: DataSource,
    M: Send + 'static,
    F: Fn(Vec<S::Row>) -> M + Send + 'static,
{
    if period.is_zero() {
        return Err(RefreshError::ZeroPeriod(name.to_string()));
    }
    let (stop_tx, stop_rx) = mpsc::channel::<()>();
    let thread_name = name.to_string();
    let join = thread::Builder::new()
        .name(format!("refresh-{name}"))
        .spawn(move || {
            log::debug!("refresh `{thread_name}` started, period {period:?}");
            let mut source = source;
            loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
                match source.next_rows() {
                    Ok(rows) => {
                        if tx.send(wrap(rows)).is_err() {
                            log::debug!("refresh `{thread_name}`: receiver gone");
                            break;
                        }
                    }
                    Err(e) => log::warn!("refresh `{thread_name}` tick failed: {e}"),
                }
            }
            log::debug!("refresh `{thread_name}` stopped");
        })?;
    Ok(RefreshHandle {
        name: name.to_string(),
        stop_tx: Some(stop_tx),
        join: Some(join),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);

    impl DataSource for Counter {
        type Row = u32;

        fn next_rows(&mut self) -> Result<Vec<u32>, RefreshError> {
            self.0 += 1;
            Ok(vec![self.0])
        }
    }

    struct Failing;

    impl DataSource for Failing {
        type Row = u32;

        fn next_rows(&mut self) -> Result<Vec<u32>, RefreshError> {
            Err(RefreshError::Source("offline".into()))
        }
    }

    #[test]
    fn zero_period_is_rejected() {
        let (tx, _rx) = mpsc::channel::<Vec<u32>>();
        let err = spawn("coins", Duration::ZERO, Counter(0), tx, |rows| rows).unwrap_err();
        assert!(matches!(err, RefreshError::ZeroPeriod(ref n) if n == "coins"));
    }

    #[test]
    fn ticks_arrive_in_order() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn("test", Duration::from_millis(5), Counter(0), tx, |rows| rows).unwrap();
        let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        let second = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(first, vec![1]);
        assert_eq!(second, vec![2]);
        handle.stop();
    }

    #[test]
    fn drop_joins_thread_and_closes_channel() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn("drop", Duration::from_millis(5), Counter(0), tx, |rows| rows).unwrap();
        assert_eq!(handle.name(), "drop");
        drop(handle);
        // The thread owned the only sender; after join the iterator ends.
        let drained: Vec<Vec<u32>> = rx.iter().collect();
        assert!(drained.len() < 1_000);
    }

    #[test]
    fn failing_source_keeps_running() {
        let (tx, rx) = mpsc::channel::<Vec<u32>>();
        let handle = spawn("failing", Duration::from_millis(5), Failing, tx, |rows| rows).unwrap();
        thread::sleep(Duration::from_millis(30));
        assert!(handle.is_running());
        assert!(rx.try_recv().is_err());
        handle.stop();
    }

    #[test]
    fn dropped_receiver_ends_thread() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn("orphan", Duration::from_millis(5), Counter(0), tx, |rows| rows).unwrap();
        drop(rx);
        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while handle.is_running() && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!handle.is_running());
    }
}
