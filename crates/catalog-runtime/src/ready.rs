//! One-shot readiness flag.
//!
//! The store does not fetch until whoever bootstraps the network side
//! (a mock backend, a worker, a health check) says it may. The flag flips
//! from `false` to `true` at most once.

use tokio::sync::watch;

/// Create a not-yet-ready signal and the handle that flips it.
pub fn ready_channel() -> (ReadyHandle, ReadySignal) {
    let (tx, rx) = watch::channel(false);
    (ReadyHandle { tx }, ReadySignal { rx })
}

/// Write side of the readiness flag.
#[derive(Debug)]
pub struct ReadyHandle {
    tx: watch::Sender<bool>,
}

impl ReadyHandle {
    /// Flip the flag to ready. Calling again has no further effect.
    pub fn mark_ready(&self) {
        self.tx.send_if_modified(|ready| {
            if *ready {
                false
            } else {
                *ready = true;
                true
            }
        });
    }
}

/// Read side of the readiness flag, handed to the store at construction.
#[derive(Debug, Clone)]
pub struct ReadySignal {
    rx: watch::Receiver<bool>,
}

impl ReadySignal {
    /// A signal that is ready from the start.
    pub fn ready() -> Self {
        let (handle, signal) = ready_channel();
        handle.mark_ready();
        signal
    }

    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once the flag is set.
    ///
    /// Returns `false` if the handle was dropped without ever signalling.
    pub async fn wait(&mut self) -> bool {
        self.rx.wait_for(|ready| *ready).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wait_resolves_after_mark() {
        let (handle, mut signal) = ready_channel();
        assert!(!signal.is_ready());

        let waiter = tokio::spawn(async move { signal.wait().await });
        handle.mark_ready();

        assert!(waiter.await.unwrap());
    }

    #[tokio::test]
    async fn test_already_ready_signal() {
        let mut signal = ReadySignal::ready();
        assert!(signal.is_ready());
        assert!(signal.wait().await);
    }

    #[tokio::test]
    async fn test_dropped_handle_never_ready() {
        let (handle, mut signal) = ready_channel();
        drop(handle);
        assert!(!signal.wait().await);
    }

    #[tokio::test]
    async fn test_mark_ready_is_idempotent() {
        let (handle, signal) = ready_channel();
        handle.mark_ready();
        handle.mark_ready();
        assert!(signal.is_ready());
    }
}
