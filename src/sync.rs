//! Sync Bridge
//!
//! Blocking call variants for the asynchronous operation set. The bridge is
//! the only construct in this crate that blocks a thread, and it blocks only
//! the thread that opted into synchronous calling.

use std::future::Future;
use std::sync::{mpsc, Mutex};

use tokio::runtime::Handle;

use crate::error::{AuthError, AuthResult};

/// One-shot completion signal handed to an asynchronous operation.
///
/// The first signal is delivered to the waiting caller; any later signal is
/// ignored.
pub struct Completion<T> {
    sender: Mutex<Option<mpsc::Sender<AuthResult<T>>>>,
}

impl<T> Completion<T> {
    fn new(sender: mpsc::Sender<AuthResult<T>>) -> Self {
        Self {
            sender: Mutex::new(Some(sender)),
        }
    }

    /// Deliver the operation's result.
    pub fn complete(&self, result: AuthResult<T>) {
        if let Some(sender) = self.sender.lock().unwrap().take() {
            let _ = sender.send(result);
        }
    }
}

/// Block until an asynchronous operation signals completion, then return the
/// carried value or re-raise the carried error.
///
/// `start` receives a fresh [`Completion`] and is expected to hand it to an
/// operation that signals once. If the completion is dropped without a
/// signal, the wait fails with [`AuthError::Bridge`] instead of hanging.
///
/// Precondition: must not be called from the thread that will deliver the
/// completion signal, or the wait deadlocks. The bridge cannot detect
/// this generically; it is the caller's obligation.
pub fn wait<T>(start: impl FnOnce(Completion<T>)) -> AuthResult<T> {
    let (sender, receiver) = mpsc::channel();
    start(Completion::new(sender));
    receiver.recv().unwrap_or_else(|_| {
        Err(AuthError::Bridge {
            message: "operation dropped without signaling completion".to_string(),
        })
    })
}

/// Runs facade futures on a dedicated runtime thread so blocking callers are
/// never the thread delivering their own completion.
///
/// The runtime thread starts lazily on the first blocking call and lives for
/// the bridge's lifetime.
pub(crate) struct SyncBridge {
    handle: Mutex<Option<Handle>>,
}

impl SyncBridge {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// Run `future` to completion on the bridge runtime, blocking the
    /// calling thread.
    pub fn run<T, F>(&self, future: F) -> AuthResult<T>
    where
        T: Send + 'static,
        F: Future<Output = AuthResult<T>> + Send + 'static,
    {
        let handle = self.runtime_handle()?;
        wait(move |completion| {
            handle.spawn(async move {
                completion.complete(future.await);
            });
        })
    }

    fn runtime_handle(&self) -> AuthResult<Handle> {
        let mut slot = self.handle.lock().unwrap();
        if let Some(handle) = &*slot {
            return Ok(handle.clone());
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AuthError::Bridge {
                message: format!("failed to start bridge runtime: {}", e),
            })?;
        let handle = runtime.handle().clone();

        std::thread::Builder::new()
            .name("oidc-auth-bridge".to_string())
            .spawn(move || runtime.block_on(std::future::pending::<()>()))
            .map_err(|e| AuthError::Bridge {
                message: format!("failed to start bridge thread: {}", e),
            })?;

        *slot = Some(handle.clone());
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_immediate_completion_returns_value() {
        let value = wait(|completion| completion.complete(Ok(42))).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_delayed_completion_returns_value() {
        let value = wait(|completion| {
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                completion.complete(Ok("done".to_string()));
            });
        })
        .unwrap();
        assert_eq!(value, "done");
    }

    #[test]
    fn test_error_is_reraised() {
        let error = wait::<u32>(|completion| {
            completion.complete(Err(AuthError::UnexpectedStatus {
                status: 500,
                body: "boom".to_string(),
            }));
        })
        .unwrap_err();
        assert!(matches!(
            error,
            AuthError::UnexpectedStatus { status: 500, .. }
        ));
    }

    #[test]
    fn test_second_signal_is_ignored() {
        let value = wait(|completion| {
            completion.complete(Ok(1));
            completion.complete(Ok(2));
        })
        .unwrap();
        assert_eq!(value, 1);
    }

    #[test]
    fn test_dropped_completion_does_not_hang() {
        let error = wait::<u32>(|completion| drop(completion)).unwrap_err();
        assert!(matches!(error, AuthError::Bridge { .. }));
    }

    #[test]
    fn test_bridge_runs_future_off_thread() {
        let bridge = SyncBridge::new();
        let value = bridge
            .run(async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                Ok(7)
            })
            .unwrap();
        assert_eq!(value, 7);

        // The runtime thread is reused across calls.
        let again = bridge.run(async { Ok(8) }).unwrap();
        assert_eq!(again, 8);
    }
}
