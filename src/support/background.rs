//! One-shot background execution for long-running solves.
//!
//! A solve is a bounded but non-trivial amount of iteration (nested root
//! searches), and callers such as interactive front ends need to stay
//! responsive while it runs. [`spawn`] moves the work onto a dedicated thread
//! and hands back a [`BackgroundTask`]: exactly one `Result` is delivered, no
//! partial results are observable, and the task can be cancelled
//! cooperatively through a shared [`CancelFlag`].
//!
//! Tasks share no state with each other; running several concurrently is
//! fine as long as the work closures themselves are independent.

use std::{
    panic,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    thread::{self, JoinHandle},
};

/// Cooperative cancellation flag shared between a caller and its task.
///
/// The work closure decides where cancellation is honored; the flag itself
/// only records the request.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a flag with no cancellation requested.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Handle to a running background task.
///
/// The task's single `Result` is retrieved with [`wait`](Self::wait) or
/// polled with [`try_result`](Self::try_result). Dropping the handle detaches
/// the task; it runs to completion and its result is discarded.
#[derive(Debug)]
pub struct BackgroundTask<T, E> {
    receiver: mpsc::Receiver<Result<T, E>>,
    cancel: CancelFlag,
    handle: JoinHandle<()>,
}

/// Runs `work` on a new thread and returns a handle to its single result.
///
/// The closure receives the task's [`CancelFlag`] so it can poll for
/// cancellation at convenient points.
pub fn spawn<T, E, F>(work: F) -> BackgroundTask<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnOnce(&CancelFlag) -> Result<T, E> + Send + 'static,
{
    let cancel = CancelFlag::new();
    let flag = cancel.clone();
    let (sender, receiver) = mpsc::sync_channel(1);

    let handle = thread::spawn(move || {
        // Send fails only when the handle was dropped; the result is
        // discarded in that case, which is the detach contract.
        let _ = sender.send(work(&flag));
    });

    BackgroundTask {
        receiver,
        cancel,
        handle,
    }
}

impl<T, E> BackgroundTask<T, E> {
    /// Requests cooperative cancellation of the task.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns whether the task's thread has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Returns the task's result if it is already available.
    pub fn try_result(&self) -> Option<Result<T, E>> {
        self.receiver.try_recv().ok()
    }

    /// Blocks until the task delivers its result.
    ///
    /// If the work closure panicked, the panic is resumed on the caller's
    /// thread.
    pub fn wait(self) -> Result<T, E> {
        match self.receiver.recv() {
            Ok(result) => result,
            // The worker died without reporting; surface its panic here.
            Err(_) => match self.handle.join() {
                Err(payload) => panic::resume_unwind(payload),
                Ok(()) => unreachable!("worker exited without sending a result"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    #[test]
    fn delivers_single_result() {
        let task = spawn(|_cancel| Ok::<_, ()>(6 * 7));
        assert_eq!(task.wait(), Ok(42));
    }

    #[test]
    fn delivers_errors() {
        let task = spawn(|_cancel| Err::<(), _>("boom"));
        assert_eq!(task.wait(), Err("boom"));
    }

    #[test]
    fn cancellation_is_observed_by_the_work() {
        let task = spawn(|cancel: &CancelFlag| {
            while !cancel.is_cancelled() {
                thread::sleep(Duration::from_millis(1));
            }
            Err::<(), _>("cancelled")
        });
        task.cancel();
        assert_eq!(task.wait(), Err("cancelled"));
    }

    #[test]
    fn try_result_polls_without_blocking() {
        let task = spawn(|_cancel| {
            thread::sleep(Duration::from_millis(20));
            Ok::<_, ()>(1)
        });
        // Either not ready yet or already delivered; both are valid.
        let early = task.try_result();
        assert!(early.is_none() || early == Some(Ok(1)));
        if early.is_none() {
            assert_eq!(task.wait(), Ok(1));
        }
    }

    #[test]
    #[should_panic(expected = "worker panic")]
    fn propagates_worker_panics() {
        let task = spawn(|_cancel| -> Result<(), ()> { panic!("worker panic") });
        let _ = task.wait();
    }
}
