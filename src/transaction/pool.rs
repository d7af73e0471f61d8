//! A small, process-wide worker pool for async `on_success` callbacks, plus the
//! [`CallbackHandle`] a caller joins (or polls, under the `async` feature) to observe a
//! callback that is running on one of its threads.

use crate::error::ProgrammingError;
use crate::types::result::OperationResult;
use std::sync::{mpsc, Arc, Condvar, Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

#[cfg(feature = "async")]
use std::task::Waker;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A handle to a callback result that may not have resolved yet.
///
/// [`CallbackOutcome::join`](crate::types::CallbackOutcome::join) blocks the calling thread on
/// the inner [`Condvar`]. Under the `async` feature,
/// [`crate::async_ext::AsyncPending`] polls the same state and registers a [`Waker`] instead of
/// blocking, so the same handle serves both a synchronous `.join()` caller and an `.await`er.
pub struct CallbackHandle {
    state: Mutex<Option<OperationResult>>,
    cond: Condvar,
    #[cfg(feature = "async")]
    wakers: Mutex<Vec<Waker>>,
}

impl CallbackHandle {
    pub(crate) fn pending() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(None),
            cond: Condvar::new(),
            #[cfg(feature = "async")]
            wakers: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn resolve(&self, result: OperationResult) {
        {
            let mut guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
            *guard = Some(result);
        }
        self.cond.notify_all();
        #[cfg(feature = "async")]
        {
            let wakers = std::mem::take(&mut *self.wakers.lock().unwrap_or_else(|e| e.into_inner()));
            for waker in wakers {
                waker.wake();
            }
        }
    }

    /// Blocks the calling thread until the callback has resolved.
    #[must_use]
    pub fn join(&self) -> OperationResult {
        let mut guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
        while guard.is_none() {
            guard = self.cond.wait(guard).unwrap_or_else(|e| e.into_inner());
        }
        guard.clone().expect("checked Some above")
    }

    /// Non-blocking peek, used by the `async` poll implementation.
    #[cfg(feature = "async")]
    #[must_use]
    pub(crate) fn poll(&self) -> Option<OperationResult> {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    #[cfg(feature = "async")]
    pub(crate) fn register_waker(&self, waker: Waker) {
        self.wakers.lock().unwrap_or_else(|e| e.into_inner()).push(waker);
    }
}

/// The fixed-size thread pool that runs async `on_success` callbacks off the caller's thread.
///
/// Lazily initialized on first use from the `CALLBACK_THREADS` environment variable (default
/// `1`); an invalid value is a [`ProgrammingError`], not a panic, since it reflects a
/// misconfigured deployment rather than a bug in this crate.
pub struct WorkerPool {
    sender: Mutex<Option<mpsc::Sender<Job>>>,
    handles: Mutex<Vec<thread::JoinHandle<()>>>,
}

static POOL: OnceLock<WorkerPool> = OnceLock::new();
static POOL_INIT_ERROR: OnceLock<ProgrammingError> = OnceLock::new();

fn configured_thread_count() -> Result<usize, ProgrammingError> {
    match std::env::var("CALLBACK_THREADS") {
        Err(_) => Ok(1),
        Ok(raw) => raw.trim().parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
            ProgrammingError::new(format!(
                "CALLBACK_THREADS must be a positive integer, got {raw:?}"
            ))
        }),
    }
}

impl WorkerPool {
    fn spawn(thread_count: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(thread_count, "spawning callback worker pool");
        let (sender, receiver) = mpsc::channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));
        let mut handles = Vec::with_capacity(thread_count);
        for _ in 0..thread_count {
            let receiver = Arc::clone(&receiver);
            handles.push(thread::spawn(move || loop {
                let job = {
                    let receiver = receiver.lock().unwrap_or_else(|e| e.into_inner());
                    receiver.recv()
                };
                match job {
                    Ok(job) => job(),
                    Err(_) => break,
                }
            }));
        }
        Self { sender: Mutex::new(Some(sender)), handles: Mutex::new(handles) }
    }

    /// Returns the process-wide pool, initializing it on first call.
    pub fn get_or_init() -> Result<&'static WorkerPool, ProgrammingError> {
        if let Some(pool) = POOL.get() {
            return Ok(pool);
        }
        if let Some(err) = POOL_INIT_ERROR.get() {
            return Err(err.clone());
        }
        match configured_thread_count() {
            Ok(n) => Ok(POOL.get_or_init(|| WorkerPool::spawn(n))),
            Err(err) => {
                let _ = POOL_INIT_ERROR.set(err.clone());
                Err(err)
            }
        }
    }

    /// Submits `job` to run on whichever worker thread picks it up next.
    pub fn submit(&self, job: Job) {
        if let Some(sender) = self.sender.lock().unwrap_or_else(|e| e.into_inner()).as_ref() {
            let _ = sender.send(job);
        }
    }

    /// Closes the submission channel and waits up to `timeout` for in-flight callbacks to
    /// finish. Threads still running past the deadline are abandoned (detached) rather than
    /// forcibly killed — safe Rust has no mechanism to terminate a running thread.
    pub fn shutdown(&self, timeout: Duration) {
        self.sender.lock().unwrap_or_else(|e| e.into_inner()).take();
        let handles = std::mem::take(&mut *self.handles.lock().unwrap_or_else(|e| e.into_inner()));
        let deadline = Instant::now() + timeout;
        for handle in handles {
            while !handle.is_finished() && Instant::now() < deadline {
                thread::sleep(Duration::from_millis(5));
            }
            if handle.is_finished() {
                let _ = handle.join();
            } else {
                #[cfg(feature = "tracing")]
                tracing::warn!("worker thread still running at shutdown deadline, abandoning it");
                drop(handle);
            }
        }
    }
}
