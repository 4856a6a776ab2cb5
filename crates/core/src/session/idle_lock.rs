//! Inactivity lock timer.
//!
//! Every qualifying user interaction calls [`IdleLock::touch`], which
//! cancels the pending timer and schedules a fresh one, so at most one
//! lock timer exists at any moment. When the timer fires the shared
//! `locked` flag flips and stays set until [`IdleLock::unlock`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

pub struct IdleLock {
    locked: Arc<AtomicBool>,
    timeout: Mutex<Duration>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl IdleLock {
    /// Creates an unarmed lock. A zero timeout disables the timer.
    pub fn new(timeout: Duration) -> Self {
        IdleLock {
            locked: Arc::new(AtomicBool::new(false)),
            timeout: Mutex::new(timeout),
            timer: Mutex::new(None),
        }
    }

    /// Replaces the timeout used by subsequent `touch` calls.
    pub fn set_timeout(&self, timeout: Duration) {
        *self.timeout.lock().unwrap() = timeout;
    }

    /// Debounces the lock: cancels any pending timer and schedules a new
    /// one. Must be called from within a tokio runtime.
    pub fn touch(&self) {
        let mut timer = self.timer.lock().unwrap();
        if let Some(handle) = timer.take() {
            handle.abort();
        }
        let timeout = *self.timeout.lock().unwrap();
        if timeout.is_zero() {
            return;
        }
        let locked = Arc::clone(&self.locked);
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            locked.store(true, Ordering::SeqCst);
        }));
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }

    /// Clears the locked flag after a successful PIN entry.
    pub fn unlock(&self) {
        self.locked.store(false, Ordering::SeqCst);
    }
}

impl Drop for IdleLock {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.lock().unwrap().take() {
            handle.abort();
        }
    }
}
