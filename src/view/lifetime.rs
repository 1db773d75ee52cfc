//! Liveness tracking for mounted views.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Owner side of a mount's liveness flag. Ends on drop.
#[derive(Debug)]
pub struct Lifetime {
    alive: Arc<Mutex<bool>>,
}

/// Handle carried by asynchronous continuations of a mount.
#[derive(Debug, Clone)]
pub struct LifetimeToken {
    alive: Arc<Mutex<bool>>,
}

fn lock(alive: &Mutex<bool>) -> MutexGuard<'_, bool> {
    alive.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Lifetime {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(Mutex::new(true)),
        }
    }

    pub fn token(&self) -> LifetimeToken {
        LifetimeToken {
            alive: Arc::clone(&self.alive),
        }
    }

    pub fn is_alive(&self) -> bool {
        *lock(&self.alive)
    }

    /// Mark the owner as gone.
    ///
    /// Waits for any `run_if_alive` closure already holding the flag, so
    /// nothing runs on the owner's behalf once this returns.
    pub fn end(&self) {
        *lock(&self.alive) = false;
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Lifetime {
    fn drop(&mut self) {
        self.end();
    }
}

impl LifetimeToken {
    pub fn is_alive(&self) -> bool {
        *lock(&self.alive)
    }

    /// Run `f` while holding the flag, only if the owner is still alive.
    pub fn run_if_alive<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        let alive = lock(&self.alive);
        if *alive {
            Some(f())
        } else {
            None
        }
    }
}
