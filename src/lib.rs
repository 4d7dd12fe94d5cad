//! # Scroll Lock
//!
//! This crate provides a reference-counted toggle for blocking page or
//! viewport scrolling. The provided struct `ScrollLock` keeps a count of
//! active holders and drives an injected [`Viewport`] collaborator exactly
//! when the locked/unlocked boundary is crossed: the blocking style is
//! applied once on the 0→1 transition and removed once on the transition
//! back to 0, no matter how many holders came and went in between.
//!
//! ## Features
//! - Thread-Safe: (`Send`/`Sync`) all operations on the lock are atomic or
//! use std mutexes
//! - Unlock Notification: the `wait_for_unlock` method will block until
//! scrolling is re-enabled (if the lock is held)
//! - Guarantees: the count never goes negative (releasing an unheld lock is
//! a no-op), and the viewport effect fires exactly once per boundary
//! crossing
//!
//! ## Example
//!
//! ```rust
//! # use scroll_lock::ScrollLock;
//! let lock = ScrollLock::default();
//!
//! // A modal and a dropdown each take a hold on the lock
//! assert!(!lock.lock());
//! assert!(!lock.lock());
//! assert_eq!(lock.count(), 2);
//!
//! // Closing the modal leaves scrolling blocked for the dropdown
//! assert!(lock.unlock());
//! assert!(lock.is_locked());
//!
//! // The last holder releasing re-enables scrolling
//! assert!(lock.unlock());
//! assert!(!lock.is_locked());
//! assert_eq!(lock.count(), 0);
//! ```
//!
//! ## Caveats
//! - Reads of the count for `ScrollLock::is_locked` and `ScrollLock::count`
//! are done atomically with `Ordering::Relaxed`. That allows the calls to be
//! slightly faster, but it means you shouldn't think of them as fencing
//! operations
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

mod lock_action;
mod lock_count;
mod lock_guard;
mod viewport;

pub use lock_action::{LockAction, UnknownActionError};
pub use lock_guard::ScrollLockGuard;
pub use viewport::{StyleViewport, Viewport, BLOCKING_OVERFLOW};

use lock_count::{LockCount, LockCountTrait};
use log::debug;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex};

#[cfg(feature = "portable_atomic")]
use portable_atomic::{AtomicU64, Ordering};
#[cfg(not(feature = "portable_atomic"))]
use std::sync::atomic::{AtomicU64, Ordering};

/// Reference-counted scroll lock. At its heart it is an atomic count of
/// active holders and an injected viewport surface that is told to block
/// scrolling while the count is above zero.
#[derive(Debug, Clone)]
pub struct ScrollLock(Arc<WrappedScrollLock>);

struct Inner {
    lock_count: AtomicU64,
    viewport: Box<dyn Viewport + Send + Sync>,
}

#[allow(clippy::mutex_atomic)]
pub(crate) struct WrappedScrollLock {
    inner: Inner,
    transition_lock: Mutex<bool>,
    unlock_condition: Condvar,
}

/// The default scroll lock is unlocked and drives an in-memory
/// [`StyleViewport`]
impl Default for ScrollLock {
    fn default() -> Self {
        ScrollLock::new(StyleViewport::new())
    }
}

impl Inner {
    fn current_count(&self, ordering: Ordering) -> LockCount {
        self.lock_count.load(ordering)
    }

    fn set_count(&self, new_count: LockCount) {
        self.lock_count.store(new_count, Ordering::SeqCst)
    }

    fn is_locked(&self, ordering: Ordering) -> bool {
        self.current_count(ordering).is_locked()
    }
}

impl fmt::Debug for WrappedScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedScrollLock")
            .field("lock_count", &self.inner.current_count(Ordering::Relaxed))
            .finish()
    }
}

#[allow(clippy::mutex_atomic)]
impl WrappedScrollLock {
    pub(crate) fn lock(&self) -> bool {
        let mut locked_guard = self
            .transition_lock
            .lock()
            .expect("Failed to get transition lock");

        self.take_hold(&mut locked_guard)
    }

    pub(crate) fn unlock(&self) -> bool {
        let mut locked_guard = self
            .transition_lock
            .lock()
            .expect("Failed to get transition lock");

        self.release_hold(&mut locked_guard)
    }

    pub(crate) fn toggle(&self) -> bool {
        let mut locked_guard = self
            .transition_lock
            .lock()
            .expect("Failed to get transition lock");

        if self.inner.is_locked(Ordering::SeqCst) {
            self.release_hold(&mut locked_guard)
        } else {
            self.take_hold(&mut locked_guard)
        }
    }

    /// Increment the count under the held transition lock, applying the
    /// block on the 0→1 crossing. Always returns false (scroll disabled).
    fn take_hold(&self, locked: &mut bool) -> bool {
        let starting_count = self.inner.current_count(Ordering::SeqCst);

        self.inner.set_count(starting_count.incremented());

        if !starting_count.is_locked() {
            self.inner.viewport.apply_block();
            *locked = true;
            debug!("scroll block applied");
        }

        false
    }

    /// Decrement the count under the held transition lock, removing the
    /// block on the crossing to 0 and waking unlock waiters. Decrementing an
    /// unheld lock is a no-op. Always returns true (scroll enabled).
    fn release_hold(&self, locked: &mut bool) -> bool {
        let starting_count = self.inner.current_count(Ordering::SeqCst);

        if !starting_count.is_locked() {
            return true;
        }

        let remaining = starting_count.decremented();
        self.inner.set_count(remaining);

        if !remaining.is_locked() {
            self.inner.viewport.remove_block();
            *locked = false;
            debug!("scroll block removed");
            self.unlock_condition.notify_all();
        }

        true
    }
}

#[allow(clippy::mutex_atomic)]
impl ScrollLock {
    /// Create a new unlocked scroll lock driving the given viewport surface
    pub fn new<V>(viewport: V) -> ScrollLock
    where
        V: Viewport + Send + Sync + 'static,
    {
        ScrollLock(Arc::new(WrappedScrollLock {
            inner: Inner {
                lock_count: AtomicU64::new(0),
                viewport: Box::new(viewport),
            },

            transition_lock: Mutex::new(false),
            unlock_condition: Condvar::default(),
        }))
    }

    /// Take one hold on the lock. If this is the first hold, the viewport's
    /// blocking effect is applied.
    ///
    /// Returns the resulting scroll-enabled state, which for this operation
    /// is always `false`
    pub fn lock(&self) -> bool {
        self.0.lock()
    }

    /// Release one hold on the lock. If this was the last hold, the
    /// viewport's blocking effect is removed and any threads blocked in
    /// [`wait_for_unlock`](ScrollLock::wait_for_unlock) are woken. Releasing
    /// an unheld lock is a no-op.
    ///
    /// Returns the resulting scroll-enabled state, which for this operation
    /// is always `true`
    pub fn unlock(&self) -> bool {
        self.0.unlock()
    }

    /// Release one hold when locked, otherwise take one. The check and the
    /// transition happen atomically.
    ///
    /// Returns the resulting scroll-enabled state
    pub fn toggle(&self) -> bool {
        self.0.toggle()
    }

    /// Alias for [`unlock`](ScrollLock::unlock)
    pub fn enable(&self) -> bool {
        self.unlock()
    }

    /// Alias for [`lock`](ScrollLock::lock)
    pub fn disable(&self) -> bool {
        self.lock()
    }

    /// Dispatch entry point over a normalized [`LockAction`]. `None` behaves
    /// as [`toggle`](ScrollLock::toggle).
    ///
    /// Returns the resulting scroll-enabled state
    pub fn call(&self, action: Option<LockAction>) -> bool {
        match action.unwrap_or(LockAction::Toggle) {
            LockAction::Toggle => self.toggle(),
            LockAction::Lock => self.lock(),
            LockAction::Unlock => self.unlock(),
        }
    }

    /// Take one hold on the lock for the lifetime of the returned guard. The
    /// hold is released when the guard is dropped.
    pub fn acquire(&self) -> ScrollLockGuard {
        ScrollLockGuard::new(&self.0)
    }

    /// Check whether any holds are active
    pub fn is_locked(&self) -> bool {
        self.0.inner.is_locked(Ordering::Relaxed)
    }

    /// Get the current number of active holds
    pub fn count(&self) -> u64 {
        self.0.inner.current_count(Ordering::Relaxed)
    }

    /// Block the current thread until scrolling is re-enabled. If the lock
    /// is not held when this method is called, the method will return
    /// without blocking
    pub fn wait_for_unlock(&self) {
        if !self.is_locked() {
            return;
        }

        let guard = self
            .0
            .transition_lock
            .lock()
            .expect("Unable to get transition lock");
        let _lock = self.0.unlock_condition.wait_while(guard, |locked| *locked);
    }
}
