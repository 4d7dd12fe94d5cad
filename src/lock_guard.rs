use super::WrappedScrollLock;
use std::sync::{Arc, Weak};

/// RAII hold on a [`ScrollLock`](crate::ScrollLock). One hold is taken when
/// the guard is created and released when it is dropped, so scoped callers
/// get balanced lock/unlock for free. A guard that outlives its lock releases
/// nothing.
#[derive(Debug)]
pub struct ScrollLockGuard {
    owner: Weak<WrappedScrollLock>,
}

impl ScrollLockGuard {
    pub(crate) fn new(owner: &Arc<WrappedScrollLock>) -> ScrollLockGuard {
        let result = ScrollLockGuard {
            owner: Arc::downgrade(owner),
        };

        owner.lock();

        result
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        if let Some(owner) = self.owner.upgrade() {
            owner.unlock();
        }
    }
}
