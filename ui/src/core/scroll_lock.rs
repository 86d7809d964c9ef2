//! Page-wide background scroll lock, shared by every menu that needs it.
//!
//! The lock is a reference count of live [`ScrollLockGuard`]s. The surface is
//! told to lock on the 0 -> 1 edge and to unlock on the 1 -> 0 edge, so any
//! number of overlapping holders produce exactly one lock and one release.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Whatever actually stops the page from scrolling (the document body on web
/// and desktop, a recorder in tests).
pub trait ScrollSurface {
    fn set_scroll_locked(&self, locked: bool);
}

struct Shared {
    holders: Cell<usize>,
    surface: Rc<dyn ScrollSurface>,
}

#[derive(Clone)]
pub struct ScrollLock {
    shared: Rc<Shared>,
}

impl ScrollLock {
    pub fn new(surface: Rc<dyn ScrollSurface>) -> Self {
        Self {
            shared: Rc::new(Shared {
                holders: Cell::new(0),
                surface,
            }),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.shared.holders.get() + 1;
        self.shared.holders.set(holders);
        if holders == 1 {
            tracing::debug!("scroll lock engaged");
            self.shared.surface.set_scroll_locked(true);
        }
        ScrollLockGuard {
            shared: Rc::clone(&self.shared),
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.shared.holders.get() > 0
    }

    pub fn holders(&self) -> usize {
        self.shared.holders.get()
    }
}

impl PartialEq for ScrollLock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders())
            .finish()
    }
}

/// Releases its share of the lock when dropped.
pub struct ScrollLockGuard {
    shared: Rc<Shared>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.shared.holders.get().saturating_sub(1);
        self.shared.holders.set(holders);
        if holders == 0 {
            tracing::debug!("scroll lock released");
            self.shared.surface.set_scroll_locked(false);
        }
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrollLockGuard")
    }
}

/// Test double that records every surface call.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub calls: std::cell::RefCell<Vec<bool>>,
}

#[cfg(test)]
impl ScrollSurface for RecordingSurface {
    fn set_scroll_locked(&self, locked: bool) {
        self.calls.borrow_mut().push(locked);
    }
}
