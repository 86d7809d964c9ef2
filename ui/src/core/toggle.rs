//! Open/closed state for dropdowns and overlay menus.

use super::region::{Point, Region};
use super::scroll_lock::{ScrollLock, ScrollLockGuard};

#[derive(Debug, Default)]
pub struct MenuToggle {
    lock: Option<ScrollLock>,
    guard: Option<ScrollLockGuard>,
    open: bool,
}

impl MenuToggle {
    /// A menu that leaves page scrolling alone.
    pub fn new() -> Self {
        Self::default()
    }

    /// A menu that suppresses background scrolling while open.
    pub fn with_scroll_lock(lock: ScrollLock) -> Self {
        Self {
            lock: Some(lock),
            guard: None,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        if self.guard.is_none() {
            self.guard = self.lock.as_ref().map(ScrollLock::acquire);
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        // Dropping the guard is the only release path.
        self.guard = None;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Close the menu if `point` lies outside every region in `keep_open`
    /// (typically the menu panel and its trigger). Returns whether it closed.
    pub fn dismiss_outside(&mut self, point: Point, keep_open: &[&dyn Region]) -> bool {
        if !self.open || keep_open.iter().any(|region| region.contains(point)) {
            return false;
        }
        self.close();
        true
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::core::region::Rect;
    use crate::core::scroll_lock::RecordingSurface;

    fn locked_pair() -> (Rc<RecordingSurface>, ScrollLock) {
        let surface = Rc::new(RecordingSurface::default());
        let lock = ScrollLock::new(surface.clone());
        (surface, lock)
    }

    #[test]
    fn repeated_open_does_not_double_lock() {
        let (surface, lock) = locked_pair();
        let mut menu = MenuToggle::with_scroll_lock(lock.clone());
        menu.open();
        menu.open();
        assert_eq!(lock.holders(), 1);
        menu.close();
        menu.close();
        assert_eq!(lock.holders(), 0);
        assert_eq!(*surface.calls.borrow(), vec![true, false]);
    }

    #[test]
    fn dropping_an_open_menu_releases_the_lock() {
        let (surface, lock) = locked_pair();
        let mut menu = MenuToggle::with_scroll_lock(lock.clone());
        menu.toggle();
        assert!(lock.is_engaged());
        drop(menu);
        assert!(!lock.is_engaged());
        assert_eq!(*surface.calls.borrow(), vec![true, false]);
    }

    #[test]
    fn lock_tracks_any_open_menu() {
        let (_surface, lock) = locked_pair();
        let mut mobile = MenuToggle::with_scroll_lock(lock.clone());
        let mut other = MenuToggle::with_scroll_lock(lock.clone());

        mobile.open();
        other.open();
        mobile.close();
        assert!(lock.is_engaged());
        other.toggle();
        assert!(!lock.is_engaged());
    }

    #[test]
    fn plain_menu_never_touches_a_lock() {
        let mut menu = MenuToggle::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_pointer_closes_but_menu_and_trigger_do_not() {
        let (_surface, lock) = locked_pair();
        let mut menu = MenuToggle::with_scroll_lock(lock.clone());
        let panel = Rect::new(0.0, 64.0, 300.0, 400.0);
        let trigger = Some(Rect::new(260.0, 8.0, 40.0, 40.0));
        menu.open();

        assert!(!menu.dismiss_outside(Point::new(100.0, 100.0), &[&panel, &trigger]));
        assert!(!menu.dismiss_outside(Point::new(280.0, 20.0), &[&panel, &trigger]));
        assert!(menu.is_open());

        assert!(menu.dismiss_outside(Point::new(500.0, 600.0), &[&panel, &trigger]));
        assert!(!menu.is_open());
        assert!(!lock.is_engaged());

        // Already closed: nothing to dismiss.
        assert!(!menu.dismiss_outside(Point::new(500.0, 600.0), &[&panel, &trigger]));
    }
}
