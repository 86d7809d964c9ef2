//! Single-select state over a small closed enumeration.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState<T> {
    selected: T,
}

impl<T: Copy + PartialEq> TabState<T> {
    pub fn new(initial: T) -> Self {
        Self { selected: initial }
    }

    pub fn selected(&self) -> T {
        self.selected
    }

    pub fn select(&mut self, value: T) {
        self.selected = value;
    }

    pub fn is_selected(&self, value: T) -> bool {
        self.selected == value
    }
}

impl<T: Copy + PartialEq + Default> Default for TabState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
