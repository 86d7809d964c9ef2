//! Accordion: at most one item expanded.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Collapse `index` if it is open, otherwise expand it (collapsing any other).
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_state() {
        let mut faq = Accordion::new();
        faq.toggle(2);
        faq.toggle(2);
        assert_eq!(faq.open_index(), None);

        faq.toggle(1);
        faq.toggle(1);
        faq.toggle(1);
        assert_eq!(faq.open_index(), Some(1));
    }

    #[test]
    fn opening_another_collapses_the_first() {
        let mut faq = Accordion::new();
        faq.toggle(0);
        faq.toggle(4);
        assert_eq!(faq.open_index(), Some(4));
        assert!(!faq.is_open(0));
        assert!(faq.is_open(4));
    }
}
