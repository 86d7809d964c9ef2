//! Testimonial carousel state machine.
//!
//! Every transition goes through [`Carousel::reschedule`], which bumps the
//! generation token and hands back the next tick to arm (if autoplay is still
//! on). A tick carrying an older generation is rejected, so a tick raced by a
//! manual click can never advance the carousel a second time.

use crate::core::locale::TextDirection;

/// Horizontal distance a slide travels when entering or leaving.
pub const SLIDE_DISTANCE_PX: f64 = 1000.0;

/// Last navigation direction; only used to pick the slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    Backward,
    #[default]
    Still,
    Forward,
}

impl SlideDirection {
    pub fn sign(self) -> i8 {
        match self {
            SlideDirection::Backward => -1,
            SlideDirection::Still => 0,
            SlideDirection::Forward => 1,
        }
    }

    fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => SlideDirection::Forward,
            std::cmp::Ordering::Less => SlideDirection::Backward,
            std::cmp::Ordering::Equal => SlideDirection::Still,
        }
    }
}

/// A tick the view should deliver back after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub generation: u64,
    pub delay_ms: u64,
}

/// Input events, as delivered by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Tick { generation: u64 },
    Next,
    Previous,
    Select(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    active: usize,
    direction: SlideDirection,
    autoplay: bool,
    generation: u64,
    interval_ms: u64,
}

impl Carousel {
    pub fn new(len: usize, interval_ms: u64) -> Self {
        Self {
            len,
            active: 0,
            direction: SlideDirection::Still,
            autoplay: true,
            generation: 0,
            interval_ms,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Arm the first tick. Called once when the view mounts.
    pub fn start(&mut self) -> Option<ScheduledTick> {
        self.reschedule()
    }

    pub fn apply(&mut self, event: CarouselEvent) -> Option<ScheduledTick> {
        match event {
            CarouselEvent::Tick { generation } => self.tick(generation),
            CarouselEvent::Next => self.next(),
            CarouselEvent::Previous => self.previous(),
            CarouselEvent::Select(index) => self.select(index),
        }
    }

    /// Autoplay advance. Ignored when stale or when autoplay is off; an
    /// ignored tick leaves the current schedule untouched.
    pub fn tick(&mut self, generation: u64) -> Option<ScheduledTick> {
        if !self.autoplay || generation != self.generation || self.is_empty() {
            tracing::trace!(generation, current = self.generation, "ignoring stale tick");
            return None;
        }
        self.step_forward();
        self.reschedule()
    }

    pub fn next(&mut self) -> Option<ScheduledTick> {
        if self.is_empty() {
            return None;
        }
        self.autoplay = false;
        self.step_forward();
        self.reschedule()
    }

    pub fn previous(&mut self) -> Option<ScheduledTick> {
        if self.is_empty() {
            return None;
        }
        self.autoplay = false;
        self.direction = SlideDirection::Backward;
        self.active = (self.active + self.len - 1) % self.len;
        self.reschedule()
    }

    /// Jump to `index`. Direction is the sign of the plain index difference,
    /// so wrapping from the last slide to the first animates backward.
    pub fn select(&mut self, index: usize) -> Option<ScheduledTick> {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "ignoring out-of-range slide");
            return None;
        }
        self.autoplay = false;
        self.direction = SlideDirection::between(self.active, index);
        self.active = index;
        self.reschedule()
    }

    fn step_forward(&mut self) {
        self.direction = SlideDirection::Forward;
        self.active = (self.active + 1) % self.len;
    }

    /// The only place a tick gets armed. Invalidates any pending tick.
    fn reschedule(&mut self) -> Option<ScheduledTick> {
        self.generation = self.generation.wrapping_add(1);
        (self.autoplay && !self.is_empty()).then_some(ScheduledTick {
            generation: self.generation,
            delay_ms: self.interval_ms,
        })
    }
}

/// Where the incoming slide starts and where the outgoing one ends, in px
/// along the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideMotion {
    pub enter_from_px: f64,
    pub exit_to_px: f64,
}

impl SlideMotion {
    /// Forward slides come in from the trailing edge of the reading
    /// direction, so RTL mirrors the geometry.
    pub fn for_step(direction: SlideDirection, text: TextDirection) -> Self {
        let mirror = if text.is_rtl() { -1.0 } else { 1.0 };
        let enter = match direction {
            SlideDirection::Forward => SLIDE_DISTANCE_PX,
            SlideDirection::Backward => -SLIDE_DISTANCE_PX,
            SlideDirection::Still => 0.0,
        } * mirror;
        Self {
            enter_from_px: enter,
            exit_to_px: -enter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_n_times_wraps_to_start() {
        for n in 1..=7 {
            let mut c = Carousel::new(n, 5_000);
            for _ in 0..n {
                c.next();
            }
            assert_eq!(c.active(), 0, "n = {n}");
        }
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut c = Carousel::new(5, 5_000);
        c.previous();
        assert_eq!(c.active(), 4);
        assert_eq!(c.direction(), SlideDirection::Backward);
        assert!(!c.autoplay());
    }

    #[test]
    fn select_then_previous() {
        for n in 1..=5usize {
            for i in 0..n {
                let mut c = Carousel::new(n, 5_000);
                c.select(i);
                assert_eq!(c.direction(), SlideDirection::between(0, i));
                c.previous();
                assert_eq!(c.active(), (i + n - 1) % n);
            }
        }
    }

    #[test]
    fn select_direction_uses_plain_difference() {
        let mut c = Carousel::new(5, 5_000);
        c.select(4);
        assert_eq!(c.direction(), SlideDirection::Forward);
        c.select(0);
        assert_eq!(c.direction(), SlideDirection::Backward);
        c.select(0);
        assert_eq!(c.direction(), SlideDirection::Still);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut c = Carousel::new(3, 5_000);
        let before = c.clone();
        assert_eq!(c.select(3), None);
        assert_eq!(c, before);
    }

    #[test]
    fn tick_advances_and_rearms() {
        let mut c = Carousel::new(3, 5_000);
        let first = c.start().unwrap();
        let second = c.tick(first.generation).unwrap();
        assert_eq!(c.active(), 1);
        assert!(c.autoplay());
        assert_eq!(second.delay_ms, 5_000);
        assert_ne!(first.generation, second.generation);
    }

    #[test]
    fn manual_input_supersedes_pending_tick() {
        let mut c = Carousel::new(3, 5_000);
        let pending = c.start().unwrap();
        assert_eq!(c.next(), None);
        assert_eq!(c.active(), 1);

        assert_eq!(c.tick(pending.generation), None);
        assert_eq!(c.active(), 1);
    }

    #[test]
    fn stale_tick_does_not_disturb_current_schedule() {
        let mut c = Carousel::new(3, 5_000);
        let old = c.start().unwrap();
        let current = c.tick(old.generation).unwrap();
        assert_eq!(c.tick(old.generation), None);
        assert_eq!(c.generation(), current.generation);
        assert!(c.tick(current.generation).is_some());
        assert_eq!(c.active(), 2);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = Carousel::new(0, 5_000);
        assert_eq!(c.start(), None);
        assert_eq!(c.next(), None);
        assert_eq!(c.previous(), None);
        assert_eq!(c.select(0), None);
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn rtl_mirrors_slide_geometry() {
        let ltr = SlideMotion::for_step(SlideDirection::Forward, TextDirection::Ltr);
        let rtl = SlideMotion::for_step(SlideDirection::Forward, TextDirection::Rtl);
        assert_eq!(ltr.enter_from_px, SLIDE_DISTANCE_PX);
        assert_eq!(ltr.exit_to_px, -SLIDE_DISTANCE_PX);
        assert_eq!(rtl.enter_from_px, -ltr.enter_from_px);
        assert_eq!(rtl.exit_to_px, -ltr.exit_to_px);

        let back = SlideMotion::for_step(SlideDirection::Backward, TextDirection::Ltr);
        assert_eq!(back.enter_from_px, -SLIDE_DISTANCE_PX);
    }
}
