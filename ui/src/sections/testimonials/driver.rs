//! Runs a [`Carousel`] against real time: one loop that races the armed
//! autoplay timer against the next input event.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::future::{select, Either};
use futures_util::{Stream, StreamExt};

use super::carousel::{Carousel, CarouselEvent, ScheduledTick};

/// Somewhere the driver can apply transitions.
pub trait CarouselStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut Carousel) -> R) -> R;
}

impl CarouselStore for Signal<Carousel> {
    fn update<R>(&mut self, f: impl FnOnce(&mut Carousel) -> R) -> R {
        self.with_mut(f)
    }
}

impl CarouselStore for Rc<RefCell<Carousel>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut Carousel) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Drive `store` until `events` ends.
///
/// An accepted transition replaces the timer (or disarms it once autoplay is
/// off), so a stale tick can never fire. An ignored event keeps the running
/// timer and its original deadline.
pub async fn drive<S, E, Sleep, F>(mut store: S, mut events: E, mut sleep: Sleep)
where
    S: CarouselStore,
    E: Stream<Item = CarouselEvent> + Unpin,
    Sleep: FnMut(u64) -> F,
    F: Future<Output = ()>,
{
    let mut arm = |tick: ScheduledTick| (tick, Box::pin(sleep(tick.delay_ms)));
    let mut pending: Option<(ScheduledTick, Pin<Box<F>>)> = store.update(Carousel::start).map(&mut arm);

    loop {
        let event = match pending.as_mut() {
            Some((tick, timer)) => match select(timer.as_mut(), events.next()).await {
                Either::Left(((), _)) => CarouselEvent::Tick {
                    generation: tick.generation,
                },
                Either::Right((Some(event), _)) => event,
                Either::Right((None, _)) => break,
            },
            None => match events.next().await {
                Some(event) => event,
                None => break,
            },
        };

        let (scheduled, accepted, active) = store.update(|carousel| {
            let before = carousel.generation();
            let scheduled = carousel.apply(event);
            (scheduled, carousel.generation() != before, carousel.active())
        });
        if accepted {
            pending = scheduled.map(&mut arm);
        }
        tracing::debug!(?event, accepted, active, "carousel transition");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures_channel::mpsc;
    use tokio::time::sleep;

    use super::*;
    use crate::core::timing;

    const INTERVAL_MS: u64 = 5_000;

    fn carousel(len: usize) -> Rc<RefCell<Carousel>> {
        Rc::new(RefCell::new(Carousel::new(len, INTERVAL_MS)))
    }

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[tokio::test(start_paused = true)]
    async fn autoplay_advances_once_per_interval() {
        let state = carousel(5);
        let (tx, rx) = mpsc::unbounded::<CarouselEvent>();

        let script = async {
            sleep(secs(4.9)).await;
            assert_eq!(state.borrow().active(), 0);
            sleep(secs(0.2)).await;
            assert_eq!(state.borrow().active(), 1);
            sleep(secs(10.0)).await;
            assert_eq!(state.borrow().active(), 3);
            assert!(state.borrow().autoplay());
            drop(tx);
        };
        futures_util::join!(drive(state.clone(), rx, timing::sleep_ms), script);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_next_stops_autoplay_for_good() {
        let state = carousel(3);
        let (tx, rx) = mpsc::unbounded();

        let script = async {
            sleep(secs(1.0)).await;
            tx.unbounded_send(CarouselEvent::Next).unwrap();
            sleep(secs(0.1)).await;
            assert_eq!(state.borrow().active(), 1);

            // Several full intervals, including the original deadline.
            sleep(secs(30.0)).await;
            assert_eq!(state.borrow().active(), 1);
            assert!(!state.borrow().autoplay());
            drop(tx);
        };
        futures_util::join!(drive(state.clone(), rx, timing::sleep_ms), script);
    }

    #[tokio::test(start_paused = true)]
    async fn ignored_event_keeps_the_original_deadline() {
        let state = carousel(3);
        let (tx, rx) = mpsc::unbounded();

        let script = async {
            sleep(secs(2.0)).await;
            tx.unbounded_send(CarouselEvent::Select(99)).unwrap();
            sleep(secs(3.5)).await;
            assert_eq!(state.borrow().active(), 1, "tick should still fire at 5s");
            assert!(state.borrow().autoplay());
            drop(tx);
        };
        futures_util::join!(drive(state.clone(), rx, timing::sleep_ms), script);
    }

    #[tokio::test(start_paused = true)]
    async fn driver_stops_when_events_end() {
        let state = carousel(3);
        let (tx, rx) = mpsc::unbounded::<CarouselEvent>();
        drop(tx);
        drive(state.clone(), rx, timing::sleep_ms).await;
        assert_eq!(state.borrow().active(), 0);
    }
}
