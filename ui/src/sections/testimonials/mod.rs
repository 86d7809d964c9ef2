pub mod carousel;
pub mod driver;
mod view;

pub use carousel::{Carousel, CarouselEvent, ScheduledTick, SlideDirection, SlideMotion};
pub use driver::{drive, CarouselStore};
pub use view::Testimonials;
