//! Page sections, top to bottom. Each section owns its element id (see
//! [`anchor::Section`]) and reads the locale from context.

pub mod anchor;
pub mod cta;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod pricing;
pub mod testimonials;

pub use cta::CallToAction;
pub use faq::Faq;
pub use features::Features;
pub use footer::SiteFooter;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
