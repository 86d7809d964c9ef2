pub mod newsletter;
mod view;

pub use newsletter::{Newsletter, ResetTicket};
pub use view::CallToAction;
