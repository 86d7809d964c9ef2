pub mod plans;
mod view;

pub use plans::{plans, BillingPeriod, Plan, PlanId};
pub use view::Pricing;
