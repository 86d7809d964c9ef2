//! Framework-free state and host bridges shared by every section.

pub mod config;
pub mod disclosure;
pub mod locale;
pub mod platform;
pub mod region;
pub mod scroll_lock;
pub mod tabs;
pub mod timing;
pub mod toggle;
