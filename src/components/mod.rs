// Re-export framework traits for convenience
pub use crate::framework::{Children, Component};

pub mod counter;
pub mod home;
pub mod section;
