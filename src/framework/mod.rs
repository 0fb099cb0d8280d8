//! React-like component framework: components with a mount/update/render/unmount
//! lifecycle, driven by a runtime that turns terminal events into actions.

pub mod action;
pub mod children;
pub mod components;
pub mod runtime;
pub mod updater;

// Re-export commonly used items
pub use action::Action;
pub use children::Children;
pub use components::Component;
pub use runtime::Runtime;
pub use updater::Updater;
