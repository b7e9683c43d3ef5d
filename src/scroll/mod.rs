//! Animated anchor scrolling and active-section tracking.
//!
//! The core is written against [`Viewport`] and [`FrameScheduler`] so it
//! runs the same in the browser ([`dom`]) and under native tests.

pub mod animator;
pub mod coalesce;
pub mod controller;
pub mod dom;
pub mod easing;
pub mod tracker;
pub mod viewport;

#[cfg(test)]
pub mod testing;

pub use coalesce::FrameCoalescer;
pub use controller::{NavigationController, NavigationSnapshot};
pub use dom::{AnimationFrames, BrowserEvents, BrowserViewport, PassiveListener};
pub use easing::ease_out_quart;
pub use viewport::{in_view, FrameScheduler, SectionRect, Viewport};

/// The controller as wired up in the browser.
pub type BrowserNavigation = NavigationController<BrowserViewport, AnimationFrames>;
