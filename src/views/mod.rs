//! Application views.
//!
//! - `image_comparison` - the before/after slider widget
//! - `demo_page` - the window content hosting it

pub mod demo_page;
pub mod image_comparison;

pub use demo_page::DemoPage;
