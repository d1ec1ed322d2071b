//! Framework-independent core of the image comparison slider.
//!
//! Holds the pointer-to-position mapping, the derived render layout,
//! widget configuration and theme colors. The gpui views live in the
//! `image-compare` crate and only read from here.

pub mod config;
pub mod error;
pub mod layout;
pub mod position;
pub mod theme;

pub use config::{ComparisonConfig, ImageSourceSpec};
pub use error::ConfigError;
pub use layout::SliderLayout;
pub use position::{ContainerGeometry, PositionTracker};
