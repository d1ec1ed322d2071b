//! Design tokens for consistent UI spacing and sizing.
//!
//! This module defines named constants for common UI values to ensure
//! consistency across the application and make global adjustments easier.

use gpui::px;

// =============================================================================
// Spacing (padding, margin, gap)
// =============================================================================

/// Extra small spacing (4px) - tight gaps, small padding
pub const SPACE_XS: gpui::Pixels = px(4.0);

/// Medium spacing (8px) - standard gaps
pub const SPACE_MD: gpui::Pixels = px(8.0);

/// Extra large spacing (16px) - label insets, page padding
pub const SPACE_XL: gpui::Pixels = px(16.0);

// =============================================================================
// Text sizes
// =============================================================================

/// Extra large text (14px) - corner labels, alt text
pub const TEXT_XL: gpui::Pixels = px(14.0);

// =============================================================================
// Border radius
// =============================================================================

/// Standard radius (4px) - labels
pub const RADIUS_STD: gpui::Pixels = px(4.0);

// =============================================================================
// Icon sizes
// =============================================================================

/// Medium icon (12px) - slider grip
pub const ICON_MD: gpui::Pixels = px(12.0);
