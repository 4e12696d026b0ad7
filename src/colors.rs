//! Color palette for status presentation.
//!
//! Colors are RGB565, the native format of the small TFT panels the
//! presentation layer targets, so no conversion is needed when filling a
//! frame buffer.
//!
//! The palette has three semantic colors (success, warning, destructive).
//! Values are the 8-bit design colors reduced to 5/6/5 bits.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::status::{Band, ResourceKind, SeverityTier, StatusResult};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure white (31, 63, 31). Debug-level log lines.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Dark gray for muted text and trace-level log lines.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

// =============================================================================
// Semantic Colors
// =============================================================================

/// Emerald (16, 185, 129). Nominal levels.
pub const SUCCESS: Rgb565 = Rgb565::new(2, 46, 16);

/// Amber (245, 158, 11). Warning levels.
pub const WARNING: Rgb565 = Rgb565::new(30, 39, 1);

/// Red (239, 68, 68). Critical levels and destructive actions.
pub const DESTRUCTIVE: Rgb565 = Rgb565::new(29, 17, 8);

// =============================================================================
// Status Colors
// =============================================================================

/// Color for a severity tier (badges, alert banners).
#[inline]
pub const fn tier_color(tier: SeverityTier) -> Rgb565 {
    match tier {
        SeverityTier::Nominal => SUCCESS,
        SeverityTier::Warning => WARNING,
        SeverityTier::Critical => DESTRUCTIVE,
    }
}

/// Color for a level readout or progress bar.
///
/// Running out is treated more urgently than filling up: a consumable in its
/// escalated band (below 7.5%) already shows destructive, while a waste bin
/// in its escalated band stays amber until it is actually full.
#[inline]
pub const fn level_color(
    kind: ResourceKind,
    band: Band,
) -> Rgb565 {
    match (kind, band) {
        (_, Band::Critical) | (ResourceKind::Depletion, Band::Escalated) => DESTRUCTIVE,
        (_, Band::Warning) | (ResourceKind::Fill, Band::Escalated) => WARNING,
        (_, Band::Clear | Band::Nominal) => SUCCESS,
    }
}

/// Level color for an already classified reading.
#[inline]
pub const fn status_color(
    kind: ResourceKind,
    status: &StatusResult,
) -> Rgb565 {
    level_color(kind, status.band)
}
