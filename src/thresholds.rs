//! Centralized resource level thresholds.
//!
//! Every resource the device reports on (waste bin, staining dye, filter
//! paper) has exactly one [`ThresholdTable`]. The built-in tables are
//! compile-time constants with validation assertions, so a mis-ordered table
//! fails the build instead of silently drifting between call sites.
//!
//! # Semantics
//!
//! - **Fill** resources get worse as they rise. A reading strictly above
//!   `warning` warns, strictly above `escalate` escalates the warning, and
//!   anything at or above `critical` is critical. Readings below
//!   `clear_below` are reported as an empty bin.
//! - **Depletion** resources get worse as they fall. A reading strictly below
//!   `warning` warns, strictly below `escalate` escalates the warning, and
//!   anything strictly below `critical` (the empty floor) is critical.
//!
//! # Usage
//!
//! ```
//! use microscan_health::thresholds::{WASTE_BIN, WASTE_CRITICAL};
//! use microscan_health::status::Band;
//!
//! assert_eq!(WASTE_BIN.band(WASTE_CRITICAL), Band::Critical);
//! ```

use thiserror::Error;

use crate::status::{Band, ResourceKind};

// =============================================================================
// Waste Bin Thresholds (Fill: higher is worse)
// =============================================================================

/// Fill level above which the bin is "getting full" (>60% = warning).
/// At or below this value there is plenty of space.
pub const WASTE_WARNING: f32 = 60.0;

/// Fill level above which the bin "needs emptying soon" (>75%).
pub const WASTE_ESCALATE: f32 = 75.0;

/// Fill level at which the bin is full (>=98% = critical).
/// No new sample can be analysed until the bin is emptied.
pub const WASTE_CRITICAL: f32 = 98.0;

/// Fill level below which the bin is reported as empty (<2%).
pub const WASTE_CLEAR_BELOW: f32 = 2.0;

const _: () = assert!(WASTE_CLEAR_BELOW < WASTE_WARNING);
const _: () = assert!(WASTE_WARNING < WASTE_ESCALATE);
const _: () = assert!(WASTE_ESCALATE < WASTE_CRITICAL);

// =============================================================================
// Consumable Thresholds (Depletion: lower is worse)
// =============================================================================

/// Remaining level below which a consumable should be reordered (<15%).
pub const CONSUMABLE_WARNING: f32 = 15.0;

/// Remaining level below which a consumable should be replaced now (<7.5%).
pub const CONSUMABLE_ESCALATE: f32 = 7.5;

/// Dye cartridge empty floor (<1%). Results are unreliable below this.
pub const DYE_CRITICAL: f32 = 1.0;

/// Filter paper roll empty floor (<2%).
pub const FILTER_CRITICAL: f32 = 2.0;

const _: () = assert!(DYE_CRITICAL < CONSUMABLE_ESCALATE);
const _: () = assert!(FILTER_CRITICAL < CONSUMABLE_ESCALATE);
const _: () = assert!(CONSUMABLE_ESCALATE < CONSUMABLE_WARNING);

// =============================================================================
// Threshold Tables
// =============================================================================

/// Reasons a threshold table is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(all(feature = "defmt", target_arch = "arm"), derive(defmt::Format))]
pub enum ThresholdError {
    /// A threshold is NaN or infinite.
    #[error("threshold values must be finite")]
    NonFinite,

    /// Thresholds are not strictly ordered in the direction of the resource kind.
    #[error("thresholds are not ordered for a {kind:?} resource")]
    Unordered { kind: ResourceKind },

    /// Depletion resources have no "empty bin" band.
    #[error("clear_below only applies to fill resources")]
    ClearBandOnDepletion,

    /// The table's kind differs from the kind of the resource it was assigned to.
    #[error("expected a {expected:?} table, got {actual:?}")]
    KindMismatch { expected: ResourceKind, actual: ResourceKind },
}

/// Threshold set for one resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdTable {
    /// Direction in which the resource gets worse.
    pub kind: ResourceKind,
    /// First warning boundary (exclusive).
    pub warning: f32,
    /// Escalated warning boundary (exclusive).
    pub escalate: f32,
    /// Critical boundary: inclusive for Fill, exclusive for Depletion.
    pub critical: f32,
    /// Fill only: readings below this are reported as empty.
    pub clear_below: Option<f32>,
}

/// Built-in waste bin table.
pub const WASTE_BIN: ThresholdTable =
    ThresholdTable::fill(WASTE_WARNING, WASTE_ESCALATE, WASTE_CRITICAL, Some(WASTE_CLEAR_BELOW));

/// Built-in staining dye table.
pub const DYE: ThresholdTable = ThresholdTable::depletion(CONSUMABLE_WARNING, CONSUMABLE_ESCALATE, DYE_CRITICAL);

/// Built-in filter paper table.
pub const FILTER_PAPER: ThresholdTable =
    ThresholdTable::depletion(CONSUMABLE_WARNING, CONSUMABLE_ESCALATE, FILTER_CRITICAL);

const _: () = assert!(WASTE_BIN.validate().is_ok());
const _: () = assert!(DYE.validate().is_ok());
const _: () = assert!(FILTER_PAPER.validate().is_ok());

impl ThresholdTable {
    /// Build a fill table without validation. Use [`ThresholdTable::checked`] for runtime input.
    pub const fn fill(
        warning: f32,
        escalate: f32,
        critical: f32,
        clear_below: Option<f32>,
    ) -> Self {
        Self {
            kind: ResourceKind::Fill,
            warning,
            escalate,
            critical,
            clear_below,
        }
    }

    /// Build a depletion table without validation.
    pub const fn depletion(
        warning: f32,
        escalate: f32,
        critical: f32,
    ) -> Self {
        Self {
            kind: ResourceKind::Depletion,
            warning,
            escalate,
            critical,
            clear_below: None,
        }
    }

    /// Check finiteness and ordering.
    pub const fn validate(&self) -> Result<(), ThresholdError> {
        if !self.warning.is_finite() || !self.escalate.is_finite() || !self.critical.is_finite() {
            return Err(ThresholdError::NonFinite);
        }

        match self.kind {
            ResourceKind::Fill => {
                if let Some(clear) = self.clear_below {
                    if !clear.is_finite() {
                        return Err(ThresholdError::NonFinite);
                    }
                    if clear > self.warning {
                        return Err(ThresholdError::Unordered { kind: self.kind });
                    }
                }
                if self.warning < self.escalate && self.escalate < self.critical {
                    Ok(())
                } else {
                    Err(ThresholdError::Unordered { kind: self.kind })
                }
            }
            ResourceKind::Depletion => {
                if self.clear_below.is_some() {
                    return Err(ThresholdError::ClearBandOnDepletion);
                }
                if self.critical < self.escalate && self.escalate < self.warning {
                    Ok(())
                } else {
                    Err(ThresholdError::Unordered { kind: self.kind })
                }
            }
        }
    }

    /// Validate and return the table.
    pub fn checked(self) -> Result<Self, ThresholdError> { self.validate().map(|()| self) }

    /// Place a reading into its band.
    ///
    /// Never fails: out-of-range values saturate through the same comparisons
    /// and `NaN` is placed at the worst end of the scale.
    pub fn band(
        &self,
        value: f32,
    ) -> Band {
        if value.is_nan() {
            return Band::Critical;
        }

        match self.kind {
            ResourceKind::Fill => {
                if value >= self.critical {
                    Band::Critical
                } else if value > self.escalate {
                    Band::Escalated
                } else if value > self.warning {
                    Band::Warning
                } else if self.clear_below.is_some_and(|clear| value < clear) {
                    Band::Clear
                } else {
                    Band::Nominal
                }
            }
            ResourceKind::Depletion => {
                if value < self.critical {
                    Band::Critical
                } else if value < self.escalate {
                    Band::Escalated
                } else if value < self.warning {
                    Band::Warning
                } else {
                    Band::Nominal
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
