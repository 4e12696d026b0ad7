//! Status classification for device resource levels.
//!
//! Turns a raw percentage reading into a [`SeverityTier`] and a human-readable
//! message. Classification is a pure lookup over the resource's
//! [`ThresholdTable`]; it has no side effects, keeps no state, and never fails.
//!
//! # Tiers and Bands
//!
//! The tier is the alerting contract (`Nominal < Warning < Critical`). Each
//! tier is subdivided into bands that pick the message and color:
//!
//! | Band        | Tier     | Waste bin (fill)        | Dye / filter (depletion) |
//! |-------------|----------|-------------------------|--------------------------|
//! | `Clear`     | Nominal  | below 2%                | never                    |
//! | `Nominal`   | Nominal  | 2-60%                   | 15% and above            |
//! | `Warning`   | Warning  | above 60%, up to 75%    | below 15%, 7.5% and up   |
//! | `Escalated` | Warning  | above 75%, below 98%    | below 7.5%, floor and up |
//! | `Critical`  | Critical | 98% and above           | below the floor          |

use crate::thresholds::{DYE, FILTER_PAPER, ThresholdError, ThresholdTable, WASTE_BIN};

// =============================================================================
// Resource Types
// =============================================================================

/// Direction in which a resource reading gets worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(all(feature = "defmt", target_arch = "arm"), derive(defmt::Format))]
pub enum ResourceKind {
    /// Higher is worse (waste bin fullness).
    Fill,
    /// Lower is worse (remaining dye, remaining filter paper).
    Depletion,
}

/// A consumable or accumulator tracked by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(all(feature = "defmt", target_arch = "arm"), derive(defmt::Format))]
pub enum Resource {
    WasteBin,
    Dye,
    FilterPaper,
}

impl Resource {
    /// Number of tracked resources.
    pub const COUNT: usize = 3;

    /// All resources in display order.
    pub const ALL: [Self; Self::COUNT] = [Self::WasteBin, Self::Dye, Self::FilterPaper];

    /// Semantics of this resource's readings.
    #[inline]
    pub const fn kind(self) -> ResourceKind {
        match self {
            Self::WasteBin => ResourceKind::Fill,
            Self::Dye | Self::FilterPaper => ResourceKind::Depletion,
        }
    }

    /// Built-in threshold table.
    #[inline]
    pub const fn default_table(self) -> ThresholdTable {
        match self {
            Self::WasteBin => WASTE_BIN,
            Self::Dye => DYE,
            Self::FilterPaper => FILTER_PAPER,
        }
    }

    /// Status messages shown for each band.
    #[inline]
    pub const fn messages(self) -> &'static StatusMessages {
        match self {
            Self::WasteBin => &WASTE_BIN_MESSAGES,
            Self::Dye => &DYE_MESSAGES,
            Self::FilterPaper => &FILTER_PAPER_MESSAGES,
        }
    }

    /// Short display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::WasteBin => "Waste Bin",
            Self::Dye => "Staining Dye",
            Self::FilterPaper => "Filter Paper",
        }
    }

    /// Position in [`Resource::ALL`].
    #[inline]
    pub const fn index(self) -> usize { self as usize }
}

/// A single telemetry reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub resource: Resource,
    /// Percentage, nominally 0-100.
    ///
    /// Single precision: a wider reading is rounded when converted, which
    /// can move a value within ~1e-5 of a threshold onto the threshold.
    pub value: f32,
}

impl Reading {
    pub const fn new(
        resource: Resource,
        value: f32,
    ) -> Self {
        Self { resource, value }
    }

    /// Classify with the built-in tables.
    #[inline]
    pub fn status(&self) -> StatusResult { classify(self.resource, self.value) }
}

// =============================================================================
// Classification Result
// =============================================================================

/// Severity tier, ordered so that `Critical` compares highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(all(feature = "defmt", target_arch = "arm"), derive(defmt::Format))]
pub enum SeverityTier {
    #[default]
    Nominal,
    Warning,
    Critical,
}

/// Sub-division of a tier used for message and color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(all(feature = "defmt", target_arch = "arm"), derive(defmt::Format))]
pub enum Band {
    /// Fill resource is empty.
    Clear,
    Nominal,
    Warning,
    /// Still a warning, but action is due now.
    Escalated,
    Critical,
}

impl Band {
    #[inline]
    pub const fn tier(self) -> SeverityTier {
        match self {
            Self::Clear | Self::Nominal => SeverityTier::Nominal,
            Self::Warning | Self::Escalated => SeverityTier::Warning,
            Self::Critical => SeverityTier::Critical,
        }
    }
}

/// Outcome of classifying one reading. Recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResult {
    pub tier: SeverityTier,
    pub band: Band,
    pub message: &'static str,
}

// =============================================================================
// Messages
// =============================================================================

/// Per-band status text for one resource.
#[derive(Debug)]
pub struct StatusMessages {
    pub clear: &'static str,
    pub nominal: &'static str,
    pub warning: &'static str,
    pub escalated: &'static str,
    pub critical: &'static str,
}

impl StatusMessages {
    pub const fn for_band(
        &self,
        band: Band,
    ) -> &'static str {
        match band {
            Band::Clear => self.clear,
            Band::Nominal => self.nominal,
            Band::Warning => self.warning,
            Band::Escalated => self.escalated,
            Band::Critical => self.critical,
        }
    }
}

const WASTE_BIN_MESSAGES: StatusMessages = StatusMessages {
    clear: "Bin is empty",
    nominal: "Plenty of space available",
    warning: "Getting full - plan to empty",
    escalated: "Needs emptying soon",
    critical: "Full - Please empty before a new sample can be analysed",
};

// Depletion resources never land in the clear band
const DYE_MESSAGES: StatusMessages = StatusMessages {
    clear: "Sufficient dye remaining",
    nominal: "Sufficient dye remaining",
    warning: "Order a replacement cartridge",
    escalated: "Replace the cartridge to maintain reliable results",
    critical: "Empty - Replace the cartridge before a new sample can be analysed",
};

const FILTER_PAPER_MESSAGES: StatusMessages = StatusMessages {
    clear: "Adequate filter paper supply",
    nominal: "Adequate filter paper supply",
    warning: "Order a new filter roll",
    escalated: "Replace the filter roll now",
    critical: "Empty - Replace the filter roll before a new sample can be analysed",
};

// =============================================================================
// Classifier
// =============================================================================

/// One threshold table per resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classifier {
    tables: [ThresholdTable; Resource::COUNT],
}

impl Classifier {
    /// Classifier using the built-in tables.
    pub const DEFAULT: Self = Self {
        tables: [
            Resource::WasteBin.default_table(),
            Resource::Dye.default_table(),
            Resource::FilterPaper.default_table(),
        ],
    };

    /// Replace the table for `resource`.
    ///
    /// The table must validate and its kind must match the resource's kind.
    pub fn with_table(
        mut self,
        resource: Resource,
        table: ThresholdTable,
    ) -> Result<Self, ThresholdError> {
        if table.kind != resource.kind() {
            return Err(ThresholdError::KindMismatch {
                expected: resource.kind(),
                actual: table.kind,
            });
        }
        self.tables[resource.index()] = table.checked()?;
        Ok(self)
    }

    /// Table currently used for `resource`.
    #[inline]
    pub const fn table(
        &self,
        resource: Resource,
    ) -> &ThresholdTable {
        &self.tables[resource.index()]
    }

    /// Classify a reading for `resource`.
    pub fn classify(
        &self,
        resource: Resource,
        value: f32,
    ) -> StatusResult {
        let band = self.table(resource).band(value);
        StatusResult {
            tier: band.tier(),
            band,
            message: resource.messages().for_band(band),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self { Self::DEFAULT }
}

/// Classify a reading with the built-in tables.
///
/// Thresholds are compared in `f32`. Convert `f64` telemetry with `as f32`
/// before calling; the rounding can land a value just below a threshold on
/// the threshold itself (`97.99999999_f64 as f32 == 98.0`).
///
/// ```
/// use microscan_health::status::{Resource, SeverityTier, classify};
///
/// assert_eq!(classify(Resource::WasteBin, 98.0).tier, SeverityTier::Critical);
/// assert_eq!(classify(Resource::Dye, 40.0).message, "Sufficient dye remaining");
/// ```
#[inline]
pub fn classify(
    resource: Resource,
    value: f32,
) -> StatusResult {
    Classifier::DEFAULT.classify(resource, value)
}

/// Classify a [`Reading`] with the built-in tables.
#[inline]
pub fn classify_reading(reading: &Reading) -> StatusResult { classify(reading.resource, reading.value) }

// =============================================================================
// Unit Tests
// =============================================================================
