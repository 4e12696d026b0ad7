//! Measurement timeline entries.
//!
//! Each sample the user analyses is rated low, medium or high microplastic
//! concentration. Ratings reuse the severity tiers so the timeline badges and
//! the device health view share one palette.
//!
//! A rating comes from the particle count through [`RatingThresholds`]:
//! below `low` is Low, below `high` is Medium, anything else is High.

use crate::status::SeverityTier;

/// Count boundaries for [`Rating::from_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(all(feature = "defmt", target_arch = "arm"), derive(defmt::Format))]
pub struct RatingThresholds {
    /// Counts below this are Low.
    low: u32,
    /// Counts below this (and not Low) are Medium. Never less than `low`.
    high: u32,
}

impl RatingThresholds {
    /// Particle counts used by the analysis pipeline.
    pub const DEFAULT: Self = Self::new(10, 30);

    /// Build thresholds from possibly out-of-order values.
    ///
    /// A negative `low` becomes 0 and `high` is raised to at least `low`, so
    /// every pair yields a usable table.
    pub const fn new(
        low: i32,
        high: i32,
    ) -> Self {
        let low = if low < 0 { 0 } else { low as u32 };
        let high = if high < 0 { 0 } else { high as u32 };
        Self {
            low,
            high: if high < low { low } else { high },
        }
    }

    #[inline]
    pub const fn low(&self) -> u32 { self.low }

    #[inline]
    pub const fn high(&self) -> u32 { self.high }
}

impl Default for RatingThresholds {
    fn default() -> Self { Self::DEFAULT }
}

const _: () = assert!(RatingThresholds::DEFAULT.low < RatingThresholds::DEFAULT.high);

/// Concentration rating of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(all(feature = "defmt", target_arch = "arm"), derive(defmt::Format))]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    /// Rate a particle count.
    pub const fn from_count(
        count: u32,
        thresholds: &RatingThresholds,
    ) -> Self {
        if count < thresholds.low {
            Self::Low
        } else if count < thresholds.high {
            Self::Medium
        } else {
            Self::High
        }
    }

    #[inline]
    pub const fn tier(self) -> SeverityTier {
        match self {
            Self::Low => SeverityTier::Nominal,
            Self::Medium => SeverityTier::Warning,
            Self::High => SeverityTier::Critical,
        }
    }

    /// Badge text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// One analysed sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub id: u32,
    /// Relative date label ("Today", "2 days ago").
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub rating: Rating,
    /// Particles detected in the sample.
    pub count: u32,
    pub description: Option<&'static str>,
    pub tags: &'static [&'static str],
}

/// Hardcoded timeline shown by the prototype, newest first.
pub const DEMO_MEASUREMENTS: [Measurement; 4] = [
    Measurement {
        id: 1,
        date: "Today",
        time: "2:30 PM",
        location: "Lake Michigan, Chicago",
        rating: Rating::Medium,
        count: 47,
        description: Some("Collected near the shoreline after storm runoff"),
        tags: &["storm", "shoreline", "urban"],
    },
    Measurement {
        id: 2,
        date: "Yesterday",
        time: "10:15 AM",
        location: "Hudson River, NYC",
        rating: Rating::High,
        count: 83,
        description: Some("High concentration near industrial area"),
        tags: &["industrial", "pollution"],
    },
    Measurement {
        id: 3,
        date: "2 days ago",
        time: "4:45 PM",
        location: "Puget Sound, Seattle",
        rating: Rating::Low,
        count: 12,
        description: Some("Clean sample from protected bay area"),
        tags: &["protected", "clean"],
    },
    Measurement {
        id: 4,
        date: "3 days ago",
        time: "11:30 AM",
        location: "San Francisco Bay",
        rating: Rating::Medium,
        count: 56,
        description: Some("Mixed reading from marina area"),
        tags: &["marina", "recreational"],
    },
];
