//! Device telemetry snapshot.
//!
//! A [`DeviceStatus`] is one immutable snapshot of what the sampling device
//! reports: connectivity, battery, enclosure temperature and the three
//! resource levels. How snapshots are obtained is up to the caller; the
//! prototype app only ever shows [`DeviceStatus::DEMO`].

use crate::status::{Reading, Resource, SeverityTier, StatusResult, classify};

/// Snapshot of device health telemetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceStatus {
    pub connected: bool,
    /// Device battery charge, 0-100%.
    pub battery_percent: u8,
    /// Enclosure temperature in degrees Celsius.
    pub temperature_c: f32,
    /// Minutes since the last successful sync.
    pub last_sync_minutes: u16,
    /// Waste bin fullness, 0-100%.
    pub waste_level: f32,
    /// Remaining staining dye, 0-100%.
    pub dye_level: f32,
    /// Remaining filter paper, 0-100%.
    pub filter_paper: f32,
}

impl DeviceStatus {
    /// Hardcoded snapshot shown by the prototype's device health tab.
    pub const DEMO: Self = Self {
        connected: true,
        battery_percent: 78,
        temperature_c: 23.0,
        last_sync_minutes: 2,
        waste_level: 85.0,
        dye_level: 85.0,
        filter_paper: 1.0,
    };

    /// Level reported for `resource`.
    #[inline]
    pub const fn level(
        &self,
        resource: Resource,
    ) -> f32 {
        match resource {
            Resource::WasteBin => self.waste_level,
            Resource::Dye => self.dye_level,
            Resource::FilterPaper => self.filter_paper,
        }
    }

    #[inline]
    pub const fn reading(
        &self,
        resource: Resource,
    ) -> Reading {
        Reading::new(resource, self.level(resource))
    }

    /// Readings for every resource, in [`Resource::ALL`] order.
    pub const fn readings(&self) -> [Reading; Resource::COUNT] {
        [
            self.reading(Resource::WasteBin),
            self.reading(Resource::Dye),
            self.reading(Resource::FilterPaper),
        ]
    }

    /// Statuses for every resource using the built-in tables.
    pub fn statuses(&self) -> [StatusResult; Resource::COUNT] {
        Resource::ALL.map(|resource| classify(resource, self.level(resource)))
    }

    /// Highest tier across all resources.
    pub fn worst_tier(&self) -> SeverityTier {
        self.statuses()
            .iter()
            .map(|status| status.tier)
            .max()
            .unwrap_or_default()
    }
}

impl Default for DeviceStatus {
    fn default() -> Self { Self::DEMO }
}
