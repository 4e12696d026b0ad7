//! Maintenance alerts and the acknowledged-alert set.
//!
//! An alert is raised for every resource whose tier is `Warning` or
//! `Critical`. The user can dismiss (acknowledge) an alert, which hides it
//! until the resource changes tier.

use heapless::Vec;

use crate::status::{Resource, SeverityTier, StatusResult};

/// Number of distinct alert kinds.
pub const ALERT_KIND_COUNT: usize = 6;

/// Every maintenance alert the device health view can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(all(feature = "defmt", target_arch = "arm"), derive(defmt::Format))]
#[repr(u8)]
pub enum AlertKind {
    WasteCritical = 0,
    WasteWarning = 1,
    DyeCritical = 2,
    DyeWarning = 3,
    FilterCritical = 4,
    FilterWarning = 5,
}

impl AlertKind {
    /// All alert kinds, critical before warning for each resource.
    pub const ALL: [Self; ALERT_KIND_COUNT] = [
        Self::WasteCritical,
        Self::WasteWarning,
        Self::DyeCritical,
        Self::DyeWarning,
        Self::FilterCritical,
        Self::FilterWarning,
    ];

    /// Alert raised for a resource at the given tier, if any.
    pub const fn for_status(
        resource: Resource,
        tier: SeverityTier,
    ) -> Option<Self> {
        match (resource, tier) {
            (_, SeverityTier::Nominal) => None,
            (Resource::WasteBin, SeverityTier::Critical) => Some(Self::WasteCritical),
            (Resource::WasteBin, SeverityTier::Warning) => Some(Self::WasteWarning),
            (Resource::Dye, SeverityTier::Critical) => Some(Self::DyeCritical),
            (Resource::Dye, SeverityTier::Warning) => Some(Self::DyeWarning),
            (Resource::FilterPaper, SeverityTier::Critical) => Some(Self::FilterCritical),
            (Resource::FilterPaper, SeverityTier::Warning) => Some(Self::FilterWarning),
        }
    }

    pub const fn resource(self) -> Resource {
        match self {
            Self::WasteCritical | Self::WasteWarning => Resource::WasteBin,
            Self::DyeCritical | Self::DyeWarning => Resource::Dye,
            Self::FilterCritical | Self::FilterWarning => Resource::FilterPaper,
        }
    }

    pub const fn tier(self) -> SeverityTier {
        match self {
            Self::WasteCritical | Self::DyeCritical | Self::FilterCritical => SeverityTier::Critical,
            Self::WasteWarning | Self::DyeWarning | Self::FilterWarning => SeverityTier::Warning,
        }
    }

    /// Short identifier for logs and display keys.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WasteCritical => "waste-critical",
            Self::WasteWarning => "waste-warning",
            Self::DyeCritical => "dye-critical",
            Self::DyeWarning => "dye-warning",
            Self::FilterCritical => "filter-critical",
            Self::FilterWarning => "filter-warning",
        }
    }

    /// Banner text shown for this alert.
    pub const fn message(self) -> &'static str {
        match self {
            Self::WasteCritical => "Waste bin is nearly full and needs to be emptied soon.",
            Self::WasteWarning => "Waste bin is getting full. Plan to empty it soon.",
            Self::DyeCritical => "Dye level is critically low. Replace cartridge immediately.",
            Self::DyeWarning => "Dye level is low. Replace dye cartridge when convenient.",
            Self::FilterCritical => "Filter paper is critically low. Replace roll immediately.",
            Self::FilterWarning => "Filter paper roll is running low. Replace when convenient.",
        }
    }

    #[inline]
    const fn bit(self) -> u8 { 1 << (self as u8) }
}

/// Set of alerts the user has dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AcknowledgedAlerts {
    bits: u8,
}

impl AcknowledgedAlerts {
    pub const fn new() -> Self { Self { bits: 0 } }

    /// Mark an alert as acknowledged. Returns `true` if it was not already.
    pub fn acknowledge(
        &mut self,
        kind: AlertKind,
    ) -> bool {
        let newly = self.bits & kind.bit() == 0;
        self.bits |= kind.bit();
        newly
    }

    /// Forget an acknowledgment so the alert can show again.
    /// Returns `true` if it was acknowledged.
    pub fn release(
        &mut self,
        kind: AlertKind,
    ) -> bool {
        let was = self.is_acknowledged(kind);
        self.bits &= !kind.bit();
        was
    }

    #[inline]
    pub const fn is_acknowledged(
        &self,
        kind: AlertKind,
    ) -> bool {
        self.bits & kind.bit() != 0
    }

    #[inline]
    pub const fn len(&self) -> usize { self.bits.count_ones() as usize }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.bits == 0 }

    pub fn clear(&mut self) { self.bits = 0; }

    /// Iterate acknowledged alerts in [`AlertKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = AlertKind> + '_ {
        AlertKind::ALL.into_iter().filter(|kind| self.is_acknowledged(*kind))
    }
}

/// Alerts to show for a set of statuses, skipping acknowledged ones.
///
/// Results follow the order of `statuses`.
pub fn active_alerts<'a, I>(
    statuses: I,
    acknowledged: &AcknowledgedAlerts,
) -> Vec<AlertKind, ALERT_KIND_COUNT>
where
    I: IntoIterator<Item = (Resource, &'a StatusResult)>,
{
    let mut alerts = Vec::new();
    for (resource, status) in statuses {
        if let Some(kind) = AlertKind::for_status(resource, status.tier)
            && !acknowledged.is_acknowledged(kind)
        {
            // Each resource yields at most one alert, so capacity is never exceeded
            alerts.push(kind).ok();
        }
    }
    alerts
}
