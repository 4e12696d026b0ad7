//! Health monitor: classification, alert dismissal and event logging.
//!
//! The monitor is the single place that keeps state between snapshots. It
//! owns the acknowledged-alert set, remembers the last tier of each resource
//! so that only transitions are logged, and re-arms a dismissed alert once
//! its resource changes tier. Only an alert that the last update reported
//! can be dismissed.
//!
//! Statuses themselves are never stored: every [`HealthMonitor::update`]
//! reclassifies the snapshot it is given.
//!
//! # Usage
//!
//! ```
//! use microscan_health::alerts::AlertKind;
//! use microscan_health::device::DeviceStatus;
//! use microscan_health::monitor::HealthMonitor;
//!
//! let mut monitor = HealthMonitor::default();
//! let report = monitor.update(&DeviceStatus::DEMO, 0);
//! assert!(report.alerts.contains(&AlertKind::FilterCritical));
//!
//! monitor.dismiss(AlertKind::FilterCritical, 10);
//! let report = monitor.update(&DeviceStatus::DEMO, 20);
//! assert!(!report.alerts.contains(&AlertKind::FilterCritical));
//! ```

use heapless::Vec;

use crate::alerts::{ALERT_KIND_COUNT, AcknowledgedAlerts, AlertKind, active_alerts};
use crate::device::DeviceStatus;
use crate::log_buffer::{LogBuffer, LogLevel};
use crate::status::{Classifier, Resource, SeverityTier, StatusResult};

/// Result of one monitor update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    /// One status per resource, in [`Resource::ALL`] order.
    pub statuses: [StatusResult; Resource::COUNT],
    /// Alerts that are active and not acknowledged.
    pub alerts: Vec<AlertKind, ALERT_KIND_COUNT>,
}

impl HealthReport {
    #[inline]
    pub const fn status(
        &self,
        resource: Resource,
    ) -> &StatusResult {
        &self.statuses[resource.index()]
    }

    /// Highest tier across all resources, acknowledged or not.
    pub fn worst_tier(&self) -> SeverityTier {
        self.statuses
            .iter()
            .map(|status| status.tier)
            .max()
            .unwrap_or_default()
    }
}

/// Tracks device health across snapshots.
pub struct HealthMonitor {
    classifier: Classifier,
    acknowledged: AcknowledgedAlerts,
    last_tiers: [Option<SeverityTier>; Resource::COUNT],
    log: LogBuffer,
}

impl HealthMonitor {
    pub const fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            acknowledged: AcknowledgedAlerts::new(),
            last_tiers: [None; Resource::COUNT],
            log: LogBuffer::new(),
        }
    }

    /// Classify a snapshot and report the alerts to show.
    pub fn update(
        &mut self,
        status: &DeviceStatus,
        timestamp_ms: u32,
    ) -> HealthReport {
        let statuses = Resource::ALL.map(|resource| self.classifier.classify(resource, status.level(resource)));

        for resource in Resource::ALL {
            let current = statuses[resource.index()];
            let previous = self.last_tiers[resource.index()].replace(current.tier);

            if previous == Some(current.tier) {
                continue;
            }

            self.rearm(resource);

            // A healthy first reading is not an event
            if previous.is_none() && current.tier == SeverityTier::Nominal {
                continue;
            }

            self.log.log(
                LogLevel::from(current.tier),
                format_args!("{}: {:.1}% {}", resource.label(), status.level(resource), current.message),
                timestamp_ms,
            );
            #[cfg(all(feature = "defmt", target_arch = "arm"))]
            defmt::info!(
                "{} tier {} -> {} at {}",
                resource,
                previous,
                current.tier,
                status.level(resource)
            );
        }

        let alerts = active_alerts(Resource::ALL.into_iter().zip(statuses.iter()), &self.acknowledged);
        HealthReport { statuses, alerts }
    }

    /// Acknowledge an alert so it stops being reported.
    ///
    /// Returns `true` if the alert was showing. An alert that does not match
    /// its resource's current tier, or is already acknowledged, is ignored.
    pub fn dismiss(
        &mut self,
        kind: AlertKind,
        timestamp_ms: u32,
    ) -> bool {
        let resource = kind.resource();
        let showing = self.last_tiers[resource.index()].and_then(|tier| AlertKind::for_status(resource, tier));
        if showing != Some(kind) {
            return false;
        }

        let newly = self.acknowledged.acknowledge(kind);
        if newly {
            self.log.log(LogLevel::Info, format_args!("dismissed {}", kind.as_str()), timestamp_ms);
            #[cfg(all(feature = "defmt", target_arch = "arm"))]
            defmt::debug!("alert {} dismissed", kind);
        }
        newly
    }

    /// Drop every acknowledgment for this resource's alerts.
    fn rearm(
        &mut self,
        resource: Resource,
    ) {
        for kind in AlertKind::ALL {
            if kind.resource() == resource {
                self.acknowledged.release(kind);
            }
        }
    }

    #[inline]
    pub const fn acknowledged(&self) -> &AcknowledgedAlerts { &self.acknowledged }

    #[inline]
    pub const fn classifier(&self) -> &Classifier { &self.classifier }

    /// Event log, oldest entry first.
    #[inline]
    pub const fn log(&self) -> &LogBuffer { &self.log }
}

impl Default for HealthMonitor {
    fn default() -> Self { Self::new(Classifier::DEFAULT) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(
        waste: f32,
        dye: f32,
        filter: f32,
    ) -> DeviceStatus {
        DeviceStatus {
            waste_level: waste,
            dye_level: dye,
            filter_paper: filter,
            ..DeviceStatus::DEMO
        }
    }

    #[test]
    fn test_demo_report() {
        let mut monitor = HealthMonitor::default();
        let report = monitor.update(&DeviceStatus::DEMO, 0);

        assert_eq!(report.status(Resource::WasteBin).tier, SeverityTier::Warning);
        assert_eq!(report.status(Resource::Dye).tier, SeverityTier::Nominal);
        assert_eq!(report.status(Resource::FilterPaper).tier, SeverityTier::Critical);
        assert_eq!(report.alerts.as_slice(), &[AlertKind::WasteWarning, AlertKind::FilterCritical]);
        assert_eq!(report.worst_tier(), SeverityTier::Critical);
    }

    #[test]
    fn test_healthy_first_reading_not_logged() {
        let mut monitor = HealthMonitor::default();
        monitor.update(&snapshot(10.0, 50.0, 50.0), 0);
        assert!(monitor.log().is_empty());
    }

    #[test]
    fn test_only_transitions_logged() {
        let mut monitor = HealthMonitor::default();
        monitor.update(&snapshot(10.0, 50.0, 50.0), 0);
        monitor.update(&snapshot(65.0, 50.0, 50.0), 100);
        monitor.update(&snapshot(66.0, 50.0, 50.0), 200);
        monitor.update(&snapshot(99.0, 50.0, 50.0), 300);

        let levels: std::vec::Vec<LogLevel> = monitor.log().iter().map(|e| e.level).collect();
        assert_eq!(levels, [LogLevel::Warn, LogLevel::Error]);
        assert_eq!(monitor.log().last().expect("entry").timestamp_ms, 300);
    }

    #[test]
    fn test_recovery_logged_as_info() {
        let mut monitor = HealthMonitor::default();
        monitor.update(&snapshot(10.0, 5.0, 50.0), 0);
        monitor.update(&snapshot(10.0, 100.0, 50.0), 1000);

        let entry = monitor.log().last().expect("entry");
        assert_eq!(entry.level, LogLevel::Info);
        assert!(entry.message.starts_with("Staining Dye"), "{}", entry.message);
    }

    #[test]
    fn test_dismiss_hides_alert() {
        let mut monitor = HealthMonitor::default();
        monitor.update(&DeviceStatus::DEMO, 0);

        assert!(monitor.dismiss(AlertKind::WasteWarning, 5));
        assert!(!monitor.dismiss(AlertKind::WasteWarning, 6));

        let report = monitor.update(&DeviceStatus::DEMO, 10);
        assert_eq!(report.alerts.as_slice(), &[AlertKind::FilterCritical]);
        assert!(monitor.acknowledged().is_acknowledged(AlertKind::WasteWarning));
    }

    #[test]
    fn test_dismissed_alert_rearms_after_tier_change() {
        let mut monitor = HealthMonitor::default();
        monitor.update(&snapshot(85.0, 50.0, 50.0), 0);
        monitor.dismiss(AlertKind::WasteWarning, 1);

        // Bin emptied, then fills up again
        monitor.update(&snapshot(5.0, 50.0, 50.0), 2);
        assert!(!monitor.acknowledged().is_acknowledged(AlertKind::WasteWarning));

        let report = monitor.update(&snapshot(80.0, 50.0, 50.0), 3);
        assert_eq!(report.alerts.as_slice(), &[AlertKind::WasteWarning]);
    }

    #[test]
    fn test_escalation_shows_critical_despite_dismissed_warning() {
        let mut monitor = HealthMonitor::default();
        monitor.update(&snapshot(85.0, 50.0, 50.0), 0);
        monitor.dismiss(AlertKind::WasteWarning, 1);

        let report = monitor.update(&snapshot(99.0, 50.0, 50.0), 2);
        assert_eq!(report.alerts.as_slice(), &[AlertKind::WasteCritical]);
    }

    #[test]
    fn test_dismiss_ignores_alert_not_showing() {
        let mut monitor = HealthMonitor::default();
        assert!(!monitor.dismiss(AlertKind::WasteWarning, 0), "nothing reported yet");

        monitor.update(&snapshot(85.0, 50.0, 50.0), 1);
        assert!(!monitor.dismiss(AlertKind::WasteCritical, 2));
        assert!(!monitor.dismiss(AlertKind::DyeWarning, 2));
        assert!(monitor.acknowledged().is_empty());
        assert_eq!(monitor.log().len(), 1, "only the warning transition is logged");

        let report = monitor.update(&snapshot(99.0, 50.0, 50.0), 3);
        assert_eq!(report.status(Resource::WasteBin).tier, SeverityTier::Critical);
        assert_eq!(report.alerts.as_slice(), &[AlertKind::WasteCritical]);
    }

    #[test]
    fn test_dismissed_critical_rearms_when_back_to_warning_and_critical_again() {
        let mut monitor = HealthMonitor::default();
        monitor.update(&snapshot(99.0, 50.0, 50.0), 0);
        assert!(monitor.dismiss(AlertKind::WasteCritical, 1));

        let report = monitor.update(&snapshot(90.0, 50.0, 50.0), 2);
        assert_eq!(report.alerts.as_slice(), &[AlertKind::WasteWarning]);
        assert!(monitor.acknowledged().is_empty());

        let report = monitor.update(&snapshot(99.0, 50.0, 50.0), 3);
        assert_eq!(report.alerts.as_slice(), &[AlertKind::WasteCritical]);
    }

    #[test]
    fn test_custom_classifier_used() {
        use crate::thresholds::ThresholdTable;

        let classifier = Classifier::DEFAULT
            .with_table(Resource::WasteBin, ThresholdTable::fill(50.0, 60.0, 70.0, None))
            .expect("valid table");
        let mut monitor = HealthMonitor::new(classifier);

        let report = monitor.update(&snapshot(72.0, 50.0, 50.0), 0);
        assert_eq!(report.alerts.as_slice(), &[AlertKind::WasteCritical]);
        assert_eq!(monitor.classifier(), &classifier);
    }
}
