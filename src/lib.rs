//! Device health status classification for the MicroScan sampling device.
//!
//! This library contains the platform-agnostic logic behind the device health
//! view: turning waste bin, staining dye and filter paper levels into
//! severity tiers and messages, deciding which maintenance alerts to show,
//! and remembering which ones the user dismissed.
//!
//! - [`thresholds`]: Threshold constants and validated threshold tables
//! - [`status`]: The status classifier (`classify`) and configurable `Classifier`
//! - [`alerts`]: Maintenance alert kinds and the acknowledged-alert set
//! - [`monitor`]: Snapshot-to-snapshot driver with transition logging
//! - [`device`]: Telemetry snapshot and the demo snapshot
//! - [`timeline`]: Count-based measurement ratings and the demo timeline
//! - [`colors`]: RGB565 status palette
//! - [`log_buffer`]: Bounded event log
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free outside of tests, so the same
//! code runs on the device firmware and on the host.
//!
//! # Example
//!
//! ```
//! use microscan_health::status::{Resource, SeverityTier, classify};
//!
//! let status = classify(Resource::FilterPaper, 1.0);
//! assert_eq!(status.tier, SeverityTier::Critical);
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

pub mod alerts;
pub mod colors;
pub mod device;
pub mod log_buffer;
pub mod monitor;
pub mod status;
pub mod thresholds;
pub mod timeline;

// Re-export commonly used items
pub use alerts::{AcknowledgedAlerts, AlertKind};
pub use device::DeviceStatus;
pub use monitor::{HealthMonitor, HealthReport};
pub use status::{Band, Classifier, Reading, Resource, ResourceKind, SeverityTier, StatusResult, classify};
pub use thresholds::{ThresholdError, ThresholdTable};
pub use timeline::{Rating, RatingThresholds};
