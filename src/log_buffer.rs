//! Bounded event log with levels and timestamps.
//!
//! Keeps the most recent [`LOG_ENTRIES`] health events (tier changes, alert
//! dismissals) for an on-device log view. Messages are truncated to
//! [`LOG_MSG_LEN`] bytes of UTF-8 so the whole buffer lives on the stack.
//!
//! # Log Levels
//!
//! - `Trace`: Dark gray - verbose debugging
//! - `Debug`: White - debugging information
//! - `Info`: Green - normal operation, recoveries
//! - `Warn`: Amber - warning tier reached
//! - `Error`: Red - critical tier reached

use core::fmt::{self, Write};

use embedded_graphics::pixelcolor::Rgb565;
use heapless::{Deque, String};

use crate::colors::{DESTRUCTIVE, GRAY, SUCCESS, WARNING, WHITE};
use crate::status::SeverityTier;

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 16;

/// Maximum UTF-8 bytes per log message.
pub const LOG_MSG_LEN: usize = 48;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(all(feature = "defmt", target_arch = "arm"), derive(defmt::Format))]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose debugging (dark gray)
    Trace = 0,
    /// Debug information (white)
    Debug = 1,
    /// Normal operation (green)
    #[default]
    Info = 2,
    /// Warnings (amber)
    Warn = 3,
    /// Errors (red)
    Error = 4,
}

impl LogLevel {
    /// Get the display color for this log level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace => GRAY,
            Self::Debug => WHITE,
            Self::Info => SUCCESS,
            Self::Warn => WARNING,
            Self::Error => DESTRUCTIVE,
        }
    }

    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

impl From<SeverityTier> for LogLevel {
    fn from(tier: SeverityTier) -> Self {
        match tier {
            SeverityTier::Nominal => Self::Info,
            SeverityTier::Warning => Self::Warn,
            SeverityTier::Critical => Self::Error,
        }
    }
}

/// A single log entry with level, message, and timestamp.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message, truncated on a character boundary to `LOG_MSG_LEN` bytes.
    pub message: String<LOG_MSG_LEN>,
    /// Caller-supplied timestamp in milliseconds.
    pub timestamp_ms: u32,
}

impl LogEntry {
    /// Create a new log entry, truncating `message` if needed.
    pub fn new(
        level: LogLevel,
        message: &str,
        timestamp_ms: u32,
    ) -> Self {
        Self::from_args(level, format_args!("{message}"), timestamp_ms)
    }

    /// Create a new log entry from format arguments, truncating the output.
    pub fn from_args(
        level: LogLevel,
        args: fmt::Arguments<'_>,
        timestamp_ms: u32,
    ) -> Self {
        let mut message: String<LOG_MSG_LEN> = String::new();
        // Truncating never errors
        let _ = Truncating {
            buf: &mut message,
            full: false,
        }
        .write_fmt(args);
        Self {
            level,
            message,
            timestamp_ms,
        }
    }
}

/// Writer that drops whatever does not fit instead of failing.
///
/// Once a character is rejected nothing more is written, so the result is
/// always a prefix of the full output.
struct Truncating<'a, const N: usize> {
    buf: &'a mut String<N>,
    full: bool,
}

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        if self.full {
            return Ok(());
        }
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                self.full = true;
                break;
            }
        }
        Ok(())
    }
}

/// Circular buffer of log entries.
pub struct LogBuffer {
    entries: Deque<LogEntry, LOG_ENTRIES>,
}

impl LogBuffer {
    /// Create a new empty log buffer.
    pub const fn new() -> Self { Self { entries: Deque::new() } }

    /// Push a new log entry. Oldest entry is dropped if buffer is full.
    pub fn push(
        &mut self,
        entry: LogEntry,
    ) {
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        // Space was just made
        let _ = self.entries.push_back(entry);
    }

    /// Format and push an entry.
    pub fn log(
        &mut self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
        timestamp_ms: u32,
    ) {
        self.push(LogEntry::from_args(level, args, timestamp_ms));
    }

    /// Get the number of entries in the buffer.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Most recent entry.
    #[inline]
    pub fn last(&self) -> Option<&LogEntry> { self.entries.back() }

    pub fn clear(&mut self) { self.entries.clear(); }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> + '_ { self.entries.iter() }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}
