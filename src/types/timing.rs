//! Timing types: timecode, PTP-style timestamps and synchronization state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Timecode frame rate, with drop-frame variants marked `D`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimecodeFormat {
    #[serde(rename = "24")]
    Fps24,
    #[serde(rename = "24D")]
    Fps24Drop,
    #[serde(rename = "25")]
    Fps25,
    #[serde(rename = "30")]
    Fps30,
    #[serde(rename = "30D")]
    Fps30Drop,
}

impl TimecodeFormat {
    /// Every format, in wire order.
    pub const ALL: [Self; 5] = [
        Self::Fps24,
        Self::Fps24Drop,
        Self::Fps25,
        Self::Fps30,
        Self::Fps30Drop,
    ];

    /// Number of frames per timecode second. Frame numbers are `0..frame_count()`.
    pub const fn frame_count(self) -> i64 {
        match self {
            Self::Fps24 | Self::Fps24Drop => 24,
            Self::Fps25 => 25,
            Self::Fps30 | Self::Fps30Drop => 30,
        }
    }

    /// Check if this is a drop-frame format.
    pub const fn is_drop_frame(self) -> bool {
        matches!(self, Self::Fps24Drop | Self::Fps30Drop)
    }

    /// Wire literal (e.g. `"30D"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fps24 => "24",
            Self::Fps24Drop => "24D",
            Self::Fps25 => "25",
            Self::Fps30 => "30",
            Self::Fps30Drop => "30D",
        }
    }

    /// Parse from the wire literal.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

impl fmt::Display for TimecodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SMPTE-style timecode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Timecode {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub frames: i64,
    pub format: TimecodeFormat,
}

impl Timecode {
    pub const fn new(hours: i64, minutes: i64, seconds: i64, frames: i64, format: TimecodeFormat) -> Self {
        Self { hours, minutes, seconds, frames, format }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.format.is_drop_frame() { ';' } else { ':' };
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours, self.minutes, self.seconds, sep, self.frames
        )
    }
}

/// Time elapsed since the epoch, split like a PTP timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanoseconds: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attoseconds: Option<i64>,
}

impl Timestamp {
    pub const fn new(seconds: i64, nanoseconds: i64) -> Self {
        Self { seconds, nanoseconds, attoseconds: None }
    }

    /// Set the attoseconds part.
    pub const fn with_attoseconds(mut self, attoseconds: i64) -> Self {
        self.attoseconds = Some(attoseconds);
        self
    }
}

/// Source the tracking system is synchronized to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SynchronizationSource {
    Genlock,
    VideoIn,
    Ptp,
    Ntp,
}

impl SynchronizationSource {
    /// Every source, in wire order.
    pub const ALL: [Self; 4] = [Self::Genlock, Self::VideoIn, Self::Ptp, Self::Ntp];

    /// Wire literal (e.g. `"videoIn"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Genlock => "genlock",
            Self::VideoIn => "videoIn",
            Self::Ptp => "ptp",
            Self::Ntp => "ntp",
        }
    }
}

impl fmt::Display for SynchronizationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-channel latency offsets applied on top of the synchronization source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynchronizationOffsets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoders: Option<f64>,
}

/// Synchronization state of the tracking device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Synchronization {
    /// Sync frequency in hertz.
    pub frequency: f64,
    pub locked: bool,
    pub source: SynchronizationSource,
    /// MAC address of the PTP master.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ptp_master: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ptp_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ptp_domain: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offsets: Option<SynchronizationOffsets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Synchronization {
    /// Create with the required fields only.
    pub fn new(frequency: f64, locked: bool, source: SynchronizationSource) -> Self {
        Self {
            frequency,
            locked,
            source,
            ptp_master: None,
            ptp_offset: None,
            ptp_domain: None,
            offsets: None,
            enabled: None,
        }
    }
}
