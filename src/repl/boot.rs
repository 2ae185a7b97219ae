//! Start-up sequence shown before the prompt appears.

use std::time::Duration;

pub const BOOT_SEQUENCE: [&str; 8] = [
    "BIOS Date 01/01/99 15:23:00 Ver: 1.0.0",
    "CPU: Intel Pentium III 800MHz",
    "640K RAM System... OK",
    "Initializing Video Adapter... OK",
    "Loading OS...",
    "Mounting /dev/sda1...",
    "Starting Terminal Cinema Shell...",
    "Connection established.",
];

/// Pauses between boot lines and before the welcome banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootTiming {
    pub line_delay: Duration,
    pub settle_delay: Duration,
}

impl Default for BootTiming {
    fn default() -> Self {
        Self {
            line_delay: Duration::from_millis(250),
            settle_delay: Duration::from_millis(800),
        }
    }
}

impl BootTiming {
    /// No pauses at all
    pub fn instant() -> Self {
        Self {
            line_delay: Duration::ZERO,
            settle_delay: Duration::ZERO,
        }
    }

    pub fn total(&self) -> Duration {
        self.line_delay * BOOT_SEQUENCE.len() as u32 + self.settle_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_sequence_should_end_with_connection_line() {
        assert_eq!(BOOT_SEQUENCE.last(), Some(&"Connection established."));
    }

    #[test]
    fn default_timing_should_finish_within_three_seconds() {
        assert_eq!(BootTiming::default().total(), Duration::from_millis(2800));
        assert_eq!(BootTiming::instant().total(), Duration::ZERO);
    }
}
