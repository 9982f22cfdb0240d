//! On-screen event log.
//!
//! Keeps the last few simulator events (pause, reset, threshold changes) in a
//! ring buffer shown under the LCD view.

use std::fmt;

use heapless::{Deque, String};

/// Lines kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per line.
pub const LOG_LINE_LENGTH: usize = 48;

/// Ring buffer of log lines. The oldest line is dropped when full.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a line, truncated to fit.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.buffer.push_back(line).ok();
    }

    /// Push a formatted line.
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        self.push(&args.to_string());
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.push("Started");
        log.push_fmt(format_args!("Hot limit: {}", 41));
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().collect::<Vec<_>>(), ["Started", "Hot limit: 41"]);
    }

    #[test]
    fn test_drops_oldest_when_full() {
        let mut log = DebugLog::new();
        for i in 0..=LOG_BUFFER_SIZE {
            log.push_fmt(format_args!("{i}"));
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("1"));
    }

    #[test]
    fn test_truncates_long_lines() {
        let mut log = DebugLog::new();
        log.push(&"x".repeat(LOG_LINE_LENGTH * 2));
        assert_eq!(log.iter().next().map(str::len), Some(LOG_LINE_LENGTH));
    }
}
