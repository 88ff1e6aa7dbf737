//! Script timecodes and their conversion to frame offsets.
//!
//! A timecode is written `M:SS` or `H:M:SS` at the start of an annotation
//! line. Minutes and seconds are not range-checked here: `0:75` is a valid
//! timecode meaning 75 seconds. Range checks are a separate validation pass.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A wall-clock offset into a video, as written in a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Timecode {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Errors produced when reading a timecode from its display form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimecodeError {
    #[error("expected M:SS or H:M:SS, got {0:?}")]
    Shape(String),

    #[error("invalid timecode segment {0:?}")]
    Segment(String),
}

impl Timecode {
    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Total offset in whole seconds, or `None` on overflow.
    pub fn total_seconds(&self) -> Option<u64> {
        self.hours
            .checked_mul(3600)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)
    }

    /// Absolute frame index at the given frame rate, or `None` on overflow.
    pub fn frame_at(&self, fps: u32) -> Option<u64> {
        self.total_seconds()?.checked_mul(u64::from(fps))
    }
}

/// Hours appear only when non-zero; seconds are padded to two digits;
/// minutes are never padded.
impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{}:", self.hours)?;
        }
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s
            .split(':')
            .map(|seg| {
                if seg.is_empty() || !seg.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(TimecodeError::Segment(seg.to_string()));
                }
                seg.parse::<u64>()
                    .map_err(|_| TimecodeError::Segment(seg.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match segments.as_slice() {
            [m, s] => Ok(Self::new(0, *m, *s)),
            [h, m, s] => Ok(Self::new(*h, *m, *s)),
            _ => Err(TimecodeError::Shape(s.to_string())),
        }
    }
}

impl From<Timecode> for String {
    fn from(tc: Timecode) -> Self {
        tc.to_string()
    }
}

impl TryFrom<String> for Timecode {
    type Error = TimecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display_drops_zero_hours() {
        assert_eq!(Timecode::new(0, 5, 9).to_string(), "5:09");
        assert_eq!(Timecode::new(0, 0, 5).to_string(), "0:05");
    }

    #[test]
    fn test_display_never_pads_minutes() {
        assert_eq!(Timecode::new(1, 2, 3).to_string(), "1:2:03");
        assert_eq!(Timecode::new(1, 30, 45).to_string(), "1:30:45");
    }

    #[test]
    fn test_display_keeps_wide_seconds() {
        assert_eq!(Timecode::new(0, 0, 125).to_string(), "0:125");
    }

    #[test]
    fn test_frame_at() {
        assert_eq!(Timecode::new(0, 0, 5).frame_at(30), Some(150));
        assert_eq!(Timecode::new(1, 30, 45).frame_at(30), Some(163_350));
        assert_eq!(Timecode::new(0, 1, 0).frame_at(60), Some(3600));
    }

    #[test]
    fn test_frame_at_overflow_is_none() {
        assert_eq!(Timecode::new(u64::MAX, 0, 0).frame_at(30), None);
        assert_eq!(Timecode::new(0, 0, u64::MAX).frame_at(2), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("0:05".parse::<Timecode>(), Ok(Timecode::new(0, 0, 5)));
        assert_eq!("1:2:03".parse::<Timecode>(), Ok(Timecode::new(1, 2, 3)));
        assert!("5".parse::<Timecode>().is_err());
        assert!("1:2:3:4".parse::<Timecode>().is_err());
        assert!("1:-2".parse::<Timecode>().is_err());
        assert!("1::2".parse::<Timecode>().is_err());
    }

    #[test]
    fn test_serializes_as_display_string() {
        let json = serde_json::to_string(&Timecode::new(0, 5, 9)).unwrap();
        assert_eq!(json, "\"5:09\"");
        let parsed: Timecode = serde_json::from_str("\"1:30:45\"").unwrap();
        assert_eq!(parsed, Timecode::new(1, 30, 45));
        assert!(serde_json::from_str::<Timecode>("\"soon\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_frame_math(h in 0u64..100, m in 0u64..120, s in 0u64..120, fps in 1u32..240) {
            let expected = (h * 3600 + m * 60 + s) * u64::from(fps);
            prop_assert_eq!(Timecode::new(h, m, s).frame_at(fps), Some(expected));
        }

        #[test]
        fn prop_display_parses_back_to_same_offset(h in 0u64..100, m in 0u64..60, s in 0u64..60) {
            let tc = Timecode::new(h, m, s);
            let reparsed: Timecode = tc.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, tc);
        }
    }
}
