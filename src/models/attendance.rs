//! Attendance model and wall-clock time handling.
//!
//! An [`Attendance`] is one clock-in/clock-out pair. Either side may be unset
//! while the user is still filling it in; an incomplete attendance
//! contributes nothing to worked hours or pay.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

const CLOCK_FORMAT: &str = "%H:%M";

/// A wall-clock time of day with minute precision (00:00 to 23:59).
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::ClockTime;
///
/// let time = ClockTime::parse("9:05").unwrap();
/// assert_eq!(time.hour(), 9);
/// assert_eq!(time.minute(), 5);
/// assert_eq!(time.to_string(), "09:05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Builds a clock time from an hour (0-23) and minute (0-59).
    ///
    /// Returns `None` when either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parses an `H:MM` or `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidClockTime`] for anything else, including
    /// the blank string. Use [`ClockTime::parse_optional`] for form input.
    pub fn parse(value: &str) -> EngineResult<Self> {
        NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT)
            .map(Self)
            .map_err(|e| EngineError::InvalidClockTime {
                value: value.to_string(),
                message: e.to_string(),
            })
    }

    /// Parses form input where a blank string means "not set yet".
    pub fn parse_optional(value: &str) -> EngineResult<Option<Self>> {
        if value.trim().is_empty() {
            Ok(None)
        } else {
            Self::parse(value).map(Some)
        }
    }

    /// The hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// The minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CLOCK_FORMAT))
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter storing an unset time as the empty string.
mod clock_text {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::ClockTime;

    pub fn serialize<S: Serializer>(
        value: &Option<ClockTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.collect_str(time),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ClockTime>, D::Error> {
        let text = String::deserialize(deserializer)?;
        ClockTime::parse_optional(&text).map_err(serde::de::Error::custom)
    }
}

/// Which side of an attendance is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockField {
    /// The clock-in time.
    Start,
    /// The clock-out time.
    End,
}

/// One clock-in/clock-out pair within a shift.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::Attendance;
///
/// let attendance = Attendance::parse("22:00", "06:00").unwrap();
/// assert!(attendance.is_complete());
///
/// let blank = Attendance::parse("", "").unwrap();
/// assert!(!blank.is_complete());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    /// The clock-in time, if recorded.
    #[serde(with = "clock_text", default)]
    pub start: Option<ClockTime>,
    /// The clock-out time, if recorded.
    #[serde(with = "clock_text", default)]
    pub end: Option<ClockTime>,
}

impl Attendance {
    /// Creates a complete attendance.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates an attendance with neither side recorded.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Parses both sides from form input; blank strings leave a side unset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidClockTime`] when a non-blank side is malformed.
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        Ok(Self {
            start: ClockTime::parse_optional(start)?,
            end: ClockTime::parse_optional(end)?,
        })
    }

    /// Returns both times when the attendance is complete.
    pub fn clock_pair(&self) -> Option<(ClockTime, ClockTime)> {
        self.start.zip(self.end)
    }

    /// Whether both times are recorded.
    pub fn is_complete(&self) -> bool {
        self.clock_pair().is_some()
    }

    /// Returns the time recorded for one side.
    pub fn get(&self, field: ClockField) -> Option<ClockTime> {
        match field {
            ClockField::Start => self.start,
            ClockField::End => self.end,
        }
    }

    /// Replaces the time recorded for one side.
    pub fn set(&mut self, field: ClockField, value: Option<ClockTime>) {
        match field {
            ClockField::Start => self.start = value,
            ClockField::End => self.end = value,
        }
    }
}
