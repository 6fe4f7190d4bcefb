//! Configuration types for pay computation.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The last hour of the shift timeline (two midnight crossings).
///
/// A placement moves an attendance by at most one day, so offsets derived
/// from valid clock times always end before this hour.
pub const MAX_TIMELINE_HOURS: u32 = 48;

/// Default surcharge, as a fraction of the base rate, for night and overtime hours.
pub const DEFAULT_PREMIUM_RATIO: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Default number of hours in a shift before overtime applies.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// A half-open `[start_hour, end_hour)` range of the shift timeline that
/// counts as night work.
///
/// # Example
///
/// ```
/// use shift_pay_engine::config::NightWindow;
///
/// let window = NightWindow::new(22, 29).unwrap();
/// assert_eq!(window.start_minutes(), 1320);
/// assert!(NightWindow::new(5, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NightWindow {
    /// First timeline hour inside the window.
    pub start_hour: u32,
    /// First timeline hour after the window.
    pub end_hour: u32,
}

impl NightWindow {
    /// Creates a window, checking it is non-empty and inside the timeline.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRules`] when `start_hour >= end_hour` or
    /// `end_hour` is past [`MAX_TIMELINE_HOURS`].
    pub fn new(start_hour: u32, end_hour: u32) -> EngineResult<Self> {
        let window = Self {
            start_hour,
            end_hour,
        };
        window.validate()?;
        Ok(window)
    }

    fn validate(&self) -> EngineResult<()> {
        if self.start_hour >= self.end_hour {
            return Err(EngineError::InvalidRules {
                message: format!(
                    "night window [{}, {}) is empty",
                    self.start_hour, self.end_hour
                ),
            });
        }
        if self.end_hour > MAX_TIMELINE_HOURS {
            return Err(EngineError::InvalidRules {
                message: format!(
                    "night window [{}, {}) extends past hour {}",
                    self.start_hour, self.end_hour, MAX_TIMELINE_HOURS
                ),
            });
        }
        Ok(())
    }

    /// Window start in timeline minutes.
    pub fn start_minutes(&self) -> u32 {
        self.start_hour * 60
    }

    /// Window end in timeline minutes.
    pub fn end_minutes(&self) -> u32 {
        self.end_hour * 60
    }
}

/// The rules applied when turning worked time into pay.
///
/// `PayRules::default()` gives a 25% surcharge for hours beyond 8 in a
/// shift and for hours inside the night windows `[0,5)`, `[22,29)` and
/// `[46,48)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRules {
    /// Surcharge as a fraction of the base rate, paid on top of base pay.
    #[serde(default = "default_premium_ratio")]
    pub premium_ratio: Decimal,
    /// Hours in a shift after which the overtime surcharge applies.
    #[serde(default = "default_overtime_threshold")]
    pub daily_overtime_threshold_hours: Decimal,
    /// Timeline ranges that earn the night surcharge.
    #[serde(default = "default_night_windows")]
    pub night_windows: Vec<NightWindow>,
}

fn default_premium_ratio() -> Decimal {
    DEFAULT_PREMIUM_RATIO
}

fn default_overtime_threshold() -> Decimal {
    DEFAULT_DAILY_OVERTIME_THRESHOLD
}

fn default_night_windows() -> Vec<NightWindow> {
    vec![
        NightWindow {
            start_hour: 0,
            end_hour: 5,
        },
        NightWindow {
            start_hour: 22,
            end_hour: 29,
        },
        NightWindow {
            start_hour: 46,
            end_hour: 48,
        },
    ]
}

impl Default for PayRules {
    fn default() -> Self {
        Self {
            premium_ratio: default_premium_ratio(),
            daily_overtime_threshold_hours: default_overtime_threshold(),
            night_windows: default_night_windows(),
        }
    }
}

impl PayRules {
    /// Checks the rules are usable.
    ///
    /// Night windows must each be valid, sorted and pairwise disjoint, so
    /// that no minute is ever counted twice.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRules`] describing the first problem found.
    pub fn validate(&self) -> EngineResult<()> {
        if self.premium_ratio.is_sign_negative() && !self.premium_ratio.is_zero() {
            return Err(EngineError::InvalidRules {
                message: format!("premium ratio {} is negative", self.premium_ratio),
            });
        }
        if self.daily_overtime_threshold_hours.is_sign_negative()
            && !self.daily_overtime_threshold_hours.is_zero()
        {
            return Err(EngineError::InvalidRules {
                message: format!(
                    "overtime threshold {} is negative",
                    self.daily_overtime_threshold_hours
                ),
            });
        }
        for window in &self.night_windows {
            window.validate()?;
        }
        for pair in self.night_windows.windows(2) {
            if pair[1].start_hour < pair[0].end_hour {
                return Err(EngineError::InvalidRules {
                    message: format!(
                        "night windows [{}, {}) and [{}, {}) overlap or are out of order",
                        pair[0].start_hour, pair[0].end_hour, pair[1].start_hour, pair[1].end_hour
                    ),
                });
            }
        }
        Ok(())
    }
}
