//! Core data models for the Shift Pay Engine.
//!
//! This module contains the domain models used throughout the engine.

mod attendance;
mod audit;
mod collection;
mod hourly_rate;
mod report;
mod shift;

pub use attendance::{Attendance, ClockField, ClockTime};
pub use audit::AuditStep;
pub use collection::ShiftCollection;
pub use hourly_rate::HourlyRate;
pub use report::{PayReport, ShiftSummary};
pub use shift::{Shift, ShiftRecord};
