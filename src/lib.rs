//! Shift Pay Engine
//!
//! This crate computes worked hours and pay for shifts made of clock-in /
//! clock-out pairs recorded as bare wall-clock times. Runs of attendances
//! that cross midnight are placed on one continuous timeline, then paid at
//! the base rate plus a surcharge for daily overtime and for night hours.
//!
//! # Example
//!
//! ```
//! use shift_pay_engine::calculation::{shift_pay, shift_work_hours};
//! use shift_pay_engine::models::Attendance;
//! use rust_decimal::Decimal;
//!
//! let attendances = vec![Attendance::parse("22:00", "06:00").unwrap()];
//! assert_eq!(shift_work_hours(&attendances), Decimal::from(8));
//! assert_eq!(shift_pay("1000", &attendances), Decimal::from(9750));
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
