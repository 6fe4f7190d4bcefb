//! Configuration loading and management for the Shift Pay Engine.
//!
//! This module provides the [`PayRules`] applied by the pay calculator and
//! functionality to load them from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_pay_engine::config::RulesLoader;
//!
//! let rules = RulesLoader::load("./config/pay_rules.yaml").unwrap().into_rules();
//! println!("Premium ratio: {}", rules.premium_ratio);
//! ```

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::{
    DEFAULT_DAILY_OVERTIME_THRESHOLD, DEFAULT_PREMIUM_RATIO, MAX_TIMELINE_HOURS, NightWindow,
    PayRules,
};
