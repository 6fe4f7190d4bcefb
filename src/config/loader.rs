//! Configuration loading functionality.
//!
//! This module provides the [`RulesLoader`] type for loading pay rules
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::PayRules;

/// Loads and validates [`PayRules`].
///
/// Every field of the YAML document is optional; missing fields fall back
/// to the defaults of [`PayRules::default`].
///
/// ```text
/// premium_ratio: "0.25"
/// daily_overtime_threshold_hours: "8"
/// night_windows:
///   - { start_hour: 0, end_hour: 5 }
///   - { start_hour: 22, end_hour: 29 }
///   - { start_hour: 46, end_hour: 48 }
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_pay_engine::config::RulesLoader;
///
/// let loader = RulesLoader::load("./config/pay_rules.yaml").unwrap();
/// println!("Night windows: {}", loader.rules().night_windows.len());
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader {
    rules: PayRules,
}

impl RulesLoader {
    /// Loads rules from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `RulesLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The rules fail validation (`InvalidRules`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rules = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, windows = rules.night_windows.len(), "Loaded pay rules");
        Ok(Self { rules })
    }

    /// Parses rules from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let rules = Self::parse(content, "<inline>")?;
        Ok(Self { rules })
    }

    fn parse(content: &str, path: &str) -> EngineResult<PayRules> {
        let rules: PayRules =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        rules.validate()?;
        Ok(rules)
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &PayRules {
        &self.rules
    }

    /// Consumes the loader, returning the rules.
    pub fn into_rules(self) -> PayRules {
        self.rules
    }
}
