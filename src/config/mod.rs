// ABOUTME: Tracker configuration with physiology coefficients and the activity vocabulary
// ABOUTME: Compile-time defaults with optional environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tracker Configuration Module
//!
//! Configuration is loaded once and then passed by value into the engine; no
//! component mutates it afterwards.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export FITNESS_STRIDE_COEFFICIENT=0.45
//!    export FITNESS_STEP_LENGTH_M=0.65
//!    export FITNESS_WALKING_COEFFICIENT=0.5
//!    export FITNESS_WALKING_LABEL=Walking
//!    export FITNESS_RUNNING_LABEL=Running
//!    ```
//!
//! 2. Default values (if env vars not set)

mod error;
mod vocabulary;

pub use error::ConfigError;
pub use vocabulary::ActivityVocabulary;

use fitness_tracker_core::constants::physiology::{
    AVERAGE_STEP_LENGTH_M, STRIDE_LENGTH_COEFFICIENT, WALKING_CALORIES_COEFFICIENT,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Environment variable overriding the stride length coefficient
pub const STRIDE_COEFFICIENT_ENV: &str = "FITNESS_STRIDE_COEFFICIENT";
/// Environment variable overriding the fixed step length
pub const STEP_LENGTH_ENV: &str = "FITNESS_STEP_LENGTH_M";
/// Environment variable overriding the walking calorie coefficient
pub const WALKING_COEFFICIENT_ENV: &str = "FITNESS_WALKING_COEFFICIENT";
/// Environment variable overriding the walking label
pub const WALKING_LABEL_ENV: &str = "FITNESS_WALKING_LABEL";
/// Environment variable overriding the running label
pub const RUNNING_LABEL_ENV: &str = "FITNESS_RUNNING_LABEL";

/// Coefficients used by the physiology engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysiologyConfig {
    /// Stride length as a fraction of height
    pub stride_length_coefficient: f64,
    /// Fixed step length in meters for the step-only distance
    pub step_length_m: f64,
    /// Walking calorie multiplier applied to the running formula
    pub walking_calories_coefficient: f64,
}

impl Default for PhysiologyConfig {
    fn default() -> Self {
        Self {
            stride_length_coefficient: STRIDE_LENGTH_COEFFICIENT,
            step_length_m: AVERAGE_STEP_LENGTH_M,
            walking_calories_coefficient: WALKING_CALORIES_COEFFICIENT,
        }
    }
}

impl PhysiologyConfig {
    /// Validate that every coefficient is a finite positive number
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValueOutOfRange`] naming the first bad coefficient
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.stride_length_coefficient) {
            return Err(ConfigError::ValueOutOfRange(
                "stride length coefficient must be positive",
            ));
        }
        if !is_positive(self.step_length_m) {
            return Err(ConfigError::ValueOutOfRange(
                "step length must be positive",
            ));
        }
        if !is_positive(self.walking_calories_coefficient) {
            return Err(ConfigError::ValueOutOfRange(
                "walking calories coefficient must be positive",
            ));
        }
        Ok(())
    }
}

/// Complete tracker configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Physiology coefficients
    pub physiology: PhysiologyConfig,
    /// Record labels recognized as activity types
    pub vocabulary: ActivityVocabulary,
}

impl TrackerConfig {
    /// Load defaults, apply environment overrides and validate
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the resulting
    /// configuration is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env_overrides()?.validated()
    }

    /// Validate the configuration and return it
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.physiology.validate()?;
        self.vocabulary.validate()?;
        Ok(self)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            STRIDE_COEFFICIENT_ENV,
            &mut self.physiology.stride_length_coefficient,
        )?;
        Self::apply_env_var(STEP_LENGTH_ENV, &mut self.physiology.step_length_m)?;
        Self::apply_env_var(
            WALKING_COEFFICIENT_ENV,
            &mut self.physiology.walking_calories_coefficient,
        )?;
        Self::apply_env_var(WALKING_LABEL_ENV, &mut self.vocabulary.walking)?;
        Self::apply_env_var(RUNNING_LABEL_ENV, &mut self.vocabulary.running)?;
        Ok(self)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = TrackerConfig::default();
        assert!((config.physiology.stride_length_coefficient - 0.45).abs() < f64::EPSILON);
        assert!((config.physiology.step_length_m - 0.65).abs() < f64::EPSILON);
        assert!((config.physiology.walking_calories_coefficient - 0.5).abs() < f64::EPSILON);
        assert!(config.validated().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_coefficients() {
        let mut physiology = PhysiologyConfig::default();
        physiology.walking_calories_coefficient = 0.0;
        assert_eq!(
            physiology.validate(),
            Err(ConfigError::ValueOutOfRange(
                "walking calories coefficient must be positive"
            ))
        );

        physiology = PhysiologyConfig {
            stride_length_coefficient: f64::NAN,
            ..PhysiologyConfig::default()
        };
        assert!(physiology.validate().is_err());
    }
}
