//! Input range validation for the calling layer
//!
//! The simulation core is a total function over its documented input
//! ranges and performs no validation of its own. Everything that feeds
//! athlete data into the core (the CLI here, a form UI elsewhere) is
//! expected to run these checks first.

use thiserror::Error;

use crate::models::{InitialPhysiology, SimulationInput, TrainingRegimen};

/// Simulation horizons offered by the surrounding application. The core
/// accepts any non-negative duration; these are presentation presets.
pub const DURATION_PRESETS: [u32; 4] = [6, 12, 24, 36];

/// Input validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Range checks for simulation inputs
pub struct InputValidator;

impl InputValidator {
    /// Validate baseline athlete measurements
    pub fn validate_physiology(physiology: &InitialPhysiology) -> Result<(), ValidationError> {
        Self::check_range("age", physiology.age, 11.0, 50.0)?;
        Self::check_range("body weight", physiology.body_weight, 30.0, 120.0)?;
        Self::check_range(
            "muscle mass percentage",
            physiology.muscle_mass_percentage,
            25.0,
            55.0,
        )?;
        Self::check_range("body fat", physiology.body_fat, 5.0, 35.0)?;
        Self::check_range("strength index", physiology.strength_index, 30.0, 200.0)?;
        Self::check_range("endurance index", physiology.endurance_index, 30.0, 200.0)?;
        Self::check_range("mobility score", physiology.mobility_score, 30.0, 100.0)?;
        Ok(())
    }

    /// Validate regimen parameters
    pub fn validate_regimen(regimen: &TrainingRegimen) -> Result<(), ValidationError> {
        Self::check_range("training hours", regimen.training_hours, 0.5, 6.0)?;
        Self::check_range("intensity", regimen.intensity, 0.0, 100.0)?;
        Self::check_range("diet quality", regimen.diet, 0.0, 100.0)?;
        Self::check_range("sleep hours", regimen.sleep_hours, 4.0, 10.0)?;
        Ok(())
    }

    /// Validate a complete simulation input
    pub fn validate_input(input: &SimulationInput) -> Result<(), ValidationError> {
        Self::validate_physiology(&input.physiology)?;
        Self::validate_regimen(&input.regimen)?;
        Ok(())
    }

    fn check_range(
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<(), ValidationError> {
        if !value.is_finite() || value < min || value > max {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_physiology() -> InitialPhysiology {
        InitialPhysiology {
            age: 25.0,
            body_weight: 75.0,
            muscle_mass_percentage: 40.0,
            body_fat: 15.0,
            strength_index: 100.0,
            endurance_index: 100.0,
            mobility_score: 70.0,
        }
    }

    fn valid_regimen() -> TrainingRegimen {
        TrainingRegimen {
            training_hours: 2.0,
            intensity: 50.0,
            diet: 75.0,
            sleep_hours: 8.0,
        }
    }

    #[test]
    fn test_in_range_inputs_pass() {
        assert!(InputValidator::validate_physiology(&valid_physiology()).is_ok());
        assert!(InputValidator::validate_regimen(&valid_regimen()).is_ok());
        assert!(InputValidator::validate_input(&SimulationInput::new(
            valid_physiology(),
            valid_regimen()
        ))
        .is_ok());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let mut physiology = valid_physiology();
        physiology.age = 11.0;
        physiology.body_fat = 35.0;
        assert!(InputValidator::validate_physiology(&physiology).is_ok());

        let mut regimen = valid_regimen();
        regimen.training_hours = 0.5;
        regimen.intensity = 0.0;
        regimen.sleep_hours = 10.0;
        assert!(InputValidator::validate_regimen(&regimen).is_ok());
    }

    #[test]
    fn test_out_of_range_age_rejected() {
        let mut physiology = valid_physiology();
        physiology.age = 55.0;
        let err = InputValidator::validate_physiology(&physiology).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "age",
                value: 55.0,
                min: 11.0,
                max: 50.0,
            }
        );
        assert!(err.to_string().contains("age must be between 11 and 50"));
    }

    #[test]
    fn test_negative_training_hours_rejected() {
        let mut regimen = valid_regimen();
        regimen.training_hours = -1.0;
        assert!(InputValidator::validate_regimen(&regimen).is_err());
    }

    #[test]
    fn test_duration_presets_are_sorted_and_distinct() {
        for window in DURATION_PRESETS.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let mut physiology = valid_physiology();
        physiology.body_weight = f64::NAN;
        assert!(InputValidator::validate_physiology(&physiology).is_err());

        let mut regimen = valid_regimen();
        regimen.diet = f64::INFINITY;
        assert!(InputValidator::validate_regimen(&regimen).is_err());
    }
}
