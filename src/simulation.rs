//! Deterministic physiology projection engine
//!
//! Advances one athlete's state month by month under a static training
//! regimen, producing an ordered trajectory of snapshots. All arithmetic
//! is pure `f64`: the same input always yields the same trajectory, and
//! no error conditions exist for inputs inside the documented ranges.

use serde::{Deserialize, Serialize};

use crate::models::{InitialPhysiology, SimulationDataPoint, SimulationInput, Trajectory};

/// Lower bound on body fat, as a percentage of body weight
pub const MIN_BODY_FAT_PERCENTAGE: f64 = 3.0;

/// Regimen-derived factors that stay constant across the whole run
///
/// Derived once from the training regimen and the athlete's mobility
/// score, then combined with the per-month dynamic factors inside the
/// loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticFactors {
    /// Training-load signal before adaptation shrinks it.
    /// Hours contribute quadratically with diminishing returns past
    /// ~6.25 h/day, modeling overtraining.
    pub base_training_stimulus: f64,

    /// Intensity multiplier in [0.5, 1.5]
    pub intensity_factor: f64,

    /// Sleep quality in [0, 1], quadratic penalty under 8 h/night
    pub sleep_quality: f64,

    /// Diet quality multiplier in [0.5, 1.5]
    pub diet_quality: f64,

    /// Sleep quality times diet quality, before the monthly adaptation bonus
    pub base_recovery_factor: f64,

    /// Mobility multiplier around 1.0 (+-0.002 per point from 50)
    pub mobility_factor: f64,
}

/// Dynamic factors recomputed at the top of every month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyFactors {
    pub training_stimulus: f64,
    pub recovery_factor: f64,
    pub age_factor: f64,
}

/// Full-precision athlete state, advanced one month at a time
///
/// Body weight tracks the sum of muscle and fat deltas; the remaining
/// mass is folded into the starting weight and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AthleteState {
    pub body_weight: f64,
    pub muscle_mass: f64,
    pub body_fat_mass: f64,
    pub body_fat_percentage: f64,
    pub vo2_max: f64,
    pub strength_index: f64,
    pub endurance_index: f64,
}

impl StaticFactors {
    /// Derive the constant factors from a simulation input
    pub fn derive(input: &SimulationInput) -> Self {
        let regimen = &input.regimen;

        let effective_hours =
            -0.08 * regimen.training_hours * regimen.training_hours + 1.0 * regimen.training_hours;
        let intensity_factor = 0.5 + regimen.intensity / 100.0;
        let base_training_stimulus = (effective_hours * intensity_factor).max(0.0);

        let sleep_quality = (regimen.sleep_hours / 8.0).min(1.0).powi(2);
        let diet_quality = 0.5 + regimen.diet / 100.0;
        let base_recovery_factor = sleep_quality * diet_quality;

        let mobility_factor = 1.0 + (input.physiology.mobility_score - 50.0) * 0.002;

        StaticFactors {
            base_training_stimulus,
            intensity_factor,
            sleep_quality,
            diet_quality,
            base_recovery_factor,
            mobility_factor,
        }
    }
}

impl AthleteState {
    /// Build the month-0 state from baseline measurements
    pub fn from_physiology(physiology: &InitialPhysiology) -> Self {
        AthleteState {
            body_weight: physiology.body_weight,
            muscle_mass: physiology.body_weight * (physiology.muscle_mass_percentage / 100.0),
            body_fat_mass: physiology.body_weight * (physiology.body_fat / 100.0),
            body_fat_percentage: physiology.body_fat,
            vo2_max: initial_vo2_max(physiology.age, physiology.endurance_index),
            strength_index: physiology.strength_index,
            endurance_index: physiology.endurance_index,
        }
    }
}

/// Baseline VO2max derived from age and endurance index
///
/// Age curve is piecewise: linear ramp 38 to 45 across ages 11-20,
/// a plateau at 45 through age 25, then 0.3 ml/kg/min lost per year.
/// Endurance index shifts the baseline by 0.2 per point from 100.
pub fn initial_vo2_max(age: f64, endurance_index: f64) -> f64 {
    let age_based_base = if age < 20.0 {
        38.0 + ((age - 11.0) / (20.0 - 11.0)) * (45.0 - 38.0)
    } else if age <= 25.0 {
        45.0
    } else {
        45.0 - (age - 25.0) * 0.3
    };
    age_based_base + (endurance_index - 100.0) * 0.2
}

/// Age multiplier for a given (fractional) age, floored at 0.5
///
/// Growth phase ramps 0.8 to 1.0 across ages 11-20, peak years hold
/// 1.0 through 30, then 0.5% is lost per year.
fn age_factor(current_age: f64) -> f64 {
    let factor = if current_age < 20.0 {
        0.8 + ((current_age - 11.0) / (20.0 - 11.0)) * 0.2
    } else if current_age <= 30.0 {
        1.0
    } else {
        1.0 - (current_age - 30.0) * 0.005
    };
    factor.max(0.5)
}

/// The deterministic physiology simulator
pub struct PhysiologySimulator;

impl PhysiologySimulator {
    /// Project an athlete's trajectory over `duration_months` months
    ///
    /// Returns `duration_months + 1` snapshots, months 0 through
    /// `duration_months` inclusive. The month-0 snapshot reflects the
    /// initialized state with no deltas applied.
    pub fn simulate(input: &SimulationInput, duration_months: u32) -> Trajectory {
        let factors = StaticFactors::derive(input);
        let mut state = AthleteState::from_physiology(&input.physiology);
        let mut trajectory = Vec::with_capacity(duration_months as usize + 1);

        for month in 0..=duration_months {
            let monthly = Self::monthly_factors(&state, month, &input.physiology, &factors);
            trajectory.push(Self::snapshot(month, &state, &monthly));

            if month == duration_months {
                break;
            }

            state = Self::advance_month(&state, &monthly, &factors);
        }

        trajectory
    }

    /// Dynamic factors for one month of the run
    ///
    /// The adaptation multiplier shrinks the stimulus as strength and
    /// endurance accumulate above baseline, and the recovery factor
    /// gains a consistency bonus that caps at +0.15 after 30 months.
    pub fn monthly_factors(
        state: &AthleteState,
        month: u32,
        physiology: &InitialPhysiology,
        factors: &StaticFactors,
    ) -> MonthlyFactors {
        let current_age = physiology.age + f64::from(month) / 12.0;

        let adaptation_multiplier = 1.0
            / (1.0
                + 0.005 * (state.strength_index - physiology.strength_index)
                + 0.005 * (state.endurance_index - physiology.endurance_index));
        let training_stimulus = factors.base_training_stimulus * adaptation_multiplier;

        let recovery_adaptation_bonus = (f64::from(month) * 0.005).min(0.15);
        let recovery_factor = (factors.base_recovery_factor + recovery_adaptation_bonus).min(1.5);

        MonthlyFactors {
            training_stimulus,
            recovery_factor,
            age_factor: age_factor(current_age),
        }
    }

    /// Apply one month of adaptation, returning the new state
    ///
    /// Every gain is proportional to stimulus x recovery x age factor
    /// with a metric-specific coefficient; fat change combines training
    /// expenditure with diet and sleep penalties. Body fat is floored
    /// at 3% of body weight after the update.
    pub fn advance_month(
        state: &AthleteState,
        monthly: &MonthlyFactors,
        factors: &StaticFactors,
    ) -> AthleteState {
        let stimulus = monthly.training_stimulus;
        let recovery = monthly.recovery_factor;
        let age = monthly.age_factor;

        let muscle_gain = 0.2 * stimulus * recovery * age * factors.mobility_factor;
        // Strength responds to intensity and mobility more than the other metrics
        let strength_gain =
            2.0 * stimulus * (factors.intensity_factor * 0.5) * recovery * age * factors.mobility_factor;
        // Endurance takes only half the mobility effect
        let endurance_gain =
            0.9 * stimulus * recovery * age * (1.0 + (factors.mobility_factor - 1.0) * 0.5);
        let vo2_gain = 0.6 * stimulus * recovery * age;

        let fat_loss_from_training = -0.25 * stimulus;
        let fat_change_from_diet = (1.0 - factors.diet_quality) * 0.1;
        let fat_change_from_sleep = (1.0 - factors.sleep_quality) * 0.05;
        let fat_change = fat_loss_from_training + fat_change_from_diet + fat_change_from_sleep;

        let muscle_mass = state.muscle_mass + muscle_gain;
        let mut body_fat_mass = state.body_fat_mass + fat_change;
        let body_weight = state.body_weight + muscle_gain + fat_change;

        let mut body_fat_percentage = (body_fat_mass / body_weight) * 100.0;
        body_fat_mass = body_fat_mass.max(body_weight * (MIN_BODY_FAT_PERCENTAGE / 100.0));
        body_fat_percentage = body_fat_percentage.max(MIN_BODY_FAT_PERCENTAGE);

        AthleteState {
            body_weight,
            muscle_mass,
            body_fat_mass,
            body_fat_percentage,
            vo2_max: state.vo2_max + vo2_gain,
            strength_index: state.strength_index + strength_gain,
            endurance_index: state.endurance_index + endurance_gain,
        }
    }

    /// Rounded snapshot of the current state for the output trajectory
    fn snapshot(month: u32, state: &AthleteState, monthly: &MonthlyFactors) -> SimulationDataPoint {
        SimulationDataPoint {
            month,
            muscle_mass: round2(state.muscle_mass),
            vo2_max: round2(state.vo2_max),
            body_fat: round2(state.body_fat_percentage),
            strength_index: round2(state.strength_index),
            endurance_index: round2(state.endurance_index),
            training_stimulus: round3(monthly.training_stimulus),
            recovery_factor: round3(monthly.recovery_factor),
            age_factor: round3(monthly.age_factor),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
