//! Exhaustive regimen grid search
//!
//! Enumerates the Cartesian product of four regimen option sets, runs the
//! full simulator for every combination and keeps the candidate with the
//! highest weighted outcome score. Grid cells are independent, so they are
//! evaluated in parallel by default; the winner is still selected by a
//! sequential pass in enumeration order, which preserves the documented
//! first-found-wins tie-break.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{
    InitialPhysiology, OptimizationResult, SimulationInput, Trajectory, TrainingRegimen,
};
use crate::simulation::{initial_vo2_max, PhysiologySimulator, MIN_BODY_FAT_PERCENTAGE};

/// Grid search errors
#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("Search grid is empty: {0}")]
    EmptySearchSpace(String),

    #[error("Optimization failed to find a valid training plan")]
    NoViablePlan,
}

/// The four regimen option sets searched exhaustively
///
/// Enumeration order is training hours, then intensity, then diet, then
/// sleep, with the last dimension varying fastest. That order is part of
/// the contract: score ties keep the earliest combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanGrid {
    pub training_hours: Vec<f64>,
    pub intensity: Vec<f64>,
    pub diet: Vec<f64>,
    pub sleep_hours: Vec<f64>,
}

impl Default for PlanGrid {
    fn default() -> Self {
        PlanGrid {
            training_hours: vec![1.5, 3.0, 4.5],
            intensity: vec![50.0, 75.0, 100.0],
            diet: vec![60.0, 80.0, 100.0],
            sleep_hours: vec![7.0, 8.0, 9.0],
        }
    }
}

impl PlanGrid {
    /// Number of candidate regimens in the grid
    pub fn len(&self) -> usize {
        self.training_hours.len() * self.intensity.len() * self.diet.len() * self.sleep_hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All candidate regimens in enumeration order
    pub fn combinations(&self) -> Vec<TrainingRegimen> {
        cross_product(
            &self.training_hours,
            &self.intensity,
            &self.diet,
            &self.sleep_hours,
        )
        .into_iter()
        .map(
            |(training_hours, intensity, diet, sleep_hours)| TrainingRegimen {
                training_hours,
                intensity,
                diet,
                sleep_hours,
            },
        )
        .collect()
    }
}

/// Cartesian product of four named option sets, last set varying fastest
fn cross_product<A, B, C, D>(a: &[A], b: &[B], c: &[C], d: &[D]) -> Vec<(A, B, C, D)>
where
    A: Copy,
    B: Copy,
    C: Copy,
    D: Copy,
{
    let mut combinations = Vec::with_capacity(a.len() * b.len() * c.len() * d.len());
    for &x in a {
        for &y in b {
            for &z in c {
                for &w in d {
                    combinations.push((x, y, z, w));
                }
            }
        }
    }
    combinations
}

/// Weights applied to the normalized final-state ratios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Muscle mass gain ratio weight
    pub muscle_mass: f64,

    /// VO2max gain ratio weight
    pub vo2_max: f64,

    /// Inverted body fat ratio weight (initial over final, so losing fat scores higher)
    pub body_fat: f64,

    /// Strength gain ratio weight
    pub strength: f64,

    /// Endurance gain ratio weight
    pub endurance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            muscle_mass: 2.0,
            vo2_max: 1.5,
            body_fat: 1.0,
            strength: 1.0,
            endurance: 1.0,
        }
    }
}

/// Month-0 reference values the score normalizes against
///
/// Derived exactly like the simulator's own initialization so that the
/// normalization is consistent with the model the trajectories came from.
#[derive(Debug, Clone, Copy)]
struct BaselineReferences {
    muscle_mass: f64,
    vo2_max: f64,
    body_fat: f64,
    strength_index: f64,
    endurance_index: f64,
}

impl BaselineReferences {
    fn derive(physiology: &InitialPhysiology) -> Self {
        BaselineReferences {
            muscle_mass: physiology.body_weight * (physiology.muscle_mass_percentage / 100.0),
            vo2_max: initial_vo2_max(physiology.age, physiology.endurance_index),
            body_fat: physiology.body_fat,
            strength_index: physiology.strength_index,
            endurance_index: physiology.endurance_index,
        }
    }
}

/// One scored grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedPlan {
    pub regimen: TrainingRegimen,
    pub trajectory: Trajectory,
    pub score: f64,
}

/// Grid search configuration
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig {
    /// Option sets to search
    pub grid: PlanGrid,

    /// Scoring weights
    pub weights: ScoreWeights,

    /// Evaluate grid cells across worker threads
    pub parallel: bool,

    /// Show a progress bar while evaluating
    pub show_progress: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            grid: PlanGrid::default(),
            weights: ScoreWeights::default(),
            parallel: true,
            show_progress: false,
        }
    }
}

/// Exhaustive grid-search optimizer over training regimens
pub struct PlanOptimizer {
    config: OptimizerConfig,
}

impl Default for PlanOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanOptimizer {
    pub fn new() -> Self {
        Self::with_config(OptimizerConfig::default())
    }

    pub fn with_config(config: OptimizerConfig) -> Self {
        PlanOptimizer { config }
    }

    /// Search the whole grid and return the best regimen with its trajectory
    ///
    /// Every combination is simulated over the full horizon and scored
    /// against the athlete's month-0 reference values. Selection uses
    /// strict improvement over a negative-infinity seed, so the first
    /// candidate always becomes the running best and ties keep the
    /// earliest combination in enumeration order.
    pub fn find_optimal_plan(
        &self,
        physiology: &InitialPhysiology,
        duration_months: u32,
    ) -> Result<OptimizationResult, OptimizerError> {
        if self.config.grid.is_empty() {
            return Err(OptimizerError::EmptySearchSpace(
                "no regimen combinations to evaluate".to_string(),
            ));
        }

        let evaluated = self.evaluate_grid(physiology, duration_months);

        let mut best: Option<EvaluatedPlan> = None;
        let mut best_score = f64::NEG_INFINITY;
        for plan in evaluated {
            if plan.score > best_score {
                best_score = plan.score;
                best = Some(plan);
            }
        }

        let winner = best.ok_or(OptimizerError::NoViablePlan)?;
        info!(
            score = winner.score,
            regimen = %winner.regimen,
            "grid search complete"
        );

        Ok(OptimizationResult {
            regimen: winner.regimen,
            trajectory: winner.trajectory,
            score: winner.score,
        })
    }

    /// Simulate and score every grid cell, preserving enumeration order
    pub fn evaluate_grid(
        &self,
        physiology: &InitialPhysiology,
        duration_months: u32,
    ) -> Vec<EvaluatedPlan> {
        let candidates = self.config.grid.combinations();
        info!(
            candidates = candidates.len(),
            months = duration_months,
            "evaluating regimen grid"
        );

        let progress = if self.config.show_progress {
            let pb = ProgressBar::new(candidates.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} regimens")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let evaluate = |regimen: &TrainingRegimen| {
            let plan = self.evaluate_candidate(physiology, *regimen, duration_months);
            if let Some(ref pb) = progress {
                pb.inc(1);
            }
            plan
        };

        let evaluated: Vec<EvaluatedPlan> = if self.config.parallel {
            candidates.par_iter().map(evaluate).collect()
        } else {
            candidates.iter().map(evaluate).collect()
        };

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        evaluated
    }

    fn evaluate_candidate(
        &self,
        physiology: &InitialPhysiology,
        regimen: TrainingRegimen,
        duration_months: u32,
    ) -> EvaluatedPlan {
        let input = SimulationInput::new(*physiology, regimen);
        let trajectory = PhysiologySimulator::simulate(&input, duration_months);
        let score = Self::score_trajectory(physiology, &trajectory, &self.config.weights);
        debug!(regimen = %regimen, score, "evaluated candidate");

        EvaluatedPlan {
            regimen,
            trajectory,
            score,
        }
    }

    /// Weighted outcome score of a trajectory's final snapshot
    ///
    /// Ratios of final over initial for muscle, VO2max, strength and
    /// endurance; body fat is inverted (initial over final) so that fat
    /// loss raises the score. The final body fat sits on the simulator's
    /// 3% floor, which keeps the inverted ratio bounded. An empty
    /// trajectory scores negative infinity and can never win.
    pub fn score_trajectory(
        physiology: &InitialPhysiology,
        trajectory: &Trajectory,
        weights: &ScoreWeights,
    ) -> f64 {
        let Some(final_state) = trajectory.last() else {
            return f64::NEG_INFINITY;
        };
        let refs = BaselineReferences::derive(physiology);
        let final_body_fat = final_state.body_fat.max(MIN_BODY_FAT_PERCENTAGE);

        weights.muscle_mass * (final_state.muscle_mass / refs.muscle_mass)
            + weights.vo2_max * (final_state.vo2_max / refs.vo2_max)
            + weights.body_fat * (refs.body_fat / final_body_fat)
            + weights.strength * (final_state.strength_index / refs.strength_index)
            + weights.endurance * (final_state.endurance_index / refs.endurance_index)
    }
}
