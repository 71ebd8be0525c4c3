//! Report payload assembly
//!
//! Builds the plain-data summaries the narrative report generator
//! consumes: the original inputs plus the final snapshot of a run.
//! Prose generation itself lives outside this crate; these structs are
//! the complete interface it sees.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    InitialPhysiology, OptimizationResult, SimulationDataPoint, Trajectory, TrainingRegimen,
};

/// Summary of a single simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Baseline measurements the run started from
    pub physiology: InitialPhysiology,

    /// The regimen that was simulated
    pub regimen: TrainingRegimen,

    /// Simulated horizon in months
    pub duration_months: u32,

    /// Final monthly snapshot of the trajectory
    pub final_stats: SimulationDataPoint,

    /// When the report payload was assembled
    pub generated_at: DateTime<Utc>,
}

/// Summary of a grid search run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Baseline measurements the search started from
    pub physiology: InitialPhysiology,

    /// The winning regimen
    pub optimal_regimen: TrainingRegimen,

    /// Weighted outcome score of the winner
    pub score: f64,

    /// Simulated horizon in months
    pub duration_months: u32,

    /// Final monthly snapshot of the winning trajectory
    pub final_stats: SimulationDataPoint,

    /// When the report payload was assembled
    pub generated_at: DateTime<Utc>,
}

/// Assembles report payloads from finished runs
pub struct ReportBuilder;

impl ReportBuilder {
    /// Summarize a simulation run
    ///
    /// Returns None for an empty trajectory, which the simulator never
    /// produces.
    pub fn simulation_report(
        physiology: &InitialPhysiology,
        regimen: &TrainingRegimen,
        trajectory: &Trajectory,
    ) -> Option<SimulationReport> {
        let final_stats = *trajectory.last()?;
        Some(SimulationReport {
            physiology: *physiology,
            regimen: *regimen,
            duration_months: final_stats.month,
            final_stats,
            generated_at: Utc::now(),
        })
    }

    /// Summarize a grid search run
    pub fn optimization_report(
        physiology: &InitialPhysiology,
        result: &OptimizationResult,
    ) -> Option<OptimizationReport> {
        let final_stats = *result.trajectory.last()?;
        Some(OptimizationReport {
            physiology: *physiology,
            optimal_regimen: result.regimen,
            score: result.score,
            duration_months: final_stats.month,
            final_stats,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SimulationInput;
    use crate::optimizer::PlanOptimizer;
    use crate::simulation::PhysiologySimulator;

    fn reference_physiology() -> InitialPhysiology {
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

    fn moderate_regimen() -> TrainingRegimen {
        TrainingRegimen {
            training_hours: 2.0,
            intensity: 50.0,
            diet: 75.0,
            sleep_hours: 8.0,
        }
    }

    #[test]
    fn test_simulation_report_carries_final_snapshot() {
        let physiology = reference_physiology();
        let regimen = moderate_regimen();
        let trajectory =
            PhysiologySimulator::simulate(&SimulationInput::new(physiology, regimen), 12);

        let report =
            ReportBuilder::simulation_report(&physiology, &regimen, &trajectory).unwrap();

        assert_eq!(report.duration_months, 12);
        assert_eq!(report.final_stats, *trajectory.last().unwrap());
        assert_eq!(report.physiology, physiology);
        assert_eq!(report.regimen, regimen);
    }

    #[test]
    fn test_empty_trajectory_yields_no_report() {
        let report = ReportBuilder::simulation_report(
            &reference_physiology(),
            &moderate_regimen(),
            &Vec::new(),
        );
        assert!(report.is_none());
    }

    #[test]
    fn test_optimization_report() {
        let physiology = reference_physiology();
        let result = PlanOptimizer::new().find_optimal_plan(&physiology, 6).unwrap();

        let report = ReportBuilder::optimization_report(&physiology, &result).unwrap();

        assert_eq!(report.optimal_regimen, result.regimen);
        assert_eq!(report.score, result.score);
        assert_eq!(report.duration_months, 6);
        assert_eq!(report.final_stats, *result.trajectory.last().unwrap());
    }

    #[test]
    fn test_report_serializes_for_downstream_consumers() {
        let physiology = reference_physiology();
        let regimen = moderate_regimen();
        let trajectory =
            PhysiologySimulator::simulate(&SimulationInput::new(physiology, regimen), 6);
        let report =
            ReportBuilder::simulation_report(&physiology, &regimen, &trajectory).unwrap();

        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"final_stats\""));
        assert!(json.contains("\"generated_at\""));

        let decoded: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, report);
    }
}
