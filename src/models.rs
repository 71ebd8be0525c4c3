use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Baseline athlete measurements taken before a projection run
///
/// Values are expected to fall inside the documented contract ranges
/// (see the `validation` module); the numeric core assumes in-range
/// inputs and does not re-check them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialPhysiology {
    /// Age in years (11-50)
    pub age: f64,

    /// Body weight in kilograms (30-120)
    pub body_weight: f64,

    /// Muscle mass as a percentage of body weight (25-55)
    pub muscle_mass_percentage: f64,

    /// Body fat percentage (5-35)
    pub body_fat: f64,

    /// Strength index in points (30-200)
    pub strength_index: f64,

    /// Endurance index in points (30-200)
    pub endurance_index: f64,

    /// Mobility score in points (30-100)
    pub mobility_score: f64,
}

/// The four tunable training parameters describing a static regimen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingRegimen {
    /// Daily training volume in hours (0.5-6)
    pub training_hours: f64,

    /// Session intensity as a percentage (0-100)
    pub intensity: f64,

    /// Diet quality as a percentage (0-100)
    pub diet: f64,

    /// Nightly sleep in hours (4-10)
    pub sleep_hours: f64,
}

/// Complete input for one projection run: who is training, and how
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    pub physiology: InitialPhysiology,
    pub regimen: TrainingRegimen,
}

/// One monthly snapshot of the projected athlete
///
/// Physiological metrics are rounded to 2 decimal places and the three
/// diagnostic factors to 3, matching the precision the presentation
/// layer consumes. Internal simulation state keeps full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tabled)]
pub struct SimulationDataPoint {
    /// Month index, 0 = baseline
    #[tabled(rename = "Month")]
    pub month: u32,

    /// Muscle mass in kilograms
    #[tabled(rename = "Muscle (kg)")]
    pub muscle_mass: f64,

    /// Maximal oxygen uptake in ml/kg/min
    #[tabled(rename = "VO2max")]
    pub vo2_max: f64,

    /// Body fat percentage
    #[tabled(rename = "Body Fat %")]
    pub body_fat: f64,

    /// Strength index in points
    #[tabled(rename = "Strength")]
    pub strength_index: f64,

    /// Endurance index in points
    #[tabled(rename = "Endurance")]
    pub endurance_index: f64,

    /// Training-load signal driving this month's adaptation
    #[tabled(rename = "Stimulus")]
    pub training_stimulus: f64,

    /// Combined sleep/diet recovery signal for this month
    #[tabled(rename = "Recovery")]
    pub recovery_factor: f64,

    /// Age-dependent growth/peak/decline multiplier for this month
    #[tabled(rename = "Age Factor")]
    pub age_factor: f64,
}

/// Ordered sequence of monthly snapshots from a single projection run
pub type Trajectory = Vec<SimulationDataPoint>;

/// Winning regimen from a grid search together with its projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// The best regimen found in the search grid
    pub regimen: TrainingRegimen,

    /// Full trajectory produced by simulating the winning regimen
    pub trajectory: Trajectory,

    /// Weighted outcome score of the winning regimen
    pub score: f64,
}

impl SimulationInput {
    pub fn new(physiology: InitialPhysiology, regimen: TrainingRegimen) -> Self {
        SimulationInput {
            physiology,
            regimen,
        }
    }
}

impl std::fmt::Display for TrainingRegimen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}h/day at {}% intensity, {}% diet quality, {}h sleep",
            self.training_hours, self.intensity, self.diet, self.sleep_hours
        )
    }
}
