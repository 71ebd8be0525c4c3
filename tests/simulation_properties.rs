use physiosim::models::{InitialPhysiology, SimulationInput, TrainingRegimen};
use physiosim::simulation::{PhysiologySimulator, MIN_BODY_FAT_PERCENTAGE};
use proptest::prelude::*;

/// Property tests over the documented input ranges

fn physiology_strategy() -> impl Strategy<Value = InitialPhysiology> {
    (
        11.0..=50.0f64,
        30.0..=120.0f64,
        25.0..=55.0f64,
        5.0..=35.0f64,
        30.0..=200.0f64,
        30.0..=200.0f64,
        30.0..=100.0f64,
    )
        .prop_map(
            |(age, body_weight, muscle_mass_percentage, body_fat, strength, endurance, mobility)| {
                InitialPhysiology {
                    age,
                    body_weight,
                    muscle_mass_percentage,
                    body_fat,
                    strength_index: strength,
                    endurance_index: endurance,
                    mobility_score: mobility,
                }
            },
        )
}

fn regimen_strategy() -> impl Strategy<Value = TrainingRegimen> {
    (0.5..=6.0f64, 0.0..=100.0f64, 0.0..=100.0f64, 4.0..=10.0f64).prop_map(
        |(training_hours, intensity, diet, sleep_hours)| TrainingRegimen {
            training_hours,
            intensity,
            diet,
            sleep_hours,
        },
    )
}

proptest! {
    /// D months in, D+1 points out, months strictly ascending from 0
    #[test]
    fn trajectory_length_matches_horizon(
        physiology in physiology_strategy(),
        regimen in regimen_strategy(),
        duration in 0u32..=48,
    ) {
        let input = SimulationInput::new(physiology, regimen);
        let trajectory = PhysiologySimulator::simulate(&input, duration);

        prop_assert_eq!(trajectory.len(), duration as usize + 1);
        for (expected, point) in trajectory.iter().enumerate() {
            prop_assert_eq!(point.month, expected as u32);
        }
    }

    /// Identical input always yields a bit-identical trajectory
    #[test]
    fn simulation_is_deterministic(
        physiology in physiology_strategy(),
        regimen in regimen_strategy(),
        duration in 0u32..=36,
    ) {
        let input = SimulationInput::new(physiology, regimen);
        let first = PhysiologySimulator::simulate(&input, duration);
        let second = PhysiologySimulator::simulate(&input, duration);
        prop_assert_eq!(first, second);
    }

    /// Month 0 reproduces the baseline within output rounding
    #[test]
    fn month_zero_matches_baseline(
        physiology in physiology_strategy(),
        regimen in regimen_strategy(),
    ) {
        let input = SimulationInput::new(physiology, regimen);
        let trajectory = PhysiologySimulator::simulate(&input, 1);
        let first = &trajectory[0];

        let expected_muscle =
            physiology.body_weight * (physiology.muscle_mass_percentage / 100.0);
        prop_assert!((first.muscle_mass - expected_muscle).abs() <= 0.005 + 1e-9);
        prop_assert!((first.body_fat - physiology.body_fat).abs() <= 0.005 + 1e-9);
        prop_assert!((first.strength_index - physiology.strength_index).abs() <= 0.005 + 1e-9);
        prop_assert!((first.endurance_index - physiology.endurance_index).abs() <= 0.005 + 1e-9);
    }

    /// Body fat never drops below the documented floor
    #[test]
    fn body_fat_respects_floor(
        physiology in physiology_strategy(),
        regimen in regimen_strategy(),
        duration in 0u32..=48,
    ) {
        let input = SimulationInput::new(physiology, regimen);
        let trajectory = PhysiologySimulator::simulate(&input, duration);
        for point in &trajectory {
            prop_assert!(point.body_fat >= MIN_BODY_FAT_PERCENTAGE);
        }
    }

    /// A zero-month horizon applies no deltas at all
    #[test]
    fn zero_duration_is_pure_initialization(
        physiology in physiology_strategy(),
        regimen in regimen_strategy(),
    ) {
        let input = SimulationInput::new(physiology, regimen);
        let single = PhysiologySimulator::simulate(&input, 0);
        let longer = PhysiologySimulator::simulate(&input, 12);

        prop_assert_eq!(single.len(), 1);
        // The month-0 point is the same whatever the horizon
        prop_assert_eq!(&single[0], &longer[0]);
    }

    /// Diagnostic factors stay inside their structural bounds
    #[test]
    fn factors_stay_in_bounds(
        physiology in physiology_strategy(),
        regimen in regimen_strategy(),
        duration in 0u32..=48,
    ) {
        let input = SimulationInput::new(physiology, regimen);
        let trajectory = PhysiologySimulator::simulate(&input, duration);
        for point in &trajectory {
            prop_assert!(point.training_stimulus >= 0.0);
            prop_assert!(point.recovery_factor <= 1.5 + 1e-9);
            prop_assert!(point.age_factor >= 0.5 - 1e-9);
            prop_assert!(point.age_factor <= 1.0 + 1e-9);
        }
    }
}
