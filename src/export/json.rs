use std::io::Write;
use std::path::Path;

use super::ExportError;

/// Export any serializable data structure to pretty-printed JSON
pub fn export_json<T, P>(data: &T, output_path: P) -> Result<(), ExportError>
where
    T: serde::Serialize,
    P: AsRef<Path>,
{
    let json_data = serde_json::to_string_pretty(data)
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

    let mut file = std::fs::File::create(output_path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InitialPhysiology, SimulationInput, Trajectory, TrainingRegimen};
    use crate::report::ReportBuilder;
    use crate::simulation::PhysiologySimulator;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_trajectory_json() {
        let physiology = InitialPhysiology {
            age: 25.0,
            body_weight: 75.0,
            muscle_mass_percentage: 40.0,
            body_fat: 15.0,
            strength_index: 100.0,
            endurance_index: 100.0,
            mobility_score: 70.0,
        };
        let regimen = TrainingRegimen {
            training_hours: 2.0,
            intensity: 50.0,
            diet: 75.0,
            sleep_hours: 8.0,
        };
        let trajectory =
            PhysiologySimulator::simulate(&SimulationInput::new(physiology, regimen), 3);

        let temp_file = NamedTempFile::new().unwrap();
        export_json(&trajectory, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let decoded: Trajectory = serde_json::from_str(&content).unwrap();
        assert_eq!(decoded, trajectory);

        // Report payloads go through the same exporter
        let report =
            ReportBuilder::simulation_report(&physiology, &regimen, &trajectory).unwrap();
        export_json(&report, temp_file.path()).unwrap();
        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("\"final_stats\""));
    }
}
