use std::path::Path;

use super::ExportError;
use crate::models::Trajectory;

/// Export a trajectory to CSV, one row per month
pub fn export_trajectory<P: AsRef<Path>>(
    trajectory: &Trajectory,
    output_path: P,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(output_path)?;

    for point in trajectory {
        writer
            .serialize(point)
            .map_err(|e| ExportError::SerializationError(e.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}
