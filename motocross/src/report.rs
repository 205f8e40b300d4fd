/// JSON summaries of the exported mesh and the finished run
use crate::session::RunSummary;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use terrain::MeshSummary;
use tracing::info;

/// Writes session artefacts into one output directory.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        fs::create_dir_all(output_dir)?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    pub fn write_mesh_summary(&self, summary: &MeshSummary) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.write_json("mesh_summary.json", summary)?;
        info!(
            "Mesh: {}x{} grid, {} strips, {} vertices, heights {:.2} to {:.2}",
            summary.width,
            summary.length,
            summary.strip_count,
            summary.vertex_count,
            summary.min_height,
            summary.max_height
        );
        Ok(path)
    }

    pub fn write_run_summary(&self, summary: &RunSummary) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.write_json("run_summary.json", summary)?;
        info!("Run summary:");
        info!("  Outcome: {:?} after {} ticks", summary.outcome, summary.ticks);
        info!("  Score: {} ({} collected)", summary.score, summary.collected);
        info!(
            "  Final position: ({:.2}, {:.2}, {:.2})",
            summary.vehicle.position.x, summary.vehicle.position.y, summary.vehicle.position.z
        );
        Ok(path)
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.output_dir.join(name);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)?;
        info!("Wrote {}", path.display());
        Ok(path)
    }
}
