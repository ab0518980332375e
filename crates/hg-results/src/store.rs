//! Run storage API.
//!
//! One directory per run under the store root: `manifest.json` plus
//! the four CSV tables.

use crate::csv::{
    equipment_table_csv, parameter_table_csv, results_table_csv, stream_table_csv,
};
use crate::types::{ReportTables, RunManifest};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store rooted next to the configuration file, under `.hgflow/runs`.
    pub fn for_config(config_path: &Path) -> ResultsResult<Self> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "config path has no parent directory".to_string(),
            })?;
        Self::new(config_dir.join(".hgflow").join("runs"))
    }

    fn run_dir(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(run_id)
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.run_dir(run_id).join("manifest.json").exists()
    }

    pub fn save_run(&self, manifest: &RunManifest, tables: &ReportTables) -> ResultsResult<()> {
        let run_dir = self.run_dir(&manifest.run_id);
        fs::create_dir_all(&run_dir)?;

        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(run_dir.join("manifest.json"), manifest_json)?;

        fs::write(run_dir.join("streams.csv"), stream_table_csv(tables))?;
        fs::write(run_dir.join("equipment.csv"), equipment_table_csv(tables))?;
        fs::write(run_dir.join("parameters.csv"), parameter_table_csv(tables))?;
        fs::write(run_dir.join("results.csv"), results_table_csv(tables))?;

        Ok(())
    }

    pub fn load_manifest(&self, run_id: &str) -> ResultsResult<RunManifest> {
        let text = fs::read_to_string(self.run_dir(run_id).join("manifest.json"))?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn list_runs(&self) -> ResultsResult<Vec<String>> {
        let mut runs = Vec::new();
        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().join("manifest.json").exists() {
                runs.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        runs.sort();
        Ok(runs)
    }
}
