use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{build_full_spec, build_patch, render_summary};
use crate::models::ConOpsInput;

/// File names of one exported artifact set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResult {
    pub mission: String,
    pub patch: String,
    pub summary: String,
}

/// Writes generated artifacts to disk and resolves them for download.
///
/// Owns the two file-system collaborators of the engine: the baseline
/// template location and the export directory.
#[derive(Clone)]
pub struct Exporter {
    export_dir: PathBuf,
    baseline_path: PathBuf,
}

impl Exporter {
    pub fn new(export_dir: PathBuf, baseline_path: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&export_dir)
            .with_context(|| format!("Failed to create export dir {}", export_dir.display()))?;
        Ok(Self {
            export_dir,
            baseline_path,
        })
    }

    pub fn default_dirs() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "conops-builder")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let export_dir = dirs.data_dir().join("exports");
        let baseline_path = dirs.data_dir().join("mission.yaml");
        Self::new(export_dir, baseline_path)
    }

    /// Load the baseline template, or `None` when it does not exist.
    /// A missing baseline is a normal branch: exports then degrade to the
    /// patch document alone.
    pub fn load_baseline(&self) -> Result<Option<Value>> {
        if !self.baseline_path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.baseline_path).with_context(|| {
            format!("Failed to read baseline {}", self.baseline_path.display())
        })?;
        let doc = serde_yaml::from_str(&text).with_context(|| {
            format!("Baseline {} is not valid YAML", self.baseline_path.display())
        })?;
        Ok(Some(doc))
    }

    /// Write the three artifacts for one input document and return their
    /// file names. Names carry a UTC timestamp so repeated exports never
    /// overwrite each other within the same second.
    pub fn export(&self, input: &ConOpsInput) -> Result<ExportResult> {
        let ts = Utc::now().format("%Y%m%d-%H%M%S");
        let baseline = self.load_baseline()?;

        let full = build_full_spec(input, baseline);
        let patch = build_patch(input);
        let summary = render_summary(input);

        let result = ExportResult {
            mission: format!("mission-{ts}.yaml"),
            patch: format!("conops-patch-{ts}.yaml"),
            summary: format!("conops-summary-{ts}.md"),
        };

        std::fs::write(self.export_dir.join(&result.mission), serde_yaml::to_string(&full)?)?;
        std::fs::write(self.export_dir.join(&result.patch), serde_yaml::to_string(&patch)?)?;
        std::fs::write(self.export_dir.join(&result.summary), summary)?;

        tracing::info!(
            mission = %result.mission,
            patch = %result.patch,
            summary = %result.summary,
            "Exported ConOps artifacts"
        );
        Ok(result)
    }

    /// Resolve a previously exported artifact by bare file name.
    /// Returns `None` for unknown files and for names that try to escape
    /// the export directory.
    pub fn artifact_path(&self, name: &str) -> Option<PathBuf> {
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return None;
        }
        let path = self.export_dir.join(name);
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    fn demo_input() -> ConOpsInput {
        serde_json::from_value(json!({
            "intent": "demo",
            "stakeholders": "ops team",
            "phases": [{"name": "launch", "order": 1}],
        }))
        .unwrap()
    }

    fn exporter_in(dir: &Path) -> Exporter {
        Exporter::new(dir.join("exports"), dir.join("mission.yaml")).unwrap()
    }

    #[test]
    fn missing_baseline_is_reported_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        let exporter = exporter_in(tmp.path());

        assert!(exporter.load_baseline().unwrap().is_none());
    }

    #[test]
    fn export_writes_all_three_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let exporter = exporter_in(tmp.path());

        let result = exporter.export(&demo_input()).unwrap();
        for name in [&result.mission, &result.patch, &result.summary] {
            assert!(exporter.artifact_path(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn exported_mission_reflects_the_baseline_when_present() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("mission.yaml"),
            "mission:\n  orbit: SSO\n",
        )
        .unwrap();
        let exporter = exporter_in(tmp.path());

        let result = exporter.export(&demo_input()).unwrap();
        let text =
            std::fs::read_to_string(exporter.artifact_path(&result.mission).unwrap()).unwrap();
        let doc: Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(doc["mission"]["orbit"], "SSO");
        assert_eq!(doc["mission"]["intent"], "demo");
        assert_eq!(doc["study"]["notes"], "Generated by ConOps Builder v2");
    }

    #[test]
    fn artifact_path_refuses_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let exporter = exporter_in(tmp.path());
        exporter.export(&demo_input()).unwrap();

        assert!(exporter.artifact_path("../mission.yaml").is_none());
        assert!(exporter.artifact_path("a/b.yaml").is_none());
    }
}
